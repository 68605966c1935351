//! Virtual on-screen joystick for touch displays.
//!
//! A stick handle is dragged inside a circular base; every accepted drag
//! step is reported to a [`DisplacementSink`](joystick::DisplacementSink)
//! as the raw incremental vector, and releasing the touch snaps the stick
//! back to the center.
//!
//! This library holds the pure logic and builds on the host:
//! `cargo test` runs every unit and integration test without hardware.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod joystick;

#[cfg(feature = "graphics")]
pub mod ui;

pub use error::Error;
pub use geometry::{Align, Offset, Rect};
pub use input::{InputRouter, PointerEvent, PointerTarget, PointerTracker, TrackedEvent};
pub use joystick::{
    DisplacementSink, DragState, Joystick, JoystickConfig, JoystickInstance, NoSink, Outcome,
};
