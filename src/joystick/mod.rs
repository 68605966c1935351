//! Joystick widget core - instance data and the drag state machine.
//!
//! A joystick is a circular base with a stick handle inside it. Pointer
//! events move the handle; each accepted step is reported to the
//! displacement sink as the raw incremental vector, and releasing the
//! pointer snaps the handle back to the base center.
//!
//! ```text
//!   Idle --PressStart--> Dragging --Pressing(v)--> Dragging
//!     ^                      |
//!     +------Released--------+   (handle reset to (0, 0))
//! ```

pub mod containment;
pub mod sink;


use crate::error::Error;
use crate::geometry::{Align, Offset, Rect};
use crate::input::{PointerEvent, PointerTarget};

pub use sink::{DisplacementSink, NoSink};

/// Construction parameters of a joystick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Opaque identifier passed through to the sink.
    pub id: u8,
    /// Anchor of the base inside its parent.
    pub align: Align,
    /// Pixel offset of the base from its anchor.
    pub offset: Offset,
    pub base_radius: u16,
    pub stick_radius: u16,
}

impl JoystickConfig {
    pub const fn new(id: u8, base_radius: u16, stick_radius: u16) -> Self {
        Self {
            id,
            align: Align::Center,
            offset: Offset::ZERO,
            base_radius,
            stick_radius,
        }
    }

    pub const fn aligned(mut self, align: Align, offset: Offset) -> Self {
        self.align = align;
        self.offset = offset;
        self
    }
}

/// Per-widget data, fixed at construction.
pub struct JoystickInstance<S> {
    id: u8,
    base_radius: u16,
    stick_radius: u16,
    sink: Option<S>,
}

impl<S: DisplacementSink> JoystickInstance<S> {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn base_radius(&self) -> u16 {
        self.base_radius
    }

    pub fn stick_radius(&self) -> u16 {
        self.stick_radius
    }

    fn notify(&mut self, v: Offset) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_displace(self.id, v.x, v.y);
        }
    }
}

/// The draggable handle. Owns its position and, exclusively, the
/// joystick's instance data; both go away together.
pub struct StickHandle<S> {
    /// Offset from the base center.
    position: Offset,
    instance: JoystickInstance<S>,
}

/// Whether the handle currently holds the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DragState {
    Idle,
    Dragging,
}

/// What a single pointer event did to the joystick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The handle captured the pointer.
    Captured,
    /// The step was accepted; the handle is now at this position.
    Moved(Offset),
    /// The candidate position was outside the limit; nothing changed.
    Rejected(Offset),
    /// The handle went back to the center.
    Reset,
    /// The event did not apply in the current state.
    Ignored,
}

/// A joystick: base region plus stick handle.
pub struct Joystick<S> {
    base: Rect,
    stick: StickHandle<S>,
    state: DragState,
}

impl Joystick<NoSink> {
    /// Build a joystick nobody listens to.
    pub fn without_sink(parent: Rect, config: JoystickConfig) -> Result<Self, Error> {
        Joystick::new(parent, config, None)
    }
}

impl<S: DisplacementSink> Joystick<S> {
    /// Place the base inside `parent`, center the stick in it and bind a
    /// fresh instance to the stick.
    ///
    /// Fails with [`Error::ZeroRadius`] when either radius is zero. A stick
    /// too large for its base is accepted but can never move.
    pub fn new(parent: Rect, config: JoystickConfig, sink: Option<S>) -> Result<Self, Error> {
        if config.base_radius == 0 || config.stick_radius == 0 {
            warn!(
                "Joystick {}: zero radius (base={}, stick={})",
                config.id,
                config.base_radius,
                config.stick_radius
            );
            return Err(Error::ZeroRadius);
        }

        if containment::scaled_limit(config.base_radius, config.stick_radius) <= 0 {
            warn!(
                "Joystick {}: stick radius {} leaves no room in base radius {}",
                config.id,
                config.stick_radius,
                config.base_radius
            );
        }

        let diameter = config.base_radius as u32 * 2;
        let base = config
            .align
            .place(parent, diameter, diameter, config.offset);

        info!(
            "Joystick {}: base r={} at ({}, {}), stick r={}",
            config.id,
            config.base_radius,
            base.x,
            base.y,
            config.stick_radius
        );

        Ok(Self {
            base,
            stick: StickHandle {
                position: Offset::ZERO,
                instance: JoystickInstance {
                    id: config.id,
                    base_radius: config.base_radius,
                    stick_radius: config.stick_radius,
                    sink,
                },
            },
            state: DragState::Idle,
        })
    }

    pub fn id(&self) -> u8 {
        self.stick.instance.id
    }

    pub fn instance(&self) -> &JoystickInstance<S> {
        &self.stick.instance
    }

    pub fn sink(&self) -> Option<&S> {
        self.stick.instance.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.stick.instance.sink.as_mut()
    }

    /// Bounds of the base element on screen.
    pub fn base_rect(&self) -> Rect {
        self.base
    }

    pub fn base_center(&self) -> Offset {
        self.base.center()
    }

    /// Handle position relative to the base center.
    pub fn position(&self) -> Offset {
        self.stick.position
    }

    /// Handle center on screen.
    pub fn stick_center(&self) -> Offset {
        self.base_center() + self.stick.position
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> Outcome {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::PressStart) => {
                self.state = DragState::Dragging;
                debug!("Joystick {}: captured", self.id());
                Outcome::Captured
            }
            (DragState::Dragging, PointerEvent::PressStart) => Outcome::Ignored,
            (DragState::Dragging, PointerEvent::Pressing(Some(v))) => self.drag(v),
            // No active pointer, or a drag that never started on the handle.
            (DragState::Dragging, PointerEvent::Pressing(None))
            | (DragState::Idle, PointerEvent::Pressing(_)) => Outcome::Ignored,
            (_, PointerEvent::Released) => self.release(),
        }
    }

    fn drag(&mut self, v: Offset) -> Outcome {
        let candidate = self.stick.position + v;
        let instance = &self.stick.instance;

        if !containment::accepts(instance.base_radius, instance.stick_radius, candidate) {
            trace!(
                "Joystick {}: reject ({}, {})",
                instance.id,
                candidate.x,
                candidate.y
            );
            return Outcome::Rejected(candidate);
        }

        self.stick.position = candidate;
        self.stick.instance.notify(v);
        Outcome::Moved(candidate)
    }

    fn release(&mut self) -> Outcome {
        if self.state == DragState::Dragging {
            debug!("Joystick {}: released", self.id());
        }
        self.stick.position = Offset::ZERO;
        self.state = DragState::Idle;
        Outcome::Reset
    }
}

impl<S: DisplacementSink> PointerTarget for Joystick<S> {
    fn hit(&self, point: Offset) -> bool {
        let r = self.stick.instance.stick_radius as i64;
        (point - self.stick_center()).squared_len() <= r * r
    }

    fn handle(&mut self, event: PointerEvent) -> Outcome {
        Joystick::handle(self, event)
    }
}
