//! Pointer input - from raw touch samples to widget events.
//!
//! [`PointerTracker`] turns polled touch samples into press / pressing /
//! release events carrying the incremental motion vector, and
//! [`InputRouter`] delivers them to the element that captured the press.

pub mod ft5x06;

use crate::geometry::{Offset, Rect};
use crate::joystick::Outcome;

/// One pointer event as seen by a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerEvent {
    /// The pointer went down on the element.
    PressStart,
    /// The pointer is still down. Carries its motion since the previous
    /// event, or `None` when no pointer source is active.
    Pressing(Option<Offset>),
    /// The pointer was lifted.
    Released,
}

/// An element that can capture the pointer.
pub trait PointerTarget {
    /// Returns `true` when a press at `point` (screen pixels) lands on
    /// this element.
    fn hit(&self, point: Offset) -> bool;

    fn handle(&mut self, event: PointerEvent) -> Outcome;
}

/// A pointer event together with the screen point it happened at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackedEvent {
    pub event: PointerEvent,
    pub at: Offset,
}

/// Single-pointer tracker over polled touch samples.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    bounds: Rect,
    last: Option<Offset>,
}

impl PointerTracker {
    /// Samples are clamped into `bounds` (normally the whole display).
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, last: None }
    }

    /// Returns `true` while a pointer is down.
    pub fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    /// Feed one sample; `None` means nothing touches the panel.
    pub fn update(&mut self, sample: Option<Offset>) -> Option<TrackedEvent> {
        let sample = sample.map(|p| self.bounds.clamp(p));

        match (self.last, sample) {
            (None, None) => None,
            (None, Some(p)) => {
                self.last = Some(p);
                Some(TrackedEvent {
                    event: PointerEvent::PressStart,
                    at: p,
                })
            }
            (Some(prev), Some(p)) => {
                self.last = Some(p);
                Some(TrackedEvent {
                    event: PointerEvent::Pressing(Some(p - prev)),
                    at: p,
                })
            }
            (Some(prev), None) => {
                self.last = None;
                Some(TrackedEvent {
                    event: PointerEvent::Released,
                    at: prev,
                })
            }
        }
    }
}

/// Routes tracked events to the target that captured the press.
///
/// Targets are passed on every call, so the router holds only the index
/// of the captured one. A press on no target is never captured, and
/// events without a captured target are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    captured: Option<usize>,
}

impl InputRouter {
    pub const fn new() -> Self {
        Self { captured: None }
    }

    pub fn captured(&self) -> Option<usize> {
        self.captured
    }

    /// Deliver `tracked` and return the receiving target's index with its
    /// outcome, or `None` when nobody received it.
    pub fn dispatch(
        &mut self,
        targets: &mut [&mut dyn PointerTarget],
        tracked: TrackedEvent,
    ) -> Option<(usize, Outcome)> {
        match tracked.event {
            PointerEvent::PressStart => {
                let index = targets.iter().position(|t| t.hit(tracked.at))?;
                self.captured = Some(index);
                let outcome = targets[index].handle(PointerEvent::PressStart);
                Some((index, outcome))
            }
            PointerEvent::Pressing(_) => {
                let index = self.captured?;
                let Some(target) = targets.get_mut(index) else {
                    self.captured = None;
                    return None;
                };
                Some((index, target.handle(tracked.event)))
            }
            PointerEvent::Released => {
                let index = self.captured.take()?;
                let target = targets.get_mut(index)?;
                Some((index, target.handle(PointerEvent::Released)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 128, 64);

    #[test]
    fn tracker_emits_press_moves_and_release() {
        let mut t = PointerTracker::new(SCREEN);

        assert_eq!(t.update(None), None);

        let e = t.update(Some(Offset::new(10, 10))).unwrap();
        assert_eq!(e.event, PointerEvent::PressStart);
        assert_eq!(e.at, Offset::new(10, 10));
        assert!(t.is_pressed());

        let e = t.update(Some(Offset::new(14, 7))).unwrap();
        assert_eq!(e.event, PointerEvent::Pressing(Some(Offset::new(4, -3))));

        let e = t.update(Some(Offset::new(14, 7))).unwrap();
        assert_eq!(e.event, PointerEvent::Pressing(Some(Offset::ZERO)));

        let e = t.update(None).unwrap();
        assert_eq!(e.event, PointerEvent::Released);
        assert_eq!(e.at, Offset::new(14, 7));
        assert!(!t.is_pressed());

        assert_eq!(t.update(None), None);
    }

    #[test]
    fn tracker_clamps_samples_to_bounds() {
        let mut t = PointerTracker::new(SCREEN);
        let e = t.update(Some(Offset::new(500, -3))).unwrap();
        assert_eq!(e.at, Offset::new(127, 0));

        let e = t.update(Some(Offset::new(600, 20))).unwrap();
        assert_eq!(e.event, PointerEvent::Pressing(Some(Offset::new(0, 20))));
    }

    struct Pad {
        area: Rect,
        events: [Option<PointerEvent>; 4],
        count: usize,
    }

    impl Pad {
        fn new(area: Rect) -> Self {
            Self {
                area,
                events: [None; 4],
                count: 0,
            }
        }
    }

    impl PointerTarget for Pad {
        fn hit(&self, point: Offset) -> bool {
            self.area.contains(point)
        }

        fn handle(&mut self, event: PointerEvent) -> Outcome {
            if self.count < self.events.len() {
                self.events[self.count] = Some(event);
            }
            self.count += 1;
            Outcome::Ignored
        }
    }

    fn at(event: PointerEvent, x: i32, y: i32) -> TrackedEvent {
        TrackedEvent {
            event,
            at: Offset::new(x, y),
        }
    }

    #[test]
    fn router_sends_drag_to_captured_target_even_outside_it() {
        let mut left = Pad::new(Rect::new(0, 0, 64, 64));
        let mut right = Pad::new(Rect::new(64, 0, 64, 64));
        let mut router = InputRouter::new();

        {
            let mut targets: [&mut dyn PointerTarget; 2] = [&mut left, &mut right];
            let r = router.dispatch(&mut targets, at(PointerEvent::PressStart, 70, 5));
            assert_eq!(r.map(|(i, _)| i), Some(1));

            let moving = PointerEvent::Pressing(Some(Offset::new(-40, 0)));
            let r = router.dispatch(&mut targets, at(moving, 30, 5));
            assert_eq!(r.map(|(i, _)| i), Some(1));

            let r = router.dispatch(&mut targets, at(PointerEvent::Released, 30, 5));
            assert_eq!(r.map(|(i, _)| i), Some(1));
        }

        assert_eq!(left.count, 0);
        assert_eq!(right.count, 3);
        assert_eq!(right.events[2], Some(PointerEvent::Released));
        assert_eq!(router.captured(), None);
    }

    #[test]
    fn router_drops_events_without_capture() {
        let mut pad = Pad::new(Rect::new(0, 0, 10, 10));
        let mut router = InputRouter::new();
        let mut targets: [&mut dyn PointerTarget; 1] = [&mut pad];

        assert!(router
            .dispatch(&mut targets, at(PointerEvent::PressStart, 50, 50))
            .is_none());
        assert!(router
            .dispatch(
                &mut targets,
                at(PointerEvent::Pressing(Some(Offset::new(1, 1))), 51, 51)
            )
            .is_none());
        assert!(router
            .dispatch(&mut targets, at(PointerEvent::Released, 51, 51))
            .is_none());
    }

    #[test]
    fn router_forgets_capture_when_target_disappears() {
        let mut a = Pad::new(Rect::new(0, 0, 10, 10));
        let mut b = Pad::new(Rect::new(20, 0, 10, 10));
        let mut router = InputRouter::new();

        {
            let mut targets: [&mut dyn PointerTarget; 2] = [&mut a, &mut b];
            router.dispatch(&mut targets, at(PointerEvent::PressStart, 25, 5));
        }
        assert_eq!(router.captured(), Some(1));

        let mut targets: [&mut dyn PointerTarget; 1] = [&mut a];
        let moving = PointerEvent::Pressing(Some(Offset::new(1, 0)));
        assert!(router.dispatch(&mut targets, at(moving, 26, 5)).is_none());
        assert_eq!(router.captured(), None);
    }
}
