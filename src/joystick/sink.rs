//! Displacement sink - where accepted drag steps are reported.

/// Receives each accepted incremental drag step of a joystick.
///
/// Called synchronously from the event that produced the step, on the
/// same context that services pointer input. Implementations must return
/// promptly and never block.
pub trait DisplacementSink {
    fn on_displace(&mut self, id: u8, dx: i32, dy: i32);
}

impl<F> DisplacementSink for F
where
    F: FnMut(u8, i32, i32),
{
    fn on_displace(&mut self, id: u8, dx: i32, dy: i32) {
        self(id, dx, dy)
    }
}

/// A sink that discards every displacement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSink;

impl DisplacementSink for NoSink {
    fn on_displace(&mut self, _id: u8, _dx: i32, _dy: i32) {}
}
