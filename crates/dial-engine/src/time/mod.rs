//! Periodic redraw scheduling.
//!
//! The runtime owns one [`RepeatingTimer`] per window and feeds it the
//! current `Instant`; the timer itself never reads the system clock, which
//! keeps it deterministic under test.

mod timer;

pub use timer::RepeatingTimer;
