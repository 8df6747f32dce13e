//! Compile-time settings.

use crate::Pin;

/// Pin 1 of the port, the same bit on both the direction and output register.
pub const LED: Pin = Pin::new(1);

/// Length of each of the two waits in one cycle.
pub const DELAY_MS: u32 = 3000;
