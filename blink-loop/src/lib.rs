//! Board-independent half of the slow-blink firmware.
//!
//! The loop only ever talks to two byte-wide registers and a blocking delay,
//! so it runs unchanged against real hardware or against simulated registers
//! on the host.

#![cfg_attr(not(test), no_std)]

pub mod blinker;
pub mod config;
pub mod pin;
pub mod register;

pub use blinker::Blinker;
pub use pin::Pin;
pub use register::{Mmio, Register};
