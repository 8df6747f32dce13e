//! Byte-wide views of GPIOA for the blink loop.
//!
//! Only pins 0..8 are reachable, which is all a [`Pin`] can name.

use blink_loop::{Pin, Register};
use stm32f4xx_hal::pac;

/// MODER value for general purpose output.
const MODE_OUTPUT: u32 = 0b01;
const MODE_MASK: u32 = 0b11;

/// Bit `n` is set when pin `n` is in output mode.
pub struct Direction<'a> {
    gpio: &'a pac::GPIOA,
}

impl<'a> Direction<'a> {
    pub fn new(gpio: &'a pac::GPIOA) -> Self {
        Self { gpio }
    }
}

impl Register for Direction<'_> {
    fn read(&self) -> u8 {
        let moder = self.gpio.moder().read().bits();
        (0..8u32)
            .filter(|n| (moder >> (2 * n)) & MODE_MASK == MODE_OUTPUT)
            .fold(0, |acc, n| acc | 1u8 << n)
    }

    fn set_bit(&mut self, pin: Pin) {
        let shift = 2 * u32::from(pin.bit());
        self.gpio.moder().modify(|r, w| unsafe {
            w.bits((r.bits() & !(MODE_MASK << shift)) | (MODE_OUTPUT << shift))
        });
    }

    /// Returns the pin to input mode.
    fn clear_bit(&mut self, pin: Pin) {
        let shift = 2 * u32::from(pin.bit());
        self.gpio
            .moder()
            .modify(|r, w| unsafe { w.bits(r.bits() & !(MODE_MASK << shift)) });
    }
}

/// Low byte of ODR. Writes go through BSRR, so each one is a single-bit
/// atomic set or reset.
pub struct Output<'a> {
    gpio: &'a pac::GPIOA,
}

impl<'a> Output<'a> {
    pub fn new(gpio: &'a pac::GPIOA) -> Self {
        Self { gpio }
    }
}

impl Register for Output<'_> {
    fn read(&self) -> u8 {
        self.gpio.odr().read().bits() as u8
    }

    fn set_bit(&mut self, pin: Pin) {
        self.gpio
            .bsrr()
            .write(|w| unsafe { w.bits(u32::from(pin.mask())) });
    }

    fn clear_bit(&mut self, pin: Pin) {
        self.gpio
            .bsrr()
            .write(|w| unsafe { w.bits(u32::from(pin.mask()) << 16) });
    }
}
