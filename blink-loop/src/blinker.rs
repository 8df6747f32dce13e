use embedded_hal::delay::DelayNs;

use crate::config::DELAY_MS;
use crate::{Pin, Register};

/// Drives one output pin through the wait / low / wait cycle.
///
/// The pin is never driven high. Only the pin's bit in either register is
/// ever touched.
pub struct Blinker<D, O, T> {
    direction: D,
    output: O,
    delay: T,
    pin: Pin,
}

impl<D, O, T> Blinker<D, O, T>
where
    D: Register,
    O: Register,
    T: DelayNs,
{
    /// Marks `pin` as an output in `direction`. The output register is left
    /// as is until the first cycle.
    pub fn new(mut direction: D, output: O, delay: T, pin: Pin) -> Self {
        direction.set_bit(pin);

        #[cfg(feature = "defmt")]
        defmt::debug!("pin {} configured as output", pin);

        Self {
            direction,
            output,
            delay,
            pin,
        }
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    /// One pass of the loop body.
    pub fn cycle(&mut self) {
        self.delay.delay_ms(DELAY_MS);

        // Driving the pin high here is intentionally left out.
        self.output.clear_bit(self.pin);

        #[cfg(feature = "defmt")]
        defmt::trace!("pin {} low", self.pin);

        self.delay.delay_ms(DELAY_MS);
    }

    pub fn run(mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    pub fn release(self) -> (D, O, T) {
        (self.direction, self.output, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Byte(u8);

    impl Register for Byte {
        fn read(&self) -> u8 {
            self.0
        }

        fn set_bit(&mut self, pin: Pin) {
            self.0 |= pin.mask();
        }

        fn clear_bit(&mut self, pin: Pin) {
            self.0 &= !pin.mask();
        }
    }

    #[derive(Default)]
    struct Elapsed {
        ns: u64,
    }

    impl DelayNs for Elapsed {
        fn delay_ns(&mut self, ns: u32) {
            self.ns += u64::from(ns);
        }
    }

    #[test]
    fn new_only_touches_direction() {
        let blinker = Blinker::new(Byte(0x00), Byte(0xFF), Elapsed::default(), Pin::new(1));
        assert_eq!(blinker.pin(), Pin::new(1));

        let (direction, output, delay) = blinker.release();
        assert_eq!(direction.read(), 0x02);
        assert_eq!(output.read(), 0xFF);
        assert_eq!(delay.ns, 0);
    }

    #[test]
    fn cycle_waits_twice_and_clears() {
        let mut blinker =
            Blinker::new(Byte(0x00), Byte(0xFF), Elapsed::default(), Pin::new(1));
        blinker.cycle();

        let (_, output, delay) = blinker.release();
        assert_eq!(output.read(), 0xFD);
        assert_eq!(delay.ns, 2 * u64::from(DELAY_MS) * 1_000_000);
    }
}
