use core::ptr;

use crate::Pin;

/// A byte-wide, bit-addressable hardware register.
///
/// `set_bit` and `clear_bit` are read-modify-write updates of a single bit:
/// every other bit keeps the value it had when the update started. Accesses
/// happen in program order.
pub trait Register {
    fn read(&self) -> u8;

    fn set_bit(&mut self, pin: Pin);

    fn clear_bit(&mut self, pin: Pin);
}

impl<R: Register + ?Sized> Register for &mut R {
    fn read(&self) -> u8 {
        (**self).read()
    }

    fn set_bit(&mut self, pin: Pin) {
        (**self).set_bit(pin)
    }

    fn clear_bit(&mut self, pin: Pin) {
        (**self).clear_bit(pin)
    }
}

/// Memory-mapped byte register accessed with volatile loads and stores.
#[derive(Debug)]
pub struct Mmio {
    addr: *mut u8,
}

impl Mmio {
    /// # Safety
    ///
    /// `addr` must point to a readable and writable byte register that
    /// nothing else accesses for as long as the returned value lives.
    pub const unsafe fn new(addr: *mut u8) -> Self {
        Self { addr }
    }

    fn write(&mut self, value: u8) {
        // SAFETY: `new` guarantees exclusive access to a valid register.
        unsafe { ptr::write_volatile(self.addr, value) }
    }
}

impl Register for Mmio {
    fn read(&self) -> u8 {
        // SAFETY: `new` guarantees exclusive access to a valid register.
        unsafe { ptr::read_volatile(self.addr) }
    }

    fn set_bit(&mut self, pin: Pin) {
        let value = self.read() | pin.mask();
        self.write(value);
    }

    fn clear_bit(&mut self, pin: Pin) {
        let value = self.read() & !pin.mask();
        self.write(value);
    }
}
