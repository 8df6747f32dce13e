/// A bit position inside a byte-wide port register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// Panics if `bit` is not in `0..8`. In a `const` this is a build error.
    pub const fn new(bit: u8) -> Self {
        assert!(bit < 8, "port registers are 8 bits wide");
        Self(bit)
    }

    pub const fn bit(self) -> u8 {
        self.0
    }

    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_matches_bit() {
        assert_eq!(Pin::new(0).mask(), 0x01);
        assert_eq!(Pin::new(1).mask(), 0x02);
        assert_eq!(Pin::new(7).mask(), 0x80);
        assert_eq!(Pin::new(5).bit(), 5);
    }

    #[test]
    #[should_panic(expected = "8 bits wide")]
    fn rejects_bit_past_register_width() {
        Pin::new(8);
    }
}
