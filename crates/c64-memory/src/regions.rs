//! Static decode of the 16-bit address space.
//!
//! | Pages         | Region                                   |
//! |---------------|------------------------------------------|
//! | $00           | Zero page (processor port at $00/$01)    |
//! | $A0-$BF       | BASIC ROM window                         |
//! | $D0-$D3       | VIC-II registers                         |
//! | $D4           | SID registers                            |
//! | $DC           | CIA1 registers                           |
//! | $DD           | CIA2 registers                           |
//! | $E0-$FF       | Kernal ROM window                        |
//! | anything else | RAM                                      |
//!
//! The $D000-$DFFF block is also the character ROM / I/O bank slot, but
//! only the chip pages above are routed; the rest of that block is plain
//! RAM to the CPU whatever the bank configuration says.

/// Processor port data direction register.
pub const DATA_DIRECTION: u16 = 0x0000;
/// Processor port data register: the bank-switching latch.
pub const BANK_CONTROL: u16 = 0x0001;

/// Value stored at [`DATA_DIRECTION`] during construction.
pub const DEFAULT_DATA_DIRECTION: u8 = 0x2F;

/// RAM address that triggers payload injection when $FF is written.
pub const PATCH_TRIGGER: u16 = 0x0139;
/// Value that arms [`PATCH_TRIGGER`].
pub const PATCH_TRIGGER_VALUE: u8 = 0xFF;

pub const BASIC_BASE: u16 = 0xA000;
pub const CHAR_BASE: u16 = 0xD000;
pub const KERNAL_BASE: u16 = 0xE000;

/// Register-select masks applied before a chip sees the offset.
pub const VIC_REGISTER_MASK: u16 = 0x7F;
pub const CIA_REGISTER_MASK: u16 = 0x0F;
pub const SID_REGISTER_MASK: u16 = 0xFF;

/// Address class of a CPU access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ZeroPage,
    Vic,
    Sid,
    Cia1,
    Cia2,
    Basic,
    Kernal,
    Ram,
}

impl Region {
    /// Classify `addr` by its page.
    #[must_use]
    pub const fn classify(addr: u16) -> Self {
        match addr >> 8 {
            0x00 => Region::ZeroPage,
            0xD0..=0xD3 => Region::Vic,
            0xD4 => Region::Sid,
            0xDC => Region::Cia1,
            0xDD => Region::Cia2,
            0xA0..=0xBF => Region::Basic,
            0xE0..=0xFF => Region::Kernal,
            _ => Region::Ram,
        }
    }

    /// Whether the region's contents depend on the bank configuration.
    #[must_use]
    pub const fn is_switched(self) -> bool {
        !matches!(self, Region::ZeroPage | Region::Ram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_edges() {
        assert_eq!(Region::classify(0x00FF), Region::ZeroPage);
        assert_eq!(Region::classify(0x0100), Region::Ram);
        assert_eq!(Region::classify(0x9FFF), Region::Ram);
        assert_eq!(Region::classify(0xA000), Region::Basic);
        assert_eq!(Region::classify(0xBFFF), Region::Basic);
        assert_eq!(Region::classify(0xC000), Region::Ram);
        assert_eq!(Region::classify(0xD000), Region::Vic);
        assert_eq!(Region::classify(0xD3FF), Region::Vic);
        assert_eq!(Region::classify(0xD400), Region::Sid);
        assert_eq!(Region::classify(0xD4FF), Region::Sid);
        assert_eq!(Region::classify(0xD500), Region::Ram);
        assert_eq!(Region::classify(0xD800), Region::Ram);
        assert_eq!(Region::classify(0xDC00), Region::Cia1);
        assert_eq!(Region::classify(0xDD0F), Region::Cia2);
        assert_eq!(Region::classify(0xDE00), Region::Ram);
        assert_eq!(Region::classify(0xDFFF), Region::Ram);
        assert_eq!(Region::classify(0xE000), Region::Kernal);
        assert_eq!(Region::classify(0xFFFF), Region::Kernal);
    }

    #[test]
    fn trigger_is_plain_ram() {
        assert_eq!(Region::classify(PATCH_TRIGGER), Region::Ram);
        assert!(!Region::classify(PATCH_TRIGGER).is_switched());
    }
}
