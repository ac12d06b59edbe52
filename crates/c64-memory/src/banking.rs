//! Bank switching driven by the processor port latch at $01.
//!
//! Only the three low latch bits are decoded:
//!
//! | HIRAM(1) | LORAM(0) | CHAREN(2) | $A000-$BFFF | $D000-$DFFF | $E000-$FFFF |
//! |----------|----------|-----------|-------------|-------------|-------------|
//! | 1        | 1        | 1         | BASIC       | I/O         | Kernal      |
//! | 1        | 1        | 0         | BASIC       | Char ROM    | Kernal      |
//! | 1        | 0        | 1         | RAM         | I/O         | Kernal      |
//! | 0        | 1        | 1         | RAM         | I/O         | RAM         |
//! | 0        | 0        | 1         | RAM         | RAM         | RAM         |
//! | x        | x        | 0         | (as above)  | Char ROM    | (as above)  |
//!
//! With CHAREN clear the $D000 slot is always character ROM, even when
//! both LORAM and HIRAM are clear.

use tracing::debug;

use crate::address_space::AddressSpace;
use crate::regions::BANK_CONTROL;

/// BASIC ROM select (with HIRAM).
pub const LORAM: u8 = 0x01;
/// Kernal ROM select.
pub const HIRAM: u8 = 0x02;
/// I/O (set) or character ROM (clear) in the $D000 slot.
pub const CHAREN: u8 = 0x04;

/// Latch value applied at power-on.
pub const DEFAULT_LATCH: u8 = LORAM | HIRAM | CHAREN;

/// What answers for a switched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankMode {
    Ram,
    Rom,
    Io,
}

/// Resolved mode of each switched slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankModes {
    pub basic: BankMode,
    pub kernal: BankMode,
    pub chario: BankMode,
}

impl BankModes {
    /// Decode a latch value. Bits other than LORAM/HIRAM/CHAREN are ignored.
    #[must_use]
    pub const fn decode(latch: u8) -> Self {
        let hiram = latch & HIRAM != 0;
        let loram = latch & LORAM != 0;
        let charen = latch & CHAREN != 0;

        let kernal = if hiram { BankMode::Rom } else { BankMode::Ram };
        let basic = if loram && hiram {
            BankMode::Rom
        } else {
            BankMode::Ram
        };
        let chario = if !charen {
            BankMode::Rom
        } else if loram || hiram {
            BankMode::Io
        } else {
            BankMode::Ram
        };

        Self {
            basic,
            kernal,
            chario,
        }
    }
}

/// Holds the mode table derived from the last latch write.
///
/// The latch byte itself lives in RAM at $01; the table is recomputed in
/// full from it on every write.
pub struct BankController {
    modes: BankModes,
}

impl BankController {
    /// Controller decoded from [`DEFAULT_LATCH`]. The latch byte is not
    /// stored until [`set_config`](Self::set_config) runs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modes: BankModes::decode(DEFAULT_LATCH),
        }
    }

    /// Apply a new latch value and store it verbatim at $01.
    ///
    /// The store goes straight to the RAM plane so it never re-enters the
    /// bus write path.
    pub fn set_config(&mut self, value: u8, space: &mut AddressSpace) {
        self.modes = BankModes::decode(value);
        space.write_ram(BANK_CONTROL, value);
        debug!(
            "[BANK] latch=${value:02X} basic={:?} kernal={:?} chario={:?}",
            self.modes.basic, self.modes.kernal, self.modes.chario
        );
    }

    #[must_use]
    pub const fn modes(&self) -> BankModes {
        self.modes
    }
}

impl Default for BankController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BankMode::{Io, Ram, Rom};

    #[test]
    fn decode_all_eight_configurations() {
        // (latch, kernal, basic, chario)
        let table = [
            (0b000, Ram, Ram, Rom),
            (0b001, Ram, Ram, Rom),
            (0b010, Rom, Ram, Rom),
            (0b011, Rom, Rom, Rom),
            (0b100, Ram, Ram, Ram),
            (0b101, Ram, Ram, Io),
            (0b110, Rom, Ram, Io),
            (0b111, Rom, Rom, Io),
        ];
        for (latch, kernal, basic, chario) in table {
            let modes = BankModes::decode(latch);
            assert_eq!(modes.kernal, kernal, "kernal for {latch:03b}");
            assert_eq!(modes.basic, basic, "basic for {latch:03b}");
            assert_eq!(modes.chario, chario, "chario for {latch:03b}");
        }
    }

    #[test]
    fn upper_latch_bits_ignored() {
        for latch in 0..=0xFFu8 {
            assert_eq!(BankModes::decode(latch), BankModes::decode(latch & 0x07));
        }
    }

    #[test]
    fn set_config_stores_raw_byte() {
        let mut space = AddressSpace::new();
        let mut banks = BankController::new();
        banks.set_config(0xF8, &mut space);
        assert_eq!(space.read_ram(BANK_CONTROL), 0xF8);
        assert_eq!(banks.modes(), BankModes::decode(0x00));
    }

    #[test]
    fn new_matches_default_latch() {
        let banks = BankController::new();
        assert_eq!(
            banks.modes(),
            BankModes {
                basic: Rom,
                kernal: Rom,
                chario: Io,
            }
        );
    }
}
