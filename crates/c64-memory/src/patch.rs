//! Fixed-offset ROM patches.
//!
//! A patch is a list of `(offset, value)` pairs written into the ROM plane
//! in one pass. The stock set targets the standard C64 BASIC/Kernal
//! layout; a different ROM revision needs a different set, which can be
//! supplied as JSON:
//!
//! ```json
//! { "patches": [ { "name": "demo", "bytes": [ { "offset": 60335, "value": 91 } ] } ] }
//! ```
//!
//! # Stock patches
//!
//! - Keyboard: remaps a few entries in the unshifted ($EB81) and shifted
//!   ($EBC2) decode tables so a PC keyboard layout produces the expected
//!   PETSCII codes.
//! - LOAD ($F4C4) and SAVE ($F605): replace the serial-bus protocol with a
//!   request to an external storage driver. The routine stores a command
//!   at $02 (4 = load, 5 = save), checks the status byte at $90 and
//!   returns to the caller.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::address_space::AddressSpace;
use crate::error::ConfigError;

/// Kernal keyboard decode table, unshifted keys.
pub const KEYBOARD_TABLE: u16 = 0xEB81;
/// Kernal keyboard decode table, shifted keys.
pub const KEYBOARD_TABLE_SHIFTED: u16 = 0xEBC2;
/// Inside the Kernal LOAD-from-serial routine (which starts at $F4B8).
pub const KERNAL_LOAD_HOOK: u16 = 0xF4C4;
/// Inside the Kernal SAVE-to-serial routine.
pub const KERNAL_SAVE_HOOK: u16 = 0xF605;

/// (table index, PETSCII code)
const KEYBOARD_REMAP: [(u8, u8); 4] = [
    (46, 0x5B), // [
    (49, 0x5D), // ]
    (50, 0x27), // '
    (45, 0x3B), // ;
];

const KEYBOARD_REMAP_SHIFTED: [(u8, u8); 9] = [
    (59, 0x40), // SHIFT-2 → @
    (19, 0x5E), // SHIFT-6 → ^
    (24, 0x26), // SHIFT-7 → &
    (27, 0x2A), // SHIFT-8 → *
    (32, 0x28), // SHIFT-9 → (
    (35, 0x29), // SHIFT-0 → )
    (50, 0x22), // "
    (45, 0x3A), // :
    (53, 0x2B), // +
];

#[rustfmt::skip]
const LOAD_REDIRECT: [u8; 20] = [
    0xA9, 0x04,       // LDA #$04
    0x8D, 0x02, 0x00, // STA $0002     request load
    0xA5, 0x90,       // LDA $90       status
    0x4A,             // LSR
    0x4A,             // LSR
    0xB0, 0x61,       // BCS $F530     FILE NOT FOUND
    0x20, 0xD2, 0xF5, // JSR $F5D2     print LOADING
    0x18,             // CLC
    0xA6, 0xAE,       // LDX $AE       end address lo
    0xA4, 0xAF,       // LDY $AF       end address hi
    0x60,             // RTS
];

#[rustfmt::skip]
const SAVE_REDIRECT: [u8; 7] = [
    0xA9, 0x05,       // LDA #$05
    0x8D, 0x02, 0x00, // STA $0002     request save
    0x18,             // CLC
    0x60,             // RTS
];

/// One byte to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchByte {
    pub offset: u16,
    pub value: u8,
}

/// A named group of byte overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub name: String,
    pub bytes: Vec<PatchByte>,
}

impl Patch {
    /// Consecutive bytes starting at `base`.
    #[must_use]
    pub fn sequence(name: &str, base: u16, code: &[u8]) -> Self {
        let bytes = code
            .iter()
            .enumerate()
            .map(|(i, &value)| PatchByte {
                offset: base.wrapping_add(i as u16),
                value,
            })
            .collect();
        Self {
            name: name.to_string(),
            bytes,
        }
    }

    /// Entries of a lookup table at `table`, given as (index, value).
    #[must_use]
    pub fn table(name: &str, table: u16, entries: &[(u8, u8)]) -> Self {
        let bytes = entries
            .iter()
            .map(|&(index, value)| PatchByte {
                offset: table.wrapping_add(u16::from(index)),
                value,
            })
            .collect();
        Self {
            name: name.to_string(),
            bytes,
        }
    }
}

/// Ordered list of patches applied to the ROM plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSet {
    pub patches: Vec<Patch>,
}

impl PatchSet {
    /// No patches: ROM images stay exactly as supplied.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keyboard remap plus LOAD/SAVE redirection for the stock ROMs.
    #[must_use]
    pub fn stock() -> Self {
        Self {
            patches: vec![
                Patch::table("keyboard", KEYBOARD_TABLE, &KEYBOARD_REMAP),
                Patch::table("keyboard-shifted", KEYBOARD_TABLE_SHIFTED, &KEYBOARD_REMAP_SHIFTED),
                Patch::sequence("kernal-load", KERNAL_LOAD_HOOK, &LOAD_REDIRECT),
                Patch::sequence("kernal-save", KERNAL_SAVE_HOOK, &SAVE_REDIRECT),
            ],
        }
    }

    /// Parse a patch set from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PatchSet`] if the JSON does not describe a
    /// patch set.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write every patch byte into the ROM plane, in order.
    pub fn apply(&self, space: &mut AddressSpace) {
        for patch in &self.patches {
            for byte in &patch.bytes {
                space.write_rom(byte.offset, byte.value);
            }
            info!("[ROM] patch '{}': {} bytes", patch.name, patch.bytes.len());
        }
    }
}
