//! The three stock ROM images and where they sit in the ROM plane.

use tracing::info;

use crate::address_space::AddressSpace;
use crate::error::{RomError, RomKind};
use crate::regions::{BASIC_BASE, CHAR_BASE, KERNAL_BASE};

pub const BASIC_ROM_SIZE: usize = 8192;
pub const CHAR_ROM_SIZE: usize = 4096;
pub const KERNAL_ROM_SIZE: usize = 8192;

/// Size-checked BASIC, character and Kernal images.
#[derive(Debug, Clone)]
pub struct RomSet {
    basic: Vec<u8>,
    chargen: Vec<u8>,
    kernal: Vec<u8>,
}

impl RomSet {
    /// Take ownership of the three images.
    ///
    /// # Errors
    ///
    /// Returns [`RomError::WrongSize`] for the first image whose length is
    /// wrong. The machine must not start in that case.
    pub fn new(basic: Vec<u8>, chargen: Vec<u8>, kernal: Vec<u8>) -> Result<Self, RomError> {
        check_size(RomKind::Basic, &basic, BASIC_ROM_SIZE)?;
        check_size(RomKind::Char, &chargen, CHAR_ROM_SIZE)?;
        check_size(RomKind::Kernal, &kernal, KERNAL_ROM_SIZE)?;
        Ok(Self {
            basic,
            chargen,
            kernal,
        })
    }

    /// Copy all three images into the ROM plane at their base addresses.
    pub fn load(&self, space: &mut AddressSpace) {
        space.write_rom_block(BASIC_BASE, &self.basic);
        space.write_rom_block(CHAR_BASE, &self.chargen);
        space.write_rom_block(KERNAL_BASE, &self.kernal);
        info!(
            "[ROM] BASIC at ${BASIC_BASE:04X}, chargen at ${CHAR_BASE:04X}, Kernal at ${KERNAL_BASE:04X}"
        );
    }
}

fn check_size(rom: RomKind, image: &[u8], expected: usize) -> Result<(), RomError> {
    if image.len() == expected {
        Ok(())
    } else {
        Err(RomError::WrongSize {
            rom,
            expected,
            actual: image.len(),
        })
    }
}
