//! PRG images.
//!
//! A PRG file is the simplest C64 binary format: a 2-byte little-endian
//! load address followed by the data bytes.

use crate::address_space::AddressSpace;
use crate::error::PrgError;

/// Largest payload that fits in RAM without overlapping itself.
const MAX_PAYLOAD: usize = 0x10000;

/// A parsed PRG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prg {
    load_address: u16,
    data: Vec<u8>,
}

impl Prg {
    /// Split `bytes` into load address and payload.
    ///
    /// # Errors
    ///
    /// Returns [`PrgError::TooShort`] unless there is a header and at least
    /// one data byte, and [`PrgError::TooLong`] if the payload would wrap
    /// past its own start.
    pub fn parse(bytes: &[u8]) -> Result<Self, PrgError> {
        if bytes.len() < 3 {
            return Err(PrgError::TooShort { len: bytes.len() });
        }
        if bytes.len() - 2 > MAX_PAYLOAD {
            return Err(PrgError::TooLong {
                len: bytes.len() - 2,
            });
        }

        Ok(Self {
            load_address: u16::from(bytes[0]) | (u16::from(bytes[1]) << 8),
            data: bytes[2..].to_vec(),
        })
    }

    #[must_use]
    pub fn load_address(&self) -> u16 {
        self.load_address
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// First address after the payload.
    #[must_use]
    pub fn end_address(&self) -> u16 {
        self.load_address.wrapping_add(self.data.len() as u16)
    }

    /// Copy the payload into RAM at its load address. Returns the load address.
    pub fn load_into(&self, space: &mut AddressSpace) -> u16 {
        space.write_ram_block(self.load_address, &self.data);
        self.load_address
    }
}
