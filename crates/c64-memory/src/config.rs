//! C64 memory configuration: ROM images, patches and payloads.

use crate::banking::DEFAULT_LATCH;
use crate::patch::PatchSet;
use crate::payload::RamPayloads;

/// Configuration for constructing a [`C64Bus`](crate::C64Bus).
pub struct C64Config {
    /// BASIC ROM (8,192 bytes).
    pub basic_rom: Vec<u8>,
    /// Character ROM (4,096 bytes).
    pub char_rom: Vec<u8>,
    /// Kernal ROM (8,192 bytes).
    pub kernal_rom: Vec<u8>,
    /// ROM patches applied after loading.
    pub patches: PatchSet,
    /// What the $0139 hook installs.
    pub payloads: RamPayloads,
    /// Latch written to $01 at power-on.
    pub initial_latch: u8,
}

impl C64Config {
    /// Stock patches, no payloads, default latch.
    #[must_use]
    pub fn new(basic_rom: Vec<u8>, char_rom: Vec<u8>, kernal_rom: Vec<u8>) -> Self {
        Self {
            basic_rom,
            char_rom,
            kernal_rom,
            patches: PatchSet::stock(),
            payloads: RamPayloads::none(),
            initial_latch: DEFAULT_LATCH,
        }
    }

    #[must_use]
    pub fn with_patches(mut self, patches: PatchSet) -> Self {
        self.patches = patches;
        self
    }

    #[must_use]
    pub fn with_payloads(mut self, payloads: RamPayloads) -> Self {
        self.payloads = payloads;
        self
    }
}
