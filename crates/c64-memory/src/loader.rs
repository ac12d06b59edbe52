//! ROM loading and patching.
//!
//! Startup order is fixed: [`Loader::load`], then [`Loader::patch_roms`],
//! both before the first guest instruction. Patch offsets assume the
//! stock ROM layout. [`Loader::patch_ram`] can run at any time after that.

use crate::address_space::AddressSpace;
use crate::patch::PatchSet;
use crate::payload::RamPayloads;
use crate::rom::RomSet;

/// Everything that gets written into the planes from outside the bus.
pub struct Loader {
    roms: RomSet,
    patches: PatchSet,
    payloads: RamPayloads,
}

impl Loader {
    #[must_use]
    pub fn new(roms: RomSet, patches: PatchSet, payloads: RamPayloads) -> Self {
        Self {
            roms,
            patches,
            payloads,
        }
    }

    /// Copy the ROM images into the ROM plane.
    pub fn load(&self, space: &mut AddressSpace) {
        self.roms.load(space);
    }

    /// Apply the patch set to the loaded ROM plane.
    pub fn patch_roms(&self, space: &mut AddressSpace) {
        self.patches.apply(space);
    }

    /// Install the RAM payloads.
    pub fn patch_ram(&self, space: &mut AddressSpace) {
        self.payloads.apply(space);
    }
}
