//! Memory as the VIC-II sees it.
//!
//! The VIC-II has 14 address lines, so it sees 16K at a time; CIA2 supplies
//! the two missing bits as a bank base. It always reads RAM, ignoring the
//! CPU bank configuration, with one exception: the character ROM appears
//! at $1000-$1FFF and $9000-$9FFF (banks 0 and 2).

use crate::address_space::AddressSpace;
use crate::regions::CHAR_BASE;

/// Mask of the VIC-II's 14 address lines.
pub const VIC_ADDRESS_MASK: u16 = 0x3FFF;

/// Whether the VIC-II sees character ROM at `full_addr`.
#[must_use]
pub const fn char_rom_visible(full_addr: u16) -> bool {
    matches!(full_addr, 0x1000..=0x1FFF | 0x9000..=0x9FFF)
}

/// Read-only view for one VIC-II bank.
pub struct VicView<'a> {
    space: &'a AddressSpace,
    base: u16,
}

impl<'a> VicView<'a> {
    #[must_use]
    pub fn new(space: &'a AddressSpace, base: u16) -> Self {
        Self { space, base }
    }

    /// Read at the VIC-II's local address; bits above 13 are dropped.
    #[must_use]
    pub fn read_byte(&self, local: u16) -> u8 {
        let full = self.base.wrapping_add(local & VIC_ADDRESS_MASK);
        if char_rom_visible(full) {
            self.space.read_rom(CHAR_BASE + (full & 0x0FFF))
        } else {
            self.space.read_ram(full)
        }
    }
}
