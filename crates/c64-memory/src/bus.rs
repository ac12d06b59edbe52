//! C64 bus: bank-switched memory and I/O routing.
//!
//! Every CPU access goes through [`C64Bus::read_byte`] / [`C64Bus::write_byte`].
//! The address is classified by page (see [`crate::regions`]) and resolved
//! against the current bank modes to RAM, ROM, or a chip register.
//!
//! Reads and writes are not symmetric:
//!
//! - Writes never reach ROM. With the $D000 slot in ROM or RAM mode, chip
//!   windows store to RAM.
//! - SID reads are not routed to the chip; they return RAM.
//! - $01 is the bank latch. Writing it reconfigures the banks before
//!   anything else is decoded.
//! - Writing $FF to $0139 installs the RAM payloads after the store.
//!
//! A latch write takes effect on the very next access.

use emu_core::{Bus, Peripheral, VicBankSource};
use tracing::{info, trace};

use crate::address_space::AddressSpace;
use crate::banking::{BankController, BankMode, BankModes};
use crate::config::C64Config;
use crate::error::ConfigError;
use crate::loader::Loader;
use crate::regions::{
    BANK_CONTROL, CIA_REGISTER_MASK, DATA_DIRECTION, DEFAULT_DATA_DIRECTION, PATCH_TRIGGER,
    PATCH_TRIGGER_VALUE, Region, SID_REGISTER_MASK, VIC_REGISTER_MASK,
};
use crate::rom::RomSet;
use crate::stub::{Cia2Port, RegisterFile};
use crate::vic_view::VicView;

/// The four memory-mapped chips.
pub struct IoChips<V, C1, C2, S> {
    pub vic: V,
    pub cia1: C1,
    pub cia2: C2,
    pub sid: S,
}

/// Chip set made of [`RegisterFile`]s and a [`Cia2Port`].
pub type StubChips = IoChips<RegisterFile<128>, RegisterFile<16>, Cia2Port, RegisterFile<256>>;

/// A bus wired to [`StubChips`].
pub type StubBus = C64Bus<RegisterFile<128>, RegisterFile<16>, Cia2Port, RegisterFile<256>>;

impl StubChips {
    #[must_use]
    pub fn stub() -> Self {
        Self {
            vic: RegisterFile::new(),
            cia1: RegisterFile::new(),
            cia2: Cia2Port::new(),
            sid: RegisterFile::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chip {
    Vic,
    Cia1,
    Cia2,
    Sid,
}

/// Where a CPU access lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Ram,
    Rom,
    Register(Chip, u8),
}

/// The C64 address space with its bank logic and chips.
///
/// Owns all memory state, so several machines can coexist.
pub struct C64Bus<V, C1, C2, S> {
    space: AddressSpace,
    banks: BankController,
    loader: Loader,
    pub chips: IoChips<V, C1, C2, S>,
    /// Times the RAM payloads have been installed.
    ram_patches: u64,
}

impl<V, C1, C2, S> C64Bus<V, C1, C2, S>
where
    V: Peripheral,
    C1: Peripheral,
    C2: VicBankSource,
    S: Peripheral,
{
    /// Build the bus: power-on RAM, load and patch ROMs, apply the initial
    /// latch, then set the port direction register.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rom`] if any ROM image has the wrong size.
    pub fn new(config: C64Config, chips: IoChips<V, C1, C2, S>) -> Result<Self, ConfigError> {
        let roms = RomSet::new(config.basic_rom, config.char_rom, config.kernal_rom)?;
        let loader = Loader::new(roms, config.patches, config.payloads);

        let mut space = AddressSpace::new();
        loader.load(&mut space);
        loader.patch_roms(&mut space);

        let mut banks = BankController::new();
        banks.set_config(config.initial_latch, &mut space);
        space.write_ram(DATA_DIRECTION, DEFAULT_DATA_DIRECTION);

        Ok(Self {
            space,
            banks,
            loader,
            chips,
            ram_patches: 0,
        })
    }

    fn read_target(&self, addr: u16) -> Target {
        let modes = self.banks.modes();
        let io = modes.chario == BankMode::Io;
        match Region::classify(addr) {
            Region::Vic => match modes.chario {
                BankMode::Io => Target::Register(Chip::Vic, (addr & VIC_REGISTER_MASK) as u8),
                BankMode::Rom => Target::Rom,
                BankMode::Ram => Target::Ram,
            },
            Region::Cia1 if io => Target::Register(Chip::Cia1, (addr & CIA_REGISTER_MASK) as u8),
            Region::Cia2 if io => Target::Register(Chip::Cia2, (addr & CIA_REGISTER_MASK) as u8),
            Region::Basic if modes.basic == BankMode::Rom => Target::Rom,
            Region::Kernal if modes.kernal == BankMode::Rom => Target::Rom,
            // SID reads fall through to RAM
            _ => Target::Ram,
        }
    }

    fn write_target(&self, addr: u16) -> Target {
        if self.banks.modes().chario != BankMode::Io {
            return Target::Ram;
        }
        match Region::classify(addr) {
            Region::Vic => Target::Register(Chip::Vic, (addr & VIC_REGISTER_MASK) as u8),
            Region::Cia1 => Target::Register(Chip::Cia1, (addr & CIA_REGISTER_MASK) as u8),
            Region::Cia2 => Target::Register(Chip::Cia2, (addr & CIA_REGISTER_MASK) as u8),
            Region::Sid => Target::Register(Chip::Sid, (addr & SID_REGISTER_MASK) as u8),
            _ => Target::Ram,
        }
    }

    fn read_register(&mut self, chip: Chip, offset: u8) -> u8 {
        let value = match chip {
            Chip::Vic => self.chips.vic.read_register(offset),
            Chip::Cia1 => self.chips.cia1.read_register(offset),
            Chip::Cia2 => self.chips.cia2.read_register(offset),
            Chip::Sid => self.chips.sid.read_register(offset),
        };
        trace!("[IO] {chip:?} read ${offset:02X} = ${value:02X}");
        value
    }

    fn write_register(&mut self, chip: Chip, offset: u8, value: u8) {
        trace!("[IO] {chip:?} write ${offset:02X} = ${value:02X}");
        match chip {
            Chip::Vic => self.chips.vic.write_register(offset, value),
            Chip::Cia1 => self.chips.cia1.write_register(offset, value),
            Chip::Cia2 => self.chips.cia2.write_register(offset, value),
            Chip::Sid => self.chips.sid.write_register(offset, value),
        }
    }

    /// CPU read with banking and I/O.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        match self.read_target(addr) {
            Target::Ram => self.space.read_ram(addr),
            Target::Rom => self.space.read_rom(addr),
            Target::Register(chip, offset) => self.read_register(chip, offset),
        }
    }

    /// CPU write with banking and I/O.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        if addr == BANK_CONTROL {
            self.banks.set_config(value, &mut self.space);
            return;
        }

        match self.write_target(addr) {
            Target::Register(chip, offset) => self.write_register(chip, offset, value),
            Target::Ram | Target::Rom => {
                self.space.write_ram(addr, value);
                if addr == PATCH_TRIGGER && value == PATCH_TRIGGER_VALUE {
                    self.patch_ram();
                }
            }
        }
    }

    /// Little-endian word read; each byte is decoded on its own.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        Bus::read_word(self, addr)
    }

    /// Little-endian word write; each byte is decoded on its own.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        Bus::write_word(self, addr, value);
    }

    /// Side-effect-free read: banking applies, but chip windows in I/O
    /// mode return the RAM underneath instead of touching the chip.
    #[must_use]
    pub fn peek(&self, addr: u16) -> u8 {
        match self.read_target(addr) {
            Target::Rom => self.space.read_rom(addr),
            Target::Ram | Target::Register(..) => self.space.read_ram(addr),
        }
    }

    /// Byte as fetched by the VIC-II at its 14-bit local address.
    #[must_use]
    pub fn vic_read_byte(&self, addr: u16) -> u8 {
        VicView::new(&self.space, self.chips.cia2.vic_base_address()).read_byte(addr)
    }

    /// Install the RAM payloads now. Also runs when $FF is written to $0139.
    pub fn patch_ram(&mut self) {
        self.loader.patch_ram(&mut self.space);
        self.ram_patches += 1;
        info!("[PATCH] RAM payloads installed ({} total)", self.ram_patches);
    }
}

impl<V, C1, C2, S> C64Bus<V, C1, C2, S> {
    /// RAM read, no banking or I/O.
    #[must_use]
    pub fn read_byte_no_io(&self, addr: u16) -> u8 {
        self.space.read_ram(addr)
    }

    /// RAM write, no banking or I/O. Writing $01 here does not rebank.
    pub fn write_byte_no_io(&mut self, addr: u16, value: u8) {
        self.space.write_ram(addr, value);
    }

    #[must_use]
    pub fn read_word_no_io(&self, addr: u16) -> u16 {
        let lo = self.space.read_ram(addr);
        let hi = self.space.read_ram(addr.wrapping_add(1));
        u16::from(lo) | (u16::from(hi) << 8)
    }

    pub fn write_word_no_io(&mut self, addr: u16, value: u16) {
        self.space.write_ram(addr, value as u8);
        self.space.write_ram(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Current mode of the BASIC, Kernal and $D000 slots.
    #[must_use]
    pub fn bank_modes(&self) -> BankModes {
        self.banks.modes()
    }

    /// Raw byte at $01.
    #[must_use]
    pub fn latch(&self) -> u8 {
        self.space.read_ram(BANK_CONTROL)
    }

    /// Reload the ROM images, discarding any patches.
    pub fn load_roms(&mut self) {
        self.loader.load(&mut self.space);
    }

    /// Re-apply the ROM patch set.
    pub fn patch_roms(&mut self) {
        self.loader.patch_roms(&mut self.space);
    }

    #[must_use]
    pub fn ram_patch_count(&self) -> u64 {
        self.ram_patches
    }

    #[must_use]
    pub fn address_space(&self) -> &AddressSpace {
        &self.space
    }
}

impl StubBus {
    /// Bus wired to [`StubChips`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rom`] if any ROM image has the wrong size.
    pub fn with_stub_chips(config: C64Config) -> Result<Self, ConfigError> {
        Self::new(config, StubChips::stub())
    }
}

impl<V, C1, C2, S> Bus for C64Bus<V, C1, C2, S>
where
    V: Peripheral,
    C1: Peripheral,
    C2: VicBankSource,
    S: Peripheral,
{
    fn read(&mut self, address: u16) -> u8 {
        self.read_byte(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        self.write_byte(address, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchSet;

    fn make_bus() -> StubBus {
        let config = C64Config::new(vec![0xBB; 8192], vec![0xCC; 4096], vec![0xEE; 8192])
            .with_patches(PatchSet::empty());
        StubBus::with_stub_chips(config).expect("valid ROMs")
    }

    #[test]
    fn ram_read_write() {
        let mut bus = make_bus();
        bus.write_byte(0x8000, 0xAB);
        assert_eq!(bus.read_byte(0x8000), 0xAB);
    }

    #[test]
    fn default_banking_sees_roms() {
        let mut bus = make_bus();
        assert_eq!(bus.read_byte(0xA000), 0xBB);
        assert_eq!(bus.read_byte(0xE000), 0xEE);
    }

    #[test]
    fn writes_under_rom_go_to_ram() {
        let mut bus = make_bus();
        bus.write_byte(0xA000, 0x42);
        assert_eq!(bus.read_byte(0xA000), 0xBB);
        assert_eq!(bus.read_byte_no_io(0xA000), 0x42);
    }

    #[test]
    fn construction_sets_port_registers() {
        let bus = make_bus();
        assert_eq!(bus.read_byte_no_io(0x0000), 0x2F);
        assert_eq!(bus.latch(), 0x07);
    }

    #[test]
    fn vic_register_access() {
        let mut bus = make_bus();
        bus.write_byte(0xD020, 0x06);
        assert_eq!(bus.read_byte(0xD020), 0x06);
        assert_eq!(bus.chips.vic.get(0x20), 0x06);
        // RAM underneath is untouched
        assert_eq!(bus.read_byte_no_io(0xD020), 0x00);
    }

    #[test]
    fn char_rom_when_charen_clear() {
        let mut bus = make_bus();
        bus.write_byte(0x0001, 0x03);
        assert_eq!(bus.read_byte(0xD000), 0xCC);
        // Only the VIC pages expose char ROM to the CPU
        assert_eq!(bus.read_byte(0xD800), 0x00);
    }

    #[test]
    fn peek_skips_chips() {
        let mut bus = make_bus();
        bus.write_byte(0xD020, 0x06);
        assert_eq!(bus.peek(0xD020), 0x00);
        assert_eq!(bus.peek(0xE000), 0xEE);
    }

    #[test]
    fn no_io_latch_write_does_not_rebank() {
        let mut bus = make_bus();
        bus.write_byte_no_io(0x0001, 0x00);
        assert_eq!(bus.latch(), 0x00);
        assert_eq!(bus.read_byte(0xE000), 0xEE);
    }

    #[test]
    fn drives_through_bus_trait() {
        let mut bus = make_bus();
        Bus::write(&mut bus, 0x0400, 0x01);
        assert_eq!(Bus::read(&mut bus, 0x0400), 0x01);
    }
}
