//! The two parallel 64K planes behind the C64 address space.
//!
//! RAM and ROM are both full 64K so every 16-bit address indexes either
//! plane directly. Which plane answers a CPU read is decided by the bank
//! configuration, never by the planes themselves.

/// Size of each plane.
pub const MEMORY_SIZE: usize = 0x10000;

/// 64K RAM plane + 64K ROM plane.
pub struct AddressSpace {
    /// RAM. Writes to ROM-mapped addresses land here too.
    ram: Box<[u8; MEMORY_SIZE]>,
    /// ROM images at their CPU addresses; unused areas stay zero.
    rom: Box<[u8; MEMORY_SIZE]>,
}

impl AddressSpace {
    /// Create both planes: RAM holds the power-on pattern, ROM is zeroed.
    ///
    /// Power-on RAM alternates $00/$FF: even addresses read $00, odd
    /// addresses read $FF.
    #[must_use]
    pub fn new() -> Self {
        let mut ram = Box::new([0u8; MEMORY_SIZE]);
        for (addr, byte) in ram.iter_mut().enumerate() {
            *byte = if addr & 1 == 0 { 0x00 } else { 0xFF };
        }

        Self {
            ram,
            rom: Box::new([0; MEMORY_SIZE]),
        }
    }

    #[must_use]
    pub fn read_ram(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    pub fn write_ram(&mut self, addr: u16, value: u8) {
        self.ram[addr as usize] = value;
    }

    #[must_use]
    pub fn read_rom(&self, addr: u16) -> u8 {
        self.rom[addr as usize]
    }

    pub fn write_rom(&mut self, addr: u16, value: u8) {
        self.rom[addr as usize] = value;
    }

    /// Copy `data` into RAM starting at `base`, wrapping past $FFFF.
    pub fn write_ram_block(&mut self, base: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.write_ram(base.wrapping_add(i as u16), byte);
        }
    }

    /// Copy `data` into the ROM plane starting at `base`, wrapping past $FFFF.
    pub fn write_rom_block(&mut self, base: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.write_rom(base.wrapping_add(i as u16), byte);
        }
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}
