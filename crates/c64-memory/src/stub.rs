//! Stand-in chips for running the bus without real chip emulations.
//!
//! They store register writes and read them back; no timers, no video,
//! no audio.

use emu_core::{Peripheral, VicBankSource};

/// A bank of `N` plain registers. Offsets wrap modulo `N`.
#[derive(Debug, Clone)]
pub struct RegisterFile<const N: usize> {
    regs: [u8; N],
}

impl<const N: usize> RegisterFile<N> {
    #[must_use]
    pub fn new() -> Self {
        Self { regs: [0; N] }
    }

    #[must_use]
    pub fn get(&self, offset: u8) -> u8 {
        self.regs[usize::from(offset) % N]
    }
}

impl<const N: usize> Default for RegisterFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Peripheral for RegisterFile<N> {
    fn read_register(&mut self, offset: u8) -> u8 {
        self.get(offset)
    }

    fn write_register(&mut self, offset: u8, value: u8) {
        self.regs[usize::from(offset) % N] = value;
    }
}

/// CIA2 reduced to the port-A bits that select the VIC-II bank.
#[derive(Debug, Clone, Default)]
pub struct Cia2Port {
    regs: RegisterFile<16>,
}

impl Cia2Port {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Port A as seen on the pins: undriven inputs float high.
    #[must_use]
    pub fn port_a_output(&self) -> u8 {
        let ddr = self.regs.get(0x02);
        (self.regs.get(0x00) & ddr) | !ddr
    }
}

impl Peripheral for Cia2Port {
    fn read_register(&mut self, offset: u8) -> u8 {
        match offset {
            0x00 => self.port_a_output(),
            _ => self.regs.get(offset),
        }
    }

    fn write_register(&mut self, offset: u8, value: u8) {
        self.regs.write_register(offset, value);
    }
}

impl VicBankSource for Cia2Port {
    /// Port A bits 0-1, inverted, select the bank.
    fn vic_base_address(&self) -> u16 {
        u16::from(!self.port_a_output() & 0x03) * 0x4000
    }
}
