//! Auxiliary RAM payloads injected by the diagnostic hook.
//!
//! When the guest writes $FF to $0139, the bus copies these into RAM:
//! an optional machine-language monitor (with the BRK vector pointed at
//! it) and an optional program. Every run overwrites the same
//! destinations, so repeating it is harmless.

use tracing::info;

use crate::address_space::AddressSpace;
use crate::error::PrgError;
use crate::prg::Prg;

/// Kernal BRK vector (lo/hi).
pub const BRK_VECTOR: u16 = 0x0316;
/// BASIC end-of-program pointer (lo/hi), read by SAVE and the editor.
pub const PROGRAM_END_POINTER: u16 = 0x002D;

/// A monitor image copied to a fixed base, ignoring its own load address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorPayload {
    base: u16,
    code: Vec<u8>,
}

impl MonitorPayload {
    /// Monitor assembled for $9000.
    pub const BASE_9000: u16 = 0x9000;
    /// Monitor assembled for $C000.
    pub const BASE_C000: u16 = 0xC000;

    /// `image` is a PRG; its header is skipped and the code goes to `base`.
    ///
    /// # Errors
    ///
    /// Returns [`PrgError`] if `image` has no code after the header or does
    /// not fit in RAM.
    pub fn at(base: u16, image: &[u8]) -> Result<Self, PrgError> {
        let prg = Prg::parse(image)?;
        Ok(Self {
            base,
            code: prg.data().to_vec(),
        })
    }

    #[must_use]
    pub fn base(&self) -> u16 {
        self.base
    }

    fn install(&self, space: &mut AddressSpace) {
        space.write_ram_block(self.base, &self.code);
        space.write_ram(BRK_VECTOR, self.base as u8);
        space.write_ram(BRK_VECTOR + 1, (self.base >> 8) as u8);
    }
}

/// Everything the RAM-patch hook installs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RamPayloads {
    pub monitor: Option<MonitorPayload>,
    pub program: Option<Prg>,
}

impl RamPayloads {
    /// Nothing to install.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Install the monitor, then the program. The program's end address
    /// goes to $2D/$2E; the guest still needs a CLR before RUN.
    ///
    /// The end pointer is `load address + length`, not `$0801 + length`, so
    /// it stays right for programs that load outside the BASIC area.
    pub fn apply(&self, space: &mut AddressSpace) {
        if let Some(monitor) = &self.monitor {
            monitor.install(space);
            info!("[PATCH] monitor at ${:04X}, BRK vector set", monitor.base);
        }

        if let Some(program) = &self.program {
            let load = program.load_into(space);
            let end = program.end_address();
            space.write_ram(PROGRAM_END_POINTER, end as u8);
            space.write_ram(PROGRAM_END_POINTER + 1, (end >> 8) as u8);
            info!("[PATCH] program at ${load:04X}-${end:04X}");
        }
    }
}
