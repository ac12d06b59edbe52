//! Commodore 64 address space and bus arbitration.
//!
//! The CPU sees 64K whose contents depend on three latch bits at $01:
//! the same address can be RAM, BASIC/Kernal/character ROM, or a VIC-II,
//! SID or CIA register. The VIC-II has its own view that ignores the latch
//! except for the character ROM it always sees in banks 0 and 2.
//!
//! Chip internals live elsewhere; the bus talks to them through
//! [`emu_core::Peripheral`].

pub mod address_space;
pub mod banking;
mod bus;
pub mod config;
pub mod error;
pub mod loader;
pub mod patch;
pub mod payload;
pub mod prg;
pub mod regions;
pub mod rom;
pub mod stub;
pub mod vic_view;

pub use address_space::AddressSpace;
pub use banking::{BankController, BankMode, BankModes};
pub use bus::{C64Bus, IoChips, StubBus, StubChips};
pub use config::C64Config;
pub use error::{ConfigError, PrgError, RomError, RomKind};
pub use loader::Loader;
pub use patch::{Patch, PatchByte, PatchSet};
pub use payload::{MonitorPayload, RamPayloads};
pub use prg::Prg;
pub use regions::Region;
pub use rom::RomSet;
pub use stub::{Cia2Port, RegisterFile};
pub use vic_view::VicView;
