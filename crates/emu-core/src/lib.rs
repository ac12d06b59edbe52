//! Core traits for memory-mapped emulation.
//!
//! Processors talk to a [`Bus`]; the bus decodes addresses and forwards
//! register accesses to chips through the [`Peripheral`] capability.

mod bus;
mod peripheral;

pub use bus::Bus;
pub use peripheral::{Peripheral, VicBankSource};
