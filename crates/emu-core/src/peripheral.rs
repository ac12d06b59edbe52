//! Register-level capability of memory-mapped chips.

/// A chip whose registers appear in the CPU address space.
///
/// The bus masks the offset to the chip's register-select lines before
/// calling, so implementations never see a full address. Reads take
/// `&mut self` because some registers clear state when read.
pub trait Peripheral {
    /// Read the register at `offset`.
    fn read_register(&mut self, offset: u8) -> u8;

    /// Write `value` to the register at `offset`.
    fn write_register(&mut self, offset: u8, value: u8);
}

/// The chip that drives the video chip's two missing address lines.
///
/// On the C64 this is CIA2 port A: the VIC-II sees 16K at a time and the
/// bank base comes from here.
pub trait VicBankSource: Peripheral {
    /// Base address of the 16K bank the video chip currently sees.
    fn vic_base_address(&self) -> u16;
}

impl<P: Peripheral + ?Sized> Peripheral for Box<P> {
    fn read_register(&mut self, offset: u8) -> u8 {
        (**self).read_register(offset)
    }

    fn write_register(&mut self, offset: u8, value: u8) {
        (**self).write_register(offset, value);
    }
}

impl<P: VicBankSource + ?Sized> VicBankSource for Box<P> {
    fn vic_base_address(&self) -> u16 {
        (**self).vic_base_address()
    }
}
