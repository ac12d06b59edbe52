//! Bank configuration as observed through the CPU bus.

use c64_memory::banking::{CHAREN, HIRAM, LORAM};
use c64_memory::{BankMode, BankModes, C64Config, PatchSet, StubBus};

use BankMode::{Io, Ram, Rom};

fn make_bus() -> StubBus {
    let config = C64Config::new(vec![0xBB; 8192], vec![0xCC; 4096], vec![0xEE; 8192])
        .with_patches(PatchSet::empty());
    StubBus::with_stub_chips(config).expect("valid ROMs")
}

fn latch(h: bool, l: bool, c: bool) -> u8 {
    let mut v = 0;
    if h {
        v |= HIRAM;
    }
    if l {
        v |= LORAM;
    }
    if c {
        v |= CHAREN;
    }
    v
}

#[test]
fn all_eight_configurations() {
    // (H, L, C) -> (kernal, basic, chario)
    let table = [
        ((false, false, false), (Ram, Ram, Rom)),
        ((false, false, true), (Ram, Ram, Ram)),
        ((false, true, false), (Ram, Ram, Rom)),
        ((false, true, true), (Ram, Ram, Io)),
        ((true, false, false), (Rom, Ram, Rom)),
        ((true, false, true), (Rom, Ram, Io)),
        ((true, true, false), (Rom, Rom, Rom)),
        ((true, true, true), (Rom, Rom, Io)),
    ];

    let mut bus = make_bus();
    for ((h, l, c), (kernal, basic, chario)) in table {
        bus.write_byte(0x0001, latch(h, l, c));
        assert_eq!(
            bus.bank_modes(),
            BankModes {
                basic,
                kernal,
                chario
            },
            "H={h} L={l} C={c}"
        );
    }
}

#[test]
fn default_then_all_ram_then_restore() {
    let mut bus = make_bus();
    let stock = BankModes {
        basic: Rom,
        kernal: Rom,
        chario: Io,
    };
    assert_eq!(bus.bank_modes(), stock);

    bus.write_byte(0x0001, 0x00);
    // CHAREN clear means character ROM in the $D000 slot
    assert_eq!(bus.bank_modes().basic, Ram);
    assert_eq!(bus.bank_modes().kernal, Ram);
    assert_eq!(bus.bank_modes().chario, Rom);

    bus.write_byte(0x0001, 0x04);
    assert_eq!(
        bus.bank_modes(),
        BankModes {
            basic: Ram,
            kernal: Ram,
            chario: Ram
        }
    );

    bus.write_byte(0x0001, 0x27);
    assert_eq!(bus.bank_modes(), stock);
}

#[test]
fn control_write_is_stored_raw() {
    let mut bus = make_bus();
    for value in [0x00, 0x27, 0x37, 0xFF, 0x5A] {
        bus.write_byte(0x0001, value);
        assert_eq!(bus.read_byte_no_io(0x0001), value);
        assert_eq!(bus.read_byte(0x0001), value);
        assert_eq!(bus.latch(), value);
    }
}

#[test]
fn latch_change_applies_to_next_access() {
    let mut bus = make_bus();
    bus.write_byte(0xE000, 0x11);
    assert_eq!(bus.read_byte(0xE000), 0xEE);
    bus.write_byte(0x0001, 0x05); // HIRAM clear
    assert_eq!(bus.read_byte(0xE000), 0x11);
    bus.write_byte(0x0001, 0x07);
    assert_eq!(bus.read_byte(0xE000), 0xEE);
}

#[test]
fn basic_needs_both_loram_and_hiram() {
    let mut bus = make_bus();
    bus.write_byte(0xA123, 0x44);
    for (value, expected) in [(0x07, 0xBB), (0x06, 0x44), (0x05, 0x44), (0x03, 0xBB)] {
        bus.write_byte(0x0001, value);
        assert_eq!(bus.read_byte(0xA123), expected, "latch ${value:02X}");
    }
}

#[test]
fn word_read_sees_rom_above_ram() {
    let mut bus = make_bus();
    bus.write_byte(0x9FFF, 0x34);
    // low byte from RAM, high byte from BASIC ROM
    assert_eq!(bus.read_word(0x9FFF), 0xBB34);
    bus.write_byte(0x0001, 0x00);
    assert_eq!(bus.read_word(0x9FFF), 0x0034);
}

#[test]
fn word_read_of_reset_vector() {
    let mut kernal = vec![0xEE; 8192];
    kernal[0x1FFC] = 0xE2;
    kernal[0x1FFD] = 0xFC;
    let config = C64Config::new(vec![0; 8192], vec![0; 4096], kernal).with_patches(PatchSet::empty());
    let mut bus = StubBus::with_stub_chips(config).expect("valid ROMs");
    assert_eq!(bus.read_word(0xFFFC), 0xFCE2);
}

#[test]
fn word_write_straddling_latch_rebanks_mid_word() {
    let mut bus = make_bus();
    // $0000 is a plain store, $0001 is the latch
    bus.write_word(0x0000, 0x0000);
    assert_eq!(bus.read_byte_no_io(0x0000), 0x00);
    assert_eq!(bus.latch(), 0x00);
    assert_eq!(bus.bank_modes().kernal, Ram);
}
