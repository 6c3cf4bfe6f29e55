use super::{GameBoy, Mmu, ROM_BANK_SIZE};

/// ROM image with `banks` 16 KiB banks, where the first byte of each bank
/// holds the bank number.
fn tagged_rom(banks: usize) -> Vec<u8> {
    let mut rom = vec![0u8; banks * ROM_BANK_SIZE];
    for bank in 0..banks {
        rom[bank * ROM_BANK_SIZE] = bank as u8;
    }
    rom
}

#[test]
fn rom_bank0_reads_through() {
    let mut mmu = Mmu::new();
    let mut rom = vec![0u8; 0x8000];
    rom[0x1234] = 0x34;
    rom[0x4100] = 0x77;
    mmu.load_rom(&rom);

    assert_eq!(mmu.read8(0x1234), 0x34);
    // Bank 1 is selected at reset, so 0x4100 maps to ROM offset 0x4100.
    assert_eq!(mmu.read8(0x4100), 0x77);
}

#[test]
fn reads_past_the_image_float_high() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&[0xAB; 0x100]);
    assert_eq!(mmu.read8(0x0050), 0xAB);
    assert_eq!(mmu.read8(0x0200), 0xFF);
    // A sub-bank image wraps the switchable window onto bank 0, and the
    // same out-of-range rule applies there.
    assert_eq!(mmu.read8(0x4050), 0xAB);
    assert_eq!(mmu.read8(0x4200), 0xFF);
}

#[test]
fn rom_writes_never_reach_the_image() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));
    mmu.write8(0x0000, 0x0A); // happens to be the RAM-enable command
    mmu.write8(0x3000, 0x99);
    assert_eq!(mmu.read8(0x0000), 0x00);
    assert_eq!(mmu.read8(0x3000), 0x00);
}

#[test]
fn rom_bank_switching_and_zero_remap() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));

    mmu.write8(0x2000, 0x02);
    assert_eq!(mmu.read8(0x4000), 2);

    mmu.write8(0x2000, 0x03);
    assert_eq!(mmu.read8(0x4000), 3);

    // Bank 0 cannot be selected for the switchable window.
    mmu.write8(0x2000, 0x00);
    assert_eq!(mmu.read8(0x4000), 1);
}

#[test]
fn high_bits_extend_the_bank_number() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(128));

    // Bank 0x22 = high2:1, low5:2.
    mmu.write8(0x4000, 0x01);
    mmu.write8(0x2000, 0x02);
    assert_eq!(mmu.read8(0x4000), 0x22);

    // A zero low field bumps the whole number: 0x40 becomes 0x41.
    mmu.write8(0x4000, 0x02);
    mmu.write8(0x2000, 0x00);
    assert_eq!(mmu.read8(0x4000), 0x41);
}

#[test]
fn bank_number_wraps_over_available_banks() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));

    // Requesting bank 6 in a 4-bank image lands on bank 2.
    mmu.write8(0x2000, 0x06);
    assert_eq!(mmu.read8(0x4000), 2);
}

#[test]
fn external_ram_is_gated_by_the_enable_register() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));

    // Disabled at reset.
    assert_eq!(mmu.read8(0xA000), 0xFF);
    mmu.write8(0xA000, 0xAB);
    mmu.write8(0x0000, 0x0A);
    assert_eq!(mmu.read8(0xA000), 0x00); // the earlier write was dropped

    mmu.write8(0xA000, 0xAB);
    assert_eq!(mmu.read8(0xA000), 0xAB);

    // Any low nibble other than 0xA disables again.
    mmu.write8(0x0000, 0x00);
    assert_eq!(mmu.read8(0xA000), 0xFF);

    // Contents survive the gate being closed and reopened.
    mmu.write8(0x0000, 0x1A);
    assert_eq!(mmu.read8(0xA000), 0xAB);
}

#[test]
fn ram_banking_follows_the_mode_bit() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));
    mmu.write8(0x0000, 0x0A);

    // Mode 0: the high2 register does not affect RAM.
    mmu.write8(0x4000, 0x02);
    mmu.write8(0xA000, 0x11);

    // Mode 1: high2 selects the RAM bank.
    mmu.write8(0x6000, 0x01);
    mmu.write8(0xA000, 0x22);

    mmu.write8(0x4000, 0x00);
    assert_eq!(mmu.read8(0xA000), 0x11);
    mmu.write8(0x4000, 0x02);
    assert_eq!(mmu.read8(0xA000), 0x22);

    // Back to mode 0: bank 0 regardless of high2.
    mmu.write8(0x6000, 0x00);
    assert_eq!(mmu.read8(0xA000), 0x11);
}

#[test]
fn echo_ram_mirrors_work_ram_both_ways() {
    let mut mmu = Mmu::new();
    mmu.write8(0xC000, 0x55);
    assert_eq!(mmu.read8(0xE000), 0x55);

    mmu.write8(0xE123, 0xAA);
    assert_eq!(mmu.read8(0xC123), 0xAA);
    assert_eq!(mmu.read8(0xE123), 0xAA);

    // The mirror covers the second WRAM bank as well.
    mmu.write8(0xFDFF, 0x42);
    assert_eq!(mmu.read8(0xDDFF), 0x42);
}

#[test]
fn unusable_region_reads_ff_and_drops_writes() {
    let mut mmu = Mmu::new();
    for addr in 0xFEA0u16..=0xFEFF {
        mmu.write8(addr, 0x12);
        assert_eq!(mmu.read8(addr), 0xFF);
    }
}

#[test]
fn plain_regions_round_trip() {
    let mut mmu = Mmu::new();
    for &(addr, value) in &[
        (0x8000u16, 0x11u8), // VRAM start
        (0x9FFF, 0x22),      // VRAM end
        (0xC000, 0x33),      // WRAM bank 0
        (0xDFFF, 0x44),      // WRAM bank 1 end
        (0xFE00, 0x55),      // OAM
        (0xFE9F, 0x66),      // OAM end
        (0xFF10, 0x77),      // IO (no side effects at this byte)
        (0xFF80, 0x88),      // HRAM
        (0xFFFE, 0x99),      // HRAM end
    ] {
        mmu.write8(addr, value);
        assert_eq!(mmu.read8(addr), value, "addr 0x{addr:04X}");
    }
}

#[test]
fn interrupt_enable_holds_full_byte() {
    let mut mmu = Mmu::new();
    mmu.write8(0xFFFF, 0xAB);
    assert_eq!(mmu.read8(0xFFFF), 0xAB);
}

#[test]
fn interrupt_flag_drives_only_five_bits() {
    let mut mmu = Mmu::new();
    mmu.write8(0xFF0F, 0xFF);
    assert_eq!(mmu.read8(0xFF0F), 0xFF);
    mmu.write8(0xFF0F, 0x00);
    assert_eq!(mmu.read8(0xFF0F), 0xE0);
}

#[test]
fn oam_dma_copies_from_work_ram() {
    let mut mmu = Mmu::new();
    for i in 0u16..0xA0 {
        mmu.write8(0xC000 + i, i as u8);
    }
    mmu.write8(0xFF46, 0xC0);
    for i in 0u16..0xA0 {
        assert_eq!(mmu.read8(0xFE00 + i), i as u8, "offset {i}");
    }
    // The source register still reads back.
    assert_eq!(mmu.read8(0xFF46), 0xC0);
}

#[test]
fn oam_dma_sources_rom_through_the_mapper() {
    let mut mmu = Mmu::new();
    let mut rom = tagged_rom(4);
    for i in 0..0xA0 {
        rom[0x4000 + i] = (0xA0 - i) as u8;
    }
    mmu.load_rom(&rom);

    mmu.write8(0xFF46, 0x40);
    for i in 0..0xA0u16 {
        assert_eq!(mmu.read8(0xFE00 + i), (0xA0 - i) as u8);
    }
}

#[test]
fn load_rom_resets_mapper_but_keeps_ram() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));
    mmu.write8(0x0000, 0x0A);
    mmu.write8(0x2000, 0x02);
    mmu.write8(0xA000, 0x77);
    mmu.write8(0xC000, 0x88);

    mmu.load_rom(&tagged_rom(4));
    // Bank register back to 1, RAM gate closed.
    assert_eq!(mmu.read8(0x4000), 1);
    assert_eq!(mmu.read8(0xA000), 0xFF);
    // Work RAM untouched, and the external RAM byte is still there once
    // the gate reopens.
    assert_eq!(mmu.read8(0xC000), 0x88);
    mmu.write8(0x0000, 0x0A);
    assert_eq!(mmu.read8(0xA000), 0x77);
}

#[test]
fn reset_clears_memory_and_keeps_rom() {
    let mut mmu = Mmu::new();
    mmu.load_rom(&tagged_rom(4));
    mmu.write8(0x0000, 0x0A);
    mmu.write8(0x2000, 0x03);
    mmu.write8(0xA000, 0x11);
    mmu.write8(0x8000, 0x22);
    mmu.write8(0xC000, 0x33);
    mmu.write8(0xFF80, 0x44);
    mmu.write8(0xFFFF, 0x55);

    mmu.reset();

    assert_eq!(mmu.read8(0x8000), 0x00);
    assert_eq!(mmu.read8(0xC000), 0x00);
    assert_eq!(mmu.read8(0xFF80), 0x00);
    assert_eq!(mmu.read8(0xFFFF), 0x00);
    // Mapper back to defaults; external RAM wiped.
    assert_eq!(mmu.read8(0x4000), 1);
    mmu.write8(0x0000, 0x0A);
    assert_eq!(mmu.read8(0xA000), 0x00);
    // ROM still installed.
    assert_eq!(mmu.read8(0x0000), 0x00);
    assert_eq!(mmu.read8(0x0001), 0x00);
}

/// ROM image whose entry point at 0x0100 holds `program`.
fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 2 * ROM_BANK_SIZE];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

#[test]
fn machine_executes_from_the_entry_point() {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(&[0x00])); // NOP
    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0101);
}

#[test]
fn machine_loads_immediates_from_rom() {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(&[0x3E, 0x42, 0x01, 0x34, 0x12]));
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x42);
    assert_eq!(gb.cpu.regs.pc, 0x0102);
    gb.step();
    assert_eq!(gb.cpu.regs.b, 0x12);
    assert_eq!(gb.cpu.regs.c, 0x34);
    assert_eq!(gb.cpu.regs.pc, 0x0105);
}

#[test]
fn machine_program_drives_oam_dma() {
    // LD A,0xC0 ; LDH (0x46),A — fire DMA from WRAM via the IO write path.
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(&[0x3E, 0xC0, 0xE0, 0x46]));
    for i in 0u16..0xA0 {
        gb.mmu.write8(0xC000 + i, i as u8);
    }
    gb.step();
    gb.step();
    for i in 0u16..0xA0 {
        assert_eq!(gb.mmu.read8(0xFE00 + i), i as u8);
    }
}

#[test]
fn machine_run_counts_cycles() {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(&[0x00, 0x00, 0x00, 0x00]));
    // Four NOPs at 4 T-cycles each.
    assert_eq!(gb.run(4), 16);
    assert_eq!(gb.cpu.regs.pc, 0x0104);
}

#[test]
fn machine_reset_restores_both_halves() {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(&[0x3E, 0x42]));
    gb.step();
    gb.mmu.write8(0xC000, 0x99);
    gb.reset();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.a, 0x00);
    assert_eq!(gb.mmu.read8(0xC000), 0x00);
    // The cartridge stays in: the program still runs.
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x42);
}
