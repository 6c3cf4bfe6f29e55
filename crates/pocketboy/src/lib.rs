use anyhow::{Context, Result};
use pocketboy_gb::GameBoy;

/// Load a cartridge image and execute up to `max_instructions` on a fresh
/// machine, reporting the final state through the logger.
///
/// There is no display or input; this front-end exists to drive the core
/// headlessly and inspect where a program ends up.
pub fn run(rom_path: &str, max_instructions: u64) -> Result<()> {
    let rom = std::fs::read(rom_path).with_context(|| format!("failed to read ROM '{rom_path}'"))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom);

    let cycles = gb.run(max_instructions);
    log::info!("executed {max_instructions} instructions ({cycles} T-cycles)");

    let regs = &gb.cpu.regs;
    log::info!(
        "final state: PC=0x{:04X} SP=0x{:04X} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} IME={}",
        regs.pc,
        regs.sp,
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        gb.cpu.ime,
    );

    if let Some(opcode) = gb.cpu.illegal_opcode() {
        log::warn!("program hit undefined opcode 0x{opcode:02X}");
    }
    if let Some(extended) = gb.cpu.cb_unhandled() {
        log::warn!("program used unimplemented CB-page opcode 0x{extended:02X}");
    }

    Ok(())
}
