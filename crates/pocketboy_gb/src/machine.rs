//! The emulated machine: memory map, cartridge mapper, and the top-level
//! wrapper tying the CPU to the bus.

mod cartridge;
mod gameboy;
mod mmu;

#[cfg(test)]
mod tests;

pub use gameboy::GameBoy;
pub use mmu::Mmu;

/// 16 KiB ROM bank.
pub(crate) const ROM_BANK_SIZE: usize = 0x4000;
/// 8 KiB external RAM bank.
pub(crate) const RAM_BANK_SIZE: usize = 0x2000;
/// External RAM banks addressable through the mapper's 2-bit register.
pub(crate) const RAM_BANK_COUNT: usize = 4;
