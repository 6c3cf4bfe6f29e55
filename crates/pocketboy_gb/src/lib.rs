//! Game Boy (DMG) CPU and memory core.
//!
//! The crate models the Sharp LR35902 instruction engine together with the
//! console's 16-bit address space and a first-generation (MBC1-style) banked
//! cartridge mapper. Rendering, audio, timers, and input are deliberately
//! absent; peripherals plug in later through the memory-mapped IO region and
//! the interrupt flag/enable bytes.

pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu};
pub use machine::{GameBoy, Mmu};
