//! Interrupt polling and service.
//!
//! Peripherals request interrupts by setting bits in IF (0xFF0F); software
//! masks them through IE (0xFFFF) and the master enable. Priority runs from
//! bit 0 upward: VBlank, LCD-Stat, Timer, Serial, Joypad.

use super::{Bus, Cpu, IE_ADDR, IF_ADDR};

impl Cpu {
    /// Service the highest-priority pending interrupt, if the current state
    /// allows one. Returns the entry cost in T-cycles when taken.
    ///
    /// A halted core with IME clear wakes up here without dispatching; this
    /// lets `step` fall through to a normal fetch on the same call.
    pub(super) fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        if !self.ime {
            self.halted = false;
            return None;
        }

        self.halted = false;
        self.ime = false;

        let index = pending.trailing_zeros() as u8;
        bus.write8(IF_ADDR, iflags & !(1 << index));

        let pc = self.regs.pc;
        self.push16(bus, pc);
        self.regs.pc = 0x0040 + (index as u16) * 8;

        Some(20)
    }
}
