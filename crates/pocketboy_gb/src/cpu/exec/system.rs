//! HALT/STOP, interrupt-enable control, and the degenerate opcodes.

use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// HALT: idle until any enabled interrupt becomes pending.
    pub(super) fn op_halt(&mut self) -> u32 {
        self.halted = true;
        4
    }

    /// STOP: a two-byte encoding whose second byte is padding (usually
    /// 0x00). The padding is always consumed so PC tracks hardware. The
    /// deeper low-power semantics involve peripherals this core does not
    /// model; we idle until a joypad interrupt is requested.
    pub(super) fn op_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        4
    }

    /// DI masks interrupts at once and cancels any in-flight EI.
    pub(super) fn op_di(&mut self) -> u32 {
        self.ime = false;
        self.ei_pending = false;
        self.ei_armed = false;
        4
    }

    /// EI arms the delayed-enable latch; IME goes high only after the next
    /// instruction has completed.
    pub(super) fn op_ei(&mut self) -> u32 {
        self.ei_pending = true;
        4
    }

    /// The 0xCB extended page is not implemented. The second byte is
    /// fetched so the instruction stream stays aligned, then latched for
    /// the host to inspect.
    pub(super) fn op_prefix_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let extended = self.fetch8(bus);
        if self.cb_unhandled.is_none() {
            log::warn!(
                "unimplemented CB-page opcode 0xCB 0x{extended:02X} at PC=0x{pc:04X}",
                pc = self.regs.pc.wrapping_sub(2)
            );
        }
        self.cb_unhandled = Some(extended);
        8
    }

    /// One of the eleven undefined base-page bytes. Latch it, report it,
    /// and keep going; PC has already moved past the byte.
    pub(super) fn op_illegal(&mut self, opcode: u8) -> u32 {
        if self.illegal_opcode.is_none() {
            log::warn!(
                "undefined opcode 0x{opcode:02X} at PC=0x{pc:04X}",
                pc = self.regs.pc.wrapping_sub(1)
            );
        }
        self.illegal_opcode = Some(opcode);
        4
    }
}
