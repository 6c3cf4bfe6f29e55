//! Arithmetic, logic, and flag-manipulation handlers.

use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// The 0x80-0xBF block: one of eight operations (bits 3-5) against one
    /// of eight operands (bits 0-2).
    pub(super) fn op_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let src = opcode & 0x07;
        let value = self.read_r8(bus, src);
        self.apply_alu((opcode >> 3) & 0x07, value);
        if src == 6 { 8 } else { 4 }
    }

    /// The d8 column of the same eight operations (0xC6, 0xCE, ... 0xFE).
    pub(super) fn op_alu_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.apply_alu((opcode >> 3) & 0x07, value);
        8
    }

    fn apply_alu(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.add_a(value, false),
            1 => self.add_a(value, true),
            2 => self.sub_a(value, false),
            3 => self.sub_a(value, true),
            4 => self.and_a(value),
            5 => self.xor_a(value),
            6 => self.or_a(value),
            _ => self.cp_a(value),
        }
    }

    /// INC r / INC (HL).
    pub(super) fn op_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let target = (opcode >> 3) & 0x07;
        let value = self.read_r8(bus, target);
        let result = self.inc8(value);
        self.write_r8(bus, target, result);
        if target == 6 { 12 } else { 4 }
    }

    /// DEC r / DEC (HL).
    pub(super) fn op_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let target = (opcode >> 3) & 0x07;
        let value = self.read_r8(bus, target);
        let result = self.dec8(value);
        self.write_r8(bus, target, result);
        if target == 6 { 12 } else { 4 }
    }

    /// INC rr — no flags.
    pub(super) fn op_inc16(&mut self, opcode: u8) -> u32 {
        match (opcode >> 4) & 0x03 {
            0 => {
                let v = self.regs.bc().wrapping_add(1);
                self.regs.set_bc(v);
            }
            1 => {
                let v = self.regs.de().wrapping_add(1);
                self.regs.set_de(v);
            }
            2 => {
                let v = self.regs.hl().wrapping_add(1);
                self.regs.set_hl(v);
            }
            _ => self.regs.sp = self.regs.sp.wrapping_add(1),
        }
        8
    }

    /// DEC rr — no flags.
    pub(super) fn op_dec16(&mut self, opcode: u8) -> u32 {
        match (opcode >> 4) & 0x03 {
            0 => {
                let v = self.regs.bc().wrapping_sub(1);
                self.regs.set_bc(v);
            }
            1 => {
                let v = self.regs.de().wrapping_sub(1);
                self.regs.set_de(v);
            }
            2 => {
                let v = self.regs.hl().wrapping_sub(1);
                self.regs.set_hl(v);
            }
            _ => self.regs.sp = self.regs.sp.wrapping_sub(1),
        }
        8
    }

    /// ADD HL,rr.
    pub(super) fn op_add_hl_rr(&mut self, opcode: u8) -> u32 {
        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        };
        self.add_hl(value);
        8
    }

    /// ADD SP,r8.
    pub(super) fn op_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.add_sp_signed(self.regs.sp, imm);
        16
    }

    /// RLCA / RRCA / RLA / RRA.
    pub(super) fn op_rotate_a(&mut self, opcode: u8) -> u32 {
        match opcode {
            0x07 => self.rlca(),
            0x0F => self.rrca(),
            0x17 => self.rla(),
            _ => self.rra(),
        }
        4
    }

    pub(super) fn op_daa(&mut self) -> u32 {
        self.daa();
        4
    }

    pub(super) fn op_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(super) fn op_scf(&mut self) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        4
    }

    pub(super) fn op_ccf(&mut self) -> u32 {
        let carry = self.flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        4
    }
}
