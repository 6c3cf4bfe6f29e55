//! Opcode dispatch.
//!
//! The mapping from first byte to handler is fixed at build time: a total
//! match over the whole base page, grouped by instruction family. The
//! catch-all arm is reached exactly by the eleven undefined bytes (the set
//! recorded in [`super::opcodes::OPCODE_TABLE`]).

mod arith;
mod control;
mod load;
mod stack;
mod system;

use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute one decoded opcode and return its T-cycle cost.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        match opcode {
            // NOP
            0x00 => 4,

            // STOP
            0x10 => self.op_stop(bus),

            // HALT sits in the middle of the LD r,r block.
            0x76 => self.op_halt(),

            // 16-bit immediate loads: LD rr,d16
            0x01 | 0x11 | 0x21 | 0x31 => self.op_ld_rr_d16(bus, opcode),

            // LD (BC)/(DE)/(HL+)/(HL-), A
            0x02 | 0x12 | 0x22 | 0x32 => self.op_ld_indirect_a(bus, opcode),

            // LD A, (BC)/(DE)/(HL+)/(HL-)
            0x0A | 0x1A | 0x2A | 0x3A => self.op_ld_a_indirect(bus, opcode),

            // LD (a16),SP
            0x08 => self.op_ld_a16_sp(bus),

            // 16-bit INC/DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.op_inc16(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.op_dec16(opcode),

            // 8-bit INC/DEC r and (HL)
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.op_inc8(bus, opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.op_dec8(bus, opcode),

            // LD r,d8 and LD (HL),d8
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => self.op_ld_r_d8(bus, opcode),

            // Accumulator rotates.
            0x07 | 0x0F | 0x17 | 0x1F => self.op_rotate_a(opcode),

            // ADD HL,rr
            0x09 | 0x19 | 0x29 | 0x39 => self.op_add_hl_rr(opcode),

            // JR r8 and JR cc,r8
            0x18 => self.jr(bus, true),
            0x20 | 0x28 | 0x30 | 0x38 => self.op_jr_cc(bus, opcode),

            // DAA / CPL / SCF / CCF
            0x27 => self.op_daa(),
            0x2F => self.op_cpl(),
            0x37 => self.op_scf(),
            0x3F => self.op_ccf(),

            // LD r,r' block (HALT at 0x76 handled above).
            0x40..=0x7F => self.op_ld_r_r(bus, opcode),

            // ALU A,r block: ADD/ADC/SUB/SBC/AND/XOR/OR/CP
            0x80..=0xBF => self.op_alu_r(bus, opcode),

            // ALU A,d8 column.
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.op_alu_d8(bus, opcode),

            // Conditional and unconditional returns.
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.op_ret_cc(bus, opcode),
            0xC9 => self.op_ret(bus),
            0xD9 => self.op_reti(bus),

            // PUSH/POP rr
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.op_pop_rr(bus, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.op_push_rr(bus, opcode),

            // Jumps.
            0xC3 => self.op_jp_a16(bus),
            0xE9 => self.op_jp_hl(),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.op_jp_cc(bus, opcode),

            // Calls and restarts.
            0xCD => self.op_call_a16(bus),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.op_call_cc(bus, opcode),
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.op_rst(bus, opcode),

            // 0xCB extended page (unimplemented; latched).
            0xCB => self.op_prefix_cb(bus),

            // High-page loads: 0xFF00+a8 / 0xFF00+C.
            0xE0 | 0xF0 => self.op_ldh_a8(bus, opcode),
            0xE2 | 0xF2 => self.op_ldh_c(bus, opcode),

            // LD (a16),A / LD A,(a16)
            0xEA | 0xFA => self.op_ld_a16_a(bus, opcode),

            // SP arithmetic and transfers.
            0xE8 => self.op_add_sp_r8(bus),
            0xF8 => self.op_ld_hl_sp_r8(bus),
            0xF9 => self.op_ld_sp_hl(),

            // DI / EI
            0xF3 => self.op_di(),
            0xFB => self.op_ei(),

            // Undefined bytes: D3 DB DD E3 E4 EB EC ED F4 FC FD.
            _ => self.op_illegal(opcode),
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.flag(Flag::Z), // NZ
            1 => self.flag(Flag::Z),  // Z
            2 => !self.flag(Flag::C), // NC
            _ => self.flag(Flag::C),  // C
        }
    }
}
