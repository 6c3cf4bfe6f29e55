//! Declarative metadata for the base (non-prefix) opcode page.
//!
//! [`OPCODE_TABLE`] is the single source of truth for instruction sizes,
//! T-cycle costs, and the set of undefined bytes. The execution engine is
//! cross-checked against it by the property tests; a future scheduler can
//! take its per-opcode timing from here.

/// Static decode metadata for one first-byte opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Conventional mnemonic, `"???"` for undefined bytes.
    pub mnemonic: &'static str,
    /// Total encoded size in bytes, operands included (1-3).
    pub size: u8,
    /// T-cycle cost; for conditional control flow, the not-taken cost.
    pub cycles: u8,
    /// T-cycle cost when a conditional branch is taken. Equal to `cycles`
    /// for everything else.
    pub cycles_taken: u8,
    /// True for the eleven undefined base-page bytes.
    pub illegal: bool,
}

const fn op(mnemonic: &'static str, size: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        size,
        cycles,
        cycles_taken: cycles,
        illegal: false,
    }
}

const fn branch(mnemonic: &'static str, size: u8, cycles: u8, cycles_taken: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        size,
        cycles,
        cycles_taken,
        illegal: false,
    }
}

const fn undef() -> OpcodeInfo {
    OpcodeInfo {
        mnemonic: "???",
        size: 1,
        cycles: 4,
        cycles_taken: 4,
        illegal: true,
    }
}

/// Metadata for all 256 first bytes, indexed by opcode value.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00-0x0F
    op("NOP", 1, 4),           op("LD BC,d16", 3, 12),  op("LD (BC),A", 1, 8),   op("INC BC", 1, 8),
    op("INC B", 1, 4),         op("DEC B", 1, 4),       op("LD B,d8", 2, 8),     op("RLCA", 1, 4),
    op("LD (a16),SP", 3, 20),  op("ADD HL,BC", 1, 8),   op("LD A,(BC)", 1, 8),   op("DEC BC", 1, 8),
    op("INC C", 1, 4),         op("DEC C", 1, 4),       op("LD C,d8", 2, 8),     op("RRCA", 1, 4),
    // 0x10-0x1F
    op("STOP", 2, 4),          op("LD DE,d16", 3, 12),  op("LD (DE),A", 1, 8),   op("INC DE", 1, 8),
    op("INC D", 1, 4),         op("DEC D", 1, 4),       op("LD D,d8", 2, 8),     op("RLA", 1, 4),
    op("JR r8", 2, 12),        op("ADD HL,DE", 1, 8),   op("LD A,(DE)", 1, 8),   op("DEC DE", 1, 8),
    op("INC E", 1, 4),         op("DEC E", 1, 4),       op("LD E,d8", 2, 8),     op("RRA", 1, 4),
    // 0x20-0x2F
    branch("JR NZ,r8", 2, 8, 12), op("LD HL,d16", 3, 12), op("LD (HL+),A", 1, 8), op("INC HL", 1, 8),
    op("INC H", 1, 4),         op("DEC H", 1, 4),       op("LD H,d8", 2, 8),     op("DAA", 1, 4),
    branch("JR Z,r8", 2, 8, 12), op("ADD HL,HL", 1, 8), op("LD A,(HL+)", 1, 8),  op("DEC HL", 1, 8),
    op("INC L", 1, 4),         op("DEC L", 1, 4),       op("LD L,d8", 2, 8),     op("CPL", 1, 4),
    // 0x30-0x3F
    branch("JR NC,r8", 2, 8, 12), op("LD SP,d16", 3, 12), op("LD (HL-),A", 1, 8), op("INC SP", 1, 8),
    op("INC (HL)", 1, 12),     op("DEC (HL)", 1, 12),   op("LD (HL),d8", 2, 12), op("SCF", 1, 4),
    branch("JR C,r8", 2, 8, 12), op("ADD HL,SP", 1, 8), op("LD A,(HL-)", 1, 8),  op("DEC SP", 1, 8),
    op("INC A", 1, 4),         op("DEC A", 1, 4),       op("LD A,d8", 2, 8),     op("CCF", 1, 4),
    // 0x40-0x4F
    op("LD B,B", 1, 4),        op("LD B,C", 1, 4),      op("LD B,D", 1, 4),      op("LD B,E", 1, 4),
    op("LD B,H", 1, 4),        op("LD B,L", 1, 4),      op("LD B,(HL)", 1, 8),   op("LD B,A", 1, 4),
    op("LD C,B", 1, 4),        op("LD C,C", 1, 4),      op("LD C,D", 1, 4),      op("LD C,E", 1, 4),
    op("LD C,H", 1, 4),        op("LD C,L", 1, 4),      op("LD C,(HL)", 1, 8),   op("LD C,A", 1, 4),
    // 0x50-0x5F
    op("LD D,B", 1, 4),        op("LD D,C", 1, 4),      op("LD D,D", 1, 4),      op("LD D,E", 1, 4),
    op("LD D,H", 1, 4),        op("LD D,L", 1, 4),      op("LD D,(HL)", 1, 8),   op("LD D,A", 1, 4),
    op("LD E,B", 1, 4),        op("LD E,C", 1, 4),      op("LD E,D", 1, 4),      op("LD E,E", 1, 4),
    op("LD E,H", 1, 4),        op("LD E,L", 1, 4),      op("LD E,(HL)", 1, 8),   op("LD E,A", 1, 4),
    // 0x60-0x6F
    op("LD H,B", 1, 4),        op("LD H,C", 1, 4),      op("LD H,D", 1, 4),      op("LD H,E", 1, 4),
    op("LD H,H", 1, 4),        op("LD H,L", 1, 4),      op("LD H,(HL)", 1, 8),   op("LD H,A", 1, 4),
    op("LD L,B", 1, 4),        op("LD L,C", 1, 4),      op("LD L,D", 1, 4),      op("LD L,E", 1, 4),
    op("LD L,H", 1, 4),        op("LD L,L", 1, 4),      op("LD L,(HL)", 1, 8),   op("LD L,A", 1, 4),
    // 0x70-0x7F
    op("LD (HL),B", 1, 8),     op("LD (HL),C", 1, 8),   op("LD (HL),D", 1, 8),   op("LD (HL),E", 1, 8),
    op("LD (HL),H", 1, 8),     op("LD (HL),L", 1, 8),   op("HALT", 1, 4),        op("LD (HL),A", 1, 8),
    op("LD A,B", 1, 4),        op("LD A,C", 1, 4),      op("LD A,D", 1, 4),      op("LD A,E", 1, 4),
    op("LD A,H", 1, 4),        op("LD A,L", 1, 4),      op("LD A,(HL)", 1, 8),   op("LD A,A", 1, 4),
    // 0x80-0x8F
    op("ADD A,B", 1, 4),       op("ADD A,C", 1, 4),     op("ADD A,D", 1, 4),     op("ADD A,E", 1, 4),
    op("ADD A,H", 1, 4),       op("ADD A,L", 1, 4),     op("ADD A,(HL)", 1, 8),  op("ADD A,A", 1, 4),
    op("ADC A,B", 1, 4),       op("ADC A,C", 1, 4),     op("ADC A,D", 1, 4),     op("ADC A,E", 1, 4),
    op("ADC A,H", 1, 4),       op("ADC A,L", 1, 4),     op("ADC A,(HL)", 1, 8),  op("ADC A,A", 1, 4),
    // 0x90-0x9F
    op("SUB B", 1, 4),         op("SUB C", 1, 4),       op("SUB D", 1, 4),       op("SUB E", 1, 4),
    op("SUB H", 1, 4),         op("SUB L", 1, 4),       op("SUB (HL)", 1, 8),    op("SUB A", 1, 4),
    op("SBC A,B", 1, 4),       op("SBC A,C", 1, 4),     op("SBC A,D", 1, 4),     op("SBC A,E", 1, 4),
    op("SBC A,H", 1, 4),       op("SBC A,L", 1, 4),     op("SBC A,(HL)", 1, 8),  op("SBC A,A", 1, 4),
    // 0xA0-0xAF
    op("AND B", 1, 4),         op("AND C", 1, 4),       op("AND D", 1, 4),       op("AND E", 1, 4),
    op("AND H", 1, 4),         op("AND L", 1, 4),       op("AND (HL)", 1, 8),    op("AND A", 1, 4),
    op("XOR B", 1, 4),         op("XOR C", 1, 4),       op("XOR D", 1, 4),       op("XOR E", 1, 4),
    op("XOR H", 1, 4),         op("XOR L", 1, 4),       op("XOR (HL)", 1, 8),    op("XOR A", 1, 4),
    // 0xB0-0xBF
    op("OR B", 1, 4),          op("OR C", 1, 4),        op("OR D", 1, 4),        op("OR E", 1, 4),
    op("OR H", 1, 4),          op("OR L", 1, 4),        op("OR (HL)", 1, 8),     op("OR A", 1, 4),
    op("CP B", 1, 4),          op("CP C", 1, 4),        op("CP D", 1, 4),        op("CP E", 1, 4),
    op("CP H", 1, 4),          op("CP L", 1, 4),        op("CP (HL)", 1, 8),     op("CP A", 1, 4),
    // 0xC0-0xCF
    branch("RET NZ", 1, 8, 20), op("POP BC", 1, 12),    branch("JP NZ,a16", 3, 12, 16), op("JP a16", 3, 16),
    branch("CALL NZ,a16", 3, 12, 24), op("PUSH BC", 1, 16), op("ADD A,d8", 2, 8), op("RST 00H", 1, 16),
    branch("RET Z", 1, 8, 20), op("RET", 1, 16),        branch("JP Z,a16", 3, 12, 16), op("PREFIX CB", 2, 8),
    branch("CALL Z,a16", 3, 12, 24), op("CALL a16", 3, 24), op("ADC A,d8", 2, 8), op("RST 08H", 1, 16),
    // 0xD0-0xDF
    branch("RET NC", 1, 8, 20), op("POP DE", 1, 12),    branch("JP NC,a16", 3, 12, 16), undef(),
    branch("CALL NC,a16", 3, 12, 24), op("PUSH DE", 1, 16), op("SUB d8", 2, 8),  op("RST 10H", 1, 16),
    branch("RET C", 1, 8, 20), op("RETI", 1, 16),       branch("JP C,a16", 3, 12, 16), undef(),
    branch("CALL C,a16", 3, 12, 24), undef(),           op("SBC A,d8", 2, 8),    op("RST 18H", 1, 16),
    // 0xE0-0xEF
    op("LDH (a8),A", 2, 12),   op("POP HL", 1, 12),     op("LD (C),A", 1, 8),    undef(),
    undef(),                   op("PUSH HL", 1, 16),    op("AND d8", 2, 8),      op("RST 20H", 1, 16),
    op("ADD SP,r8", 2, 16),    op("JP HL", 1, 4),       op("LD (a16),A", 3, 16), undef(),
    undef(),                   undef(),                 op("XOR d8", 2, 8),      op("RST 28H", 1, 16),
    // 0xF0-0xFF
    op("LDH A,(a8)", 2, 12),   op("POP AF", 1, 12),     op("LD A,(C)", 1, 8),    op("DI", 1, 4),
    undef(),                   op("PUSH AF", 1, 16),    op("OR d8", 2, 8),       op("RST 30H", 1, 16),
    op("LD HL,SP+r8", 2, 12),  op("LD SP,HL", 1, 8),    op("LD A,(a16)", 3, 16), undef(),
    undef(),                   undef(),                 op("CP d8", 2, 8),       op("RST 38H", 1, 16),
];
