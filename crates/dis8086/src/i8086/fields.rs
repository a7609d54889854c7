//! Bit-field extraction for MOV instruction headers.
//!
//! ```text
//!  byte 1            byte 2
//!  |7 6 5 4 3 2|1|0|  |7 6|5 4 3|2 1 0|
//!  |  opcode   |D|W|  |MOD| REG | R/M |
//! ```
//!
//! Immediate-to-register moves pack everything into byte 1:
//!
//! ```text
//!  |7 6 5 4|3|2 1 0|
//!  |opcode |W| REG |
//! ```

/// Top 6 bits of a register/memory-to/from-register MOV.
pub const MOV_REG_MEM_OPCODE: u8 = 0b100010;

/// Top 4 bits of an immediate-to-register MOV.
pub const MOV_IMM_REG_OPCODE: u8 = 0b1011;

/// Instruction family selected by the first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeClass {
    /// `100010dw` — register/memory to/from register.
    RegisterMemory,
    /// `1011wreg` — immediate to register.
    ImmediateToRegister,
}

impl OpcodeClass {
    /// Classify a first instruction byte. Returns `None` for anything
    /// outside the MOV family.
    pub fn classify(byte: u8) -> Option<Self> {
        if byte >> 2 == MOV_REG_MEM_OPCODE {
            Some(OpcodeClass::RegisterMemory)
        } else if byte >> 4 == MOV_IMM_REG_OPCODE {
            Some(OpcodeClass::ImmediateToRegister)
        } else {
            None
        }
    }
}

/// Sub-byte fields of a two-byte MOV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    pub opcode: u8,
    pub direction: u8,
    pub width: u8,
    pub mode: u8,
    pub reg: u8,
    pub rm: u8,
}

impl FieldSet {
    /// Split two header bytes into their fields. Never fails; whether the
    /// opcode is meaningful is decided by [`OpcodeClass::classify`].
    pub fn extract(byte1: u8, byte2: u8) -> Self {
        FieldSet {
            opcode: byte1 >> 2,
            direction: (byte1 >> 1) & 0b1,
            width: byte1 & 0b1,
            mode: (byte2 >> 6) & 0b11,
            reg: (byte2 >> 3) & 0b111,
            rm: byte2 & 0b111,
        }
    }

    /// Pack the fields back into header bytes. Values wider than their
    /// field are truncated to fit.
    pub fn encode(&self) -> [u8; 2] {
        [
            ((self.opcode & 0b11_1111) << 2) | ((self.direction & 0b1) << 1) | (self.width & 0b1),
            ((self.mode & 0b11) << 6) | ((self.reg & 0b111) << 3) | (self.rm & 0b111),
        ]
    }

    /// True when the reg field names the destination operand.
    pub fn reg_is_destination(&self) -> bool {
        self.direction == 1
    }
}

/// Fields of an immediate-to-register header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmediateFields {
    pub width: u8,
    pub reg: u8,
}

impl ImmediateFields {
    pub fn extract(byte1: u8) -> Self {
        ImmediateFields {
            width: (byte1 >> 3) & 0b1,
            reg: byte1 & 0b111,
        }
    }

    /// Number of immediate data bytes following the header.
    pub fn data_len(&self) -> usize {
        if self.width == 1 {
            2
        } else {
            1
        }
    }
}
