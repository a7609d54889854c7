use std::fmt;

use super::addressing::EffectiveAddress;
use super::tables::register_name;

/// General-purpose register selected by a REG (or R/M) id and a W bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub id: u8,
    pub width: u8,
}

impl Register {
    pub fn new(id: u8, width: u8) -> Self {
        Register {
            id: id & 0b111,
            width: width & 0b1,
        }
    }

    pub fn name(&self) -> &'static str {
        register_name(self.id, self.width)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instruction mnemonics this decoder recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Mov,
}

impl Mnemonic {
    pub fn name(&self) -> &'static str {
        match self {
            Mnemonic::Mov => "mov",
        }
    }
}

/// A single operand of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Memory(EffectiveAddress),
    /// Immediate data, zero-extended to 16 bits.
    Immediate(u16),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{r}"),
            Operand::Memory(ea) => write!(f, "{ea}"),
            Operand::Immediate(n) => write!(f, "{n}"),
        }
    }
}

/// A fully decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Byte offset of the first byte within the program.
    pub offset: usize,
    /// Total encoded length, header plus trailing bytes.
    pub size_bytes: u8,
    pub raw_bytes: Vec<u8>,
    pub mnemonic: Mnemonic,
    pub dest: Operand,
    pub src: Operand,
}

impl Instruction {
    pub fn len(&self) -> usize {
        self.size_bytes as usize
    }

    pub fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }
}

/// Renders `mov <dest>, <src>`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.mnemonic.name(), self.dest, self.src)
    }
}
