use crate::i8086::instruction::Instruction;

/// Options controlling assembly output formatting.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Use uppercase mnemonics (MOV vs mov).
    pub uppercase: bool,
}

/// A formatted instruction ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedInstruction {
    /// Hex bytes column (e.g., "89D9").
    pub hex_bytes: String,
    /// Mnemonic (e.g., "mov").
    pub mnemonic: String,
    /// Operand string (e.g., "cx, bx").
    pub operands: String,
}

impl FormattedInstruction {
    /// Mnemonic and operands joined into one assembly line.
    pub fn text(&self) -> String {
        if self.operands.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{} {}", self.mnemonic, self.operands)
        }
    }
}

/// Format a decoded instruction into NASM-compatible syntax.
pub fn format_instruction(inst: &Instruction, opts: &FormatOptions) -> FormattedInstruction {
    let hex_bytes = hex_string(&inst.raw_bytes);

    let mut mnemonic = inst.mnemonic.name().to_string();
    if opts.uppercase {
        mnemonic = mnemonic.to_uppercase();
    }

    // Destination first, Intel order
    let operands = format!("{}, {}", inst.dest, inst.src);

    FormattedInstruction {
        hex_bytes,
        mnemonic,
        operands,
    }
}

pub(crate) fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i8086::decode::decode_instruction;
    use crate::i8086::semantics::Semantics;

    #[test]
    fn format_matches_display() {
        let inst = decode_instruction(&[0x89, 0xD9], 0, Semantics::Literal).unwrap();
        let formatted = format_instruction(&inst, &FormatOptions::default());
        assert_eq!(formatted.hex_bytes, "89D9");
        assert_eq!(formatted.mnemonic, "mov");
        assert_eq!(formatted.operands, "cx, bx");
        assert_eq!(formatted.text(), inst.to_string());
    }

    #[test]
    fn format_uppercase_mnemonic() {
        let inst = decode_instruction(&[0xB8, 0x01, 0x00], 0, Semantics::Literal).unwrap();
        let formatted = format_instruction(&inst, &FormatOptions { uppercase: true });
        assert_eq!(formatted.text(), "MOV ax, 1");
        assert_eq!(formatted.hex_bytes, "B80100");
    }
}
