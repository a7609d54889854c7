use crate::error::Error;
use crate::i8086::decode::{decode_instruction, DecodeError};
use crate::i8086::semantics::Semantics;

use super::formatter::{format_instruction, hex_string, FormatOptions};

/// First line of every listing; selects 16-bit mode in NASM.
pub const HEADER: &str = "bits 16";

/// Options controlling the listing output.
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Append the encoded bytes as a trailing comment.
    pub show_hex: bool,
    /// Append the byte offset as a trailing comment.
    pub show_addresses: bool,
    pub uppercase: bool,
    pub semantics: Semantics,
    /// Emit `db` lines for undecodable bytes instead of failing.
    pub lenient: bool,
}

/// What a listing line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Instruction,
    /// `db` fallback for an undecodable byte.
    Data,
}

/// A single line of the disassembly listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub kind: LineKind,
    /// Offset of the bytes this line covers; `None` for header lines.
    pub offset: Option<usize>,
    pub text: String,
}

/// Generate a complete listing: the `bits 16` header, a blank line, then
/// one line per decoded instruction.
///
/// In strict mode (the default) the first decode error is returned. With
/// `lenient` set, an unknown opcode or trailing byte becomes a `db` line
/// and decoding resumes at the next byte; a truncated instruction turns
/// every remaining byte into `db` lines.
pub fn generate_listing(data: &[u8], options: &ListingOptions) -> Result<Vec<ListingLine>, Error> {
    let fmt_opts = FormatOptions {
        uppercase: options.uppercase,
    };

    let mut lines = vec![
        ListingLine {
            kind: LineKind::Header,
            offset: None,
            text: HEADER.to_string(),
        },
        ListingLine {
            kind: LineKind::Header,
            offset: None,
            text: String::new(),
        },
    ];

    let mut offset = 0usize;
    while offset < data.len() {
        match decode_instruction(data, offset, options.semantics) {
            Ok(inst) => {
                let formatted = format_instruction(&inst, &fmt_opts);
                lines.push(ListingLine {
                    kind: LineKind::Instruction,
                    offset: Some(offset),
                    text: format_code_line(offset, &formatted.hex_bytes, &formatted.text(), options),
                });
                offset += inst.len();
            }
            Err(e) if !options.lenient => return Err(e.into()),
            Err(DecodeError::Truncated { .. }) => {
                while offset < data.len() {
                    lines.push(data_line(offset, data[offset], options));
                    offset += 1;
                }
            }
            Err(_) => {
                lines.push(data_line(offset, data[offset], options));
                offset += 1;
            }
        }
    }

    Ok(lines)
}

fn data_line(offset: usize, byte: u8, options: &ListingOptions) -> ListingLine {
    let directive = if options.uppercase { "DB" } else { "db" };
    let text = format!("{directive} 0x{byte:02X}");
    ListingLine {
        kind: LineKind::Data,
        offset: Some(offset),
        text: format_code_line(offset, &hex_string(&[byte]), &text, options),
    }
}

fn format_code_line(offset: usize, hex: &str, body: &str, options: &ListingOptions) -> String {
    let mut comment = Vec::new();

    if options.show_addresses {
        comment.push(format!("{offset:04X}"));
    }

    if options.show_hex {
        comment.push(hex.to_string());
    }

    if comment.is_empty() {
        body.to_string()
    } else {
        format!("{body:<24}; {}", comment.join("  "))
    }
}
