pub mod error;
pub mod i8086;
pub mod output;

pub use error::Error;
pub use i8086::addressing::{Displacement, EffectiveAddress};
pub use i8086::decode::{decode, decode_instruction, decode_program, DecodeError, Decoder};
pub use i8086::fields::{FieldSet, ImmediateFields, OpcodeClass};
pub use i8086::instruction::{Instruction, Mnemonic, Operand, Register};
pub use i8086::semantics::Semantics;
pub use output::formatter::{format_instruction, FormatOptions, FormattedInstruction};
pub use output::listing::{generate_listing, LineKind, ListingLine, ListingOptions, HEADER};
