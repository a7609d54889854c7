//! Intel 8086 MOV-family instruction decoding.
//!
//! Bytes flow forward through a [`cursor::ByteCursor`], the
//! [`fields`] extractor and one of the variant resolvers in [`decode`],
//! producing an [`instruction::Instruction`] whose `Display` form is the
//! assembly line.

pub mod addressing;
pub mod cursor;
pub mod decode;
pub mod fields;
pub mod instruction;
pub mod semantics;
pub mod tables;
