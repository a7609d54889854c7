use std::iter::FusedIterator;

use thiserror::Error;

use super::addressing::{Displacement, EffectiveAddress};
use super::cursor::ByteCursor;
use super::fields::{FieldSet, ImmediateFields, OpcodeClass};
use super::instruction::{Instruction, Mnemonic, Operand, Register};
use super::semantics::Semantics;

/// Errors during instruction decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A single byte is left where an instruction should start.
    #[error("at offset 0x{offset:X}: trailing byte {byte:08b} cannot start an instruction")]
    TrailingByte { offset: usize, byte: u8 },
    /// First byte matches neither MOV encoding.
    #[error("at offset 0x{offset:X}: unknown opcode in byte {byte:08b}")]
    UnknownOpcode { offset: usize, byte: u8 },
    /// The header was recognized but its trailing bytes run past the end.
    #[error("at offset 0x{offset:X}: need {needed} bytes, only {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::TrailingByte { offset, .. }
            | DecodeError::UnknownOpcode { offset, .. }
            | DecodeError::Truncated { offset, .. } => *offset,
        }
    }
}

// ─── Variant resolvers ───────────────────────────────────────────

/// Resolve a `100010dw` instruction at the cursor.
fn resolve_register_memory(
    cursor: &ByteCursor<'_>,
    semantics: Semantics,
) -> Result<Instruction, DecodeError> {
    let header = cursor.peek_bytes(2)?;
    let fields = FieldSet::extract(header[0], header[1]);

    let (rm_operand, size) = match fields.mode {
        0b00 => memory_mode(cursor, &fields, semantics)?,
        0b01 => memory_mode_displacement8(cursor, &fields, semantics)?,
        0b10 => memory_mode_displacement16(cursor, &fields, semantics)?,
        _ => register_mode(&fields),
    };
    let reg_operand = Operand::Register(Register::new(fields.reg, fields.width));

    let (dest, src) = if fields.reg_is_destination() {
        (reg_operand, rm_operand)
    } else {
        (rm_operand, reg_operand)
    };
    make_inst(cursor, size, dest, src)
}

/// MOD=11: R/M names a second register of the same width.
fn register_mode(fields: &FieldSet) -> (Operand, usize) {
    (Operand::Register(Register::new(fields.rm, fields.width)), 2)
}

/// MOD=00: no displacement, except R/M=110 under hardware semantics
/// which carries a 16-bit direct address.
fn memory_mode(
    cursor: &ByteCursor<'_>,
    fields: &FieldSet,
    semantics: Semantics,
) -> Result<(Operand, usize), DecodeError> {
    if semantics == Semantics::Hardware && fields.rm == 0b110 {
        let bytes = cursor.peek_bytes(4)?;
        let addr = u16::from_le_bytes([bytes[2], bytes[3]]);
        return Ok((Operand::Memory(EffectiveAddress::Direct(addr)), 4));
    }
    let ea = EffectiveAddress::based(fields.rm, Displacement::None);
    Ok((Operand::Memory(ea), 2))
}

/// MOD=01: one displacement byte.
fn memory_mode_displacement8(
    cursor: &ByteCursor<'_>,
    fields: &FieldSet,
    semantics: Semantics,
) -> Result<(Operand, usize), DecodeError> {
    let bytes = cursor.peek_bytes(3)?;
    let displacement = match semantics {
        Semantics::Literal => Displacement::Unsigned(bytes[2] as u16),
        Semantics::Hardware => Displacement::Signed(bytes[2] as i8 as i16),
    };
    let ea = EffectiveAddress::based(fields.rm, displacement);
    Ok((Operand::Memory(ea), 3))
}

/// MOD=10: two displacement bytes, little-endian.
fn memory_mode_displacement16(
    cursor: &ByteCursor<'_>,
    fields: &FieldSet,
    semantics: Semantics,
) -> Result<(Operand, usize), DecodeError> {
    let bytes = cursor.peek_bytes(4)?;
    let raw = u16::from_le_bytes([bytes[2], bytes[3]]);
    let displacement = match semantics {
        Semantics::Literal => Displacement::Unsigned(raw),
        Semantics::Hardware => Displacement::Signed(raw as i16),
    };
    let ea = EffectiveAddress::based(fields.rm, displacement);
    Ok((Operand::Memory(ea), 4))
}

/// Resolve a `1011wreg` instruction at the cursor.
fn resolve_immediate_to_register(cursor: &ByteCursor<'_>) -> Result<Instruction, DecodeError> {
    let header = cursor.peek_bytes(1)?;
    let fields = ImmediateFields::extract(header[0]);
    let size = 1 + fields.data_len();
    let bytes = cursor.peek_bytes(size)?;

    let value = if fields.width == 1 {
        u16::from_le_bytes([bytes[1], bytes[2]])
    } else {
        bytes[1] as u16
    };

    make_inst(
        cursor,
        size,
        Operand::Register(Register::new(fields.reg, fields.width)),
        Operand::Immediate(value),
    )
}

fn make_inst(
    cursor: &ByteCursor<'_>,
    size: usize,
    dest: Operand,
    src: Operand,
) -> Result<Instruction, DecodeError> {
    Ok(Instruction {
        offset: cursor.position(),
        size_bytes: size as u8,
        raw_bytes: cursor.peek_bytes(size)?.to_vec(),
        mnemonic: Mnemonic::Mov,
        dest,
        src,
    })
}

fn resolve(
    cursor: &ByteCursor<'_>,
    class: OpcodeClass,
    semantics: Semantics,
) -> Result<Instruction, DecodeError> {
    match class {
        OpcodeClass::RegisterMemory => resolve_register_memory(cursor, semantics),
        OpcodeClass::ImmediateToRegister => resolve_immediate_to_register(cursor),
    }
}

/// Inspect the bytes at the cursor and pick the resolver.
///
/// `Ok(None)` means the buffer is exhausted.
fn classify_next(cursor: &ByteCursor<'_>) -> Result<Option<OpcodeClass>, DecodeError> {
    let offset = cursor.position();
    match (cursor.peek(0), cursor.remaining()) {
        (None, _) => Ok(None),
        (Some(byte), 1) => Err(DecodeError::TrailingByte { offset, byte }),
        (Some(byte), _) => OpcodeClass::classify(byte)
            .map(Some)
            .ok_or(DecodeError::UnknownOpcode { offset, byte }),
    }
}

// ─── Decode driver ───────────────────────────────────────────────

enum State {
    Start,
    Dispatch(OpcodeClass),
    Emit(Instruction),
    Done,
    Failed(DecodeError),
}

/// Streaming decoder over a whole program.
///
/// Yields one instruction per step. After the buffer is exhausted or the
/// first error is yielded, the iterator is finished, so callers that want
/// partial output can keep everything received before the error.
pub struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    semantics: Semantics,
    finished: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], semantics: Semantics) -> Self {
        Decoder {
            cursor: ByteCursor::new(data),
            semantics,
            finished: false,
        }
    }

    /// Offset of the next byte to decode.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn transition(&mut self, state: State) -> State {
        match state {
            State::Start => match classify_next(&self.cursor) {
                Ok(Some(class)) => State::Dispatch(class),
                Ok(None) => State::Done,
                Err(e) => State::Failed(e),
            },
            State::Dispatch(class) => match resolve(&self.cursor, class, self.semantics) {
                Ok(inst) => {
                    self.cursor.advance(inst.len());
                    State::Emit(inst)
                }
                Err(e) => State::Failed(e),
            },
            State::Emit(_) => State::Start,
            State::Done => State::Done,
            State::Failed(e) => State::Failed(e),
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut state = State::Start;
        loop {
            state = match self.transition(state) {
                State::Emit(inst) => return Some(Ok(inst)),
                State::Done => {
                    self.finished = true;
                    return None;
                }
                State::Failed(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                next => next,
            };
        }
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode a single instruction starting at `offset`.
///
/// An `offset` at or past the end of `data` yields
/// [`DecodeError::Truncated`] carrying that same offset.
pub fn decode_instruction(
    data: &[u8],
    offset: usize,
    semantics: Semantics,
) -> Result<Instruction, DecodeError> {
    let cursor = ByteCursor::at(data, offset);
    match classify_next(&cursor)? {
        Some(class) => resolve(&cursor, class, semantics),
        None => Err(DecodeError::Truncated {
            offset: cursor.position(),
            needed: 2,
            available: 0,
        }),
    }
}

/// Decode a whole program into instruction lines.
///
/// Fails on the first undecodable instruction; use [`Decoder`] directly
/// to keep the lines decoded before it.
pub fn decode_program(data: &[u8], semantics: Semantics) -> Result<Vec<String>, DecodeError> {
    Decoder::new(data, semantics)
        .map(|r| r.map(|inst| inst.to_string()))
        .collect()
}

/// [`decode_program`] with [`Semantics::Literal`].
pub fn decode(data: &[u8]) -> Result<Vec<String>, DecodeError> {
    decode_program(data, Semantics::Literal)
}
