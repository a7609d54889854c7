/// Register mnemonics indexed by `[reg][w]`.
///
/// The W=0 and W=1 columns name different physical registers: with W=0
/// ids 4-7 select the high halves of AX-DX, with W=1 they select the
/// pointer and index registers.
///
/// | REG | W=0 | W=1 |
/// |-----|-----|-----|
/// | 000 | al  | ax  |
/// | 001 | cl  | cx  |
/// | 010 | dl  | dx  |
/// | 011 | bl  | bx  |
/// | 100 | ah  | sp  |
/// | 101 | ch  | bp  |
/// | 110 | dh  | si  |
/// | 111 | bh  | di  |
pub static REGISTER_NAMES: [[&str; 2]; 8] = [
    ["al", "ax"],
    ["cl", "cx"],
    ["dl", "dx"],
    ["bl", "bx"],
    ["ah", "sp"],
    ["ch", "bp"],
    ["dh", "si"],
    ["bh", "di"],
];

/// Base/index expressions for memory operands, indexed by r/m.
///
/// Entry 6 is `bp` for every memory mode, including MOD=00 where real
/// hardware encodes a direct address instead. See
/// [`Semantics::Hardware`](super::semantics::Semantics::Hardware).
pub static ADDRESS_EXPRESSIONS: [&str; 8] = [
    "bx + si",
    "bx + di",
    "bp + si",
    "bp + di",
    "si",
    "di",
    "bp",
    "bx",
];

/// Look up a register mnemonic. Only the low 3 bits of `reg` and the low
/// bit of `width` are used.
pub fn register_name(reg: u8, width: u8) -> &'static str {
    REGISTER_NAMES[(reg & 0b111) as usize][(width & 0b1) as usize]
}

/// Look up the addressing expression for an r/m id (low 3 bits).
pub fn address_expression(rm: u8) -> &'static str {
    ADDRESS_EXPRESSIONS[(rm & 0b111) as usize]
}
