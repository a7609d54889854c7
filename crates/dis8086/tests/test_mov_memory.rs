//! Memory and immediate MOV listings, literal and hardware semantics.

use dis8086::{
    decode, decode_instruction, decode_program, generate_listing, DecodeError, Decoder,
    Displacement, EffectiveAddress, ListingOptions, Operand, Semantics,
};
use indoc::indoc as asm;
use pretty_assertions::assert_eq;

fn listing(bytes: &[u8], semantics: Semantics) -> String {
    let options = ListingOptions {
        semantics,
        ..Default::default()
    };
    generate_listing(bytes, &options)
        .unwrap()
        .iter()
        .map(|l| format!("{}\n", l.text))
        .collect()
}

const MIXED_PROGRAM: &[u8] = &[
    0x89, 0xDE,             // mov si, bx
    0x88, 0xC6,             // mov dh, al
    0xB1, 0x0C,             // mov cl, 12
    0xB5, 0xF4,             // mov ch, 244
    0xB9, 0x0C, 0x00,       // mov cx, 12
    0xB9, 0xF4, 0xFF,       // mov cx, 65524
    0xBA, 0x6C, 0x0F,       // mov dx, 3948
    0x8A, 0x00,             // mov al, [bx + si]
    0x8B, 0x1B,             // mov bx, [bp + di]
    0x8B, 0x56, 0x00,       // mov dx, [bp + 0]
    0x8A, 0x60, 0x04,       // mov ah, [bx + si + 4]
    0x8A, 0x80, 0x87, 0x13, // mov al, [bx + si + 4999]
    0x89, 0x09,             // mov [bx + di], cx
    0x88, 0x0A,             // mov [bp + si], cl
    0x88, 0x6E, 0x00,       // mov [bp + 0], ch
];

#[test]
fn test_mixed_program() {
    assert_eq!(
        listing(MIXED_PROGRAM, Semantics::Literal),
        asm! {"
            bits 16

            mov si, bx
            mov dh, al
            mov cl, 12
            mov ch, 244
            mov cx, 12
            mov cx, 65524
            mov dx, 3948
            mov al, [bx + si]
            mov bx, [bp + di]
            mov dx, [bp + 0]
            mov ah, [bx + si + 4]
            mov al, [bx + si + 4999]
            mov [bx + di], cx
            mov [bp + si], cl
            mov [bp + 0], ch
        "}
    );
}

const SIGNED_PROGRAM: &[u8] = &[
    0x8B, 0x41, 0xDB,       // mov ax, [bx + di - 37]
    0x89, 0x8C, 0xD4, 0xFE, // mov [si - 300], cx
    0x8B, 0x2E, 0x82, 0x0D, // mov bp, [3458]
];

#[test]
fn test_signed_program_literal() {
    assert_eq!(
        listing(&SIGNED_PROGRAM[..7], Semantics::Literal),
        asm! {"
            bits 16

            mov ax, [bx + di + 219]
            mov [si + 65236], cx
        "}
    );
}

#[test]
fn test_signed_program_literal_leaves_direct_address_bytes() {
    // [bp] consumes two bytes, so the address bytes are decoded next
    let err = decode(SIGNED_PROGRAM).unwrap_err();
    assert_eq!(err, DecodeError::UnknownOpcode { offset: 9, byte: 0x82 });
}

#[test]
fn test_signed_program_hardware() {
    assert_eq!(
        decode_program(SIGNED_PROGRAM, Semantics::Hardware).unwrap(),
        vec![
            "mov ax, [bx + di - 37]",
            "mov [si - 300], cx",
            "mov bp, [3458]",
        ]
    );
}

#[test]
fn test_concrete_memory_case() {
    assert_eq!(decode(&[0b10001010, 0b00000000]).unwrap(), vec!["mov al, [bx + si]"]);
    assert_eq!(decode(&[0b10001011, 0b00000000]).unwrap(), vec!["mov ax, [bx + si]"]);
}

#[test]
fn test_concrete_immediate_case() {
    assert_eq!(decode(&[0b10111000, 0b00000001, 0b00000000]).unwrap(), vec!["mov ax, 1"]);
}

#[test]
fn test_memory_operand_structure() {
    let inst = decode_instruction(&[0x8A, 0x60, 0x04], 0, Semantics::Literal).unwrap();
    assert_eq!(
        inst.src,
        Operand::Memory(EffectiveAddress::Based {
            rm: 0b000,
            displacement: Displacement::Unsigned(4),
        })
    );
}

#[test]
fn test_partial_output_before_error() {
    let mut lines = Vec::new();
    let mut failure = None;
    for result in Decoder::new(&[0x89, 0xD9, 0xB1, 0x0C, 0x89], Semantics::Literal) {
        match result {
            Ok(inst) => lines.push(inst.to_string()),
            Err(e) => failure = Some(e),
        }
    }
    assert_eq!(lines, vec!["mov cx, bx", "mov cl, 12"]);
    assert_eq!(failure, Some(DecodeError::TrailingByte { offset: 4, byte: 0x89 }));
}

#[test]
fn test_empty_and_single_byte() {
    assert!(decode(&[]).unwrap().is_empty());
    assert!(matches!(
        decode(&[0xB8]),
        Err(DecodeError::TrailingByte { offset: 0, byte: 0xB8 })
    ));
}
