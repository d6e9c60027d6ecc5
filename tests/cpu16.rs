use cpu16dis::dis::{
    DecodeError, Decoder, InstructionTable, Recovery, render, write_listing,
};
use cpu16dis::image::{RomImage, TracingImage};

//===========================================================================//

fn disassemble(code: &[u8]) -> Vec<String> {
    let table = InstructionTable::cpu16();
    Decoder::new(&table, code)
        .map(|result| render(&result.expect("decodes")))
        .collect()
}

fn test_instruction(code: &[u8], listing: &str) {
    assert_eq!(disassemble(code), vec![listing.to_string()]);
}

#[test]
fn op_bset_indexed16() {
    test_instruction(
        &[0x09, 0x80, 0x00, 0x10, 0xff, 0xfc],
        "00000000: 09800010fffc     bset [%x]+0x80, [%x]+0x0010, [%x]+0xfffc",
    );
}

#[test]
fn op_movb_indexed_to_extended() {
    test_instruction(
        &[0x30, 0x04, 0x12, 0x34],
        "00000000: 30041234         movb 0x04, 0x12, 0x34",
    );
}

#[test]
fn op_jsr_extended20() {
    test_instruction(
        &[0xfa, 0x01, 0x23, 0x45],
        "00000000: fa012345         jsr 0x00, 0x01, 0x23, 0x45",
    );
}

#[test]
fn op_rmac_offsets() {
    test_instruction(
        &[0xfb, 0x11, 0x22],
        "00000000: fb1122           rmac 0x11, 0x22",
    );
}

#[test]
fn op_comw_extended() {
    test_instruction(
        &[0x27, 0x30, 0x12, 0x34, 0x00, 0xff],
        "00000000: 2730123400ff     comw 0x12, 0x34, 0x00ff",
    );
}

#[test]
fn op_unrecognized_inherent_page() {
    test_instruction(&[0x37, 0x92], "00000000: 3792             unrecognized");
}

#[test]
fn op_unrecognized_immediate_page() {
    test_instruction(
        &[0x17, 0x80, 0x7f],
        "00000000: 17807f           unrecognized 0x7f",
    );
}

#[test]
fn listing_offsets_accumulate() {
    let code = RomImage::from(vec![
        0x37, 0xb5, 0x12, 0x34, 0x4b, 0x0f, 0xff, 0xfe,
        0x37, 0x80, 0xff, 0xf0, 0xb0, 0xfe,
    ]);
    let table = InstructionTable::cpu16();
    let lines: Vec<String> = Decoder::new(&table, &code)
        .map(|result| render(&result.expect("decodes")))
        .collect();
    assert_eq!(
        lines,
        vec![
            "00000000: 37b51234         ldd 0x12, 0x34",
            "00000004: 4b0ffffe         jmp [%x]+0x0f, [%x]+0xfffe",
            "00000008: 3780fff0         lbra 0xfff0",
            "0000000c: b0fe             bra 0xfe",
        ]
    );
}

#[test]
fn truncated_instruction_stops_listing() {
    let table = InstructionTable::cpu16();
    let code: &[u8] = &[0x00, 0x10, 0x17, 0x00, 0x12];
    let mut out = Vec::<u8>::new();
    let summary = write_listing(&mut out, &table, code, Recovery::Halt)
        .expect("write to Vec");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "00000000: 0010             com [%x]+0x10\n\n"
    );
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].offset(), 2);
}

#[test]
fn resync_skips_to_next_instruction() {
    let table = InstructionTable::cpu16();
    // The ldd at offset 2 is cut short; its second byte reads as a bcs.
    let code: &[u8] = &[0x00, 0x10, 0x37, 0xb5, 0x12];
    let mut out = Vec::<u8>::new();
    let summary = write_listing(&mut out, &table, code, Recovery::SkipByte)
        .expect("write to Vec");
    let listing = String::from_utf8(out).expect("utf8");
    assert!(listing.ends_with("00000003: b512             bcs 0x12\n\n"));
    assert_eq!(summary.errors[0], DecodeError::OutOfBounds {
        offset: 2,
        needed: 4,
        len: 5,
    });
}

#[test]
fn never_reads_past_end_of_image() {
    let table = InstructionTable::cpu16();
    let mut code = Vec::<u8>::new();
    for opcode in 0..=u8::MAX {
        code.clear();
        code.extend_from_slice(&[0x27, opcode, 0xff]);
        let image = TracingImage::new(&code);
        let decoder =
            Decoder::with_recovery(&table, &image, Recovery::SkipByte);
        for _ in decoder {}
        assert!(image.out_of_range_reads().is_empty());
    }
}

//===========================================================================//
