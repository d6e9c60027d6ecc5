use super::decode::{DecodedInstruction, Decoder, Recovery};
use super::error::DecodeError;
use super::field::OperandField;
use super::table::InstructionTable;
use crate::image::ProgramImage;
use log::{debug, error};
use std::fmt::Write as _;
use std::io;

//===========================================================================//

/// The width that the offset and raw bytes are padded to.  Two spaces
/// follow, so the mnemonic always starts at column 27.
const BYTES_FIELD_WIDTH: usize = 25;

//===========================================================================//

/// Formats a decoded instruction as a single listing line, e.g.
/// `00000000: 00ab             com [%x]+0xab`.
pub fn render(decoded: &DecodedInstruction) -> String {
    let mut prefix = format!("{:08x}: ", decoded.offset);
    for byte in decoded.raw_bytes.iter() {
        let _ = write!(prefix, "{byte:02x}");
    }
    let mnemonic = decoded.mnemonic();
    let mut line = format!("{prefix:<BYTES_FIELD_WIDTH$}  {mnemonic}");
    let marker = decoded
        .descriptor
        .mode
        .operand_index()
        .map_or("", |reg| reg.marker());
    let operands =
        decoded.descriptor.operands.iter().zip(decoded.operand_values.iter());
    for (index, (field, &value)) in operands.enumerate() {
        line.push_str(if index == 0 { " " } else { ", " });
        line.push_str(marker);
        line.push_str(&format_value(field, value));
    }
    line
}

/// Formats an operand value as `0x` plus lowercase hex, truncated to the
/// field's width and zero-padded to two digits per (partial) byte.
pub fn format_value(field: &OperandField, value: i64) -> String {
    let bits = (value as u64) & field.mask();
    format!("0x{:0width$x}", bits, width = field.hex_digits())
}

//===========================================================================//

/// The outcome of writing a complete listing for one program image.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListingSummary {
    /// The number of instructions written.
    pub instructions: usize,
    /// Every decode error encountered, in order.
    pub errors: Vec<DecodeError>,
}

impl ListingSummary {
    /// Returns true if the whole image decoded without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Decodes the whole image and writes one rendered line per instruction,
/// each followed by a blank line.  Decode errors are logged and collected
/// rather than returned; only I/O errors from `out` abort the listing.
pub fn write_listing<W, I>(
    out: &mut W,
    table: &InstructionTable,
    image: &I,
    recovery: Recovery,
) -> io::Result<ListingSummary>
where
    W: io::Write,
    I: ProgramImage + ?Sized,
{
    let mut summary = ListingSummary::default();
    for result in Decoder::with_recovery(table, image, recovery) {
        match result {
            Ok(decoded) => {
                writeln!(out, "{}\n", render(&decoded))?;
                summary.instructions += 1;
            }
            Err(err) => {
                error!("{}: {}", image.description(), err);
                summary.errors.push(err);
            }
        }
    }
    debug!(
        "{}: {} instruction(s), {} error(s)",
        image.description(),
        summary.instructions,
        summary.errors.len()
    );
    Ok(summary)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{format_value, render, write_listing};
    use crate::dis::field::OperandField;
    use crate::dis::{DecodeError, Decoder, InstructionTable, Recovery};

    fn render_all(code: &[u8]) -> Vec<String> {
        let table = InstructionTable::cpu16();
        Decoder::new(&table, code)
            .map(|result| render(&result.expect("decodes")))
            .collect()
    }

    #[test]
    fn indexed8_line() {
        assert_eq!(render_all(&[0x00, 0xab]), vec![
            "00000000: 00ab             com [%x]+0xab"
        ]);
    }

    #[test]
    fn indexed16_line() {
        assert_eq!(render_all(&[0x17, 0x00, 0x12, 0x34]), vec![
            "00000000: 17001234         com [%x]+0x1234"
        ]);
    }

    #[test]
    fn index_marker_follows_register() {
        let lines = render_all(&[0x10, 0x01, 0x20, 0x02]);
        assert_eq!(lines[0], "00000000: 1001             com [%y]+0x01");
        assert_eq!(lines[1], "00000002: 2002             com [%z]+0x02");
    }

    #[test]
    fn multiple_operands_are_comma_separated() {
        let lines = render_all(&[0x4b, 0x0f, 0xff, 0xfe]);
        assert_eq!(
            lines[0],
            "00000000: 4b0ffffe         jmp [%x]+0x0f, [%x]+0xfffe"
        );
        let lines = render_all(&[0x7a, 0x5c, 0x12, 0x34]);
        assert_eq!(
            lines[0],
            "00000000: 7a5c1234         jmp 0x05, 0x0c, 0x12, 0x34"
        );
    }

    #[test]
    fn inherent_has_no_operands() {
        assert_eq!(render_all(&[0x37, 0x00]), vec![
            "00000000: 3700             coma"
        ]);
    }

    #[test]
    fn mnemonic_starts_at_column_27() {
        let codes: [&[u8]; 2] =
            [&[0x00, 0xab], &[0x27, 0x30, 0x12, 0x34, 0x00, 0xff]];
        for code in codes {
            let line = render_all(code).remove(0);
            assert_eq!(&line[25..27], "  ", "{line}");
            assert_ne!(&line[27..28], " ", "{line}");
        }
        let line = render_all(&[0x00, 0xab]).remove(0);
        assert_eq!(line.find("com"), Some(27));
    }

    #[test]
    fn offsets_are_eight_digits() {
        let lines = render_all(&[0xb0, 0xfe, 0xb0, 0x02]);
        assert_eq!(lines[1], "00000002: b002             bra 0x02");
    }

    #[test]
    fn negative_values_are_truncated() {
        assert_eq!(format_value(&OperandField::II, -1), "0xff");
        assert_eq!(format_value(&OperandField::GGGG, -2), "0xfffe");
        assert_eq!(format_value(&OperandField::ZG, -8), "0x08");
        assert_eq!(format_value(&OperandField::RRRR, 0x10), "0x0010");
        assert_eq!(format_value(&OperandField::Z, 0), "0x00");
    }

    #[test]
    fn listing_separates_lines_with_blank_lines() {
        let table = InstructionTable::cpu16();
        let code: &[u8] = &[0x00, 0xab, 0x37, 0x00];
        let mut out = Vec::<u8>::new();
        let summary = write_listing(&mut out, &table, code, Recovery::Halt)
            .expect("write to Vec");
        assert!(summary.is_clean());
        assert_eq!(summary.instructions, 2);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "00000000: 00ab             com [%x]+0xab\n\n\
             00000002: 3700             coma\n\n"
        );
    }

    #[test]
    fn listing_collects_errors() {
        let table = InstructionTable::cpu16();
        let code: &[u8] = &[0x00, 0x10, 0x17, 0x00, 0x12];
        let mut out = Vec::<u8>::new();
        let summary = write_listing(&mut out, &table, code, Recovery::Halt)
            .expect("write to Vec");
        assert_eq!(summary.instructions, 1);
        assert_eq!(summary.errors, vec![DecodeError::OutOfBounds {
            offset: 2,
            needed: 4,
            len: 5,
        }]);
        assert!(!summary.is_clean());
    }
}

//===========================================================================//
