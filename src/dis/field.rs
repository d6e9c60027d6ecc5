use super::error::DecodeError;
use crate::image::ProgramImage;
use byteorder::{BigEndian, ByteOrder};
use log::trace;

//===========================================================================//

/// How the bits above an operand field's width are filled in when the field
/// is extracted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Extension {
    /// The field is unsigned; higher bits are zero.
    #[default]
    None,
    /// The field's top bit is replicated into all higher bits.
    SignExtend,
    /// The field is explicitly zero-extended.
    ZeroExtend,
}

//===========================================================================//

/// What an operand field encodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    /// A 4-bit address extension (bits 19:16 of a 20-bit address).
    AddressExtension,
    /// An unsigned 8-bit offset.
    Offset8,
    /// A signed 16-bit offset.
    Offset16,
    /// The top four bits of a signed 20-bit offset.
    Offset20High,
    /// The high byte of a 16-bit address.
    AddressHigh,
    /// A signed 8-bit immediate value.
    Immediate8,
    /// The high byte of a 16-bit immediate value.
    ImmediateHigh,
    /// The low byte of a 16-bit immediate value.
    ImmediateLow,
    /// The low byte of a 16-bit address.
    AddressLow,
    /// An 8-bit bit mask.
    Mask8,
    /// A 16-bit bit mask.
    Mask16,
    /// An 8-bit branch displacement.
    Relative8,
    /// A signed 16-bit branch displacement.
    Relative16,
    /// The X index offset of a MAC instruction.
    MacXOffset,
    /// The Y index offset of a MAC instruction.
    MacYOffset,
    /// A 4-bit zero extension (bits 19:16 of a 20-bit address).
    ZeroExtension,
}

impl FieldKind {
    /// Returns a short human-readable description of this kind of field.
    pub fn description(self) -> &'static str {
        match self {
            FieldKind::AddressExtension => "address extension",
            FieldKind::Offset8 => "8-bit offset",
            FieldKind::Offset16 => "16-bit offset",
            FieldKind::Offset20High => "20-bit offset, high nibble",
            FieldKind::AddressHigh => "address, high byte",
            FieldKind::Immediate8 => "8-bit immediate",
            FieldKind::ImmediateHigh => "immediate, high byte",
            FieldKind::ImmediateLow => "immediate, low byte",
            FieldKind::AddressLow => "address, low byte",
            FieldKind::Mask8 => "8-bit mask",
            FieldKind::Mask16 => "16-bit mask",
            FieldKind::Relative8 => "8-bit displacement",
            FieldKind::Relative16 => "16-bit displacement",
            FieldKind::MacXOffset => "MAC X offset",
            FieldKind::MacYOffset => "MAC Y offset",
            FieldKind::ZeroExtension => "zero extension",
        }
    }
}

//===========================================================================//

/// A named, fixed-width bit region within an instruction's operand bytes.
///
/// Fields can only be built with `OperandField::new`, so the width is always
/// between 1 and 32 bits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OperandField {
    name: &'static str,
    kind: FieldKind,
    width_bits: u32,
    extension: Extension,
}

impl OperandField {
    /// A 4-bit address extension.
    pub const B: OperandField = OperandField::new(
        "b",
        FieldKind::AddressExtension,
        4,
        Extension::None,
    );
    /// An 8-bit offset.
    pub const FF: OperandField =
        OperandField::new("ff", FieldKind::Offset8, 8, Extension::None);
    /// A signed 16-bit offset.
    pub const GGGG: OperandField = OperandField::new(
        "gggg",
        FieldKind::Offset16,
        16,
        Extension::SignExtend,
    );
    /// The high nibble of a signed 20-bit offset.
    pub const ZG: OperandField = OperandField::new(
        "zg",
        FieldKind::Offset20High,
        4,
        Extension::SignExtend,
    );
    /// The high byte of a 16-bit address.
    pub const HH: OperandField =
        OperandField::new("hh", FieldKind::AddressHigh, 8, Extension::None);
    /// A signed 8-bit immediate.
    pub const II: OperandField = OperandField::new(
        "ii",
        FieldKind::Immediate8,
        8,
        Extension::SignExtend,
    );
    /// The high byte of a 16-bit immediate.
    pub const JJ: OperandField =
        OperandField::new("jj", FieldKind::ImmediateHigh, 8, Extension::None);
    /// The low byte of a 16-bit immediate.
    pub const KK: OperandField =
        OperandField::new("kk", FieldKind::ImmediateLow, 8, Extension::None);
    /// The low byte of a 16-bit address.
    pub const LL: OperandField =
        OperandField::new("ll", FieldKind::AddressLow, 8, Extension::None);
    /// An 8-bit mask.
    pub const MM: OperandField =
        OperandField::new("mm", FieldKind::Mask8, 8, Extension::None);
    /// A 16-bit mask.
    pub const MMMM: OperandField =
        OperandField::new("mmmm", FieldKind::Mask16, 16, Extension::None);
    /// An 8-bit branch displacement.
    pub const RR: OperandField =
        OperandField::new("rr", FieldKind::Relative8, 8, Extension::None);
    /// A signed 16-bit branch displacement.
    pub const RRRR: OperandField = OperandField::new(
        "rrrr",
        FieldKind::Relative16,
        16,
        Extension::SignExtend,
    );
    /// MAC X index offset.
    pub const XO: OperandField =
        OperandField::new("xo", FieldKind::MacXOffset, 8, Extension::None);
    /// MAC Y index offset.
    pub const YO: OperandField =
        OperandField::new("yo", FieldKind::MacYOffset, 8, Extension::None);
    /// A 4-bit zero extension.
    pub const Z: OperandField = OperandField::new(
        "z",
        FieldKind::ZeroExtension,
        4,
        Extension::ZeroExtend,
    );

    /// Creates a new operand field.  Panics if `width_bits` is not between 1
    /// and 32.
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        width_bits: u32,
        extension: Extension,
    ) -> OperandField {
        assert!(width_bits >= 1 && width_bits <= 32);
        OperandField { name, kind, width_bits, extension }
    }

    /// Returns the field's name, as written in the CPU16 reference manual.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns what the field encodes.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the width of the field, in bits (1 to 32).
    pub fn width_bits(&self) -> u32 {
        self.width_bits
    }

    /// Returns how the field's value is extended when extracted.
    pub fn extension(&self) -> Extension {
        self.extension
    }

    /// Returns a mask covering the low `width_bits` bits.
    pub fn mask(&self) -> u64 {
        u64::MAX >> (64 - self.width_bits)
    }

    /// Returns the number of hex digits used to display this field: two per
    /// started byte.
    pub fn hex_digits(&self) -> usize {
        2 * self.width_bits.div_ceil(8) as usize
    }
}

//===========================================================================//

/// Extracts an operand field from the program image, starting `bit_offset`
/// bits (MSB-first) from the start of the image.  Returns the field's value
/// and the number of bits consumed.
///
/// Every byte that the field touches is bounds-checked before any of them
/// is read; if any lies at or beyond the end of the image, nothing is read
/// and `DecodeError::OutOfBounds` is returned.
pub fn extract<I: ProgramImage + ?Sized>(
    image: &I,
    bit_offset: usize,
    field: &OperandField,
) -> Result<(i64, u32), DecodeError> {
    let width = field.width_bits as usize;
    let first = bit_offset / 8;
    let last = (bit_offset + width - 1) / 8;
    let count = last + 1 - first;
    if last >= image.len() {
        return Err(DecodeError::OutOfBounds {
            offset: first,
            needed: count,
            len: image.len(),
        });
    }
    // A field of at most 32 bits starting anywhere within a byte covers at
    // most five bytes.
    let mut bytes = [0u8; 8];
    for (index, byte) in bytes[..count].iter_mut().enumerate() {
        *byte = image.peek_byte(first + index);
    }
    let raw = BigEndian::read_uint(&bytes[..count], count);
    let shift = count * 8 - (bit_offset % 8) - width;
    let mask = field.mask();
    let bits = (raw >> shift) & mask;
    let top_bit_set = (bits >> (width - 1)) & 1 != 0;
    let value = match field.extension {
        Extension::SignExtend if top_bit_set => (bits | !mask) as i64,
        Extension::SignExtend | Extension::ZeroExtend | Extension::None => {
            bits as i64
        }
    };
    trace!(
        "field {} ({}) at bit {bit_offset}: {value:#x}",
        field.name,
        field.kind.description()
    );
    Ok((value, field.width_bits))
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{Extension, FieldKind, OperandField, extract};
    use crate::dis::DecodeError;
    use crate::image::TracingImage;

    fn field(width_bits: u32, extension: Extension) -> OperandField {
        OperandField::new("t", FieldKind::Immediate8, width_bits, extension)
    }

    #[test]
    fn whole_bytes() {
        let code: &[u8] = &[0xab, 0x12, 0x34];
        assert_eq!(extract(code, 0, &OperandField::FF), Ok((0xab, 8)));
        assert_eq!(extract(code, 8, &OperandField::MMMM), Ok((0x1234, 16)));
    }

    #[test]
    fn nibbles() {
        let code: &[u8] = &[0x5c, 0x12, 0x34];
        assert_eq!(extract(code, 0, &OperandField::Z), Ok((0x5, 4)));
        assert_eq!(extract(code, 4, &OperandField::B), Ok((0xc, 4)));
    }

    #[test]
    fn unaligned_multi_byte_field() {
        let code: &[u8] = &[0x0a, 0xbc, 0xd0];
        let wide = field(16, Extension::None);
        assert_eq!(extract(code, 4, &wide), Ok((0xabcd, 16)));
        let narrow = field(12, Extension::None);
        assert_eq!(extract(code, 8, &narrow), Ok((0xbcd, 12)));
    }

    #[test]
    fn sign_extension() {
        let code: &[u8] = &[0xff, 0xfe, 0x80];
        assert_eq!(extract(code, 0, &OperandField::GGGG), Ok((-2, 16)));
        assert_eq!(extract(code, 16, &OperandField::II), Ok((-128, 8)));
        let code: &[u8] = &[0x7f, 0xff];
        assert_eq!(extract(code, 0, &OperandField::RRRR), Ok((0x7fff, 16)));
        let code: &[u8] = &[0x08];
        assert_eq!(extract(code, 4, &OperandField::ZG), Ok((-8, 4)));
    }

    #[test]
    fn zero_extension() {
        let code: &[u8] = &[0x08];
        assert_eq!(extract(code, 4, &OperandField::Z), Ok((8, 4)));
        let code: &[u8] = &[0xff, 0xfe];
        let (value, _) = extract(code, 0, &field(16, Extension::ZeroExtend))
            .expect("in bounds");
        assert_eq!(value, 0xfffe);
        assert!(value > 0);
    }

    #[test]
    fn sign_vs_zero_extension_for_every_width() {
        let code: &[u8] = &[0xff; 5];
        for width in 1..=32 {
            let (signed, _) =
                extract(code, 3, &field(width, Extension::SignExtend))
                    .expect("in bounds");
            assert_eq!(signed, -1, "width {width}");
            let (unsigned, _) =
                extract(code, 3, &field(width, Extension::ZeroExtend))
                    .expect("in bounds");
            let all_ones = ((1u64 << width) - 1) as i64;
            assert_eq!(unsigned, all_ones, "width {width}");
        }
    }

    #[test]
    fn thirty_two_bits_across_five_bytes() {
        let code: &[u8] = &[0x01, 0x23, 0x45, 0x67, 0x89];
        let word = field(32, Extension::None);
        assert_eq!(extract(code, 4, &word), Ok((0x12345678, 32)));
    }

    #[test]
    fn out_of_bounds_reads_nothing() {
        let code: &[u8] = &[0x12, 0x34];
        let image = TracingImage::new(code);
        assert_eq!(
            extract(&image, 8, &OperandField::MMMM),
            Err(DecodeError::OutOfBounds { offset: 1, needed: 2, len: 2 })
        );
        assert!(image.reads().is_empty());
        assert_eq!(
            extract(&image, 16, &OperandField::FF),
            Err(DecodeError::OutOfBounds { offset: 2, needed: 1, len: 2 })
        );
        assert!(image.reads().is_empty());
    }

    #[test]
    fn accessors() {
        let gggg = OperandField::GGGG;
        assert_eq!(gggg.name(), "gggg");
        assert_eq!(gggg.kind(), FieldKind::Offset16);
        assert_eq!(gggg.width_bits(), 16);
        assert_eq!(gggg.extension(), Extension::SignExtend);
        assert_eq!(gggg.mask(), 0xffff);
    }

    #[test]
    #[should_panic]
    fn zero_width_is_rejected() {
        let _ = field(0, Extension::None);
    }

    #[test]
    #[should_panic]
    fn over_wide_field_is_rejected() {
        let _ = field(33, Extension::None);
    }

    #[test]
    fn hex_digits() {
        assert_eq!(OperandField::Z.hex_digits(), 2);
        assert_eq!(OperandField::FF.hex_digits(), 2);
        assert_eq!(OperandField::GGGG.hex_digits(), 4);
        assert_eq!(field(20, Extension::None).hex_digits(), 6);
    }
}

//===========================================================================//
