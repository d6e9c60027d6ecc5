use super::field::OperandField;
use super::mode::IndexReg::{X, Y, Z};
use super::mode::{AddrMode, Page};
use super::table::InstructionDescriptor;

//===========================================================================//

type Layout = &'static [OperandField];

const NONE: Layout = &[];
const FF: Layout = &[OperandField::FF];
const II: Layout = &[OperandField::II];
const RR: Layout = &[OperandField::RR];
const GGGG: Layout = &[OperandField::GGGG];
const RRRR: Layout = &[OperandField::RRRR];
const GGGG_MMMM: Layout = &[OperandField::GGGG, OperandField::MMMM];
const HH_LL: Layout = &[OperandField::HH, OperandField::LL];
const JJ_KK: Layout = &[OperandField::JJ, OperandField::KK];
const MM_GGGG: Layout = &[OperandField::MM, OperandField::GGGG];
const XO_YO: Layout = &[OperandField::XO, OperandField::YO];
const ZG_GGGG: Layout = &[OperandField::ZG, OperandField::GGGG];
const FF_HH_LL: Layout =
    &[OperandField::FF, OperandField::HH, OperandField::LL];
const HH_LL_MMMM: Layout =
    &[OperandField::HH, OperandField::LL, OperandField::MMMM];
const MM_GGGG_RRRR: Layout =
    &[OperandField::MM, OperandField::GGGG, OperandField::RRRR];
const MM_HH_LL: Layout =
    &[OperandField::MM, OperandField::HH, OperandField::LL];
const MM_HH_LL_RRRR: Layout = &[
    OperandField::MM,
    OperandField::HH,
    OperandField::LL,
    OperandField::RRRR,
];
const Z_B_HH_LL: Layout =
    &[OperandField::Z, OperandField::B, OperandField::HH, OperandField::LL];

type Entry = (&'static str, AddrMode, Layout);

//===========================================================================//

/// Returns the descriptor for the given opcode on the given page of the CPU16
/// instruction set.  Opcodes that the CPU16 does not define (including the
/// three prefix bytes themselves, when looked up unprefixed) get the page's
/// `unrecognized` descriptor.
pub(crate) fn descriptor(page: Page, opcode: u8) -> InstructionDescriptor {
    let entry = match page {
        Page::Unprefixed => unprefixed(opcode),
        Page::Prefix17 => prefix_17(opcode),
        Page::Prefix27 => prefix_27(opcode),
        Page::Prefix37 => prefix_37(opcode),
    };
    match entry {
        Some((mnemonic, mode, operands)) => {
            InstructionDescriptor::new(opcode, mnemonic, mode, operands)
        }
        None => InstructionDescriptor::unrecognized(page, opcode),
    }
}

//===========================================================================//

/// Opcodes with no prefix byte.
fn unprefixed(opcode: u8) -> Option<Entry> {
    let entry = match opcode {
        0x00 => ("com", AddrMode::Indexed8(X), FF),
        0x01 => ("dec", AddrMode::Indexed8(X), FF),
        0x02 => ("neg", AddrMode::Indexed8(X), FF),
        0x03 => ("inc", AddrMode::Indexed8(X), FF),
        0x04 => ("asl", AddrMode::Indexed8(X), FF),
        0x05 => ("clr", AddrMode::Indexed8(X), FF),
        0x06 => ("tst", AddrMode::Indexed8(X), FF),
        0x08 => ("bclr", AddrMode::Indexed16(X), MM_GGGG_RRRR),
        0x09 => ("bset", AddrMode::Indexed16(X), MM_GGGG_RRRR),
        0x0a => ("brclr", AddrMode::Indexed16(X), MM_GGGG_RRRR),
        0x0b => ("brset", AddrMode::Indexed16(X), MM_GGGG_RRRR),
        0x0c => ("rol", AddrMode::Indexed8(X), FF),
        0x0d => ("asr", AddrMode::Indexed8(X), FF),
        0x0e => ("ror", AddrMode::Indexed8(X), FF),
        0x0f => ("lsr", AddrMode::Indexed8(X), FF),
        0x10 => ("com", AddrMode::Indexed8(Y), FF),
        0x11 => ("dec", AddrMode::Indexed8(Y), FF),
        0x12 => ("neg", AddrMode::Indexed8(Y), FF),
        0x13 => ("inc", AddrMode::Indexed8(Y), FF),
        0x14 => ("asl", AddrMode::Indexed8(Y), FF),
        0x15 => ("clr", AddrMode::Indexed8(Y), FF),
        0x16 => ("tst", AddrMode::Indexed8(Y), FF),
        0x18 => ("bclr", AddrMode::Indexed16(Y), MM_GGGG_RRRR),
        0x19 => ("bset", AddrMode::Indexed16(Y), MM_GGGG_RRRR),
        0x1a => ("brclr", AddrMode::Indexed16(Y), MM_GGGG_RRRR),
        0x1b => ("brset", AddrMode::Indexed16(Y), MM_GGGG_RRRR),
        0x1c => ("rol", AddrMode::Indexed8(Y), FF),
        0x1d => ("asr", AddrMode::Indexed8(Y), FF),
        0x1e => ("ror", AddrMode::Indexed8(Y), FF),
        0x1f => ("lsr", AddrMode::Indexed8(Y), FF),
        0x20 => ("com", AddrMode::Indexed8(Z), FF),
        0x21 => ("dec", AddrMode::Indexed8(Z), FF),
        0x22 => ("neg", AddrMode::Indexed8(Z), FF),
        0x23 => ("inc", AddrMode::Indexed8(Z), FF),
        0x24 => ("asl", AddrMode::Indexed8(Z), FF),
        0x25 => ("clr", AddrMode::Indexed8(Z), FF),
        0x26 => ("tst", AddrMode::Indexed8(Z), FF),
        0x28 => ("bclr", AddrMode::Indexed16(Z), MM_GGGG_RRRR),
        0x29 => ("bset", AddrMode::Indexed16(Z), MM_GGGG_RRRR),
        0x2a => ("brclr", AddrMode::Indexed16(Z), MM_GGGG_RRRR),
        0x2b => ("brset", AddrMode::Indexed16(Z), MM_GGGG_RRRR),
        0x2c => ("rol", AddrMode::Indexed8(Z), FF),
        0x2d => ("asr", AddrMode::Indexed8(Z), FF),
        0x2e => ("ror", AddrMode::Indexed8(Z), FF),
        0x2f => ("lsr", AddrMode::Indexed8(Z), FF),
        0x30 => ("movb", AddrMode::IndexedToExtended, FF_HH_LL),
        0x31 => ("movw", AddrMode::IndexedToExtended, FF_HH_LL),
        0x32 => ("movb", AddrMode::ExtendedToIndexed, FF_HH_LL),
        0x33 => ("movw", AddrMode::ExtendedToIndexed, FF_HH_LL),
        0x34 => ("pshm", AddrMode::Inherent, II),
        0x35 => ("pulm", AddrMode::Inherent, II),
        0x36 => ("bsr", AddrMode::Relative8, RR),
        0x38 => ("bclr", AddrMode::Extended, MM_HH_LL),
        0x39 => ("bset", AddrMode::Extended, MM_HH_LL),
        0x3a => ("brclr", AddrMode::Extended, MM_HH_LL_RRRR),
        0x3b => ("brset", AddrMode::Extended, MM_HH_LL_RRRR),
        0x3c => ("aix", AddrMode::Immediate8, II),
        0x3d => ("aiy", AddrMode::Immediate8, II),
        0x3e => ("aiz", AddrMode::Immediate8, II),
        0x3f => ("ais", AddrMode::Immediate8, II),
        0x40 => ("suba", AddrMode::Indexed8(X), FF),
        0x41 => ("adda", AddrMode::Indexed8(X), FF),
        0x42 => ("sbca", AddrMode::Indexed8(X), FF),
        0x43 => ("adca", AddrMode::Indexed8(X), FF),
        0x44 => ("eora", AddrMode::Indexed8(X), FF),
        0x45 => ("ldaa", AddrMode::Indexed8(X), FF),
        0x46 => ("anda", AddrMode::Indexed8(X), FF),
        0x47 => ("oraa", AddrMode::Indexed8(X), FF),
        0x48 => ("cmpa", AddrMode::Indexed8(X), FF),
        0x49 => ("bita", AddrMode::Indexed8(X), FF),
        0x4a => ("staa", AddrMode::Indexed8(X), FF),
        0x4b => ("jmp", AddrMode::Indexed20(X), ZG_GGGG),
        0x4c => ("cpx", AddrMode::Indexed8(X), FF),
        0x4d => ("cpy", AddrMode::Indexed8(X), FF),
        0x4e => ("cpz", AddrMode::Indexed8(X), FF),
        0x4f => ("cps", AddrMode::Indexed8(X), FF),
        0x50 => ("suba", AddrMode::Indexed8(Y), FF),
        0x51 => ("adda", AddrMode::Indexed8(Y), FF),
        0x52 => ("sbca", AddrMode::Indexed8(Y), FF),
        0x53 => ("adca", AddrMode::Indexed8(Y), FF),
        0x54 => ("eora", AddrMode::Indexed8(Y), FF),
        0x55 => ("ldaa", AddrMode::Indexed8(Y), FF),
        0x56 => ("anda", AddrMode::Indexed8(Y), FF),
        0x57 => ("oraa", AddrMode::Indexed8(Y), FF),
        0x58 => ("cmpa", AddrMode::Indexed8(Y), FF),
        0x59 => ("bita", AddrMode::Indexed8(Y), FF),
        0x5a => ("staa", AddrMode::Indexed8(Y), FF),
        0x5b => ("jmp", AddrMode::Indexed20(Y), ZG_GGGG),
        0x5c => ("cpx", AddrMode::Indexed8(Y), FF),
        0x5d => ("cpy", AddrMode::Indexed8(Y), FF),
        0x5e => ("cpz", AddrMode::Indexed8(Y), FF),
        0x5f => ("cps", AddrMode::Indexed8(Y), FF),
        0x60 => ("suba", AddrMode::Indexed8(Z), FF),
        0x61 => ("adda", AddrMode::Indexed8(Z), FF),
        0x62 => ("sbca", AddrMode::Indexed8(Z), FF),
        0x63 => ("adca", AddrMode::Indexed8(Z), FF),
        0x64 => ("eora", AddrMode::Indexed8(Z), FF),
        0x65 => ("ldaa", AddrMode::Indexed8(Z), FF),
        0x66 => ("anda", AddrMode::Indexed8(Z), FF),
        0x67 => ("oraa", AddrMode::Indexed8(Z), FF),
        0x68 => ("cmpa", AddrMode::Indexed8(Z), FF),
        0x69 => ("bita", AddrMode::Indexed8(Z), FF),
        0x6a => ("staa", AddrMode::Indexed8(Z), FF),
        0x6b => ("jmp", AddrMode::Indexed20(Z), ZG_GGGG),
        0x6c => ("cpx", AddrMode::Indexed8(Z), FF),
        0x6d => ("cpy", AddrMode::Indexed8(Z), FF),
        0x6e => ("cpz", AddrMode::Indexed8(Z), FF),
        0x6f => ("cps", AddrMode::Indexed8(Z), FF),
        0x70 => ("suba", AddrMode::Immediate8, FF),
        0x71 => ("adda", AddrMode::Immediate8, FF),
        0x72 => ("sbca", AddrMode::Immediate8, FF),
        0x73 => ("adca", AddrMode::Immediate8, FF),
        0x74 => ("eora", AddrMode::Immediate8, FF),
        0x75 => ("ldaa", AddrMode::Immediate8, FF),
        0x76 => ("anda", AddrMode::Immediate8, FF),
        0x77 => ("oraa", AddrMode::Immediate8, FF),
        0x78 => ("cmpa", AddrMode::Immediate8, FF),
        0x79 => ("bita", AddrMode::Immediate8, FF),
        0x7a => ("jmp", AddrMode::Extended, Z_B_HH_LL),
        0x7b => ("mac", AddrMode::Immediate8, FF),
        0x7c => ("adde", AddrMode::Immediate8, FF),
        0x80 => ("subd", AddrMode::Indexed8(X), FF),
        0x81 => ("addd", AddrMode::Indexed8(X), FF),
        0x82 => ("sbcd", AddrMode::Indexed8(X), FF),
        0x83 => ("adcd", AddrMode::Indexed8(X), FF),
        0x84 => ("eord", AddrMode::Indexed8(X), FF),
        0x85 => ("ldd", AddrMode::Indexed8(X), FF),
        0x86 => ("andd", AddrMode::Indexed8(X), FF),
        0x87 => ("ord", AddrMode::Indexed8(X), FF),
        0x88 => ("cmpd", AddrMode::Indexed8(X), FF),
        0x89 => ("jsr", AddrMode::Indexed20(X), ZG_GGGG),
        0x8a => ("std", AddrMode::Indexed8(X), FF),
        0x8b => ("brset", AddrMode::Indexed8(X), FF),
        0x8c => ("stx", AddrMode::Indexed8(X), FF),
        0x8d => ("sty", AddrMode::Indexed8(X), FF),
        0x8e => ("stz", AddrMode::Indexed8(X), FF),
        0x8f => ("sts", AddrMode::Indexed8(X), FF),
        0x90 => ("subd", AddrMode::Indexed8(Y), FF),
        0x91 => ("addd", AddrMode::Indexed8(Y), FF),
        0x92 => ("sbcd", AddrMode::Indexed8(Y), FF),
        0x93 => ("adcd", AddrMode::Indexed8(Y), FF),
        0x94 => ("eord", AddrMode::Indexed8(Y), FF),
        0x95 => ("ldd", AddrMode::Indexed8(Y), FF),
        0x96 => ("andd", AddrMode::Indexed8(Y), FF),
        0x97 => ("ord", AddrMode::Indexed8(Y), FF),
        0x98 => ("cmpd", AddrMode::Indexed8(Y), FF),
        0x99 => ("jsr", AddrMode::Indexed20(Y), ZG_GGGG),
        0x9a => ("std", AddrMode::Indexed8(Y), FF),
        0x9b => ("brset", AddrMode::Indexed8(Y), FF),
        0x9c => ("stx", AddrMode::Indexed8(Y), FF),
        0x9d => ("sty", AddrMode::Indexed8(Y), FF),
        0x9e => ("stz", AddrMode::Indexed8(Y), FF),
        0x9f => ("sts", AddrMode::Indexed8(Y), FF),
        0xa0 => ("subd", AddrMode::Indexed8(Z), FF),
        0xa1 => ("addd", AddrMode::Indexed8(Z), FF),
        0xa2 => ("sbcd", AddrMode::Indexed8(Z), FF),
        0xa3 => ("adcd", AddrMode::Indexed8(Z), FF),
        0xa4 => ("eord", AddrMode::Indexed8(Z), FF),
        0xa5 => ("ldd", AddrMode::Indexed8(Z), FF),
        0xa6 => ("andd", AddrMode::Indexed8(Z), FF),
        0xa7 => ("ord", AddrMode::Indexed8(Z), FF),
        0xa8 => ("cmpd", AddrMode::Indexed8(Z), FF),
        0xa9 => ("jsr", AddrMode::Indexed20(Z), ZG_GGGG),
        0xaa => ("std", AddrMode::Indexed8(Z), FF),
        0xab => ("brset", AddrMode::Indexed8(Z), FF),
        0xac => ("stx", AddrMode::Indexed8(Z), FF),
        0xad => ("sty", AddrMode::Indexed8(Z), FF),
        0xae => ("stz", AddrMode::Indexed8(Z), FF),
        0xaf => ("sts", AddrMode::Indexed8(Z), FF),
        0xb0 => ("bra", AddrMode::Relative8, RR),
        0xb1 => ("brn", AddrMode::Relative8, RR),
        0xb2 => ("bhi", AddrMode::Relative8, RR),
        0xb3 => ("bls", AddrMode::Relative8, RR),
        0xb4 => ("bcc", AddrMode::Relative8, RR),
        0xb5 => ("bcs", AddrMode::Relative8, RR),
        0xb6 => ("bne", AddrMode::Relative8, RR),
        0xb7 => ("beq", AddrMode::Relative8, RR),
        0xb8 => ("bvc", AddrMode::Relative8, RR),
        0xb9 => ("bvs", AddrMode::Relative8, RR),
        0xba => ("bpl", AddrMode::Relative8, RR),
        0xbb => ("bmi", AddrMode::Relative8, RR),
        0xbc => ("bge", AddrMode::Relative8, RR),
        0xbd => ("blt", AddrMode::Relative8, RR),
        0xbe => ("bgt", AddrMode::Relative8, RR),
        0xbf => ("ble", AddrMode::Relative8, RR),
        0xc0 => ("subb", AddrMode::Indexed8(X), FF),
        0xc1 => ("addb", AddrMode::Indexed8(X), FF),
        0xc2 => ("sbcb", AddrMode::Indexed8(X), FF),
        0xc3 => ("adcb", AddrMode::Indexed8(X), FF),
        0xc4 => ("eorb", AddrMode::Indexed8(X), FF),
        0xc5 => ("ldab", AddrMode::Indexed8(X), FF),
        0xc6 => ("andb", AddrMode::Indexed8(X), FF),
        0xc7 => ("orab", AddrMode::Indexed8(X), FF),
        0xc8 => ("cmpb", AddrMode::Indexed8(X), FF),
        0xc9 => ("bitb", AddrMode::Indexed8(X), FF),
        0xca => ("stab", AddrMode::Indexed8(X), FF),
        0xcb => ("brclr", AddrMode::Indexed8(X), FF),
        0xcc => ("ldx", AddrMode::Indexed8(X), FF),
        0xcd => ("ldy", AddrMode::Indexed8(X), FF),
        0xce => ("ldz", AddrMode::Indexed8(X), FF),
        0xcf => ("lds", AddrMode::Indexed8(X), FF),
        0xd0 => ("subb", AddrMode::Indexed8(Y), FF),
        0xd1 => ("addb", AddrMode::Indexed8(Y), FF),
        0xd2 => ("sbcb", AddrMode::Indexed8(Y), FF),
        0xd3 => ("adcb", AddrMode::Indexed8(Y), FF),
        0xd4 => ("eorb", AddrMode::Indexed8(Y), FF),
        0xd5 => ("ldab", AddrMode::Indexed8(Y), FF),
        0xd6 => ("andb", AddrMode::Indexed8(Y), FF),
        0xd7 => ("orab", AddrMode::Indexed8(Y), FF),
        0xd8 => ("cmpb", AddrMode::Indexed8(Y), FF),
        0xd9 => ("bitb", AddrMode::Indexed8(Y), FF),
        0xda => ("stab", AddrMode::Indexed8(Y), FF),
        0xdb => ("brclr", AddrMode::Indexed8(Y), FF),
        0xdc => ("ldx", AddrMode::Indexed8(Y), FF),
        0xdd => ("ldy", AddrMode::Indexed8(Y), FF),
        0xde => ("ldz", AddrMode::Indexed8(Y), FF),
        0xdf => ("lds", AddrMode::Indexed8(Y), FF),
        0xe0 => ("subb", AddrMode::Indexed8(Z), FF),
        0xe1 => ("addb", AddrMode::Indexed8(Z), FF),
        0xe2 => ("sbcb", AddrMode::Indexed8(Z), FF),
        0xe3 => ("adcb", AddrMode::Indexed8(Z), FF),
        0xe4 => ("eorb", AddrMode::Indexed8(Z), FF),
        0xe5 => ("ldab", AddrMode::Indexed8(Z), FF),
        0xe6 => ("andb", AddrMode::Indexed8(Z), FF),
        0xe7 => ("orab", AddrMode::Indexed8(Z), FF),
        0xe8 => ("cmpb", AddrMode::Indexed8(Z), FF),
        0xe9 => ("bitb", AddrMode::Indexed8(Z), FF),
        0xea => ("stab", AddrMode::Indexed8(Z), FF),
        0xeb => ("brclr", AddrMode::Indexed8(Z), FF),
        0xec => ("ldx", AddrMode::Indexed8(Z), FF),
        0xed => ("ldy", AddrMode::Indexed8(Z), FF),
        0xee => ("ldz", AddrMode::Indexed8(Z), FF),
        0xef => ("lds", AddrMode::Indexed8(Z), FF),
        0xf0 => ("subb", AddrMode::Immediate8, II),
        0xf1 => ("addb", AddrMode::Immediate8, II),
        0xf2 => ("sbcb", AddrMode::Immediate8, II),
        0xf3 => ("adcb", AddrMode::Immediate8, II),
        0xf4 => ("eorb", AddrMode::Immediate8, II),
        0xf5 => ("ldab", AddrMode::Immediate8, II),
        0xf6 => ("andb", AddrMode::Immediate8, II),
        0xf7 => ("orab", AddrMode::Immediate8, II),
        0xf8 => ("cmpb", AddrMode::Immediate8, II),
        0xf9 => ("bitb", AddrMode::Immediate8, II),
        0xfa => ("jsr", AddrMode::Extended20, Z_B_HH_LL),
        0xfb => ("rmac", AddrMode::Immediate8, XO_YO),
        0xfc => ("addd", AddrMode::Immediate8, II),
        _ => return None,
    };
    Some(entry)
}

/// Opcodes following a 0x17 prefix byte.
fn prefix_17(opcode: u8) -> Option<Entry> {
    let entry = match opcode {
        0x00 => ("com", AddrMode::Indexed16(X), GGGG),
        0x01 => ("dec", AddrMode::Indexed16(X), GGGG),
        0x02 => ("neg", AddrMode::Indexed16(X), GGGG),
        0x03 => ("inc", AddrMode::Indexed16(X), GGGG),
        0x04 => ("asl", AddrMode::Indexed16(X), GGGG),
        0x05 => ("clr", AddrMode::Indexed16(X), GGGG),
        0x06 => ("tst", AddrMode::Indexed16(X), GGGG),
        0x08 => ("bclr", AddrMode::Indexed8(X), MM_GGGG),
        0x09 => ("bset", AddrMode::Indexed8(X), MM_GGGG),
        0x0c => ("rol", AddrMode::Indexed16(X), GGGG),
        0x0d => ("asr", AddrMode::Indexed16(X), GGGG),
        0x0e => ("ror", AddrMode::Indexed16(X), GGGG),
        0x0f => ("lsr", AddrMode::Indexed16(X), GGGG),
        0x10 => ("com", AddrMode::Indexed16(Y), GGGG),
        0x11 => ("dec", AddrMode::Indexed16(Y), GGGG),
        0x12 => ("neg", AddrMode::Indexed16(Y), GGGG),
        0x13 => ("inc", AddrMode::Indexed16(Y), GGGG),
        0x14 => ("asl", AddrMode::Indexed16(Y), GGGG),
        0x15 => ("clr", AddrMode::Indexed16(Y), GGGG),
        0x16 => ("tst", AddrMode::Indexed16(Y), GGGG),
        0x18 => ("bclr", AddrMode::Indexed8(Y), MM_GGGG),
        0x19 => ("bset", AddrMode::Indexed8(Y), MM_GGGG),
        0x1c => ("rol", AddrMode::Indexed16(Y), GGGG),
        0x1d => ("asr", AddrMode::Indexed16(Y), GGGG),
        0x1e => ("ror", AddrMode::Indexed16(Y), GGGG),
        0x1f => ("lsr", AddrMode::Indexed16(Y), GGGG),
        0x20 => ("com", AddrMode::Indexed16(Z), GGGG),
        0x21 => ("dec", AddrMode::Indexed16(Z), GGGG),
        0x22 => ("neg", AddrMode::Indexed16(Z), GGGG),
        0x23 => ("inc", AddrMode::Indexed16(Z), GGGG),
        0x24 => ("asl", AddrMode::Indexed16(Z), GGGG),
        0x25 => ("clr", AddrMode::Indexed16(Z), GGGG),
        0x26 => ("tst", AddrMode::Indexed16(Z), GGGG),
        0x28 => ("bclr", AddrMode::Indexed8(Z), MM_GGGG),
        0x29 => ("bset", AddrMode::Indexed8(Z), MM_GGGG),
        0x2c => ("rol", AddrMode::Indexed16(Z), GGGG),
        0x2d => ("asr", AddrMode::Indexed16(Z), GGGG),
        0x2e => ("ror", AddrMode::Indexed16(Z), GGGG),
        0x2f => ("lsr", AddrMode::Indexed16(Z), GGGG),
        0x30 => ("com", AddrMode::Extended, HH_LL),
        0x31 => ("dec", AddrMode::Extended, HH_LL),
        0x32 => ("neg", AddrMode::Extended, HH_LL),
        0x33 => ("inc", AddrMode::Extended, HH_LL),
        0x34 => ("asl", AddrMode::Extended, HH_LL),
        0x35 => ("clr", AddrMode::Extended, HH_LL),
        0x36 => ("tst", AddrMode::Extended, HH_LL),
        0x3c => ("rol", AddrMode::Extended, HH_LL),
        0x3d => ("asr", AddrMode::Extended, HH_LL),
        0x3e => ("ror", AddrMode::Extended, HH_LL),
        0x3f => ("lsr", AddrMode::Extended, HH_LL),
        0x40 => ("suba", AddrMode::Indexed16(X), GGGG),
        0x41 => ("adda", AddrMode::Indexed16(X), GGGG),
        0x42 => ("sbca", AddrMode::Indexed16(X), GGGG),
        0x43 => ("adca", AddrMode::Indexed16(X), GGGG),
        0x44 => ("eora", AddrMode::Indexed16(X), GGGG),
        0x45 => ("ldaa", AddrMode::Indexed16(X), GGGG),
        0x46 => ("anda", AddrMode::Indexed16(X), GGGG),
        0x47 => ("oraa", AddrMode::Indexed16(X), GGGG),
        0x48 => ("cmpa", AddrMode::Indexed16(X), GGGG),
        0x49 => ("bita", AddrMode::Indexed16(X), GGGG),
        0x4a => ("staa", AddrMode::Indexed16(X), GGGG),
        0x4c => ("cpx", AddrMode::Indexed16(X), GGGG),
        0x4d => ("cpy", AddrMode::Indexed16(X), GGGG),
        0x4e => ("cpz", AddrMode::Indexed16(X), GGGG),
        0x4f => ("cps", AddrMode::Indexed16(X), GGGG),
        0x50 => ("suba", AddrMode::Indexed16(Y), GGGG),
        0x51 => ("adda", AddrMode::Indexed16(Y), GGGG),
        0x52 => ("sbca", AddrMode::Indexed16(Y), GGGG),
        0x53 => ("adca", AddrMode::Indexed16(Y), GGGG),
        0x54 => ("eora", AddrMode::Indexed16(Y), GGGG),
        0x55 => ("ldaa", AddrMode::Indexed16(Y), GGGG),
        0x56 => ("anda", AddrMode::Indexed16(Y), GGGG),
        0x57 => ("oraa", AddrMode::Indexed16(Y), GGGG),
        0x58 => ("cmpa", AddrMode::Indexed16(Y), GGGG),
        0x59 => ("bita", AddrMode::Indexed16(Y), GGGG),
        0x5a => ("staa", AddrMode::Indexed16(Y), GGGG),
        0x5c => ("cpx", AddrMode::Indexed16(Y), GGGG),
        0x5d => ("cpy", AddrMode::Indexed16(Y), GGGG),
        0x5e => ("cpz", AddrMode::Indexed16(Y), GGGG),
        0x5f => ("cps", AddrMode::Indexed16(Y), GGGG),
        0x60 => ("suba", AddrMode::Indexed16(Z), GGGG),
        0x61 => ("adda", AddrMode::Indexed16(Z), GGGG),
        0x62 => ("sbca", AddrMode::Indexed16(Z), GGGG),
        0x63 => ("adca", AddrMode::Indexed16(Z), GGGG),
        0x64 => ("eora", AddrMode::Indexed16(Z), GGGG),
        0x65 => ("ldaa", AddrMode::Indexed16(Z), GGGG),
        0x66 => ("anda", AddrMode::Indexed16(Z), GGGG),
        0x67 => ("oraa", AddrMode::Indexed16(Z), GGGG),
        0x68 => ("cmpa", AddrMode::Indexed16(Z), GGGG),
        0x69 => ("bita", AddrMode::Indexed16(Z), GGGG),
        0x6a => ("staa", AddrMode::Indexed16(Z), GGGG),
        0x6c => ("cpx", AddrMode::Indexed16(Z), GGGG),
        0x6d => ("cpy", AddrMode::Indexed16(Z), GGGG),
        0x6e => ("cpz", AddrMode::Indexed16(Z), GGGG),
        0x6f => ("cps", AddrMode::Indexed16(Z), GGGG),
        0x70 => ("suba", AddrMode::Extended, HH_LL),
        0x71 => ("adda", AddrMode::Extended, HH_LL),
        0x72 => ("sbca", AddrMode::Extended, HH_LL),
        0x73 => ("adca", AddrMode::Extended, HH_LL),
        0x74 => ("eora", AddrMode::Extended, HH_LL),
        0x75 => ("ldaa", AddrMode::Extended, HH_LL),
        0x76 => ("anda", AddrMode::Extended, HH_LL),
        0x77 => ("oraa", AddrMode::Extended, HH_LL),
        0x78 => ("cmpa", AddrMode::Extended, HH_LL),
        0x79 => ("bita", AddrMode::Extended, HH_LL),
        0x7a => ("staa", AddrMode::Extended, HH_LL),
        0x7c => ("cpx", AddrMode::Extended, HH_LL),
        0x7d => ("cpy", AddrMode::Extended, HH_LL),
        0x7e => ("cpz", AddrMode::Extended, HH_LL),
        0x7f => ("cps", AddrMode::Extended, HH_LL),
        0x8c => ("stx", AddrMode::Indexed16(X), GGGG),
        0x8d => ("sty", AddrMode::Indexed16(X), GGGG),
        0x8e => ("stz", AddrMode::Indexed16(X), GGGG),
        0x8f => ("sts", AddrMode::Indexed16(X), GGGG),
        0x9c => ("stx", AddrMode::Indexed16(Y), GGGG),
        0x9d => ("sty", AddrMode::Indexed16(Y), GGGG),
        0x9e => ("stz", AddrMode::Indexed16(Y), GGGG),
        0x9f => ("sts", AddrMode::Indexed16(Y), GGGG),
        0xac => ("stx", AddrMode::Indexed16(Z), GGGG),
        0xad => ("sty", AddrMode::Indexed16(Z), GGGG),
        0xae => ("stz", AddrMode::Indexed16(Z), GGGG),
        0xaf => ("sts", AddrMode::Indexed16(Z), GGGG),
        0xbc => ("stx", AddrMode::Extended, HH_LL),
        0xbd => ("sty", AddrMode::Extended, HH_LL),
        0xbe => ("stz", AddrMode::Extended, HH_LL),
        0xbf => ("sts", AddrMode::Extended, HH_LL),
        0xc0 => ("subb", AddrMode::Indexed16(X), GGGG),
        0xc1 => ("addb", AddrMode::Indexed16(X), GGGG),
        0xc2 => ("sbcb", AddrMode::Indexed16(X), GGGG),
        0xc3 => ("adcb", AddrMode::Indexed16(X), GGGG),
        0xc4 => ("eorb", AddrMode::Indexed16(X), GGGG),
        0xc5 => ("ldab", AddrMode::Indexed16(X), GGGG),
        0xc6 => ("andb", AddrMode::Indexed16(X), GGGG),
        0xc7 => ("orab", AddrMode::Indexed16(X), GGGG),
        0xc8 => ("cmpb", AddrMode::Indexed16(X), GGGG),
        0xc9 => ("bitb", AddrMode::Indexed16(X), GGGG),
        0xca => ("stab", AddrMode::Indexed16(X), GGGG),
        0xcc => ("ldx", AddrMode::Indexed16(X), GGGG),
        0xcd => ("ldy", AddrMode::Indexed16(X), GGGG),
        0xce => ("ldz", AddrMode::Indexed16(X), GGGG),
        0xcf => ("lds", AddrMode::Indexed16(X), GGGG),
        0xd0 => ("subb", AddrMode::Indexed16(Y), GGGG),
        0xd1 => ("addb", AddrMode::Indexed16(Y), GGGG),
        0xd2 => ("sbcb", AddrMode::Indexed16(Y), GGGG),
        0xd3 => ("adcb", AddrMode::Indexed16(Y), GGGG),
        0xd4 => ("eorb", AddrMode::Indexed16(Y), GGGG),
        0xd5 => ("ldab", AddrMode::Indexed16(Y), GGGG),
        0xd6 => ("andb", AddrMode::Indexed16(Y), GGGG),
        0xd7 => ("orab", AddrMode::Indexed16(Y), GGGG),
        0xd8 => ("cmpb", AddrMode::Indexed16(Y), GGGG),
        0xd9 => ("bitb", AddrMode::Indexed16(Y), GGGG),
        0xda => ("stab", AddrMode::Indexed16(Y), GGGG),
        0xdc => ("ldx", AddrMode::Indexed16(Y), GGGG),
        0xdd => ("ldy", AddrMode::Indexed16(Y), GGGG),
        0xde => ("ldz", AddrMode::Indexed16(Y), GGGG),
        0xdf => ("lds", AddrMode::Indexed16(Y), GGGG),
        0xe0 => ("subb", AddrMode::Indexed16(Z), GGGG),
        0xe1 => ("addb", AddrMode::Indexed16(Z), GGGG),
        0xe2 => ("sbcb", AddrMode::Indexed16(Z), GGGG),
        0xe3 => ("adcb", AddrMode::Indexed16(Z), GGGG),
        0xe4 => ("eorb", AddrMode::Indexed16(Z), GGGG),
        0xe5 => ("ldab", AddrMode::Indexed16(Z), GGGG),
        0xe6 => ("andb", AddrMode::Indexed16(Z), GGGG),
        0xe7 => ("orab", AddrMode::Indexed16(Z), GGGG),
        0xe8 => ("cmpb", AddrMode::Indexed16(Z), GGGG),
        0xe9 => ("bitb", AddrMode::Indexed16(Z), GGGG),
        0xea => ("stab", AddrMode::Indexed16(Z), GGGG),
        0xec => ("ldx", AddrMode::Indexed16(Z), GGGG),
        0xed => ("ldy", AddrMode::Indexed16(Z), GGGG),
        0xee => ("ldz", AddrMode::Indexed16(Z), GGGG),
        0xef => ("lds", AddrMode::Indexed16(Z), GGGG),
        0xf0 => ("subb", AddrMode::Extended, HH_LL),
        0xf1 => ("addb", AddrMode::Extended, HH_LL),
        0xf2 => ("sbcb", AddrMode::Extended, HH_LL),
        0xf3 => ("adcb", AddrMode::Extended, HH_LL),
        0xf4 => ("eorb", AddrMode::Extended, HH_LL),
        0xf5 => ("ldab", AddrMode::Extended, HH_LL),
        0xf6 => ("andb", AddrMode::Extended, HH_LL),
        0xf7 => ("orab", AddrMode::Extended, HH_LL),
        0xf8 => ("cmpb", AddrMode::Extended, HH_LL),
        0xf9 => ("bitb", AddrMode::Extended, HH_LL),
        0xfa => ("stab", AddrMode::Extended, HH_LL),
        0xfc => ("ldx", AddrMode::Extended, HH_LL),
        0xfd => ("ldy", AddrMode::Extended, HH_LL),
        0xfe => ("ldz", AddrMode::Extended, HH_LL),
        0xff => ("lds", AddrMode::Extended, HH_LL),
        _ => return None,
    };
    Some(entry)
}

/// Opcodes following a 0x27 prefix byte.
fn prefix_27(opcode: u8) -> Option<Entry> {
    let entry = match opcode {
        0x00 => ("comw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x01 => ("decw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x02 => ("negw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x03 => ("incw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x04 => ("aslw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x05 => ("clrw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x06 => ("tstw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x08 => ("bclrw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x09 => ("bsetw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x0c => ("rolw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x0d => ("asrw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x0e => ("rorw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x0f => ("lsrw", AddrMode::Indexed16(X), GGGG_MMMM),
        0x10 => ("comw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x11 => ("decw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x12 => ("negw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x13 => ("incw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x14 => ("aslw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x15 => ("clrw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x16 => ("tstw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x18 => ("bclrw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x19 => ("bsetw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x1c => ("rolw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x1d => ("asrw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x1e => ("rorw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x1f => ("lsrw", AddrMode::Indexed16(Y), GGGG_MMMM),
        0x20 => ("comw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x21 => ("decw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x22 => ("negw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x23 => ("incw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x24 => ("aslw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x25 => ("clrw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x26 => ("tstw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x28 => ("bclrw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x29 => ("bsetw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x2c => ("rolw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x2d => ("asrw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x2e => ("rorw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x2f => ("lsrw", AddrMode::Indexed16(Z), GGGG_MMMM),
        0x30 => ("comw", AddrMode::Extended, HH_LL_MMMM),
        0x31 => ("decw", AddrMode::Extended, HH_LL_MMMM),
        0x32 => ("negw", AddrMode::Extended, HH_LL_MMMM),
        0x33 => ("incw", AddrMode::Extended, HH_LL_MMMM),
        0x34 => ("aslw", AddrMode::Extended, HH_LL_MMMM),
        0x35 => ("clrw", AddrMode::Extended, HH_LL_MMMM),
        0x36 => ("tstw", AddrMode::Extended, HH_LL_MMMM),
        0x38 => ("bclrw", AddrMode::Extended, HH_LL_MMMM),
        0x39 => ("bsetw", AddrMode::Extended, HH_LL_MMMM),
        0x3c => ("rolw", AddrMode::Extended, HH_LL_MMMM),
        0x3d => ("asrw", AddrMode::Extended, HH_LL_MMMM),
        0x3e => ("rorw", AddrMode::Extended, HH_LL_MMMM),
        0x3f => ("lsrw", AddrMode::Extended, HH_LL_MMMM),
        0x40 => ("suba", AddrMode::EIndexed(X), NONE),
        0x41 => ("adda", AddrMode::EIndexed(X), NONE),
        0x42 => ("sbca", AddrMode::EIndexed(X), NONE),
        0x43 => ("adca", AddrMode::EIndexed(X), NONE),
        0x44 => ("eora", AddrMode::EIndexed(X), NONE),
        0x45 => ("ldaa", AddrMode::EIndexed(X), NONE),
        0x46 => ("anda", AddrMode::EIndexed(X), NONE),
        0x47 => ("oraa", AddrMode::EIndexed(X), NONE),
        0x48 => ("cmpa", AddrMode::EIndexed(X), NONE),
        0x49 => ("bita", AddrMode::EIndexed(X), NONE),
        0x4a => ("staa", AddrMode::EIndexed(X), NONE),
        0x4c => ("nop", AddrMode::EIndexed(X), NONE),
        0x4d => ("tyx", AddrMode::EIndexed(X), NONE),
        0x4e => ("tzx", AddrMode::EIndexed(X), NONE),
        0x4f => ("tsx", AddrMode::EIndexed(X), NONE),
        0x50 => ("suba", AddrMode::EIndexed(Y), NONE),
        0x51 => ("adda", AddrMode::EIndexed(Y), NONE),
        0x52 => ("sbca", AddrMode::EIndexed(Y), NONE),
        0x53 => ("adca", AddrMode::EIndexed(Y), NONE),
        0x54 => ("eora", AddrMode::EIndexed(Y), NONE),
        0x55 => ("ldaa", AddrMode::EIndexed(Y), NONE),
        0x56 => ("anda", AddrMode::EIndexed(Y), NONE),
        0x57 => ("oraa", AddrMode::EIndexed(Y), NONE),
        0x58 => ("cmpa", AddrMode::EIndexed(Y), NONE),
        0x59 => ("bita", AddrMode::EIndexed(Y), NONE),
        0x5a => ("staa", AddrMode::EIndexed(Y), NONE),
        0x5c => ("txy", AddrMode::EIndexed(Y), NONE),
        0x5e => ("tzy", AddrMode::EIndexed(Y), NONE),
        0x5f => ("tsy", AddrMode::EIndexed(Y), NONE),
        0x60 => ("suba", AddrMode::EIndexed(Z), NONE),
        0x61 => ("adda", AddrMode::EIndexed(Z), NONE),
        0x62 => ("sbca", AddrMode::EIndexed(Z), NONE),
        0x63 => ("adca", AddrMode::EIndexed(Z), NONE),
        0x64 => ("eora", AddrMode::EIndexed(Z), NONE),
        0x65 => ("ldaa", AddrMode::EIndexed(Z), NONE),
        0x66 => ("anda", AddrMode::EIndexed(Z), NONE),
        0x67 => ("oraa", AddrMode::EIndexed(Z), NONE),
        0x68 => ("cmpa", AddrMode::EIndexed(Z), NONE),
        0x69 => ("bita", AddrMode::EIndexed(Z), NONE),
        0x6a => ("staa", AddrMode::EIndexed(Z), NONE),
        0x6c => ("nxz", AddrMode::EIndexed(Z), NONE),
        0x6d => ("tyz", AddrMode::EIndexed(Z), NONE),
        0x6f => ("tsz", AddrMode::EIndexed(Z), NONE),
        0x70 => ("come", AddrMode::Inherent, NONE),
        0x71 => ("lded", AddrMode::Extended, NONE),
        0x72 => ("nege", AddrMode::Inherent, NONE),
        0x73 => ("sted", AddrMode::Extended, NONE),
        0x74 => ("asle", AddrMode::Inherent, NONE),
        0x75 => ("clre", AddrMode::Inherent, NONE),
        0x76 => ("tste", AddrMode::Inherent, NONE),
        0x77 => ("rti", AddrMode::Inherent, NONE),
        0x78 => ("ade", AddrMode::Inherent, NONE),
        0x79 => ("sde", AddrMode::Inherent, NONE),
        0x7a => ("xgde", AddrMode::Inherent, NONE),
        0x7b => ("tde", AddrMode::Inherent, NONE),
        0x7c => ("role", AddrMode::Inherent, NONE),
        0x7d => ("asre", AddrMode::Inherent, NONE),
        0x7e => ("rore", AddrMode::Inherent, NONE),
        0x7f => ("lsre", AddrMode::Inherent, NONE),
        0x80 => ("subd", AddrMode::EIndexed(X), NONE),
        0x81 => ("addd", AddrMode::EIndexed(X), NONE),
        0x82 => ("sbcd", AddrMode::EIndexed(X), NONE),
        0x83 => ("adcd", AddrMode::EIndexed(X), NONE),
        0x84 => ("eord", AddrMode::EIndexed(X), NONE),
        0x85 => ("ldd", AddrMode::EIndexed(X), NONE),
        0x86 => ("andd", AddrMode::EIndexed(X), NONE),
        0x87 => ("ord", AddrMode::EIndexed(X), NONE),
        0x88 => ("cpd", AddrMode::EIndexed(X), NONE),
        0x8a => ("std", AddrMode::EIndexed(X), NONE),
        0x90 => ("subd", AddrMode::EIndexed(Y), NONE),
        0x91 => ("addd", AddrMode::EIndexed(Y), NONE),
        0x92 => ("sbcd", AddrMode::EIndexed(Y), NONE),
        0x93 => ("adcd", AddrMode::EIndexed(Y), NONE),
        0x94 => ("eord", AddrMode::EIndexed(Y), NONE),
        0x95 => ("ldd", AddrMode::EIndexed(Y), NONE),
        0x96 => ("andd", AddrMode::EIndexed(Y), NONE),
        0x97 => ("ord", AddrMode::EIndexed(Y), NONE),
        0x98 => ("cpd", AddrMode::EIndexed(Y), NONE),
        0x9a => ("std", AddrMode::EIndexed(Y), NONE),
        0xa0 => ("subd", AddrMode::EIndexed(Z), NONE),
        0xa1 => ("addd", AddrMode::EIndexed(Z), NONE),
        0xa2 => ("sbcd", AddrMode::EIndexed(Z), NONE),
        0xa3 => ("adcd", AddrMode::EIndexed(Z), NONE),
        0xa4 => ("eord", AddrMode::EIndexed(Z), NONE),
        0xa5 => ("ldd", AddrMode::EIndexed(Z), NONE),
        0xa6 => ("andd", AddrMode::EIndexed(Z), NONE),
        0xa7 => ("ord", AddrMode::EIndexed(Z), NONE),
        0xa8 => ("cpd", AddrMode::EIndexed(Z), NONE),
        0xaa => ("std", AddrMode::EIndexed(Z), NONE),
        0xb0 => ("ldhi", AddrMode::Extended, NONE),
        0xb1 => ("tedm", AddrMode::Extended, NONE),
        0xb2 => ("tem", AddrMode::Extended, NONE),
        0xb3 => ("tmxed", AddrMode::Extended, NONE),
        0xb4 => ("tmer", AddrMode::Extended, NONE),
        0xb5 => ("tmet", AddrMode::Extended, NONE),
        0xb6 => ("aslm", AddrMode::Extended, NONE),
        0xb7 => ("pshmac", AddrMode::Extended, NONE),
        0xb8 => ("pulmac", AddrMode::Extended, NONE),
        0xb9 => ("asrm", AddrMode::Extended, NONE),
        0xba => ("tekb", AddrMode::Extended, NONE),
        0xc0 => ("subb", AddrMode::EIndexed(X), NONE),
        0xc1 => ("addb", AddrMode::EIndexed(X), NONE),
        0xc2 => ("sbcb", AddrMode::EIndexed(X), NONE),
        0xc3 => ("adcb", AddrMode::EIndexed(X), NONE),
        0xc4 => ("eorb", AddrMode::EIndexed(X), NONE),
        0xc5 => ("ldab", AddrMode::EIndexed(X), NONE),
        0xc6 => ("andb", AddrMode::EIndexed(X), NONE),
        0xc7 => ("orab", AddrMode::EIndexed(X), NONE),
        0xc8 => ("cmpb", AddrMode::EIndexed(X), NONE),
        0xc9 => ("bitb", AddrMode::EIndexed(X), NONE),
        0xca => ("stab", AddrMode::EIndexed(X), NONE),
        0xd0 => ("subb", AddrMode::EIndexed(Y), NONE),
        0xd1 => ("addb", AddrMode::EIndexed(Y), NONE),
        0xd2 => ("sbcb", AddrMode::EIndexed(Y), NONE),
        0xd3 => ("adcb", AddrMode::EIndexed(Y), NONE),
        0xd4 => ("eorb", AddrMode::EIndexed(Y), NONE),
        0xd5 => ("ldab", AddrMode::EIndexed(Y), NONE),
        0xd6 => ("andb", AddrMode::EIndexed(Y), NONE),
        0xd7 => ("orab", AddrMode::EIndexed(Y), NONE),
        0xd8 => ("cmpb", AddrMode::EIndexed(Y), NONE),
        0xd9 => ("bitb", AddrMode::EIndexed(Y), NONE),
        0xda => ("stab", AddrMode::EIndexed(Y), NONE),
        0xe0 => ("subb", AddrMode::EIndexed(Z), NONE),
        0xe1 => ("addb", AddrMode::EIndexed(Z), NONE),
        0xe2 => ("sbcb", AddrMode::EIndexed(Z), NONE),
        0xe3 => ("adcb", AddrMode::EIndexed(Z), NONE),
        0xe4 => ("eorb", AddrMode::EIndexed(Z), NONE),
        0xe5 => ("ldab", AddrMode::EIndexed(Z), NONE),
        0xe6 => ("andb", AddrMode::EIndexed(Z), NONE),
        0xe7 => ("orab", AddrMode::EIndexed(Z), NONE),
        0xe8 => ("cmpb", AddrMode::EIndexed(Z), NONE),
        0xe9 => ("bitb", AddrMode::EIndexed(Z), NONE),
        0xea => ("stab", AddrMode::EIndexed(Z), NONE),
        0xf0 => ("comd", AddrMode::Inherent, NONE),
        0xf1 => ("ldstop", AddrMode::Extended, NONE),
        0xf2 => ("negd", AddrMode::Inherent, NONE),
        0xf3 => ("wai", AddrMode::Extended, NONE),
        0xf4 => ("asld", AddrMode::Inherent, NONE),
        0xf5 => ("clrd", AddrMode::Inherent, NONE),
        0xf6 => ("tstd", AddrMode::Inherent, NONE),
        0xf7 => ("rts", AddrMode::Inherent, NONE),
        0xf8 => ("sxt", AddrMode::Inherent, NONE),
        0xf9 => ("lbsr", AddrMode::Relative16, RRRR),
        0xfa => ("tbek", AddrMode::Inherent, NONE),
        0xfb => ("ted", AddrMode::Inherent, NONE),
        0xfc => ("rold", AddrMode::Inherent, NONE),
        0xfd => ("asrd", AddrMode::Inherent, NONE),
        0xfe => ("rord", AddrMode::Inherent, NONE),
        0xff => ("lsrd", AddrMode::Inherent, NONE),
        _ => return None,
    };
    Some(entry)
}

/// Opcodes following a 0x37 prefix byte.
fn prefix_37(opcode: u8) -> Option<Entry> {
    let entry = match opcode {
        0x00 => ("coma", AddrMode::Inherent, NONE),
        0x01 => ("deca", AddrMode::Inherent, NONE),
        0x02 => ("nega", AddrMode::Inherent, NONE),
        0x03 => ("inca", AddrMode::Inherent, NONE),
        0x04 => ("asla", AddrMode::Inherent, NONE),
        0x05 => ("clra", AddrMode::Inherent, NONE),
        0x06 => ("tsta", AddrMode::Inherent, NONE),
        0x07 => ("tba", AddrMode::Inherent, NONE),
        0x08 => ("psha", AddrMode::Inherent, NONE),
        0x09 => ("pula", AddrMode::Inherent, NONE),
        0x0a => ("sba", AddrMode::Inherent, NONE),
        0x0b => ("aba", AddrMode::Inherent, NONE),
        0x0c => ("rola", AddrMode::Inherent, NONE),
        0x0d => ("asra", AddrMode::Inherent, NONE),
        0x0e => ("rora", AddrMode::Inherent, NONE),
        0x0f => ("lsra", AddrMode::Inherent, NONE),
        0x10 => ("comb", AddrMode::Inherent, NONE),
        0x11 => ("decb", AddrMode::Inherent, NONE),
        0x12 => ("negb", AddrMode::Inherent, NONE),
        0x13 => ("incb", AddrMode::Inherent, NONE),
        0x14 => ("aslb", AddrMode::Inherent, NONE),
        0x15 => ("clrb", AddrMode::Inherent, NONE),
        0x16 => ("tstb", AddrMode::Inherent, NONE),
        0x17 => ("tbb", AddrMode::Inherent, NONE),
        0x18 => ("pshb", AddrMode::Inherent, NONE),
        0x19 => ("pulb", AddrMode::Inherent, NONE),
        0x1a => ("sbb", AddrMode::Inherent, NONE),
        0x1b => ("abb", AddrMode::Inherent, NONE),
        0x1c => ("rolb", AddrMode::Inherent, NONE),
        0x1d => ("asrb", AddrMode::Inherent, NONE),
        0x1e => ("rorb", AddrMode::Inherent, NONE),
        0x1f => ("lsrb", AddrMode::Inherent, NONE),
        0x20 => ("swi", AddrMode::Inherent, NONE),
        0x21 => ("daa", AddrMode::Inherent, NONE),
        0x22 => ("ace", AddrMode::Inherent, NONE),
        0x23 => ("aced", AddrMode::Inherent, NONE),
        0x24 => ("mul", AddrMode::Inherent, NONE),
        0x25 => ("emul", AddrMode::Inherent, NONE),
        0x26 => ("emuls", AddrMode::Inherent, NONE),
        0x27 => ("fmuls", AddrMode::Inherent, NONE),
        0x28 => ("ediv", AddrMode::Inherent, NONE),
        0x29 => ("edivs", AddrMode::Inherent, NONE),
        0x2a => ("idiv", AddrMode::Inherent, NONE),
        0x2b => ("fdiv", AddrMode::Inherent, NONE),
        0x2c => ("tpd", AddrMode::Inherent, NONE),
        0x2d => ("tdp", AddrMode::Inherent, NONE),
        0x2f => ("tdmsk", AddrMode::Inherent, NONE),
        0x30 => ("sube", AddrMode::Immediate16, JJ_KK),
        0x31 => ("adde", AddrMode::Immediate16, JJ_KK),
        0x32 => ("sbce", AddrMode::Immediate16, JJ_KK),
        0x33 => ("adce", AddrMode::Immediate16, JJ_KK),
        0x34 => ("eore", AddrMode::Immediate16, JJ_KK),
        0x35 => ("lde", AddrMode::Immediate16, JJ_KK),
        0x36 => ("ande", AddrMode::Immediate16, JJ_KK),
        0x37 => ("ore", AddrMode::Immediate16, JJ_KK),
        0x38 => ("cpe", AddrMode::Immediate16, JJ_KK),
        0x3a => ("andp", AddrMode::Immediate16, JJ_KK),
        0x3b => ("orp", AddrMode::Immediate16, JJ_KK),
        0x3c => ("aix", AddrMode::Immediate16, JJ_KK),
        0x3d => ("aiy", AddrMode::Immediate16, JJ_KK),
        0x3e => ("aiz", AddrMode::Immediate16, JJ_KK),
        0x3f => ("ais", AddrMode::Immediate16, JJ_KK),
        0x40 => ("sube", AddrMode::Indexed16(X), GGGG),
        0x41 => ("adde", AddrMode::Indexed16(X), GGGG),
        0x42 => ("sbce", AddrMode::Indexed16(X), GGGG),
        0x43 => ("adce", AddrMode::Indexed16(X), GGGG),
        0x44 => ("eore", AddrMode::Indexed16(X), GGGG),
        0x45 => ("lde", AddrMode::Indexed16(X), GGGG),
        0x46 => ("ande", AddrMode::Indexed16(X), GGGG),
        0x47 => ("ore", AddrMode::Indexed16(X), GGGG),
        0x48 => ("cpe", AddrMode::Indexed16(X), GGGG),
        0x4a => ("ste", AddrMode::Indexed16(X), GGGG),
        0x4c => ("xgex", AddrMode::Inherent, NONE),
        0x4d => ("aex", AddrMode::Inherent, NONE),
        0x4e => ("txs", AddrMode::Inherent, NONE),
        0x4f => ("abx", AddrMode::Inherent, NONE),
        0x50 => ("sube", AddrMode::Indexed16(Y), GGGG),
        0x51 => ("adde", AddrMode::Indexed16(Y), GGGG),
        0x52 => ("sbce", AddrMode::Indexed16(Y), GGGG),
        0x53 => ("adce", AddrMode::Indexed16(Y), GGGG),
        0x54 => ("eore", AddrMode::Indexed16(Y), GGGG),
        0x55 => ("lde", AddrMode::Indexed16(Y), GGGG),
        0x56 => ("ande", AddrMode::Indexed16(Y), GGGG),
        0x57 => ("ore", AddrMode::Indexed16(Y), GGGG),
        0x58 => ("cpe", AddrMode::Indexed16(Y), GGGG),
        0x5a => ("ste", AddrMode::Indexed16(Y), GGGG),
        0x5c => ("xgey", AddrMode::Inherent, NONE),
        0x5d => ("aey", AddrMode::Inherent, NONE),
        0x5e => ("tys", AddrMode::Inherent, NONE),
        0x5f => ("aby", AddrMode::Inherent, NONE),
        0x60 => ("sube", AddrMode::Indexed16(Z), GGGG),
        0x61 => ("adde", AddrMode::Indexed16(Z), GGGG),
        0x62 => ("sbce", AddrMode::Indexed16(Z), GGGG),
        0x63 => ("adce", AddrMode::Indexed16(Z), GGGG),
        0x64 => ("eore", AddrMode::Indexed16(Z), GGGG),
        0x65 => ("lde", AddrMode::Indexed16(Z), GGGG),
        0x66 => ("ande", AddrMode::Indexed16(Z), GGGG),
        0x67 => ("ore", AddrMode::Indexed16(Z), GGGG),
        0x68 => ("cpe", AddrMode::Indexed16(Z), GGGG),
        0x6a => ("ste", AddrMode::Indexed16(Z), GGGG),
        0x6c => ("xgez", AddrMode::Inherent, NONE),
        0x6d => ("aez", AddrMode::Inherent, NONE),
        0x6e => ("tzs", AddrMode::Inherent, NONE),
        0x6f => ("abz", AddrMode::Inherent, NONE),
        0x70 => ("sube", AddrMode::Extended, HH_LL),
        0x71 => ("adde", AddrMode::Extended, HH_LL),
        0x72 => ("sbce", AddrMode::Extended, HH_LL),
        0x73 => ("adce", AddrMode::Extended, HH_LL),
        0x74 => ("eore", AddrMode::Extended, HH_LL),
        0x75 => ("lde", AddrMode::Extended, HH_LL),
        0x76 => ("ande", AddrMode::Extended, HH_LL),
        0x77 => ("ore", AddrMode::Extended, HH_LL),
        0x78 => ("cpe", AddrMode::Extended, HH_LL),
        0x7a => ("ste", AddrMode::Extended, HH_LL),
        0x7c => ("cpx", AddrMode::Immediate16, JJ_KK),
        0x7d => ("cpy", AddrMode::Immediate16, JJ_KK),
        0x7e => ("cpz", AddrMode::Immediate16, JJ_KK),
        0x7f => ("cps", AddrMode::Immediate16, JJ_KK),
        0x80 => ("lbra", AddrMode::Relative16, RRRR),
        0x81 => ("lbrn", AddrMode::Relative16, RRRR),
        0x82 => ("lbhi", AddrMode::Relative16, RRRR),
        0x83 => ("lbls", AddrMode::Relative16, RRRR),
        0x84 => ("lbcc", AddrMode::Relative16, RRRR),
        0x85 => ("lbcs", AddrMode::Relative16, RRRR),
        0x86 => ("lbne", AddrMode::Relative16, RRRR),
        0x87 => ("lbeq", AddrMode::Relative16, RRRR),
        0x88 => ("lbvc", AddrMode::Relative16, RRRR),
        0x89 => ("lbvs", AddrMode::Relative16, RRRR),
        0x8a => ("lbpl", AddrMode::Relative16, RRRR),
        0x8b => ("lbmi", AddrMode::Relative16, RRRR),
        0x8c => ("lbge", AddrMode::Relative16, RRRR),
        0x8d => ("lblt", AddrMode::Relative16, RRRR),
        0x8e => ("lbgt", AddrMode::Relative16, RRRR),
        0x8f => ("lble", AddrMode::Relative16, RRRR),
        0x90 => ("lbmv", AddrMode::Relative16, RRRR),
        0x91 => ("lbev", AddrMode::Relative16, RRRR),
        0x9c => ("tbxk", AddrMode::Inherent, NONE),
        0x9d => ("tbyk", AddrMode::Inherent, NONE),
        0x9e => ("tbzk", AddrMode::Inherent, NONE),
        0x9f => ("tbsk", AddrMode::Inherent, NONE),
        0xa6 => ("bgnd", AddrMode::Inherent, NONE),
        0xac => ("txkb", AddrMode::Inherent, NONE),
        0xad => ("tykb", AddrMode::Inherent, NONE),
        0xae => ("tzkb", AddrMode::Inherent, NONE),
        0xaf => ("tskb", AddrMode::Inherent, NONE),
        0xb0 => ("subd", AddrMode::Immediate16, JJ_KK),
        0xb1 => ("addd", AddrMode::Immediate16, JJ_KK),
        0xb2 => ("sbcd", AddrMode::Immediate16, JJ_KK),
        0xb3 => ("adcd", AddrMode::Immediate16, JJ_KK),
        0xb4 => ("eord", AddrMode::Immediate16, JJ_KK),
        0xb5 => ("ldd", AddrMode::Immediate16, JJ_KK),
        0xb6 => ("andd", AddrMode::Immediate16, JJ_KK),
        0xb7 => ("ord", AddrMode::Immediate16, JJ_KK),
        0xb8 => ("cpd", AddrMode::Immediate16, JJ_KK),
        0xbc => ("ldx", AddrMode::Immediate16, JJ_KK),
        0xbd => ("ldy", AddrMode::Immediate16, JJ_KK),
        0xbe => ("ldz", AddrMode::Immediate16, JJ_KK),
        0xbf => ("lds", AddrMode::Immediate16, JJ_KK),
        0xc0 => ("subd", AddrMode::Indexed16(X), GGGG),
        0xc1 => ("addd", AddrMode::Indexed16(X), GGGG),
        0xc2 => ("sbcd", AddrMode::Indexed16(X), GGGG),
        0xc3 => ("adcd", AddrMode::Indexed16(X), GGGG),
        0xc4 => ("eord", AddrMode::Indexed16(X), GGGG),
        0xc5 => ("ldd", AddrMode::Indexed16(X), GGGG),
        0xc6 => ("andd", AddrMode::Indexed16(X), GGGG),
        0xc7 => ("ord", AddrMode::Indexed16(X), GGGG),
        0xc8 => ("cpd", AddrMode::Indexed16(X), GGGG),
        0xca => ("std", AddrMode::Indexed16(X), GGGG),
        0xcc => ("xgdx", AddrMode::Inherent, NONE),
        0xcd => ("adx", AddrMode::Inherent, NONE),
        0xd0 => ("subd", AddrMode::Indexed16(Y), GGGG),
        0xd1 => ("addd", AddrMode::Indexed16(Y), GGGG),
        0xd2 => ("sbcd", AddrMode::Indexed16(Y), GGGG),
        0xd3 => ("adcd", AddrMode::Indexed16(Y), GGGG),
        0xd4 => ("eord", AddrMode::Indexed16(Y), GGGG),
        0xd5 => ("ldd", AddrMode::Indexed16(Y), GGGG),
        0xd6 => ("andd", AddrMode::Indexed16(Y), GGGG),
        0xd7 => ("ord", AddrMode::Indexed16(Y), GGGG),
        0xd8 => ("cpd", AddrMode::Indexed16(Y), GGGG),
        0xda => ("std", AddrMode::Indexed16(Y), GGGG),
        0xdc => ("xgdy", AddrMode::Inherent, NONE),
        0xdd => ("ady", AddrMode::Inherent, NONE),
        0xe0 => ("subd", AddrMode::Indexed16(Z), GGGG),
        0xe1 => ("addd", AddrMode::Indexed16(Z), GGGG),
        0xe2 => ("sbcd", AddrMode::Indexed16(Z), GGGG),
        0xe3 => ("adcd", AddrMode::Indexed16(Z), GGGG),
        0xe4 => ("eord", AddrMode::Indexed16(Z), GGGG),
        0xe5 => ("ldd", AddrMode::Indexed16(Z), GGGG),
        0xe6 => ("andd", AddrMode::Indexed16(Z), GGGG),
        0xe7 => ("ord", AddrMode::Indexed16(Z), GGGG),
        0xe8 => ("cpd", AddrMode::Indexed16(Z), GGGG),
        0xea => ("std", AddrMode::Indexed16(Z), GGGG),
        0xec => ("xgdz", AddrMode::Inherent, NONE),
        0xed => ("adz", AddrMode::Inherent, NONE),
        0xf0 => ("subd", AddrMode::Extended, NONE),
        0xf1 => ("addd", AddrMode::Extended, NONE),
        0xf2 => ("sbcd", AddrMode::Extended, NONE),
        0xf3 => ("adcd", AddrMode::Extended, NONE),
        0xf4 => ("eord", AddrMode::Extended, NONE),
        0xf5 => ("ldd", AddrMode::Extended, NONE),
        0xf6 => ("andd", AddrMode::Extended, NONE),
        0xf7 => ("ord", AddrMode::Extended, NONE),
        0xf8 => ("cpd", AddrMode::Extended, NONE),
        0xfa => ("std", AddrMode::Extended, NONE),
        0xfc => ("tpa", AddrMode::Inherent, NONE),
        0xfd => ("tap", AddrMode::Inherent, NONE),
        0xfe => ("movb", AddrMode::ExtendedToExtended, NONE),
        0xff => ("movw", AddrMode::ExtendedToExtended, NONE),
        _ => return None,
    };
    Some(entry)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::descriptor;
    use crate::dis::mode::IndexReg::{X, Y, Z};
    use crate::dis::mode::{AddrMode, Page};

    #[test]
    fn unprefixed_indexed8() {
        let desc = descriptor(Page::Unprefixed, 0x00);
        assert_eq!(desc.mnemonic, "com");
        assert_eq!(desc.mode, AddrMode::Indexed8(X));
        assert_eq!(desc.operand_bits(), 8);
        assert_eq!(
            descriptor(Page::Unprefixed, 0x55).mode,
            AddrMode::Indexed8(Y)
        );
        assert_eq!(
            descriptor(Page::Unprefixed, 0xa5).mode,
            AddrMode::Indexed8(Z)
        );
    }

    #[test]
    fn unprefixed_twenty_bit_jumps() {
        assert_eq!(
            descriptor(Page::Unprefixed, 0x4b).mode,
            AddrMode::Indexed20(X)
        );
        assert_eq!(
            descriptor(Page::Unprefixed, 0x99).mode,
            AddrMode::Indexed20(Y)
        );
        assert_eq!(
            descriptor(Page::Unprefixed, 0xa9).mode,
            AddrMode::Indexed20(Z)
        );
        let jmp = descriptor(Page::Unprefixed, 0x7a);
        assert_eq!(jmp.mnemonic, "jmp");
        assert_eq!(jmp.operand_bits(), 24);
        let jsr = descriptor(Page::Unprefixed, 0xfa);
        assert_eq!(jsr.mode, AddrMode::Extended20);
        assert_eq!(descriptor(Page::Unprefixed, 0x4b).operand_bits(), 20);
    }

    #[test]
    fn prefix_bytes_are_not_instructions() {
        for opcode in [0x17, 0x27, 0x37] {
            let desc = descriptor(Page::Unprefixed, opcode);
            assert!(!desc.is_recognized());
            assert_eq!(desc.mode, AddrMode::Immediate8);
        }
    }

    #[test]
    fn prefix_17_page() {
        let desc = descriptor(Page::Prefix17, 0x00);
        assert_eq!(desc.mnemonic, "com");
        assert_eq!(desc.mode, AddrMode::Indexed16(X));
        assert_eq!(desc.operand_bits(), 16);
        assert_eq!(descriptor(Page::Prefix17, 0xfc).mnemonic, "ldx");
        assert_eq!(descriptor(Page::Prefix17, 0xfc).mode, AddrMode::Extended);
        assert!(!descriptor(Page::Prefix17, 0x80).is_recognized());
    }

    #[test]
    fn prefix_27_page() {
        let desc = descriptor(Page::Prefix27, 0x08);
        assert_eq!(desc.mnemonic, "bclrw");
        assert_eq!(desc.operand_bits(), 32);
        assert_eq!(descriptor(Page::Prefix27, 0xf7).mnemonic, "rts");
        assert_eq!(
            descriptor(Page::Prefix27, 0xf9).mode,
            AddrMode::Relative16
        );
        assert_eq!(descriptor(Page::Prefix27, 0xbc).mode, AddrMode::Inherent);
        assert!(!descriptor(Page::Prefix27, 0xbb).is_recognized());
        assert!(!descriptor(Page::Prefix27, 0xbc).is_recognized());
    }

    #[test]
    fn prefix_37_page() {
        assert_eq!(descriptor(Page::Prefix37, 0x00).mnemonic, "coma");
        assert_eq!(descriptor(Page::Prefix37, 0x7d).mnemonic, "cpy");
        let lbra = descriptor(Page::Prefix37, 0x80);
        assert_eq!(lbra.mnemonic, "lbra");
        assert_eq!(lbra.operand_bits(), 16);
        let movw = descriptor(Page::Prefix37, 0xff);
        assert_eq!(movw.mnemonic, "movw");
        assert_eq!(movw.mode, AddrMode::ExtendedToExtended);
    }
}

//===========================================================================//
