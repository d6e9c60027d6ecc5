use std::fmt;

//===========================================================================//

/// One of the four opcode pages of the CPU16 instruction set.  Which page is
/// active for an instruction is selected by an optional prefix byte.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Page {
    /// No prefix byte.
    Unprefixed,
    /// The instruction is prefixed by a 0x17 byte.
    Prefix17,
    /// The instruction is prefixed by a 0x27 byte.
    Prefix27,
    /// The instruction is prefixed by a 0x37 byte.
    Prefix37,
}

impl Page {
    /// All four pages, in table order.
    pub const ALL: [Page; 4] =
        [Page::Unprefixed, Page::Prefix17, Page::Prefix27, Page::Prefix37];

    /// Returns the page selected by the given byte, if that byte is one of
    /// the three prefix bytes.
    pub fn from_prefix(byte: u8) -> Option<Page> {
        match byte {
            0x17 => Some(Page::Prefix17),
            0x27 => Some(Page::Prefix27),
            0x37 => Some(Page::Prefix37),
            _ => None,
        }
    }

    /// Returns the prefix byte that selects this page, if any.
    pub fn prefix(self) -> Option<u8> {
        match self {
            Page::Unprefixed => None,
            Page::Prefix17 => Some(0x17),
            Page::Prefix27 => Some(0x27),
            Page::Prefix37 => Some(0x37),
        }
    }

    /// Returns the number of prefix bytes (zero or one) for this page.
    pub fn prefix_len(self) -> usize {
        if self.prefix().is_some() { 1 } else { 0 }
    }

    /// Returns the index (0-3) of this page within an opcode table.
    pub fn index(self) -> usize {
        match self {
            Page::Unprefixed => 0,
            Page::Prefix17 => 1,
            Page::Prefix27 => 2,
            Page::Prefix37 => 3,
        }
    }

    /// Returns the display label for this page.
    pub fn label(self) -> &'static str {
        match self {
            Page::Unprefixed => "PAGE0",
            Page::Prefix17 => "PAGE1",
            Page::Prefix27 => "PAGE2",
            Page::Prefix37 => "PAGE3",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.label())
    }
}

//===========================================================================//

/// A CPU16 index register.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexReg {
    /// Index register X.
    X,
    /// Index register Y.
    Y,
    /// Index register Z.
    Z,
}

impl IndexReg {
    /// Returns the operand marker that precedes an offset from this index
    /// register in the disassembly listing.
    pub fn marker(self) -> &'static str {
        match self {
            IndexReg::X => "[%x]+",
            IndexReg::Y => "[%y]+",
            IndexReg::Z => "[%z]+",
        }
    }
}

impl fmt::Display for IndexReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            IndexReg::X => "X",
            IndexReg::Y => "Y",
            IndexReg::Z => "Z",
        })
    }
}

//===========================================================================//

/// An addressing mode for a CPU16 processor instruction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddrMode {
    /// Operate on the index register plus an unsigned 8-bit offset.
    Indexed8(IndexReg),
    /// Operate on the index register plus a signed 16-bit offset.
    Indexed16(IndexReg),
    /// Operate on the index register plus a signed 20-bit offset.
    Indexed20(IndexReg),
    /// Operate on the index register plus the contents of accumulator E.
    EIndexed(IndexReg),
    /// Operate on the 16-bit address following the opcode.
    Extended,
    /// Operate on the 20-bit address following the opcode.
    Extended20,
    /// Branch by an 8-bit displacement.
    Relative8,
    /// Branch by a 16-bit displacement.
    Relative16,
    /// Operate on a constant byte following the opcode.
    Immediate8,
    /// Operate on a constant word following the opcode.
    Immediate16,
    /// No memory operand.
    Inherent,
    /// Move from an indexed location (post-incrementing X) to an extended
    /// address.
    IndexedToExtended,
    /// Move from an extended address to an indexed location
    /// (post-incrementing X).
    ExtendedToIndexed,
    /// Move from one extended address to another.
    ExtendedToExtended,
}

impl AddrMode {
    /// Returns the canonical display label for this addressing mode.
    pub fn label(self) -> &'static str {
        match self {
            AddrMode::Indexed8(IndexReg::X)
            | AddrMode::Indexed16(IndexReg::X)
            | AddrMode::Indexed20(IndexReg::X) => "X",
            AddrMode::Indexed8(IndexReg::Y)
            | AddrMode::Indexed16(IndexReg::Y)
            | AddrMode::Indexed20(IndexReg::Y) => "Y",
            AddrMode::Indexed8(IndexReg::Z)
            | AddrMode::Indexed16(IndexReg::Z)
            | AddrMode::Indexed20(IndexReg::Z) => "Z",
            AddrMode::EIndexed(IndexReg::X) => "E_X",
            AddrMode::EIndexed(IndexReg::Y) => "E_Y",
            AddrMode::EIndexed(IndexReg::Z) => "E_Z",
            AddrMode::Extended => "EXT",
            AddrMode::Extended20 => "EXT20",
            AddrMode::Relative8 => "rel8",
            AddrMode::Relative16 => "rel16",
            AddrMode::Immediate8 => "imm8",
            AddrMode::Immediate16 => "imm16",
            AddrMode::Inherent => "INH",
            AddrMode::IndexedToExtended => "IXP->EXT",
            AddrMode::ExtendedToIndexed => "EXT->IXP",
            AddrMode::ExtendedToExtended => "EXT->EXT",
        }
    }

    /// Returns the index register whose marker precedes each operand of an
    /// instruction in this mode, if any.
    pub fn operand_index(self) -> Option<IndexReg> {
        match self {
            AddrMode::Indexed8(reg)
            | AddrMode::Indexed16(reg)
            | AddrMode::Indexed20(reg) => Some(reg),
            _ => None,
        }
    }
}

impl fmt::Display for AddrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.label())
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{AddrMode, IndexReg, Page};

    #[test]
    fn page_prefixes() {
        for page in Page::ALL {
            match page.prefix() {
                Some(byte) => {
                    assert_eq!(Page::from_prefix(byte), Some(page));
                    assert_eq!(page.prefix_len(), 1);
                }
                None => assert_eq!(page.prefix_len(), 0),
            }
        }
        assert_eq!(Page::from_prefix(0x00), None);
        assert_eq!(Page::from_prefix(0x47), None);
    }

    #[test]
    fn page_indices_match_table_order() {
        for (index, page) in Page::ALL.into_iter().enumerate() {
            assert_eq!(page.index(), index);
            assert_eq!(page.to_string(), format!("PAGE{index}"));
        }
    }

    #[test]
    fn mode_labels() {
        assert_eq!(AddrMode::Indexed8(IndexReg::X).label(), "X");
        assert_eq!(AddrMode::Indexed20(IndexReg::Z).label(), "Z");
        assert_eq!(AddrMode::EIndexed(IndexReg::Y).label(), "E_Y");
        assert_eq!(AddrMode::IndexedToExtended.to_string(), "IXP->EXT");
        assert_eq!(AddrMode::ExtendedToExtended.to_string(), "EXT->EXT");
    }

    #[test]
    fn operand_index() {
        let mode = AddrMode::Indexed16(IndexReg::Y);
        assert_eq!(mode.operand_index(), Some(IndexReg::Y));
        assert_eq!(AddrMode::EIndexed(IndexReg::X).operand_index(), None);
        assert_eq!(AddrMode::Extended.operand_index(), None);
        assert_eq!(IndexReg::Z.marker(), "[%z]+");
    }
}

//===========================================================================//
