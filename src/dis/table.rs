use super::cpu16;
use super::field::OperandField;
use super::mode::{AddrMode, Page};

//===========================================================================//

/// The mnemonic given to opcodes that have no defined instruction.
pub const UNRECOGNIZED: &str = "unrecognized";

/// The most operand fields a single instruction can have.
pub const MAX_OPERANDS: usize = 4;

const OPCODES_PER_PAGE: usize = 0x100;

//===========================================================================//

/// Describes one opcode (on one page): its mnemonic, addressing mode, and
/// operand layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct InstructionDescriptor {
    /// The opcode byte (following any prefix byte).
    pub opcode: u8,
    /// The instruction mnemonic, e.g. `"ldaa"`.
    pub mnemonic: &'static str,
    /// The addressing mode.
    pub mode: AddrMode,
    /// The operand fields, in encoding order.
    pub operands: &'static [OperandField],
}

impl InstructionDescriptor {
    /// Creates a new descriptor.  Panics if there are more than
    /// `MAX_OPERANDS` operand fields.
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        mode: AddrMode,
        operands: &'static [OperandField],
    ) -> InstructionDescriptor {
        assert!(operands.len() <= MAX_OPERANDS);
        InstructionDescriptor { opcode, mnemonic, mode, operands }
    }

    /// Returns the descriptor used for an opcode that has no defined
    /// instruction on the given page.  The two low pages default to an
    /// 8-bit immediate operand; the two high pages default to inherent
    /// addressing with no operand.
    pub fn unrecognized(page: Page, opcode: u8) -> InstructionDescriptor {
        const DEFAULT_IMMEDIATE: &[OperandField] = &[OperandField::II];
        match page {
            Page::Unprefixed | Page::Prefix17 => InstructionDescriptor::new(
                opcode,
                UNRECOGNIZED,
                AddrMode::Immediate8,
                DEFAULT_IMMEDIATE,
            ),
            Page::Prefix27 | Page::Prefix37 => InstructionDescriptor::new(
                opcode,
                UNRECOGNIZED,
                AddrMode::Inherent,
                &[],
            ),
        }
    }

    /// Returns true unless this is an `unrecognized` placeholder.
    pub fn is_recognized(&self) -> bool {
        self.mnemonic != UNRECOGNIZED
    }

    /// Returns the total width of all operand fields, in bits.
    pub fn operand_bits(&self) -> u32 {
        self.operands.iter().map(OperandField::width_bits).sum()
    }

    /// Returns the number of bytes that the operand fields occupy after the
    /// opcode byte.
    pub fn operand_bytes(&self) -> usize {
        self.operand_bits().div_ceil(8) as usize
    }
}

//===========================================================================//

/// An immutable table mapping every (page, opcode) pair to an instruction
/// descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstructionTable {
    entries: Box<[InstructionDescriptor]>,
}

impl InstructionTable {
    /// Returns the complete CPU16 instruction table.
    pub fn cpu16() -> InstructionTable {
        InstructionTable::from_fn(cpu16::descriptor)
    }

    /// Builds a table by calling `descriptor` once for each of the 1024
    /// (page, opcode) pairs.
    pub fn from_fn<F>(mut descriptor: F) -> InstructionTable
    where
        F: FnMut(Page, u8) -> InstructionDescriptor,
    {
        let mut entries =
            Vec::with_capacity(Page::ALL.len() * OPCODES_PER_PAGE);
        for page in Page::ALL {
            for opcode in 0..=u8::MAX {
                entries.push(descriptor(page, opcode));
            }
        }
        InstructionTable { entries: entries.into_boxed_slice() }
    }

    /// Returns the descriptor for the given opcode on the given page.
    pub fn lookup(&self, page: Page, opcode: u8) -> &InstructionDescriptor {
        &self.entries[page.index() * OPCODES_PER_PAGE + usize::from(opcode)]
    }

    /// Returns an iterator over every entry in the table, along with the
    /// page it belongs to.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (Page, &InstructionDescriptor)> + '_ {
        self.entries.iter().enumerate().map(|(index, descriptor)| {
            (Page::ALL[index / OPCODES_PER_PAGE], descriptor)
        })
    }
}

impl Default for InstructionTable {
    fn default() -> InstructionTable {
        InstructionTable::cpu16()
    }
}

//===========================================================================//


//===========================================================================//
