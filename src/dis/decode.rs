use super::error::DecodeError;
use super::field::extract;
use super::mode::Page;
use super::table::{InstructionDescriptor, InstructionTable};
use crate::image::ProgramImage;
use log::{debug, trace};
use std::iter::FusedIterator;

//===========================================================================//

/// The size of the smallest possible CPU16 instruction, in bytes.  The
/// decoder stops once fewer than this many bytes remain.
pub const MIN_INSTRUCTION_SIZE: usize = 2;

//===========================================================================//

/// A complete instruction, including operand values, decoded from a program
/// image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedInstruction<'t> {
    /// The offset of the instruction's first byte within the image.
    pub offset: usize,
    /// The opcode page the instruction was decoded from.
    pub page: Page,
    /// The opcode byte (following any prefix byte).
    pub opcode: u8,
    /// The table entry that the opcode resolved to.
    pub descriptor: &'t InstructionDescriptor,
    /// The exact encoded bytes of the instruction, including any prefix.
    pub raw_bytes: Vec<u8>,
    /// The extracted operand values, one per operand field of the
    /// descriptor, in the same order.
    pub operand_values: Vec<i64>,
}

impl DecodedInstruction<'_> {
    /// Returns the size of this instruction, in bytes.
    pub fn size(&self) -> usize {
        self.raw_bytes.len()
    }

    /// Returns the instruction mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }
}

//===========================================================================//

/// The state of a `Decoder`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DecoderState {
    /// There may be more instructions to decode.
    Scanning,
    /// Decoding has finished, either because too few bytes remain or
    /// because of a fatal error.
    Done,
}

/// What a `Decoder` does after failing to decode an instruction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Recovery {
    /// Report the error and stop decoding.
    #[default]
    Halt,
    /// Report the error, skip one byte, and carry on decoding.
    SkipByte,
}

//===========================================================================//

/// Decodes a program image one instruction at a time.
///
/// A `Decoder` is an iterator over the instructions in the image, starting
/// at offset zero.  Each item is either a decoded instruction or the error
/// that prevented one from being decoded.
pub struct Decoder<'a, I: ProgramImage + ?Sized> {
    table: &'a InstructionTable,
    image: &'a I,
    cursor: usize,
    state: DecoderState,
    recovery: Recovery,
}

impl<'a, I: ProgramImage + ?Sized> Decoder<'a, I> {
    /// Creates a decoder that stops at the first error.
    pub fn new(table: &'a InstructionTable, image: &'a I) -> Decoder<'a, I> {
        Decoder::with_recovery(table, image, Recovery::Halt)
    }

    /// Creates a decoder with the given error recovery policy.
    pub fn with_recovery(
        table: &'a InstructionTable,
        image: &'a I,
        recovery: Recovery,
    ) -> Decoder<'a, I> {
        let mut decoder = Decoder {
            table,
            image,
            cursor: 0,
            state: DecoderState::Scanning,
            recovery,
        };
        decoder.update_state();
        debug!(
            "decoding {} ({:?} on error)",
            image.description(),
            decoder.recovery
        );
        decoder
    }

    /// Returns the offset of the next instruction to be decoded.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current state of the decoder.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Decodes the single instruction that starts at `offset`, without
    /// moving the cursor.
    ///
    /// The whole instruction is bounds-checked before any operand is
    /// extracted, so an error here means that no byte past the end of the
    /// image was read.
    pub fn decode_at(
        &self,
        offset: usize,
    ) -> Result<DecodedInstruction<'a>, DecodeError> {
        let len = self.image.len();
        let out_of_bounds =
            |needed: usize| DecodeError::OutOfBounds { offset, needed, len };
        if offset >= len {
            return Err(out_of_bounds(1));
        }
        let first = self.image.peek_byte(offset);
        let (page, opcode) = match Page::from_prefix(first) {
            Some(page) => {
                if len - offset < 2 {
                    return Err(out_of_bounds(2));
                }
                trace!("{offset:#010x}: prefix {first:#04x} selects {page}");
                (page, self.image.peek_byte(offset + 1))
            }
            None => (Page::Unprefixed, first),
        };
        let descriptor = self.table.lookup(page, opcode);
        let header_len = page.prefix_len() + 1;
        let operand_bits = descriptor.operand_bits() as usize;
        let operand_bytes = descriptor.operand_bytes();
        let size = header_len + operand_bytes;
        if size > len - offset {
            return Err(out_of_bounds(size));
        }
        // Operand fields are packed against the end of the operand bytes;
        // any padding bits come first.
        let mut bit_offset =
            (offset + header_len) * 8 + (operand_bytes * 8 - operand_bits);
        let mut operand_values = Vec::with_capacity(descriptor.operands.len());
        for field in descriptor.operands {
            let (value, bits) = extract(self.image, bit_offset, field)?;
            operand_values.push(value);
            bit_offset += bits as usize;
        }
        let raw_bytes = (offset..offset + size)
            .map(|index| self.image.peek_byte(index))
            .collect();
        Ok(DecodedInstruction {
            offset,
            page,
            opcode,
            descriptor,
            raw_bytes,
            operand_values,
        })
    }

    /// Decodes the instruction at the cursor and advances past it.  Returns
    /// `None` once the decoder is done.
    pub fn next_instruction(
        &mut self,
    ) -> Option<Result<DecodedInstruction<'a>, DecodeError>> {
        if self.state == DecoderState::Done {
            return None;
        }
        let result = self.decode_at(self.cursor);
        match result {
            Ok(ref instruction) => {
                trace!(
                    "{:#010x}: {} {} ({} bytes)",
                    instruction.offset,
                    instruction.mnemonic(),
                    instruction.descriptor.mode,
                    instruction.size()
                );
                self.cursor += instruction.size();
            }
            Err(ref error) => {
                debug!("{error} ({:?})", self.recovery);
                match self.recovery {
                    Recovery::Halt => self.state = DecoderState::Done,
                    Recovery::SkipByte => self.cursor += 1,
                }
            }
        }
        self.update_state();
        Some(result)
    }

    fn update_state(&mut self) {
        let remaining = self.image.len().saturating_sub(self.cursor);
        if remaining < MIN_INSTRUCTION_SIZE {
            self.state = DecoderState::Done;
        }
    }
}

impl<'a, I: ProgramImage + ?Sized> Iterator for Decoder<'a, I> {
    type Item = Result<DecodedInstruction<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_instruction()
    }
}

impl<I: ProgramImage + ?Sized> FusedIterator for Decoder<'_, I> {}

//===========================================================================//


//===========================================================================//
