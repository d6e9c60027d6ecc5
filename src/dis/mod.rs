//! Facilities for disassembling CPU16 machine code.

mod cpu16;
pub mod decode;
mod error;
pub mod field;
pub mod mode;
pub mod render;
pub mod table;

pub use decode::{
    DecodedInstruction, Decoder, DecoderState, MIN_INSTRUCTION_SIZE, Recovery,
};
pub use error::DecodeError;
pub use field::{Extension, FieldKind, OperandField, extract};
pub use mode::{AddrMode, IndexReg, Page};
pub use render::{ListingSummary, format_value, render, write_listing};
pub use table::{InstructionDescriptor, InstructionTable, UNRECOGNIZED};

//===========================================================================//
