//! Disassembler for Motorola CPU16 (68HC16) machine code.
//!
//! The `dis` module holds the instruction table and the decoder, which
//! turns a program image into a stream of decoded instructions, along with
//! the renderer that formats them as listing lines.  The `image` module
//! defines the byte source that the decoder reads from, and `load` reads
//! one in from a file.

#![warn(missing_docs)]

pub mod dis;
pub mod image;
pub mod load;
