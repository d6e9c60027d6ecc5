use thiserror::Error;

//===========================================================================//

/// An error encountered while decoding CPU16 machine code.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum DecodeError {
    /// Decoding would have to read past the end of the program image.
    #[error(
        "{needed} byte(s) needed at offset {offset:#010x}, but the image is \
         only {len} byte(s) long"
    )]
    OutOfBounds {
        /// The offset of the first byte that would have been read.
        offset: usize,
        /// The number of bytes, starting at `offset`, that were needed.
        needed: usize,
        /// The total length of the program image.
        len: usize,
    },
}

impl DecodeError {
    /// Returns the image offset at which the failed read would have
    /// started.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::OutOfBounds { offset, .. } => offset,
        }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::DecodeError;

    #[test]
    fn out_of_bounds_message() {
        let error =
            DecodeError::OutOfBounds { offset: 0x10, needed: 3, len: 17 };
        assert_eq!(
            error.to_string(),
            "3 byte(s) needed at offset 0x00000010, but the image is only 17 \
             byte(s) long"
        );
        assert_eq!(error.offset(), 0x10);
    }
}

//===========================================================================//
