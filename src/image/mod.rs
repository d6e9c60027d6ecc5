//! Facilities for representing the program image being disassembled.

mod rom;
mod trace;

pub use rom::RomImage;
pub use trace::TracingImage;

//===========================================================================//

/// A read-only, in-memory program image.
///
/// Offsets are byte positions from the start of the image.  Callers are
/// expected to check an offset against `len()` *before* calling
/// `peek_byte`; implementations may panic when given an offset that is out
/// of range.
pub trait ProgramImage {
    /// Returns a human-readable description of this program image.
    fn description(&self) -> String;

    /// Returns the size of the image, in bytes.
    fn len(&self) -> usize;

    /// Returns true if the image contains no bytes at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte at the given offset.
    fn peek_byte(&self, offset: usize) -> u8;
}

impl ProgramImage for [u8] {
    fn description(&self) -> String {
        describe_size(self.len(), "image")
    }

    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn peek_byte(&self, offset: usize) -> u8 {
        self[offset]
    }
}

impl ProgramImage for Vec<u8> {
    fn description(&self) -> String {
        self.as_slice().description()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn peek_byte(&self, offset: usize) -> u8 {
        self[offset]
    }
}

pub(crate) fn describe_size(size: usize, what: &str) -> String {
    if size < 1024 {
        format!("{size}B {what}")
    } else if size < 1024 * 1024 {
        format!("{}kB {what}", size >> 10)
    } else {
        format!("{}MB {what}", size >> 20)
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::ProgramImage;

    #[test]
    fn slice_image() {
        let bytes: &[u8] = &[0x12, 0x34, 0x56];
        assert_eq!(ProgramImage::len(bytes), 3);
        assert!(!ProgramImage::is_empty(bytes));
        assert_eq!(bytes.peek_byte(1), 0x34);
        assert_eq!(bytes.description(), "3B image");
    }

    #[test]
    fn empty_image() {
        let bytes: Vec<u8> = Vec::new();
        assert!(ProgramImage::is_empty(&bytes));
        assert_eq!(bytes.description(), "0B image");
    }

    #[test]
    fn large_image_description() {
        assert_eq!(vec![0u8; 0x1000].description(), "4kB image");
        assert_eq!(vec![0u8; 0x200000].description(), "2MB image");
    }
}

//===========================================================================//
