use super::{ProgramImage, describe_size};

//===========================================================================//

/// A program image backed by an owned byte array, as loaded from a ROM dump
/// or a raw binary file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RomImage {
    rom: Box<[u8]>,
}

impl RomImage {
    /// Returns a new program image using the given byte array as its
    /// contents.
    pub fn new(rom: Box<[u8]>) -> RomImage {
        RomImage { rom }
    }

    /// Returns the contents of the image as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.rom
    }
}

impl From<Vec<u8>> for RomImage {
    fn from(bytes: Vec<u8>) -> RomImage {
        RomImage::new(bytes.into_boxed_slice())
    }
}

impl ProgramImage for RomImage {
    fn description(&self) -> String {
        describe_size(self.rom.len(), "ROM")
    }

    fn len(&self) -> usize {
        self.rom.len()
    }

    fn peek_byte(&self, offset: usize) -> u8 {
        self.rom[offset]
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::RomImage;
    use crate::image::ProgramImage;

    #[test]
    fn description() {
        let image = RomImage::new(Box::new([0u8; 0x10]));
        assert_eq!(image.description(), "16B ROM");
        let image = RomImage::new(Box::new([0u8; 0x1000]));
        assert_eq!(image.description(), "4kB ROM");
        let image = RomImage::new(Box::new([0u8; 0x100000]));
        assert_eq!(image.description(), "1MB ROM");
    }

    #[test]
    fn no_mirroring() {
        let mut rom = Box::new([0u8; 0x13]);
        rom[0x11] = 0xab;
        rom[0x12] = 0xcd;
        let image = RomImage::new(rom);
        assert_eq!(image.len(), 0x13);
        assert_eq!(image.peek_byte(0x10), 0x00);
        assert_eq!(image.peek_byte(0x11), 0xab);
        assert_eq!(image.peek_byte(0x12), 0xcd);
    }

    #[test]
    fn from_vec() {
        let image = RomImage::from(vec![0x37, 0xfe]);
        assert_eq!(image.as_bytes(), &[0x37, 0xfe]);
    }
}

//===========================================================================//
