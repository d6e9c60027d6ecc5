use super::ProgramImage;
use std::cell::RefCell;

//===========================================================================//

/// Wraps another `ProgramImage` and records every byte offset that is read
/// from it.
///
/// Reads at or beyond the end of the wrapped image are recorded and answered
/// with zero rather than forwarded, so that a caller which fails to
/// bounds-check can be caught by inspecting `out_of_range_reads()`.
pub struct TracingImage<'a, I: ProgramImage + ?Sized> {
    inner: &'a I,
    reads: RefCell<Vec<usize>>,
}

impl<'a, I: ProgramImage + ?Sized> TracingImage<'a, I> {
    /// Wraps the given image.
    pub fn new(inner: &'a I) -> TracingImage<'a, I> {
        TracingImage { inner, reads: RefCell::new(Vec::new()) }
    }

    /// Returns every offset read so far, in the order they were read.
    pub fn reads(&self) -> Vec<usize> {
        self.reads.borrow().clone()
    }

    /// Returns the offsets read so far that were at or beyond the end of the
    /// wrapped image.
    pub fn out_of_range_reads(&self) -> Vec<usize> {
        let len = self.inner.len();
        self.reads.borrow().iter().copied().filter(|&o| o >= len).collect()
    }

    /// Forgets all reads recorded so far.
    pub fn clear(&self) {
        self.reads.borrow_mut().clear();
    }
}

impl<I: ProgramImage + ?Sized> ProgramImage for TracingImage<'_, I> {
    fn description(&self) -> String {
        format!("traced {}", self.inner.description())
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn peek_byte(&self, offset: usize) -> u8 {
        self.reads.borrow_mut().push(offset);
        if offset < self.inner.len() {
            self.inner.peek_byte(offset)
        } else {
            0
        }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::TracingImage;
    use crate::image::ProgramImage;

    #[test]
    fn records_reads() {
        let bytes: &[u8] = &[0xaa, 0xbb, 0xcc];
        let image = TracingImage::new(bytes);
        assert_eq!(image.peek_byte(2), 0xcc);
        assert_eq!(image.peek_byte(0), 0xaa);
        assert_eq!(image.reads(), vec![2, 0]);
        assert!(image.out_of_range_reads().is_empty());
        image.clear();
        assert!(image.reads().is_empty());
    }

    #[test]
    fn catches_out_of_range_reads() {
        let bytes: &[u8] = &[0xaa];
        let image = TracingImage::new(bytes);
        assert_eq!(image.peek_byte(1), 0);
        assert_eq!(image.peek_byte(7), 0);
        assert_eq!(image.out_of_range_reads(), vec![1, 7]);
        assert_eq!(image.description(), "traced 1B image");
    }
}

//===========================================================================//
