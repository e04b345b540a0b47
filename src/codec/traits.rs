use super::layout::{Field, Frame};

// Types that can be written verbatim into a field of a frame
pub trait WireWrite {
    fn write_at(&self, frame: &mut Frame, field: Field);
}

// Types that can be read verbatim out of a field of a frame.
// Range validation is the decoder's job, not the reader's.
pub trait WireRead: Sized {
    fn read_at(frame: &Frame, field: Field) -> Self;
}

/// Enumerations carried on the wire as their ordinal position.
///
/// Implementors map every variant explicitly in both directions; an ordinal
/// outside the known set maps to `None` instead of being coerced.
pub trait WireOrdinal: Sized + Copy + 'static {
    /// Variants in ordinal order.
    const ALL: &'static [Self];

    fn ordinal(self) -> u8;

    fn from_ordinal(value: u8) -> Option<Self>;
}
