//! Building blocks for pfp hangul fonts.
//!
//! A syllable is decomposed into (초성, 중성, 종성) indices, the indices are
//! mapped to a `ShapeClass`, and (kind, class, index) is mapped to a
//! private-use codepoint. Each codepoint names one cell of the glyph sheet, so
//! 11,172 syllables are drawn with a few thousand small images.

mod address;
mod alphabet;
mod error;
mod hangul;
mod shape;

#[cfg(test)]
mod tests;

pub use address::{ComponentAddressor, PRIVATE_USE_END, PRIVATE_USE_START};
pub use alphabet::{JamoKind, PhoneticAlphabet};
pub use error::{AddressError, ClassificationError};
pub use hangul::*;
pub use shape::{ShapeClass, ShapeClassifier, TrailingShape, VowelShape};

/// (초성, 중성, 종성) component identifiers of a syllable. There's no 종성
/// identifier for open syllables.
pub fn syllable_components(
    s: 한글,
    classifier: &ShapeClassifier,
    addressor: &ComponentAddressor,
) -> Result<Vec<u32>, ClassificationError> {
    let rank = classifier.classify(s)?.rank();
    let mut result = Vec::with_capacity(3);

    result.push(addressor.address(JamoKind::초성, rank, s.초성));
    result.push(addressor.address(JamoKind::중성, rank, s.중성));

    if s.has_종성() {
        result.push(addressor.address(JamoKind::종성, rank, s.종성));
    }

    Ok(result)
}
