use crate::alphabet::JamoKind;
use crate::error::AddressError;
use std::ops::Range;

pub const PRIVATE_USE_START: u32 = 0xE000;
pub const PRIVATE_USE_END: u32 = 0xF8FF;

/// Assigns a private-use codepoint to every (kind, shape class, index).
///
/// ```nohighlight
/// id = base + class_count * stride * kind + stride * rank + index
/// ```
///
/// `stride` is the same for all three kinds, so the space is a
/// `3 * class_count` by `stride` grid, and the glyph sheet is laid out the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComponentAddressor {
    base: u32,
    class_count: usize,
    stride: usize,
}

impl ComponentAddressor {
    pub fn new(base: u32, class_count: usize, stride: usize) -> Result<Self, AddressError> {
        if class_count == 0 {
            return Err(AddressError::NoShapeClasses);
        }

        for kind in JamoKind::ALL.iter() {
            if stride < kind.alphabet_size() {
                return Err(AddressError::StrideTooSmall {
                    stride,
                    kind: *kind,
                    alphabet_size: kind.alphabet_size(),
                });
            }
        }

        let size = (JamoKind::ALL.len() * class_count * stride) as u64;
        let last = base as u64 + size - 1;

        if base < PRIVATE_USE_START || last > PRIVATE_USE_END as u64 {
            return Err(AddressError::OutOfPrivateUseArea(base, last.min(u32::MAX as u64) as u32));
        }

        Ok(ComponentAddressor { base, class_count, stride })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// total number of identifiers, which is also the number of cells in the glyph sheet
    pub fn len(&self) -> usize {
        JamoKind::ALL.len() * self.class_count * self.stride
    }

    /// It panics if `rank` or `index` is out of range: that's a bug in the caller, not bad input.
    pub fn address(&self, kind: JamoKind, rank: usize, index: usize) -> u32 {
        assert!(rank < self.class_count, "shape class rank {rank} out of range");
        assert!(index < kind.alphabet_size(), "{kind} index {index} out of range");

        self.base
        + (self.class_count * self.stride * kind.ordinal()) as u32
        + (self.stride * rank) as u32
        + index as u32
    }

    /// identifiers that `address(kind, _, _)` can return (and a few unused ones, if the stride is wider than the alphabet)
    pub fn range(&self, kind: JamoKind) -> Range<u32> {
        let per_kind = (self.class_count * self.stride) as u32;
        let start = self.base + per_kind * kind.ordinal() as u32;

        start..(start + per_kind)
    }

    /// inverse of `address`
    pub fn locate(&self, id: u32) -> Option<(JamoKind, usize, usize)> {
        let offset = id.checked_sub(self.base)? as usize;
        let per_kind = self.class_count * self.stride;
        let kind = JamoKind::from_ordinal(offset / per_kind)?;
        let rank = offset % per_kind / self.stride;
        let index = offset % self.stride;

        if index < kind.alphabet_size() {
            Some((kind, rank, index))
        }

        else {
            None
        }
    }
}
