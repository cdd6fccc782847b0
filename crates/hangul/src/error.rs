use crate::alphabet::JamoKind;
use crate::hangul::한글;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClassificationError {
    /// no rule matches the syllable
    NoMatch(한글),

    /// ranks of every matching rule
    MultipleMatches(한글, Vec<usize>),

    /// a rule names a symbol that is not in the alphabet
    UnknownSymbol {
        kind: JamoKind,
        symbol: char,
    },
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassificationError::NoMatch(s) => write!(
                f,
                "no shape class matches ({}, {}, {}) of U+{:04X}",
                s.초성, s.중성, s.종성, s.compose(),
            ),
            ClassificationError::MultipleMatches(s, ranks) => write!(
                f,
                "({}, {}, {}) of U+{:04X} matches multiple shape classes: {ranks:?}",
                s.초성, s.중성, s.종성, s.compose(),
            ),
            ClassificationError::UnknownSymbol { kind, symbol } => write!(
                f,
                "{symbol:?} is not a valid {kind}",
            ),
        }
    }
}

impl std::error::Error for ClassificationError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// the stride cannot hold every index of `kind`
    StrideTooSmall {
        stride: usize,
        kind: JamoKind,
        alphabet_size: usize,
    },
    NoShapeClasses,

    /// (first, last) identifier of the whole space
    OutOfPrivateUseArea(u32, u32),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressError::StrideTooSmall { stride, kind, alphabet_size } => write!(
                f,
                "stride {stride} is smaller than the {kind} alphabet ({alphabet_size})",
            ),
            AddressError::NoShapeClasses => write!(f, "there must be at least 1 shape class"),
            AddressError::OutOfPrivateUseArea(first, last) => write!(
                f,
                "component identifiers U+{first:04X}..=U+{last:04X} do not fit in U+E000..=U+F8FF",
            ),
        }
    }
}

impl std::error::Error for AddressError {}
