use crate::hangul::{
    종성S,
    종성_COUNT,
    중성S,
    중성_COUNT,
    초성S,
    초성_COUNT,
};
use std::collections::HashMap;
use std::fmt;

/// Which slot of a syllable a 자모 fills.
///
/// The ordinal is part of the component identifier scheme. Do not reorder.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum JamoKind {
    초성,
    중성,
    종성,
}

impl JamoKind {
    pub const ALL: [JamoKind; 3] = [JamoKind::초성, JamoKind::중성, JamoKind::종성];

    pub fn ordinal(&self) -> usize {
        match self {
            JamoKind::초성 => 0,
            JamoKind::중성 => 1,
            JamoKind::종성 => 2,
        }
    }

    pub fn from_ordinal(n: usize) -> Option<Self> {
        JamoKind::ALL.get(n).copied()
    }

    pub fn alphabet_size(&self) -> usize {
        match self {
            JamoKind::초성 => 초성_COUNT,
            JamoKind::중성 => 중성_COUNT,
            JamoKind::종성 => 종성_COUNT,
        }
    }
}

impl fmt::Display for JamoKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            JamoKind::초성 => "초성",
            JamoKind::중성 => "중성",
            JamoKind::종성 => "종성",
        };

        write!(f, "{s}")
    }
}

/// The three ordered 자모 tables and their reverse lookups.
///
/// An index is the identity of a 자모 within its kind. 종성 index 0 means
/// "no 종성" and has no symbol.
pub struct PhoneticAlphabet {
    초성s: Vec<char>,
    중성s: Vec<char>,

    // `None` at index 0
    종성s: Vec<Option<char>>,

    초성_rev: HashMap<char, usize>,
    중성_rev: HashMap<char, usize>,
    종성_rev: HashMap<char, usize>,
}

impl PhoneticAlphabet {
    pub fn new() -> Self {
        let 초성s = 초성S.to_vec();
        let 중성s = 중성S.to_vec();
        let 종성s = std::iter::once(None).chain(종성S.iter().map(|c| Some(*c))).collect::<Vec<_>>();

        let 초성_rev = 초성s.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        let 중성_rev = 중성s.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        let 종성_rev = 종성s.iter().enumerate().filter_map(
            |(i, c)| c.map(|c| (c, i))
        ).collect();

        PhoneticAlphabet {
            초성s,
            중성s,
            종성s,
            초성_rev,
            중성_rev,
            종성_rev,
        }
    }

    pub fn len(&self, kind: JamoKind) -> usize {
        match kind {
            JamoKind::초성 => self.초성s.len(),
            JamoKind::중성 => self.중성s.len(),
            JamoKind::종성 => self.종성s.len(),
        }
    }

    /// 'ㄱ' -> Some(0) for 초성, but Some(1) for 종성
    pub fn index_of(&self, kind: JamoKind, symbol: char) -> Option<usize> {
        match kind {
            JamoKind::초성 => self.초성_rev.get(&symbol).copied(),
            JamoKind::중성 => self.중성_rev.get(&symbol).copied(),
            JamoKind::종성 => self.종성_rev.get(&symbol).copied(),
        }
    }

    pub fn symbol(&self, kind: JamoKind, index: usize) -> Option<char> {
        match kind {
            JamoKind::초성 => self.초성s.get(index).copied(),
            JamoKind::중성 => self.중성s.get(index).copied(),
            JamoKind::종성 => self.종성s.get(index).copied().flatten(),
        }
    }
}

impl Default for PhoneticAlphabet {
    fn default() -> Self {
        PhoneticAlphabet::new()
    }
}
