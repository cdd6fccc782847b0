use super::constants::{
    SYLLABLE_END,
    SYLLABLE_START,
    종성_COUNT,
    중성_BLOCK,
    중성_COUNT,
    초성_COUNT,
};

/// A precomposed syllable, decomposed into its 자모 indices.
///
/// The indices are the positions in `초성S`, `중성S` and `종성S`. `종성` is 0 when
/// the syllable has no 종성, and `종성S[종성 - 1]` otherwise.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct 한글 {
    pub 초성: usize,
    pub 중성: usize,
    pub 종성: usize,
}

impl 한글 {
    pub fn new(초성: usize, 중성: usize, 종성: usize) -> Self {
        assert!(
            초성 < 초성_COUNT && 중성 < 중성_COUNT && 종성 < 종성_COUNT,
            "invalid 자모 indices: ({초성}, {중성}, {종성})",
        );

        한글 { 초성, 중성, 종성 }
    }

    /// It panics if `c` is not in U+AC00..=U+D7A3. Use `try_from_u32` for unchecked inputs.
    pub fn decompose(c: u32) -> Self {
        match 한글::try_from_u32(c) {
            Some(syllable) => syllable,
            None => panic!("U+{c:04X} is not a hangul syllable"),
        }
    }

    pub fn try_from_u32(c: u32) -> Option<Self> {
        if !is_syllable(c) {
            return None;
        }

        let offset = c - SYLLABLE_START;

        Some(한글 {
            초성: (offset / 중성_BLOCK) as usize,
            중성: (offset % 중성_BLOCK / 종성_COUNT as u32) as usize,
            종성: (offset % 종성_COUNT as u32) as usize,
        })
    }

    pub fn from_char(c: char) -> Self {
        한글::decompose(c as u32)
    }

    pub fn compose(&self) -> u32 {
        SYLLABLE_START
        + self.초성 as u32 * 중성_BLOCK
        + self.중성 as u32 * 종성_COUNT as u32
        + self.종성 as u32
    }

    pub fn to_char(&self) -> char {
        // `compose` never leaves the syllable block, which has no surrogates
        char::from_u32(self.compose()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn has_종성(&self) -> bool {
        self.종성 != 0
    }
}

pub fn is_syllable(c: u32) -> bool {
    (SYLLABLE_START..=SYLLABLE_END).contains(&c)
}

/// '가', '각', '갂', ..., '힣'
pub fn all_syllables() -> impl Iterator<Item = 한글> {
    (SYLLABLE_START..=SYLLABLE_END).map(한글::decompose)
}
