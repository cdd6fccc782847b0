/// '가'
pub const SYLLABLE_START: u32 = 0xAC00;

/// '힣'
pub const SYLLABLE_END: u32 = 0xD7A3;

pub const 초성_COUNT: usize = 19;
pub const 중성_COUNT: usize = 21;

// including "no 종성" at index 0
pub const 종성_COUNT: usize = 28;

/// number of syllables that share a 초성
pub const 중성_BLOCK: u32 = (중성_COUNT * 종성_COUNT) as u32;

pub const SYLLABLE_COUNT: usize = 초성_COUNT * 중성_COUNT * 종성_COUNT;

pub const 초성S: [char; 초성_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ',
    'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

pub const 중성S: [char; 중성_COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ',
    'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

// index 0 ("no 종성") is not in this table, so `종성S[i]` is the 종성 at index `i + 1`
pub const 종성S: [char; 종성_COUNT - 1] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ',
    'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ',
    'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];
