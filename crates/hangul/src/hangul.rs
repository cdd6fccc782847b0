mod char;
mod constants;

pub use self::char::{한글, all_syllables, is_syllable};
pub use constants::*;
