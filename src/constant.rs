pub const PFP_VERSION: u32 = 1;

pub const DEFAULT_IMAGE_PATH: &str = "imgs/7x9.png";
pub const DEFAULT_OUTPUT_PATH: &str = "galmuri9-condensed.pfp";
pub const DEFAULT_BASE_CODEPOINT: u32 = 0xE000;

// `#` is ink, `.` is background
pub const INK: char = '#';
pub const BACKGROUND: char = '.';
