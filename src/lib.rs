mod assemble;
mod charset;
mod config;
mod constant;
mod document;
mod error;
mod sheet;


pub use assemble::Generator;
pub use charset::Charset;
pub use config::{
    FontAttributes,
    GeneratorConfig,
    GridLayout,
    PartialFontAttributes,
    PartialGeneratorConfig,
    PartialGridLayout,
};
pub use constant::*;
pub use document::{
    BaseGlyph,
    ComposedGlyph,
    GlyphRecord,
    PfpDocument,
    hash_bytes,
};
pub use error::{Error, ImageLoadError, OutputWriteError};
pub use sheet::{Bitmap, GlyphCell, GlyphSheet, ImageType};

use pfp_fs::write_log;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerateResult {
    pub base_glyphs: usize,
    pub composed_glyphs: usize,

    /// sha3-256 of the written file
    pub digest: String,
}

/// glyph sheet at `image_path` -> pfp file at `config.output`
///
/// The shape rules are checked before anything is read or written.
pub fn generate(image_path: &str, config: &GeneratorConfig) -> Result<GenerateResult, Error> {
    let generator = Generator::new(config)?;
    generate_with(&generator, image_path, config)
}

/// `generate` with a generator that's already built from `config`
pub fn generate_with(generator: &Generator, image_path: &str, config: &GeneratorConfig) -> Result<GenerateResult, Error> {
    let sheet = generator.load_sheet(image_path, config)?;
    let document = generator.assemble(&sheet, config)?;
    let digest = document.save_to_file(&config.output)?;
    write_log("generate", &format!("wrote `{}` (sha3-256: {digest})", config.output));

    Ok(GenerateResult {
        base_glyphs: document.base_glyphs().count(),
        composed_glyphs: document.composed_glyphs().count(),
        digest,
    })
}
