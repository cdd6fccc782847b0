use crate::config::FontAttributes;
use crate::error::OutputWriteError;
use pfp_fs::{WriteMode, create_parent_dirs, write_bytes};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PfpDocument {
    pub version: u32,
    pub attr: FontAttributes,

    /// all the base glyphs, then all the composed glyphs
    pub glyphs: Vec<GlyphRecord>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GlyphRecord {
    Base(BaseGlyph),
    Composed(ComposedGlyph),
}

/// A cell of the glyph sheet, under a private-use codepoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BaseGlyph {
    pub unicode: u32,
    pub data: Vec<String>,
}

/// A syllable drawn by overlaying 2 or 3 base glyphs.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ComposedGlyph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub unicode: u32,
    pub components: Vec<u32>,
}

impl PfpDocument {
    pub fn base_glyphs(&self) -> impl Iterator<Item = &BaseGlyph> {
        self.glyphs.iter().filter_map(
            |glyph| match glyph {
                GlyphRecord::Base(g) => Some(g),
                GlyphRecord::Composed(_) => None,
            }
        )
    }

    pub fn composed_glyphs(&self) -> impl Iterator<Item = &ComposedGlyph> {
        self.glyphs.iter().filter_map(
            |glyph| match glyph {
                GlyphRecord::Composed(g) => Some(g),
                GlyphRecord::Base(_) => None,
            }
        )
    }

    pub fn to_json(&self) -> Result<String, OutputWriteError> {
        Ok(serde_json::to_string(self)?)
    }

    /// It returns the sha3-256 of the written bytes.
    pub fn save_to_file(&self, path: &str) -> Result<String, OutputWriteError> {
        let json = self.to_json()?;
        create_parent_dirs(path)?;
        write_bytes(path, json.as_bytes(), WriteMode::CreateOrTruncate)?;

        Ok(hash_bytes(json.as_bytes()))
    }
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(bytes);
    format!("{:064x}", hasher.finalize())
}
