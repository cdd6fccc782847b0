use crate::charset::Charset;
use crate::constant::{DEFAULT_BASE_CODEPOINT, DEFAULT_OUTPUT_PATH};
use crate::error::Error;
use pfp_fs::read_string;
use serde::{Deserialize, Serialize};

/// `attr` of a pfp document.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontAttributes {
    pub name: String,
    pub author: String,

    // "monospace"
    pub width_type: String,
    pub fixed_width: u32,
    pub space_width: u32,
    pub descent: i32,
    pub ascent: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub line_gap: i32,
    pub max_width: u32,
}

impl Default for FontAttributes {
    fn default() -> Self {
        FontAttributes {
            name: String::from("galmuri9-condensed"),
            author: String::from("koipkoi"),
            width_type: String::from("monospace"),
            fixed_width: 8,
            space_width: 8,
            descent: 0,
            ascent: 9,
            offset_x: 0,
            offset_y: 0,
            line_gap: 0,
            max_width: 8,
        }
    }
}

/// Where the cells are in the glyph sheet, in pixels.
///
/// The cell at (row, column) starts at
/// `(origin_x + column * column_pitch, origin_y + row * row_pitch)`.
/// There are `3 * (number of shape classes)` rows: all the 초성 rows, then
/// the 중성 rows, then the 종성 rows.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GridLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    pub column_pitch: u32,
    pub row_pitch: u32,

    // It's also the stride of component identifiers, so it must be at least 28.
    pub columns: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            cell_width: 8,
            cell_height: 9,
            origin_x: 8,
            origin_y: 0,
            column_pitch: 8,
            row_pitch: 9,
            columns: 30,
        }
    }
}

impl GridLayout {
    /// (x, y) of the top-left pixel of a cell
    pub fn cell_origin(&self, row: u32, column: u32) -> (u32, u32) {
        (
            self.origin_x + column * self.column_pitch,
            self.origin_y + row * self.row_pitch,
        )
    }

    /// minimum (width, height) of an image with `rows` rows,
    /// or `None` if it doesn't fit in `u32`
    pub fn required_size(&self, rows: u32) -> Option<(u32, u32)> {
        let last_row = rows.saturating_sub(1);
        let last_column = self.columns.saturating_sub(1);
        let width = last_column.checked_mul(self.column_pitch)?
            .checked_add(self.origin_x)?
            .checked_add(self.cell_width)?;
        let height = last_row.checked_mul(self.row_pitch)?
            .checked_add(self.origin_y)?
            .checked_add(self.cell_height)?;

        Some((width, height))
    }

    pub fn validate(&self, rows: u32) -> Result<(), Error> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "cell size must be positive, got {}x{}",
                self.cell_width,
                self.cell_height,
            )));
        }

        if self.column_pitch < self.cell_width || self.row_pitch < self.cell_height {
            return Err(Error::InvalidConfig(String::from("cells must not overlap")));
        }

        if self.required_size(rows).is_none() {
            return Err(Error::InvalidConfig(format!(
                "a grid of {rows}x{} cells is too large for a pixel coordinate",
                self.columns,
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub font: FontAttributes,
    pub grid: GridLayout,

    // the first component identifier, and the identifier of the first cell
    pub base_codepoint: u32,
    pub charset: Charset,
    pub output: String,

    // if set, each composed glyph is named after its syllable
    pub name_glyphs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            font: FontAttributes::default(),
            grid: GridLayout::default(),
            base_codepoint: DEFAULT_BASE_CODEPOINT,
            charset: Charset::default(),
            output: String::from(DEFAULT_OUTPUT_PATH),
            name_glyphs: true,
        }
    }
}

impl GeneratorConfig {
    /// defaults, overridden by the json file at `path`
    pub fn load_from_file(path: &str) -> Result<Self, Error> {
        let s = read_string(path)?;
        let partial = serde_json::from_str::<PartialGeneratorConfig>(&s).map_err(
            |error| Error::ConfigFile { path: path.to_string(), error }
        )?;
        let mut result = GeneratorConfig::default();
        partial.apply_to(&mut result);

        Ok(result)
    }
}

// This struct is used for loading partial configurations from a json file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialGeneratorConfig {
    pub font: Option<PartialFontAttributes>,
    pub grid: Option<PartialGridLayout>,
    pub base_codepoint: Option<u32>,
    pub charset: Option<Charset>,
    pub output: Option<String>,
    pub name_glyphs: Option<bool>,
}

impl PartialGeneratorConfig {
    pub fn apply_to(&self, config: &mut GeneratorConfig) {
        if let Some(font) = &self.font {
            font.apply_to(&mut config.font);
        }
        if let Some(grid) = &self.grid {
            grid.apply_to(&mut config.grid);
        }
        if let Some(base_codepoint) = self.base_codepoint {
            config.base_codepoint = base_codepoint;
        }
        if let Some(charset) = self.charset {
            config.charset = charset;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(name_glyphs) = self.name_glyphs {
            config.name_glyphs = name_glyphs;
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PartialFontAttributes {
    pub name: Option<String>,
    pub author: Option<String>,
    pub width_type: Option<String>,
    pub fixed_width: Option<u32>,
    pub space_width: Option<u32>,
    pub descent: Option<i32>,
    pub ascent: Option<i32>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub line_gap: Option<i32>,
    pub max_width: Option<u32>,
}

impl PartialFontAttributes {
    pub fn apply_to(&self, attr: &mut FontAttributes) {
        if let Some(name) = &self.name {
            attr.name = name.clone();
        }
        if let Some(author) = &self.author {
            attr.author = author.clone();
        }
        if let Some(width_type) = &self.width_type {
            attr.width_type = width_type.clone();
        }
        if let Some(fixed_width) = self.fixed_width {
            attr.fixed_width = fixed_width;
        }
        if let Some(space_width) = self.space_width {
            attr.space_width = space_width;
        }
        if let Some(descent) = self.descent {
            attr.descent = descent;
        }
        if let Some(ascent) = self.ascent {
            attr.ascent = ascent;
        }
        if let Some(offset_x) = self.offset_x {
            attr.offset_x = offset_x;
        }
        if let Some(offset_y) = self.offset_y {
            attr.offset_y = offset_y;
        }
        if let Some(line_gap) = self.line_gap {
            attr.line_gap = line_gap;
        }
        if let Some(max_width) = self.max_width {
            attr.max_width = max_width;
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialGridLayout {
    pub cell_width: Option<u32>,
    pub cell_height: Option<u32>,
    pub origin_x: Option<u32>,
    pub origin_y: Option<u32>,
    pub column_pitch: Option<u32>,
    pub row_pitch: Option<u32>,
    pub columns: Option<u32>,
}

impl PartialGridLayout {
    pub fn apply_to(&self, grid: &mut GridLayout) {
        if let Some(cell_width) = self.cell_width {
            grid.cell_width = cell_width;
        }
        if let Some(cell_height) = self.cell_height {
            grid.cell_height = cell_height;
        }
        if let Some(origin_x) = self.origin_x {
            grid.origin_x = origin_x;
        }
        if let Some(origin_y) = self.origin_y {
            grid.origin_y = origin_y;
        }
        if let Some(column_pitch) = self.column_pitch {
            grid.column_pitch = column_pitch;
        }
        if let Some(row_pitch) = self.row_pitch {
            grid.row_pitch = row_pitch;
        }
        if let Some(columns) = self.columns {
            grid.columns = columns;
        }
    }
}
