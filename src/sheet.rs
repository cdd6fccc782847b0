use crate::config::GridLayout;
use crate::constant::{BACKGROUND, INK};
use crate::error::ImageLoadError;
use image::{DynamicImage, ImageFormat, RgbaImage};
use pfp_fs::read_bytes;
use pfp_hangul::JamoKind;
use regex::Regex;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ImageType {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageType::Png),
            "jpg" | "jpeg" => Some(ImageType::Jpeg),
            "gif" => Some(ImageType::Gif),
            "webp" => Some(ImageType::Webp),
            "bmp" => Some(ImageType::Bmp),
            _ => None,
        }
    }

    /// It returns `None` if the path has no extension or an unknown one.
    pub fn infer_from_path(path: &str) -> Option<Self> {
        let ext_re = Regex::new(r".+\.([^./\\]+)$").ok()?;
        let ext = ext_re.captures(path)?.get(1)?.as_str();

        ImageType::from_extension(ext)
    }
}

impl From<ImageType> for ImageFormat {
    fn from(image_type: ImageType) -> Self {
        match image_type {
            ImageType::Png => ImageFormat::Png,
            ImageType::Jpeg => ImageFormat::Jpeg,
            ImageType::Gif => ImageFormat::Gif,
            ImageType::Webp => ImageFormat::WebP,
            ImageType::Bmp => ImageFormat::Bmp,
        }
    }
}

/// A monochrome cell. `true` is ink.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, ink: bool) {
        self.pixels[y * self.width + x] = ink;
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|ink| !ink)
    }

    /// `["#..#....", ...]`, one string per row
    pub fn render(&self) -> Vec<String> {
        self.pixels.chunks(self.width.max(1)).take(self.height).map(
            |row| row.iter().map(|ink| if *ink { INK } else { BACKGROUND }).collect()
        ).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlyphCell {
    pub kind: JamoKind,

    /// shape class rank
    pub row: usize,

    /// 자모 index (columns beyond the alphabet are padding)
    pub column: usize,
    pub bitmap: Bitmap,
}

/// Every cell of the glyph sheet: 초성 rows, then 중성 rows, then 종성 rows,
/// each row from left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSheet {
    pub cells: Vec<GlyphCell>,
}

impl GlyphSheet {
    pub fn load(path: &str, layout: &GridLayout, rows_per_kind: usize) -> Result<Self, ImageLoadError> {
        let bytes = read_bytes(path)?;
        let image = match ImageType::infer_from_path(path) {
            Some(image_type) => image::load_from_memory_with_format(&bytes, image_type.into())?,
            None => image::load_from_memory(&bytes)?,
        };

        GlyphSheet::from_image(&image, layout, rows_per_kind)
    }

    pub fn from_image(image: &DynamicImage, layout: &GridLayout, rows_per_kind: usize) -> Result<Self, ImageLoadError> {
        GlyphSheet::from_rgba(&image.to_rgba8(), layout, rows_per_kind)
    }

    pub fn from_rgba(image: &RgbaImage, layout: &GridLayout, rows_per_kind: usize) -> Result<Self, ImageLoadError> {
        let rows = (rows_per_kind * JamoKind::ALL.len()) as u32;
        // no image is large enough for a grid that overflows
        let (required_width, required_height) = layout.required_size(rows).unwrap_or((u32::MAX, u32::MAX));

        if image.width() < required_width || image.height() < required_height {
            return Err(ImageLoadError::TooSmall {
                width: image.width(),
                height: image.height(),
                required_width,
                required_height,
            });
        }

        let mut cells = Vec::with_capacity(rows as usize * layout.columns as usize);

        for row in 0..rows {
            for column in 0..layout.columns {
                let (x0, y0) = layout.cell_origin(row, column);
                let mut bitmap = Bitmap::new(layout.cell_width as usize, layout.cell_height as usize);

                for y in 0..layout.cell_height {
                    for x in 0..layout.cell_width {
                        // anything but opaque white is ink
                        let ink = image.get_pixel(x0 + x, y0 + y).0 != [255, 255, 255, 255];
                        bitmap.set(x as usize, y as usize, ink);
                    }
                }

                cells.push(GlyphCell {
                    kind: JamoKind::from_ordinal(row as usize / rows_per_kind).unwrap_or(JamoKind::종성),
                    row: row as usize % rows_per_kind,
                    column: column as usize,
                    bitmap,
                });
            }
        }

        Ok(GlyphSheet { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
