use crate::charset::Charset;
use crate::config::GeneratorConfig;
use crate::constant::PFP_VERSION;
use crate::document::{BaseGlyph, ComposedGlyph, GlyphRecord, PfpDocument};
use crate::error::Error;
use crate::sheet::GlyphSheet;
use pfp_fs::write_log;
use pfp_hangul::{
    ComponentAddressor,
    JamoKind,
    PhoneticAlphabet,
    ShapeClass,
    ShapeClassifier,
    syllable_components,
};

/// The read-only tables that turn syllables into component identifiers.
///
/// `Generator::new` validates the shape rules, so an instance never fails
/// to classify a syllable.
pub struct Generator {
    classifier: ShapeClassifier,
    addressor: ComponentAddressor,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, Error> {
        let alphabet = PhoneticAlphabet::new();
        let classifier = ShapeClassifier::new(&alphabet)?;
        classifier.validate()?;
        write_log("Generator::new", &format!("validated {} shape classes", classifier.class_count()));

        config.grid.validate((classifier.class_count() * JamoKind::ALL.len()) as u32)?;

        let addressor = ComponentAddressor::new(
            config.base_codepoint,
            classifier.class_count(),
            config.grid.columns as usize,
        )?;

        Ok(Generator { classifier, addressor })
    }

    pub fn classifier(&self) -> &ShapeClassifier {
        &self.classifier
    }

    pub fn addressor(&self) -> &ComponentAddressor {
        &self.addressor
    }

    /// number of sheet rows per 자모 kind
    pub fn rows_per_kind(&self) -> usize {
        self.classifier.class_count()
    }

    pub fn load_sheet(&self, path: &str, config: &GeneratorConfig) -> Result<GlyphSheet, Error> {
        let sheet = GlyphSheet::load(path, &config.grid, self.rows_per_kind())?;
        write_log("Generator::load_sheet", &format!("sliced {} cells from `{path}`", sheet.len()));

        Ok(sheet)
    }

    pub fn assemble(&self, sheet: &GlyphSheet, config: &GeneratorConfig) -> Result<PfpDocument, Error> {
        if sheet.len() != self.addressor.len() {
            return Err(Error::InvalidConfig(format!(
                "the glyph sheet has {} cells, but component identifiers need {}",
                sheet.len(),
                self.addressor.len(),
            )));
        }

        let mut glyphs = Vec::with_capacity(sheet.len() + config.charset.len());

        // The n-th cell gets `base + n`, which is what `ComponentAddressor::address`
        // returns for its (kind, row, column).
        for (offset, cell) in sheet.cells.iter().enumerate() {
            glyphs.push(GlyphRecord::Base(BaseGlyph {
                unicode: self.addressor.base() + offset as u32,
                data: cell.bitmap.render(),
            }));
        }

        for syllable in config.charset.syllables() {
            glyphs.push(GlyphRecord::Composed(ComposedGlyph {
                name: if config.name_glyphs { Some(syllable.to_char().to_string()) } else { None },
                unicode: syllable.compose(),
                components: syllable_components(syllable, &self.classifier, &self.addressor)?,
            }));
        }

        write_log(
            "Generator::assemble",
            &format!("{} base glyphs, {} composed glyphs", sheet.len(), glyphs.len() - sheet.len()),
        );

        Ok(PfpDocument {
            version: PFP_VERSION,
            attr: config.font.clone(),
            glyphs,
        })
    }

    /// (class, number of syllables) for every class, in rank order
    pub fn class_report(&self, charset: Charset) -> Result<Vec<(ShapeClass, usize)>, Error> {
        let histogram = self.classifier.class_histogram(charset.syllables())?;
        let mut result = Vec::with_capacity(histogram.len());

        for (rank, count) in histogram.into_iter().enumerate() {
            if let Some(class) = self.classifier.class_at(rank) {
                result.push((class, count));
            }
        }

        Ok(result)
    }
}
