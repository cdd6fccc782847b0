use crate::alphabet::{JamoKind, PhoneticAlphabet};
use crate::error::ClassificationError;
use crate::hangul::{
    all_syllables,
    종성_COUNT,
    중성_COUNT,
    초성_COUNT,
    한글,
};

/// How the 중성 is drawn, which also decides where the 초성 sits.
///
/// The ordinal is part of the published rank. Append new shapes, never reorder.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum VowelShape {
    /// 가 갸 거 겨 기
    Narrow,
    /// 까 꺄 꺼 껴 끼
    TenseNarrow,
    /// 개 걔 게 계
    Wide,
    /// 깨 꺠 께 꼐
    TenseWide,
    /// 고 교 구 규 그
    Horizontal,
    /// 과 괴 긔
    Compound,
    /// 꽈 꾀 끠
    TenseCompound,
    /// 괘 궤
    CompoundWide,
    /// 궈 귀
    Rounded,
}

impl VowelShape {
    pub const ALL: [VowelShape; 9] = [
        VowelShape::Narrow,
        VowelShape::TenseNarrow,
        VowelShape::Wide,
        VowelShape::TenseWide,
        VowelShape::Horizontal,
        VowelShape::Compound,
        VowelShape::TenseCompound,
        VowelShape::CompoundWide,
        VowelShape::Rounded,
    ];

    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn describe(&self) -> &'static str {
        match self {
            VowelShape::Narrow => "non-tense 초성, narrow 중성",
            VowelShape::TenseNarrow => "tense 초성, narrow 중성",
            VowelShape::Wide => "non-tense 초성, wide 중성",
            VowelShape::TenseWide => "tense 초성, wide 중성",
            VowelShape::Horizontal => "horizontal 중성",
            VowelShape::Compound => "non-tense 초성, compound 중성",
            VowelShape::TenseCompound => "tense 초성, compound 중성",
            VowelShape::CompoundWide => "wide compound 중성",
            VowelShape::Rounded => "rounded compound 중성",
        }
    }
}

/// How the 종성 is drawn, if there is one.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TrailingShape {
    /// no 종성
    Open,
    Closed,

    /// the 종성 is tall enough to push the rest of the syllable up
    WideClosed,
}

impl TrailingShape {
    pub const ALL: [TrailingShape; 3] = [
        TrailingShape::Open,
        TrailingShape::Closed,
        TrailingShape::WideClosed,
    ];

    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TrailingShape::Open => "open syllable",
            TrailingShape::Closed => "closed syllable",
            TrailingShape::WideClosed => "closed syllable with a wide 종성",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShapeClass {
    pub vowel: VowelShape,
    pub trailing: TrailingShape,
}

impl ShapeClass {
    pub const COUNT: usize = VowelShape::ALL.len() * TrailingShape::ALL.len();

    /// It's baked into every component identifier. Never change it once a font is published.
    pub fn rank(&self) -> usize {
        self.vowel.ordinal() * TrailingShape::ALL.len() + self.trailing.ordinal()
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        let vowel = *VowelShape::ALL.get(rank / TrailingShape::ALL.len())?;
        let trailing = TrailingShape::ALL[rank % TrailingShape::ALL.len()];

        Some(ShapeClass { vowel, trailing })
    }

    pub fn all() -> impl Iterator<Item = ShapeClass> {
        (0..ShapeClass::COUNT).filter_map(ShapeClass::from_rank)
    }

    pub fn describe(&self) -> String {
        format!("{}, {}", self.trailing.describe(), self.vowel.describe())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LeadingFilter {
    Any,
    Plain,
    Tense,
}

const TENSE_초성S: [char; 5] = ['ㄲ', 'ㄸ', 'ㅃ', 'ㅆ', 'ㅉ'];

const WIDE_종성S: [char; 14] = [
    'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅂ', 'ㅄ', 'ㅆ', 'ㅈ', 'ㅊ', 'ㅌ',
];

// Must be in the same order as `VowelShape::ALL`.
const VOWEL_RULES: [(VowelShape, LeadingFilter, &[char]); 9] = [
    (VowelShape::Narrow, LeadingFilter::Plain, &['ㅏ', 'ㅑ', 'ㅓ', 'ㅕ', 'ㅣ']),
    (VowelShape::TenseNarrow, LeadingFilter::Tense, &['ㅏ', 'ㅑ', 'ㅓ', 'ㅕ', 'ㅣ']),
    (VowelShape::Wide, LeadingFilter::Plain, &['ㅐ', 'ㅒ', 'ㅔ', 'ㅖ']),
    (VowelShape::TenseWide, LeadingFilter::Tense, &['ㅐ', 'ㅒ', 'ㅔ', 'ㅖ']),
    (VowelShape::Horizontal, LeadingFilter::Any, &['ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ']),
    (VowelShape::Compound, LeadingFilter::Plain, &['ㅘ', 'ㅚ', 'ㅢ']),
    (VowelShape::TenseCompound, LeadingFilter::Tense, &['ㅘ', 'ㅚ', 'ㅢ']),
    (VowelShape::CompoundWide, LeadingFilter::Any, &['ㅙ', 'ㅞ']),
    (VowelShape::Rounded, LeadingFilter::Any, &['ㅝ', 'ㅟ']),
];

/// A set of 자모 indices of one kind. Every alphabet has fewer than 32 entries.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct JamoSet(u32);

impl JamoSet {
    fn resolve(
        alphabet: &PhoneticAlphabet,
        kind: JamoKind,
        symbols: &[char],
    ) -> Result<Self, ClassificationError> {
        let mut bits = 0;

        for symbol in symbols.iter() {
            match alphabet.index_of(kind, *symbol) {
                Some(index) => { bits |= 1 << index; },
                None => {
                    return Err(ClassificationError::UnknownSymbol { kind, symbol: *symbol });
                },
            }
        }

        Ok(JamoSet(bits))
    }

    fn contains(&self, index: usize) -> bool {
        index < 32 && self.0 & (1 << index) != 0
    }
}

struct ShapeRule {
    class: ShapeClass,
    leading: LeadingFilter,
    vowels: JamoSet,
}

impl ShapeRule {
    fn matches(&self, s: &한글, tense_초성s: &JamoSet, wide_종성s: &JamoSet) -> bool {
        let leading = match self.leading {
            LeadingFilter::Any => true,
            LeadingFilter::Plain => !tense_초성s.contains(s.초성),
            LeadingFilter::Tense => tense_초성s.contains(s.초성),
        };
        let trailing = match self.class.trailing {
            TrailingShape::Open => s.종성 == 0,
            TrailingShape::Closed => s.종성 != 0 && !wide_종성s.contains(s.종성),
            TrailingShape::WideClosed => s.종성 != 0 && wide_종성s.contains(s.종성),
        };

        leading && self.vowels.contains(s.중성) && trailing
    }
}

/// Maps every syllable to exactly one `ShapeClass`.
///
/// Rules are stored in rank order. `classify` evaluates all of them, so a
/// broken rule table is reported instead of silently picking the first match.
pub struct ShapeClassifier {
    rules: Vec<ShapeRule>,
    tense_초성s: JamoSet,
    wide_종성s: JamoSet,
}

impl ShapeClassifier {
    pub fn new(alphabet: &PhoneticAlphabet) -> Result<Self, ClassificationError> {
        let tense_초성s = JamoSet::resolve(alphabet, JamoKind::초성, &TENSE_초성S)?;
        let wide_종성s = JamoSet::resolve(alphabet, JamoKind::종성, &WIDE_종성S)?;
        let mut rules = Vec::with_capacity(ShapeClass::COUNT);

        for (vowel, leading, vowels) in VOWEL_RULES.iter() {
            let vowels = JamoSet::resolve(alphabet, JamoKind::중성, vowels)?;

            for trailing in TrailingShape::ALL.iter() {
                rules.push(ShapeRule {
                    class: ShapeClass { vowel: *vowel, trailing: *trailing },
                    leading: *leading,
                    vowels,
                });
            }
        }

        debug_assert!(rules.iter().enumerate().all(|(rank, rule)| rule.class.rank() == rank));

        Ok(ShapeClassifier {
            rules,
            tense_초성s,
            wide_종성s,
        })
    }

    pub fn class_count(&self) -> usize {
        self.rules.len()
    }

    pub fn class_at(&self, rank: usize) -> Option<ShapeClass> {
        self.rules.get(rank).map(|rule| rule.class)
    }

    pub fn classify(&self, s: 한글) -> Result<ShapeClass, ClassificationError> {
        let mut matched = vec![];

        for (rank, rule) in self.rules.iter().enumerate() {
            if rule.matches(&s, &self.tense_초성s, &self.wide_종성s) {
                matched.push(rank);
            }
        }

        match matched.len() {
            0 => Err(ClassificationError::NoMatch(s)),
            1 => Ok(self.rules[matched[0]].class),
            _ => Err(ClassificationError::MultipleMatches(s, matched)),
        }
    }

    /// Checks that every (초성, 중성, 종성) triple matches exactly one rule.
    /// Every triple is a real syllable, so this covers the whole syllable block.
    pub fn validate(&self) -> Result<(), ClassificationError> {
        for 초성 in 0..초성_COUNT {
            for 중성 in 0..중성_COUNT {
                for 종성 in 0..종성_COUNT {
                    self.classify(한글 { 초성, 중성, 종성 })?;
                }
            }
        }

        Ok(())
    }

    /// number of syllables in each class, indexed by rank
    pub fn class_histogram<I: IntoIterator<Item = 한글>>(&self, syllables: I) -> Result<Vec<usize>, ClassificationError> {
        let mut result = vec![0; self.class_count()];

        for s in syllables {
            result[self.classify(s)?.rank()] += 1;
        }

        Ok(result)
    }

    pub fn full_histogram(&self) -> Result<Vec<usize>, ClassificationError> {
        self.class_histogram(all_syllables())
    }
}
