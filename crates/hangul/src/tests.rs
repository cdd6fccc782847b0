use crate::{
    AddressError,
    ComponentAddressor,
    JamoKind,
    PhoneticAlphabet,
    SYLLABLE_COUNT,
    ShapeClass,
    ShapeClassifier,
    TrailingShape,
    VowelShape,
    all_syllables,
    syllable_components,
    한글,
};
use std::collections::HashSet;

fn classifier() -> ShapeClassifier {
    ShapeClassifier::new(&PhoneticAlphabet::new()).unwrap()
}

fn addressor() -> ComponentAddressor {
    ComponentAddressor::new(0xE000, ShapeClass::COUNT, 30).unwrap()
}

#[test]
fn decompose_round_trip() {
    let mut count = 0;

    for c in 0xAC00..=0xD7A3 {
        let s = 한글::decompose(c);
        assert_eq!(s.compose(), c);
        assert_eq!(한글::new(s.초성, s.중성, s.종성), s);
        count += 1;
    }

    assert_eq!(count, SYLLABLE_COUNT);
    assert_eq!(all_syllables().count(), SYLLABLE_COUNT);
}

#[test]
fn decompose_samples() {
    let samples = [
        ('가', (0, 0, 0)),
        ('각', (0, 0, 1)),
        ('까', (1, 0, 0)),
        ('껠', (1, 5, 8)),
        ('겔', (0, 5, 8)),
        ('힣', (18, 20, 27)),
        ('뷁', (7, 15, 9)),
    ];

    for (c, (초성, 중성, 종성)) in samples.into_iter() {
        assert_eq!(한글::from_char(c), 한글 { 초성, 중성, 종성 });
        assert_eq!(한글 { 초성, 중성, 종성 }.to_char(), c);
    }
}

#[test]
fn decompose_out_of_range() {
    assert_eq!(한글::try_from_u32(0xABFF), None);
    assert_eq!(한글::try_from_u32(0xD7A4), None);
    assert_eq!(한글::try_from_u32('a' as u32), None);
    assert!(한글::try_from_u32(0xAC00).is_some());
}

#[test]
#[should_panic]
fn decompose_non_syllable() {
    한글::from_char('ㄱ');
}

#[test]
fn alphabet_lookup() {
    let alphabet = PhoneticAlphabet::new();

    assert_eq!(alphabet.len(JamoKind::초성), 19);
    assert_eq!(alphabet.len(JamoKind::중성), 21);
    assert_eq!(alphabet.len(JamoKind::종성), 28);

    assert_eq!(alphabet.index_of(JamoKind::초성, 'ㄱ'), Some(0));
    assert_eq!(alphabet.index_of(JamoKind::종성, 'ㄱ'), Some(1));
    assert_eq!(alphabet.index_of(JamoKind::초성, 'ㄳ'), None);
    assert_eq!(alphabet.index_of(JamoKind::중성, 'ㅣ'), Some(20));
    assert_eq!(alphabet.index_of(JamoKind::종성, 'ㅎ'), Some(27));

    assert_eq!(alphabet.symbol(JamoKind::종성, 0), None);
    assert_eq!(alphabet.symbol(JamoKind::종성, 8), Some('ㄹ'));
    assert_eq!(alphabet.symbol(JamoKind::초성, 19), None);

    for kind in JamoKind::ALL.into_iter() {
        for index in 0..alphabet.len(kind) {
            if let Some(symbol) = alphabet.symbol(kind, index) {
                assert_eq!(alphabet.index_of(kind, symbol), Some(index));
            }
        }
    }
}

#[test]
fn every_syllable_has_exactly_one_class() {
    let classifier = classifier();
    classifier.validate().unwrap();

    let histogram = classifier.full_histogram().unwrap();
    assert_eq!(histogram.len(), 27);
    assert_eq!(histogram.iter().sum::<usize>(), SYLLABLE_COUNT);

    // every class is used by at least one syllable
    for (rank, count) in histogram.iter().enumerate() {
        assert!(*count > 0, "{}", ShapeClass::from_rank(rank).unwrap().describe());
    }
}

#[test]
fn classify_samples() {
    let classifier = classifier();
    let samples = [
        ('가', VowelShape::Narrow, TrailingShape::Open),
        ('각', VowelShape::Narrow, TrailingShape::Closed),
        ('갈', VowelShape::Narrow, TrailingShape::WideClosed),
        ('까', VowelShape::TenseNarrow, TrailingShape::Open),
        ('찡', VowelShape::TenseNarrow, TrailingShape::Closed),
        ('개', VowelShape::Wide, TrailingShape::Open),
        ('겔', VowelShape::Wide, TrailingShape::WideClosed),
        ('껠', VowelShape::TenseWide, TrailingShape::WideClosed),
        ('고', VowelShape::Horizontal, TrailingShape::Open),
        ('꿈', VowelShape::Horizontal, TrailingShape::Closed),
        ('글', VowelShape::Horizontal, TrailingShape::WideClosed),
        ('과', VowelShape::Compound, TrailingShape::Open),
        ('긔', VowelShape::Compound, TrailingShape::Open),
        ('꽉', VowelShape::TenseCompound, TrailingShape::Closed),
        ('괘', VowelShape::CompoundWide, TrailingShape::Open),
        ('꿰', VowelShape::CompoundWide, TrailingShape::Open),
        ('궈', VowelShape::Rounded, TrailingShape::Open),
        ('귈', VowelShape::Rounded, TrailingShape::WideClosed),
        ('뷁', VowelShape::CompoundWide, TrailingShape::WideClosed),
    ];

    for (c, vowel, trailing) in samples.into_iter() {
        assert_eq!(
            classifier.classify(한글::from_char(c)).unwrap(),
            ShapeClass { vowel, trailing },
            "{c}",
        );
    }
}

#[test]
fn open_narrow_syllable() {
    let classifier = classifier();
    let class = classifier.classify(한글::from_char('가')).unwrap();

    assert_eq!(class.rank(), 0);
    assert_eq!(class.describe(), "open syllable, non-tense 초성, narrow 중성");

    let components = syllable_components(한글::from_char('가'), &classifier, &addressor()).unwrap();
    assert_eq!(components, vec![0xE000, 0xE000 + 27 * 30]);
}

#[test]
fn tense_초성_changes_종성_component() {
    let classifier = classifier();
    let addressor = addressor();
    let 껠 = 한글::from_char('껠');
    let 겔 = 한글::from_char('겔');

    assert_eq!(껠.종성, 겔.종성);
    assert_ne!(classifier.classify(껠).unwrap(), classifier.classify(겔).unwrap());

    let 껠_components = syllable_components(껠, &classifier, &addressor).unwrap();
    let 겔_components = syllable_components(겔, &classifier, &addressor).unwrap();

    assert_eq!(껠_components.len(), 3);
    assert_eq!(겔_components.len(), 3);
    assert_ne!(껠_components[2], 겔_components[2]);
    assert!(addressor.range(JamoKind::종성).contains(&껠_components[2]));
}

#[test]
fn ranks_are_stable() {
    let classifier = classifier();
    assert_eq!(classifier.class_count(), ShapeClass::COUNT);

    for rank in 0..ShapeClass::COUNT {
        let class = ShapeClass::from_rank(rank).unwrap();
        assert_eq!(class.rank(), rank);
        assert_eq!(classifier.class_at(rank), Some(class));
    }

    assert_eq!(ShapeClass::from_rank(ShapeClass::COUNT), None);
    assert_eq!(ShapeClass::all().count(), 27);
    assert_eq!(ShapeClass { vowel: VowelShape::Rounded, trailing: TrailingShape::WideClosed }.rank(), 26);
}

#[test]
fn address_is_injective() {
    let addressor = addressor();
    let mut ids = HashSet::new();

    for kind in JamoKind::ALL.into_iter() {
        for rank in 0..ShapeClass::COUNT {
            for index in 0..kind.alphabet_size() {
                let id = addressor.address(kind, rank, index);

                assert!(ids.insert(id), "duplicate id U+{id:04X}");
                assert!(addressor.range(kind).contains(&id));
                assert!((0xE000..=0xF8FF).contains(&id));
                assert_eq!(addressor.locate(id), Some((kind, rank, index)));
            }
        }
    }

    assert_eq!(ids.len(), 27 * (19 + 21 + 28));

    let 초성 = addressor.range(JamoKind::초성);
    let 중성 = addressor.range(JamoKind::중성);
    let 종성 = addressor.range(JamoKind::종성);
    assert_eq!(초성.end, 중성.start);
    assert_eq!(중성.end, 종성.start);
    assert_eq!(종성.end, 0xE000 + addressor.len() as u32);

    // padding columns and ids outside the space
    assert_eq!(addressor.locate(0xE000 + 19), None);
    assert_eq!(addressor.locate(0xDFFF), None);
    assert_eq!(addressor.locate(종성.end), None);
}

#[test]
fn addressor_errors() {
    assert_eq!(
        ComponentAddressor::new(0xE000, 27, 21),
        Err(AddressError::StrideTooSmall { stride: 21, kind: JamoKind::종성, alphabet_size: 28 }),
    );
    assert_eq!(ComponentAddressor::new(0xE000, 0, 30), Err(AddressError::NoShapeClasses));
    assert!(matches!(
        ComponentAddressor::new(0xF800, 27, 30),
        Err(AddressError::OutOfPrivateUseArea(0xF800, _)),
    ));
    assert!(matches!(
        ComponentAddressor::new(0xAC00, 27, 30),
        Err(AddressError::OutOfPrivateUseArea(..)),
    ));
    assert!(ComponentAddressor::new(0xE000, 27, 28).is_ok());
}
