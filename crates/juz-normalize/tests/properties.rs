//! Property tests for surah name normalization and verse parsing.

use juz_model::VerseReference;
use juz_normalize::{SurahCatalog, SurahLookup, normalize, parse_ayah_text, parse_ayahs};
use proptest::prelude::*;

/// Characters normalization is expected to discard.
const NOISE: &[char] = &[
    ' ', '\t', '\u{0640}', '\u{064B}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}',
    '\u{0652}', '\u{0670}',
];

fn noisy(name: &str, noise: &[(usize, usize)]) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::new();
    for (position, c) in chars.iter().enumerate() {
        for &(at, which) in noise {
            if at % (chars.len() + 1) == position {
                out.push(NOISE[which % NOISE.len()]);
            }
        }
        out.push(*c);
    }
    out
}

#[test]
fn every_canonical_name_resolves_to_its_number() {
    let catalog = SurahCatalog::canonical();
    let lookup = SurahLookup::new(&catalog);
    for (number, name) in catalog.iter() {
        assert_eq!(lookup.lookup(name), Some(number), "{name}");
    }
}

#[test]
fn spec_examples_for_verse_references() {
    assert_eq!(parse_ayahs(&VerseReference::Integer(84)).unwrap(), vec![84]);
    assert_eq!(
        parse_ayahs(&VerseReference::IntegerList(vec![1, 2, 3])).unwrap(),
        vec![1, 2, 3]
    );
    assert_eq!(parse_ayah_text("84-85").unwrap(), vec![84, 85]);
    assert_eq!(parse_ayah_text("84–85").unwrap(), vec![84, 85]);
    assert_eq!(parse_ayah_text("84—85").unwrap(), vec![84, 85]);
    assert_eq!(parse_ayah_text("85-84").unwrap(), vec![85, 84]);
    assert_eq!(parse_ayah_text("12").unwrap(), vec![12]);
    assert!(parse_ayah_text("").unwrap().is_empty());
    assert!(parse_ayah_text("no digits here").unwrap().is_empty());
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,24}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn lookup_survives_noise(
        index in 0usize..SurahCatalog::SIZE,
        noise in prop::collection::vec((0usize..32, 0usize..16), 0..6),
    ) {
        let catalog = SurahCatalog::canonical();
        let lookup = SurahLookup::new(&catalog);
        let number = u16::try_from(index + 1).unwrap();
        let name = catalog.name(number).unwrap();
        prop_assert_eq!(lookup.lookup(&noisy(name, &noise)), Some(number));
    }

    #[test]
    fn increasing_ranges_expand_inclusively(start in 1u32..300, len in 0u32..40) {
        let end = start + len;
        let parsed = parse_ayah_text(&format!("{start}-{end}")).unwrap();
        prop_assert_eq!(parsed, (start..=end).collect::<Vec<_>>());
    }

    #[test]
    fn dashless_lists_keep_order(numbers in prop::collection::vec(0u32..1000, 1..8)) {
        let text = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        prop_assert_eq!(parse_ayah_text(&text).unwrap(), numbers);
    }
}
