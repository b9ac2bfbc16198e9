//! Canonical surah catalog and name lookup.

use std::collections::HashMap;

use crate::arabic::{NormalizedName, normalize};

/// Arabic surah names in canonical order; position + 1 is the surah number.
const SURAH_NAMES: [&str; 114] = [
    "الفاتحة", "البقرة", "آل عمران", "النساء", "المائدة", "الأنعام",
    "الأعراف", "الأنفال", "التوبة", "يونس", "هود", "يوسف",
    "الرعد", "إبراهيم", "الحجر", "النحل", "الإسراء", "الكهف",
    "مريم", "طه", "الأنبياء", "الحج", "المؤمنون", "النور",
    "الفرقان", "الشعراء", "النمل", "القصص", "العنكبوت", "الروم",
    "لقمان", "السجدة", "الأحزاب", "سبأ", "فاطر", "يس",
    "الصافات", "ص", "الزمر", "غافر", "فصلت", "الشورى",
    "الزخرف", "الدخان", "الجاثية", "الأحقاف", "محمد", "الفتح",
    "الحجرات", "ق", "الذاريات", "الطور", "النجم", "القمر",
    "الرحمن", "الواقعة", "الحديد", "المجادلة", "الحشر", "الممتحنة",
    "الصف", "الجمعة", "المنافقون", "التغابن", "الطلاق", "التحريم",
    "الملك", "القلم", "الحاقة", "المعارج", "نوح", "الجن",
    "المزمل", "المدثر", "القيامة", "الإنسان", "المرسلات", "النبأ",
    "النازعات", "عبس", "التكوير", "الانفطار", "المطففين", "الانشقاق",
    "البروج", "الطارق", "الأعلى", "الغاشية", "الفجر", "البلد",
    "الشمس", "الليل", "الضحى", "الشرح", "التين", "العلق",
    "القدر", "البينة", "الزلزلة", "العاديات", "القارعة", "التكاثر",
    "العصر", "الهمزة", "الفيل", "قريش", "الماعون", "الكوثر",
    "الكافرون", "النصر", "المسد", "الإخلاص", "الفلق", "الناس",
];

/// The immutable, ordered list of canonical surah names.
#[derive(Debug, Clone, Copy)]
pub struct SurahCatalog {
    names: &'static [&'static str],
}

impl SurahCatalog {
    /// Number of surahs in the canonical catalog.
    pub const SIZE: usize = SURAH_NAMES.len();

    pub fn canonical() -> Self {
        Self {
            names: &SURAH_NAMES,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Canonical name for a 1-based surah number.
    pub fn name(&self, number: u16) -> Option<&'static str> {
        let index = usize::from(number).checked_sub(1)?;
        self.names.get(index).copied()
    }

    /// Iterates `(number, name)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        (1u16..).zip(self.names.iter().copied())
    }
}

impl Default for SurahCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Normalized name to surah number, built once from a catalog.
#[derive(Debug, Clone)]
pub struct SurahLookup {
    by_name: HashMap<NormalizedName, u16>,
}

impl SurahLookup {
    pub fn new(catalog: &SurahCatalog) -> Self {
        let mut by_name = HashMap::with_capacity(catalog.len());
        for (number, name) in catalog.iter() {
            by_name.entry(normalize(name)).or_insert(number);
        }
        Self { by_name }
    }

    /// Lookup over the canonical 114-name catalog.
    pub fn canonical() -> Self {
        Self::new(&SurahCatalog::canonical())
    }

    /// Resolve a raw surah name to its number.
    ///
    /// Returns `None` when no canonical name normalizes to the same key.
    pub fn lookup(&self, raw: &str) -> Option<u16> {
        self.by_name.get(&normalize(raw)).copied()
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
