//! Language catalog: Single source of truth for all selectable languages.
//!
//! The catalog is built once on first access with `OnceLock` and is immutable
//! thereafter. Entry order is display order for both selectors.

use std::sync::OnceLock;

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Region-tagged language code (e.g., "en-GB", "hi-IN")
    pub code: &'static str,

    /// Human-readable name shown in the selectors (e.g., "English", "Hindi")
    pub name: &'static str,
}

/// Global language catalog singleton.
///
/// Contains every language the widget offers, in insertion order. There is no
/// mutation API.
#[derive(Debug)]
pub struct LanguageCatalog {
    languages: Vec<LanguageEntry>,
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the global language catalog instance.
    ///
    /// The catalog is initialized on the first call; later calls return the
    /// same instance.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog {
            languages: default_languages(),
        })
    }

    /// Get a catalog entry by its code.
    ///
    /// # Arguments
    /// * `code` - Region-tagged language code (e.g., "en-GB")
    ///
    /// # Returns
    /// * `Some(&LanguageEntry)` if the code is in the catalog
    /// * `None` otherwise (lookup is case-sensitive)
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a language code is in the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Iterate over all entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.languages.iter()
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Default catalog contents.
///
/// Codes follow the region-tagged form accepted by the translation endpoint's
/// `langpair` parameter.
fn default_languages() -> Vec<LanguageEntry> {
    const LANGUAGES: &[(&str, &str)] = &[
        ("am-ET", "Amharic"),
        ("ar-SA", "Arabic"),
        ("be-BY", "Belarusian"),
        ("bg-BG", "Bulgarian"),
        ("bn-IN", "Bengali"),
        ("cs-CZ", "Czech"),
        ("da-DK", "Danish"),
        ("de-DE", "German"),
        ("el-GR", "Greek"),
        ("en-GB", "English"),
        ("es-ES", "Spanish"),
        ("et-EE", "Estonian"),
        ("fa-IR", "Persian"),
        ("fi-FI", "Finnish"),
        ("fr-FR", "French"),
        ("gu-IN", "Gujarati"),
        ("he-IL", "Hebrew"),
        ("hi-IN", "Hindi"),
        ("hr-HR", "Croatian"),
        ("hu-HU", "Hungarian"),
        ("hy-AM", "Armenian"),
        ("id-ID", "Indonesian"),
        ("it-IT", "Italian"),
        ("ja-JP", "Japanese"),
        ("kn-IN", "Kannada"),
        ("ko-KR", "Korean"),
        ("lt-LT", "Lithuanian"),
        ("lv-LV", "Latvian"),
        ("ml-IN", "Malayalam"),
        ("mr-IN", "Marathi"),
        ("ne-NP", "Nepali"),
        ("nl-NL", "Dutch"),
        ("no-NO", "Norwegian"),
        ("pa-IN", "Punjabi"),
        ("pl-PL", "Polish"),
        ("pt-PT", "Portuguese"),
        ("ro-RO", "Romanian"),
        ("ru-RU", "Russian"),
        ("sk-SK", "Slovak"),
        ("sv-SE", "Swedish"),
        ("sw-SZ", "Swahili"),
        ("ta-LK", "Tamil"),
        ("te-IN", "Telugu"),
        ("th-TH", "Thai"),
        ("tr-TR", "Turkish"),
        ("uk-UA", "Ukrainian"),
        ("ur-PK", "Urdu"),
        ("vi-VN", "Vietnamese"),
        ("zh-CN", "Chinese"),
    ];

    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageEntry { code, name })
        .collect()
}
