//! Static country catalog keyed by ISO-3166 alpha-3 code.

mod table;

use serde::Serialize;
use std::sync::LazyLock;

/// Glyph shown when a code has no catalog entry.
pub const UNKNOWN_FLAG: &str = "\u{1F3F3}\u{FE0F}";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Country {
    /// ISO-3166 alpha-3 code, e.g. `PSE`.
    #[schema(example = "PSE")]
    pub code: &'static str,
    #[schema(example = "Palestine")]
    pub name: &'static str,
    /// Emoji flag built from the alpha-2 regional indicators.
    #[schema(example = "🇵🇸")]
    pub flag: String,
    /// Languages commonly spoken, most widely used first where known.
    #[schema(example = json!(["Arabic", "Hebrew"]))]
    pub languages: &'static [&'static str],
}

static CATALOG: LazyLock<Vec<Country>> = LazyLock::new(|| {
    let mut countries: Vec<Country> = table::COUNTRIES
        .iter()
        .map(|&(code, alpha2, name, languages)| Country {
            code,
            name,
            flag: flag_from_alpha2(alpha2),
            languages,
        })
        .collect();

    if !countries.iter().any(|c| c.code == "PSE") {
        countries.push(Country {
            code: "PSE",
            name: "Palestine",
            flag: flag_from_alpha2("PS"),
            languages: &["Arabic", "Hebrew"],
        });
    }

    countries.sort_by_key(|c| sort_key(c.name));
    countries
});

/// All countries, sorted by display name.
pub fn all() -> &'static [Country] {
    &CATALOG
}

pub fn find(code: &str) -> Option<&'static Country> {
    CATALOG.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}

/// Display name, or the code itself when unknown.
pub fn name_of(code: &str) -> &str {
    find(code).map(|c| c.name).unwrap_or(code)
}

pub fn flag_of(code: &str) -> &str {
    find(code).map(|c| c.flag.as_str()).unwrap_or(UNKNOWN_FLAG)
}

/// Normalizes user input to the canonical upper-case alpha-3 code.
pub fn canonical_code(code: &str) -> Option<&'static str> {
    find(code.trim()).map(|c| c.code)
}

fn flag_from_alpha2(alpha2: &str) -> String {
    alpha2
        .chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}

fn sort_key(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'Å' | 'Á' | 'À' | 'Â' | 'Ä' => 'a',
            'Ç' | 'ç' => 'c',
            'É' | 'é' | 'è' | 'ê' => 'e',
            'Í' | 'í' => 'i',
            'Ó' | 'ó' | 'ô' => 'o',
            'Ú' | 'ú' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
