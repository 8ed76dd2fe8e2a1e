//! Language hint normalization.
//!
//! Callers pass language identifiers in whatever form their OCR setup uses:
//! BCP 47 tags (`en-US`, `pt-BR`), ISO 639-2 codes (`eng`, `deu`) or
//! Tesseract traineddata names (`chi_sim`). The recognition service wants
//! BCP 47 tags, and for a few base languages only the bare language code.

use isolang::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Base languages whose regional and script variants are reduced to the
/// bare language code.
pub const COLLAPSED_LANGUAGES: &[&str] = &["en", "zh", "fr", "pt", "es"];

/// ISO 639-2 bibliographic codes and their terminologic equivalents. The
/// registry only knows the terminologic form, which is also what ISO 639-3
/// uses.
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("mao", "mri"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("tib", "bod"),
    ("wel", "cym"),
];

/// Tesseract-only names that are not languages.
const NON_LANGUAGES: &[&str] = &["osd", "equ"];

/// Tesseract suffixes standing in for BCP 47 script subtags.
const TESSERACT_SCRIPTS: &[(&str, &str)] = &[("sim", "Hans"), ("tra", "Hant")];

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // language [-script] [-region] *(-variant)
        Regex::new(
            r"(?i)^([a-z]{2,3})(?:-([a-z]{4}))?(?:-([a-z]{2}|[0-9]{3}))?((?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*)$",
        )
        .expect("language tag pattern is valid")
    })
}

/// Normalize a list of language hints.
///
/// Entries that are not valid language tags are dropped. Duplicates after
/// normalization are removed, keeping the first occurrence. An empty result
/// means no hint should be sent.
///
/// # Example
///
/// ```
/// use vision_hocr::parser::normalize_languages;
///
/// let hints = normalize_languages(&["eng", "pt-BR", "deu", "not a tag", "en-GB"]);
/// assert_eq!(hints, ["en", "pt", "de"]);
/// ```
pub fn normalize_languages<S: AsRef<str>>(languages: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for language in languages {
        match normalize_language(language.as_ref()) {
            Some(tag) => {
                if !normalized.contains(&tag) {
                    normalized.push(tag);
                }
            }
            None => log::debug!("Dropping language hint {:?}", language.as_ref()),
        }
    }
    normalized
}

/// Normalize a single language hint, `None` if it is not a valid tag or its
/// language is not a registered ISO 639 language.
pub fn normalize_language(language: &str) -> Option<String> {
    let candidate = language.trim().replace('_', "-");
    if candidate.is_empty() {
        return None;
    }

    let candidate = expand_tesseract_script(&candidate);
    let caps = tag_pattern().captures(&candidate)?;

    let primary = caps.get(1)?.as_str().to_ascii_lowercase();
    if NON_LANGUAGES.contains(&primary.as_str()) {
        return None;
    }
    let primary = registered_code(&primary)?;

    if COLLAPSED_LANGUAGES.contains(&primary.as_str()) {
        return Some(primary);
    }

    let mut tag = primary;
    if let Some(script) = caps.get(2) {
        tag.push('-');
        tag.push_str(&title_case(script.as_str()));
    }
    if let Some(region) = caps.get(3) {
        tag.push('-');
        tag.push_str(&region.as_str().to_ascii_uppercase());
    }
    if let Some(variants) = caps.get(4) {
        tag.push_str(&variants.as_str().to_ascii_lowercase());
    }
    Some(tag)
}

/// `chi-sim` becomes `chi-Hans`; `jpn-vert` drops the layout suffix.
fn expand_tesseract_script(candidate: &str) -> String {
    let mut parts: Vec<&str> = candidate.split('-').collect();
    parts.retain(|p| !p.eq_ignore_ascii_case("vert"));
    parts
        .into_iter()
        .map(|part| {
            TESSERACT_SCRIPTS
                .iter()
                .find(|(suffix, _)| part.eq_ignore_ascii_case(suffix))
                .map(|(_, script)| *script)
                .unwrap_or(part)
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Look the primary subtag up in the ISO 639 registry and return its
/// shortest code: alpha-2 where one exists, otherwise the alpha-3 code.
fn registered_code(primary: &str) -> Option<String> {
    let language = match primary.len() {
        2 => Language::from_639_1(primary),
        3 => {
            let terminologic = BIBLIOGRAPHIC_CODES
                .iter()
                .find(|(bibliographic, _)| *bibliographic == primary)
                .map_or(primary, |(_, terminologic)| *terminologic);
            Language::from_639_3(terminologic)
        }
        _ => None,
    }?;
    Some(language.to_639_1().unwrap_or_else(|| language.to_639_3()).to_string())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_allow_listed_bases() {
        assert_eq!(normalize_language("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_language("pt_BR").as_deref(), Some("pt"));
        assert_eq!(normalize_language("zh-Hant-TW").as_deref(), Some("zh"));
        assert_eq!(normalize_language("es-419").as_deref(), Some("es"));
        assert_eq!(normalize_language("FR-ca").as_deref(), Some("fr"));
    }

    #[test]
    fn test_keeps_subtags_of_other_languages() {
        assert_eq!(normalize_language("de-CH").as_deref(), Some("de-CH"));
        assert_eq!(normalize_language("sr-latn-rs").as_deref(), Some("sr-Latn-RS"));
        assert_eq!(normalize_language("ja").as_deref(), Some("ja"));
    }

    #[test]
    fn test_maps_three_letter_codes() {
        assert_eq!(normalize_language("eng").as_deref(), Some("en"));
        assert_eq!(normalize_language("deu").as_deref(), Some("de"));
        assert_eq!(normalize_language("ger").as_deref(), Some("de"));
        assert_eq!(normalize_language("haw").as_deref(), Some("haw"));
    }

    #[test]
    fn test_tesseract_names() {
        assert_eq!(normalize_language("chi_sim").as_deref(), Some("zh"));
        assert_eq!(normalize_language("chi_tra_vert").as_deref(), Some("zh"));
        assert_eq!(normalize_language("jpn_vert").as_deref(), Some("ja"));
        assert_eq!(normalize_language("osd"), None);
    }

    #[test]
    fn test_drops_invalid_entries() {
        assert_eq!(normalize_language(""), None);
        assert_eq!(normalize_language("english please"), None);
        assert_eq!(normalize_language("e"), None);
        assert_eq!(normalize_language("en--US"), None);
        assert_eq!(normalize_language("12"), None);
    }

    #[test]
    fn test_drops_unregistered_languages() {
        assert_eq!(normalize_language("xx"), None);
        assert_eq!(normalize_language("qqq"), None);
        assert_eq!(normalize_language("zz-ZZ"), None);
        assert_eq!(normalize_language("xx-Latn"), None);

        assert_eq!(normalize_languages(&["xx", "eng"]), ["en"]);
    }

    #[test]
    fn test_bibliographic_codes() {
        assert_eq!(normalize_language("fre").as_deref(), Some("fr"));
        assert_eq!(normalize_language("dut").as_deref(), Some("nl"));
        assert_eq!(normalize_language("wel").as_deref(), Some("cy"));
        assert_eq!(normalize_language("may").as_deref(), Some("ms"));
    }

    #[test]
    fn test_normalize_list() {
        let hints = normalize_languages(&["eng", "en-GB", "???", "deu"]);
        assert_eq!(hints, ["en", "de"]);

        let none: Vec<String> = normalize_languages(&["", "!!"]);
        assert!(none.is_empty());

        let empty: [&str; 0] = [];
        assert!(normalize_languages(&empty).is_empty());
    }
}
