//! Supported content languages and how a request's language is resolved.
//!
//! The public site prefixes its URLs with a language code (`/ar/tours/3`);
//! [`language_from_path`] mirrors that segment into the active language.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Languages tour content can be authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
    De,
    Es,
    Fr,
    It,
    Ru,
}

/// Language used when nothing else matches.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    pub const ALL: [Language; 7] = [
        Self::En,
        Self::Ar,
        Self::De,
        Self::Es,
        Self::Fr,
        Self::It,
        Self::Ru,
    ];

    /// Two-letter ISO 639-1 code.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Ru => "ru",
        }
    }

    /// Parse a language tag. Case-insensitive; region suffixes such as
    /// `en-US` or `pt_BR` are ignored.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Self::parse(code).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported language '{code}'. Must be one of: {}",
                Self::ALL.map(|l| l.as_code()).join(", ")
            ))
        })
    }

    fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::ALL
            .into_iter()
            .find(|l| l.as_code().eq_ignore_ascii_case(primary))
    }

    /// Whether the language is written right to left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// The first path segment that names a supported language.
///
/// Only exact two-letter segments count, so `/tours/en-route` does not
/// select English.
pub fn language_from_path(path: &str) -> Option<Language> {
    path.split('/')
        .filter(|s| s.len() == 2)
        .find_map(Language::parse)
}

/// The highest-weighted supported language in an `Accept-Language` header.
pub fn language_from_accept_header(header: &str) -> Option<Language> {
    let mut candidates: Vec<(Language, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let language = Language::parse(pieces.next()?)?;
            let weight = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            (weight > 0.0).then_some((language, weight))
        })
        .collect();
    // Stable sort keeps header order among equal weights.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.first().map(|(l, _)| *l)
}

/// Resolve the language for a request.
///
/// Precedence: explicit `?lang=` parameter, URL path segment,
/// `Accept-Language` header, then `fallback`. An explicit but unsupported
/// parameter is an error; everything else degrades silently.
pub fn resolve_language(
    query_lang: Option<&str>,
    path: &str,
    accept_language: Option<&str>,
    fallback: Language,
) -> Result<Language, CoreError> {
    if let Some(code) = query_lang {
        return Language::from_code(code);
    }
    Ok(language_from_path(path)
        .or_else(|| accept_language.and_then(language_from_accept_header))
        .unwrap_or(fallback))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
