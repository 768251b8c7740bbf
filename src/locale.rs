use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LocaleCatalog, LocaleData, REGION_SEPARATORS, prelude::*};

/// Locale used when a consumer does not ask for one.
pub const DEFAULT_LOCALE: LocaleKey = LocaleKey::En;

/// Every locale the catalog has data for, in declaration order.
pub const SUPPORTED_LOCALES: &[LocaleKey] = &LocaleKey::ALL;

/// Identifier of a locale the catalog has name data for.
///
/// The set is closed: a `LocaleKey` value always resolves to a table entry,
/// so [`LocaleCatalog::get`] cannot fail. String keys go through
/// [`FromStr`], which is where unsupported input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LocaleKey {
    /// English
    #[display(fmt = "en")]
    En,
    /// Russian
    #[display(fmt = "ru")]
    Ru,
}

/// Error returned when a locale key is not in the catalog.
///
/// Regional variants such as `en-GB` are rejected too; `base` records the
/// supported language they were derived from so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale key: {key:?}{}", regional_hint(.base.as_ref()))]
pub struct LookupError {
    key:  String,
    base: Option<LocaleKey>,
}

fn regional_hint(base: Option<&LocaleKey>) -> String {
    base.map_or_else(String::new, |base| {
        format!(" (regional variants are not mapped to '{base}')")
    })
}

impl LookupError {
    fn new(key: &str) -> Self {
        let base = key
            .split_once(REGION_SEPARATORS)
            .and_then(|(language, _)| LocaleKey::match_code(language));
        Self {
            key: key.to_owned(),
            base,
        }
    }

    /// The key that was requested
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Supported base language of a rejected regional variant, if any
    pub const fn base(&self) -> Option<LocaleKey> {
        self.base
    }
}

impl LocaleKey {
    /// Every key in declaration order
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    /// Canonical lowercase code (`"en"`, `"ru"`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Name of the language in that language, for locale pickers
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// Calendar names for this locale
    pub fn data(self) -> &'static LocaleData {
        LocaleCatalog::get(self)
    }

    fn match_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == code)
    }
}

impl Default for LocaleKey {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl FromStr for LocaleKey {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::match_code(s).ok_or_else(|| {
            let err = LookupError::new(s);
            tracing::debug!(key = s, base = ?err.base(), "rejected unsupported locale key");
            err
        })
    }
}

impl TryFrom<&str> for LocaleKey {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for LocaleKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LocaleKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
