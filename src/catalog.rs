//! Read-only catalog of calendar names keyed by locale.
//!
//! # Invariants
//!
//! 1. **Closed key set**: every [`LocaleKey`] has exactly one entry, enforced
//!    by an exhaustive match. Adding a key without data does not compile.
//!
//! 2. **Fixed lengths**: month tables hold 12 names and day tables 7, with
//!    index 0 meaning January and Sunday respectively in every form.
//!
//! 3. **Immutable**: all entries are `static`, so the catalog is shared by
//!    reference across threads without locking.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown key | String key outside the supported set | `LookupError` |
//! | Regional variant | `en-GB` and similar | `LookupError`, no fallback |

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::data;
use crate::locale::{DEFAULT_LOCALE, LocaleKey, LookupError, SUPPORTED_LOCALES};
use crate::names::LocaleData;

/// Handle to the process-wide locale table.
///
/// Zero-sized; all data is static. Serializes as a map from locale key to
/// name set, the shape date-formatting front ends consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleCatalog;

impl LocaleCatalog {
    /// Returns the name set for a statically known key
    pub fn get(key: LocaleKey) -> &'static LocaleData {
        match key {
            LocaleKey::En => &data::EN,
            LocaleKey::Ru => &data::RU,
        }
    }

    /// Returns the name set for a string key
    ///
    /// # Errors
    /// Returns `LookupError` if the key is not a supported locale. Regional
    /// variants are not mapped to their base language.
    pub fn lookup(key: &str) -> Result<&'static LocaleData, LookupError> {
        key.parse::<LocaleKey>().map(Self::get)
    }

    /// The key used when no locale is specified
    pub const fn default_locale() -> LocaleKey {
        DEFAULT_LOCALE
    }

    /// Every key the catalog has data for
    pub const fn supported_locales() -> &'static [LocaleKey] {
        SUPPORTED_LOCALES
    }

    /// Whether a string key resolves to an entry
    pub fn supports(key: &str) -> bool {
        key.parse::<LocaleKey>().is_ok()
    }

    /// All entries in declaration order
    pub fn iter() -> impl Iterator<Item = (LocaleKey, &'static LocaleData)> {
        SUPPORTED_LOCALES.iter().map(|&key| (key, Self::get(key)))
    }
}

impl Serialize for LocaleCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(SUPPORTED_LOCALES.len()))?;
        for (key, data) in Self::iter() {
            map.serialize_entry(&key, data)?;
        }
        map.end()
    }
}
