//! Month and weekday names for calendar rendering, keyed by locale.
//!
//! The tables are static and read-only. Statically known keys resolve
//! without failure; string keys from configuration or user input go through
//! [`LocaleCatalog::lookup`], which rejects anything outside the supported
//! set instead of substituting a default.
//!
//! ```
//! use calendar_locales::{DayStyle, LocaleCatalog, LocaleKey, Weekday};
//!
//! let ru = LocaleCatalog::get(LocaleKey::Ru);
//! assert_eq!(ru.weekday_name(Weekday::Saturday, DayStyle::Short), "Сб");
//!
//! assert!(LocaleCatalog::lookup("en-GB").is_err());
//! ```

mod catalog;
mod consts;
mod data;
mod locale;
mod names;
mod prelude;
mod types;

pub use catalog::LocaleCatalog;
pub use consts::*;
pub use locale::{DEFAULT_LOCALE, LocaleKey, LookupError, SUPPORTED_LOCALES};
pub use names::{DayNames, DayStyle, LocaleData, MonthNames, MonthStyle};
pub use types::{Month, UnitError, Weekday};
