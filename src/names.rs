//! Calendar name sets and the styles used to pick from them.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, MONTHS_IN_YEAR};
use crate::prelude::*;
use crate::types::{Month, Weekday};

/// Month names for one locale. Index 0 is January in both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthNames {
    /// Complete month names
    pub full:  [&'static str; MONTHS_IN_YEAR],
    /// Abbreviated month names
    pub short: [&'static str; MONTHS_IN_YEAR],
}

/// Weekday names for one locale. Index 0 is Sunday in every form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayNames {
    /// Complete weekday names
    pub full:    [&'static str; DAYS_IN_WEEK],
    /// Abbreviated weekday names
    pub short:   [&'static str; DAYS_IN_WEEK],
    /// One or two character forms, as used in calendar grid headers
    pub minimal: [&'static str; DAYS_IN_WEEK],
}

/// The full calendar name set for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleData {
    /// Month names in every form
    pub months: MonthNames,
    /// Weekday names in every form
    pub days:   DayNames,
}

/// Which month name form to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    #[default]
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "short")]
    Short,
}

/// Which weekday name form to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStyle {
    #[default]
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "short")]
    Short,
    #[display(fmt = "minimal")]
    Minimal,
}

impl MonthNames {
    /// All twelve names in the requested form
    pub const fn by_style(&self, style: MonthStyle) -> &[&'static str; MONTHS_IN_YEAR] {
        match style {
            MonthStyle::Full => &self.full,
            MonthStyle::Short => &self.short,
        }
    }
}

impl DayNames {
    /// All seven names in the requested form
    pub const fn by_style(&self, style: DayStyle) -> &[&'static str; DAYS_IN_WEEK] {
        match style {
            DayStyle::Full => &self.full,
            DayStyle::Short => &self.short,
            DayStyle::Minimal => &self.minimal,
        }
    }
}

impl LocaleData {
    /// Name of `month` in the requested form
    pub const fn month_name(&self, month: Month, style: MonthStyle) -> &'static str {
        self.months.by_style(style)[month.index()]
    }

    /// Name of `day` in the requested form
    pub const fn weekday_name(&self, day: Weekday, style: DayStyle) -> &'static str {
        self.days.by_style(style)[day.index()]
    }
}
