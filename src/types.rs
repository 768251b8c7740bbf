use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MAX_MONTH, MAX_WEEKDAY_INDEX};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Error returned when a raw number does not name a calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnitError {
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", JANUARY, MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid weekday index: {} (must be 0-{})", "_0", MAX_WEEKDAY_INDEX)]
    InvalidWeekday(u8),
}

impl std::error::Error for UnitError {}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `UnitError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, UnitError> {
        let non_zero = NonZeroU8::new(value).ok_or(UnitError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(UnitError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8 (January is 1)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of this month in a name table
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - JANUARY) as usize
    }

    /// All twelve months, January first
    pub fn iter() -> impl Iterator<Item = Self> {
        (JANUARY..=DECEMBER).filter_map(NonZeroU8::new).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = UnitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. Weeks start on Sunday, so `Sunday` has index 0.
///
/// `Display` prints the English variant name for diagnostics; localized
/// names come from [`crate::LocaleData::weekday_name`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Every weekday in table order, Sunday first
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up a weekday by its zero-based index
    ///
    /// # Errors
    /// Returns `UnitError::InvalidWeekday` if the index is > `MAX_WEEKDAY_INDEX`.
    pub const fn from_index(index: u8) -> Result<Self, UnitError> {
        if index > MAX_WEEKDAY_INDEX {
            return Err(UnitError::InvalidWeekday(index));
        }
        Ok(Self::ALL[index as usize])
    }

    /// Zero-based position of this weekday in a name table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The following day, wrapping Saturday to Sunday
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % DAYS_IN_WEEK]
    }

    /// The preceding day, wrapping Sunday to Saturday
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + DAYS_IN_WEEK - 1) % DAYS_IN_WEEK]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = UnitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day as Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        assert!(Month::new(1).is_ok());
        assert!(Month::new(6).is_ok());
        assert!(Month::new(12).is_ok());
    }

    #[test]
    fn test_month_new_invalid() {
        assert_eq!(Month::new(0), Err(UnitError::InvalidMonth(0)));
        assert_eq!(Month::new(13), Err(UnitError::InvalidMonth(13)));
        assert_eq!(Month::new(255), Err(UnitError::InvalidMonth(255)));
    }

    #[test]
    fn test_month_index_is_zero_based() {
        assert_eq!(Month::new(1).unwrap().index(), 0);
        assert_eq!(Month::new(12).unwrap().index(), 11);
    }

    #[test]
    fn test_month_iter() {
        let months: Vec<u8> = Month::iter().map(Month::get).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(Weekday::from_index(0), Ok(Weekday::Sunday));
        assert_eq!(Weekday::from_index(1), Ok(Weekday::Monday));
        assert_eq!(Weekday::from_index(6), Ok(Weekday::Saturday));
        assert_eq!(Weekday::from_index(7), Err(UnitError::InvalidWeekday(7)));
    }

    #[test]
    fn test_weekday_all_matches_index() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i, "index mismatch for {day}");
        }
    }

    #[test]
    fn test_weekday_wrapping() {
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.prev(), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.next(), Weekday::Thursday);
        assert_eq!(Weekday::Wednesday.prev(), Weekday::Tuesday);
    }

    #[test]
    fn test_weekday_display_is_not_localized() {
        let ru = crate::LocaleKey::Ru.data();
        for day in Weekday::ALL {
            assert_ne!(day.to_string(), ru.weekday_name(day, crate::DayStyle::Full));
        }
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(8).unwrap().to_string(), "8");
        assert_eq!(Weekday::Friday.to_string(), "Friday");
        assert_eq!(
            UnitError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            UnitError::InvalidWeekday(9).to_string(),
            "Invalid weekday index: 9 (must be 0-6)"
        );
    }

    #[test]
    fn test_serde_validation() {
        let month: Month = serde_json::from_str("3").unwrap();
        assert_eq!(month.get(), 3);
        assert!(serde_json::from_str::<Month>("0").is_err());
        assert!(serde_json::from_str::<Month>("13").is_err());

        assert_eq!(serde_json::to_string(&Weekday::Tuesday).unwrap(), "2");
        let day: Weekday = serde_json::from_str("6").unwrap();
        assert_eq!(day, Weekday::Saturday);
        assert!(serde_json::from_str::<Weekday>("7").is_err());
    }
}
