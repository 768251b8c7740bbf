/// Number of months in a calendar year
pub const MONTHS_IN_YEAR: usize = 12;

/// Number of days in a week
pub const DAYS_IN_WEEK: usize = 7;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Highest weekday index (Saturday, weeks start on Sunday)
pub const MAX_WEEKDAY_INDEX: u8 = 6;

/// Separators that introduce a region or script subtag (`en-GB`, `ru_RU`)
pub const REGION_SEPARATORS: [char; 2] = ['-', '_'];
