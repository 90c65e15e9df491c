//! Value types shared by the picker model, controller and surfaces
//!
//! All of these are plain `Copy` data. Invariants (ordered ranges, valid months)
//! are enforced by the constructors so the rest of the crate can rely on them.

use chrono::{Datelike, NaiveDate};
use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::{PickerError, PickerResult};

/// Canonical textual date format used for parsing and serialization
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the two endpoints of a textual range
const RANGE_SEPARATOR: &str = "..";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> PickerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| PickerError::InvalidDate(s.to_string()))
}

/// An ordered pair of calendar dates, `start <= end`
///
/// The only way to build one is [`DateRange::new`], which reorders its
/// arguments, so an inverted range cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two endpoints given in any order
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A range covering exactly one day
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Number of days in the range, endpoints included
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate over every day of the range in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(DATE_FORMAT),
            RANGE_SEPARATOR,
            self.end.format(DATE_FORMAT)
        )
    }
}

impl FromStr for DateRange {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| PickerError::InvalidRange(s.to_string()))?;
        let a = parse_date(a).map_err(|_| PickerError::InvalidRange(s.to_string()))?;
        let b = parse_date(b).map_err(|_| PickerError::InvalidRange(s.to_string()))?;
        Ok(Self::new(a, b))
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DateRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

/// Selection state of the picker
///
/// `PartialStart` is the transient state between the first and second day
/// pick of an interactive range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    PartialStart(NaiveDate),
    Range(DateRange),
}

impl Selection {
    /// Convenience constructor for a completed range (endpoints in any order)
    pub fn range(a: NaiveDate, b: NaiveDate) -> Self {
        Self::Range(DateRange::new(a, b))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Endpoint dates present in this selection, earliest first
    pub fn endpoints(&self) -> Vec<NaiveDate> {
        match self {
            Self::None => Vec::new(),
            Self::PartialStart(day) => vec![*day],
            Self::Range(range) => vec![range.start(), range.end()],
        }
    }

    /// Clamp every endpoint into `bounds`, keeping endpoints ordered
    pub fn clamped(&self, bounds: &DateBounds) -> Self {
        match self {
            Self::None => Self::None,
            Self::PartialStart(day) => Self::PartialStart(bounds.clamp(*day)),
            Self::Range(range) => {
                Self::range(bounds.clamp(range.start()), bounds.clamp(range.end()))
            }
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::PartialStart(day) => write!(f, "{}{}", day.format(DATE_FORMAT), RANGE_SEPARATOR),
            Self::Range(range) => write!(f, "{}", range),
        }
    }
}

impl FromStr for Selection {
    type Err = PickerError;

    /// Accepts `none`, `YYYY-MM-DD..` (partial) and `YYYY-MM-DD..YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        if let Some(start) = s.strip_suffix(RANGE_SEPARATOR) {
            let day = parse_date(start).map_err(|_| PickerError::InvalidRange(s.to_string()))?;
            return Ok(Self::PartialStart(day));
        }
        s.parse::<DateRange>().map(Self::Range)
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::PartialStart(day) => {
                let mut s = serializer.serialize_struct("Selection", 2)?;
                s.serialize_field("start", day)?;
                s.serialize_field("end", &Option::<NaiveDate>::None)?;
                s.end()
            }
            Self::Range(range) => range.serialize(serializer),
        }
    }
}

/// The month page shown first by a surface
///
/// Two-page surfaces show this month and the following one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayPeriod {
    year: i32,
    month: u32,
}

impl DisplayPeriod {
    pub fn new(year: i32, month: u32) -> PickerResult<Self> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(PickerError::InvalidPeriod(format!("{}-{}", year, month)))
        }
    }

    /// The period containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Move by `months` pages (negative goes back)
    pub fn offset(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Signed distance in months from `self` to `other`
    pub fn months_until(&self, other: Self) -> i64 {
        other.index() - self.index()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    /// Whether `date` falls on one of the `pages` months starting here
    pub fn contains(&self, date: NaiveDate, pages: u8) -> bool {
        let distance = self.months_until(Self::of(date));
        distance >= 0 && distance < i64::from(pages)
    }

    /// The `pages` consecutive periods starting at this one
    pub fn pages(&self, pages: u8) -> impl Iterator<Item = DisplayPeriod> {
        let first = *self;
        (0..i64::from(pages)).map(move |i| first.offset(i))
    }
}

impl fmt::Display for DisplayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for DisplayPeriod {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PickerError::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Optional window of selectable days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    earliest: Option<NaiveDate>,
    latest: Option<NaiveDate>,
}

impl DateBounds {
    /// Bounds in any order; inverted bounds are swapped
    pub fn new(earliest: Option<NaiveDate>, latest: Option<NaiveDate>) -> Self {
        match (earliest, latest) {
            (Some(a), Some(b)) if a > b => Self {
                earliest: Some(b),
                latest: Some(a),
            },
            _ => Self { earliest, latest },
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn earliest(&self) -> Option<NaiveDate> {
        self.earliest
    }

    pub fn latest(&self) -> Option<NaiveDate> {
        self.latest
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.earliest.map_or(true, |e| day >= e) && self.latest.map_or(true, |l| day <= l)
    }

    /// Pull `day` into the window
    pub fn clamp(&self, day: NaiveDate) -> NaiveDate {
        let day = self.earliest.map_or(day, |e| day.max(e));
        self.latest.map_or(day, |l| day.min(l))
    }
}

/// Selection tagged with the picker's name, as handed to `on_select`
///
/// Serializes as a single-key object so a host form can merge the output of
/// several named pickers without collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPayload {
    pub name: String,
    pub selection: Selection,
}

impl SelectionPayload {
    pub fn new(name: impl Into<String>, selection: Selection) -> Self {
        Self {
            name: name.into(),
            selection,
        }
    }
}

impl Serialize for SelectionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.selection)?;
        map.end()
    }
}
