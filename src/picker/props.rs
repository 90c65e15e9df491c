use chrono::NaiveDate;
use std::fmt;

use super::error::{PickerError, PickerResult};
use super::types::{DateBounds, DateRange, Selection, SelectionPayload};

/// Construction-time options of a [`Datepicker`](super::Datepicker)
///
/// Immutable once the picker is built. Callbacks default to no-ops.
pub struct Props {
    pub(crate) name: String,
    pub(crate) selected: Selection,
    pub(crate) months_shown: u8,
    pub(crate) bounds: DateBounds,
    pub(crate) anchor: Option<NaiveDate>,
    pub(crate) on_select: Box<dyn FnMut(SelectionPayload)>,
    pub(crate) on_selection_end: Box<dyn FnMut(DateRange)>,
}

impl Props {
    /// Props for a picker whose output is tagged with `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: Selection::None,
            months_shown: 1,
            bounds: DateBounds::unbounded(),
            anchor: None,
            on_select: Box::new(|_| {}),
            on_selection_end: Box::new(|_| {}),
        }
    }

    /// Initial selection; seeds the model without firing callbacks
    pub fn selected(mut self, selection: Selection) -> Self {
        self.selected = selection;
        self
    }

    /// Number of month pages shown side by side (1 or 2)
    pub fn months_shown(mut self, months: u8) -> PickerResult<Self> {
        if !(1..=2).contains(&months) {
            return Err(PickerError::InvalidMonthsShown(months));
        }
        self.months_shown = months;
        Ok(self)
    }

    /// Restrict which days can be picked
    pub fn bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Day whose month is shown when nothing is selected (defaults to today)
    pub fn anchor(mut self, day: NaiveDate) -> Self {
        self.anchor = Some(day);
        self
    }

    /// Called with `{ name: selection }` on every committed selection change
    pub fn on_select(mut self, callback: impl FnMut(SelectionPayload) + 'static) -> Self {
        self.on_select = Box::new(callback);
        self
    }

    /// Called once each time the user completes a range
    pub fn on_selection_end(mut self, callback: impl FnMut(DateRange) + 'static) -> Self {
        self.on_selection_end = Box::new(callback);
        self
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("name", &self.name)
            .field("selected", &self.selected)
            .field("months_shown", &self.months_shown)
            .field("bounds", &self.bounds)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}
