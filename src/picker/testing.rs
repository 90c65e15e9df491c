//! Test doubles for the picker core

use super::surface::{CalendarSurface, Intent};
use super::types::{DateRange, DisplayPeriod, Selection};

/// One call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Period(DisplayPeriod, Selection),
    Selection(Selection),
    Ended(DateRange),
}

/// Surface that records every call and passes intents straight through
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl CalendarSurface for RecordingSurface {
    type Input = Intent;

    fn render_period(&mut self, period: DisplayPeriod, selection: &Selection) {
        self.calls.push(SurfaceCall::Period(period, *selection));
    }

    fn render_selection(&mut self, selection: &Selection) {
        self.calls.push(SurfaceCall::Selection(*selection));
    }

    fn selection_ended(&mut self, range: DateRange) {
        self.calls.push(SurfaceCall::Ended(range));
    }

    fn interpret(&mut self, input: Intent) -> Option<Intent> {
        Some(input)
    }
}
