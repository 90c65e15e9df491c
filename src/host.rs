//! Host side of the picker: options shared by the commands and a log of the
//! callbacks the picker fired.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::PickerConfig;
use crate::picker::{DateBounds, DateRange, Datepicker, PickerResult, Props, Selection, SelectionPayload};
use crate::tui::surface::{SurfaceOptions, TuiSurface};

/// A callback invocation, as seen by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Select { payload: SelectionPayload },
    SelectionEnd { range: DateRange },
}

/// Shared, append-only record of callbacks
pub type HostLog = Rc<RefCell<Vec<HostEvent>>>;

pub fn new_log() -> HostLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Everything needed to build a picker outside of tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub name: String,
    pub selected: Selection,
    /// Fallback month when there is no selection; today when unset
    pub anchor: Option<NaiveDate>,
    pub months_shown: u8,
    pub bounds: DateBounds,
    pub surface: SurfaceOptions,
    pub date_format: String,
}

impl PickerOptions {
    /// Defaults taken from the `[picker]` config section
    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            name: config.name.clone(),
            selected: Selection::None,
            anchor: None,
            months_shown: config.months_shown,
            bounds: DateBounds::unbounded(),
            surface: SurfaceOptions::from(config),
            date_format: config.date_format.clone(),
        }
    }

    /// Props whose callbacks append to `log`
    pub fn props(&self, log: &HostLog) -> PickerResult<Props> {
        let select_log = Rc::clone(log);
        let end_log = Rc::clone(log);
        let mut props = Props::new(self.name.as_str())
            .selected(self.selected)
            .months_shown(self.months_shown)?
            .bounds(self.bounds)
            .on_select(move |payload| {
                select_log.borrow_mut().push(HostEvent::Select { payload });
            })
            .on_selection_end(move |range| {
                end_log.borrow_mut().push(HostEvent::SelectionEnd { range });
            });
        if let Some(anchor) = self.anchor {
            props = props.anchor(anchor);
        }
        Ok(props)
    }

    /// Build a terminal picker recording into `log`
    pub fn build(&self, log: &HostLog) -> PickerResult<Datepicker<TuiSurface>> {
        let props = self.props(log)?;
        Ok(Datepicker::new(TuiSurface::new(self.surface), props))
    }
}
