use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, trace};

use super::action::Action;
use super::types::{DateBounds, DateRange, DisplayPeriod, Selection};

/// Callback fired with the new selection on every committed change
pub type SelectCallback = Box<dyn FnMut(Selection)>;

/// Callback fired once when the user completes a range
pub type SelectionEndCallback = Box<dyn FnMut(DateRange)>;

/// Canonical picker state: what is selected and which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub selection: Selection,
    pub period: DisplayPeriod,
}

/// What a single dispatch changed
///
/// The controller uses this to decide which parts of the surface to redraw,
/// the model uses it to decide which callbacks to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub selection_changed: bool,
    pub period_changed: bool,
    /// Set only when a partial selection was just completed by a day pick
    pub completed: Option<DateRange>,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        !self.selection_changed && !self.period_changed
    }
}

/// Static rules the reducer applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Number of consecutive month pages the surface shows (1 or 2)
    pub months_shown: u8,
    pub bounds: DateBounds,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            months_shown: 1,
            bounds: DateBounds::unbounded(),
        }
    }
}

/// Pure state reducer
///
/// Takes the current state and an action, returns the next state and a
/// description of what changed. No callbacks, no I/O.
///
/// Sub-reducers pass ownership through the chain:
/// - `Ok((state, transition))` if the action was handled
/// - `Err(state)` to hand the state to the next reducer
pub fn reduce(state: CalendarState, action: &Action, rules: &Rules) -> (CalendarState, Transition) {
    let state = match reduce_navigation(state, action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_selection(state, action, rules) {
        Ok(result) => return result,
        Err(state) => state,
    };

    debug!("MODEL: Unhandled action {:?} - state unchanged", action);
    (state, Transition::default())
}

/// TurnNext / TurnPrev: move the period, never touch the selection
fn reduce_navigation(
    state: CalendarState,
    action: &Action,
) -> Result<(CalendarState, Transition), CalendarState> {
    let period = match action {
        Action::TurnNext => state.period.next(),
        Action::TurnPrev => state.period.prev(),
        _ => return Err(state),
    };

    trace!("MODEL: Period {} -> {}", state.period, period);
    let transition = Transition {
        period_changed: true,
        ..Transition::default()
    };
    Ok((CalendarState { period, ..state }, transition))
}

/// SelectDay / SetSelected: advance or overwrite the selection
fn reduce_selection(
    state: CalendarState,
    action: &Action,
    rules: &Rules,
) -> Result<(CalendarState, Transition), CalendarState> {
    let (selection, completed) = match action {
        Action::SelectDay(day) => {
            if !rules.bounds.contains(*day) {
                debug!("MODEL: SelectDay({}) outside bounds - ignored", day);
                return Ok((state, Transition::default()));
            }
            pick_day(state.selection, *day)
        }
        Action::SetSelected(selection) => (selection.clamped(&rules.bounds), None),
        _ => return Err(state),
    };

    if selection == state.selection && completed.is_none() {
        trace!("MODEL: Selection unchanged ({})", selection);
        return Ok((state, Transition::default()));
    }

    let period = keep_visible(state.period, &selection, rules.months_shown);
    let transition = Transition {
        selection_changed: selection != state.selection,
        period_changed: period != state.period,
        completed,
    };
    Ok((CalendarState { selection, period }, transition))
}

/// Two-click range model
///
/// The first pick starts a partial selection, the second completes it.
/// Picking again after a completed range starts over. Re-picking the
/// partial start completes a single-day range.
fn pick_day(current: Selection, day: NaiveDate) -> (Selection, Option<DateRange>) {
    match current {
        Selection::None | Selection::Range(_) => (Selection::PartialStart(day), None),
        Selection::PartialStart(start) => {
            let range = DateRange::new(start, day);
            (Selection::Range(range), Some(range))
        }
    }
}

/// Move the period so at least one endpoint of `selection` is on screen
///
/// Leaves the period alone when the selection is empty or already visible.
fn keep_visible(period: DisplayPeriod, selection: &Selection, pages: u8) -> DisplayPeriod {
    let endpoints = selection.endpoints();
    if endpoints.iter().any(|day| period.contains(*day, pages)) {
        return period;
    }
    endpoints.first().map_or(period, |day| DisplayPeriod::of(*day))
}

/// Construction-time inputs of the model
pub struct ModelProps {
    pub selected: Selection,
    /// Day whose month is shown when nothing is selected
    pub anchor: NaiveDate,
    pub rules: Rules,
    pub on_select: SelectCallback,
    pub on_selection_end: SelectionEndCallback,
}

/// Calendar state holder
///
/// Owns the state for the picker's whole lifetime and is only changed
/// through [`Model::dispatch`]. Host callbacks are fired from here.
pub struct Model {
    state: CalendarState,
    rules: Rules,
    on_select: SelectCallback,
    on_selection_end: SelectionEndCallback,
}

impl Model {
    /// Seed the model from props without firing any callback
    pub fn new(props: ModelProps) -> Self {
        let selection = props.selected.clamped(&props.rules.bounds);
        let period = selection
            .endpoints()
            .first()
            .map_or(DisplayPeriod::of(props.anchor), |day| DisplayPeriod::of(*day));

        Self {
            state: CalendarState { selection, period },
            rules: props.rules,
            on_select: props.on_select,
            on_selection_end: props.on_selection_end,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Apply an action and fire the callbacks it implies
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let (state, transition) = reduce(self.state, &action, &self.rules);
        self.state = state;

        if transition.selection_changed {
            debug!("MODEL: Selection is now {}", self.state.selection);
            (self.on_select)(self.state.selection);
        }
        if let Some(range) = transition.completed {
            debug!("MODEL: Selection completed {}", range);
            (self.on_selection_end)(range);
        }

        transition
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
