//! Date-range picker core
//!
//! Model, controller and surface contract of the picker, wired together by
//! the [`Datepicker`] facade. Nothing in here knows about terminals: any
//! type implementing [`CalendarSurface`] can render the picker.
//!
//! Control flow: the surface interprets raw input into an [`Intent`], the
//! facade turns it into an [`Action`], the controller dispatches it against
//! the model and redraws what changed, and the model reports selection
//! changes to the host through the callbacks given in [`Props`].

pub mod action;
pub mod controller;
pub mod error;
pub mod model;
pub mod props;
pub mod surface;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use controller::Controller;
pub use error::{PickerError, PickerResult};
pub use model::{CalendarState, Model, ModelProps, Rules, Transition};
pub use props::Props;
pub use surface::{classify_day, month_grid, CalendarSurface, DayMark, Intent, WeekStart};
pub use types::{parse_date, DateBounds, DateRange, DisplayPeriod, Selection, SelectionPayload, DATE_FORMAT};

use chrono::Local;

/// Date-range picker: assembly point of surface, model and controller
#[derive(Debug)]
pub struct Datepicker<S> {
    name: String,
    controller: Controller<S>,
}

impl<S: CalendarSurface> Datepicker<S> {
    /// Build the picker and draw its initial state
    ///
    /// The initial selection from `props` is shown without firing any callback.
    pub fn new(surface: S, props: Props) -> Self {
        let Props {
            name,
            selected,
            months_shown,
            bounds,
            anchor,
            mut on_select,
            on_selection_end,
        } = props;

        let tag = name.clone();
        let model = Model::new(ModelProps {
            selected,
            anchor: anchor.unwrap_or_else(|| Local::now().date_naive()),
            rules: Rules {
                months_shown,
                bounds,
            },
            on_select: Box::new(move |selection| {
                on_select(SelectionPayload::new(tag.as_str(), selection));
            }),
            on_selection_end,
        });

        let mut controller = Controller::new(surface, model);
        controller.mount();
        Self { name, controller }
    }

    /// Clear the selection without firing `on_selection_end`
    pub fn reset(&mut self) -> &mut Self {
        self.controller.dispatch(Action::SetSelected(Selection::None));
        self
    }

    /// Overwrite the selection from the host (controlled update)
    pub fn set_selected(&mut self, selection: Selection) -> &mut Self {
        self.controller.dispatch(Action::SetSelected(selection));
        self
    }

    /// Dispatch a raw action, as a scripted host would
    pub fn dispatch(&mut self, action: Action) -> &mut Self {
        self.controller.dispatch(action);
        self
    }

    /// Let the surface interpret raw input and route whatever it raises
    pub fn handle_input(&mut self, input: S::Input) -> &mut Self {
        if let Some(intent) = self.controller.surface_mut().interpret(input) {
            self.handle_intent(intent);
        }
        self
    }

    /// Translate a surface intent into an action
    pub fn handle_intent(&mut self, intent: Intent) -> &mut Self {
        let action = match intent {
            Intent::TurnNext => Action::TurnNext,
            Intent::TurnPrev => Action::TurnPrev,
            Intent::Pick(day) => Action::SelectDay(day),
            Intent::SelectRange(selection) => Action::SetSelected(selection),
        };
        self.controller.dispatch(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection(&self) -> Selection {
        self.controller.state().selection
    }

    pub fn period(&self) -> DisplayPeriod {
        self.controller.state().period
    }

    pub fn rules(&self) -> &Rules {
        self.controller.model().rules()
    }

    /// Current selection tagged with the picker name
    pub fn payload(&self) -> SelectionPayload {
        SelectionPayload::new(self.name.as_str(), self.selection())
    }

    pub fn surface(&self) -> &S {
        self.controller.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.controller.surface_mut()
    }
}
