use tracing::{debug, trace};

use super::action::Action;
use super::model::{CalendarState, Model};
use super::surface::CalendarSurface;

/// Dispatches actions against the model and keeps the surface in step
///
/// Holds nothing but the surface and the model. Dispatch is synchronous:
/// the model transition and the matching redraw complete before `dispatch`
/// returns, so the surface can never observe transitions out of order.
#[derive(Debug)]
pub struct Controller<S> {
    surface: S,
    model: Model,
}

impl<S: CalendarSurface> Controller<S> {
    pub fn new(surface: S, model: Model) -> Self {
        Self { surface, model }
    }

    /// Initial draw of the seeded state, no callbacks involved
    pub fn mount(&mut self) {
        let CalendarState { selection, period } = *self.model.state();
        debug!("VIEW: Mounting at {} with {}", period, selection);
        self.surface.apply_rules(self.model.rules());
        self.surface.render_period(period, &selection);
    }

    /// Apply `action` and redraw exactly what it changed
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {}", action);
        let transition = self.model.dispatch(action);

        if transition.is_noop() {
            trace!("ACTION: {} changed nothing", action.name());
            return;
        }

        let CalendarState { selection, period } = *self.model.state();
        if transition.period_changed {
            debug!("VIEW: Rendering period {}", period);
            self.surface.render_period(period, &selection);
        } else {
            debug!("VIEW: Rendering selection {}", selection);
            self.surface.render_selection(&selection);
        }

        if let Some(range) = transition.completed {
            self.surface.selection_ended(range);
        }
    }

    pub fn state(&self) -> &CalendarState {
        self.model.state()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
