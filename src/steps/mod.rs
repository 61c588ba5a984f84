//! Wizard steps and navigation.
//!
//! Each screen implements [`Step`]; the main loop owns exactly one active
//! step at a time. Steps never navigate directly — they return a
//! [`Transition`] and the loop resolves it through [`enter`], which is the
//! single place the stage guards live.

pub mod course;
pub mod home;
pub mod interests;
pub mod onboarding;
pub mod recommendations;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::store::{Stage, WizardContext};

/// Global click action: the back link in the help bar. Step-local actions
/// start at 10.
pub const BACK: u16 = 1;

/// Addressable wizard screens.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    Onboarding,
    Interests,
    Recommendations,
    CourseDetail(String),
}

/// What a step wants done after handling an input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Event was not for this step.
    Idle,
    /// Step changed its own state; persist and redraw.
    Consumed,
    /// Leave this step for another route.
    Goto(Route),
}

/// One wizard screen.
pub trait Step {
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut WizardContext) -> Transition;
    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>);
}

/// Resolve a route into a step, enforcing the stage guards: a step that
/// needs data an earlier step has not produced redirects backwards. Returns
/// the route actually entered alongside the constructed step.
pub fn enter(route: Route, ctx: &WizardContext) -> (Route, Box<dyn Step>) {
    match route {
        Route::Home => (Route::Home, Box::new(home::HomeStep::new())),
        Route::Onboarding => (
            Route::Onboarding,
            Box::new(onboarding::OnboardingStep::new(&ctx.stored)),
        ),
        Route::Interests => match ctx.stored.stage() {
            Stage::Empty => enter(Route::Onboarding, ctx),
            _ => (
                Route::Interests,
                Box::new(interests::InterestsStep::new(&ctx.stored)),
            ),
        },
        Route::Recommendations => match ctx.stored.stage() {
            Stage::Complete(complete) => (
                Route::Recommendations,
                Box::new(recommendations::RecommendationsStep::new(complete)),
            ),
            Stage::Profile(_) => enter(Route::Interests, ctx),
            Stage::Empty => enter(Route::Onboarding, ctx),
        },
        // Deep links to a course are always allowed; the step itself
        // reports an unknown id.
        Route::CourseDetail(id) => {
            let step = course::CourseStep::new(&id);
            (Route::CourseDetail(id), Box::new(step))
        }
    }
}

/// 1-based wizard progress for the title bar, if the route is part of the
/// three-step flow.
pub fn progress(route: &Route) -> Option<(u8, u8)> {
    match route {
        Route::Onboarding => Some((1, 3)),
        Route::Interests => Some((2, 3)),
        Route::Recommendations => Some((3, 3)),
        Route::Home | Route::CourseDetail(_) => None,
    }
}
