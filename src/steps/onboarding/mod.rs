//! Onboarding step — the academic details form.

pub mod actions;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::store::{StoredState, WizardContext};
use crate::steps::{Route, Step, Transition};

use actions::*;
use state::{Field, ProfileForm};

pub struct OnboardingStep {
    pub form: ProfileForm,
}

impl OnboardingStep {
    pub fn new(stored: &StoredState) -> Self {
        Self {
            form: ProfileForm::from_stored(stored),
        }
    }

    /// Validate and, when complete, merge the profile into the store.
    /// A stored interest selection survives re-submission untouched.
    fn submit(&mut self, ctx: &mut WizardContext) -> Transition {
        if !self.form.validate() {
            return Transition::Consumed;
        }
        match self.form.profile() {
            Some(profile) => {
                ctx.stored.merge_profile(&profile);
                Transition::Goto(Route::Interests)
            }
            None => Transition::Consumed,
        }
    }

    fn handle_click(&mut self, action_id: u16, ctx: &mut WizardContext) -> Transition {
        match action_id {
            SUBMIT => self.submit(ctx),
            id if (FIELD_BASE..FIELD_BASE + Field::ALL.len() as u16).contains(&id) => {
                let field = Field::ALL[(id - FIELD_BASE) as usize];
                if self.form.focus == field && !field.is_text() {
                    // Tapping the focused selector advances its option
                    self.form.cycle(true);
                } else {
                    self.form.focus = field;
                }
                Transition::Consumed
            }
            _ => Transition::Idle,
        }
    }
}

impl Step for OnboardingStep {
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut WizardContext) -> Transition {
        match event {
            InputEvent::Click(id) => self.handle_click(*id, ctx),
            InputEvent::Enter => self.submit(ctx),
            InputEvent::Esc => Transition::Goto(Route::Home),
            InputEvent::Up => {
                self.form.focus_prev();
                Transition::Consumed
            }
            InputEvent::Down => {
                self.form.focus_next();
                Transition::Consumed
            }
            InputEvent::Left => {
                if self.form.cycle(false) {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
            InputEvent::Right => {
                if self.form.cycle(true) {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
            InputEvent::Char(c) => {
                if self.form.type_char(*c) {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
            InputEvent::Backspace => {
                if self.form.backspace() {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>) {
        render::render(&self.form, f, area, cs);
    }
}
