//! Interest selection step — pick at least three areas of interest.

pub mod actions;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::data::CATEGORIES;
use crate::input::{ClickState, InputEvent};
use crate::store::{StoredState, WizardContext};
use crate::steps::{Route, Step, Transition};

use actions::*;
use state::InterestsState;

pub struct InterestsStep {
    pub state: InterestsState,
}

impl InterestsStep {
    pub fn new(stored: &StoredState) -> Self {
        Self {
            state: InterestsState::from_stored(stored),
        }
    }

    /// Store the selection and move on, if the minimum-pick gate is met.
    fn try_continue(&mut self, ctx: &mut WizardContext) -> Transition {
        if !self.state.can_continue() {
            return Transition::Idle;
        }
        let interests: Vec<String> = self.state.selected.iter().map(|s| s.to_string()).collect();
        ctx.stored.merge_interests(&interests);
        Transition::Goto(Route::Recommendations)
    }

    fn handle_click(&mut self, action_id: u16, ctx: &mut WizardContext) -> Transition {
        match action_id {
            CONTINUE => self.try_continue(ctx),
            CLEAR_SEARCH => {
                self.state.clear_search();
                Transition::Consumed
            }
            FOCUS_SEARCH => {
                self.state.search_focused = true;
                Transition::Consumed
            }
            id if (CATEGORY_BASE..CATEGORY_BASE + CATEGORIES.len() as u16).contains(&id) => {
                self.state
                    .set_category(CATEGORIES[(id - CATEGORY_BASE) as usize].id);
                Transition::Consumed
            }
            id if id >= INTEREST_BASE => {
                let idx = (id - INTEREST_BASE) as usize;
                match self.state.filtered().get(idx) {
                    Some(interest) => {
                        self.state.toggle(interest.id);
                        self.state.cursor = idx;
                        Transition::Consumed
                    }
                    None => Transition::Idle,
                }
            }
            _ => Transition::Idle,
        }
    }

    fn handle_key(&mut self, c: char, ctx: &mut WizardContext) -> Transition {
        if self.state.search_focused {
            self.state.search_push(c);
            return Transition::Consumed;
        }
        match c {
            '/' => {
                self.state.search_focused = true;
                Transition::Consumed
            }
            ' ' => {
                if self.state.toggle_at_cursor() {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
            'g' => self.try_continue(ctx),
            _ => Transition::Idle,
        }
    }
}

impl Step for InterestsStep {
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut WizardContext) -> Transition {
        match event {
            InputEvent::Click(id) => self.handle_click(*id, ctx),
            InputEvent::Char(c) => self.handle_key(*c, ctx),
            InputEvent::Backspace => {
                if self.state.search_focused && self.state.search_backspace() {
                    Transition::Consumed
                } else {
                    Transition::Idle
                }
            }
            InputEvent::Enter => {
                if self.state.search_focused {
                    self.state.search_focused = false;
                    Transition::Consumed
                } else {
                    self.try_continue(ctx)
                }
            }
            InputEvent::Esc => {
                if self.state.search_focused {
                    self.state.search_focused = false;
                    Transition::Consumed
                } else {
                    Transition::Goto(Route::Onboarding)
                }
            }
            InputEvent::Up => {
                self.state.move_cursor(false);
                Transition::Consumed
            }
            InputEvent::Down => {
                self.state.move_cursor(true);
                Transition::Consumed
            }
            InputEvent::Left => {
                self.state.cycle_category(false);
                Transition::Consumed
            }
            InputEvent::Right => {
                self.state.cycle_category(true);
                Transition::Consumed
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, cs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ALL_CATEGORY;

    fn ctx() -> WizardContext {
        WizardContext {
            stored: StoredState::default(),
        }
    }

    #[test]
    fn continue_is_gated_below_three() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        step.state.toggle("programming");
        step.state.toggle("ai-ml");

        assert_eq!(
            step.handle_input(&InputEvent::Click(CONTINUE), &mut c),
            Transition::Idle
        );
        assert_eq!(c.stored.interests, None);

        step.state.toggle("music");
        assert_eq!(
            step.handle_input(&InputEvent::Click(CONTINUE), &mut c),
            Transition::Goto(Route::Recommendations)
        );
        assert_eq!(
            c.stored.interests,
            Some(vec![
                "programming".to_string(),
                "ai-ml".to_string(),
                "music".to_string()
            ])
        );
    }

    #[test]
    fn click_toggles_by_filtered_index() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);

        // Catalog order: index 0 is programming
        step.handle_input(&InputEvent::Click(INTEREST_BASE), &mut c);
        assert!(step.state.is_selected("programming"));

        // Under the health tab, index 0 is medicine
        step.handle_input(&InputEvent::Click(CATEGORY_BASE + 6), &mut c);
        assert_eq!(step.state.active_category, "health");
        step.handle_input(&InputEvent::Click(INTEREST_BASE), &mut c);
        assert!(step.state.is_selected("medicine"));

        // Clicking again deselects
        step.handle_input(&InputEvent::Click(INTEREST_BASE), &mut c);
        assert!(!step.state.is_selected("medicine"));
    }

    #[test]
    fn out_of_range_interest_click_is_ignored() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        step.handle_input(&InputEvent::Click(CATEGORY_BASE + 6), &mut c); // 4 entries
        assert_eq!(
            step.handle_input(&InputEvent::Click(INTEREST_BASE + 20), &mut c),
            Transition::Idle
        );
    }

    #[test]
    fn search_focus_routes_typing() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);

        step.handle_input(&InputEvent::Char('/'), &mut c);
        assert!(step.state.search_focused);
        for ch in "design".chars() {
            step.handle_input(&InputEvent::Char(ch), &mut c);
        }
        assert_eq!(step.state.search_query, "design");
        assert_eq!(step.state.filtered().len(), 2);

        // Enter leaves the search box without continuing
        assert_eq!(
            step.handle_input(&InputEvent::Enter, &mut c),
            Transition::Consumed
        );
        assert!(!step.state.search_focused);
    }

    #[test]
    fn clear_search_click_restores_full_view() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        step.handle_input(&InputEvent::Char('/'), &mut c);
        for ch in "zzz".chars() {
            step.handle_input(&InputEvent::Char(ch), &mut c);
        }
        assert!(step.state.filtered().is_empty());

        step.handle_input(&InputEvent::Click(CLEAR_SEARCH), &mut c);
        assert_eq!(step.state.search_query, "");
        assert!(!step.state.filtered().is_empty());
    }

    #[test]
    fn space_toggles_at_cursor() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        step.handle_input(&InputEvent::Down, &mut c);
        step.handle_input(&InputEvent::Char(' '), &mut c);
        // Catalog index 1 is ai-ml
        assert!(step.state.is_selected("ai-ml"));
    }

    #[test]
    fn category_arrows_wrap() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        assert_eq!(step.state.active_category, ALL_CATEGORY);
        step.handle_input(&InputEvent::Left, &mut c);
        assert_eq!(step.state.active_category, "health");
        step.handle_input(&InputEvent::Right, &mut c);
        assert_eq!(step.state.active_category, ALL_CATEGORY);
    }

    #[test]
    fn esc_unfocuses_search_before_leaving() {
        let mut c = ctx();
        let mut step = InterestsStep::new(&c.stored);
        step.handle_input(&InputEvent::Char('/'), &mut c);
        assert_eq!(
            step.handle_input(&InputEvent::Esc, &mut c),
            Transition::Consumed
        );
        assert_eq!(
            step.handle_input(&InputEvent::Esc, &mut c),
            Transition::Goto(Route::Onboarding)
        );
    }
}
