//! Recommendations step — the sorted course list.

pub mod actions;
pub mod logic;
pub mod render;
pub mod salary;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::data::COURSES;
use crate::input::{ClickState, InputEvent};
use crate::store::{CompleteProfile, WizardContext};
use crate::steps::{Route, Step, Transition};

use actions::*;
use logic::SortKey;
use state::RecommendationsState;

pub struct RecommendationsStep {
    pub state: RecommendationsState,
}

impl RecommendationsStep {
    pub fn new(complete: CompleteProfile) -> Self {
        Self {
            state: RecommendationsState::new(complete),
        }
    }

    fn view_course(&self, index: usize) -> Transition {
        match self.state.course_at(index) {
            Some(course) => Transition::Goto(Route::CourseDetail(course.id.to_string())),
            None => Transition::Idle,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> Transition {
        match action_id {
            id if (SORT_BASE..SORT_BASE + SortKey::ALL.len() as u16).contains(&id) => {
                self.state.set_sort(SortKey::ALL[(id - SORT_BASE) as usize]);
                Transition::Consumed
            }
            id if (VIEW_BASE..VIEW_BASE + COURSES.len() as u16).contains(&id) => {
                self.view_course((id - VIEW_BASE) as usize)
            }
            _ => Transition::Idle,
        }
    }
}

impl Step for RecommendationsStep {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut WizardContext) -> Transition {
        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Char(c @ '1'..='3') => {
                let idx = (*c as u8 - b'1') as usize;
                self.state.set_sort(SortKey::ALL[idx]);
                Transition::Consumed
            }
            InputEvent::Up => {
                self.state.move_cursor(false);
                Transition::Consumed
            }
            InputEvent::Down => {
                self.state.move_cursor(true);
                Transition::Consumed
            }
            InputEvent::Enter => self.view_course(self.state.cursor),
            InputEvent::Esc => Transition::Goto(Route::Interests),
            _ => Transition::Idle,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, cs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Budget, Location, Profile, Stream};

    fn step() -> RecommendationsStep {
        RecommendationsStep::new(CompleteProfile {
            profile: Profile {
                name: "Asha".to_string(),
                age: 17,
                stream: Stream::Science,
                percentage: 85,
                location: Location::AnywhereIndia,
                budget: Budget::Medium,
            },
            interests: vec![
                "programming".to_string(),
                "ai-ml".to_string(),
                "data-science".to_string(),
            ],
        })
    }

    fn ctx() -> WizardContext {
        WizardContext {
            stored: Default::default(),
        }
    }

    #[test]
    fn sort_tabs_switch_ordering() {
        let mut s = step();
        let mut c = ctx();
        s.handle_input(&InputEvent::Click(SORT_BASE + 2), &mut c);
        assert_eq!(s.state.sort, SortKey::Popularity);
        s.handle_input(&InputEvent::Char('2'), &mut c);
        assert_eq!(s.state.sort, SortKey::Salary);
    }

    #[test]
    fn view_click_targets_display_order() {
        let mut s = step();
        let mut c = ctx();
        s.handle_input(&InputEvent::Char('3'), &mut c); // popularity
        let t = s.handle_input(&InputEvent::Click(VIEW_BASE + 1), &mut c);
        assert_eq!(
            t,
            Transition::Goto(Route::CourseDetail("business-administration".to_string()))
        );
    }

    #[test]
    fn enter_opens_cursor_course() {
        let mut s = step();
        let mut c = ctx();
        s.handle_input(&InputEvent::Down, &mut c);
        let t = s.handle_input(&InputEvent::Enter, &mut c);
        assert_eq!(
            t,
            Transition::Goto(Route::CourseDetail("data-science".to_string()))
        );
    }

    #[test]
    fn esc_returns_to_interests() {
        let mut s = step();
        let mut c = ctx();
        assert_eq!(
            s.handle_input(&InputEvent::Esc, &mut c),
            Transition::Goto(Route::Interests)
        );
    }
}
