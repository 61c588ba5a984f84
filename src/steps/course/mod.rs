//! Course detail step — the deep-dive view for one course.

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::data::{self, Course, CourseDetail};
use crate::input::{ClickState, InputEvent};
use crate::store::WizardContext;
use crate::steps::{Route, Step, Transition};

use actions::*;

/// What a course id resolved to. A course can exist in the catalog without
/// a detail record yet; both that and a wholly unknown id get an explicit
/// screen instead of a blank page.
pub enum Lookup {
    Found(&'static CourseDetail),
    NoDetail(&'static Course),
    Unknown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    Overview,
    Curriculum,
    Careers,
    Colleges,
    Admission,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Overview,
        DetailTab::Curriculum,
        DetailTab::Careers,
        DetailTab::Colleges,
        DetailTab::Admission,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Curriculum => "Curriculum",
            DetailTab::Careers => "Careers",
            DetailTab::Colleges => "Colleges",
            DetailTab::Admission => "Admission",
        }
    }
}

pub struct CourseStep {
    pub lookup: Lookup,
    pub tab: DetailTab,
    pub scroll: u16,
}

impl CourseStep {
    pub fn new(id: &str) -> Self {
        let lookup = match data::find_detail(id) {
            Some(detail) => Lookup::Found(detail),
            None => match data::find_course(id) {
                Some(course) => Lookup::NoDetail(course),
                None => Lookup::Unknown(id.to_string()),
            },
        };
        Self {
            lookup,
            tab: DetailTab::Overview,
            scroll: 0,
        }
    }

    fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
        self.scroll = 0;
    }

    fn cycle_tab(&mut self, forward: bool) {
        let n = DetailTab::ALL.len();
        let i = DetailTab::ALL.iter().position(|&t| t == self.tab).unwrap_or(0);
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.set_tab(DetailTab::ALL[next]);
    }

    fn scroll_down(&mut self) {
        let max = render::content_lines(&self.lookup, self.tab)
            .len()
            .saturating_sub(1) as u16;
        self.scroll = (self.scroll + 1).min(max);
    }
}

impl Step for CourseStep {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut WizardContext) -> Transition {
        // The tab strip only exists on the full detail view
        let has_tabs = matches!(self.lookup, Lookup::Found(_));
        match event {
            InputEvent::Esc | InputEvent::Enter => Transition::Goto(Route::Recommendations),
            InputEvent::Click(id)
                if has_tabs
                    && (TAB_BASE..TAB_BASE + DetailTab::ALL.len() as u16).contains(id) =>
            {
                self.set_tab(DetailTab::ALL[(id - TAB_BASE) as usize]);
                Transition::Consumed
            }
            InputEvent::Char(c @ '1'..='5') if has_tabs => {
                self.set_tab(DetailTab::ALL[(*c as u8 - b'1') as usize]);
                Transition::Consumed
            }
            InputEvent::Left if has_tabs => {
                self.cycle_tab(false);
                Transition::Consumed
            }
            InputEvent::Right if has_tabs => {
                self.cycle_tab(true);
                Transition::Consumed
            }
            InputEvent::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Transition::Consumed
            }
            InputEvent::Down => {
                self.scroll_down();
                Transition::Consumed
            }
            _ => Transition::Idle,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, cs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoredState;

    fn ctx() -> WizardContext {
        WizardContext {
            stored: StoredState::default(),
        }
    }

    #[test]
    fn known_id_with_detail_is_found() {
        let step = CourseStep::new("computer-science");
        match step.lookup {
            Lookup::Found(detail) => assert_eq!(detail.summary.id, "computer-science"),
            _ => panic!("expected Found"),
        }
    }

    #[test]
    fn catalog_course_without_detail_falls_back() {
        let step = CourseStep::new("graphic-design");
        match step.lookup {
            Lookup::NoDetail(course) => assert_eq!(course.id, "graphic-design"),
            _ => panic!("expected NoDetail"),
        }
    }

    #[test]
    fn unknown_id_is_reported() {
        let step = CourseStep::new("astrophysics");
        match &step.lookup {
            Lookup::Unknown(id) => assert_eq!(id, "astrophysics"),
            _ => panic!("expected Unknown"),
        }
    }

    #[test]
    fn tabs_switch_and_reset_scroll() {
        let mut c = ctx();
        let mut step = CourseStep::new("computer-science");
        step.handle_input(&InputEvent::Down, &mut c);
        assert_eq!(step.scroll, 1);

        step.handle_input(&InputEvent::Click(TAB_BASE + 1), &mut c);
        assert_eq!(step.tab, DetailTab::Curriculum);
        assert_eq!(step.scroll, 0);

        step.handle_input(&InputEvent::Char('5'), &mut c);
        assert_eq!(step.tab, DetailTab::Admission);

        step.handle_input(&InputEvent::Right, &mut c);
        assert_eq!(step.tab, DetailTab::Overview);
        step.handle_input(&InputEvent::Left, &mut c);
        assert_eq!(step.tab, DetailTab::Admission);
    }

    #[test]
    fn fallback_views_have_no_tabs() {
        let mut c = ctx();
        let mut step = CourseStep::new("graphic-design");
        assert_eq!(
            step.handle_input(&InputEvent::Char('2'), &mut c),
            Transition::Idle
        );
        assert_eq!(step.tab, DetailTab::Overview);
    }

    #[test]
    fn esc_returns_to_recommendations() {
        let mut c = ctx();
        let mut step = CourseStep::new("computer-science");
        assert_eq!(
            step.handle_input(&InputEvent::Esc, &mut c),
            Transition::Goto(Route::Recommendations)
        );
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut c = ctx();
        let mut step = CourseStep::new("astrophysics");
        for _ in 0..100 {
            step.handle_input(&InputEvent::Down, &mut c);
        }
        let max = render::content_lines(&step.lookup, step.tab).len() as u16;
        assert!(step.scroll < max);
    }
}
