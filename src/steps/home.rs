//! Landing screen: hero pitch and the entry point into the wizard.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::store::WizardContext;
use crate::steps::{Route, Step, Transition};

/// Click action: the start button.
pub const START: u16 = 10;

pub struct HomeStep;

impl HomeStep {
    pub fn new() -> Self {
        Self
    }
}

impl Step for HomeStep {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut WizardContext) -> Transition {
        match event {
            InputEvent::Enter | InputEvent::Char('s') | InputEvent::Click(START) => {
                Transition::Goto(Route::Onboarding)
            }
            _ => Transition::Idle,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, cs: &Rc<RefCell<ClickState>>) {
        let is_narrow = is_narrow_layout(area.width);
        let borders = if is_narrow {
            Borders::TOP | Borders::BOTTOM
        } else {
            Borders::ALL
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),  // Hero
                Constraint::Length(3),  // Start button
                Constraint::Min(8),     // Features
            ])
            .split(area);

        let hero = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Find your perfect career path",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Personalized career guidance for Class 12 students.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Discover courses and career paths tailored to your interests.",
                Style::default().fg(Color::Gray),
            )),
        ];
        let hero_block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " CareerPath ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(
            Paragraph::new(hero)
                .block(hero_block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let start = Line::from(vec![
            Span::styled(
                " [S] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Start Your Journey →",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let start_block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Yellow));
        f.render_widget(
            Paragraph::new(start)
                .block(start_block)
                .alignment(Alignment::Center),
            chunks[1],
        );
        cs.borrow_mut().add_click_target(chunks[1], START);

        let features = vec![
            feature_line("💡", "Personalized Recommendations"),
            Line::from(Span::styled(
                "     Course suggestions tailored to your interests and background",
                Style::default().fg(Color::DarkGray),
            )),
            feature_line("📖", "Comprehensive Course Info"),
            Line::from(Span::styled(
                "     Eligibility, duration, career prospects, and top colleges",
                Style::default().fg(Color::DarkGray),
            )),
            feature_line("🤝", "Supportive Guidance"),
            Line::from(Span::styled(
                "     Reduce anxiety and build confidence in your decisions",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let features_block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Why CareerPath? ");
        f.render_widget(
            Paragraph::new(features)
                .block(features_block)
                .wrap(Wrap { trim: false }),
            chunks[2],
        );
    }
}

fn feature_line(icon: &str, title: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {} ", icon)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
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
    fn start_button_enters_wizard() {
        let mut step = HomeStep::new();
        let mut c = ctx();
        assert_eq!(
            step.handle_input(&InputEvent::Click(START), &mut c),
            Transition::Goto(Route::Onboarding)
        );
        assert_eq!(
            step.handle_input(&InputEvent::Enter, &mut c),
            Transition::Goto(Route::Onboarding)
        );
        assert_eq!(
            step.handle_input(&InputEvent::Char('s'), &mut c),
            Transition::Goto(Route::Onboarding)
        );
    }

    #[test]
    fn other_input_is_ignored() {
        let mut step = HomeStep::new();
        let mut c = ctx();
        assert_eq!(step.handle_input(&InputEvent::Up, &mut c), Transition::Idle);
        assert_eq!(
            step.handle_input(&InputEvent::Char('x'), &mut c),
            Transition::Idle
        );
    }
}
