//! Onboarding form rendering (read-only from form state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::state::{Field, ProfileForm};

pub fn render(form: &ProfileForm, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intro
            Constraint::Min(16),   // Form
            Constraint::Length(3), // Hints
        ])
        .split(area);

    render_intro(f, chunks[0], borders);
    render_form(form, f, chunks[1], borders, is_narrow, click_state);
    render_hints(f, chunks[2], borders);
}

fn render_intro(f: &mut Frame, area: Rect, borders: Borders) {
    let lines = vec![
        Line::from(Span::styled(
            " Help us understand your academic background so we can provide",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            " personalized career recommendations that match your profile.",
            Style::default().fg(Color::Gray),
        )),
    ];
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Tell us about yourself ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_form(
    form: &ProfileForm,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    for (i, &field) in Field::ALL.iter().enumerate() {
        let focused = form.focus == field;
        let key = (b'1' + i as u8) as char;

        let marker = if focused { "▶" } else { " " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let value = form.value_label(field);
        let (value_text, value_style) = match &value {
            Some(v) => (v.clone(), Style::default().fg(Color::Yellow)),
            None => (placeholder(field).to_string(), Style::default().fg(Color::DarkGray)),
        };

        let label = if is_narrow {
            format!("{:<20}", field.label())
        } else {
            format!("{:<26}", field.label())
        };

        let mut spans = vec![
            Span::styled(format!("{} [{}] ", marker, key), label_style),
            Span::styled(label, label_style),
            Span::styled(value_text, value_style),
        ];
        if focused && field.is_text() {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        cl.push_clickable(Line::from(spans), FIELD_BASE + i as u16);

        if let Some(msg) = form.errors.get(&field) {
            cl.push(Line::from(Span::styled(
                format!("       ⚠ {}", msg),
                Style::default().fg(Color::Red),
            )));
        }
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [Enter] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Continue to Interests →",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        SUBMIT,
    );

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(" Academic Details ");
    let inner = block.inner(area);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(inner, &mut cs, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_hints(f: &mut Frame, area: Rect, borders: Borders) {
    let hints = Line::from(Span::styled(
        " ↑/↓ field · ←/→ change option · type to edit · Enter submit · Esc home",
        Style::default().fg(Color::DarkGray),
    ));
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(hints).block(block), area);
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter your full name",
        Field::Age => "Select your age",
        Field::Stream => "Select your stream",
        Field::Percentage => "e.g., 85",
        Field::Location => "Select location",
        Field::Budget => "Select budget range",
    }
}
