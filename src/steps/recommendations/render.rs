//! Recommendations rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{match_color, Course};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::logic::SortKey;
use super::state::RecommendationsState;

pub fn render(
    state: &RecommendationsState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Sort tabs
            Constraint::Min(10),   // Course cards
        ])
        .split(area);

    render_header(state, f, chunks[0], borders);
    render_sort_tabs(state, f, chunks[1], click_state);
    render_courses(state, f, chunks[2], borders, is_narrow, click_state);
}

fn render_header(state: &RecommendationsState, f: &mut Frame, area: Rect, borders: Borders) {
    let profile = &state.complete.profile;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}, based on your background in ", profile.name),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                profile.stream.label(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                " and your {} selected interests, here are your matches.",
                state.complete.interests.len()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Your Perfect Career Matches ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sort_tabs(
    state: &RecommendationsState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut tabs = TabBar::new("│");
    for (i, sort) in SortKey::ALL.iter().enumerate() {
        let style = if state.sort == *sort {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs = tabs.tab(format!("{}. {}", i + 1, sort.label()), style, SORT_BASE + i as u16);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Sort by ");
    let mut cs = click_state.borrow_mut();
    tabs.block(block).render(f, area, &mut cs);
}

fn render_courses(
    state: &RecommendationsState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(" Recommendations ");
    let inner = block.inner(area);

    let mut cl = ClickableList::new();
    let mut cursor_span = (0usize, 0usize);

    for (i, course) in state.sorted().into_iter().enumerate() {
        let at_cursor = state.cursor == i;
        let start = cl.len();
        push_course_card(&mut cl, course, i, at_cursor, is_narrow);
        if at_cursor {
            cursor_span = (start, cl.len());
        }
    }

    // Scroll just enough to keep the cursor card fully visible
    let visible = inner.height as usize;
    let scroll = if visible > 0 && cursor_span.1 > visible {
        (cursor_span.1 - visible) as u16
    } else {
        0
    };

    let mut cs = click_state.borrow_mut();
    cl.register_targets(inner, &mut cs, scroll);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(block).scroll((scroll, 0)),
        area,
    );
}

fn push_course_card(
    cl: &mut ClickableList<'static>,
    course: &'static Course,
    index: usize,
    at_cursor: bool,
    is_narrow: bool,
) {
    let action = VIEW_BASE + index as u16;
    let marker = if at_cursor { "▶" } else { " " };
    let name_style = if at_cursor {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let mut title = vec![
        Span::styled(format!("{} {}. ", marker, index + 1), Style::default().fg(Color::Cyan)),
        Span::styled(course.name, name_style),
    ];
    if index == 0 {
        title.push(Span::styled(
            "  ★ Top Match",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    title.push(Span::styled(
        format!("  {}%", course.match_percentage),
        Style::default()
            .fg(match_color(course.match_percentage))
            .add_modifier(Modifier::BOLD),
    ));
    cl.push_clickable(Line::from(title), action);

    if !is_narrow {
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", truncate(course.description, 90)),
                Style::default().fg(Color::DarkGray),
            )),
            action,
        );
    }

    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                format!("     ⏱ {} · ", course.duration),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(course.average_salary, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" · {} · ", course.job_prospects),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                course.difficulty.label(),
                Style::default().fg(course.difficulty.color()),
            ),
        ]),
        action,
    );

    if !is_narrow {
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     Skills: {}", course.key_skills.join(", ")),
                Style::default().fg(Color::Gray),
            )),
            action,
        );
    }

    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                "     [↵] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("View Details →", Style::default().fg(Color::White)),
        ]),
        action,
    );
    cl.push(Line::from(""));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
