//! Interest selector rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::data::{category_count, CATEGORIES};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::state::InterestsState;

pub fn render(
    state: &InterestsState,
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
            Constraint::Length(3), // Search
            Constraint::Length(3), // Category tabs
            Constraint::Length(3), // Selection counter
            Constraint::Min(6),    // Interest list
            Constraint::Length(3), // Continue
        ])
        .split(area);

    render_search(state, f, chunks[0], borders, click_state);
    render_categories(state, f, chunks[1], is_narrow, click_state);
    render_counter(state, f, chunks[2], borders);
    render_list(state, f, chunks[3], borders, is_narrow, click_state);
    render_continue(state, f, chunks[4], borders, click_state);
}

fn render_search(
    state: &InterestsState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut spans = vec![Span::styled(" 🔍 ", Style::default().fg(Color::Gray))];
    if state.search_query.is_empty() && !state.search_focused {
        spans.push(Span::styled(
            "Search interests... (press / to type)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            state.search_query.clone(),
            Style::default().fg(Color::White),
        ));
        if state.search_focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
    }

    let border_color = if state.search_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, FOCUS_SEARCH);
    if !state.search_query.is_empty() && area.width > 10 && area.height >= 3 {
        // Small ✕ region on the right edge clears instead of focusing.
        // Registered after the search target, so it wins the overlap.
        let clear = Rect::new(area.x + area.width - 6, area.y, 6, area.height);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "✕",
                Style::default().fg(Color::Red),
            ))),
            Rect::new(area.x + area.width - 4, area.y + 1, 1, 1),
        );
        cs.add_click_target(clear, CLEAR_SEARCH);
    }
}

fn render_categories(
    state: &InterestsState,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut tabs = TabBar::new("│");
    for (i, category) in CATEGORIES.iter().enumerate() {
        let active = state.active_category == category.id;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = if is_narrow {
            // First word only, to keep seven tabs on one row
            let short = category.name.split_whitespace().next().unwrap_or(category.name);
            format!("{} {}", short, category_count(category.id))
        } else {
            format!("{} ({})", category.name, category_count(category.id))
        };
        tabs = tabs.tab(label, style, CATEGORY_BASE + i as u16);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Categories ");
    let mut cs = click_state.borrow_mut();
    tabs.block(block).render(f, area, &mut cs);
}

fn render_counter(state: &InterestsState, f: &mut Frame, area: Rect, borders: Borders) {
    let status = if state.remaining() > 0 {
        Span::styled(
            format!("Select {} more", state.remaining()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("Great selection!", Style::default().fg(Color::Green))
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" Selected: {} interests — ", state.selected.len()),
            Style::default().fg(Color::Gray),
        ),
        status,
    ]);
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(
    state: &InterestsState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(" What interests you? ");
    let inner = block.inner(area);

    let filtered = state.filtered();
    let mut cl = ClickableList::new();

    if filtered.is_empty() {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            " No interests found matching your search.",
            Style::default().fg(Color::Gray),
        )));
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [C] ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Clear search", Style::default().fg(Color::White)),
            ]),
            CLEAR_SEARCH,
        );
    } else {
        for (i, interest) in filtered.iter().enumerate() {
            let selected = state.is_selected(interest.id);
            let at_cursor = state.cursor == i;

            let marker = if at_cursor { "▶" } else { " " };
            let check = if selected { "[x]" } else { "[ ]" };
            let check_style = if selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let name_style = if selected {
                Style::default().fg(Color::Green)
            } else if at_cursor {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(check.to_string(), check_style),
                Span::raw(format!(" {} ", interest.icon)),
                Span::styled(interest.name, name_style),
            ];
            if !is_narrow {
                spans.push(Span::styled(
                    format!("  {}", interest.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            cl.push_clickable(Line::from(spans), INTEREST_BASE + i as u16);
        }
    }

    // Keep the cursor row inside the viewport
    let visible = inner.height as usize;
    let scroll = if visible > 0 && state.cursor >= visible {
        (state.cursor + 1 - visible) as u16
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

fn render_continue(
    state: &InterestsState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let ready = state.can_continue();
    let style = if ready {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let key_style = if ready {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(" [Enter] ", key_style),
        Span::styled("Get My Recommendations →", style),
        Span::styled(
            "   ␣ toggle · ←/→ category · / search",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(if ready { Color::Yellow } else { Color::DarkGray }));
    f.render_widget(Paragraph::new(line).block(block), area);
    click_state.borrow_mut().add_click_target(area, CONTINUE);
}
