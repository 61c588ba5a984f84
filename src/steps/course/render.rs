//! Course detail rendering (read-only from step state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::data::{match_color, Course, CourseDetail};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::TabBar;

use super::actions::*;
use super::{CourseStep, DetailTab, Lookup};

pub fn render(step: &CourseStep, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    match &step.lookup {
        Lookup::Found(detail) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(6), // Header
                    Constraint::Length(3), // Tabs
                    Constraint::Min(8),    // Tab content
                ])
                .split(area);
            render_header(detail.summary, f, chunks[0], borders, is_narrow);
            render_tabs(step.tab, f, chunks[1], click_state);
            render_content(step, f, chunks[2], borders);
        }
        Lookup::NoDetail(course) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(6), // Header
                    Constraint::Min(8),    // Summary content
                ])
                .split(area);
            render_header(*course, f, chunks[0], borders, is_narrow);
            render_content(step, f, chunks[1], borders);
        }
        Lookup::Unknown(_) => render_content(step, f, area, borders),
    }
}

fn render_header(course: &'static Course, f: &mut Frame, area: Rect, borders: Borders, is_narrow: bool) {
    let bar_width = if is_narrow { 12 } else { 20 };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", course.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("★ {}% Match", course.match_percentage),
                Style::default()
                    .fg(match_color(course.match_percentage))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" ⏱ {} · ", course.duration),
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
        popularity_line(course.popularity, bar_width),
        Line::from(Span::styled(
            format!(" Skills: {}", course.key_skills.join(", ")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Course Details ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn popularity_line(popularity: u8, bar_width: usize) -> Line<'static> {
    let filled = ((popularity as f64 / 100.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar: String = "█".repeat(filled) + &"░".repeat(empty);

    Line::from(vec![
        Span::styled(" Popularity ", Style::default().fg(Color::Gray)),
        Span::styled(bar, Style::default().fg(Color::Magenta)),
        Span::styled(
            format!(" {}%", popularity),
            Style::default().fg(Color::White),
        ),
    ])
}

fn render_tabs(active: DetailTab, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut tabs = TabBar::new("│");
    for (i, tab) in DetailTab::ALL.iter().enumerate() {
        let style = if *tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs = tabs.tab(format!("{}. {}", i + 1, tab.label()), style, TAB_BASE + i as u16);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let mut cs = click_state.borrow_mut();
    tabs.block(block).render(f, area, &mut cs);
}

fn render_content(step: &CourseStep, f: &mut Frame, area: Rect, borders: Borders) {
    let lines = content_lines(&step.lookup, step.tab);
    let title = match &step.lookup {
        Lookup::Found(_) => format!(" {} ", step.tab.label()),
        Lookup::NoDetail(_) => " About this course ".to_string(),
        Lookup::Unknown(_) => " Course not found ".to_string(),
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(title);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((step.scroll, 0)),
        area,
    );
}

/// The scrollable body for the current view. Pure so the input handler can
/// clamp its scroll offset against the same content the frame will draw.
pub fn content_lines(lookup: &Lookup, tab: DetailTab) -> Vec<Line<'static>> {
    match lookup {
        Lookup::Found(detail) => detail_lines(*detail, tab),
        Lookup::NoDetail(course) => summary_lines(*course),
        Lookup::Unknown(id) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" No course exists with id \"{}\".", id),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " It may have been removed from the catalog. Press Esc to go",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                " back to your recommendations.",
                Style::default().fg(Color::Gray),
            )),
        ],
    }
}

fn detail_lines(detail: &'static CourseDetail, tab: DetailTab) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match tab {
        DetailTab::Overview => {
            lines.push(Line::from(Span::styled(
                detail.summary.description,
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            section(&mut lines, "Prerequisites");
            bullets(&mut lines, detail.prerequisites);
            lines.push(Line::from(""));
            section(&mut lines, "Future Scope");
            bullets(&mut lines, detail.future_scope);
            lines.push(Line::from(""));
            section(&mut lines, "Eligibility Criteria");
            badges(&mut lines, detail.summary.eligibility);
        }
        DetailTab::Curriculum => {
            for year in detail.curriculum {
                lines.push(Line::from(Span::styled(
                    format!(" Year {}", year.year),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                bullets(&mut lines, year.subjects);
                lines.push(Line::from(""));
            }
        }
        DetailTab::Careers => {
            for role in detail.job_roles {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", role.title),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(role.average_salary, Style::default().fg(Color::Yellow)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("   {}", role.description),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(Span::styled(
                    format!("   Top companies: {}", role.companies.join(", ")),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(""));
            }
        }
        DetailTab::Colleges => {
            for (i, college) in detail.summary.top_colleges.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {}. ", i + 1),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(*college, Style::default().fg(Color::White)),
                    Span::styled(
                        "  — Highly Recommended",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }
        DetailTab::Admission => {
            for (i, admission_step) in detail.admission_process.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {}. ", i + 1),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(*admission_step, Style::default().fg(Color::Gray)),
                ]));
            }
        }
    }
    lines
}

fn summary_lines(course: &'static Course) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            course.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    section(&mut lines, "Career Opportunities");
    badges(&mut lines, course.career_paths);
    lines.push(Line::from(""));
    section(&mut lines, "Top Colleges");
    bullets(&mut lines, course.top_colleges);
    lines.push(Line::from(""));
    section(&mut lines, "Eligibility Criteria");
    badges(&mut lines, course.eligibility);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " A full guide (curriculum, admission process, job roles) is not",
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(Span::styled(
        " available for this course yet — check back soon.",
        Style::default().fg(Color::Yellow),
    )));
    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
}

fn bullets(lines: &mut Vec<Line<'static>>, items: &'static [&'static str]) {
    for item in items {
        lines.push(Line::from(vec![
            Span::styled("   • ", Style::default().fg(Color::Cyan)),
            Span::styled(*item, Style::default().fg(Color::Gray)),
        ]));
    }
}

fn badges(lines: &mut Vec<Line<'static>>, items: &'static [&'static str]) {
    lines.push(Line::from(Span::styled(
        format!("   {}", items.join(" · ")),
        Style::default().fg(Color::White),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn found_content_varies_by_tab() {
        let lookup = Lookup::Found(data::find_detail("computer-science").unwrap());
        let overview = content_lines(&lookup, DetailTab::Overview);
        let curriculum = content_lines(&lookup, DetailTab::Curriculum);
        assert!(!overview.is_empty());
        // 4 years, each with 5 subjects plus heading and spacer
        assert_eq!(curriculum.len(), 4 * 7);
    }

    #[test]
    fn fallback_content_ignores_tab() {
        let lookup = Lookup::NoDetail(data::find_course("graphic-design").unwrap());
        let a = content_lines(&lookup, DetailTab::Overview);
        let b = content_lines(&lookup, DetailTab::Admission);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn unknown_names_the_missing_id() {
        let lookup = Lookup::Unknown("astrophysics".to_string());
        let lines = content_lines(&lookup, DetailTab::Overview);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(text.contains("astrophysics"));
    }
}
