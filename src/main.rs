mod data;
mod input;
mod steps;
mod store;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use steps::{enter, progress, Route, Step, Transition, BACK};
use store::WizardContext;

/// The whole application: current route, its active step, and the shared
/// wizard context. Navigation always flows through [`App::goto`] so the
/// stage guards in [`enter`] can never be bypassed.
struct App {
    route: Route,
    step: Box<dyn Step>,
    ctx: WizardContext,
}

impl App {
    fn new() -> Self {
        let ctx = WizardContext::load();
        let (route, step) = enter(Route::Home, &ctx);
        Self { route, step, ctx }
    }

    fn goto(&mut self, route: Route) {
        let (route, step) = enter(route, &self.ctx);
        self.route = route;
        self.step = step;
    }

    /// Where the help-bar back link leads from the current route.
    fn back_route(&self) -> Option<Route> {
        match self.route {
            Route::Home => None,
            Route::Onboarding => Some(Route::Home),
            Route::Interests => Some(Route::Onboarding),
            Route::Recommendations => Some(Route::Interests),
            Route::CourseDetail(_) => Some(Route::Recommendations),
        }
    }

    fn dispatch(&mut self, event: &InputEvent) {
        if *event == InputEvent::Click(BACK) {
            if let Some(route) = self.back_route() {
                self.goto(route);
            }
            return;
        }
        match self.step.handle_input(event, &mut self.ctx) {
            Transition::Idle => {}
            Transition::Consumed => self.ctx.persist(),
            Transition::Goto(route) => {
                self.ctx.persist();
                self.goto(route);
            }
        }
    }
}

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    pixel_to_cell(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
        cs.terminal_cols,
        cs.terminal_rows,
    )
}

fn translate_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Esc),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let action = cs.hit_test(mouse_event.col, mouse_event.row);
            drop(cs);

            if let Some(id) = action {
                app.borrow_mut().dispatch(&InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = translate_key(key_event.code) {
                app.borrow_mut().dispatch(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let app = app.borrow();
            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            // Main layout: title, content, help
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, &app.route, chunks[0]);
            app.step.render(f, chunks[1], &click_state);
            render_help(f, &app, chunks[2], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut ratzilla::ratatui::Frame, route: &Route, area: Rect) {
    let line = match progress(route) {
        Some((step, total)) => {
            let filled = (step as usize * 12) / total as usize;
            let bar: String = "█".repeat(filled) + &"░".repeat(12 - filled);
            Line::from(vec![
                Span::styled(
                    "🎯 CareerPath",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Step {} of {}  ", step, total),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
            ])
        }
        None => Line::from(Span::styled(
            "🎯 CareerPath — find your perfect career path",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_help(
    f: &mut ratzilla::ratatui::Frame,
    app: &App,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let back_label = match app.route {
        Route::Home => "",
        Route::Onboarding => "[←] Back to Home",
        Route::Interests => "[←] Edit Profile",
        Route::Recommendations => "[←] Modify Interests",
        Route::CourseDetail(_) => "[←] Back to Recommendations",
    };

    let mut spans = Vec::new();
    if !back_label.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", back_label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("· ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(
        "tap or use the keyboard",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);

    if !back_label.is_empty() {
        click_state.borrow_mut().add_click_target(area, BACK);
    }
}
