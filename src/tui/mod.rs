//! Ratatui-based terminal UI.
//!
//! The TUI provides a form for the birth details (name, date, time, city,
//! state), generates a report through the same pipeline as `kundali report`,
//! and renders the diamond chart next to the report text. Errors surface in
//! the status line instead of exiting.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::RunOutput;
use crate::cli::BirthArgs;
use crate::domain::ReportConfig;
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::KundliPlottersChart;

/// Start the TUI.
pub fn run(args: BirthArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::io(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Editable form fields, in display order.
const FIELDS: [&str; 5] = ["Name", "Date", "Time", "City", "State"];

struct App {
    name: String,
    date: String,
    time: String,
    city: String,
    state: String,

    /// Explicit coordinates from the CLI; when set, generation skips the
    /// geocoder entirely.
    latitude: Option<f64>,
    longitude: Option<f64>,

    selected_field: usize,
    editing: bool,
    edit_buffer: String,
    report_scroll: u16,
    status: String,
    run: Option<RunOutput>,
}

impl App {
    fn new(args: BirthArgs) -> Self {
        Self {
            name: args.name,
            date: args.date,
            time: args.time,
            city: args.city,
            state: args.state,
            latitude: args.lat,
            longitude: args.lon,
            selected_field: 0,
            editing: false,
            edit_buffer: String::new(),
            report_scroll: 0,
            status: "Fill the form, then press g to generate.".to_string(),
            run: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::io(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::io(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing {
            self.handle_field_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELDS.len() - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Enter => {
                self.edit_buffer = self.field_value(self.selected_field).to_string();
                self.editing = true;
                self.status = format!(
                    "Editing {}. Enter to apply, Esc to cancel.",
                    FIELDS[self.selected_field]
                );
            }
            KeyCode::Char('g') => self.generate(),
            KeyCode::PageUp => {
                self.report_scroll = self.report_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.report_scroll = self.report_scroll.saturating_add(5);
            }
            _ => {}
        }

        false
    }

    fn handle_field_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                let value = self.edit_buffer.trim().to_string();
                self.set_field_value(self.selected_field, value);
                self.editing = false;
                self.status = format!("{} updated.", FIELDS[self.selected_field]);
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    fn field_value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.date,
            2 => &self.time,
            3 => &self.city,
            _ => &self.state,
        }
    }

    fn set_field_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.date = value,
            2 => self.time = value,
            3 => self.city = value,
            _ => self.state = value,
        }
    }

    fn generate(&mut self) {
        let config = ReportConfig {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            export_json: None,
        };

        self.status = "Generating report...".to_string();
        match crate::app::pipeline::generate(&config) {
            Ok(run) => {
                self.status = format!(
                    "Report for {}, {} (Lat: {}, Lon: {}).",
                    run.report.city, run.report.state, run.report.latitude, run.report.longitude
                );
                self.report_scroll = 0;
                self.run = Some(run);
            }
            Err(err) => {
                self.status = format!("Error: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("kundali", Style::default().fg(Color::Cyan)),
            Span::raw(" — Vedic natal chart generator"),
        ]);
        let p = Paragraph::new(Text::from(vec![line])).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_form(frame, left[0]);
        self.draw_report(frame, left[1]);
        self.draw_chart(frame, columns[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::with_capacity(FIELDS.len());
        for (i, label) in FIELDS.iter().enumerate() {
            let value = if self.editing && i == self.selected_field {
                &self.edit_buffer
            } else {
                self.field_value(i)
            };
            items.push(ListItem::new(format!("{label}: {value}")));
        }

        let list = List::new(items)
            .block(Block::default().title("Birth Details").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new("Editing…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(1),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_report(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Report").borders(Borders::ALL);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No report yet.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let text = crate::report::format_report(&run.report);
        let p = Paragraph::new(text)
            .block(block)
            .scroll((self.report_scroll, 0));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Kundli Chart").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Press g to generate.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let widget = KundliPlottersChart { inputs: &run.chart };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Enter edit  g generate  PgUp/PgDn scroll  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_fields() -> App {
        App::new(BirthArgs {
            name: "Asha".to_string(),
            date: "2000-01-01".to_string(),
            time: "12:00:00".to_string(),
            city: "New Delhi".to_string(),
            state: "Delhi".to_string(),
            lat: Some(28.6139),
            lon: Some(77.2090),
            export_json: None,
            width: 64,
            height: 32,
            no_chart: false,
        })
    }

    #[test]
    fn field_edit_applies_on_enter() {
        let mut app = app_with_fields();
        app.selected_field = 3;
        app.handle_key(KeyCode::Enter);
        assert!(app.editing);

        for _ in 0.."New Delhi".len() {
            app.handle_field_edit(KeyCode::Backspace);
        }
        for c in "Mumbai".chars() {
            app.handle_field_edit(KeyCode::Char(c));
        }
        app.handle_field_edit(KeyCode::Enter);

        assert!(!app.editing);
        assert_eq!(app.city, "Mumbai");
    }

    #[test]
    fn field_edit_cancels_on_escape() {
        let mut app = app_with_fields();
        app.selected_field = 0;
        app.handle_key(KeyCode::Enter);
        app.handle_field_edit(KeyCode::Char('X'));
        app.handle_field_edit(KeyCode::Esc);
        assert_eq!(app.name, "Asha");
    }

    #[test]
    fn generate_with_coordinates_populates_run() {
        // Explicit lat/lon means no geocoder (and no network) is involved.
        let mut app = app_with_fields();
        app.generate();
        assert!(app.run.is_some(), "status: {}", app.status);
    }

    #[test]
    fn generate_with_bad_date_sets_error_status() {
        let mut app = app_with_fields();
        app.date = "2000-13-40".to_string();
        app.generate();
        assert!(app.run.is_none());
        assert!(app.status.starts_with("Error:"), "status: {}", app.status);
    }

    #[test]
    fn quit_key_exits_loop() {
        let mut app = app_with_fields();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Down));
    }
}
