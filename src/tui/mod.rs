// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Two screens: the open screen (path prompt, loading and error state) and the deck screen, which
//! shows exactly one slide at a time. Key, wheel and click-drag input all flow through one
//! [`InputRouter`] into the [`Navigator`].

use std::{
    error::Error,
    io,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::analyze::AnalysisProvider;
use crate::config::Settings;
use crate::deck::{build_slides, Edge, InputEvent, InputRouter, Navigator, Transition};
use crate::format::NumberLocale;
use crate::render::{render_slide_unicode, MIN_CARD_WIDTH};

mod jobs;
mod theme;

use jobs::{AnalysisJobs, JobOutcome};
use theme::TuiTheme;

const FOOTER_BRAND: &str = "recap";
const NAV_HINT: &str = "Scroll / Arrow Keys / Drag";
const MAX_CARD_WIDTH: u16 = 72;
const TOAST_TTL: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SELECT_FILE_FIRST: &str = "Please select a file first.";

/// Everything the interactive shell needs from the command line and environment.
pub struct RunOptions {
    pub provider: Arc<dyn AnalysisProvider>,
    pub settings: Settings,
    /// Analysed right away when given.
    pub file: Option<PathBuf>,
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(options: RunOptions) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(options.provider, &options.settings, theme);
    if let Some(path) = options.file {
        app.start_analysis(path);
    }

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        app.poll_analysis();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(&event);
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    frame.render_widget(Block::default().style(app.theme.base_style()), area);
    match app.screen {
        Screen::Open => render_open_screen(frame, app, main_area),
        Screen::Deck => render_deck(frame, app, main_area),
    }

    let toast_suffix = app.live_toast().map(|message| format!(" | {message}")).unwrap_or_default();
    let status = Paragraph::new(footer_line(app, &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line(&app.theme)).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

// Footer, help overlay and screen rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Open,
    Deck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenStatus {
    Ready,
    Error(String),
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    screen: Screen,
    navigator: Navigator,
    input: InputRouter,
    locale: NumberLocale,
    theme: TuiTheme,
    jobs: AnalysisJobs,
    path_input: String,
    open_status: OpenStatus,
    /// Set once any analysis has produced a deck, even an empty one.
    deck_loaded: bool,
    show_help: bool,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(provider: Arc<dyn AnalysisProvider>, settings: &Settings, theme: TuiTheme) -> Self {
        Self {
            screen: Screen::Open,
            navigator: Navigator::new(),
            input: InputRouter::new(settings.swipe_threshold),
            locale: settings.locale,
            theme,
            jobs: AnalysisJobs::new(provider),
            path_input: String::new(),
            open_status: OpenStatus::Ready,
            deck_loaded: false,
            show_help: false,
            toast: None,
            should_quit: false,
        }
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.should_quit = true;
                return;
            }
            if self.show_help {
                self.handle_help_key(key.code);
                return;
            }
        } else if self.show_help {
            return;
        }

        match self.screen {
            Screen::Open => {
                if let Event::Key(key) = event {
                    self.handle_open_key(*key);
                }
            }
            Screen::Deck => self.handle_deck_event(event),
        }
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_open_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_path(),
            KeyCode::Esc if self.deck_loaded => self.screen = Screen::Deck,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.path_input.clear();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.path_input.push(ch);
            }
            _ => {}
        }
    }

    fn handle_deck_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                KeyCode::Char('o') => {
                    self.screen = Screen::Open;
                    return;
                }
                _ => {}
            }
        }

        let Some(input) = InputEvent::from_crossterm(event) else {
            return;
        };
        if let Some(intent) = self.input.route(input) {
            let transition = self.navigator.apply(intent);
            self.on_transition(transition);
        }
    }

    fn on_transition(&mut self, transition: Transition) {
        match transition.at_edge {
            Some(Edge::First) => self.set_toast("First slide"),
            Some(Edge::Last) => self.set_toast("Last slide"),
            None => {}
        }
    }

    fn submit_path(&mut self) {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            self.open_status = OpenStatus::Error(SELECT_FILE_FIRST.to_owned());
            return;
        }
        let path = PathBuf::from(trimmed);
        self.start_analysis(path);
    }

    fn start_analysis(&mut self, path: PathBuf) {
        if self.path_input.is_empty() {
            self.path_input = path.display().to_string();
        }
        self.jobs.start(path);
        self.open_status = OpenStatus::Ready;
        self.screen = Screen::Open;
    }

    fn poll_analysis(&mut self) {
        if let Some(outcome) = self.jobs.poll() {
            self.finish_analysis(outcome);
        }
    }

    fn finish_analysis(&mut self, outcome: JobOutcome) {
        let JobOutcome { id, path, result } = outcome;
        match result {
            Ok(result) => {
                let slides = build_slides(&result);
                let count = slides.len();
                let transition = self.navigator.load(slides);
                self.on_transition(transition);
                tracing::info!(job = id, path = %path.display(), slides = count, "analysis finished");
                self.deck_loaded = true;
                self.open_status = OpenStatus::Ready;
                self.screen = Screen::Deck;
                self.set_toast(match count {
                    1 => "Loaded 1 slide".to_owned(),
                    n => format!("Loaded {n} slides"),
                });
            }
            Err(err) => {
                tracing::warn!(job = id, path = %path.display(), error = %err, "analysis failed");
                self.open_status = OpenStatus::Error(format!("Error processing file: {err}"));
                self.screen = Screen::Open;
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }

    fn live_toast(&mut self) -> Option<&str> {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }

    /// The active slide as card text sized for `width` columns.
    fn card_text(&self, width: u16) -> Option<Result<String, String>> {
        let slide = self.navigator.current_slide()?;
        let width = usize::from(width.min(MAX_CARD_WIDTH));
        Some(render_slide_unicode(slide, &self.locale, width).map_err(|err| err.to_string()))
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{path::PathBuf, sync::Arc, time::Duration};

    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::{backend::TestBackend, Terminal};

    use super::{draw, App, OpenStatus, Screen, TuiTheme};
    use crate::analyze::AnalysisProvider;
    use crate::config::Settings;

    /// Drives an [`App`] without a terminal.
    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(provider: Arc<dyn AnalysisProvider>, settings: &Settings) -> Self {
            Self { app: App::new(provider, settings, TuiTheme::default()) }
        }

        pub(crate) fn press(&mut self, code: KeyCode) {
            self.app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        }

        pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
            self.app.handle_event(&Event::Key(KeyEvent::new(code, modifiers)));
        }

        pub(crate) fn type_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.press(KeyCode::Char(ch));
            }
        }

        pub(crate) fn mouse(&mut self, kind: MouseEventKind, row: u16) {
            self.app.handle_event(&Event::Mouse(MouseEvent {
                kind,
                column: 10,
                row,
                modifiers: KeyModifiers::NONE,
            }));
        }

        pub(crate) fn drag(&mut self, from_row: u16, to_row: u16) {
            self.mouse(MouseEventKind::Down(MouseButton::Left), from_row);
            self.mouse(MouseEventKind::Drag(MouseButton::Left), (from_row + to_row) / 2);
            self.mouse(MouseEventKind::Up(MouseButton::Left), to_row);
        }

        pub(crate) fn open(&mut self, path: impl Into<PathBuf>) {
            self.app.start_analysis(path.into());
        }

        /// Blocks until the pending analysis is delivered and applied.
        pub(crate) fn settle(&mut self) -> bool {
            match self.app.jobs.wait(Duration::from_secs(5)) {
                Some(outcome) => {
                    self.app.finish_analysis(outcome);
                    true
                }
                None => false,
            }
        }

        pub(crate) fn poll(&mut self) {
            self.app.poll_analysis();
        }

        pub(crate) fn current_index(&self) -> Option<usize> {
            self.app.navigator.current_index()
        }

        pub(crate) fn slide_count(&self) -> usize {
            self.app.navigator.len()
        }

        pub(crate) fn on_deck_screen(&self) -> bool {
            self.app.screen == Screen::Deck
        }

        pub(crate) fn path_input(&self) -> &str {
            &self.app.path_input
        }

        pub(crate) fn open_error(&self) -> Option<&str> {
            match &self.app.open_status {
                OpenStatus::Error(message) => Some(message),
                _ => None,
            }
        }

        pub(crate) fn is_loading(&self) -> bool {
            self.app.jobs.is_pending()
        }

        pub(crate) fn help_visible(&self) -> bool {
            self.app.show_help
        }

        pub(crate) fn should_quit(&self) -> bool {
            self.app.should_quit
        }

        pub(crate) fn toast(&mut self) -> Option<String> {
            self.app.live_toast().map(str::to_owned)
        }

        /// Draws one frame and returns the buffer as plain lines.
        pub(crate) fn render(&mut self, width: u16, height: u16) -> Vec<String> {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
            terminal.draw(|frame| draw(frame, &mut self.app)).expect("draw");
            let buffer = terminal.backend().buffer();
            (0..height)
                .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_owned()).collect())
                .collect()
        }
    }
}
