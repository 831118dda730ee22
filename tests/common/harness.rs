//! End-to-end test harness: drives the full application against a
//! ratatui `TestBackend` and asserts on the rendered screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use termfolio::app::{App, AppEvent};
use termfolio::content::ContentDocument;
use termfolio::view;

/// A small but complete content document covering all entry shapes.
pub fn sample_document() -> ContentDocument {
    serde_json::from_str(
        r######"{
            "meta": {"title": "Jordan Vale — Developer", "description": "Portfolio"},
            "theme": {"color": "green", "crtCurvature": true, "scanlines": false, "flicker": 0},
            "prompt": "guest@vale:~$",
            "banner": {"asciiArt": "#####", "subtitle": "welcome aboard"},
            "commands": {
                "about": {"title": "About Me", "content": "I build terminals."},
                "skills": {"title": "Skills", "list": [{"name": "Go", "level": 80}]},
                "projects": [
                    {"name": "redshift", "tagline": "a cache", "url": "https://example.com", "tech": ["Rust"]}
                ],
                "contact": {"email": "jordan@example.com", "links": {"github": "https://github.com/jvale"}}
            }
        }"######,
    )
    .unwrap()
}

pub struct AppTestHarness {
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl AppTestHarness {
    /// Harness with the sample document already adopted (no disk I/O).
    pub fn new(width: u16, height: u16) -> Self {
        // A path that cannot be written: tests built on this harness never
        // persist to disk.
        let mut app = App::new(PathBuf::from("/nonexistent/termfolio-content.json"), true);
        app.handle_event(AppEvent::ContentLoaded(sample_document()));
        Self::with_app(app, width, height)
    }

    /// Harness around a caller-built `App` (e.g. one bootstrapped from a
    /// temp content file).
    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self { app, terminal }
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app
            .handle_event(AppEvent::Key(KeyEvent::new(code, modifiers)));
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send_key(code, KeyModifiers::NONE);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Type a line and press Enter.
    pub fn submit(&mut self, line: &str) {
        self.type_text(line);
        self.press(KeyCode::Enter);
    }

    /// Run animation ticks until every transcript line is fully revealed.
    pub fn finish_animations(&mut self) {
        while self.app.transcript.is_animating() {
            self.app.handle_event(AppEvent::Tick);
        }
    }

    pub fn render(&mut self) {
        let app = &self.app;
        self.terminal
            .draw(|frame| view::draw(frame, app))
            .unwrap();
    }

    /// The rendered screen as newline-joined rows.
    pub fn screen_to_string(&mut self) -> String {
        self.render();
        let buffer = self.terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let pos = buffer.index_of(x, y);
                screen.push_str(buffer.content[pos].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    pub fn assert_screen_contains(&mut self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "screen does not contain {needle:?}:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&mut self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(needle),
            "screen unexpectedly contains {needle:?}:\n{screen}"
        );
    }
}
