//! Application state and event dispatch.
//!
//! `App` owns everything the terminal session needs: the content
//! document, the command registry derived from it, history, transcript,
//! the input line and the settings overlay. All outside stimulus arrives
//! as an `AppEvent` through `handle_event`, so the whole state machine
//! runs without a terminal attached.

use crate::content::ContentDocument;
use crate::history::{HistoryBuffer, HistoryDirection};
use crate::input::InputState;
use crate::interpreter::{self, RenderAction};
use crate::registry::CommandRegistry;
use crate::schema;
use crate::theme::Theme;
use crate::transcript::{LineStyle, Transcript};
use crate::view::settings::{SettingsOutcome, SettingsState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Prompt shown when no content document is loaded.
pub const DEFAULT_PROMPT: &str = "guest@portfolio:~$";

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// One animation tick; advances every revealing transcript line.
    Tick,
    ContentLoaded(ContentDocument),
    ContentFailed(String),
    /// The settings editor produced a full replacement document.
    SettingsSaved(ContentDocument),
    Quit,
}

pub struct App {
    pub document: Option<ContentDocument>,
    pub registry: CommandRegistry,
    pub history: HistoryBuffer,
    pub transcript: Transcript,
    pub input: InputState,
    /// Open settings overlay, if any.
    pub settings: Option<SettingsState>,
    /// schema.org Person value, regenerated on every document adoption.
    pub person_schema: Option<serde_json::Value>,
    /// Echo submitted lines into the transcript.
    pub echo_input: bool,
    pub tick: u64,
    pub should_quit: bool,
    theme: Theme,
    content_path: PathBuf,
}

impl App {
    pub fn new(content_path: PathBuf, echo_input: bool) -> Self {
        Self {
            document: None,
            registry: CommandRegistry::from_document(None),
            history: HistoryBuffer::new(),
            transcript: Transcript::new(),
            input: InputState::new(),
            settings: None,
            person_schema: None,
            echo_input,
            tick: 0,
            should_quit: false,
            theme: Theme::default(),
            content_path,
        }
    }

    /// Load the content document from disk and feed the outcome back
    /// through the event dispatch.
    pub fn bootstrap(&mut self) {
        match ContentDocument::load_from_file(&self.content_path) {
            Ok(document) => self.handle_event(AppEvent::ContentLoaded(document)),
            Err(err) => self.handle_event(AppEvent::ContentFailed(err.to_string())),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn title(&self) -> &str {
        self.document
            .as_ref()
            .map(|doc| doc.meta.title.as_str())
            .unwrap_or("termfolio")
    }

    pub fn prompt(&self) -> &str {
        self.document
            .as_ref()
            .map(|doc| doc.prompt.as_str())
            .unwrap_or(DEFAULT_PROMPT)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.transcript.tick();
            }
            AppEvent::ContentLoaded(document) => {
                tracing::info!(
                    commands = document.commands.len(),
                    "content document loaded"
                );
                self.adopt_document(document);
                self.display_banner();
            }
            AppEvent::ContentFailed(message) => {
                tracing::error!(%message, "failed to load content document");
                self.transcript.push_text(
                    format!("Error loading content: {message}"),
                    LineStyle::Error,
                );
            }
            AppEvent::SettingsSaved(document) => {
                self.adopt_document(document);
                self.transcript.clear();
                self.display_banner();
                self.transcript
                    .push_text_instant("Settings saved successfully!", LineStyle::Success);
                self.persist_document();
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }

    /// Replace the document wholesale: theme, registry and structured
    /// metadata all derive from the new one.
    fn adopt_document(&mut self, document: ContentDocument) {
        self.theme = document.theme.clone();
        self.registry = CommandRegistry::from_document(Some(&document));
        self.person_schema = Some(schema::person_schema(&document));
        self.document = Some(document);
    }

    fn persist_document(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        if let Err(err) = document.save_to_file(&self.content_path) {
            tracing::error!(%err, "failed to persist settings");
            self.transcript
                .push_text("Error saving settings. Please try again.", LineStyle::Error);
        } else {
            tracing::info!(path = %self.content_path.display(), "settings persisted");
        }
    }

    fn display_banner(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        let banner = document.banner.clone();

        for line in banner.ascii_art.lines() {
            self.transcript.push_text(line, LineStyle::AsciiArt);
        }
        if !banner.subtitle.is_empty() {
            self.transcript.push_text(banner.subtitle, LineStyle::Subtitle);
        }
        self.transcript.push_blank();
        self.transcript
            .push_text("Type 'help' for available commands.", LineStyle::Plain);
        self.transcript.push_blank();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The overlay captures all keys while open.
        if let Some(settings_state) = self.settings.as_mut() {
            match settings_state.handle_key(key) {
                SettingsOutcome::Pending => {}
                SettingsOutcome::Cancelled => self.settings = None,
                SettingsOutcome::Saved(document) => {
                    self.settings = None;
                    self.handle_event(AppEvent::SettingsSaved(document));
                }
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.complete_input(),
            KeyCode::Up => self.navigate_history(HistoryDirection::Older),
            KeyCode::Down => self.navigate_history(HistoryDirection::Newer),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }

    fn complete_input(&mut self) {
        let prefix = self.input.text().trim().to_string();
        let matches: Vec<String> = self
            .registry
            .complete(&prefix)
            .into_iter()
            .map(str::to_string)
            .collect();

        match matches.len() {
            0 => {}
            1 => self.input.set_text(matches.into_iter().next().unwrap_or_default()),
            _ => {
                self.transcript.push_blank();
                self.transcript.push_text(matches.join("  "), LineStyle::Plain);
                self.transcript.push_blank();
            }
        }
    }

    fn navigate_history(&mut self, direction: HistoryDirection) {
        if let Some((cursor, text)) = self
            .history
            .navigate(direction, self.input.history_cursor)
        {
            self.input.history_cursor = cursor;
            self.input.set_text(text);
        }
    }

    fn submit(&mut self) {
        let raw = self.input.take();
        let line = raw.trim().to_string();
        if line.is_empty() {
            return;
        }

        if self.echo_input {
            let prompt = self.prompt().to_string();
            self.transcript
                .push_text_instant(format!("{prompt} {line}"), LineStyle::Echo);
        }
        self.history.push(&line);

        tracing::debug!(command = %line, "executing");
        let actions = interpreter::execute(&line, &self.registry, self.document.as_ref());
        self.apply_actions(actions);
    }

    fn apply_actions(&mut self, actions: Vec<RenderAction>) {
        for action in actions {
            match action {
                RenderAction::Print { text, style } => self.transcript.push_text(text, style),
                RenderAction::SkillBar { name, level } => {
                    self.transcript.push_skill_bar(name, level)
                }
                RenderAction::Link { platform, url } => self.transcript.push_link(platform, url),
                RenderAction::Clear => self.transcript.clear(),
                RenderAction::OpenSettings => match &self.document {
                    Some(document) => self.settings = Some(SettingsState::new(document)),
                    None => self
                        .transcript
                        .push_text("No content document loaded.", LineStyle::Plain),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> ContentDocument {
        serde_json::from_str(
            r#"{
                "meta": {"title": "Jordan Vale — Developer", "description": "d"},
                "theme": {"color": "amber", "crtCurvature": true, "scanlines": true, "flicker": 0},
                "prompt": "guest@vale:~$",
                "banner": {"asciiArt": "==\n==", "subtitle": "welcome"},
                "commands": {
                    "about": {"title": "About", "content": "I build terminals."},
                    "skills": {"title": "Skills", "list": [{"name": "Go", "level": 80}]}
                }
            }"#,
        )
        .unwrap()
    }

    fn app_with_content() -> App {
        let mut app = App::new(PathBuf::from("/nonexistent/unused-content.json"), true);
        app.handle_event(AppEvent::ContentLoaded(sample_document()));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn finish_animations(app: &mut App) {
        while app.transcript.is_animating() {
            app.handle_event(AppEvent::Tick);
        }
    }

    #[test]
    fn test_banner_rendered_on_load() {
        let mut app = app_with_content();
        finish_animations(&mut app);
        let lines = app.transcript.text_lines();
        assert_eq!(lines[0], "==");
        assert_eq!(lines[1], "==");
        assert_eq!(lines[2], "welcome");
        assert!(lines.contains(&"Type 'help' for available commands."));
    }

    #[test]
    fn test_theme_adopted_from_document() {
        let app = app_with_content();
        assert_eq!(app.theme().color, crate::theme::ThemeColor::Amber);
        assert_eq!(app.prompt(), "guest@vale:~$");
        assert_eq!(app.title(), "Jordan Vale — Developer");
    }

    #[test]
    fn test_submitted_line_is_echoed_with_prompt() {
        let mut app = app_with_content();
        type_line(&mut app, "about");
        assert!(app
            .transcript
            .text_lines()
            .contains(&"guest@vale:~$ about"));
    }

    #[test]
    fn test_no_echo_variant() {
        let mut app = App::new(PathBuf::from("/nonexistent/unused-content.json"), false);
        app.handle_event(AppEvent::ContentLoaded(sample_document()));
        type_line(&mut app, "about");
        assert!(!app
            .transcript
            .text_lines()
            .iter()
            .any(|line| line.starts_with("guest@vale:~$")));
    }

    #[test]
    fn test_upper_case_input_dispatches_lower_cased() {
        let mut app = app_with_content();
        type_line(&mut app, "HELP");
        let lines = app.transcript.text_lines();
        assert!(lines.contains(&"Available commands:"));
        assert!(lines.contains(&"  about"));
        assert!(lines.contains(&"  skills"));
    }

    #[test]
    fn test_unknown_command_reports_not_found() {
        let mut app = app_with_content();
        type_line(&mut app, "xyz");
        let lines = app.transcript.text_lines();
        assert!(lines.contains(&"Command not found: xyz"));
        assert!(lines.contains(&"Type 'help' for available commands."));
    }

    #[test]
    fn test_empty_submit_is_a_noop() {
        let mut app = app_with_content();
        let before = app.transcript.len();
        press(&mut app, KeyCode::Enter);
        type_line(&mut app, "   ");
        assert_eq!(app.transcript.len(), before);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_clear_wipes_transcript_even_mid_animation() {
        let mut app = app_with_content();
        type_line(&mut app, "about");
        assert!(app.transcript.is_animating());
        type_line(&mut app, "clear");
        // Only lines appended after the clear (none) remain; the next
        // tick must be harmless.
        assert!(app.transcript.is_empty());
        app.handle_event(AppEvent::Tick);
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_tab_completes_single_match() {
        let mut app = app_with_content();
        for c in "ab".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input.text(), "about");
    }

    #[test]
    fn test_tab_lists_multiple_matches_without_touching_input() {
        let mut app = app_with_content();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input.text(), "s");
        finish_animations(&mut app);
        assert!(app.transcript.text_lines().contains(&"skills  settings"));
    }

    #[test]
    fn test_tab_on_empty_input_lists_everything() {
        let mut app = app_with_content();
        press(&mut app, KeyCode::Tab);
        finish_animations(&mut app);
        assert!(app
            .transcript
            .text_lines()
            .contains(&"about  skills  help  clear  settings"));
    }

    #[test]
    fn test_tab_with_no_match_changes_nothing() {
        let mut app = app_with_content();
        let lines_before = app.transcript.len();
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input.text(), "z");
        assert_eq!(app.transcript.len(), lines_before);
    }

    #[test]
    fn test_history_navigation_keys() {
        let mut app = app_with_content();
        type_line(&mut app, "about");
        type_line(&mut app, "skills");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.text(), "skills");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.text(), "about");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input.text(), "about");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.input.text(), "skills");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input.text(), "");
    }

    #[test]
    fn test_settings_open_and_cancel() {
        let mut app = app_with_content();
        type_line(&mut app, "settings");
        assert!(app.settings.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.settings.is_none());
    }

    #[test]
    fn test_settings_unavailable_without_document() {
        let mut app = App::new(PathBuf::from("/nonexistent/content.json"), true);
        app.bootstrap();
        finish_animations(&mut app);
        assert!(app
            .transcript
            .text_lines()
            .iter()
            .any(|line| line.starts_with("Error loading content:")));

        type_line(&mut app, "settings");
        assert!(app.settings.is_none());
        finish_animations(&mut app);
        assert!(app
            .transcript
            .text_lines()
            .contains(&"No content document loaded."));
    }

    #[test]
    fn test_builtins_work_without_document() {
        let mut app = App::new(PathBuf::from("/nonexistent/content.json"), true);
        app.bootstrap();
        type_line(&mut app, "help");
        finish_animations(&mut app);
        assert!(app
            .transcript
            .text_lines()
            .contains(&"  clear    - Clear the terminal screen"));
    }

    #[test]
    fn test_settings_save_round_trip_preserves_rendered_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("content.json");
        sample_document().save_to_file(&path).unwrap();

        let mut app = App::new(path.clone(), true);
        app.bootstrap();
        type_line(&mut app, "clear");
        type_line(&mut app, "about");
        finish_animations(&mut app);
        let before: Vec<String> = app
            .transcript
            .text_lines()
            .iter()
            .map(|s| s.to_string())
            .collect();

        // Open settings and save without edits: banner re-renders plus
        // the success line, then the same command renders identically.
        type_line(&mut app, "clear");
        type_line(&mut app, "settings");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app
            .transcript
            .text_lines()
            .contains(&"Settings saved successfully!"));

        type_line(&mut app, "clear");
        type_line(&mut app, "about");
        finish_animations(&mut app);
        let after: Vec<String> = app
            .transcript
            .text_lines()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(before, after);

        // And the no-op save persisted an equivalent document.
        let reloaded = ContentDocument::load_from_file(&path).unwrap();
        assert_eq!(reloaded.prompt, "guest@vale:~$");
    }

    #[test]
    fn test_settings_save_adopts_new_prompt() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("content.json");
        sample_document().save_to_file(&path).unwrap();

        let mut app = App::new(path.clone(), true);
        app.bootstrap();
        type_line(&mut app, "settings");

        // Focus the prompt field, append a character, save.
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('>'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.prompt(), "guest@vale:~$>");
        let reloaded = ContentDocument::load_from_file(&path).unwrap();
        assert_eq!(reloaded.prompt, "guest@vale:~$>");
    }

    #[test]
    fn test_persist_failure_surfaces_error_line() {
        let mut app = App::new(PathBuf::from("/nonexistent/dir/content.json"), true);
        app.handle_event(AppEvent::ContentLoaded(sample_document()));
        app.handle_event(AppEvent::SettingsSaved(sample_document()));
        assert!(app
            .transcript
            .text_lines()
            .contains(&"Error saving settings. Please try again."));
        // The adopted in-memory document stays.
        assert!(app.document.is_some());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app_with_content();
        app.handle_event(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_person_schema_regenerated_on_adoption() {
        let mut app = app_with_content();
        let first = app.person_schema.clone().unwrap();
        assert_eq!(first["name"], "Jordan Vale");

        let mut updated = sample_document();
        updated.meta.title = "Robin Hale — Engineer".to_string();
        app.handle_event(AppEvent::SettingsSaved(updated));
        assert_eq!(app.person_schema.clone().unwrap()["name"], "Robin Hale");
    }
}
