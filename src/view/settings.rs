//! The settings editor overlay.
//!
//! A modal form over a snapshot of the content document: theme color,
//! CRT effects, prompt and banner subtitle. The live document is never
//! touched; Save produces a full replacement document for the
//! application to adopt, Cancel discards the snapshot.

use crate::content::ContentDocument;
use crate::theme::{Theme, ThemeColor};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

const FLICKER_STEP: f64 = 0.05;

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Items,
    Footer,
}

#[derive(Debug, Clone)]
pub enum SettingControl {
    Dropdown { options: Vec<String>, selected: usize },
    Toggle { checked: bool },
    Slider { value: f64 },
    Text { value: String },
}

#[derive(Debug, Clone)]
pub struct SettingItem {
    pub label: &'static str,
    pub control: SettingControl,
}

/// What a key press did to the overlay.
#[derive(Debug, Clone)]
pub enum SettingsOutcome {
    /// Still open.
    Pending,
    /// Closed without changes.
    Cancelled,
    /// Closed with a full replacement document to adopt.
    Saved(ContentDocument),
}

#[derive(Debug, Clone)]
pub struct SettingsState {
    items: Vec<SettingItem>,
    selected: usize,
    focus: FocusArea,
    /// 0 = Save, 1 = Cancel
    footer_button: usize,
    /// Text-edit mode for the focused text item.
    editing: bool,
    /// Deep copy of the document taken when the editor opened.
    snapshot: ContentDocument,
}

impl SettingsState {
    pub fn new(document: &ContentDocument) -> Self {
        let snapshot = document.clone();
        let theme = &snapshot.theme;

        let mut options: Vec<String> = ["green", "amber", "white"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let selected = match &theme.color {
            ThemeColor::Green => 0,
            ThemeColor::Amber => 1,
            ThemeColor::White => 2,
            ThemeColor::Custom(value) => {
                options.push(value.clone());
                3
            }
        };

        let items = vec![
            SettingItem {
                label: "Color Theme",
                control: SettingControl::Dropdown { options, selected },
            },
            SettingItem {
                label: "CRT Curvature",
                control: SettingControl::Toggle {
                    checked: theme.crt_curvature,
                },
            },
            SettingItem {
                label: "Scanlines",
                control: SettingControl::Toggle {
                    checked: theme.scanlines,
                },
            },
            SettingItem {
                label: "Flicker Intensity",
                control: SettingControl::Slider {
                    value: theme.flicker,
                },
            },
            SettingItem {
                label: "Command Prompt",
                control: SettingControl::Text {
                    value: snapshot.prompt.clone(),
                },
            },
            SettingItem {
                label: "Banner Subtitle",
                control: SettingControl::Text {
                    value: snapshot.banner.subtitle.clone(),
                },
            },
        ];

        Self {
            items,
            selected: 0,
            focus: FocusArea::Items,
            footer_button: 0,
            editing: false,
            snapshot,
        }
    }

    pub fn items(&self) -> &[SettingItem] {
        &self.items
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SettingsOutcome {
        if self.editing {
            self.handle_editing_key(key);
            return SettingsOutcome::Pending;
        }

        match key.code {
            KeyCode::Esc => return SettingsOutcome::Cancelled,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    FocusArea::Items => FocusArea::Footer,
                    FocusArea::Footer => FocusArea::Items,
                };
            }
            KeyCode::Up => match self.focus {
                FocusArea::Items => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                }
                FocusArea::Footer => self.focus = FocusArea::Items,
            },
            KeyCode::Down => {
                if self.focus == FocusArea::Items {
                    if self.selected + 1 < self.items.len() {
                        self.selected += 1;
                    } else {
                        self.focus = FocusArea::Footer;
                    }
                }
            }
            KeyCode::Left => match self.focus {
                FocusArea::Items => self.adjust(-1),
                FocusArea::Footer => self.footer_button = 0,
            },
            KeyCode::Right => match self.focus {
                FocusArea::Items => self.adjust(1),
                FocusArea::Footer => self.footer_button = 1,
            },
            KeyCode::Enter | KeyCode::Char(' ') if self.focus == FocusArea::Footer => {
                return if self.footer_button == 0 {
                    SettingsOutcome::Saved(self.apply())
                } else {
                    SettingsOutcome::Cancelled
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
        SettingsOutcome::Pending
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let Some(SettingControl::Text { value }) = self
            .items
            .get_mut(self.selected)
            .map(|item| &mut item.control)
        else {
            self.editing = false;
            return;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing = false,
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(c) => value.push(c),
            _ => {}
        }
    }

    /// Enter/Space on the focused item.
    fn activate(&mut self) {
        match &mut self.items[self.selected].control {
            SettingControl::Toggle { checked } => *checked = !*checked,
            SettingControl::Dropdown { options, selected } => {
                *selected = (*selected + 1) % options.len();
            }
            SettingControl::Text { .. } => self.editing = true,
            SettingControl::Slider { .. } => {}
        }
    }

    /// Left/Right on the focused item.
    fn adjust(&mut self, delta: i64) {
        match &mut self.items[self.selected].control {
            SettingControl::Dropdown { options, selected } => {
                let len = options.len() as i64;
                *selected = ((*selected as i64 + delta).rem_euclid(len)) as usize;
            }
            SettingControl::Slider { value } => {
                // Keep the stored value on the 0.05 grid.
                let stepped = ((*value + delta as f64 * FLICKER_STEP) / FLICKER_STEP).round()
                    * FLICKER_STEP;
                *value = stepped.clamp(0.0, 1.0);
            }
            SettingControl::Toggle { checked } => *checked = !*checked,
            SettingControl::Text { .. } => {}
        }
    }

    /// Fold the form values back into the snapshot.
    pub fn apply(&self) -> ContentDocument {
        let mut document = self.snapshot.clone();

        for item in &self.items {
            match (item.label, &item.control) {
                ("Color Theme", SettingControl::Dropdown { options, selected }) => {
                    document.theme.color = ThemeColor::from(options[*selected].clone());
                }
                ("CRT Curvature", SettingControl::Toggle { checked }) => {
                    document.theme.crt_curvature = *checked;
                }
                ("Scanlines", SettingControl::Toggle { checked }) => {
                    document.theme.scanlines = *checked;
                }
                ("Flicker Intensity", SettingControl::Slider { value }) => {
                    document.theme.flicker = (*value * 100.0).round() / 100.0;
                }
                ("Command Prompt", SettingControl::Text { value }) => {
                    document.prompt = value.clone();
                }
                ("Banner Subtitle", SettingControl::Text { value }) => {
                    document.banner.subtitle = value.clone();
                }
                _ => {}
            }
        }
        document
    }
}

/// Draw the overlay centered in `area`.
pub fn draw_settings(frame: &mut Frame, area: Rect, state: &SettingsState, theme: &Theme) {
    let width = 52.min(area.width.saturating_sub(4));
    let height = (state.items.len() as u16 + 4).min(area.height.saturating_sub(2));
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let base = Style::default().fg(theme.base_color());
    let focused = base.add_modifier(Modifier::REVERSED);

    let mut lines: Vec<Line> = Vec::new();
    for (index, item) in state.items.iter().enumerate() {
        let control = match &item.control {
            SettingControl::Dropdown { options, selected } => {
                format!("< {} >", options[*selected])
            }
            SettingControl::Toggle { checked } => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            SettingControl::Slider { value } => format!("{value:.2}"),
            SettingControl::Text { value } => {
                if state.editing && index == state.selected {
                    format!("{value}_")
                } else {
                    value.clone()
                }
            }
        };
        let style = if state.focus == FocusArea::Items && index == state.selected {
            focused
        } else {
            base
        };
        lines.push(Line::from(Span::styled(
            format!(" {:<18} {}", item.label, control),
            style,
        )));
    }

    lines.push(Line::default());
    let save_style = if state.focus == FocusArea::Footer && state.footer_button == 0 {
        focused
    } else {
        base
    };
    let cancel_style = if state.focus == FocusArea::Footer && state.footer_button == 1 {
        focused
    } else {
        base
    };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled("[ Save ]", save_style),
        Span::raw("  "),
        Span::styled("[ Cancel ]", cancel_style),
    ]));

    frame.render_widget(Clear, overlay);
    let block = Block::bordered()
        .border_type(theme.border_type())
        .border_style(base)
        .title(" Settings ");
    frame.render_widget(Paragraph::new(lines).block(block).style(base), overlay);
}
