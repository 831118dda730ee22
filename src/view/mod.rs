//! Frame rendering: the CRT screen, the transcript tail and the input
//! line, plus the settings overlay when it is open.

pub mod settings;

use crate::app::App;
use crate::theme::Theme;
use crate::transcript::TranscriptLine;
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Cells in a rendered skill bar body.
const SKILL_BAR_WIDTH: usize = 10;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();

    let base = Style::default().fg(theme.base_color());
    let block = Block::bordered()
        .border_type(theme.border_type())
        .border_style(base)
        .title(format!(" {} ", app.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Transcript plus the live input line, pinned to the bottom.
    let total = app.transcript.lines().len() + 1;
    let skip = total.saturating_sub(inner.height as usize);

    let mut rows: Vec<Line> = Vec::with_capacity(total - skip);
    for (index, line) in app.transcript.lines().iter().enumerate().skip(skip) {
        let mut row = render_line(&theme, line);
        if theme.scanline_row(index) {
            row = row.dim();
        }
        rows.push(row);
    }

    let prompt = app.prompt().to_string();
    let input_row = Line::from(vec![
        Span::styled(prompt.clone(), base.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(app.input.text().to_string(), base),
    ]);
    rows.push(input_row);

    let mut paragraph_style = Style::default();
    if theme.flicker_frame(app.tick) {
        paragraph_style = paragraph_style.add_modifier(Modifier::DIM);
    }
    frame.render_widget(Paragraph::new(rows).style(paragraph_style), inner);

    // Terminal cursor sits after the prompt at the input cursor position.
    if app.settings.is_none() {
        let cursor_x = inner.x + prompt.width() as u16 + 1 + app.input.cursor_column();
        let cursor_y = inner.y + (total - skip) as u16 - 1;
        frame.set_cursor_position(Position::new(
            cursor_x.min(inner.right().saturating_sub(1)),
            cursor_y,
        ));
    }

    if let Some(settings_state) = &app.settings {
        settings::draw_settings(frame, area, settings_state, &theme);
    }
}

fn render_line(theme: &Theme, line: &TranscriptLine) -> Line<'static> {
    let base = Style::default().fg(theme.base_color());

    match line {
        TranscriptLine::Text { style, .. } => Line::from(Span::styled(
            line.visible_text().to_string(),
            theme.line_style(*style),
        )),
        TranscriptLine::SkillBar { name, level } => {
            let filled = *level as usize * SKILL_BAR_WIDTH / 100;
            let bar: String = "█".repeat(filled) + &"░".repeat(SKILL_BAR_WIDTH - filled);
            Line::from(vec![
                Span::styled(format!("{name:<14}"), base),
                Span::styled(format!("[{bar}]"), base.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {level}%"), base.add_modifier(Modifier::DIM)),
            ])
        }
        TranscriptLine::Link { platform, url } => Line::from(vec![
            Span::styled(platform.to_string(), base.add_modifier(Modifier::UNDERLINED)),
            Span::styled(format!(": {url}"), base.add_modifier(Modifier::DIM)),
        ]),
    }
}
