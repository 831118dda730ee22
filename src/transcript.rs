//! The transcript: the ordered, append-only history of rendered output.
//!
//! Animated lines reveal one character per tick. Every animating line
//! advances on the same tick, so a short line submitted later can finish
//! before a long one submitted earlier, the same interleaving that
//! independent per-line timers would produce. `clear` drops all lines
//! at once; any in-flight reveal disappears with its line and the next
//! tick is a harmless no-op.

/// Style class of a transcript text line, mirrored from the content's
/// rendering vocabulary. The theme maps each class to a terminal style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    /// A submitted input line echoed back with the prompt.
    Echo,
    Error,
    Success,
    SectionTitle,
    AsciiArt,
    Subtitle,
    HelpItem,
    ProjectName,
    Tagline,
    Tech,
    Period,
    Position,
    Company,
    Institution,
    Degree,
}

#[derive(Debug, Clone)]
pub enum TranscriptLine {
    Text {
        text: String,
        style: LineStyle,
        /// Characters revealed so far; the line is done when this reaches
        /// `total`.
        revealed: usize,
        /// Character count of `text`, fixed at construction.
        total: usize,
    },
    /// A skill bar: name plus proficiency 0-100. Appears instantly.
    SkillBar { name: String, level: u8 },
    /// A contact link. Appears instantly.
    Link { platform: String, url: String },
}

impl TranscriptLine {
    /// The currently visible prefix of a text line; full content for
    /// non-text lines is handled by the view directly.
    pub fn visible_text(&self) -> &str {
        match self {
            TranscriptLine::Text { text, revealed, total, .. } => {
                if revealed >= total {
                    text
                } else {
                    match text.char_indices().nth(*revealed) {
                        Some((byte, _)) => &text[..byte],
                        None => text,
                    }
                }
            }
            _ => "",
        }
    }

    pub fn is_revealing(&self) -> bool {
        matches!(
            self,
            TranscriptLine::Text { revealed, total, .. } if revealed < total
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text line revealed by the typewriter animation. Empty
    /// lines appear immediately.
    pub fn push_text(&mut self, text: impl Into<String>, style: LineStyle) {
        let text = text.into();
        let total = text.chars().count();
        self.lines.push(TranscriptLine::Text {
            text,
            style,
            revealed: 0,
            total,
        });
    }

    /// Append a text line with no animation.
    pub fn push_text_instant(&mut self, text: impl Into<String>, style: LineStyle) {
        let text = text.into();
        let total = text.chars().count();
        self.lines.push(TranscriptLine::Text {
            text,
            style,
            revealed: total,
            total,
        });
    }

    pub fn push_blank(&mut self) {
        self.push_text(String::new(), LineStyle::Plain);
    }

    pub fn push_skill_bar(&mut self, name: impl Into<String>, level: u8) {
        self.lines.push(TranscriptLine::SkillBar {
            name: name.into(),
            level: level.min(100),
        });
    }

    pub fn push_link(&mut self, platform: impl Into<String>, url: impl Into<String>) {
        self.lines.push(TranscriptLine::Link {
            platform: platform.into(),
            url: url.into(),
        });
    }

    /// Discard every line immediately. In-flight reveals vanish with
    /// their lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Advance every revealing line by one character. Returns whether
    /// anything changed (a redraw is needed).
    pub fn tick(&mut self) -> bool {
        let mut advanced = false;
        for line in &mut self.lines {
            if let TranscriptLine::Text { revealed, total, .. } = line {
                if *revealed < *total {
                    *revealed += 1;
                    advanced = true;
                }
            }
        }
        advanced
    }

    pub fn is_animating(&self) -> bool {
        self.lines.iter().any(TranscriptLine::is_revealing)
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Fully visible text of every text line, for tests and diffing.
    pub fn text_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                TranscriptLine::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_appears_immediately() {
        let mut transcript = Transcript::new();
        transcript.push_blank();
        assert!(!transcript.is_animating());
    }

    #[test]
    fn test_typewriter_reveals_one_char_per_tick() {
        let mut transcript = Transcript::new();
        transcript.push_text("abc", LineStyle::Plain);

        assert_eq!(transcript.lines()[0].visible_text(), "");
        transcript.tick();
        assert_eq!(transcript.lines()[0].visible_text(), "a");
        transcript.tick();
        assert_eq!(transcript.lines()[0].visible_text(), "ab");
        transcript.tick();
        assert_eq!(transcript.lines()[0].visible_text(), "abc");
        assert!(!transcript.is_animating());
    }

    #[test]
    fn test_tick_after_done_is_noop() {
        let mut transcript = Transcript::new();
        transcript.push_text("x", LineStyle::Plain);
        assert!(transcript.tick());
        assert!(!transcript.tick());
    }

    #[test]
    fn test_concurrent_reveals_interleave() {
        let mut transcript = Transcript::new();
        transcript.push_text("long line", LineStyle::Plain);
        transcript.push_text("hi", LineStyle::Plain);

        transcript.tick();
        transcript.tick();

        // The later, shorter line finishes while the earlier one is
        // still revealing.
        assert!(transcript.lines()[0].is_revealing());
        assert_eq!(transcript.lines()[1].visible_text(), "hi");
        assert!(!transcript.lines()[1].is_revealing());
    }

    #[test]
    fn test_clear_cancels_in_flight_reveals() {
        let mut transcript = Transcript::new();
        transcript.push_text("still typing", LineStyle::Plain);
        transcript.tick();

        transcript.clear();
        assert!(transcript.is_empty());
        assert!(!transcript.is_animating());
        assert!(!transcript.tick());
    }

    #[test]
    fn test_multibyte_reveal_respects_char_boundaries() {
        let mut transcript = Transcript::new();
        transcript.push_text("héllo", LineStyle::Plain);
        transcript.tick();
        transcript.tick();
        assert_eq!(transcript.lines()[0].visible_text(), "hé");
    }

    #[test]
    fn test_instant_text_is_fully_visible() {
        let mut transcript = Transcript::new();
        transcript.push_text_instant("guest@host:~$ about", LineStyle::Echo);
        assert_eq!(transcript.lines()[0].visible_text(), "guest@host:~$ about");
        assert!(!transcript.is_animating());
    }

    #[test]
    fn test_skill_bar_level_is_clamped() {
        let mut transcript = Transcript::new();
        transcript.push_skill_bar("Rust", 250);
        let TranscriptLine::SkillBar { level, .. } = &transcript.lines()[0] else {
            panic!("expected skill bar");
        };
        assert_eq!(*level, 100);
    }
}
