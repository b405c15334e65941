//! Line-mode presenter
//!
//! Writes display requests to a terminal with crossterm colours, wraps them
//! at the configured width and can print them a character at a time.

use super::starts_paragraph;
use crate::game::{DisplayKind, Presenter, PROMPT};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub struct Console<W: Write> {
    out: W,
    width: usize,
    char_delay: Option<Duration>,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            char_delay: None,
            color: true,
        }
    }

    /// Print at `cps` characters per second; 0 turns pacing off
    pub fn typing_speed(mut self, cps: u32) -> Self {
        self.char_delay = (cps > 0).then(|| Duration::from_secs(1) / cps);
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_paced(&mut self, text: &str) -> std::io::Result<()> {
        match self.char_delay {
            None => queue!(self.out, Print(text)),
            Some(delay) => {
                for c in text.chars() {
                    queue!(self.out, Print(c))?;
                    self.out.flush()?;
                    thread::sleep(delay);
                }
                Ok(())
            }
        }
    }

    fn set_color(&mut self, color: Option<Color>) -> std::io::Result<()> {
        match color {
            Some(color) if self.color => queue!(self.out, SetForegroundColor(color)),
            _ => Ok(()),
        }
    }

    fn reset(&mut self) -> std::io::Result<()> {
        if self.color {
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    fn render(&mut self, text: &str, kind: DisplayKind) -> std::io::Result<()> {
        if kind == DisplayKind::Warning {
            return Ok(());
        }
        if starts_paragraph(kind) {
            queue!(self.out, Print("\n"))?;
        }

        // Items and characters read "You see <name>." with the name coloured
        let body = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let (prefix, suffix, color) = match kind {
            DisplayKind::Location => ("", "", Some(Color::Red)),
            DisplayKind::Item => ("You see ", ".", Some(Color::Green)),
            DisplayKind::Character => ("You see ", ".", Some(Color::Blue)),
            DisplayKind::Inv => ("", "", Some(Color::Green)),
            _ => ("", "", None),
        };

        let full = format!("{prefix}{body}{suffix}");
        let lines = wrap(&full, self.width);
        let mut offset = 0;
        for line in lines {
            // Colour only the body part, which may span wrapped lines
            let start = offset;
            let end = offset + line.len();
            let body_start = prefix.len();
            let body_end = prefix.len() + body.len();
            let cut_a = body_start.clamp(start, end) - start;
            let cut_b = body_end.clamp(start, end) - start;
            let head = line[..cut_a].to_string();
            let colored = line[cut_a..cut_b].to_string();
            let tail = line[cut_b..].to_string();

            self.write_paced(&head)?;
            self.set_color(color)?;
            self.write_paced(&colored)?;
            self.reset()?;
            self.write_paced(&tail)?;
            queue!(self.out, Print("\n"))?;
            offset = end + 1;
        }
        self.out.flush()
    }
}

impl<W: Write> Presenter for Console<W> {
    fn present(&mut self, text: &str, kind: DisplayKind) {
        if let Err(e) = self.render(text, kind) {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }

    fn prompt(&mut self) {
        let result = queue!(self.out, Print("\n"), Print(PROMPT)).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write prompt: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(kind: DisplayKind, text: &str, width: usize) -> String {
        let mut console = Console::new(Vec::new(), width).color(false);
        console.present(text, kind);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("a supercalifragilistic word", 5), vec!["a", "supercalifragilistic", "word"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn kinds_render_like_the_classic_console() {
        assert_eq!(rendered(DisplayKind::Item, "a rusty key", 80), "You see a rusty key.\n");
        assert_eq!(rendered(DisplayKind::Location, "Clearing", 80), "\nClearing\n");
        assert_eq!(rendered(DisplayKind::Plain, "Hi.", 80), "\nHi.\n");
        assert_eq!(rendered(DisplayKind::Description, "Quiet.", 80), "Quiet.\n");
        assert_eq!(rendered(DisplayKind::Warning, "hidden", 80), "");
    }

    #[test]
    fn long_item_names_wrap() {
        assert_eq!(
            rendered(DisplayKind::Character, "a very old wizard", 12),
            "You see a\nvery old\nwizard.\n"
        );
    }

    #[test]
    fn prompt_is_printed() {
        let mut console = Console::new(Vec::new(), 80);
        console.prompt();
        assert_eq!(String::from_utf8(console.into_inner()).unwrap(), format!("\n{PROMPT}"));
    }
}
