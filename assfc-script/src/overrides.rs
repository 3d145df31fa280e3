//! Event text: override blocks, escapes and glyph collection.

use crate::parser::{Style, StyleTable, family_name, weight_from_ass};
use crate::types::{FontDescriptor, FontStatistics};

/// Digits-only argument of a short tag such as `\b1` or `\i0`.
///
/// Returns `None` when `tag` is a longer tag that merely shares the prefix
/// (`\blur`, `\bord`, `\iclip`, `\pos`), and `Some("")` for a bare reset.
fn numeric_arg<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let arg = tag.strip_prefix(name)?.trim();
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    digits.chars().all(|c| c.is_ascii_digit()).then_some(arg)
}

/// Font state while walking one event line.
struct LineState<'a> {
    line_style: &'a Style,
    styles: &'a StyleTable,
    current: FontDescriptor,
    drawing: bool,
}

impl<'a> LineState<'a> {
    fn new(line_style: &'a Style, styles: &'a StyleTable, stats: &mut FontStatistics) -> Self {
        let current = line_style.descriptor();
        stats.entry(current.clone()).or_default().uses += 1;
        Self {
            line_style,
            styles,
            current,
            drawing: false,
        }
    }

    fn switch_to(&mut self, next: FontDescriptor, stats: &mut FontStatistics) {
        if next != self.current {
            stats.entry(next.clone()).or_default().uses += 1;
            self.current = next;
        }
    }

    fn record(&self, glyph: char, stats: &mut FontStatistics) {
        if self.drawing {
            return;
        }
        if let Some(usage) = stats.get_mut(&self.current) {
            usage.glyphs.insert(glyph);
        }
    }

    /// Apply the tags inside one `{...}` block.
    fn apply_block(&mut self, block: &str, stats: &mut FontStatistics) {
        // Anything before the first backslash is an inline comment
        for tag in block.split('\\').skip(1) {
            let tag = tag.trim();
            let mut next = self.current.clone();

            if let Some(name) = tag.strip_prefix("fn") {
                let name = family_name(name);
                next.family = if name.is_empty() || name == "0" {
                    self.line_style.family.clone()
                } else {
                    name.to_string()
                };
            } else if let Some(arg) = numeric_arg(tag, "b") {
                next.weight = match arg.parse::<i32>() {
                    Ok(value) => weight_from_ass(value),
                    Err(_) => self.line_style.weight,
                };
            } else if let Some(arg) = numeric_arg(tag, "i") {
                next.italic = match arg.parse::<i32>() {
                    Ok(value) => value != 0,
                    Err(_) => self.line_style.italic,
                };
            } else if let Some(arg) = numeric_arg(tag, "p") {
                self.drawing = arg.parse::<i32>().is_ok_and(|scale| scale > 0);
                continue;
            } else if let Some(name) = tag.strip_prefix('r') {
                let style = if name.trim().is_empty() {
                    self.line_style
                } else {
                    self.styles.get(name).unwrap_or(self.line_style)
                };
                next = style.descriptor();
            } else {
                continue;
            }

            self.switch_to(next, stats);
        }
    }
}

/// Walk one event's text, adding its fonts and glyphs to `stats`.
pub(crate) fn collect_event(
    text: &str,
    line_style: &Style,
    styles: &StyleTable,
    stats: &mut FontStatistics,
) {
    let mut state = LineState::new(line_style, styles, stats);
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match c {
            '{' => {
                let Some(end) = rest.find('}') else {
                    // Unterminated block: the remainder is never rendered
                    break;
                };
                state.apply_block(&rest[1..end], stats);
                rest = &rest[end + 1..];
            }
            '\\' => match rest[1..].chars().next() {
                Some('N' | 'n') => rest = &rest[2..],
                Some('h') => {
                    state.record('\u{a0}', stats);
                    rest = &rest[2..];
                }
                _ => {
                    state.record('\\', stats);
                    rest = &rest[1..];
                }
            },
            c => {
                state.record(c, stats);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
}
