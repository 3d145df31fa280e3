//! Section-level parsing of ASS/SSA scripts.
//!
//! Only the parts that decide which fonts are needed are read: the
//! `[V4+ Styles]` (or SSA `[V4 Styles]`) table and the `Dialogue:`/`Comment:`
//! lines of `[Events]`. Everything else is skipped.

use crate::error::ScriptParseError;
use crate::overrides::collect_event;
use crate::types::{FontDescriptor, FontStatistics, WEIGHT_BOLD, WEIGHT_REGULAR};
use std::collections::HashMap;

const STYLES: &str = "V4+ Styles";
const EVENTS: &str = "Events";

/// A named style from the styles table, reduced to its font attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub family: String,
    pub weight: u16,
    pub italic: bool,
}

impl Style {
    pub fn descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(self.family.clone(), self.weight, self.italic)
    }
}

/// Styles by name. Lookups ignore the legacy `*` prefix.
#[derive(Debug, Default)]
pub struct StyleTable {
    styles: HashMap<String, Style>,
}

impl StyleTable {
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name.trim().trim_start_matches('*'))
    }

    fn insert(&mut self, style: Style) {
        self.styles
            .insert(style.name.trim_start_matches('*').to_string(), style);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Strip the vertical-writing `@` marker from a font name.
pub(crate) fn family_name(raw: &str) -> &str {
    let name = raw.trim();
    name.strip_prefix('@').unwrap_or(name)
}

/// Map an ASS bold value to a weight: `0` is regular, `1` and the SSA `-1`
/// are bold, anything else is taken as an explicit weight.
pub(crate) fn weight_from_ass(value: i32) -> u16 {
    match value {
        0 => WEIGHT_REGULAR,
        1 => WEIGHT_BOLD,
        v if v < 0 => WEIGHT_BOLD,
        v => v.clamp(100, 1000) as u16,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Styles,
    Events,
    Other,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "v4+ styles" | "v4 styles" | "v4 styles+" => Section::Styles,
            "events" => Section::Events,
            _ => Section::Other,
        }
    }
}

/// Column layout declared by a section's `Format:` line.
#[derive(Debug)]
struct Format {
    columns: Vec<String>,
}

impl Format {
    fn parse(value: &str) -> Self {
        Self {
            columns: value
                .split(',')
                .map(|c| c.trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Split a data line; the last column keeps any embedded commas.
    fn split<'a>(&self, value: &'a str) -> Vec<&'a str> {
        value.splitn(self.columns.len(), ',').collect()
    }

    fn column<'a>(
        &self,
        fields: &[&'a str],
        name: &str,
        line: usize,
    ) -> Result<&'a str, ScriptParseError> {
        let index = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ScriptParseError::MalformedLine {
                line,
                reason: format!("Format line has no '{name}' column"),
            })?;
        fields
            .get(index)
            .copied()
            .ok_or_else(|| ScriptParseError::MalformedLine {
                line,
                reason: format!(
                    "expected {} columns, found {}",
                    self.columns.len(),
                    fields.len()
                ),
            })
    }
}

struct Event<'a> {
    line: usize,
    style: &'a str,
    text: &'a str,
}

fn parse_int(value: &str, column: &str, line: usize) -> Result<i32, ScriptParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ScriptParseError::MalformedLine {
            line,
            reason: format!("{column} value '{}' is not an integer", value.trim()),
        })
}

fn parse_style(format: &Format, value: &str, line: usize) -> Result<Style, ScriptParseError> {
    let fields = format.split(value);
    let name = format.column(&fields, "name", line)?.trim().to_string();
    let family = family_name(format.column(&fields, "fontname", line)?).to_string();
    let bold = parse_int(format.column(&fields, "bold", line)?, "Bold", line)?;
    let italic = parse_int(format.column(&fields, "italic", line)?, "Italic", line)?;
    Ok(Style {
        name,
        family,
        weight: weight_from_ass(bold),
        italic: italic != 0,
    })
}

/// Compute per-font usage for the text of a whole script.
///
/// Every font an event line starts in or switches to gets an entry, even if
/// no visible character is drawn with it. Callers that only want fonts with
/// glyphs filter on [`FontUsage::is_unused`](crate::FontUsage::is_unused).
pub fn parse_statistics(
    text: &str,
    exclude_comments: bool,
) -> Result<FontStatistics, ScriptParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut section = Section::Other;
    let mut seen_events = false;
    let mut style_format: Option<Format> = None;
    let mut event_format: Option<Format> = None;
    let mut styles = StyleTable::default();
    let mut events = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with("!:") {
            continue;
        }
        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            section = Section::from_header(header);
            seen_events |= section == Section::Events;
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        // Text may legitimately start with spaces; only strip the one after the colon
        let value = value.strip_prefix(' ').unwrap_or(value);

        match (section, key.trim()) {
            (Section::Styles, "Format") => style_format = Some(Format::parse(value)),
            (Section::Styles, "Style") => {
                let format = style_format.as_ref().ok_or(ScriptParseError::MissingFormat {
                    section: STYLES,
                    line,
                })?;
                styles.insert(parse_style(format, value, line)?);
            }
            (Section::Events, "Format") => event_format = Some(Format::parse(value)),
            (Section::Events, kind @ ("Dialogue" | "Comment")) => {
                if kind == "Comment" && exclude_comments {
                    continue;
                }
                let format = event_format.as_ref().ok_or(ScriptParseError::MissingFormat {
                    section: EVENTS,
                    line,
                })?;
                let fields = format.split(value);
                events.push(Event {
                    line,
                    style: format.column(&fields, "style", line)?,
                    text: format.column(&fields, "text", line)?,
                });
            }
            _ => {}
        }
    }

    if !seen_events {
        return Err(ScriptParseError::MissingSection(EVENTS));
    }
    log::debug!(
        "Parsed {} styles and {} events",
        styles.len(),
        events.len()
    );

    let mut stats = FontStatistics::new();
    for event in events {
        let style = match styles.get(event.style).or_else(|| styles.get("Default")) {
            Some(style) => style,
            None => {
                return Err(ScriptParseError::UnknownStyle {
                    line: event.line,
                    style: event.style.trim().to_string(),
                });
            }
        };
        collect_event(event.text, style, &styles, &mut stats);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontDescriptor;

    const HEADER: &str = "[Script Info]\nScriptType: v4.00+\n\n[V4+ Styles]\n\
Format: Name, Fontname, Fontsize, PrimaryColour, Bold, Italic, Underline\n\
Style: Default,Arial,48,&H00FFFFFF,0,0,0\n\
Style: Sign,@Noto Serif,36,&H00FFFFFF,-1,1,0\n\n[Events]\n\
Format: Layer, Start, End, Style, Name, Text\n";

    fn script(events: &str) -> String {
        format!("{HEADER}{events}")
    }

    #[test]
    fn test_style_fonts_are_collected() {
        let stats = parse_statistics(
            &script("Dialogue: 0,0:00:00.00,0:00:01.00,Default,,Hi\nDialogue: 0,0:00:00.00,0:00:01.00,Sign,,Yo\n"),
            false,
        )
        .unwrap();
        let keys: Vec<_> = stats.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                FontDescriptor::regular("Arial"),
                FontDescriptor::new("Noto Serif", WEIGHT_BOLD, true),
            ]
        );
        let arial = &stats[&FontDescriptor::regular("Arial")];
        assert_eq!(arial.glyphs.iter().collect::<String>(), "Hi");
        assert_eq!(arial.uses, 1);
    }

    #[test]
    fn test_text_keeps_commas() {
        let stats = parse_statistics(
            &script("Dialogue: 0,0:00:00.00,0:00:01.00,Default,,a, b\n"),
            false,
        )
        .unwrap();
        let glyphs = &stats[&FontDescriptor::regular("Arial")].glyphs;
        assert!(glyphs.contains(&','));
        assert!(glyphs.contains(&'b'));
    }

    #[test]
    fn test_comments_can_be_excluded() {
        let events = "Comment: 0,0:00:00.00,0:00:01.00,Sign,,note\n";
        assert_eq!(parse_statistics(&script(events), false).unwrap().len(), 1);
        assert!(parse_statistics(&script(events), true).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_style_falls_back_to_default() {
        let stats = parse_statistics(
            &script("Dialogue: 0,0:00:00.00,0:00:01.00,Missing,,x\n"),
            false,
        )
        .unwrap();
        assert!(stats.contains_key(&FontDescriptor::regular("Arial")));
    }

    #[test]
    fn test_unknown_style_without_default_is_an_error() {
        let text = "[V4+ Styles]\nFormat: Name, Fontname, Bold, Italic\nStyle: Main,Arial,0,0\n\
[Events]\nFormat: Style, Text\nDialogue: Other,x\n";
        let err = parse_statistics(text, false).unwrap_err();
        assert!(matches!(err, ScriptParseError::UnknownStyle { line: 6, .. }));
    }

    #[test]
    fn test_missing_events_section() {
        let err = parse_statistics("[Script Info]\nTitle: x\n", false).unwrap_err();
        assert!(matches!(err, ScriptParseError::MissingSection("Events")));
    }

    #[test]
    fn test_event_before_format() {
        let err = parse_statistics("[Events]\nDialogue: 0,a,b,Default,,x\n", false).unwrap_err();
        assert!(matches!(err, ScriptParseError::MissingFormat { line: 2, .. }));
    }

    #[test]
    fn test_bad_bold_value() {
        let text = "[V4+ Styles]\nFormat: Name, Fontname, Bold, Italic\nStyle: Main,Arial,yes,0\n[Events]\n";
        let err = parse_statistics(text, false).unwrap_err();
        assert!(matches!(err, ScriptParseError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_weight_from_ass() {
        assert_eq!(weight_from_ass(0), WEIGHT_REGULAR);
        assert_eq!(weight_from_ass(1), WEIGHT_BOLD);
        assert_eq!(weight_from_ass(-1), WEIGHT_BOLD);
        assert_eq!(weight_from_ass(600), 600);
        assert_eq!(weight_from_ass(5000), 1000);
    }

    #[test]
    fn test_byte_order_mark_and_case_insensitive_headers() {
        let text = "\u{feff}[v4+ styles]\nFormat: Name, Fontname, Bold, Italic\nStyle: Default,Gandhi Sans,0,0\n\
[EVENTS]\nFormat: Style, Text\nDialogue: Default,ok\n";
        let stats = parse_statistics(text, false).unwrap();
        assert!(stats.contains_key(&FontDescriptor::regular("Gandhi Sans")));
    }
}
