//! Lesson Markdown Renderer
//!
//! Extends pulldown-cmark with:
//! - Custom color syntax: %r%red%r%
//! - Syntax highlighting (syntect)
//! - Task lists for the testing checklists

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Color codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("r", "#e74c3c"), // red
    ("g", "#27ae60"), // green
    ("b", "#3498db"), // blue
    ("o", "#e67e22"), // orange
];

/// Fence tags without a bundled grammar, mapped to the closest one
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("tsx", "js"),
    ("jsx", "js"),
    ("ts", "js"),
    ("typescript", "js"),
];

/// Parse markdown with all extensions enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

fn transform_events(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Text(text) if contains_color_syntax(&text) => {
                    events.extend(process_color_events(&text));
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return plain_code_block(code);
    };

    let token = lang.map(|l| {
        LANGUAGE_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(l))
            .map_or(l, |(_, target)| *target)
    });
    let syntax = token
        .and_then(|t| ss.find_syntax_by_token(t))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain_code_block(code))
}

fn plain_code_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

fn contains_color_syntax(text: &str) -> bool {
    COLORS.iter().any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on `%x%...%x%` markers into text and colored spans
fn process_color_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text;

    loop {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, color)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, color)) = earliest else {
            if !remaining.is_empty() {
                events.push(Event::Text(CowStr::from(remaining.to_string())));
            }
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        let after = &remaining[pos + pattern.len()..];
        match after.find(&pattern) {
            Some(end_pos) => {
                events.push(Event::Html(CowStr::from(format!("<span style=\"color: {}\">", color))));
                if end_pos > 0 {
                    events.push(Event::Text(CowStr::from(after[..end_pos].to_string())));
                }
                events.push(Event::Html(CowStr::from("</span>")));
                remaining = &after[end_pos + pattern.len()..];
            }
            None => {
                // Unclosed marker, keep it literally
                events.push(Event::Text(CowStr::from(pattern)));
                remaining = after;
            }
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_renders_checkboxes() {
        let html = parse_markdown("- [ ] Add a todo\n- [x] Toggle it\n");
        assert_eq!(html.matches("type=\"checkbox\"").count(), 2);
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = parse_markdown("```rust\nlet (count, set_count) = signal(0);\n```\n");
        assert!(html.starts_with("<pre style="));
        assert!(!html.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = parse_markdown("```nosuchlang\n<a>\n```\n");
        assert!(html.contains("&lt;a&gt;"));
    }

    #[test]
    fn test_color_markers() {
        let html = parse_markdown("Use %g%set()%g%, never %r%mutate%r% directly");
        assert!(html.contains("<span style=\"color: #27ae60\">set()</span>"));
        assert!(html.contains("<span style=\"color: #e74c3c\">mutate</span>"));
        assert!(html.contains("directly"));
    }

    #[test]
    fn test_unclosed_color_marker_is_literal() {
        let html = parse_markdown("50%r% off");
        assert!(html.contains("50%r% off"));
    }
}
