//! Widgets drawn on top of the page: hero text, help line and contact form.

use folio_background::hsl_to_rgb;
use folio_core::Rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::contact::{ContactForm, Field, Focus};
use crate::content;

/// Period of the caption cursor blink.
const CURSOR_BLINK_MS: u64 = 500;

/// Time for the shimmer to sweep across the name once.
const SHIMMER_PERIOD_MS: u64 = 4000;

/// Height of the hero block for a terminal of `height` rows.
pub fn hero_height(height: u16) -> u16 {
    match height {
        h if h >= 30 => 12,
        h if h >= 18 => 8,
        _ => 0,
    }
}

/// Everything the hero text needs for one frame.
pub struct HeroView<'a> {
    pub caption: Option<&'a str>,
    pub accent: Rgb,
    pub elapsed_ms: u64,
}

/// Draw the hero text. The particle canvas is already in the buffer.
pub fn render_hero(frame: &mut Frame, area: Rect, view: &HeroView) {
    if area.height < 4 {
        return;
    }
    let accent: Color = view.accent.into();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("✦ ", Style::new().fg(accent)),
            Span::styled(content::BADGE, Style::new().dark_gray()),
        ]),
        shimmer_line(content::NAME, view.elapsed_ms),
    ];

    if let Some(caption) = view.caption {
        let cursor = if (view.elapsed_ms / CURSOR_BLINK_MS) % 2 == 0 {
            "▌"
        } else {
            " "
        };
        lines.push(Line::from(vec![
            Span::raw(caption.to_string()),
            Span::styled(cursor, Style::new().fg(accent)),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(" w ", Style::new().fg(Color::Black).bg(accent).bold()),
        Span::styled(" View My Work   ", Style::new().fg(accent)),
        Span::styled(content::GITHUB.label, Style::new().dark_gray()),
        Span::styled(" · ", Style::new().dark_gray()),
        Span::styled(content::LINKEDIN.label, Style::new().dark_gray()),
    ]));

    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);
    let text_area = text_area.inner(ratatui::layout::Margin::new(4, 0));

    frame.render_widget(Paragraph::new(lines), text_area);
}

/// The name, bold, with a hue gradient sweeping across it.
fn shimmer_line(text: &str, elapsed_ms: u64) -> Line<'static> {
    let phase = (elapsed_ms % SHIMMER_PERIOD_MS) as f32 / SHIMMER_PERIOD_MS as f32;
    let len = text.chars().count().max(1) as f32;
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let hue = 200.0 + (i as f32 / len) * 100.0 + phase * 360.0;
            let color: Color = hsl_to_rgb(hue, 0.85, 0.65).into();
            Span::styled(
                ch.to_string(),
                Style::new().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

/// The bottom line: key hints on the left, a status message on the right.
pub fn render_help(
    frame: &mut Frame,
    area: Rect,
    accent: Rgb,
    section: &str,
    status: Option<(&str, bool)>,
) {
    let accent: Color = accent.into();
    let help = Line::from(vec![
        "q".bold().fg(accent),
        " quit  ".dark_gray(),
        "j/k".bold().fg(accent),
        " scroll  ".dark_gray(),
        "tab".bold().fg(accent),
        " section  ".dark_gray(),
        "m".bold().fg(accent),
        " message  ".dark_gray(),
        "c".bold().fg(accent),
        " color  ".dark_gray(),
        "s".bold().fg(accent),
        " speed  ".dark_gray(),
        "p".bold().fg(accent),
        " particles".dark_gray(),
    ]);

    let right = match status {
        Some((text, true)) => Line::from(text.to_string().red()),
        Some((text, false)) => Line::from(text.to_string().fg(accent)),
        None => Line::from(section.to_string().dark_gray()),
    };

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(right.width() as u16 + 1)])
            .areas(area);
    frame.render_widget(help, left_area);
    frame.render_widget(right.alignment(Alignment::Right), right_area);
}

/// Draw the contact form as a centred modal.
pub fn render_form(frame: &mut Frame, area: Rect, form: &ContactForm, accent: Rgb) {
    let accent: Color = accent.into();
    let [popup] = Layout::horizontal([Constraint::Max(64)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Max(18)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(accent))
        .title(" Send a message ".bold())
        .title_bottom(Line::from(" tab next · enter send · esc close ".dark_gray()).centered());
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let width = inner.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for field in [Field::Name, Field::Email, Field::Message] {
        let focused = form.focus == Focus::from(field);
        let marker = if focused { "› " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::new().fg(accent)),
            Span::styled(field.to_string(), Style::new().dark_gray()),
        ]));

        let value = form.value(field);
        let rows: Vec<&str> = if field == Field::Message {
            // Show the tail of long messages
            let all: Vec<&str> = value.split('\n').collect();
            let skip = all.len().saturating_sub(4);
            all.into_iter().skip(skip).collect()
        } else {
            vec![value]
        };
        let last = rows.len().saturating_sub(1);
        for (i, row) in rows.into_iter().enumerate() {
            let visible = tail(row, width.saturating_sub(1));
            let mut spans = vec![Span::raw("    "), Span::raw(visible)];
            if focused && i == last {
                spans.push(Span::styled("▏", Style::new().fg(accent)));
            }
            lines.push(Line::from(spans));
        }
        if field == Field::Message {
            for _ in lines.len()..12 {
                lines.push(Line::default());
            }
        }
    }

    let send_style = if form.focus == Focus::Send {
        Style::new().fg(Color::Black).bg(accent).bold()
    } else {
        Style::new().fg(accent)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Send ", send_style),
    ]));

    if let Some(err) = &form.error {
        lines.push(Line::from(format!("  {err}").red()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The longest suffix of `text` that fits in `width` columns.
fn tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_hero_height_collapses_on_small_terminals() {
        assert_eq!(hero_height(40), 12);
        assert_eq!(hero_height(20), 8);
        assert_eq!(hero_height(10), 0);
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("hello", 3), "llo");
        assert_eq!(tail("hi", 10), "hi");
        assert_eq!(tail("héllo", 4), "éllo");
        assert_eq!(tail("a漢字", 4), "漢字");
        assert_eq!(tail("a漢字", 3), "字");
    }

    #[test]
    fn test_hero_shows_name_and_caption() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let view = HeroView {
                    caption: Some("Full Stack"),
                    accent: Rgb(59, 130, 246),
                    elapsed_ms: 0,
                };
                render_hero(frame, frame.area(), &view);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(content::NAME));
        assert!(text.contains("Full Stack▌"));
        assert!(text.contains("View My Work"));
    }

    #[test]
    fn test_form_shows_values_and_error() {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        let _ = form.submit("me@example.com");

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_form(frame, frame.area(), &form, Rgb(59, 130, 246)))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Send a message"));
        assert!(text.contains("Ada"));
        assert!(text.contains("Email is required"));
    }
}
