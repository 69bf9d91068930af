//! Page composition: portfolio sections laid out as scrollable lines.

use folio_core::Rgb;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::content::{
    self, ABOUT, ABOUT_TAGS, CERTIFICATIONS, EDUCATION, EXPERIENCE, GALLERY, HIGHLIGHTS, LEADERSHIP,
    PROJECTS, Role, SKILLS, SectionId,
};

/// Left margin of the page body.
const MARGIN: &str = "  ";

/// All sections laid out for one terminal width.
#[derive(Debug, Clone)]
pub struct Page {
    width: u16,
    lines: Vec<Line<'static>>,
    /// First line of each section.
    anchors: Vec<(SectionId, usize)>,
}

impl Page {
    /// Lay out every section for `width` columns.
    pub fn build(width: u16, accent: Rgb, year: i32) -> Self {
        let mut builder = Builder {
            lines: Vec::new(),
            anchors: Vec::new(),
            text_width: (width as usize).saturating_sub(MARGIN.len() * 2).max(20),
            accent: accent.into(),
        };

        for id in SectionId::ALL {
            builder.section(id);
        }
        builder.footer(width as usize, year);

        Self {
            width,
            lines: builder.lines,
            anchors: builder.anchors,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// First line of a section.
    pub fn anchor(&self, id: SectionId) -> usize {
        self.anchors
            .iter()
            .find(|(section, _)| *section == id)
            .map_or(0, |(_, line)| *line)
    }

    /// The section containing `line`.
    pub fn section_at(&self, line: usize) -> SectionId {
        self.anchors
            .iter()
            .take_while(|(_, start)| *start <= line)
            .last()
            .map_or(SectionId::ALL[0], |(id, _)| *id)
    }

    /// The whole page as plain text, one line per row.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Scroll position of the page body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
}

impl Viewport {
    /// Scroll by `delta` lines, keeping the last page filled.
    pub fn scroll_by(&mut self, delta: isize, page_len: usize, height: usize) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target, page_len, height);
    }

    pub fn scroll_to(&mut self, offset: usize, page_len: usize, height: usize) {
        let max = page_len.saturating_sub(height);
        self.offset = offset.min(max);
    }

    /// Jump to the section after the one at the top of the view.
    pub fn next_section(&mut self, page: &Page, height: usize) {
        let current = page.section_at(self.offset);
        let idx = SectionId::ALL.iter().position(|&s| s == current).unwrap_or(0);
        let next = SectionId::ALL[(idx + 1).min(SectionId::ALL.len() - 1)];
        self.scroll_to(page.anchor(next), page.len(), height);
    }

    /// Jump to the start of the current section, or the previous one if
    /// already there.
    pub fn previous_section(&mut self, page: &Page, height: usize) {
        let current = page.section_at(self.offset);
        let target = if page.anchor(current) < self.offset {
            current
        } else {
            let idx = SectionId::ALL.iter().position(|&s| s == current).unwrap_or(0);
            SectionId::ALL[idx.saturating_sub(1)]
        };
        self.scroll_to(page.anchor(target), page.len(), height);
    }
}

/// Accumulates styled lines while laying out sections.
struct Builder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(SectionId, usize)>,
    text_width: usize,
    accent: Color,
}

impl Builder {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn section(&mut self, id: SectionId) {
        self.anchors.push((id, self.lines.len()));
        self.blank();
        self.lines.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::styled("▍ ", Style::new().fg(self.accent)),
            Span::styled(
                id.title().to_string(),
                Style::new().fg(self.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(subtitle) = id.subtitle() {
            self.blank();
            self.paragraph(subtitle, Style::new().dark_gray());
        }
        self.blank();

        match id {
            SectionId::About => self.about(),
            SectionId::Skills => self.skills(),
            SectionId::Education => self.education(),
            SectionId::Projects => self.projects(),
            SectionId::Experience => self.roles(EXPERIENCE),
            SectionId::Leadership => self.roles(LEADERSHIP),
            SectionId::Achievements => self.achievements(),
            SectionId::Contact => self.contact(),
        }
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        self.indented(text, "", style);
    }

    /// Wrap `text` with `prefix` on the first line and matching indent after.
    fn indented(&mut self, text: &str, prefix: &str, style: Style) {
        let indent = " ".repeat(prefix.width());
        let width = self.text_width.saturating_sub(indent.len());
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let lead = if i == 0 { prefix.to_string() } else { indent.clone() };
            self.lines.push(Line::from(vec![
                Span::raw(MARGIN),
                Span::styled(lead, Style::new().fg(self.accent)),
                Span::styled(row, style),
            ]));
        }
    }

    fn title(&mut self, title: &str, detail: Option<&str>) {
        let mut spans = vec![
            Span::raw(MARGIN),
            Span::styled(title.to_string(), Style::new().bold()),
        ];
        if let Some(detail) = detail {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(detail.to_string(), Style::new().dark_gray()));
        }
        self.lines.push(Line::from(spans));
    }

    /// Tags rendered as bracketed pills, wrapped to the text width.
    fn pills(&mut self, items: &[&str]) {
        let mut row: Vec<Span<'static>> = vec![Span::raw(MARGIN)];
        let mut used = 0;
        for item in items {
            let pill = format!("[{item}]");
            let len = pill.width() + 1;
            if used > 0 && used + len > self.text_width {
                self.lines.push(Line::from(std::mem::replace(
                    &mut row,
                    vec![Span::raw(MARGIN)],
                )));
                used = 0;
            }
            row.push(Span::styled(pill, Style::new().fg(self.accent)));
            row.push(Span::raw(" "));
            used += len;
        }
        if used > 0 {
            self.lines.push(Line::from(row));
        }
    }

    fn link(&mut self, label: &str, url: &str) {
        self.lines.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::styled(format!("{label}: "), Style::new().dark_gray()),
            Span::styled(url.to_string(), Style::new().fg(self.accent).underlined()),
        ]));
    }

    fn about(&mut self) {
        self.paragraph(ABOUT, Style::new());
        self.blank();
        self.pills(ABOUT_TAGS);
    }

    fn skills(&mut self) {
        for (i, group) in SKILLS.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.title(group.heading, None);
            self.pills(group.items);
        }
    }

    fn education(&mut self) {
        for (i, entry) in EDUCATION.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.indented(entry.period, "◆ ", Style::new().dark_gray());
            self.title(entry.institution, None);
            self.paragraph(entry.detail, Style::new().dark_gray());
        }
    }

    fn projects(&mut self) {
        for (i, project) in PROJECTS.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.title(project.title, None);
            for bullet in project.bullets {
                self.indented(bullet, "• ", Style::new());
            }
            self.pills(project.tags);
            if let Some(demo) = project.demo {
                self.link("Demo", demo);
            }
            if let Some(repo) = project.repo {
                self.link("Code", repo);
            }
        }
    }

    fn roles(&mut self, roles: &[Role]) {
        for (i, role) in roles.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.title(role.title, Some(role.period));
            if let Some(summary) = role.summary {
                self.paragraph(summary, Style::new());
            }
            if !role.tags.is_empty() {
                self.pills(role.tags);
            }
        }
    }

    fn achievements(&mut self) {
        self.title("Highlights", Some("🏆"));
        for highlight in HIGHLIGHTS {
            self.indented(highlight, "• ", Style::new());
        }
        self.blank();
        self.title("Certifications", None);
        self.pills(CERTIFICATIONS);
        self.blank();
        self.title("Gallery", None);
        for caption in GALLERY {
            self.indented(caption, "▣ ", Style::new().dark_gray());
        }
    }

    fn contact(&mut self) {
        self.title("Get in touch", None);
        self.indented(content::LOCATION, "⌖ ", Style::new());
        self.indented(content::EMAIL, "✉ ", Style::new());
        self.indented(content::PHONE, "☎ ", Style::new());
        self.blank();
        for link in [content::GITHUB, content::LINKEDIN, content::LEETCODE] {
            self.link(link.label, link.url);
        }
        self.blank();
        self.lines.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::raw("Press "),
            Span::styled("m", Style::new().fg(self.accent).bold()),
            Span::raw(" to send a message."),
        ]));
    }

    fn footer(&mut self, width: usize, year: i32) {
        self.blank();
        self.lines
            .push(Line::styled("─".repeat(width), Style::new().dark_gray()));
        self.lines.push(
            Line::styled(
                format!(
                    "© {year} {}. Built with Rust, ratatui and crossterm.",
                    content::NAME
                ),
                Style::new().dark_gray(),
            )
            .centered(),
        );
        self.blank();
    }
}

/// Greedy word wrap to `width` display columns. Words longer than a line are
/// kept whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for word in text.split_whitespace() {
        let word_len = word.width();
        if len > 0 && len + 1 + word_len > width {
            rows.push(std::mem::take(&mut current));
            len = 0;
        }
        if len > 0 {
            current.push(' ');
            len += 1;
        }
        current.push_str(word);
        len += word_len;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// The whole portfolio as plain text, for `--export`.
pub fn export_text(width: u16, phrases: &[String], year: i32) -> String {
    let page = Page::build(width, Rgb::BLACK, year);
    let mut out = String::new();
    out.push_str(content::NAME);
    out.push('\n');
    out.push_str(content::BADGE);
    out.push('\n');
    if !phrases.is_empty() {
        out.push_str(&phrases.join(" · "));
        out.push('\n');
    }
    for link in [content::GITHUB, content::LINKEDIN] {
        out.push_str(&format!("{}: {}\n", link.label, link.url));
    }
    out.push_str(&page.plain_text());
    out
}
