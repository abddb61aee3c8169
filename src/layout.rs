//! Page layout: turn static content into positioned rows.
//!
//! Pure computation over (content, viewport). The page is one tall column
//! of rows; sections are stacked in page order, each at least one viewport
//! tall, content vertically centered. Scroll offsets, navigation targets
//! and reveal intersection tests are all expressed in these row units.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{Block, FormMarkup, ImageRef, InputKind, PAGE, Section, SectionId};

/// Widest a prose row may get (roughly a `max-w-3xl` column).
pub const PROSE_MAX_WIDTH: u16 = 72;

/// Widest the contact form may get (roughly `max-w-lg`).
pub const FORM_MAX_WIDTH: u16 = 48;

/// Inner text lines of the message textarea.
pub const TEXTAREA_LINES: u16 = 3;

const IMAGE_WIDTH: u16 = 16;
const IMAGE_HEIGHT: u16 = 7;
const SECTION_PADDING: u16 = 1;
const FOOTER_HEIGHT: u16 = 3;

// ============================================================================
// TYPES
// ============================================================================

/// Visible area available to the page body, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Strong,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Run {
    pub fn normal(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            emphasis: Emphasis::Normal,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            emphasis: Emphasis::Strong,
        }
    }
}

/// Focusable controls of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    Name,
    Email,
    Message,
    Submit,
}

impl FormControl {
    pub const ALL: [FormControl; 4] = [
        FormControl::Name,
        FormControl::Email,
        FormControl::Message,
        FormControl::Submit,
    ];

    fn from_input(kind: InputKind) -> Self {
        match kind {
            InputKind::Text => FormControl::Name,
            InputKind::Email => FormControl::Email,
            InputKind::TextArea => FormControl::Message,
        }
    }

    /// Rows the control occupies, borders included.
    pub fn height(self) -> u16 {
        match self {
            FormControl::Name | FormControl::Email => 3,
            FormControl::Message => TEXTAREA_LINES + 2,
            FormControl::Submit => 1,
        }
    }

    pub fn next(self) -> Self {
        let i = FormControl::ALL.iter().position(|c| *c == self).unwrap_or(0);
        FormControl::ALL[(i + 1) % FormControl::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = FormControl::ALL.len();
        let i = FormControl::ALL.iter().position(|c| *c == self).unwrap_or(0);
        FormControl::ALL[(i + n - 1) % n]
    }
}

/// What a row is, so the view can pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    Image,
    Title,
    Heading,
    Paragraph,
    Bullet,
    /// One line of a form control; `line` counts from the control's top.
    Control { control: FormControl, line: u16 },
}

/// A laid-out row. Control rows carry no runs: their text depends on
/// form state and is filled in at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub runs: Vec<Run>,
}

impl Row {
    fn blank() -> Self {
        Row {
            kind: RowKind::Blank,
            runs: Vec::new(),
        }
    }

    /// Display width in cells.
    pub fn width(&self) -> usize {
        self.runs.iter().map(|r| r.text.width()).sum()
    }

    /// Concatenated plain text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A positioned section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock {
    pub id: SectionId,
    /// First page row of the section.
    pub top: u16,
    pub height: u16,
    /// Offset of the first content row within the section.
    pub content_top: u16,
    pub rows: Vec<Row>,
}

impl SectionBlock {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Whether any row of the section falls inside `[offset, offset + height)`.
    pub fn intersects(&self, offset: u16, height: u16) -> bool {
        let view_end = offset.saturating_add(height);
        height > 0 && self.top < view_end && offset < self.bottom()
    }

    /// Page row of the given content row.
    pub fn row_position(&self, index: usize) -> u16 {
        self.top + self.content_top + index as u16
    }
}

/// The whole page laid out for one viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub sections: Vec<SectionBlock>,
    pub footer_top: u16,
    pub total_height: u16,
}

// ============================================================================
// LAYOUT
// ============================================================================

impl PageLayout {
    /// Lay out [`PAGE`] for the given viewport.
    pub fn compute(viewport: Viewport) -> Self {
        let mut sections = Vec::with_capacity(PAGE.sections.len());
        let mut top: u16 = 0;

        for section in PAGE.sections {
            let rows = section_rows(section, viewport.width);
            let content_height = rows.len() as u16;
            let height = viewport
                .height
                .max(content_height.saturating_add(SECTION_PADDING * 2));
            let content_top = (height - content_height) / 2;

            sections.push(SectionBlock {
                id: section.id,
                top,
                height,
                content_top,
                rows,
            });
            top = top.saturating_add(height);
        }

        PageLayout {
            viewport,
            sections,
            footer_top: top,
            total_height: top.saturating_add(FOOTER_HEIGHT),
        }
    }

    /// Typed lookup; every identifier is laid out.
    pub fn section(&self, id: SectionId) -> &SectionBlock {
        &self.sections[id.index()]
    }

    /// Anchor lookup by raw identifier, `getElementById` style.
    pub fn find_anchor(&self, anchor: &str) -> Option<&SectionBlock> {
        self.sections.iter().find(|s| s.id.as_str() == anchor)
    }

    /// Section containing the given page row, if any (the footer has none).
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|s| s.top <= row && row < s.bottom())
            .map(|s| s.id)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport.height)
    }

    /// Sections with at least one row inside the viewport at `offset`.
    pub fn intersecting(&self, offset: u16) -> impl Iterator<Item = SectionId> + '_ {
        let height = self.viewport.height;
        self.sections
            .iter()
            .filter(move |s| s.intersects(offset, height))
            .map(|s| s.id)
    }

    /// Page row of a form control's first line.
    pub fn control_top(&self, control: FormControl) -> u16 {
        let contact = self.section(SectionId::Contact);
        contact
            .rows
            .iter()
            .position(|r| r.kind == RowKind::Control { control, line: 0 })
            .map(|i| contact.row_position(i))
            .unwrap_or(contact.top)
    }

    /// Width of the form column for this viewport.
    pub fn form_width(&self) -> u16 {
        form_width(self.viewport.width)
    }
}

fn prose_width(viewport_width: u16) -> usize {
    viewport_width.saturating_sub(4).clamp(1, PROSE_MAX_WIDTH) as usize
}

fn form_width(viewport_width: u16) -> u16 {
    viewport_width.saturating_sub(4).clamp(8, FORM_MAX_WIDTH)
}

fn section_rows(section: &Section, viewport_width: u16) -> Vec<Row> {
    let width = prose_width(viewport_width);
    let mut rows = Vec::new();

    for block in section.blocks {
        match block {
            Block::Image(image) => {
                rows.extend(image_rows(image));
                rows.push(Row::blank());
            }
            Block::Title(text) => {
                push_wrapped(&mut rows, RowKind::Title, &[Run::strong(*text)], width);
            }
            Block::Heading(text) => {
                push_wrapped(&mut rows, RowKind::Heading, &[Run::strong(*text)], width);
            }
            Block::Paragraph(text) => {
                rows.push(Row::blank());
                push_wrapped(&mut rows, RowKind::Paragraph, &[Run::normal(*text)], width);
            }
            Block::Bullets(items) => {
                rows.push(Row::blank());
                for item in *items {
                    let mut runs = vec![Run::normal("\u{2022} ")];
                    if let Some(strong) = item.strong {
                        runs.push(Run::strong(strong));
                    }
                    runs.push(Run::normal(item.text));
                    push_wrapped(&mut rows, RowKind::Bullet, &runs, width);
                    if let Some(detail) = item.detail {
                        push_wrapped(&mut rows, RowKind::Paragraph, &[Run::normal(detail)], width);
                    }
                }
            }
            Block::Form(form) => {
                rows.push(Row::blank());
                rows.extend(form_rows(form));
            }
        }
    }

    rows
}

fn push_wrapped(rows: &mut Vec<Row>, kind: RowKind, runs: &[Run], width: usize) {
    rows.extend(wrap_runs(runs, width).into_iter().map(|runs| Row { kind, runs }));
}

/// Rounded placeholder frame with the alt text in the middle.
fn image_rows(image: &ImageRef) -> Vec<Row> {
    let inner = (IMAGE_WIDTH - 2) as usize;
    let mut rows = Vec::with_capacity(IMAGE_HEIGHT as usize);
    let edge = "\u{2500}".repeat(inner);
    rows.push(Row {
        kind: RowKind::Image,
        runs: vec![Run::normal(format!("\u{256d}{}\u{256e}", edge))],
    });

    let alt = &image.alt[..fit_width(image.alt, inner)];
    let middle = (IMAGE_HEIGHT - 2) / 2;
    for line in 0..IMAGE_HEIGHT - 2 {
        let body = if line == middle {
            center(alt, inner)
        } else {
            " ".repeat(inner)
        };
        rows.push(Row {
            kind: RowKind::Image,
            runs: vec![Run::normal(format!("\u{2502}{}\u{2502}", body))],
        });
    }

    rows.push(Row {
        kind: RowKind::Image,
        runs: vec![Run::normal(format!("\u{2570}{}\u{256f}", edge))],
    });
    rows
}

fn form_rows(form: &FormMarkup) -> Vec<Row> {
    let mut rows = Vec::new();
    let controls = form
        .fields
        .iter()
        .map(|f| FormControl::from_input(f.kind))
        .chain(std::iter::once(FormControl::Submit));

    for (i, control) in controls.enumerate() {
        if i > 0 {
            rows.push(Row::blank());
        }
        for line in 0..control.height() {
            rows.push(Row {
                kind: RowKind::Control { control, line },
                runs: Vec::new(),
            });
        }
    }
    rows
}

/// Center `text` in a field of `width` cells.
pub fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}

/// Byte length of the longest prefix of `text` that fits in `width` cells.
///
/// Always takes at least one character, so splitting on it makes progress
/// even when a single wide character is wider than `width`.
pub fn fit_width(text: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if i > 0 && used + w > width {
            return i;
        }
        used += w;
    }
    text.len()
}

// ============================================================================
// WORD WRAP
// ============================================================================

/// Greedy word wrap that keeps emphasis runs intact across breaks.
///
/// Widths are display cells. Whitespace collapses to single spaces. Words
/// wider than `width` are hard-split. Always returns at least one line.
pub fn wrap_runs(runs: &[Run], width: usize) -> Vec<Vec<Run>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Run>> = Vec::new();
    let mut line: Vec<Run> = Vec::new();
    let mut line_len = 0usize;

    for word in words(runs) {
        let word_width: usize = word.iter().map(|p| p.text.width()).sum();
        let sep = usize::from(line_len > 0);
        if line_len + sep + word_width <= width {
            if sep == 1 {
                append(&mut line, " ", word[0].emphasis);
            }
            for piece in &word {
                append(&mut line, &piece.text, piece.emphasis);
            }
            line_len += sep + word_width;
            continue;
        }

        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        for piece in &word {
            let mut rest = piece.text.as_str();
            while !rest.is_empty() {
                let room = width.saturating_sub(line_len);
                let split = fit_width(rest, room);
                let head = &rest[..split];
                let head_width = head.width();
                if line_len > 0 && head_width > room {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                    continue;
                }
                append(&mut line, head, piece.emphasis);
                line_len += head_width;
                rest = &rest[split..];
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split runs into words. A word is one or more pieces: text with no
/// whitespace between runs (e.g. a trailing bullet marker) is glued into
/// the same word, each piece keeping its own emphasis.
fn words(runs: &[Run]) -> Vec<Vec<Run>> {
    let mut out: Vec<Vec<Run>> = Vec::new();
    let mut glued = false;

    for run in runs {
        let starts_with_space = run.text.starts_with(char::is_whitespace);
        for (i, word) in run.text.split_whitespace().enumerate() {
            let piece = Run {
                text: word.to_string(),
                emphasis: run.emphasis,
            };
            if i == 0 && glued && !starts_with_space {
                if let Some(last) = out.last_mut() {
                    last.push(piece);
                    continue;
                }
            }
            out.push(vec![piece]);
        }
        glued = !run.text.ends_with(char::is_whitespace) && !run.text.is_empty();
    }
    out
}

fn append(line: &mut Vec<Run>, text: &str, emphasis: Emphasis) {
    match line.last_mut() {
        Some(last) if last.emphasis == emphasis => last.text.push_str(text),
        _ => line.push(Run {
            text: text.to_string(),
            emphasis,
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &[Run]) -> String {
        line.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_runs(&[Run::normal("the quick brown fox jumps")], 10);
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(texts, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let lines = wrap_runs(&[Run::normal("abcdefghij")], 4);
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_emphasis_runs() {
        let runs = [Run::strong("House Job"), Run::normal(" (2023-2024)")];
        let lines = wrap_runs(&runs, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], vec![Run::strong("House Job"), Run::normal(" (2023-2024)")]);
    }

    #[test]
    fn wrap_glued_lead_keeps_each_emphasis() {
        let runs = [Run::strong("House Job"), Run::normal("(2023-2024)")];
        let lines = wrap_runs(&runs, 40);
        assert_eq!(lines[0], vec![Run::strong("House Job"), Run::normal("(2023-2024)")]);
    }

    #[test]
    fn wrap_measures_wide_characters_in_cells() {
        let lines = wrap_runs(&[Run::normal("日本語日本語")], 5);
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(texts, vec!["日本", "語日", "本語"]);
        assert!(lines.iter().all(|l| line_text(l).width() <= 5));
    }

    #[test]
    fn fit_width_counts_cells_and_always_progresses() {
        assert_eq!(fit_width("abc", 2), 2);
        assert_eq!(fit_width("日本", 3), "日".len());
        assert_eq!(fit_width("日本", 1), "日".len());
        assert_eq!(fit_width("", 4), 0);
    }

    #[test]
    fn wrap_glues_bullet_marker_to_first_word() {
        let runs = [Run::normal("\u{2022} "), Run::strong("Intermediate")];
        let lines = wrap_runs(&runs, 40);
        assert_eq!(line_text(&lines[0]), "\u{2022} Intermediate");
    }

    #[test]
    fn wrap_of_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_runs(&[], 10), vec![Vec::<Run>::new()]);
    }

    #[test]
    fn sections_are_stacked_without_gaps() {
        let layout = PageLayout::compute(Viewport::new(80, 24));
        let mut expected_top = 0;
        for block in &layout.sections {
            assert_eq!(block.top, expected_top);
            assert!(block.height >= 24, "every section is at least one viewport tall");
            expected_top = block.bottom();
        }
        assert_eq!(layout.footer_top, expected_top);
        assert_eq!(layout.total_height, expected_top + FOOTER_HEIGHT);
    }

    #[test]
    fn narrow_viewport_grows_sections_past_viewport_height() {
        let layout = PageLayout::compute(Viewport::new(24, 10));
        let about = layout.section(SectionId::About);
        assert!(about.height > 10);
        assert!(about.rows.iter().all(|r| r.width() <= 20));
    }

    #[test]
    fn anchor_lookup_finds_known_ids_only() {
        let layout = PageLayout::compute(Viewport::new(80, 24));
        assert_eq!(layout.find_anchor("skills").map(|s| s.id), Some(SectionId::Skills));
        assert!(layout.find_anchor("blog").is_none());
    }

    #[test]
    fn section_at_maps_rows_to_sections() {
        let layout = PageLayout::compute(Viewport::new(80, 24));
        let skills = layout.section(SectionId::Skills);
        assert_eq!(layout.section_at(skills.top), Some(SectionId::Skills));
        assert_eq!(layout.section_at(skills.bottom() - 1), Some(SectionId::Skills));
        assert_eq!(layout.section_at(layout.footer_top), None);
    }

    #[test]
    fn intersecting_at_top_is_home_only() {
        let layout = PageLayout::compute(Viewport::new(80, 24));
        let ids: Vec<SectionId> = layout.intersecting(0).collect();
        assert_eq!(ids, vec![SectionId::Home]);
    }

    #[test]
    fn contact_rows_contain_every_control_in_order() {
        let layout = PageLayout::compute(Viewport::new(80, 40));
        let tops: Vec<u16> = FormControl::ALL.iter().map(|c| layout.control_top(*c)).collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        let contact = layout.section(SectionId::Contact);
        assert!(tops.iter().all(|t| *t >= contact.top && *t < contact.bottom()));
    }

    #[test]
    fn form_control_tab_order_wraps() {
        assert_eq!(FormControl::Submit.next(), FormControl::Name);
        assert_eq!(FormControl::Name.prev(), FormControl::Submit);
        assert_eq!(FormControl::Email.next(), FormControl::Message);
    }

    #[test]
    fn image_frame_shows_alt_text() {
        let layout = PageLayout::compute(Viewport::new(80, 24));
        let home = layout.section(SectionId::Home);
        let image_rows: Vec<&Row> = home.rows.iter().filter(|r| r.kind == RowKind::Image).collect();
        assert_eq!(image_rows.len(), IMAGE_HEIGHT as usize);
        assert!(image_rows.iter().any(|r| r.text().contains("Ashfa Shakeel")));
    }

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 2), "abc");
        assert_eq!(center("日本", 6), " 日本 ");
    }
}
