//! Pure rendering: map App state to ratatui widgets.
//!
//! The page body is drawn row by row from the layout: each visible page
//! row belongs to a section (drawn through that section's reveal frame)
//! or to the footer. Widget-building functions are pure; the only effect
//! is Frame::render_widget() writing into the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::content::{PAGE, SectionId};
use crate::layout::{
    Emphasis, FormControl, PageLayout, Row, RowKind, SectionBlock, center, fit_width,
};
use crate::palette::Rgb;
use crate::reveal::RevealFrame;

use super::header::{self, HEADER_HEIGHT, HeaderHit};
use super::state::{App, HELP_HEIGHT};
use super::theme::{Theme, color};

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let theme = Theme::from_controller(&app.theme);

    // Sticky header on top, page body in the middle, key hints at the bottom
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(HELP_HEIGHT),
    ])
    .split(area);

    frame.render_widget(render_header(app, &theme, chunks[0].width), chunks[0]);
    frame.render_widget(render_body(app, &theme, chunks[1]), chunks[1]);
    frame.render_widget(render_help(app, &theme, chunks[2].width), chunks[2]);
}

// ============================================================================
// HEADER
// ============================================================================

fn render_header(app: &App, theme: &Theme, width: u16) -> Paragraph<'static> {
    let label = app.theme.toggle_label();
    let regions = header::regions(width, label);
    let current = app.current_section();

    let mut brand_row = vec![Span::styled(format!(" {}", PAGE.brand), theme.brand())];
    let mut nav_row = Vec::new();
    let mut nav_x = 0u16;

    for (hit, rect) in &regions {
        match hit {
            HeaderHit::ThemeToggle => {
                let used: u16 = brand_row.iter().map(|s| s.width() as u16).sum();
                brand_row.push(Span::styled(
                    " ".repeat(rect.x.saturating_sub(used) as usize),
                    theme.header(),
                ));
                brand_row.push(Span::styled(header::toggle_text(label), theme.toggle_button()));
            }
            HeaderHit::Nav(id) => {
                nav_row.push(Span::styled(
                    " ".repeat(rect.x.saturating_sub(nav_x) as usize),
                    theme.header(),
                ));
                let style = if current == Some(*id) {
                    theme.nav_button_current()
                } else {
                    theme.nav_button()
                };
                nav_row.push(Span::styled(header::nav_text(*id), style));
                nav_x = rect.x + rect.width;
            }
        }
    }

    let rule = Span::styled("\u{2500}".repeat(width as usize), theme.header());
    Paragraph::new(vec![
        Line::from(brand_row),
        Line::from(nav_row),
        Line::from(rule),
    ])
    .style(theme.header())
}

// ============================================================================
// HELP LINE
// ============================================================================

fn render_help(app: &App, theme: &Theme, width: u16) -> Paragraph<'static> {
    let hints: &[(&str, &str)] = if app.is_typing() {
        &[("Esc", "leave field"), ("Tab", "next"), ("Enter", "submit")]
    } else if app.focus == Some(FormControl::Submit) {
        &[("Enter", "send"), ("Tab", "next"), ("Esc", "leave form")]
    } else {
        &[
            ("1-6", "jump"),
            ("d", "theme"),
            ("j/k", "scroll"),
            ("Tab", "form"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::styled(" ", theme.help())];
    for (key, what) in hints {
        spans.push(Span::styled(format!("[{}]", key), theme.help_key()));
        spans.push(Span::styled(format!(" {}  ", what), theme.help()));
    }
    let used: usize = spans.iter().map(|s| s.width()).sum();
    spans.push(Span::styled(
        " ".repeat((width as usize).saturating_sub(used)),
        theme.help(),
    ));
    Paragraph::new(Line::from(spans))
}

// ============================================================================
// BODY
// ============================================================================

fn render_body(app: &App, theme: &Theme, area: Rect) -> Paragraph<'static> {
    let layout = &app.layout;
    let offset = app.scroll.offset();
    let width = area.width;

    let lines: Vec<Line<'static>> = (0..area.height)
        .map(|i| {
            let page_row = offset.saturating_add(i);
            match layout.section_at(page_row) {
                Some(id) => section_line(app, theme, layout.section(id), page_row, width),
                None => footer_line(layout, theme, page_row, width),
            }
        })
        .collect();

    Paragraph::new(lines)
}

/// One page row inside a section, drawn through the section's reveal frame.
fn section_line(
    app: &App,
    theme: &Theme,
    block: &SectionBlock,
    page_row: u16,
    width: u16,
) -> Line<'static> {
    let id = block.id;
    let bg = theme.section_bg(id);
    let reveal = app.reveal.frame(id, app.clock);
    let fill = Style::new().bg(color(bg));

    let Some((_, index)) = app.content_row_at(page_row) else {
        return Line::from(Span::styled(" ".repeat(width as usize), fill));
    };

    let row = &block.rows[index];
    let shear = shear_cols(&reveal, index, block.rows.len());

    let mut spans = match row.kind {
        RowKind::Control { control, line } => {
            control_spans(app, theme, id, &reveal, control, line, width)
        }
        _ => text_spans(theme, id, &reveal, row, width),
    };
    if shear > 0 {
        spans.insert(0, Span::styled(" ".repeat(shear as usize), fill));
    }
    pad_to(&mut spans, width, fill);
    Line::from(spans)
}

/// Horizontal offset standing in for the backward tilt: upper rows lean
/// further right while the tilt is non-zero.
fn shear_cols(reveal: &RevealFrame, index: usize, total: usize) -> u16 {
    if reveal.tilt_deg == 0.0 {
        return 0;
    }
    let lean = reveal.tilt_deg.abs().to_radians().tan();
    ((total - index) as f32 * lean * 0.5).round() as u16
}

fn text_spans(
    theme: &Theme,
    id: SectionId,
    reveal: &RevealFrame,
    row: &Row,
    width: u16,
) -> Vec<Span<'static>> {
    let bg = color(theme.section_bg(id));
    let fg: Rgb = match row.kind {
        RowKind::Title => theme.palette.title,
        _ => theme.palette.text,
    };
    let base = Style::new().bg(bg).fg(theme.faded(fg, id, reveal.opacity));

    let left = (width as usize).saturating_sub(row.width()) / 2;
    let mut spans = vec![Span::styled(" ".repeat(left), Style::new().bg(bg))];

    for run in &row.runs {
        let mut style = base;
        let heading = matches!(row.kind, RowKind::Title | RowKind::Heading);
        if run.emphasis == Emphasis::Strong || heading {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(run.text.clone(), style));
    }
    spans
}

/// One line of a form control. Text depends on form state, so it is built
/// here rather than in the layout.
fn control_spans(
    app: &App,
    theme: &Theme,
    id: SectionId,
    reveal: &RevealFrame,
    control: FormControl,
    line: u16,
    width: u16,
) -> Vec<Span<'static>> {
    let palette = theme.palette;
    let section_bg = theme.section_bg(id);
    let fade = |c: Rgb| color(section_bg.mix(c, reveal.opacity));

    let form_width = app.layout.form_width() as usize;
    let left = (width as usize).saturating_sub(form_width) / 2;
    let focused = app.focus == Some(control);
    let mut spans = vec![Span::styled(" ".repeat(left), Style::new().bg(color(section_bg)))];

    if control == FormControl::Submit {
        let label = PAGE
            .section(SectionId::Contact)
            .form()
            .map_or("", |f| f.submit_label);
        let mut style = Style::new().bg(fade(palette.submit_bg)).fg(fade(palette.submit_fg));
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(center(label, form_width), style));
        return spans;
    }

    let inner = form_width.saturating_sub(2);
    let border = Style::new().bg(fade(palette.input_bg)).fg(if focused {
        fade(palette.focus_ring)
    } else {
        fade(palette.placeholder)
    });

    let last = control.height() - 1;
    if line == 0 || line == last {
        let (l, r) = if line == 0 { ('\u{256d}', '\u{256e}') } else { ('\u{2570}', '\u{256f}') };
        spans.push(Span::styled(format!("{}{}{}", l, "\u{2500}".repeat(inner), r), border));
        return spans;
    }

    let text_width = inner.saturating_sub(2);
    let value = app.form.value(control).unwrap_or("");
    let visible = field_lines(value, text_width, (last - 1) as usize, focused);
    let text_line = visible.get((line - 1) as usize).cloned().unwrap_or_default();

    let (text, fg) = if value.is_empty() && line == 1 && !focused {
        (placeholder(control).to_string(), palette.placeholder)
    } else {
        (text_line, palette.input_fg)
    };
    let pad = text_width.saturating_sub(text.width());
    spans.push(Span::styled("\u{2502} ", border));
    spans.push(Span::styled(
        format!("{}{}", text, " ".repeat(pad)),
        Style::new().bg(fade(palette.input_bg)).fg(fade(fg)),
    ));
    spans.push(Span::styled(" \u{2502}", border));
    spans
}

fn placeholder(control: FormControl) -> &'static str {
    let fields = PAGE
        .section(SectionId::Contact)
        .form()
        .map_or(&[][..], |f| f.fields);
    let index = match control {
        FormControl::Name => 0,
        FormControl::Email => 1,
        FormControl::Message => 2,
        FormControl::Submit => return "",
    };
    fields.get(index).map_or("", |f| f.placeholder)
}

/// Lines of a field value that fit in `height` rows of `width` cells,
/// scrolled so the end (and cursor) stays visible.
fn field_lines(value: &str, width: usize, height: usize, cursor: bool) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();

    for raw in value.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
        }
        let mut rest = raw;
        while !rest.is_empty() {
            let split = fit_width(rest, width);
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
    }

    if cursor {
        match lines.last_mut() {
            Some(last) if last.width() < width => last.push('\u{258f}'),
            _ => lines.push("\u{258f}".to_string()),
        }
    }

    let skip = lines.len().saturating_sub(height);
    lines.split_off(skip)
}

fn footer_line(layout: &PageLayout, theme: &Theme, page_row: u16, width: u16) -> Line<'static> {
    let style = if page_row < layout.total_height {
        theme.footer()
    } else {
        Style::new()
    };
    let text = if page_row == layout.footer_top + 1 {
        center(PAGE.footer, width as usize)
    } else {
        " ".repeat(width as usize)
    };
    Line::from(Span::styled(text, style))
}

/// Fill the rest of the row with the background.
fn pad_to(spans: &mut Vec<Span<'static>>, width: u16, fill: Style) {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let rest = (width as usize).saturating_sub(used);
    if rest > 0 {
        spans.push(Span::styled(" ".repeat(rest), fill));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Action;
    use crate::tui::update::update;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 28;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn draw(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(&terminal)
    }

    /// App with every reveal transition finished.
    fn settled(mut app: App) -> App {
        let now = app.clock + Duration::from_secs(2);
        update(&mut app, &Action::Tick(now));
        app
    }

    #[test]
    fn header_shows_brand_nav_and_toggle() {
        let app = App::new(WIDTH, HEIGHT);
        let content = draw(&app);
        assert!(content.contains("Ashfa's Portfolio"));
        for id in SectionId::ALL {
            assert!(content.contains(id.nav_label()), "missing nav {}", id);
        }
        assert!(content.contains("Dark Mode"));
    }

    #[test]
    fn toggle_label_switches_after_toggle() {
        let mut app = App::new(WIDTH, HEIGHT);
        update(&mut app, &Action::ToggleDarkMode);
        let content = draw(&app);
        assert!(content.contains("Light Mode"));
        assert!(!content.contains("Dark Mode"));
    }

    #[test]
    fn home_is_drawn_once_revealed() {
        let app = settled(App::new(WIDTH, HEIGHT));
        let content = draw(&app);
        assert!(content.contains("Welcome to My Portfolio"));
        assert!(content.contains("Ashfa Shakeel"));
    }

    #[test]
    fn skills_heading_reaches_top_after_navigation() {
        let mut app = App::new(WIDTH, HEIGHT);
        update(&mut app, &Action::NavigateTo(SectionId::Skills));
        let app = settled(app);
        let settled_again = settled(app);
        let content = draw(&settled_again);
        assert!(content.contains("Skills & Expertise"));
        assert_eq!(settled_again.current_section(), Some(SectionId::Skills));
    }

    #[test]
    fn hidden_text_uses_background_color() {
        let app = App::new(WIDTH, HEIGHT);
        let theme = Theme::from_controller(&app.theme);
        let block = app.layout.section(SectionId::Home);
        let line = section_line(&app, &theme, block, block.top + block.content_top + 3, WIDTH);
        let bg = color(theme.section_bg(SectionId::Home));
        assert!(line.spans.iter().all(|s| s.style.fg.is_none() || s.style.fg == Some(bg)));
    }

    #[test]
    fn dark_mode_changes_body_background() {
        let mut app = settled(App::new(WIDTH, HEIGHT));
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let light_bg = terminal.backend().buffer()[(0, HEADER_HEIGHT)].bg;

        update(&mut app, &Action::ToggleDarkMode);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let dark_bg = terminal.backend().buffer()[(0, HEADER_HEIGHT)].bg;

        assert_ne!(light_bg, dark_bg);
        assert_eq!(dark_bg, color(theme_dark_home()));
    }

    fn theme_dark_home() -> Rgb {
        crate::palette::DARK.section_bg(SectionId::Home)
    }

    #[test]
    fn contact_form_shows_placeholders_and_button() {
        let mut app = App::new(WIDTH, HEIGHT);
        update(&mut app, &Action::ScrollToBottom);
        let content = draw(&settled(app));
        assert!(content.contains("Your Name"));
        assert!(content.contains("Your Email"));
        assert!(content.contains("Your Message"));
        assert!(content.contains("Send Message"));
        assert!(content.contains("All Rights Reserved"));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut app = App::new(WIDTH, HEIGHT);
        update(&mut app, &Action::FocusNext);
        for c in "Sara".chars() {
            update(&mut app, &Action::Input(c));
        }
        let content = draw(&settled(app));
        assert!(content.contains("Sara"));
        assert!(!content.contains("Your Name"));
    }

    #[test]
    fn wide_characters_keep_field_border_aligned() {
        let mut app = App::new(WIDTH, HEIGHT);
        update(&mut app, &Action::FocusNext);
        for c in "日本語日本語".chars() {
            update(&mut app, &Action::Input(c));
        }
        let app = settled(app);

        let mut terminal = make_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let rightmost = |y: u16, symbol: &str| {
            (0..WIDTH).rev().find(|x| buffer[(*x, y)].symbol() == symbol)
        };

        let text_row = (0..HEIGHT)
            .find(|y| (0..WIDTH).any(|x| buffer[(x, *y)].symbol() == "日"))
            .expect("typed text is drawn");
        let corner = rightmost(text_row - 1, "\u{256e}");
        assert!(corner.is_some());
        assert_eq!(corner, rightmost(text_row, "\u{2502}"));
    }

    #[test]
    fn field_lines_split_by_cell_width() {
        let lines = field_lines("日本語", 4, 3, false);
        assert_eq!(lines, vec!["日本".to_string(), "語".to_string()]);
    }

    #[test]
    fn help_line_changes_while_typing() {
        let mut app = App::new(WIDTH, HEIGHT);
        assert!(draw(&app).contains("[q] quit"));
        update(&mut app, &Action::FocusNext);
        assert!(draw(&app).contains("leave field"));
    }

    #[test]
    fn field_lines_keep_cursor_visible() {
        let lines = field_lines("abcdefgh", 4, 1, true);
        assert_eq!(lines, vec!["\u{258f}".to_string()]);
        let lines = field_lines("ab\ncd", 4, 3, false);
        assert_eq!(lines, vec!["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn shear_vanishes_when_settled() {
        assert_eq!(shear_cols(&RevealFrame::VISIBLE, 0, 20), 0);
        assert!(shear_cols(&RevealFrame::HIDDEN, 0, 20) > 0);
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let app = App::new(12, 5);
        let backend = TestBackend::new(12, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }
}
