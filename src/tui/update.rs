//! State transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal:
//! the only clock is the one carried by `Tick`. Every scroll change is
//! followed by a reveal intersection check.

use crate::layout::{FormControl, RowKind};

use super::header::{self, HEADER_HEIGHT, HeaderHit};
use super::state::{Action, App, Effect, Transition};

/// Apply an action to the page.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleDarkMode => app.theme.toggle_dark_mode(),
        Action::NavigateTo(id) => {
            app.scroll.scroll_to_section(&app.layout, id.as_str(), app.clock);
        }
        Action::ScrollBy(rows) => {
            app.scroll.scroll_by(*rows, &app.layout);
            app.observe();
        }
        Action::ScrollPage(pages) => {
            let page = i32::from(app.viewport().height.saturating_sub(1).max(1));
            app.scroll.scroll_by(pages * page, &app.layout);
            app.observe();
        }
        Action::ScrollToTop => {
            app.scroll.jump_to(0, &app.layout);
            app.observe();
        }
        Action::ScrollToBottom => {
            app.scroll.jump_to(app.layout.max_scroll(), &app.layout);
            app.observe();
        }
        Action::FocusNext => {
            let next = app.focus.map_or(FormControl::Name, FormControl::next);
            focus(app, next);
        }
        Action::FocusPrev => {
            let prev = app.focus.map_or(FormControl::Submit, FormControl::prev);
            focus(app, prev);
        }
        Action::Unfocus => app.focus = None,
        Action::Input(c) => {
            if let Some(value) = app.focus.and_then(|f| app.form.value_mut(f)) {
                value.push(*c);
            }
        }
        Action::Backspace => {
            if let Some(value) = app.focus.and_then(|f| app.form.value_mut(f)) {
                value.pop();
            }
        }
        Action::Newline => {
            if app.focus == Some(FormControl::Message) {
                app.form.message.push('\n');
            }
        }
        Action::Submit => return Transition::Effect(Effect::SubmitContactForm),
        Action::Click { column, row } => return click(app, *column, *row),
        Action::Resize { width, height } => app.resize(*width, *height),
        Action::Tick(now) => {
            app.clock = *now;
            if app.scroll.tick(*now) {
                app.observe();
            }
        }
    }
    Transition::Render
}

/// Focus a control and bring it fully into view.
fn focus(app: &mut App, control: FormControl) {
    app.focus = Some(control);

    let top = app.layout.control_top(control);
    let bottom = top + control.height();
    let offset = app.scroll.target();
    let height = app.viewport().height;

    if top < offset {
        app.scroll.jump_to(top, &app.layout);
    } else if bottom > offset + height {
        app.scroll.jump_to(bottom.saturating_sub(height), &app.layout);
    }
    app.observe();
}

/// Left click: header buttons act, form controls take focus, anything
/// else releases focus.
fn click(app: &mut App, column: u16, row: u16) -> Transition {
    if row < HEADER_HEIGHT {
        match header::hit_test(app.width, app.theme.toggle_label(), column, row) {
            Some(HeaderHit::Nav(id)) => return update(app, &Action::NavigateTo(id)),
            Some(HeaderHit::ThemeToggle) => return update(app, &Action::ToggleDarkMode),
            None => return Transition::Render,
        }
    }

    // The help line sits just below the body
    let body_row = row - HEADER_HEIGHT;
    if body_row >= app.viewport().height {
        return Transition::Render;
    }

    let page_row = app.scroll.offset() + body_row;
    app.focus = control_at(app, page_row);
    if app.focus == Some(FormControl::Submit) {
        return Transition::Effect(Effect::SubmitContactForm);
    }
    Transition::Render
}

/// Form control drawn at a page row, if any.
fn control_at(app: &App, page_row: u16) -> Option<FormControl> {
    let (id, index) = app.content_row_at(page_row)?;
    match app.layout.section(id).rows[index].kind {
        RowKind::Control { control, .. } => Some(control),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
