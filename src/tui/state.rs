//! TUI state algebra: the page model and the vocabulary around it.
//!
//! `App` is the whole page: theme, layout, scroll, reveal, form buffers
//! and the page clock. The transition function and the rendering layer
//! both program against these types. Time enters only through `Tick`, so
//! every transition is reproducible in tests.

use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};

use crate::content::SectionId;
use crate::dark_mode::ThemeController;
use crate::layout::{FormControl, PageLayout, Viewport};
use crate::navigator::ScrollState;
use crate::reveal::RevealAnimator;

use super::header::HEADER_HEIGHT;

/// Rows taken by the key-hint line at the bottom.
pub const HELP_HEIGHT: u16 = 1;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A reader thread forwards crossterm key, mouse and resize events
/// - A ticker thread sends the page clock at the configured frame rate
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    /// Time since the page was loaded.
    Tick(Duration),
}

// ============================================================================
// CONTACT FORM
// ============================================================================

/// Input buffers of the contact form. Nothing ever reads them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Current value of a text control; `None` for the submit button.
    pub fn value(&self, control: FormControl) -> Option<&str> {
        match control {
            FormControl::Name => Some(&self.name),
            FormControl::Email => Some(&self.email),
            FormControl::Message => Some(&self.message),
            FormControl::Submit => None,
        }
    }

    pub fn value_mut(&mut self, control: FormControl) -> Option<&mut String> {
        match control {
            FormControl::Name => Some(&mut self.name),
            FormControl::Email => Some(&mut self.email),
            FormControl::Message => Some(&mut self.message),
            FormControl::Submit => None,
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub theme: ThemeController,
    /// Full terminal size.
    pub width: u16,
    pub height: u16,
    /// Page laid out for the current body viewport.
    pub layout: PageLayout,
    pub scroll: ScrollState,
    pub reveal: RevealAnimator,
    pub form: ContactForm,
    /// Focused form control, if any.
    pub focus: Option<FormControl>,
    /// Page clock: time since load, advanced by ticks.
    pub clock: Duration,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// A freshly loaded page: light theme, scrolled to the top, home revealed.
    pub fn new(width: u16, height: u16) -> Self {
        let layout = PageLayout::compute(body_viewport(width, height));
        let mut app = App {
            theme: ThemeController::new(),
            width,
            height,
            layout,
            scroll: ScrollState::new(),
            reveal: RevealAnimator::new(),
            form: ContactForm::default(),
            focus: None,
            clock: Duration::ZERO,
            should_quit: false,
        };
        app.observe();
        app
    }

    /// Body viewport: terminal minus header and help line.
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    /// Section at the top of the viewport.
    pub fn current_section(&self) -> Option<SectionId> {
        self.layout.section_at(self.scroll.offset())
    }

    /// Whether keystrokes currently go into a text field.
    pub fn is_typing(&self) -> bool {
        matches!(
            self.focus,
            Some(FormControl::Name | FormControl::Email | FormControl::Message)
        )
    }

    /// Re-lay the page out for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.layout = PageLayout::compute(body_viewport(width, height));
        self.scroll.clamp_to(&self.layout);
        self.observe();
    }

    /// Run the reveal intersection check at the current offset.
    pub fn observe(&mut self) -> Vec<SectionId> {
        self.reveal.observe(&self.layout, self.scroll.offset(), self.clock)
    }

    /// Section and content row drawn at a page row.
    ///
    /// While a section is revealing its rows are drawn shifted down by the
    /// reveal offset; this maps back from where they are drawn.
    pub fn content_row_at(&self, page_row: u16) -> Option<(SectionId, usize)> {
        let id = self.layout.section_at(page_row)?;
        let block = self.layout.section(id);
        let shift = self.reveal.frame(id, self.clock).offset_rows.round() as u16;
        let index = usize::from(page_row.checked_sub(block.top + block.content_top + shift)?);
        (index < block.rows.len()).then_some((id, index))
    }

    /// Whether another frame is needed without user input.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating() || self.reveal.is_animating(self.clock)
    }
}

/// Body viewport for a terminal of the given size.
pub fn body_viewport(width: u16, height: u16) -> Viewport {
    Viewport::new(width, height.saturating_sub(HEADER_HEIGHT + HELP_HEIGHT))
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip light/dark.
    ToggleDarkMode,
    /// Smooth-scroll to a section.
    NavigateTo(SectionId),
    /// Scroll by rows (negative is up).
    ScrollBy(i32),
    /// Scroll by viewport pages (negative is up).
    ScrollPage(i32),
    ScrollToTop,
    ScrollToBottom,
    /// Move focus through the form controls.
    FocusNext,
    FocusPrev,
    /// Release focus from the form.
    Unfocus,
    /// Type a character into the focused field.
    Input(char),
    Backspace,
    /// Line break in the message textarea.
    Newline,
    /// Submit the contact form.
    Submit,
    /// Left click at terminal coordinates.
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    /// Advance the page clock.
    Tick(Duration),
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
///
/// Pure code describes WHAT should happen; the effects boundary decides
/// HOW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Redraw with the updated state.
    Render,
    Quit,
    Effect(Effect),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Default form action. No endpoint is bound, so it does nothing.
    SubmitContactForm,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealState;

    #[test]
    fn new_app_is_light_at_top_with_home_revealed() {
        let app = App::new(80, 28);
        assert!(!app.theme.is_dark_mode());
        assert_eq!(app.scroll.offset(), 0);
        assert_eq!(app.current_section(), Some(SectionId::Home));
        assert_eq!(
            app.reveal.state(SectionId::Home),
            RevealState::Visible { since: app.clock }
        );
        assert_eq!(app.reveal.state(SectionId::About), RevealState::Hidden);
        assert!(app.focus.is_none());
    }

    #[test]
    fn body_viewport_excludes_chrome() {
        let app = App::new(80, 28);
        assert_eq!(app.viewport(), Viewport::new(80, 24));
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let app = App::new(10, 2);
        assert_eq!(app.viewport().height, 0);
    }

    #[test]
    fn resize_relays_out_and_clamps_scroll() {
        let mut app = App::new(80, 28);
        let bottom = app.layout.max_scroll();
        app.scroll.jump_to(bottom, &app.layout);
        app.resize(200, 60);
        assert_eq!(app.width, 200);
        assert!(app.scroll.offset() <= app.layout.max_scroll());
    }

    #[test]
    fn content_rows_shift_while_revealing() {
        let mut app = App::new(80, 28);
        let home = app.layout.section(SectionId::Home);
        let first = home.top + home.content_top;
        assert_eq!(app.content_row_at(first), None);
        assert_eq!(app.content_row_at(first + 3), Some((SectionId::Home, 0)));

        app.clock = Duration::from_secs(2);
        assert_eq!(app.content_row_at(first), Some((SectionId::Home, 0)));
    }

    #[test]
    fn typing_only_in_text_fields() {
        let mut app = App::new(80, 28);
        assert!(!app.is_typing());
        app.focus = Some(FormControl::Email);
        assert!(app.is_typing());
        app.focus = Some(FormControl::Submit);
        assert!(!app.is_typing());
    }

    #[test]
    fn submit_has_no_form_value() {
        let mut form = ContactForm::default();
        assert!(form.value(FormControl::Submit).is_none());
        assert!(form.value_mut(FormControl::Submit).is_none());
        form.value_mut(FormControl::Name).unwrap().push('A');
        assert_eq!(form.value(FormControl::Name), Some("A"));
    }
}
