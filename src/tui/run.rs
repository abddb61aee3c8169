//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Event reader thread: forwards crossterm key, mouse and resize events
//! - Ticker thread: sends the page clock at the configured frame rate
//!
//! The event loop consumes from the channel and redraws after each event.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::ViewConfig;
use crate::content::SectionId;
use crate::error::Result;
use crate::layout::FormControl;

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::update;
use super::view::render;

/// Rows moved per mouse-wheel notch.
const WHEEL_ROWS: i32 = 3;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a key event to a semantic Action.
///
/// `focus` decides whether printable keys are commands or text input.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, focus: Option<FormControl>) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Form navigation works everywhere
    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Some(FormControl::Name | FormControl::Email) => map_field_key(key, false),
        Some(FormControl::Message) => map_field_key(key, true),
        Some(FormControl::Submit) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Unfocus),
            _ => map_page_key(key),
        },
        None => map_page_key(key),
    }
}

/// Keys while a text field has focus. Enter submits from a single-line
/// input and breaks the line in the textarea.
fn map_field_key(key: KeyEvent, multiline: bool) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Unfocus),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter if multiline => Some(Action::Newline),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

fn map_page_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollBy(1)),
        KeyCode::PageUp => Some(Action::ScrollPage(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollPage(1)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),

        // Theme
        KeyCode::Char('d') => Some(Action::ToggleDarkMode),

        // Number keys for section navigation
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as u8 - b'1') as usize;
            Some(Action::NavigateTo(SectionId::ALL[index]))
        }

        KeyCode::Esc => Some(Action::Unfocus),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event: wheel scrolls, left button clicks.
pub fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollBy(-WHEEL_ROWS)),
        MouseEventKind::ScrollDown => Some(Action::ScrollBy(WHEEL_ROWS)),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
///
/// Every step is attempted; the first failure is reported.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mouse = io::stdout().execute(DisableMouseCapture).map(|_| ());
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw.and(mouse).and(screen)
}

/// Run `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` takes precedence over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(width, height)) => AppEvent::Resize { width, height },
                Ok(_) => continue,
                Err(e) => {
                    log::error!("terminal event read failed: {}", e);
                    break;
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn a thread that sends the page clock at a fixed rate.
fn spawn_ticker(config: ViewConfig, started: Instant, tx: mpsc::Sender<AppEvent>) {
    let interval = config.tick_interval();
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if tx.send(AppEvent::Tick(started.elapsed())).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive page until the user quits.
///
/// The terminal is restored whether the loop ends cleanly or with an
/// error. Panics are covered by the hook.
pub fn run(config: ViewConfig) -> Result<()> {
    install_panic_hook();
    with_restore(
        || {
            let mut terminal = setup_terminal()?;
            event_loop(&mut terminal, config)
        },
        restore_terminal,
    )?;
    log::info!("page closed");
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: ViewConfig,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(size.width, size.height);
    log::info!("page loaded at {}x{}, {} fps", size.width, size.height, config.fps);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx.clone());
    spawn_ticker(config, Instant::now(), tx);

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| render(&app, frame))?;
        }
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let Ok(event) = rx.recv() else {
            break; // all senders dropped
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key, app.focus),
            AppEvent::Mouse(mouse) => map_mouse(mouse),
            AppEvent::Resize { width, height } => Some(Action::Resize { width, height }),
            AppEvent::Tick(now) => Some(Action::Tick(now)),
        };
        let Some(action) = action else {
            dirty = false;
            continue;
        };

        // Idle ticks don't need a redraw
        let was_animating = app.is_animating();
        let is_tick = matches!(action, Action::Tick(_));

        match update(&mut app, &action) {
            Transition::Render => {}
            Transition::Quit => app.should_quit = true,
            Transition::Effect(effect) => handle_effect(effect, &app),
        }

        dirty = !is_tick || was_animating || app.is_animating();
    }

    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a transition.
fn handle_effect(effect: Effect, app: &App) {
    match effect {
        Effect::SubmitContactForm => {
            // No handler and no endpoint: the default action goes nowhere.
            log::debug!(
                "contact form submitted with {} non-empty field(s); no action bound",
                FormControl::ALL
                    .iter()
                    .filter_map(|c| app.form.value(*c))
                    .filter(|v| !v.is_empty())
                    .count()
            );
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
