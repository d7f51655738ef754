//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and executes session commands.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Reveal timer threads: one-shot, send the ticket back after the delay
//! The event loop consumes from the channel; only it touches the session.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::fireworks;
use crate::session::{RevealTicket, Screen, Session};
use crate::store::{FileStore, KeyValueStore, WordStore};
use crate::types::DrillConfig;

use super::state::{Action, App, AppEvent, Effect, Transition, UpdateContext};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action for the given screen.
///
/// The editor captures printable characters as input, so letter
/// shortcuts only apply on the menu and drill screens.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, screen: Screen) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Char(c @ '1'..='2') => Some(Action::NumberKey(c as u8 - b'0')),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Screen::Editor => match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Save),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Delete => Some(Action::Delete),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
        Screen::Drill => match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') => {
                Some(Action::Next)
            }
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => Some(Action::Prev),
            KeyCode::Char('r') => Some(Action::Reveal),
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
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

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore releases, mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn a one-shot timer that hands `ticket` back after `delay`.
fn spawn_reveal_timer(delay: Duration, ticket: RevealTicket, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        // Receiver gone means the TUI already exited.
        let _ = tx.send(AppEvent::RevealElapsed(ticket));
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive drill until the user quits.
pub fn run(config: DrillConfig) -> io::Result<()> {
    let store = WordStore::new(FileStore::new(&config.store_dir));
    let session = Session::open(store, config.profile, config.reveal);
    info!(
        words = session.words().len(),
        stages = session.stages().len(),
        "starting drill UI"
    );

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, App::new(session));
    finish(result, restore_terminal)
}

/// Restore the terminal after the loop ends, even when it ended in error.
/// The loop's error takes precedence over a failed restore.
fn finish(result: io::Result<()>, restore: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    let restored = restore();
    if let Err(e) = &result {
        warn!(error = %e, "drill UI stopped on error");
    }
    result.and(restored)
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<S>,
) -> io::Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key, app.session.screen()) {
                    handle_action(&mut app, &action, &tx);
                }
            }
            AppEvent::RevealElapsed(ticket) => {
                if app.session.reveal_elapsed(ticket) {
                    app.sparks.clear();
                }
            }
        }
    }

    Ok(())
}

/// Run one action through the pure update and apply the result.
fn handle_action<S: KeyValueStore>(app: &mut App<S>, action: &Action, tx: &mpsc::Sender<AppEvent>) {
    // Notices last until the next action.
    app.session.clear_notice();

    let ctx = UpdateContext {
        draft_len: app.session.editor_list().len(),
        finished: app.session.drill_state().is_finished(),
    };
    let ui = std::mem::take(&mut app.ui);

    match update(ui, app.session.screen(), action, ctx) {
        Transition::Ui(ui) => app.ui = ui,
        Transition::Effect(ui, effect) => {
            app.ui = ui;
            handle_effect(effect, app, tx);
        }
        Transition::Quit => app.should_quit = true,
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a session command requested by a pure transition.
fn handle_effect<S: KeyValueStore>(effect: Effect, app: &mut App<S>, tx: &mpsc::Sender<AppEvent>) {
    debug!(?effect, "effect");
    match effect {
        Effect::StartDrill => {
            app.session.start_drill();
        }
        Effect::OpenEditor => app.session.open_editor(),
        Effect::AddWord(text) => {
            app.session.add_word(&text);
        }
        Effect::RemoveWord(index) => {
            if let Err(e) = app.session.remove_word(index) {
                warn!(error = %e, "remove ignored");
            }
        }
        Effect::SaveAndReturn => {
            // Failure already surfaces as a notice.
            let _ = app.session.save_and_return();
        }
        Effect::ReturnToMenu => app.session.return_to_menu(),
        Effect::Advance => {
            app.session.advance();
        }
        Effect::Retreat => {
            app.session.retreat();
        }
        Effect::Reveal => {
            if let (Some(ticket), Some(delay)) = (app.session.reveal(), app.session.reveal_delay()) {
                app.sparks = fireworks::burst(fireworks::clock_seed());
                spawn_reveal_timer(delay, ticket, tx.clone());
            }
        }
    }

    // Sparks only live while their reveal is pending.
    if !app.session.is_revealing() {
        app.sparks.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
