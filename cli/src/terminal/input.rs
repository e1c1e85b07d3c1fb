use std::thread;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tokio::sync::mpsc;
use tracing::warn;

/// What a key press asks for in watch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    RefreshUsers,
    RefreshProducts,
    RefreshAll,
    Quit,
}

impl Key {
    fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Key::Quit),
            KeyCode::Char('u') => Some(Key::RefreshUsers),
            KeyCode::Char('p') => Some(Key::RefreshProducts),
            KeyCode::Char('r') => Some(Key::RefreshAll),
            _ => None,
        }
    }
}

/// Reads key presses on a dedicated thread while raw mode is on.
pub struct InputHandle {
    rx: mpsc::Receiver<Key>,
}

impl InputHandle {
    /// Starts the reader thread. Without a terminal no key ever arrives.
    pub fn start() -> Self {
        let (tx, rx) = mpsc::channel::<Key>(16);

        thread::spawn(move || {
            if let Err(e) = enable_raw_mode() {
                warn!(error = %e, "Key input unavailable, use Ctrl-C to quit");
                return;
            }
            loop {
                let key_event = match event::read() {
                    Ok(Event::Key(key_event)) => key_event,
                    Ok(_) => continue,
                    Err(_) => break,
                };
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(key) = Key::from_event(key_event.code, key_event.modifiers) else {
                    continue;
                };
                if tx.blocking_send(key).is_err() || key == Key::Quit {
                    break;
                }
            }
            let _ = disable_raw_mode();
        });

        Self { rx }
    }

    /// Next key press, or `None` once the reader thread is gone.
    pub async fn next(&mut self) -> Option<Key> {
        self.rx.recv().await
    }
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
