use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use console::Term;

use crate::Style;

const FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// A command line spinner for work whose result is still pending.
///
/// The spinner animates on stderr from a background thread until one of the
/// stop methods is called; dropping it stops it too. The drawing thread and
/// the stop methods share one lock, so a final line never interleaves with a
/// partially drawn frame.
pub struct Spinner {
    state: Arc<Mutex<SpinnerState>>,
    handle: Option<thread::JoinHandle<()>>,
}

struct SpinnerState {
    message: String,
    active: bool,
}

impl Spinner {
    /// Create a new spinner with the given message and start drawing it.
    pub fn new(message: &str) -> Self {
        let state = Arc::new(Mutex::new(SpinnerState {
            message: message.to_string(),
            active: true,
        }));
        let shared = Arc::clone(&state);

        let handle = thread::spawn(move || {
            let term = Term::stderr();
            let mut frame_index = 0;

            loop {
                {
                    let state = shared.lock().unwrap();
                    if !state.active {
                        break;
                    }
                    let frame = FRAMES[frame_index];
                    let _ = term.clear_line();
                    let _ = term.write_str(&Style::Pending.paint(format!(
                        "{} {}",
                        frame, state.message
                    )));
                }
                frame_index = (frame_index + 1) % FRAMES.len();
                thread::sleep(FRAME_INTERVAL);
            }
        });

        Self {
            state,
            handle: Some(handle),
        }
    }

    /// Update the message shown next to the animation.
    pub fn update(&self, message: String) {
        self.state.lock().unwrap().message = message;
    }

    /// Stop the spinner and replace it with a success line.
    pub fn success(&self, message: &str) {
        self.finish(Some(format!(
            "{} {}",
            Style::SuccessPrefix.paint("✓"),
            message
        )));
    }

    /// Stop the spinner and replace it with an error line.
    pub fn error(&self, message: &str) {
        self.finish(Some(format!(
            "{} {}",
            Style::ErrorPrefix.paint("✗"),
            message
        )));
    }

    /// Stop the spinner without printing anything in its place.
    pub fn stop(&self) {
        self.finish(None);
    }

    fn finish(&self, line: Option<String>) {
        let mut state = self.state.lock().unwrap();
        if !state.active {
            return;
        }
        state.active = false;

        let term = Term::stderr();
        let _ = term.clear_line();
        if let Some(line) = line {
            let _ = term.write_line(&line);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
