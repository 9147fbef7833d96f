use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal size changed; the next draw picks up the new area
    Resize,
    /// SIGINT or SIGTERM received
    Shutdown,
}

/// Forwards terminal input, ticks and termination signals from a
/// background thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let terminate = Arc::new(AtomicBool::new(false));
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
                tracing::warn!(signal, error = %err, "Failed to register signal handler");
            }
        }

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if terminate.load(Ordering::Relaxed) {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll so the signal flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(..)) => tx.send(AppEvent::Resize),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    // Receiver gone, the UI loop has exited
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
