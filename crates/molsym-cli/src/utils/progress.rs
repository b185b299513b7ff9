use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use molsym::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 100;

#[derive(Debug)]
struct HandlerState {
    bar: ProgressBar,
    phase: &'static str,
    failed: Vec<String>,
}

/// Draws workflow progress on stderr and collects the symbols of declared
/// elements that failed validation during the current phase.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<HandlerState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.finish_and_clear();
        Self {
            state: Arc::new(Mutex::new(HandlerState {
                bar,
                phase: "",
                failed: Vec::new(),
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = Arc::clone(&self.state);
        Box::new(move |event: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress state mutex was poisoned; dropping progress event.");
                return;
            };
            state.handle(event);
        })
    }

    /// Symbols of the elements reported as failing since the last phase began.
    pub fn failed_elements(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|s| s.failed.clone())
            .unwrap_or_default()
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerState {
    fn handle(&mut self, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                self.phase = name;
                self.failed.clear();
                self.bar = ProgressBar::new_spinner().with_style(spinner_style());
                self.bar.set_draw_target(ProgressDrawTarget::stderr());
                self.bar.set_message(name);
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                self.bar.disable_steady_tick();
                self.bar.set_style(bar_style());
                self.bar.set_prefix(self.phase);
                self.bar.set_length(total_steps);
                self.bar.set_position(0);
                self.bar.set_message("");
            }
            Progress::ElementChecked { symbol, passed } => {
                if !passed {
                    self.bar.println(format!("  ✗ {} fails", symbol));
                    self.failed.push(symbol.clone());
                }
                self.bar.set_message(symbol);
            }
            Progress::TaskIncrement => self.bar.inc(1),
            Progress::TaskFinish => {
                if let Some(length) = self.bar.length() {
                    self.bar.set_position(length);
                }
            }
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                let summary = if self.failed.is_empty() {
                    format!("✓ {}", self.phase)
                } else {
                    format!("✗ {} ({} failed)", self.phase, self.failed.len())
                };
                self.bar.finish_with_message(summary);
            }
            Progress::Message(text) => self.bar.println(format!("  {}", text)),
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:<20.bold} [{bar:32.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn bar(handler: &CliProgressHandler) -> ProgressBar {
        handler.state.lock().unwrap().bar.clone()
    }

    #[test]
    fn starts_finished_and_empty() {
        let handler = CliProgressHandler::new();
        assert!(bar(&handler).is_finished());
        assert!(handler.failed_elements().is_empty());
    }

    #[test]
    fn validation_phase_collects_failures() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Symmetry Validation",
        });
        callback(Progress::TaskStart { total_steps: 2 });
        for (symbol, passed) in [("C3", true), ("σ", false)] {
            callback(Progress::ElementChecked {
                symbol: symbol.to_string(),
                passed,
            });
            callback(Progress::TaskIncrement);
        }
        assert_eq!(bar(&handler).position(), 2);

        callback(Progress::TaskFinish);
        callback(Progress::PhaseFinish);

        let pb = bar(&handler);
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✗ Symmetry Validation (1 failed)");
        assert_eq!(handler.failed_elements(), vec!["σ".to_string()]);
    }

    #[test]
    fn new_phase_resets_failures() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();
        callback(Progress::PhaseStart { name: "First" });
        callback(Progress::ElementChecked {
            symbol: "C2".to_string(),
            passed: false,
        });
        callback(Progress::PhaseStart { name: "Second" });
        assert!(handler.failed_elements().is_empty());
    }

    #[test]
    fn task_finish_fills_the_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();
        callback(Progress::PhaseStart {
            name: "Frame Rendering",
        });
        callback(Progress::TaskStart { total_steps: 10 });
        callback(Progress::TaskIncrement);
        callback(Progress::TaskFinish);
        assert_eq!(bar(&handler).position(), 10);
    }

    #[test]
    fn callback_can_run_on_another_thread() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Frame Rendering",
            });
            callback(Progress::TaskStart { total_steps: 1 });
            callback(Progress::TaskIncrement);
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let pb = bar(&handler);
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Frame Rendering");
    }
}
