//! Coarse progress reporting for long-running stages.
//!
//! Observers are a side channel: they receive `(completed, total)` updates
//! and never influence the computed values.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress updates from a running stage.
pub trait ProgressObserver {
    /// Called after each unit of work.
    fn update(&mut self, completed: usize, total: usize);

    /// Called once when the stage is done.
    fn finish(&mut self) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn update(&mut self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Discards every update.
#[derive(Debug, Default)]
pub struct SilentProgress {}

impl SilentProgress {
    pub fn new() -> Self {
        Self {}
    }
}

impl ProgressObserver for SilentProgress {
    fn update(&mut self, _completed: usize, _total: usize) {}
}

/// Terminal progress bar on stderr.
pub struct BarProgress {
    bar: Option<ProgressBar>,
    label: String,
}

impl BarProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            bar: None,
            label: label.into(),
        }
    }

    fn bar_for(&mut self, total: usize) -> &ProgressBar {
        let label = &self.label;
        self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_bar()
                .template("  {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("━╸ ");
            bar.set_style(style);
            bar.set_message(label.clone());
            bar
        })
    }
}

impl ProgressObserver for BarProgress {
    fn update(&mut self, completed: usize, total: usize) {
        let bar = self.bar_for(total);
        bar.set_length(total as u64);
        bar.set_position(completed as u64);
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Chooses between a progress bar and silence.
pub enum Progress {
    Interactive(BarProgress),
    Silent(SilentProgress),
}

impl Progress {
    pub fn new(interactive: bool, label: impl Into<String>) -> Self {
        if interactive {
            Self::Interactive(BarProgress::new(label))
        } else {
            Self::Silent(SilentProgress::new())
        }
    }
}

impl ProgressObserver for Progress {
    fn update(&mut self, completed: usize, total: usize) {
        match self {
            Self::Interactive(p) => p.update(completed, total),
            Self::Silent(p) => p.update(completed, total),
        }
    }

    fn finish(&mut self) {
        match self {
            Self::Interactive(p) => p.finish(),
            Self::Silent(p) => p.finish(),
        }
    }
}
