//! Progress bar for a scan, driven by `ScanEvent`s.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use modlist_lib::ScanEvent;

pub(crate) struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Create the bar on `multi`. When `quiet` is true it is hidden.
    pub(crate) fn new(multi: &MultiProgress, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = multi.add(ProgressBar::new_spinner());
            bar.set_style(
                ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                    .expect("static pattern")
                    .tick_chars("/-\\|"),
            );
            bar.enable_steady_tick(std::time::Duration::from_millis(100));
            bar
        };
        bar.set_message("Listing mods folder...");
        Self { bar }
    }

    /// One tick per finished candidate; the other events only relabel.
    pub(crate) fn handle(&self, event: &ScanEvent) {
        match event {
            ScanEvent::ScanComplete { total } => {
                self.bar.set_length(*total as u64);
                self.bar.set_style(
                    ProgressStyle::with_template(
                        "  {spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}",
                    )
                    .expect("static pattern")
                    .progress_chars("=> ")
                    .tick_chars("/-\\|"),
                );
                self.bar.set_message("Scanning mods...");
            }
            e if e.is_completion() => self.bar.inc(1),
            ScanEvent::Done => self.bar.set_message("Writing manifest..."),
            _ => {}
        }
    }

    pub(crate) fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn test_ticks_once_per_finished_candidate() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let progress = ScanProgress::new(&multi, true);
        let events = [
            ScanEvent::ScanComplete { total: 2 },
            ScanEvent::CandidateStarted {
                index: 0,
                file: "a.zip".into(),
            },
            ScanEvent::CandidateResolved {
                index: 0,
                file: "a.zip".into(),
                mod_id: "a".into(),
                degraded: None,
            },
            ScanEvent::CandidateInvalid {
                index: 1,
                file: "b.zip".into(),
                reason: "corrupt".into(),
            },
            ScanEvent::Done,
        ];
        for e in &events {
            progress.handle(e);
        }
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
