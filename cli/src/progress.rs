//! Console progress reporting for a deliberation run

use colored::Colorize;
use council_application::ports::observer::DeliberationObserver;
use council_domain::{Phase, ProviderId};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;

/// Reports deliberation progress with a fan-out bar and live verdict text
pub struct ConsoleObserver {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliberationObserver for ConsoleObserver {
    fn on_dispatch(&self, total_providers: usize) {
        let pb = ProgressBar::new(total_providers as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Deliberating");
        pb.set_message("waiting on the council...");
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_provider_complete(&self, id: &ProviderId, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), id)
            } else {
                format!("{} {} (abstained)", "x".red(), id)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase(&self, phase: Phase) {
        if phase == Phase::Synthesis {
            if let Some(pb) = self.bar.lock().unwrap().take() {
                pb.finish_with_message("all testimony in".green().to_string());
            }
            println!();
        }
    }

    fn on_verdict_chunk(&self, chunk: &str) {
        print!("{}", chunk);
        let _ = std::io::stdout().flush();
    }

    fn on_complete(&self) {
        println!();
    }

    fn on_cancelled(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.abandon();
        }
        println!("\n{}", "Deliberation cancelled.".yellow());
    }
}
