use crate::Config;
use console::style;
use std::path::Path;

mod normalize;

pub use normalize::{normalize, Line, Outcome, Report};

/// Normalizes the icons in `dir` and prints a status line per icon.
pub fn fit(dir: &Path, config: &Config, dry_run: bool) -> Report {
    let report = normalize(dir, config.icons(), config.options(dry_run));
    for (icon, outcome) in report.entries() {
        let line = style(Line(icon, outcome).to_string());
        let line = match outcome {
            Outcome::Correct { .. } => line,
            Outcome::Resized { .. } | Outcome::WouldResize { .. } => line.yellow(),
            Outcome::Missing | Outcome::Failed(_) => line.red(),
        };
        println!("{}", line);
    }
    tracing::info!(
        "{} icons checked, {} resized, {} missing, {} failed",
        report.entries().len(),
        report.resized(),
        report.missing(),
        report.failed()
    );
    report
}
