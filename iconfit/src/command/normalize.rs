use crate::{IconSpec, Options};
use anyhow::{Context, Result};
use iconscale::Scaler;
use std::path::Path;

#[derive(Debug)]
pub enum Outcome {
    /// Already at the expected size, the file was not touched.
    Correct { size: (u32, u32) },
    Resized { from: (u32, u32), to: (u32, u32) },
    /// Dry run of `Resized`.
    WouldResize { from: (u32, u32), to: (u32, u32) },
    Missing,
    Failed(anyhow::Error),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(IconSpec, Outcome)>,
}

impl Report {
    pub fn entries(&self) -> &[(IconSpec, Outcome)] {
        &self.entries
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(icon, _)| icon.name == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn resized(&self) -> usize {
        self.count(|outcome| {
            matches!(
                outcome,
                Outcome::Resized { .. } | Outcome::WouldResize { .. }
            )
        })
    }

    pub fn missing(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Missing))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    fn count(&self, f: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, outcome)| f(outcome)).count()
    }
}

/// Status line for a single icon.
pub struct Line<'a>(pub &'a IconSpec, pub &'a Outcome);

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Line(icon, outcome) = self;
        match outcome {
            Outcome::Correct { .. } => write!(f, "{} is already the correct size.", icon.name),
            Outcome::Resized { from, to } => write!(
                f,
                "Resizing {} from {}x{} to {}x{}",
                icon.name, from.0, from.1, to.0, to.1
            ),
            Outcome::WouldResize { from, to } => write!(
                f,
                "Would resize {} from {}x{} to {}x{}",
                icon.name, from.0, from.1, to.0, to.1
            ),
            Outcome::Missing => write!(f, "Missing: {}", icon.name),
            Outcome::Failed(err) => write!(f, "Error processing {}: {:#}", icon.name, err),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (icon, outcome) in &self.entries {
            writeln!(f, "{}", Line(icon, outcome))?;
        }
        Ok(())
    }
}

/// Checks every icon in `icons` inside `dir` and resizes the ones that do not
/// have their expected size, overwriting them in the format their file name
/// names.
///
/// Failures are recorded per icon and never stop the scan.
pub fn normalize(dir: &Path, icons: &[IconSpec], opts: Options) -> Report {
    let mut report = Report::default();
    for icon in icons {
        let span = tracing::info_span!("icon", name = %icon.name);
        let _enter = span.enter();
        let path = dir.join(&icon.name);
        let outcome = if path.exists() {
            check_icon(&path, icon, opts).unwrap_or_else(|err| {
                tracing::warn!("{} failed: {:#}", icon, err);
                Outcome::Failed(err)
            })
        } else {
            tracing::debug!("{} not found", path.display());
            Outcome::Missing
        };
        report.entries.push((icon.clone(), outcome));
    }
    report
}

fn check_icon(path: &Path, icon: &IconSpec, opts: Options) -> Result<Outcome> {
    let mut scaler =
        Scaler::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let from = scaler.dimensions();
    let to = icon.size();
    if from == to {
        return Ok(Outcome::Correct { size: from });
    }
    if opts.dry_run {
        return Ok(Outcome::WouldResize { from, to });
    }
    tracing::info!("resizing {} from {:?} with {}", icon, from, opts.filter);
    scaler.resize(icon.width, icon.height, opts.filter);
    scaler.save(path)?;
    Ok(Outcome::Resized { from, to })
}
