//! Read, sum, and render a run log in one pass

use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::RunLogError;
use crate::render::{Progress, ProgressConfig};
use crate::tally::{Tally, read_tally};

/// Everything printed for one run log
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tally: Tally,
    pub target_distance: u32,
    pub progress: Progress,
    /// Rendered bar or done line
    pub display: String,
}

impl Report {
    pub fn from_tally(tally: Tally, config: &ProgressConfig) -> Self {
        let progress = Progress::compute(tally.truncated(), config);
        let display = progress.render(config.symbols());
        Self {
            tally,
            target_distance: config.target_distance(),
            progress,
            display,
        }
    }

    /// The `Total Mileage` line, without its newline. Totals print in
    /// positional notation up to 1e16, so very large logs read
    /// `10000000.0` rather than `1.0E7`.
    pub fn summary(&self) -> String {
        format!("Total Mileage: {:?} out of {}", self.tally.total, self.target_distance)
    }

    /// Write the summary line, then the done line or the bar. The bar is
    /// left unterminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), RunLogError> {
        writeln!(out, "{}", self.summary())?;
        if self.progress.is_done() {
            writeln!(out, "{}", self.display)?;
        } else {
            write!(out, "{}", self.display)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Run the whole pipeline against `input` and write the result to `out`
pub fn run<P: AsRef<Path>, W: Write>(input: P, config: &ProgressConfig, out: &mut W) -> Result<Report, RunLogError> {
    let path = input.as_ref();
    debug!("run: opening {}", path.display());

    let file = fs::File::open(path).map_err(|source| RunLogError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let tally = read_tally(file)?;
    info!("Read {} entries from {}", tally.entries, path.display());

    let report = Report::from_tally(tally, config);
    report.write_to(out)?;
    Ok(report)
}
