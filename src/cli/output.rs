//! Output formatting utilities

use crate::application::SplitOutcome;
use crate::domain::PeriodId;
use std::path::Path;

/// Announce what a run is about to do
pub fn format_announcement(source: &Path, periods: &[PeriodId]) -> String {
    if periods.is_empty() {
        return format!(
            "Scrubbing {}: no periods selected, every trading period will be removed",
            source.display()
        );
    }

    let list = periods
        .iter()
        .map(PeriodId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Scrubbing {} so that only trading periods {} remain",
        source.display(),
        list
    )
}

/// Summarize a finished run
pub fn format_summary(outcome: &SplitOutcome) -> String {
    let stats = &outcome.stats;
    let mut output = format!(
        "Wrote {}\n  kept {} tagged lines, dropped {}, passed {} untagged, repaired {}\n",
        outcome.output.display(),
        stats.kept_tagged,
        stats.dropped,
        stats.untagged,
        stats.repairs
    );

    if !outcome.removed.is_empty() {
        output.push_str(&format!(
            "  removed {} intermediate file(s)\n",
            outcome.removed.len()
        ));
    }

    output
}
