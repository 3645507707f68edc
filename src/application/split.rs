//! Split a GDX file down to selected trading periods

use crate::domain::{scrub_stream, CommaRepair, PeriodId, ScrubStats, TagSet};
use crate::error::{Result, SplitError};
use crate::infrastructure::{cleanup, Converter, ToolConfig};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files produced while splitting one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub dumped: PathBuf,
    pub scrubbed: PathBuf,
    pub output: PathBuf,
}

impl ArtifactPaths {
    /// `dir/name.gdx` becomes `dir/name.gms`, `dir/name<suffix>.gms` and
    /// `dir/name<suffix>.gdx`
    pub fn for_source(source: &Path, suffix: &str) -> Self {
        let stem = file_stem(source);
        let dir = source.parent().unwrap_or_else(|| Path::new(""));
        // The scrubbed text must never overwrite the dump it is read from
        let suffix = if suffix.is_empty() { "_scrubbed" } else { suffix };

        ArtifactPaths {
            dumped: dir.join(format!("{}.gms", stem)),
            scrubbed: dir.join(format!("{}{}.gms", stem, suffix)),
            output: dir.join(format!("{}{}.gdx", stem, suffix)),
        }
    }

    /// Files left behind by a run: the dump, the scrubbed text, and the files
    /// the build names after the scrubbed text (e.g. `name<suffix>.lst`) in
    /// its own directory and in `work_dir`. The output is never included.
    pub fn intermediates(&self, work_dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
        let scrubbed_stem = file_stem(&self.scrubbed);
        let scrubbed_dir = self.scrubbed.parent().unwrap_or_else(|| Path::new(""));
        let output_name = self.output.file_name();

        let mut paths = vec![self.dumped.clone(), self.scrubbed.clone()];
        for dir in [scrubbed_dir, work_dir] {
            for ext in extensions {
                let candidate = dir.join(format!("{}.{}", scrubbed_stem, ext));
                if candidate.file_name() != output_name && !paths.contains(&candidate) {
                    paths.push(candidate);
                }
            }
        }
        paths
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Suffix appended to derived file names: the identifiers concatenated
pub fn period_suffix(periods: &[PeriodId]) -> String {
    periods.iter().map(PeriodId::as_str).collect()
}

/// Input to a split run
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub source: PathBuf,
    pub periods: Vec<PeriodId>,
    /// Leave dumped and scrubbed text files in place
    pub keep_intermediates: bool,
    /// Directory the converters run in (listing files land here)
    pub work_dir: PathBuf,
}

/// Result of a successful split run
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub output: PathBuf,
    pub dumped: PathBuf,
    pub scrubbed: PathBuf,
    pub stats: ScrubStats,
    pub removed: Vec<PathBuf>,
}

/// Service running dump, scrub and build in sequence
pub struct SplitService<C: Converter> {
    converter: C,
    config: ToolConfig,
}

impl<C: Converter> SplitService<C> {
    /// Create a new split service
    pub fn new(converter: C, config: ToolConfig) -> Self {
        SplitService { converter, config }
    }

    pub fn execute(&self, request: &SplitRequest) -> Result<SplitOutcome> {
        if !request.source.is_file() {
            return Err(SplitError::SourceNotFound(request.source.clone()));
        }

        let tags = TagSet::from_periods(&request.periods);
        let paths = ArtifactPaths::for_source(&request.source, &period_suffix(&request.periods));
        if paths.dumped == request.source || paths.scrubbed == request.source {
            return Err(SplitError::Config(format!(
                "{} looks like a text dump already; use --dry-run to scrub it directly",
                request.source.display()
            )));
        }

        self.converter.dump(&request.source, &paths.dumped)?;

        let stats = scrub_file(&paths.dumped, &paths.scrubbed, &tags, self.config.repair)?;
        info!(
            kept = stats.kept_tagged,
            dropped = stats.dropped,
            untagged = stats.untagged,
            repairs = stats.repairs,
            "scrubbed {}",
            paths.scrubbed.display()
        );

        self.converter.build(&paths.scrubbed, &paths.output)?;

        let removed = if request.keep_intermediates {
            Vec::new()
        } else {
            cleanup(&paths.intermediates(&request.work_dir, &self.config.cleanup_extensions))
        };

        Ok(SplitOutcome {
            output: paths.output,
            dumped: paths.dumped,
            scrubbed: paths.scrubbed,
            stats,
            removed,
        })
    }
}

/// Scrub the text dump at `input` into a new file at `output`
pub fn scrub_file(
    input: &Path,
    output: &Path,
    tags: &TagSet,
    repair: CommaRepair,
) -> Result<ScrubStats> {
    let writer = BufWriter::new(File::create(output)?);
    scrub_file_to(input, writer, tags, repair)
}

/// Scrub the text dump at `input` into any writer
pub fn scrub_file_to<W: Write>(
    input: &Path,
    writer: W,
    tags: &TagSet,
    repair: CommaRepair,
) -> Result<ScrubStats> {
    let file = File::open(input).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SplitError::SourceNotFound(input.to_path_buf())
        } else {
            SplitError::Io(e)
        }
    })?;

    Ok(scrub_stream(BufReader::new(file), writer, tags, repair)?)
}
