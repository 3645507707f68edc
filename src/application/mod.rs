//! Application layer - Use cases and orchestration

pub mod split;

pub use split::{
    period_suffix, scrub_file, scrub_file_to, ArtifactPaths, SplitOutcome, SplitRequest,
    SplitService,
};
