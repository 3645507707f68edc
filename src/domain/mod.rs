//! Domain layer - Period selection and text scrubbing

pub mod period;
pub mod scrub;

pub use period::{PeriodId, PeriodTag, TagSet};
pub use scrub::{scrub, scrub_stream, scrub_with, CommaRepair, ScrubStats, Scrubber};
