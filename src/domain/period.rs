//! Trading period identifiers and tags

use crate::error::{Result, SplitError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Prefix used when rendering a period identifier into a tag
pub const TAG_PREFIX: &str = "TP";

fn period_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap())
}

/// Identifier of a single trading period (e.g. `1`, `48`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodId(String);

impl PeriodId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render this identifier as its `TP<id>` tag
    pub fn tag(&self) -> PeriodTag {
        PeriodTag(format!("{}{}", TAG_PREFIX, self.0))
    }
}

impl FromStr for PeriodId {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if period_id_regex().is_match(trimmed) {
            Ok(PeriodId(trimmed.to_string()))
        } else {
            Err(SplitError::InvalidPeriod(s.to_string()))
        }
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A period tag as it appears in dumped text, e.g. `TP12`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodTag(String);

impl PeriodTag {
    /// Build a tag from its literal text
    pub fn new(tag: impl Into<String>) -> Self {
        PeriodTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeriodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, de-duplicated set of selected period tags.
///
/// Insertion order is kept so file names derived from the selection follow
/// the order the periods were given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<PeriodTag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from period identifiers
    pub fn from_periods<'a>(periods: impl IntoIterator<Item = &'a PeriodId>) -> Self {
        periods.into_iter().map(PeriodId::tag).collect()
    }

    /// Parse raw identifiers, failing on the first invalid one
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<(Vec<PeriodId>, Self)> {
        let mut periods: Vec<PeriodId> = Vec::with_capacity(raw.len());
        for value in raw {
            let id = PeriodId::from_str(value.as_ref())?;
            if !periods.contains(&id) {
                periods.push(id);
            }
        }
        let tags = Self::from_periods(&periods);
        Ok((periods, tags))
    }

    pub fn insert(&mut self, tag: PeriodTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PeriodTag> {
        self.tags.iter()
    }

    /// True if any selected tag occurs anywhere in `line`
    pub fn matches(&self, line: impl AsRef<[u8]>) -> bool {
        let line = line.as_ref();
        self.tags
            .iter()
            .any(|tag| contains_bytes(line, tag.as_str().as_bytes()))
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

impl FromIterator<PeriodTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = PeriodTag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
