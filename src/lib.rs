//! gdxsplit - Reduce GDX files to selected trading periods
//!
//! Dumps a GDX file to text with `gdxdump`, drops the lines of trading periods
//! that were not selected, patches the list terminators left open by the
//! removal, and rebuilds a GDX file with `gams`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SplitError;
