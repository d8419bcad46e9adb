//! Command implementations for related-cli

pub mod check;
pub mod open;
pub mod related;

pub use check::run_check;
pub use related::{RelatedArgs, run_related};
