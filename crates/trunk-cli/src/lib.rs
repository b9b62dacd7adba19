//! Library components of the trunk-export CLI.

pub mod logging;
pub mod pipeline;
