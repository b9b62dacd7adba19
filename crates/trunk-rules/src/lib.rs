#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod rules;

pub use crate::config::{CONFIG_ENV_VAR, ConfigSource, DEFAULT_CONFIG, ExportConfig};
pub use crate::error::{RuleSetKind, RulesError};
pub use crate::rules::{RuleSet, parse_id};
