//! Configuration module for Page-Lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so a missing file or an empty `[analyzer]` table
//! yields the stock analyzer behavior.
//!
//! # Example
//!
//! ```no_run
//! use page_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("page-lens.toml")).unwrap();
//! println!("Link checks in flight: {}", config.max_concurrent_checks);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, ConfigFile};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
