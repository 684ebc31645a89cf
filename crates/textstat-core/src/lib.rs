//! Core library for textstat.
//!
//! This crate provides the text statistics analyzer and the two input
//! validators used by the `textstat` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Composite text statistics and report rendering
//! - [`password`] - Password policy validation and strength scoring
//! - [`registration`] - User-registration field validation
//! - [`config`] - Configuration loading and management
//! - [`text`] - Sentence/word/paragraph splitting
//! - [`word_lists`] - Fixed reference word lists
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::analysis::{self, AnalyzeOptions};
//!
//! let report = analysis::analyze_text("Hello world. This is a test.", &AnalyzeOptions::default())
//!     .expect("non-empty input");
//! assert_eq!(report.word_analysis.total_words, 6);
//! assert_eq!(report.basic_stats.total_sentences, 2);
//!
//! println!("{}", analysis::render_report(&Ok(report)));
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod error;

pub mod password;

pub mod registration;

pub mod text;

pub mod word_lists;

pub use analysis::{AnalyzeOptions, TextReport, analyze_text, render_report};

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

pub use password::{PasswordPolicy, PasswordReport, validate_password};

pub use registration::{RegistrationReport, validate_registration};
