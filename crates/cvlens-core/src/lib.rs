//! Core library for cvlens.
//!
//! This crate provides the resume scoring engine used by the `cvlens` CLI,
//! its MCP server, and any downstream consumers.
//!
//! # Modules
//!
//! - [`resume`] - The resume document model
//! - [`analytics`] - The [`analyze`] entry point
//! - [`audit`] - Merging an external AI audit into local results
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! The pipeline stages ([`aggregate`], [`keywords`], [`readability`],
//! [`sections`], [`scoring`], [`recommendations`]) are public so callers can
//! run them individually.
//!
//! # Quick Start
//!
//! ```
//! use cvlens_core::{ResumeData, analyze};
//!
//! let resume = ResumeData::template();
//! let result = analyze(&resume);
//! assert!(result.ats_score < 75);
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod analytics;
pub mod audit;
pub mod config;
pub mod error;
pub mod keywords;
pub mod readability;
pub mod recommendations;
pub mod report;
pub mod resume;
pub mod scoring;
pub mod sections;
pub mod text;
pub mod word_lists;

pub use analytics::analyze;
pub use audit::{AiAudit, merge_audit};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use report::{AnalyticsResult, KeywordStats, ScoreBand};
pub use resume::{Description, ResumeData};

/// Default upper bound on input document size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
