//! Merging an external AI audit into local analytics.
//!
//! The AI audit is produced asynchronously by a remote text-generation
//! service. [`crate::analyze`] never waits on it; callers merge the two plain
//! values with [`merge_audit`] once both exist.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};
use crate::keywords::MAX_MISSING_KEYWORDS;
use crate::report::AnalyticsResult;

/// Prefix applied to every issue reported by the AI audit.
pub const AI_AUDIT_PREFIX: &str = "[AI Audit] ";

/// Result returned by the external AI audit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AiAudit {
    /// The service's own overall score (informational; not blended into local scores).
    pub score: f64,
    /// Keywords the service thinks are missing.
    pub keywords: Vec<String>,
    /// Issues the service found, in its priority order.
    pub issues: Vec<String>,
}

impl AiAudit {
    /// Parse the service's JSON response.
    pub fn from_json(json: &str) -> InputResult<Self> {
        serde_json::from_str(json).map_err(|source| InputError::Json {
            what: "AI audit",
            source,
        })
    }
}

/// Combine local analytics with an AI audit.
///
/// - Missing keywords: local list first, then audit keywords, de-duplicated
///   case-insensitively (first spelling wins), capped at 10.
/// - Improvements: audit issues, prefixed with [`AI_AUDIT_PREFIX`], ahead of
///   the local improvements. No de-duplication between the two.
/// - All scores are left as computed locally.
#[tracing::instrument(skip_all, fields(audit_issues = audit.issues.len()))]
pub fn merge_audit(local: &AnalyticsResult, audit: &AiAudit) -> AnalyticsResult {
    let mut seen = HashSet::new();
    let missing_keywords = local
        .keywords
        .missing_keywords
        .iter()
        .chain(&audit.keywords)
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .take(MAX_MISSING_KEYWORDS)
        .map(str::to_string)
        .collect();

    let improvements = audit
        .issues
        .iter()
        .map(|issue| format!("{AI_AUDIT_PREFIX}{issue}"))
        .chain(local.improvements.iter().cloned())
        .collect();

    let mut merged = local.clone();
    merged.keywords.missing_keywords = missing_keywords;
    merged.improvements = improvements;
    merged
}
