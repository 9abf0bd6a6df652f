//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes resume scoring over the MCP protocol, making it
//! available to AI assistants (Claude Code, Cursor, etc.) via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method delegates to `cvlens_core` and
//! only handles parameter parsing, size limits and serialization.
//!
//! # Tools
//!
//! - `get_info`: package name, version and description
//! - `analyze_resume`: score a resume document
//! - `merge_audit`: fold an AI audit into a previous analysis
//! - `template_resume`: the placeholder resume

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;

use cvlens_core::{AiAudit, AnalyticsResult, ResumeData, analyze, merge_audit};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_resume` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct AnalyzeResumeParams {
    /// The resume document as JSON (camelCase keys, as produced by `template_resume`).
    pub resume_json: String,
    /// Job description to score against. Overrides the one in the resume.
    pub job_description: Option<String>,
}

/// Parameters for the `merge_audit` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub struct MergeAuditParams {
    /// A previous `analyze_resume` result, as JSON.
    pub analytics_json: String,
    /// The AI audit result as JSON: `{"score": n, "keywords": [...], "issues": [...]}`.
    pub audit_json: String,
}

/// MCP server exposing resume scoring to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn serialization_error(e: serde_json::Error) -> McpError {
    McpError::internal_error(format!("serialization error: {e}"), None)
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with the default input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(cvlens_core::DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Replace the per-argument input limit (`None` disables it).
    #[must_use]
    pub const fn with_input_limit(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    fn check_size(&self, what: &str, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("{what} too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info).map_err(serialization_error)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a resume.
    #[tool(
        description = "Score a resume document (JSON). Returns ATS score, completeness, job-match score (when a job description of more than 20 characters is given), section scores, keyword and bullet statistics, strengths, and improvements."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_resume(
        &self,
        Parameters(params): Parameters<AnalyzeResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_resume",
            has_job = params.job_description.is_some(),
            "executing MCP tool"
        );

        self.check_size("resume_json", &params.resume_json)?;
        let mut resume = ResumeData::from_json(&params.resume_json)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        if let Some(job) = params.job_description {
            self.check_size("job_description", &job)?;
            resume.job_description = job;
        }

        let result = analyze(&resume);
        let json = serde_json::to_string_pretty(&result).map_err(serialization_error)?;

        tracing::info!(
            tool = "analyze_resume",
            ats_score = result.ats_score,
            job_match_score = result.job_match_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Merge an AI audit into a previous analysis.
    #[tool(
        description = "Merge an AI audit into an analyze_resume result: audit issues are prefixed with \"[AI Audit] \" and listed first among improvements, audit keywords are unioned into missingKeywords (max 10). Scores are unchanged."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn merge_audit(
        &self,
        Parameters(params): Parameters<MergeAuditParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "merge_audit", "executing MCP tool");

        self.check_size("analytics_json", &params.analytics_json)?;
        self.check_size("audit_json", &params.audit_json)?;
        let local: AnalyticsResult = serde_json::from_str(&params.analytics_json)
            .map_err(|e| McpError::invalid_params(format!("invalid analytics JSON: {e}"), None))?;
        let audit = AiAudit::from_json(&params.audit_json)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let merged = merge_audit(&local, &audit);
        let json = serde_json::to_string_pretty(&merged).map_err(serialization_error)?;

        tracing::info!(
            tool = "merge_audit",
            improvements = merged.improvements.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// The placeholder resume.
    #[tool(description = "Get the placeholder resume document as JSON, a starting point for analyze_resume.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn template_resume(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "template_resume", "executing MCP tool");

        let json =
            serde_json::to_string_pretty(&ResumeData::template()).map_err(serialization_error)?;

        tracing::info!(tool = "template_resume", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call template_resume for the document shape, analyze_resume to score a resume, and merge_audit to fold in an AI audit.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
