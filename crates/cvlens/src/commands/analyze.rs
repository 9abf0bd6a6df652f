//! Analyze command: score a resume.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use cvlens_core::{AiAudit, AnalyticsResult, Config, ResumeData, ScoreBand, analyze, merge_audit};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume document (JSON).
    pub file: Utf8PathBuf,

    /// Job description to score against (plain text; replaces the one in the resume).
    #[arg(long, value_name = "FILE")]
    pub job: Option<Utf8PathBuf>,

    /// AI audit result to merge into the local analysis (JSON).
    #[arg(long, value_name = "FILE")]
    pub audit: Option<Utf8PathBuf>,

    /// Minimum acceptable score (0–100): job match with a job description, ATS otherwise.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: Option<u32>,

    /// Minimum acceptable score band.
    #[arg(long, value_enum)]
    pub min_band: Option<ScoreBand>,
}

/// Which score a gate compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatedScore {
    Ats(u32),
    JobMatch(u32),
}

impl GatedScore {
    const fn of(result: &AnalyticsResult, job_mode: bool) -> Self {
        if job_mode {
            Self::JobMatch(result.job_match_score)
        } else {
            Self::Ats(result.ats_score)
        }
    }

    const fn value(self) -> u32 {
        match self {
            Self::Ats(v) | Self::JobMatch(v) => v,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Ats(_) => "ATS score",
            Self::JobMatch(_) => "job match score",
        }
    }
}

/// Score a resume file, optionally against a job description and with an AI audit merged in.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, job = ?args.job, audit = ?args.audit, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let mut resume = ResumeData::from_json(&content)
        .with_context(|| format!("failed to parse {}", args.file))?;

    if let Some(ref job) = args.job {
        resume.job_description = read_input_file(job, max_input_bytes)?;
    }
    let job_mode = resume.job_description_text().is_some();

    let mut result = analyze(&resume);

    if let Some(ref audit_path) = args.audit {
        let audit_json = read_input_file(audit_path, max_input_bytes)?;
        let audit = AiAudit::from_json(&audit_json)
            .with_context(|| format!("failed to parse {audit_path}"))?;
        result = merge_audit(&result, &audit);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&args.file, &result, job_mode);
    }

    let min_score = args.min_score.or(if job_mode {
        config.min_job_match_score
    } else {
        config.min_ats_score
    });
    check_gates(
        &args.file,
        GatedScore::of(&result, job_mode),
        min_score,
        args.min_band,
    )
}

fn check_gates(
    file: &Utf8Path,
    score: GatedScore,
    min_score: Option<u32>,
    min_band: Option<ScoreBand>,
) -> anyhow::Result<()> {
    if let Some(min) = min_score
        && score.value() < min
    {
        bail!(
            "{} {} {} is below minimum {}. See the suggested improvements.",
            file,
            score.label(),
            score.value(),
            min,
        );
    }

    if let Some(band) = min_band
        && score.value() < band.floor()
    {
        bail!(
            "{} {} {} is {}, below the {} band.",
            file,
            score.label(),
            score.value(),
            ScoreBand::from_score(score.value()),
            band,
        );
    }

    Ok(())
}

fn colored_score(score: u32) -> String {
    let text = format!("{score}/100 ({})", ScoreBand::from_score(score));
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent | ScoreBand::Good => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::NeedsWork => text.red().to_string(),
    }
}

fn print_report(file: &Utf8Path, result: &AnalyticsResult, job_mode: bool) {
    println!("{}", file.bold());

    println!("\n  {} {}", "ATS score:".cyan(), colored_score(result.ats_score));
    println!("  {} {}/100", "Completeness:".cyan(), result.completeness);
    if job_mode {
        println!(
            "  {} {}",
            "Job match:".cyan(),
            colored_score(result.job_match_score)
        );
    }

    let s = &result.section_scores;
    println!(
        "\n  {} personal info {:.0}, summary {:.0}, experience {:.0}, education {:.0}, \
         skills {:.0}, achievements {:.0}, projects {:.0}, certifications {:.0}",
        "Sections:".cyan(),
        s.personal_info,
        s.summary,
        s.experience,
        s.education,
        s.skills,
        s.achievements,
        s.projects,
        s.certifications,
    );

    let k = &result.keywords;
    println!(
        "  {} {} action verbs, {} technical, {} soft skills",
        "Keywords:".cyan(),
        k.action_verbs,
        k.technical_skills,
        k.soft_skills,
    );
    if !k.missing_keywords.is_empty() {
        println!(
            "  {} {}",
            "Missing:".yellow(),
            k.missing_keywords.join(", ")
        );
    }

    let r = &result.readability;
    println!(
        "  {} {} bullets, avg {:.1} words, {:.0}% with metrics, {} weak phrases",
        "Bullets:".cyan(),
        r.bullet_points,
        r.avg_word_count,
        r.metric_density * 100.0,
        r.weak_words,
    );

    if !result.strengths.is_empty() {
        println!("\n  {}", "Strengths:".green());
        for strength in &result.strengths {
            println!("    + {strength}");
        }
    }
    if !result.improvements.is_empty() {
        println!("\n  {}", "Improvements:".yellow());
        for improvement in &result.improvements {
            println!("    - {improvement}");
        }
    }
}
