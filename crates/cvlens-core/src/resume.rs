//! Resume data model.
//!
//! [`ResumeData`] mirrors the editor's JSON document (camelCase keys). Every
//! field may be missing, `null`, or of the wrong type; all of these collapse
//! to an empty value so the scoring stages never have to special-case
//! absence. Numbers stand in for text (`"year": 2018`), and list entries of
//! the wrong shape are dropped.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{InputError, InputResult};
use crate::text;

/// Minimum trimmed length for a job description to enable job-match mode.
pub const JOB_DESCRIPTION_MIN_CHARS: usize = 20;

/// Text of a scalar JSON value. Numbers are rendered; anything else has no text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A list that keeps only the entries that parse; a non-list is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// A free-text description in either of its stored forms.
///
/// Older documents store a newline-delimited string (often with `•` markers);
/// newer ones store a list of bullets. [`Description::bullets`] makes the two
/// indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Description {
    /// Newline-delimited text.
    Text(String),
    /// One entry per bullet.
    Bullets(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Self::Bullets(items.into_iter().filter_map(scalar_text).collect()),
            other => Self::Text(scalar_text(other).unwrap_or_default()),
        })
    }
}

impl Description {
    /// Normalized, non-blank bullets in their original order.
    pub fn bullets(&self) -> Vec<String> {
        match self {
            Self::Text(s) => text::split_bullets(s),
            Self::Bullets(items) => text::clean_bullets(items),
        }
    }

    /// Character length used by the experience heuristic: the normalized
    /// bullets joined by newlines, so both forms measure the same.
    pub fn char_len(&self) -> usize {
        self.bullets().join("\n").chars().count()
    }

    /// Returns `true` if there are no non-blank bullets.
    pub fn is_empty(&self) -> bool {
        self.bullets().is_empty()
    }
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<&str>> for Description {
    fn from(items: Vec<&str>) -> Self {
        Self::Bullets(items.into_iter().map(str::to_string).collect())
    }
}

/// One work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Job title held.
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    /// Employer name.
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    /// Work location.
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    /// Free-form start date.
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    /// Free-form end date ("Present" is common).
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    /// Responsibilities and achievements.
    pub description: Description,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    /// Institution name.
    #[serde(deserialize_with = "lenient_string")]
    pub school: String,
    /// Degree or program.
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    /// Graduation year.
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    /// Grade point average, if listed.
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<String>,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    /// Certification name.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Issuing body.
    #[serde(deserialize_with = "lenient_string")]
    pub issuer: String,
    /// Date awarded.
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    /// Optional notes.
    pub description: Description,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project name.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Role on the project.
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    /// Link to the project.
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
    /// What was built and the outcome.
    pub description: Description,
}

/// One leadership or volunteer entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadershipEntry {
    /// Position held.
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    /// Organization name.
    #[serde(deserialize_with = "lenient_string")]
    pub organization: String,
    /// Free-form start date.
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    /// Free-form end date.
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    /// Responsibilities and achievements.
    pub description: Description,
}

/// The full resume document as authored in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    /// Candidate's full name.
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    /// Headline job title.
    #[serde(deserialize_with = "lenient_string")]
    pub job_title: String,
    /// Contact email.
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    /// Contact phone.
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    /// City / region.
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    /// LinkedIn profile URL or handle.
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: String,
    /// Professional summary.
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    /// Work history, most recent first.
    #[serde(deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    /// Education history.
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    /// Comma-separated skills.
    #[serde(deserialize_with = "lenient_string")]
    pub skills: String,
    /// Certifications.
    #[serde(deserialize_with = "lenient_list")]
    pub certifications: Vec<CertificationEntry>,
    /// Projects.
    #[serde(deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectEntry>,
    /// Leadership and volunteer roles.
    #[serde(deserialize_with = "lenient_list")]
    pub leadership: Vec<LeadershipEntry>,
    /// Headline achievements.
    pub key_achievements: Description,
    /// Target job posting, if the user pasted one.
    #[serde(deserialize_with = "lenient_string")]
    pub job_description: String,
}

impl ResumeData {
    /// Parse a resume from the editor's JSON document.
    pub fn from_json(json: &str) -> InputResult<Self> {
        serde_json::from_str(json).map_err(|source| InputError::Json {
            what: "resume",
            source,
        })
    }

    /// The trimmed job description, if it is long enough to score against.
    ///
    /// Anything at or below [`JOB_DESCRIPTION_MIN_CHARS`] trimmed characters
    /// keeps the engine in completeness mode.
    pub fn job_description_text(&self) -> Option<&str> {
        let jd = self.job_description.trim();
        (jd.chars().count() > JOB_DESCRIPTION_MIN_CHARS).then_some(jd)
    }

    /// JSON Schema of the resume document, for editors and validators.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ResumeData)
    }

    /// The built-in placeholder resume new documents start from.
    pub fn template() -> Self {
        Self {
            full_name: "John Doe".into(),
            job_title: "Software Engineer".into(),
            email: "john.doe@example.com".into(),
            phone: "(555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            linkedin: "linkedin.com/in/johndoe".into(),
            summary: "Experienced software engineer with a passion for building scalable \
                      web applications and working with cross-functional teams to deliver \
                      high-quality products."
                .into(),
            experience: vec![ExperienceEntry {
                role: "Senior Software Engineer".into(),
                company: "Tech Company Inc.".into(),
                location: "San Francisco, CA".into(),
                start_date: "Jan 2020".into(),
                end_date: "Present".into(),
                description: Description::from(vec![
                    "Developed and maintained web applications using React and Node.js",
                    "Collaborated with cross-functional teams to define and ship new features",
                    "Improved application performance and user experience",
                    "Mentored junior developers and conducted code reviews",
                ]),
            }],
            education: vec![EducationEntry {
                school: "University of California".into(),
                degree: "B.S. Computer Science".into(),
                year: "2018".into(),
                gpa: None,
            }],
            skills: "JavaScript, React, Node.js, Python, SQL, Git".into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_forms_normalize_identically() {
        let list = Description::from(vec!["Led team of 5", "Shipped v2"]);
        let text = Description::from("• Led team of 5\n• Shipped v2");
        assert_eq!(list.bullets(), text.bullets());
    }

    #[test]
    fn description_char_len() {
        let list = Description::from(vec!["abc", " ", "de"]);
        assert_eq!(list.char_len(), "abc\nde".len());
        assert_eq!(Description::from("  hello  ").char_len(), 5);
        assert_eq!(Description::default().char_len(), 0);
    }

    #[test]
    fn description_char_len_ignores_markers() {
        let list = Description::from(vec!["Led team of 5", "Shipped v2"]);
        let text = Description::from("• Led team of 5\n\n•   Shipped v2\n");
        assert_eq!(list.char_len(), text.char_len());
    }

    #[test]
    fn numbers_stand_in_for_text() {
        let json = r#"{
            "phone": 5551234567,
            "education": [{"school": "MIT", "year": 2018, "gpa": 3.9}],
            "experience": [{"role": "Dev", "description": 42}]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert_eq!(resume.phone, "5551234567");
        assert_eq!(resume.education[0].year, "2018");
        assert_eq!(resume.education[0].gpa.as_deref(), Some("3.9"));
        assert_eq!(resume.experience[0].description.bullets(), vec!["42"]);
    }

    #[test]
    fn wrong_types_degrade_to_empty() {
        let json = r#"{
            "fullName": {"first": "Ada"},
            "skills": ["Rust", "SQL"],
            "experience": {"role": "Dev"},
            "education": [{"school": true, "gpa": []}],
            "keyAchievements": {"text": "Won award"},
            "projects": [{"name": "cvlens", "description": false}]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert!(resume.full_name.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.education[0].school.is_empty());
        assert!(resume.education[0].gpa.is_none());
        assert!(resume.key_achievements.is_empty());
        assert!(resume.projects[0].description.is_empty());
    }

    #[test]
    fn malformed_list_entries_are_dropped() {
        let json = r#"{
            "keyAchievements": ["Won award", null, {"x": 1}, "Gave talk"],
            "experience": [null, "Dev at Acme", {"role": "Dev", "description": ["one", null]}]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert_eq!(resume.key_achievements.bullets(), vec!["Won award", "Gave talk"]);
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].role, "Dev");
        assert_eq!(resume.experience[0].description.bullets(), vec!["one"]);
    }

    #[test]
    fn schema_names_camel_case_fields() {
        let schema = serde_json::to_value(ResumeData::json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("fullName").is_some());
        assert!(properties.get("keyAchievements").is_some());
        assert!(properties.get("jobDescription").is_some());
    }

    #[test]
    fn parses_minimal_document() {
        let resume = ResumeData::from_json(r#"{"fullName": "Ada"}"#).unwrap();
        assert_eq!(resume.full_name, "Ada");
        assert!(resume.experience.is_empty());
        assert!(resume.key_achievements.is_empty());
    }

    #[test]
    fn null_fields_become_empty() {
        let json = r#"{
            "fullName": null,
            "experience": null,
            "skills": null,
            "keyAchievements": null,
            "projects": [{"name": "cvlens", "description": null}]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert!(resume.full_name.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.projects.len(), 1);
        assert!(resume.projects[0].description.is_empty());
    }

    #[test]
    fn parses_both_description_forms() {
        let json = r#"{
            "experience": [
                {"role": "A", "description": "• one\n• two"},
                {"role": "B", "description": ["one", "two"]}
            ],
            "keyAchievements": ["Won award"]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert_eq!(
            resume.experience[0].description.bullets(),
            resume.experience[1].description.bullets()
        );
        assert_eq!(resume.key_achievements.bullets(), vec!["Won award"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ResumeData::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid resume JSON"));
    }

    #[test]
    fn job_description_gate() {
        let mut resume = ResumeData::default();
        assert!(resume.job_description_text().is_none());

        resume.job_description = format!("  {}  ", "x".repeat(20));
        assert!(resume.job_description_text().is_none());

        resume.job_description = "x".repeat(21);
        assert_eq!(resume.job_description_text().map(str::len), Some(21));
    }

    #[test]
    fn template_shape() {
        let t = ResumeData::template();
        assert_eq!(t.experience.len(), 1);
        assert_eq!(t.experience[0].description.bullets().len(), 4);
        assert_eq!(t.education.len(), 1);
        assert_eq!(text::split_skills(&t.skills).len(), 6);
        assert!(t.projects.is_empty());
        assert!(t.certifications.is_empty());
    }
}
