use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker used for date ranges that are still running.
pub const ONGOING: &str = "Present";

/// Date spellings accepted when reformatting to ISO.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
];

/// Contact details extracted from a CV.
///
/// Every field defaults to the empty string; consumers never have to check
/// for a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number, as it appeared in the document
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Canonical LinkedIn profile URL
    pub linkedin_url: String,
    /// Canonical GitHub profile URL
    pub github_url: String,
    /// Personal website or portfolio URL
    pub website_url: String,
}

/// A single work-history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Job title
    #[serde(alias = "job_title")]
    pub position: String,
    /// Employer name
    pub company: String,
    /// Work location
    pub location: String,
    /// Start date, ISO `YYYY-MM-DD`
    pub start_date: String,
    /// End date, ISO `YYYY-MM-DD`, or [`ONGOING`] for a running role
    pub end_date: String,
    /// Whether this is the current role
    #[serde(alias = "is_current")]
    pub current: bool,
    /// Free-text description of the role
    pub description: String,
}

/// A single education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    /// School or university name
    pub institution: String,
    /// Degree or qualification name
    pub degree: String,
    /// Field of study
    pub field_of_study: String,
    /// Start date, ISO `YYYY-MM-DD`
    pub start_date: String,
    /// End date, ISO `YYYY-MM-DD`
    pub end_date: String,
    /// Grade or classification
    #[serde(alias = "gpa")]
    pub grade: String,
    /// Free-text description
    pub description: String,
}

/// A personal or professional project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    /// Project name
    pub name: String,
    /// What the project does
    pub description: String,
    /// Technologies used, comma-separated
    pub technologies: String,
    /// Project URL
    pub url: String,
    /// Start date, ISO `YYYY-MM-DD`
    pub start_date: String,
    /// End date, ISO `YYYY-MM-DD`
    pub end_date: String,
}

/// A professional certification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    /// Certification name
    pub name: String,
    /// Issuing organization
    pub issuer: String,
    /// Issue date, ISO `YYYY-MM-DD`
    pub issue_date: String,
    /// Expiry date, ISO `YYYY-MM-DD`
    pub expiry_date: String,
    /// Verification URL
    pub url: String,
}

/// An award or honor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    /// Award title
    pub title: String,
    /// Organization that granted the award
    pub awarding_body: String,
    /// Year awarded
    pub year: String,
    /// Free-text description
    pub description: String,
}

/// A volunteering engagement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteeringEntry {
    /// Role title
    pub role_title: String,
    /// Organization name
    pub organization: String,
    /// Location
    pub location: String,
    /// Start date, ISO `YYYY-MM-DD`
    pub start_date: String,
    /// End date, ISO `YYYY-MM-DD`, or [`ONGOING`]
    pub end_date: String,
    /// Whether the engagement is ongoing
    pub current: bool,
    /// Free-text description
    pub description: String,
}

/// A publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationEntry {
    /// Publication title
    pub title: String,
    /// Publisher or venue
    pub publisher: String,
    /// Publication date, ISO `YYYY-MM-DD`
    pub publication_date: String,
    /// Link to the publication
    pub url: String,
    /// Free-text description
    pub description: String,
}

/// The normalized output record of a parse.
///
/// A `ParsedProfile` is a transient value: it is created fresh on every parse
/// call, never mutated by this crate after being returned, and owned entirely
/// by the caller. Unmatched fields stay at their empty defaults, so
/// serialization always emits the full shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedProfile {
    /// Contact details
    pub personal_info: PersonalInfo,
    /// Professional summary or objective
    pub summary: String,
    /// Skills, comma-separated or prose
    pub skills: String,
    /// Work history, most entries first as found
    pub experience: Vec<ExperienceEntry>,
    /// Education history
    pub education: Vec<EducationEntry>,
    /// Projects
    pub projects: Vec<ProjectEntry>,
    /// Certifications
    pub certifications: Vec<CertificationEntry>,
    /// Awards and honors
    pub awards: Vec<AwardEntry>,
    /// Volunteering engagements
    pub volunteering: Vec<VolunteeringEntry>,
    /// Publications
    pub publications: Vec<PublicationEntry>,
}

impl ParsedProfile {
    /// Normalize every date field in the record.
    ///
    /// Recognized date spellings are reformatted to ISO `YYYY-MM-DD`; ongoing
    /// markers ("present", "ongoing", "current", any case) are folded to
    /// [`ONGOING`] and the matching `current` flag is set. Values that match
    /// neither are left untouched apart from trimming.
    pub fn normalize(&mut self) {
        for entry in &mut self.experience {
            normalize_date(&mut entry.start_date);
            normalize_date(&mut entry.end_date);
            if entry.end_date == ONGOING {
                entry.current = true;
            }
        }
        for entry in &mut self.education {
            normalize_date(&mut entry.start_date);
            normalize_date(&mut entry.end_date);
        }
        for entry in &mut self.projects {
            normalize_date(&mut entry.start_date);
            normalize_date(&mut entry.end_date);
        }
        for entry in &mut self.certifications {
            normalize_date(&mut entry.issue_date);
            normalize_date(&mut entry.expiry_date);
        }
        for entry in &mut self.volunteering {
            normalize_date(&mut entry.start_date);
            normalize_date(&mut entry.end_date);
            if entry.end_date == ONGOING {
                entry.current = true;
            }
        }
        for entry in &mut self.publications {
            normalize_date(&mut entry.publication_date);
        }
    }
}

fn normalize_date(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        value.clear();
        return;
    }
    if matches!(
        trimmed.to_lowercase().as_str(),
        "present" | "ongoing" | "current"
    ) {
        *value = ONGOING.to_string();
        return;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            *value = date.format("%Y-%m-%d").to_string();
            return;
        }
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Result surface for callers that want a JSON-serializable value in every
/// case: either the full profile mapping, or `{"error": "..."}` when the
/// declared extension is unsupported.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ParseOutcome {
    /// A successfully produced profile (possibly all defaults).
    Profile(Box<ParsedProfile>),
    /// The extension-rejection case.
    Failure {
        /// Human-readable reason
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_serializes_every_field() {
        let profile = ParsedProfile::default();
        let value = serde_json::to_value(&profile).unwrap();
        let personal_info = value.get("personal_info").unwrap();
        for key in [
            "first_name",
            "last_name",
            "email",
            "phone",
            "address",
            "linkedin_url",
            "github_url",
            "website_url",
        ] {
            assert_eq!(personal_info.get(key).unwrap(), "");
        }
        for key in [
            "experience",
            "education",
            "projects",
            "certifications",
            "awards",
            "volunteering",
            "publications",
        ] {
            assert!(value.get(key).unwrap().as_array().unwrap().is_empty());
        }
        assert_eq!(value.get("summary").unwrap(), "");
        assert_eq!(value.get("skills").unwrap(), "");
    }

    #[test]
    fn test_deserialize_tolerates_missing_and_aliased_keys() {
        let json = r#"{
            "personal_info": {"first_name": "Ada"},
            "experience": [{"job_title": "Engineer", "is_current": true}],
            "education": [{"gpa": "3.9"}]
        }"#;
        let profile: ParsedProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.personal_info.first_name, "Ada");
        assert_eq!(profile.personal_info.last_name, "");
        assert_eq!(profile.experience[0].position, "Engineer");
        assert!(profile.experience[0].current);
        assert_eq!(profile.education[0].grade, "3.9");
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_normalize_folds_ongoing_markers() {
        let mut profile = ParsedProfile {
            experience: vec![ExperienceEntry {
                start_date: "2023-01-01".to_string(),
                end_date: "present".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        profile.normalize();
        assert_eq!(profile.experience[0].end_date, ONGOING);
        assert!(profile.experience[0].current);
        assert_eq!(profile.experience[0].start_date, "2023-01-01");
    }

    #[test]
    fn test_normalize_reformats_known_spellings() {
        let mut profile = ParsedProfile {
            education: vec![EducationEntry {
                start_date: "2018/09/01".to_string(),
                end_date: "30/06/2021".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        profile.normalize();
        assert_eq!(profile.education[0].start_date, "2018-09-01");
        assert_eq!(profile.education[0].end_date, "2021-06-30");
    }

    #[test]
    fn test_failure_outcome_shape() {
        let outcome = ParseOutcome::Failure {
            error: "Unsupported file format: xyz".to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "Unsupported file format: xyz"})
        );
    }
}
