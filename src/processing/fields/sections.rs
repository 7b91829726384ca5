//! Header-anchored section capture for skills and summary text.
//!
//! Each extractor captures everything between a recognized section header and
//! the next recognized header (or end of text), collapses bullet and newline
//! noise, and accepts the result only past a minimum plausible length.

use once_cell::sync::Lazy;
use regex::Regex;

const MIN_SKILLS_LEN: usize = 10;
const MIN_SUMMARY_LEN: usize = 20;

static SKILLS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?is)(?:skills?|technical skills?|core competencies|technologies)[\s:]*[-•]*\s*(.*?)(?:\n\s*(?:experience|education|projects|work|employment|academic|objective|summary|contact|references)\b|\z)",
        r"(?is)(?:programming languages?|languages?|tools?)[\s:]*[-•]*\s*(.*?)(?:\n\s*\w+\s*:|\n\n|\z)",
        r"(?is)(?:proficient in|experienced with|knowledge of)[\s:]*[-•]*\s*(.*?)(?:\n\s*\w+\s*:|\n\n|\z)",
    ])
});

static SUMMARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?is)(?:summary|objective|profile|about me|career objective|professional summary)[\s:]*[-•]*\s*(.*?)(?:\n\s*(?:experience|education|skills|projects|work|employment|academic|contact)\b|\z)",
        r"(?is)(?:career goal|personal statement|overview)[\s:]*[-•]*\s*(.*?)(?:\n\s*\w+\s*:|\n\n|\z)",
    ])
});

static BULLET_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•\-\*\n\r]+").expect("bullet noise pattern"));

static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("newline pattern"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("section pattern"))
        .collect()
}

/// Skills text captured after a skills-like header.
pub(crate) fn skills(text: &str) -> Option<String> {
    for pattern in SKILLS_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let raw = captures.get(1)?.as_str().trim();
            let flattened = BULLET_NOISE.replace_all(raw, " ");
            let collapsed = WHITESPACE.replace_all(&flattened, " ");
            let cleaned = collapsed.trim().replace(" , ", ", ");
            if cleaned.len() > MIN_SKILLS_LEN {
                return Some(cleaned);
            }
        }
    }
    None
}

/// Summary or objective text captured after a summary-like header.
pub(crate) fn summary(text: &str) -> Option<String> {
    for pattern in SUMMARY_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let raw = captures.get(1)?.as_str().trim();
            let joined = NEWLINES.replace_all(raw, " ");
            let collapsed = WHITESPACE.replace_all(&joined, " ");
            let cleaned = collapsed.trim().to_string();
            if cleaned.len() > MIN_SUMMARY_LEN {
                return Some(cleaned);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_capture_stops_at_next_section() {
        let text = "Skills:\n- Rust, Python, SQL\n- Docker\nExperience\nAcme Corp";
        let found = skills(text).unwrap();
        assert_eq!(found, "Rust, Python, SQL Docker");
    }

    #[test]
    fn test_skills_rejects_short_capture() {
        let text = "Skills: Go\n\nExperience\nAcme";
        assert!(skills(text).is_none());
    }

    #[test]
    fn test_summary_collapses_newlines() {
        let text =
            "Professional Summary\nSeasoned backend engineer\nwith a decade of API work.\nExperience\nAcme";
        let found = summary(text).unwrap();
        assert_eq!(
            found,
            "Seasoned backend engineer with a decade of API work."
        );
    }

    #[test]
    fn test_summary_rejects_short_capture() {
        assert!(summary("Objective: win\n\nSkills: many things").is_none());
    }
}
