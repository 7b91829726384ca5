//! Contact-field extractors: email, phone, profile URLs, name, and address.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // US format
        r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        // International
        r"\+\d{1,3}[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
        // Simple format
        r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
        // (123) 456-7890
        r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}",
    ])
});

static LINKEDIN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:linkedin\.com/in/|linkedin\.com/pub/)([A-Za-z0-9\-._]+)",
        r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/([A-Za-z0-9\-._]+)",
        r"(?i)linkedin[\s:]*([A-Za-z0-9\-._/]+)",
        r"(?i)(?:linkedin profile|linkedin:)\s*([A-Za-z0-9\-._/]+)",
    ])
});

static GITHUB_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)github\.com/([A-Za-z0-9\-._]+)",
        r"(?i)(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9\-._]+)",
        r"(?i)github[\s:]*([A-Za-z0-9\-._/]+)",
        r"(?i)(?:github profile|github:)\s*([A-Za-z0-9\-._/]+)",
    ])
});

static WEBSITE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:portfolio|website|personal site)[\s:]*([A-Za-z0-9\-._/]+\.(?:com|org|net|io|dev|me|co|uk))",
        r"(?i)https?://([A-Za-z0-9\-._]+\.(?:com|org|net|io|dev|me|co|uk))",
        r"(?i)(www\.[A-Za-z0-9\-._]+\.(?:com|org|net|io|dev|me|co|uk))",
    ])
});

/// Domains that are never a personal website.
const SOCIAL_DOMAINS: &[&str] = &[
    "linkedin.com",
    "github.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
];

static ADDRESS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(\d+\s+[\w\s]+(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|way|place|pl).*?(?:\d{5}|\w+,\s*\w+))",
        r"(?i)(\d+.*?(?:apt|apartment|unit|suite|ste).*?\d+.*?(?:\d{5}|\w+,\s*\w+))",
        // City, State ZIP
        r"(?i)([A-Z][a-z]+,\s*[A-Z]{2}\s*\d{5})",
        // City, Country, State
        r"(?i)([A-Z][a-z\s]+,\s*[A-Z][a-z\s]+,\s*[A-Z]{2})",
    ])
});

static NAME_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[(){}\[\]<>|\\/@#$%^&*+=~`]").expect("name noise pattern"));

static HONORIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:mr\.?|ms\.?|mrs\.?|dr\.?|prof\.?)\s+").expect("honorific pattern"));

/// Substrings that mark a line as contact data rather than a name.
const NAME_SKIP_MARKERS: &[&str] = &["http", "@", "phone", "email", "linkedin", "github"];

/// Section headers that disqualify a line as a name.
const HEADER_WORDS: &[&str] = &[
    "objective",
    "summary",
    "experience",
    "education",
    "skills",
    "technical",
    "portfolio",
    "projects",
];

/// Lines scanned from the top of the document when looking for a name.
const NAME_SCAN_LINES: usize = 10;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("contact pattern"))
        .collect()
}

/// First email-address match in the text.
pub(crate) fn email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// First phone candidate with at least ten characters left after stripping
/// spaces, dashes, parentheses, and the plus sign.
pub(crate) fn phone(text: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            let candidate = m.as_str().trim();
            let compact: String = candidate
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
                .collect();
            if compact.len() >= 10 {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Canonical `https://linkedin.com/in/<id>` URL from the first matching
/// pattern.
pub(crate) fn linkedin(text: &str) -> Option<String> {
    profile_url(text, &LINKEDIN_PATTERNS, "https://linkedin.com/in")
}

/// Canonical `https://github.com/<user>` URL from the first matching pattern.
pub(crate) fn github(text: &str) -> Option<String> {
    profile_url(text, &GITHUB_PATTERNS, "https://github.com")
}

fn profile_url(text: &str, patterns: &[Regex], base: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            let capture = captures.get(1)?.as_str();
            // A capture with path segments keeps only the handle.
            let handle = capture.rsplit('/').next().unwrap_or(capture);
            return Some(format!("{}/{}", base, handle));
        }
    }
    None
}

/// Personal website URL, skipping known social domains. A social-domain match
/// falls through to the next pattern rather than ending the search.
pub(crate) fn website(text: &str) -> Option<String> {
    for pattern in WEBSITE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let mut site = captures.get(1)?.as_str().to_string();
            if !site.starts_with("http") {
                site = format!("https://{}", site);
            }
            let lower = site.to_lowercase();
            if !SOCIAL_DOMAINS.iter().any(|domain| lower.contains(domain)) {
                return Some(site);
            }
        }
    }
    None
}

/// Scan the first lines of the document for a plausible name line.
///
/// Lines carrying contact markers or bracket noise are skipped; honorific
/// prefixes are stripped and a trailing "— Job Title" suffix is cut before
/// the word check. The first line of 2-4 alphabetic words that is not a known
/// section header wins, with first/last word becoming first/last name.
pub(crate) fn name(lines: &[&str]) -> Option<(String, String)> {
    for &line in lines.iter().take(NAME_SCAN_LINES) {
        let lower = line.to_lowercase();
        if NAME_SKIP_MARKERS.iter().any(|marker| lower.contains(marker)) {
            continue;
        }
        if NAME_NOISE.is_match(line) {
            continue;
        }

        let stripped = HONORIFIC.replace(line, "").into_owned();
        let head = if let Some(index) = stripped.find('—') {
            stripped[..index].trim()
        } else if let Some(index) = stripped.find('–') {
            stripped[..index].trim()
        } else {
            stripped.as_str()
        };

        let words: Vec<&str> = head.split_whitespace().collect();
        if !(2..=4).contains(&words.len()) {
            continue;
        }
        let all_alphabetic = words.iter().all(|word| {
            let cleaned: String = word
                .chars()
                .filter(|c| !matches!(c, '-' | '\'' | '.'))
                .collect();
            !cleaned.is_empty()
                && cleaned.chars().all(char::is_alphabetic)
                && word.chars().count() > 1
        });
        if !all_alphabetic {
            continue;
        }
        if HEADER_WORDS.iter().any(|header| lower.contains(header)) {
            continue;
        }

        return Some((
            words[0].to_string(),
            words[words.len() - 1].to_string(),
        ));
    }
    None
}

/// First structural address match longer than ten characters.
pub(crate) fn address(text: &str) -> Option<String> {
    for pattern in ADDRESS_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let candidate = captures.get(1)?.as_str().trim();
            if candidate.len() > 10 {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_wins() {
        let text = "contact jane.doe@example.com or admin@example.org";
        assert_eq!(email(text).unwrap(), "jane.doe@example.com");
    }

    #[test]
    fn test_phone_rejects_short_candidates() {
        // Matches the international pattern but has too few digits.
        assert!(phone("ref +1-2-3-4 only").is_none());
        assert_eq!(phone("call (415) 555-0198 now").unwrap(), "(415) 555-0198");
    }

    #[test]
    fn test_linkedin_handle_from_path() {
        let url = linkedin("see linkedin.com/in/jsmith99 for details").unwrap();
        assert_eq!(url, "https://linkedin.com/in/jsmith99");
    }

    #[test]
    fn test_github_labelled_form() {
        let url = github("GitHub: octocat").unwrap();
        assert_eq!(url, "https://github.com/octocat");
    }

    #[test]
    fn test_website_labelled_form() {
        let text = "Portfolio: janedoe.dev is mine";
        assert_eq!(website(text).unwrap(), "https://janedoe.dev");
    }

    #[test]
    fn test_website_skips_social_domains() {
        // The URL pattern hits linkedin.com first; the www pattern then
        // recovers the personal site.
        let text = "profiles: https://linkedin.com/in/x and www.janedoe.dev";
        assert_eq!(website(text).unwrap(), "https://www.janedoe.dev");
    }

    #[test]
    fn test_name_strips_honorific_and_title_suffix() {
        let lines = vec!["Dr. Jane O'Brien — Staff Engineer", "London"];
        let (first, last) = name(&lines).unwrap();
        assert_eq!(first, "Jane");
        assert_eq!(last, "O'Brien");
    }

    #[test]
    fn test_name_skips_headers_and_contact_lines() {
        let lines = vec![
            "Professional Summary",
            "jane@example.com",
            "Jane Doe",
        ];
        let (first, last) = name(&lines).unwrap();
        assert_eq!(first, "Jane");
        assert_eq!(last, "Doe");
    }

    #[test]
    fn test_address_city_state_zip() {
        let found = address("based in Portland, OR 97201 since 2019").unwrap();
        assert_eq!(found, "Portland, OR 97201");
    }
}
