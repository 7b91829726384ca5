//! Deterministic field extraction.
//!
//! A cascade of independent regex/heuristic extractors populates a
//! [`ParsedProfile`] from raw CV text. Each extractor tries an ordered list
//! of patterns and accepts the first match that passes a plausibility check.
//! The engine is a pure function of the text: it never fails, and the worst
//! case for noisy or empty input is an all-defaults record.

mod contact;
mod entries;
mod sections;

use tracing::{debug, info};

use crate::types::ParsedProfile;

/// Extract structured fields from raw CV text.
pub fn extract_fields(text: &str) -> ParsedProfile {
    let mut profile = ParsedProfile::default();
    let text_lower = text.to_lowercase();
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let Some(email) = contact::email(text) {
        profile.personal_info.email = email;
    }
    if let Some(phone) = contact::phone(text) {
        profile.personal_info.phone = phone;
    }
    if let Some(url) = contact::linkedin(text) {
        profile.personal_info.linkedin_url = url;
    }
    if let Some(url) = contact::github(text) {
        profile.personal_info.github_url = url;
    }
    if let Some(url) = contact::website(text) {
        profile.personal_info.website_url = url;
    }
    if let Some((first_name, last_name)) = contact::name(&lines) {
        profile.personal_info.first_name = first_name;
        profile.personal_info.last_name = last_name;
    }
    if let Some(address) = contact::address(text) {
        profile.personal_info.address = address;
    }
    if let Some(skills) = sections::skills(text) {
        profile.skills = skills;
    }
    if let Some(summary) = sections::summary(text) {
        profile.summary = summary;
    }

    entries::populate(text, &text_lower, &mut profile);

    let personal_info = &profile.personal_info;
    info!(
        "CV parsing results: name: {} {}, email: {}, github: {}, website: {}",
        display_or_na(&personal_info.first_name),
        display_or_na(&personal_info.last_name),
        display_or_na(&personal_info.email),
        display_or_na(&personal_info.github_url),
        display_or_na(&personal_info.website_url),
    );
    debug!("first lines considered for name detection: {:?}", &lines[..lines.len().min(5)]);

    profile
}

fn display_or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
