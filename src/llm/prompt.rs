//! The structured-extraction prompt sent to the language model, and the
//! post-processing applied to its reply before JSON decoding.

/// System message for the extraction conversation.
pub const SYSTEM_PROMPT: &str =
    "You are a CV parsing expert. Extract structured data from CV text and return valid JSON.";

/// Build the extraction prompt for the given (already truncated) CV text.
///
/// The embedded schema mirrors [`ParsedProfile`](crate::types::ParsedProfile)
/// exactly, so the reply deserializes directly into the record.
pub fn extraction_prompt(text: &str) -> String {
    format!(
        r#"Parse the following CV/Resume text and extract structured information. Return a JSON object with the following structure:
{{
    "personal_info": {{
        "first_name": "",
        "last_name": "",
        "email": "",
        "phone": "",
        "address": "",
        "linkedin_url": "",
        "github_url": "",
        "website_url": ""
    }},
    "summary": "",
    "skills": "",
    "experience": [
        {{
            "position": "",
            "company": "",
            "location": "",
            "start_date": "YYYY-MM-DD",
            "end_date": "YYYY-MM-DD or Present",
            "current": false,
            "description": ""
        }}
    ],
    "education": [
        {{
            "institution": "",
            "degree": "",
            "field_of_study": "",
            "start_date": "YYYY-MM-DD",
            "end_date": "YYYY-MM-DD",
            "grade": "",
            "description": ""
        }}
    ],
    "projects": [
        {{
            "name": "",
            "description": "",
            "technologies": "",
            "url": "",
            "start_date": "YYYY-MM-DD",
            "end_date": "YYYY-MM-DD"
        }}
    ],
    "certifications": [
        {{
            "name": "",
            "issuer": "",
            "issue_date": "YYYY-MM-DD",
            "expiry_date": "YYYY-MM-DD",
            "url": ""
        }}
    ],
    "awards": [
        {{
            "title": "",
            "awarding_body": "",
            "year": "",
            "description": ""
        }}
    ],
    "volunteering": [
        {{
            "role_title": "",
            "organization": "",
            "location": "",
            "start_date": "YYYY-MM-DD",
            "end_date": "YYYY-MM-DD or Present",
            "current": false,
            "description": ""
        }}
    ],
    "publications": [
        {{
            "title": "",
            "publisher": "",
            "publication_date": "YYYY-MM-DD",
            "url": "",
            "description": ""
        }}
    ]
}}

CV Text:
{text}

Return only valid JSON. If information is not available, use empty strings or empty arrays."#
    )
}

/// Strip markdown code fencing a model may wrap around its JSON reply.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```json\n{\"summary\": \"hi\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"summary\": \"hi\"}");
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_prompt_embeds_text_and_schema() {
        let prompt = extraction_prompt("Jane Doe\njane@example.com");
        assert!(prompt.contains("jane@example.com"));
        assert!(prompt.contains("\"personal_info\""));
        assert!(prompt.contains("\"publications\""));
        assert!(prompt.ends_with("empty strings or empty arrays."));
    }
}
