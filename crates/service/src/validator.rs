use crate::errors::ServiceError;

/// Longest body accepted, in characters.
const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced wholesale by the placeholder, matched case-insensitively
/// against whole tokens only.
const DISALLOWED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const PLACEHOLDER: &str = "****";

/// Validate a chirp body and apply the word filter.
///
/// Over-long bodies are rejected; disallowed words are substituted, not
/// rejected. Tokens are split on single spaces so that a clean body comes
/// back byte-identical — no trimming or whitespace collapsing happens here.
pub fn clean_body(body: &str) -> Result<String, ServiceError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ServiceError::Validation("Chirp is too long".into()));
    }

    let cleaned: Vec<&str> = body
        .split(' ')
        .map(|token| {
            if DISALLOWED_WORDS.contains(&token.to_lowercase().as_str()) {
                PLACEHOLDER
            } else {
                token
            }
        })
        .collect();
    Ok(cleaned.join(" "))
}
