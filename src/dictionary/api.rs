use percent_encoding::{
    utf8_percent_encode,
    NON_ALPHANUMERIC,
};
use reqwest::{
    Client,
    StatusCode,
};

use crate::core::{
    models::Entry,
    WordlensError,
};

pub const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Build the lookup URL for a raw search term: trimmed, lowercased, and
/// percent-encoded as a path segment.
pub fn request_url(word: &str) -> String {
    let normalized = word.trim().to_lowercase();
    format!("{}{}", API_BASE, utf8_percent_encode(&normalized, NON_ALPHANUMERIC))
}

/// One GET against the dictionary API. 404 means the word is unknown to
/// the data source; any other non-2xx status is reported with its code.
/// No retry, no explicit timeout.
pub async fn lookup(word: &str) -> Result<Vec<Entry>, WordlensError> {
    let response = Client::new().get(request_url(word)).send().await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(WordlensError::WordNotFound(word.trim().to_lowercase()));
    }
    if !status.is_success() {
        return Err(WordlensError::Http(status.as_u16()));
    }

    let body = response.text().await?;
    let entries: Vec<Entry> = serde_json::from_str(&body)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_normalizes_and_encodes() {
        assert_eq!(request_url("Hello"), format!("{}hello", API_BASE));
        assert_eq!(request_url("  Ice Cream "), format!("{}ice%20cream", API_BASE));
        assert_eq!(request_url("don't"), format!("{}don%27t", API_BASE));
    }

    #[test]
    fn not_found_message_is_displayable() {
        let error = WordlensError::WordNotFound("xqzt".to_string());
        assert_eq!(
            error.to_string(),
            "No definitions found for \"xqzt\". Please check your spelling."
        );
    }

    #[test]
    fn http_error_surfaces_the_status_code() {
        let error = WordlensError::Http(503);
        assert!(error.to_string().contains("503"));
        assert!(error.to_string().contains("try again"));
    }
}
