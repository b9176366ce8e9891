use std::path::{
    Path,
    PathBuf,
};

use crate::core::WordlensError;

const KNOWN_EXTENSIONS: [&str; 4] = ["mp3", "ogg", "wav", "m4a"];

/// Extension for the temp file, guessed from the URL path. The API serves
/// mp3 almost exclusively, so that is the fallback for anything odd.
fn guess_extension(url: &str) -> &str {
    let clean = url.split('?').next().unwrap_or(url);
    let ext = Path::new(clean).extension().and_then(|e| e.to_str()).unwrap_or("mp3");

    if KNOWN_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
        ext
    } else {
        "mp3"
    }
}

/// Download a pronunciation file to a temp path and hand it to the system
/// default player. Returns the temp path that was opened.
pub async fn download_and_play(url: &str) -> Result<PathBuf, WordlensError> {
    let response = reqwest::Client::new().get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WordlensError::Http(status.as_u16()));
    }

    let bytes = response.bytes().await?;

    let temp_path = std::env::temp_dir()
        .join(format!("wordlens_{}.{}", uuid::Uuid::new_v4(), guess_extension(url)));
    std::fs::write(&temp_path, &bytes)?;

    println!("[Audio] Saved pronunciation to {}", temp_path.display());

    open::that(&temp_path)
        .map_err(|e| WordlensError::Custom(format!("Failed to open audio player: {}", e)))?;

    Ok(temp_path)
}

#[cfg(test)]
mod tests {
    use super::guess_extension;

    #[test]
    fn known_extensions_pass_through() {
        assert_eq!(guess_extension("https://example.com/hello-uk.mp3"), "mp3");
        assert_eq!(guess_extension("https://example.com/hello.ogg"), "ogg");
    }

    #[test]
    fn query_parameters_are_ignored() {
        assert_eq!(guess_extension("https://example.com/hello.wav?token=abc"), "wav");
    }

    #[test]
    fn unknown_extensions_fall_back_to_mp3() {
        assert_eq!(guess_extension("https://example.com/hello.php"), "mp3");
        assert_eq!(guess_extension("https://example.com/hello"), "mp3");
    }
}
