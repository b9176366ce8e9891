use serde::{
    Deserialize,
    Serialize,
};

/// One headword's full record as returned by the dictionary API.
/// Optional fields the API omits (or sends empty) deserialize to their
/// defaults instead of failing the whole lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Pronunciation>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl Entry {
    /// First usable pronunciation audio URL. The API routinely sends
    /// `"audio": ""`, which counts as absent.
    pub fn first_audio(&self) -> Option<&str> {
        self.phonetics.iter().filter_map(|p| p.audio.as_deref()).find(|url| !url.is_empty())
    }

    /// Phonetic spelling, preferring the top-level field over the
    /// per-pronunciation ones.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| {
                self.phonetics.iter().filter_map(|p| p.text.as_deref()).find(|text| !text.is_empty())
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_entry() {
        let json = r#"{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [
                { "text": "həˈləʊ", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3" },
                { "text": "hɛˈləʊ" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [
                        {
                            "definition": "used as a greeting or to begin a phone conversation.",
                            "example": "hello there, Katie!",
                            "synonyms": ["hi", "howdy"]
                        }
                    ]
                }
            ]
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic_text(), Some("həˈləʊ"));
        assert!(entry.first_audio().unwrap().ends_with("hello-uk.mp3"));
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(entry.meanings[0].definitions[0].synonyms, vec!["hi", "howdy"]);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let json = r#"{
            "word": "spartan",
            "meanings": [
                {
                    "partOfSpeech": "adjective",
                    "definitions": [ { "definition": "austere or frugal." } ]
                }
            ]
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.phonetic_text(), None);
        assert_eq!(entry.first_audio(), None);
        assert_eq!(entry.meanings[0].definitions[0].example, None);
        assert!(entry.meanings[0].definitions[0].synonyms.is_empty());
    }

    #[test]
    fn empty_audio_string_counts_as_absent() {
        let json = r#"{
            "word": "quiet",
            "phonetics": [
                { "text": "ˈkwaɪət", "audio": "" },
                { "audio": "https://example.com/quiet.mp3" }
            ]
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.first_audio(), Some("https://example.com/quiet.mp3"));
    }
}
