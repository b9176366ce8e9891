use super::{
    grouping::VisibilityState,
    models::Entry,
};

/// Entry list and expand/collapse flags for one rendered search. Replaced
/// as a unit when a new search commits, so no visibility key can outlive
/// the entries it was created for.
#[derive(Debug, Default)]
pub struct ResultView {
    pub entries: Vec<Entry>,
    pub visibility: VisibilityState,
}

impl ResultView {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries, visibility: VisibilityState::default() }
    }
}

#[derive(Debug, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Rendered(ResultView),
    Error(String),
}

/// Per-session state machine: Idle → Loading → { Rendered | Error },
/// with Rendered self-transitions on toggle.
///
/// Every lookup is tagged with a monotonically increasing sequence
/// number; a response whose tag is not the latest issued is discarded, so
/// a slow early request can never clobber a faster later one.
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    issued_seq: u64,
}

impl SearchController {
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a new search. Drops any previous result view (entries and
    /// visibility together) and returns the sequence number the caller
    /// must tag the fetch with.
    pub fn begin(&mut self) -> u64 {
        self.issued_seq += 1;
        self.state = SearchState::Loading;
        self.issued_seq
    }

    /// Commit a lookup response. Returns false when the response was
    /// stale (superseded by a newer search, or the session was cleared
    /// while the request was in flight) and nothing changed.
    pub fn resolve(&mut self, seq: u64, result: Result<Vec<Entry>, String>) -> bool {
        if seq != self.issued_seq || !matches!(self.state, SearchState::Loading) {
            return false;
        }

        self.state = match result {
            Ok(entries) => SearchState::Rendered(ResultView::new(entries)),
            Err(message) => SearchState::Error(message),
        };

        true
    }

    /// Flip a category's expand/collapse flag. Only meaningful while
    /// rendered; a no-op in every other state.
    pub fn toggle(&mut self, part_of_speech: &str) {
        if let SearchState::Rendered(view) = &mut self.state {
            view.visibility.toggle(part_of_speech);
        }
    }

    /// Drop the session (input emptied). In-flight responses for the old
    /// query will be rejected by `resolve`.
    pub fn clear(&mut self) {
        self.state = SearchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Definition,
        Meaning,
    };

    fn entries(word: &str) -> Vec<Entry> {
        vec![Entry {
            word: word.to_string(),
            phonetic: None,
            phonetics: Vec::new(),
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![Definition {
                    definition: format!("definition of {}", word),
                    example: None,
                    synonyms: Vec::new(),
                }],
            }],
        }]
    }

    fn rendered_word(controller: &SearchController) -> Option<&str> {
        match controller.state() {
            SearchState::Rendered(view) => view.entries.first().map(|e| e.word.as_str()),
            _ => None,
        }
    }

    #[test]
    fn lookup_success_renders() {
        let mut controller = SearchController::default();
        let seq = controller.begin();
        assert!(matches!(controller.state(), SearchState::Loading));

        assert!(controller.resolve(seq, Ok(entries("cat"))));
        assert_eq!(rendered_word(&controller), Some("cat"));
    }

    #[test]
    fn lookup_failure_shows_error_and_no_partial_render() {
        let mut controller = SearchController::default();
        let seq = controller.begin();

        assert!(controller.resolve(seq, Err("No definitions found for \"xqzt\". Please check your spelling.".to_string())));
        match controller.state() {
            SearchState::Error(message) => assert!(message.contains("xqzt")),
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = SearchController::default();
        let first = controller.begin();
        let second = controller.begin();

        // The newer request resolves first.
        assert!(controller.resolve(second, Ok(entries("new"))));
        assert_eq!(rendered_word(&controller), Some("new"));

        // The slow earlier request must not clobber it.
        assert!(!controller.resolve(first, Ok(entries("old"))));
        assert_eq!(rendered_word(&controller), Some("new"));
    }

    #[test]
    fn latest_dispatched_request_renders_when_it_resolves_last() {
        let mut controller = SearchController::default();
        let first = controller.begin();
        let second = controller.begin();

        assert!(!controller.resolve(first, Ok(entries("old"))));
        assert!(matches!(controller.state(), SearchState::Loading));

        assert!(controller.resolve(second, Ok(entries("new"))));
        assert_eq!(rendered_word(&controller), Some("new"));
    }

    #[test]
    fn response_after_clear_is_rejected() {
        let mut controller = SearchController::default();
        let seq = controller.begin();
        controller.clear();

        assert!(!controller.resolve(seq, Ok(entries("ghost"))));
        assert!(matches!(controller.state(), SearchState::Idle));
    }

    #[test]
    fn new_search_resets_visibility() {
        let mut controller = SearchController::default();
        let seq = controller.begin();
        assert!(controller.resolve(seq, Ok(entries("cat"))));
        controller.toggle("noun");

        match controller.state() {
            SearchState::Rendered(view) => assert!(view.visibility.is_expanded("noun")),
            other => panic!("expected rendered state, got {:?}", other),
        }

        let seq = controller.begin();
        assert!(controller.resolve(seq, Ok(entries("dog"))));

        match controller.state() {
            SearchState::Rendered(view) => assert!(!view.visibility.is_expanded("noun")),
            other => panic!("expected rendered state, got {:?}", other),
        }
    }

    #[test]
    fn toggle_outside_rendered_is_a_no_op() {
        let mut controller = SearchController::default();
        controller.toggle("noun");
        assert!(matches!(controller.state(), SearchState::Idle));

        controller.begin();
        controller.toggle("noun");
        assert!(matches!(controller.state(), SearchState::Loading));
    }

    #[test]
    fn duplicate_resolve_is_rejected() {
        let mut controller = SearchController::default();
        let seq = controller.begin();

        assert!(controller.resolve(seq, Ok(entries("cat"))));
        assert!(!controller.resolve(seq, Err("late duplicate".to_string())));
        assert_eq!(rendered_word(&controller), Some("cat"));
    }
}
