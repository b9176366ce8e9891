use crate::core::models::Entry;

/// Completed background work, polled by the GUI once per frame. Errors
/// cross the channel as display strings.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// A dictionary lookup finished. `seq` is the tag handed out by
    /// `SearchController::begin`; stale sequences are discarded on
    /// arrival.
    Lookup { seq: u64, word: String, result: Result<Vec<Entry>, String> },

    IpAddress(Result<String, String>),

    AudioPlayed(Result<(), String>),
}
