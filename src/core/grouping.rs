use std::collections::HashSet;

use super::models::Entry;

/// Definitions shown per part of speech before the group is expanded.
pub const INITIAL_VISIBLE: usize = 3;

/// One flattened sense, carrying everything the results panel needs to
/// draw a card without reaching back into the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionCard {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub phonetic: Option<String>,
    pub audio: Option<String>,
}

/// Flatten every meaning across every entry into cards, preserving
/// source order.
pub fn flatten_entries(entries: &[Entry]) -> Vec<DefinitionCard> {
    let mut cards = Vec::new();

    for entry in entries {
        let phonetic = entry.phonetic_text().map(str::to_string);
        let audio = entry.first_audio().map(str::to_string);

        for meaning in &entry.meanings {
            for definition in &meaning.definitions {
                cards.push(DefinitionCard {
                    word: entry.word.clone(),
                    part_of_speech: meaning.part_of_speech.clone(),
                    definition: definition.definition.clone(),
                    example: definition.example.clone(),
                    synonyms: definition.synonyms.clone(),
                    phonetic: phonetic.clone(),
                    audio: audio.clone(),
                });
            }
        }
    }

    cards
}

#[derive(Debug, Clone)]
pub struct DefinitionGroup {
    pub part_of_speech: String,
    pub cards: Vec<DefinitionCard>,
}

impl DefinitionGroup {
    /// The slice of cards to draw given the current expand/collapse state.
    pub fn visible(&self, visibility: &VisibilityState) -> &[DefinitionCard] {
        if visibility.is_expanded(&self.part_of_speech) {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(INITIAL_VISIBLE)]
        }
    }

    pub fn has_overflow(&self) -> bool {
        self.cards.len() > INITIAL_VISIBLE
    }

    pub fn hidden_count(&self) -> usize {
        self.cards.len().saturating_sub(INITIAL_VISIBLE)
    }
}

/// Cards bucketed by part of speech. Bucket order is first appearance in
/// the flattened card list; card order within a bucket is source order.
/// Derived per render, never stored.
#[derive(Debug, Clone, Default)]
pub struct GroupedDefinitions {
    groups: Vec<DefinitionGroup>,
}

impl GroupedDefinitions {
    pub fn groups(&self) -> &[DefinitionGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, part_of_speech: &str) -> bool {
        self.groups.iter().any(|g| g.part_of_speech == part_of_speech)
    }

    fn push(&mut self, card: DefinitionCard) {
        match self.groups.iter_mut().find(|g| g.part_of_speech == card.part_of_speech) {
            Some(group) => group.cards.push(card),
            None => self.groups.push(DefinitionGroup {
                part_of_speech: card.part_of_speech.clone(),
                cards: vec![card],
            }),
        }
    }
}

pub fn group_entries(entries: &[Entry]) -> GroupedDefinitions {
    let mut grouped = GroupedDefinitions::default();
    for card in flatten_entries(entries) {
        grouped.push(card);
    }
    grouped
}

/// Which parts of speech are currently expanded. Lives inside the result
/// view so a new search drops it together with the entry list.
#[derive(Debug, Clone, Default)]
pub struct VisibilityState {
    expanded: HashSet<String>,
}

impl VisibilityState {
    pub fn is_expanded(&self, part_of_speech: &str) -> bool {
        self.expanded.contains(part_of_speech)
    }

    pub fn toggle(&mut self, part_of_speech: &str) {
        if !self.expanded.remove(part_of_speech) {
            self.expanded.insert(part_of_speech.to_string());
        }
    }
}
