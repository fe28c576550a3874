use serde::{Deserialize, Serialize};

use crate::distribution::lines::count_lines;

// @module: Timed text segments consumed and rewritten by the distributor

// @struct: Single timed segment (one subtitle cue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    // @field: Current text payload
    pub content: String,

    // @field: Display line count, 0 marks a group separator
    pub lines: usize,

    // @field: Group index, assigned by the distributor
    #[serde(default)]
    pub group: usize,

    // @field: Share of the group's original length, assigned by the distributor
    #[serde(default)]
    pub portion: f64,
}

impl Utterance {
    // @creates: Utterance with an explicit line count
    pub fn new(content: impl Into<String>, lines: usize) -> Self {
        Self {
            content: content.into(),
            lines,
            group: 0,
            portion: 0.0,
        }
    }

    // @creates: Utterance whose line count is derived from its content
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = count_lines(&content);
        Self::new(content, lines)
    }

    // @creates: Blank utterance that closes a group
    pub fn separator() -> Self {
        Self::new(String::new(), 0)
    }

    /// Whether this utterance closes its group
    pub fn is_separator(&self) -> bool {
        self.lines == 0
    }

    /// Content length in characters
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}
