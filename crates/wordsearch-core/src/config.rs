use crate::error::{PuzzleError, MAX_SIZE, MIN_SIZE};
use crate::GeneratorConfig;
use serde::{Deserialize, Serialize};

/// Default grid side length
pub const DEFAULT_SIZE: usize = 15;

/// Default word list
pub const DEFAULT_WORDS: [&str; 9] = [
    "JAVASCRIPT",
    "HTML",
    "CSS",
    "WEB",
    "CODIGO",
    "PROGRAMACION",
    "ALGORITMO",
    "FUNCION",
    "VARIABLE",
];

/// Everything needed to build a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub size: usize,
    pub words: Vec<String>,
    pub generator: GeneratorConfig,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl PuzzleConfig {
    pub fn new(size: usize, words: Vec<String>) -> Self {
        Self {
            size,
            words,
            ..Self::default()
        }
    }

    /// Uppercase and trim the word list, then check size and words.
    pub fn validated(mut self) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(PuzzleError::InvalidSize { size: self.size });
        }

        let mut words: Vec<String> = Vec::with_capacity(self.words.len());
        for raw in &self.words {
            let word = raw.trim().to_ascii_uppercase();
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidWord { word: raw.clone() });
            }
            if words.contains(&word) {
                return Err(PuzzleError::DuplicateWord { word });
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        self.words = words;
        Ok(self)
    }
}
