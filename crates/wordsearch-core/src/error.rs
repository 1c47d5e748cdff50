use thiserror::Error;

/// Smallest grid the generator accepts
pub const MIN_SIZE: usize = 2;
/// Largest grid the generator accepts
pub const MAX_SIZE: usize = 64;

/// Errors raised while configuring a puzzle.
///
/// Generation and gesture handling never fail: unplaceable words are
/// reported on the [`Puzzle`](crate::Puzzle) and bad coordinates are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid size {size} is out of range ({MIN_SIZE}..={MAX_SIZE})")]
    InvalidSize { size: usize },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("word {word:?} must contain only the letters A-Z")]
    InvalidWord { word: String },

    #[error("word {word:?} appears more than once")]
    DuplicateWord { word: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PuzzleError::InvalidSize { size: 0 };
        assert_eq!(err.to_string(), "grid size 0 is out of range (2..=64)");

        let err = PuzzleError::InvalidWord {
            word: "C++".to_string(),
        };
        assert_eq!(err.to_string(), "word \"C++\" must contain only the letters A-Z");
    }
}
