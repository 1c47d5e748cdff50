//! Word search engine
//!
//! Generates square letter grids with hidden words and tracks the
//! straight-line selections a player drags across them. Rendering is left
//! to the caller: a view reads the [`Grid`] and found words from a
//! [`PuzzleSession`] and forwards pointer gestures as grid coordinates.
//!
//! ```
//! use wordsearch_core::{Generator, PuzzleConfig, PuzzleSession};
//!
//! let mut generator = Generator::with_seed(7);
//! let config = PuzzleConfig::new(10, vec!["RUST".into(), "CARGO".into()]);
//! let mut session = PuzzleSession::with_generator(config, &mut generator).unwrap();
//!
//! let cells = session.placements()[0].cells();
//! session.begin_selection(cells[0]);
//! session.extend_selection(*cells.last().unwrap());
//! assert!(session.end_selection().is_some());
//! ```

mod config;
mod direction;
mod error;
mod generator;
mod grid;
mod selection;
mod session;

pub use config::{PuzzleConfig, DEFAULT_SIZE, DEFAULT_WORDS};
pub use direction::Direction;
pub use error::{PuzzleError, MAX_SIZE, MIN_SIZE};
pub use generator::{
    can_place, place_word, Generator, GeneratorConfig, Placement, Puzzle, UnplacedPolicy,
};
pub use grid::{Grid, Position};
pub use selection::{FoundWord, FoundWords, SelectionTracker};
pub use session::{NoopObserver, PuzzleSession, SessionObserver};
