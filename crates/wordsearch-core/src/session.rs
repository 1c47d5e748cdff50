use crate::{
    FoundWord, FoundWords, Generator, Grid, Placement, Position, PuzzleConfig, PuzzleError,
    SelectionTracker,
};
use log::info;
use std::collections::HashSet;

/// Receives puzzle events as they happen
pub trait SessionObserver {
    /// A word was found for the first time
    fn on_word_found(&mut self, _word: &str, _cells: &[Position]) {}

    /// The last remaining word was found
    fn on_puzzle_complete(&mut self) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// One puzzle being played: grid, word list, found words and the
/// selection gesture in progress.
pub struct PuzzleSession {
    config: PuzzleConfig,
    grid: Grid,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
    found: FoundWords,
    found_cells: HashSet<Position>,
    selection: SelectionTracker,
    observer: Box<dyn SessionObserver>,
}

impl PuzzleSession {
    /// Validate `config` and generate a fresh puzzle
    pub fn new(config: PuzzleConfig) -> Result<Self, PuzzleError> {
        let mut generator = Generator::with_config(config.generator.clone());
        Self::with_generator(config, &mut generator)
    }

    /// Validate `config` and generate a puzzle using `generator`.
    ///
    /// The generator's configuration is replaced by `config.generator`.
    pub fn with_generator(
        config: PuzzleConfig,
        generator: &mut Generator,
    ) -> Result<Self, PuzzleError> {
        let config = config.validated()?;
        generator.set_config(config.generator.clone());
        let puzzle = generator.generate(&config.words, config.size);

        Ok(Self {
            selection: SelectionTracker::new(config.size),
            grid: puzzle.grid,
            placements: puzzle.placements,
            unplaced: puzzle.unplaced,
            config,
            found: FoundWords::new(),
            found_cells: HashSet::new(),
            observer: Box::new(NoopObserver),
        })
    }

    /// Play on a hand-made grid. `words` are taken as given.
    pub fn from_grid(grid: Grid, words: Vec<String>) -> Self {
        let size = grid.size();
        Self {
            config: PuzzleConfig::new(size, words),
            selection: SelectionTracker::new(size),
            grid,
            placements: Vec::new(),
            unplaced: Vec::new(),
            found: FoundWords::new(),
            found_cells: HashSet::new(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach an observer, replacing the previous one
    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = observer;
    }

    /// Builder-style [`set_observer`](Self::set_observer)
    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Generate a new puzzle from the same configuration.
    /// Found words and any active selection are discarded.
    pub fn regenerate(&mut self, generator: &mut Generator) {
        generator.set_config(self.config.generator.clone());
        let puzzle = generator.generate(&self.config.words, self.config.size);
        self.grid = puzzle.grid;
        self.placements = puzzle.placements;
        self.unplaced = puzzle.unplaced;
        self.found = FoundWords::new();
        self.found_cells.clear();
        self.selection.cancel();
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn word_list(&self) -> &[String] {
        &self.config.words
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words the generator had to leave out
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Whether a cell belongs to a found word
    pub fn is_found_cell(&self, pos: Position) -> bool {
        self.found_cells.contains(&pos)
    }

    /// The active selection run, empty when idle
    pub fn selection(&self) -> &[Position] {
        self.selection.run()
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    /// All words found
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.config.words.len()
    }

    /// Number of words still to find
    pub fn remaining(&self) -> usize {
        self.config.words.len().saturating_sub(self.found.len())
    }

    pub fn begin_selection(&mut self, pos: Position) {
        self.selection.begin_selection(pos);
    }

    pub fn extend_selection(&mut self, pos: Position) -> bool {
        self.selection.extend_selection(pos)
    }

    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    /// Finish the gesture, notifying the observer if a new word was found
    pub fn end_selection(&mut self) -> Option<FoundWord> {
        let found = self
            .selection
            .end_selection(&self.grid, &self.config.words, &mut self.found)?;

        info!(
            "Found {} ({}/{})",
            found.word,
            self.found.len(),
            self.config.words.len()
        );
        self.found_cells.extend(found.cells.iter().copied());
        self.observer.on_word_found(&found.word, &found.cells);

        if self.is_complete() {
            info!("Puzzle complete");
            self.observer.on_puzzle_complete();
        }

        Some(found)
    }

    pub fn on_gesture_start(&mut self, row: usize, col: usize) {
        self.begin_selection(Position::new(row, col));
    }

    pub fn on_gesture_move(&mut self, row: usize, col: usize) -> bool {
        self.extend_selection(Position::new(row, col))
    }

    pub fn on_gesture_end(&mut self) -> Option<FoundWord> {
        self.end_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Found(String, Vec<Position>),
        Complete,
    }

    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl SessionObserver for Recorder {
        fn on_word_found(&mut self, word: &str, cells: &[Position]) {
            self.0
                .borrow_mut()
                .push(Event::Found(word.to_string(), cells.to_vec()));
        }

        fn on_puzzle_complete(&mut self) {
            self.0.borrow_mut().push(Event::Complete);
        }
    }

    fn recording_session(rows: &[&str], words: &[&str]) -> (PuzzleSession, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let grid = Grid::from_rows(rows).unwrap();
        let words = words.iter().map(|w| w.to_string()).collect();
        let session = PuzzleSession::from_grid(grid, words)
            .with_observer(Box::new(Recorder(Rc::clone(&events))));
        (session, events)
    }

    const CATS: [&str; 4] = ["CATS", "XXXX", "XXXX", "XXXX"];

    #[test]
    fn test_cat_scenario() {
        let (mut session, events) = recording_session(&CATS, &["CAT"]);
        assert!(!session.is_complete());

        session.on_gesture_start(0, 0);
        session.on_gesture_move(0, 1);
        session.on_gesture_move(0, 2);
        let found = session.on_gesture_end().unwrap();

        let cells = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(found.word, "CAT");
        assert_eq!(found.cells, cells);
        assert!(session.is_complete());
        assert!(session.is_found("CAT"));
        assert!(session.is_found_cell(Position::new(0, 1)));
        assert!(!session.is_found_cell(Position::new(0, 3)));
        assert_eq!(
            *events.borrow(),
            vec![Event::Found("CAT".into(), cells), Event::Complete]
        );
    }

    #[test]
    fn test_cats_scenario_no_match() {
        let (mut session, events) = recording_session(&CATS, &["CAT"]);

        session.on_gesture_start(0, 0);
        session.on_gesture_move(0, 3);
        assert!(session.on_gesture_end().is_none());
        assert!(session.found_words().is_empty());
        assert!(!session.is_complete());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_found_word_not_reemitted() {
        let (mut session, events) = recording_session(&CATS, &["CAT", "XXXX"]);

        for _ in 0..2 {
            session.on_gesture_start(0, 2);
            session.on_gesture_move(0, 0);
            session.on_gesture_end();
        }

        assert_eq!(session.found_words().len(), 1);
        assert_eq!(events.borrow().len(), 1);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_complete_fires_once_on_last_word() {
        let (mut session, events) = recording_session(&CATS, &["CAT", "XXXX"]);

        session.on_gesture_start(1, 0);
        session.on_gesture_move(1, 3);
        session.on_gesture_end();
        assert!(!events.borrow().contains(&Event::Complete));

        session.on_gesture_start(0, 0);
        session.on_gesture_move(0, 2);
        session.on_gesture_end();
        assert_eq!(events.borrow().last(), Some(&Event::Complete));

        // A third run over an already-found word changes nothing
        session.on_gesture_start(2, 0);
        session.on_gesture_move(2, 3);
        session.on_gesture_end();
        let completions = events
            .borrow()
            .iter()
            .filter(|e| **e == Event::Complete)
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_invalid_coordinates_ignored() {
        let (mut session, _) = recording_session(&CATS, &["CAT"]);

        session.on_gesture_start(7, 7);
        assert!(!session.is_selecting());
        assert!(session.on_gesture_end().is_none());

        session.on_gesture_start(0, 0);
        assert!(!session.on_gesture_move(0, 10));
        assert_eq!(session.selection(), &[Position::new(0, 0)]);
    }

    #[test]
    fn test_generated_session_is_solvable() {
        let mut generator = Generator::with_seed(11);
        let mut session =
            PuzzleSession::with_generator(PuzzleConfig::default(), &mut generator).unwrap();
        assert!(session.grid().is_filled());

        let placements = session.placements().to_vec();
        for placement in &placements {
            let cells = placement.cells();
            session.begin_selection(cells[0]);
            session.extend_selection(*cells.last().unwrap());
            let found = session.end_selection().unwrap();
            assert_eq!(found.word, placement.word);
        }

        assert_eq!(session.found_words().len(), placements.len());
        assert_eq!(session.is_complete(), session.unplaced().is_empty());
    }

    #[test]
    fn test_regenerate_resets_progress() {
        let mut generator = Generator::with_seed(3);
        let config = PuzzleConfig::new(10, vec!["RUST".into(), "CARGO".into()]);
        let mut session = PuzzleSession::with_generator(config, &mut generator).unwrap();

        let placement = session.placements()[0].clone();
        let cells = placement.cells();
        session.begin_selection(cells[0]);
        session.extend_selection(*cells.last().unwrap());
        assert!(session.end_selection().is_some());
        session.begin_selection(Position::new(0, 0));

        session.regenerate(&mut generator);
        assert!(session.found_words().is_empty());
        assert!(!session.is_selecting());
        assert!(!session.is_found_cell(cells[0]));
        assert_eq!(session.word_list(), &["RUST".to_string(), "CARGO".to_string()]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = PuzzleSession::new(PuzzleConfig::new(0, vec!["A".into()]));
        assert!(matches!(result, Err(PuzzleError::InvalidSize { size: 0 })));
    }
}
