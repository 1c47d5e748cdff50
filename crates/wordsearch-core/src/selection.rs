use crate::{Grid, Position};
use log::debug;
use serde::Serialize;

/// A word the player has just found, with the cells it was selected over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub cells: Vec<Position>,
}

/// Words found so far, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FoundWords {
    words: Vec<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Tracks a single press-drag-release selection gesture.
///
/// The run always starts at the anchor (the pressed cell) and follows one
/// of the eight straight-line directions. Moves that would bend the line,
/// or land on a cell already in the run, are ignored.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    size: usize,
    run: Vec<Position>,
}

impl SelectionTracker {
    /// Create an idle tracker for a `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            run: Vec::new(),
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Whether a gesture is in progress
    pub fn is_selecting(&self) -> bool {
        !self.run.is_empty()
    }

    /// Cells of the current run, anchor first
    pub fn run(&self) -> &[Position] {
        &self.run
    }

    pub fn anchor(&self) -> Option<Position> {
        self.run.first().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.run.contains(&pos)
    }

    /// Start a gesture at `pos`. Out-of-bounds presses leave the tracker idle.
    pub fn begin_selection(&mut self, pos: Position) {
        self.run.clear();
        if !self.in_bounds(pos) {
            debug!("Ignoring selection start outside the grid at {}", pos);
            return;
        }
        self.run.push(pos);
    }

    /// Move the gesture's end to `pos`, rebuilding the run from the anchor.
    ///
    /// Returns true if the run changed.
    pub fn extend_selection(&mut self, pos: Position) -> bool {
        let Some(anchor) = self.anchor() else {
            return false;
        };
        if !self.in_bounds(pos) {
            debug!("Ignoring selection move outside the grid at {}", pos);
            return false;
        }
        if self.run.contains(&pos) {
            return false;
        }

        let row_diff = pos.row as isize - anchor.row as isize;
        let col_diff = pos.col as isize - anchor.col as isize;
        if !(row_diff == 0 || col_diff == 0 || row_diff.abs() == col_diff.abs()) {
            return false;
        }

        let (row_step, col_step) = (row_diff.signum(), col_diff.signum());
        let len = row_diff.unsigned_abs().max(col_diff.unsigned_abs()) + 1;
        let run: Option<Vec<Position>> = (0..len)
            .map(|i| anchor.offset(row_step, col_step, i))
            .collect();

        match run {
            Some(run) => {
                self.run = run;
                true
            }
            None => false,
        }
    }

    /// Drop the current gesture without checking it
    pub fn cancel(&mut self) {
        self.run.clear();
    }

    /// Finish the gesture and check the run against `words`.
    ///
    /// The run is read forwards and backwards; an exact match that is not
    /// already in `found` is recorded and returned. The tracker is idle
    /// afterwards whatever the outcome.
    pub fn end_selection(
        &mut self,
        grid: &Grid,
        words: &[String],
        found: &mut FoundWords,
    ) -> Option<FoundWord> {
        let run = std::mem::take(&mut self.run);
        if run.len() < 2 {
            return None;
        }

        let forward = grid.read(&run)?;
        let reversed: String = forward.chars().rev().collect();

        let word = [forward, reversed]
            .into_iter()
            .find(|candidate| words.iter().any(|w| w == candidate))?;

        if !found.insert(&word) {
            debug!("{} was already found", word);
            return None;
        }

        Some(FoundWord { word, cells: run })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats_grid() -> Grid {
        Grid::from_rows(&["CATS", "XXXX", "XXXX", "XXXX"]).unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn assert_straight(run: &[Position]) {
        let steps: Vec<(isize, isize)> = run
            .windows(2)
            .map(|w| {
                (
                    w[1].row as isize - w[0].row as isize,
                    w[1].col as isize - w[0].col as isize,
                )
            })
            .collect();
        for step in &steps {
            assert_eq!(*step, steps[0]);
            assert!(step.0.abs() <= 1 && step.1.abs() <= 1);
        }
    }

    #[test]
    fn test_state_machine() {
        let mut tracker = SelectionTracker::new(4);
        assert!(!tracker.is_selecting());

        // Moves while idle do nothing
        assert!(!tracker.extend_selection(p(0, 2)));
        assert!(tracker.run().is_empty());

        tracker.begin_selection(p(0, 0));
        assert!(tracker.is_selecting());
        assert_eq!(tracker.run(), &[p(0, 0)]);

        let mut found = FoundWords::new();
        tracker.end_selection(&cats_grid(), &words(&["CAT"]), &mut found);
        assert!(!tracker.is_selecting());
    }

    #[test]
    fn test_extend_straight_lines() {
        let mut tracker = SelectionTracker::new(8);
        tracker.begin_selection(p(3, 3));

        for target in [p(3, 7), p(0, 3), p(6, 0), p(0, 0), p(7, 7), p(3, 0)] {
            assert!(tracker.extend_selection(target), "{} rejected", target);
            let run = tracker.run();
            assert_eq!(run[0], p(3, 3));
            assert_eq!(*run.last().unwrap(), target);
            assert_straight(run);

            let dr = (target.row as isize - 3).unsigned_abs();
            let dc = (target.col as isize - 3).unsigned_abs();
            assert_eq!(run.len(), dr.max(dc) + 1);
        }
    }

    #[test]
    fn test_extend_rejects_bent_lines() {
        let mut tracker = SelectionTracker::new(8);
        tracker.begin_selection(p(0, 0));
        assert!(tracker.extend_selection(p(0, 3)));

        assert!(!tracker.extend_selection(p(1, 2)));
        assert!(!tracker.extend_selection(p(2, 1)));
        assert_eq!(tracker.run().len(), 4);
    }

    #[test]
    fn test_extend_ignores_cells_in_run() {
        let mut tracker = SelectionTracker::new(8);
        tracker.begin_selection(p(0, 0));
        assert!(tracker.extend_selection(p(0, 4)));

        assert!(!tracker.extend_selection(p(0, 2)));
        assert!(!tracker.extend_selection(p(0, 0)));
        assert_eq!(tracker.run().len(), 5);
    }

    #[test]
    fn test_change_direction_rebuilds_from_anchor() {
        let mut tracker = SelectionTracker::new(8);
        tracker.begin_selection(p(2, 2));
        assert!(tracker.extend_selection(p(2, 6)));
        assert!(tracker.extend_selection(p(4, 4)));
        assert_eq!(tracker.run(), &[p(2, 2), p(3, 3), p(4, 4)]);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut tracker = SelectionTracker::new(4);
        tracker.begin_selection(p(4, 0));
        assert!(!tracker.is_selecting());

        tracker.begin_selection(p(0, 0));
        assert!(!tracker.extend_selection(p(0, 4)));
        assert!(!tracker.extend_selection(p(9, 9)));
        assert_eq!(tracker.run(), &[p(0, 0)]);
    }

    #[test]
    fn test_finds_word_forward() {
        let grid = cats_grid();
        let list = words(&["CAT"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(4);

        tracker.begin_selection(p(0, 0));
        tracker.extend_selection(p(0, 1));
        tracker.extend_selection(p(0, 2));
        let result = tracker.end_selection(&grid, &list, &mut found).unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(result.cells, vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert!(found.contains("CAT"));
    }

    #[test]
    fn test_finds_word_reversed_once() {
        let grid = cats_grid();
        let list = words(&["CAT"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(4);

        tracker.begin_selection(p(0, 2));
        tracker.extend_selection(p(0, 0));
        let result = tracker.end_selection(&grid, &list, &mut found).unwrap();
        assert_eq!(result.word, "CAT");
        assert_eq!(result.cells, vec![p(0, 2), p(0, 1), p(0, 0)]);

        // Selecting it again in the other direction does nothing
        tracker.begin_selection(p(0, 0));
        tracker.extend_selection(p(0, 2));
        assert!(tracker.end_selection(&grid, &list, &mut found).is_none());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_exact_length_only() {
        let grid = cats_grid();
        let list = words(&["CAT"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(4);

        tracker.begin_selection(p(0, 0));
        tracker.extend_selection(p(0, 3));
        assert!(tracker.end_selection(&grid, &list, &mut found).is_none());
        assert!(found.is_empty());
        assert!(!tracker.is_selecting());
    }

    #[test]
    fn test_single_cell_never_matches() {
        let grid = Grid::from_rows(&["AX", "XX"]).unwrap();
        let list = words(&["A"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(2);

        tracker.begin_selection(p(0, 0));
        assert!(tracker.end_selection(&grid, &list, &mut found).is_none());
        assert!(found.is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let grid = cats_grid();
        let list = words(&["cat"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(4);

        tracker.begin_selection(p(0, 0));
        tracker.extend_selection(p(0, 2));
        assert!(tracker.end_selection(&grid, &list, &mut found).is_none());
    }

    #[test]
    fn test_palindrome_reported_once() {
        let grid = Grid::from_rows(&["ABA", "XXX", "XXX"]).unwrap();
        let list = words(&["ABA"]);
        let mut found = FoundWords::new();
        let mut tracker = SelectionTracker::new(3);

        tracker.begin_selection(p(0, 0));
        tracker.extend_selection(p(0, 2));
        assert!(tracker.end_selection(&grid, &list, &mut found).is_some());
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["ABA"]);
    }
}
