use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A cell position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` times by `(row_step, col_step)`.
    /// Returns `None` if the result would leave the non-negative quadrant.
    pub fn offset(self, row_step: isize, col_step: isize, distance: usize) -> Option<Position> {
        let distance = isize::try_from(distance).ok()?;
        let row = self.row.checked_add_signed(row_step.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(col_step.checked_mul(distance)?)?;
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// Square letter grid.
///
/// Cells start empty during generation and hold a single uppercase ASCII
/// letter once a puzzle is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from row strings, e.g. `["CATS", "XXXX", ...]`.
    ///
    /// `.` marks an empty cell. Returns `None` unless the rows form a square
    /// of uppercase letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Grid::new(size);

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().as_bytes();
            if line.len() != size {
                return None;
            }
            for (col, &byte) in line.iter().enumerate() {
                match byte {
                    b'A'..=b'Z' => grid.cells[row * size + col] = Some(byte),
                    b'.' => {}
                    _ => return None,
                }
            }
        }

        Some(grid)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Letter at a position, `None` for empty or out-of-bounds cells
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos)
            .and_then(|idx| self.cells[idx])
            .map(char::from)
    }

    /// Write a letter. Out-of-bounds positions and non A-Z letters are ignored.
    pub fn set(&mut self, pos: Position, letter: char) -> bool {
        match (self.index(pos), letter) {
            (Some(idx), 'A'..='Z') => {
                self.cells[idx] = Some(letter as u8);
                true
            }
            _ => false,
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once every cell holds a letter
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fill every empty cell using `pick` to choose a letter.
    /// Cells where `pick` returns anything but A-Z stay empty.
    pub fn fill_empty_with(&mut self, mut pick: impl FnMut() -> char) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            let letter = pick();
            if letter.is_ascii_uppercase() {
                *cell = Some(letter as u8);
            }
        }
    }

    /// Read the letters along a run of positions.
    /// `None` if any position is empty or outside the grid.
    pub fn read(&self, run: &[Position]) -> Option<String> {
        run.iter().map(|&pos| self.get(pos)).collect()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Rows as strings, with `.` for empty cells
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size.max(1)).map(|row| {
            row.iter()
                .map(|cell| cell.map(char::from).unwrap_or('.'))
                .collect()
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["CATS", "XXXX", "X.XX", "XXXX"]).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(Position::new(0, 2)), Some('T'));
        assert_eq!(grid.get(Position::new(2, 1)), None);
        assert!(grid.is_empty_at(Position::new(2, 1)));
        assert_eq!(grid.empty_count(), 1);
        assert!(!grid.is_filled());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Grid::from_rows(&["CAT", "XX"]).is_none());
        assert!(Grid::from_rows(&["ca", "XX"]).is_none());
        assert!(Grid::from_rows(&["C1", "XX"]).is_none());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3);
        assert!(!grid.contains(Position::new(3, 0)));
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert!(!grid.set(Position::new(5, 5), 'A'));
        assert!(!grid.set(Position::new(0, 0), 'a'));
        assert!(!grid.is_empty_at(Position::new(9, 9)));
    }

    #[test]
    fn test_offset() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.offset(1, 1, 2), Some(Position::new(4, 4)));
        assert_eq!(pos.offset(-1, 0, 2), Some(Position::new(0, 2)));
        assert_eq!(pos.offset(-1, -1, 3), None);
    }

    #[test]
    fn test_read_and_fill() {
        let mut grid = Grid::from_rows(&["AB.", "...", "..."]).unwrap();
        let run = [Position::new(0, 0), Position::new(0, 1)];
        assert_eq!(grid.read(&run).as_deref(), Some("AB"));
        assert_eq!(grid.read(&[Position::new(0, 2)]), None);

        grid.fill_empty_with(|| 'Z');
        assert!(grid.is_filled());
        assert_eq!(grid.get(Position::new(2, 2)), Some('Z'));
        assert_eq!(grid.get(Position::new(0, 0)), Some('A'));
    }

    #[test]
    fn test_fill_skips_non_letters() {
        let mut grid = Grid::from_rows(&["A.", ".."]).unwrap();
        let mut picks = ['É', 'b', 'Q'].into_iter();
        grid.fill_empty_with(|| picks.next().unwrap_or('!'));

        assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["A.", ".Q"]);
        assert_eq!(grid.empty_count(), 2);
    }

    #[test]
    fn test_display_and_serialize() {
        let grid = Grid::from_rows(&["AB", "C."]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC .\n");
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"["AB","C."]"#);
    }
}
