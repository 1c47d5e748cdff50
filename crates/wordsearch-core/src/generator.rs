use crate::{Direction, Grid, Position};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// What to do when a word cannot be placed within the attempt cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedPolicy {
    /// Leave the word out of the grid
    Omit,
    /// Start again from an empty grid, up to `max_rounds` times
    Regenerate { max_rounds: usize },
}

impl Default for UnplacedPolicy {
    fn default() -> Self {
        Self::Omit
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Placement attempts per word before giving up on it
    pub max_attempts: usize,
    /// Policy for words that exhaust their attempts
    pub unplaced_policy: UnplacedPolicy,
    /// Directions words may run in
    pub directions: Vec<Direction>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            unplaced_policy: UnplacedPolicy::Omit,
            directions: Direction::ALL.to_vec(),
        }
    }
}

/// A word written into the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, in letter order
    pub fn cells(&self) -> Vec<Position> {
        word_cells(self.start, self.direction, self.word.chars().count())
    }
}

/// Result of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// Words that could not be placed
    pub unplaced: Vec<String>,
}

/// Cells a word of `len` letters covers from `start`
fn word_cells(start: Position, direction: Direction, len: usize) -> Vec<Position> {
    let (row_step, col_step) = direction.step();
    (0..len)
        .map(|i| Position::new(start.row + i * row_step, start.col + i * col_step))
        .collect()
}

/// Check whether `word` fits at `start` without clobbering different letters.
/// Only words made of A-Z can be placed.
pub fn can_place(grid: &Grid, word: &str, start: Position, direction: Direction) -> bool {
    let cells = word_cells(start, direction, word.chars().count());
    !cells.is_empty()
        && cells.iter().zip(word.chars()).all(|(&pos, letter)| {
            letter.is_ascii_uppercase()
                && grid.contains(pos)
                && (grid.is_empty_at(pos) || grid.get(pos) == Some(letter))
        })
}

/// Write `word` at `start` if it fits. Leaves the grid untouched otherwise.
pub fn place_word(grid: &mut Grid, word: &str, start: Position, direction: Direction) -> bool {
    if !can_place(grid, word, start, direction) {
        return false;
    }
    for (pos, letter) in word_cells(start, direction, word.chars().count())
        .into_iter()
        .zip(word.chars())
    {
        grid.set(pos, letter);
    }
    true
}

/// Word search puzzle generator
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Replace the configuration, keeping the random state
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a `size` x `size` puzzle hiding `words`
    pub fn generate(&mut self, words: &[String], size: usize) -> Puzzle {
        let rounds = match self.config.unplaced_policy {
            UnplacedPolicy::Omit => 1,
            UnplacedPolicy::Regenerate { max_rounds } => max_rounds.max(1),
        };

        let mut best: Option<(Grid, Vec<Placement>, Vec<String>)> = None;
        for round in 1..=rounds {
            let (grid, placements, unplaced) = self.place_words(words, size);
            let done = unplaced.is_empty();
            if best
                .as_ref()
                .map_or(true, |(_, _, prev)| unplaced.len() < prev.len())
            {
                best = Some((grid, placements, unplaced));
            }
            if done {
                break;
            }
            if round < rounds {
                debug!("Round {} left words unplaced, regenerating", round);
            }
        }

        let (mut grid, placements, unplaced) =
            best.unwrap_or_else(|| (Grid::new(size), Vec::new(), words.to_vec()));

        for word in &unplaced {
            warn!("Could not place {:?} in a {}x{} grid", word, size, size);
        }

        self.fill_random_letters(&mut grid);
        info!(
            "Generated {}x{} puzzle with {}/{} words placed",
            size,
            size,
            placements.len(),
            words.len()
        );

        Puzzle {
            grid,
            placements,
            unplaced,
        }
    }

    /// Place every word into a fresh empty grid
    fn place_words(
        &mut self,
        words: &[String],
        size: usize,
    ) -> (Grid, Vec<Placement>, Vec<String>) {
        let mut grid = Grid::new(size);
        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in words {
            match self.try_place(&mut grid, word) {
                Some(placement) => placements.push(placement),
                None => unplaced.push(word.clone()),
            }
        }

        (grid, placements, unplaced)
    }

    /// Try random positions until the word fits or the attempt cap runs out
    fn try_place(&mut self, grid: &mut Grid, word: &str) -> Option<Placement> {
        if self.config.directions.is_empty() {
            return None;
        }

        let len = word.chars().count();
        for attempt in 1..=self.config.max_attempts {
            let idx = self.rng.next_usize(self.config.directions.len());
            let direction = self.config.directions[idx];

            // Word too long for this direction: burn the attempt
            let Some((rows, cols)) = direction.start_range(len, grid.size()) else {
                continue;
            };

            let start = Position::new(self.rng.next_usize(rows), self.rng.next_usize(cols));
            if place_word(grid, word, start, direction) {
                debug!(
                    "Placed {:?} at {} going {} after {} attempt(s)",
                    word, start, direction, attempt
                );
                return Some(Placement {
                    word: word.to_string(),
                    start,
                    direction,
                });
            }
        }

        None
    }

    /// Fill the remaining empty cells with uniformly random letters
    fn fill_random_letters(&mut self, grid: &mut Grid) {
        let rng = &mut self.rng;
        grid.fill_empty_with(|| char::from(b'A' + rng.next_usize(26) as u8));
    }
}

/// Small seedable PRNG so puzzles can be reproduced from a seed
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    /// Uniform-enough value in `0..bound`. `bound` must be non-zero.
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
