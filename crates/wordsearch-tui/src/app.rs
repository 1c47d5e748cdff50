use crate::animations::WinScreen;
use crate::config::RunConfig;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wordsearch_core::{Generator, Position, PuzzleError, PuzzleSession, SessionObserver};

/// Ticks between finding the last word and showing the win screen (~500ms)
pub const COMPLETION_DELAY_TICKS: u32 = 5;

/// Ticks a status message stays visible (~3 seconds)
const MESSAGE_TICKS: u32 = 30;

/// Result of handling an input event
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal play
    Playing,
    /// Completion celebration
    Win,
}

/// Puzzle events queued for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    WordFound(String),
    Complete,
}

/// Forwards session callbacks into a queue the app drains after each input
struct EventQueue(Rc<RefCell<Vec<SessionEvent>>>);

impl SessionObserver for EventQueue {
    fn on_word_found(&mut self, word: &str, _cells: &[Position]) {
        self.0
            .borrow_mut()
            .push(SessionEvent::WordFound(word.to_string()));
    }

    fn on_puzzle_complete(&mut self) {
        self.0.borrow_mut().push(SessionEvent::Complete);
    }
}

/// Where the grid sits on screen.
///
/// The grid is framed by a one-character border and every cell is three
/// columns wide: ` X `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub size: usize,
}

impl GridLayout {
    pub const CELL_WIDTH: u16 = 3;
    /// Width of the word list panel to the right of the grid
    pub const PANEL_WIDTH: u16 = 26;

    /// Center the grid and panel in a terminal of the given size
    pub fn compute(term_width: u16, term_height: u16, size: usize) -> Self {
        let mut layout = Self { x: 1, y: 1, size };
        let total_width = layout.width() + 3 + Self::PANEL_WIDTH;
        if term_width > total_width {
            layout.x = (term_width - total_width) / 2;
        }
        if term_height > layout.height() + 8 {
            layout.y = 2;
        }
        layout
    }

    pub fn width(&self) -> u16 {
        self.size as u16 * Self::CELL_WIDTH + 2
    }

    pub fn height(&self) -> u16 {
        self.size as u16 + 2
    }

    /// Screen column and row where a cell's three characters start
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.x + 1 + pos.col as u16 * Self::CELL_WIDTH,
            self.y + 1 + pos.row as u16,
        )
    }

    /// Cell under a screen column and row, if any
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let col = column.checked_sub(self.x + 1)? / Self::CELL_WIDTH;
        let row = row.checked_sub(self.y + 1)?;
        let pos = Position::new(row as usize, col as usize);
        (pos.row < self.size && pos.col < self.size).then_some(pos)
    }
}

/// The main application state
pub struct App {
    /// Puzzle being played
    pub session: PuzzleSession,
    generator: Generator,
    /// Keyboard cursor
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    message_timer: u32,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Ticks left before the win screen, once every word is found
    completion_timer: Option<u32>,
    /// Win screen animation
    pub win_screen: WinScreen,
    /// Terminal size as (columns, rows)
    pub term_size: (u16, u16),
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl App {
    /// Build the app and its first puzzle
    pub fn new(config: RunConfig) -> Result<Self, PuzzleError> {
        let mut generator = match config.seed {
            Some(seed) => Generator::with_seed(seed),
            None => Generator::new(),
        };
        let session = PuzzleSession::with_generator(config.puzzle, &mut generator)?;
        Ok(Self::with_session(session, generator, config.theme))
    }

    /// Wrap an existing session
    pub fn with_session(session: PuzzleSession, generator: Generator, theme: Theme) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let session = session.with_observer(Box::new(EventQueue(Rc::clone(&events))));
        let center = session.size() / 2;

        let mut app = Self {
            session,
            generator,
            cursor: Position::new(center, center),
            theme,
            message: None,
            message_timer: 0,
            screen_state: ScreenState::Playing,
            completion_timer: None,
            win_screen: WinScreen::new(),
            term_size: (80, 24),
            events,
        };
        app.report_unplaced();
        app
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            ScreenState::Win => Duration::from_millis(33), // 30 FPS for animations
            ScreenState::Playing => Duration::from_millis(100),
        }
    }

    /// Current grid layout for the terminal size
    pub fn layout(&self) -> GridLayout {
        GridLayout::compute(self.term_size.0, self.term_size.1, self.session.size())
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.term_size = (width, height);
        self.win_screen.resize(width, height);
    }

    /// Update animations and timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        match self.screen_state {
            ScreenState::Playing => {
                if let Some(ticks) = self.completion_timer {
                    if ticks <= 1 {
                        self.completion_timer = None;
                        self.screen_state = ScreenState::Win;
                        self.win_screen.reset();
                    } else {
                        self.completion_timer = Some(ticks - 1);
                    }
                }
            }
            ScreenState::Win => self.win_screen.update(self.session.word_list()),
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = MESSAGE_TICKS;
    }

    /// Start a fresh puzzle with the same configuration
    pub fn new_puzzle(&mut self) {
        self.session.regenerate(&mut self.generator);
        self.events.borrow_mut().clear();
        self.completion_timer = None;
        self.screen_state = ScreenState::Playing;
        let center = self.session.size() / 2;
        self.cursor = Position::new(center, center);
        self.show_message("New puzzle");
        self.report_unplaced();
    }

    fn report_unplaced(&mut self) {
        let unplaced = self.session.unplaced();
        if !unplaced.is_empty() {
            let msg = format!("Could not fit: {}", unplaced.join(", "));
            self.show_message(&msg);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Win => self.handle_win_key(key),
            ScreenState::Playing => self.handle_game_key(key),
        }
    }

    fn handle_win_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            // Back to the finished grid
            KeyCode::Esc => self.screen_state = ScreenState::Playing,
            _ => self.new_puzzle(),
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Anchor a selection, or finish the one in progress
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.session.is_selecting() {
                    self.finish_selection();
                } else {
                    self.session.begin_selection(self.cursor);
                }
            }

            KeyCode::Esc => {
                if self.session.is_selecting() {
                    self.session.cancel_selection();
                    self.show_message("Selection cleared");
                }
            }

            KeyCode::Char('n') => self.new_puzzle(),

            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                let msg = format!("Theme: {}", self.theme.name);
                self.show_message(&msg);
            }

            _ => {}
        }

        AppAction::Continue
    }

    /// Handle a mouse event, mapping screen coordinates onto grid cells
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.screen_state != ScreenState::Playing {
            return;
        }

        let cell = self.layout().cell_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = cell {
                    self.cursor = pos;
                    self.session.begin_selection(pos);
                } else {
                    debug!("Press outside grid at ({}, {})", event.column, event.row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pos) = cell {
                    if self.session.extend_selection(pos) {
                        self.cursor = pos;
                    } else if self.session.selection().contains(&pos) {
                        self.cursor = pos;
                        self.shrink_selection_to_cursor();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.finish_selection(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let max = self.session.size().saturating_sub(1) as isize;
        let row = (self.cursor.row as isize + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.col as isize + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);

        if self.session.is_selecting() && !self.session.extend_selection(self.cursor) {
            self.shrink_selection_to_cursor();
        }
    }

    /// Cut the run back to the cursor when it sits on an earlier run cell
    fn shrink_selection_to_cursor(&mut self) {
        let run = self.session.selection();
        let Some(&anchor) = run.first() else {
            return;
        };
        if !run.contains(&self.cursor) || run.last() == Some(&self.cursor) {
            return;
        }

        self.session.begin_selection(anchor);
        if self.cursor != anchor {
            self.session.extend_selection(self.cursor);
        }
    }

    fn finish_selection(&mut self) {
        if !self.session.is_selecting() {
            return;
        }
        let len = self.session.selection().len();
        if self.session.end_selection().is_none() && len > 1 {
            self.show_message("No match");
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        let events: Vec<SessionEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                SessionEvent::WordFound(word) => {
                    let msg = format!(
                        "Found {}! {} to go",
                        word,
                        self.session.remaining()
                    );
                    self.show_message(&msg);
                }
                SessionEvent::Complete => {
                    self.show_message("All words found!");
                    self.completion_timer = Some(COMPLETION_DELAY_TICKS);
                }
            }
        }
    }

    /// Whether the win screen is pending
    #[cfg(test)]
    pub fn completion_pending(&self) -> bool {
        self.completion_timer.is_some()
    }
}
