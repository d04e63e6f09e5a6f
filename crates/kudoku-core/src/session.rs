use crate::{has_conflict, Clock, ClueMask, Grid, Position, Puzzle, PuzzleError, GRID_SIZE};

/// What a digit key does: commit a value, or toggle a pencil note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Notes,
}

/// Lifecycle of a puzzle session. `Active` is re-entered on every load,
/// including from `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No puzzle loaded yet.
    #[default]
    Loading,
    Active,
    /// Every non-clue cell is filled without conflicts.
    Finished,
}

/// Pencil notes for one cell: a set of candidate digits, stored as a
/// bitmask (bit `n` set means digit `n` is noted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteSet(u16);

impl NoteSet {
    pub const EMPTY: NoteSet = NoteSet(0);

    /// Add `digit` if absent, remove it if present.
    pub fn toggle(&mut self, digit: u8) {
        self.0 ^= 1 << digit;
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0 & (1 << digit) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Noted digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=9).filter(|&d| self.contains(d))
    }
}

/// The puzzle session state machine.
///
/// Owns the mutable grid, per-cell notes and conflict flags, the selection
/// cursor, the input mode, and the elapsed-time clock. Clue cells never
/// change for the life of a loaded puzzle; `remaining` counts the non-clue
/// cells that are not yet correctly filled and hits zero exactly when the
/// session finishes.
#[derive(Debug, Clone, Default)]
pub struct Session {
    initial: Grid,
    current: Grid,
    clues: ClueMask,
    notes: [[NoteSet; GRID_SIZE]; GRID_SIZE],
    conflicts: [[bool; GRID_SIZE]; GRID_SIZE],
    selected: Position,
    mode: Mode,
    remaining: usize,
    state: SessionState,
    clock: Clock,
}

impl Session {
    /// A fresh session with no puzzle loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a serialized puzzle, replacing any previous one.
    ///
    /// Parses before committing, so a malformed string leaves the previous
    /// session state fully intact. On success: notes, conflict flags, and
    /// the selection are reset, the remaining-count is the puzzle's blank
    /// count, the clock restarts from zero, and the session is `Active`
    /// (or immediately `Finished` for a puzzle with no blanks).
    pub fn load(&mut self, puzzle_str: &str) -> Result<(), PuzzleError> {
        let puzzle = Puzzle::parse(puzzle_str)?;

        self.initial = *puzzle.cells();
        self.current = *puzzle.cells();
        self.clues = *puzzle.clue_mask();
        self.notes = [[NoteSet::EMPTY; GRID_SIZE]; GRID_SIZE];
        self.conflicts = [[false; GRID_SIZE]; GRID_SIZE];
        self.selected = Position::new(0, 0);
        self.remaining = puzzle.blanks();
        self.clock.reset();
        self.clock.start();
        self.state = SessionState::Active;
        if self.remaining == 0 {
            self.finish();
        }
        Ok(())
    }

    /// Move the cursor to `(row, col)`, clamped into the grid.
    pub fn select(&mut self, row: usize, col: usize) {
        self.selected = Position::new(row.min(GRID_SIZE - 1), col.min(GRID_SIZE - 1));
    }

    /// Move the cursor relatively; clamps at the edges instead of wrapping.
    pub fn select_delta(&mut self, d_row: i32, d_col: i32) {
        let row = (self.selected.row as i32 + d_row).clamp(0, GRID_SIZE as i32 - 1);
        let col = (self.selected.col as i32 + d_col).clamp(0, GRID_SIZE as i32 - 1);
        self.selected = Position::new(row as usize, col as usize);
    }

    /// Flip between `Normal` and `Notes` input.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Notes,
            Mode::Notes => Mode::Normal,
        };
    }

    /// Handle a digit key (`1..=9`) at the selected cell.
    ///
    /// No-op on clue cells, outside `Active`, or for out-of-range digits.
    /// In `Notes` mode the digit is toggled in the cell's note set and any
    /// committed value is cleared (returning its remaining-count
    /// contribution if it had been correct). In `Normal` mode re-entering
    /// the current value is a no-op; otherwise the value is written, the
    /// cell revalidated, and the remaining-count stepped per the
    /// correct/incorrect transition. Reaching zero finishes the session
    /// and freezes the clock.
    pub fn enter_digit(&mut self, value: u8) {
        if self.state != SessionState::Active || !(1..=9).contains(&value) {
            return;
        }
        let Position { row, col } = self.selected;
        if self.clues[row][col] {
            return;
        }

        match self.mode {
            Mode::Notes => {
                let was_correct = self.is_correct(row, col);
                self.notes[row][col].toggle(value);
                if self.current[row][col] != 0 {
                    self.current[row][col] = 0;
                    self.conflicts[row][col] = false;
                    if was_correct {
                        self.remaining += 1;
                    }
                }
            }
            Mode::Normal => {
                if self.current[row][col] == value {
                    return;
                }
                let was_correct = self.is_correct(row, col);
                self.current[row][col] = value;
                self.notes[row][col].clear();
                let conflicting = has_conflict(&self.current, row, col, value);
                self.conflicts[row][col] = conflicting;
                if !conflicting && !was_correct {
                    self.remaining -= 1;
                    if self.remaining == 0 {
                        self.finish();
                    }
                } else if conflicting && was_correct {
                    self.remaining += 1;
                }
            }
        }
    }

    /// Clear the selected cell: notes first if it holds no committed value,
    /// otherwise the value (restoring the remaining-count contribution of a
    /// correct cell and dropping its conflict flag). No-op on clue cells.
    pub fn clear_selected(&mut self) {
        if self.state != SessionState::Active {
            return;
        }
        let Position { row, col } = self.selected;
        if self.clues[row][col] {
            return;
        }

        if self.current[row][col] == 0 {
            self.notes[row][col].clear();
        } else {
            let was_correct = self.is_correct(row, col);
            self.current[row][col] = 0;
            self.conflicts[row][col] = false;
            if was_correct {
                self.remaining += 1;
            }
        }
    }

    /// Wipe all user input, restoring the grid to its clues. Notes and
    /// conflict flags are cleared, the remaining-count and clock reset, and
    /// the session returns to `Active`. The selection is preserved.
    pub fn reset_to_clues(&mut self) {
        if self.state == SessionState::Loading {
            return;
        }
        self.current = self.initial;
        self.notes = [[NoteSet::EMPTY; GRID_SIZE]; GRID_SIZE];
        self.conflicts = [[false; GRID_SIZE]; GRID_SIZE];
        self.remaining = self
            .initial
            .iter()
            .flatten()
            .filter(|&&cell| cell == 0)
            .count();
        self.clock.reset();
        self.clock.start();
        self.state = if self.remaining == 0 {
            self.clock.stop();
            SessionState::Finished
        } else {
            SessionState::Active
        };
    }

    /// Advance the clock by one second (delivered by the UI driver).
    pub fn tick(&mut self) {
        self.clock.tick();
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        self.clock.stop();
    }

    /// A non-clue cell counts toward completion once it holds a value with
    /// no recorded conflict.
    fn is_correct(&self, row: usize, col: usize) -> bool {
        self.current[row][col] != 0 && !self.conflicts[row][col]
    }

    // Read-only queries for the consumer.

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn clue_mask(&self) -> &ClueMask {
        &self.clues
    }

    pub fn value_at(&self, pos: Position) -> u8 {
        self.current[pos.row][pos.col]
    }

    pub fn is_clue(&self, pos: Position) -> bool {
        self.clues[pos.row][pos.col]
    }

    pub fn notes_at(&self, pos: Position) -> NoteSet {
        self.notes[pos.row][pos.col]
    }

    pub fn is_conflicting(&self, pos: Position) -> bool {
        self.conflicts[pos.row][pos.col]
    }

    pub fn selection(&self) -> Position {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.seconds()
    }

    /// Elapsed time as HH:MM:SS; frozen at completion once finished.
    pub fn elapsed_string(&self) -> String {
        self.clock.formatted()
    }

    /// Whether `pos` shares the selected cell's row, column, or box.
    pub fn is_peer(&self, pos: Position) -> bool {
        pos.is_peer_of(self.selected)
    }

    /// Whether `pos` holds the same committed value as the selected cell
    /// (both non-empty, and `pos` is not the selection itself).
    pub fn is_same_value(&self, pos: Position) -> bool {
        let selected_value = self.value_at(self.selected);
        pos != self.selected && selected_value != 0 && self.value_at(pos) == selected_value
    }
}
