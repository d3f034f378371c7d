//! Core game state: grid, piece catalog, collision, rotation, session.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Gravity drop interval: one row per second unless overridden.
pub const DROP_INTERVAL_MS: u64 = 1000;

/// The seven catalog shapes, labelled by the classic letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [Self; 7] = [Self::T, Self::O, Self::L, Self::J, Self::I, Self::S, Self::Z];

    /// Colour tag written into the grid (1..=7). Zero means empty.
    pub fn tag(&self) -> u8 {
        match self {
            Self::T => 1,
            Self::O => 2,
            Self::L => 3,
            Self::J => 4,
            Self::I => 5,
            Self::S => 6,
            Self::Z => 7,
        }
    }

    /// Fresh shape matrix. Every call returns an independently owned copy:
    /// rotation mutates the matrix in place, so pieces must never share cells.
    pub fn matrix(&self) -> Vec<Vec<u8>> {
        match self {
            Self::T => vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 1, 0]],
            Self::O => vec![vec![2, 2], vec![2, 2]],
            Self::L => vec![vec![0, 3, 0], vec![0, 3, 0], vec![0, 3, 3]],
            Self::J => vec![vec![0, 4, 0], vec![0, 4, 0], vec![4, 4, 0]],
            Self::I => vec![vec![0, 5, 0, 0]; 4],
            Self::S => vec![vec![0, 6, 6], vec![6, 6, 0], vec![0, 0, 0]],
            Self::Z => vec![vec![7, 7, 0], vec![0, 7, 7], vec![0, 0, 0]],
        }
    }
}

/// Rotation direction for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Active piece: shape matrix plus the grid offset of its top-left cell.
/// Offsets are signed; spawn centering and the kick search can pass through
/// transiently out-of-range columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub cells: Vec<Vec<u8>>,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// New piece at the top of the grid, horizontally centred.
    pub fn spawn(kind: PieceKind, grid_width: usize) -> Self {
        let cells = kind.matrix();
        let col = grid_width as i32 / 2 - cells[0].len() as i32 / 2;
        Self { cells, row: 0, col }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}

/// Playfield: rows[0] is the top. Dimensions are fixed for the lifetime of a
/// session; reset zero-fills in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    rows: VecDeque<Vec<u8>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let rows = (0..height).map(|_| vec![0u8; width]).collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Zero-fill every cell.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(0);
        }
    }

    /// None outside bounds. Collision treats an out-of-range coordinate the
    /// same as an occupied cell, so reads never need to be fallible errors.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, tag: u8) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(cell) = r.get_mut(col) {
                *cell = tag;
            }
        }
    }

    /// True iff some non-zero shape cell maps to a grid coordinate outside
    /// [0, height) x [0, width), or onto an occupied cell. The bounds policy
    /// is per-axis and uniform: rows above the top count as out of range like
    /// anything else. This one predicate covers walls, the floor, and
    /// inter-piece overlap.
    pub fn collides(&self, piece: &Piece) -> bool {
        for (r, row) in piece.cells.iter().enumerate() {
            for (c, &tag) in row.iter().enumerate() {
                if tag == 0 {
                    continue;
                }
                let gr = piece.row + r as i32;
                let gc = piece.col + c as i32;
                if gr < 0 || gr >= self.height as i32 || gc < 0 || gc >= self.width as i32 {
                    return true;
                }
                if self.get(gr as usize, gc as usize).is_some_and(|t| t != 0) {
                    return true;
                }
            }
        }
        false
    }

    /// Write each non-zero shape cell's tag into the grid. The caller has
    /// already checked `collides` at this offset; merge re-checks nothing.
    pub fn merge(&mut self, piece: &Piece) {
        for (r, row) in piece.cells.iter().enumerate() {
            for (c, &tag) in row.iter().enumerate() {
                if tag != 0 {
                    self.set(
                        (piece.row + r as i32) as usize,
                        (piece.col + c as i32) as usize,
                        tag,
                    );
                }
            }
        }
    }

    /// Remove full rows bottom-to-top, sliding an empty row in at the top for
    /// each. The same index is re-examined after a removal since the row
    /// above drops into it. Returns (rows cleared, points): each row awards
    /// multiplier x 10 and the multiplier doubles within one call, so k rows
    /// score 10 + 20 + ... = 10 * (2^k - 1).
    pub fn sweep_rows(&mut self) -> (u32, u32) {
        // A zero-width row is vacuously full; nothing to sweep.
        if self.width == 0 {
            return (0, 0);
        }
        let mut rows_cleared = 0u32;
        let mut points = 0u32;
        let mut multiplier = 1u32;
        let mut y = self.height;
        while y > 0 {
            y -= 1;
            while self.rows[y].iter().all(|&c| c != 0) {
                if let Some(mut row) = self.rows.remove(y) {
                    row.fill(0);
                    self.rows.push_front(row);
                }
                rows_cleared += 1;
                points += multiplier * 10;
                multiplier *= 2;
            }
        }
        (rows_cleared, points)
    }
}

/// 90-degree rotation via transpose-then-reverse: reverse each row for
/// clockwise, reverse the row order for counter-clockwise. Generic over
/// rectangular matrices; the bounding box dimensions swap.
pub fn rotated(cells: &[Vec<u8>], rotation: Rotation) -> Vec<Vec<u8>> {
    let rows = cells.len();
    let cols = cells.first().map_or(0, Vec::len);
    let mut out = vec![vec![0u8; rows]; cols];
    for (r, row) in cells.iter().enumerate() {
        for (c, &tag) in row.iter().enumerate() {
            out[c][r] = tag;
        }
    }
    match rotation {
        Rotation::Clockwise => {
            for row in &mut out {
                row.reverse();
            }
        }
        Rotation::CounterClockwise => out.reverse(),
    }
    out
}

/// Rotate the active piece, nudging it horizontally to escape walls and
/// neighbours. Deltas go +1, -2, +3, -4, ... (net displacements expand
/// symmetrically right/left); once the next delta's magnitude exceeds the
/// rotated shape's width the rotation is undone and the original column
/// restored, leaving the piece unchanged. Horizontal search only.
pub fn rotate_with_kicks(grid: &Grid, piece: &mut Piece, rotation: Rotation) {
    let original_col = piece.col;
    piece.cells = rotated(&piece.cells, rotation);
    let mut delta: i32 = 1;
    while grid.collides(piece) {
        if delta.unsigned_abs() as usize > piece.width() {
            piece.cells = rotated(&piece.cells, rotation.reversed());
            piece.col = original_col;
            return;
        }
        piece.col += delta;
        delta = -(delta + delta.signum());
    }
}

/// Session run state. Over is terminal; only reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Over,
}

/// What happened during a tick or drop command. The app shell acts on these
/// (high-score persistence, screen switch); rendering reads the session
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Locked,
    RowsCleared { rows: u32, points: u32 },
    GameOver { score: u32, new_high_score: bool },
}

/// One game session: grid, active piece, score and timing. Owns all mutable
/// state; every operation completes synchronously, so a drop-triggered
/// merge/spawn/sweep sequence can never interleave with input.
#[derive(Debug)]
pub struct Session {
    pub grid: Grid,
    pub piece: Piece,
    pub score: u32,
    pub high_score: u32,
    pub state: RunState,
    elapsed_ms: u64,
    drop_accum_ms: u64,
    drop_interval_ms: u64,
    rng: SmallRng,
}

impl Session {
    pub fn new(width: usize, height: usize, drop_interval_ms: u64, high_score: u32) -> Self {
        Self::with_rng(
            width,
            height,
            drop_interval_ms,
            high_score,
            SmallRng::from_entropy(),
        )
    }

    pub fn with_rng(
        width: usize,
        height: usize,
        drop_interval_ms: u64,
        high_score: u32,
        mut rng: SmallRng,
    ) -> Self {
        let grid = Grid::new(width, height);
        let piece = Piece::spawn(random_kind(&mut rng), width);
        Self {
            grid,
            piece,
            score: 0,
            high_score,
            state: RunState::Idle,
            elapsed_ms: 0,
            drop_accum_ms: 0,
            drop_interval_ms,
            rng,
        }
    }

    /// Timed tick entry: accumulate elapsed real time and advance the piece
    /// one row each time the accumulator crosses the drop interval. The
    /// accumulator resets to zero whether or not the drop locked. No-op
    /// unless Running.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<Event> {
        if self.state != RunState::Running {
            return Vec::new();
        }
        self.elapsed_ms += delta_ms;
        self.drop_accum_ms += delta_ms;
        if self.drop_accum_ms > self.drop_interval_ms {
            self.drop_accum_ms = 0;
            return self.drop_step();
        }
        Vec::new()
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, delta: i32) {
        if self.state != RunState::Running {
            return;
        }
        self.piece.col += delta;
        if self.grid.collides(&self.piece) {
            self.piece.col -= delta;
        }
    }

    /// Immediate one-row advance through the same drop logic the timer uses;
    /// also restarts the drop accumulator.
    pub fn soft_drop(&mut self) -> Vec<Event> {
        if self.state != RunState::Running {
            return Vec::new();
        }
        self.drop_accum_ms = 0;
        self.drop_step()
    }

    pub fn rotate_cw(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        rotate_with_kicks(&self.grid, &mut self.piece, Rotation::Clockwise);
    }

    /// Suspend or resume the timed advance. Pausing clears the accumulator
    /// so unpausing resumes from zero.
    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                self.drop_accum_ms = 0;
            }
            RunState::Paused => self.state = RunState::Running,
            RunState::Idle | RunState::Over => {}
        }
    }

    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
    }

    /// Clear the grid, zero score and timers, spawn a fresh piece, and run.
    /// Valid from any state, including Over.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.elapsed_ms = 0;
        self.drop_accum_ms = 0;
        let kind = random_kind(&mut self.rng);
        self.piece = Piece::spawn(kind, self.grid.width);
        self.state = RunState::Running;
    }

    /// Whole seconds of play time; paused stretches are excluded.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    /// One-row descent shared by gravity and soft drop. On collision the step
    /// is reverted and the piece locks: merge, spawn the next piece, sweep,
    /// then report the updated score. A spawn that immediately collides ends
    /// the session; the check runs against the pre-sweep grid.
    fn drop_step(&mut self) -> Vec<Event> {
        self.piece.row += 1;
        if !self.grid.collides(&self.piece) {
            return Vec::new();
        }
        self.piece.row -= 1;
        self.grid.merge(&self.piece);
        let mut events = vec![Event::Locked];

        let kind = random_kind(&mut self.rng);
        self.piece = Piece::spawn(kind, self.grid.width);
        let spawn_blocked = self.grid.collides(&self.piece);

        let (rows, points) = self.grid.sweep_rows();
        if rows > 0 {
            self.score += points;
            events.push(Event::RowsCleared { rows, points });
        }
        if spawn_blocked {
            events.push(self.finish());
        }
        events
    }

    /// Over transition: runs exactly once per game over. The final score is
    /// compared against the stored high score here and nowhere else.
    fn finish(&mut self) -> Event {
        self.state = RunState::Over;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        Event::GameOver {
            score: self.score,
            new_high_score,
        }
    }
}

fn random_kind(rng: &mut SmallRng) -> PieceKind {
    // Uniform and independent each spawn; no bag, repeats are expected.
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(width: usize, height: usize) -> Session {
        Session::with_rng(width, height, DROP_INTERVAL_MS, 0, SmallRng::seed_from_u64(7))
    }

    fn piece_at(kind: PieceKind, row: i32, col: i32) -> Piece {
        Piece {
            cells: kind.matrix(),
            row,
            col,
        }
    }

    fn fill_row(grid: &mut Grid, row: usize, tag: u8) {
        for col in 0..grid.width {
            grid.set(row, col, tag);
        }
    }

    #[test]
    fn catalog_returns_independent_copies() {
        let mut a = PieceKind::T.matrix();
        let b = PieceKind::T.matrix();
        a[1][1] = 0;
        assert_eq!(b[1][1], 1);
    }

    #[test]
    fn catalog_cells_carry_the_kind_tag() {
        for kind in PieceKind::ALL {
            for row in kind.matrix() {
                for tag in row {
                    assert!(tag == 0 || tag == kind.tag());
                }
            }
        }
    }

    #[test]
    fn collides_false_inside_empty_grid() {
        let grid = Grid::new(10, 20);
        let piece = piece_at(PieceKind::O, 5, 4);
        assert!(!grid.collides(&piece));
    }

    #[test]
    fn collides_at_walls_floor_and_above_top() {
        let grid = Grid::new(10, 20);
        assert!(grid.collides(&piece_at(PieceKind::O, 5, -1)));
        assert!(grid.collides(&piece_at(PieceKind::O, 5, 9)));
        assert!(grid.collides(&piece_at(PieceKind::O, 19, 4)));
        assert!(grid.collides(&piece_at(PieceKind::O, -1, 4)));
    }

    #[test]
    fn collides_with_occupied_cells_only_under_filled_shape_cells() {
        let mut grid = Grid::new(10, 20);
        grid.set(6, 4, 3);
        // O occupies (5..7, 4..6): overlap.
        assert!(grid.collides(&piece_at(PieceKind::O, 5, 4)));
        // T's top row is all zeros; a block under only that row is no overlap.
        let mut grid2 = Grid::new(10, 20);
        grid2.set(5, 4, 3);
        assert!(!grid2.collides(&piece_at(PieceKind::T, 5, 3)));
    }

    #[test]
    fn merge_then_collides_at_same_offset() {
        let mut grid = Grid::new(10, 20);
        let piece = piece_at(PieceKind::S, 10, 3);
        assert!(!grid.collides(&piece));
        grid.merge(&piece);
        assert!(grid.collides(&piece));
        assert_eq!(grid.get(10, 4), Some(6));
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for kind in PieceKind::ALL {
            for dir in [Rotation::Clockwise, Rotation::CounterClockwise] {
                let original = kind.matrix();
                let mut cells = kind.matrix();
                for _ in 0..4 {
                    cells = rotated(&cells, dir);
                }
                assert_eq!(cells, original, "{kind:?} {dir:?}");
            }
        }
    }

    #[test]
    fn clockwise_then_counter_clockwise_is_identity() {
        let original = PieceKind::J.matrix();
        let cells = rotated(
            &rotated(&original, Rotation::Clockwise),
            Rotation::CounterClockwise,
        );
        assert_eq!(cells, original);
    }

    #[test]
    fn rotation_swaps_rectangular_bounding_box() {
        let cells = vec![vec![1, 1, 1], vec![0, 1, 0]];
        let cw = rotated(&cells, Rotation::Clockwise);
        assert_eq!(cw.len(), 3);
        assert_eq!(cw[0].len(), 2);
        assert_eq!(cw, vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn sweep_scores_double_per_row() {
        let mut grid = Grid::new(10, 20);
        grid.set(16, 0, 4); // stray block above the full rows
        for y in 17..20 {
            fill_row(&mut grid, y, 2);
        }
        let (rows, points) = grid.sweep_rows();
        assert_eq!(rows, 3);
        assert_eq!(points, 10 + 20 + 40);
        // Three fresh empty rows at the top; the stray block dropped by 3.
        for y in 0..3 {
            assert!((0..10).all(|x| grid.get(y, x) == Some(0)));
        }
        assert_eq!(grid.get(19, 0), Some(4));
        assert_eq!(grid.height, 20);
    }

    #[test]
    fn sweep_rechecks_the_row_that_slides_down() {
        let mut grid = Grid::new(10, 20);
        // Full, partial, full from the bottom: both full rows must go even
        // though one slides through the other's index.
        fill_row(&mut grid, 19, 1);
        grid.set(18, 0, 1);
        fill_row(&mut grid, 17, 5);
        let (rows, points) = grid.sweep_rows();
        assert_eq!(rows, 2);
        assert_eq!(points, 10 + 20);
        assert_eq!(grid.get(19, 0), Some(1));
        assert!((1..10).all(|x| grid.get(19, x) == Some(0)));
    }

    #[test]
    fn sweep_on_empty_grid_is_free() {
        let mut grid = Grid::new(10, 20);
        assert_eq!(grid.sweep_rows(), (0, 0));
    }

    #[test]
    fn sweep_on_degenerate_grids_returns_nothing() {
        // Zero-width rows must not count as full, or the sweep would
        // remove and re-insert the same empty row without end.
        let mut grid = Grid::new(0, 5);
        assert_eq!(grid.sweep_rows(), (0, 0));
        assert_eq!(grid.height, 5);
        let mut grid = Grid::new(5, 0);
        assert_eq!(grid.sweep_rows(), (0, 0));
    }

    #[test]
    fn dropping_into_the_last_gap_clears_the_bottom_row() {
        let mut s = session(15, 30);
        s.start();
        fill_row(&mut s.grid, 29, 3);
        s.grid.set(29, 7, 0);
        // Vertical I: its filled column is local col 1, so col 6 puts it
        // over the gap at grid col 7.
        s.piece = piece_at(PieceKind::I, 25, 6);

        let events = s.soft_drop();
        assert!(events.is_empty());
        let events = s.soft_drop();
        assert!(events.contains(&Event::Locked));
        assert!(events.contains(&Event::RowsCleared { rows: 1, points: 10 }));
        assert_eq!(s.score, 10);
        assert_eq!(s.state, RunState::Running);
        assert_eq!(s.grid.height, 30);
        assert!((0..15).all(|x| s.grid.get(0, x) == Some(0)));
        // The rest of the I survived, shifted down one by the clear.
        assert_eq!(s.grid.get(29, 7), Some(5));
    }

    /// Blocks rows 0..=3 everywhere a fresh spawn can land, without making
    /// any row full (col 0 stays empty so the sweep never fires).
    fn block_spawn_area(grid: &mut Grid) {
        for y in 0..4 {
            for x in 1..grid.width {
                grid.set(y, x, 7);
            }
        }
    }

    #[test]
    fn blocked_spawn_ends_the_session() {
        let mut s = session(15, 30);
        s.start();
        block_spawn_area(&mut s.grid);
        s.score = 120;
        s.piece = piece_at(PieceKind::O, 28, 0);

        let events = s.soft_drop();
        assert_eq!(s.state, RunState::Over);
        assert!(events.contains(&Event::GameOver {
            score: 120,
            new_high_score: true
        }));
        assert_eq!(s.high_score, 120);
    }

    #[test]
    fn high_score_only_updates_when_exceeded() {
        let mut s = Session::with_rng(15, 30, DROP_INTERVAL_MS, 500, SmallRng::seed_from_u64(7));
        s.start();
        block_spawn_area(&mut s.grid);
        s.score = 120;
        s.piece = piece_at(PieceKind::O, 28, 0);

        let events = s.soft_drop();
        assert!(events.contains(&Event::GameOver {
            score: 120,
            new_high_score: false
        }));
        assert_eq!(s.high_score, 500);
    }

    #[test]
    fn commands_are_no_ops_once_over() {
        let mut s = session(15, 30);
        s.start();
        block_spawn_area(&mut s.grid);
        s.piece = piece_at(PieceKind::O, 28, 0);
        s.soft_drop();
        assert_eq!(s.state, RunState::Over);

        let before = s.piece.clone();
        s.move_left();
        s.move_right();
        s.rotate_cw();
        assert!(s.soft_drop().is_empty());
        assert!(s.advance(5000).is_empty());
        assert_eq!(s.piece, before);
    }

    #[test]
    fn kick_search_escapes_the_right_wall() {
        let grid = Grid::new(15, 30);
        // Vertical I against the right wall (filled column at grid col 14).
        let mut piece = piece_at(PieceKind::I, 10, 13);
        rotate_with_kicks(&grid, &mut piece, Rotation::Clockwise);
        assert_eq!(piece.col, 11);
        assert!(!grid.collides(&piece));
        // Now horizontal: row 1 of the rotated matrix is solid.
        assert_eq!(piece.cells[1], vec![5, 5, 5, 5]);
    }

    #[test]
    fn failed_kick_leaves_the_piece_untouched() {
        let mut grid = Grid::new(15, 30);
        let piece_before = piece_at(PieceKind::I, 10, 5);
        // The horizontal I would land in row 11; leave only its own column
        // free there so no reachable offset fits.
        fill_row(&mut grid, 11, 2);
        grid.set(11, 6, 0);
        let mut piece = piece_before.clone();
        rotate_with_kicks(&grid, &mut piece, Rotation::Clockwise);
        assert_eq!(piece, piece_before);
    }

    #[test]
    fn gravity_drops_when_the_accumulator_crosses_the_interval() {
        let mut s = session(15, 30);
        s.start();
        let row = s.piece.row;
        assert!(s.advance(600).is_empty());
        assert_eq!(s.piece.row, row);
        s.advance(600);
        assert_eq!(s.piece.row, row + 1);
        assert_eq!(s.elapsed_secs(), 1);
    }

    #[test]
    fn pause_rejects_commands_and_zeroes_the_accumulator() {
        let mut s = session(15, 30);
        s.start();
        s.advance(900);
        let before = s.piece.clone();
        s.toggle_pause();
        assert_eq!(s.state, RunState::Paused);
        s.move_left();
        s.rotate_cw();
        assert!(s.soft_drop().is_empty());
        assert!(s.advance(5000).is_empty());
        assert_eq!(s.piece, before);

        // Resumes from zero: the 900 ms from before the pause is gone.
        s.toggle_pause();
        s.advance(600);
        assert_eq!(s.piece.row, before.row);
        s.advance(600);
        assert_eq!(s.piece.row, before.row + 1);
    }

    #[test]
    fn idle_session_ignores_everything_until_start() {
        let mut s = session(15, 30);
        let before = s.piece.clone();
        assert!(s.advance(5000).is_empty());
        s.move_right();
        assert_eq!(s.piece, before);
        s.start();
        assert_eq!(s.state, RunState::Running);
    }

    #[test]
    fn reset_clears_everything_and_runs() {
        let mut s = session(15, 30);
        s.start();
        block_spawn_area(&mut s.grid);
        s.piece = piece_at(PieceKind::O, 28, 0);
        s.soft_drop();
        assert_eq!(s.state, RunState::Over);

        s.reset();
        assert_eq!(s.state, RunState::Running);
        assert_eq!(s.score, 0);
        assert_eq!(s.elapsed_secs(), 0);
        assert!((0..30).all(|y| (0..15).all(|x| s.grid.get(y, x) == Some(0))));
        assert_eq!(s.piece.row, 0);
    }

    #[test]
    fn spawn_is_centred_for_each_shape_width() {
        let p = Piece::spawn(PieceKind::O, 15);
        assert_eq!(p.col, 6);
        let p = Piece::spawn(PieceKind::T, 15);
        assert_eq!(p.col, 6);
        let p = Piece::spawn(PieceKind::I, 15);
        assert_eq!(p.col, 5);
    }
}
