//! Built-in Connect Four environment (7 columns x 6 rows, action-masked)
//! and its heuristic stand-in policy.

use image::RgbImage;

use crate::league::env::{MatchEnv, Observation, Step};
use crate::league::policy::Policy;
use crate::render::{Rect, Surface};
use crate::theme::Rgb;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;

const CELL: i32 = 64;
const MARGIN: i32 = 16;

const BOARD: Rgb = Rgb(25, 60, 165);
const HOLE: Rgb = Rgb(10, 16, 34);
const PIECES: [Rgb; 2] = [Rgb(229, 56, 59), Rgb(247, 200, 70)];

/// Board state; row 0 is the top row.
pub struct ConnectFour {
    grid: [[Option<u8>; COLS]; ROWS],
    current: u8,
    finished: bool,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            grid: [[None; COLS]; ROWS],
            current: 0,
            finished: false,
        }
    }

    fn wins(&self, row: usize, col: usize) -> bool {
        let owner = self.grid[row][col];
        if owner.is_none() {
            return false;
        }
        for (dr, dc) in [(0i32, 1i32), (1, 0), (1, 1), (1, -1)] {
            let mut count = 1;
            for sign in [1i32, -1] {
                let (mut r, mut c) = (row as i32 + dr * sign, col as i32 + dc * sign);
                while r >= 0
                    && c >= 0
                    && (r as usize) < ROWS
                    && (c as usize) < COLS
                    && self.grid[r as usize][c as usize] == owner
                {
                    count += 1;
                    r += dr * sign;
                    c += dc * sign;
                }
            }
            if count >= 4 {
                return true;
            }
        }
        false
    }

    fn terminal(rewards: [f64; 2]) -> Step {
        Step {
            rewards,
            terminated: true,
            truncated: false,
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEnv for ConnectFour {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn current_player(&self) -> usize {
        usize::from(self.current)
    }

    fn observe(&self) -> Observation {
        let mut action_mask = vec![false; COLS];
        if !self.finished {
            for (col, legal) in action_mask.iter_mut().enumerate() {
                *legal = self.grid[0][col].is_none();
            }
        }

        // Plane 0: the side to move; plane 1: the opponent.
        let mut features = vec![0.0f32; 2 * ROWS * COLS];
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(owner) = cell {
                    let plane = usize::from(*owner != self.current);
                    features[plane * ROWS * COLS + row * COLS + col] = 1.0;
                }
            }
        }
        Observation {
            action_mask,
            features,
        }
    }

    fn step(&mut self, action: usize) -> Step {
        if self.finished {
            return Self::terminal([0.0; 2]);
        }
        let mover = usize::from(self.current);
        let opponent = 1 - mover;

        let landing = if action < COLS {
            (0..ROWS).rev().find(|&r| self.grid[r][action].is_none())
        } else {
            None
        };
        let Some(row) = landing else {
            // An illegal drop forfeits the match.
            self.finished = true;
            let mut rewards = [0.0; 2];
            rewards[mover] = -1.0;
            rewards[opponent] = 1.0;
            return Self::terminal(rewards);
        };

        self.grid[row][action] = Some(self.current);
        if self.wins(row, action) {
            self.finished = true;
            let mut rewards = [0.0; 2];
            rewards[mover] = 1.0;
            rewards[opponent] = -1.0;
            return Self::terminal(rewards);
        }
        if (0..COLS).all(|c| self.grid[0][c].is_some()) {
            self.finished = true;
            return Self::terminal([0.0; 2]);
        }

        self.current ^= 1;
        Step {
            rewards: [0.0; 2],
            terminated: false,
            truncated: false,
        }
    }

    fn render_frame(&self) -> Option<RgbImage> {
        let width = (COLS as i32 * CELL + 2 * MARGIN) as u32;
        let height = (ROWS as i32 * CELL + 2 * MARGIN) as u32;
        let mut s = Surface::new(width, height);
        s.fill_rect(Rect::new(0, 0, width as i32, height as i32), BOARD);

        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x0 = MARGIN + col as i32 * CELL;
                let y0 = MARGIN + row as i32 * CELL;
                let color = match cell {
                    Some(owner) => PIECES[usize::from(*owner)],
                    None => HOLE,
                };
                s.fill_ellipse(Rect::new(x0 + 6, y0 + 6, x0 + CELL - 6, y0 + CELL - 6), color);
            }
        }
        Some(s.into_image())
    }
}

/// Win / block / center-preference policy over the observation planes.
/// Stands in for the out-of-scope trained model.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFourHeuristic;

const CENTER_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

impl Policy for ConnectFourHeuristic {
    fn best_action(&mut self, obs: &Observation) -> usize {
        let legal = obs.legal_actions();
        let Some(&fallback) = legal.first() else {
            return 0;
        };
        for &col in &legal {
            if wins_after(obs, col, Plane::Mine) {
                return col;
            }
        }
        for &col in &legal {
            if wins_after(obs, col, Plane::Theirs) {
                return col;
            }
        }
        CENTER_ORDER
            .into_iter()
            .find(|&c| obs.action_mask.get(c).copied().unwrap_or(false))
            .unwrap_or(fallback)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Plane {
    Mine,
    Theirs,
}

fn occupied(obs: &Observation, plane: Plane, row: usize, col: usize) -> bool {
    let base = match plane {
        Plane::Mine => 0,
        Plane::Theirs => ROWS * COLS,
    };
    obs.features
        .get(base + row * COLS + col)
        .copied()
        .unwrap_or(0.0)
        > 0.5
}

fn drop_row(obs: &Observation, col: usize) -> Option<usize> {
    (0..ROWS)
        .rev()
        .find(|&r| !occupied(obs, Plane::Mine, r, col) && !occupied(obs, Plane::Theirs, r, col))
}

/// Would dropping into `col` complete four-in-a-row for `plane`?
fn wins_after(obs: &Observation, col: usize, plane: Plane) -> bool {
    let Some(row) = drop_row(obs, col) else {
        return false;
    };
    let owned = |r: i32, c: i32| {
        if r == row as i32 && c == col as i32 {
            return true;
        }
        r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && occupied(obs, plane, r as usize, c as usize)
    };
    for (dr, dc) in [(0i32, 1i32), (1, 0), (1, 1), (1, -1)] {
        let mut count = 1;
        for sign in [1i32, -1] {
            let (mut r, mut c) = (row as i32 + dr * sign, col as i32 + dc * sign);
            while owned(r, c) {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        if count >= 4 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_four_wins_for_the_mover() {
        let mut env = ConnectFour::new();
        // P0 stacks column 0, P1 stacks column 1.
        for _ in 0..3 {
            assert!(!env.step(0).terminated);
            assert!(!env.step(1).terminated);
        }
        let step = env.step(0);
        assert!(step.terminated);
        assert_eq!(step.rewards, [1.0, -1.0]);
    }

    #[test]
    fn full_column_is_masked() {
        let mut env = ConnectFour::new();
        for _ in 0..6 {
            env.step(0);
        }
        let obs = env.observe();
        assert!(!obs.action_mask[0]);
        assert!(obs.action_mask[1..].iter().all(|&m| m));
    }

    #[test]
    fn illegal_drop_forfeits() {
        let mut env = ConnectFour::new();
        let step = env.step(COLS + 2);
        assert!(step.terminated);
        assert_eq!(step.rewards, [-1.0, 1.0]);
    }

    #[test]
    fn observation_planes_follow_the_side_to_move() {
        let mut env = ConnectFour::new();
        env.step(3); // P0 at bottom of column 3.
        // Now P1 observes: P0's piece is on the opponent plane.
        let obs = env.observe();
        let bottom3 = (ROWS - 1) * COLS + 3;
        assert_eq!(obs.features[bottom3], 0.0);
        assert_eq!(obs.features[ROWS * COLS + bottom3], 1.0);
    }

    #[test]
    fn render_frame_paints_pieces() {
        let mut env = ConnectFour::new();
        env.step(0);
        let frame = env.render_frame().unwrap();
        assert_eq!(frame.dimensions(), (480, 416));
        // Bottom-left hole now carries P0's piece color.
        let cx = (MARGIN + CELL / 2) as u32;
        let cy = (MARGIN + 5 * CELL + CELL / 2) as u32;
        assert_eq!(frame.get_pixel(cx, cy).0, [229, 56, 59]);
    }

    #[test]
    fn heuristic_takes_the_winning_drop() {
        let mut obs = Observation {
            action_mask: vec![true; COLS],
            features: vec![0.0; 2 * ROWS * COLS],
        };
        // Three of ours on the bottom row, columns 1..=3: column 0 completes
        // the row (center preference alone would pick 3).
        for col in 1..4 {
            obs.features[(ROWS - 1) * COLS + col] = 1.0;
        }
        let mut policy = ConnectFourHeuristic;
        assert_eq!(policy.best_action(&obs), 0);
    }

    #[test]
    fn heuristic_blocks_the_opponent() {
        let mut obs = Observation {
            action_mask: vec![true; COLS],
            features: vec![0.0; 2 * ROWS * COLS],
        };
        // Opponent threatens column 6 with a vertical stack.
        for row in (ROWS - 3)..ROWS {
            obs.features[ROWS * COLS + row * COLS + 6] = 1.0;
        }
        let mut policy = ConnectFourHeuristic;
        assert_eq!(policy.best_action(&obs), 6);
    }

    #[test]
    fn heuristic_prefers_the_center_otherwise() {
        let obs = Observation {
            action_mask: vec![true; COLS],
            features: vec![0.0; 2 * ROWS * COLS],
        };
        let mut policy = ConnectFourHeuristic;
        assert_eq!(policy.best_action(&obs), 3);
    }
}
