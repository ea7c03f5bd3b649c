// patterns.rs - Named seed patterns and random fill, placed through the grid's birth API

use life_core::GridState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cells are (row, col); patterns are re-centered on placement, so only
/// their relative layout matters.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beehive",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Evolution",
        cells: &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
            (1, 0),                         (1, 4),
            (2, 0), (2, 1), (2, 2), (2, 3), (2, 4),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn find(name: &str) -> Option<usize> {
    PATTERNS
        .iter()
        .position(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Restarts the grid and places `pattern` in its middle.
///
/// Returns how many cells were placed; cells that fall off a grid too small
/// for the pattern are dropped.
pub fn apply_pattern(state: &mut GridState, pattern: &Pattern) -> usize {
    state.restart();

    let min_row = pattern.cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let max_row = pattern.cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
    let min_col = pattern.cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let max_col = pattern.cells.iter().map(|&(_, c)| c).max().unwrap_or(0);

    let width = state.width() as i64;
    let top = (width - (max_row - min_row + 1)) / 2 - min_row;
    let left = (width - (max_col - min_col + 1)) / 2 - min_col;

    let mut placed = 0;
    for &(row, col) in pattern.cells {
        let (row, col) = (row + top, col + left);
        // Only the column needs checking here; the grid rejects bad rows itself
        if !(0..width).contains(&col) {
            continue;
        }
        if state.give_birth(row * width + col).is_ok() {
            placed += 1;
        }
    }
    placed
}

/// Restarts the grid and fills each cell with probability `density`.
pub fn apply_random_pattern(state: &mut GridState, seed: u64, density: f64) -> usize {
    state.restart();

    let mut rng = StdRng::seed_from_u64(seed);
    for index in 0..state.area() {
        if rng.gen_bool(density) {
            // Grid was just cleared, so every birth is accepted
            let _ = state.give_birth(index as i64);
        }
    }
    state.population()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_findable() {
        for (i, pattern) in PATTERNS.iter().enumerate() {
            assert_eq!(find(pattern.name), Some(i), "{}", pattern.name);
        }
        assert_eq!(find("gosper glider gun"), find("Gosper Glider Gun"));
        assert_eq!(find("nope"), None);
    }

    #[test]
    fn tables_start_at_the_origin() {
        for pattern in PATTERNS {
            let min_row = pattern.cells.iter().map(|&(r, _)| r).min();
            let min_col = pattern.cells.iter().map(|&(_, c)| c).min();
            assert_eq!((min_row, min_col), (Some(0), Some(0)), "{}", pattern.name);
        }
    }

    #[test]
    fn patterns_are_placed_whole_on_a_large_grid() {
        let mut state = GridState::with_width(100).unwrap();
        for pattern in PATTERNS {
            let placed = apply_pattern(&mut state, pattern);
            assert_eq!(placed, pattern.cells.len(), "{}", pattern.name);
            assert_eq!(state.population(), pattern.cells.len());
        }
    }

    #[test]
    fn placement_is_centered() {
        let mut state = GridState::with_width(10).unwrap();
        apply_pattern(&mut state, &PATTERNS[find("Block").unwrap()]);
        for index in [44, 45, 54, 55] {
            assert!(state.is_alive(index), "cell {index}");
        }
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut state = GridState::with_width(8).unwrap();
        let gun = &PATTERNS[find("Gosper Glider Gun").unwrap()];
        let placed = apply_pattern(&mut state, gun);
        assert!(placed < gun.cells.len());
        assert_eq!(state.population(), placed);
    }

    #[test]
    fn evolution_seed_reaches_fifty_six() {
        let mut state = GridState::with_width(100).unwrap();
        apply_pattern(&mut state, &PATTERNS[find("Evolution").unwrap()]);
        for _ in 0..30 {
            state.step();
        }
        assert_eq!(state.population(), 56);
    }

    #[test]
    fn random_fill_is_reproducible() {
        let mut a = GridState::with_width(40).unwrap();
        let mut b = GridState::with_width(40).unwrap();
        let pa = apply_random_pattern(&mut a, 9, 0.3);
        let pb = apply_random_pattern(&mut b, 9, 0.3);
        assert_eq!(pa, pb);
        assert_eq!(a.cells(), b.cells());
        assert!(pa > 0 && pa < a.area());

        assert_eq!(apply_random_pattern(&mut a, 9, 0.0), 0);
        assert_eq!(apply_random_pattern(&mut a, 9, 1.0), a.area());
    }
}
