// rules.rs - Birth and survival predicates (B3/S23)

pub const MIN_NEIGHBORS_TO_SURVIVE: u8 = 2;
pub const MAX_NEIGHBORS_TO_STAY_ALIVE: u8 = 3;
pub const NEIGHBORS_TO_REPRODUCE: u8 = 3;

#[inline]
pub fn stays_alive(live_neighbors: u8) -> bool {
    (MIN_NEIGHBORS_TO_SURVIVE..=MAX_NEIGHBORS_TO_STAY_ALIVE).contains(&live_neighbors)
}

#[inline]
pub fn becomes_alive(live_neighbors: u8) -> bool {
    live_neighbors == NEIGHBORS_TO_REPRODUCE
}

/// State of a cell in the next generation.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, n)  => stays_alive(n),     // Survival
        (false, n) => becomes_alive(n),   // Birth
    }
}
