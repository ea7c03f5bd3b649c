// cells.rs - Cell index lists and the buffer pool they are recycled through

use crate::grid::Recycling;

const NO_SLOT: u32 = u32::MAX;

/// Set of live cell indices with O(1) insert and remove.
///
/// `slots[cell]` holds the position of `cell` inside `cells`, so removal is a
/// swap-remove plus one slot fix-up. Order carries no meaning.
#[derive(Debug)]
pub struct AliveCells {
    cells: Vec<usize>,
    slots: Vec<u32>,
}

impl AliveCells {
    pub fn new(area: usize) -> Self {
        Self {
            cells: Vec::new(),
            slots: vec![NO_SLOT; area],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.slots.get(cell).is_some_and(|&slot| slot != NO_SLOT)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    /// Returns `false` if `cell` was already present.
    pub fn insert(&mut self, cell: usize) -> bool {
        if self.contains(cell) {
            return false;
        }
        self.slots[cell] = self.cells.len() as u32;
        self.cells.push(cell);
        true
    }

    /// Returns `false` if `cell` was not present.
    pub fn remove(&mut self, cell: usize) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let slot = self.slots[cell] as usize;
        self.cells.swap_remove(slot);
        if let Some(&moved) = self.cells.get(slot) {
            self.slots[moved] = slot as u32;
        }
        self.slots[cell] = NO_SLOT;
        true
    }

    /// Moves every cell of `incoming` to the tail, leaving `incoming` empty.
    pub fn append(&mut self, incoming: &mut Vec<usize>) {
        for cell in incoming.drain(..) {
            self.insert(cell);
        }
    }

    /// Keeps only the cells for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) -> usize {
        let mut removed = 0;
        let mut slot = 0;
        while slot < self.cells.len() {
            let cell = self.cells[slot];
            if keep(cell) {
                slot += 1;
            } else {
                self.remove(cell);
                removed += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        for &cell in &self.cells {
            self.slots[cell] = NO_SLOT;
        }
        self.cells.clear();
    }
}

/// Free-list of cleared index buffers.
///
/// Work lists are taken from the pool at analysis time and handed back after
/// the transition, so steady-state generations allocate nothing. With
/// recycling disabled, released buffers are simply dropped.
#[derive(Debug)]
pub struct CellPool {
    free: Vec<Vec<usize>>,
    recycling: Recycling,
}

impl CellPool {
    pub fn new(recycling: Recycling) -> Self {
        Self {
            free: Vec::new(),
            recycling,
        }
    }

    pub fn recycling(&self) -> Recycling {
        self.recycling
    }

    /// Buffers currently waiting for reuse
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    pub fn take(&mut self) -> Vec<usize> {
        self.free.pop().unwrap_or_default()
    }

    pub fn release(&mut self, mut buffer: Vec<usize>) {
        if self.recycling == Recycling::Disabled || buffer.capacity() == 0 {
            return;
        }
        buffer.clear();
        self.free.push(buffer);
    }

    pub fn clear(&mut self) {
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_keep_slots_consistent() {
        let mut alive = AliveCells::new(16);
        for cell in [3, 7, 11, 2] {
            assert!(alive.insert(cell));
        }
        assert!(!alive.insert(7));
        assert_eq!(alive.len(), 4);

        assert!(alive.remove(3));
        assert!(!alive.remove(3));
        assert!(!alive.contains(3));
        for &cell in alive.as_slice() {
            assert!(alive.contains(cell));
        }
        assert!(alive.remove(2));
        assert!(alive.remove(7));
        assert_eq!(alive.as_slice(), &[11]);
    }

    #[test]
    fn contains_is_false_outside_the_grid() {
        let alive = AliveCells::new(4);
        assert!(!alive.contains(4));
        assert!(!alive.contains(usize::MAX));
    }

    #[test]
    fn append_drains_and_skips_duplicates() {
        let mut alive = AliveCells::new(10);
        alive.insert(1);
        let mut incoming = vec![1, 4, 5];
        alive.append(&mut incoming);
        assert!(incoming.is_empty());
        assert_eq!(alive.len(), 3);
    }

    #[test]
    fn retain_drops_rejected_cells() {
        let mut alive = AliveCells::new(10);
        for cell in 0..10 {
            alive.insert(cell);
        }
        let removed = alive.retain(|cell| cell % 2 == 0);
        assert_eq!(removed, 5);
        let mut left = alive.as_slice().to_vec();
        left.sort_unstable();
        assert_eq!(left, vec![0, 2, 4, 6, 8]);
        for cell in 0..10 {
            assert_eq!(alive.contains(cell), cell % 2 == 0);
        }
    }

    #[test]
    fn pool_reuses_released_buffers() {
        let mut pool = CellPool::new(Recycling::Enabled);
        let mut buffer = pool.take();
        buffer.extend([1, 2, 3]);
        let capacity = buffer.capacity();
        pool.release(buffer);
        assert_eq!(pool.len(), 1);

        let reused = pool.take();
        assert!(reused.is_empty());
        assert_eq!(reused.capacity(), capacity);
        assert!(pool.is_empty());
    }

    #[test]
    fn disabled_pool_drops_buffers() {
        let mut pool = CellPool::new(Recycling::Disabled);
        pool.release(vec![1, 2, 3]);
        assert!(pool.is_empty());
    }
}
