// neighborhood.rs - Bounded Moore neighborhood on a linearized square grid
//
// A cell index `i` sits at column `i % width`, row `i / width`. Neighbors
// never wrap: an offset is accepted only when it lands in the row it was
// aimed at, which is what separates a true diagonal from a step that fell
// off one edge and onto the next row.

/// (row delta, column delta) for the eight surrounding cells.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Up to eight neighbor indices, stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    cells: [usize; 8],
    len: u8,
}

impl Neighbors {
    fn push(&mut self, index: usize) {
        self.cells[self.len as usize] = index;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cells[..self.len as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.as_slice().iter()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Live-neighbor count plus the dead neighbors that may be birth candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Survey {
    pub live: u8,
    pub dead: Neighbors,
}

/// Valid neighbor indices of `center` on a `width * width` grid.
///
/// Corners get 3, edge cells 5, interior cells 8. A center outside the
/// grid has no neighbors.
pub fn neighbors(center: usize, width: usize) -> Neighbors {
    let mut out = Neighbors::default();
    let area = width * width;
    if width == 0 || center >= area {
        return out;
    }

    let row = (center / width) as isize;
    let w = width as isize;
    for &(dr, dc) in &OFFSETS {
        let candidate = center as isize + dr * w + dc;
        if candidate < 0 || candidate >= area as isize {
            continue;
        }
        // Row containment rejects column wraparound
        if candidate / w != row + dr {
            continue;
        }
        out.push(candidate as usize);
    }
    out
}

/// Number of live cells around `center`.
pub fn count_live(cells: &[bool], width: usize, center: usize) -> u8 {
    neighbors(center, width)
        .iter()
        .filter(|&&n| cells[n])
        .count() as u8
}

/// Live count and dead-neighbor list around `center` in one pass.
pub fn survey(cells: &[bool], width: usize, center: usize) -> Survey {
    let mut survey = Survey::default();
    for &n in &neighbors(center, width) {
        if cells[n] {
            survey.live += 1;
        } else {
            survey.dead.push(n);
        }
    }
    survey
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 5;

    fn sorted(neighbors: Neighbors) -> Vec<usize> {
        let mut v = neighbors.as_slice().to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn corners_have_three_neighbors() {
        assert_eq!(sorted(neighbors(0, W)), vec![1, 5, 6]);
        assert_eq!(sorted(neighbors(4, W)), vec![3, 8, 9]);
        assert_eq!(sorted(neighbors(20, W)), vec![15, 16, 21]);
        assert_eq!(sorted(neighbors(24, W)), vec![18, 19, 23]);
    }

    #[test]
    fn edges_have_five_neighbors() {
        assert_eq!(sorted(neighbors(2, W)), vec![1, 3, 6, 7, 8]);
        assert_eq!(sorted(neighbors(10, W)), vec![5, 6, 11, 15, 16]);
        assert_eq!(sorted(neighbors(14, W)), vec![8, 9, 13, 18, 19]);
        assert_eq!(sorted(neighbors(22, W)), vec![16, 17, 18, 21, 23]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(sorted(neighbors(12, W)), vec![6, 7, 8, 11, 13, 16, 17, 18]);
    }

    #[test]
    fn right_edge_does_not_wrap_to_next_row() {
        // 9 is the last column of row 1; 10 is the first column of row 2
        let n = neighbors(9, W);
        assert!(!n.contains(10));
        assert!(!n.contains(5));
        assert!(!n.contains(15));
    }

    #[test]
    fn out_of_range_center_is_empty() {
        assert!(neighbors(W * W, W).is_empty());
        assert!(neighbors(0, 0).is_empty());
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(neighbors(0, 1).is_empty());
    }

    #[test]
    fn survey_splits_live_and_dead() {
        let mut cells = vec![false; W * W];
        cells[1] = true;
        cells[6] = true;
        let s = survey(&cells, W, 0);
        assert_eq!(s.live, 2);
        assert_eq!(s.dead.as_slice(), &[5]);
        assert_eq!(count_live(&cells, W, 0), 2);
    }

    #[test]
    fn count_matches_brute_force() {
        let width = 7;
        let mut cells = vec![false; width * width];
        for i in (0..cells.len()).step_by(3) {
            cells[i] = true;
        }
        for center in 0..width * width {
            let (cx, cy) = ((center % width) as isize, (center / width) as isize);
            let mut expected = 0;
            for y in (cy - 1)..=(cy + 1) {
                for x in (cx - 1)..=(cx + 1) {
                    if (x, y) == (cx, cy) || x < 0 || y < 0 || x >= width as isize || y >= width as isize {
                        continue;
                    }
                    if cells[y as usize * width + x as usize] {
                        expected += 1;
                    }
                }
            }
            assert_eq!(count_live(&cells, width, center), expected, "center {center}");
        }
    }
}
