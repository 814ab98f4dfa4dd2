//! General-purpose coordinate utility functions

/// Given an index of the grid and the grid's width, returns X and Y coordinates.
pub fn get_coords(index: usize, width: usize) -> (usize, usize) {
    let x = index % width;
    let y = (index - x) / width;
    (x, y)
}

/// Given an X and Y coordinate in the grid and the grid's width, returns the index of that coordinate in the grid.
pub fn get_index(x: usize, y: usize, width: usize) -> usize {
    debug_assert!(x < width);
    y * width + x
}

struct VisibleIterator {
    min_x: usize,
    max_x: usize,
    max_y: usize,
    cur_x: usize,
    cur_y: usize,
    done: bool,
}

impl Iterator for VisibleIterator {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = (self.cur_x, self.cur_y);
        if self.cur_x < self.max_x {
            self.cur_x += 1;
        } else if self.cur_y < self.max_y {
            self.cur_y += 1;
            self.cur_x = self.min_x;
        } else {
            self.done = true;
        }

        Some(item)
    }
}

/// Given current X and Y coordinates of a cell and a view distance, creates an iterator visiting all grid coordinates
/// within that distance.  The window is clamped to the edges of the grid rather than wrapped, so coordinates outside
/// of `[0, width) x [0, height)` are never produced.  Note that this includes the coordinate of the source cell.
pub fn iter_visible(
    cur_x: usize,
    cur_y: usize,
    view_distance: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    debug_assert!(cur_x < width);
    debug_assert!(cur_y < height);
    // both minimums and maximums are inclusive
    let min_y = cur_y.saturating_sub(view_distance);
    let min_x = cur_x.saturating_sub(view_distance);
    let max_y = (cur_y + view_distance).min(height - 1);
    let max_x = (cur_x + view_distance).min(width - 1);

    VisibleIterator {
        min_x,
        max_x,
        max_y,
        cur_x: min_x,
        cur_y: min_y,
        done: false,
    }
}

/// Visits the in-bounds members of the Moore neighborhood of `(x, y)`: the up to 8 cells touching it horizontally,
/// vertically or diagonally.  The cell itself is skipped.
pub fn moore_neighbors(x: usize, y: usize, width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    iter_visible(x, y, 1, width, height).filter(move |&coord| coord != (x, y))
}

#[test]
fn iter_visible_functionality() {
    let universe_size = 50;
    let mut view_distance = 3;
    let mut cur_x = 6;
    let mut cur_y = 6;

    let indexes: Vec<(usize, usize)> =
        iter_visible(cur_x, cur_y, view_distance, universe_size, universe_size).collect();
    assert_eq!(indexes.len(), 49);

    view_distance = 4;
    cur_x = 3;
    cur_y = 2;
    let indexes: Vec<(usize, usize)> =
        iter_visible(cur_x, cur_y, view_distance, universe_size, universe_size).collect();

    assert_eq!(indexes.len(), 56);
}

#[test]
fn iter_visible_clamps_to_rectangle() {
    // bottom-right corner of a wide grid
    let coords: Vec<(usize, usize)> = iter_visible(9, 2, 1, 10, 3).collect();
    assert_eq!(coords, vec![(8, 1), (9, 1), (8, 2), (9, 2)]);

    // a 1x1 grid only ever sees itself
    let coords: Vec<(usize, usize)> = iter_visible(0, 0, 3, 1, 1).collect();
    assert_eq!(coords, vec![(0, 0)]);
}

#[test]
fn moore_neighbors_skip_center_and_edges() {
    assert_eq!(moore_neighbors(1, 1, 3, 3).count(), 8);
    assert_eq!(moore_neighbors(0, 0, 3, 3).count(), 3);
    assert_eq!(moore_neighbors(1, 0, 3, 3).count(), 5);
    assert!(moore_neighbors(1, 1, 3, 3).all(|c| c != (1, 1)));
}

#[test]
fn coords_round_trip() {
    let width = 7;
    assert_eq!(get_index(3, 4, width), 31);
    assert_eq!(get_coords(31, width), (3, 4));
    assert_eq!(get_coords(6, width), (6, 0));
}
