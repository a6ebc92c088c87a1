//! Grid indexing and neighbor helpers over a dense cube of cells.
//!
//! Cells are stored x-fastest, then y, then z:
//! `index = x + y * size + z * size * size`.

use crate::cell::Cell;

/// Calculate the linear index for a 3D coordinate.
#[inline]
pub fn index_of(size: i16, x: i16, y: i16, z: i16) -> usize {
    let size = size as usize;
    z as usize * size * size + y as usize * size + x as usize
}

/// Recover the 3D coordinate of a linear index.
#[inline]
pub fn coords_of(size: i16, idx: usize) -> (i16, i16, i16) {
    let size = size as usize;
    let x = idx % size;
    let y = (idx / size) % size;
    let z = (idx / (size * size)) % size;
    (x as i16, y as i16, z as i16)
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(size: i16, x: i16, y: i16, z: i16) -> bool {
    x >= 0 && x < size && y >= 0 && y < size && z >= 0 && z < size
}

/// Count alive neighbors using Moore neighborhood (26 neighbors).
///
/// Neighbors outside the cube are skipped, the grid does not wrap.
/// The center coordinate must be in bounds.
pub fn count_neighbors(size: i16, cells: &[Cell], x: i16, y: i16, z: i16) -> u8 {
    let mut count = 0;

    for dz in -1i32..=1 {
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                let nz = z as i32 + dz;

                let limit = size as i32;
                if nx < 0 || nx >= limit || ny < 0 || ny >= limit || nz < 0 || nz >= limit {
                    continue;
                }

                let idx = index_of(size, nx as i16, ny as i16, nz as i16);
                if cells[idx].is_alive() {
                    count += 1;
                }
            }
        }
    }

    count
}
