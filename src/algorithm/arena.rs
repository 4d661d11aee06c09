use crate::algorithm::MapGenerator;
use crate::spatial::grid::{EMPTY, WALL};

/// Single empty room filling the whole map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    height: usize,
}

impl Arena {
    /// Create an arena of the given size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl MapGenerator for Arena {
    fn create<F>(&mut self, mut callback: F)
    where
        F: FnMut(i32, i32, u8),
    {
        let w = self.width as i32 - 1;
        let h = self.height as i32 - 1;

        for x in 0..=w {
            for y in 0..=h {
                let empty = x > 0 && y > 0 && x < w && y < h;
                callback(x, y, if empty { EMPTY } else { WALL });
            }
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
