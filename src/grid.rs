use {
    glam::IVec2,
    std::fmt::{Debug, DebugList, Formatter, Result as FmtResult},
};

/// A dense, row-major 2D grid addressed by `IVec2`.
#[derive(Clone, PartialEq)]
pub struct Grid<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use when iterating
    dimensions: IVec2,
}

impl<T> Grid<T> {
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    #[inline]
    fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.index_from_pos(pos)])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.contains(pos).then(|| {
            let index: usize = self.index_from_pos(pos);

            &mut self.cells[index]
        })
    }
}

impl<T: Default> Grid<T> {
    pub fn default(dimensions: IVec2) -> Self {
        let capacity: usize = (dimensions.x * dimensions.y) as usize;
        let mut cells: Vec<T> = Vec::with_capacity(capacity);

        cells.resize_with(capacity, T::default);

        Self { cells, dimensions }
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid")?;

        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_access() {
        let mut grid: Grid<u8> = Grid::default(IVec2::new(3_i32, 2_i32));

        assert_eq!(grid.cells().len(), 6_usize);
        assert!(grid.contains(IVec2::new(2_i32, 1_i32)));
        assert!(!grid.contains(IVec2::new(3_i32, 0_i32)));
        assert!(!grid.contains(IVec2::new(0_i32, -1_i32)));

        *grid.get_mut(IVec2::new(2_i32, 1_i32)).unwrap() = 7_u8;

        assert_eq!(grid.get(IVec2::new(2_i32, 1_i32)), Some(&7_u8));
        assert_eq!(grid.get(IVec2::new(-1_i32, 0_i32)), None);
    }
}
