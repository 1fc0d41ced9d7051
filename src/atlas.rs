use {crate::grid::Grid, glam::IVec2};

/// One character of the unfolded texture atlas.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum AtlasCell {
    #[default]
    Void = b' ',
    Open = b'.',
    Wall = b'#',
}

impl AtlasCell {
    const VOID_U8: u8 = Self::Void as u8;
    const OPEN_U8: u8 = Self::Open as u8;
    const WALL_U8: u8 = Self::Wall as u8;

    pub fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }
}

#[derive(Debug, PartialEq)]
pub struct InvalidAtlasByte(pub u8);

impl TryFrom<u8> for AtlasCell {
    type Error = InvalidAtlasByte;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Self::VOID_U8 => Ok(Self::Void),
            Self::OPEN_U8 => Ok(Self::Open),
            Self::WALL_U8 => Ok(Self::Wall),
            invalid_byte => Err(InvalidAtlasByte(invalid_byte)),
        }
    }
}

/// The raw unfolded map. Rows of differing length are padded with `Void` on the right, so the
/// backing grid is always rectangular.
#[derive(Clone, Debug)]
pub struct Atlas(Grid<AtlasCell>);

impl Atlas {
    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.0.dimensions()
    }

    /// Returns the cell at `pos`, treating everything outside the grid as `Void`.
    pub fn cell(&self, pos: IVec2) -> AtlasCell {
        self.0.get(pos).copied().unwrap_or_default()
    }

    pub fn non_void_cell_count(&self) -> i32 {
        self.0
            .cells()
            .iter()
            .filter(|cell| !cell.is_void())
            .count() as i32
    }
}

impl TryFrom<&str> for Atlas {
    type Error = InvalidAtlasByte;

    fn try_from(atlas_str: &str) -> Result<Self, Self::Error> {
        let (width, height): (i32, i32) =
            atlas_str
                .split('\n')
                .fold((0_i32, 0_i32), |(max_width, height), atlas_row_str| {
                    (max_width.max(atlas_row_str.len() as i32), height + 1_i32)
                });

        let mut atlas: Self = Self(Grid::default(IVec2::new(width, height)));

        for (y, atlas_row_str) in atlas_str.split('\n').enumerate() {
            for (x, cell_byte) in atlas_row_str.bytes().enumerate() {
                *atlas.0.get_mut(IVec2::new(x as i32, y as i32)).unwrap() = cell_byte.try_into()?;
            }
        }

        Ok(atlas)
    }
}
