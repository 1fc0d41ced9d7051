use {
    crate::{
        atlas::{Atlas, AtlasCell},
        final_password,
        geom::{Direction, Orientation},
        moves::{Move, Moves},
        net::{Arrangement, CubeFace, NetError, Placement},
    },
    glam::IVec2,
    std::collections::HashSet,
    strum::{EnumCount, IntoEnumIterator},
};

/// One cube face's slice of the atlas: where it sits, how it is rotated, and its obstacles in
/// face-local, orientation-normalized coordinates. Immutable once built.
#[derive(Debug)]
pub struct SectorMap {
    /// Atlas coordinate of this sector's top-left cell
    top_left: IVec2,

    /// Rotation relative to the reference unfolding
    orientation: Orientation,

    side_len: i32,
    obstacles: HashSet<IVec2>,
}

impl SectorMap {
    fn new(atlas: &Atlas, placement: Placement, side_len: i32) -> Self {
        let top_left: IVec2 = placement.sector * side_len;
        let orientation: Orientation = placement.orientation;
        let mut obstacles: HashSet<IVec2> = HashSet::new();

        for y in 0_i32..side_len {
            for x in 0_i32..side_len {
                let local: IVec2 = IVec2::new(x, y);

                if atlas.cell(top_left + local) == AtlasCell::Wall {
                    obstacles.insert(orientation.passive_pos(local, side_len));
                }
            }
        }

        Self {
            top_left,
            orientation,
            side_len,
            obstacles,
        }
    }

    pub fn has_obstacle(&self, pos: IVec2) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Projects a face-local position and heading back onto the atlas.
    pub fn to_atlas(&self, pos: IVec2, dir: Direction) -> (IVec2, Direction) {
        let (pos, dir) = self.orientation.active(pos, dir, self.side_len);

        (pos + self.top_left, dir)
    }
}

#[derive(Debug, PartialEq)]
pub enum CubeError {
    CellCountIsNotSixSquares(i32),
    DimensionsAreNotMultiplesOfSideLen { dimensions: IVec2, side_len: i32 },
    CellOutsideSectorBlock(IVec2),
    OccupiedSectorCountIsNotSix(usize),
    Net(NetError),
}

/// The current face, the position within it (always in `[0, N)²`), and the heading, all in the
/// face's own coordinate frame. Transitions are pure; the walker returns fresh states instead of
/// mutating in place.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WalkState {
    pub face: CubeFace,
    pub pos: IVec2,
    pub dir: Direction,
}

/// The folded cube: one `SectorMap` per face plus the shared sector side length.
#[derive(Debug)]
pub struct Cube {
    sides: [SectorMap; CubeFace::COUNT],
    side_len: i32,
}

impl Cube {
    pub fn try_new(atlas: &Atlas) -> Result<Self, CubeError> {
        let side_len: i32 = Self::side_len_from_area(atlas)?;

        Self::validate_dimensions(atlas, side_len)?;

        let occupied: HashSet<IVec2> = Self::locate_sectors(atlas, side_len);

        Self::validate_sector_blocks(atlas, side_len, &occupied)?;

        if occupied.len() != CubeFace::COUNT {
            return Err(CubeError::OccupiedSectorCountIsNotSix(occupied.len()));
        }

        let arrangement: Arrangement = Arrangement::try_new(&occupied).map_err(CubeError::Net)?;
        let sides: [SectorMap; CubeFace::COUNT] = CubeFace::iter()
            .map(|face| SectorMap::new(atlas, arrangement[face], side_len))
            .collect::<Vec<SectorMap>>()
            .try_into()
            .unwrap();

        Ok(Self { sides, side_len })
    }

    #[inline]
    pub fn side_len(&self) -> i32 {
        self.side_len
    }

    /// Six faces tile the non-void area, so the side length is the square root of a sixth of the
    /// non-void cell count. Inferred from content rather than hard-coded for known input sizes.
    fn side_len_from_area(atlas: &Atlas) -> Result<i32, CubeError> {
        let non_void_count: i32 = atlas.non_void_cell_count();
        let side_len: f32 = (non_void_count as f32 / 6.0_f32).sqrt();

        if side_len % 1.0_f32 != 0.0_f32 || side_len == 0.0_f32 {
            Err(CubeError::CellCountIsNotSixSquares(non_void_count))
        } else {
            Ok(side_len as i32)
        }
    }

    fn validate_dimensions(atlas: &Atlas, side_len: i32) -> Result<(), CubeError> {
        let dimensions: IVec2 = atlas.dimensions();

        if dimensions % side_len != IVec2::ZERO {
            Err(CubeError::DimensionsAreNotMultiplesOfSideLen {
                dimensions,
                side_len,
            })
        } else {
            Ok(())
        }
    }

    /// A sector is occupied iff its top-left cell is non-void.
    fn locate_sectors(atlas: &Atlas, side_len: i32) -> HashSet<IVec2> {
        let num_sectors: IVec2 = atlas.dimensions() / side_len;
        let mut occupied: HashSet<IVec2> = HashSet::new();

        for y in 0_i32..num_sectors.y {
            for x in 0_i32..num_sectors.x {
                let sector: IVec2 = IVec2::new(x, y);

                if !atlas.cell(sector * side_len).is_void() {
                    occupied.insert(sector);
                }
            }
        }

        occupied
    }

    /// Every cell's void-ness must agree with its whole sector block; a half-filled block means
    /// the atlas does not tile into sectors at this side length.
    fn validate_sector_blocks(
        atlas: &Atlas,
        side_len: i32,
        occupied: &HashSet<IVec2>,
    ) -> Result<(), CubeError> {
        let dimensions: IVec2 = atlas.dimensions();

        for y in 0_i32..dimensions.y {
            for x in 0_i32..dimensions.x {
                let pos: IVec2 = IVec2::new(x, y);

                if atlas.cell(pos).is_void() == occupied.contains(&(pos / side_len)) {
                    return Err(CubeError::CellOutsideSectorBlock(pos));
                }
            }
        }

        Ok(())
    }

    #[inline]
    fn side(&self, face: CubeFace) -> &SectorMap {
        &self.sides[face as usize]
    }

    /// Advances one cell, crossing a face boundary if needed; `None` if an obstacle blocks the
    /// target cell.
    fn step(&self, state: WalkState) -> Option<WalkState> {
        let ahead: IVec2 = state.pos + state.dir.vec();

        if ahead.cmpge(IVec2::ZERO).all() && ahead.cmplt(IVec2::splat(self.side_len)).all() {
            (!self.side(state.face).has_obstacle(ahead)).then_some(WalkState {
                pos: ahead,
                ..state
            })
        } else {
            let (face, relative) = state.face.neighbor(state.dir);
            let pos: IVec2 = relative.passive_pos(ahead, self.side_len);
            let dir: Direction = relative.passive_dir(state.dir);

            (!self.side(face).has_obstacle(pos)).then_some(WalkState { face, pos, dir })
        }
    }

    /// Applies one move. A blocked step abandons the remainder of an advance without error.
    pub fn advance(&self, state: WalkState, mov: Move) -> WalkState {
        match mov {
            Move::Turn { left } => WalkState {
                dir: state.dir.turn(left),
                ..state
            },
            Move::Go(distance) => {
                let mut state: WalkState = state;

                for _ in 0_u32..distance {
                    match self.step(state) {
                        Some(next) => state = next,
                        None => break,
                    }
                }

                state
            }
        }
    }

    pub fn run(&self, moves: &Moves) -> WalkState {
        moves
            .0
            .iter()
            .copied()
            .fold(WalkState::default(), |state, mov| self.advance(state, mov))
    }

    pub fn to_atlas(&self, state: &WalkState) -> (IVec2, Direction) {
        self.side(state.face).to_atlas(state.pos, state.dir)
    }

    pub fn password(&self, state: &WalkState) -> i32 {
        let (pos, dir) = self.to_atlas(state);

        final_password(pos, dir)
    }
}
