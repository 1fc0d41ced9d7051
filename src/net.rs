use {
    crate::geom::{Direction, Orientation},
    glam::IVec2,
    static_assertions::const_assert,
    std::{collections::HashSet, ops::Index},
    strum::{EnumCount, EnumIter, IntoEnumIterator},
};

/// One of the six faces of the cube.
///
/// Orientations are always expressed relative to this reference unfolding:
///
/// ```text
///         +---+
///         | B |
/// +---+---+---+
/// | L | T | R |
/// +---+---+---+
///         | F |
///         +---+
///         | D |
/// ```
///
/// (`B` = back, `L` = left, `T` = top, `R` = right, `F` = front, `D` = bottom.) Crossing an edge
/// that is joined in this unfolding leaves the orientation unchanged; crossing an edge that is cut
/// picks up the relative orientation recorded in `NEIGHBORS`. A relative orientation of
/// `RotRight`, say, means the destination face has to be rotated clockwise before it lines up with
/// the face being exited.
#[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum CubeFace {
    #[default]
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

const_assert!(CubeFace::COUNT == 6_usize);

/// `NEIGHBORS[face][direction]` is the face entered when walking off `face` in `direction` (with
/// `face` in its reference orientation), along with the relative orientation picked up by the
/// crossing. Rows are indexed by `Direction`'s discriminants: right, down, left, up.
const NEIGHBORS: [[(CubeFace, Orientation); Direction::COUNT]; CubeFace::COUNT] = {
    use {CubeFace::*, Orientation::*};

    [
        // Top
        [
            (Right, Identity),
            (Front, Identity),
            (Left, Identity),
            (Back, Identity),
        ],
        // Left
        [
            (Top, Identity),
            (Front, RotRight),
            (Bottom, Rot180),
            (Back, RotLeft),
        ],
        // Front
        [
            (Right, RotRight),
            (Bottom, Identity),
            (Left, RotLeft),
            (Top, Identity),
        ],
        // Right
        [
            (Bottom, Rot180),
            (Front, RotLeft),
            (Top, Identity),
            (Back, RotRight),
        ],
        // Back
        [
            (Right, RotLeft),
            (Top, Identity),
            (Left, RotRight),
            (Bottom, Identity),
        ],
        // Bottom
        [
            (Right, Rot180),
            (Back, Identity),
            (Left, Rot180),
            (Front, Identity),
        ],
    ]
};

impl CubeFace {
    /// The neighbor reached by walking off this face in `dir`, assuming the reference orientation.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> (Self, Orientation) {
        NEIGHBORS[self as usize][dir as usize]
    }

    /// The neighbor reached by walking off this face in `dir` when the face currently sits at
    /// `orientation`: the heading is first re-expressed in the reference frame, and the crossing's
    /// relative orientation composes onto the starting one.
    pub fn neighbor_oriented(self, dir: Direction, orientation: Orientation) -> (Self, Orientation) {
        let (face, relative) = self.neighbor(orientation.passive_dir(dir));

        (face, relative.compose(orientation))
    }
}

/// Where one cube face lives in the atlas: its sector coordinate (in units of sectors) and its
/// rotation relative to the reference unfolding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub sector: IVec2,
    pub orientation: Orientation,
}

#[derive(Debug, PartialEq)]
pub enum NetError {
    NoOccupiedSectors,
    ConflictingFaceAssignment {
        face: CubeFace,
        existing: Placement,
        found: Placement,
    },
    MissingFace(CubeFace),
}

/// The solved mapping from each cube face to its sector placement.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Arrangement([Placement; CubeFace::COUNT]);

impl Arrangement {
    /// Assigns a face and orientation to every occupied sector.
    ///
    /// The leftmost sector of the topmost occupied row is seeded as `(Top, Identity)`, and the
    /// rest follow by walking sector adjacency and composing orientations through `NEIGHBORS`.
    /// Rather than stopping once 6 faces are known, every queued edge is processed and re-checked
    /// against the recorded placement; a subtly wrong adjacency table or an atlas that does not
    /// fold into a cube fails loudly here instead of producing a wrong answer.
    pub fn try_new(occupied: &HashSet<IVec2>) -> Result<Self, NetError> {
        let seed: IVec2 = occupied
            .iter()
            .copied()
            .min_by_key(|sector| (sector.y, sector.x))
            .ok_or(NetError::NoOccupiedSectors)?;

        let mut placements: [Option<Placement>; CubeFace::COUNT] = [None; CubeFace::COUNT];
        let mut pending: Vec<(IVec2, CubeFace, Orientation)> =
            vec![(seed, CubeFace::Top, Orientation::Identity)];

        while let Some((sector, face, orientation)) = pending.pop() {
            let found: Placement = Placement {
                sector,
                orientation,
            };

            if let Some(existing) = placements[face as usize] {
                if existing != found {
                    return Err(NetError::ConflictingFaceAssignment {
                        face,
                        existing,
                        found,
                    });
                }

                continue;
            }

            placements[face as usize] = Some(found);

            for dir in Direction::iter() {
                let neighbor_sector: IVec2 = sector + dir.vec();

                if occupied.contains(&neighbor_sector) {
                    let (neighbor_face, neighbor_orientation) =
                        face.neighbor_oriented(dir, orientation);

                    pending.push((neighbor_sector, neighbor_face, neighbor_orientation));
                }
            }
        }

        let mut arrangement: [Placement; CubeFace::COUNT] = [Placement {
            sector: IVec2::ZERO,
            orientation: Orientation::Identity,
        }; CubeFace::COUNT];

        for face in CubeFace::iter() {
            arrangement[face as usize] =
                placements[face as usize].ok_or(NetError::MissingFace(face))?;
        }

        Ok(Self(arrangement))
    }
}

impl Index<CubeFace> for Arrangement {
    type Output = Placement;

    fn index(&self, face: CubeFace) -> &Self::Output {
        &self.0[face as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(sectors: &[(i32, i32)]) -> HashSet<IVec2> {
        sectors.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn test_neighbors_are_distinct() {
        for face in CubeFace::iter() {
            let neighbor_faces: HashSet<CubeFace> = Direction::iter()
                .map(|dir| face.neighbor(dir).0)
                .collect();

            assert_eq!(neighbor_faces.len(), Direction::COUNT);
            assert!(!neighbor_faces.contains(&face));
        }
    }

    #[test]
    fn test_neighbor_reciprocity() {
        // Crossing an edge and immediately stepping straight back must return to the source face
        // with no net rotation. Both crossings are expressed in the atlas frame, so the return
        // heading is plain `dir.rev()` against the neighbor's composed orientation.
        for face in CubeFace::iter() {
            for dir in Direction::iter() {
                let (neighbor_face, relative) = face.neighbor(dir);

                assert_eq!(
                    neighbor_face.neighbor_oriented(dir.rev(), relative),
                    (face, Orientation::Identity)
                );
            }
        }
    }

    #[test]
    fn test_arrangement_for_example_net() {
        // The published example net:
        //
        //     ..T.
        //     BLF.
        //     ..DR
        let arrangement: Arrangement = Arrangement::try_new(&occupied(&[
            (2_i32, 0_i32),
            (0_i32, 1_i32),
            (1_i32, 1_i32),
            (2_i32, 1_i32),
            (2_i32, 2_i32),
            (3_i32, 2_i32),
        ]))
        .unwrap();

        let placement = |x: i32, y: i32, orientation: Orientation| Placement {
            sector: IVec2::new(x, y),
            orientation,
        };

        assert_eq!(
            arrangement[CubeFace::Top],
            placement(2_i32, 0_i32, Orientation::Identity)
        );
        assert_eq!(
            arrangement[CubeFace::Front],
            placement(2_i32, 1_i32, Orientation::Identity)
        );
        assert_eq!(
            arrangement[CubeFace::Left],
            placement(1_i32, 1_i32, Orientation::RotLeft)
        );
        assert_eq!(
            arrangement[CubeFace::Back],
            placement(0_i32, 1_i32, Orientation::Rot180)
        );
        assert_eq!(
            arrangement[CubeFace::Bottom],
            placement(2_i32, 2_i32, Orientation::Identity)
        );
        assert_eq!(
            arrangement[CubeFace::Right],
            placement(3_i32, 2_i32, Orientation::Rot180)
        );
    }

    #[test]
    fn test_arrangement_rejects_rectangle() {
        // A 2×3 rectangle of sectors contains a 4-cycle of faces whose orientations cannot agree.
        assert!(matches!(
            Arrangement::try_new(&occupied(&[
                (0_i32, 0_i32),
                (1_i32, 0_i32),
                (2_i32, 0_i32),
                (0_i32, 1_i32),
                (1_i32, 1_i32),
                (2_i32, 1_i32),
            ])),
            Err(NetError::ConflictingFaceAssignment { .. })
        ));
    }

    #[test]
    fn test_arrangement_rejects_disconnected_sectors() {
        assert!(matches!(
            Arrangement::try_new(&occupied(&[
                (0_i32, 0_i32),
                (2_i32, 0_i32),
                (4_i32, 0_i32),
                (0_i32, 2_i32),
                (2_i32, 2_i32),
                (4_i32, 2_i32),
            ])),
            Err(NetError::MissingFace(_))
        ));
    }

    #[test]
    fn test_arrangement_requires_sectors() {
        assert_eq!(
            Arrangement::try_new(&HashSet::new()).unwrap_err(),
            NetError::NoOccupiedSectors
        );
    }
}
