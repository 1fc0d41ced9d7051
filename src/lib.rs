pub mod atlas;
pub mod cube;
pub mod flat;
pub mod geom;
pub mod grid;
pub mod moves;
pub mod net;

pub use clap::Parser;

use {
    crate::{
        atlas::{Atlas, InvalidAtlasByte},
        geom::Direction,
        moves::{Moves, ParseMovesError},
    },
    glam::IVec2,
    memmap::Mmap,
    std::{
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Split, Utf8Error},
    },
};

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path
    #[arg(default_value_t = String::from("input/example.txt"))]
    pub input_file_path: String,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub question: u8,
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over its contents to
/// a provided callback function
///
/// # Safety
///
/// `Mmap::map` is unsafe: nothing prevents an external process from modifying the file while this
/// function refers to it as an immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

/// The password weighting convention: rows and columns are 1-based, and the facing codes are
/// right=0, down=1, left=2, up=3 (`Direction`'s discriminants).
pub fn final_password(pos: IVec2, dir: Direction) -> i32 {
    1_000_i32 * (pos.y + 1_i32) + 4_i32 * (pos.x + 1_i32) + dir as i32
}

#[derive(Debug, PartialEq)]
pub enum ParsePuzzleError {
    NoAtlasToken,
    FailedToParseAtlas(InvalidAtlasByte),
    NoMovesToken,
    FailedToParseMoves(ParseMovesError),
    ExtraTokenFound,
}

/// The full input: the unfolded atlas and the move list, separated by a blank line.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub atlas: Atlas,
    pub moves: Moves,
}

impl TryFrom<&str> for Puzzle {
    type Error = ParsePuzzleError;

    fn try_from(puzzle_str: &str) -> Result<Self, Self::Error> {
        use ParsePuzzleError::*;

        let mut token_iter: Split<&str> = puzzle_str.split("\n\n");

        let atlas: Atlas = token_iter
            .next()
            .ok_or(NoAtlasToken)?
            .try_into()
            .map_err(FailedToParseAtlas)?;
        let moves: Moves = token_iter
            .next()
            .ok_or(NoMovesToken)?
            .try_into()
            .map_err(FailedToParseMoves)?;

        if token_iter.next().is_some() {
            Err(ExtraTokenFound)
        } else {
            Ok(Self { atlas, moves })
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    const PUZZLE_STR: &str = concat!(
        "        ...#\n",
        "        .#..\n",
        "        #...\n",
        "        ....\n",
        "...#.......#\n",
        "........#...\n",
        "..#....#....\n",
        "..........#.\n",
        "        ...#....\n",
        "        .....#..\n",
        "        .#......\n",
        "        ......#.\n",
        "\n",
        "10R5L5R10L4R5L5",
    );

    #[test]
    fn test_puzzle_try_from_str() {
        let puzzle: Puzzle = PUZZLE_STR.try_into().unwrap();

        assert_eq!(puzzle.atlas.dimensions(), IVec2::new(16_i32, 12_i32));
        assert_eq!(puzzle.moves.0.len(), 13_usize);
    }

    #[test]
    fn test_puzzle_parse_errors() {
        assert!(matches!(
            Puzzle::try_from("...#"),
            Err(ParsePuzzleError::NoMovesToken)
        ));
        assert!(matches!(
            Puzzle::try_from("...#\n\n10R\n\nextra"),
            Err(ParsePuzzleError::ExtraTokenFound)
        ));
    }

    #[test]
    fn test_final_password_facing_codes() {
        for (code, dir) in Direction::iter().enumerate() {
            assert_eq!(final_password(IVec2::ZERO, dir), 1_004_i32 + code as i32);
        }
    }
}
