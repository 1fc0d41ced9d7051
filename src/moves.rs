use {
    nom::{
        branch::alt,
        character::complete::{digit1, one_of},
        combinator::{map, map_res},
        multi::many1,
        IResult,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// One instruction from the move line: advance some number of cells, or turn in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Go(u32),
    Turn { left: bool },
}

impl Move {
    fn parse(input: &str) -> IResult<&str, Self> {
        alt((
            map(map_res(digit1, u32::from_str), Self::Go),
            map(one_of("LR"), |c: char| Self::Turn { left: c == 'L' }),
        ))(input)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Go(distance) => write!(f, "Go {distance}"),
            Self::Turn { left: true } => f.write_str("L"),
            Self::Turn { left: false } => f.write_str("R"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseMovesError {
    InvalidMoves(String),
    TrailingInput(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Moves(pub Vec<Move>);

impl TryFrom<&str> for Moves {
    type Error = ParseMovesError;

    fn try_from(moves_str: &str) -> Result<Self, Self::Error> {
        let moves_str: &str = moves_str.trim_end();
        let (remaining, moves): (&str, Vec<Move>) = many1(Move::parse)(moves_str)
            .map_err(|_| ParseMovesError::InvalidMoves(moves_str.into()))?;

        if remaining.is_empty() {
            Ok(Self(moves))
        } else {
            Err(ParseMovesError::TrailingInput(remaining.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_try_from_str() {
        use Move::*;

        assert_eq!(
            Moves::try_from("10R5L5R10L4R5L5\n"),
            Ok(Moves(vec![
                Go(10_u32),
                Turn { left: false },
                Go(5_u32),
                Turn { left: true },
                Go(5_u32),
                Turn { left: false },
                Go(10_u32),
                Turn { left: true },
                Go(4_u32),
                Turn { left: false },
                Go(5_u32),
                Turn { left: true },
                Go(5_u32),
            ]))
        );
    }

    #[test]
    fn test_moves_rejects_garbage() {
        assert_eq!(
            Moves::try_from("10X5"),
            Err(ParseMovesError::TrailingInput("X5".into()))
        );
        assert_eq!(
            Moves::try_from("x"),
            Err(ParseMovesError::InvalidMoves("x".into()))
        );
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Go(10_u32).to_string(), "Go 10");
        assert_eq!(Move::Turn { left: true }.to_string(), "L");
        assert_eq!(Move::Turn { left: false }.to_string(), "R");
    }
}
