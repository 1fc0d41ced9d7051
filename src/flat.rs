use {
    crate::{
        atlas::{Atlas, AtlasCell},
        geom::Direction,
        moves::{Move, Moves},
    },
    glam::IVec2,
    std::collections::HashSet,
};

/// The non-void extent of one row or column.
#[derive(Clone, Copy, Debug)]
struct Span {
    start: i32,
    end: i32,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: i32::MAX,
            end: i32::MIN,
        }
    }
}

/// Walks the atlas directly, wrapping around at the non-void extent of the current row or column
/// instead of folding into a cube.
pub struct FlatMaze {
    rows: Vec<Span>,
    cols: Vec<Span>,
    walls: HashSet<IVec2>,
}

impl FlatMaze {
    pub fn new(atlas: &Atlas) -> Self {
        let dimensions: IVec2 = atlas.dimensions();
        let mut rows: Vec<Span> = vec![Span::default(); dimensions.y as usize];
        let mut cols: Vec<Span> = vec![Span::default(); dimensions.x as usize];
        let mut walls: HashSet<IVec2> = HashSet::new();

        for y in 0_i32..dimensions.y {
            for x in 0_i32..dimensions.x {
                let pos: IVec2 = IVec2::new(x, y);

                match atlas.cell(pos) {
                    AtlasCell::Void => {}
                    cell => {
                        let row: &mut Span = &mut rows[y as usize];
                        let col: &mut Span = &mut cols[x as usize];

                        row.start = row.start.min(x);
                        row.end = row.end.max(x);
                        col.start = col.start.min(y);
                        col.end = col.end.max(y);

                        if cell == AtlasCell::Wall {
                            walls.insert(pos);
                        }
                    }
                }
            }
        }

        Self { rows, cols, walls }
    }

    /// The leftmost non-void cell of the top row, facing right.
    pub fn start(&self) -> (IVec2, Direction) {
        (IVec2::new(self.rows[0_usize].start, 0_i32), Direction::Right)
    }

    fn step(&self, pos: IVec2, dir: Direction) -> Option<IVec2> {
        let mut ahead: IVec2 = pos + dir.vec();

        // Unit steps only ever leave the span by one cell, so wrapping snaps to the far end.
        if dir.is_horizontal() {
            let span: Span = self.rows[pos.y as usize];

            if ahead.x < span.start {
                ahead.x = span.end;
            } else if ahead.x > span.end {
                ahead.x = span.start;
            }
        } else {
            let span: Span = self.cols[pos.x as usize];

            if ahead.y < span.start {
                ahead.y = span.end;
            } else if ahead.y > span.end {
                ahead.y = span.start;
            }
        }

        (!self.walls.contains(&ahead)).then_some(ahead)
    }

    pub fn advance(&self, pos: IVec2, dir: Direction, mov: Move) -> (IVec2, Direction) {
        match mov {
            Move::Turn { left } => (pos, dir.turn(left)),
            Move::Go(distance) => {
                let mut pos: IVec2 = pos;

                for _ in 0_u32..distance {
                    match self.step(pos, dir) {
                        Some(next) => pos = next,
                        None => break,
                    }
                }

                (pos, dir)
            }
        }
    }

    pub fn run(&self, moves: &Moves) -> (IVec2, Direction) {
        let (start_pos, start_dir) = self.start();

        moves
            .0
            .iter()
            .copied()
            .fold((start_pos, start_dir), |(pos, dir), mov| {
                self.advance(pos, dir, mov)
            })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::final_password};

    const ATLAS_STR: &str = concat!(
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
        "        ......#.",
    );

    fn maze() -> FlatMaze {
        FlatMaze::new(&ATLAS_STR.try_into().unwrap())
    }

    #[test]
    fn test_start() {
        assert_eq!(
            maze().start(),
            (IVec2::new(8_i32, 0_i32), Direction::Right)
        );
    }

    #[test]
    fn test_wrap_into_wall_blocks_move() {
        // Walking left from the start wraps to atlas (11,0), which is a wall; the move is a no-op.
        let maze: FlatMaze = maze();
        let (start_pos, _) = maze.start();

        assert_eq!(
            maze.advance(start_pos, Direction::Left, Move::Go(1_u32)),
            (start_pos, Direction::Left)
        );
    }

    #[test]
    fn test_example_walk_password() {
        let maze: FlatMaze = maze();
        let (pos, dir) = maze.run(&"10R5L5R10L4R5L5".try_into().unwrap());

        assert_eq!((pos, dir), (IVec2::new(7_i32, 5_i32), Direction::Right));
        assert_eq!(final_password(pos, dir), 6_032_i32);
    }
}
