use {
    glam::IVec2,
    netwalk::{
        cube::{Cube, WalkState},
        final_password,
        flat::FlatMaze,
        geom::Direction,
        open_utf8_file, Args, Parser, Puzzle,
    },
    std::process,
};

fn solve(args: &Args, puzzle: &Puzzle) {
    if args.question != 2_u8 {
        let maze: FlatMaze = FlatMaze::new(&puzzle.atlas);
        let (pos, dir) = maze.run(&puzzle.moves);

        println!("Part 1: {}", final_password(pos, dir));
    }

    if args.question != 1_u8 {
        match Cube::try_new(&puzzle.atlas) {
            Ok(cube) => {
                let mut state: WalkState = WalkState::default();

                for mov in puzzle.moves.0.iter().copied() {
                    state = cube.advance(state, mov);

                    let (pos, dir): (IVec2, Direction) = cube.to_atlas(&state);

                    println!("{mov} -> ({},{}), facing {dir:?}", pos.x, pos.y);
                }

                println!("Part 2: {}", cube.password(&state));
            }
            Err(error) => panic!("{error:#?}"),
        }
    }
}

fn main() {
    let args: Args = Args::parse();
    let input_file_path: &str = &args.input_file_path;

    if let Err(error) =
        // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file while
        // this program is executing
        unsafe {
            open_utf8_file(input_file_path, |input: &str| match Puzzle::try_from(input) {
                Ok(puzzle) => solve(&args, &puzzle),
                Err(error) => panic!("{error:#?}"),
            })
        }
    {
        eprintln!("Could not load input from \"{input_file_path}\": {error}");

        process::exit(1_i32);
    }
}
