// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
    rc::Rc,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, warn};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use battlegrid::{
    ai::RandomAi,
    board::{
        CannotPlaceReason, CannotShootReason, Dimensions, Grid, GridListener, GuessCell,
        GuessResult, LayoutSetup,
    },
    game::{Game, GameConfig, DEFAULT_SHIP_SIZES},
    ships::Orientation,
};

mod logging;

/// Index of the grid holding the computer's fleet, which the human shoots at.
const COMPUTER_GRID: usize = 0;
/// Index of the grid holding the human's fleet, which the computer shoots at.
const HUMAN_GRID: usize = 1;

/// Matcher for a pair of coordinates, separated by a comma or whitespace.
static SHOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$").unwrap()
});

fn main() -> io::Result<()> {
    logging::init_logging();

    let default_ships = DEFAULT_SHIP_SIZES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Simple command line battleship game.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .value_name("COLUMNS")
                .help("number of columns of each board")
                .default_value("10"),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows of each board")
                .default_value("10"),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("SIZES")
                .help("comma separated sizes of the ships in each fleet")
                .default_value(&default_ships),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the computer's layout and moves")
                .takes_value(true),
        )
        .get_matches();

    let config = parse_config(&matches);
    let mut rng = config.rng();

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let human_first = choose_first(&matches, &mut rng, &mut input)?;

    let computer = config
        .random_opponent(&mut rng)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let mut setup = config.layout_setup();
    choose_placements(&mut rng, &mut setup, &mut input)?;
    let human = match setup.start() {
        Ok(opponent) => opponent,
        Err(_) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "ship placement was not complete",
            ))
        }
    };

    let mut grids = vec![Grid::new(computer), Grid::new(human)];
    for (index, grid) in grids.iter_mut().enumerate() {
        grid.add_listener(change_logger(index));
    }
    let mut game = Game::new(grids).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let mut ai = RandomAi::new(rng);

    let mut human_turn = human_first;
    while !game.is_finished() {
        if human_turn {
            human_shoot(&mut game, &mut input)?;
        } else {
            computer_shoot(&mut game, &mut ai)?;
        }
        human_turn = !human_turn;
    }

    println!();
    show_boards(&game);
    match game.finished_grid() {
        Some(COMPUTER_GRID) => println!("You sank the whole enemy fleet. You win!"),
        Some(_) => println!("Your fleet was sunk. You lose!"),
        None => {}
    }
    Ok(())
}

/// Build the [`GameConfig`] from the command line, exiting with a usage error if any
/// value is invalid.
fn parse_config(matches: &ArgMatches) -> GameConfig {
    let columns = value_t!(matches, "columns", i32).unwrap_or_else(|e| e.exit());
    let rows = value_t!(matches, "rows", i32).unwrap_or_else(|e| e.exit());
    let dimensions = Dimensions::try_new(columns, rows).unwrap_or_else(|| {
        clap::Error::with_description(
            &format!("invalid board size {}x{}", columns, rows),
            clap::ErrorKind::InvalidValue,
        )
        .exit()
    });
    let ship_sizes = matches
        .value_of("ships")
        .unwrap_or_default()
        .split(',')
        .map(|size| size.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            clap::Error::with_description(
                &format!("invalid ship sizes: {}", e),
                clap::ErrorKind::InvalidValue,
            )
            .exit()
        });
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let config = GameConfig {
        dimensions,
        ship_sizes,
        seed,
    };
    if !config.fleet_fits() {
        clap::Error::with_description(
            &format!(
                "ships {:?} do not fit on a {}x{} board",
                config.ship_sizes, columns, rows
            ),
            clap::ErrorKind::InvalidValue,
        )
        .exit()
    }
    config
}

/// Listener that logs every change to the grid with the given index.
fn change_logger(index: usize) -> Rc<dyn GridListener> {
    Rc::new(move |grid: &Grid, column: i32, row: i32| {
        debug!(
            "grid {} changed at ({}, {}): {:?}, sunk {:?}",
            index,
            column,
            row,
            grid.get(column, row),
            grid.ships_sunk()
        );
    })
}

/// Choose whether the human goes first based on either args or cli input.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut impl Rng,
    input: &mut InputReader<B>,
) -> io::Result<bool> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => true,
            "computer" | "bot" => false,
            _ => rng.gen(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(true),
            "no" | "n" | "second" | "2" | "2nd" => Some(false),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Choose placements for all ships using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    setup: &mut LayoutSetup,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Done,
        Place(usize, i32, i32, Orientation),
        Unplace(usize),
        Clear,
        RandomizeRest,
        Help,
    }
    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        println!();
        /// Matcher for commands with args.
        static PLACE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:place|put)\s+
        (?P<ship>[0-9]+)\s+
        (?:(?:at|on|to|->|=>)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)\s+
        (?P<dir>\w+)$",
            )
            .unwrap()
        });
        static UNPLACE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:un-?place|remove)\s+
        (?P<ship>[0-9]+|all)$",
            )
            .unwrap()
        });

        if setup.ready() {
            println!("All ships placed, type done to start the game");
        } else {
            let pending = setup
                .pending_ships()
                .map(|index| ShipName(index, setup.size(index).unwrap_or(0)).to_string())
                .collect::<Vec<_>>();
            println!("Remaining ships to place: {}", pending.join(", "));
        }
        println!("Your current board setup:");
        show_setup_board(setup);
        println!();

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            "done" | "start" => Some(Command::Done),
            "clear" => Some(Command::Clear),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let number =
                        |name: &str| captures.name(name).map(|m| m.as_str().parse::<i32>());
                    let ship = match captures.name("ship").map(|m| m.as_str().parse::<usize>()) {
                        Some(Ok(ship)) => ship,
                        _ => {
                            println!("invalid ship number");
                            return None;
                        }
                    };
                    let (x, y) = match (number("x"), number("y")) {
                        (Some(Ok(x)), Some(Ok(y))) => (x, y),
                        _ => {
                            println!("invalid coordinates");
                            return None;
                        }
                    };
                    let dir = match captures.name("dir").map(|m| m.as_str()) {
                        Some("horizontal") | Some("h") | Some("right") | Some("r") => {
                            Orientation::Horizontal
                        }
                        Some("vertical") | Some("v") | Some("down") | Some("d") => {
                            Orientation::Vertical
                        }
                        other => {
                            println!(
                                "invalid direction {}, choose \"horizontal\" or \"vertical\"",
                                other.unwrap_or_default()
                            );
                            return None;
                        }
                    };
                    Some(Command::Place(ship, x, y, dir))
                } else if let Some(captures) = UNPLACE.captures(other) {
                    match captures.name("ship").map(|m| m.as_str()) {
                        Some("all") => Some(Command::Clear),
                        Some(ship) => match ship.parse() {
                            Ok(ship) => Some(Command::Unplace(ship)),
                            Err(_) => {
                                println!("invalid ship number {}", ship);
                                None
                            }
                        },
                        None => None,
                    }
                } else {
                    println!(
                        "Invalid ship-placement command \"{}\". Use '?' for help",
                        other
                    );
                    None
                }
            }
        })?;

        match cmd {
            Command::Done if setup.ready() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(ship, x, y, dir) => {
                let previous = setup.unplace(ship);
                if let Err(err) = setup.place(ship, x, y, dir) {
                    match err.reason() {
                        CannotPlaceReason::UnknownShip => {
                            println!("Invalid placement: there is no ship {}.", ship)
                        }
                        CannotPlaceReason::AlreadyOccupied => {
                            println!("Invalid placement: overlaps existing ship.")
                        }
                        CannotPlaceReason::InsufficientSpace => {
                            println!("Invalid placement: not enough space on the board.")
                        }
                        CannotPlaceReason::AlreadyPlaced => println!("{}", err),
                    }
                    if let Some(previous) = previous {
                        // Put the ship back where it was.
                        if let Err(err) = setup.place(
                            ship,
                            previous.left(),
                            previous.top(),
                            previous.orientation(),
                        ) {
                            warn!("could not restore ship {}: {}", ship, err);
                        }
                    }
                }
            }
            Command::Unplace(ship) => {
                setup.unplace(ship);
            }
            Command::Clear => setup.clear(),
            Command::RandomizeRest => {
                if let Err(err) = setup.randomize_rest(rng) {
                    println!("Could not place the remaining ships: {}", err);
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    done                        if all ships are placed, start the game.
    place <ship> <x>,<y> <dir>  place the ship at the given coordinate in the given direction.
        Possible directions are \"horizontal\" (\"h\") and \"vertical\" (\"v\").
        Ships are given by their number, see the list of remaining ships.
    unplace <ship>              clear the placement of the specified ship.
        Additionally \"all\" may be specified to clear all placements.
    clear                       clears all ship placements.
    randomize                   randomize the placements of the remaining ships."
                );
            }
        }
    }
    Ok(())
}

/// Ask the human for a target until a legal shot is made, then report it.
fn human_shoot(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    println!();
    show_boards(game);
    loop {
        let (x, y) = input.read_input("Your shot (x,y):", |input| {
            let captures = match SHOT.captures(input) {
                Some(captures) => captures,
                None => {
                    println!("Enter a shot as x,y");
                    return None;
                }
            };
            let number = |name: &str| captures.name(name).map(|m| m.as_str().parse::<i32>());
            match (number("x"), number("y")) {
                (Some(Ok(x)), Some(Ok(y))) => Some((x, y)),
                _ => {
                    println!("Coordinates are too large");
                    None
                }
            }
        })?;
        let grid = match game.grid_mut(COMPUTER_GRID) {
            Some(grid) => grid,
            None => return Ok(()),
        };
        match grid.shoot(x, y) {
            Ok(result) => {
                println!("You fire at ({}, {}): {}", x, y, ShotReport(result, grid));
                return Ok(());
            }
            Err(err) => match err.reason() {
                CannotShootReason::OutOfBounds => println!(
                    "({}, {}) is not on the board, which is {}x{}.",
                    x,
                    y,
                    grid.columns(),
                    grid.rows()
                ),
                CannotShootReason::AlreadyShot => {
                    println!("You already fired at ({}, {}).", x, y)
                }
            },
        }
    }
}

/// Let the computer take its turn and report it.
fn computer_shoot(game: &mut Game, ai: &mut RandomAi<impl Rng>) -> io::Result<()> {
    let grid = match game.grid_mut(HUMAN_GRID) {
        Some(grid) => grid,
        None => return Ok(()),
    };
    let target = ai.choose(grid).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Other,
            "the computer has no cells left to shoot",
        )
    })?;
    let result = grid
        .shoot(target.x, target.y)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    println!("The computer fires at {}: {}", target, ShotReport(result, grid));
    Ok(())
}

/// Display helper describing the outcome of a shot.
struct ShotReport<'a>(GuessResult, &'a Grid);

impl fmt::Display for ShotReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = |ship: usize| self.1.opponent().ship(ship).map_or(0, |s| s.size());
        match self.0 {
            GuessResult::Miss => f.write_str("miss"),
            GuessResult::Hit(ship) => write!(f, "hit {}", ShipName(ship, size(ship))),
            GuessResult::Sunk(ship) => write!(f, "sunk {}!", ShipName(ship, size(ship))),
        }
    }
}

/// Print the computer's board as seen by the human, then the human's own board.
fn show_boards(game: &Game) {
    if let Some(grid) = game.grid(COMPUTER_GRID) {
        println!("Enemy waters:");
        show_obfuscated_board(grid);
    }
    if let Some(grid) = game.grid(HUMAN_GRID) {
        println!("Your fleet:");
        show_revealed_board(grid);
    }
}

/// Print out the setup board.
fn show_setup_board(setup: &LayoutSetup) {
    enum SetupCell {
        Empty,
        Ship(ShipLabel),
    }
    impl fmt::Display for SetupCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                SetupCell::Empty => f.pad("~~"),
                SetupCell::Ship(label) => fmt::Display::fmt(label, f),
            }
        }
    }
    show_board(
        setup.dimensions().columns(),
        setup.iter_board().map(|row| {
            row.map(|cell| match cell {
                Some(ship) => SetupCell::Ship(ShipLabel(ship)),
                None => SetupCell::Empty,
            })
        }),
    )
}

/// Print out the fully-revealed board for a grid.
fn show_revealed_board(grid: &Grid) {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipLabel),
        Hit(ShipLabel),
        Sunk(ShipLabel),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(ship) => fmt::Display::fmt(ship, f),
                RevealedCell::Hit(ship) => f.pad(&format!("x{}", ship)),
                RevealedCell::Sunk(ship) => f.pad(&format!("X{}", ship)),
            }
        }
    }
    show_board(
        grid.columns(),
        grid.guesses().rows().enumerate().map(|(y, row)| {
            row.enumerate().map(move |(x, cell)| {
                let ship = grid.opponent().ship_at(x as i32, y as i32).map(|(i, _)| i);
                match (cell.copied().unwrap_or_default(), ship) {
                    (GuessCell::Sunk(ship), _) => RevealedCell::Sunk(ShipLabel(ship)),
                    (GuessCell::Hit(ship), _) => RevealedCell::Hit(ShipLabel(ship)),
                    (GuessCell::Miss, _) => RevealedCell::Shot,
                    (GuessCell::Unset, Some(ship)) => RevealedCell::NotShot(ShipLabel(ship)),
                    (GuessCell::Unset, None) => RevealedCell::Empty,
                }
            })
        }),
    )
}

/// Print out the obfuscated board for a grid.
fn show_obfuscated_board(grid: &Grid) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk(ShipLabel),
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~~"),
                HiddenCell::Miss => f.pad("x"),
                HiddenCell::Hit => f.pad("*"),
                HiddenCell::Sunk(ship) => f.pad(&format!("X{}", ship)),
            }
        }
    }
    show_board(
        grid.columns(),
        grid.guesses().rows().map(|row| {
            row.map(|cell| match cell.copied().unwrap_or_default() {
                GuessCell::Unset => HiddenCell::NotShot,
                GuessCell::Miss => HiddenCell::Miss,
                GuessCell::Hit(_) => HiddenCell::Hit,
                GuessCell::Sunk(ship) => HiddenCell::Sunk(ShipLabel(ship)),
            })
        }),
    )
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(columns: i32, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 0..columns {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Display helper that prints a ship's number and size.
struct ShipName(usize, usize);

impl fmt::Display for ShipName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ship {} (size {})", self.0, self.1)
    }
}

/// Display helper that prints a ship's short label on the board.
struct ShipLabel(usize);

impl fmt::Display for ShipLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
