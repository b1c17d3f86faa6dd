#[macro_use]
extern crate log;
#[macro_use]
extern crate bitonic_union;

use {
    bitonic_union::{bitonic, DisjointSet},
    clap::{Parser, Subcommand},
    simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode},
};

/// Search bitonic arrays and join disjoint sets from the command line.
#[derive(Debug, Parser)]
#[command(name = "bitonic-union", version, about)]
struct Cli {
    /// Most verbose level of log messages written to stderr.
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search a value in a bitonic array.
    Search {
        /// The value to look for.
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        /// The bitonic array.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Join pairs of elements and print the resulting sets.
    Unions {
        /// The amount of elements.
        #[arg(long)]
        size: usize,
        /// Pairs to join, written as `first-second`.
        #[arg(value_parser = parse_pair)]
        pairs: Vec<(usize, usize)>,
    },
    /// Run a fixed scenario for both the search and the disjoint sets.
    Demo,
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level.parse().map_err(|_| format!("`{}` is not a log level", level))
}

fn parse_pair(pair: &str) -> Result<(usize, usize), String> {
    let (first, second) = pair
        .split_once('-')
        .ok_or_else(|| format!("`{}` is not of the form `first-second`", pair))?;
    let first = first.trim().parse().map_err(|error| format!("`{}`: {}", first, error))?;
    let second = second.trim().parse().map_err(|error| format!("`{}`: {}", second, error))?;

    Ok((first, second))
}

fn print_sets(disjoint_set: &DisjointSet) -> Result<(), bitonic_union::Error> {
    println!("{} sets", disjoint_set.count());

    for set in disjoint_set.all_sets() {
        // Sets are never empty.
        if let Some(&first) = set.first() {
            println!("{:?} max {}", set, disjoint_set.find_max(first)?);
        }
    }

    Ok(())
}

fn demo() -> Result<(), bitonic_union::Error> {
    let array = [1, 2, 3, 5, 4];
    for target in &[5, 4, 6] {
        println!("search({:?}, {}) = {:?}", array, target, bitonic::search(&array, target)?);
    }

    let mut disjoint_set = disjoint_set![10; 0 => 1, 3 => 2]?;
    println!("count() is 8: {}", disjoint_set.count());
    println!("connected(0, 1) is true: {}", disjoint_set.connected(0, 1)?);
    println!("connected(1, 2) is false: {}", disjoint_set.connected(1, 2)?);

    disjoint_set.union(4, 0)?;
    println!("count() is 7: {}", disjoint_set.count());
    println!("connected(4, 1) is true: {}", disjoint_set.connected(4, 1)?);

    disjoint_set.union(5, 6)?;
    disjoint_set.union(7, 8)?;
    disjoint_set.union(6, 7)?;
    disjoint_set.union(2, 5)?;
    println!("count() is 3: {}", disjoint_set.count());
    println!("connected(3, 8) is true: {}", disjoint_set.connected(3, 8)?);
    println!("connected(3, 0) is false: {}", disjoint_set.connected(3, 0)?);

    disjoint_set.union(0, 8)?;
    println!("count() is 2: {}", disjoint_set.count());
    println!("connected(3, 0) is true: {}", disjoint_set.connected(3, 0)?);
    println!("connected(0, 9) is false: {}", disjoint_set.connected(0, 9)?);
    println!("find_max(0) is 8: {}", disjoint_set.find_max(0)?);
    println!("find_max(9) is 9: {}", disjoint_set.find_max(9)?);

    print_sets(&disjoint_set)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("running {:?}", cli.command);

    match cli.command {
        Command::Search { target, values } => {
            match bitonic::search(&values, &target)? {
                Some(index) => println!("{}", index),
                None => println!("not found"),
            }
        },
        Command::Unions { size, pairs } => {
            let mut disjoint_set = DisjointSet::new(size)?;

            for (first, second) in pairs {
                disjoint_set.union(first, second)?;
            }

            print_sets(&disjoint_set)?;
        },
        Command::Demo => demo()?,
    }

    Ok(())
}
