use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use herbalist::{solve, Forest, PathLength};
use log::debug;

/// Print the shortest herb-gathering tour for each of the three puzzle parts.
#[derive(Parser, Debug)]
struct Args {
    /// Input for part 1.
    #[arg(default_value = "input1.txt")]
    part1: PathBuf,
    /// Input for part 2.
    #[arg(default_value = "input2.txt")]
    part2: PathBuf,
    /// Input for part 3.
    #[arg(default_value = "input3.txt")]
    part3: PathBuf,
}

fn solve_part(part: usize, path: &Path) -> Result<PathLength> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read input for part #{part} ({})", path.display()))?;
    let forest = src.parse::<Forest>()
        .with_context(|| format!("failed to parse forest for part #{part} ({})", path.display()))?;
    debug!("part #{part}: {} herb kinds in a {:?} forest", forest.herb_type_count(), forest.dims());

    let answer = solve(&forest)
        .with_context(|| format!("no tour for part #{part} ({})", path.display()))?;
    Ok(answer)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for (part, path) in [(1, &args.part1), (2, &args.part2), (3, &args.part3)] {
        let answer = solve_part(part, path)?;
        println!("The answer to part #{part} is {answer}");
    }

    Ok(())
}
