use std::{
    cmp::Ordering,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::info;
use merge_sort::{Sorter, Strategy, RECURSIVE_MERGE_LIMIT};

const STDIN_PATH: &str = "-";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let lines = read_lines(args.file.as_deref())?;

    let lines = if args.unique {
        lines.into_iter().unique().collect_vec()
    } else {
        lines
    };

    let sorter = Sorter::new(args.strategy.into()).with_recursion_limit(args.recursion_limit);
    info!("sorting {} lines with {:?}", lines.len(), sorter);
    let sorted = sort_lines(lines, &sorter, args.numeric, args.reverse)?;

    write_lines(&sorted)
}

/// Sort lines of text with a merge sort
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to sort, reads standard input when absent or `-`
    file: Option<PathBuf>,
    /// Drop repeated lines, keeping the first occurrence
    #[arg(short, long)]
    unique: bool,
    /// Sort in descending order
    #[arg(short, long)]
    reverse: bool,
    /// Compare lines as integers
    #[arg(short, long)]
    numeric: bool,
    /// How sorted halves are merged back together
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Accumulator)]
    strategy: StrategyArg,
    /// Largest input the recursive strategy accepts, capped at 16384
    #[arg(long, default_value_t = RECURSIVE_MERGE_LIMIT)]
    recursion_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Iterative merge, no size limit
    Accumulator,
    /// One call frame per merged element, bounded by --recursion-limit
    Recursive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Accumulator => Strategy::Accumulator,
            StrategyArg::Recursive => Strategy::Recursive,
        }
    }
}

fn read_lines(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read input")
}

fn sort_lines(
    lines: Vec<String>,
    sorter: &Sorter,
    numeric: bool,
    reverse: bool,
) -> anyhow::Result<Vec<String>> {
    let order = |ordering: Ordering| if reverse { ordering.reverse() } else { ordering };

    if numeric {
        let keyed = lines
            .into_iter()
            .map(|line| parse_numeric(&line).map(|key| (key, line)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let sorted = sorter.sort_by(keyed, |a, b| order(a.0.cmp(&b.0)))?;
        return Ok(sorted.into_iter().map(|(_, line)| line).collect_vec());
    }

    Ok(sorter.sort_by(lines, |a, b| order(a.cmp(b)))?)
}

fn parse_numeric(line: &str) -> anyhow::Result<i64> {
    line.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid number: {}", line))
}

fn write_lines(lines: &[String]) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    let mut write_to_output = |content: &[u8]| -> anyhow::Result<()> {
        if let Err(err) = stdout.write_all(content) {
            if err.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            } else {
                return Err(err.into());
            }
        }
        Ok(())
    };

    for line in lines {
        write_to_output(format!("{}\n", line).as_bytes())?;
    }

    Ok(())
}
