//! Grid shortest-path demo.
//!
//! Run: cargo run --bin gridpath [-- <grid-file>] [--plain] [--verbose]
//!
//! Without a file the built-in 5x5 sample grid is solved. Grid files use one
//! row per line: `s` start, `e` end, `.` open, `X` blocked.

use std::error::Error;
use std::io;

use env_logger::{Builder, Env};

use gridpath_core::{Glyphs, Marker, MarkerGrid};
use gridpath_paths::{GraphBuilder, PathSearch};
use gridpath_term::{Palette, TermPrinter};

const SAMPLE_GRID: &str = include_str!("../grids/sample.txt");

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<grid-file>] [--plain] [--verbose]\n\n\
         Reads a square grid (s = start, e = end, . = open, X = blocked) and prints\n\
         a shortest 4-directional path from start to end.\n\
         Without <grid-file> the built-in sample grid is used.\n\n\
         --plain    disable colours\n\
         --verbose  log graph and search details to stderr (GRIDPATH_LOG=trace for more)"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    grid_file: Option<String>,
    plain: bool,
    verbose: bool,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--plain" => {
                if options.plain {
                    return Err(());
                }
                options.plain = true;
            }
            "--verbose" | "-v" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            flag if flag.starts_with('-') => return Err(()),
            _ => {
                if options.grid_file.is_some() {
                    return Err(());
                }
                options.grid_file = Some(arg);
            }
        }
    }

    Ok(options)
}

/// Logger reading its filter from the `var` environment variable, falling
/// back to `debug` with `--verbose` and `warn` otherwise.
fn log_builder(verbose: bool, var: &str) -> Builder {
    let default = if verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::new().filter_or(var, default));
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    builder
}

/// One line per non-open cell, used in debug output.
fn describe(grid: &MarkerGrid) -> String {
    let mut out = format!("{} grid", grid.bounds());
    for (p, m) in grid.iter().filter(|&(_, m)| m != Marker::Open) {
        out.push_str(&format!("\n  {p} {}", m.name()));
    }
    out
}

fn run(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let glyphs = Glyphs::default();
    let text = match &options.grid_file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read grid file {path}: {e}"))?,
        None => SAMPLE_GRID.to_owned(),
    };
    let grid = MarkerGrid::parse(&text, &glyphs)?;
    log::debug!("{}", describe(&grid));

    let palette = if options.plain {
        Palette::plain()
    } else {
        Palette::default()
    };
    let printer = TermPrinter::new(glyphs, palette);
    let mut stdout = io::stdout();

    printer.print(&mut stdout, &grid, None)?;
    println!();

    let mut graph = GraphBuilder::build(&grid)?;
    let mut search = PathSearch::new();
    let Some(path) = search.run(&mut graph) else {
        println!("No solution for this start-end combination");
        return Ok(());
    };

    printer.print(&mut stdout, &grid, Some(&path))?;
    println!();
    println!("{} moves: {path}", path.moves());
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "gridpath".to_owned());

    let Ok(options) = parse_options(args) else {
        print_usage(&program);
        std::process::exit(2);
    };

    log_builder(options.verbose, "GRIDPATH_LOG").init();

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]), Ok(CliOptions::default()));
    }

    #[test]
    fn file_and_flags() {
        assert_eq!(
            parse(&["grids/walled.txt", "--plain", "-v"]),
            Ok(CliOptions {
                grid_file: Some("grids/walled.txt".into()),
                plain: true,
                verbose: true,
            })
        );
    }

    #[test]
    fn rejects_duplicates_and_unknown_flags() {
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["--plain", "--plain"]).is_err());
        assert!(parse(&["--fast"]).is_err());
    }

    #[test]
    fn verbose_selects_debug_level() {
        use log::LevelFilter;

        // Variable name that is never set, so the default applies.
        let var = "GRIDPATH_TEST_UNSET_LOG";
        assert_eq!(log_builder(true, var).build().filter(), LevelFilter::Debug);
        assert_eq!(log_builder(false, var).build().filter(), LevelFilter::Warn);
    }

    #[test]
    fn describe_lists_non_open_cells() {
        let g: MarkerGrid = "sX\n.e".parse().unwrap();
        assert_eq!(
            describe(&g),
            "2x2 grid\n  (0, 0) start\n  (0, 1) blocked\n  (1, 1) end"
        );
    }

    #[test]
    fn bundled_sample_is_solvable() {
        let grid: MarkerGrid = SAMPLE_GRID.parse().unwrap();
        let mut graph = GraphBuilder::build(&grid).unwrap();
        let path = PathSearch::new().run(&mut graph).unwrap();
        assert_eq!(path.moves(), 3);
    }

    #[test]
    fn bundled_grids_behave() {
        let walled: MarkerGrid = include_str!("../grids/walled.txt").parse().unwrap();
        assert_eq!(gridpath_paths::minimum_moves(&walled), Ok(Some(14)));
        let blocked: MarkerGrid = include_str!("../grids/blocked.txt").parse().unwrap();
        assert_eq!(gridpath_paths::minimum_moves(&blocked), Ok(None));
    }
}
