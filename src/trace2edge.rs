// trace2edge -- turn traceroute text into graph edges
// =============================================================================
// USAGE: see Usage below (./trace2edge -h)
// INPUT: traceroute text output from STDIN or a file
//        the hop address is the 3rd space-separated field of each line
//        lines whose 3rd field is * are dropped
//        lines starting with "traceroute" hold a slot but never pair
// OUTPUT: DOT edge list, one edge per line, e.g.,
//         "10.0.0.1" -- "10.0.0.2"

mod hops;

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use hops::HopResult;

// command line arguments
const HELP: &str = "\
Usage: trace2edge [OPTIONS] [file]

When [file] is empty or -, read traceroute text from STDIN
OPTIONS:
-h   print this help message
";

struct AppArgs {
    input: PathBuf,
}

fn parse_path(s: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(s.into())
}

fn getoption() -> Result<AppArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = AppArgs {
        input: pargs
            .opt_free_from_os_str(parse_path)?
            .unwrap_or_else(|| PathBuf::from("-")),
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments {:?}", rest),
        });
    }

    Ok(args)
}

// I/O helpers
fn openfile(path: &PathBuf) -> HopResult<BufReader<Box<dyn Read>>> {
    let input: Box<dyn Read + 'static> = if path.as_os_str() == "-" {
        Box::new(std::io::stdin())
    } else {
        Box::new(std::fs::File::open(path)?)
    };

    Ok(BufReader::new(input))
}

fn process<R: BufRead>(reader: R) -> HopResult<String> {
    let hops = hops::read_hops(reader)?;
    let n = hops::edges(&hops).count();
    log::info!("emitting {} edges", n);
    if n == 0 && !hops.is_empty() {
        log::warn!("{} hops read but no edges to emit", hops.len());
    }
    Ok(hops::render(&hops))
}

fn main() {
    env_logger::init();

    let args = match getoption() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    log::debug!("reading from {}", args.input.display());
    let out = match openfile(&args.input).and_then(process) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    println!("{}", out);
}
