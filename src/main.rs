use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use tally::{interpreter::precedence::PrecedenceTable, repl::Session};

/// tally is an integer calculator with variables. Type expressions such as
/// `a * (b + 2)`, assignments such as `a = 5`, or `/help`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads session lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Ranks `*` and `/` equally, as in conventional arithmetic. By default
    /// `/` binds tighter than `*`.
    #[arg(short, long)]
    standard_precedence: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let precedence = if args.standard_precedence {
        PrecedenceTable::STANDARD
    } else {
        PrecedenceTable::DEFAULT
    };
    let mut session = Session::with_precedence(precedence);
    let stdout = io::stdout().lock();

    let result = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                std::process::exit(1);
            });
            session.run(BufReader::new(file), stdout)
        },
        None => session.run(io::stdin().lock(), stdout),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
