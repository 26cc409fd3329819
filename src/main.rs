use clap::{Parser, ValueEnum};
use log::debug;
use max_pool::input::{read_problem, InputError, Problem};
use max_pool::{render, Algorithm, Element, WindowMaxReducer};

use std::fmt::Display;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Naive,
    Deque,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Naive => Algorithm::Naive,
            AlgorithmArg::Deque => Algorithm::MonotonicDeque,
        }
    }
}

/// Sliding-window maximum of a matrix.
///
/// Without an input file the matrix is read interactively from stdin.
#[derive(Parser, Debug)]
struct Args {
    /// File with the row count, the rows and the window size, one per line
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// Window size, replacing the last line of the input
    #[clap(short, long, value_parser, allow_hyphen_values = true)]
    window_size: Option<i64>,

    #[clap(short, long, value_enum, default_value = "deque")]
    algorithm: AlgorithmArg,

    /// Parse elements as floating point numbers instead of integers
    #[clap(long, action)]
    float: bool,

    /// Only print the pooled matrix
    #[clap(short, long, action)]
    quiet: bool,
}

fn run<T>(args: &Args) -> Result<(), InputError>
where
    T: Element + FromStr + Display,
{
    let Problem {
        matrix,
        window_size,
    } = match &args.input {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            read_problem(BufReader::new(file), &mut io::sink(), args.window_size)?
        }
        None => read_problem(io::stdin().lock(), &mut io::stdout(), args.window_size)?,
    };

    let reducer = WindowMaxReducer::new(args.algorithm.into());
    let start = Instant::now();
    let pooled = reducer.reduce::<T>(matrix.view(), window_size)?;
    debug!("Pooling took {} us", start.elapsed().as_micros());

    if !args.quiet {
        println!("Original matrix:");
        println!("{}", render::Matrix(matrix.view()));
        println!();
        println!("Result using {}:", reducer.algorithm());
    }
    println!("{}", render::Matrix(pooled.view()));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let result = if args.float {
        run::<f64>(&args)
    } else {
        run::<i64>(&args)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
