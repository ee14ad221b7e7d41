use clap::Parser;
use log::info;
use serde::Serialize;
use std::process::ExitCode;
use timeseeker_core::{find_earliest, SeekError};

/// Find the earliest valid 24-hour time (HH:MM:SS) that can be formed from
/// six digits, using each digit exactly once
#[derive(Parser)]
#[command(name = "timeseeker", version, about)]
struct Cli {
    /// The six digits, each 0-9
    #[arg(value_name = "DIGIT", allow_negative_numbers = true)]
    digits: Vec<i32>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    digits: &'a [i32],
    earliest: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match find_earliest(&cli.digits) {
        Ok(time) => {
            info!("earliest time for {:?} is [{}]", cli.digits, time);
            print_result(&cli, Some(time.to_string()));
            ExitCode::SUCCESS
        }
        Err(SeekError::NoSolution) => {
            print_result(&cli, None);
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn print_result(cli: &Cli, earliest: Option<String>) {
    if cli.json {
        let report = Report {
            digits: &cli.digits,
            earliest,
        };
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("error: {}", err),
        }
    } else {
        match earliest {
            Some(time) => println!("{}", time),
            None => eprintln!("no solution is possible for {:?}", cli.digits),
        }
    }
}
