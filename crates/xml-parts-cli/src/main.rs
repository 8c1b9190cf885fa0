use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::{env, fs, io, process};
use xml_parts_config::{Config, Suite};
use xml_parts_engine::compile;

mod runner;

use runner::{Outcome, SuiteReport, run_suite};

fn usage(program: &str) {
    eprintln!("Usage: {program} check [SUITE...]");
    eprintln!("       {program} match <FILE|-> <TOKEN>...");
}

/// Runs suites named on the command line, or the ones listed in the config.
fn check(args: &[String]) -> Result<bool> {
    let paths: Vec<PathBuf> = if args.is_empty() {
        match Config::load()? {
            Some(config) => config.suite_paths()?,
            None => {
                eprintln!("No suites given and no config file found.");
                eprintln!(
                    "Create a config file at {} listing suite globs",
                    Config::config_path().display()
                );
                return Ok(false);
            }
        }
    } else {
        args.iter().map(PathBuf::from).collect()
    };

    if paths.is_empty() {
        eprintln!("No suite files found");
        return Ok(false);
    }

    let mut total = SuiteReport::default();
    for path in &paths {
        let suite = Suite::load_from_path(path)?;
        let report = run_suite(&suite);

        println!("{}", path.display());
        print_report(&report);
        total.cases.extend(report.cases);
    }

    println!(
        "\n{} passed, {} failed, {} empty",
        total.passed(),
        total.failed(),
        total.cases.len() - total.passed() - total.failed()
    );
    Ok(total.failed() == 0)
}

fn print_report(report: &SuiteReport) {
    for case in &report.cases {
        match &case.outcome {
            Outcome::Passed => println!("  ok      {}", case.name),
            Outcome::Empty => println!("  empty   {}", case.name),
            Outcome::Failed(failures) => {
                println!("  FAILED  {}", case.name);
                for failure in failures {
                    println!("          {failure}");
                }
            }
        }
    }
}

/// Checks one candidate, read from a file or `-` for stdin, against tokens.
fn match_candidate(source: &str, tokens: &[String]) -> Result<bool> {
    let candidate = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read candidate from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))?
    };

    let pattern = compile(tokens.iter().map(String::as_str))?;
    log::info!("Matching against /{pattern}/");

    match pattern.find(&candidate) {
        Some(range) => {
            println!("match at bytes {}..{}", range.start, range.end);
            Ok(true)
        }
        None => {
            match pattern.explain(&candidate) {
                Some(mismatch) => println!("no match: {mismatch}"),
                None => println!("no match"),
            }
            Ok(false)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("xml-parts-cli");

    let ok = match args.get(1).map(String::as_str) {
        Some("check") => check(&args[2..])?,
        Some("match") if args.len() >= 4 => match_candidate(&args[2], &args[3..])?,
        _ => {
            usage(program);
            process::exit(2);
        }
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}
