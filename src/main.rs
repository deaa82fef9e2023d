use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use townland_splitter::counties::county_table;
use townland_splitter::{process_file, RunOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("Townland Splitter")
        .version("1.0")
        .author("Jesper Fjellin")
        .about("Splits a townland FeatureCollection into one GeoJSON file per county")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .num_args(1)
                .help("Input townlands GeoJSON file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .help("Existing directory to write county files into"),
        )
        .arg(
            Arg::new("reduce")
                .short('r')
                .long("reduce")
                .action(ArgAction::SetTrue)
                .help("Round coordinates to 4 decimal places"),
        )
        .arg(
            Arg::new("county")
                .short('c')
                .long("county")
                .num_args(1)
                .help("Extract a single county instead of all of them"),
        )
        .arg(
            Arg::new("counties")
                .long("counties")
                .action(ArgAction::SetTrue)
                .help("Print the list of supported counties then exit"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Process every county without writing any files"),
        )
        .get_matches();

    if matches.get_flag("counties") {
        print!("{}", county_table());
        return;
    }

    // Missing paths are reported by RunOptions, not clap
    let input = matches.get_one::<String>("input").map(PathBuf::from);
    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let reduce = matches.get_flag("reduce");
    let dry_run = matches.get_flag("dry-run");

    let county = matches.get_one::<String>("county");

    let options = match RunOptions::new(input, output, reduce, dry_run)
        .and_then(|options| options.with_county(county.map(String::as_str)))
    {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match process_file(&options) {
        Ok(summary) if summary.is_success() => println!("Completed."),
        Ok(summary) => {
            for failure in &summary.failures {
                eprintln!("Error: {}: {}", failure.county, failure.error);
            }
            eprintln!(
                "Completed with {} of {} counties failed.",
                summary.failures.len(),
                summary.failures.len() + summary.reports.len()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error processing file: {}", e);
            std::process::exit(1);
        }
    }
}
