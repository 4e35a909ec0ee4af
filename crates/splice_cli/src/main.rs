use std::path::Path;

use anyhow::Result;
use clap::{Arg, Command};
use marker_splice::{splice_file, SearchSpec, SpliceOutcome};

fn main() -> Result<()> {
    let matches = Command::new("splice_cli")
        .version("0.1.0")
        .about("Splices a fragment file into a target file at literal substring markers")
        .arg(
            Arg::new("target")
                .long("target")
                .num_args(1)
                .required(true)
                .help("File to rewrite in place"),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .num_args(1)
                .required(true)
                .help("File whose content is injected verbatim"),
        )
        .arg(
            Arg::new("after")
                .long("after")
                .num_args(1)
                .help("Insert the fragment immediately after this marker"),
        )
        .arg(
            Arg::new("before")
                .long("before")
                .num_args(1)
                .help("Insert the fragment immediately before this marker"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .num_args(1)
                .requires("end")
                .help("Start marker of the region to replace"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .requires("start")
                .help("End marker of the region to replace; the marker itself is preserved"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .num_args(1)
                .help("Text placed after the fragment for --before and --start/--end splices"),
        )
        .get_matches();

    let target = matches.get_one::<String>("target").unwrap();
    let fragment = matches.get_one::<String>("fragment").unwrap();
    let after = matches.get_one::<String>("after");
    let before = matches.get_one::<String>("before");
    let start = matches.get_one::<String>("start");
    let end = matches.get_one::<String>("end");
    let separator = matches
        .get_one::<String>("separator")
        .map(String::as_str)
        .unwrap_or("\n");

    let spec = match (after, before, start, end) {
        (Some(marker), None, None, None) => SearchSpec::After {
            marker: marker.as_str(),
        },
        (None, Some(marker), None, None) => SearchSpec::Before {
            marker: marker.as_str(),
            trailer: separator,
        },
        (None, None, Some(start), Some(end)) => SearchSpec::Between {
            start: start.as_str(),
            end: end.as_str(),
            separator,
        },
        _ => {
            eprintln!("Error: specify exactly one of --after, --before, or --start/--end.");
            std::process::exit(1);
        }
    };

    match splice_file(Path::new(target), Path::new(fragment), &spec)? {
        SpliceOutcome::Spliced(spliced) => {
            match spliced.end_index {
                Some(end) => println!(
                    "Found markers. Replacing content between indices {} and {}",
                    spliced.index, end
                ),
                None => println!("Found marker. Splicing at index {}", spliced.index),
            }
            println!("Splice successful.");
        }
        SpliceOutcome::MarkerNotFound(missing) => {
            println!("{missing}");
            println!("No changes written.");
        }
    }
    Ok(())
}
