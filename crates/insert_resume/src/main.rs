use std::path::Path;

use anyhow::Result;
use marker_splice::{splice_file, SearchSpec, SpliceOutcome};

const TARGET_PATH: &str = "index.html";
const FRAGMENT_PATH: &str = "fragments/resume_section.html";

/// The resume section goes in just before the blog section.
const MARKER: &str = "<!-- Blog Section -->";
/// Padding so the displaced comment keeps its original indentation.
const TRAILER: &str = "\n\n            ";

fn main() -> Result<()> {
    let outcome = splice_file(
        Path::new(TARGET_PATH),
        Path::new(FRAGMENT_PATH),
        &SearchSpec::Before {
            marker: MARKER,
            trailer: TRAILER,
        },
    )?;
    match outcome {
        SpliceOutcome::Spliced(spliced) => {
            println!(
                "Found marker. Inserting Resume section before index {}",
                spliced.index
            );
            println!("Insertion successful.");
        }
        SpliceOutcome::MarkerNotFound(_) => {
            println!("Marker not found!");
        }
    }
    Ok(())
}
