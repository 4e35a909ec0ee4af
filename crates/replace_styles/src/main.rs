use std::path::Path;

use anyhow::Result;
use marker_splice::{splice_file, SearchSpec, SpliceOutcome};

const TARGET_PATH: &str = "styles.css";
const FRAGMENT_PATH: &str = "fragments/projects_styles.css";

/// Everything from the projects section header up to (but not including)
/// the contact section header is replaced.
const START_MARKER: &str = "/* PROJECTS SECTION (HORIZONTAL SCROLL)";
const END_MARKER: &str = "/* CONTACT";
/// Spacing and a rule line between the new rules and the preserved contact
/// section.
const SEPARATOR: &str = "\n\n/* -------------------------------------- */\n";

fn main() -> Result<()> {
    let outcome = splice_file(
        Path::new(TARGET_PATH),
        Path::new(FRAGMENT_PATH),
        &SearchSpec::Between {
            start: START_MARKER,
            end: END_MARKER,
            separator: SEPARATOR,
        },
    )?;
    match outcome {
        SpliceOutcome::Spliced(spliced) => {
            if let Some(end) = spliced.end_index {
                println!(
                    "Found markers. Replacing content between indices {} and {}",
                    spliced.index, end
                );
            }
            println!("Replacement successful.");
        }
        SpliceOutcome::MarkerNotFound(missing) => {
            println!("Markers not found!");
            println!("Start found: {}", missing.start_found());
            println!("End found: {}", missing.end_found());
        }
    }
    Ok(())
}
