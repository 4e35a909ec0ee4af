use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use marker_splice::{splice_file, SearchSpec, SpliceOutcome};

const TARGET_PATH: &str = "index.html";
const FRAGMENT_PATH: &str = "fragments/new_blog_post.html";

/// The existing first card; its presence is probed before anything is inserted.
const POST_MARKER: &str = "id=\"post-1\">";
/// Inserting right after the grid opening makes the new card appear first.
const GRID_MARKER: &str = "<div class=\"blog-grid\">";

fn main() -> Result<()> {
    let content = fs::read_to_string(TARGET_PATH)
        .with_context(|| format!("Error reading target file {}", TARGET_PATH))?;
    if !content.contains(POST_MARKER) {
        println!("Post 1 not found!");
        return Ok(());
    }

    let outcome = splice_file(
        Path::new(TARGET_PATH),
        Path::new(FRAGMENT_PATH),
        &SearchSpec::After {
            marker: GRID_MARKER,
        },
    )?;
    match outcome {
        SpliceOutcome::Spliced(spliced) => {
            println!("Found grid start. Inserting at {}", spliced.index);
            println!("Insertion successful.");
        }
        SpliceOutcome::MarkerNotFound(_) => {
            println!("Blog grid not found!");
        }
    }
    Ok(())
}
