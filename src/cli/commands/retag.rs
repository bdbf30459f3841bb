//! Album retag command.

use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::cli::prompt::{path_or_ask, text_or_ask};
use crate::organizer::retag::{self, RetagJob};

/// Copy a folder into one numbered album and rewrite its tags
pub fn cmd_retag(
    rt: &Runtime,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
    album: Option<&str>,
) -> anyhow::Result<()> {
    let job = RetagJob {
        source_dir: path_or_ask(source, None, "Enter the music directory: ")?,
        destination_dir: path_or_ask(destination, None, "Enter the destination directory: ")?,
        album_name: text_or_ask(album, None, "Enter the album name: ")?,
    };

    println!("Retagging {:?} as album {}...", job.source_dir, job.album_name);

    // Copy or tag failures abort the run and exit non-zero
    let report = rt.block_on(retag::run_retag(job))?;

    for track in &report.tracks {
        println!("TAGGED: {:?} ({})", track.destination, track.title);
    }
    println!(
        "\nCompleted: {} tracks in {:?}",
        report.tracks.len(),
        report.album_dir
    );
    Ok(())
}
