//! Single-album retag pipeline.
//!
//! Gathers every audio file under a source tree into one new album folder,
//! numbering them in scan order (`01 - song.mp3`, `02 - ...`), then rewrites
//! each copy's embedded tags.
//!
//! Unlike [`copy_albums`](super::copy_albums) this pipeline is strict: the
//! album folder must not exist yet, and any copy or tag failure aborts the
//! whole run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{copy_file, sanitize_filename};
use crate::error::{Error, Result};
use crate::metadata::{self, TrackTagSet};
use crate::scanner;

/// Inputs for one retag run
#[derive(Debug, Clone)]
pub struct RetagJob {
    /// Tree to collect audio files from (subfolders are flattened)
    pub source_dir: PathBuf,
    /// Parent of the new album folder
    pub destination_dir: PathBuf,
    /// Album name, also used as the folder name
    pub album_name: String,
}

impl RetagJob {
    pub fn album_dir(&self) -> PathBuf {
        self.destination_dir.join(sanitize_filename(&self.album_name))
    }
}

/// One track: where it comes from, what it is called, where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// 1-based position in the album
    pub position: usize,
    pub source: PathBuf,
    pub title: String,
    pub destination: PathBuf,
}

/// Outcome of a successful retag run
#[derive(Debug, Clone)]
pub struct RetagReport {
    pub album_dir: PathBuf,
    pub tracks: Vec<TrackRecord>,
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Digits used for the numeric prefix (at least two).
pub fn prefix_width(total: usize) -> usize {
    total.to_string().len().max(2)
}

/// Build one record per audio file under `source_dir`, in scan order.
pub fn plan_tracks(source_dir: &Path, album_dir: &Path) -> Vec<TrackRecord> {
    let sources = scanner::scan(source_dir);
    let width = prefix_width(sources.len());

    sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| {
            let position = i + 1;
            let file_name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            TrackRecord {
                position,
                title: capitalize(&stem),
                destination: album_dir.join(format!("{:0width$} - {}", position, file_name)),
                source,
            }
        })
        .collect()
}

/// Create the album folder. An existing folder is an error.
fn create_album_dir(album_dir: &Path) -> Result<()> {
    if let Some(parent) = album_dir.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::fatal_copy(format!("cannot create {:?}: {}", parent, e)))?;
    }
    fs::create_dir(album_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => {
            Error::fatal_copy(format!("album folder {:?} already exists", album_dir))
        }
        _ => Error::fatal_copy(format!("cannot create album folder {:?}: {}", album_dir, e)),
    })
}

/// Copy every track, stopping at the first failure.
fn copy_tracks(tracks: &[TrackRecord]) -> Result<()> {
    for track in tracks {
        copy_file(&track.source, &track.destination)
            .map_err(|e| Error::fatal_copy(e.to_string()))?;
        debug!("Copied {:?} -> {:?}", track.source, track.destination);
    }
    Ok(())
}

/// Rewrite tags on every copied track, stopping at the first failure.
fn tag_tracks(tracks: &[TrackRecord], album_name: &str) -> Result<()> {
    let album = capitalize(album_name);
    let total = u32::try_from(tracks.len())
        .map_err(|_| Error::fatal_copy("too many tracks for one album"))?;

    for track in tracks {
        // position <= total, which fits in u32
        let tags = TrackTagSet::new(track.title.clone(), album.clone(), track.position as u32, total);
        let written = metadata::write_tags(&track.destination, &tags).map_err(|e| {
            Error::fatal_copy(format!("tagging {:?} failed: {:#}", track.destination, e))
        })?;
        debug!(
            "Tagged {:?} as track {} disc {} ({} fields)",
            track.destination,
            tags.track_field(),
            tags.disc_field(),
            written.fields_updated
        );
    }
    Ok(())
}

/// Run the whole retag pipeline synchronously.
pub fn retag_album(job: &RetagJob) -> Result<RetagReport> {
    if !job.source_dir.is_dir() {
        return Err(Error::not_found(&job.source_dir));
    }

    let album_dir = job.album_dir();
    let tracks = plan_tracks(&job.source_dir, &album_dir);
    if tracks.is_empty() {
        warn!("No audio files found under {:?}", job.source_dir);
    }

    create_album_dir(&album_dir)?;
    copy_tracks(&tracks)?;
    info!("Copied {} tracks into {:?}", tracks.len(), album_dir);

    tag_tracks(&tracks, &job.album_name)?;
    info!("Tagged {} tracks for album {}", tracks.len(), job.album_name);

    Ok(RetagReport { album_dir, tracks })
}

/// Start the retag pipeline on the blocking thread pool.
///
/// The handle resolves to the pipeline's result.
pub fn spawn_retag(job: RetagJob) -> JoinHandle<Result<RetagReport>> {
    tokio::task::spawn_blocking(move || retag_album(&job))
}

/// Run the retag pipeline in the background and wait for it.
pub async fn run_retag(job: RetagJob) -> Result<RetagReport> {
    spawn_retag(job)
        .await
        .map_err(|e| Error::fatal_copy(format!("retag task failed: {}", e)))?
}
