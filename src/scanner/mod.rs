//! Directory validation and audio file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result, ResultExt};
use crate::model::{AlbumCollection, parent_folder_name};

/// Audio extensions picked up by the scanner (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "m4a"];

/// Check that the music directory exists and create the output directories.
///
/// Creating the playlist and output directories is idempotent.
pub fn validate_directories(music_dir: &Path, playlist_dir: &Path, output_dir: &Path) -> Result<()> {
    prepare_directories(music_dir, &[playlist_dir, output_dir])
}

/// Check that the music directory exists and create each of `outputs`.
pub fn prepare_directories(music_dir: &Path, outputs: &[&Path]) -> Result<()> {
    if !music_dir.is_dir() {
        return Err(Error::not_found(music_dir));
    }
    for dir in outputs {
        fs::create_dir_all(dir)
            .with_context(format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Whether `path` has one of the supported audio extensions.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Scans the given root directory recursively for audio files.
///
/// Entries are visited in file-name order within each directory. Unreadable
/// entries are skipped.
pub fn scan(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && is_supported(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Group every audio file under `root` by the name of its parent folder.
///
/// The root is made absolute first, so a root given as `.` or `..` still
/// names the bucket for files directly inside it.
pub fn group_albums(root: &Path) -> AlbumCollection {
    let root = root.canonicalize().unwrap_or_else(|e| {
        debug!("Could not canonicalize {:?}: {}", root, e);
        root.to_path_buf()
    });

    let mut albums = AlbumCollection::new();
    for path in scan(&root) {
        match parent_folder_name(&path) {
            Some(album) => albums.insert(album, path),
            None => warn!("Skipping {:?}: no parent folder name", path),
        }
    }
    info!(
        "Found {} albums ({} songs) in {:?}",
        albums.len(),
        albums.song_count(),
        root
    );
    albums
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn folder_name() -> impl Strategy<Value = String> {
        prop::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}").unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Every supported file lands in exactly one bucket named after its parent
        #[test]
        fn every_file_in_exactly_one_bucket(
            layout in prop::collection::vec(
                (folder_name(), prop::sample::select(vec!["mp3", "WAV", "flac", "m4a", "txt"])),
                1..20,
            )
        ) {
            let dir = tempdir().unwrap();
            let root = dir.path().canonicalize().unwrap();
            let mut expected = HashSet::new();
            for (i, (folder, ext)) in layout.iter().enumerate() {
                let folder_path = root.join(folder);
                fs::create_dir_all(&folder_path).unwrap();
                let file = folder_path.join(format!("track{i:02}.{ext}"));
                fs::write(&file, b"x").unwrap();
                if *ext != "txt" {
                    expected.insert(file);
                }
            }

            let albums = group_albums(&root);
            let mut seen = HashSet::new();
            for album in &albums {
                for song in &album.songs {
                    let parent = parent_folder_name(song);
                    prop_assert_eq!(parent.as_deref(), Some(album.name.as_str()));
                    prop_assert!(seen.insert(song.clone()), "duplicate {:?}", song);
                }
            }
            prop_assert_eq!(seen, expected);
        }
    }
}
