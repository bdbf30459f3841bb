//! Test utilities and fixtures for playlist-minder tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::album_tree;
//!
//! let (temp, albums) = album_tree(&[("AlbumA", "01.mp3"), ("AlbumB", "song.wav")]);
//! // music lives under temp.path().join("music"), deleted when temp drops
//! ```

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::cover::ArtDownloader;
use crate::model::AlbumCollection;
use crate::scanner;

/// Creates `music/<album>/<file>` entries in a temporary directory and
/// scans them.
///
/// Files contain placeholder bytes, not real audio. Keep the returned
/// `TempDir` alive for the duration of the test.
pub fn album_tree(layout: &[(&str, &str)]) -> (TempDir, AlbumCollection) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let music = dir.path().join("music");
    for (album, file) in layout {
        let album_dir = music.join(album);
        fs::create_dir_all(&album_dir).expect("Failed to create album directory");
        fs::write(album_dir.join(file), b"not really audio").expect("Failed to write file");
    }
    let albums = scanner::group_albums(&music);
    (dir, albums)
}

/// Art downloader for tests; only ever pointed at unreachable URLs.
pub fn offline_art() -> ArtDownloader {
    ArtDownloader::new(reqwest::Client::new())
}

/// Writes a tiny valid PCM WAV file (mono, 8 kHz, 16-bit, 100 ms of silence).
pub fn write_wav(path: &Path) {
    const SAMPLE_RATE: u32 = 8000;
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;
    let data_len: u32 = SAMPLE_RATE / 10 * u32::from(BITS / 8);

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    let block_align = CHANNELS * BITS / 8;
    bytes.extend_from_slice(&(SAMPLE_RATE * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    fs::write(path, bytes).expect("Failed to write WAV fixture");
}
