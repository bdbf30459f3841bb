//! M3U playlist generation.
//!
//! One `<album>.m3u` per album, listing each song's path on its own line in
//! scan order. Existing playlists with the same name are overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::model::{Album, AlbumCollection};

/// Outcome of a playlist run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistReport {
    /// Playlists written
    pub written: Vec<PathBuf>,
    /// Albums whose playlist could not be written
    pub failed: Vec<String>,
}

/// Path of the playlist file for an album
pub fn playlist_path(playlist_dir: &Path, album: &str) -> PathBuf {
    playlist_dir.join(format!("{}.m3u", album))
}

/// Render playlist contents: one path per line.
pub fn render(songs: &[PathBuf]) -> String {
    songs
        .iter()
        .map(|song| format!("{}\n", song.display()))
        .collect()
}

/// Write the playlist for one album.
pub fn write_playlist(album: &Album, playlist_dir: &Path) -> Result<PathBuf> {
    let path = playlist_path(playlist_dir, &album.name);
    fs::write(&path, render(&album.songs)).map_err(|e| Error::write(&path, e.to_string()))?;
    Ok(path)
}

/// Create playlists for each album.
///
/// A failure for one album is logged and does not stop the others.
pub fn create_playlists(albums: &AlbumCollection, playlist_dir: &Path) -> PlaylistReport {
    let mut report = PlaylistReport::default();

    for album in albums {
        match write_playlist(album, playlist_dir) {
            Ok(path) => {
                info!("Created playlist for album: {} at {:?}", album.name, path);
                report.written.push(path);
            }
            Err(e) => {
                error!("Error creating playlist for {}: {}", album.name, e);
                report.failed.push(album.name.clone());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner;
    use tempfile::TempDir;

    #[test]
    fn test_scenario_two_albums() {
        let temp = TempDir::new().unwrap();
        let music = temp.path().join("music");
        let playlists = temp.path().join("playlists");
        fs::create_dir_all(music.join("AlbumA")).unwrap();
        fs::create_dir_all(music.join("AlbumB")).unwrap();
        fs::create_dir_all(&playlists).unwrap();
        fs::write(music.join("AlbumA/track1.mp3"), b"a").unwrap();
        fs::write(music.join("AlbumA/track2.flac"), b"b").unwrap();
        fs::write(music.join("AlbumB/song.wav"), b"c").unwrap();
        let music = music.canonicalize().unwrap();

        let albums = scanner::group_albums(&music);
        let report = create_playlists(&albums, &playlists);

        assert_eq!(report.written.len(), 2);
        assert!(report.failed.is_empty());

        let a = fs::read_to_string(playlists.join("AlbumA.m3u")).unwrap();
        let lines: Vec<&str> = a.lines().collect();
        assert_eq!(
            lines,
            vec![
                music.join("AlbumA/track1.mp3").display().to_string(),
                music.join("AlbumA/track2.flac").display().to_string(),
            ]
        );

        let b = fs::read_to_string(playlists.join("AlbumB.m3u")).unwrap();
        assert_eq!(b.lines().count(), 1);
    }

    #[test]
    fn test_playlist_named_after_folder() {
        assert_eq!(
            playlist_path(Path::new("/playlists"), "Vol. 1: Remix"),
            PathBuf::from("/playlists/Vol. 1: Remix.m3u")
        );
    }

    #[test]
    fn test_overwrites_existing_playlist() {
        let temp = TempDir::new().unwrap();
        let stale = playlist_path(temp.path(), "Dookie");
        fs::write(&stale, "old line 1\nold line 2\nold line 3\n").unwrap();

        let mut albums = AlbumCollection::new();
        albums.insert("Dookie", "/music/Dookie/01 Burnout.mp3");
        create_playlists(&albums, temp.path());

        assert_eq!(
            fs::read_to_string(&stale).unwrap(),
            "/music/Dookie/01 Burnout.mp3\n"
        );
    }

    #[test]
    fn test_failure_does_not_stop_other_albums() {
        let temp = TempDir::new().unwrap();
        // A directory where the playlist file should go makes that write fail
        fs::create_dir(temp.path().join("Broken.m3u")).unwrap();

        let mut albums = AlbumCollection::new();
        albums.insert("Broken", "/music/Broken/a.mp3");
        albums.insert("Fine", "/music/Fine/b.mp3");

        let report = create_playlists(&albums, temp.path());
        assert_eq!(report.failed, vec!["Broken".to_string()]);
        assert_eq!(report.written, vec![temp.path().join("Fine.m3u")]);
    }
}
