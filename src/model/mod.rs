//! Core data models for album organization.
//!
//! Defines [`AlbumCollection`] (the result of a scan) and [`AlbumMetadata`]
//! (the result of an enrichment lookup). Neither is persisted; both are
//! rebuilt on every run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One album bucket: the songs found in a single folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Album name (the containing folder's name)
    pub name: String,
    /// Song paths in discovery order
    pub songs: Vec<PathBuf>,
}

/// Mapping from album name to its songs.
///
/// Albums iterate in the order they were first discovered and songs keep
/// their insertion order within each album.
#[derive(Debug, Clone, Default)]
pub struct AlbumCollection {
    albums: Vec<Album>,
    index: HashMap<String, usize>,
}

impl AlbumCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song to the named album, creating the album if needed.
    pub fn insert(&mut self, album: impl Into<String>, song: impl Into<PathBuf>) {
        let album = album.into();
        let song = song.into();
        match self.index.get(&album) {
            Some(&i) => self.albums[i].songs.push(song),
            None => {
                self.index.insert(album.clone(), self.albums.len());
                self.albums.push(Album {
                    name: album,
                    songs: vec![song],
                });
            }
        }
    }

    /// Songs of the named album, if any were found.
    #[cfg(test)]
    pub fn get(&self, album: &str) -> Option<&[PathBuf]> {
        self.index
            .get(album)
            .map(|&i| self.albums[i].songs.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Album> {
        self.albums.iter()
    }

    /// Number of albums
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    #[cfg(test)]
    pub fn album_names(&self) -> Vec<&str> {
        self.albums.iter().map(|a| a.name.as_str()).collect()
    }

    /// Total number of songs across all albums
    pub fn song_count(&self) -> usize {
        self.albums.iter().map(|a| a.songs.len()).sum()
    }
}

impl<'a> IntoIterator for &'a AlbumCollection {
    type Item = &'a Album;
    type IntoIter = std::slice::Iter<'a, Album>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Album details obtained from a catalog service.
///
/// Every field is optional: a missing value is normal and never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumMetadata {
    /// URL of the cover image
    pub art_url: Option<String>,
    /// Primary artist name
    pub artist: Option<String>,
    /// Four-digit release year
    pub release_year: Option<String>,
    /// First listed genre
    pub genre: Option<String>,
}

impl AlbumMetadata {
    /// True when the lookup produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.art_url.is_none()
            && self.artist.is_none()
            && self.release_year.is_none()
            && self.genre.is_none()
    }
}

/// Extract the year from a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` release date.
pub fn release_year(date: &str) -> Option<String> {
    let year = date.split('-').next().unwrap_or_default().trim();
    if year.is_empty() {
        None
    } else {
        Some(year.to_string())
    }
}

/// Name of the folder that directly contains `path`.
pub fn parent_folder_name(path: &Path) -> Option<String> {
    path.parent()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_groups_by_album() {
        let mut albums = AlbumCollection::new();
        albums.insert("AlbumA", "/m/AlbumA/track1.mp3");
        albums.insert("AlbumB", "/m/AlbumB/song.wav");
        albums.insert("AlbumA", "/m/AlbumA/track2.flac");

        assert_eq!(albums.len(), 2);
        assert_eq!(albums.song_count(), 3);
        assert_eq!(albums.album_names(), vec!["AlbumA", "AlbumB"]);
        assert_eq!(
            albums.get("AlbumA").unwrap(),
            &[
                PathBuf::from("/m/AlbumA/track1.mp3"),
                PathBuf::from("/m/AlbumA/track2.flac")
            ]
        );
        assert!(albums.get("Missing").is_none());
    }

    #[test]
    fn test_empty_collection() {
        let albums = AlbumCollection::new();
        assert!(albums.is_empty());
        assert_eq!(albums.song_count(), 0);
        assert_eq!(albums.iter().count(), 0);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year("1994-08-01"), Some("1994".to_string()));
        assert_eq!(release_year("2001"), Some("2001".to_string()));
        assert_eq!(release_year("1987-06"), Some("1987".to_string()));
        assert_eq!(release_year(""), None);
    }

    #[test]
    fn test_metadata_default_is_empty() {
        assert!(AlbumMetadata::default().is_empty());
        let meta = AlbumMetadata {
            genre: Some("Rock".to_string()),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }

    #[test]
    fn test_parent_folder_name() {
        assert_eq!(
            parent_folder_name(Path::new("/music/Dookie/01.mp3")),
            Some("Dookie".to_string())
        );
        assert_eq!(parent_folder_name(Path::new("song.mp3")), None);
    }
}
