//! Audio file tag writing.
//!
//! Uses the lofty crate for format-independent tag access. MP3 files get an
//! ID3v2 tag; other formats use their primary tag type.

use anyhow::{Context, Result};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::path::Path;

/// Tag fields written for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTagSet {
    pub title: String,
    pub album: String,
    pub track_number: u32,
    pub track_total: u32,
    pub disc_number: u32,
    pub disc_total: Option<u32>,
    pub comment: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub album_artist: Option<String>,
}

impl TrackTagSet {
    /// Tags for track `track_number` of `track_total` on disc 1.
    pub fn new(
        title: impl Into<String>,
        album: impl Into<String>,
        track_number: u32,
        track_total: u32,
    ) -> Self {
        Self {
            title: title.into(),
            album: album.into(),
            track_number,
            track_total,
            disc_number: 1,
            disc_total: None,
            comment: None,
            artist: None,
            genre: None,
            album_artist: None,
        }
    }

    /// Track number as stored in ID3 (`"N/total"`).
    pub fn track_field(&self) -> String {
        format!("{}/{}", self.track_number, self.track_total)
    }

    /// Disc number as stored in ID3 (`"n/total"` or `"n"`).
    pub fn disc_field(&self) -> String {
        match self.disc_total {
            Some(total) => format!("{}/{}", self.disc_number, total),
            None => self.disc_number.to_string(),
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Number of fields that were written
    pub fields_updated: usize,
}

/// Rewrite a file's embedded tag with the given fields.
///
/// Title, album, track and disc are always written. Comment, artist, genre,
/// album artist and disc total are written only when set.
pub fn write_tags(path: &Path, tags: &TrackTagSet) -> Result<WriteResult> {
    let mut tagged_file = Probe::open(path)
        .context("Failed to open file for writing")?
        .read()
        .context("Failed to read file for tag writing")?;

    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    let tag = tagged_file
        .tag_mut(tag_type)
        .context("No writable tag for this file type")?;

    tag.set_title(tags.title.clone());
    tag.set_album(tags.album.clone());
    tag.set_track(tags.track_number);
    tag.set_track_total(tags.track_total);
    tag.set_disk(tags.disc_number);
    let mut fields_updated = 5;

    if let Some(total) = tags.disc_total {
        tag.set_disk_total(total);
        fields_updated += 1;
    }
    if let Some(ref comment) = tags.comment {
        tag.set_comment(comment.clone());
        fields_updated += 1;
    }
    if let Some(ref artist) = tags.artist {
        tag.set_artist(artist.clone());
        fields_updated += 1;
    }
    if let Some(ref genre) = tags.genre {
        tag.set_genre(genre.clone());
        fields_updated += 1;
    }
    if let Some(ref album_artist) = tags.album_artist {
        tag.insert_text(ItemKey::AlbumArtist, album_artist.clone());
        fields_updated += 1;
    }

    tag.save_to_path(path, WriteOptions::default())
        .context("Failed to write tags to file")?;

    Ok(WriteResult { fields_updated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_wav;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_track_and_disc_fields() {
        let mut tags = TrackTagSet::new("Burnout", "Dookie", 1, 15);
        assert_eq!(tags.track_field(), "1/15");
        assert_eq!(tags.disc_field(), "1");

        tags.disc_total = Some(2);
        assert_eq!(tags.disc_field(), "1/2");
    }

    #[test]
    fn test_optional_fields_default_unset() {
        let tags = TrackTagSet::new("Title", "Album", 3, 9);
        assert!(tags.artist.is_none());
        assert!(tags.genre.is_none());
        assert!(tags.album_artist.is_none());
        assert!(tags.disc_total.is_none());
    }

    #[test]
    fn test_write_non_audio_file_returns_error() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "This is just some text, not music.").expect("Failed to write");

        let tags = TrackTagSet::new("Title", "Album", 1, 1);
        assert!(write_tags(file.path(), &tags).is_err());
    }

    #[test]
    fn test_write_non_existent_file_returns_error() {
        let tags = TrackTagSet::new("Title", "Album", 1, 1);
        assert!(write_tags(Path::new("non_existent_file.mp3"), &tags).is_err());
    }

    #[test]
    fn test_write_and_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("01 - burnout.wav");
        write_wav(&path);

        let tags = TrackTagSet::new("Burnout", "Dookie", 1, 3);
        let result = write_tags(&path, &tags).unwrap();
        assert_eq!(result.fields_updated, 5);

        let tagged_file = Probe::open(&path).unwrap().read().unwrap();
        let tag = tagged_file.primary_tag().unwrap();
        assert_eq!(tag.title().as_deref(), Some("Burnout"));
        assert_eq!(tag.album().as_deref(), Some("Dookie"));
        assert_eq!(tag.track(), Some(1));
        assert_eq!(tag.track_total(), Some(3));
        assert_eq!(tag.disk(), Some(1));
        assert!(tag.artist().is_none());
        assert!(tag.genre().is_none());
    }

    #[test]
    fn test_optional_fields_written_when_set() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("track.wav");
        write_wav(&path);

        let tags = TrackTagSet {
            artist: Some("Green Day".to_string()),
            genre: Some("Punk".to_string()),
            ..TrackTagSet::new("Welcome to Paradise", "Dookie", 4, 15)
        };
        let result = write_tags(&path, &tags).unwrap();
        assert_eq!(result.fields_updated, 7);

        let tagged_file = Probe::open(&path).unwrap().read().unwrap();
        let tag = tagged_file.primary_tag().unwrap();
        assert_eq!(tag.artist().as_deref(), Some("Green Day"));
        assert_eq!(tag.genre().as_deref(), Some("Punk"));
    }
}
