//! Playlist and album copy commands.

use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use super::{DirArgs, ServiceArgs, resolve_service};
use crate::cli::prompt::path_or_ask;
use crate::config::Config;
use crate::cover::ArtDownloader;
use crate::enrichment::{self, MetadataClient, MetadataService, ServiceCredentials};
use crate::model::AlbumCollection;
use crate::organizer::{self, CopyReport};
use crate::playlist::{self, PlaylistReport};
use crate::scanner;

const MUSIC_PROMPT: &str = "Enter the music directory: ";
const PLAYLIST_PROMPT: &str = "Enter the playlist directory: ";
const OUTPUT_PROMPT: &str = "Enter the output directory: ";

/// Write playlists, then copy albums with art and metadata
pub fn cmd_organize(
    rt: &Runtime,
    config: &Config,
    dirs: &DirArgs,
    service_args: &ServiceArgs,
) -> anyhow::Result<()> {
    let defaults = &config.defaults;
    let music_dir = path_or_ask(dirs.music_dir.as_ref(), defaults.music_dir.as_ref(), MUSIC_PROMPT)?;
    let playlist_dir = path_or_ask(
        dirs.playlist_dir.as_ref(),
        defaults.playlist_dir.as_ref(),
        PLAYLIST_PROMPT,
    )?;
    let output_dir = path_or_ask(dirs.output_dir.as_ref(), defaults.output_dir.as_ref(), OUTPUT_PROMPT)?;
    let service = resolve_service(service_args.service.as_deref(), config)?;
    let credentials = service_args.credentials.resolve(config);

    scanner::validate_directories(&music_dir, &playlist_dir, &output_dir)?;

    let albums = scan_albums(&music_dir);
    print_playlist_report(&playlist::create_playlists(&albums, &playlist_dir));

    let report = copy_with_metadata(rt, &albums, &output_dir, service, &credentials);
    print_copy_report(&report);
    Ok(())
}

/// Write one playlist per album
pub fn cmd_playlists(
    config: &Config,
    music_dir: Option<&PathBuf>,
    playlist_dir: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let defaults = &config.defaults;
    let music_dir = path_or_ask(music_dir, defaults.music_dir.as_ref(), MUSIC_PROMPT)?;
    let playlist_dir = path_or_ask(playlist_dir, defaults.playlist_dir.as_ref(), PLAYLIST_PROMPT)?;

    scanner::prepare_directories(&music_dir, &[playlist_dir.as_path()])?;

    let albums = scan_albums(&music_dir);
    print_playlist_report(&playlist::create_playlists(&albums, &playlist_dir));
    Ok(())
}

/// Copy albums with art and metadata
pub fn cmd_copy(
    rt: &Runtime,
    config: &Config,
    music_dir: Option<&PathBuf>,
    output_dir: Option<&PathBuf>,
    service_args: &ServiceArgs,
) -> anyhow::Result<()> {
    let defaults = &config.defaults;
    let music_dir = path_or_ask(music_dir, defaults.music_dir.as_ref(), MUSIC_PROMPT)?;
    let output_dir = path_or_ask(output_dir, defaults.output_dir.as_ref(), OUTPUT_PROMPT)?;
    let service = resolve_service(service_args.service.as_deref(), config)?;
    let credentials = service_args.credentials.resolve(config);

    scanner::prepare_directories(&music_dir, &[output_dir.as_path()])?;

    let albums = scan_albums(&music_dir);
    let report = copy_with_metadata(rt, &albums, &output_dir, service, &credentials);
    print_copy_report(&report);
    Ok(())
}

fn scan_albums(music_dir: &Path) -> AlbumCollection {
    println!("Scanning {:?}...", music_dir);
    let albums = scanner::group_albums(music_dir);
    println!(
        "Found {} songs in {} albums",
        albums.song_count(),
        albums.len()
    );
    if albums.is_empty() {
        println!("No supported audio files (mp3, wav, flac, m4a) found");
    }
    albums
}

fn copy_with_metadata(
    rt: &Runtime,
    albums: &AlbumCollection,
    output_dir: &Path,
    service: MetadataService,
    credentials: &ServiceCredentials,
) -> CopyReport {
    rt.block_on(async {
        let metadata_client = MetadataClient::new(service, credentials).await;
        if metadata_client.is_enabled() {
            println!("Looking up album metadata on {}", metadata_client.service());
        } else {
            println!("Metadata lookups disabled; albums will be copied without art");
        }
        let art = ArtDownloader::new(enrichment::http_client());
        organizer::copy_albums(albums, output_dir, &metadata_client, &art).await
    })
}

fn print_playlist_report(report: &PlaylistReport) {
    println!(
        "Playlists: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    for album in &report.failed {
        eprintln!("  ERROR writing playlist for {}", album);
    }
}

fn print_copy_report(report: &CopyReport) {
    for album in &report.albums {
        println!(
            "COPIED: {} ({} songs{}{}) -> {:?}",
            album.album,
            album.copied,
            if album.art.is_some() { ", art" } else { "" },
            if album.metadata_file.is_some() { ", metadata" } else { "" },
            album.dir
        );
        for song in &album.failed {
            eprintln!("  ERROR copying {:?}", song);
        }
    }
    for album in &report.skipped {
        eprintln!("SKIPPED: {}", album);
    }

    println!(
        "\nCompleted: {} albums, {} songs copied, {} errors",
        report.albums.len(),
        report.songs_copied(),
        report.songs_failed() + report.skipped.len()
    );
}
