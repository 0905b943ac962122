//! Native-speaker audio recording management.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use olelo_core::lexicon::Lexicon;

use super::die;

const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg", ".m4a"];

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("archive error: {0}")]
    Archive(String),
}

fn is_audio_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Report which lexicon entries have a recording present in `dir`.
pub fn check(dir: &str) {
    let dir = Path::new(dir);
    let entries = Lexicon::global().audio_entries();

    let mut missing = 0usize;
    for (word, filename) in &entries {
        if dir.join(filename).exists() {
            println!("  \u{2713} {word} ({filename})");
        } else {
            missing += 1;
            println!("  \u{2717} {word} ({filename}) MISSING");
        }
    }

    println!();
    println!(
        "{}/{} recordings present in {}",
        entries.len() - missing,
        entries.len(),
        dir.display()
    );
}

/// Download a zip archive of recordings and unpack the audio files into
/// `dest`. Entry paths are flattened to basenames; existing files are kept.
pub fn fetch(url: &str, dest: &str) {
    let dest = Path::new(dest);
    let count = die!(fetch_archive(url, dest), "Error fetching audio pack: {}");
    eprintln!("Done. {count} recordings in {}", dest.display());
}

fn fetch_archive(url: &str, dest: &Path) -> Result<usize, AudioError> {
    fs::create_dir_all(dest)?;

    eprintln!("Downloading {url}...");
    let body = ureq::get(url)
        .call()
        .map_err(|e| AudioError::Http(format!("{url}: {e}")))?
        .into_body()
        .read_to_vec()
        .map_err(|e| AudioError::Http(format!("{url}: {e}")))?;

    extract_audio(&body, dest)
}

fn extract_audio(archive_bytes: &[u8], dest: &Path) -> Result<usize, AudioError> {
    let cursor = Cursor::new(archive_bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| AudioError::Archive(e.to_string()))?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| AudioError::Archive(e.to_string()))?;
        let raw_name = file.name().to_string();
        if !is_audio_file(&raw_name) {
            continue;
        }
        // Use only the basename to prevent path traversal
        let basename = Path::new(&raw_name)
            .file_name()
            .ok_or_else(|| AudioError::Archive(format!("invalid entry name: {raw_name}")))?
            .to_string_lossy()
            .into_owned();
        let out_path = dest.join(&basename);
        if out_path.exists() {
            eprintln!("    {basename} (already exists, skipping)");
            count += 1;
            continue;
        }
        let mut out = fs::File::create(&out_path)?;
        io::copy(&mut file, &mut out)?;
        eprintln!("    \u{2192} {basename}");
        count += 1;
    }

    Ok(count)
}
