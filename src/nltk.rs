//! NLTK data directory handling
//!
//! Finds the Brown corpus where NLTK keeps it (`~/nltk_data/corpora/brown`) and, the first time
//! round, unpacks or downloads the package archive so later runs find it in place.
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;
use crate::brown;
use crate::corpus::TaggedCorpus;
use crate::errors::*;
use crate::staging;

/// Where NLTK publishes the Brown corpus package
pub const BROWN_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/brown.zip";

/// `$HOME/nltk_data/corpora/brown`
pub fn default_brown_dir() -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| Error::CorpusUnavailable(
            "HOME is not set, so there is no default nltk_data directory. \
            Pass the corpus directory explicitly.".to_string()))?;
    Ok(PathBuf::from(home).join("nltk_data").join("corpora").join("brown"))
}

/// Name of the package archive and of the directory inside it
const PACKAGE: &str = "brown";

/// The package archive kept next to the corpus directory, e.g. `corpora/brown.zip`
fn archive_path(dir: &Path) -> PathBuf {
    dir.with_file_name(format!("{}.zip", PACKAGE))
}

/// Make sure the corpus directory exists, unpacking or downloading the archive if needed
///
/// Downloading happens at most once: the archive is kept next to the directory, as NLTK does.
/// The directory may have any name; the archive's `brown/` folder is moved into place as `dir`.
pub fn ensure_corpus(dir: &Path, allow_download: bool) -> Result<()> {
    if dir.is_dir() {
        debug!("Found corpus at {}", dir.display());
        return Ok(());
    }
    let archive = archive_path(dir);
    if !archive.is_file() {
        if !allow_download {
            return Err(Error::CorpusUnavailable(format!(
                "neither {} nor {} exist and downloading is disabled",
                dir.display(), archive.display())));
        }
        download(BROWN_URL, &archive)?;
    }
    unpack(&archive, dir)
}

/// Ensure, then load the corpus; this is the only place the corpus gets acquired
pub fn open_brown(dir: &Path, allow_download: bool) -> Result<TaggedCorpus> {
    ensure_corpus(dir, allow_download)?;
    brown::load(dir)
}

/// Fetch `url` into `dest` without ever leaving a partial file at `dest`
fn download(url: &str, dest: &Path) -> Result<()> {
    fs::create_dir_all(staging::parent_dir(dest))?;
    println!("Downloading {} to {}", url, dest.display());
    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let mut staged = staging::stage_for(dest)?;
    let bytes = response.copy_to(&mut staged)?;
    staged.flush()?;
    staging::publish(staged, dest)?;
    info!("Downloaded {} bytes from {}", bytes, url);
    Ok(())
}

/// Extract the archive's `brown/` folder to `dir`
///
/// Everything is unpacked into a scratch directory beside `dir` first and renamed into place
/// only once extraction finished, so `dir` never exists half-filled.
fn unpack(archive: &Path, dir: &Path) -> Result<()> {
    let into = staging::parent_dir(dir);
    fs::create_dir_all(into)?;
    info!("Unpacking {} into {}", archive.display(), dir.display());
    let file = File::open(archive)
        .map_err(|err| Error::MissingFile("corpus archive", archive.to_path_buf(), Some(err)))?;
    let mut zip = ZipArchive::new(io::BufReader::new(file))?;
    let scratch = TempDir::new_in(into)?;
    zip.extract(scratch.path())?;

    let unpacked = scratch.path().join(PACKAGE);
    if !unpacked.is_dir() {
        return Err(Error::CorpusUnavailable(format!(
            "{} has no {}/ folder", archive.display(), PACKAGE)));
    }
    fs::rename(&unpacked, dir)?;
    Ok(())
}
