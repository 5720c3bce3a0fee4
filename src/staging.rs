//! Replacing files in one rename
//!
//! Content is written to a temp file next to the destination and then renamed over it, so
//! readers see either the old file or the complete new one.
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::errors::*;

/// Mode of published files; temp files start out owner-only
#[cfg(unix)]
const PUBLISHED_MODE: u32 = 0o644;

/// Directory holding `path`, `.` for a bare file name
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// A temp file in the same directory as `dest`, so the final rename stays on one filesystem
pub fn stage_for(dest: &Path) -> Result<NamedTempFile> {
    Ok(NamedTempFile::new_in(parent_dir(dest))?)
}

/// Give the staged file ordinary permissions and move it over `dest`
pub fn publish(staged: NamedTempFile, dest: &Path) -> Result<()> {
    staged.as_file().sync_all()?;
    set_published_mode(staged.path())?;
    staged.persist(dest)?;
    Ok(())
}

#[cfg(unix)]
fn set_published_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(PUBLISHED_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_published_mode(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn bare_file_name_lives_in_working_dir() {
        assert_eq!(parent_dir(Path::new("out.xlsx")), Path::new("."));
        assert_eq!(parent_dir(Path::new("data/out.xlsx")), Path::new("data"));
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs::write(&dest, "old").unwrap();
        let mut staged = stage_for(&dest).unwrap();
        staged.write_all(b"new").unwrap();
        publish(staged, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn published_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        publish(stage_for(&dest).unwrap(), &dest).unwrap();
        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
