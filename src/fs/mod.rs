use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Defines fns for creating the paths submodels write to
mod paths;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Specified output root \"{0}\" is not a directory")]
    NotDirectory(String),
}

/// All file operations in the crate should go through this struct.
///
/// Paths of submodel outputs are relative to a single output root
/// (normally the directory the predictor runs from).
/// Nothing under the output root is ever written by this crate; we only
/// check whether outputs exist.
#[derive(Debug)]
pub struct Fs {
    /// The directory submodel output paths are relative to
    output_root: PathBuf,
}

impl Fs {
    /// Create a new `Fs` with the given output root.
    pub fn new(output_root: &Path) -> Self {
        Self {
            output_root: output_root.to_path_buf(),
        }
    }

    /// Check that the output root is usable. A missing root is allowed
    /// (no outputs exist yet), but a root that isn't a directory is an error.
    pub fn check_output_root(&self, verbose: bool) -> Result<()> {
        if !self.output_root.exists() {
            log::warn!(
                "Output root {:?} doesn't exist; no submodel outputs will be found",
                self.output_root
            );
        } else if !self.output_root.is_dir() {
            return Err(Error::NotDirectory(self.output_root.display().to_string()).into());
        } else if verbose {
            eprintln!("Using output root {:?}", self.output_root);
        }
        Ok(())
    }

    /// Resolve a path relative to the output root.
    pub fn resolve<T: AsRef<Path>>(&self, relative: T) -> PathBuf {
        self.output_root.join(relative)
    }

    /// Check if a path relative to the output root is a regular file
    /// (or a symlink to one).
    pub fn is_file<T: AsRef<Path>>(&self, relative: T) -> bool {
        self.resolve(relative).is_file()
    }

    /// Read entire file into a String.
    /// `path` is used as given, not resolved against the output root.
    pub fn read_to_buf<T: AsRef<Path>>(&self, path: T, strbuf: &mut String) -> Result<()> {
        use std::io::Read;
        let path = path.as_ref();
        strbuf.clear();
        let cap = fs::metadata(path)
            .with_context(|| format!("reading metadata of {path:?}"))?
            .len() as usize;
        if cap > strbuf.capacity() {
            strbuf.reserve(cap - strbuf.len());
        }
        let mut f = fs::File::open(path).with_context(|| format!("opening {path:?}"))?;
        f.read_to_string(strbuf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_is_file_is_relative_to_root() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("eval/metrics/dir.h5"))?;
        fs::write(dir.path().join("eval/metrics/file.h5"), "")?;

        let fs = Fs::new(dir.path());
        assert!(fs.is_file("eval/metrics/file.h5"));
        assert!(!fs.is_file("eval/metrics/other.h5"));
        assert!(!fs.is_file("eval/metrics/dir.h5"));
        assert!(!Fs::new(Path::new("/nonexistent/root")).is_file("eval/metrics/file.h5"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_a_file() -> Result<()> {
        let dir = tempdir()?;
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("link.h5"))?;
        assert!(!Fs::new(dir.path()).is_file("link.h5"));
        Ok(())
    }

    #[test]
    fn test_check_output_root() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "")?;

        assert!(Fs::new(dir.path()).check_output_root(false).is_ok());
        assert!(Fs::new(&dir.path().join("missing")).check_output_root(false).is_ok());
        assert!(Fs::new(&file).check_output_root(false).is_err());
        Ok(())
    }

    #[test]
    fn test_read_to_buf() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("selected_submodel.json");
        fs::write(&file, "{}")?;

        let mut buf = String::from("stale contents");
        Fs::new(dir.path()).read_to_buf(&file, &mut buf)?;
        assert_eq!(buf, "{}");
        Ok(())
    }
}
