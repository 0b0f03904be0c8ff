//! Writing a finished password set to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::{MAX_LENGTH, PasswordSet};
use crate::error::Error;

pub const EXTENSION: &str = ".txt";
pub const DEFAULT_FILE_NAME: &str = "passwords.txt";
const STAGING_PREFIX: &str = ".masspass-";

/// Resolve a user-supplied output path: `.` or a trailing `/` means a
/// default file in that directory, anything else gets `.txt` appended if
/// it does not already end with it.
pub fn normalize_path(path: &str) -> PathBuf {
    if path == "." {
        PathBuf::from(DEFAULT_FILE_NAME)
    } else if path.ends_with('/') {
        PathBuf::from(format!("{path}{DEFAULT_FILE_NAME}"))
    } else if !path.ends_with(EXTENSION) {
        PathBuf::from(format!("{path}{EXTENSION}"))
    } else {
        PathBuf::from(path)
    }
}

/// Write every entry followed by `\n`, in the set's iteration order, and
/// replace `path` with the result. Returns the number of entries written.
pub fn write(passwords: &PasswordSet, path: &Path) -> Result<usize, Error> {
    replace_with(path, |out| write_lines(passwords, out))?;
    Ok(passwords.len())
}

/// Stage the contents in a temporary file beside `path`, then rename it over
/// `path`. On any failure `path` is left as it was and the staged file is
/// removed.
fn replace_with<F>(path: &Path, fill: F) -> Result<(), Error>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let failed = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(failed)?;

    fill(staged.as_file_mut()).map_err(failed)?;
    staged.as_file().sync_all().map_err(failed)?;
    staged.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}

fn write_lines<W: Write>(passwords: &PasswordSet, out: W) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    let mut line = Vec::with_capacity(MAX_LENGTH + 1);
    let mut result = Ok(());

    for pass in passwords.iter() {
        line.clear();
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        result = out.write_all(&line);
        if result.is_err() {
            break;
        }
    }
    line.zeroize();

    result.and_then(|_| out.flush())
}
