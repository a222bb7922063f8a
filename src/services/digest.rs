// Content digests over files and directory trees

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::utils::error::{Result, VercatError};

/// Directory traversal stops silently past this depth unless overridden.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// SHA-1 and SHA-256 digests of one file's raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub path: PathBuf,
    pub sha1: String,
    pub sha256: String,
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [SHA-1]: {} [SHA-256]: {}",
            self.path.display(),
            self.sha1,
            self.sha256
        )
    }
}

/// Hash the raw bytes of a single regular file. An unreadable file is a hard
/// error, never skipped.
pub fn digest_file(path: &Path) -> Result<FileDigest> {
    let absolute = fs::canonicalize(path)?;
    let bytes = fs::read(&absolute)?;

    let mut sha1 = Sha1::new();
    sha1.update(&bytes);
    let mut sha256 = Sha256::new();
    sha256.update(&bytes);

    Ok(FileDigest {
        path: absolute,
        sha1: format!("{:x}", sha1.finalize()),
        sha256: format!("{:x}", sha256.finalize()),
    })
}

/// Collect regular files under `root` with an explicit work queue instead of
/// call-stack recursion. `root` itself sits at depth 0; directories at
/// `max_depth` are not descended into and their contents are skipped
/// silently. Results are sorted by path for stable output.
pub fn collect_files(root: &Path, max_depth: usize) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((dir, depth)) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            } else if path.is_dir() && depth + 1 < max_depth {
                pending.push((path, depth + 1));
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Digest a single target. A regular file is hashed as-is; a directory is
/// walked to `max_depth` and every discovered file is hashed. A target that
/// is missing or neither a file nor a directory is a hard error.
pub fn digest_target(target: &Path, max_depth: usize) -> Result<Vec<FileDigest>> {
    if target.is_file() {
        return Ok(vec![digest_file(target)?]);
    }
    if target.is_dir() {
        let mut digests = Vec::new();
        for file in collect_files(target, max_depth)? {
            digests.push(digest_file(&file)?);
        }
        return Ok(digests);
    }
    Err(VercatError::InvalidFile(format!(
        "the path [{}] must exist and be a regular file or directory",
        target.display()
    )))
}
