use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Suffix a file name must carry to be scanned.
pub const SOURCE_SUFFIX: &str = ".go";

/// File scanner for the target directory.
///
/// The `FileScanner` lists the immediate entries of a directory and keeps every non-directory
/// entry whose name ends in `.go`. Subdirectories are never entered. Entries come back sorted by
/// file name so that later stages see files in a stable order.
///
/// # Example
///
/// ```no_run
/// use struct_graph::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./pkg/model"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Go files", result.go_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of a directory scan.
///
/// Contains the discovered source files and any warnings encountered along the way.
pub struct ScanResult {
    /// Paths of the `.go` entries directly inside the root, in file-name order
    pub go_files: Vec<PathBuf>,
    /// Warning messages for entries that could not be inspected
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Lists the `.go` files directly inside the root directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryAccess`] if the root does not exist, is not a directory, or
    /// cannot be listed. Problems with individual entries are recorded as warnings instead.
    pub fn scan(&self) -> Result<ScanResult> {
        let metadata = fs::metadata(&self.root_path).map_err(|source| self.access_error(source))?;
        if !metadata.is_dir() {
            return Err(self.access_error(io::Error::other("not a directory")));
        }

        let mut go_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let is_source = entry.file_name().to_string_lossy().ends_with(SOURCE_SUFFIX);

                    // Symlinks are not followed, so a dangling link is still listed
                    if is_source && !entry.file_type().is_dir() {
                        debug!("Found source file: {}", path.display());
                        go_files.push(path.to_path_buf());
                    }
                }
                // The root itself could not be read
                Err(e) if e.depth() == 0 => {
                    return Err(self.access_error(io::Error::from(e)));
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult { go_files, warnings })
    }

    fn access_error(&self, source: io::Error) -> Error {
        Error::DirectoryAccess {
            path: self.root_path.clone(),
            source,
        }
    }
}
