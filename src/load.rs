//! Facilities for reading program images from disk.

use crate::image::RomImage;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

//===========================================================================//

/// An error encountered while reading an input file into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file's size could not be determined.
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// There was no room in memory for the file's contents.
    #[error("cannot allocate {size} bytes for {}", path.display())]
    Allocate {
        /// The path of the input file.
        path: PathBuf,
        /// The number of bytes that were requested.
        size: u64,
    },
    /// The file could not be read to completion.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl LoadError {
    /// Returns the path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Stat { path, .. }
            | LoadError::Allocate { path, .. }
            | LoadError::Read { path, .. } => path,
        }
    }

    /// Returns the process exit code that reports this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::Open { .. } => 2,
            LoadError::Stat { .. } => 3,
            LoadError::Allocate { .. } => 4,
            LoadError::Read { .. } => 5,
        }
    }
}

//===========================================================================//

/// Reads the entire file at `path` into memory.
pub fn load_file(path: &Path) -> Result<RomImage, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().map_err(|source| LoadError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    let size = metadata.len();
    let allocate_error =
        || LoadError::Allocate { path: path.to_path_buf(), size };
    let capacity = usize::try_from(size).map_err(|_| allocate_error())?;
    let mut data = Vec::<u8>::new();
    if let Err(err) = data.try_reserve_exact(capacity) {
        debug!("{}: {}", path.display(), err);
        return Err(allocate_error());
    }
    let read_error =
        |source| LoadError::Read { path: path.to_path_buf(), source };
    file.take(size).read_to_end(&mut data).map_err(read_error)?;
    if data.len() != capacity {
        let message = format!("read {} of {} bytes", data.len(), size);
        return Err(read_error(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            message,
        )));
    }
    debug!("loaded {} ({} bytes)", path.display(), size);
    Ok(RomImage::from(data))
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{LoadError, load_file};
    use crate::image::ProgramImage;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cpu16dis-{}-{}", std::process::id(), name))
    }

    #[test]
    fn loads_whole_file() {
        let path = temp_path("whole.bin");
        std::fs::write(&path, b"\x00\xab\x37\x00").expect("write");
        let result = load_file(&path);
        let _ = std::fs::remove_file(&path);
        let image = result.expect("load");
        assert_eq!(image.len(), 4);
        assert_eq!(image.as_bytes(), &[0x00, 0xab, 0x37, 0x00]);
    }

    #[test]
    fn loads_empty_file() {
        let path = temp_path("empty.bin");
        std::fs::write(&path, b"").expect("write");
        let result = load_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.expect("load").is_empty());
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = temp_path("does-not-exist.bin");
        let error = load_file(&path).expect_err("missing");
        assert!(matches!(error, LoadError::Open { .. }));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.path(), path.as_path());
        assert!(error.to_string().starts_with("cannot open "));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let path = PathBuf::from("x");
        let io_error = || std::io::Error::other("test");
        let errors = [
            LoadError::Open { path: path.clone(), source: io_error() },
            LoadError::Stat { path: path.clone(), source: io_error() },
            LoadError::Allocate { path: path.clone(), size: 1 },
            LoadError::Read { path, source: io_error() },
        ];
        let codes: Vec<u8> =
            errors.iter().map(LoadError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5]);
    }
}

//===========================================================================//
