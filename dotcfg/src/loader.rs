//! Loading configuration files from disk.
//!
//! Reading is delegated to a [`FileReader`], so tests and embedders can hand
//! the loader an in-memory source instead of the filesystem.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::ParsedConfig;
use crate::error::Result;
use crate::format::FileType;

/// Source of file contents.
///
/// Any `Fn(&Path) -> io::Result<Vec<u8>>` closure is a reader.
///
/// # Examples
///
/// ```
/// use dotcfg::ConfigLoader;
/// use std::path::Path;
///
/// let loader = ConfigLoader::new().with_reader(|_: &Path| -> std::io::Result<Vec<u8>> {
///     Ok(b"username = foo\n".to_vec())
/// });
///
/// let config = loader.load("dummy.conf", "conf").unwrap();
/// assert_eq!(config.get("username").unwrap(), "foo");
/// ```
pub trait FileReader {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error encountered while reading.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<F> FileReader for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// Loads and decodes configuration files.
///
/// # Examples
///
/// ```no_run
/// use dotcfg::ConfigLoader;
///
/// let config = ConfigLoader::new().load("/etc/app/settings.ini", "ini").unwrap();
/// println!("{}", config.get("server.port").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<R = FsReader> {
    reader: R,
}

impl ConfigLoader<FsReader> {
    /// Creates a loader that reads from the filesystem.
    #[must_use]
    pub const fn new() -> Self {
        Self { reader: FsReader }
    }
}

impl<R> ConfigLoader<R> {
    /// Replaces the reader.
    #[must_use]
    pub fn with_reader<T: FileReader>(self, reader: T) -> ConfigLoader<T> {
        ConfigLoader { reader }
    }
}

impl<R: FileReader> ConfigLoader<R> {
    /// Loads `path` using a format tag such as `"conf"` or `"json"`.
    ///
    /// The tag is validated before the file is read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// for an unknown tag, [`Error::Io`](crate::Error::Io) if the file cannot
    /// be read, and [`Error::Decode`](crate::Error::Decode) if its content is
    /// malformed.
    pub fn load(&self, path: impl AsRef<Path>, tag: &str) -> Result<ParsedConfig> {
        let file_type: FileType = tag.parse()?;
        self.load_as(path, file_type)
    }

    /// Loads `path` as the given file type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
    /// [`Error::Decode`](crate::Error::Decode) if its content is malformed.
    pub fn load_as(&self, path: impl AsRef<Path>, file_type: FileType) -> Result<ParsedConfig> {
        let path = path.as_ref();
        log::debug!("Loading {} as {file_type}", path.display());

        let content = self.reader.read(path)?;
        let config = ParsedConfig::from_bytes(file_type, &content).map_err(|err| {
            log::debug!("Failed to decode {}: {err}", path.display());
            err
        })?;

        log::debug!("Loaded {} keys from {}", config.len(), path.display());
        Ok(config)
    }

    /// Loads `path`, inferring the file type from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// if the extension is not recognized, otherwise the same errors as
    /// [`load_as`](Self::load_as).
    pub fn load_detected(&self, path: impl AsRef<Path>) -> Result<ParsedConfig> {
        let path = path.as_ref();
        let file_type = FileType::from_path(path)?;
        self.load_as(path, file_type)
    }
}

/// Loads `path` from the filesystem using a format tag.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
///
/// # Examples
///
/// ```no_run
/// let config = dotcfg::load("app.yaml", "yaml").unwrap();
/// let host = config.get("database.host").unwrap();
/// ```
pub fn load(path: impl AsRef<Path>, tag: &str) -> Result<ParsedConfig> {
    ConfigLoader::new().load(path, tag)
}
