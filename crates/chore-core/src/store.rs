//! Reading and writing the todo file.
//!
//! [`crate::codec`] does the encoding; this module only moves the text to and
//! from disk and resolves where the file lives.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    codec,
    error::{Result, TodoError},
    models::{TodoList, TodoRecord},
};

/// Extension given to todo files that are named without one.
pub const FILE_EXTENSION: &str = "txt";

/// A todo file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    /// Use `path` exactly as given.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decode the file.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::SourceNotFound` if the file does not exist,
    /// `TodoError::FileSystem` if it cannot be read, and
    /// `TodoError::MalformedRecord` if any line fails to decode.
    pub fn load(&self) -> Result<TodoList> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TodoError::SourceNotFound {
                path: self.path.clone(),
            },
            _ => TodoError::FileSystem {
                path: self.path.clone(),
                source: e,
            },
        })?;
        Ok(codec::load(&text)?.into())
    }

    /// Like [`TodoFile::load`], but a missing file is an empty list.
    pub fn load_or_empty(&self) -> Result<TodoList> {
        match self.load() {
            Err(TodoError::SourceNotFound { .. }) => Ok(TodoList::new()),
            other => other,
        }
    }

    /// Encode and write `records`, replacing the file's contents.
    ///
    /// Missing parent directories are created.
    pub fn save(&self, records: &[TodoRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.path, codec::save(records)).map_err(|e| TodoError::FileSystem {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Builder that resolves which todo file to use.
#[derive(Debug, Clone, Default)]
pub struct TodoFileBuilder {
    path: Option<PathBuf>,
}

impl TodoFileBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom todo file path.
    ///
    /// A path without an extension gets `.txt` appended. If not specified,
    /// uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/chore/todos.txt` or `~/.local/share/chore/todos.txt`
    pub fn with_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the path.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::XdgDirectory` if no path was given and the XDG
    /// data directory cannot be prepared.
    pub fn build(self) -> Result<TodoFile> {
        let path = match self.path {
            Some(path) => with_default_extension(path),
            None => Self::default_path()?,
        };
        Ok(TodoFile { path })
    }

    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("chore")
            .place_data_file("todos.txt")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}

fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(FILE_EXTENSION);
    }
    path
}
