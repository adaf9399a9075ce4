//! Output directory and file naming for tiles, frames and exports

use crate::canvas::surface::Canvas;
use crate::io::configuration::{EXPORT_INFIX, FRAME_INFIX, OUTPUT_EXTENSION};
use crate::io::error::{Result, TileError, invalid_parameter};
use std::path::{Path, PathBuf};

/// Where generated images are written
///
/// The file name is validated once here: it must end in `.png`, have a
/// non-empty stem and carry no directory components. The directory is only
/// created when the first image is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    directory: PathBuf,
    file_name: String,
}

impl OutputTarget {
    /// Validated output location
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is not a bare `<stem>.png` name
    pub fn new<P: Into<PathBuf>>(directory: P, file_name: &str) -> Result<Self> {
        validate_file_name(file_name)?;
        Ok(Self {
            directory: directory.into(),
            file_name: file_name.to_string(),
        })
    }

    /// Directory images are written into
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name of the static tile
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without the `.png` extension
    pub fn base_name(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }

    /// Path of the static tile
    pub fn tile_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Path of animation frame `index`: `{base}_frame_{index}.png`
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.indexed_path(FRAME_INFIX, index)
    }

    /// Path a frame is exported to from playback: `{base}_export_{index}.png`
    pub fn export_path(&self, index: usize) -> PathBuf {
        self.indexed_path(EXPORT_INFIX, index)
    }

    /// Same directory, different file name
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is not a bare `<stem>.png` name
    pub fn with_file_name(&self, file_name: &str) -> Result<Self> {
        Self::new(self.directory.clone(), file_name)
    }

    fn indexed_path(&self, infix: &str, index: usize) -> PathBuf {
        self.directory
            .join(format!("{}{infix}{index}.{OUTPUT_EXTENSION}", self.base_name()))
    }

    /// Create the output directory if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn ensure_directory(&self) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(|e| TileError::FileSystem {
            path: self.directory.clone(),
            operation: "create directory",
            source: e,
        })
    }

    /// Save the static tile
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the image
    /// cannot be written
    pub fn save(&self, canvas: &Canvas) -> Result<PathBuf> {
        self.save_to(canvas, self.tile_path())
    }

    /// Save animation frame `index`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the image
    /// cannot be written
    pub fn save_frame(&self, canvas: &Canvas, index: usize) -> Result<PathBuf> {
        self.save_to(canvas, self.frame_path(index))
    }

    fn save_to(&self, canvas: &Canvas, path: PathBuf) -> Result<PathBuf> {
        self.ensure_directory()?;
        canvas.save_png(&path)?;
        tracing::info!(path = %path.display(), "saved image");
        Ok(path)
    }

    /// Remove the static tile from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed
    pub fn delete(&self) -> Result<()> {
        let path = self.tile_path();
        std::fs::remove_file(&path).map_err(|e| TileError::FileSystem {
            path,
            operation: "remove file",
            source: e,
        })
    }
}

fn validate_file_name(file_name: &str) -> Result<()> {
    let path = Path::new(file_name);
    let is_bare = path.file_name().and_then(|n| n.to_str()) == Some(file_name);
    if !is_bare {
        return Err(invalid_parameter(
            "file_name",
            &file_name,
            &"must be a file name without directory components",
        ));
    }

    let has_png_extension = path.extension().and_then(|e| e.to_str()) == Some(OUTPUT_EXTENSION);
    let has_stem = path.file_stem().is_some_and(|s| !s.is_empty());
    if !has_png_extension || !has_stem {
        return Err(invalid_parameter(
            "file_name",
            &file_name,
            &"must be a name ending in .png",
        ));
    }
    Ok(())
}
