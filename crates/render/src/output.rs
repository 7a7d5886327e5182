//! Where saved images and parameter logs land on disk.
//!
//! Images always live in the images directory: a requested path elsewhere is
//! re-rooted there by file name. The parameter log for `images/foo.png` is
//! `logs/foo_params.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use sierpinski_core::{FractalError, RunParams};

#[cfg(feature = "png")]
use crate::raster::Raster;

pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// The two output directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub images: PathBuf,
    pub logs: PathBuf,
}

impl Default for OutputDirs {
    fn default() -> Self {
        Self {
            images: PathBuf::from(DEFAULT_IMAGES_DIR),
            logs: PathBuf::from(DEFAULT_LOGS_DIR),
        }
    }
}

impl OutputDirs {
    /// Resolves the final image path for a requested output path.
    ///
    /// Paths already under the images directory are kept; anything else is
    /// moved there by file name. A missing extension becomes `.png`; any
    /// extension other than `png` is rejected with
    /// [`FractalError::UnsupportedFormat`].
    pub fn image_path(&self, requested: &Path) -> Result<PathBuf, FractalError> {
        let mut path = if requested.starts_with(&self.images) {
            requested.to_path_buf()
        } else {
            let name = requested.file_name().ok_or_else(|| {
                FractalError::Io(format!("no file name in {}", requested.display()))
            })?;
            self.images.join(name)
        };
        match path.extension() {
            None => {
                path.set_extension("png");
            }
            Some(ext) if ext.eq_ignore_ascii_case("png") => {}
            Some(_) => {
                return Err(FractalError::UnsupportedFormat(
                    requested.display().to_string(),
                ))
            }
        }
        Ok(path)
    }

    /// Parameter log path for a saved image: `<logs>/<image stem>_params.txt`.
    pub fn log_path(&self, image: &Path) -> Result<PathBuf, FractalError> {
        let stem = image
            .file_stem()
            .ok_or_else(|| FractalError::Io(format!("no file name in {}", image.display())))?;
        let mut name = stem.to_os_string();
        name.push("_params.txt");
        Ok(self.logs.join(name))
    }

    /// Creates both directories if they do not exist.
    pub fn create(&self) -> Result<(), FractalError> {
        fs::create_dir_all(&self.images)?;
        fs::create_dir_all(&self.logs)?;
        Ok(())
    }
}

/// Files written by [`save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub image: PathBuf,
    pub log: Option<PathBuf>,
}

/// Saves `raster` as an image under the images directory and, when
/// `with_log` is set, the matching parameter log under the logs directory.
#[cfg(feature = "png")]
pub fn save(
    raster: &Raster,
    params: &RunParams,
    dirs: &OutputDirs,
    requested: &Path,
    with_log: bool,
) -> Result<Saved, FractalError> {
    let image = dirs.image_path(requested)?;
    if let Some(parent) = image.parent() {
        fs::create_dir_all(parent)?;
    }
    crate::snapshot::write_png(raster, &image)?;
    info!("wrote image {}", image.display());

    let log = if with_log {
        let path = dirs.log_path(&image)?;
        write_params_log(params, &path)?;
        Some(path)
    } else {
        None
    };
    Ok(Saved { image, log })
}

/// Writes the parameter log for `params` to `path`, replacing any existing file.
pub fn write_params_log(params: &RunParams, path: &Path) -> Result<(), FractalError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, params.to_log())?;
    info!("wrote parameter log {}", path.display());
    Ok(())
}
