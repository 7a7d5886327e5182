//! Exit codes for the `sierpinski` binary.
//!
//! | code | cause                                                        |
//! |------|--------------------------------------------------------------|
//! | 0    | success                                                      |
//! | 2    | clap rejected the arguments (negative count, unknown flag)   |
//! | 10   | nothing to draw: unknown shape, zero points, zero-size image |
//! | 11   | the image or parameter log could not be written              |
//! | 12   | a colour flag or the output file name is unusable            |
//! | 13   | JSON output failed                                           |

use sierpinski_core::FractalError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// The requested run cannot produce points or a raster.
    Generation(FractalError),
    /// Writing under `--images-dir` / `--logs-dir` or to stdout failed.
    Io(String),
    /// `--point-color`, `--bg-color` or `--output` was rejected.
    Input(String),
    /// `--json` output could not be encoded.
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generation(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<FractalError> for CliError {
    fn from(e: FractalError) -> Self {
        match e {
            FractalError::Io(msg) => CliError::Io(msg),
            e @ (FractalError::InvalidColor(_) | FractalError::UnsupportedFormat(_)) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Generation(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_core::{Shape, Srgb};

    #[test]
    fn unparsable_point_color_exits_with_input_code() {
        let parse_err = "0,0,2".parse::<Srgb>().unwrap_err();
        let err = CliError::from(parse_err);
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("color"), "got: {err}");
    }

    #[test]
    fn jpeg_output_name_exits_with_input_code() {
        let err = CliError::from(FractalError::UnsupportedFormat("fractal.jpg".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("fractal.jpg"), "got: {err}");
    }

    #[test]
    fn unknown_shape_exits_with_generation_code() {
        let err = CliError::from(Shape::from_name("pentagon").unwrap_err());
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("pentagon"), "got: {err}");
    }

    #[test]
    fn zero_points_and_zero_size_exit_with_generation_code() {
        assert_eq!(CliError::from(FractalError::InvalidPointCount).exit_code(), 10);
        assert_eq!(CliError::from(FractalError::InvalidDimensions).exit_code(), 10);
    }

    #[test]
    fn unwritable_images_dir_exits_with_io_code() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("images");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let io = std::fs::create_dir_all(blocker.join("sub")).unwrap_err();
        let err = CliError::from(FractalError::from(io));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn closed_stdout_exits_with_io_code() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(CliError::from(io).exit_code(), 11);
    }

    #[test]
    fn broken_json_exits_with_serialization_code() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        assert_eq!(CliError::from(bad).exit_code(), 13);
    }
}
