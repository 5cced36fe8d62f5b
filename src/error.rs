use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Target already exists: {}", .0.display())]
    TargetExists(PathBuf),
}
