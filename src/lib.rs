#[macro_use]
extern crate log;

mod error;
mod optimize;
mod sniff;
use std::path::{Path, PathBuf};

pub use error::{Error, ErrorKind, Result};
pub use sniff::ContentType;

pub fn optimize(path: impl AsRef<Path>) -> Result<PathBuf> {
    optimize::optimize(path)
}
