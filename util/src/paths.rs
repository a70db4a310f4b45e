use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Image storage root (absolute), from `config::image_storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn image_storage_root() -> PathBuf {
    let root = config::image_storage_root();
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Path to a lesson image under the storage root (does not create).
/// Example: image_path("math.png") → {IMAGE_STORAGE_ROOT}/math.png
pub fn image_path(filename: &str) -> PathBuf {
    image_storage_root().join(filename)
}
