//! Recipe output

use crate::RecipeMetadata;
use pypi2pkgbuild_errors::{DraftError, Error};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// File name of the generated recipe
pub const RECIPE_FILE_NAME: &str = "PKGBUILD";

/// Directory name a recipe is written to: `<name>-<version>`
#[must_use]
pub fn recipe_dir_name(metadata: &RecipeMetadata) -> String {
    format!("{}-{}", metadata.name, metadata.version)
}

/// Write `content` to `<base_dir>/<name>-<version>/PKGBUILD`
///
/// The directory is created if needed. An existing recipe is never
/// overwritten.
///
/// # Errors
///
/// Returns `DraftError::RecipeExists` if the recipe file is already
/// there, or an I/O error if the directory or file cannot be created.
pub async fn write_recipe(
    base_dir: &Path,
    metadata: &RecipeMetadata,
    content: &str,
) -> Result<PathBuf, Error> {
    let dir_name = recipe_dir_name(metadata);
    let dir = base_dir.join(&dir_name);

    match fs::create_dir(&dir).await {
        Ok(()) => debug!(dir = %dir.display(), "created recipe directory"),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => return Err(Error::io_with_path(&e, &dir)),
    }

    let path = dir.join(RECIPE_FILE_NAME);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(DraftError::RecipeExists { path: dir_name }.into());
        }
        Err(e) => return Err(Error::io_with_path(&e, &path)),
    };

    file.write_all(content.as_bytes())
        .await
        .map_err(|e| Error::io_with_path(&e, &path))?;
    file.flush()
        .await
        .map_err(|e| Error::io_with_path(&e, &path))?;

    Ok(path)
}
