use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops::FilterType};

use crate::{
    error::{MorphkitError, MorphkitResult},
    sheet::CellSize,
};

/// List the `*.png` files in `dir`, sorted lexicographically.
///
/// The directory listing order is platform-defined, so the paths are sorted
/// up front; the later frame-key sort is stable and inherits this order for
/// ties. A missing directory and an empty match set are both reported as
/// [`MorphkitError::InputNotFound`].
pub fn discover_frames(dir: &Path) -> MorphkitResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        MorphkitError::input_not_found(format!(
            "cannot read input directory '{}': {e}",
            dir.display()
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if name.ends_with(".png") {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(MorphkitError::input_not_found(format!(
            "no input images found in '{}'",
            dir.display()
        )));
    }

    paths.sort();
    Ok(paths)
}

/// Read and decode one frame, then cover-fit it to exactly `cell`.
///
/// The fit preserves aspect ratio: the image is scaled with Lanczos3 until
/// the cell is fully covered, then center-cropped to the cell bounds.
pub fn load_cell(path: &Path, cell: CellSize) -> MorphkitResult<RgbaImage> {
    let bytes =
        std::fs::read(path).map_err(|e| MorphkitError::unreadable_image(path, e))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| MorphkitError::unreadable_image(path, e))?;

    Ok(decoded
        .resize_to_fill(cell.width, cell.height, FilterType::Lanczos3)
        .into_rgba8())
}
