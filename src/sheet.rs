use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{MorphkitError, MorphkitResult};

pub mod composite;
pub mod key;
pub mod load;

/// Pixel size of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> MorphkitResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphkitError::validation("cell dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Grid layout of the sheet, rows by columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub fn new(rows: u32, cols: u32) -> MorphkitResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MorphkitError::validation("grid shape must be > 0 in both axes"));
        }
        Ok(Self { rows, cols })
    }

    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// One sheet job: where the frames come from, how many to take, and the
/// geometry of the composited grid.
///
/// `shape: None` lays all selected frames out in a single row.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SheetConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub cell: CellSize,
    pub take: usize,
    pub shape: Option<GridShape>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("images"),
            output_path: PathBuf::from("image.jpg"),
            cell: CellSize {
                width: 1000,
                height: 1000,
            },
            take: 24,
            shape: None,
        }
    }
}

impl SheetConfig {
    /// Re-check invariants that serde deserialization cannot enforce.
    pub fn validate(&self) -> MorphkitResult<()> {
        CellSize::new(self.cell.width, self.cell.height)?;
        if self.take == 0 {
            return Err(MorphkitError::validation("take must be > 0"));
        }
        if let Some(shape) = self.shape {
            GridShape::new(shape.rows, shape.cols)?;
        }
        Ok(())
    }
}

/// Final opaque sheet raster, row-major RGB8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetImage {
    pub width: u32,
    pub height: u32,
    pub rgb8: Vec<u8>,
}

/// Run the full sheet pipeline: discover frames, stable-sort them by
/// `(morph, frame)` key, take the first `take`, cover-fit each to the cell
/// size and composite them row-major over a white canvas.
///
/// Fails fast with [`MorphkitError::InsufficientFrames`] before any pixel
/// work when the grid asks for more cells than frames were selected.
#[tracing::instrument(skip(config))]
pub fn compose_sheet(config: &SheetConfig) -> MorphkitResult<SheetImage> {
    config.validate()?;

    let discovered = load::discover_frames(&config.input_dir)?;
    let selected = key::sort_by_frame_key(discovered, config.take);

    let shape = match config.shape {
        Some(shape) => shape,
        None => GridShape::new(1, u32::try_from(selected.len()).unwrap_or(u32::MAX))?,
    };

    let needed = shape.cell_count();
    if selected.len() < needed {
        return Err(MorphkitError::InsufficientFrames {
            needed,
            found: selected.len(),
        });
    }

    let canvas_w = config
        .cell
        .width
        .checked_mul(shape.cols)
        .ok_or_else(|| MorphkitError::validation("sheet width overflows u32"))?;
    let canvas_h = config
        .cell
        .height
        .checked_mul(shape.rows)
        .ok_or_else(|| MorphkitError::validation("sheet height overflows u32"))?;

    tracing::debug!(
        selected = selected.len(),
        rows = shape.rows,
        cols = shape.cols,
        canvas_w,
        canvas_h,
        "composing sheet"
    );

    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, image::Rgb([255, 255, 255]));

    for row in 0..shape.rows {
        for col in 0..shape.cols {
            let idx = (row * shape.cols + col) as usize;
            let cell = load::load_cell(&selected[idx], config.cell)?;
            composite::paste_over(
                &mut canvas,
                &cell,
                col * config.cell.width,
                row * config.cell.height,
            )?;
        }
    }

    Ok(SheetImage {
        width: canvas_w,
        height: canvas_h,
        rgb8: canvas.into_raw(),
    })
}

/// Encode `sheet` to `path`, picking the format from the file extension
/// (`.jpg`/`.jpeg` or `.png`). Parent directories are created as needed.
pub fn write_sheet(sheet: &SheetImage, path: &Path) -> MorphkitResult<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    let format = match ext.as_deref() {
        Some("jpg" | "jpeg") => image::ImageFormat::Jpeg,
        Some("png") => image::ImageFormat::Png,
        _ => {
            return Err(MorphkitError::validation(format!(
                "unsupported sheet output extension in '{}'; use .jpg, .jpeg or .png",
                path.display()
            )));
        }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| MorphkitError::encoding_failure(path, e))?;
    }

    image::save_buffer_with_format(
        path,
        &sheet.rgb8,
        sheet.width,
        sheet.height,
        image::ColorType::Rgb8,
        format,
    )
    .map_err(|e| MorphkitError::encoding_failure(path, e))
}
