use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
const DISC_TEXTURE_SIZE: i32 = 512; // Side of the square texture mapped onto a disc

#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in {0:?}")]
    NoImages(PathBuf),

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to upload texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// --- Expand sources into an ordered list of image files ---
// Files are kept in the order given, directories contribute their images sorted by file name.
pub fn resolve_image_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>, TextureError> {
    let mut paths = Vec::new();
    for source in sources {
        if source.is_dir() {
            paths.extend(load_sorted_image_paths(source)?);
        } else {
            paths.push(source.clone());
        }
    }
    Ok(paths)
}

pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, TextureError> {
    let io_err = |source| TextureError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(TextureError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical: proceed without rotation
            tracing::warn!(path = ?image_path, error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Crop to the centered square and cut out a disc ---
fn cut_disc(image: &mut Image) {
    let side = image.width().min(image.height());
    let crop = Rectangle::new(
        ((image.width() - side) / 2) as f32,
        ((image.height() - side) / 2) as f32,
        side as f32,
        side as f32,
    );
    image.crop(crop);
    image.resize(DISC_TEXTURE_SIZE, DISC_TEXTURE_SIZE);

    let radius = DISC_TEXTURE_SIZE / 2;
    let mut mask = Image::gen_image_color(DISC_TEXTURE_SIZE, DISC_TEXTURE_SIZE, Color::BLACK);
    mask.draw_circle(radius, radius, radius, Color::WHITE);
    image.alpha_mask(&mask);
}

// --- Load Image, Apply EXIF Rotation, Create Disc Texture ---
pub fn load_disc_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, TextureError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| TextureError::Io { path: image_path.to_path_buf(), source })?;

    // EXIF is only read reliably from JPEG
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| TextureError::Decode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        tracing::debug!(path = ?image_path, orientation, "applied EXIF rotation");
    }

    cut_disc(&mut image);

    rl.load_texture_from_image(thread, &image).map_err(|e| TextureError::Upload {
        path: image_path.to_path_buf(),
        reason: e.to_string(),
    })
}
