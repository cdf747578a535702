/// Photo library access
///
/// This module handles:
/// - The native file picker (the only way an image enters the editor)
/// - Decoding picked files on a blocking worker
/// - Writing saved crops into the user's Pictures directory

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::DynamicImage;
use rfd::FileDialog;
use thiserror::Error;

/// Subdirectory of the Pictures folder that receives saved crops.
const OUTPUT_DIR_NAME: &str = "Photo Crop";

/// File extensions offered by the picker.
const PICKER_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

/// A decoded photo. Newtyped so messages can carry one without dumping
/// megabytes of pixels into debug output.
#[derive(Clone)]
pub struct Photo {
    pub image: DynamicImage,
}

impl Photo {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

/// Errors that can occur while writing into the photo library.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not determine the Pictures directory")]
    NoPicturesDirectory,
    #[error("failed to create {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Show the native picker. Returns `None` on cancellation.
pub fn pick_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select a Photo")
        .add_filter("Images", &PICKER_EXTENSIONS)
        .pick_file()
}

/// Where saved crops land, if the platform exposes a Pictures directory.
pub fn output_dir() -> Option<PathBuf> {
    dirs::picture_dir().map(|pictures| pictures.join(OUTPUT_DIR_NAME))
}

/// Decode a picked file in the background.
pub async fn load(path: PathBuf) -> Result<Photo, String> {
    // Spawn blocking because decoding large photos is CPU-intensive
    tokio::task::spawn_blocking(move || {
        let image = image::open(&path)
            .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

        println!(
            "📷 Loaded image: {}x{} from {}",
            image.width(),
            image.height(),
            path.display()
        );

        Ok(Photo::new(image))
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

/// Persist a final image into the photo library in the background.
pub async fn save_to_pictures(photo: Photo) -> Result<PathBuf, String> {
    tokio::task::spawn_blocking(move || {
        let dir = output_dir().ok_or(SaveError::NoPicturesDirectory);
        let path = dir
            .and_then(|dir| write_to_dir(&photo.image, &dir))
            .map_err(|e| e.to_string())?;

        println!("💾 Saved crop to {}", path.display());
        Ok(path)
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

/// Write a timestamped PNG into `dir`, creating it if needed.
fn write_to_dir(image: &DynamicImage, dir: &Path) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let filename = format!("crop_{}.png", Local::now().format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);
    image.save(&path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_dir_produces_a_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::new_rgb8(32, 16);

        let path = write_to_dir(&image, dir.path()).unwrap();

        assert!(path.file_name().unwrap().to_string_lossy().starts_with("crop_"));
        assert_eq!(path.extension().unwrap(), "png");

        let reread = image::open(&path).unwrap();
        assert_eq!((reread.width(), reread.height()), (32, 16));
    }

    #[test]
    fn test_write_to_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Pictures").join(OUTPUT_DIR_NAME);
        let image = DynamicImage::new_rgb8(8, 8);

        let path = write_to_dir(&image, &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_photo_debug_stays_compact() {
        let photo = Photo::new(DynamicImage::new_rgb8(640, 480));
        assert_eq!(format!("{:?}", photo), "Photo { width: 640, height: 480 }");
    }
}
