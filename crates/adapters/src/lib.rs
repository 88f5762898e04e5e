pub mod fs;
pub mod presenters;

pub use fs::{FsLabelStore, WalkdirImageScanner};
pub use presenters::{present_label_row, present_view_summary};

use std::path::Path;

use image::io::Reader as ImageReader;
use lite_label_application::{
    ApplicationError, ApplicationService, ImageDecoder, LabelerSession,
};
use lite_label_domain::{detect_image_kind, DecodedImage, ImageKind};

#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ApplicationError> {
        let kind = detect_image_kind(path);
        if kind == ImageKind::Unsupported {
            return Err(ApplicationError::Decode(format!(
                "unsupported image format: {}",
                path.display()
            )));
        }

        let image = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?
            .decode()
            .map_err(|error| {
                ApplicationError::Decode(format!("{}: {error}", path.display()))
            })?;

        let rgba = image.to_rgba8();
        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            kind,
            rgba: rgba.into_raw(),
        })
    }
}

/// Opens a session over `folder` backed by the real filesystem and decoder.
pub fn open_filesystem_service(folder: &Path) -> Result<ApplicationService, ApplicationError> {
    let session = LabelerSession::open(
        folder,
        &WalkdirImageScanner,
        Box::new(FsLabelStore),
        Box::new(ImageCrateDecoder),
    )?;
    Ok(ApplicationService::new(session))
}
