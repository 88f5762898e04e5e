use std::path::{Path, PathBuf};

use lite_label_domain::DecodedImage;

use crate::ApplicationError;

pub trait ImageScanner {
    /// Lists labelable images directly inside `folder`, in scan order.
    ///
    /// A folder that does not exist yields an empty list rather than an error.
    fn scan_images(&self, folder: &Path) -> Result<Vec<PathBuf>, ApplicationError>;
}

pub trait LabelStore {
    /// `Ok(None)` when no label file exists yet.
    fn read_label(&self, label_path: &Path) -> Result<Option<String>, ApplicationError>;

    fn write_label(&self, label_path: &Path, contents: &str) -> Result<(), ApplicationError>;
}

pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ApplicationError>;
}
