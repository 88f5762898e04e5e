mod image;
mod label;
mod progress;

pub use image::{detect_image_kind, label_path_for, DecodedImage, ImageKind};
pub use label::{format_label_file, normalize_loaded_label, LabelRecord};
pub use progress::{ImageCursor, Progress};
