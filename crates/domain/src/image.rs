use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Unsupported,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub kind: ImageKind,
    /// Unmultiplied RGBA8, row-major.
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("kind", &self.kind)
            .field("rgba_len", &self.rgba.len())
            .finish()
    }
}

/// Extension matching is case-sensitive: only `png` and `jpg` are labelable.
pub fn detect_image_kind(path: &Path) -> ImageKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => ImageKind::Png,
        Some("jpg") => ImageKind::Jpeg,
        _ => ImageKind::Unsupported,
    }
}

pub fn label_path_for(image_path: &Path) -> PathBuf {
    image_path.with_extension("txt")
}
