use std::path::{Path, PathBuf};

use lite_label_application::{ApplicationError, ImageScanner};
use lite_label_domain::{detect_image_kind, ImageKind};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Non-recursive scanner: every `.png` in directory order, followed by every
/// `.jpg` in directory order. Hidden entries (leading `.`) are skipped, the
/// same as a shell `*` pattern.
#[derive(Debug, Default)]
pub struct WalkdirImageScanner;

impl ImageScanner for WalkdirImageScanner {
    fn scan_images(&self, folder: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        if !folder.is_dir() {
            warn!(folder = %folder.display(), "image folder does not exist or is not a directory");
            return Ok(Vec::new());
        }

        let files: Vec<PathBuf> = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| !is_hidden(entry))
            .filter(|entry| entry.path().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect();

        let mut images = Vec::new();
        for kind in [ImageKind::Png, ImageKind::Jpeg] {
            images.extend(
                files
                    .iter()
                    .filter(|path| detect_image_kind(path) == kind)
                    .cloned(),
            );
        }

        debug!(scanned = files.len(), images = images.len(), "scanned image folder");
        Ok(images)
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
