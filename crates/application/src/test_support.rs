use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use lite_label_domain::{detect_image_kind, DecodedImage};

use crate::{ApplicationError, ImageDecoder, ImageScanner, LabelStore};

pub(crate) struct FakeScanner {
    images: Vec<PathBuf>,
}

impl FakeScanner {
    pub(crate) fn new(images: &[&str]) -> Self {
        Self {
            images: images.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ImageScanner for FakeScanner {
    fn scan_images(&self, _folder: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        Ok(self.images.clone())
    }
}

/// Label files kept in memory; clones share the same backing map.
#[derive(Clone, Default)]
pub(crate) struct FakeLabelStore {
    files: Rc<RefCell<HashMap<PathBuf, String>>>,
}

impl FakeLabelStore {
    pub(crate) fn insert(&self, path: &str, contents: &str) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), contents.to_string());
    }

    pub(crate) fn contents(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl LabelStore for FakeLabelStore {
    fn read_label(&self, label_path: &Path) -> Result<Option<String>, ApplicationError> {
        Ok(self.files.borrow().get(label_path).cloned())
    }

    fn write_label(&self, label_path: &Path, contents: &str) -> Result<(), ApplicationError> {
        self.files
            .borrow_mut()
            .insert(label_path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeDecoder {
    failing: Option<PathBuf>,
}

impl FakeDecoder {
    pub(crate) fn failing_on(path: &str) -> Self {
        Self {
            failing: Some(PathBuf::from(path)),
        }
    }
}

impl ImageDecoder for FakeDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ApplicationError> {
        if self.failing.as_deref() == Some(path) {
            return Err(ApplicationError::Decode(format!(
                "corrupt image: {}",
                path.display()
            )));
        }
        Ok(DecodedImage {
            width: 4,
            height: 3,
            kind: detect_image_kind(path),
            rgba: vec![0; 4 * 3 * 4],
        })
    }
}
