use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use lite_label_application::{ApplicationError, LabelStore};

/// Label files stored next to their images. Writes truncate; there is no
/// locking, so concurrent writers race and the last one wins.
#[derive(Debug, Default)]
pub struct FsLabelStore;

impl LabelStore for FsLabelStore {
    fn read_label(&self, label_path: &Path) -> Result<Option<String>, ApplicationError> {
        match fs::read_to_string(label_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(ApplicationError::Io(format!(
                "failed to read {}: {error}",
                label_path.display()
            ))),
        }
    }

    fn write_label(&self, label_path: &Path, contents: &str) -> Result<(), ApplicationError> {
        fs::write(label_path, contents).map_err(|error| {
            ApplicationError::Io(format!("failed to write {}: {error}", label_path.display()))
        })
    }
}
