use std::path::PathBuf;

use serde::Serialize;

/// Builds the contents written to a label file.
///
/// When the label text does not already mention the image path, the label is
/// wrapped as `<image_path>, "<label_text>"` followed by a newline. Otherwise
/// the text is written verbatim. Existing label files may be in either shape,
/// so both must keep round-tripping.
pub fn format_label_file(image_path: &str, label_text: &str) -> String {
    if label_text.contains(image_path) {
        label_text.to_string()
    } else {
        format!("{image_path}, \"{label_text}\"\n")
    }
}

pub fn normalize_loaded_label(raw: &str) -> String {
    raw.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRecord {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
    pub label: Option<String>,
}
