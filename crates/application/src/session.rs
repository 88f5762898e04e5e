use std::path::{Path, PathBuf};

use lite_label_domain::{
    format_label_file, label_path_for, normalize_loaded_label, DecodedImage, ImageCursor,
    LabelRecord, Progress,
};
use tracing::{debug, info};

use crate::{ApplicationError, ImageDecoder, ImageScanner, LabelStore};

/// Image and trimmed label text for the current position.
pub type LoadedLabel = (Option<DecodedImage>, String);

/// One labeling session over a single folder.
///
/// The image set is fixed at construction; the cursor is the only state that
/// changes afterwards, and only through [`advance`](Self::advance) and
/// [`retreat`](Self::retreat).
pub struct LabelerSession {
    images: Vec<PathBuf>,
    cursor: ImageCursor,
    store: Box<dyn LabelStore>,
    decoder: Box<dyn ImageDecoder>,
}

impl LabelerSession {
    pub fn open(
        folder: &Path,
        scanner: &dyn ImageScanner,
        store: Box<dyn LabelStore>,
        decoder: Box<dyn ImageDecoder>,
    ) -> Result<Self, ApplicationError> {
        let images = scanner.scan_images(folder)?;
        info!(folder = %folder.display(), images = images.len(), "opened labeling session");
        Ok(Self {
            cursor: ImageCursor::new(images.len()),
            images,
            store,
            decoder,
        })
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.images.get(self.cursor.index()).map(PathBuf::as_path)
    }

    pub fn label_path(&self, image_path: &Path) -> PathBuf {
        label_path_for(image_path)
    }

    pub fn progress(&self) -> Progress {
        self.cursor.progress()
    }

    pub fn load_current(&self) -> Result<LoadedLabel, ApplicationError> {
        let Some(image_path) = self.current_image() else {
            return Ok((None, String::new()));
        };

        let label = self.current_label()?;
        let image = self.decoder.decode(image_path)?;
        Ok((Some(image), label))
    }

    /// On-disk label of the current image without decoding the image itself;
    /// `""` when the set is empty or no label file exists.
    pub fn current_label(&self) -> Result<String, ApplicationError> {
        let Some(image_path) = self.current_image() else {
            return Ok(String::new());
        };

        Ok(self
            .store
            .read_label(&self.label_path(image_path))?
            .map(|raw| normalize_loaded_label(&raw))
            .unwrap_or_default())
    }

    pub fn save_label(&self, label_text: &str) -> Result<(), ApplicationError> {
        let Some(image_path) = self.current_image() else {
            return Ok(());
        };

        let label_path = self.label_path(image_path);
        let contents = format_label_file(&image_path.to_string_lossy(), label_text);
        debug!(label_path = %label_path.display(), bytes = contents.len(), "writing label");
        self.store.write_label(&label_path, &contents)
    }

    /// Saves `label_text` for the image being left, then moves one step
    /// forward unless already at the last image.
    pub fn advance(&mut self, label_text: &str) -> Result<(LoadedLabel, Progress), ApplicationError> {
        self.save_label(label_text)?;
        let moved = self.cursor.advance();
        debug!(moved, index = self.cursor.index(), "advance");
        Ok((self.load_current()?, self.progress()))
    }

    /// Saves `label_text` for the image being left, then moves one step back
    /// unless already at the first image.
    pub fn retreat(&mut self, label_text: &str) -> Result<(LoadedLabel, Progress), ApplicationError> {
        self.save_label(label_text)?;
        let moved = self.cursor.retreat();
        debug!(moved, index = self.cursor.index(), "retreat");
        Ok((self.load_current()?, self.progress()))
    }

    pub fn records(&self) -> Result<Vec<LabelRecord>, ApplicationError> {
        self.images
            .iter()
            .map(|image_path| {
                let label_path = self.label_path(image_path);
                let label = self
                    .store
                    .read_label(&label_path)?
                    .map(|raw| normalize_loaded_label(&raw));
                Ok(LabelRecord {
                    image_path: image_path.clone(),
                    label_path,
                    label,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeDecoder, FakeLabelStore, FakeScanner};

    fn session_with(images: &[&str], store: &FakeLabelStore) -> LabelerSession {
        LabelerSession::open(
            Path::new("/d"),
            &FakeScanner::new(images),
            Box::new(store.clone()),
            Box::new(FakeDecoder::default()),
        )
        .expect("session should open")
    }

    #[test]
    fn advance_reaches_last_image_and_stays() {
        let store = FakeLabelStore::default();
        let mut session = session_with(&["/d/a.png", "/d/b.png", "/d/c.jpg"], &store);

        session.advance("x").expect("advance");
        let (_, progress) = session.advance("x").expect("advance");
        assert_eq!(progress.to_string(), "3/3");
        assert_eq!(session.current_index(), 2);

        let (_, progress) = session.advance("x").expect("advance at end");
        assert_eq!(progress.to_string(), "3/3");
        assert_eq!(session.current_image(), Some(Path::new("/d/c.jpg")));
    }

    #[test]
    fn retreat_reaches_first_image_and_stays() {
        let store = FakeLabelStore::default();
        let mut session = session_with(&["/d/a.png", "/d/b.png", "/d/c.jpg"], &store);
        session.advance("").expect("advance");
        session.advance("").expect("advance");

        session.retreat("").expect("retreat");
        let (_, progress) = session.retreat("").expect("retreat");
        assert_eq!(progress.to_string(), "1/3");

        let (_, progress) = session.retreat("").expect("retreat at start");
        assert_eq!(progress.to_string(), "1/3");
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn navigation_saves_before_moving_even_at_bounds() {
        let store = FakeLabelStore::default();
        let mut session = session_with(&["/d/only.png"], &store);

        let ((image, label), _) = session.advance("dog").expect("advance");
        assert!(image.is_some());
        assert_eq!(label, "/d/only.png, \"dog\"");
        assert_eq!(
            store.contents("/d/only.txt").as_deref(),
            Some("/d/only.png, \"dog\"\n")
        );

        session.retreat("/d/only.png cat").expect("retreat");
        assert_eq!(store.contents("/d/only.txt").as_deref(), Some("/d/only.png cat"));
    }

    #[test]
    fn advance_writes_label_for_image_being_left() {
        let store = FakeLabelStore::default();
        let mut session = session_with(&["/d/a.png", "/d/b.png"], &store);

        session.advance("first").expect("advance");

        assert_eq!(
            store.contents("/d/a.txt").as_deref(),
            Some("/d/a.png, \"first\"\n")
        );
        assert_eq!(store.contents("/d/b.txt"), None);
    }

    #[test]
    fn save_then_load_round_trips_label() {
        let store = FakeLabelStore::default();
        let session = session_with(&["/d/img1.png"], &store);

        session.save_label("/d/img1.png cat").expect("save");
        let (_, label) = session.load_current().expect("load");
        assert_eq!(label, "/d/img1.png cat");
    }

    #[test]
    fn plain_label_reloads_in_wrapped_form_and_is_then_stable() {
        let store = FakeLabelStore::default();
        let session = session_with(&["/d/img1.png"], &store);

        session.save_label("cat").expect("save");
        let (_, label) = session.load_current().expect("load");
        assert_eq!(label, "/d/img1.png, \"cat\"");

        session.save_label(&label).expect("save again");
        let (_, reloaded) = session.load_current().expect("reload");
        assert_eq!(reloaded, label);
    }

    #[test]
    fn missing_label_file_loads_as_empty() {
        let store = FakeLabelStore::default();
        let session = session_with(&["/d/img1.png"], &store);

        let (image, label) = session.load_current().expect("load");
        assert!(image.is_some());
        assert_eq!(label, "");
    }

    #[test]
    fn empty_session_is_inert() {
        let store = FakeLabelStore::default();
        let mut session = session_with(&[], &store);

        assert_eq!(session.progress().to_string(), "0/0");
        assert_eq!(session.current_image(), None);
        assert!(matches!(session.load_current(), Ok((None, label)) if label.is_empty()));

        session.save_label("ignored").expect("save is a no-op");
        let ((image, label), progress) = session.advance("ignored").expect("advance");
        assert!(image.is_none());
        assert_eq!(label, "");
        assert_eq!(progress.to_string(), "0/0");
        assert!(store.is_empty());
    }

    #[test]
    fn decode_failure_propagates() {
        let store = FakeLabelStore::default();
        let mut session = LabelerSession::open(
            Path::new("/d"),
            &FakeScanner::new(&["/d/a.png", "/d/broken.png"]),
            Box::new(store.clone()),
            Box::new(FakeDecoder::failing_on("/d/broken.png")),
        )
        .expect("session should open");

        store.insert("/d/broken.txt", "/d/broken.png, \"precious\"");

        let result = session.advance("kept");
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
        assert_eq!(
            store.contents("/d/a.txt").as_deref(),
            Some("/d/a.png, \"kept\"\n")
        );
        assert_eq!(session.current_image(), Some(Path::new("/d/broken.png")));
        assert_eq!(
            session.current_label().expect("label"),
            "/d/broken.png, \"precious\""
        );
    }

    #[test]
    fn records_report_labeled_and_unlabeled_images() {
        let store = FakeLabelStore::default();
        store.insert("/d/a.txt", "  /d/a.png, \"cat\"\n");
        let session = session_with(&["/d/a.png", "/d/b.jpg"], &store);

        let records = session.records().expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label.as_deref(), Some("/d/a.png, \"cat\""));
        assert_eq!(records[1].label_path, PathBuf::from("/d/b.txt"));
        assert_eq!(records[1].label, None);
    }
}
