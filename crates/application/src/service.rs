use lite_label_domain::{DecodedImage, LabelRecord, Progress};

use crate::{
    ApplicationError, LabelerSession, ListLabelsCommand, LoadInitialCommand, LoadedLabel,
    NextImageCommand, PreviousImageCommand,
};

/// Everything the window needs to redraw after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    pub title: String,
    pub image: Option<DecodedImage>,
    pub label: String,
    pub progress: String,
}

impl LabelView {
    fn from_loaded((image, label): LoadedLabel, progress: Progress) -> Self {
        Self {
            title: title_for(progress),
            image,
            label,
            progress: progress.to_string(),
        }
    }
}

pub fn title_for(progress: Progress) -> String {
    format!("Image {progress}")
}

pub struct ApplicationService {
    session: LabelerSession,
}

impl ApplicationService {
    pub fn new(session: LabelerSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &LabelerSession {
        &self.session
    }

    pub fn load_initial(&self, _command: LoadInitialCommand) -> Result<LabelView, ApplicationError> {
        let loaded = self.session.load_current()?;
        Ok(LabelView::from_loaded(loaded, self.session.progress()))
    }

    pub fn on_next(&mut self, command: NextImageCommand) -> Result<LabelView, ApplicationError> {
        let (loaded, progress) = self.session.advance(&command.label_text)?;
        Ok(LabelView::from_loaded(loaded, progress))
    }

    pub fn on_previous(
        &mut self,
        command: PreviousImageCommand,
    ) -> Result<LabelView, ApplicationError> {
        let (loaded, progress) = self.session.retreat(&command.label_text)?;
        Ok(LabelView::from_loaded(loaded, progress))
    }

    pub fn list_labels(
        &self,
        _command: ListLabelsCommand,
    ) -> Result<Vec<LabelRecord>, ApplicationError> {
        self.session.records()
    }
}
