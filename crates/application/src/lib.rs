mod error;
mod ports;
mod service;
mod session;
#[cfg(test)]
mod test_support;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{ImageDecoder, ImageScanner, LabelStore};
pub use service::{title_for, ApplicationService, LabelView};
pub use session::{LabelerSession, LoadedLabel};
pub use use_cases::{ListLabelsCommand, LoadInitialCommand, NextImageCommand, PreviousImageCommand};
