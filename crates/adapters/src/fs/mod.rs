mod labels;
mod scanner;

pub use labels::FsLabelStore;
pub use scanner::WalkdirImageScanner;
