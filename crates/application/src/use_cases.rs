#[derive(Debug, Clone, Default)]
pub struct LoadInitialCommand;

#[derive(Debug, Clone)]
pub struct NextImageCommand {
    pub label_text: String,
}

#[derive(Debug, Clone)]
pub struct PreviousImageCommand {
    pub label_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListLabelsCommand;
