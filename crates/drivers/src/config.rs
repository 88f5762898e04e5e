#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "lite-label".to_string(),
            window_width: 900.0,
            window_height: 700.0,
        }
    }
}
