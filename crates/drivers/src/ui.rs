use eframe::egui;
use egui::load::SizedTexture;
use lite_label_adapters::present_view_summary;
use lite_label_application::{
    title_for, ApplicationError, ApplicationService, LabelView, LoadInitialCommand,
    NextImageCommand, PreviousImageCommand,
};
use lite_label_domain::DecodedImage;
use tracing::{debug, error};

use crate::config::AppConfig;

const LABEL_HINT: &str = "Enter label for image";
const TEXTURE_NAME: &str = "current-image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    Previous,
    Next,
}

struct LabelerApp {
    service: ApplicationService,
    title: String,
    label: String,
    progress: String,
    texture: Option<egui::TextureHandle>,
    error: Option<String>,
}

impl LabelerApp {
    fn new(service: ApplicationService, ctx: &egui::Context) -> Self {
        let initial = service.load_initial(LoadInitialCommand);
        let mut app = Self {
            service,
            title: String::new(),
            label: String::new(),
            progress: String::new(),
            texture: None,
            error: None,
        };
        app.apply(ctx, initial);
        app
    }

    fn navigate(&mut self, ctx: &egui::Context, navigation: Navigation) {
        let label_text = self.label.clone();
        let result = match navigation {
            Navigation::Previous => self
                .service
                .on_previous(PreviousImageCommand { label_text }),
            Navigation::Next => self.service.on_next(NextImageCommand { label_text }),
        };
        self.apply(ctx, result);
    }

    /// On failure the cursor may already have moved, so the view is resynced
    /// to the current position: no image, and the label as stored on disk.
    fn apply(&mut self, ctx: &egui::Context, result: Result<LabelView, ApplicationError>) {
        match result {
            Ok(view) => {
                debug!("{}", present_view_summary(&view));
                self.texture = view.image.as_ref().map(|image| upload_texture(ctx, image));
                self.title = view.title;
                self.label = view.label;
                self.progress = view.progress;
                self.error = None;
            }
            Err(err) => {
                error!(error = %err, "failed to load image");
                let session = self.service.session();
                let progress = session.progress();
                self.texture = None;
                self.title = title_for(progress);
                self.progress = progress.to_string();
                self.label = session.current_label().unwrap_or_else(|label_error| {
                    error!(error = %label_error, "failed to read label");
                    String::new()
                });
                self.error = Some(err.to_string());
            }
        }
    }
}

fn upload_texture(ctx: &egui::Context, image: &DecodedImage) -> egui::TextureHandle {
    let size = [image.width as usize, image.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.rgba);
    ctx.load_texture(TEXTURE_NAME, color_image, egui::TextureOptions::LINEAR)
}

impl eframe::App for LabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut navigation = None;

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.heading(&self.title);
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label("Label");
            ui.add(
                egui::TextEdit::singleline(&mut self.label)
                    .hint_text(LABEL_HINT)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                if ui.button("Previous").clicked() {
                    navigation = Some(Navigation::Previous);
                }
                if ui.button("Next").clicked() {
                    navigation = Some(Navigation::Next);
                }
                ui.separator();
                ui.label(&self.progress);
            });
            if let Some(message) = &self.error {
                ui.colored_label(egui::Color32::RED, message);
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match &self.texture {
                Some(texture) => {
                    ui.add(
                        egui::Image::from_texture(SizedTexture::from_handle(texture))
                            .shrink_to_fit(),
                    );
                }
                None => {
                    ui.label("No image");
                }
            });
        });

        if let Some(navigation) = navigation {
            self.navigate(ctx, navigation);
        }
    }
}

/// Runs the labeling window until it is closed.
pub fn launch_window(service: ApplicationService, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        &config.app_name,
        options,
        Box::new(move |cc| Ok(Box::new(LabelerApp::new(service, &cc.egui_ctx)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
