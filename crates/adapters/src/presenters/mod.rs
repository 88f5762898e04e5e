use lite_label_application::LabelView;
use lite_label_domain::LabelRecord;

pub fn present_label_row(record: &LabelRecord) -> String {
    format!(
        "{}\t{}\t{}",
        record.image_path.display(),
        record.label_path.display(),
        record.label.as_deref().unwrap_or("<unlabeled>")
    )
}

pub fn present_view_summary(view: &LabelView) -> String {
    match &view.image {
        Some(image) => format!(
            "{} ({:?}, {}x{}) label={:?}",
            view.title, image.kind, image.width, image.height, view.label
        ),
        None => format!("{} (no image)", view.title),
    }
}
