use client_core::SubmissionStatus;
use eframe::egui;

pub const MAIN_BALL_FILL: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
pub const POWERBALL_FILL: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

/// Round-ish toggle button for one lottery number.
pub fn number_ball(
    ui: &mut egui::Ui,
    number: u8,
    selected: bool,
    enabled: bool,
    fill: egui::Color32,
) -> egui::Response {
    let mut text = egui::RichText::new(number.to_string()).strong().size(16.0);
    if selected {
        text = text.color(egui::Color32::BLACK);
    }
    let mut button = egui::Button::new(text).min_size(egui::vec2(38.0, 38.0));
    if selected {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button)
}

pub fn status_color(status: SubmissionStatus) -> egui::Color32 {
    match status {
        SubmissionStatus::Success => egui::Color32::from_rgb(74, 222, 128),
        SubmissionStatus::Error => egui::Color32::from_rgb(248, 113, 113),
        SubmissionStatus::Idle | SubmissionStatus::Loading => egui::Color32::LIGHT_GRAY,
    }
}
