use client_core::{LotteryController, SubmissionStatus, SubmitError};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{PRIMARY_PICK_COUNT, PRIMARY_RANGE, SECONDARY_RANGE},
    protocol::SubmitTicketRequest,
};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{classify_backend_failure, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::widgets::{number_ball, status_color, MAIN_BALL_FILL, POWERBALL_FILL},
};

pub struct StartupConfig {
    pub access_password: String,
}

pub struct TicketApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: LotteryController,
    backend_status: String,
    backend_failed: bool,
}

impl TicketApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        config: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: LotteryController::new(config.access_password),
            backend_status: "Backend worker starting...".to_string(),
            backend_failed: false,
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.backend_status = message;
                }
                UiEvent::BackendFailed(message) => {
                    self.backend_failed = true;
                    self.backend_status = classify_backend_failure(&message);
                    if self.controller.state().submission.is_loading() {
                        self.controller
                            .finish_submission(Err(SubmitError::Transport(message)));
                    }
                }
                UiEvent::SubmissionFinished(outcome) => {
                    self.controller.finish_submission(outcome);
                }
            }
        }
    }

    fn try_unlock(&mut self) {
        self.controller.gate_mut().submit_password();
    }

    fn try_submit(&mut self) {
        let ticket = match self.controller.begin_submission() {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::debug!(%err, "submission not started");
                return;
            }
        };
        let cmd = BackendCommand::SubmitTicket {
            request: SubmitTicketRequest::from(&ticket),
        };
        if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.controller
                .finish_submission(Err(SubmitError::Transport(reason)));
        }
    }

    fn show_gate_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space((ui.available_height() * 0.2).clamp(18.0, 120.0));
            ui.vertical_centered(|ui| {
                ui.heading("Powerball Ticket");
                ui.weak("Enter the access password to continue.");
                ui.add_space(12.0);

                let gate = self.controller.gate_mut();
                let response = ui.add_sized(
                    [280.0, 32.0],
                    egui::TextEdit::singleline(gate.password_input_mut())
                        .password(true)
                        .hint_text("Password"),
                );
                let enter_pressed =
                    response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(8.0);
                if ui.button("Unlock").clicked() || enter_pressed {
                    self.try_unlock();
                }

                let error = self.controller.gate().error_message();
                if !error.is_empty() {
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(error).color(status_color(SubmissionStatus::Error)));
                }
            });
        });
    }

    fn show_ticket_screen(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("backend_status").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Backend:");
                let text = egui::RichText::new(&self.backend_status).small();
                if self.backend_failed {
                    ui.label(text.color(status_color(SubmissionStatus::Error)));
                } else {
                    ui.label(text.weak());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Lock").clicked() {
                        self.controller.gate_mut().sign_out();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Powerball Ticket");
                ui.add_space(8.0);
                self.show_number_grids(ui);
                ui.add_space(12.0);
                ui.separator();
                self.show_summary_and_actions(ui);
            });
        });
    }

    fn show_number_grids(&mut self, ui: &mut egui::Ui) {
        let selection = self.controller.state().selection.clone();

        ui.label(
            egui::RichText::new(format!(
                "Main numbers ({} of {PRIMARY_PICK_COUNT})",
                selection.primary().len()
            ))
            .strong(),
        );
        ui.horizontal_wrapped(|ui| {
            for number in PRIMARY_RANGE {
                let selected = selection.is_primary_selected(number);
                let enabled = selected || !selection.is_primary_full();
                if number_ball(ui, number, selected, enabled, MAIN_BALL_FILL).clicked() {
                    self.controller.toggle_primary(number);
                }
            }
        });

        ui.add_space(10.0);
        ui.label(egui::RichText::new("Powerball").strong());
        ui.horizontal_wrapped(|ui| {
            for number in SECONDARY_RANGE {
                let selected = selection.secondary() == Some(number);
                if number_ball(ui, number, selected, true, POWERBALL_FILL).clicked() {
                    self.controller.toggle_secondary(number);
                }
            }
        });
    }

    fn show_summary_and_actions(&mut self, ui: &mut egui::Ui) {
        let state = self.controller.state().clone();
        let loading = state.submission.is_loading();

        ui.horizontal(|ui| {
            ui.label("Your name:");
            let mut name = state.player_name.clone();
            let response = ui.add(egui::TextEdit::singleline(&mut name).hint_text("Enter name"));
            if response.changed() {
                self.controller.set_player_name(name);
            }
        });

        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            if state.selection.primary().is_empty() {
                ui.weak("Pick 5 main numbers");
            } else {
                for &number in state.selection.primary() {
                    let _ = number_ball(ui, number, true, true, MAIN_BALL_FILL);
                }
            }
            ui.label(egui::RichText::new("+").strong().size(20.0));
            match state.selection.secondary() {
                Some(number) => {
                    let _ = number_ball(ui, number, true, true, POWERBALL_FILL);
                }
                None => {
                    ui.weak("Pick 1 Powerball");
                }
            }
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Quick Pick").clicked() {
                self.controller.quick_pick();
            }
            if ui.add_enabled(!loading, egui::Button::new("Reset")).clicked() {
                self.controller.reset();
            }
            let submit_label = if loading { "Sending..." } else { "Submit" };
            let submit = egui::Button::new(egui::RichText::new(submit_label).strong());
            if ui.add_enabled(!loading, submit).clicked() {
                self.try_submit();
            }
        });

        let message = state.submission.message();
        if !message.is_empty() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(message).color(status_color(state.submission.status())));
        }
    }
}

impl eframe::App for TicketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if self.controller.gate().is_authenticated() {
            self.show_ticket_screen(ctx);
        } else {
            self.show_gate_screen(ctx);
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
