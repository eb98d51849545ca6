//! Backend worker: owns the tokio runtime and the HTTP transport.

use std::thread;

use client_core::{HttpTicketTransport, Settings, TicketTransport};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                return;
            }
        };

        let transport =
            match HttpTicketTransport::new(settings.endpoint_url, settings.request_timeout) {
                Ok(transport) => transport,
                Err(err) => {
                    tracing::error!("failed to build ticket transport: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::BackendFailed(format!("{err:#}")));
                    return;
                }
            };

        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Sending tickets to {}",
            transport.endpoint_url()
        )));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitTicket { request } => {
                        let outcome = transport.submit(&request).await;
                        // the UI stays in loading until this arrives
                        if ui_tx.send(UiEvent::SubmissionFinished(outcome)).is_err() {
                            tracing::debug!("ui event channel closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}
