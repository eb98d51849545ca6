//! The form controller: explicit state, pure transitions, and the two-phase
//! submit used by every front end.

use rand::Rng;
use shared::{domain::Ticket, error::TicketError, protocol::SubmitTicketRequest};
use tracing::{debug, info, warn};

use crate::{
    error::SubmitError,
    gate::AccessGate,
    quick_pick::{quick_pick_with, QuickPick},
    selection::SelectionState,
    submission::SubmissionState,
    transport::TicketTransport,
};

/// Everything the ticket form renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selection: SelectionState,
    pub player_name: String,
    pub submission: SubmissionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    TogglePrimary(u8),
    ToggleSecondary(u8),
    ClearSelection,
    ApplyQuickPick(QuickPick),
    SetPlayerName(String),
    Reset,
    ValidationFailed(TicketError),
    SubmissionStarted,
    SubmissionFinished(Result<(), SubmitError>),
}

/// Applies one action to the form.
///
/// Submission events only take effect in the state they belong to: a start is
/// ignored while a request is already loading, and a finish is ignored unless
/// one is. `Reset` is ignored while loading so the outcome lands on the form
/// that was sent.
pub fn reduce(mut state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::TogglePrimary(number) => state.selection.toggle_primary(number),
        FormAction::ToggleSecondary(number) => state.selection.toggle_secondary(number),
        FormAction::ClearSelection => state.selection.clear(),
        FormAction::ApplyQuickPick(pick) => {
            state.selection.replace(pick.main_numbers, pick.powerball)
        }
        FormAction::SetPlayerName(name) => state.player_name = name,
        FormAction::Reset => {
            if !state.submission.is_loading() {
                state = FormState::default();
            }
        }
        FormAction::ValidationFailed(err) => {
            if !state.submission.is_loading() {
                state.submission = SubmissionState::failed(&SubmitError::Validation(err));
            }
        }
        FormAction::SubmissionStarted => {
            if !state.submission.is_loading() {
                state.submission = SubmissionState::loading();
            }
        }
        FormAction::SubmissionFinished(outcome) => {
            if state.submission.is_loading() {
                match outcome {
                    Ok(()) => {
                        state.selection.clear();
                        state.player_name.clear();
                        state.submission = SubmissionState::succeeded();
                    }
                    Err(err) => state.submission = SubmissionState::failed(&err),
                }
            }
        }
    }
    state
}

/// Validates the form without touching it.
pub fn prepare_submission(state: &FormState) -> Result<Ticket, SubmitError> {
    if state.submission.is_loading() {
        return Err(SubmitError::AlreadyInFlight);
    }
    let ticket = Ticket::new(
        &state.player_name,
        state.selection.primary(),
        state.selection.secondary(),
    )?;
    Ok(ticket)
}

pub struct LotteryController {
    gate: AccessGate,
    form: FormState,
}

impl LotteryController {
    pub fn new(access_password: impl Into<String>) -> Self {
        Self {
            gate: AccessGate::new(access_password),
            form: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.form
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AccessGate {
        &mut self.gate
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.form);
        self.form = reduce(state, action);
    }

    pub fn toggle_primary(&mut self, number: u8) {
        self.dispatch(FormAction::TogglePrimary(number));
    }

    pub fn toggle_secondary(&mut self, number: u8) {
        self.dispatch(FormAction::ToggleSecondary(number));
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(FormAction::ClearSelection);
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.dispatch(FormAction::SetPlayerName(name.into()));
    }

    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
    }

    pub fn quick_pick(&mut self) -> QuickPick {
        self.quick_pick_with(&mut rand::thread_rng())
    }

    pub fn quick_pick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuickPick {
        let pick = quick_pick_with(rng);
        debug!(?pick, "applied quick pick");
        self.dispatch(FormAction::ApplyQuickPick(pick));
        pick
    }

    /// First half of a submit: validates the form and flips it to loading.
    ///
    /// Returns the ticket the caller must deliver and then report back through
    /// [`finish_submission`](Self::finish_submission). A refused start never
    /// needs a finish.
    pub fn begin_submission(&mut self) -> Result<Ticket, SubmitError> {
        match prepare_submission(&self.form) {
            Ok(ticket) => {
                debug!(
                    name_len = ticket.player_name().len(),
                    "ticket validated, starting submission"
                );
                self.dispatch(FormAction::SubmissionStarted);
                Ok(ticket)
            }
            Err(SubmitError::Validation(err)) => {
                debug!(%err, "ticket validation failed");
                self.dispatch(FormAction::ValidationFailed(err.clone()));
                Err(SubmitError::Validation(err))
            }
            Err(err) => {
                debug!(%err, "submission refused");
                Err(err)
            }
        }
    }

    pub fn finish_submission(&mut self, outcome: Result<(), SubmitError>) {
        match &outcome {
            Ok(()) => info!("ticket submitted"),
            Err(err) => warn!(%err, "ticket submission failed"),
        }
        self.dispatch(FormAction::SubmissionFinished(outcome));
    }

    /// Runs both halves of a submit against `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<(), SubmitError>
    where
        T: TicketTransport + ?Sized,
    {
        let ticket = self.begin_submission()?;
        let outcome = transport.submit(&SubmitTicketRequest::from(&ticket)).await;
        self.finish_submission(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{SubmissionStatus, SENDING_MESSAGE, SUCCESS_MESSAGE};

    fn filled_form(name: &str) -> FormState {
        let mut state = FormState {
            player_name: name.to_string(),
            ..FormState::default()
        };
        for number in [1, 2, 3, 4, 5] {
            state = reduce(state, FormAction::TogglePrimary(number));
        }
        reduce(state, FormAction::ToggleSecondary(10))
    }

    #[test]
    fn prepare_reports_name_before_completeness() {
        let state = FormState::default();
        assert_eq!(
            prepare_submission(&state),
            Err(SubmitError::Validation(TicketError::MissingName))
        );
    }

    #[test]
    fn start_is_refused_while_loading() {
        let state = reduce(filled_form("Alice"), FormAction::SubmissionStarted);
        assert_eq!(state.submission.status(), SubmissionStatus::Loading);
        assert_eq!(state.submission.message(), SENDING_MESSAGE);
        assert_eq!(prepare_submission(&state), Err(SubmitError::AlreadyInFlight));
    }

    #[test]
    fn success_resets_selection_and_name_but_keeps_confirmation() {
        let state = reduce(filled_form("Alice"), FormAction::SubmissionStarted);
        let state = reduce(state, FormAction::SubmissionFinished(Ok(())));
        assert!(state.selection.is_empty());
        assert!(state.player_name.is_empty());
        assert_eq!(state.submission.status(), SubmissionStatus::Success);
        assert_eq!(state.submission.message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_keeps_selection() {
        let state = reduce(filled_form("Alice"), FormAction::SubmissionStarted);
        let state = reduce(
            state,
            FormAction::SubmissionFinished(Err(SubmitError::Transport("down".to_string()))),
        );
        assert_eq!(state.submission.status(), SubmissionStatus::Error);
        assert_eq!(state.selection.primary(), &[1, 2, 3, 4, 5]);
        assert_eq!(state.player_name, "Alice");
    }

    #[test]
    fn finish_without_start_is_ignored() {
        let state = reduce(filled_form("Alice"), FormAction::SubmissionFinished(Ok(())));
        assert_eq!(state, filled_form("Alice"));
    }

    #[test]
    fn reset_is_ignored_while_loading() {
        let loading = reduce(filled_form("Alice"), FormAction::SubmissionStarted);
        let state = reduce(loading.clone(), FormAction::Reset);
        assert_eq!(state, loading);

        let failed = reduce(
            loading,
            FormAction::SubmissionFinished(Err(SubmitError::Transport("down".to_string()))),
        );
        assert_eq!(reduce(failed, FormAction::Reset), FormState::default());
    }

    #[test]
    fn clear_selection_keeps_name_and_status() {
        let mut controller = LotteryController::new("powerball");
        controller.set_player_name("Alice");
        for number in [1, 2, 3] {
            controller.toggle_primary(number);
        }
        controller.toggle_secondary(7);
        assert_eq!(
            controller.begin_submission(),
            Err(SubmitError::Validation(TicketError::IncompleteSelection {
                main_selected: 3,
                powerball_selected: true,
            }))
        );

        controller.clear_selection();

        let state = controller.state();
        assert!(state.selection.is_empty());
        assert_eq!(state.player_name, "Alice");
        assert_eq!(state.submission.status(), SubmissionStatus::Error);
    }

    #[test]
    fn quick_pick_overwrites_previous_selection() {
        let mut controller = LotteryController::new("powerball");
        controller.toggle_primary(68);
        controller.toggle_secondary(26);
        let pick = controller.quick_pick();
        assert_eq!(controller.state().selection.primary(), &pick.main_numbers);
        assert_eq!(controller.state().selection.secondary(), Some(pick.powerball));
        assert!(controller.state().selection.is_complete());
    }
}
