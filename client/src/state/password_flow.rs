//! Password-change flow: email -> verification code -> new password -> success.
//!
//! DESIGN
//! ======
//! The modal component owns a `RwSignal<PasswordFlow>` and only does I/O.
//! Everything else lives here as plain data so it can be tested without a
//! browser: which request body each step sends, how an upstream reply maps
//! to an alert, and which step comes next.
//!
//! Successful email and code steps advance after a short pause so the user
//! can read the confirmation. Those delayed transitions carry the flow's
//! `epoch`; closing the modal or stepping back bumps it, so a stale timer
//! never drags a reset flow forward.

#[cfg(test)]
#[path = "password_flow_test.rs"]
mod password_flow_test;

use super::alert::{AlertKind, AlertState};
use crate::net::types::{ApiMessage, PasswordResetRequest};

/// Number of cells in the verification code.
pub const CODE_LEN: usize = 6;

/// Pause between "code sent" and the verification step.
pub const CODE_SENT_ADVANCE_MS: u32 = 2000;

/// Pause between "code verified" and the new-password step.
pub const CODE_VERIFIED_ADVANCE_MS: u32 = 1500;

/// How long the success step stays up before the modal closes itself.
pub const SUCCESS_CLOSE_MS: u32 = 3000;

const UNKNOWN_ERROR: &str = "Erro desconhecido";
const SERVER_ERROR_TITLE: &str = "Erro no Servidor";

/// Position in the flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Email,
    Verification,
    Password,
    Success,
}

// =============================================================================
// VERIFICATION CODE
// =============================================================================

/// Six single-character cells for the verification code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeEntry {
    cells: [String; CODE_LEN],
}

impl CodeEntry {
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }

    /// Store `value` in cell `index`.
    ///
    /// Input longer than one character is ignored and leaves the cell as it
    /// was. Returns the cell that should receive focus next, which is the
    /// following one after a non-empty entry.
    pub fn set(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= CODE_LEN || value.chars().count() > 1 {
            return None;
        }
        value.clone_into(&mut self.cells[index]);
        (!value.is_empty() && index < CODE_LEN - 1).then_some(index + 1)
    }

    /// Backspace in an already-empty cell moves focus to the previous one.
    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        (index > 0 && index < CODE_LEN && self.cells[index].is_empty()).then(|| index - 1)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn joined(&self) -> String {
        self.cells.concat()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(String::clear);
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// A step change, applied after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub to: Step,
    pub delay_ms: u32,
    /// Dismiss the confirmation alert when the transition fires.
    pub close_alert: bool,
}

/// What the modal should do after a step's round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub alert: Option<AlertState>,
    pub transition: Option<Transition>,
}

/// Map the reply for `step` to an alert and next step.
///
/// `None` means the server could not be reached or answered garbage.
#[must_use]
pub fn outcome(step: Step, response: Option<&ApiMessage>) -> StepOutcome {
    match step {
        Step::Email => match response {
            None => failure(SERVER_ERROR_TITLE, "Ocorreu um erro ao enviar o código. Tente novamente."),
            Some(msg) if msg.is_error() => failure("Erro ao Enviar", msg.user_message_or(UNKNOWN_ERROR)),
            Some(msg) => StepOutcome {
                alert: Some(AlertState::new(
                    AlertKind::Success,
                    "Código Enviado",
                    format!("Código enviado com sucesso para o email: {}", msg.msg_user),
                )),
                transition: Some(Transition {
                    to: Step::Verification,
                    delay_ms: CODE_SENT_ADVANCE_MS,
                    close_alert: true,
                }),
            },
        },
        Step::Verification => match response {
            None => failure(SERVER_ERROR_TITLE, "Ocorreu um erro ao verificar o código. Tente novamente."),
            Some(msg) if msg.is_error() => {
                failure("Código Inválido", "O código inserido é inválido. Verifique e tente novamente.")
            }
            Some(_) => StepOutcome {
                alert: Some(AlertState::new(AlertKind::Success, "Código Verificado", "Código verificado com sucesso!")),
                transition: Some(Transition {
                    to: Step::Password,
                    delay_ms: CODE_VERIFIED_ADVANCE_MS,
                    close_alert: true,
                }),
            },
        },
        Step::Password => match response {
            None => failure(SERVER_ERROR_TITLE, "Ocorreu um erro ao alterar a senha. Tente novamente."),
            Some(msg) if msg.is_error() => failure("Erro ao Alterar Senha", msg.user_message_or(UNKNOWN_ERROR)),
            Some(_) => StepOutcome {
                alert: None,
                transition: Some(Transition { to: Step::Success, delay_ms: 0, close_alert: false }),
            },
        },
        Step::Success => StepOutcome::default(),
    }
}

fn failure(title: &str, message: &str) -> StepOutcome {
    StepOutcome { alert: Some(AlertState::new(AlertKind::Error, title, message)), transition: None }
}

// =============================================================================
// FLOW
// =============================================================================

/// Live state of the password-change modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordFlow {
    pub step: Step,
    /// Address captured at the email step; reused by later steps.
    pub email: String,
    pub code: CodeEntry,
    /// A round trip is in flight; submit buttons are disabled.
    pub loading: bool,
    /// Bumped whenever pending delayed transitions must be discarded.
    pub epoch: u64,
}

impl PasswordFlow {
    /// Back to the first step with nothing entered.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self { epoch, ..Self::default() };
    }

    /// Step back one screen. Only the code and password screens have a way back.
    pub fn back(&mut self) {
        let prev = match self.step {
            Step::Verification => Step::Email,
            Step::Password => Step::Verification,
            Step::Email | Step::Success => return,
        };
        self.step = prev;
        self.epoch += 1;
    }

    /// "Didn't get the code?": return to the email screen to request another.
    pub fn resend(&mut self) {
        if self.step == Step::Verification {
            self.back();
        }
    }

    /// Whether the verify button is enabled.
    #[must_use]
    pub fn can_verify(&self) -> bool {
        !self.loading && self.code.is_complete()
    }

    /// Start the email step. `None` while another request is in flight.
    pub fn begin_email(&mut self, email: &str) -> Option<PasswordResetRequest> {
        if self.loading || self.step != Step::Email {
            return None;
        }
        email.clone_into(&mut self.email);
        self.loading = true;
        Some(PasswordResetRequest::request_code(email))
    }

    /// Start the verification step. `None` while busy or with an incomplete code.
    pub fn begin_verify(&mut self) -> Option<PasswordResetRequest> {
        if self.step != Step::Verification || !self.can_verify() {
            return None;
        }
        self.loading = true;
        Some(PasswordResetRequest::verify_code(self.email.clone(), self.code.joined()))
    }

    /// Start the new-password step. `None` while busy.
    pub fn begin_password(&mut self, new_password: &str) -> Option<PasswordResetRequest> {
        if self.loading || self.step != Step::Password {
            return None;
        }
        self.loading = true;
        Some(PasswordResetRequest::set_password(self.email.clone(), new_password))
    }

    /// Round trip finished; re-enable the submit button.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Apply `transition` if the flow has not been reset or stepped back
    /// since `epoch` was captured. Returns whether it was applied.
    pub fn apply(&mut self, epoch: u64, transition: Transition) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.step = transition.to;
        true
    }
}
