//! Print handler
//!
//! Validates the form, renders the receipt and redirects the device to the
//! RawBT intent. Validation failures go back to the form as flash messages.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use rawbt_printer::IntentUri;
use serde::Deserialize;
use shared::{FormError, TransactionMode, normalize_amount};

use crate::api::{flash_redirect, found};
use crate::core::{Result, ServerState};

/// Submitted form fields
#[derive(Debug, Default, Deserialize)]
pub struct PrintForm {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

/// POST /print
///
/// A body that is not a decodable form counts as an empty form, so it ends
/// up as a flashed InvalidMode like any other bad submission.
pub async fn print(
    State(state): State<ServerState>,
    form: std::result::Result<Form<PrintForm>, FormRejection>,
) -> Result<Response> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(
                status = %rejection.status(),
                error = %rejection,
                "Unreadable print form"
            );
            PrintForm::default()
        }
    };

    match build_intent(&state, &form) {
        Ok(intent) => {
            tracing::info!(payload_len = intent.payload().len(), "Redirecting to RawBT");
            found(intent.as_str())
        }
        Err(e) => {
            tracing::warn!(
                code = e.code(),
                mode = ?form.mode,
                amount = ?form.amount,
                "Print form rejected"
            );
            flash_redirect(&state, e.to_string())
        }
    }
}

/// Mode is checked before the amount; an unset amount counts as empty.
fn build_intent(
    state: &ServerState,
    form: &PrintForm,
) -> std::result::Result<IntentUri, FormError> {
    let mode: TransactionMode = form.mode.as_deref().unwrap_or_default().parse()?;
    let amount = normalize_amount(Some(form.amount.as_deref().unwrap_or_default()))?;

    let text = state.renderer.render_now(mode, &amount);
    Ok(rawbt_printer::encode(&text))
}
