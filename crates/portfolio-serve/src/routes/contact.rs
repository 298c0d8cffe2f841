//! Contact form intake.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::contact::{CONTACT_COLLECTION, ContactSubmission};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::{AppState, StoreHandle};
use crate::store::StoreError;

/// Acknowledgement returned for a stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    ok: bool,
    id: String,
}

/// `POST /api/contact`
///
/// Stores the submission in the `contactsubmission` collection. Store
/// errors are returned to the caller as-is.
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactSubmission>,
) -> Result<Json<ContactAck>, ApiError> {
    let store = match &state.store {
        StoreHandle::Ready(store) => store,
        StoreHandle::Unconfigured => return Err(StoreError::Unavailable.into()),
        StoreHandle::Failed(e) => return Err(StoreError::Backend(e.to_string()).into()),
    };

    let document = serde_json::to_value(&payload).map_err(StoreError::from)?;
    let id = store.create_document(CONTACT_COLLECTION, document).await?;

    tracing::info!(id = %id, "contact submission stored");
    Ok(Json(ContactAck { ok: true, id }))
}
