//! Axum route handlers for the Inference API.

use axum::{extract::State, Json};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::inference::service::infer_experience_tags;
use crate::models::profile::Profile;
use crate::state::AppState;

/// POST /api/v1/inference
///
/// Infers experience tags for a candidate profile. Returns `"{tag} ({evidence})"`
/// strings in presentation order; an empty array means nothing was inferred.
pub async fn handle_infer(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<Vec<String>>, AppError> {
    let inference_id = Uuid::new_v4();
    let span = tracing::info_span!("inference", %inference_id);

    async move {
        info!(
            "Inference request received (model: {})",
            state.config.openai_model_name
        );
        let results =
            infer_experience_tags(&profile, state.store.as_ref(), state.generator.as_ref()).await?;

        if results.is_empty() {
            info!("No experience tags inferred");
        }

        let tags: Vec<String> = results.iter().map(ToString::to_string).collect();
        Ok::<_, AppError>(Json(tags))
    }
    .instrument(span)
    .await
}
