//! Tag inference pipeline.
//!
//! Flow: build queries → retrieve evidence → format profile + context →
//!       assemble prompt → generate (once) → parse/validate → order.
//!
//! Retrieval and parsing never fail the request. The only error that reaches
//! the caller is a configuration fault in the generator.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::inference::assembler::{build_prompt, generate_tag_text};
use crate::inference::context::{format_documents, ContextLimits};
use crate::inference::narrative::format_profile;
use crate::inference::ordering::order_results;
use crate::inference::parser::{parse_response, InferredResult};
use crate::inference::query::build_search_query;
use crate::inference::tags::{CANONICAL_TAGS, PRESENTATION_ORDER};
use crate::llm_client::TextGenerator;
use crate::models::profile::Profile;
use crate::retrieval::{retrieve_evidence, DocumentStore, RetrievalLimits};

pub async fn infer_experience_tags(
    profile: &Profile,
    store: &dyn DocumentStore,
    generator: &dyn TextGenerator,
) -> Result<Vec<InferredResult>, AppError> {
    // Step 1: queries
    let search_query = build_search_query(profile);
    let university_query = profile.university_query();
    if let Some(school) = &university_query {
        info!("University query: '{school}'");
    }

    // Step 2: evidence
    let documents = if search_query.is_empty() && university_query.is_none() {
        warn!("No searchable profile fields; skipping retrieval");
        Vec::new()
    } else {
        retrieve_evidence(
            store,
            &search_query,
            university_query.as_deref(),
            RetrievalLimits::default(),
        )
        .await
    };

    // Step 3: prompt
    let context_text = format_documents(&documents, ContextLimits::default());
    let profile_text = format_profile(profile);
    debug!("Profile narrative:\n{profile_text}");
    let prompt = build_prompt(&profile_text, &context_text, CANONICAL_TAGS);

    // Step 4: generation
    let Some(raw) = generate_tag_text(generator, &prompt).await? else {
        warn!("No generator output; returning no tags");
        return Ok(Vec::new());
    };
    debug!("Raw generator output:\n{raw}");

    // Step 5: validation + ordering
    let parsed = parse_response(Some(raw.as_str()), CANONICAL_TAGS);
    let results = order_results(parsed, PRESENTATION_ORDER);
    info!(
        "Inferred tags: {:?}",
        results.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
    Ok(results)
}
