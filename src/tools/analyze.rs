//! The analysis pipeline: one grounded inference call, one typed parse.
//!
//! Build the analyst prompt and response schema, make the single
//! `generateContent` round trip, parse the primary payload into the report,
//! harvest the grounding citations, compose the result. No retry, no
//! streaming, no state carried between runs.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::error::{AnalysisError, ProviderError};
use crate::core::types::{AnalysisReport, AnalysisResult};
use crate::gemini::GeminiClient;
use crate::prompt;
use crate::AppState;

/// Analyze a company website and return the grounded report.
///
/// This is the single entry point the serving layer calls. Every failure,
/// whether transport or a payload that misses the schema, is logged here
/// with its classified cause and collapsed into the one opaque
/// `AnalysisError`. No partial result ever escapes this boundary.
pub async fn analyze_company(
    state: &Arc<AppState>,
    url: &str,
) -> Result<AnalysisResult, AnalysisError> {
    match run_pipeline(state, url).await {
        Ok(result) => Ok(result),
        Err(cause) => {
            error!("analysis failed for {}: {}", url, cause);
            Err(AnalysisError::from(cause))
        }
    }
}

async fn run_pipeline(
    state: &Arc<AppState>,
    url: &str,
) -> Result<AnalysisResult, ProviderError> {
    let target = url.trim();
    if target.is_empty() {
        return Err(ProviderError::BlankTarget);
    }

    // Best-effort host for log lines; an unparseable URL is still submitted
    // as-is and left for the model to resolve.
    let host = url::Url::parse(target)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| target.to_string());
    info!("analyzing {}", host);

    let client = GeminiClient::from_config(state.http_client.clone(), &state.config.gemini)?;
    let response = client
        .generate_grounded(&prompt::build_prompt(target), prompt::response_schema())
        .await?;

    let payload = response.primary_text();
    let report: AnalysisReport = serde_json::from_str(&payload)?;
    warn_on_contract_miss(&report);

    let grounding_sources = response.grounding_sources();
    info!(
        "analysis complete for {}: {} buyers, {} grounding sources",
        host,
        report.buyers.len(),
        grounding_sources.len()
    );

    Ok(AnalysisResult {
        report,
        grounding_sources,
    })
}

/// The schema asks for exactly 5 buyers and 3–5 risks; the response parse
/// stays lenient, so deviations only surface in the logs.
fn warn_on_contract_miss(report: &AnalysisReport) {
    if report.buyers.len() != 5 {
        warn!(
            "provider returned {} buyers instead of the requested 5",
            report.buyers.len()
        );
    }
    let risks = report.suitability.risks.len();
    if !(3..=5).contains(&risks) {
        warn!(
            "provider returned {} risks outside the requested 3-5 range",
            risks
        );
    }
}
