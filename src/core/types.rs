use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Company facts extracted from the target website only (phase 1 of the
/// analyst prompt).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub location: String,
    /// Revenue / employee estimate. Conventionally carries an inline
    /// `[Source](url)` token pointing at the page that backed the figure;
    /// the convention is asked of the model, not enforced here.
    pub size: String,
    pub offerings: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suitability {
    pub market_analysis: String,
    pub scalability: String,
    /// Requested as 3–5 entries; parsed leniently whatever comes back.
    pub risks: Vec<String>,
    pub investment_thesis: String,
}

/// One candidate acquisition fund.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub name: String,
    pub website: String,
    pub fit_reason: String,
    pub buyer_profile: String,
    pub portfolio_highlight: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub company_profile: CompanyProfile,
    pub suitability: Suitability,
    /// 5 entries is a request-time ask; the response parse never enforces it.
    pub buyers: Vec<Buyer>,
}

/// A citation the provider attached to the answer: which page supported
/// a claim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

/// The unit returned to callers: either fully populated or the pipeline
/// failed. No partial result is ever exposed alongside an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub report: AnalysisReport,
    /// Provider order preserved; duplicates are possible and kept.
    pub grounding_sources: Vec<GroundingSource>,
}

/// Submission lifecycle contract for UI clients. The core never drives this
/// state machine; it only fixes the wire shape so front-ends agree on tags.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_from_camel_case_wire_form() {
        let raw = serde_json::json!({
            "companyProfile": {
                "name": "Acme",
                "industry": "Manufacturing",
                "location": "Cleveland, OH",
                "size": "$8M [Source](https://acme.example/about)",
                "offerings": "CNC machining"
            },
            "suitability": {
                "marketAnalysis": "Stable demand",
                "scalability": "Regional expansion",
                "risks": ["Customer concentration", "Key-person risk", "Capex cycles"],
                "investmentThesis": "Platform in a fragmented niche"
            },
            "buyers": []
        });

        let report: AnalysisReport = serde_json::from_value(raw).unwrap();
        assert_eq!(report.company_profile.name, "Acme");
        assert_eq!(report.suitability.risks.len(), 3);
        assert!(report.buyers.is_empty());
    }

    #[test]
    fn report_missing_required_section_is_rejected() {
        let raw = serde_json::json!({
            "companyProfile": {
                "name": "Acme",
                "industry": "Manufacturing",
                "location": "Cleveland, OH",
                "size": "$8M",
                "offerings": "CNC machining"
            },
            "buyers": []
        });

        assert!(serde_json::from_value::<AnalysisReport>(raw).is_err());
    }

    #[test]
    fn loading_state_wire_tags() {
        assert_eq!(
            serde_json::to_value(LoadingState::Idle).unwrap(),
            serde_json::json!({"status": "idle"})
        );
        assert_eq!(
            serde_json::to_value(LoadingState::Loading).unwrap(),
            serde_json::json!({"status": "loading"})
        );
        assert_eq!(
            serde_json::to_value(LoadingState::Error {
                message: Some("boom".to_string())
            })
            .unwrap(),
            serde_json::json!({"status": "error", "message": "boom"})
        );

        let round: LoadingState =
            serde_json::from_value(serde_json::json!({"status": "error"})).unwrap();
        assert_eq!(round, LoadingState::Error { message: None });
    }

    #[test]
    fn analysis_result_keeps_duplicate_sources_in_order() {
        let report: AnalysisReport = serde_json::from_value(serde_json::json!({
            "companyProfile": {
                "name": "Acme", "industry": "Mfg", "location": "OH",
                "size": "$8M", "offerings": "Machining"
            },
            "suitability": {
                "marketAnalysis": "a", "scalability": "b",
                "risks": ["x", "y", "z"], "investmentThesis": "c"
            },
            "buyers": []
        }))
        .unwrap();

        let result = AnalysisResult {
            report,
            grounding_sources: vec![
                GroundingSource {
                    uri: "https://a.example".to_string(),
                    title: "A".to_string(),
                },
                GroundingSource {
                    uri: "https://a.example".to_string(),
                    title: "A".to_string(),
                },
            ],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["groundingSources"].as_array().unwrap().len(), 2);
        assert_eq!(value["groundingSources"][0]["title"], "A");
    }
}
