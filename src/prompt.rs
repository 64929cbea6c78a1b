//! Prompt and response-schema construction for the analysis call.
//!
//! Pure and deterministic: the same target URL always yields the same
//! instruction text and the same schema value. No I/O happens here.

use serde_json::{json, Value};

/// Two-phase analyst instruction: read the target site only, then source
/// exactly 5 strategically-fit acquisition funds.
pub fn build_prompt(target_url: &str) -> String {
    format!(
        "Target Website: {url}\n\n\
         Your goal is to act as a Senior Private Equity Analyst focusing on \
         Small and Medium-sized Businesses (SMBs).\n\n\
         PHASE 1: DIRECT WEBSITE ANALYSIS\n\
         First, visit the provided website URL and analyze its content ({url}). \
         Extract the company profile information (Name, Industry, Location, \
         Size (Revenue and Employee Count), Offerings) from this website only.\n\n\
         PHASE 2: BUYER SOURCING\n\
         After understanding the company from its website, identify exactly 5 \
         distinct Private Equity funds that are a good strategic fit.\n\n\
         Return the analysis as a structured JSON object.\n\n\
         REQUIREMENTS:\n\
         1. **Company Profile**: Extract the company name, industry, location, \
         size (estimated revenue/employees), and offerings.\n   \
         - IMPORTANT: When stating facts like Revenue and Employee count in the \
         'size' field, include an inline markdown link to the source if \
         available, e.g. \"$5M [Source](url)\".\n\
         2. **Suitability**: Analyze market stability, scalability, potential \
         risks, and the investment thesis.\n\
         3. **Buyers**: Identify exactly 5 distinct Private Equity funds that \
         are a good strategic fit.\n   \
         - For 'website', provide the direct homepage URL (e.g., \
         \"https://fund.com\").\n   \
         - For 'fitReason', explain the strategic link.\n\n\
         Use the schema provided.",
        url = target_url
    )
}

/// Response schema mirroring `AnalysisReport`, in the provider's OpenAPI
/// subset. Every leaf is required; `risks` is described as a 3-5 element
/// list and `buyers` as exactly 5 funds. Both are request-time asks that
/// the response parser deliberately does not re-enforce.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "companyProfile": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "industry": { "type": "STRING" },
                    "location": { "type": "STRING" },
                    "size": {
                        "type": "STRING",
                        "description": "Revenue/Employees with inline [Source](url)"
                    },
                    "offerings": {
                        "type": "STRING",
                        "description": "Key products and value propositions"
                    }
                },
                "required": ["name", "industry", "location", "size", "offerings"]
            },
            "suitability": {
                "type": "OBJECT",
                "properties": {
                    "marketAnalysis": { "type": "STRING" },
                    "scalability": { "type": "STRING" },
                    "risks": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of 3-5 potential risks"
                    },
                    "investmentThesis": { "type": "STRING" }
                },
                "required": ["marketAnalysis", "scalability", "risks", "investmentThesis"]
            },
            "buyers": {
                "type": "ARRAY",
                "description": "List of 5 potential PE buyers",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "website": { "type": "STRING" },
                        "fitReason": { "type": "STRING" },
                        "buyerProfile": { "type": "STRING" },
                        "portfolioHighlight": { "type": "STRING" }
                    },
                    "required": [
                        "name",
                        "website",
                        "fitReason",
                        "buyerProfile",
                        "portfolioHighlight"
                    ]
                }
            }
        },
        "required": ["companyProfile", "suitability", "buyers"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic_and_names_the_target() {
        let a = build_prompt("https://acme.example");
        let b = build_prompt("https://acme.example");
        assert_eq!(a, b);
        // The URL appears in the header and again in the phase-1 instruction.
        assert_eq!(a.matches("https://acme.example").count(), 2);
        assert!(a.contains("PHASE 1: DIRECT WEBSITE ANALYSIS"));
        assert!(a.contains("exactly 5 distinct Private Equity funds"));
    }

    #[test]
    fn schema_marks_every_top_level_section_required() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["companyProfile", "suitability", "buyers"]);
    }

    #[test]
    fn schema_requires_all_five_buyer_fields() {
        let schema = response_schema();
        let required = schema["properties"]["buyers"]["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 5);
        assert!(required.iter().any(|v| v == "portfolioHighlight"));
    }

    #[test]
    fn schema_describes_risks_as_three_to_five() {
        let schema = response_schema();
        let risks = &schema["properties"]["suitability"]["properties"]["risks"];
        assert_eq!(risks["type"], "ARRAY");
        assert!(risks["description"].as_str().unwrap().contains("3-5"));
    }
}
