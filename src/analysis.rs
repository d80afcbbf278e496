//! Wire types for the `/analyze` endpoint and the input parsing that feeds it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub drugs: Vec<String>,
}

impl AnalysisRequest {
    /// Splits comma separated input into trimmed drug names.
    ///
    /// Only whitespace-only input is rejected. Empty tokens (`"A,,B"`, a
    /// trailing comma) are forwarded to the backend as empty strings.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        let drugs = input.split(',').map(|d| d.trim().to_string()).collect();
        Ok(Self { drugs })
    }
}

/// One analyzed molecule as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrugResult {
    #[serde(deserialize_with = "null_as_empty")]
    pub molecule: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub latest_summary: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub moa: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub regulatory_news: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub clinical_news: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub commercial_news: String,
}

// Missing fields are covered by `#[serde(default)]`; explicit nulls land here.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Regulatory,
    Clinical,
    Commercial,
}

impl NewsCategory {
    /// Display order of the category blocks.
    pub const ALL: [NewsCategory; 3] = [
        NewsCategory::Regulatory,
        NewsCategory::Clinical,
        NewsCategory::Commercial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Regulatory => "Regulatory News",
            NewsCategory::Clinical => "Clinical News",
            NewsCategory::Commercial => "Commercial News",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NewsCategory::Regulatory => "📜",
            NewsCategory::Clinical => "🏥",
            NewsCategory::Commercial => "💼",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NewsCategory::Regulatory => "#1976d2",
            NewsCategory::Clinical => "#d32f2f",
            NewsCategory::Commercial => "#ed6c02",
        }
    }
}

impl DrugResult {
    pub fn news(&self, category: NewsCategory) -> &str {
        match category {
            NewsCategory::Regulatory => &self.regulatory_news,
            NewsCategory::Clinical => &self.clinical_news,
            NewsCategory::Commercial => &self.commercial_news,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        for input in ["", " ", "\t", "  \n  "] {
            assert_eq!(
                AnalysisRequest::parse(input),
                Err(ValidationError::EmptyInput),
                "{input:?}"
            );
        }
    }

    #[test]
    fn names_are_trimmed_in_order() {
        let req = AnalysisRequest::parse("Jardiance, Ozempic").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "drugs": ["Jardiance", "Ozempic"] })
        );
    }

    #[test]
    fn empty_tokens_are_kept() {
        let req = AnalysisRequest::parse("A,,B").unwrap();
        assert_eq!(req.drugs, vec!["A", "", "B"]);

        let req = AnalysisRequest::parse("Keytruda,").unwrap();
        assert_eq!(req.drugs, vec!["Keytruda", ""]);
    }

    #[test]
    fn duplicates_are_kept() {
        let req = AnalysisRequest::parse("Ozempic,Ozempic").unwrap();
        assert_eq!(req.drugs, vec!["Ozempic", "Ozempic"]);
    }

    #[test]
    fn partial_result_decodes_with_empty_fields() {
        let r: DrugResult = serde_json::from_value(json!({
            "molecule": "Ozempic",
            "moa": "GLP-1 receptor agonist",
        }))
        .unwrap();
        assert_eq!(r.molecule, "Ozempic");
        assert_eq!(r.moa, "GLP-1 receptor agonist");
        assert!(r.latest_summary.is_empty());
        assert!(r.news(NewsCategory::Clinical).is_empty());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let r: DrugResult = serde_json::from_value(json!({
            "molecule": "Jardiance",
            "moa": null,
            "clinical_news": null,
            "commercial_news": "Q2 sales",
        }))
        .unwrap();
        assert_eq!(r.molecule, "Jardiance");
        assert!(r.moa.is_empty());
        assert!(r.clinical_news.is_empty());
        assert_eq!(r.commercial_news, "Q2 sales");
    }

    #[test]
    fn news_maps_each_category_to_its_field() {
        let r = DrugResult {
            regulatory_news: "r".into(),
            clinical_news: "c".into(),
            commercial_news: "m".into(),
            ..Default::default()
        };
        let texts: Vec<&str> = NewsCategory::ALL.iter().map(|c| r.news(*c)).collect();
        assert_eq!(texts, vec!["r", "c", "m"]);
    }
}
