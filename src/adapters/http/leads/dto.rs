//! Request/response DTOs for the lead query boundary.
//!
//! The query boundary is deliberately forgiving: malformed numeric values
//! and unrecognized enum names degrade to "dimension unconstrained"
//! instead of rejecting the request, because a filter UI must never 400
//! on a half-typed field.

use serde::{Deserialize, Serialize};

use crate::domain::lead::{
    CatalogSummary, IntentSignal, LeadFilter, LeadRecord, Seniority,
};

/// Raw query parameters for `GET /api/leads` and `GET /api/leads/metrics`.
///
/// List-valued parameters arrive as comma-separated strings; everything
/// is optional and absent keys impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadQueryParams {
    pub query: Option<String>,
    pub industries: Option<String>,
    pub locations: Option<String>,
    pub seniorities: Option<String>,
    pub technologies: Option<String>,
    pub signals: Option<String>,
    pub hiring: Option<String>,
    pub min_employees: Option<String>,
    pub max_employees: Option<String>,
    pub min_confidence: Option<String>,
}

impl LeadQueryParams {
    /// Builds a `LeadFilter`, recovering from malformed input by leaving
    /// the affected dimension unconstrained.
    pub fn into_filter(self) -> LeadFilter {
        LeadFilter {
            query: self.query.unwrap_or_default(),
            industries: split_list(self.industries.as_deref()),
            locations: split_list(self.locations.as_deref()),
            seniorities: split_parsed(self.seniorities.as_deref(), Seniority::parse),
            technologies: split_list(self.technologies.as_deref()),
            signals: split_parsed(self.signals.as_deref(), IntentSignal::parse),
            hiring: parse_tristate(self.hiring.as_deref()),
            min_employees: parse_number(self.min_employees.as_deref()),
            max_employees: parse_number(self.max_employees.as_deref()),
            min_confidence: parse_number(self.min_confidence.as_deref()),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(value) => value.split(',').map(str::to_string).collect(),
    }
}

fn split_parsed<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    match raw {
        None | Some("") => Vec::new(),
        // Unrecognized names are dropped, not rejected.
        Some(value) => value.split(',').filter_map(|item| parse(item)).collect(),
    }
}

fn parse_tristate(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.parse().ok())
}

/// Response body for `GET /api/leads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadsResponse {
    pub leads: Vec<LeadRecord>,
}

/// Response body for `GET /api/leads/metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadMetricsResponse {
    #[serde(flatten)]
    pub summary: CatalogSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_build_the_default_filter() {
        let filter = LeadQueryParams::default().into_filter();
        assert_eq!(filter, LeadFilter::default());
    }

    #[test]
    fn comma_separated_lists_are_split() {
        let params = LeadQueryParams {
            industries: Some("SaaS,Fintech".to_string()),
            technologies: Some("Salesforce".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.industries, vec!["SaaS", "Fintech"]);
        assert_eq!(filter.technologies, vec!["Salesforce"]);
    }

    #[test]
    fn seniorities_and_signals_parse_display_names() {
        let params = LeadQueryParams {
            seniorities: Some("C-Level,VP".to_string()),
            signals: Some("Funding,Content Engagement".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.seniorities, vec![Seniority::CLevel, Seniority::Vp]);
        assert_eq!(
            filter.signals,
            vec![IntentSignal::Funding, IntentSignal::ContentEngagement]
        );
    }

    #[test]
    fn unrecognized_enum_names_are_dropped() {
        let params = LeadQueryParams {
            seniorities: Some("C-Level,Founder".to_string()),
            signals: Some("Churn Risk".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.seniorities, vec![Seniority::CLevel]);
        assert!(filter.signals.is_empty());
    }

    #[test]
    fn hiring_parses_true_and_false_only() {
        let tri = |raw: &str| LeadQueryParams {
            hiring: Some(raw.to_string()),
            ..Default::default()
        };
        assert_eq!(tri("true").into_filter().hiring, Some(true));
        assert_eq!(tri("false").into_filter().hiring, Some(false));
        assert_eq!(tri("maybe").into_filter().hiring, None);
    }

    #[test]
    fn malformed_numbers_become_absent_bounds() {
        let params = LeadQueryParams {
            min_employees: Some("abc".to_string()),
            max_employees: Some("12x".to_string()),
            min_confidence: Some("".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.min_employees, None);
        assert_eq!(filter.max_employees, None);
        assert_eq!(filter.min_confidence, None);
    }

    #[test]
    fn well_formed_numbers_parse() {
        let params = LeadQueryParams {
            min_employees: Some("100".to_string()),
            max_employees: Some("5000".to_string()),
            min_confidence: Some("80".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.min_employees, Some(100));
        assert_eq!(filter.max_employees, Some(5000));
        assert_eq!(filter.min_confidence, Some(80));
    }

    #[test]
    fn empty_string_lists_impose_no_constraint() {
        let params = LeadQueryParams {
            industries: Some(String::new()),
            ..Default::default()
        };
        assert!(params.into_filter().industries.is_empty());
    }
}
