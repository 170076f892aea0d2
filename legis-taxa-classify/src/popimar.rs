//! Popimar classifier (§4.6): maps a clause to zero or more of the 16
//! HSG65-derived operational safety-management categories.

use once_cell::sync::Lazy;
use regex::Regex;

use legis_taxa_core::{popimar_sorter, DutyTypeTag, PipelineConfig, PopimarTag};

/// Priority-ordered `(category, regex)` table; every pattern that fires on
/// the input text contributes its category.
static CATEGORY_PATTERNS: Lazy<Vec<(PopimarTag, Regex)>> = Lazy::new(|| {
    vec![
        (
            PopimarTag::Policy,
            Regex::new(r"(?i)\b(?:health and safety policy|written statement of (?:general )?policy)\b").unwrap(),
        ),
        (
            PopimarTag::Organisation,
            Regex::new(r"(?i)\borganisational arrangements?\b").unwrap(),
        ),
        (
            PopimarTag::OrganisationControl,
            Regex::new(r"(?i)\b(?:management control|control measures?)\b").unwrap(),
        ),
        (
            PopimarTag::OrganisationCommunicationConsultation,
            Regex::new(r"(?i)\b(?:consult(?:ation)? with|shall inform|communicate (?:to|with) employees)\b").unwrap(),
        ),
        (
            PopimarTag::OrganisationCollaborationCoordinationCooperation,
            Regex::new(r"(?i)\b(?:co-?operat(?:e|ion)|co-?ordinat(?:e|ion) with|collaborat(?:e|ion))\b").unwrap(),
        ),
        (
            PopimarTag::OrganisationCompetence,
            Regex::new(r"(?i)\b(?:competent person|adequate training|sufficient (?:training|instruction))\b").unwrap(),
        ),
        (
            PopimarTag::OrganisationCosts,
            Regex::new(r"(?i)\b(?:at (?:his|their|the employer's) own expense|cost shall be borne|without charge to)\b").unwrap(),
        ),
        (
            PopimarTag::Records,
            Regex::new(r"(?i)\b(?:keep a record|maintain a register|records? shall be kept)\b").unwrap(),
        ),
        (
            PopimarTag::PermitAuthorisationLicense,
            Regex::new(r"(?i)\b(?:grant a licen[cs]e|issue a permit|authorisation (?:is|shall be) required)\b").unwrap(),
        ),
        (
            PopimarTag::AspectsAndHazards,
            Regex::new(r"(?i)\b(?:hazardous substances?|identify(?:ing)? hazards|significant risk)\b").unwrap(),
        ),
        (
            PopimarTag::PlanningRiskImpactAssessment,
            Regex::new(r"(?i)\b(?:risk assessment|assess the risks?|impact assessment)\b").unwrap(),
        ),
        (
            PopimarTag::RiskControl,
            Regex::new(r"(?i)\b(?:control the risk|prevent or (?:adequately )?control|reduce the risk)\b").unwrap(),
        ),
        (
            PopimarTag::Notification,
            Regex::new(r"(?i)\b(?:notify the (?:enforcing )?authority|give notice (?:to|of)|shall be notified)\b").unwrap(),
        ),
        (
            PopimarTag::MaintenanceExaminationAndTesting,
            Regex::new(r"(?i)\b(?:maintained in (?:an )?efficient (?:state|working order)|thorough examination|tested at suitable intervals)\b").unwrap(),
        ),
        (
            PopimarTag::CheckingMonitoring,
            Regex::new(r"(?i)\b(?:monitor(?:ing)? (?:exposure|compliance)|periodical? checks?)\b").unwrap(),
        ),
        (
            PopimarTag::Review,
            Regex::new(r"(?i)\b(?:review(?:ed)? at suitable intervals|keep under review)\b").unwrap(),
        ),
    ]
});

/// Classifies one clause against the 16-category table, applying the
/// `Risk Control` default when `duty_type` is POPIMAR-eligible and no
/// category pattern fired (§4.6).
///
/// Empty text returns `[]` without consulting `duty_type`.
pub fn classify(text: &str, duty_type: Option<DutyTypeTag>, config: &PipelineConfig) -> Vec<PopimarTag> {
    if text.is_empty() {
        return Vec::new();
    }

    let hits: Vec<PopimarTag> = CATEGORY_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(tag, _)| *tag)
        .collect();

    if hits.is_empty() {
        if duty_type.is_some_and(|d| config.is_popimar_eligible(d)) {
            tracing::trace!(?duty_type, "no category pattern fired, defaulting to Risk Control");
            return vec![PopimarTag::RiskControl];
        }
        return Vec::new();
    }

    popimar_sorter(hits)
}

#[cfg(test)]
#[path = "tests/popimar.rs"]
mod tests;
