//! Closed enumerations for legislative purpose and POPIMAR categories.

use std::fmt;

/// The 15-value closed legislative-purpose taxonomy (§6). Separator for the
/// compound labels is `+`, never `, `.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PurposeTag {
    Amendment,
    EnactmentCitationCommencement,
    InterpretationDefinition,
    ApplicationScope,
    Extent,
    Exemption,
    RepealRevocation,
    TransitionalArrangement,
    ChargeFee,
    Offence,
    EnforcementProsecution,
    DefenceAppeal,
    PowerConferred,
    ProcessRuleConstraintCondition,
    Commencement,
}

impl PurposeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PurposeTag::Amendment => "Amendment",
            PurposeTag::EnactmentCitationCommencement => "Enactment+Citation+Commencement",
            PurposeTag::InterpretationDefinition => "Interpretation+Definition",
            PurposeTag::ApplicationScope => "Application+Scope",
            PurposeTag::Extent => "Extent",
            PurposeTag::Exemption => "Exemption",
            PurposeTag::RepealRevocation => "Repeal+Revocation",
            PurposeTag::TransitionalArrangement => "Transitional Arrangement",
            PurposeTag::ChargeFee => "Charge+Fee",
            PurposeTag::Offence => "Offence",
            PurposeTag::EnforcementProsecution => "Enforcement+Prosecution",
            PurposeTag::DefenceAppeal => "Defence+Appeal",
            PurposeTag::PowerConferred => "Power Conferred",
            PurposeTag::ProcessRuleConstraintCondition => "Process+Rule+Constraint+Condition",
            PurposeTag::Commencement => "Commencement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "Amendment" => PurposeTag::Amendment,
            "Enactment+Citation+Commencement" => PurposeTag::EnactmentCitationCommencement,
            "Interpretation+Definition" => PurposeTag::InterpretationDefinition,
            "Application+Scope" => PurposeTag::ApplicationScope,
            "Extent" => PurposeTag::Extent,
            "Exemption" => PurposeTag::Exemption,
            "Repeal+Revocation" => PurposeTag::RepealRevocation,
            "Transitional Arrangement" => PurposeTag::TransitionalArrangement,
            "Charge+Fee" => PurposeTag::ChargeFee,
            "Offence" => PurposeTag::Offence,
            "Enforcement+Prosecution" => PurposeTag::EnforcementProsecution,
            "Defence+Appeal" => PurposeTag::DefenceAppeal,
            "Power Conferred" => PurposeTag::PowerConferred,
            "Process+Rule+Constraint+Condition" => PurposeTag::ProcessRuleConstraintCondition,
            "Commencement" => PurposeTag::Commencement,
            _ => return None,
        })
    }

    /// Default tag when no purpose pattern fires (§4.7).
    pub fn default_tag() -> Self {
        PurposeTag::ProcessRuleConstraintCondition
    }

    /// Sort rank: structural tags first, amendatory tags last, per §4.7's
    /// "rule of precedence" for `sort_purposes`.
    fn sort_rank(self) -> u8 {
        match self {
            PurposeTag::EnactmentCitationCommencement => 0,
            PurposeTag::InterpretationDefinition => 1,
            PurposeTag::ApplicationScope => 2,
            PurposeTag::Extent => 3,
            PurposeTag::Exemption => 4,
            PurposeTag::ChargeFee => 5,
            PurposeTag::Offence => 6,
            PurposeTag::EnforcementProsecution => 7,
            PurposeTag::DefenceAppeal => 8,
            PurposeTag::PowerConferred => 9,
            PurposeTag::ProcessRuleConstraintCondition => 10,
            PurposeTag::Commencement => 11,
            PurposeTag::TransitionalArrangement => 12,
            PurposeTag::RepealRevocation => 13,
            PurposeTag::Amendment => 14,
        }
    }
}

impl fmt::Display for PurposeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts and dedups a set of purpose tags by the structural-first,
/// amendatory-last precedence order, filtering unknown values out.
/// Idempotent (§8 property 5).
pub fn sort_purposes(tags: impl IntoIterator<Item = PurposeTag>) -> Vec<PurposeTag> {
    let mut out: Vec<PurposeTag> = tags.into_iter().collect();
    out.sort_by_key(|t| t.sort_rank());
    out.dedup_by_key(|t| t.sort_rank());
    out
}

/// The 16-category HSG65-derived operational safety-management taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PopimarTag {
    Policy,
    Organisation,
    OrganisationControl,
    OrganisationCommunicationConsultation,
    OrganisationCollaborationCoordinationCooperation,
    OrganisationCompetence,
    OrganisationCosts,
    Records,
    PermitAuthorisationLicense,
    AspectsAndHazards,
    PlanningRiskImpactAssessment,
    RiskControl,
    Notification,
    MaintenanceExaminationAndTesting,
    CheckingMonitoring,
    Review,
}

impl PopimarTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PopimarTag::Policy => "Policy",
            PopimarTag::Organisation => "Organisation",
            PopimarTag::OrganisationControl => "Organisation - Control",
            PopimarTag::OrganisationCommunicationConsultation => {
                "Organisation - Communication & Consultation"
            }
            PopimarTag::OrganisationCollaborationCoordinationCooperation => {
                "Organisation - Collaboration, Coordination, Cooperation"
            }
            PopimarTag::OrganisationCompetence => "Organisation - Competence",
            PopimarTag::OrganisationCosts => "Organisation - Costs",
            PopimarTag::Records => "Records",
            PopimarTag::PermitAuthorisationLicense => "Permit, Authorisation, License",
            PopimarTag::AspectsAndHazards => "Aspects and Hazards",
            PopimarTag::PlanningRiskImpactAssessment => "Planning & Risk / Impact Assessment",
            PopimarTag::RiskControl => "Risk Control",
            PopimarTag::Notification => "Notification",
            PopimarTag::MaintenanceExaminationAndTesting => "Maintenance, Examination and Testing",
            PopimarTag::CheckingMonitoring => "Checking, Monitoring",
            PopimarTag::Review => "Review",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "Policy" => PopimarTag::Policy,
            "Organisation" => PopimarTag::Organisation,
            "Organisation - Control" => PopimarTag::OrganisationControl,
            "Organisation - Communication & Consultation" => {
                PopimarTag::OrganisationCommunicationConsultation
            }
            "Organisation - Collaboration, Coordination, Cooperation" => {
                PopimarTag::OrganisationCollaborationCoordinationCooperation
            }
            "Organisation - Competence" => PopimarTag::OrganisationCompetence,
            "Organisation - Costs" => PopimarTag::OrganisationCosts,
            "Records" => PopimarTag::Records,
            "Permit, Authorisation, License" => PopimarTag::PermitAuthorisationLicense,
            "Aspects and Hazards" => PopimarTag::AspectsAndHazards,
            "Planning & Risk / Impact Assessment" => PopimarTag::PlanningRiskImpactAssessment,
            "Risk Control" => PopimarTag::RiskControl,
            "Notification" => PopimarTag::Notification,
            "Maintenance, Examination and Testing" => PopimarTag::MaintenanceExaminationAndTesting,
            "Checking, Monitoring" => PopimarTag::CheckingMonitoring,
            "Review" => PopimarTag::Review,
            _ => return None,
        })
    }

    pub fn all() -> [PopimarTag; 16] {
        [
            PopimarTag::Policy,
            PopimarTag::Organisation,
            PopimarTag::OrganisationControl,
            PopimarTag::OrganisationCommunicationConsultation,
            PopimarTag::OrganisationCollaborationCoordinationCooperation,
            PopimarTag::OrganisationCompetence,
            PopimarTag::OrganisationCosts,
            PopimarTag::Records,
            PopimarTag::PermitAuthorisationLicense,
            PopimarTag::AspectsAndHazards,
            PopimarTag::PlanningRiskImpactAssessment,
            PopimarTag::RiskControl,
            PopimarTag::Notification,
            PopimarTag::MaintenanceExaminationAndTesting,
            PopimarTag::CheckingMonitoring,
            PopimarTag::Review,
        ]
    }
}

impl fmt::Display for PopimarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts and dedups a set of POPIMAR tags by declaration order, filtering
/// unknown values out. Idempotent (§8 property 5).
pub fn popimar_sorter(tags: impl IntoIterator<Item = PopimarTag>) -> Vec<PopimarTag> {
    let all = PopimarTag::all();
    let rank = |t: &PopimarTag| all.iter().position(|a| a == t).unwrap_or(usize::MAX);
    let mut out: Vec<PopimarTag> = tags.into_iter().collect();
    out.sort_by_key(rank);
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_round_trips_every_variant() {
        for tag in [
            PurposeTag::Amendment,
            PurposeTag::EnactmentCitationCommencement,
            PurposeTag::InterpretationDefinition,
            PurposeTag::ApplicationScope,
            PurposeTag::Extent,
            PurposeTag::Exemption,
            PurposeTag::RepealRevocation,
            PurposeTag::TransitionalArrangement,
            PurposeTag::ChargeFee,
            PurposeTag::Offence,
            PurposeTag::EnforcementProsecution,
            PurposeTag::DefenceAppeal,
            PurposeTag::PowerConferred,
            PurposeTag::ProcessRuleConstraintCondition,
            PurposeTag::Commencement,
        ] {
            assert_eq!(PurposeTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn popimar_round_trips_every_variant() {
        for tag in PopimarTag::all() {
            assert_eq!(PopimarTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn sort_purposes_puts_structural_first_amendatory_last() {
        let sorted = sort_purposes([
            PurposeTag::Amendment,
            PurposeTag::Extent,
            PurposeTag::RepealRevocation,
            PurposeTag::EnactmentCitationCommencement,
        ]);
        assert_eq!(
            sorted,
            vec![
                PurposeTag::EnactmentCitationCommencement,
                PurposeTag::Extent,
                PurposeTag::RepealRevocation,
                PurposeTag::Amendment,
            ]
        );
    }

    #[test]
    fn sort_purposes_idempotent() {
        let once = sort_purposes([PurposeTag::Amendment, PurposeTag::Extent]);
        let twice = sort_purposes(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn popimar_sorter_idempotent_and_ordered() {
        let once = popimar_sorter([PopimarTag::Review, PopimarTag::Policy, PopimarTag::Policy]);
        assert_eq!(once, vec![PopimarTag::Policy, PopimarTag::Review]);
        let twice = popimar_sorter(once.clone());
        assert_eq!(once, twice);
    }
}
