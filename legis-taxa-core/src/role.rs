//! Role-based DRRP taxonomy: Duty, Right, Responsibility, Power.

use std::fmt;

/// Which universe of actors and which modal/anchor patterns a scan applies.
///
/// Duty and Right draw from [`ActorLabel::is_governed`](crate::ActorLabel::is_governed)
/// actors; Responsibility and Power draw from government actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RoleKind {
    Duty,
    Right,
    Responsibility,
    Power,
}

impl RoleKind {
    /// `true` for the two kinds that scan governed (non-government) actors.
    pub fn scans_governed_actors(self) -> bool {
        matches!(self, RoleKind::Duty | RoleKind::Right)
    }

    /// The output tag this kind assigns to matches it produces.
    pub fn tag(self) -> DutyTypeTag {
        match self {
            RoleKind::Duty => DutyTypeTag::Duty,
            RoleKind::Right => DutyTypeTag::Right,
            RoleKind::Responsibility => DutyTypeTag::Responsibility,
            RoleKind::Power => DutyTypeTag::Power,
        }
    }

    pub fn all() -> [RoleKind; 4] {
        [
            RoleKind::Duty,
            RoleKind::Right,
            RoleKind::Responsibility,
            RoleKind::Power,
        ]
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().as_str())
    }
}

/// The closed four-value output tag of the DRRP taxonomy.
///
/// Priority order for sorting a multi-tag set is the declaration order:
/// `Duty < Right < Responsibility < Power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum DutyTypeTag {
    Duty,
    Right,
    Responsibility,
    Power,
}

impl DutyTypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DutyTypeTag::Duty => "Duty",
            DutyTypeTag::Right => "Right",
            DutyTypeTag::Responsibility => "Responsibility",
            DutyTypeTag::Power => "Power",
        }
    }

    /// Parses one of the four closed tag strings. Anything else is `None`,
    /// matching the "filter unknown values out" contract of the sorters.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Duty" => Some(DutyTypeTag::Duty),
            "Right" => Some(DutyTypeTag::Right),
            "Responsibility" => Some(DutyTypeTag::Responsibility),
            "Power" => Some(DutyTypeTag::Power),
            _ => None,
        }
    }
}

impl fmt::Display for DutyTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts and dedups a set of duty-type tags, dropping unknown values.
///
/// Idempotent: sorting an already-sorted, already-deduped input returns it
/// unchanged (property 5, §8).
pub fn duty_type_sorter(tags: impl IntoIterator<Item = DutyTypeTag>) -> Vec<DutyTypeTag> {
    let mut out: Vec<DutyTypeTag> = tags.into_iter().collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(DutyTypeTag::Duty < DutyTypeTag::Right);
        assert!(DutyTypeTag::Right < DutyTypeTag::Responsibility);
        assert!(DutyTypeTag::Responsibility < DutyTypeTag::Power);
    }

    #[test]
    fn sorter_dedups_and_filters_idempotently() {
        let once = duty_type_sorter([
            DutyTypeTag::Power,
            DutyTypeTag::Duty,
            DutyTypeTag::Duty,
            DutyTypeTag::Right,
        ]);
        assert_eq!(
            once,
            vec![DutyTypeTag::Duty, DutyTypeTag::Right, DutyTypeTag::Power]
        );
        let twice = duty_type_sorter(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(DutyTypeTag::parse("Duty"), Some(DutyTypeTag::Duty));
        assert_eq!(DutyTypeTag::parse("Obligation"), None);
    }

    #[test]
    fn role_kind_scans_correct_universe() {
        assert!(RoleKind::Duty.scans_governed_actors());
        assert!(RoleKind::Right.scans_governed_actors());
        assert!(!RoleKind::Responsibility.scans_governed_actors());
        assert!(!RoleKind::Power.scans_governed_actors());
    }
}
