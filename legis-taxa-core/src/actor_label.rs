//! Hierarchical actor labels, e.g. `Org: Employer`, `Gvt: Authority: Planning`.

use std::fmt;

/// A colon-delimited hierarchical actor identifier.
///
/// `ActorLabel` is a stable dictionary key: two labels are equal iff their
/// underlying strings are byte-equal. Case is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ActorLabel(String);

impl ActorLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The colon-delimited path segments, e.g. `["Gvt", "Authority", "Planning"]`.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split(':').map(str::trim).collect()
    }

    /// The top-level namespace, e.g. `"Org"`, `"Ind"`, `"Gvt"`, `"SC"`.
    pub fn root(&self) -> &str {
        self.segments().first().copied().unwrap_or("")
    }

    /// Governed actors are anything outside the `Gvt` namespace: industry,
    /// individuals, supply chain.
    pub fn is_governed(&self) -> bool {
        self.root() != "Gvt"
    }

    /// Government actors: ministers, authorities and other `Gvt:` labels.
    pub fn is_government(&self) -> bool {
        self.root() == "Gvt"
    }
}

impl fmt::Display for ActorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActorLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}
