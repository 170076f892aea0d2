//! The static actor dictionary (§4.1).
//!
//! Each entry names the surface forms an actor label can appear as in
//! prose, plus any phrases that — found immediately after a match —
//! suppress it (the "blacklist filter", e.g. `Public` before `public
//! interest`). `regex` has no lookaround, so this is implemented as a
//! second small regex checked against the tail of text following a match,
//! rather than a negative lookahead baked into the main pattern (§9
//! "Regex engine choice": translate pattern semantics, not literal syntax).

/// One dictionary entry, prior to compilation.
pub struct ActorEntry {
    pub label: &'static str,
    pub surface_forms: &'static [&'static str],
    pub exclude_following: &'static [&'static str],
}

/// The process-wide actor taxonomy. Order here is the "stable order" that
/// `custom_actor_library` and the `*_actors_in_text` scans return.
pub const ACTOR_DICTIONARY: &[ActorEntry] = &[
    ActorEntry {
        label: "Org: Employer",
        surface_forms: &["employer", "employers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Org: Self-Employed",
        surface_forms: &["self-employed person", "self-employed persons", "self-employed"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Org: Occupier",
        surface_forms: &["occupier", "occupiers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Org: Contractor",
        surface_forms: &["contractor", "contractors"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Org: Manufacturer",
        surface_forms: &["manufacturer", "manufacturers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Org: Supplier",
        surface_forms: &["supplier", "suppliers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Ind: Employee",
        surface_forms: &["employee", "employees"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Ind: Worker",
        surface_forms: &["worker", "workers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Ind: Visitor",
        surface_forms: &["visitor", "visitors"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Ind: Person",
        surface_forms: &["person", "persons", "any person"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "SC: C: Principal Contractor",
        surface_forms: &["principal contractor", "principal contractors"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "SC: Designer",
        surface_forms: &["designer", "designers"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Public",
        surface_forms: &["public", "the public"],
        // "public interest" and "public inquiry" are not references to the
        // actor "the public" as a legal subject.
        exclude_following: &["interest", "inquiry"],
    },
    ActorEntry {
        label: "Gvt: Minister",
        surface_forms: &["secretary of state", "the minister", "minister"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Gvt: Authority",
        surface_forms: &["the authority", "authority"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Gvt: Authority: Planning",
        surface_forms: &["planning authority", "planning authorities"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Gvt: Authority: Enforcing",
        surface_forms: &["enforcing authority", "enforcing authorities"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Gvt: Inspector",
        surface_forms: &["inspector", "inspectors"],
        exclude_following: &[],
    },
    ActorEntry {
        label: "Gvt: Regulator",
        surface_forms: &["the regulator", "regulator"],
        exclude_following: &[],
    },
];
