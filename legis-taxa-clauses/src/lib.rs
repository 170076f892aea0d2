//! RoleMatcher and ClauseRefiner (§4.3, §4.4): windowed actor/modal/action
//! matching over statutory prose.

pub mod clause_refiner;
mod role_matcher;

pub use role_matcher::{find_role_holders, RegexAttempt, RoleMatcherOutput};
