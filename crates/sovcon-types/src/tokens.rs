//! Well-known audit tokens.
//!
//! `action` is a short verb token, `outcome` a short status token. Free-form
//! values are still allowed; these constants cover everything the console
//! itself emits.

// Actions
pub const ACTION_READ: &str = "READ";
pub const ACTION_RETRIEVE: &str = "RETRIEVE";
pub const ACTION_FILTER: &str = "FILTER";
pub const ACTION_IMPORT_POLICY: &str = "IMPORT_POLICY";
pub const ACTION_RUN_EVAL: &str = "RUN_EVAL";

// Outcomes
pub const OUTCOME_ALLOW: &str = "ALLOW";
pub const OUTCOME_APPLIED: &str = "APPLIED";
pub const OUTCOME_SUCCESS: &str = "SUCCESS";
pub const OUTCOME_OK: &str = "OK";

// Actors used by console-internal actions
pub const ACTOR_ADMIN: &str = "admin@console";
pub const ACTOR_EVAL_SERVICE: &str = "svc-eval@console";
