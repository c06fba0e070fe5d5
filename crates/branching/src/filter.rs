//! Decide which variables are kept
//!
//! Serpent reports many quantities twice, once from the infinite spectrum
//! (`INF_`) and once from the B1 leakage-corrected spectrum (`B1_`). A single
//! allow-list entry such as `FLX` can cover both, but only when the relevant
//! toggle is enabled in the [Settings].

use stools_settings::Settings;

/// Prefix for B1 leakage-corrected variables
pub const B1_PREFIX: &str = "B1_";

/// Prefix for infinite spectrum variables
pub const INF_PREFIX: &str = "INF_";

/// Check if the data for a variable should be stored
///
/// The first matching rule wins:
///
/// 1. An empty allow-list retains everything
/// 2. `name` is in the allow-list
/// 3. `include_b1` is set and `name` without a leading `B1_` is in the list
/// 4. `include_inf` is set and `name` without a leading `INF_` is in the list
///
/// Anything else is discarded. Retained variables are always stored under
/// their full original name.
///
/// ```rust
/// # use stools_branching::should_retain;
/// # use stools_settings::Settings;
/// let mut settings = Settings::new().with_variables(["FLX"]);
/// assert!(should_retain("INF_FLX", &settings));
///
/// settings.set_include_inf(false);
/// assert!(!should_retain("INF_FLX", &settings));
/// ```
pub fn should_retain(name: &str, settings: &Settings) -> bool {
    let allowed = &settings.variables;

    if allowed.is_empty() {
        return true;
    }

    if allowed.contains(name) {
        return true;
    }

    let stripped_match = |prefix: &str| {
        name.strip_prefix(prefix).is_some_and(|base| allowed.contains(base))
    };

    (settings.include_b1 && stripped_match(B1_PREFIX))
        || (settings.include_inf && stripped_match(INF_PREFIX))
}
