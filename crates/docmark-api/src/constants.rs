//! API constants.

/// Cache-busting version tag appended to static asset URLs; bump when the
/// assets change.
pub const ASSET_VERSION: &str = "1";
