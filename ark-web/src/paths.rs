//! Compile-time deployment settings.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/ark` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/ark` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    trimmed_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base URL of the telemetry functions, from `ARK_TELEMETRY_URL`.
///
/// `None` disables telemetry for the build.
#[must_use]
pub fn telemetry_base() -> Option<String> {
    trimmed_base(option_env!("ARK_TELEMETRY_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn trimmed_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
