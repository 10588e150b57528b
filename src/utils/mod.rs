pub mod build_info;
pub mod paths;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "expense_tracker=warn";

/// Installs the global tracing subscriber; a second call is a no-op.
pub fn init_tracing() {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Uses `directives` when present and valid, otherwise the quiet default.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directives_are_kept() {
        let filter = build_filter(Some("expense_tracker=debug"));
        assert_eq!(filter.to_string(), "expense_tracker=debug");
    }

    #[test]
    fn missing_or_blank_directives_fall_back_to_warn() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }
}
