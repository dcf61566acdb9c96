//! Subscriber setup for applications and benches embedding ordenum.
//!
//! The library crates only emit events: `ordenum_core::registry` and
//! `ordenum_core::declaration` log discovery and materialisation, and
//! `ordenum_core::catalog` logs registrations. [`init_tracing`] installs a
//! subscriber for them when `ORDENUM_LOG` (or `RUST_LOG`) is set; the layout is
//! picked by `ORDENUM_LOG_FORMAT`.
//!
//! ```bash
//! ORDENUM_LOG=ordenum_core=debug ORDENUM_LOG_FORMAT=tree cargo bench
//! ORDENUM_LOG=ordenum_core::registry=trace ORDENUM_LOG_FORMAT=json my-app
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Filter directives, same syntax as `RUST_LOG`.
pub const LOG_ENV: &str = "ORDENUM_LOG";

/// Output layout selector: `text`, `tree` or `json`.
pub const LOG_FORMAT_ENV: &str = "ORDENUM_LOG_FORMAT";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented spans via `tracing-tree`.
    Tree,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Text`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// The stderr layer for this layout.
    fn layer(self) -> BoxedLayer {
        match self {
            Self::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
            Self::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            Self::Tree => tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .boxed(),
        }
    }
}

/// The filter from `ORDENUM_LOG`, else `RUST_LOG`; `None` when neither is set.
fn filter_from_env() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Installs the global subscriber.
///
/// A no-op when no log filter is configured or when another subscriber is
/// already installed. Returns whether this call installed one.
pub fn init_tracing() -> bool {
    let Some(filter) = filter_from_env() else {
        return false;
    };
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default());
    let installed = Registry::default()
        .with(format.layer().with_filter(filter))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(?format, "tracing initialised");
    }
    installed
}
