#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Bezel showcase wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    bezel_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use bezel_telemetry::{LoggingConfig, init_logging};

    init_logging(&LoggingConfig::default())?;
    tracing::warn!(
        "the bezel-ui binary is intended for wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_logs_warning() -> anyhow::Result<()> {
        main()
    }
}
