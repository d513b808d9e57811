//! Shared test setup and test vectors for the zpool crates.
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

use std::{collections::HashSet, sync::Once};

use color_eyre::config::{Frame, HookBuilder};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod prelude;
pub mod vectors;

static INIT: Once = Once::new();

/// Frames from the test harness and the standard library, which hide the
/// frames of the failing test.
const HIDDEN_FRAME_PREFIXES: &[&str] = &[
    "std::panic",
    "std::thread::local",
    "core::ops::function::FnOnce::call_once",
    "core::result::Result",
    "test::run_test_in_process",
    "test::assert_test_result",
    "<alloc::boxed::Box",
    "<std::panic::AssertUnwindSafe",
];

/// Installs the tracing subscriber and the panic and error report hooks.
///
/// Call this at the start of every test. Only the first call in each test
/// process does anything.
///
/// Logs are filtered by `RUST_LOG`. Without it, only warnings are shown, and
/// the expected configuration warnings from `zpool_coinbase` are hidden.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn").add_directive(
                "zpool_coinbase=error"
                    .parse()
                    .expect("hard-coded directive is valid"),
            )
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_test_writer())
            .with(ErrorLayer::default())
            .init();

        HookBuilder::default()
            .add_frame_filter(Box::new(filter_frames))
            .install()
            .expect("report hooks are only installed once");
    })
}

/// Drops duplicate frames, and frames from [`HIDDEN_FRAME_PREFIXES`].
fn filter_frames(frames: &mut Vec<&Frame>) {
    let mut seen = HashSet::new();

    frames.retain(|frame| {
        if !seen.insert((frame.lineno, frame.filename.clone())) {
            return false;
        }

        match frame.name.as_deref() {
            Some(name) => !HIDDEN_FRAME_PREFIXES
                .iter()
                .any(|prefix| name.starts_with(prefix)),
            None => true,
        }
    });
}
