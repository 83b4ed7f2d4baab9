// If code coverage tool `cargo-llvm-cov` is running with the nightly toolchain,
// enable the unstable “coverage” attribute. This allows using the annotation
// `#[coverage(off)]` to explicitly exclude certain parts of the code from
// being considered as “code under test.” Most prominently, the annotation
// should be added to every `#[cfg(test)]` module. Since the “coverage”
// feature is enable only conditionally, the annotation to use is:
// `#[cfg_attr(coverage_nightly, coverage(off))]`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(clippy::shadow_unrelated)]

pub mod application;
pub mod prelude;
pub mod protocol;


use anyhow::Context;
use anyhow::Result;
use application::batch::HintBatch;
use application::config::cli_args::Args;
use prelude::twenty_first;
use tracing::info;

/// Run the batch tool as configured by the command-line arguments.
///
/// Returns the process exit code: 0 if hints were produced for every
/// transaction in the snapshot, 1 otherwise.
///
/// A thread count configures rayon's global pool, which can be configured
/// only once per process. Calling `run` again with a thread count fails.
pub fn run(args: Args) -> Result<i32> {
    if let Some(num_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads.into())
            .build_global()
            .context("could not configure worker thread pool")?;
    }

    let batch = HintBatch::load(&args.input)?;
    info!(
        "Loaded side effects of {} transaction(s) from {}",
        batch.len(),
        args.input.display()
    );

    let report = batch.process(args.processing_options());
    report.write(args.output.as_deref())?;

    let num_failures = report.num_failures();
    if num_failures > 0 {
        info!("{num_failures} transaction(s) failed; see report for details");
        return Ok(1);
    }

    Ok(0)
}
