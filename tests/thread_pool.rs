mod common;

use clap::Parser;
use common::logging::tracing_logger;
use common::snapshot::transient_pair;
use common::snapshot::write_snapshot;
use kernel_hints::application::config::cli_args::Args;

/// The only test in this binary, so nothing else touches rayon's global
/// pool before the first `run`.
#[test]
fn thread_count_configures_global_pool_only_once() {
    tracing_logger();
    let input = write_snapshot("thread-pool-input.json", &[transient_pair("linked", true)]);
    let output = common::snapshot::temp_path("thread-pool-report.json");
    let cli = [
        "kernel-hints".to_string(),
        input.display().to_string(),
        "--output".to_string(),
        output.display().to_string(),
        "--threads".to_string(),
        "2".to_string(),
    ];

    let first = kernel_hints::run(Args::parse_from(&cli));
    assert_eq!(0, first.unwrap());
    assert_eq!(2, rayon::current_num_threads());

    let err = kernel_hints::run(Args::parse_from(&cli)).unwrap_err();
    assert!(format!("{err:#}").contains("could not configure worker thread pool"));

    std::fs::remove_file(input).unwrap();
    std::fs::remove_file(output).unwrap();
}
