use clap::Parser;
use std::process::ExitCode;

mod args;
use args::{Args, build_config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Starting survey of {}", config.target_url);
    let start_time = std::time::Instant::now();

    let report = match site_survey::run(config).await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Survey failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Survey complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    for (word, count) in report.word_counts.most_common(5) {
        ::log::debug!("  {:>6} {}", count, word);
    }

    println!(
        "{} external resources -> {}",
        report.external_resources.len(),
        report.resources_path.display()
    );
    println!(
        "{} words from {} -> {}",
        report.word_counts.total(),
        report.policy_url,
        report.word_count_path.display()
    );

    ExitCode::SUCCESS
}
