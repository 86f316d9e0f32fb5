use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{Cli, Commands};
use tally_client::{ApiEndpoint, HttpFetcher};
use tally_pipeline::{Pipeline, RunOutcome, SingleOwnerExport};

/// Run one command to completion and map the result to an exit status.
pub async fn execute(cli: Cli) -> ExitCode {
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", describe_failure(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let endpoint = ApiEndpoint::new(&cli.base_url)?;
    let timeout = cli.timeout_secs.map(Duration::from_secs);
    let fetcher = HttpFetcher::with_timeout(endpoint, timeout)?;

    tracing::debug!(
        "Using {} (timeout: {:?}), writing to {}",
        fetcher.endpoint(),
        timeout,
        cli.output_dir.display()
    );

    let pipeline = Pipeline::new(Arc::new(fetcher), cli.output_dir);

    match cli.command {
        Commands::Report { employee_id } => {
            let outcome = pipeline
                .run_single(employee_id, SingleOwnerExport::ReportOnly)
                .await?;
            print_report(&outcome);
        }

        Commands::Csv { employee_id } => {
            let outcome = pipeline
                .run_single(employee_id, SingleOwnerExport::Csv)
                .await?;
            print_report(&outcome);
        }

        Commands::Json { employee_id } => {
            let outcome = pipeline
                .run_single(employee_id, SingleOwnerExport::Json)
                .await?;
            print_report(&outcome);
        }

        Commands::All { report } => {
            let outcome = pipeline.run_all().await?;
            if report {
                print_report(&outcome);
            }
        }
    }

    Ok(())
}

fn print_report(outcome: &RunOutcome) {
    for line in outcome.report_lines() {
        println!("{}", line);
    }
}

fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<tally_pipeline::Error>() {
        Some(tally_pipeline::Error::OwnerNotFound(_)) => "User not found.".to_string(),
        _ => format!("Error: {}", err),
    }
}
