use super::{summary, Cli};
use assocmine_lib::util::{create_spinner, hidden_spinner};
use assocmine_lib::{write_report, Analysis, Config, ReportFormat, Result};
use console::style;
use std::time::Instant;

pub fn handle_mine_command(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.clone())?;
    if let Ok(rendered) = toml::to_string(&config) {
        log::debug!("Effective config:\n{}", rendered);
    }

    let format = match cli.format.as_deref() {
        Some(value) => value.parse::<ReportFormat>()?,
        None => config.output.format,
    };
    let output = cli.output.clone().unwrap_or_else(|| config.output.path.clone());

    let params = config.mining_params(cli.min_sup, cli.min_conf);
    params.validate()?;

    let records = config.loader(&cli.dataset)?.load()?;
    let transactions = config.transaction_builder().build_all(&records);
    let empty = transactions.iter().filter(|t| t.is_empty()).count();
    if empty > 0 {
        log::warn!("{} of {} records have no values", empty, transactions.len());
    }

    let spinner = if cli.quiet {
        hidden_spinner()
    } else {
        create_spinner(&format!("Mining {} transactions...", transactions.len()))
    };
    let started = Instant::now();
    let analysis = Analysis::run(&transactions, &params);
    spinner.finish_and_clear();
    let analysis = analysis?;
    let elapsed = started.elapsed();

    write_report(&analysis, format, &output)?;

    if !cli.quiet {
        if !cli.no_summary {
            summary::print_summary(&analysis, config.output.summary_rows, elapsed);
        }
        println!(
            "{} {} report written to {}",
            style("✓").green(),
            format.as_str(),
            output.display()
        );
    }

    Ok(())
}
