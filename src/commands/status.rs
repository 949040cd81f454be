use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::{print_json, print_status, OutputFormat};
use crate::logging::get_log_file_path;
use super::{format_arg, league_or_default};

pub async fn handle_status(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let client = context.client()?;

    let status = client.get_status(Some(league)).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Simple => {
            print_status(&status);
            println!("API:     {}", client.base_url());
            if let Some(log) = get_log_file_path() {
                println!("Log:     {}", log.display());
            }
        }
    }

    Ok(())
}
