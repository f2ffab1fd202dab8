//! Report commands.

use std::io;

use clap::{Args, Subcommand};
use inventrak_app::{context::AppContext, domain::reports};

use crate::{cli::errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ReportsCommand {
    #[command(subcommand)]
    command: ReportsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportsSubcommand {
    /// Orders placed by one customer
    Customer {
        /// Customer ID
        #[arg(long)]
        customer_id: String,
    },

    /// Every sale with its product, brand and category
    Sales,
}

pub(crate) async fn run(
    command: ReportsCommand,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let api = context.api.as_ref();

    match command.command {
        ReportsSubcommand::Customer { customer_id } => {
            let report = reports::customer_report(api, &customer_id).await?;

            render::customer_report(out, &report)?;
        }
        ReportsSubcommand::Sales => {
            render::sales_report(out, &reports::sales_report(api).await?)?;
        }
    }

    Ok(())
}
