//! Order commands.

use std::{io, slice};

use clap::{Args, Subcommand};
use inventrak_app::{
    context::AppContext,
    domain::orders::{OrderField, lookups},
};

use crate::{
    cli::{errors::CliError, forms},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List every order
    List,

    /// Show one order
    Get {
        /// Order ID
        order_id: String,
    },

    /// Place an order
    Add(OrderFieldArgs),

    /// Change an order
    Update {
        /// Order ID
        order_id: String,

        #[command(flatten)]
        fields: OrderFieldArgs,
    },
}

#[derive(Debug, Args)]
struct OrderFieldArgs {
    /// Units ordered
    #[arg(long)]
    quantity: Option<String>,

    /// Product ID (see `products list`)
    #[arg(long)]
    product_id: Option<String>,
}

impl OrderFieldArgs {
    fn values(self) -> [(OrderField, Option<String>); 2] {
        [
            (OrderField::OrderedQuantity, self.quantity),
            (OrderField::ProductId, self.product_id),
        ]
    }
}

pub(crate) async fn run(
    command: OrdersCommand,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let api = context.api.as_ref();

    match command.command {
        OrdersSubcommand::List => {
            render::orders(out, &lookups::list_orders(api).await?)?;
        }
        OrdersSubcommand::Get { order_id } => {
            let found = lookups::find_order(api, &order_id).await?;

            render::line(out, &found.message)?;
            render::orders(out, slice::from_ref(&found.data))?;
        }
        OrdersSubcommand::Add(fields) => {
            let mut form = context.add_order_form();

            form.mount().await;

            forms::fill(form.form_mut(), fields.values());

            let submitted = form.submit().await;

            forms::finish(form.form().state(), submitted, out)?;
        }
        OrdersSubcommand::Update { order_id, fields } => {
            let mut form = context.update_order_form();

            form.mount().await;
            form.fetch(&order_id).await;

            if let Some(message) = form.fetch_error() {
                return Err(CliError::Rejected(message.to_string()));
            }

            forms::fill(form.form_mut(), fields.values());

            let submitted = form.submit().await;

            forms::finish(form.form().state(), submitted, out)?;
        }
    }

    Ok(())
}
