//! Product commands.

use std::{io, slice};

use clap::{Args, Subcommand};
use inventrak_app::{
    context::AppContext,
    domain::products::{ProductField, lookups},
};

use crate::{
    cli::{errors::CliError, forms},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product
    List,

    /// Show one product
    Get {
        /// Product ID
        product_id: String,
    },

    /// List the products of a brand
    ByBrand {
        /// Brand name
        brand_name: String,
    },

    /// List the products of a category
    ByCategory {
        /// Category name
        category_name: String,
    },

    /// List the brands products can belong to
    Brands,

    /// List the categories products can belong to
    Categories,

    /// Create a product
    Add(ProductFieldArgs),

    /// Change a product
    Update {
        /// Product ID
        product_id: String,

        #[command(flatten)]
        fields: ProductFieldArgs,
    },
}

/// Product inputs, kept as typed so the validators see the raw text.
#[derive(Debug, Args)]
struct ProductFieldArgs {
    /// Product name
    #[arg(long)]
    name: Option<String>,

    /// Units in stock
    #[arg(long)]
    stock: Option<String>,

    /// Unit price
    #[arg(long)]
    price: Option<String>,

    /// Bar code, four uppercase letters then four digits
    #[arg(long)]
    barcode: Option<String>,

    /// Brand ID (see `products brands`)
    #[arg(long)]
    brand_id: Option<String>,

    /// Category ID (see `products categories`)
    #[arg(long)]
    category_id: Option<String>,
}

impl ProductFieldArgs {
    fn values(self) -> [(ProductField, Option<String>); 6] {
        [
            (ProductField::ProductName, self.name),
            (ProductField::StockAvailable, self.stock),
            (ProductField::Price, self.price),
            (ProductField::Barcode, self.barcode),
            (ProductField::BrandId, self.brand_id),
            (ProductField::CategoryId, self.category_id),
        ]
    }
}

pub(crate) async fn run(
    command: ProductsCommand,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let api = context.api.as_ref();

    match command.command {
        ProductsSubcommand::List => {
            render::products(out, &lookups::list_products(api).await?)?;
        }
        ProductsSubcommand::Get { product_id } => {
            let found = lookups::find_product(api, &product_id).await?;

            render::line(out, &found.message)?;
            render::products(out, slice::from_ref(&found.data))?;
        }
        ProductsSubcommand::ByBrand { brand_name } => {
            let found = lookups::find_products_by_brand(api, &brand_name).await?;

            render::line(out, &found.message)?;
            render::products(out, &found.data)?;
        }
        ProductsSubcommand::ByCategory { category_name } => {
            let found = lookups::find_products_by_category(api, &category_name).await?;

            render::line(out, &found.message)?;
            render::products(out, &found.data)?;
        }
        ProductsSubcommand::Brands => {
            render::brands(out, &lookups::list_brands(api).await?)?;
        }
        ProductsSubcommand::Categories => {
            render::categories(out, &lookups::list_categories(api).await?)?;
        }
        ProductsSubcommand::Add(fields) => add(fields, context, out).await?,
        ProductsSubcommand::Update { product_id, fields } => {
            update(&product_id, fields, context, out).await?;
        }
    }

    Ok(())
}

async fn add(
    fields: ProductFieldArgs,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut form = context.add_product_form();

    form.mount().await;

    let provided = forms::fill(form.form_mut(), fields.values());

    forms::check(form.form_mut(), &provided, out).await?;

    let submitted = form.submit().await;

    forms::finish(form.form().state(), submitted, out)
}

async fn update(
    product_id: &str,
    fields: ProductFieldArgs,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut form = context.update_product_form();

    form.mount().await;
    form.fetch(product_id).await;

    if let Some(message) = form.fetch_error() {
        return Err(CliError::Rejected(message.to_string()));
    }

    let provided = forms::fill(form.form_mut(), fields.values());

    forms::check(form.form_mut(), &provided, out).await?;

    let submitted = form.submit().await;

    forms::finish(form.form().state(), submitted, out)
}
