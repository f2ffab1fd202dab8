use std::io;

use clap::{Parser, Subcommand};
use inventrak_app::context::AppContext;

use crate::config::Config;

mod account;
mod errors;
mod forms;
mod orders;
mod products;
mod reports;

use errors::CliError;

#[derive(Debug, Parser)]
#[command(name = "inventrak", about = "Inventory management front end", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login(account::LoginArgs),

    /// Forget the session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Create a customer account
    Register(account::RegisterArgs),

    /// Products, brands and categories
    Products(products::ProductsCommand),

    /// Orders
    Orders(orders::OrdersCommand),

    /// Customer and sales reports
    Reports(reports::ReportsCommand),
}

impl Commands {
    fn needs_login(&self) -> bool {
        !matches!(self, Self::Login(_) | Self::Register(_) | Self::Whoami)
    }
}

impl Cli {
    pub(crate) async fn run(
        self,
        context: &mut AppContext,
        out: &mut impl io::Write,
    ) -> Result<(), CliError> {
        if self.command.needs_login() && !context.session.is_authenticated() {
            return Err(CliError::NotLoggedIn);
        }

        match self.command {
            Commands::Login(args) => account::login(args, context, out).await,
            Commands::Logout => account::logout(context, out),
            Commands::Whoami => account::whoami(context, out),
            Commands::Register(args) => account::register(args, context, out).await,
            Commands::Products(command) => products::run(command, context, out).await,
            Commands::Orders(command) => orders::run(command, context, out).await,
            Commands::Reports(command) => reports::run(command, context, out).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use inventrak_app::{
        api::MockInventoryApi,
        domain::products::models::{Brand, BrandId, Category, CategoryId, ProductId},
        forms::SubmitError,
        session::MemorySessionStore,
    };
    use testresult::TestResult;

    use super::*;

    fn context(api: MockInventoryApi) -> AppContext {
        AppContext::new(Arc::new(api), Arc::new(MemorySessionStore::new()))
    }

    fn logged_in(api: MockInventoryApi) -> TestResult<AppContext> {
        let mut context = context(api);

        context.session.authenticate("alice")?;

        Ok(context)
    }

    async fn run(context: &mut AppContext, args: &[&str]) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();

        let result = match Cli::try_parse_from(["inventrak"].iter().chain(args)) {
            Ok(cli) => cli.run(context, &mut out).await,
            Err(error) => Err(CliError::Rejected(error.to_string())),
        };

        (result, String::from_utf8_lossy(&out).into_owned())
    }

    fn reference_data(api: &mut MockInventoryApi) {
        api.expect_list_brands().returning(|| {
            Ok(vec![Brand {
                brand_id: BrandId::new(1),
                brand_name: "Acme".to_string(),
            }])
        });
        api.expect_list_categories().returning(|| {
            Ok(vec![Category {
                category_id: CategoryId::new(2),
                category_name: "Tools".to_string(),
            }])
        });
    }

    #[test]
    fn update_takes_the_id_and_changed_fields() -> TestResult {
        let cli = Cli::try_parse_from([
            "inventrak",
            "--api-url",
            "http://inventory.test",
            "products",
            "update",
            "7",
            "--price",
            "3.50",
        ])?;

        assert_eq!(cli.config.api_url, "http://inventory.test");
        assert!(
            matches!(cli.command, Commands::Products(_)),
            "expected a products command, got {:?}",
            cli.command
        );

        Ok(())
    }

    #[tokio::test]
    async fn logged_out_sessions_are_turned_away() {
        let mut context = context(MockInventoryApi::new());

        for args in [
            &["products", "list"][..],
            &["orders", "get", "4"],
            &["reports", "sales"],
            &["logout"],
        ] {
            let (result, _) = run(&mut context, args).await;

            assert!(
                matches!(result, Err(CliError::NotLoggedIn)),
                "expected {args:?} to need a login, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn whoami_works_logged_out() {
        let mut context = context(MockInventoryApi::new());

        let (result, output) = run(&mut context, &["whoami"]).await;

        assert!(result.is_ok(), "expected whoami to succeed, got {result:?}");
        assert_eq!(output, "Not logged in\n");
    }

    #[tokio::test]
    async fn accepted_login_is_remembered() {
        let mut api = MockInventoryApi::new();

        api.expect_login()
            .withf(|credentials| credentials.username.trim() == "alice")
            .returning(|_| Ok(true));

        let mut context = context(api);

        let (result, output) = run(
            &mut context,
            &["login", "--username", " alice ", "--password", "Secret1!"],
        )
        .await;

        assert!(result.is_ok(), "expected a login, got {result:?}");
        assert_eq!(output, "Login successful\n");
        assert_eq!(context.session.username(), Some("alice"));
    }

    #[tokio::test]
    async fn refused_login_stays_logged_out() {
        let mut api = MockInventoryApi::new();

        api.expect_login().returning(|_| Ok(false));

        let mut context = context(api);

        let (result, _) = run(
            &mut context,
            &["login", "--username", "alice", "--password", "nope"],
        )
        .await;

        assert!(
            matches!(&result, Err(CliError::Rejected(message)) if message == "Invalid username or password"),
            "expected a refusal, got {result:?}"
        );
        assert!(
            !context.session.is_authenticated(),
            "refused login must not authenticate"
        );
    }

    #[tokio::test]
    async fn logout_forgets_the_session() -> TestResult {
        let mut context = logged_in(MockInventoryApi::new())?;

        let (result, output) = run(&mut context, &["logout"]).await;

        assert!(result.is_ok(), "expected a logout, got {result:?}");
        assert_eq!(output, "Logged out\n");
        assert!(
            !context.session.is_authenticated(),
            "session should be anonymous after logout"
        );

        Ok(())
    }

    #[tokio::test]
    async fn invalid_product_prints_field_errors_and_check_warnings() -> TestResult {
        let mut api = MockInventoryApi::new();

        reference_data(&mut api);
        api.expect_check_product_name()
            .withf(|name| name == "Widget")
            .times(1)
            .returning(|_| Ok(true));

        let mut context = logged_in(api)?;

        let (result, output) = run(
            &mut context,
            &["products", "add", "--name", "Widget", "--price", "0"],
        )
        .await;

        assert!(
            matches!(result, Err(CliError::Submit(SubmitError::Invalid(_)))),
            "expected a validation failure, got {result:?}"
        );
        assert!(
            output.contains("warning: productName: Product name already exists."),
            "missing check warning in {output}"
        );
        assert!(
            output.contains("price: Price must be greater than 0."),
            "missing price error in {output}"
        );
        assert!(
            output.contains("barcode: Bar code cannot be blank."),
            "missing barcode error in {output}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn valid_product_is_created_despite_a_check_warning() -> TestResult {
        let mut api = MockInventoryApi::new();

        reference_data(&mut api);
        api.expect_check_product_name().returning(|_| Ok(true));
        api.expect_check_barcode().returning(|_| Ok(false));
        api.expect_create_product()
            .times(1)
            .returning(|product| Ok(product.clone().with_id(ProductId::new(9))));

        let mut context = logged_in(api)?;

        let (result, output) = run(
            &mut context,
            &[
                "products",
                "add",
                "--name",
                "Widget",
                "--stock",
                "5",
                "--price",
                "9.50",
                "--barcode",
                "ABCD1234",
                "--brand-id",
                "1",
                "--category-id",
                "2",
            ],
        )
        .await;

        assert!(result.is_ok(), "expected a product, got {result:?}");
        assert!(
            output.ends_with("Product successfully created with ID: 9\n"),
            "unexpected output {output}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_brand_id_is_refused_before_creating() -> TestResult {
        let mut api = MockInventoryApi::new();

        reference_data(&mut api);
        api.expect_check_product_name().returning(|_| Ok(false));
        api.expect_check_barcode().returning(|_| Ok(false));
        api.expect_create_product().never();

        let mut context = logged_in(api)?;

        let (result, output) = run(
            &mut context,
            &[
                "products",
                "add",
                "--name",
                "Widget",
                "--stock",
                "5",
                "--price",
                "9.50",
                "--barcode",
                "ABCD1234",
                "--brand-id",
                "999",
                "--category-id",
                "888",
            ],
        )
        .await;

        assert!(
            matches!(result, Err(CliError::Submit(SubmitError::Invalid(2)))),
            "expected both selections to be refused, got {result:?}"
        );
        assert!(
            output.contains("brandId: Brand name is mandatory."),
            "missing brand error in {output}"
        );
        assert!(
            output.contains("categoryId: Category name is mandatory."),
            "missing category error in {output}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_customer_id_is_reported() -> TestResult {
        let mut context = logged_in(MockInventoryApi::new())?;

        let (result, _) = run(&mut context, &["reports", "customer", "--customer-id", " "]).await;

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("Customer ID cannot be blank.".to_string())
        );

        Ok(())
    }
}
