//! Add and update product forms.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    api::InventoryApi,
    domain::products::{
        models::{Brand, BrandId, Category, CategoryId, ProductId},
        validation::{ProductDraft, ProductEditDraft, ProductField},
    },
    forms::{Draft, EntityForm, ErrorMap, SubmitError},
};

/// Brand and category pick lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    /// Brands a product can be filed under.
    pub brands: Vec<Brand>,
    /// Categories a product can be filed under.
    pub categories: Vec<Category>,
}

impl ReferenceData {
    /// Errors for a brand or category id missing from its loaded list.
    ///
    /// A list that failed to load is empty and accepts any id; ids that do
    /// not parse are left to the validator.
    #[must_use]
    pub fn selection_errors(&self, draft: &ProductDraft) -> ErrorMap {
        let mut errors = ErrorMap::new();

        let brand_known = |brand_id: BrandId| {
            self.brands.is_empty() || self.brands.iter().any(|brand| brand.brand_id == brand_id)
        };

        if draft
            .brand_id
            .trim()
            .parse::<BrandId>()
            .is_ok_and(|id| !brand_known(id))
        {
            errors.insert("brandId", "Brand name is mandatory.");
        }

        let category_known = |category_id: CategoryId| {
            self.categories.is_empty()
                || self
                    .categories
                    .iter()
                    .any(|category| category.category_id == category_id)
        };

        if draft
            .category_id
            .trim()
            .parse::<CategoryId>()
            .is_ok_and(|id| !category_known(id))
        {
            errors.insert("categoryId", "Category name is mandatory.");
        }

        errors
    }

    /// Loads both lists concurrently; a list that fails to load stays empty.
    async fn load(api: Arc<dyn InventoryApi>) -> Self {
        let (brands, categories) = tokio::join!(api.list_brands(), api.list_categories());

        let brands = brands.unwrap_or_else(|error| {
            warn!(%error, "failed to load brands");

            Vec::new()
        });

        let categories = categories.unwrap_or_else(|error| {
            warn!(%error, "failed to load categories");

            Vec::new()
        });

        Self { brands, categories }
    }
}

async fn mount_reference_data<D: Draft>(
    form: &mut EntityForm<D>,
    reference: &mut ReferenceData,
) {
    form.state_mut().begin_loading();

    if let Some(loaded) = form.guard(ReferenceData::load(Arc::clone(form.api()))).await {
        *reference = loaded;
    }

    form.state_mut().finish_loading();
}

/// Creates products.
#[derive(Debug)]
pub struct AddProductForm {
    form: EntityForm<ProductDraft>,
    reference: ReferenceData,
}

impl AddProductForm {
    /// Opens an empty form.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, ProductDraft::default()),
            reference: ReferenceData::default(),
        }
    }

    /// Loads the brand and category pick lists.
    pub async fn mount(&mut self) {
        mount_reference_data(&mut self.form, &mut self.reference).await;
    }

    /// Brand and category pick lists.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<ProductDraft> {
        &self.form
    }

    /// Underlying form, for edits and checks.
    pub fn form_mut(&mut self) -> &mut EntityForm<ProductDraft> {
        &mut self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Creates the product.
    ///
    /// On success the draft is reset. Backend failures are reported on the
    /// form, not as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let rejected = self.reference.selection_errors(self.form.state().draft());
        let created = self
            .form
            .submit_checked_with(rejected, |api, product| async move {
                api.create_product(&product).await
            })
            .await?;

        let state = self.form.state_mut();

        match created {
            Ok(product) => {
                info!(product_id = %product.product_id, "product created");

                state.submit_succeeded_and_reset(format!(
                    "Product successfully created with ID: {}",
                    product.product_id
                ));
            }
            Err(error) => {
                warn!(%error, "failed to create product");

                state.submit_failed("Failed to create product.");
            }
        }

        Ok(())
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}

/// Edits an existing product.
#[derive(Debug)]
pub struct UpdateProductForm {
    form: EntityForm<ProductEditDraft>,
    reference: ReferenceData,
    fetch_error: Option<&'static str>,
}

impl UpdateProductForm {
    /// Opens a form with nothing fetched.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, ProductEditDraft::default()),
            reference: ReferenceData::default(),
            fetch_error: None,
        }
    }

    /// Loads the brand and category pick lists.
    pub async fn mount(&mut self) {
        mount_reference_data(&mut self.form, &mut self.reference).await;
    }

    /// Brand and category pick lists.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<ProductEditDraft> {
        &self.form
    }

    /// Underlying form, for edits and checks.
    pub fn form_mut(&mut self) -> &mut EntityForm<ProductEditDraft> {
        &mut self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Whether a product has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.form.state().draft().loaded.is_some()
    }

    /// Why the last fetch produced nothing.
    pub fn fetch_error(&self) -> Option<&'static str> {
        self.fetch_error
    }

    /// Fetches the product to edit, replacing the draft.
    ///
    /// A blank or non-numeric id is refused without a request. On failure
    /// the draft is emptied.
    pub async fn fetch(&mut self, product_id: &str) {
        let product_id = product_id.trim();

        if product_id.is_empty() {
            self.fetch_error = Some("Product ID cannot be blank.");

            return;
        }

        let Ok(product_id) = product_id.parse::<ProductId>() else {
            self.fetch_error = Some("Product ID must be a number.");

            return;
        };

        let api = Arc::clone(self.form.api());
        let Some(fetched) = self
            .form
            .guard(async move { api.fetch_product(product_id).await })
            .await
        else {
            return;
        };

        match fetched {
            Ok(product) => {
                self.fetch_error = None;
                self.form
                    .state_mut()
                    .replace_draft(ProductEditDraft::from(&product));
            }
            Err(error) => {
                warn!(%product_id, %error, "failed to fetch product");

                self.fetch_error = Some("Product not found.");
                self.form
                    .state_mut()
                    .replace_draft(ProductEditDraft::default());
            }
        }
    }

    /// Saves the edited product. The draft is kept for further edits.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotLoaded`] before a product was fetched, and
    /// any other [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.is_loaded() {
            return Err(SubmitError::NotLoaded);
        }

        let rejected = self
            .reference
            .selection_errors(&self.form.state().draft().fields);
        let updated = self
            .form
            .submit_checked_with(rejected, |api, product| async move {
                api.update_product(&product).await
            })
            .await?;

        let state = self.form.state_mut();

        match updated {
            Ok(product) => {
                info!(product_id = %product.product_id, "product updated");

                state.replace_draft(ProductEditDraft::from(&product));
                state.submit_succeeded(format!(
                    "Product successfully updated with ID: {}",
                    product.product_id
                ));
            }
            Err(error) => {
                warn!(%error, "failed to update product");

                state.submit_failed("Failed to update product.");
            }
        }

        Ok(())
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::{
        api::{ApiError, MockInventoryApi},
        forms::{FormStatus, Notice},
        test::helpers::{brand, category, product, server_error},
    };

    fn fill(form: &mut AddProductForm) {
        form.set_field(ProductField::ProductName, "Widget");
        form.set_field(ProductField::StockAvailable, "5");
        form.set_field(ProductField::Price, "9.5");
        form.set_field(ProductField::Barcode, "ABCD1234");
        form.set_field(ProductField::BrandId, "1");
        form.set_field(ProductField::CategoryId, "2");
    }

    #[tokio::test]
    async fn mount_loads_reference_lists() {
        let mut api = MockInventoryApi::new();

        api.expect_list_brands()
            .times(1)
            .returning(|| Ok(vec![brand(1, "Acme")]));
        api.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![category(2, "Tools")]));

        let mut form = AddProductForm::new(Arc::new(api));

        form.mount().await;

        assert_eq!(form.reference().brands, vec![brand(1, "Acme")]);
        assert_eq!(form.reference().categories, vec![category(2, "Tools")]);
        assert_eq!(form.form().state().status(), FormStatus::Ready);
    }

    #[tokio::test]
    async fn mount_keeps_going_when_one_list_fails() {
        let mut api = MockInventoryApi::new();

        api.expect_list_brands()
            .returning(|| Err(server_error("/fetchBrands")));
        api.expect_list_categories()
            .returning(|| Ok(vec![category(2, "Tools")]));

        let mut form = AddProductForm::new(Arc::new(api));

        form.mount().await;

        assert!(form.reference().brands.is_empty());
        assert_eq!(form.reference().categories.len(), 1);
    }

    #[tokio::test]
    async fn created_product_is_announced_and_draft_reset() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_create_product()
            .withf(|new| new.product_name == "Widget" && new.price == Decimal::new(95, 1))
            .times(1)
            .returning(|new| Ok(new.clone().with_id(ProductId::new(42))));

        let mut form = AddProductForm::new(Arc::new(api));

        fill(&mut form);
        form.submit().await?;

        let state = form.form().state();
        let notice = state.notice().ok_or("no notice")?;

        assert!(notice.is_success());
        assert!(notice.message().contains("42"));
        assert_eq!(state.draft(), &ProductDraft::default());

        Ok(())
    }

    #[tokio::test]
    async fn failed_create_keeps_draft_and_errors() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_create_product()
            .returning(|_| Err(server_error("/createProduct")));

        let mut form = AddProductForm::new(Arc::new(api));

        fill(&mut form);
        form.form_mut()
            .state_mut()
            .set_field_error("productName", "Product name already exists.");

        let errors_before = form.form().state().errors().clone();

        form.submit().await?;

        let state = form.form().state();

        assert_eq!(
            state.notice(),
            Some(&Notice::Failure("Failed to create product.".to_string()))
        );
        assert_eq!(state.errors(), &errors_before);
        assert_eq!(state.draft().product_name, "Widget");
        assert_eq!(state.status(), FormStatus::Failed);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_draft_is_never_sent() {
        let mut form = AddProductForm::new(Arc::new(MockInventoryApi::new()));

        form.set_field(ProductField::ProductName, "Widget");

        let result = form.submit().await;

        assert!(
            matches!(result, Err(SubmitError::Invalid(5))),
            "expected five failing fields, got {result:?}"
        );
    }

    fn acme_tools(api: &mut MockInventoryApi) {
        api.expect_list_brands()
            .returning(|| Ok(vec![brand(1, "Acme")]));
        api.expect_list_categories()
            .returning(|| Ok(vec![category(2, "Tools")]));
    }

    #[tokio::test]
    async fn unlisted_brand_is_refused_without_a_request() {
        let mut api = MockInventoryApi::new();

        acme_tools(&mut api);
        api.expect_create_product().never();

        let mut form = AddProductForm::new(Arc::new(api));

        form.mount().await;
        fill(&mut form);
        form.set_field(ProductField::BrandId, "999");

        let result = form.submit().await;

        assert!(
            matches!(result, Err(SubmitError::Invalid(1))),
            "expected the brand to be refused, got {result:?}"
        );
        assert_eq!(
            form.form().state().errors().get("brandId"),
            Some("Brand name is mandatory.")
        );
        assert_eq!(form.form().state().draft().brand_id, "999");
    }

    #[tokio::test]
    async fn unlisted_selection_adds_to_validator_errors() {
        let mut api = MockInventoryApi::new();

        acme_tools(&mut api);

        let mut form = AddProductForm::new(Arc::new(api));

        form.mount().await;
        fill(&mut form);
        form.set_field(ProductField::Price, "0");
        form.set_field(ProductField::CategoryId, "888");

        let result = form.submit().await;
        let errors = form.form().state().errors();

        assert!(
            matches!(result, Err(SubmitError::Invalid(2))),
            "expected price and category errors, got {result:?}"
        );
        assert_eq!(errors.get("price"), Some("Price must be greater than 0."));
        assert_eq!(errors.get("categoryId"), Some("Category name is mandatory."));
    }

    #[tokio::test]
    async fn unloaded_lists_accept_any_selection() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_list_brands()
            .returning(|| Err(server_error("/fetchBrands")));
        api.expect_list_categories()
            .returning(|| Err(server_error("/fetchCategories")));
        api.expect_create_product()
            .withf(|new| new.brand_id == BrandId::new(999))
            .times(1)
            .returning(|new| Ok(new.clone().with_id(ProductId::new(5))));

        let mut form = AddProductForm::new(Arc::new(api));

        form.mount().await;
        fill(&mut form);
        form.set_field(ProductField::BrandId, "999");
        form.submit().await?;

        assert!(
            form.form()
                .state()
                .notice()
                .is_some_and(|notice| notice.is_success()),
            "expected the product to be created"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_refuses_an_unlisted_category() {
        let mut api = MockInventoryApi::new();

        acme_tools(&mut api);
        api.expect_fetch_product()
            .returning(|id| Ok(product(id.get(), "Widget", "ABCD1234")));
        api.expect_update_product().never();

        let mut form = UpdateProductForm::new(Arc::new(api));

        form.mount().await;
        form.fetch("7").await;
        form.set_field(ProductField::CategoryId, "3");

        let result = form.submit().await;

        assert!(
            matches!(result, Err(SubmitError::Invalid(1))),
            "expected the category to be refused, got {result:?}"
        );
        assert_eq!(
            form.form().state().errors().get("categoryId"),
            Some("Category name is mandatory.")
        );
    }

    #[tokio::test]
    async fn blank_and_non_numeric_ids_are_not_fetched() {
        let mut form = UpdateProductForm::new(Arc::new(MockInventoryApi::new()));

        form.fetch("  ").await;
        assert_eq!(form.fetch_error(), Some("Product ID cannot be blank."));

        form.fetch("abc").await;
        assert_eq!(form.fetch_error(), Some("Product ID must be a number."));
        assert!(!form.is_loaded());
    }

    #[tokio::test]
    async fn missing_product_leaves_nothing_loaded() {
        let mut api = MockInventoryApi::new();

        api.expect_fetch_product().returning(|_| {
            Err(ApiError::Status {
                path: "/fetchProductById",
                status: 404,
                body: "Product not found".to_string(),
            })
        });

        let mut form = UpdateProductForm::new(Arc::new(api));

        form.fetch("99").await;

        assert_eq!(form.fetch_error(), Some("Product not found."));
        assert!(!form.is_loaded());
        assert_eq!(form.submit().await, Err(SubmitError::NotLoaded));
    }

    #[tokio::test]
    async fn unchanged_name_is_not_rechecked() {
        let mut api = MockInventoryApi::new();

        api.expect_fetch_product()
            .returning(|id| Ok(product(id.get(), "Widget", "ABCD1234")));
        api.expect_check_product_name().never();

        let mut form = UpdateProductForm::new(Arc::new(api));

        form.fetch("7").await;
        form.form_mut().blur(ProductField::ProductName).await;

        assert!(form.form().state().errors().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_the_draft_and_reports_the_id() -> TestResult {
        let mut api = MockInventoryApi::new();
        let mut sequence = Sequence::new();

        api.expect_fetch_product()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|id| Ok(product(id.get(), "Widget", "ABCD1234")));
        api.expect_update_product()
            .withf(|product| {
                product.product_id == ProductId::new(7) && product.stock_available == 11
            })
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|product| Ok(product.clone()));

        let mut form = UpdateProductForm::new(Arc::new(api));

        form.fetch("7").await;
        form.set_field(ProductField::StockAvailable, "11");
        form.submit().await?;

        let state = form.form().state();

        assert_eq!(
            state.notice(),
            Some(&Notice::Success(
                "Product successfully updated with ID: 7".to_string()
            ))
        );
        assert_eq!(state.draft().fields.stock_available, "11");

        Ok(())
    }
}
