//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::debug;

use crate::{
    api::{ApiConfig, HttpInventoryApi, InventoryApi},
    domain::{
        customers::{LoginForm, RegisterForm},
        orders::{AddOrderForm, UpdateOrderForm},
        products::{AddProductForm, UpdateProductForm},
    },
    session::{SessionContext, SessionStore},
};

/// Everything a front end needs: the backend and the session.
pub struct AppContext {
    /// Backend client.
    pub api: Arc<dyn InventoryApi>,
    /// Who is logged in.
    pub session: SessionContext,
}

impl AppContext {
    /// Wires an API and a session store together, restoring the saved session.
    pub fn new(api: Arc<dyn InventoryApi>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            session: SessionContext::restore(store),
        }
    }

    /// Builds application context for the backend at `config.base_url`.
    pub fn connect(config: ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        debug!(base_url = %config.base_url, "connecting to inventory backend");

        Self::new(Arc::new(HttpInventoryApi::new(config)), store)
    }

    /// A fresh add-product form.
    pub fn add_product_form(&self) -> AddProductForm {
        AddProductForm::new(Arc::clone(&self.api))
    }

    /// A fresh update-product form.
    pub fn update_product_form(&self) -> UpdateProductForm {
        UpdateProductForm::new(Arc::clone(&self.api))
    }

    /// A fresh add-order form.
    pub fn add_order_form(&self) -> AddOrderForm {
        AddOrderForm::new(Arc::clone(&self.api))
    }

    /// A fresh update-order form.
    pub fn update_order_form(&self) -> UpdateOrderForm {
        UpdateOrderForm::new(Arc::clone(&self.api))
    }

    /// A fresh registration form.
    pub fn register_form(&self) -> RegisterForm {
        RegisterForm::new(Arc::clone(&self.api))
    }

    /// A fresh login form.
    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(Arc::clone(&self.api))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
