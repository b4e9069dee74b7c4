use std::fmt;

use crate::client::{ApiError, SupplierClient, Transport};
use crate::form::{Field, FlashMessage, SupplierForm};
use crate::model::{Product, SupplierRecord};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Supplier has been Deleted!";
pub const DELETE_FAILED_MESSAGE: &str = "Server error!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Clear,
    Search,
    MarkPreferred,
    Products,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Create,
        Action::Update,
        Action::Retrieve,
        Action::Delete,
        Action::Clear,
        Action::Search,
        Action::MarkPreferred,
        Action::Products,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "retrieve" | "get" => Some(Self::Retrieve),
            "delete" => Some(Self::Delete),
            "clear" => Some(Self::Clear),
            "search" => Some(Self::Search),
            "mark-preferred" | "mark_preferred" => Some(Self::MarkPreferred),
            "products" => Some(Self::Products),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Retrieve => "retrieve",
            Self::Delete => "delete",
            Self::Clear => "clear",
            Self::Search => "search",
            Self::MarkPreferred => "mark-preferred",
            Self::Products => "products",
        }
    }

    pub fn uses_network(self) -> bool {
        !matches!(self, Self::Clear)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binds the supplier form to the service.
///
/// Every action reads the form as it is at call time and leaves its outcome
/// in the form, the flash message, and (for search and products) the
/// listing views.
pub struct FormController<T> {
    client: SupplierClient<T>,
    form: SupplierForm,
    flash: Option<FlashMessage>,
    results: Option<Vec<SupplierRecord>>,
    products: Option<Vec<Product>>,
}

impl<T: Transport> FormController<T> {
    pub fn new(client: SupplierClient<T>) -> Self {
        Self {
            client,
            form: SupplierForm::default(),
            flash: None,
            results: None,
            products: None,
        }
    }

    pub fn with_form(mut self, form: SupplierForm) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &SupplierForm {
        &self.form
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn flash(&self) -> Option<&FlashMessage> {
        self.flash.as_ref()
    }

    /// Last successful search, `None` until one has completed.
    pub fn results(&self) -> Option<&[SupplierRecord]> {
        self.results.as_deref()
    }

    pub fn products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }

    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Create => self.create().await,
            Action::Update => self.update().await,
            Action::Retrieve => self.retrieve().await,
            Action::Delete => self.delete().await,
            Action::Clear => self.clear(),
            Action::Search => self.search().await,
            Action::MarkPreferred => self.mark_preferred().await,
            Action::Products => self.list_products().await,
        }
    }

    pub async fn create(&mut self) {
        let payload = self.form.payload();
        match self.client.create(&payload).await {
            Ok(record) => self.apply_record(&record),
            Err(e) => self.fail(Action::Create, &e),
        }
    }

    pub async fn update(&mut self) {
        let id = self.form.id.clone();
        let payload = self.form.payload();
        match self.client.update(&id, &payload).await {
            Ok(record) => self.apply_record(&record),
            Err(e) => self.fail(Action::Update, &e),
        }
    }

    pub async fn retrieve(&mut self) {
        let id = self.form.id.clone();
        match self.client.retrieve(&id).await {
            Ok(record) => self.apply_record(&record),
            Err(e) => {
                self.form.clear_fields();
                self.fail(Action::Retrieve, &e);
            }
        }
    }

    /// A failed delete always reports the same fixed text; the server's
    /// own message is only logged.
    pub async fn delete(&mut self) {
        let id = self.form.id.clone();
        match self.client.delete(&id).await {
            Ok(()) => {
                self.form.clear_fields();
                self.flash = Some(FlashMessage::info(DELETED_MESSAGE));
            }
            Err(e) => {
                tracing::warn!(action = %Action::Delete, id = %id, error = %e, "action failed");
                self.flash = Some(FlashMessage::error(DELETE_FAILED_MESSAGE));
            }
        }
    }

    pub fn clear(&mut self) {
        self.form.reset();
    }

    pub async fn search(&mut self) {
        let query = self.form.search_query();
        match self.client.search(&query).await {
            Ok(records) => {
                if let Some(first) = records.first() {
                    self.form.fill_from(first);
                }
                self.results = Some(records);
                self.flash = Some(FlashMessage::info(SUCCESS_MESSAGE));
            }
            Err(e) => self.fail(Action::Search, &e),
        }
    }

    pub async fn mark_preferred(&mut self) {
        let id = self.form.id.clone();
        match self.client.mark_preferred(&id).await {
            Ok(record) => self.apply_record(&record),
            Err(e) => self.fail(Action::MarkPreferred, &e),
        }
    }

    pub async fn list_products(&mut self) {
        let id = self.form.id.clone();
        match self.client.list_products(&id).await {
            Ok(products) => {
                self.products = Some(products);
                self.flash = Some(FlashMessage::info(SUCCESS_MESSAGE));
            }
            Err(e) => self.fail(Action::Products, &e),
        }
    }

    fn apply_record(&mut self, record: &SupplierRecord) {
        self.form.fill_from(record);
        self.flash = Some(FlashMessage::info(SUCCESS_MESSAGE));
    }

    fn fail(&mut self, action: Action, err: &ApiError) {
        tracing::warn!(%action, error = %err, "action failed");
        self.flash = Some(FlashMessage::error(err.user_message()));
    }
}
