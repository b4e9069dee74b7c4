use crate::client::SearchQuery;
use crate::model::{SupplierPayload, SupplierRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Category,
    Preferred,
}

impl Field {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "id" | "supplier_id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "preferred" => Some(Self::Preferred),
            _ => None,
        }
    }
}

/// The supplier form. Every field holds raw text the way the user typed it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub id: String,
    pub name: String,
    pub category: String,
    pub preferred: String,
}

impl SupplierForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Preferred => &self.preferred,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Id => self.id = value,
            Field::Name => self.name = value,
            Field::Category => self.category = value,
            Field::Preferred => self.preferred = value,
        }
    }

    /// Only the exact text `true` counts as preferred.
    pub fn resolved_preferred(&self) -> bool {
        self.preferred == "true"
    }

    pub fn payload(&self) -> SupplierPayload {
        SupplierPayload::new(&self.name, &self.category, self.resolved_preferred())
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new()
            .push_non_empty("name", &self.name)
            .push_non_empty("category", &self.category)
            .push_flag("preferred", self.resolved_preferred())
    }

    /// Overwrites all four fields from a server record.
    pub fn fill_from(&mut self, record: &SupplierRecord) {
        self.id = record.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        self.name = record.name.clone().unwrap_or_default();
        self.category = record.category.clone().unwrap_or_default();
        self.preferred = if record.is_preferred() { "true" } else { "false" }.to_string();
    }

    /// Empties the editable fields and leaves the id alone.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.category.clear();
        self.preferred.clear();
    }

    pub fn reset(&mut self) {
        self.id.clear();
        self.clear_fields();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Error,
}

/// Single-line status shown after each action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}
