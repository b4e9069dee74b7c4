use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const PLACEHOLDER_EMAIL: &str = "supplier@company.com";
pub const PLACEHOLDER_PHONE_NUMBER: &str = "NA";
pub const PLACEHOLDER_ADDRESS: &str = "NA";

/// Server-assigned supplier identifier. The service hands out integers but the
/// client treats the value as opaque text once it lands in the form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SupplierId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierId::Number(n) => write!(f, "{n}"),
            SupplierId::Text(s) => f.write_str(s),
        }
    }
}

/// A supplier as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SupplierRecord {
    #[serde(default)]
    pub id: Option<SupplierId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub preferred: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl SupplierRecord {
    pub fn is_preferred(&self) -> bool {
        self.preferred.unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub wholesale_price: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Request body for create and update. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplierPayload {
    pub name: String,
    pub category: String,
    pub preferred: bool,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub products: Vec<Product>,
}

impl SupplierPayload {
    /// Builds a payload from the editable fields. Email, phone number, address
    /// and products are always the fixed placeholders.
    pub fn new(name: &str, category: &str, preferred: bool) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            preferred,
            email: PLACEHOLDER_EMAIL.to_string(),
            phone_number: PLACEHOLDER_PHONE_NUMBER.to_string(),
            address: PLACEHOLDER_ADDRESS.to_string(),
            products: Vec::new(),
        }
    }
}

/// Body the service sends with any 4xx/5xx.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    let flag = Option::<Flag>::deserialize(deserializer)?;
    Ok(flag.map(|f| match f {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.trim().eq_ignore_ascii_case("true"),
    }))
}
