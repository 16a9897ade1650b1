//! Beneficiary type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// Anything the matcher can filter.
///
/// Implementors return their searchable text: the identifying fields joined
/// with single spaces and lowercased.
pub trait Searchable {
    fn searchable_text(&self) -> String;
}

impl Searchable for String {
    fn searchable_text(&self) -> String {
        self.to_lowercase()
    }
}

impl Searchable for str {
    fn searchable_text(&self) -> String {
        self.to_lowercase()
    }
}

/// A published beneficiary list entry.
///
/// Wire format follows the portal's JSON (`applicationNumber`,
/// `accountNumber`); the short `applicationNo` / `accountNo` spellings are
/// accepted on input. `id` may arrive as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    /// Opaque identifier, unique within a list
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Scheme application number (e.g., "APP-2024-001")
    #[serde(alias = "applicationNo", default)]
    pub application_number: String,

    /// Full name, frequently in Gujarati script
    pub name: String,

    /// Bank account the benefit is paid into
    #[serde(alias = "accountNo", default)]
    pub account_number: String,

    #[serde(default)]
    pub village: String,
}

impl Beneficiary {
    /// Account number with all but the last `visible` characters masked.
    pub fn masked_account(&self, visible: usize) -> String {
        mask_tail(&self.account_number, visible)
    }

    /// Application number with all but the last `visible` characters masked.
    pub fn masked_application(&self, visible: usize) -> String {
        mask_tail(&self.application_number, visible)
    }
}

impl Searchable for Beneficiary {
    fn searchable_text(&self) -> String {
        [
            self.id.as_str(),
            self.application_number.as_str(),
            self.name.as_str(),
            self.account_number.as_str(),
            self.village.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn searchable_text(&self) -> String {
        (*self).searchable_text()
    }
}

fn mask_tail(value: &str, visible: usize) -> String {
    let len = value.chars().count();
    if len <= visible {
        return value.to_string();
    }
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - visible { '*' } else { c })
        .collect()
}

/// Accept `"id": 1` as well as `"id": "1"`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "beneficiary id must be a string or number, got {}",
            other
        ))),
    }
}

/// Builder for creating beneficiaries
#[derive(Debug, Default)]
pub struct BeneficiaryBuilder {
    id: String,
    application_number: String,
    name: String,
    account_number: String,
    village: String,
}

impl BeneficiaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn application_number(mut self, application_number: impl Into<String>) -> Self {
        self.application_number = application_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = account_number.into();
        self
    }

    pub fn village(mut self, village: impl Into<String>) -> Self {
        self.village = village.into();
        self
    }

    pub fn build(self) -> Beneficiary {
        Beneficiary {
            id: self.id,
            application_number: self.application_number,
            name: self.name,
            account_number: self.account_number,
            village: self.village,
        }
    }
}
