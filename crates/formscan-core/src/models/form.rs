//! Extracted form record and its canonical fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six canonical fields of the fixed form template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Applicant full name.
    Name,
    /// Date of birth, kept as written on the form.
    Dob,
    /// Account type (savings, current, checking...).
    AccountType,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
    /// Postal address, possibly spanning several lines on the form.
    Address,
}

impl FormField {
    /// All fields in canonical output order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Dob,
        FormField::AccountType,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
    ];

    /// Key used for this field in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dob => "dob",
            Self::AccountType => "accountType",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Human-readable caption.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Dob => "Date of Birth",
            Self::AccountType => "Account Type",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    /// Parse a serialized key back into a field.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values extracted from one form.
///
/// Every field is always present; a field that could not be resolved holds an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub dob: String,
    pub account_type: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl FormRecord {
    /// Get the value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Dob => &self.dob,
            FormField::AccountType => &self.account_type,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
        }
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Dob => &mut self.dob,
            FormField::AccountType => &mut self.account_type,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Iterate over `(field, value)` pairs in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Fields that were not found in the source text.
    pub fn missing_fields(&self) -> Vec<FormField> {
        self.fields()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Whether no field could be extracted at all.
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}
