//! Data types for filter-field schemas.

use serde::{Deserialize, Serialize};

/// One option in a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value submitted with the query.
    pub value: String,
    /// Text shown in the dropdown.
    pub label: String,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option whose submitted value doubles as its label.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Control kind for a filter field.
///
/// Tagged so each kind carries exactly the attributes it needs: only
/// `Select` owns an option list, checked non-empty at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Numeric input.
    Number,
    /// Calendar date picker.
    Date,
    /// Dropdown with a fixed option list.
    Select {
        /// Options in display order.
        options: Vec<SelectOption>,
    },
}

/// A single filter control on a report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Query-parameter name, unique within the page's combined field list.
    pub name: String,
    /// Placeholder or label text shown next to the control.
    pub label: String,
    /// Control kind.
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// A text input field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text,
        }
    }

    /// A numeric input field.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Number,
        }
    }

    /// A date picker field.
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Date,
        }
    }

    /// A select field with the given options.
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Select { options },
        }
    }
}

/// Ordered filter-field layout for one report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSchema {
    /// Fields shown immediately, in display order.
    pub primary: Vec<FieldDescriptor>,
    /// Fields disclosed on explicit request, in display order.
    pub advanced: Vec<FieldDescriptor>,
}

impl PageSchema {
    /// Create a schema from primary and advanced field lists.
    pub fn new(primary: Vec<FieldDescriptor>, advanced: Vec<FieldDescriptor>) -> Self {
        Self { primary, advanced }
    }

    /// Iterate over primary then advanced fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.primary.iter().chain(self.advanced.iter())
    }

    /// Total number of fields across both lists.
    pub fn field_count(&self) -> usize {
        self.primary.len() + self.advanced.len()
    }
}

/// Brief page summary for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    /// Page identifier.
    pub page: String,
    /// Number of always-visible fields.
    pub primary_count: usize,
    /// Number of disclosed-on-demand fields.
    pub advanced_count: usize,
}
