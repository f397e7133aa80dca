//! Core data model types for inspection.
//!
//! A sheet is described by a [`Schema`] (ordered [`Field`]s, each tagged with the
//! [`ColumnType`] inferred from its cells). Individual cells are converted into [`Value`]s before
//! they are loaded into the tabular frame.

use std::fmt;

/// Inferred scalar type of a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Every cell is an integer and none are missing.
    Int64,
    /// Numeric cells, with at least one fractional or missing value.
    Float64,
    /// Every cell is a boolean and none are missing.
    Bool,
    /// Date/time cells (missing cells allowed).
    DateTime,
    /// Duration cells (missing cells allowed).
    Duration,
    /// Text, or a mix of scalar kinds.
    Object,
}

impl ColumnType {
    /// Dtype label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::DateTime => "datetime64[ns]",
            Self::Duration => "timedelta64[ns]",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name as derived from the header row.
    pub name: String,
    /// Inferred column type.
    pub column_type: ColumnType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered list of fields, in sheet column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the inferred type of a field by name, if present.
    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.column_type)
    }
}

/// A single converted cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// Milliseconds since the Unix epoch.
    DateTime(i64),
    /// Milliseconds.
    Duration(i64),
    /// UTF-8 string.
    Utf8(String),
}
