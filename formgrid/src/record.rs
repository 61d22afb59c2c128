//! Row records and the keys that identify them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A row the grid can display.
///
/// `Field` names the attributes a column may read, usually a fieldless enum,
/// so a column can only point at something the record actually has.
///
/// # Example
///
/// ```
/// use formgrid::{Record, Value};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum UserField {
///     Id,
///     Name,
/// }
///
/// impl Record for User {
///     type Field = UserField;
///
///     fn value(&self, field: UserField) -> Value {
///         match field {
///             UserField::Id => self.id.into(),
///             UserField::Name => self.name.as_str().into(),
///         }
///     }
///
///     fn id_field() -> Option<UserField> {
///         Some(UserField::Id)
///     }
/// }
/// ```
pub trait Record {
    type Field: Copy + PartialEq + fmt::Debug;

    /// Read one attribute.
    fn value(&self, field: Self::Field) -> Value;

    /// The attribute holding the row's identity, if the record has one.
    fn id_field() -> Option<Self::Field> {
        None
    }
}

/// Identity of a row within the current dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Int(i64),
    Text(String),
}

impl RowKey {
    /// Key for a field value. Null has no key.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Int(n) => Some(RowKey::Int(*n)),
            Value::Text(s) => Some(RowKey::Text(s.clone())),
            other => Some(RowKey::Text(other.to_string())),
        }
    }

    fn from_index(index: usize) -> Self {
        RowKey::Int(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(n) => write!(f, "{n}"),
            RowKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Int(value)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Text(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Text(value)
    }
}

/// Caller-supplied key function.
pub type KeyFn<T> = Box<dyn Fn(&T) -> RowKey>;

/// Where a row's key comes from.
pub enum KeySource<T: Record> {
    /// Read a field, falling back to the row's position in the dataset when
    /// the field is null.
    Field(T::Field),
    /// Always use the row's position in the dataset.
    Index,
    /// Ask the caller. The row position is not consulted.
    Custom(KeyFn<T>),
}

impl<T: Record> KeySource<T> {
    pub fn custom(f: impl Fn(&T) -> RowKey + 'static) -> Self {
        KeySource::Custom(Box::new(f))
    }

    /// Key of `record`, which sits at `index` in the dataset.
    pub fn key(&self, record: &T, index: usize) -> RowKey {
        self.exact_key(record)
            .unwrap_or_else(|| RowKey::from_index(index))
    }

    /// Key of `record` without the positional fallback.
    pub fn exact_key(&self, record: &T) -> Option<RowKey> {
        match self {
            KeySource::Field(field) => RowKey::from_value(&record.value(*field)),
            KeySource::Index => None,
            KeySource::Custom(f) => Some(f(record)),
        }
    }
}

impl<T: Record> Default for KeySource<T> {
    fn default() -> Self {
        match T::id_field() {
            Some(field) => KeySource::Field(field),
            None => KeySource::Index,
        }
    }
}

impl<T: Record> fmt::Debug for KeySource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Field(field) => f.debug_tuple("Field").field(field).finish(),
            KeySource::Index => f.write_str("Index"),
            KeySource::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// How strictly the grid treats row keys when the dataset changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Positional fallback allowed; duplicates are only logged.
    #[default]
    BestEffort,
    /// Datasets with a missing or duplicate key are rejected.
    Strict,
}
