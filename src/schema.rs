use crate::consts::DEFAULT_PLACEHOLDER;
use crate::error::{Result, TsvTableError};

#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Schema {
    columns: Vec<ColumnDefinition>,
    immutable: bool,
    placeholder: String,
}

impl Schema {
    /// Column names must be unique; duplicates are rejected here rather than
    /// silently shadowing each other at serialization time.
    pub fn with_columns(columns: Vec<ColumnDefinition>, immutable: bool) -> Result<Self> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TsvTableError::DuplicateColumn {
                    field: column.name.clone(),
                });
            }
        }

        Ok(Self {
            columns,
            immutable,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        })
    }

    /// Convenience constructor from plain name lists. A required name that
    /// isn't a column at all could never be satisfied, so it's an error.
    pub fn new<S: AsRef<str>>(
        column_names: &[S],
        required_names: &[S],
        immutable: bool,
    ) -> Result<Self> {
        for required in required_names {
            if !column_names.iter().any(|c| c.as_ref() == required.as_ref()) {
                return Err(TsvTableError::UnsupportedField {
                    field: required.as_ref().to_string(),
                    supported: column_names.iter().map(|c| c.as_ref().to_string()).collect(),
                });
            }
        }

        let columns = column_names
            .iter()
            .map(|name| {
                let required = required_names.iter().any(|r| r.as_ref() == name.as_ref());
                ColumnDefinition::new(name.as_ref(), required)
            })
            .collect();

        Self::with_columns(columns, immutable)
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }

    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.required())
            .map(|c| c.name())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDefinition {
    name: String,
    required: bool,
}

impl ColumnDefinition {
    pub fn new<S: Into<String>>(name: S, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn required(&self) -> bool {
        self.required
    }
}
