use crate::error::{Result, TsvTableError};
use crate::schema::Schema;

/// One row being filled in against a [`Schema`]. Columns start unset and are
/// distinguished from real values by state, not by comparing against the
/// placeholder text, so a value equal to the placeholder still counts as set.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Record {
    schema: Schema,
    values: Vec<Option<String>>,
}

impl Record {
    pub fn new(schema: Schema) -> Self {
        let values = vec![None; schema.columns().len()];
        Self { schema, values }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Current value of a column, or the placeholder text if it was never set.
    pub fn get(&self, field: &str) -> Result<&str> {
        let index = self
            .schema
            .index_of(field)
            .ok_or_else(|| self.unsupported(field))?;
        Ok(self.values[index]
            .as_deref()
            .unwrap_or_else(|| self.schema.placeholder()))
    }

    pub fn set<S: Into<String>>(&mut self, field: &str, value: S) -> Result<()> {
        let index = self
            .schema
            .index_of(field)
            .ok_or_else(|| self.unsupported(field))?;
        if self.schema.is_immutable() && self.values[index].is_some() {
            return Err(TsvTableError::ValueConflict {
                field: field.to_string(),
            });
        }
        self.values[index] = Some(value.into());
        Ok(())
    }

    /// Bulk assignment. The whole batch is validated before any write: every
    /// key must be a schema column, and under an immutable schema no key may
    /// target an already-set column or repeat within the batch. On error the
    /// record is unchanged.
    pub fn update<I, K, V>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect::<Vec<_>>();

        let mut indices = Vec::with_capacity(fields.len());
        for (field, _) in fields.iter() {
            let index = self
                .schema
                .index_of(field)
                .ok_or_else(|| self.unsupported(field))?;
            if self.schema.is_immutable()
                && (self.values[index].is_some() || indices.contains(&index))
            {
                return Err(TsvTableError::ValueConflict {
                    field: field.clone(),
                });
            }
            indices.push(index);
        }

        for (index, (_, value)) in indices.into_iter().zip(fields) {
            self.values[index] = Some(value);
        }
        Ok(())
    }

    /// Tab-joined values in column order, unset columns rendered as the
    /// placeholder. Pure: repeated calls return the identical string.
    pub fn serialize(&self) -> Result<String> {
        Ok(self.rendered_values()?.join("\t"))
    }

    pub(crate) fn rendered_values(&self) -> Result<Vec<String>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TsvTableError::MissingFields {
                missing,
                required: self.schema.required_names().map(String::from).collect(),
            });
        }

        Ok(self
            .values
            .iter()
            .map(|v| {
                v.clone()
                    .unwrap_or_else(|| self.schema.placeholder().to_string())
            })
            .collect())
    }

    fn missing_fields(&self) -> Vec<String> {
        self.schema
            .columns()
            .iter()
            .zip(self.values.iter())
            .filter(|(column, value)| column.required() && value.is_none())
            .map(|(column, _)| column.name().to_string())
            .collect()
    }

    fn unsupported(&self, field: &str) -> TsvTableError {
        TsvTableError::UnsupportedField {
            field: field.to_string(),
            supported: self.schema.column_names().map(String::from).collect(),
        }
    }
}
