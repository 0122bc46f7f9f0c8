use crate::error::{Result, TsvTableError};
use crate::record::Record;
use crate::schema::Schema;
use std::io::Write;

/// Owns the column schema and the finalized rows. Mints [`Record`]s bound to
/// its schema and appends them once complete; rows are never edited or
/// removed. Stays open for appends indefinitely, renders at any point.
#[derive(Debug)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// A fresh independent record; no state is shared between records minted
    /// from the same table.
    pub fn new_record(&self) -> Record {
        Record::new(self.schema.clone())
    }

    /// Validates the record's columns and completeness, then appends its
    /// rendered values as one row. The record is consumed; the table keeps
    /// only the values. On any error the row count is unchanged.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if !record.schema().column_names().eq(self.schema.column_names()) {
            return Err(TsvTableError::SchemaMismatch {
                expected: self.schema.column_names().map(String::from).collect(),
                actual: record.schema().column_names().map(String::from).collect(),
            });
        }

        let values = record.rendered_values()?;
        self.rows.push(values);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-joined column names followed by a newline.
    pub fn header(&self) -> String {
        let mut header = self
            .schema
            .column_names()
            .collect::<Vec<_>>()
            .join("\t");
        header.push('\n');
        header
    }

    /// The header directly followed by newline-joined rows, no trailing
    /// newline.
    pub fn render(&self) -> String {
        let rows = self
            .rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
        self.header() + &rows
    }

    /// Writes the rendered table to `out`, returning the number of bytes
    /// written. Where that output goes is the caller's decision.
    pub fn write_into<W: Write>(&self, out: &mut W) -> Result<usize> {
        let rendered = self.render();
        out.write_all(rendered.as_bytes())?;
        Ok(rendered.len())
    }
}
