use super::schema::MafSchema;

/// One data line, cut to the schema width. `None` marks an empty or absent field.
#[derive(Debug, Clone, PartialEq)]
pub struct MafRecord {
    fields: Vec<Option<String>>,
}

impl MafRecord {
    /// Splits a tab-delimited line positionally into `width` fields; extra columns are dropped
    /// and missing trailing columns are filled with `None`.
    pub fn from_line(line: &str, width: usize) -> Self {
        let mut fields: Vec<Option<String>> = line
            .split('\t')
            .take(width)
            .map(|value| {
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        fields.resize(width, None);
        Self { fields }
    }

    pub fn field(&self, index: usize) -> Option<Option<&str>> {
        self.fields.get(index).map(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered rows sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct MafTable {
    schema: MafSchema,
    records: Vec<MafRecord>,
}

impl MafTable {
    pub fn new(schema: MafSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    pub fn with_records(schema: MafSchema, records: Vec<MafRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &MafSchema {
        &self.schema
    }

    pub fn records(&self) -> &[MafRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends the rows of `other`, keeping their order.
    pub fn append(&mut self, other: MafTable) {
        self.records.extend(other.records);
    }

    /// Value of the named column in row `row`; `None` if the row or column does not exist.
    pub fn value(&self, row: usize, column: &str) -> Option<Option<&str>> {
        let index = self.schema.index_of(column)?;
        self.records.get(row)?.field(index)
    }
}
