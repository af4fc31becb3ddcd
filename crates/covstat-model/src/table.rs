//! Raw string table shared between the ingest and transform stages.

/// An ordered, header-addressed table of trimmed string fields.
///
/// Every row is exactly `headers.len()` fields wide; the parser rejects rows
/// of any other width. No type coercion happens here — consumers coerce each
/// field at the point they read it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Resolves a column by case-insensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RawTable;

    #[test]
    fn column_lookup_ignores_case() {
        let table = RawTable::new(
            vec!["Country".to_string(), "Cases".to_string()],
            vec![vec!["Norway".to_string(), "100".to_string()]],
        );
        assert_eq!(table.column_index("country"), Some(0));
        assert_eq!(table.column_index("CASES"), Some(1));
        assert_eq!(table.column_index("deaths"), None);
    }
}
