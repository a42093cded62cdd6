use crate::error::{PrepError, Result};

/// A single cell. Cells read from CSV come in as strings (empty cells are
/// null); numeric cells only appear where the pipeline itself writes numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Num(f64),
    Null,
}

impl Value {
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell. String cells parse on demand, which mirrors
    /// how numeric CSV columns behave after a round trip through disk.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// In-memory line-item table with named columns. Column order is insertion
/// order and survives the write back to disk.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Table {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(PrepError::Config(format!(
                "Row width {} does not match header width {}",
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))
    }

    pub fn value(&self, row: usize, name: &str) -> Result<&Value> {
        let idx = self.require_column(name)?;
        Ok(&self.rows[row][idx])
    }

    /// Fills every row of the named column, creating the column at the end of
    /// the header list when it does not exist yet.
    pub fn set_column(&mut self, name: &str, value: Value) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.clone();
                }
            }
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
    }

    /// Adds a column with one prepared value per row.
    pub fn append_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(PrepError::Config(format!(
                "Column `{}` has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Places an identifier column first, the position it keeps in every
    /// stage output. An existing column of the same name is replaced.
    pub fn insert_id_column(&mut self, name: &str, value: Value) {
        if let Some(idx) = self.column_index(name) {
            self.headers.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
        self.headers.insert(0, name.to_string());
        for row in &mut self.rows {
            row.insert(0, value.clone());
        }
    }

    /// Writes `value` into the named column for every row where `mask` is
    /// true. A missing target column is created with nulls elsewhere.
    pub fn set_where(&mut self, name: &str, mask: &[bool], value: Value) {
        debug_assert_eq!(mask.len(), self.rows.len());
        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.set_column(name, Value::Null);
                self.headers.len() - 1
            }
        };
        for (row, hit) in self.rows.iter_mut().zip(mask) {
            if *hit {
                row[idx] = value.clone();
            }
        }
    }

    /// Whole-cell value substitution over one column. Missing columns are
    /// left alone; callers guard existence where it matters.
    pub fn replace_values(&mut self, name: &str, from: &str, to: &str) {
        if let Some(idx) = self.column_index(name) {
            for row in &mut self.rows {
                if row[idx].as_str() == Some(from) {
                    row[idx] = Value::str(to);
                }
            }
        }
    }

    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.rows.len());
        let mut it = keep.iter();
        self.rows.retain(|_| *it.next().unwrap_or(&false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["a".to_string(), "b".to_string()]);
        t.push_row(vec![Value::str("x"), Value::str("1")]).unwrap();
        t.push_row(vec![Value::Null, Value::str("2")]).unwrap();
        t
    }

    #[test]
    fn test_require_column_missing_is_error() {
        let t = sample();
        assert!(matches!(
            t.require_column("nope"),
            Err(PrepError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_set_where_overwrites_only_masked_rows() {
        let mut t = sample();
        t.set_where("a", &[false, true], Value::str("y"));
        assert_eq!(t.value(0, "a").unwrap(), &Value::str("x"));
        assert_eq!(t.value(1, "a").unwrap(), &Value::str("y"));
    }

    #[test]
    fn test_set_where_creates_missing_column_with_nulls() {
        let mut t = sample();
        t.set_where("c", &[true, false], Value::str("v"));
        assert_eq!(t.value(0, "c").unwrap(), &Value::str("v"));
        assert!(t.value(1, "c").unwrap().is_null());
    }

    #[test]
    fn test_insert_id_column_is_first_and_replaces() {
        let mut t = sample();
        t.insert_id_column("a", Value::str("id"));
        assert_eq!(t.headers()[0], "a");
        assert_eq!(t.headers().len(), 2);
        assert_eq!(t.value(1, "a").unwrap(), &Value::str("id"));
    }

    #[test]
    fn test_replace_values_is_whole_cell() {
        let mut t = sample();
        t.replace_values("a", "x", "z");
        t.replace_values("b", "nope", "never");
        assert_eq!(t.value(0, "a").unwrap(), &Value::str("z"));
        assert_eq!(t.value(0, "b").unwrap(), &Value::str("1"));
    }

    #[test]
    fn test_retain_rows() {
        let mut t = sample();
        t.retain_rows(&[false, true]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.value(0, "b").unwrap(), &Value::str("2"));
    }

    #[test]
    fn test_number_view_parses_strings() {
        assert_eq!(Value::str("31").as_number(), Some(31.0));
        assert_eq!(Value::Num(4.0).as_number(), Some(4.0));
        assert_eq!(Value::str("n/a").as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }
}
