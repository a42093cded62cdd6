use crate::error::{PrepError, Result};
use crate::table::Table;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

/// One boolean per table row.
pub type Mask = Vec<bool>;

/// How a predicate inspects a cell. Null cells never match except under
/// `IsNull`; that is the only null-aware test the rules get.
#[derive(Debug, Clone, Copy)]
pub enum Match {
    /// Regex found anywhere in the cell.
    Contains(&'static str),
    /// Plain substring, no regex interpretation.
    ContainsLiteral(&'static str),
    /// Regex anchored at the start of the cell.
    StartsWith(&'static str),
    /// Regex covering the whole cell.
    Full(&'static str),
    /// Numeric equality; string cells are read as numbers where they parse.
    Equals(f64),
    /// Cell is null.
    IsNull,
}

/// A named predicate bound to the column it reads.
#[derive(Debug, Clone, Copy)]
pub struct PredicateSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub matcher: Match,
}

/// Shorthand constructor for the predicate tables.
pub const fn p(name: &'static str, column: &'static str, matcher: Match) -> PredicateSpec {
    PredicateSpec {
        name,
        column,
        matcher,
    }
}

/// Named masks for one table. Built once per mapper and frozen; rules read
/// masks by name and an unknown name is a configuration error.
#[derive(Debug, Default)]
pub struct Registry {
    masks: HashMap<String, Mask>,
}

impl Registry {
    pub fn insert(&mut self, name: impl Into<String>, mask: Mask) {
        self.masks.insert(name.into(), mask);
    }

    pub fn get(&self, name: &str) -> Result<&Mask> {
        self.masks
            .get(name)
            .ok_or_else(|| PrepError::MissingPredicate(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

/// Evaluates a full predicate table eagerly against `table`. A column one of
/// the predicates needs but the table lacks fails the build here, before any
/// rule has run.
pub fn build_registry(table: &Table, specs: &[PredicateSpec]) -> Result<Registry> {
    let mut registry = Registry::default();
    for spec in specs {
        let mask = eval_predicate(table, spec.column, &spec.matcher)?;
        registry.insert(spec.name, mask);
    }
    Ok(registry)
}

/// Evaluates one matcher against one column.
pub fn eval_predicate(table: &Table, column: &str, matcher: &Match) -> Result<Mask> {
    let idx = table.require_column(column)?;
    let rows = table.rows();
    let mut mask = Mask::with_capacity(rows.len());

    match matcher {
        Match::Contains(pattern) => {
            let re = compiled(pattern)?;
            for row in rows {
                mask.push(row[idx].as_str().is_some_and(|s| re.is_match(s)));
            }
        }
        Match::ContainsLiteral(needle) => {
            for row in rows {
                mask.push(row[idx].as_str().is_some_and(|s| s.contains(needle)));
            }
        }
        Match::StartsWith(pattern) => {
            let re = compiled_anchored(pattern, false)?;
            for row in rows {
                mask.push(row[idx].as_str().is_some_and(|s| re.is_match(s)));
            }
        }
        Match::Full(pattern) => {
            let re = compiled_anchored(pattern, true)?;
            for row in rows {
                mask.push(row[idx].as_str().is_some_and(|s| re.is_match(s)));
            }
        }
        Match::Equals(n) => {
            for row in rows {
                mask.push(row[idx].as_number() == Some(*n));
            }
        }
        Match::IsNull => {
            for row in rows {
                mask.push(row[idx].is_null());
            }
        }
    }
    Ok(mask)
}

// Predicate tables repeat the same patterns for every file in a batch, so
// compiled regexes are shared process-wide.
static REGEX_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn compiled(pattern: &str) -> Result<Regex> {
    cached(pattern.to_string())
}

fn compiled_anchored(pattern: &str, full: bool) -> Result<Regex> {
    let decorated = if full {
        format!("^(?:{})$", pattern)
    } else {
        format!("^(?:{})", pattern)
    };
    cached(decorated)
}

fn cached(pattern: String) -> Result<Regex> {
    let mut cache = match REGEX_CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(re) = cache.get(&pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(&pattern).map_err(|e| PrepError::Pattern {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;
    cache.insert(pattern, re.clone());
    Ok(re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn table_with(name: &str, cells: Vec<Value>) -> Table {
        let mut t = Table::new(vec![name.to_string()]);
        for cell in cells {
            t.push_row(vec![cell]).unwrap();
        }
        t
    }

    #[test]
    fn test_contains_matches_anywhere_and_skips_nulls() {
        let t = table_with(
            "Name",
            vec![
                Value::str("steel cladding panel"),
                Value::str("Cladding"),
                Value::Null,
                Value::str("plain"),
            ],
        );
        let mask =
            eval_predicate(&t, "Name", &Match::Contains("cladding|Cladding|CLADDING")).unwrap();
        assert_eq!(mask, vec![true, true, false, false]);
    }

    #[test]
    fn test_starts_with_anchors_whole_alternation() {
        let t = table_with(
            "Revit family name",
            vec![
                Value::str("Ext - brick veneer"),
                Value::str("context wall"),
                Value::str("EX-01"),
            ],
        );
        let mask =
            eval_predicate(&t, "Revit family name", &Match::StartsWith("ex|Ex|EX")).unwrap();
        assert_eq!(mask, vec![true, false, true]);
    }

    #[test]
    fn test_full_requires_entire_cell() {
        let t = table_with(
            "Revit category",
            vec![Value::str("Walls"), Value::str("Walls interior")],
        );
        let mask = eval_predicate(&t, "Revit category", &Match::Full("Walls")).unwrap();
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    fn test_contains_literal_ignores_metacharacters() {
        let t = table_with(
            "Resource",
            vec![
                Value::str("Concrete slabs (hollow and solid)"),
                Value::str("Concrete slabs hollow and solid"),
            ],
        );
        let mask = eval_predicate(
            &t,
            "Resource",
            &Match::ContainsLiteral("Concrete slabs (hollow and solid)"),
        )
        .unwrap();
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    fn test_equals_reads_strings_and_numbers() {
        let t = table_with(
            "csiMasterformat",
            vec![
                Value::str("31"),
                Value::Num(31.0),
                Value::str("3"),
                Value::Null,
            ],
        );
        let mask = eval_predicate(&t, "csiMasterformat", &Match::Equals(31.0)).unwrap();
        assert_eq!(mask, vec![true, true, false, false]);
    }

    #[test]
    fn test_missing_column_fails_registry_build() {
        let t = table_with("a", vec![Value::str("x")]);
        let specs = [p("needs_b", "b", Match::IsNull)];
        assert!(matches!(
            build_registry(&t, &specs),
            Err(PrepError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_unknown_predicate_is_fatal() {
        let registry = Registry::default();
        assert!(matches!(
            registry.get("nope"),
            Err(PrepError::MissingPredicate(_))
        ));
    }

    #[test]
    fn test_duplicate_spec_names_keep_last() {
        let t = table_with("a", vec![Value::str("x"), Value::Null]);
        let specs = [p("dup", "a", Match::IsNull), p("dup", "a", Match::Full("x"))];
        let registry = build_registry(&t, &specs).unwrap();
        assert_eq!(registry.get("dup").unwrap(), &vec![true, false]);
    }
}
