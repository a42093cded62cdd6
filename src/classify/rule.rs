use super::registry::{Mask, Registry};
use crate::error::Result;
use crate::table::{Table, Value};

/// One ordered block of masked writes against a single output column. Rules
/// run in sequence and later writes overwrite earlier ones, which is how the
/// more specific assignments carve exceptions out of broad ones.
pub trait Rule {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    /// Column the rule writes to.
    fn target(&self) -> &str;

    /// Applies every sub-operation in order.
    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()>;
}

/// Rows matching every named predicate get `result`.
pub fn and_where(
    table: &mut Table,
    registry: &Registry,
    target: &str,
    names: &[&str],
    result: &str,
) -> Result<()> {
    let mask = fold_and(registry, names, table.len())?;
    table.set_where(target, &mask, Value::str(result));
    Ok(())
}

/// Rows matching any named predicate get `result`.
pub fn or_where(
    table: &mut Table,
    registry: &Registry,
    target: &str,
    names: &[&str],
    result: &str,
) -> Result<()> {
    let mask = fold_or(registry, names, table.len())?;
    table.set_where(target, &mask, Value::str(result));
    Ok(())
}

/// Rows matching every `and_names` predicate and at least one `or_names`
/// predicate get `result`.
pub fn and_or_where(
    table: &mut Table,
    registry: &Registry,
    target: &str,
    and_names: &[&str],
    or_names: &[&str],
    result: &str,
) -> Result<()> {
    let and_mask = fold_and(registry, and_names, table.len())?;
    let or_mask = fold_or(registry, or_names, table.len())?;
    let mask: Mask = and_mask
        .iter()
        .zip(&or_mask)
        .map(|(a, o)| *a && *o)
        .collect();
    table.set_where(target, &mask, Value::str(result));
    Ok(())
}

/// Single-predicate write.
pub fn write_where(
    table: &mut Table,
    registry: &Registry,
    target: &str,
    name: &str,
    result: &str,
) -> Result<()> {
    let mask = registry.get(name)?.clone();
    table.set_where(target, &mask, Value::str(result));
    Ok(())
}

fn fold_and(registry: &Registry, names: &[&str], len: usize) -> Result<Mask> {
    let mut out = vec![true; len];
    for name in names {
        let mask = registry.get(name)?;
        for (acc, hit) in out.iter_mut().zip(mask) {
            *acc = *acc && *hit;
        }
    }
    Ok(out)
}

fn fold_or(registry: &Registry, names: &[&str], len: usize) -> Result<Mask> {
    let mut out = vec![false; len];
    for name in names {
        let mask = registry.get(name)?;
        for (acc, hit) in out.iter_mut().zip(mask) {
            *acc = *acc || *hit;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;

    fn registry_of(entries: &[(&str, Vec<bool>)]) -> Registry {
        let mut r = Registry::default();
        for (name, mask) in entries {
            r.insert(*name, mask.clone());
        }
        r
    }

    fn two_col_table(len: usize) -> Table {
        let mut t = Table::new(vec!["k".to_string(), "out".to_string()]);
        for i in 0..len {
            t.push_row(vec![Value::str(format!("r{}", i)), Value::str("seed")])
                .unwrap();
        }
        t
    }

    #[test]
    fn test_and_where_intersects() {
        let mut t = two_col_table(3);
        let r = registry_of(&[
            ("a", vec![true, true, false]),
            ("b", vec![true, false, false]),
        ]);
        and_where(&mut t, &r, "out", &["a", "b"], "hit").unwrap();
        assert_eq!(t.value(0, "out").unwrap(), &Value::str("hit"));
        assert_eq!(t.value(1, "out").unwrap(), &Value::str("seed"));
        assert_eq!(t.value(2, "out").unwrap(), &Value::str("seed"));
    }

    #[test]
    fn test_and_or_where_needs_all_ands_and_one_or() {
        let mut t = two_col_table(4);
        let r = registry_of(&[
            ("and1", vec![true, true, true, false]),
            ("or1", vec![true, false, false, true]),
            ("or2", vec![false, true, false, true]),
        ]);
        and_or_where(&mut t, &r, "out", &["and1"], &["or1", "or2"], "hit").unwrap();
        assert_eq!(t.value(0, "out").unwrap(), &Value::str("hit"));
        assert_eq!(t.value(1, "out").unwrap(), &Value::str("hit"));
        assert_eq!(t.value(2, "out").unwrap(), &Value::str("seed"));
        assert_eq!(t.value(3, "out").unwrap(), &Value::str("seed"));
    }

    #[test]
    fn test_later_write_overwrites_earlier() {
        let mut t = two_col_table(2);
        let r = registry_of(&[
            ("broad", vec![true, true]),
            ("narrow", vec![false, true]),
        ]);
        or_where(&mut t, &r, "out", &["broad"], "general").unwrap();
        write_where(&mut t, &r, "out", "narrow", "specific").unwrap();
        assert_eq!(t.value(0, "out").unwrap(), &Value::str("general"));
        assert_eq!(t.value(1, "out").unwrap(), &Value::str("specific"));
    }

    #[test]
    fn test_unknown_name_aborts_rule() {
        let mut t = two_col_table(1);
        let r = registry_of(&[("known", vec![true])]);
        let err = and_where(&mut t, &r, "out", &["known", "missing"], "x").unwrap_err();
        assert!(matches!(err, PrepError::MissingPredicate(_)));
    }
}
