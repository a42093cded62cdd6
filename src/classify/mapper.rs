use super::registry::Registry;
use super::rule::Rule;
use crate::error::{PrepError, Result};
use crate::predicates::{elements, materials, refined};
use crate::table::Table;
use tracing::info;

/// Owns one table for the duration of a mapping pass. The registry is
/// evaluated once at construction and never refreshed, so every rule in the
/// pass sees the masks as they were when the pass began; only the written
/// column changes underneath them.
pub struct Mapper {
    table: Table,
    registry: Registry,
    rule: Option<Box<dyn Rule>>,
}

impl Mapper {
    pub fn new(table: Table, registry: Registry) -> Mapper {
        Mapper {
            table,
            registry,
            rule: None,
        }
    }

    /// Mapper seeded with its first rule already bound.
    pub fn with_rule(table: Table, registry: Registry, rule: Box<dyn Rule>) -> Mapper {
        Mapper {
            table,
            registry,
            rule: Some(rule),
        }
    }

    /// Element pass over a Tally table.
    pub fn tally_elements(table: Table) -> Result<Mapper> {
        let registry = elements::tally_registry(&table)?;
        info!("Tally element mapper created for mapping.");
        Ok(Mapper::new(table, registry))
    }

    /// Element pass over a One Click table.
    pub fn oneclick_elements(table: Table) -> Result<Mapper> {
        let registry = elements::oneclick_registry(&table)?;
        info!("One Click element mapper created for mapping.");
        Ok(Mapper::new(table, registry))
    }

    /// Material pass over a Tally table. Constructed fresh for each
    /// sub-pass so the masks see the previous sub-pass's writes.
    pub fn tally_materials(table: Table) -> Result<Mapper> {
        let registry = materials::tally_registry(&table)?;
        info!("Tally material mapper created for mapping.");
        Ok(Mapper::new(table, registry))
    }

    /// Material pass over a One Click table.
    pub fn oneclick_materials(table: Table) -> Result<Mapper> {
        let registry = materials::oneclick_registry(&table)?;
        info!("One Click material mapper created for mapping.");
        Ok(Mapper::new(table, registry))
    }

    /// Refined element pass; both tools share one predicate table here.
    pub fn refined_elements(table: Table) -> Result<Mapper> {
        let registry = refined::registry(&table)?;
        info!("Refined element mapper created for mapping.");
        Ok(Mapper::new(table, registry))
    }

    /// Swaps in the next rule without touching the registry.
    pub fn bind(&mut self, rule: Box<dyn Rule>) {
        self.rule = Some(rule);
    }

    /// Runs the bound rule's sub-operations in order.
    pub fn apply(&mut self) -> Result<()> {
        let rule = self.rule.as_ref().ok_or(PrepError::RuleUnbound)?;
        info!("Filtering using the following rule: {}", rule.name());
        rule.apply(&mut self.table, &self.registry)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::registry::{build_registry, p, Match};
    use crate::classify::rule::write_where;
    use crate::table::Value;

    struct MarkNulls;

    impl Rule for MarkNulls {
        fn name(&self) -> &'static str {
            "MarkNulls"
        }

        fn target(&self) -> &str {
            "out"
        }

        fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
            write_where(table, registry, self.target(), "is_null", "was-null")
        }
    }

    #[test]
    fn test_apply_without_rule_is_an_error() {
        let table = Table::new(vec!["out".to_string()]);
        let mut mapper = Mapper::new(table, Registry::default());
        assert!(matches!(mapper.apply(), Err(PrepError::RuleUnbound)));
    }

    #[test]
    fn test_registry_is_frozen_while_rules_run() {
        let mut table = Table::new(vec!["out".to_string()]);
        table.push_row(vec![Value::Null]).unwrap();
        table.push_row(vec![Value::str("kept")]).unwrap();

        let specs = [p("is_null", "out", Match::IsNull)];
        let registry = build_registry(&table, &specs).unwrap();
        let mut mapper = Mapper::with_rule(table, registry, Box::new(MarkNulls));

        // First application rewrites the null row; the second still sees the
        // construction-time mask, so the same row is rewritten again.
        mapper.apply().unwrap();
        assert_eq!(mapper.table().value(0, "out").unwrap(), &Value::str("was-null"));
        mapper.apply().unwrap();
        assert_eq!(mapper.table().value(0, "out").unwrap(), &Value::str("was-null"));
        assert_eq!(mapper.table().value(1, "out").unwrap(), &Value::str("kept"));
    }
}
