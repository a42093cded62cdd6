//! Stored biogenic carbon enrichment for Tally tables.
//!
//! The reference database keys factors by Tally material name; the keys are
//! unique, so a plain map stands in for a left join. Matched rows carry the
//! key and factor columns into the output, unmatched rows carry nulls.

use crate::constants::{
    LIFE_CYCLE_STAGE, MASS_TOTAL_KG, MATERIAL_NAME, STORED_BIOGENIC_CARBON, STORED_CARBON_FACTOR,
    STORED_CARBON_KEY,
};
use crate::csv_io;
use crate::error::Result;
use crate::table::{Table, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Stored-carbon factors keyed by Tally material name.
pub struct StoredCarbonIndex {
    factors: HashMap<String, Value>,
}

impl StoredCarbonIndex {
    pub fn load(path: &Path) -> Result<StoredCarbonIndex> {
        let table = csv_io::read_table(path)?;
        let key_idx = table.require_column(STORED_CARBON_KEY)?;
        let factor_idx = table.require_column(STORED_CARBON_FACTOR)?;

        let mut factors = HashMap::new();
        for row in table.rows() {
            if let Some(key) = row[key_idx].as_str() {
                factors.insert(key.to_string(), row[factor_idx].clone());
            }
        }
        info!(
            "Loaded {} stored carbon factors from {}",
            factors.len(),
            path.display()
        );
        Ok(StoredCarbonIndex { factors })
    }

    fn lookup(&self, material: &str) -> Option<&Value> {
        self.factors.get(material)
    }
}

/// Joins the factor columns onto a cleaned Tally table and fills the stored
/// biogenic carbon column. Only product-stage rows get a computed value; a
/// product-stage row without a usable mass or factor stays null, which is
/// the downstream signal for a material missing from the reference.
pub fn append_stored_carbon(table: &mut Table, index: &StoredCarbonIndex) -> Result<()> {
    let name_idx = table.require_column(MATERIAL_NAME)?;

    info!("Merge stored carbon database based on material name.");
    let mut keys = Vec::with_capacity(table.len());
    let mut factors = Vec::with_capacity(table.len());
    for row in table.rows() {
        let hit = row[name_idx].as_str().and_then(|name| index.lookup(name));
        match (row[name_idx].as_str(), hit) {
            (Some(name), Some(factor)) => {
                keys.push(Value::str(name));
                factors.push(factor.clone());
            }
            _ => {
                keys.push(Value::Null);
                factors.push(Value::Null);
            }
        }
    }
    table.append_column(STORED_CARBON_KEY, keys)?;
    table.append_column(STORED_CARBON_FACTOR, factors)?;

    info!("Calculate stored carbon for materials in A1-A3 stage");
    let stage_idx = table.require_column(LIFE_CYCLE_STAGE)?;
    let mass_idx = table.require_column(MASS_TOTAL_KG)?;
    let factor_idx = table.require_column(STORED_CARBON_FACTOR)?;

    let mut stored = Vec::with_capacity(table.len());
    for row in table.rows() {
        let product_stage = matches!(
            row[stage_idx].as_str(),
            Some("[A1-A3] Product" | "Product")
        );
        if !product_stage {
            stored.push(Value::Num(0.0));
            continue;
        }
        match (row[mass_idx].as_number(), row[factor_idx].as_number()) {
            (Some(mass), Some(factor)) => stored.push(Value::Num(mass * factor)),
            _ => stored.push(Value::Null),
        }
    }
    table.append_column(STORED_BIOGENIC_CARBON, stored)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;
    use std::fs;
    use tempfile::tempdir;

    fn reference_index() -> (tempfile::TempDir, StoredCarbonIndex) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stored_carbon_database.csv");
        fs::write(
            &path,
            "Name_Tally Material,Stored Carbon (C02eq/kg)\n\
             Heavy timber,-1.5\n\
             Plywood,-1.2\n",
        )
        .unwrap();
        let index = StoredCarbonIndex::load(&path).unwrap();
        (dir, index)
    }

    fn tally_table(rows: Vec<(&str, &str, Value)>) -> Table {
        let mut t = Table::new(vec![
            MATERIAL_NAME.to_string(),
            LIFE_CYCLE_STAGE.to_string(),
            MASS_TOTAL_KG.to_string(),
        ]);
        for (name, stage, mass) in rows {
            t.push_row(vec![Value::str(name), Value::str(stage), mass]).unwrap();
        }
        t
    }

    #[test]
    fn test_product_rows_get_mass_times_factor() {
        let (_dir, index) = reference_index();
        let mut t = tally_table(vec![
            ("Heavy timber", "[A1-A3] Product", Value::Num(100.0)),
            ("Heavy timber", "[B4-B5] Replacement", Value::Num(100.0)),
            ("Steel plate", "Product", Value::Num(10.0)),
        ]);
        append_stored_carbon(&mut t, &index).unwrap();

        assert_eq!(
            t.value(0, STORED_BIOGENIC_CARBON).unwrap(),
            &Value::Num(-150.0)
        );
        assert_eq!(t.value(0, STORED_CARBON_KEY).unwrap(), &Value::str("Heavy timber"));
        // non-product stages keep the zero fill even when a factor matched
        assert_eq!(t.value(1, STORED_BIOGENIC_CARBON).unwrap(), &Value::Num(0.0));
        // unmatched product rows go null, not zero
        assert!(t.value(2, STORED_BIOGENIC_CARBON).unwrap().is_null());
        assert!(t.value(2, STORED_CARBON_KEY).unwrap().is_null());
    }

    #[test]
    fn test_missing_material_column_is_fatal() {
        let (_dir, index) = reference_index();
        let mut t = Table::new(vec!["Name".to_string()]);
        t.push_row(vec![Value::str("x")]).unwrap();
        assert!(matches!(
            append_stored_carbon(&mut t, &index),
            Err(PrepError::MissingColumn(_))
        ));
    }
}
