//! Normalization for raw Tally exports.

use crate::classify::registry::{build_registry, p, Match, PredicateSpec};
use crate::classify::rule::and_where;
use crate::constants::{
    CLF_MODEL_ID, CLF_OMNI, FILE_NAME_BEFORE_MERGE, MQ_1, MQ_2, NOT_A_MERGED_FILE, NOT_INCLUDED,
    REVIT_BUILDING_ELEMENT, REVIT_CATEGORY, REVIT_FAMILY_NAME, TOOL,
};
use crate::error::Result;
use crate::table::{Table, Value};
use crate::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo, RevitBuildingCategory, Tool};
use tracing::info;

/// Brings a raw Tally export up to the column contract the mapping passes
/// assume. Classification columns are scaffolded with their sentinels here;
/// `MQ_1` and `MQ_2` are reset even when the export already carries them.
pub fn clean(table: &mut Table, stem: &str) -> Result<()> {
    info!("Begin cleaning Tally table.");
    table.insert_id_column(CLF_MODEL_ID, Value::str(stem));
    table.set_column(TOOL, Value::str(Tool::Tally.as_str()));

    if table.has_column(CLF_OMNI) {
        table.replace_values(CLF_OMNI, "Shell - Substructure", "Substructure");
        table.replace_values(CLF_OMNI, "Shell - Enclosure", "Shell - Exterior Enclosure");
    } else {
        table.set_column(CLF_OMNI, Value::Null);
    }

    if !table.has_column(REVIT_BUILDING_ELEMENT) {
        table.set_column(REVIT_BUILDING_ELEMENT, Value::str(NOT_INCLUDED));
    }
    if !table.has_column(FILE_NAME_BEFORE_MERGE) {
        table.set_column(FILE_NAME_BEFORE_MERGE, Value::str(NOT_A_MERGED_FILE));
    }

    table.set_column(MQ_1, Value::str(MaterialQuantityOne::Other.as_str()));
    table.set_column(MQ_2, Value::str(MaterialQuantityTwo::Other.as_str()));
    info!("End cleaning Tally table.");
    Ok(())
}

const WALL_SPECS: [PredicateSpec; 8] = [
    p("rt_c_wall", REVIT_CATEGORY, Match::Full("Walls")),
    p(
        "rt_fn_int",
        REVIT_FAMILY_NAME,
        Match::Contains("int|Int|INT|interior|Interior|INTERIOR"),
    ),
    p(
        "rt_fn_ext",
        REVIT_FAMILY_NAME,
        Match::Contains("ext|Ext|EXT|exterior|Exterior|EXTERIOR"),
    ),
    p(
        "rt_fn_rainscreen",
        REVIT_FAMILY_NAME,
        Match::Contains("rainscreen|Rainscreen|RAINSCREEN"),
    ),
    p("rt_fn_parapet", REVIT_FAMILY_NAME, Match::Contains("parapet|Parapet|PARAPET")),
    p("rt_fn_soffit", REVIT_FAMILY_NAME, Match::Contains("soffit|Soffit|SOFFIT")),
    p(
        "rt_fn_partition",
        REVIT_FAMILY_NAME,
        Match::Contains("partition|Partition|PARTITION"),
    ),
    p(
        "rt_fn_enc",
        REVIT_FAMILY_NAME,
        Match::Contains("enc|Enc|ENC|enclosure|Enclosure|ENCLOSURE"),
    ),
];

/// Rewrites the building element column for wall rows from their family
/// naming. Interior writes come last, so a family name carrying both an
/// exterior and an interior keyword lands on the interior side.
pub fn adjust_walls(table: &mut Table) -> Result<()> {
    info!("Begin adjusting Tally wall building element values.");
    let registry = build_registry(table, &WALL_SPECS)?;

    for family in ["rt_fn_ext", "rt_fn_rainscreen", "rt_fn_parapet", "rt_fn_soffit", "rt_fn_enc"] {
        and_where(
            table,
            &registry,
            REVIT_BUILDING_ELEMENT,
            &["rt_c_wall", family],
            RevitBuildingCategory::Enclosure.as_str(),
        )?;
    }
    for family in ["rt_fn_int", "rt_fn_partition"] {
        and_where(
            table,
            &registry,
            REVIT_BUILDING_ELEMENT,
            &["rt_c_wall", family],
            RevitBuildingCategory::Interiors.as_str(),
        )?;
    }
    info!("End adjusting Tally wall building element values.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(headers: &[&str], rows: Vec<Vec<Value>>) -> Table {
        let mut t = Table::new(headers.iter().map(|s| s.to_string()).collect());
        for row in rows {
            t.push_row(row).unwrap();
        }
        t
    }

    #[test]
    fn test_clean_scaffolds_missing_columns() {
        let mut t = raw_table(&["Material Name"], vec![vec![Value::str("Concrete")]]);
        clean(&mut t, "proj_001").unwrap();

        assert_eq!(t.headers()[0], CLF_MODEL_ID);
        assert_eq!(t.value(0, CLF_MODEL_ID).unwrap(), &Value::str("proj_001"));
        assert_eq!(t.value(0, TOOL).unwrap(), &Value::str("TallyLCA"));
        assert!(t.value(0, CLF_OMNI).unwrap().is_null());
        assert_eq!(
            t.value(0, REVIT_BUILDING_ELEMENT).unwrap(),
            &Value::str(NOT_INCLUDED)
        );
        assert_eq!(
            t.value(0, FILE_NAME_BEFORE_MERGE).unwrap(),
            &Value::str(NOT_A_MERGED_FILE)
        );
        assert_eq!(t.value(0, MQ_1).unwrap(), &Value::str("Other"));
        assert_eq!(t.value(0, MQ_2).unwrap(), &Value::str("Other"));
    }

    #[test]
    fn test_clean_remaps_legacy_omni_labels() {
        let mut t = raw_table(
            &[CLF_OMNI],
            vec![
                vec![Value::str("Shell - Substructure")],
                vec![Value::str("Shell - Enclosure")],
                vec![Value::str("Interiors - Finishes")],
            ],
        );
        clean(&mut t, "proj_002").unwrap();

        assert_eq!(t.value(0, CLF_OMNI).unwrap(), &Value::str("Substructure"));
        assert_eq!(
            t.value(1, CLF_OMNI).unwrap(),
            &Value::str("Shell - Exterior Enclosure")
        );
        assert_eq!(
            t.value(2, CLF_OMNI).unwrap(),
            &Value::str("Interiors - Finishes")
        );
    }

    #[test]
    fn test_adjust_walls_partition_overrides_exterior() {
        let mut t = raw_table(
            &[REVIT_CATEGORY, REVIT_FAMILY_NAME, REVIT_BUILDING_ELEMENT],
            vec![
                vec![
                    Value::str("Walls"),
                    Value::str("Ext. partition wall"),
                    Value::str(NOT_INCLUDED),
                ],
                vec![
                    Value::str("Walls"),
                    Value::str("Exterior brick veneer"),
                    Value::str(NOT_INCLUDED),
                ],
                vec![
                    Value::str("Floors"),
                    Value::str("Exterior deck"),
                    Value::str(NOT_INCLUDED),
                ],
            ],
        );
        adjust_walls(&mut t).unwrap();

        assert_eq!(
            t.value(0, REVIT_BUILDING_ELEMENT).unwrap(),
            &Value::str("Interiors")
        );
        assert_eq!(
            t.value(1, REVIT_BUILDING_ELEMENT).unwrap(),
            &Value::str("Enclosure")
        );
        assert_eq!(
            t.value(2, REVIT_BUILDING_ELEMENT).unwrap(),
            &Value::str(NOT_INCLUDED)
        );
    }
}
