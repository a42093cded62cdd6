//! Normalization for raw One Click exports.

use crate::classify::registry::{eval_predicate, Mask, Match};
use crate::constants::{
    CLF_MODEL_ID, CLF_OMNI, CSI_MASTERFORMAT, DESIGN_NAME, FILE_NAME_BEFORE_MERGE, MQ_1, MQ_2,
    NAME, NOT_A_MERGED_FILE, NOT_INCLUDED, NO_DESIGN_OPTIONS, OMNICLASS, ONECLICK_IMPACT_COLUMNS,
    QUESTION, RESOURCE_TYPE, SECTION, TOOL,
};
use crate::error::Result;
use crate::table::{Table, Value};
use crate::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo, Tool};
use tracing::info;

/// Brings a raw One Click export up to the column contract the mapping
/// passes assume. Sheet banner rows carry no section, so they are dropped
/// here; a missing impact column is a malformed export and fails the file.
pub fn clean(table: &mut Table, stem: &str) -> Result<()> {
    info!("Begin cleaning One Click table.");
    table.insert_id_column(CLF_MODEL_ID, Value::str(stem));
    table.set_column(TOOL, Value::str(Tool::OneClick.as_str()));

    let banner = eval_predicate(table, SECTION, &Match::IsNull)?;
    let keep: Vec<bool> = banner.iter().map(|hit| !hit).collect();
    table.retain_rows(&keep);

    for column in ONECLICK_IMPACT_COLUMNS {
        let dashes = eval_predicate(table, column, &Match::Full("-"))?;
        table.set_where(column, &dashes, Value::Num(0.0));
    }

    if table.has_column(CLF_OMNI) {
        table.replace_values(CLF_OMNI, "Shell - Substructure", "Substructure");
        table.replace_values(CLF_OMNI, "Shell - Enclosure", "Shell - Exterior Enclosure");
    } else {
        table.set_column(CLF_OMNI, Value::Null);
    }

    if !table.has_column(OMNICLASS) {
        table.set_column(OMNICLASS, Value::str(NOT_INCLUDED));
    }
    if !table.has_column(CSI_MASTERFORMAT) {
        table.set_column(CSI_MASTERFORMAT, Value::Num(0.0));
    }
    if !table.has_column(QUESTION) {
        table.set_column(QUESTION, Value::str(NOT_INCLUDED));
    }
    if !table.has_column(FILE_NAME_BEFORE_MERGE) {
        table.set_column(FILE_NAME_BEFORE_MERGE, Value::str(NOT_A_MERGED_FILE));
    }
    if !table.has_column(DESIGN_NAME) {
        table.set_column(DESIGN_NAME, Value::str(NO_DESIGN_OPTIONS));
    }

    table.set_column(MQ_1, Value::str(MaterialQuantityOne::Other.as_str()));
    table.set_column(MQ_2, Value::str(MaterialQuantityTwo::Other.as_str()));

    adjust_csi_division(table)?;
    info!("End cleaning One Click table.");
    Ok(())
}

/// Moves entries filed under the wrong masterformat division before the
/// element rules read it. All masks are computed up front, so a row moved
/// out of a division is not picked up again by a later rewrite.
fn adjust_csi_division(table: &mut Table) -> Result<()> {
    info!("Begin adjusting One Click csi division values.");
    let csi_eight = eval_predicate(table, CSI_MASTERFORMAT, &Match::Equals(8.0))?;
    let csi_ten = eval_predicate(table, CSI_MASTERFORMAT, &Match::Equals(10.0))?;
    let csi_thirty_one = eval_predicate(table, CSI_MASTERFORMAT, &Match::Equals(31.0))?;

    let nat_stone = eval_predicate(
        table,
        RESOURCE_TYPE,
        &Match::Contains("natural stone|Natural stone|Natural Stone"),
    )?;
    let bcr = eval_predicate(table, NAME, &Match::Contains("BCR"))?;
    let door = eval_predicate(table, NAME, &Match::Contains("door|Door|DOOR"))?;
    let lock = eval_predicate(table, NAME, &Match::Contains("lock|Lock|LOCK"))?;
    let sanitary = eval_predicate(table, NAME, &Match::Contains("sanitary|Sanitary|SANITARY"))?;
    let window_frame = eval_predicate(
        table,
        NAME,
        &Match::Contains("window frame|Window frame|Window Frame"),
    )?;
    let aggregate = eval_predicate(table, NAME, &Match::Contains("aggregate|Aggregate|AGGREGATE"))?;
    let sand = eval_predicate(table, NAME, &Match::Contains("sand|Sand|SAND"))?;
    let dock_leveler = eval_predicate(
        table,
        NAME,
        &Match::Contains("telescopic dock leveler|Telescopic dock leveler|Telescopic Dock Leveler"),
    )?;

    let rewrites: [(&Mask, &Mask, f64); 9] = [
        (&csi_thirty_one, &nat_stone, 4.0),
        (&csi_ten, &bcr, 3.0),
        (&csi_ten, &door, 8.0),
        (&csi_ten, &lock, 8.0),
        (&csi_ten, &sanitary, 22.0),
        (&csi_ten, &window_frame, 8.0),
        (&csi_thirty_one, &aggregate, 3.0),
        (&csi_thirty_one, &sand, 3.0),
        (&csi_eight, &dock_leveler, 12.0),
    ];
    for (division, keyword, value) in rewrites {
        let mask: Mask = division.iter().zip(keyword).map(|(d, k)| *d && *k).collect();
        table.set_where(CSI_MASTERFORMAT, &mask, Value::Num(value));
    }
    info!("End adjusting One Click csi division values.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_headers() -> Vec<String> {
        let mut headers = vec![
            SECTION.to_string(),
            RESOURCE_TYPE.to_string(),
            NAME.to_string(),
            CSI_MASTERFORMAT.to_string(),
        ];
        headers.extend(ONECLICK_IMPACT_COLUMNS.iter().map(|s| s.to_string()));
        headers
    }

    fn raw_row(section: Value, rtype: &str, name: &str, csi: f64, impact: Value) -> Vec<Value> {
        let mut row = vec![section, Value::str(rtype), Value::str(name), Value::Num(csi)];
        for _ in ONECLICK_IMPACT_COLUMNS {
            row.push(impact.clone());
        }
        row
    }

    #[test]
    fn test_clean_drops_banner_rows_and_fills_defaults() {
        let mut t = Table::new(raw_headers());
        t.push_row(raw_row(Value::Null, "", "Report header", 0.0, Value::str("-")))
            .unwrap();
        t.push_row(raw_row(
            Value::str("Foundations"),
            "Ready-mix",
            "Footing concrete",
            3.0,
            Value::str("-"),
        ))
        .unwrap();

        clean(&mut t, "oc_014").unwrap();

        assert_eq!(t.len(), 1);
        assert_eq!(t.value(0, CLF_MODEL_ID).unwrap(), &Value::str("oc_014"));
        assert_eq!(t.value(0, TOOL).unwrap(), &Value::str("One Click LCA"));
        assert_eq!(t.value(0, OMNICLASS).unwrap(), &Value::str(NOT_INCLUDED));
        assert_eq!(t.value(0, QUESTION).unwrap(), &Value::str(NOT_INCLUDED));
        assert_eq!(t.value(0, DESIGN_NAME).unwrap(), &Value::str(NO_DESIGN_OPTIONS));
        assert_eq!(t.value(0, MQ_1).unwrap(), &Value::str("Other"));
        assert_eq!(t.value(0, MQ_2).unwrap(), &Value::str("Other"));
        for column in ONECLICK_IMPACT_COLUMNS {
            assert_eq!(t.value(0, column).unwrap(), &Value::Num(0.0));
        }
    }

    #[test]
    fn test_clean_requires_every_impact_column() {
        let mut headers = raw_headers();
        headers.retain(|h| h != "Global warming kg CO₂e");
        let mut t = Table::new(headers);
        let mut row = raw_row(Value::str("Floors"), "", "", 0.0, Value::Num(1.0));
        row.pop();
        t.push_row(row).unwrap();

        assert!(clean(&mut t, "oc_015").is_err());
    }

    #[test]
    fn test_adjust_csi_moves_division_ten_doors() {
        let mut t = Table::new(raw_headers());
        t.push_row(raw_row(
            Value::str("Doors"),
            "Doors",
            "Wooden door, lockable",
            10.0,
            Value::Num(1.0),
        ))
        .unwrap();
        t.push_row(raw_row(
            Value::str("Sitework"),
            "Crushed rock",
            "sand and aggregate mix",
            31.0,
            Value::Num(1.0),
        ))
        .unwrap();
        t.push_row(raw_row(
            Value::str("Fixtures"),
            "Fixtures",
            "sanitary ware",
            10.0,
            Value::Num(1.0),
        ))
        .unwrap();

        clean(&mut t, "oc_016").unwrap();

        assert_eq!(t.value(0, CSI_MASTERFORMAT).unwrap(), &Value::Num(8.0));
        assert_eq!(t.value(1, CSI_MASTERFORMAT).unwrap(), &Value::Num(3.0));
        assert_eq!(t.value(2, CSI_MASTERFORMAT).unwrap(), &Value::Num(22.0));
    }
}
