//! Element rules for Tally exports, one per Revit category.
//!
//! Rows start with a null CLF Omni value, so every rule is guarded by
//! `ty_clf_omni_na` plus its category predicate. Later writes within a rule
//! intentionally overwrite earlier ones; order is load-bearing.

use crate::classify::registry::Registry;
use crate::classify::rule::{and_or_where, and_where, Rule};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::ElementCategory;

pub struct Ceilings(pub String);

impl Rule for Ceilings {
    fn name(&self) -> &'static str {
        "Ceilings"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_09", "ty_ec_steel"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_08"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_07"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_06"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_06"],
            &["ty_en_wood_framing", "ty_en_part_board", "ty_en_ply_int", "ty_en_mdf"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_06"],
            &["ty_en_ply_ext", "ty_en_wood_framing_w_ins"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_05"],
            &["ty_ec_alum", "ty_ec_ceil_sys"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_05", "ty_ec_steel"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings", "ty_ed_05", "ty_ec_steel"],
            &["ty_en_steel_plate", "ty_en_steel_sheet"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_ceilings"],
            &["ty_ed_04", "ty_ed_03"],
            ElementCategory::Superstructure.as_str(),
        )?;
        Ok(())
    }
}

pub struct CurtainWallPanels(pub String);

impl Rule for CurtainWallPanels {
    fn name(&self) -> &'static str {
        "CurtainWallPanels"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels", "rt_be_enc"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels", "rt_be_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels"],
            &[
                "ty_ed_05",
                "ty_ed_07",
                "ty_ed_08",
                "rt_fn_louver",
                "rt_fn_shade",
                "rt_fn_spandrel",
                "rt_fn_glaze",
            ],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels", "rt_fn_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_panels", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        Ok(())
    }
}

pub struct CurtainWallMullions(pub String);

impl Rule for CurtainWallMullions {
    fn name(&self) -> &'static str {
        "CurtainWallMullions"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_mull"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_mull"],
            &[
                "ty_ed_05",
                "ty_ed_07",
                "ty_ed_08",
                "rt_be_enc",
                "rt_fn_louver",
                "rt_fn_shade",
                "rt_fn_spandrel",
                "rt_fn_glaze",
            ],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_mull", "rt_be_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_cw_mull", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        Ok(())
    }
}

pub struct Doors(pub String);

impl Rule for Doors {
    fn name(&self) -> &'static str {
        "Doors"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door", "rt_be_enc"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door", "rt_be_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door"],
            &["ty_en_igu", "ty_en_ext"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door"],
            &["ty_en_int", "ty_en_toilet"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_door", "ty_ed_06", "ty_en_orn_wood"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        Ok(())
    }
}

pub struct Floors(pub String);

impl Rule for Floors {
    fn name(&self) -> &'static str {
        "Floors"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor"],
            &["rt_be_sup", "rt_fn_slab", "rt_fn_pt", "rt_fn_topping"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "rt_be_sub"],
            ElementCategory::Substructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_03"],
            &[
                "rt_fn_fdn",
                "rt_fn_ftg",
                "rt_fn_bsmnt",
                "rt_fn_stem",
                "rt_fn_curb",
                "rt_fn_pile",
                "rt_fn_pier",
                "rt_fn_pit",
                "rt_fn_sog",
            ],
            ElementCategory::Substructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_07"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor"],
            &["ty_ed_06", "rt_fn_metal_deck"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_06"],
            &["ty_en_orn_wood", "ty_mg_coating"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_06", "ty_mg_insulation"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_03"],
            &["ty_en_cip_custom", "rt_fn_paver"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_floor", "ty_ed_05", "rt_fn_grate"],
            ElementCategory::Superstructure.as_str(),
        )?;
        Ok(())
    }
}

pub struct Roofs(pub String);

impl Rule for Roofs {
    fn name(&self) -> &'static str {
        "Roofs"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof", "ty_ed_09", "ty_mn_fib"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof"],
            &["ty_ed_07", "ty_ed_05"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof"],
            &["ty_ed_06", "ty_ed_03"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof", "ty_ed_05"],
            &["ty_ec_alum", "ty_ec_steel"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_roof", "ty_ed_06"],
            &["ty_mg_insulation", "ty_en_fib_ins"],
            ElementCategory::Enclosure.as_str(),
        )?;
        Ok(())
    }
}

pub struct Railings(pub String);

impl Rule for Railings {
    fn name(&self) -> &'static str {
        "Railings"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_railing"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_railing", "rt_be_int"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        Ok(())
    }
}

pub struct Stairs(pub String);

impl Rule for Stairs {
    fn name(&self) -> &'static str {
        "Stairs"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["ty_clf_omni_na", "rt_c_stairs"],
            ElementCategory::Superstructure.as_str(),
        )
    }
}

pub struct StructuralColumns(pub String);

impl Rule for StructuralColumns {
    fn name(&self) -> &'static str {
        "StructuralColumns"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_col"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_col", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_col", "ty_ed_07"],
            ElementCategory::Enclosure.as_str(),
        )?;
        Ok(())
    }
}

pub struct StructuralConnections(pub String);

impl Rule for StructuralConnections {
    fn name(&self) -> &'static str {
        "StructuralConnections"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["ty_clf_omni_na", "rt_c_str_con"],
            ElementCategory::Superstructure.as_str(),
        )
    }
}

pub struct StructuralFoundations(pub String);

impl Rule for StructuralFoundations {
    fn name(&self) -> &'static str {
        "StructuralFoundations"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["ty_clf_omni_na", "rt_c_str_fdn"],
            ElementCategory::Substructure.as_str(),
        )
    }
}

pub struct StructuralFraming(pub String);

impl Rule for StructuralFraming {
    fn name(&self) -> &'static str {
        "StructuralFraming"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_frm"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_frm", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_str_frm", "ty_ed_07"],
            ElementCategory::Enclosure.as_str(),
        )?;
        Ok(())
    }
}

/// The walls rule carries the longest overwrite chain of the Tally set; the
/// interior sub-chain at the end narrows division hits family by family.
pub struct Walls(pub String);

impl Rule for Walls {
    fn name(&self) -> &'static str {
        "Walls"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall"],
            ElementCategory::Unknown.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_sup"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_sub"],
            ElementCategory::Substructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_enc"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall"],
            &["rt_fn_shear", "ty_ed_03"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "ty_ed_03"],
            &[
                "rt_fn_fdn",
                "rt_fn_ftg",
                "rt_fn_bsmnt",
                "rt_fn_below",
                "rt_fn_retain",
                "rt_fn_stem",
                "rt_fn_site",
                "rt_fn_cistern",
                "rt_fn_battered",
                "rt_fn_caisson",
                "rt_fn_pile",
                "rt_fn_pier",
                "rt_fn_pit",
                "rt_fn_well",
            ],
            ElementCategory::Substructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall"],
            &["rt_fn_shaft", "rt_fn_p_naming"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall"],
            &["rt_fn_ex", "rt_fn_wall_w", "ty_ed_08", "ty_ed_07"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "ty_ed_09"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_04"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_05"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_05", "ty_ec_steel"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_06"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_06"],
            &[
                "ty_en_ply_lvl",
                "ty_en_ply_int",
                "ty_en_ply_ext",
                "ty_en_ply_osb",
                "ty_en_wood_framing",
                "ty_en_wood_framing_w_ins",
            ],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int"],
            &["ty_ed_07", "ty_ed_08"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["ty_clf_omni_na", "rt_c_wall", "rt_be_int", "ty_ed_07", "ty_ec_cladding"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        Ok(())
    }
}

pub struct Windows(pub String);

impl Rule for Windows {
    fn name(&self) -> &'static str {
        "Windows"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["ty_clf_omni_na", "rt_c_window"],
            ElementCategory::Enclosure.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLF_OMNI;
    use crate::predicates::elements;
    use crate::table::Value;

    fn wall_table(division: &str, family: &str) -> Table {
        let mut t = Table::new(vec![
            CLF_OMNI.to_string(),
            "Revit category".to_string(),
            "Revit building element".to_string(),
            "Revit family name".to_string(),
            "Tally Entry Division".to_string(),
            "Tally Entry Category".to_string(),
            "Tally Entry Name".to_string(),
            "Material Group".to_string(),
            "Material Name".to_string(),
        ]);
        t.push_row(vec![
            Value::Null,
            Value::str("Walls"),
            Value::str("Interiors"),
            Value::str(family),
            Value::str(division),
            Value::str("Cladding"),
            Value::str("Generic wall"),
            Value::str("Masonry"),
            Value::str("Brick"),
        ])
        .unwrap();
        t
    }

    fn omni(table: &Table) -> &str {
        table.value(0, CLF_OMNI).unwrap().as_str().unwrap()
    }

    #[test]
    fn test_interior_finish_wall_wins_over_enclosure_hit() {
        // "09 - Finishes" lands after the ex-prefix alternation fires, so the
        // finishes write is the one that sticks.
        let mut t = wall_table("09 - Finishes", "Ext Wall Finish");
        let registry = elements::tally_registry(&t).unwrap();
        Walls(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(omni(&t), ElementCategory::InteriorFinishes.as_str());
    }

    #[test]
    fn test_shear_wall_maps_to_superstructure() {
        let mut t = wall_table("04 - Masonry", "Shear Wall 12in");
        let registry = elements::tally_registry(&t).unwrap();
        Walls(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        // rt_be_int + 04 comes later in the chain and overwrites the shear hit
        assert_eq!(omni(&t), ElementCategory::InteriorConstruction.as_str());
    }

    #[test]
    fn test_windows_always_enclosure() {
        let mut t = wall_table("08 - Openings and Glazing", "Fixed");
        t.set_column("Revit category", Value::str("Windows"));
        let registry = elements::tally_registry(&t).unwrap();
        Windows(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(omni(&t), ElementCategory::Enclosure.as_str());
    }

    #[test]
    fn test_mapped_rows_left_alone() {
        let mut t = wall_table("03 - Concrete", "Foundation Wall");
        t.set_column(CLF_OMNI, Value::str("Substructure"));
        let registry = elements::tally_registry(&t).unwrap();
        Walls(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(omni(&t), "Substructure");
    }
}
