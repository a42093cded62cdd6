//! Second-pass element corrections driven by the mapped material columns.
//!
//! Runs after both element and material mapping, so its predicates look at
//! values this pipeline wrote rather than at the raw export.

use crate::classify::registry::Registry;
use crate::classify::rule::{and_or_where, and_where, or_where, write_where, Rule};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::ElementCategory;

pub struct RefinedElementFilter(pub String);

impl Rule for RefinedElementFilter {
    fn name(&self) -> &'static str {
        "RefinedElementFilter"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        write_where(
            table,
            registry,
            t,
            "acous_ceilings_mq_one",
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        write_where(
            table,
            registry,
            t,
            "vapor_barrier_mq_one",
            ElementCategory::Enclosure.as_str(),
        )?;
        write_where(table, registry, t, "cladding_mq_one", ElementCategory::Enclosure.as_str())?;
        write_where(
            table,
            registry,
            t,
            "floor_tile_mq_one",
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        write_where(
            table,
            registry,
            t,
            "raised_access_mq_two",
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        write_where(table, registry, t, "insulation_mq_one", ElementCategory::Enclosure.as_str())?;
        or_where(
            table,
            registry,
            t,
            &["clt_mq_two", "glt_mq_two", "wood_i_joist_mq_two", "heavy_timber_mq_two"],
            ElementCategory::Superstructure.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &["hot_rolled_mq_two", "deck_mq_two", "wood_i_joist_mq_two", "heavy_timber_mq_two"],
            ElementCategory::Superstructure.as_str(),
        )?;
        write_where(
            table,
            registry,
            t,
            "ready_mix_lw_mq_two",
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["unknown_cat_ele_one"],
            &["conc_mq_one", "masonry_mq_one"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["unknown_cat_ele_one", "gypsum_board_mq_two"],
            ElementCategory::InteriorFinishes.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["unknown_cat_ele_one"],
            &["door_mq_one", "glazing_mq_one", "roofing_mq_one"],
            ElementCategory::Superstructure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["door_mq_one"],
            &["superstructure_cat_ele_one", "finishes_cat_ele_one"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["wood_door_mq_two"],
            &["superstructure_cat_ele_one", "finishes_cat_ele_one"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["wood_door_frame_mq_two"],
            &["superstructure_cat_ele_one", "finishes_cat_ele_one"],
            ElementCategory::InteriorConstruction.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["windows_mq_one", "superstructure_cat_ele_one"],
            ElementCategory::Enclosure.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["glazing_mq_one", "superstructure_cat_ele_one"],
            ElementCategory::Enclosure.as_str(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CLF_OMNI, MQ_1, MQ_2};
    use crate::predicates::refined;
    use crate::table::Value;
    use crate::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo};

    fn mapped_table(omni: &str, mq_one: &str, mq_two: &str) -> Table {
        let mut t = Table::new(vec![CLF_OMNI.to_string(), MQ_1.to_string(), MQ_2.to_string()]);
        t.push_row(vec![Value::str(omni), Value::str(mq_one), Value::str(mq_two)])
            .unwrap();
        t
    }

    #[test]
    fn test_mass_timber_rows_move_to_superstructure() {
        let mut t = mapped_table(
            ElementCategory::Unknown.as_str(),
            MaterialQuantityOne::Wood.as_str(),
            MaterialQuantityTwo::Clt.as_str(),
        );
        let registry = refined::registry(&t).unwrap();
        RefinedElementFilter(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(
            t.value(0, CLF_OMNI).unwrap().as_str(),
            Some(ElementCategory::Superstructure.as_str())
        );
    }

    #[test]
    fn test_wood_door_on_superstructure_becomes_interior_construction() {
        // The door write to enclosure lands first, then the wood door write
        // overrules it. Both read the element category frozen at build time.
        let mut t = mapped_table(
            ElementCategory::Superstructure.as_str(),
            MaterialQuantityOne::DoorFrame.as_str(),
            MaterialQuantityTwo::WoodDoor.as_str(),
        );
        let registry = refined::registry(&t).unwrap();
        RefinedElementFilter(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(
            t.value(0, CLF_OMNI).unwrap().as_str(),
            Some(ElementCategory::InteriorConstruction.as_str())
        );
    }

    #[test]
    fn test_glazing_stays_put_without_superstructure_category() {
        let mut t = mapped_table(
            ElementCategory::Mep.as_str(),
            MaterialQuantityOne::Glazing.as_str(),
            MaterialQuantityTwo::Other.as_str(),
        );
        let registry = refined::registry(&t).unwrap();
        RefinedElementFilter(CLF_OMNI.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(
            t.value(0, CLF_OMNI).unwrap().as_str(),
            Some(ElementCategory::Mep.as_str())
        );
    }
}
