//! Predicate table for the refined element pass.
//!
//! Unlike the element and material tables, every pattern here matches a value
//! the pipeline itself wrote in an earlier pass, so the specs are built from
//! the taxonomy enums rather than from literals.

use crate::classify::registry::{build_registry, p, Match, PredicateSpec, Registry};
use crate::constants::{CLF_OMNI, MQ_1, MQ_2};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::{ElementCategory, MaterialQuantityOne, MaterialQuantityTwo};

pub fn registry(table: &Table) -> Result<Registry> {
    let specs = specs();
    build_registry(table, &specs)
}

fn specs() -> Vec<PredicateSpec> {
    vec![
        p(
            "acous_ceilings_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AcousticCeilings.as_str()),
        ),
        p(
            "vapor_barrier_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AirVapor.as_str()),
        ),
        p("cladding_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Cladding.as_str())),
        p("floor_tile_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Floor.as_str())),
        p(
            "insulation_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::Insulation.as_str()),
        ),
        p("conc_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Concrete.as_str())),
        p("masonry_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Masonry.as_str())),
        p("door_mq_one", MQ_1, Match::Full(MaterialQuantityOne::DoorFrame.as_str())),
        p("glazing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Glazing.as_str())),
        p("roofing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Roof.as_str())),
        p(
            "windows_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::WindowFrame.as_str()),
        ),
        p(
            "raised_access_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::RaisedAcessFloor.as_str()),
        ),
        p("clt_mq_two", MQ_2, Match::Full(MaterialQuantityTwo::Clt.as_str())),
        p("glt_mq_two", MQ_2, Match::Full(MaterialQuantityTwo::Glt.as_str())),
        p(
            "wood_i_joist_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::WoodIJoist.as_str()),
        ),
        p(
            "heavy_timber_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::HeavyTimber.as_str()),
        ),
        p(
            "hot_rolled_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::HotRolled.as_str()),
        ),
        p("deck_mq_two", MQ_2, Match::Full(MaterialQuantityTwo::Deck.as_str())),
        p(
            "gypsum_board_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::IntGypsum.as_str()),
        ),
        p("ready_mix_lw_mq_two", MQ_2, Match::Contains("Ready mix LW")),
        p(
            "wood_door_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::WoodDoor.as_str()),
        ),
        p(
            "wood_door_frame_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::WoodDoorFrame.as_str()),
        ),
        p(
            "superstructure_cat_ele_one",
            CLF_OMNI,
            Match::Full(ElementCategory::Superstructure.as_str()),
        ),
        p(
            "finishes_cat_ele_one",
            CLF_OMNI,
            Match::Full(ElementCategory::InteriorFinishes.as_str()),
        ),
        p(
            "unknown_cat_ele_one",
            CLF_OMNI,
            Match::Full(ElementCategory::Unknown.as_str()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn mapped_table() -> Table {
        let mut t = Table::new(vec![CLF_OMNI.to_string(), MQ_1.to_string(), MQ_2.to_string()]);
        t.push_row(vec![
            Value::str("Unknown"),
            Value::str("Concrete"),
            Value::str("Ready mix LW, 3000 psi"),
        ])
        .unwrap();
        t.push_row(vec![
            Value::str("Shell - Superstructure"),
            Value::str("Window Frames"),
            Value::str("Aluminum window"),
        ])
        .unwrap();
        t
    }

    #[test]
    fn test_registry_matches_mapped_values() {
        let registry = registry(&mapped_table()).unwrap();
        assert_eq!(registry.get("unknown_cat_ele_one").unwrap(), &vec![true, false]);
        assert_eq!(registry.get("conc_mq_one").unwrap(), &vec![true, false]);
        assert_eq!(registry.get("ready_mix_lw_mq_two").unwrap(), &vec![true, false]);
        assert_eq!(registry.get("windows_mq_one").unwrap(), &vec![false, true]);
        assert_eq!(
            registry.get("superstructure_cat_ele_one").unwrap(),
            &vec![false, true]
        );
    }
}
