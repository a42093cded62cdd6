//! Material rules for Tally exports.
//!
//! Families run in five sweeps: MQ_1 by family, MQ_2 subtypes, MQ_1 catch-up
//! for rows still `Other`, MQ_2 catch-up, and a final sweep that renames the
//! leftovers. Each sweep runs against a registry built at its start, so a
//! sweep reads the values the previous one wrote; within a sweep the masks
//! never move.

use crate::classify::registry::Registry;
use crate::classify::rule::{and_or_where, and_where, or_where, write_where, Rule};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo};

pub struct ConcreteMaterialQuantityOne(pub String);

impl Rule for ConcreteMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "ConcreteMaterialQuantityOne"
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
            &["conc_cat_mat_one", "conc_cat_mat_two"],
            MaterialQuantityOne::Concrete.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["conc_cat_mat_two"],
            &[
                "self_lvl_under_cat_mat_three",
                "gfrc_cat_mat_three",
                "str_conc_cat_mat_three",
                "lw_conc_cat_mat_three",
            ],
            MaterialQuantityOne::Concrete.as_str(),
        )?;
        Ok(())
    }
}

pub struct SteelMaterialQuantityOne(pub String);

impl Rule for SteelMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "SteelMaterialQuantityOne"
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
            &["steel_cat_ele_four", "metal_cat_mat_two"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["stair_cat_ele_four", "metals_cat_mat_one", "metal_cat_mat_two"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &["gal_steel_support_cat_mat_three", "chromium_cat_mat_three"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &[
                "stair_cat_ele_four",
                "metals_cat_mat_one",
                "metal_cat_mat_two",
                "aluminum_cat_mat_three",
            ],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["metal_cat_mat_two", "reinf_rod_cat_mat_three"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["metal_cat_mat_two"],
            &["reinf_cmc_cat_mat_three", "alt_reinf_cmc_cat_mat_three"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["metal_cat_mat_two"],
            &["reinf_csri_cat_mat_three", "alt_reinf_csri_cat_mat_three"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["metal_cat_mat_two"],
            &["reinf_weld_w_cat_mat_three", "reinf_woven_w_cat_mat_three"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_cable_cat_mat_three", "pr_conc_bm_cat_mat_four"],
            MaterialQuantityOne::Steel.as_str(),
        )?;
        Ok(())
    }
}

pub struct MasonryMaterialQuantityOne(pub String);

impl Rule for MasonryMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "MasonryMaterialQuantityOne"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        write_where(table, registry, t, "stone_cat_mat_two", MaterialQuantityOne::Masonry.as_str())?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_cat_mat_one"],
            &["conc_cat_mat_two", "masonry_cat_mat_two"],
            MaterialQuantityOne::Masonry.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityOne::Masonry.as_str(),
        )?;
        Ok(())
    }
}

pub struct AluminumMaterialQuantityOne(pub String);

impl Rule for AluminumMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "AluminumMaterialQuantityOne"
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
            "aluminum_cat_mat_three",
            MaterialQuantityOne::Aluminum.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["aluminum_cat_mat_three"],
            &["alum_faced_comp_cat_mat_three", "siding_cat_mat_three", "door_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["aluminum_cat_mat_three"],
            &["ins_metal_cat_mat_four", "metal_wall_cat_mat_four"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["aluminum_cat_mat_four"],
            &["ceil_sys_cat_ele_four", "door_cat_ele_four", "window_frame_cat_ele_four"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["aluminum_cat_mat_three", "extru_cat_mat_three"],
            MaterialQuantityOne::Aluminum.as_str(),
        )?;
        write_where(
            table,
            registry,
            t,
            "alum_mull_sys_cat_mat_five",
            MaterialQuantityOne::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct WoodMaterialQuantityOne(pub String);

impl Rule for WoodMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "WoodMaterialQuantityOne"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        write_where(
            table,
            registry,
            &self.0,
            "wood_cat_mat_two",
            MaterialQuantityOne::Wood.as_str(),
        )
    }
}

pub struct GlazingMaterialQuantityOne(pub String);

impl Rule for GlazingMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "GlazingMaterialQuantityOne"
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
            "glazing_cat_mat_two",
            MaterialQuantityOne::Glazing.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["glazing_cat_mat_two", "door_cat_ele_four"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["spandrel_cat_mat_two", "glass_cat_mat_three"],
            MaterialQuantityOne::Glazing.as_str(),
        )?;
        Ok(())
    }
}

pub struct RoofMaterialQuantityOne(pub String);

impl Rule for RoofMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "RoofMaterialQuantityOne"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        write_where(table, registry, t, "roof_mem_cat_mat_two", MaterialQuantityOne::Roof.as_str())?;
        or_where(
            table,
            registry,
            t,
            &[
                "roof_cat_mat_three",
                "roof_start_cat_mat_three",
                "roof_cat_mat_four",
                "roof_start_cat_mat_four",
                "roofing_cat_mat_three",
                "roofing_start_cat_mat_three",
                "sbs_cat_mat_three",
            ],
            MaterialQuantityOne::Roof.as_str(),
        )?;
        // Fireproofing, insulation, and floor tile carry their own families,
        // so a roof keyword on those rows goes back to Other.
        for roof_hit in [
            "roof_cat_mat_three",
            "roof_start_cat_mat_three",
            "roofing_cat_mat_three",
            "roofing_start_cat_mat_three",
            "sbs_cat_mat_three",
        ] {
            and_or_where(
                table,
                registry,
                t,
                &[roof_hit],
                &["fireproof_cat_mat_two", "insulation_cat_mat_two", "floor_tile_cat_mat_two"],
                MaterialQuantityOne::Other.as_str(),
            )?;
        }
        and_or_where(
            table,
            registry,
            t,
            &["insul_cat_mat_four"],
            &["roof_cat_mat_four", "roof_start_cat_mat_four"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct InsulationMaterialQuantityOne(pub String);

impl Rule for InsulationMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "InsulationMaterialQuantityOne"
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
            "insulation_cat_mat_two",
            MaterialQuantityOne::Insulation.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["insulation_cat_mat_two"],
            &["gyp_board_cat_mat_four", "ins_metal_cat_mat_four"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct GypsumMaterialQuantityOne(pub String);

impl Rule for GypsumMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "GypsumMaterialQuantityOne"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        write_where(table, registry, t, "plaster_cat_mat_two", MaterialQuantityOne::Gypsum.as_str())?;
        and_where(
            table,
            registry,
            t,
            &["insulation_cat_mat_two", "foil_facing_cat_mat_three", "gyp_board_cat_mat_four"],
            MaterialQuantityOne::Gypsum.as_str(),
        )?;
        Ok(())
    }
}

pub struct FireproofMaterialQuantityOne(pub String);

impl Rule for FireproofMaterialQuantityOne {
    fn name(&self) -> &'static str {
        "FireproofMaterialQuantityOne"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        write_where(
            table,
            registry,
            &self.0,
            "fireproof_cat_mat_two",
            MaterialQuantityOne::Fireproof.as_str(),
        )
    }
}

pub struct DoorFrameMaterialQuantityOneOther(pub String);

impl Rule for DoorFrameMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "DoorFrameMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one"],
            &["door_cat_mat_two", "opening_hardware_cat_mat_two"],
            MaterialQuantityOne::DoorFrame.as_str(),
        )?;
        // Door entries get claimed regardless of the current family.
        write_where(
            table,
            registry,
            t,
            "door_cat_ele_four",
            MaterialQuantityOne::DoorFrame.as_str(),
        )?;
        Ok(())
    }
}

pub struct WindowFrameMaterialQuantityOneOther(pub String);

impl Rule for WindowFrameMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "WindowFrameMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one"],
            &["window_frame_cat_ele_four", "mullion_cat_ele_four"],
            MaterialQuantityOne::WindowFrame.as_str(),
        )
    }
}

pub struct AcousticCeilingsMaterialQuantityOneOther(pub String);

impl Rule for AcousticCeilingsMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "AcousticCeilingsMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["other_mq_one", "ceil_sys_cat_ele_four"],
            MaterialQuantityOne::AcousticCeilings.as_str(),
        )
    }
}

pub struct SyntheticCompositesMaterialQuantityOneOther(pub String);

impl Rule for SyntheticCompositesMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "SyntheticCompositesMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one"],
            &["composite_cat_mat_two", "plastic_cat_mat_two"],
            MaterialQuantityOne::SynthComp.as_str(),
        )
    }
}

pub struct CladdingMaterialQuantityOneOther(pub String);

impl Rule for CladdingMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "CladdingMaterialQuantityOneOther"
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
            &["other_mq_one", "cladding_cat_mat_two"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "masonry_cat_mat_two", "terracotta_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one"],
            &["ins_metal_cat_mat_four", "metal_wall_cat_mat_four", "metal_roofing_cat_mat_four"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        // Panel fasteners are not cladding quantity.
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "ins_metal_cat_mat_four", "fastener_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "metal_wall_cat_mat_four", "fastener_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "metal_roofing_cat_mat_four", "fastener_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one"],
            &["stucco_cat_mat_three", "alum_faced_comp_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        Ok(())
    }
}

pub struct AdhesivesMaterialQuantityOneOther(pub String);

impl Rule for AdhesivesMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "AdhesivesMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one"],
            &["adhesive_cat_mat_two", "sealant_cat_mat_two"],
            MaterialQuantityOne::AdhesSeal.as_str(),
        )
    }
}

pub struct AirVaporMaterialQuantityOneOther(pub String);

impl Rule for AirVaporMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "AirVaporMaterialQuantityOneOther"
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
            &["other_mq_one", "vapor_barrier_cat_mat_two"],
            MaterialQuantityOne::AirVapor.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one", "vapor_barrier_cat_mat_two"],
            &["roof_cat_mat_three", "roof_start_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct CoatingsMaterialQuantityOneOther(pub String);

impl Rule for CoatingsMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "CoatingsMaterialQuantityOneOther"
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
            &["other_mq_one", "coating_cat_mat_two"],
            MaterialQuantityOne::Coatings.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "paint_cat_mat_three"],
            MaterialQuantityOne::Coatings.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "paint_cat_mat_three", "fireproof_cat_mat_two"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct FloorTileMaterialQuantityOneOther(pub String);

impl Rule for FloorTileMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "FloorTileMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one"],
            &["floor_tile_cat_mat_two", "trim_rubber_cat_mat_three"],
            MaterialQuantityOne::Floor.as_str(),
        )
    }
}

pub struct OtherMetalsMaterialQuantityOneOther(pub String);

impl Rule for OtherMetalsMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "OtherMetalsMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one", "metal_cat_mat_two"],
            &[
                "brass_cat_mat_three",
                "bronze_cat_mat_three",
                "copper_cat_mat_three",
                "titanium_cat_mat_three",
                "zinc_cat_mat_three",
                "fastener_cat_mat_three",
            ],
            MaterialQuantityOne::OthMetals.as_str(),
        )
    }
}

pub struct WallCoveringsMaterialQuantityOneOther(pub String);

impl Rule for WallCoveringsMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "WallCoveringsMaterialQuantityOneOther"
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
            &["other_mq_one", "wall_cover_cat_mat_two"],
            MaterialQuantityOne::WallCoverings.as_str(),
        )?;
        // Stucco wall covers count as cladding.
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "wall_cover_cat_mat_two", "stucco_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        Ok(())
    }
}

pub struct ConcreteMaterialQuantityTwo(pub String);

impl Rule for ConcreteMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "ConcreteMaterialQuantityTwo"
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
            &["conc_mq_one", "cip_cat_ele_four"],
            MaterialQuantityTwo::ReadyMixOther.as_str(),
        )?;
        // Each strength bucket accepts the psi label plus two range spellings.
        let strengths = [
            ("cip_lw_3000_cat_mat_four", MaterialQuantityTwo::ReadyMixLw3),
            ("cip_lw_4000_cat_mat_four", MaterialQuantityTwo::ReadyMixLw4),
            ("cip_lw_5000_cat_mat_four", MaterialQuantityTwo::ReadyMixLw5),
            ("cip_nw_2500_cat_mat_four", MaterialQuantityTwo::ReadyMixNw25),
            ("cip_nw_3000_cat_mat_four", MaterialQuantityTwo::ReadyMixNw3),
            ("cip_nw_4000_cat_mat_four", MaterialQuantityTwo::ReadyMixNw4),
            ("cip_nw_5000_cat_mat_four", MaterialQuantityTwo::ReadyMixNw5),
            ("cip_nw_6000_cat_mat_four", MaterialQuantityTwo::ReadyMixNw6),
            ("cip_nw_8000_cat_mat_four", MaterialQuantityTwo::ReadyMixNw8),
        ];
        for (base, result) in strengths {
            let alt1 = format!("{}_alt1", base);
            let alt2 = format!("{}_alt2", base);
            and_or_where(
                table,
                registry,
                t,
                &["conc_mq_one", "cip_cat_ele_four"],
                &[base, &alt1, &alt2],
                result.as_str(),
            )?;
        }
        and_where(
            table,
            registry,
            t,
            &["conc_mq_one", "conc_cat_mat_two", "precast_cat_ele_four"],
            MaterialQuantityTwo::Precast.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["conc_mq_one", "gfrc_cat_mat_three"],
            MaterialQuantityTwo::Gfrc.as_str(),
        )?;
        Ok(())
    }
}

pub struct SteelMaterialQuantityTwo(pub String);

impl Rule for SteelMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "SteelMaterialQuantityTwo"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_or_where(
            table,
            registry,
            t,
            &["steel_mq_one"],
            &["hot_rolled_cat_mat_five", "hot_rolled_cat_mat_three"],
            MaterialQuantityTwo::HotRolled.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "cold_formed_cat_mat_five", "hss_cat_mat_four"],
            MaterialQuantityTwo::Hss.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "sheet_cat_mat_three"],
            MaterialQuantityTwo::SteelSheet.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "steel_cat_mat_four", "plate_cat_mat_four"],
            MaterialQuantityTwo::Plate.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "steel_cat_mat_four", "plate_cat_mat_four", "quarter_in_cat_mat_five"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "cold_formed_cat_mat_five", "stud_cat_mat_four"],
            MaterialQuantityTwo::ColdFormed.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "cold_formed_cat_mat_five", "deck_cat_mat_four"],
            MaterialQuantityTwo::Deck.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["steel_mq_one"],
            &[
                "reinf_rod_cat_mat_three",
                "reinf_cmc_cat_mat_three",
                "alt_reinf_cmc_cat_mat_three",
                "reinf_csri_cat_mat_three",
                "alt_reinf_csri_cat_mat_three",
                "reinf_weld_w_cat_mat_three",
                "reinf_woven_w_cat_mat_three",
            ],
            MaterialQuantityTwo::Rebar.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "steel_cable_cat_mat_three", "pr_conc_bm_cat_mat_four"],
            MaterialQuantityTwo::Rebar.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "joist_cat_mat_three"],
            MaterialQuantityTwo::OpenWebJoists.as_str(),
        )?;
        Ok(())
    }
}

pub struct MasonryMaterialQuantityTwo(pub String);

impl Rule for MasonryMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "MasonryMaterialQuantityTwo"
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
            &["masonry_mq_one", "cmu_cat_ele_four"],
            MaterialQuantityTwo::Cmu.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "cmu_cat_ele_four"],
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "brick_cat_ele_four"],
            MaterialQuantityTwo::Brick.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "brick_cat_ele_four"],
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one"],
            &["stone_cat_ele_four", "stone_cat_mat_two"],
            MaterialQuantityTwo::Stone.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "stone_cat_ele_four"],
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "stone_cat_mat_two"],
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one"],
            &["mortar_cat_mat_three", "grout_cat_mat_three"],
            MaterialQuantityTwo::Grout.as_str(),
        )?;
        Ok(())
    }
}

pub struct AluminumMaterialQuantityTwo(pub String);

impl Rule for AluminumMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "AluminumMaterialQuantityTwo"
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
            &["alum_mq_one", "extru_cat_mat_three"],
            MaterialQuantityTwo::Extrusion.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["alum_mq_one"],
            &["sheet_cat_mat_three"],
            MaterialQuantityTwo::AlumSheet.as_str(),
        )?;
        Ok(())
    }
}

pub struct WoodMaterialQuantityTwo(pub String);

impl Rule for WoodMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "WoodMaterialQuantityTwo"
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
            &["wood_mq_one", "heavy_cat_mat_three"],
            MaterialQuantityTwo::HeavyTimber.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["wood_mq_one", "soft_cat_mat_three"],
            MaterialQuantityTwo::WoodFraming.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["wood_mq_one"],
            &["hardwood_cat_mat_three", "lumber_cat_mat_three"],
            MaterialQuantityTwo::Hardwood.as_str(),
        )?;
        let boards = [
            ("plywood_cat_mat_three", MaterialQuantityTwo::Plywood),
            ("osb_cat_mat_three", MaterialQuantityTwo::Osb),
            ("mdf_cat_mat_three", MaterialQuantityTwo::Mdf),
            ("psl_cat_mat_three", MaterialQuantityTwo::Psl),
            ("glulam_cat_mat_three", MaterialQuantityTwo::Glt),
            ("clt_cat_mat_three", MaterialQuantityTwo::Clt),
            ("i_joist_cat_mat_three", MaterialQuantityTwo::WoodIJoist),
            ("lsl_cat_mat_three", MaterialQuantityTwo::Lsl),
            ("lvl_cat_mat_three", MaterialQuantityTwo::Lvl),
        ];
        for (key, result) in boards {
            and_where(table, registry, t, &["wood_mq_one", key], result.as_str())?;
        }
        Ok(())
    }
}

pub struct GlazingMaterialQuantityTwo(pub String);

impl Rule for GlazingMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "GlazingMaterialQuantityTwo"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        and_where(
            table,
            registry,
            &self.0,
            &["glazing_mq_one", "igu_cat_mat_four"],
            MaterialQuantityTwo::Igu.as_str(),
        )
    }
}

pub struct GypsumMaterialQuantityTwo(pub String);

impl Rule for GypsumMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "GypsumMaterialQuantityTwo"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        write_where(table, registry, t, "gypsum_mq_one", MaterialQuantityTwo::IntGypsum.as_str())?;
        and_where(
            table,
            registry,
            t,
            &["gypsum_mq_one", "fib_glass_cat_mat_three"],
            MaterialQuantityTwo::GlassmatSheathing.as_str(),
        )?;
        Ok(())
    }
}

pub struct InsulationMaterialQuantityTwo(pub String);

impl Rule for InsulationMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "InsulationMaterialQuantityTwo"
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
            &["insulation_mq_one", "xps_cat_mat_three"],
            MaterialQuantityTwo::Xps.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "pir_cat_mat_three"],
            MaterialQuantityTwo::Pir.as_str(),
        )?;
        // Mineral wool splits on density keywords and product codes.
        and_or_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "min_wool_cat_mat_three"],
            &[
                "low_cat_mat_three",
                "ecose_cat_mat_three",
                "115_cat_mat_three",
                "132_cat_mat_three",
                "135_cat_mat_three",
                "140_cat_mat_three",
            ],
            MaterialQuantityTwo::MinWoolLow.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "min_wool_cat_mat_three"],
            &["high_cat_mat_three", "ddp_cat_mat_three", "432_cat_mat_three"],
            MaterialQuantityTwo::MinWoolHigh.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["insulation_mq_one"],
            &["fiberglass_cat_mat_three", "glass_fiber_cat_mat_three", "glass_wool_cat_mat_three"],
            MaterialQuantityTwo::FibBlanket.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "cellulose_cat_mat_three"],
            MaterialQuantityTwo::Cellulose.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "eps_cat_mat_three"],
            MaterialQuantityTwo::Eps.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "spray_cat_mat_three"],
            MaterialQuantityTwo::PolyFoam.as_str(),
        )?;
        Ok(())
    }
}

pub struct RoofMaterialQuantityTwo(pub String);

impl Rule for RoofMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "RoofMaterialQuantityTwo"
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
            &["roofing_mq_one", "mod_bitumen_cat_mat_three"],
            MaterialQuantityTwo::Bitumen.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["roofing_mq_one"],
            &["built_up_cat_mat_three", "bur_cat_mat_three"],
            MaterialQuantityTwo::Bur.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["roofing_mq_one", "tpo_cat_mat_three"],
            MaterialQuantityTwo::Tpo.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["roofing_mq_one", "epdm_cat_mat_three"],
            MaterialQuantityTwo::Epdm.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["roofing_mq_one", "PVC_cat_mat_three"],
            MaterialQuantityTwo::Pvc.as_str(),
        )?;
        Ok(())
    }
}

pub struct FireproofMaterialQuantityTwo(pub String);

impl Rule for FireproofMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "FireproofMaterialQuantityTwo"
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
            &["fireproof_mq_one", "cementitious_cat_mat_three"],
            MaterialQuantityTwo::Cementitious.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["fireproof_mq_one", "intumescent_cat_mat_three"],
            MaterialQuantityTwo::Intumescent.as_str(),
        )?;
        Ok(())
    }
}

pub struct DoorFrameMaterialQuantityTwoOther(pub String);

impl Rule for DoorFrameMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "DoorFrameMaterialQuantityTwoOther"
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
            &["doors_and_frames_mq_one", "door_cat_mat_two", "aluminum_cat_mat_three"],
            MaterialQuantityTwo::AlumDoor.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["doors_and_frames_mq_one", "door_frame_cat_mat_two", "aluminum_cat_mat_three"],
            MaterialQuantityTwo::AlumDoorFrame.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["doors_and_frames_mq_one", "door_cat_mat_two", "wood_cat_mat_three"],
            MaterialQuantityTwo::WoodDoor.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["doors_and_frames_mq_one", "door_frame_cat_mat_two", "wood_cat_mat_three"],
            MaterialQuantityTwo::WoodDoorFrame.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &[
                "doors_and_frames_mq_one",
                "door_cat_mat_two",
                "hollow_cat_mat_three",
                "steel_cat_mat_three",
            ],
            MaterialQuantityTwo::SteelDoor.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["doors_and_frames_mq_one", "door_frame_cat_mat_two", "galvanized_cat_mat_three"],
            MaterialQuantityTwo::SteelDoorFrame.as_str(),
        )?;
        Ok(())
    }
}

pub struct WindowFrameMaterialQuantityTwoOther(pub String);

impl Rule for WindowFrameMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "WindowFrameMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        and_or_where(
            table,
            registry,
            t,
            &["window_frame_mq_one"],
            &["aluminum_cat_mat_three", "aluminum_cat_mat_five"],
            MaterialQuantityTwo::AlumWindow.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["window_frame_mq_one", "mullion_cat_ele_four"],
            &["aluminum_cat_mat_three", "aluminum_cat_mat_five"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["window_frame_mq_one", "mullion_cat_ele_four"],
            MaterialQuantityTwo::CwMullion.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["window_frame_mq_one", "steel_cat_mat_three"],
            MaterialQuantityTwo::SteelWindow.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["window_frame_mq_one", "vinyl_cat_mat_three"],
            MaterialQuantityTwo::VinylWindow.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["window_frame_mq_one", "wood_cat_mat_three"],
            MaterialQuantityTwo::WoodWindow.as_str(),
        )?;
        Ok(())
    }
}

pub struct AcousticCeilingsMaterialQuantityTwoOther(pub String);

impl Rule for AcousticCeilingsMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "AcousticCeilingsMaterialQuantityTwoOther"
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
            &[
                "acous_ceilings_mq_one",
                "ceil_tile_cat_mat_two",
                "ceil_tile_cat_mat_three",
                "fiber_cat_mat_three",
            ],
            MaterialQuantityTwo::AcousCeilFiber.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one", "ceil_tile_cat_mat_three", "aluminum_cat_mat_three"],
            &["ceil_tile_cat_mat_two", "metal_coating_cat_mat_two"],
            MaterialQuantityTwo::AcousCeilAlum.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one", "ceil_tile_cat_mat_three", "steel_cat_mat_three"],
            &["ceil_tile_cat_mat_two", "metal_coating_cat_mat_two"],
            MaterialQuantityTwo::AcousCeilSteel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one", "ceil_tile_cat_mat_two", "suspended_cat_mat_three"],
            MaterialQuantityTwo::SuspSys.as_str(),
        )?;
        Ok(())
    }
}

/// Synthetic composites keep no subtype split; leftover rows pick up their
/// family label in the final sweep.
pub struct SyntheticCompositesMaterialQuantityTwoOther(pub String);

impl Rule for SyntheticCompositesMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "SyntheticCompositesMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
    }
}

pub struct CladdingMaterialQuantityTwoOther(pub String);

impl Rule for CladdingMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "CladdingMaterialQuantityTwoOther"
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
            &["cladding_mq_one", "alum_faced_comp_cat_mat_three"],
            MaterialQuantityTwo::Acm.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "aluminum_cat_mat_three"],
            &["metal_wall_cat_mat_four", "siding_cat_mat_four"],
            MaterialQuantityTwo::AlumMetalPanel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "insulated_cat_mat_three", "aluminum_cat_mat_three"],
            &["metal_wall_cat_mat_four", "siding_cat_mat_four"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "steel_cat_mat_three"],
            &["metal_wall_cat_mat_four", "siding_cat_mat_four", "metal_roofing_cat_mat_four"],
            MaterialQuantityTwo::SteelMetalPanel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "insulated_cat_mat_three", "steel_cat_mat_three"],
            &["metal_wall_cat_mat_four", "siding_cat_mat_four", "metal_roofing_cat_mat_four"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "fiber_cem_cat_mat_three"],
            MaterialQuantityTwo::ArchFiberPanel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "ins_metal_cat_mat_four"],
            MaterialQuantityTwo::Imp.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "masonry_cat_mat_two", "terracotta_cat_mat_three"],
            MaterialQuantityTwo::Terracotta.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "stucco_cat_mat_three"],
            MaterialQuantityTwo::Stucco.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "gfrc_cat_mat_four", "panel_cat_mat_four"],
            MaterialQuantityTwo::GfrcPanel.as_str(),
        )?;
        Ok(())
    }
}

/// Adhesives and sealants keep no subtype split.
pub struct AdhesivesMaterialQuantityTwoOther(pub String);

impl Rule for AdhesivesMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "AdhesivesMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
    }
}

/// Air and vapor barriers keep no subtype split.
pub struct AirVaporMaterialQuantityTwoOther(pub String);

impl Rule for AirVaporMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "AirVaporMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
    }
}

pub struct CoatingsMaterialQuantityTwoOther(pub String);

impl Rule for CoatingsMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "CoatingsMaterialQuantityTwoOther"
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
            &["coatings_mq_one", "paint_cat_mat_three"],
            MaterialQuantityTwo::Paint.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["coatings_mq_one", "paint_cat_mat_three", "fireproof_cat_mat_two"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        Ok(())
    }
}

pub struct FloorTileMaterialQuantityTwoOther(pub String);

impl Rule for FloorTileMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "FloorTileMaterialQuantityTwoOther"
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
            &["floor_tile_mq_one", "carpet_cat_mat_three"],
            MaterialQuantityTwo::Carpet.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["floor_tile_mq_one", "vinyl_cat_mat_three"],
            MaterialQuantityTwo::ResFloorVinyl.as_str(),
        )?;
        // Rubber flooring shares the vinyl bucket.
        and_where(
            table,
            registry,
            t,
            &["floor_tile_mq_one", "rubber_cat_mat_three"],
            MaterialQuantityTwo::ResFloorVinyl.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["floor_tile_mq_one"],
            &["ceramic_cat_mat_three", "porcelain_cat_mat_three"],
            MaterialQuantityTwo::PorcelainTile.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["floor_tile_mq_one", "stone_tile_cat_mat_four"],
            MaterialQuantityTwo::StoneTile.as_str(),
        )?;
        Ok(())
    }
}

pub struct OtherMetalsMaterialQuantityTwoOther(pub String);

impl Rule for OtherMetalsMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "OtherMetalsMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        let metals = [
            ("brass_cat_mat_three", MaterialQuantityTwo::Brass),
            ("bronze_cat_mat_three", MaterialQuantityTwo::Bronze),
            ("copper_cat_mat_three", MaterialQuantityTwo::Copper),
            ("titanium_cat_mat_three", MaterialQuantityTwo::Titanium),
            ("zinc_cat_mat_three", MaterialQuantityTwo::Zinc),
            ("fastener_cat_mat_three", MaterialQuantityTwo::Fasteners),
        ];
        for (key, result) in metals {
            and_where(table, registry, t, &["other_metals_mq_one", key], result.as_str())?;
        }
        Ok(())
    }
}

/// Renames the rows no subtype rule claimed so each family keeps its own
/// `Other` bucket in the final output.
pub struct FinalOtherMaterialQuantityTwoOther(pub String);

impl Rule for FinalOtherMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "FinalOtherMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        let families = [
            ("conc_mq_one", MaterialQuantityTwo::ConcreteOther),
            ("steel_mq_one", MaterialQuantityTwo::SteelOther),
            ("masonry_mq_one", MaterialQuantityTwo::MasonryOther),
            ("alum_mq_one", MaterialQuantityTwo::AlumOther),
            ("wood_mq_one", MaterialQuantityTwo::WoodOther),
            ("glazing_mq_one", MaterialQuantityTwo::GlazingOther),
            ("insulation_mq_one", MaterialQuantityTwo::InsulationOther),
            ("gypsum_mq_one", MaterialQuantityTwo::GypsumOther),
            ("roofing_mq_one", MaterialQuantityTwo::RoofingOther),
            ("fireproof_mq_one", MaterialQuantityTwo::FireproofingOther),
            ("doors_and_frames_mq_one", MaterialQuantityTwo::DoorOther),
            ("window_frame_mq_one", MaterialQuantityTwo::WindowOther),
            ("acous_ceilings_mq_one", MaterialQuantityTwo::AcousCeilOther),
            ("synth_comp_mq_one", MaterialQuantityTwo::SynthComp),
            ("cladding_mq_one", MaterialQuantityTwo::CladdingOther),
            ("adhes_seal_mq_one", MaterialQuantityTwo::AdhesSeal),
            ("vapor_barrier_mq_one", MaterialQuantityTwo::AirVapor),
            ("coatings_mq_one", MaterialQuantityTwo::CoatingOther),
            ("floor_tile_mq_one", MaterialQuantityTwo::FloorOther),
            ("other_metals_mq_one", MaterialQuantityTwo::OthMetalOther),
            ("wall_coverings_mq_one", MaterialQuantityTwo::WallCoverings),
        ];
        for (family, result) in families {
            and_where(table, registry, t, &[family, "other_mq_two"], result.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        MATERIAL_GROUP, MATERIAL_NAME, MQ_1, MQ_2, TALLY_ENTRY_CATEGORY, TALLY_ENTRY_DESCRIPTION,
        TALLY_ENTRY_DIVISION, TALLY_ENTRY_NAME,
    };
    use crate::predicates::materials;
    use crate::table::Value;

    fn material_table(rows: &[[&str; 8]]) -> Table {
        let mut t = Table::new(
            [
                MQ_1,
                MQ_2,
                TALLY_ENTRY_DIVISION,
                MATERIAL_GROUP,
                TALLY_ENTRY_CATEGORY,
                TALLY_ENTRY_NAME,
                TALLY_ENTRY_DESCRIPTION,
                MATERIAL_NAME,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
        for row in rows {
            t.push_row(row.iter().map(|s| Value::str(*s)).collect()).unwrap();
        }
        t
    }

    fn mq_2(table: &Table, row: usize) -> &str {
        table.value(row, MQ_2).unwrap().as_str().unwrap()
    }

    #[test]
    fn test_ready_mix_strength_uses_range_spelling() {
        let mut t = material_table(&[[
            "Concrete",
            "Other",
            "03 - Concrete",
            "Concrete",
            "Cast-in-place Concrete",
            "Cast-in-place concrete; structural concrete; 3001-4000 psi",
            "Slab",
            "Structural concrete, 4000 psi",
        ]]);
        let registry = materials::tally_registry(&t).unwrap();
        ConcreteMaterialQuantityTwo(MQ_2.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(mq_2(&t, 0), MaterialQuantityTwo::ReadyMixNw4.as_str());
    }

    #[test]
    fn test_quarter_inch_plate_drops_back_to_other() {
        let mut t = material_table(&[[
            "Steel",
            "Other",
            "05 - Metals",
            "Metal",
            "Structural Steel",
            "Steel, plate",
            "Plate, 1/4 in",
            "Steel, plate",
        ]]);
        let registry = materials::tally_registry(&t).unwrap();
        SteelMaterialQuantityTwo(MQ_2.to_string()).apply(&mut t, &registry).unwrap();
        assert_eq!(mq_2(&t, 0), MaterialQuantityTwo::Other.as_str());
    }

    #[test]
    fn test_final_sweep_renames_family_leftovers() {
        let mut t = material_table(&[
            ["Concrete", "Other", "", "", "", "", "", ""],
            ["Wall Coverings", "Other", "", "", "", "", "", ""],
            ["Other", "Other", "", "", "", "", "", ""],
        ]);
        let registry = materials::tally_registry(&t).unwrap();
        FinalOtherMaterialQuantityTwoOther(MQ_2.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(mq_2(&t, 0), MaterialQuantityTwo::ConcreteOther.as_str());
        assert_eq!(mq_2(&t, 1), MaterialQuantityTwo::WallCoverings.as_str());
        assert_eq!(mq_2(&t, 2), MaterialQuantityTwo::Other.as_str());
    }

    #[test]
    fn test_stucco_wall_cover_moves_to_cladding() {
        let mut t = material_table(&[[
            "Other",
            "Other",
            "09 - Finishes",
            "Wall coverings",
            "Wall Finishes",
            "Stucco, cement plaster",
            "",
            "Stucco",
        ]]);
        let registry = materials::tally_registry(&t).unwrap();
        WallCoveringsMaterialQuantityOneOther(MQ_1.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(
            t.value(0, MQ_1).unwrap().as_str(),
            Some(MaterialQuantityOne::Cladding.as_str())
        );
    }

    #[test]
    fn test_other_refinement_skips_already_specific_families() {
        // Same stucco signals as above, but the family is already decided.
        let mut t = material_table(&[[
            "Gypsum",
            "Other",
            "09 - Finishes",
            "Wall coverings",
            "Wall Finishes",
            "Stucco, cement plaster",
            "",
            "Stucco",
        ]]);
        let registry = materials::tally_registry(&t).unwrap();
        WallCoveringsMaterialQuantityOneOther(MQ_1.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(
            t.value(0, MQ_1).unwrap().as_str(),
            Some(MaterialQuantityOne::Gypsum.as_str())
        );
    }
}
