//! Material rules for One Click exports.
//!
//! Same four sweeps as the Tally side, plus a ready-mix strength split that
//! runs with the `Other` sweep because its predicates read the MQ_2 values
//! written by the first subtype pass.

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
        write_where(
            table,
            registry,
            t,
            "conc_cat_mat_one",
            MaterialQuantityOne::Concrete.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["conc_cat_mat_one", "cmu_cat_mat_two"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &["cement_cat_mat_two", "conc_ad_mix_cat_mat_two", "lev_screed_cat_mat_two"],
            MaterialQuantityOne::Concrete.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["conc_cat_mat_one", "metal_cat_mat_two"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &[
                "sand_cat_mat_three",
                "bcr_cat_mat_three",
                "cem_comp_cat_mat_three",
                "water_for_cat_mat_three",
                "aggregate_cat_mat_three",
            ],
            MaterialQuantityOne::Concrete.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["fibre_cement_prod_cat_mat_two"],
            &[
                "sand_cat_mat_three",
                "bcr_cat_mat_three",
                "cem_comp_cat_mat_three",
                "water_for_cat_mat_three",
                "aggregate_cat_mat_three",
            ],
            MaterialQuantityOne::Other.as_str(),
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
        write_where(table, registry, t, "metals_cat_mat_one", MaterialQuantityOne::Steel.as_str())?;
        and_or_where(
            table,
            registry,
            t,
            &["metals_cat_mat_one"],
            &[
                "alumi_cat_mat_two",
                "fireproofing_cat_mat_two",
                "insulation_cat_mat_two",
                "metal_coat_cat_mat_two",
                "sandwich_panel_cat_mat_two",
            ],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["metals_cat_mat_one"],
            &[
                "alumi_cat_mat_three",
                "ceiling_cat_mat_three",
                "cladding_cat_mat_three",
                "roll_formed_cat_mat_three",
            ],
            MaterialQuantityOne::Other.as_str(),
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
        write_where(
            table,
            registry,
            t,
            "stone_cladding_cat_mat_three",
            MaterialQuantityOne::Masonry.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_cat_mat_one"],
            &[
                "brick_cat_mat_two",
                "conc_cat_mat_two",
                "stone_cat_mat_two",
                "mortar_cat_mat_two",
            ],
            MaterialQuantityOne::Masonry.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["conc_cat_mat_one"],
            &["cmu_cat_mat_two", "aerated_conc_cat_mat_two"],
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
        or_where(
            table,
            registry,
            t,
            &["alumi_cat_mat_three", "curtain_cat_mat_three", "storefront_cat_mat_three"],
            MaterialQuantityOne::Aluminum.as_str(),
        )?;
        // Each entry keyword re-checks the same mixed-assembly list.
        for hit in ["alumi_cat_mat_three", "curtain_cat_mat_three", "storefront_cat_mat_three"] {
            and_or_where(
                table,
                registry,
                t,
                &[hit],
                &[
                    "rock_wool_cat_mat_three",
                    "steel_cat_mat_three",
                    "cladding_cat_mat_three",
                    "composite_cat_mat_three",
                    "door_cat_mat_three",
                    "aluminum_window_cat_mat_three",
                    "frame_window_cat_mat_three",
                    "casement_window_cat_mat_three",
                    "fixed_window_cat_mat_three",
                    "sandwich_cat_mat_three",
                    "plate_cat_mat_three",
                    "pir_cat_mat_three",
                    "framing_cat_mat_three",
                    "framed_cat_mat_three",
                ],
                MaterialQuantityOne::Other.as_str(),
            )?;
        }
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
        let t = &self.0;
        or_where(
            table,
            registry,
            t,
            &[
                "wood_cat_mat_three",
                "lumber_cat_mat_three",
                "timber_cat_mat_three",
                "osb_cat_mat_three",
                "particleboard_cat_mat_three",
                "mdf_cat_mat_three",
            ],
            MaterialQuantityOne::Wood.as_str(),
        )?;
        for hit in [
            "wood_cat_mat_three",
            "lumber_cat_mat_three",
            "timber_cat_mat_three",
            "osb_cat_mat_three",
            "particleboard_cat_mat_three",
            "mdf_cat_mat_three",
        ] {
            and_or_where(
                table,
                registry,
                t,
                &[hit],
                &[
                    "textile_cat_mat_two",
                    "insulation_cat_mat_two",
                    "plastic_cat_mat_two",
                    "coating_cat_mat_two",
                    "furniture_cat_mat_two",
                    "door_cat_mat_two",
                ],
                MaterialQuantityOne::Other.as_str(),
            )?;
        }
        Ok(())
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
        and_or_where(
            table,
            registry,
            t,
            &["glazing_cat_mat_one"],
            &["glass_pane_cat_mat_two", "glazing_cat_mat_two"],
            MaterialQuantityOne::Glazing.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["glazing_cat_mat_one", "glass_pane_cat_mat_two"],
            &["alumi_cat_mat_three", "curtain_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["glazing_cat_mat_one", "glazing_cat_mat_two"],
            &["alumi_cat_mat_three", "curtain_cat_mat_three"],
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
        write_where(table, registry, t, "gypsum_cat_mat_two", MaterialQuantityOne::Gypsum.as_str())?;
        and_where(
            table,
            registry,
            t,
            &["gypsum_cat_mat_two", "acoustic_ceiling_panel_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["gypsum_cat_mat_two", "ceiling_panel_cat_mat_six"],
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
        and_where(
            table,
            registry,
            t,
            &["insulation_cat_mat_two", "ceiling_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
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
        or_where(
            table,
            registry,
            &self.0,
            &["plas_mem_cat_mat_two", "bitumen_cat_mat_two"],
            MaterialQuantityOne::Roof.as_str(),
        )
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
        let t = &self.0;
        write_where(
            table,
            registry,
            t,
            "fireproof_cat_mat_two",
            MaterialQuantityOne::Fireproof.as_str(),
        )?;
        or_where(
            table,
            registry,
            t,
            &["intumescent_cat_mat_three", "fire_resistive_cat_mat_three"],
            MaterialQuantityOne::Fireproof.as_str(),
        )?;
        Ok(())
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
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one", "door_cat_mat_three"],
            &["door_cat_mat_two", "alumi_cat_mat_two"],
            MaterialQuantityOne::DoorFrame.as_str(),
        )
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
        let t = &self.0;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "window_cat_mat_two", "window_cat_mat_three"],
            MaterialQuantityOne::WindowFrame.as_str(),
        )?;
        for hit in [
            "alumi_cat_mat_three",
            "store_cat_mat_three",
            "curtain_cat_mat_three",
            "window_wall_cat_mat_three",
            "unitized_cat_mat_three",
        ] {
            and_or_where(
                table,
                registry,
                t,
                &["other_mq_one", hit],
                &[
                    "part_sys_cat_mat_two",
                    "glass_fac_cat_mat_two",
                    "alum_frame_window_cat_mat_two",
                    "aluminium_cat_mat_two",
                ],
                MaterialQuantityOne::WindowFrame.as_str(),
            )?;
        }
        Ok(())
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
            &["other_mq_one", "ceiling_cat_mat_three"],
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
        and_where(
            table,
            registry,
            &self.0,
            &["other_mq_one", "plas_profile_cat_mat_two"],
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
            &["other_mq_one", "roll_formed_start_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "roll_formed_start_cat_mat_three", "alumi_cat_mat_three"],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one", "alumi_cat_mat_three"],
            &["cladding_cat_mat_three", "formed_cat_mat_three", "plate_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "sandwich_panel_cat_mat_two"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one", "fibre_cement_prod_cat_mat_three"],
            &["fibre_cement_board_cat_mat_three", "fiber_reinf_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["other_mq_one", "stucco_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )?;
        Ok(())
    }
}

/// No One Click predicate picks out adhesives, so those rows stay `Other`.
pub struct AdhesivesMaterialQuantityOneOther(pub String);

impl Rule for AdhesivesMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "AdhesivesMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
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
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one"],
            &["plas_mem_cat_mat_two", "sealants_cat_mat_two"],
            MaterialQuantityOne::AirVapor.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one", "plas_mem_cat_mat_two"],
            &[
                "roof_cat_mat_three",
                "roof_start_cat_mat_three",
                "roofing_cat_mat_three",
                "roofing_start_cat_mat_three",
            ],
            MaterialQuantityOne::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["other_mq_one", "sealants_cat_mat_two"],
            &[
                "roof_cat_mat_three",
                "roof_start_cat_mat_three",
                "roofing_cat_mat_three",
                "roofing_start_cat_mat_three",
            ],
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
        and_or_where(
            table,
            registry,
            &self.0,
            &["other_mq_one"],
            &["paint_coat_laq_cat_mat_two", "high_perform_coating_cat_mat_three"],
            MaterialQuantityOne::Coatings.as_str(),
        )
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
            &[
                "carpet_flooring_cat_mat_two",
                "lam_floor_cat_mat_two",
                "lin_floor_cat_mat_two",
                "res_floor_cat_mat_two",
                "wall_floor_tile_cat_mat_two",
                "other_floor_cat_mat_two",
            ],
            MaterialQuantityOne::Floor.as_str(),
        )
    }
}

/// No One Click predicate picks out the specialty metals, so those rows stay
/// `Other`.
pub struct OtherMetalsMaterialQuantityOneOther(pub String);

impl Rule for OtherMetalsMaterialQuantityOneOther {
    fn name(&self) -> &'static str {
        "OtherMetalsMaterialQuantityOneOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
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
        // Vinyl wall covers land in cladding, not wall coverings.
        and_where(
            table,
            registry,
            &self.0,
            &["other_mq_one", "vinyl_cover_cat_mat_three"],
            MaterialQuantityOne::Cladding.as_str(),
        )
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
        write_where(
            table,
            registry,
            t,
            "conc_mq_one",
            MaterialQuantityTwo::ReadyMixOther.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["conc_mq_one"],
            &[
                "aerated_conc_cat_mat_two",
                "conc_slab_cat_mat_two",
                "conc_wall_ele_cat_mat_two",
                "other_precast_cat_mat_two",
                "str_conc_cat_mat_two",
            ],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["conc_mq_one"],
            &["conc_wall_ele_cat_mat_two", "str_conc_cat_mat_two"],
            MaterialQuantityTwo::Precast.as_str(),
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
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "structural_cat_mat_three"],
            MaterialQuantityTwo::HotRolled.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["steel_mq_one", "structural_cat_mat_three"],
            &["light_cat_mat_three", "hollow_cat_mat_three", "cold_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "sheet_cat_mat_three"],
            MaterialQuantityTwo::SteelSheet.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["steel_mq_one"],
            &["cold_cat_mat_three", "stud_cat_mat_five"],
            MaterialQuantityTwo::ColdFormed.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["steel_mq_one", "hss_cat_mat_five"],
            &["cold_cat_mat_three", "stud_cat_mat_five"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "hollow_cat_mat_three"],
            MaterialQuantityTwo::Hss.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "plate_cat_mat_three"],
            MaterialQuantityTwo::Plate.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "deck_cat_mat_five"],
            MaterialQuantityTwo::Deck.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "conc_reinf_cat_mat_two"],
            MaterialQuantityTwo::Rebar.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["steel_mq_one", "metal_cat_mat_two", "gen_reinf_cat_mat_three"],
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
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "masonry_cat_mat_one"],
            &["conc_cat_mat_two", "mortar_cat_mat_two"],
            MaterialQuantityTwo::Grout.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "masonry_cat_mat_one", "cmu_h_cat_mat_three"],
            &["conc_cat_mat_two", "mortar_cat_mat_two"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one"],
            &["cmu_cat_mat_three", "lw_conc_block_cat_mat_three"],
            MaterialQuantityTwo::Cmu.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["masonry_mq_one", "brick_cat_mat_two"],
            MaterialQuantityTwo::Brick.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["masonry_mq_one"],
            &["stone_cat_mat_two", "stone_cladding_cat_mat_three"],
            MaterialQuantityTwo::Stone.as_str(),
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
            &["alumi_mq_one", "extru_cat_mat_three"],
            MaterialQuantityTwo::Extrusion.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["alumi_mq_one", "sheet_cat_mat_three"],
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
        and_or_where(
            table,
            registry,
            t,
            &["wood_mq_one"],
            &["softwood_cat_mat_three", "stud_cat_mat_three"],
            MaterialQuantityTwo::WoodFraming.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["wood_mq_one", "plywood_cat_mat_three"],
            &["softwood_cat_mat_three", "stud_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["wood_mq_one", "hardwood_cat_mat_three"],
            MaterialQuantityTwo::Hardwood.as_str(),
        )?;
        let boards = [
            ("plywood_cat_mat_three", MaterialQuantityTwo::Plywood),
            ("lvl_cat_mat_three", MaterialQuantityTwo::Lvl),
            ("lsl_cat_mat_three", MaterialQuantityTwo::Lsl),
            ("glue_cat_mat_three", MaterialQuantityTwo::Glt),
            ("clt_cat_mat_three", MaterialQuantityTwo::Clt),
            ("joist_cat_mat_three", MaterialQuantityTwo::WoodIJoist),
            ("fiberboard_mdf_cat_mat_two", MaterialQuantityTwo::Mdf),
            ("osb_cat_mat_three", MaterialQuantityTwo::Osb),
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
            &["glazing_mq_one", "igu_cat_mat_three"],
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
            &["gypsum_mq_one", "glass_cat_mat_three"],
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
        // Mineral wool defaults to high density; batt products drop to low.
        and_or_where(
            table,
            registry,
            t,
            &["insulation_mq_one"],
            &[
                "min_wool_cat_mat_three",
                "rock_wool_cat_mat_three",
                "stone_wool_cat_mat_three",
                "mineral_fiber_cat_mat_three",
            ],
            MaterialQuantityTwo::MinWoolHigh.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "batt_cat_mat_three"],
            &[
                "min_wool_cat_mat_three",
                "rock_wool_cat_mat_three",
                "stone_wool_cat_mat_three",
                "mineral_fiber_cat_mat_three",
            ],
            MaterialQuantityTwo::MinWoolLow.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["insulation_mq_one", "glass_cat_mat_three"],
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
            &["insulation_mq_one", "spray_cat_mat_three", "foam_cat_mat_three"],
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
        and_or_where(
            table,
            registry,
            t,
            &["roofing_mq_one"],
            &["bitumen_cat_mat_three", "sbs_cat_mat_three"],
            MaterialQuantityTwo::Bitumen.as_str(),
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
            &["roofing_mq_one", "pvc_cat_mat_three"],
            MaterialQuantityTwo::Pvc.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["roofing_mq_one", "asphalt_cat_mat_three", "shingle_cat_mat_three"],
            MaterialQuantityTwo::AsphaltShingle.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["roofing_mq_one", "HDPE_cat_mat_three"],
            MaterialQuantityTwo::Hdpe.as_str(),
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
        and_or_where(
            table,
            registry,
            t,
            &["fireproof_mq_one"],
            &["cementitious_cat_mat_three", "spray_applied_cat_mat_three"],
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
            &["door_mq_one", "industrial_door_cat_mat_two"],
            MaterialQuantityTwo::SteelDoor.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["door_mq_one", "industrial_door_cat_mat_two", "frame_cat_mat_three"],
            MaterialQuantityTwo::SteelDoorFrame.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["door_mq_one"],
            &[
                "alum_framed_glass_door_cat_mat_two",
                "alum_frame_window_cat_mat_two",
                "sliding_cat_mat_three",
                "revolving_cat_mat_three",
            ],
            MaterialQuantityTwo::AlumFramedGlassEnt.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["door_mq_one", "fiberglass_cat_mat_three"],
            MaterialQuantityTwo::FibDoor.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["door_mq_one"],
            &["particle_cat_mat_three", "wood_cat_mat_three", "mdf_cat_mat_three"],
            MaterialQuantityTwo::WoodDoor.as_str(),
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
        and_where(
            table,
            registry,
            t,
            &["window_mq_one", "alum_frame_window_cat_mat_two"],
            MaterialQuantityTwo::AlumWindow.as_str(),
        )?;
        for hit in [
            "alum_frame_window_cat_mat_two",
            "glass_fac_cat_mat_two",
            "part_sys_cat_mat_two",
            "aluminium_cat_mat_two",
        ] {
            and_or_where(
                table,
                registry,
                t,
                &["window_mq_one", hit],
                &[
                    "window_wall_cat_mat_three",
                    "store_cat_mat_three",
                    "curtain_cat_mat_three",
                    "unitized_cat_mat_three",
                ],
                MaterialQuantityTwo::CwMullion.as_str(),
            )?;
        }
        and_where(
            table,
            registry,
            t,
            &["window_mq_one", "part_sys_cat_mat_two", "alumi_cat_mat_three"],
            MaterialQuantityTwo::CwMullion.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["window_mq_one", "pvc_frame_window_cat_mat_two"],
            MaterialQuantityTwo::FibWindow.as_str(),
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
        and_or_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one"],
            &["acoustic_ceiling_panel_cat_mat_three", "fiber_cat_mat_three"],
            MaterialQuantityTwo::AcousCeilFiber.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one", "metal_ceiling_cat_mat_three"],
            MaterialQuantityTwo::AcousCeilSteel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["acous_ceilings_mq_one", "suspen_cat_mat_three"],
            MaterialQuantityTwo::SuspSys.as_str(),
        )?;
        Ok(())
    }
}

/// Synthetic composites keep no subtype split.
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
            &["cladding_mq_one", "roll_formed_start_cat_mat_three"],
            MaterialQuantityTwo::SteelMetalPanel.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "roll_formed_start_cat_mat_three", "alumi_cat_mat_three"],
            MaterialQuantityTwo::Other.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "alumi_cat_mat_three"],
            &["cladding_cat_mat_three", "formed_cat_mat_three", "plate_cat_mat_three"],
            MaterialQuantityTwo::AlumMetalPanel.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "sandwich_panel_cat_mat_two"],
            &["sandwich_panel_cat_mat_three", "insulated_metal_cat_mat_three"],
            MaterialQuantityTwo::Imp.as_str(),
        )?;
        and_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "sandwich_panel_cat_mat_two", "polyethylene_cat_mat_three"],
            MaterialQuantityTwo::Acm.as_str(),
        )?;
        and_or_where(
            table,
            registry,
            t,
            &["cladding_mq_one", "fibre_cement_prod_cat_mat_three"],
            &["fibre_cement_board_cat_mat_three", "fiber_reinf_cat_mat_three"],
            MaterialQuantityTwo::ArchFiberPanel.as_str(),
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
            &["cladding_mq_one", "high_pressure_cat_mat_three", "hpl_cat_mat_three"],
            MaterialQuantityTwo::Hpl.as_str(),
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
        and_where(
            table,
            registry,
            &self.0,
            &["coatings_mq_one", "paint_cat_mat_three"],
            MaterialQuantityTwo::Paint.as_str(),
        )
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
        let subtypes = [
            ("raised_access_floor_cat_mat_three", MaterialQuantityTwo::RaisedAcessFloor),
            ("terrazzo_cat_mat_three", MaterialQuantityTwo::Terrazzo),
            ("carpet_cat_mat_three", MaterialQuantityTwo::Carpet),
            ("vinyl_cat_mat_three", MaterialQuantityTwo::ResFloorVinyl),
            ("rubber_cat_mat_three", MaterialQuantityTwo::ResFloorRubber),
        ];
        for (key, result) in subtypes {
            and_where(table, registry, t, &["floor_tile_mq_one", key], result.as_str())?;
        }
        and_or_where(
            table,
            registry,
            t,
            &["floor_tile_mq_one"],
            &["ceramic_cat_mat_two", "porcelain_cat_mat_two"],
            MaterialQuantityTwo::PorcelainTile.as_str(),
        )?;
        Ok(())
    }
}

/// Other-metal entries have no dedicated predicates on this side.
pub struct OtherMetalsMaterialQuantityTwoOther(pub String);

impl Rule for OtherMetalsMaterialQuantityTwoOther {
    fn name(&self) -> &'static str {
        "OtherMetalsMaterialQuantityTwoOther"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, _table: &mut Table, _registry: &Registry) -> Result<()> {
        Ok(())
    }
}

/// Splits the ready-mix bucket by strength once the first MQ_2 pass has
/// written it, so the mapper must rebuild its registry before this rule runs.
pub struct ConcreteReadyMixMaterialQuantityTwo(pub String);

impl Rule for ConcreteReadyMixMaterialQuantityTwo {
    fn name(&self) -> &'static str {
        "ConcreteReadyMixMaterialQuantityTwo"
    }

    fn target(&self) -> &str {
        &self.0
    }

    fn apply(&self, table: &mut Table, registry: &Registry) -> Result<()> {
        let t = &self.0;
        let normal_weights = [
            ("2500_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw25),
            ("3000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw3),
            ("4000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw4),
            ("5000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw5),
            ("6000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw6),
            ("8000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixNw8),
        ];
        for (psi, result) in normal_weights {
            and_where(table, registry, t, &["ready_mix_other_mq_two", psi], result.as_str())?;
        }
        let light_weights = [
            ("3000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixLw3),
            ("4000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixLw4),
            ("5000_psi_cat_mat_five", MaterialQuantityTwo::ReadyMixLw5),
        ];
        for (psi, result) in light_weights {
            and_where(
                table,
                registry,
                t,
                &["ready_mix_other_mq_two", "light_cat_mat_five", "weight_cat_mat_five", psi],
                result.as_str(),
            )?;
        }
        Ok(())
    }
}

/// Renames leftover `Other` rows to their family bucket.
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
            ("alumi_mq_one", MaterialQuantityTwo::AlumOther),
            ("wood_mq_one", MaterialQuantityTwo::WoodOther),
            ("glazing_mq_one", MaterialQuantityTwo::GlazingOther),
            ("insulation_mq_one", MaterialQuantityTwo::InsulationOther),
            ("gypsum_mq_one", MaterialQuantityTwo::GypsumOther),
            ("roofing_mq_one", MaterialQuantityTwo::RoofingOther),
            ("fireproof_mq_one", MaterialQuantityTwo::FireproofingOther),
            ("door_mq_one", MaterialQuantityTwo::DoorOther),
            ("window_mq_one", MaterialQuantityTwo::WindowOther),
            ("acous_ceilings_mq_one", MaterialQuantityTwo::AcousCeilOther),
            ("cladding_mq_one", MaterialQuantityTwo::CladdingOther),
            ("coatings_mq_one", MaterialQuantityTwo::CoatingOther),
            ("floor_tile_mq_one", MaterialQuantityTwo::FloorOther),
            ("vapor_barrier_mq_one", MaterialQuantityTwo::AirVapor),
            ("synth_comp_mq_one", MaterialQuantityTwo::SynthComp),
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
    use crate::constants::{CSI_MASTERFORMAT, DATASOURCE, MQ_1, MQ_2, NAME, RESOURCE, RESOURCE_TYPE};
    use crate::predicates::materials;
    use crate::table::Value;

    fn material_table(mq_one: &str, mq_two: &str, rtype: &str, name: &str, resource: &str) -> Table {
        let mut t = Table::new(
            [MQ_1, MQ_2, CSI_MASTERFORMAT, RESOURCE_TYPE, NAME, RESOURCE, DATASOURCE]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        t.push_row(vec![
            Value::str(mq_one),
            Value::str(mq_two),
            Value::Num(3.0),
            Value::str(rtype),
            Value::str(name),
            Value::str(resource),
            Value::str("EPD"),
        ])
        .unwrap();
        t
    }

    fn mq_2(table: &Table) -> &str {
        table.value(0, MQ_2).unwrap().as_str().unwrap()
    }

    #[test]
    fn test_ready_mix_split_reads_rewritten_subtype() {
        let mut t = material_table(
            "Concrete",
            MaterialQuantityTwo::ReadyMixOther.as_str(),
            "Ready-mix",
            "Ready-mix concrete",
            "concrete, 4000",
        );
        let registry = materials::oneclick_registry(&t).unwrap();
        ConcreteReadyMixMaterialQuantityTwo(MQ_2.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(mq_2(&t), MaterialQuantityTwo::ReadyMixNw4.as_str());
    }

    #[test]
    fn test_roll_formed_steel_panel_subtype() {
        let mut t = material_table(
            "Cladding",
            "Other",
            "Metal profiles",
            "Roll formed steel panel",
            "steel",
        );
        let registry = materials::oneclick_registry(&t).unwrap();
        CladdingMaterialQuantityTwoOther(MQ_2.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(mq_2(&t), MaterialQuantityTwo::SteelMetalPanel.as_str());
    }

    #[test]
    fn test_final_sweep_has_no_wall_coverings_family() {
        let mut t = material_table("Wall Coverings", "Other", "", "", "");
        let registry = materials::oneclick_registry(&t).unwrap();
        FinalOtherMaterialQuantityTwoOther(MQ_2.to_string())
            .apply(&mut t, &registry)
            .unwrap();
        assert_eq!(mq_2(&t), MaterialQuantityTwo::Other.as_str());
    }
}
