//! Predicate tables for the material classification passes.
//!
//! Each tool gets one flat table shared by every material pass of that tool,
//! from the first MQ_1 family rule through the final Other renaming. The MQ_1
//! and MQ_2 guards match values written by earlier passes, so those specs are
//! built from the taxonomy enums; everything else matches export text.

use crate::classify::registry::{build_registry, p, Match, PredicateSpec, Registry};
use crate::constants::{
    CSI_MASTERFORMAT, DATASOURCE, MATERIAL_GROUP, MATERIAL_NAME, MQ_1, MQ_2, NAME, RESOURCE,
    RESOURCE_TYPE, TALLY_ENTRY_CATEGORY, TALLY_ENTRY_DESCRIPTION, TALLY_ENTRY_DIVISION,
    TALLY_ENTRY_NAME,
};
use crate::error::Result;
use crate::table::Table;
use crate::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo};

pub fn oneclick_registry(table: &Table) -> Result<Registry> {
    let specs = oneclick_specs();
    build_registry(table, &specs)
}

pub fn tally_registry(table: &Table) -> Result<Registry> {
    let specs = tally_specs();
    build_registry(table, &specs)
}

fn oneclick_specs() -> Vec<PredicateSpec> {
    vec![
        p("conc_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Concrete.as_str())),
        p(
            "ready_mix_other_mq_two",
            MQ_2,
            Match::Full(MaterialQuantityTwo::ReadyMixOther.as_str()),
        ),
        p("conc_cat_mat_one", CSI_MASTERFORMAT, Match::Equals(3.0)),
        p("conc_cat_mat_two", RESOURCE_TYPE, Match::Full("Concrete")),
        p(
            "conc_slab_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Concrete slabs (hollow and solid)"),
        ),
        p("ready_mix_cat_mat_two", RESOURCE_TYPE, Match::Contains("Ready-mix")),
        p(
            "aerated_conc_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Aerated/Autoclaved concrete products"),
        ),
        p("cmu_cat_mat_two", RESOURCE_TYPE, Match::Contains("Concrete masonry unit")),
        p("metal_cat_mat_two", RESOURCE_TYPE, Match::Full("Metal")),
        p(
            "conc_wall_ele_cat_mat_two",
            RESOURCE_TYPE,
            Match::Full("Concrete wall elements"),
        ),
        p(
            "str_conc_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Structural concrete (beams, columns, piling)"),
        ),
        p("cement_cat_mat_two", RESOURCE_TYPE, Match::Contains("cement|Cement|CEMENT")),
        p(
            "conc_ad_mix_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("concrete admixture|Concrete admixture|Concrete Admixture"),
        ),
        p(
            "lev_screed_cat_mat_three",
            NAME,
            Match::ContainsLiteral("Leveling screeds (for floors)"),
        ),
        p(
            "lev_screed_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Leveling screeds (for floors)"),
        ),
        p(
            "other_precast_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Other precast concrete products"),
        ),
        p("light_cat_mat_five", RESOURCE, Match::Contains("light|Light|LIGHT")),
        p("weight_cat_mat_five", RESOURCE, Match::Contains("weight|Weight|WEIGHT")),
        p(
            "2500_psi_cat_mat_five",
            RESOURCE,
            Match::Contains("0 - 2500|0-3000|concrete, 2500"),
        ),
        p("3000_psi_cat_mat_five", RESOURCE, Match::Contains("2501|concrete, 3000")),
        p("4000_psi_cat_mat_five", RESOURCE, Match::Contains("3001|concrete, 4000")),
        p("5000_psi_cat_mat_five", RESOURCE, Match::Contains("4001|concrete, 5000")),
        p("6000_psi_cat_mat_five", RESOURCE, Match::Contains("5001|concrete, 6000")),
        p(
            "8000_psi_cat_mat_five",
            RESOURCE,
            Match::Contains("6001|7000|concrete, 8000"),
        ),
        p("bcr_cat_mat_three", NAME, Match::Contains("bcr|Bcr|BCR")),
        p("sand_cat_mat_three", NAME, Match::Contains("sand|Sand|SAND")),
        p(
            "cem_comp_cat_mat_three",
            NAME,
            Match::Contains("cementitious components|Cementitious components|Cementitious Components"),
        ),
        p(
            "water_for_cat_mat_three",
            NAME,
            Match::Contains("water for|Water for|Water For"),
        ),
        p(
            "aggregate_cat_mat_three",
            NAME,
            Match::Contains("aggregate|Aggregate|AGGREGATE"),
        ),
        p(
            "fibre_cement_prod_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("fibre cement products|Fibre cement products|Fibre Cement products"),
        ),
        p("steel_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Steel.as_str())),
        p("metals_cat_mat_one", CSI_MASTERFORMAT, Match::Equals(5.0)),
        p("alumi_cat_mat_two", RESOURCE_TYPE, Match::Contains("alumi|Alumi|ALUMI")),
        p(
            "fireproofing_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("fireproofing|Fireproofing|FIREPROOFING"),
        ),
        p(
            "metal_coat_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("metal coating|Metal coating|Metal Coating"),
        ),
        p(
            "sandwich_panel_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Sandwich panels, metal"),
        ),
        p("ceiling_cat_mat_three", NAME, Match::Contains("ceiling|Ceiling|CEILING")),
        p("cladding_cat_mat_three", NAME, Match::Contains("cladding|Cladding|CLADDING")),
        p(
            "roll_formed_cat_mat_three",
            NAME,
            Match::Contains("roll formed|Roll formed|Roll Formed"),
        ),
        p(
            "conc_reinf_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Reinforcement for concrete (rebar)"),
        ),
        p(
            "gen_reinf_cat_mat_three",
            NAME,
            Match::Contains("Reinforcing|reinforcing|REINFORCING"),
        ),
        p("alumi_cat_mat_three", NAME, Match::Contains("alumi|Alumi|ALUMI")),
        p(
            "structural_cat_mat_three",
            NAME,
            Match::Contains("structural|Structural|STRUCTURAL"),
        ),
        p("light_cat_mat_three", NAME, Match::Contains("light|Light|LIGHT")),
        p("hollow_cat_mat_three", NAME, Match::Contains("hollow|Hollow|HOLLOW")),
        p("plate_cat_mat_three", NAME, Match::Contains("plate|Plate|PLATE")),
        p("cold_cat_mat_three", NAME, Match::Contains("cold|Cold|COLD")),
        p("stud_cat_mat_five", RESOURCE, Match::Contains("stud|Stud|STUD")),
        p("deck_cat_mat_five", RESOURCE, Match::Contains("deck|Deck|DECK")),
        p("hss_cat_mat_five", RESOURCE, Match::Contains("hss|Hss|HSS")),
        p("joist_cat_mat_three", NAME, Match::Contains("joist|Joist|JOIST")),
        p("masonry_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Masonry.as_str())),
        p("masonry_cat_mat_one", CSI_MASTERFORMAT, Match::Equals(4.0)),
        p("brick_cat_mat_two", RESOURCE_TYPE, Match::Full("Brick, common clay brick")),
        p("stone_cat_mat_two", RESOURCE_TYPE, Match::Contains("stone|Stone|STONE")),
        p(
            "mortar_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Mortar (masonry/bricklaying)"),
        ),
        p(
            "cmu_h_cat_mat_three",
            NAME,
            Match::ContainsLiteral("Concrete masonry unit (CMU), hollow-core"),
        ),
        p("cmu_cat_mat_three", NAME, Match::Contains("Concrete masonry unit")),
        p(
            "stone_cladding_cat_mat_three",
            NAME,
            Match::Contains("stone cladding|Stone cladding|Stone Cladding"),
        ),
        p(
            "lw_conc_block_cat_mat_three",
            NAME,
            Match::Contains("Lightweight concrete block"),
        ),
        p("alumi_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Aluminum.as_str())),
        p("curtain_cat_mat_three", NAME, Match::Contains("curtain|Curtain|CURTAIN")),
        p("door_cat_mat_two", RESOURCE_TYPE, Match::Contains("door|Door|DOOR")),
        p("window_cat_mat_two", RESOURCE_TYPE, Match::Contains("window|Window|WINDOW")),
        p(
            "paint_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("paint|Paint|PAINT|paints|Paints|PAINTS"),
        ),
        p(
            "partition_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("partition|partitioning|Partition|Partitioning|PIR"),
        ),
        p(
            "storefront_cat_mat_three",
            NAME,
            Match::Contains("storefront|Storefront|STOREFRONT"),
        ),
        p(
            "composite_cat_mat_three",
            NAME,
            Match::Contains("composite|Composite|COMPOSITE"),
        ),
        p(
            "aluminum_window_cat_mat_three",
            NAME,
            Match::Contains("aluminum window|Aluminum window|Aluminum Window"),
        ),
        p(
            "frame_window_cat_mat_three",
            NAME,
            Match::Contains("frame window|Frame window|Frame Window"),
        ),
        p(
            "fixed_window_cat_mat_three",
            NAME,
            Match::Contains("fixed window|Fixed window|Fixed Window"),
        ),
        p(
            "casement_window_cat_mat_three",
            NAME,
            Match::Contains("casement window|Casement window|Casement Window"),
        ),
        p(
            "window_wall_cat_mat_three",
            NAME,
            Match::Contains("window wall|Window wall|Window Wall"),
        ),
        p(
            "framed_unitized_cat_mat_three",
            NAME,
            Match::Contains("framed unitized|Framed unitized|Framed Unitized"),
        ),
        p("sandwich_cat_mat_three", NAME, Match::Contains("sandwich|Sandwich|SANDWICH")),
        p("steel_cat_mat_three", NAME, Match::Contains("steel|Steel|STEEL")),
        p("store_cat_mat_three", NAME, Match::Contains("store|Store|STORE")),
        p("extru_cat_mat_three", NAME, Match::Contains("extru|Extru|EXTRU")),
        p("sheet_cat_mat_three", NAME, Match::Contains("sheet|Sheet|SHEET")),
        p("framing_cat_mat_three", NAME, Match::Contains("framing|Framing|FRAMING")),
        p("framed_cat_mat_three", NAME, Match::Contains("framed|Framed|FRAMED")),
        p("wood_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Wood.as_str())),
        p("wood_cat_mat_three", NAME, Match::Contains("wood|Wood|WOOD")),
        p("lumber_cat_mat_three", NAME, Match::Contains("lumber|Lumber|LUMBER")),
        p("timber_cat_mat_three", NAME, Match::Contains("timber|Timber|TIMBER")),
        p("stud_cat_mat_three", NAME, Match::Contains("stud|Stud|STUD")),
        p("osb_cat_mat_three", NAME, Match::Contains("OSB")),
        p("lvl_cat_mat_three", NAME, Match::Contains("LVL")),
        p("lsl_cat_mat_three", NAME, Match::Contains("LSL")),
        p("clt_cat_mat_three", NAME, Match::Contains("CLT")),
        p("glue_cat_mat_three", NAME, Match::Contains("glue|Glue|GLUE")),
        p(
            "mdf_cat_mat_three",
            NAME,
            Match::Contains("MDF|medium density fiberboard|Medium density fiberboard"),
        ),
        p(
            "fiberboard_mdf_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Fiberboard (MDF)"),
        ),
        p(
            "particleboard_cat_mat_three",
            NAME,
            Match::Contains("particleboard|Particleboard|particle board|Particle board"),
        ),
        p("textile_cat_mat_two", RESOURCE_TYPE, Match::Contains("textile|Textile|TEXTILE")),
        p("plastic_cat_mat_two", RESOURCE_TYPE, Match::Contains("plastic|Plastic|PLASTIC")),
        p(
            "furniture_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("furniture|Furniture|FURNITURE"),
        ),
        p("softwood_cat_mat_three", NAME, Match::Contains("softwood|Softwood|SOFTWOOD")),
        p("plywood_cat_mat_three", NAME, Match::Contains("plywood|Plywood|PLYWOOD")),
        p("hardwood_cat_mat_three", NAME, Match::Contains("hardwood|Hardwood|HARDWOOD")),
        p("glazing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Glazing.as_str())),
        p("glazing_cat_mat_one", CSI_MASTERFORMAT, Match::Equals(8.0)),
        p(
            "glass_pane_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("glass pane|Glass pane|Glass Pane"),
        ),
        p(
            "glazing_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("glazing|Glazing|GLAZING"),
        ),
        p("igu_cat_mat_three", NAME, Match::Contains("IGU")),
        p(
            "insulation_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::Insulation.as_str()),
        ),
        p(
            "insulation_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("insulation|Insulation|INSULATION"),
        ),
        p(
            "acoustic_insul_panel_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains(
                "acoustic insulation panel|Acoustic insulation panel|Acoustic Insulation panel",
            ),
        ),
        p("xps_cat_mat_three", NAME, Match::Contains("XPS")),
        p("pir_cat_mat_three", NAME, Match::Contains("PIR")),
        p("batt_cat_mat_three", NAME, Match::Contains("batt|Batt|BATT")),
        p(
            "min_wool_cat_mat_three",
            NAME,
            Match::Contains("mineral wool|Mineral wool|Mineral Wool"),
        ),
        p(
            "rock_wool_cat_mat_three",
            NAME,
            Match::Contains("rock wool|Rock wool|Rock Wool"),
        ),
        p(
            "stone_wool_cat_mat_three",
            NAME,
            Match::Contains("stone wool|Stone wool|Stone Wool"),
        ),
        p(
            "mineral_fiber_cat_mat_three",
            NAME,
            Match::Contains("mineral fiber|Mineral fiber|Mineral Fiber"),
        ),
        p("cellulose_cat_mat_three", NAME, Match::Contains("Cellulose")),
        p("eps_cat_mat_three", NAME, Match::Contains("EPS")),
        p("spray_cat_mat_three", NAME, Match::Contains("spray|Spray|SPRAY")),
        p("foam_cat_mat_three", NAME, Match::Contains("foam|Foam|FOAM")),
        p("gypsum_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Gypsum.as_str())),
        p("gypsum_cat_mat_two", RESOURCE_TYPE, Match::Contains("gypsum|Gypsum|GYPSUM")),
        p(
            "gypsum_board_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("gypsum board|Gypsum board|Gypsum Board"),
        ),
        p(
            "acoustic_ceiling_panel_cat_mat_three",
            NAME,
            Match::Contains("acoustic ceiling|Acoustic ceiling|Acoustic Ceiling"),
        ),
        p("glass_cat_mat_three", NAME, Match::Contains("glass|Glass|GLASS")),
        p(
            "ceiling_panel_cat_mat_six",
            DATASOURCE,
            Match::Contains("ceiling panel|Ceiling panel|Ceiling Panel"),
        ),
        p("roofing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Roof.as_str())),
        p("roof_cat_mat_three", NAME, Match::Contains(" roof | Roof | ROOF ")),
        p("roof_start_cat_mat_three", NAME, Match::StartsWith("roof|Roof|ROOF")),
        p("roofing_cat_mat_three", NAME, Match::Contains(" roofing | Roofing | ROOFING ")),
        p(
            "roofing_start_cat_mat_three",
            NAME,
            Match::StartsWith("roofing|Roofing|ROOFING"),
        ),
        p(
            "plas_mem_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("plastic membrane|Plastic membrane|Plastic Membrane"),
        ),
        p(
            "bitumen_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Bitumen and other roofing"),
        ),
        p("bitumen_cat_mat_three", NAME, Match::Contains("bitumen|Bitumen|BITUMEN")),
        p("sbs_cat_mat_three", NAME, Match::Contains("SBS")),
        p("tpo_cat_mat_three", NAME, Match::Contains("TPO")),
        p("epdm_cat_mat_three", NAME, Match::Contains("EPDM")),
        p("pvc_cat_mat_three", NAME, Match::Contains("PVC")),
        p("HDPE_cat_mat_three", NAME, Match::Contains("HDPE")),
        p(
            "green_roof_cat_mat_three",
            NAME,
            Match::Contains("green roof|Green roof|Green Roof"),
        ),
        p("asphalt_cat_mat_three", NAME, Match::Contains("asphalt|Asphalt|ASPHALT")),
        p("shingle_cat_mat_three", NAME, Match::Contains("shingle|Shingle|SHINGLE")),
        p("fireproof_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Fireproof.as_str())),
        p(
            "fireproof_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("fireproofing|Fireproofing|FIREPROOFING"),
        ),
        p(
            "fire_resistive_cat_mat_three",
            NAME,
            Match::ContainsLiteral("Spray-applied fire-resistive"),
        ),
        p(
            "cementitious_cat_mat_three",
            NAME,
            Match::Contains("cementitious|Cementitious|CEMENTITIOUS"),
        ),
        p(
            "intumescent_cat_mat_three",
            NAME,
            Match::Contains("intumescent|Intumescent|INTUMESCENT"),
        ),
        // The pipe is part of the literal; no name actually contains it.
        p(
            "spray_applied_cat_mat_three",
            NAME,
            Match::ContainsLiteral("spray-applied|Spray-applied|Spray-Applied"),
        ),
        p("door_mq_one", MQ_1, Match::Full(MaterialQuantityOne::DoorFrame.as_str())),
        p("door_cat_mat_three", NAME, Match::Contains("door|Door|DOOR")),
        p(
            "industrial_door_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Metal and industrial doors"),
        ),
        p("frame_cat_mat_three", NAME, Match::Contains("frame|Frame|FRAME")),
        p(
            "alum_framed_glass_door_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Aluminium-framed glass doors"),
        ),
        p(
            "alum_frame_window_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("aluminium frame window|Aluminium frame window"),
        ),
        p("sliding_cat_mat_three", NAME, Match::Contains("sliding|Sliding|SLIDING")),
        p(
            "revolving_cat_mat_three",
            NAME,
            Match::Contains("revolving|Revolving|REVOLVING"),
        ),
        p(
            "fiberglass_cat_mat_three",
            NAME,
            Match::Contains("fiberglass|Fiberglass|FIBERGLASS"),
        ),
        p("particle_cat_mat_three", NAME, Match::Contains("particle|Particle|PARTICLE")),
        p("window_mq_one", MQ_1, Match::Full(MaterialQuantityOne::WindowFrame.as_str())),
        p("window_cat_mat_three", NAME, Match::Contains("window|Window|WINDOW")),
        p(
            "part_sys_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Partitioning systems (without windows)"),
        ),
        p("pvc_frame_window_cat_mat_two", RESOURCE_TYPE, Match::Contains("PVC frame windows")),
        p(
            "glass_fac_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Glass facades and glazing"),
        ),
        p(
            "aluminium_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("aluminium|Aluminium|ALUMINIUM"),
        ),
        p("unitized_cat_mat_three", NAME, Match::Contains("unitized|Unitized|UNITIZED")),
        p(
            "acous_ceilings_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AcousticCeilings.as_str()),
        ),
        p(
            "metal_ceiling_cat_mat_three",
            NAME,
            Match::Contains("metal ceiling|Metal ceiling|Metal Ceiling"),
        ),
        p("suspen_cat_mat_three", NAME, Match::Contains("suspen|Suspen|SUSPEN")),
        p("fiber_cat_mat_three", NAME, Match::Contains("fiber|Fiber|FIBER")),
        p("cladding_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Cladding.as_str())),
        p("formed_cat_mat_three", NAME, Match::Contains("formed|Formed|FORMED")),
        p(
            "roll_formed_start_cat_mat_three",
            NAME,
            Match::StartsWith("roll formed|Roll formed|Roll Formed"),
        ),
        p(
            "sandwich_panel_cat_mat_three",
            NAME,
            Match::Contains("sandwich panel|Sandwich panel|Sandwich Panel"),
        ),
        p(
            "insulated_metal_cat_mat_three",
            NAME,
            Match::Contains("insulated metal|Insulated metal|Insulated Metal"),
        ),
        p(
            "fibre_cement_prod_cat_mat_three",
            NAME,
            Match::Contains("fibre cement products|Fibre cement products|Fibre Cement products"),
        ),
        p(
            "fibre_cement_board_cat_mat_three",
            NAME,
            Match::Contains("fibre cement board|Fibre cement board|Fibre Cement board"),
        ),
        p(
            "fiber_reinf_cat_mat_three",
            NAME,
            Match::Contains("fiber reinforced|Fiber reinforced|Fiber Reinforced"),
        ),
        // The "sutcco" spelling is what the lowercase exports actually carry.
        p("stucco_cat_mat_three", NAME, Match::Contains("sutcco|Stucco|STUCCO")),
        p(
            "polyethylene_cat_mat_three",
            NAME,
            Match::Contains("polyethylene|Polyethylene|POLYETHYLENE"),
        ),
        p(
            "high_pressure_cat_mat_three",
            NAME,
            Match::Contains("high pressure|High pressure|High Pressure"),
        ),
        p("hpl_cat_mat_three", NAME, Match::Contains("HPL")),
        p(
            "adhes_seal_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AdhesSeal.as_str()),
        ),
        p(
            "vapor_barrier_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AirVapor.as_str()),
        ),
        p(
            "sealants_cat_mat_two",
            RESOURCE_TYPE,
            Match::ContainsLiteral("Sealants (silicone and others)"),
        ),
        p("coatings_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Coatings.as_str())),
        p("paint_cat_mat_three", NAME, Match::Contains("paint|Paint|PAINT")),
        p("coating_cat_mat_two", RESOURCE_TYPE, Match::Contains("coating|Coating|COATING")),
        p(
            "paint_coat_laq_cat_mat_two",
            RESOURCE_TYPE,
            Match::Full("Paints, coatings and lacquers"),
        ),
        p(
            "high_perform_coating_cat_mat_three",
            NAME,
            Match::Contains("high performance coating|High performance coating"),
        ),
        p("floor_tile_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Floor.as_str())),
        p(
            "res_floor_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("resilient flooring|Resilient flooring"),
        ),
        p(
            "lam_floor_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("laminate flooring|Laminate flooring"),
        ),
        p(
            "lin_floor_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("linoleum flooring|Linoleum flooring"),
        ),
        p(
            "wall_floor_tile_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Wall and floor tiles"),
        ),
        p(
            "other_floor_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Other flooring types"),
        ),
        p("vinyl_cat_mat_three", NAME, Match::Contains("vinyl|Vinyl|VINYL")),
        p("rubber_cat_mat_three", NAME, Match::Contains("rubber|Rubber|RUBBER")),
        p("carpet_cat_mat_three", NAME, Match::Contains("carpet|Carpet|CARPET")),
        p("terrazzo_cat_mat_three", NAME, Match::Contains("terrazzo|Terrazzo|TERRAZZO")),
        p("ceramic_cat_mat_two", RESOURCE_TYPE, Match::Contains("ceramic|Ceramic|CERAMIC")),
        p(
            "porcelain_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("porcelain|Porcelain|PORCELAIN"),
        ),
        p(
            "carpet_flooring_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("carpet flooring|Carpet flooring|Carpet Flooring"),
        ),
        p(
            "raised_access_floor_cat_mat_three",
            NAME,
            Match::Contains("raised access floor system|Raised access floor system"),
        ),
        p(
            "synth_comp_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::SynthComp.as_str()),
        ),
        p(
            "plas_profile_cat_mat_two",
            RESOURCE_TYPE,
            Match::Contains("Plastic profiles and products"),
        ),
        p(
            "wall_coverings_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::WallCoverings.as_str()),
        ),
        p(
            "vinyl_cover_cat_mat_three",
            NAME,
            Match::Contains("vinyl wallcovering|Vinyl wallcovering|Vinyl Wallcovering"),
        ),
        p("other_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Other.as_str())),
        p("other_mq_two", MQ_2, Match::Full(MaterialQuantityTwo::Other.as_str())),
        p("oc_csi_six", CSI_MASTERFORMAT, Match::Equals(6.0)),
        p("oc_csi_seven", CSI_MASTERFORMAT, Match::Equals(7.0)),
        p("oc_csi_nine", CSI_MASTERFORMAT, Match::Equals(9.0)),
        p("oc_csi_ten", CSI_MASTERFORMAT, Match::Equals(10.0)),
        p("oc_csi_twelve", CSI_MASTERFORMAT, Match::Equals(12.0)),
        p("oc_csi_twenty_two", CSI_MASTERFORMAT, Match::Equals(22.0)),
        p("oc_csi_twenty_three", CSI_MASTERFORMAT, Match::Equals(23.0)),
        p("oc_csi_twenty_five", CSI_MASTERFORMAT, Match::Equals(25.0)),
        p("oc_csi_twenty_six", CSI_MASTERFORMAT, Match::Equals(26.0)),
        p("oc_csi_thirty_one", CSI_MASTERFORMAT, Match::Equals(31.0)),
        p("oc_csi_thirty_three", CSI_MASTERFORMAT, Match::Equals(33.0)),
    ]
}

fn tally_specs() -> Vec<PredicateSpec> {
    vec![
        p("conc_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Concrete.as_str())),
        p("conc_cat_mat_one", TALLY_ENTRY_DIVISION, Match::Full("03 - Concrete")),
        p("conc_cat_mat_two", MATERIAL_GROUP, Match::Full("Concrete")),
        p(
            "cip_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Full("Cast-in-place Concrete"),
        ),
        p(
            "cip_lw_3000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 3000 psi"),
        ),
        p(
            "cip_lw_3000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 2501-3000 psi"),
        ),
        p(
            "cip_lw_3000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; lightweight structural concrete; 2501-3000 psi"),
        ),
        p(
            "cip_lw_4000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 4000 psi"),
        ),
        p(
            "cip_lw_4000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 3001-4000 psi"),
        ),
        p(
            "cip_lw_4000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; lightweight structural concrete; 3001-4000 psi"),
        ),
        p(
            "cip_lw_5000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 5000 psi"),
        ),
        p(
            "cip_lw_5000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, lightweight structural concrete, 4001-5000 psi"),
        ),
        p(
            "cip_lw_5000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; lightweight structural concrete; 4001-5000 psi"),
        ),
        p(
            "cip_nw_2500_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 2500 psi"),
        ),
        p(
            "cip_nw_2500_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 0-2500 psi"),
        ),
        p(
            "cip_nw_2500_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 0-2500 psi"),
        ),
        p(
            "cip_nw_3000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 3000 psi"),
        ),
        p(
            "cip_nw_3000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 2501-3000 psi"),
        ),
        p(
            "cip_nw_3000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 2501-3000 psi"),
        ),
        p(
            "cip_nw_4000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 4000 psi"),
        ),
        p(
            "cip_nw_4000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 3001-4000 psi"),
        ),
        p(
            "cip_nw_4000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 3001-4000 psi"),
        ),
        p(
            "cip_nw_5000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 5000 psi"),
        ),
        p(
            "cip_nw_5000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 4001-5000 psi"),
        ),
        p(
            "cip_nw_5000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 4001-5000 psi"),
        ),
        p(
            "cip_nw_6000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 6000 psi"),
        ),
        p(
            "cip_nw_6000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 5001-6000 psi"),
        ),
        p(
            "cip_nw_6000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 5001-6000 psi"),
        ),
        p(
            "cip_nw_8000_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 8000 psi"),
        ),
        p(
            "cip_nw_8000_cat_mat_four_alt1",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete, structural concrete, 6001-8000 psi"),
        ),
        p(
            "cip_nw_8000_cat_mat_four_alt2",
            TALLY_ENTRY_NAME,
            Match::Contains("Cast-in-place concrete; structural concrete; 6001-8000 psi"),
        ),
        p(
            "precast_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Full("Precast Concrete"),
        ),
        p("gfrc_cat_mat_three", MATERIAL_NAME, Match::Contains("gfrc|Gfrc|GFRC")),
        p(
            "self_lvl_under_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains(
                "self-leveling underlayment|Self-leveling underlayment|Self-leveling Underlayment",
            ),
        ),
        p(
            "str_conc_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("structural concrete|Structural concrete|Structural concrete"),
        ),
        p(
            "lw_conc_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("lightweight concrete|Lightweight concrete|Lightweight Concrete"),
        ),
        p("steel_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Steel.as_str())),
        p("metals_cat_mat_one", TALLY_ENTRY_DIVISION, Match::Full("05 - Metals")),
        p("metal_cat_mat_two", MATERIAL_GROUP, Match::Full("Metal")),
        p("steel_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Full("Steel")),
        p("steel_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("steel|Steel|STEEL")),
        p("stair_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Full("Stair")),
        p(
            "reinf_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Full("Concrete Reinforcement"),
        ),
        p(
            "gal_steel_support_cat_mat_three",
            MATERIAL_NAME,
            Match::Full("Galvanized steel support"),
        ),
        p(
            "chromium_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("chromium|Chromium|CHROMIUM"),
        ),
        p(
            "reinf_rod_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel, reinforcing rod|Steel; reinforcing rod"),
        ),
        p(
            "reinf_cmc_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel, concrete reinforcing steel, CMC - EPD"),
        ),
        p(
            "alt_reinf_cmc_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel; concrete reinforcing steel; CMC - EPD"),
        ),
        p(
            "reinf_csri_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel, fabricated steel reinforcement, CRSI - EPD"),
        ),
        p(
            "alt_reinf_csri_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel; fabricated steel reinforcement; CRSI - EPD"),
        ),
        p(
            "reinf_weld_w_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel, welded wire mesh|Steel; welded wire mesh"),
        ),
        p(
            "reinf_woven_w_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Steel, woven wire mesh|Steel; woven wire mesh"),
        ),
        p(
            "hot_rolled_cat_mat_five",
            TALLY_ENTRY_DESCRIPTION,
            Match::Contains("Hot rolled|Hot-rolled"),
        ),
        p(
            "hot_rolled_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Hot rolled|Hot-rolled"),
        ),
        p(
            "cold_formed_cat_mat_five",
            TALLY_ENTRY_DESCRIPTION,
            Match::Contains("cold formed|cold-formed|Cold formed|Cold-formed"),
        ),
        p(
            "hss_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("HSS section|rectangular tubing|round tubing"),
        ),
        p("plate_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("plate|Plate|PLATE")),
        p("w_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("W section")),
        p("stud_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("stud|Stud|STUD")),
        p("deck_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("deck|Deck|DECK")),
        p("steel_cable_cat_mat_three", MATERIAL_NAME, Match::Full("Steel, cable")),
        p(
            "pr_conc_bm_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Full("Precast concrete beam"),
        ),
        p(
            "quarter_in_cat_mat_five",
            TALLY_ENTRY_DESCRIPTION,
            Match::ContainsLiteral("1/4"),
        ),
        p("joist_cat_mat_three", MATERIAL_NAME, Match::Contains("joist|Joist|JOIST")),
        p("masonry_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Masonry.as_str())),
        p("masonry_cat_mat_one", TALLY_ENTRY_DIVISION, Match::Full("04 - Masonry")),
        p("masonry_cat_mat_two", MATERIAL_GROUP, Match::Full("Masonry")),
        p("stone_cat_mat_two", MATERIAL_GROUP, Match::Full("Stone")),
        p("mortar_cat_mat_three", MATERIAL_NAME, Match::Contains("Mortar|mortar|MORTAR")),
        p("cmu_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Full("CMU")),
        p("brick_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Full("Brick")),
        p("stone_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Full("Stone")),
        p("grout_cat_mat_three", MATERIAL_NAME, Match::Contains("grout|Grout|GROUT")),
        p("alum_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Aluminum.as_str())),
        p(
            "aluminum_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("aluminum|Aluminum|ALUMINUM"),
        ),
        p(
            "aluminum_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("aluminum|Aluminum|ALUMINUM"),
        ),
        p(
            "alum_faced_comp_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("Aluminum-faced composite|Aluminum-Faced composite|Alumnium-Faced Composite"),
        ),
        p(
            "ins_metal_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("insulated metal|Insulated metal|Insulated Metal"),
        ),
        p(
            "metal_wall_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("metal wall|Metal wall|Metal Wall"),
        ),
        p(
            "ceil_sys_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Contains("ceiling system|Ceiling system|Ceiling System"),
        ),
        p("door_cat_ele_four", TALLY_ENTRY_CATEGORY, Match::Contains("door|Door|DOOR")),
        p("door_cat_mat_three", MATERIAL_NAME, Match::Contains("door|Door|DOOR")),
        p(
            "mullion_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Contains("mullion|Mullion|MULLION"),
        ),
        p(
            "window_frame_cat_ele_four",
            TALLY_ENTRY_CATEGORY,
            Match::Contains("window frame|Window frame|Window Frame"),
        ),
        p("extru_cat_mat_three", MATERIAL_NAME, Match::Contains("extru|Extru|EXTRU")),
        p("sheet_cat_mat_three", MATERIAL_NAME, Match::Contains("sheet|Sheet|SHEET")),
        p("formed_cat_mat_three", MATERIAL_NAME, Match::Contains("formed|Formed|FORMED")),
        p("siding_cat_mat_three", MATERIAL_NAME, Match::Contains("siding|Siding|SIDING")),
        p(
            "alum_mull_sys_cat_mat_five",
            TALLY_ENTRY_DESCRIPTION,
            Match::Contains("Aluminum mullion framing|Aluminum Mullion framing|Aluminum Mullion Framing"),
        ),
        p("wood_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Wood.as_str())),
        p("wood_cat_mat_two", MATERIAL_GROUP, Match::Contains("wood|Wood|WOOD")),
        p("soft_cat_mat_three", MATERIAL_NAME, Match::Contains("soft|Soft|SOFT")),
        p(
            "plywood_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("plywood|Plywood|PLYWOOD"),
        ),
        p("osb_cat_mat_three", MATERIAL_NAME, Match::Contains("OSB")),
        p("mdf_cat_mat_three", MATERIAL_NAME, Match::Contains("MDF")),
        p("psl_cat_mat_three", MATERIAL_NAME, Match::Contains("PSL")),
        p("glulam_cat_mat_three", MATERIAL_NAME, Match::Contains("glulam|Glulam|GLULAM")),
        p("clt_cat_mat_three", MATERIAL_NAME, Match::Contains("CLT")),
        p(
            "i_joist_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("i-joist|I-joist|I-Joist"),
        ),
        p("lsl_cat_mat_three", MATERIAL_NAME, Match::Contains("LSL")),
        p("lvl_cat_mat_three", MATERIAL_NAME, Match::Contains("LVL")),
        p(
            "hardwood_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("hardwood|Hardwood|HARDWOOD"),
        ),
        p("lumber_cat_mat_three", MATERIAL_NAME, Match::Contains("lumber|Lumber|LUMBER")),
        p("heavy_cat_mat_three", MATERIAL_NAME, Match::Contains("heavy|Heavy|HEAVY")),
        p("glazing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Glazing.as_str())),
        p(
            "glazing_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("glazing|Glazing|GLAZING"),
        ),
        p(
            "spandrel_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("spandrel|Spandrel|SPANDREL"),
        ),
        p("igu_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("IGU")),
        p("glass_cat_mat_three", MATERIAL_NAME, Match::Contains("glass|Glass|GLASS")),
        p(
            "insulation_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::Insulation.as_str()),
        ),
        p(
            "insulation_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("insulation|Insulation|INSULATION"),
        ),
        p(
            "gyp_board_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("Wall board, gypsum|Wall board; gypsum"),
        ),
        p("xps_cat_mat_three", MATERIAL_NAME, Match::Contains("XPS")),
        p("pir_cat_mat_three", MATERIAL_NAME, Match::Contains("PIR")),
        p(
            "min_wool_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("mineral wool|Mineral wool|Mineral Wool"),
        ),
        p(
            "fiberglass_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("fiberglass|Fiberglass|FIBERGLASS"),
        ),
        p(
            "glass_fiber_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("glass fiber|Glass fiber|Glass Fiber"),
        ),
        p(
            "glass_wool_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("glass wool|Glass wool|Glass Wool"),
        ),
        p("cellulose_cat_mat_three", MATERIAL_NAME, Match::Contains("Cellulose")),
        p("eps_cat_mat_three", MATERIAL_NAME, Match::Contains("EPS")),
        p("spray_cat_mat_three", MATERIAL_NAME, Match::Contains("Spray")),
        p("board_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("board|Board|BOARD")),
        p("low_cat_mat_three", MATERIAL_NAME, Match::Contains("low|Low|LOW")),
        p("high_cat_mat_three", MATERIAL_NAME, Match::Contains("high|High|HIGH")),
        p("ecose_cat_mat_three", MATERIAL_NAME, Match::Contains("ECOSE")),
        p("ddp_cat_mat_three", MATERIAL_NAME, Match::Contains("DDP")),
        p("115_cat_mat_three", MATERIAL_NAME, Match::Contains("115")),
        p("132_cat_mat_three", MATERIAL_NAME, Match::Contains("132")),
        p("135_cat_mat_three", MATERIAL_NAME, Match::Contains("135")),
        p("140_cat_mat_three", MATERIAL_NAME, Match::Contains("140")),
        p("432_cat_mat_three", MATERIAL_NAME, Match::Contains("432")),
        p("gypsum_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Gypsum.as_str())),
        p(
            "plaster_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("plaster|Plaster|PLASTER"),
        ),
        p("foil_facing_cat_mat_three", MATERIAL_NAME, Match::Full("Foil facing")),
        p(
            "fib_glass_cat_mat_three",
            MATERIAL_NAME,
            Match::Full("Fiberglass mat gypsum sheathing board"),
        ),
        p("roofing_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Roof.as_str())),
        p(
            "roof_mem_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("Roofing membrane|Roofing Membrane|Roof membrane|Roof Membrane"),
        ),
        p("roof_cat_mat_three", MATERIAL_NAME, Match::Contains(" roof | Roof | ROOF ")),
        p("roof_start_cat_mat_three", MATERIAL_NAME, Match::StartsWith("roof|Roof|ROOF")),
        p(
            "roofing_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains(" roofing | Roofing | ROOFING "),
        ),
        p(
            "roofing_start_cat_mat_three",
            MATERIAL_NAME,
            Match::StartsWith("roofing|Roofing|ROOFING"),
        ),
        p("roof_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains(" roof | Roof | ROOF ")),
        p("roof_start_cat_mat_four", TALLY_ENTRY_NAME, Match::StartsWith("roof|Roof|ROOF")),
        p("insul_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("insul|Insul|INSUL")),
        p("sbs_cat_mat_three", MATERIAL_NAME, Match::Contains("SBS")),
        p(
            "mod_bitumen_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("modified bitumen|Modified bitumen|Modified Bitumen"),
        ),
        p(
            "built_up_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("built-up|Built-up|Built-Up"),
        ),
        p("bur_cat_mat_three", MATERIAL_NAME, Match::Contains("BUR")),
        p("tpo_cat_mat_three", MATERIAL_NAME, Match::Contains("TPO")),
        p("epdm_cat_mat_three", MATERIAL_NAME, Match::Contains("EPDM")),
        p("PVC_cat_mat_three", MATERIAL_NAME, Match::Contains("PVC")),
        p("fireproof_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Fireproof.as_str())),
        p(
            "fireproof_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("fireproofing|Fireproofing|FIREPROOFING"),
        ),
        p(
            "cementitious_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("cementitious|Cementitious|CEMENTITIOUS"),
        ),
        p(
            "intumescent_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("intumescent|Intumescent|INTUMESCENT"),
        ),
        p(
            "doors_and_frames_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::DoorFrame.as_str()),
        ),
        p("door_cat_mat_two", MATERIAL_GROUP, Match::Contains("door|Door|DOOR")),
        p(
            "door_frame_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("door frame|Door frame|Door Frame"),
        ),
        p("wood_cat_mat_three", MATERIAL_NAME, Match::Contains("wood|Wood|WOOD")),
        p("steel_cat_mat_three", MATERIAL_NAME, Match::Contains("steel|Steel|STEEL")),
        p(
            "galvanized_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("galvanized|Galvanized|GALVANIZED"),
        ),
        p("hollow_cat_mat_three", MATERIAL_NAME, Match::Contains("hollow|Hollow|HOLLOW")),
        p(
            "opening_hardware_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("opening hardware|Opening hardware|Opening Hardware"),
        ),
        p(
            "window_frame_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::WindowFrame.as_str()),
        ),
        p(
            "window_frame_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("window frame|Window frame|Window Frame"),
        ),
        p(
            "aluminum_cat_mat_five",
            TALLY_ENTRY_DESCRIPTION,
            Match::Contains("aluminum|Aluminum|ALUMINUM"),
        ),
        p(
            "acous_ceilings_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AcousticCeilings.as_str()),
        ),
        p(
            "ceil_tile_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("ceiling tile|Ceiling tile|Ceiling Tile"),
        ),
        p(
            "ceil_tile_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("ceiling tile|Ceiling tile|Ceiling Tile"),
        ),
        p("fiber_cat_mat_three", MATERIAL_NAME, Match::Contains("fiber|Fiber|FIBER")),
        p(
            "suspended_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("suspended|Suspended|SUSPENDED"),
        ),
        p(
            "synth_comp_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::SynthComp.as_str()),
        ),
        p(
            "composite_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("composite|Composite|COMPOSITE"),
        ),
        p(
            "plastic_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("plastic|Plastic|PLASTIC"),
        ),
        p("cladding_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Cladding.as_str())),
        p(
            "cladding_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("cladding|Cladding|CLADDING"),
        ),
        p(
            "terracotta_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("terracotta|Terracotta|TERRACOTTA"),
        ),
        p(
            "fastener_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("fastener|Fastener|FASTENER"),
        ),
        p("stucco_cat_mat_three", MATERIAL_NAME, Match::Contains("stucco|Stucco|STUCCO")),
        p("copper_cat_mat_three", MATERIAL_NAME, Match::Contains("copper|Copper|COPPER")),
        p("zinc_cat_mat_three", MATERIAL_NAME, Match::Contains("zinc|Zinc|ZINC")),
        p(
            "fiber_cem_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("fiber cement|Fiber cement|Fiber Cement"),
        ),
        p("gfrc_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("gfrc|Gfrc|GFRC")),
        p("panel_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("panel|Panel|PANEL")),
        p(
            "metal_roofing_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("metal roofing|Metal roofing|Metal Roofing"),
        ),
        p("siding_cat_mat_four", TALLY_ENTRY_NAME, Match::Contains("siding|Siding|SIDING")),
        p(
            "insulated_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("insulated|Insulated|INSULATED"),
        ),
        p(
            "adhes_seal_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AdhesSeal.as_str()),
        ),
        p(
            "adhesive_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("adhesive|Adhesive|ADHESIVE"),
        ),
        p(
            "sealant_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("sealant|Sealant|SEALANT"),
        ),
        p(
            "vapor_barrier_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::AirVapor.as_str()),
        ),
        p(
            "vapor_barrier_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("vapor barrier|Vapor barrier|Vapor Barrier"),
        ),
        p("coatings_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Coatings.as_str())),
        p(
            "coating_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("coating|Coating|COATING"),
        ),
        p(
            "metal_coating_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("metal coating|Metal coating|Metal Coating"),
        ),
        p("paint_cat_mat_three", MATERIAL_NAME, Match::Contains("paint|Paint|PAINT")),
        p("floor_tile_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Floor.as_str())),
        p(
            "floor_tile_cat_mat_two",
            MATERIAL_GROUP,
            Match::ContainsLiteral("Flooring & Tile"),
        ),
        p("trim_rubber_cat_mat_three", MATERIAL_NAME, Match::Contains("Trim, rubber")),
        p("carpet_cat_mat_three", MATERIAL_NAME, Match::Contains("carpet|Carpet|CARPET")),
        p(
            "ceramic_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("ceramic|Ceramic|CERAMIC"),
        ),
        p(
            "porcelain_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("porcelain|Porcelain|PORCELAIN"),
        ),
        p(
            "stone_tile_cat_mat_four",
            TALLY_ENTRY_NAME,
            Match::Contains("stone tile|Stone tile|Stone Tile"),
        ),
        p("vinyl_cat_mat_three", MATERIAL_NAME, Match::Contains("vinyl|Vinyl|VINYL")),
        p("rubber_cat_mat_three", MATERIAL_NAME, Match::Contains("rubber|Rubber|RUBBER")),
        p(
            "other_metals_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::OthMetals.as_str()),
        ),
        p("brass_cat_mat_three", MATERIAL_NAME, Match::Contains("brass|Brass|BRASS")),
        p("bronze_cat_mat_three", MATERIAL_NAME, Match::Contains("bronze|Bronze|BRONZE")),
        p(
            "titanium_cat_mat_three",
            MATERIAL_NAME,
            Match::Contains("titanium|Titanium|TITANIUM"),
        ),
        p(
            "wall_coverings_mq_one",
            MQ_1,
            Match::Full(MaterialQuantityOne::WallCoverings.as_str()),
        ),
        p(
            "wall_cover_cat_mat_two",
            MATERIAL_GROUP,
            Match::Contains("wall coverings|Wall coverings|Wall Coverings"),
        ),
        p("other_mq_one", MQ_1, Match::Full(MaterialQuantityOne::Other.as_str())),
        p("other_mq_two", MQ_2, Match::Full(MaterialQuantityTwo::Other.as_str())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn oneclick_table() -> Table {
        let mut t = Table::new(
            [
                MQ_1,
                MQ_2,
                CSI_MASTERFORMAT,
                RESOURCE_TYPE,
                NAME,
                RESOURCE,
                DATASOURCE,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
        t.push_row(vec![
            Value::str("Concrete"),
            Value::str("Other"),
            Value::Num(3.0),
            Value::str("Structural concrete (beams, columns, piling)"),
            Value::str("Ready-mix concrete, 3001-4000 psi"),
            Value::str("concrete, 4000"),
            Value::str("EPD"),
        ])
        .unwrap();
        t
    }

    #[test]
    fn test_oneclick_registry_masks() {
        let registry = oneclick_registry(&oneclick_table()).unwrap();
        assert_eq!(registry.get("conc_mq_one").unwrap(), &vec![true]);
        assert_eq!(registry.get("other_mq_two").unwrap(), &vec![true]);
        assert_eq!(registry.get("conc_cat_mat_one").unwrap(), &vec![true]);
        // parenthesized resource type only matches the literal form
        assert_eq!(registry.get("str_conc_cat_mat_two").unwrap(), &vec![true]);
        assert_eq!(registry.get("4000_psi_cat_mat_five").unwrap(), &vec![true]);
        assert_eq!(registry.get("5000_psi_cat_mat_five").unwrap(), &vec![false]);
    }

    #[test]
    fn test_oneclick_spray_applied_alternation_is_literal() {
        let mut t = oneclick_table();
        t.set_column(NAME, Value::str("Spray-applied insulation"));
        let registry = oneclick_registry(&t).unwrap();
        assert_eq!(registry.get("spray_applied_cat_mat_three").unwrap(), &vec![false]);
    }

    #[test]
    fn test_tally_registry_masks() {
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
        t.push_row(vec![
            Value::str("Concrete"),
            Value::str("Other"),
            Value::str("03 - Concrete"),
            Value::str("Concrete"),
            Value::str("Cast-in-place Concrete"),
            Value::str("Cast-in-place concrete; structural concrete; 3001-4000 psi"),
            Value::str("Slab, 1/4 in topping"),
            Value::str("Structural concrete, 4000 psi"),
        ])
        .unwrap();
        let registry = tally_registry(&t).unwrap();
        assert_eq!(registry.get("cip_nw_4000_cat_mat_four_alt2").unwrap(), &vec![true]);
        assert_eq!(registry.get("cip_nw_4000_cat_mat_four").unwrap(), &vec![false]);
        assert_eq!(registry.get("quarter_in_cat_mat_five").unwrap(), &vec![true]);
        assert_eq!(registry.get("conc_cat_mat_two").unwrap(), &vec![true]);
    }
}
