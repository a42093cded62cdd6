//! Predicate tables for the element classification pass.

use crate::classify::registry::{build_registry, p, Match, PredicateSpec, Registry};
use crate::constants::{
    CLF_OMNI, CSI_MASTERFORMAT, MATERIAL_GROUP, MATERIAL_NAME, NAME, OMNICLASS, QUESTION,
    REVIT_BUILDING_ELEMENT, REVIT_CATEGORY, REVIT_FAMILY_NAME, TALLY_ENTRY_CATEGORY,
    TALLY_ENTRY_DIVISION, TALLY_ENTRY_NAME,
};
use crate::error::Result;
use crate::table::Table;

pub fn oneclick_registry(table: &Table) -> Result<Registry> {
    build_registry(table, ONECLICK_ELEMENT_PREDICATES)
}

pub fn tally_registry(table: &Table) -> Result<Registry> {
    build_registry(table, TALLY_ELEMENT_PREDICATES)
}

static ONECLICK_ELEMENT_PREDICATES: &[PredicateSpec] = &[
    p("oc_clf_omni_na", CLF_OMNI, Match::IsNull),
    p("oc_omni_sub", OMNICLASS, Match::StartsWith("21-01")),
    p("oc_omni_shell_super", OMNICLASS, Match::StartsWith("21-02 1")),
    p("oc_omni_shell_enc", OMNICLASS, Match::StartsWith("21-02 2|21-02 3")),
    p("oc_omni_int_con", OMNICLASS, Match::StartsWith("21-03 1")),
    p("oc_omni_int_fin", OMNICLASS, Match::StartsWith("21-03 2")),
    p("oc_omni_mep", OMNICLASS, Match::StartsWith("21-04|21-05")),
    p("oc_omni_nd", OMNICLASS, Match::Full("Not defined")),
    p(
        "oc_q_fdn",
        QUESTION,
        Match::Full("Foundation, sub-surface, basement and retaining walls"),
    ),
    p(
        "oc_q_vert",
        QUESTION,
        Match::Full("Columns and load-bearing vertical structures"),
    ),
    p(
        "oc_q_horz",
        QUESTION,
        Match::Full("Floor slabs, ceilings, roofing decks, beams and roof"),
    ),
    p("oc_q_other", QUESTION, Match::Full("Other structures and materials")),
    p("oc_q_ext", QUESTION, Match::Full("External walls and facade")),
    p(
        "oc_q_int",
        QUESTION,
        Match::Full("Internal walls and non-bearing structures"),
    ),
    p("oc_q_win_door", QUESTION, Match::Full("Windows and doors")),
    p("oc_csi_three", CSI_MASTERFORMAT, Match::Equals(3.0)),
    p("oc_csi_four", CSI_MASTERFORMAT, Match::Equals(4.0)),
    p("oc_csi_five", CSI_MASTERFORMAT, Match::Equals(5.0)),
    p("oc_csi_six", CSI_MASTERFORMAT, Match::Equals(6.0)),
    p("oc_csi_seven", CSI_MASTERFORMAT, Match::Equals(7.0)),
    p("oc_csi_eight", CSI_MASTERFORMAT, Match::Equals(8.0)),
    p("oc_csi_nine", CSI_MASTERFORMAT, Match::Equals(9.0)),
    p("oc_csi_ten", CSI_MASTERFORMAT, Match::Equals(10.0)),
    p("oc_csi_twelve", CSI_MASTERFORMAT, Match::Equals(12.0)),
    p("oc_csi_twenty_two", CSI_MASTERFORMAT, Match::Equals(22.0)),
    p("oc_csi_twenty_three", CSI_MASTERFORMAT, Match::Equals(23.0)),
    p("oc_csi_twenty_five", CSI_MASTERFORMAT, Match::Equals(25.0)),
    p("oc_csi_twenty_six", CSI_MASTERFORMAT, Match::Equals(26.0)),
    p("oc_csi_thirty_one", CSI_MASTERFORMAT, Match::Equals(31.0)),
    p("oc_csi_thirty_three", CSI_MASTERFORMAT, Match::Equals(33.0)),
    p("oc_n_glass_sheath", NAME, Match::Contains("glass mat sheathing")),
    p("oc_n_carpet", NAME, Match::Contains("carpet|Carpet|CARPET")),
    p("oc_n_cladding", NAME, Match::Contains("cladding|Cladding|CLADDING")),
    p("oc_n_flooring", NAME, Match::Contains("flooring|Flooring|FLOORING")),
    p("oc_n_ceil_pan", NAME, Match::Contains("Ceiling Panels")),
    p("oc_n_acoustic", NAME, Match::Contains("acoustic|Acoustic|ACOUSTIC")),
    p("oc_n_deck", NAME, Match::Contains("deck|Deck|DECK")),
    p("oc_n_timber", NAME, Match::Contains("timber|Timber|TIMBER")),
];

static TALLY_ELEMENT_PREDICATES: &[PredicateSpec] = &[
    p("ty_clf_omni_na", CLF_OMNI, Match::IsNull),
    p("rt_c_ceilings", REVIT_CATEGORY, Match::Full("Ceilings")),
    p(
        "rt_c_cw_panels",
        REVIT_CATEGORY,
        Match::Full("Curtain Panels|Curtainwall Panels"),
    ),
    p(
        "rt_c_cw_mull",
        REVIT_CATEGORY,
        Match::Full("Curtain Wall Mullions|Curtainwall Mullions"),
    ),
    p("rt_c_door", REVIT_CATEGORY, Match::Full("Doors")),
    p("rt_c_floor", REVIT_CATEGORY, Match::Full("Floors")),
    p("rt_c_roof", REVIT_CATEGORY, Match::Full("Roofs")),
    p("rt_c_railing", REVIT_CATEGORY, Match::Full("Railings")),
    p("rt_c_stairs", REVIT_CATEGORY, Match::Full("Stairs")),
    p("rt_c_str_col", REVIT_CATEGORY, Match::Full("Structural Columns")),
    p("rt_c_str_con", REVIT_CATEGORY, Match::Full("Structural Connections")),
    p("rt_c_str_fdn", REVIT_CATEGORY, Match::Full("Structural Foundations")),
    p("rt_c_str_frm", REVIT_CATEGORY, Match::Full("Structural Framing")),
    p("rt_c_wall", REVIT_CATEGORY, Match::Full("Walls")),
    p("rt_c_window", REVIT_CATEGORY, Match::Full("Windows")),
    p("rt_be_enc", REVIT_BUILDING_ELEMENT, Match::Full("Enclosure")),
    p("rt_be_int", REVIT_BUILDING_ELEMENT, Match::Full("Interiors")),
    p("rt_be_sub", REVIT_BUILDING_ELEMENT, Match::Full("Substructure")),
    p("rt_be_sup", REVIT_BUILDING_ELEMENT, Match::Full("Superstructure")),
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
    p(
        "rt_fn_enc",
        REVIT_FAMILY_NAME,
        Match::Contains("enc|Enc|ENC|enclosure|Enclosure|ENCLOSURE"),
    ),
    p(
        "rt_fn_shade",
        REVIT_FAMILY_NAME,
        Match::Contains("shade|Shade|Shading|shading|SHADING"),
    ),
    p(
        "rt_fn_glaze",
        REVIT_FAMILY_NAME,
        Match::Contains("glazing|Glazing|GLAZING|glaze|Glaze|GLAZE"),
    ),
    p(
        "rt_fn_fdn",
        REVIT_FAMILY_NAME,
        Match::Contains("fdn|Fdn|FDN|foundation|Foundation|FOUNDATION"),
    ),
    p(
        "rt_fn_ftg",
        REVIT_FAMILY_NAME,
        Match::Contains("ftg|Ftg|FTG|footing|Footing|FOOTING"),
    ),
    p(
        "rt_fn_below",
        REVIT_FAMILY_NAME,
        Match::Contains("below|Below|BELOW|subgrade|Subgrade|SUBGRADE"),
    ),
    p(
        "rt_fn_sog",
        REVIT_FAMILY_NAME,
        Match::Contains("slab on grade|Slab on Grade|Slab On Grade|SLAB ON GRADE|sog|SOG"),
    ),
    p(
        "rt_fn_grate",
        REVIT_FAMILY_NAME,
        Match::Contains("grate|Grate|GRATE|grating|Grating|GRATING"),
    ),
    p(
        "rt_fn_paver",
        REVIT_FAMILY_NAME,
        Match::Contains("paver|Paver|PAVER|pavers|Pavers|PAVERS"),
    ),
    p(
        "rt_fn_metal_deck",
        REVIT_FAMILY_NAME,
        Match::Contains("metal deck|Metal deck|Metal Deck|METAL DECK"),
    ),
    p("rt_fn_parapet", REVIT_FAMILY_NAME, Match::Contains("parapet|Parapet|PARAPET")),
    p("rt_fn_soffit", REVIT_FAMILY_NAME, Match::Contains("soffit|Soffit|SOFFIT")),
    p("rt_fn_louver", REVIT_FAMILY_NAME, Match::Contains("louver|Louver|LOUVER")),
    p(
        "rt_fn_spandrel",
        REVIT_FAMILY_NAME,
        Match::Contains("spandrel|Spandrel|SPANDREL"),
    ),
    p(
        "rt_fn_partition",
        REVIT_FAMILY_NAME,
        Match::Contains("partition|Partition|PARTITION"),
    ),
    p(
        "rt_fn_bsmnt",
        REVIT_FAMILY_NAME,
        Match::Contains("basement|Basement|BASEMENT"),
    ),
    p(
        "rt_fn_retain",
        REVIT_FAMILY_NAME,
        Match::Contains("retaining|Retaining|RETAINING"),
    ),
    p("rt_fn_stem", REVIT_FAMILY_NAME, Match::Contains("stem|Stem|STEM")),
    p(
        "rt_fn_cistern",
        REVIT_FAMILY_NAME,
        Match::Contains("cistern|Cistern|CISTERN"),
    ),
    p("rt_fn_site", REVIT_FAMILY_NAME, Match::Contains("site|Site|SITE")),
    p(
        "rt_fn_battered",
        REVIT_FAMILY_NAME,
        Match::Contains("battered|Battered|BATTERED"),
    ),
    p(
        "rt_fn_caisson",
        REVIT_FAMILY_NAME,
        Match::Contains("caisson|Caisson|CAISSON"),
    ),
    p("rt_fn_pile", REVIT_FAMILY_NAME, Match::Contains("pile|Pile|PILE")),
    p("rt_fn_pier", REVIT_FAMILY_NAME, Match::Contains("pier|Pier|PIER")),
    p("rt_fn_pit", REVIT_FAMILY_NAME, Match::Contains("pit|Pit|PIT")),
    p("rt_fn_well", REVIT_FAMILY_NAME, Match::Contains("well|Well|WELL")),
    p("rt_fn_fence", REVIT_FAMILY_NAME, Match::Contains("fence|Fence|FENCE")),
    p("rt_fn_slab", REVIT_FAMILY_NAME, Match::Contains("slab|Slab|SLAB")),
    p("rt_fn_pt", REVIT_FAMILY_NAME, Match::Contains(" PT ")),
    p(
        "rt_fn_topping",
        REVIT_FAMILY_NAME,
        Match::Contains("topping|Topping|TOPPING"),
    ),
    p("rt_fn_curb", REVIT_FAMILY_NAME, Match::Contains("curb|Curb|CURB")),
    p("rt_fn_shaft", REVIT_FAMILY_NAME, Match::Contains("shaft|Shaft|SHAFT")),
    p("rt_fn_shear", REVIT_FAMILY_NAME, Match::Contains("shear|Shear|SHEAR")),
    p("rt_fn_ex", REVIT_FAMILY_NAME, Match::StartsWith("ex|Ex|EX")),
    p(
        "rt_fn_p_naming",
        REVIT_FAMILY_NAME,
        Match::StartsWith("P-|P1|P2|P3|P4|P5|P6|P7|P8|P9"),
    ),
    p(
        "rt_fn_wall_w",
        REVIT_FAMILY_NAME,
        Match::StartsWith(r"W-|\(W|\(W-|W\[|W[0-9]"),
    ),
    p("ty_ed_09", TALLY_ENTRY_DIVISION, Match::Full("09 - Finishes")),
    p("ty_ed_08", TALLY_ENTRY_DIVISION, Match::Full("08 - Openings and Glazing")),
    p(
        "ty_ed_07",
        TALLY_ENTRY_DIVISION,
        Match::Full("07 - Thermal and Moisture Protection"),
    ),
    p(
        "ty_ed_06",
        TALLY_ENTRY_DIVISION,
        Match::Full("06 - Wood/Plastics/Composites"),
    ),
    p("ty_ed_05", TALLY_ENTRY_DIVISION, Match::Full("05 - Metals")),
    p("ty_ed_04", TALLY_ENTRY_DIVISION, Match::Full("04 - Masonry")),
    p("ty_ed_03", TALLY_ENTRY_DIVISION, Match::Full("03 - Concrete")),
    p("ty_ec_steel", TALLY_ENTRY_CATEGORY, Match::Full("Steel")),
    p("ty_ec_alum", TALLY_ENTRY_CATEGORY, Match::Full("Aluminum")),
    p("ty_ec_ceil_sys", TALLY_ENTRY_CATEGORY, Match::Full("Ceiling systems")),
    p("ty_ec_cladding", TALLY_ENTRY_CATEGORY, Match::Full("Cladding")),
    p(
        "ty_en_cip_custom",
        TALLY_ENTRY_NAME,
        Match::Full("Cast-in-place concrete, custom mix|Cast-in-place concrete; custom mix"),
    ),
    p(
        "ty_en_int",
        TALLY_ENTRY_NAME,
        Match::Contains("int|Int|INT|interior|Interior|INTERIOR"),
    ),
    p(
        "ty_en_ext",
        TALLY_ENTRY_NAME,
        Match::Contains("ext|Ext|EXT|exterior|Exterior|EXTERIOR"),
    ),
    p("ty_en_toilet", TALLY_ENTRY_NAME, Match::Contains("toilet|Toilet|TOILET")),
    p("ty_en_igu", TALLY_ENTRY_NAME, Match::ContainsLiteral("IGU")),
    p("ty_en_steel_sheet", TALLY_ENTRY_NAME, Match::StartsWith("Steel, sheet")),
    p("ty_en_wood_framing", TALLY_ENTRY_NAME, Match::Full("Wood framing")),
    p("ty_en_part_board", TALLY_ENTRY_NAME, Match::Full("Particle board")),
    p("ty_en_ply_int", TALLY_ENTRY_NAME, Match::Full("Plywood, interior grade")),
    p(
        "ty_en_mdf",
        TALLY_ENTRY_NAME,
        Match::Full(r"Medium density fiberboard \(MDF\)"),
    ),
    p("ty_en_ply_ext", TALLY_ENTRY_NAME, Match::Full("Plywood, exterior grade")),
    p(
        "ty_en_ply_lvl",
        TALLY_ENTRY_NAME,
        Match::Full(r"Laminated veneer lumber \(LVL\)"),
    ),
    p(
        "ty_en_ply_osb",
        TALLY_ENTRY_NAME,
        Match::Full(r"Oriented strandboard \(OSB\)"),
    ),
    p(
        "ty_en_wood_framing_w_ins",
        TALLY_ENTRY_NAME,
        Match::Full("Wood framing with insulation"),
    ),
    p("ty_en_steel_plate", TALLY_ENTRY_NAME, Match::Full("Steel, plate")),
    p("ty_en_orn_wood", TALLY_ENTRY_NAME, Match::Full("Ornamental wood")),
    p(
        "ty_en_fib_ins",
        TALLY_ENTRY_NAME,
        Match::Full("Fiberglass mat gypsum sheathing"),
    ),
    p("ty_mg_insulation", MATERIAL_GROUP, Match::Full("Insulation")),
    p("ty_mg_coating", MATERIAL_GROUP, Match::Full("Coating")),
    p(
        "ty_mn_fib",
        MATERIAL_NAME,
        Match::Full("Fiberglass mat gypsum sheathing board"),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    #[test]
    fn test_tally_registry_needs_every_bound_column() {
        // A table missing the entry-name column cannot host the element pass.
        let mut t = Table::new(vec![
            CLF_OMNI.to_string(),
            REVIT_CATEGORY.to_string(),
            REVIT_BUILDING_ELEMENT.to_string(),
            REVIT_FAMILY_NAME.to_string(),
            TALLY_ENTRY_DIVISION.to_string(),
            TALLY_ENTRY_CATEGORY.to_string(),
        ]);
        t.push_row(vec![
            Value::Null,
            Value::str("Walls"),
            Value::str("Interiors"),
            Value::str("Generic"),
            Value::str("03 - Concrete"),
            Value::str("Concrete"),
        ])
        .unwrap();
        assert!(tally_registry(&t).is_err());
    }

    #[test]
    fn test_oneclick_registry_masks() {
        let mut t = Table::new(vec![
            CLF_OMNI.to_string(),
            OMNICLASS.to_string(),
            QUESTION.to_string(),
            CSI_MASTERFORMAT.to_string(),
            NAME.to_string(),
        ]);
        t.push_row(vec![
            Value::Null,
            Value::str("21-02 20 10"),
            Value::str("External walls and facade"),
            Value::str("9"),
            Value::str("Glass mat sheathing, 5/8 in"),
        ])
        .unwrap();
        let registry = oneclick_registry(&t).unwrap();
        assert_eq!(registry.get("oc_clf_omni_na").unwrap(), &vec![true]);
        assert_eq!(registry.get("oc_omni_shell_enc").unwrap(), &vec![true]);
        assert_eq!(registry.get("oc_omni_shell_super").unwrap(), &vec![false]);
        assert_eq!(registry.get("oc_q_ext").unwrap(), &vec![true]);
        assert_eq!(registry.get("oc_csi_nine").unwrap(), &vec![true]);
        // lowercase pattern, uppercase cell start
        assert_eq!(registry.get("oc_n_glass_sheath").unwrap(), &vec![false]);
    }
}
