/// Column, directory, and suffix constants shared across the pipeline stages
/// so that stage wiring and rule bindings stay consistent.

// Columns shared by both tools
pub const CLF_MODEL_ID: &str = "CLF Model ID";
pub const TOOL: &str = "Tool";
pub const CLF_OMNI: &str = "CLF Omni";
pub const MQ_1: &str = "MQ_1";
pub const MQ_2: &str = "MQ_2";
pub const FILE_NAME_BEFORE_MERGE: &str = "file_name_before_merge";

// Tally export columns
pub const REVIT_CATEGORY: &str = "Revit category";
pub const REVIT_BUILDING_ELEMENT: &str = "Revit building element";
pub const REVIT_FAMILY_NAME: &str = "Revit family name";
pub const TALLY_ENTRY_DIVISION: &str = "Tally Entry Division";
pub const TALLY_ENTRY_CATEGORY: &str = "Tally Entry Category";
pub const TALLY_ENTRY_NAME: &str = "Tally Entry Name";
pub const TALLY_ENTRY_DESCRIPTION: &str = "Tally Entry Description";
pub const MATERIAL_GROUP: &str = "Material Group";
pub const MATERIAL_NAME: &str = "Material Name";
pub const LIFE_CYCLE_STAGE: &str = "Life Cycle Stage";
pub const MASS_TOTAL_KG: &str = "Mass Total (kg)";

// One Click LCA export columns
pub const OMNICLASS: &str = "Omniclass";
pub const QUESTION: &str = "Question";
pub const CSI_MASTERFORMAT: &str = "csiMasterformat";
pub const RESOURCE_TYPE: &str = "Resource type";
pub const NAME: &str = "Name";
pub const RESOURCE: &str = "Resource";
pub const DATASOURCE: &str = "Datasource";
pub const SECTION: &str = "Section";
pub const DESIGN_NAME: &str = "Design Name";

// Stored-carbon reference columns. The factor header carries the
// reference database's own spelling of CO2.
pub const STORED_CARBON_KEY: &str = "Name_Tally Material";
pub const STORED_CARBON_FACTOR: &str = "Stored Carbon (C02eq/kg)";
pub const STORED_BIOGENIC_CARBON: &str = "Stored Biogenic Carbon";

/// Mass and environmental impact columns a One Click export must carry.
pub const ONECLICK_IMPACT_COLUMNS: [&str; 8] = [
    "Acidification kg SO₂e",
    "Eutrophication kg Ne",
    "Ozone Depletion kg CFC11e",
    "Formation of tropospheric ozone kg O3e",
    "Depletion of nonrenewable energy MJ",
    "Global warming kg CO₂e",
    "Biogenic carbon storage kg CO₂e bio",
    "Mass of raw materials kg",
];

// Default cell values filled in during cleaning
pub const NOT_INCLUDED: &str = "Not included";
pub const NOT_A_MERGED_FILE: &str = "Not a merged file";
pub const NO_DESIGN_OPTIONS: &str = "No design options";

// Stage directories under the data root
pub const RAW_DIR: &str = "raw";
pub const CLEANED_DIR: &str = "cleaned";
pub const CSC_DIR: &str = "csc";
pub const ELEMENT_MAPPED_DIR: &str = "element_mapped";
pub const MATERIAL_MAPPED_DIR: &str = "material_mapped";
pub const REF_ELE_MAPPED_DIR: &str = "ref_ele_mapped";

// Output file stem suffixes per stage
pub const CSC_SUFFIX: &str = "_csc";
pub const ELE_MAPPED_SUFFIX: &str = "_EleMapped";
pub const MAT_MAPPED_SUFFIX: &str = "_MatMapped";
pub const REF_MAPPED_SUFFIX: &str = "_RefMapped";
