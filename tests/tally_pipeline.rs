use anyhow::Result;
use lca_prep::config::{Config, PathsConfig};
use lca_prep::constants::{
    CLF_MODEL_ID, CLF_OMNI, MQ_1, MQ_2, REVIT_BUILDING_ELEMENT, STORED_BIOGENIC_CARBON,
    STORED_CARBON_KEY, TOOL,
};
use lca_prep::csv_io;
use lca_prep::pipeline;
use lca_prep::table::Table;
use lca_prep::taxonomy::{ElementCategory, MaterialQuantityOne, MaterialQuantityTwo, Tool};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn test_config(root: &Path) -> Config {
    Config {
        paths: PathsConfig {
            data_root: root.join("data").to_str().unwrap().to_string(),
            log_dir: root.join("logs").to_str().unwrap().to_string(),
            stored_carbon_reference: root
                .join("stored_carbon_database.csv")
                .to_str()
                .unwrap()
                .to_string(),
        },
    }
}

fn write_reference(root: &Path) -> Result<()> {
    fs::write(
        root.join("stored_carbon_database.csv"),
        "Name_Tally Material,Stored Carbon (C02eq/kg)\n\
         Heavy timber,-1.5\n\
         Plywood,-1.2\n",
    )?;
    Ok(())
}

fn text<'a>(table: &'a Table, row: usize, column: &str) -> &'a str {
    table.value(row, column).unwrap().as_str().unwrap()
}

#[test]
fn test_tally_chain_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());
    write_reference(dir.path())?;

    // One concrete wall row and one row no mapping rule claims.
    let raw_dir = Path::new(&config.paths.data_root).join("raw").join("tally");
    fs::create_dir_all(&raw_dir)?;
    fs::write(
        raw_dir.join("project_alpha.csv"),
        "Revit category,Revit family name,Tally Entry Division,Tally Entry Category,\
         Tally Entry Name,Tally Entry Description,Material Group,Material Name,\
         Life Cycle Stage,Mass Total (kg)\n\
         Walls,Basic wall,03 - Concrete,Cast-in-place Concrete,\
         Cast-in-place concrete; structural concrete; 3001-4000 psi,Slab,Concrete,\
         \"Structural concrete, 4000 psi\",[A1-A3] Product,250\n\
         Specialty Equipment,Dock leveler,x,x,x,x,x,Heavy timber,[A1-A3] Product,100\n",
    )?;

    let summary = pipeline::run_tool(&config, Tool::Tally)?;
    assert_eq!(summary.files_processed, 5);
    assert_eq!(summary.files_skipped, 0);
    assert!(summary.errors.is_empty());

    // Every stage leaves its output behind, suffixes stacking up as it goes.
    let data = Path::new(&config.paths.data_root);
    assert!(data.join("cleaned/tally/project_alpha.csv").exists());
    assert!(data.join("csc/project_alpha_csc.csv").exists());
    assert!(data.join("element_mapped/tally/project_alpha_csc_EleMapped.csv").exists());
    assert!(data
        .join("material_mapped/tally/project_alpha_csc_EleMapped_MatMapped.csv")
        .exists());
    let final_path =
        data.join("ref_ele_mapped/tally/project_alpha_csc_EleMapped_MatMapped_RefMapped.csv");
    assert!(final_path.exists());

    let table = csv_io::read_table(&final_path)?;
    assert_eq!(table.headers()[0], CLF_MODEL_ID);
    assert_eq!(table.len(), 2);

    // The wall row lands in superstructure with a full material subtype.
    assert_eq!(text(&table, 0, CLF_MODEL_ID), "project_alpha");
    assert_eq!(text(&table, 0, TOOL), Tool::Tally.as_str());
    assert_eq!(text(&table, 0, CLF_OMNI), ElementCategory::Superstructure.as_str());
    assert_eq!(text(&table, 0, MQ_1), MaterialQuantityOne::Concrete.as_str());
    assert_eq!(text(&table, 0, MQ_2), MaterialQuantityTwo::ReadyMixNw4.as_str());
    assert_eq!(text(&table, 0, REVIT_BUILDING_ELEMENT), "Not included");
    // Structural concrete has no stored-carbon factor, so the cell stays
    // empty rather than zero.
    assert!(table.value(0, STORED_BIOGENIC_CARBON)?.is_null());

    // The unclaimed row keeps its sentinels but still picks up the
    // stored-carbon join: 100 kg at -1.5 per kg.
    assert!(table.value(1, CLF_OMNI)?.is_null());
    assert_eq!(text(&table, 1, MQ_1), MaterialQuantityOne::Other.as_str());
    assert_eq!(text(&table, 1, MQ_2), MaterialQuantityTwo::Other.as_str());
    assert_eq!(text(&table, 1, STORED_CARBON_KEY), "Heavy timber");
    assert_eq!(text(&table, 1, STORED_BIOGENIC_CARBON), "-150");
    Ok(())
}

#[test]
fn test_premapped_rows_keep_their_category() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());
    write_reference(dir.path())?;

    // An export that already carries a category, under the legacy label the
    // cleaner rewrites. The wall row would otherwise map to superstructure.
    let raw_dir = Path::new(&config.paths.data_root).join("raw").join("tally");
    fs::create_dir_all(&raw_dir)?;
    fs::write(
        raw_dir.join("project_beta.csv"),
        "Revit category,Revit family name,Tally Entry Division,Tally Entry Category,\
         Tally Entry Name,Tally Entry Description,Material Group,Material Name,\
         Life Cycle Stage,Mass Total (kg),CLF Omni\n\
         Walls,Basic wall,03 - Concrete,x,x,x,x,x,[A1-A3] Product,50,Shell - Enclosure\n",
    )?;

    pipeline::clean_stage(&config, Tool::Tally)?;
    pipeline::stored_carbon_stage(&config)?;
    pipeline::element_stage(&config, Tool::Tally)?;

    let mapped = Path::new(&config.paths.data_root)
        .join("element_mapped/tally/project_beta_csc_EleMapped.csv");
    let table = csv_io::read_table(&mapped)?;
    assert_eq!(text(&table, 0, CLF_OMNI), ElementCategory::Enclosure.as_str());
    Ok(())
}
