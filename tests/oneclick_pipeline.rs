use anyhow::Result;
use lca_prep::config::{Config, PathsConfig};
use lca_prep::constants::{CLF_MODEL_ID, CLF_OMNI, CSI_MASTERFORMAT, DESIGN_NAME, MQ_1, MQ_2, TOOL};
use lca_prep::csv_io;
use lca_prep::pipeline;
use lca_prep::table::Table;
use lca_prep::taxonomy::{MaterialQuantityOne, MaterialQuantityTwo, Tool};
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

fn raw_header() -> &'static str {
    "Section,Omniclass,Question,csiMasterformat,Resource type,Name,Resource,Datasource,\
     Acidification kg SO₂e,Eutrophication kg Ne,Ozone Depletion kg CFC11e,\
     Formation of tropospheric ozone kg O3e,Depletion of nonrenewable energy MJ,\
     Global warming kg CO₂e,Biogenic carbon storage kg CO₂e bio,Mass of raw materials kg"
}

fn text<'a>(table: &'a Table, row: usize, column: &str) -> &'a str {
    table.value(row, column).unwrap().as_str().unwrap()
}

#[test]
fn test_oneclick_chain_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    // A sheet banner row with no section, then one ready-mix line item whose
    // global warming cell carries the export's placeholder dash.
    let raw_dir = Path::new(&config.paths.data_root).join("raw").join("oneclick");
    fs::create_dir_all(&raw_dir)?;
    fs::write(
        raw_dir.join("house_b.csv"),
        format!(
            "{}\n\
             ,,,,,Summary,,,,,,,,,,\n\
             Foundations,x,x,3,Ready-mix concrete,Ready-mix concrete C30/37,\
             \"Ready-mix concrete, 4000 psi\",EPD,0.1,0.2,0.3,0.4,500,-,12,1000\n",
            raw_header()
        ),
    )?;

    assert_eq!(pipeline::clean_stage(&config, Tool::OneClick)?.processed, 1);
    assert_eq!(pipeline::element_stage(&config, Tool::OneClick)?.processed, 1);
    assert_eq!(pipeline::material_stage(&config, Tool::OneClick)?.processed, 1);
    assert_eq!(pipeline::refined_stage(&config, Tool::OneClick)?.processed, 1);

    // The refined output keeps the element-mapped suffix for this tool.
    let final_path = Path::new(&config.paths.data_root)
        .join("ref_ele_mapped/oneclick/house_b_EleMapped_MatMapped_EleMapped.csv");
    assert!(final_path.exists());

    let table = csv_io::read_table(&final_path)?;
    assert_eq!(table.headers()[0], CLF_MODEL_ID);
    // The banner row is gone.
    assert_eq!(table.len(), 1);

    assert_eq!(text(&table, 0, CLF_MODEL_ID), "house_b");
    assert_eq!(text(&table, 0, TOOL), Tool::OneClick.as_str());
    assert_eq!(text(&table, 0, DESIGN_NAME), "No design options");
    assert_eq!(text(&table, 0, CSI_MASTERFORMAT), "3");
    assert_eq!(text(&table, 0, "Global warming kg CO₂e"), "0");

    // Division 3 drives the material family; the resource strength string
    // narrows the ready-mix bucket on the later sweep.
    assert_eq!(text(&table, 0, MQ_1), MaterialQuantityOne::Concrete.as_str());
    assert_eq!(text(&table, 0, MQ_2), MaterialQuantityTwo::ReadyMixNw4.as_str());
    // No element rule fires on an unclassified omniclass with division 3.
    assert!(table.value(0, CLF_OMNI)?.is_null());
    Ok(())
}

#[test]
fn test_clean_stage_skips_malformed_exports() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    let raw_dir = Path::new(&config.paths.data_root).join("raw").join("oneclick");
    fs::create_dir_all(&raw_dir)?;
    fs::write(
        raw_dir.join("house_b.csv"),
        format!(
            "{}\n\
             Floors,x,x,5,Metal,Steel beam,Steel profile,EPD,0.1,0.2,0.3,0.4,500,40,12,1000\n",
            raw_header()
        ),
    )?;
    // Same export with the global warming column stripped out.
    fs::write(
        raw_dir.join("broken.csv"),
        "Section,Omniclass,Question,csiMasterformat,Resource type,Name,Resource,Datasource,\
         Acidification kg SO₂e,Eutrophication kg Ne,Ozone Depletion kg CFC11e,\
         Formation of tropospheric ozone kg O3e,Depletion of nonrenewable energy MJ,\
         Biogenic carbon storage kg CO₂e bio,Mass of raw materials kg\n\
         Floors,x,x,5,Metal,Steel beam,Steel profile,EPD,0.1,0.2,0.3,0.4,500,12,1000\n",
    )?;

    let summary = pipeline::clean_stage(&config, Tool::OneClick)?;
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].contains("broken.csv"));

    // The good file still made it through.
    let cleaned = Path::new(&config.paths.data_root).join("cleaned").join("oneclick");
    assert!(cleaned.join("house_b.csv").exists());
    assert!(!cleaned.join("broken.csv").exists());
    Ok(())
}
