//! Stage orchestration: each stage sweeps one tool's directory, maps every
//! CSV it finds, and writes the results into the next stage's directory.
//! A file that fails is logged and skipped; the rest of the batch keeps
//! going. Output names accumulate stage suffixes, so a Tally file ends its
//! life as `<stem>_csc_EleMapped_MatMapped_RefMapped.csv`.

use crate::adapters::{oneclick, tally};
use crate::classify::mapper::Mapper;
use crate::classify::rule::Rule;
use crate::config::Config;
use crate::constants::{
    CLEANED_DIR, CLF_OMNI, CSC_DIR, CSC_SUFFIX, ELEMENT_MAPPED_DIR, ELE_MAPPED_SUFFIX,
    MATERIAL_MAPPED_DIR, MAT_MAPPED_SUFFIX, MQ_1, MQ_2, RAW_DIR, REF_ELE_MAPPED_DIR,
    REF_MAPPED_SUFFIX,
};
use crate::csv_io;
use crate::error::{PrepError, Result};
use crate::rules::{
    oneclick_elements, oneclick_materials, refined_elements, tally_elements, tally_materials,
};
use crate::stored_carbon::{append_stored_carbon, StoredCarbonIndex};
use crate::table::Table;
use crate::taxonomy::Tool;
use metrics::{counter, histogram};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Outcome of one stage swept over one tool's files.
#[derive(Debug, Default)]
pub struct StageSummary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl StageSummary {
    fn record_failure(&mut self, stage: &'static str, path: &Path, err: PrepError, tool: Tool) {
        error!("{} failed for {}: {}", stage, path.display(), err);
        counter!("prep_file_errors_total", "stage" => stage, "tool" => tool.dir_name())
            .increment(1);
        self.errors.push(format!("{}: {}", path.display(), err));
        self.skipped += 1;
    }
}

/// Totals across one tool's full chain.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub errors: Vec<String>,
}

impl RunSummary {
    fn absorb(&mut self, stage: StageSummary) {
        self.files_processed += stage.processed;
        self.files_skipped += stage.skipped;
        self.errors.extend(stage.errors);
    }
}

fn stage_dir(config: &Config, part: &str) -> PathBuf {
    Path::new(&config.paths.data_root).join(part)
}

/// CSV files in one stage directory, sorted so logs read the same run to run.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Stage one: raw exports to cleaned tables.
#[instrument(skip(config))]
pub fn clean_stage(config: &Config, tool: Tool) -> Result<StageSummary> {
    let input = stage_dir(config, RAW_DIR).join(tool.dir_name());
    let output = stage_dir(config, CLEANED_DIR).join(tool.dir_name());
    info!("🧹 Cleaning {} exports from {}", tool.as_str(), input.display());
    println!("🧹 Cleaning {} exports from {}", tool.as_str(), input.display());
    counter!("prep_stage_runs_total", "stage" => "clean", "tool" => tool.dir_name()).increment(1);
    let start = Instant::now();

    let mut summary = StageSummary::default();
    for path in csv_files(&input)? {
        match clean_file(&path, &output, tool) {
            Ok(()) => summary.processed += 1,
            Err(e) => summary.record_failure("clean", &path, e, tool),
        }
    }

    counter!("prep_files_processed_total", "stage" => "clean", "tool" => tool.dir_name())
        .increment(summary.processed as u64);
    histogram!("prep_stage_duration_seconds", "stage" => "clean", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!("✅ Cleaned {} files ({} skipped)", summary.processed, summary.skipped);
    println!("✅ Cleaned {} files ({} skipped)", summary.processed, summary.skipped);
    Ok(summary)
}

fn clean_file(path: &Path, output: &Path, tool: Tool) -> Result<()> {
    let stem = file_stem(path);
    info!("Begin cleaning of {}", stem);
    let mut table = csv_io::read_table(path)?;
    match tool {
        Tool::Tally => {
            tally::clean(&mut table, &stem)?;
            tally::adjust_walls(&mut table)?;
        }
        Tool::OneClick => oneclick::clean(&mut table, &stem)?,
    }
    csv_io::write_table(&table, &csv_io::output_path(output, &stem, ""))?;
    info!("End cleaning of {}", stem);
    Ok(())
}

/// Stage two: stored biogenic carbon joined onto the cleaned Tally tables.
/// One Click exports already carry biogenic figures, so they skip this stage.
#[instrument(skip(config))]
pub fn stored_carbon_stage(config: &Config) -> Result<StageSummary> {
    let tool = Tool::Tally;
    let input = stage_dir(config, CLEANED_DIR).join(tool.dir_name());
    let output = stage_dir(config, CSC_DIR);
    info!("🌲 Adding stored carbon to Tally tables from {}", input.display());
    println!("🌲 Adding stored carbon to Tally tables from {}", input.display());
    counter!("prep_stage_runs_total", "stage" => "stored_carbon", "tool" => tool.dir_name())
        .increment(1);
    let start = Instant::now();

    let index = StoredCarbonIndex::load(Path::new(&config.paths.stored_carbon_reference))?;

    let mut summary = StageSummary::default();
    for path in csv_files(&input)? {
        match stored_carbon_file(&path, &output, &index) {
            Ok(()) => summary.processed += 1,
            Err(e) => summary.record_failure("stored_carbon", &path, e, tool),
        }
    }

    counter!("prep_files_processed_total", "stage" => "stored_carbon", "tool" => tool.dir_name())
        .increment(summary.processed as u64);
    histogram!("prep_stage_duration_seconds", "stage" => "stored_carbon", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!("✅ Stored carbon added to {} files ({} skipped)", summary.processed, summary.skipped);
    println!("✅ Stored carbon added to {} files ({} skipped)", summary.processed, summary.skipped);
    Ok(summary)
}

fn stored_carbon_file(path: &Path, output: &Path, index: &StoredCarbonIndex) -> Result<()> {
    let name = file_name(path);
    info!("Begin adding stored carbon to {}", name);
    let mut table = csv_io::read_table(path)?;
    append_stored_carbon(&mut table, index)?;
    csv_io::write_table(&table, &csv_io::output_path(output, &file_stem(path), CSC_SUFFIX))?;
    info!("Added stored carbon to {}", name);
    Ok(())
}

/// Stage three: level-one element classification into `CLF Omni`.
#[instrument(skip(config))]
pub fn element_stage(config: &Config, tool: Tool) -> Result<StageSummary> {
    // Tally reads the stored-carbon output; One Click has no such stage and
    // reads its cleaned tables directly.
    let input = match tool {
        Tool::Tally => stage_dir(config, CSC_DIR),
        Tool::OneClick => stage_dir(config, CLEANED_DIR).join(tool.dir_name()),
    };
    let output = stage_dir(config, ELEMENT_MAPPED_DIR).join(tool.dir_name());
    info!("🏗️ Mapping elements for {} exports", tool.as_str());
    println!("🏗️ Mapping elements for {} exports", tool.as_str());
    counter!("prep_stage_runs_total", "stage" => "map_elements", "tool" => tool.dir_name())
        .increment(1);
    let start = Instant::now();

    let mut summary = StageSummary::default();
    for path in csv_files(&input)? {
        match element_file(&path, &output, tool) {
            Ok(()) => summary.processed += 1,
            Err(e) => summary.record_failure("map_elements", &path, e, tool),
        }
    }

    counter!("prep_files_processed_total", "stage" => "map_elements", "tool" => tool.dir_name())
        .increment(summary.processed as u64);
    histogram!("prep_stage_duration_seconds", "stage" => "map_elements", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!("✅ Elements mapped for {} files ({} skipped)", summary.processed, summary.skipped);
    println!("✅ Elements mapped for {} files ({} skipped)", summary.processed, summary.skipped);
    Ok(summary)
}

fn element_file(path: &Path, output: &Path, tool: Tool) -> Result<()> {
    let name = file_name(path);
    info!("Begin mapping elements for {}", name);
    let table = csv_io::read_table(path)?;
    let mut mapper = match tool {
        Tool::Tally => Mapper::tally_elements(table)?,
        Tool::OneClick => Mapper::oneclick_elements(table)?,
    };
    for rule in element_rules(tool) {
        mapper.bind(rule);
        mapper.apply()?;
    }
    csv_io::write_table(
        mapper.table(),
        &csv_io::output_path(output, &file_stem(path), ELE_MAPPED_SUFFIX),
    )?;
    info!("Elements mapped for {}.", name);
    Ok(())
}

/// Stage four: the five material sweeps, each against a freshly built
/// registry so its predicates see the previous sweep's writes.
#[instrument(skip(config))]
pub fn material_stage(config: &Config, tool: Tool) -> Result<StageSummary> {
    let input = stage_dir(config, ELEMENT_MAPPED_DIR).join(tool.dir_name());
    let output = stage_dir(config, MATERIAL_MAPPED_DIR).join(tool.dir_name());
    info!("🧱 Mapping materials for {} exports", tool.as_str());
    println!("🧱 Mapping materials for {} exports", tool.as_str());
    counter!("prep_stage_runs_total", "stage" => "map_materials", "tool" => tool.dir_name())
        .increment(1);
    let start = Instant::now();

    let mut summary = StageSummary::default();
    for path in csv_files(&input)? {
        match material_file(&path, &output, tool) {
            Ok(()) => summary.processed += 1,
            Err(e) => summary.record_failure("map_materials", &path, e, tool),
        }
    }

    counter!("prep_files_processed_total", "stage" => "map_materials", "tool" => tool.dir_name())
        .increment(summary.processed as u64);
    histogram!("prep_stage_duration_seconds", "stage" => "map_materials", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!("✅ Materials mapped for {} files ({} skipped)", summary.processed, summary.skipped);
    println!("✅ Materials mapped for {} files ({} skipped)", summary.processed, summary.skipped);
    Ok(summary)
}

fn material_file(path: &Path, output: &Path, tool: Tool) -> Result<()> {
    let name = file_name(path);
    info!("Begin mapping materials for {}", name);
    let mut table = csv_io::read_table(path)?;

    info!("Working on MQ_1 of {}", name);
    table = material_pass(tool, table, material_one_rules(tool))?;
    info!("Working on MQ_2 of {}", name);
    table = material_pass(tool, table, material_two_rules(tool))?;
    info!("Working on MQ_1 of {} to sort Other Materials", name);
    table = material_pass(tool, table, material_one_other_rules(tool))?;
    info!("Working on MQ_2 of {} to sort Other Materials", name);
    table = material_pass(tool, table, material_two_other_rules(tool))?;
    info!("Working on MQ_2 of {} to replace Other values", name);
    table = material_pass(tool, table, final_other_rules(tool))?;

    csv_io::write_table(
        &table,
        &csv_io::output_path(output, &file_stem(path), MAT_MAPPED_SUFFIX),
    )?;
    Ok(())
}

/// One sweep over the table. The mapper is constructed here, not shared
/// across sweeps, which is what lets a later sweep read the earlier one's
/// writes.
fn material_pass(tool: Tool, table: Table, rules: Vec<Box<dyn Rule>>) -> Result<Table> {
    let mut mapper = match tool {
        Tool::Tally => Mapper::tally_materials(table)?,
        Tool::OneClick => Mapper::oneclick_materials(table)?,
    };
    for rule in rules {
        mapper.bind(rule);
        mapper.apply()?;
    }
    Ok(mapper.into_table())
}

/// Stage five: element refinement keyed off the final material subtypes.
#[instrument(skip(config))]
pub fn refined_stage(config: &Config, tool: Tool) -> Result<StageSummary> {
    let input = stage_dir(config, MATERIAL_MAPPED_DIR).join(tool.dir_name());
    let output = stage_dir(config, REF_ELE_MAPPED_DIR).join(tool.dir_name());
    info!("🎯 Refining element categories for {} exports", tool.as_str());
    println!("🎯 Refining element categories for {} exports", tool.as_str());
    counter!("prep_stage_runs_total", "stage" => "map_refined", "tool" => tool.dir_name())
        .increment(1);
    let start = Instant::now();

    let mut summary = StageSummary::default();
    for path in csv_files(&input)? {
        match refined_file(&path, &output, tool) {
            Ok(()) => summary.processed += 1,
            Err(e) => summary.record_failure("map_refined", &path, e, tool),
        }
    }

    counter!("prep_files_processed_total", "stage" => "map_refined", "tool" => tool.dir_name())
        .increment(summary.processed as u64);
    histogram!("prep_stage_duration_seconds", "stage" => "map_refined", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!("✅ Refined elements for {} files ({} skipped)", summary.processed, summary.skipped);
    println!("✅ Refined elements for {} files ({} skipped)", summary.processed, summary.skipped);
    Ok(summary)
}

fn refined_file(path: &Path, output: &Path, tool: Tool) -> Result<()> {
    info!("Begin mapping elements in a refined method for {}", file_name(path));
    let table = csv_io::read_table(path)?;
    let mut mapper = Mapper::refined_elements(table)?;
    mapper.bind(Box::new(refined_elements::RefinedElementFilter(
        CLF_OMNI.to_string(),
    )));
    mapper.apply()?;
    // One Click refined output keeps the element-mapped suffix.
    let suffix = match tool {
        Tool::Tally => REF_MAPPED_SUFFIX,
        Tool::OneClick => ELE_MAPPED_SUFFIX,
    };
    csv_io::write_table(
        mapper.table(),
        &csv_io::output_path(output, &file_stem(path), suffix),
    )?;
    Ok(())
}

/// Full prep chain for one tool, raw exports through refined elements.
#[instrument(skip(config))]
pub fn run_tool(config: &Config, tool: Tool) -> Result<RunSummary> {
    info!("🚀 Starting prep chain for {}", tool.as_str());
    println!("🚀 Starting prep chain for {}", tool.as_str());
    let start = Instant::now();

    let mut summary = RunSummary::default();
    summary.absorb(clean_stage(config, tool)?);
    if tool == Tool::Tally {
        summary.absorb(stored_carbon_stage(config)?);
    }
    summary.absorb(element_stage(config, tool)?);
    summary.absorb(material_stage(config, tool)?);
    summary.absorb(refined_stage(config, tool)?);

    histogram!("prep_run_duration_seconds", "tool" => tool.dir_name())
        .record(start.elapsed().as_secs_f64());
    info!(
        "✅ Prep chain finished for {}: {} files processed ({} skipped, {} errors)",
        tool.as_str(),
        summary.files_processed,
        summary.files_skipped,
        summary.errors.len()
    );
    println!(
        "✅ Prep chain finished for {}: {} files processed ({} skipped, {} errors)",
        tool.as_str(),
        summary.files_processed,
        summary.files_skipped,
        summary.errors.len()
    );
    Ok(summary)
}

/// Element rules in application order. Later rules overwrite earlier writes
/// where their predicates overlap, so the order is part of the taxonomy.
fn element_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    let t = || CLF_OMNI.to_string();
    match tool {
        Tool::Tally => vec![
            Box::new(tally_elements::Ceilings(t())),
            Box::new(tally_elements::CurtainWallPanels(t())),
            Box::new(tally_elements::CurtainWallMullions(t())),
            Box::new(tally_elements::Doors(t())),
            Box::new(tally_elements::Floors(t())),
            Box::new(tally_elements::Roofs(t())),
            Box::new(tally_elements::Railings(t())),
            Box::new(tally_elements::Stairs(t())),
            Box::new(tally_elements::StructuralColumns(t())),
            Box::new(tally_elements::StructuralConnections(t())),
            Box::new(tally_elements::StructuralFoundations(t())),
            Box::new(tally_elements::StructuralFraming(t())),
            Box::new(tally_elements::Walls(t())),
            Box::new(tally_elements::Windows(t())),
        ],
        Tool::OneClick => vec![
            Box::new(oneclick_elements::OmniClassSubstructure(t())),
            Box::new(oneclick_elements::OmniClassShellSuperstructure(t())),
            Box::new(oneclick_elements::OmniClassShellEnclosure(t())),
            Box::new(oneclick_elements::OmniClassInteriorConstruction(t())),
            Box::new(oneclick_elements::OmniClassInteriorFinishes(t())),
            Box::new(oneclick_elements::OmniClassMEP(t())),
            Box::new(oneclick_elements::OmniClassNotDefined(t())),
            Box::new(oneclick_elements::CSIDivision(t())),
        ],
    }
}

fn material_one_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    let t = || MQ_1.to_string();
    match tool {
        Tool::Tally => vec![
            Box::new(tally_materials::ConcreteMaterialQuantityOne(t())),
            Box::new(tally_materials::SteelMaterialQuantityOne(t())),
            Box::new(tally_materials::MasonryMaterialQuantityOne(t())),
            Box::new(tally_materials::AluminumMaterialQuantityOne(t())),
            Box::new(tally_materials::WoodMaterialQuantityOne(t())),
            Box::new(tally_materials::GlazingMaterialQuantityOne(t())),
            Box::new(tally_materials::RoofMaterialQuantityOne(t())),
            Box::new(tally_materials::InsulationMaterialQuantityOne(t())),
            Box::new(tally_materials::GypsumMaterialQuantityOne(t())),
            Box::new(tally_materials::FireproofMaterialQuantityOne(t())),
        ],
        Tool::OneClick => vec![
            Box::new(oneclick_materials::ConcreteMaterialQuantityOne(t())),
            Box::new(oneclick_materials::SteelMaterialQuantityOne(t())),
            Box::new(oneclick_materials::MasonryMaterialQuantityOne(t())),
            Box::new(oneclick_materials::AluminumMaterialQuantityOne(t())),
            Box::new(oneclick_materials::WoodMaterialQuantityOne(t())),
            Box::new(oneclick_materials::GlazingMaterialQuantityOne(t())),
            Box::new(oneclick_materials::RoofMaterialQuantityOne(t())),
            Box::new(oneclick_materials::InsulationMaterialQuantityOne(t())),
            Box::new(oneclick_materials::GypsumMaterialQuantityOne(t())),
            Box::new(oneclick_materials::FireproofMaterialQuantityOne(t())),
        ],
    }
}

fn material_two_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    let t = || MQ_2.to_string();
    match tool {
        Tool::Tally => vec![
            Box::new(tally_materials::ConcreteMaterialQuantityTwo(t())),
            Box::new(tally_materials::SteelMaterialQuantityTwo(t())),
            Box::new(tally_materials::MasonryMaterialQuantityTwo(t())),
            Box::new(tally_materials::AluminumMaterialQuantityTwo(t())),
            Box::new(tally_materials::WoodMaterialQuantityTwo(t())),
            Box::new(tally_materials::GlazingMaterialQuantityTwo(t())),
            Box::new(tally_materials::RoofMaterialQuantityTwo(t())),
            Box::new(tally_materials::InsulationMaterialQuantityTwo(t())),
            Box::new(tally_materials::GypsumMaterialQuantityTwo(t())),
            Box::new(tally_materials::FireproofMaterialQuantityTwo(t())),
        ],
        Tool::OneClick => vec![
            Box::new(oneclick_materials::ConcreteMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::SteelMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::MasonryMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::AluminumMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::WoodMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::GlazingMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::RoofMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::InsulationMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::GypsumMaterialQuantityTwo(t())),
            Box::new(oneclick_materials::FireproofMaterialQuantityTwo(t())),
        ],
    }
}

/// Catch-up sweep over rows whose MQ_1 is still `Other`. The closing pair
/// differs by tool: Tally runs wall coverings before other metals, One Click
/// the reverse.
fn material_one_other_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    let t = || MQ_1.to_string();
    match tool {
        Tool::Tally => vec![
            Box::new(tally_materials::DoorFrameMaterialQuantityOneOther(t())),
            Box::new(tally_materials::WindowFrameMaterialQuantityOneOther(t())),
            Box::new(tally_materials::AcousticCeilingsMaterialQuantityOneOther(t())),
            Box::new(tally_materials::SyntheticCompositesMaterialQuantityOneOther(t())),
            Box::new(tally_materials::CladdingMaterialQuantityOneOther(t())),
            Box::new(tally_materials::AdhesivesMaterialQuantityOneOther(t())),
            Box::new(tally_materials::AirVaporMaterialQuantityOneOther(t())),
            Box::new(tally_materials::CoatingsMaterialQuantityOneOther(t())),
            Box::new(tally_materials::FloorTileMaterialQuantityOneOther(t())),
            Box::new(tally_materials::WallCoveringsMaterialQuantityOneOther(t())),
            Box::new(tally_materials::OtherMetalsMaterialQuantityOneOther(t())),
        ],
        Tool::OneClick => vec![
            Box::new(oneclick_materials::DoorFrameMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::WindowFrameMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::AcousticCeilingsMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::SyntheticCompositesMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::CladdingMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::AdhesivesMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::AirVaporMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::CoatingsMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::FloorTileMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::OtherMetalsMaterialQuantityOneOther(t())),
            Box::new(oneclick_materials::WallCoveringsMaterialQuantityOneOther(t())),
        ],
    }
}

/// Subtype catch-up for the families named by the previous sweep. One Click
/// closes with the ready-mix strength split, which reads the MQ_2 values the
/// family sweep just wrote.
fn material_two_other_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    let t = || MQ_2.to_string();
    match tool {
        Tool::Tally => vec![
            Box::new(tally_materials::DoorFrameMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::WindowFrameMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::AcousticCeilingsMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::SyntheticCompositesMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::CladdingMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::AdhesivesMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::AirVaporMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::CoatingsMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::FloorTileMaterialQuantityTwoOther(t())),
            Box::new(tally_materials::OtherMetalsMaterialQuantityTwoOther(t())),
        ],
        Tool::OneClick => vec![
            Box::new(oneclick_materials::DoorFrameMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::WindowFrameMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::AcousticCeilingsMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::SyntheticCompositesMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::CladdingMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::AdhesivesMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::AirVaporMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::CoatingsMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::FloorTileMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::OtherMetalsMaterialQuantityTwoOther(t())),
            Box::new(oneclick_materials::ConcreteReadyMixMaterialQuantityTwo(t())),
        ],
    }
}

fn final_other_rules(tool: Tool) -> Vec<Box<dyn Rule>> {
    match tool {
        Tool::Tally => vec![Box::new(tally_materials::FinalOtherMaterialQuantityTwoOther(
            MQ_2.to_string(),
        ))],
        Tool::OneClick => vec![Box::new(
            oneclick_materials::FinalOtherMaterialQuantityTwoOther(MQ_2.to_string()),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        MATERIAL_GROUP, MATERIAL_NAME, REVIT_BUILDING_ELEMENT, REVIT_CATEGORY, REVIT_FAMILY_NAME,
        TALLY_ENTRY_CATEGORY, TALLY_ENTRY_DESCRIPTION, TALLY_ENTRY_DIVISION, TALLY_ENTRY_NAME,
    };
    use crate::table::Value;
    use crate::taxonomy::{ElementCategory, MaterialQuantityOne, MaterialQuantityTwo};

    fn cell<'a>(table: &'a Table, row: usize, column: &str) -> &'a str {
        table.value(row, column).unwrap().as_str().unwrap()
    }

    #[test]
    fn test_element_rule_lists_are_ordered() {
        let tally = element_rules(Tool::Tally);
        assert_eq!(tally.len(), 14);
        assert_eq!(tally[0].name(), "Ceilings");
        assert_eq!(tally[13].name(), "Windows");

        let oneclick = element_rules(Tool::OneClick);
        assert_eq!(oneclick.len(), 8);
        assert_eq!(oneclick[0].name(), "OmniClassSubstructure");
        assert_eq!(oneclick[7].name(), "CSIDivision");
    }

    #[test]
    fn test_other_sweep_tails_differ_by_tool() {
        let tally_one = material_one_other_rules(Tool::Tally);
        let oneclick_one = material_one_other_rules(Tool::OneClick);
        assert_eq!(tally_one.last().unwrap().name(), "OtherMetalsMaterialQuantityOneOther");
        assert_eq!(
            oneclick_one.last().unwrap().name(),
            "WallCoveringsMaterialQuantityOneOther"
        );

        let tally_two = material_two_other_rules(Tool::Tally);
        let oneclick_two = material_two_other_rules(Tool::OneClick);
        assert_eq!(tally_two.len(), 10);
        assert_eq!(oneclick_two.len(), 11);
        assert_eq!(
            oneclick_two.last().unwrap().name(),
            "ConcreteReadyMixMaterialQuantityTwo"
        );
    }

    #[test]
    fn test_wall_finish_division_lands_interior() {
        let mut t = Table::new(
            [
                CLF_OMNI,
                REVIT_CATEGORY,
                REVIT_BUILDING_ELEMENT,
                REVIT_FAMILY_NAME,
                TALLY_ENTRY_DIVISION,
                TALLY_ENTRY_CATEGORY,
                TALLY_ENTRY_NAME,
                MATERIAL_GROUP,
                MATERIAL_NAME,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
        t.push_row(vec![
            Value::Null,
            Value::str("Walls"),
            Value::str("Not included"),
            Value::str("Exterior wall - brick on CMU"),
            Value::str("09 - Finishes"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
        ])
        .unwrap();
        t.push_row(vec![
            Value::Null,
            Value::str("Specialty Equipment"),
            Value::str("Not included"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
        ])
        .unwrap();

        let mut mapper = Mapper::tally_elements(t).unwrap();
        for rule in element_rules(Tool::Tally) {
            mapper.bind(rule);
            mapper.apply().unwrap();
        }
        let t = mapper.into_table();

        // The finish-division write runs after the exterior-keyword write and
        // wins, even though the family name says exterior.
        assert_eq!(cell(&t, 0, CLF_OMNI), ElementCategory::InteriorFinishes.as_str());
        // No rule claims specialty equipment; the category stays unset.
        assert!(t.value(1, CLF_OMNI).unwrap().is_null());
    }

    #[test]
    fn test_material_sweeps_see_previous_writes() {
        let mut table = Table::new(
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
        table
            .push_row(
                [
                    "Other",
                    "Other",
                    "03 - Concrete",
                    "Concrete",
                    "Cast-in-place Concrete",
                    "Cast-in-place concrete; structural concrete; 3001-4000 psi",
                    "Slab",
                    "Structural concrete, 4000 psi",
                ]
                .iter()
                .map(|s| Value::str(*s))
                .collect(),
            )
            .unwrap();
        table
            .push_row(
                ["Other", "Other", "x", "x", "x", "x", "x", "x"]
                    .iter()
                    .map(|s| Value::str(*s))
                    .collect(),
            )
            .unwrap();

        table = material_pass(Tool::Tally, table, material_one_rules(Tool::Tally)).unwrap();
        table = material_pass(Tool::Tally, table, material_two_rules(Tool::Tally)).unwrap();
        table = material_pass(Tool::Tally, table, material_one_other_rules(Tool::Tally)).unwrap();
        table = material_pass(Tool::Tally, table, material_two_other_rules(Tool::Tally)).unwrap();
        table = material_pass(Tool::Tally, table, final_other_rules(Tool::Tally)).unwrap();

        // The MQ_2 sweep only sees "Concrete" in MQ_1 because its registry
        // was built after the MQ_1 sweep finished.
        assert_eq!(cell(&table, 0, MQ_1), MaterialQuantityOne::Concrete.as_str());
        assert_eq!(cell(&table, 0, MQ_2), MaterialQuantityTwo::ReadyMixNw4.as_str());
        assert_eq!(cell(&table, 1, MQ_1), MaterialQuantityOne::Other.as_str());
        assert_eq!(cell(&table, 1, MQ_2), MaterialQuantityTwo::Other.as_str());
    }

    #[test]
    fn test_element_pass_is_deterministic() {
        let mut seed = Table::new(
            [
                CLF_OMNI,
                REVIT_CATEGORY,
                REVIT_BUILDING_ELEMENT,
                REVIT_FAMILY_NAME,
                TALLY_ENTRY_DIVISION,
                TALLY_ENTRY_CATEGORY,
                TALLY_ENTRY_NAME,
                MATERIAL_GROUP,
                MATERIAL_NAME,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
        seed.push_row(vec![
            Value::Null,
            Value::str("Walls"),
            Value::str("Not included"),
            Value::str("Interior partition"),
            Value::str("03 - Concrete"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
            Value::str("x"),
        ])
        .unwrap();

        let mut outputs = Vec::new();
        for _ in 0..2 {
            let mut mapper = Mapper::tally_elements(seed.clone()).unwrap();
            for rule in element_rules(Tool::Tally) {
                mapper.bind(rule);
                mapper.apply().unwrap();
            }
            outputs.push(mapper.into_table());
        }

        assert_eq!(outputs[0].rows(), outputs[1].rows());
    }

    #[test]
    fn test_csv_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("a.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a table").unwrap();

        let files = csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.csv"));
        assert!(files[1].ends_with("b.csv"));
    }
}
