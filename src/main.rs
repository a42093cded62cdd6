use clap::{Parser, Subcommand, ValueEnum};
use lca_prep::config::Config;
use lca_prep::error::Result as PrepResult;
use lca_prep::logging;
use lca_prep::pipeline::{self, RunSummary, StageSummary};
use lca_prep::taxonomy::Tool;
use tracing::error;

#[derive(Parser)]
#[command(name = "lca_prep")]
#[command(about = "Cleans and classifies building LCA exports into the CLF taxonomy")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ToolChoice {
    Tally,
    Oneclick,
    Both,
}

impl ToolChoice {
    fn tools(self) -> Vec<Tool> {
        match self {
            ToolChoice::Tally => vec![Tool::Tally],
            ToolChoice::Oneclick => vec![Tool::OneClick],
            ToolChoice::Both => vec![Tool::Tally, Tool::OneClick],
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Clean raw exports into the shared column layout
    Clean {
        #[arg(long, value_enum, default_value_t = ToolChoice::Both)]
        tool: ToolChoice,
    },
    /// Join stored biogenic carbon onto the cleaned Tally tables
    StoredCarbon,
    /// Classify rows into level-one element categories
    MapElements {
        #[arg(long, value_enum, default_value_t = ToolChoice::Both)]
        tool: ToolChoice,
    },
    /// Classify rows into material families and subtypes
    MapMaterials {
        #[arg(long, value_enum, default_value_t = ToolChoice::Both)]
        tool: ToolChoice,
    },
    /// Refine element categories using the final material subtypes
    MapRefined {
        #[arg(long, value_enum, default_value_t = ToolChoice::Both)]
        tool: ToolChoice,
    },
    /// Run the full chain, raw exports through refined elements
    Run {
        #[arg(long, value_enum, default_value_t = ToolChoice::Both)]
        tool: ToolChoice,
    },
}

/// Runs one stage for each requested tool on the blocking pool. The tools
/// are independent directory trees, so they run concurrently.
async fn run_stage<F>(config: &Config, tools: Vec<Tool>, stage: F) -> anyhow::Result<()>
where
    F: Fn(&Config, Tool) -> PrepResult<StageSummary> + Copy + Send + 'static,
{
    let mut handles = Vec::new();
    for tool in tools {
        let config = config.clone();
        handles.push(tokio::task::spawn_blocking(move || stage(&config, tool)));
    }
    for handle in handles {
        match handle.await? {
            Ok(summary) => report_stage(&summary),
            Err(e) => {
                error!("Stage failed: {}", e);
                println!("❌ Stage failed: {}", e);
            }
        }
    }
    Ok(())
}

fn report_stage(summary: &StageSummary) {
    if !summary.errors.is_empty() {
        println!("⚠️  {} files failed:", summary.errors.len());
        for error in &summary.errors {
            println!("   - {}", error);
        }
    }
}

fn report_run(summary: &RunSummary) {
    println!("\n📊 Prep results:");
    println!("   Processed: {}", summary.files_processed);
    println!("   Skipped: {}", summary.files_skipped);
    println!("   Errors: {}", summary.errors.len());
    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            println!("   - {}", error);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    logging::init_logging(&config.paths.log_dir);

    match cli.command {
        Commands::Clean { tool } => {
            run_stage(&config, tool.tools(), pipeline::clean_stage).await?;
        }
        Commands::StoredCarbon => {
            let task_config = config.clone();
            match tokio::task::spawn_blocking(move || pipeline::stored_carbon_stage(&task_config))
                .await?
            {
                Ok(summary) => report_stage(&summary),
                Err(e) => {
                    error!("Stage failed: {}", e);
                    println!("❌ Stage failed: {}", e);
                }
            }
        }
        Commands::MapElements { tool } => {
            run_stage(&config, tool.tools(), pipeline::element_stage).await?;
        }
        Commands::MapMaterials { tool } => {
            run_stage(&config, tool.tools(), pipeline::material_stage).await?;
        }
        Commands::MapRefined { tool } => {
            run_stage(&config, tool.tools(), pipeline::refined_stage).await?;
        }
        Commands::Run { tool } => {
            let mut handles = Vec::new();
            for tool in tool.tools() {
                let task_config = config.clone();
                handles.push(tokio::task::spawn_blocking(move || {
                    pipeline::run_tool(&task_config, tool)
                }));
            }
            for handle in handles {
                match handle.await? {
                    Ok(summary) => report_run(&summary),
                    Err(e) => {
                        error!("Prep chain failed: {}", e);
                        println!("❌ Prep chain failed: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}
