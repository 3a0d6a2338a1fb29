use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lactose_eval::config::{
    DEFAULT_INDEX_COLUMN, DEFAULT_MEANS_PATH, DEFAULT_REPORTS_DIR, DEFAULT_TARGET_COLUMN,
    DEFAULT_VARIANCES_PATH,
};
use lactose_eval::{EvalConfig, EvaluationPipeline, ModelFormat};

const USAGE: &str = "Not enough arguments specified\n Usage: lactose-eval <model path> <input file path>";

#[derive(Parser)]
#[command(name = "lactose-eval")]
#[command(about = "Evaluate a pre-trained lactose model on a food composition dataset", long_about = None)]
struct Cli {
    /// Serialized model or ffnn checkpoint
    #[arg(value_name = "MODEL_PATH")]
    model_path: Option<PathBuf>,

    /// CSV dataset indexed by food code
    #[arg(value_name = "DATA_PATH")]
    data_path: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Model format (ffnn or serialized); inferred from the file name when omitted
    #[arg(long)]
    format: Option<ModelFormat>,

    /// Training feature means
    #[arg(long, default_value = DEFAULT_MEANS_PATH)]
    means: PathBuf,

    /// Training feature variances
    #[arg(long, default_value = DEFAULT_VARIANCES_PATH)]
    variances: PathBuf,

    /// Output directory for results and predictions
    #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
    reports_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_TARGET_COLUMN)]
    target_column: String,

    #[arg(long, default_value = DEFAULT_INDEX_COLUMN)]
    index_column: String,
}

impl Cli {
    fn config(&self) -> EvalConfig {
        EvalConfig {
            means_path: self.means.clone(),
            variances_path: self.variances.clone(),
            reports_dir: self.reports_dir.clone(),
            target_column: self.target_column.clone(),
            index_column: self.index_column.clone(),
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (Some(model_path), Some(data_path)) = (&cli.model_path, &cli.data_path) else {
        println!("{USAGE}");
        return Ok(());
    };
    if !cli.extra.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let pipeline = EvaluationPipeline::builder()
        .config(cli.config())
        .build()
        .context("invalid configuration")?;

    let summary = pipeline
        .run(model_path, data_path)
        .with_context(|| format!("evaluating {} on {}", model_path.display(), data_path.display()))?;

    summary.print();
    Ok(())
}
