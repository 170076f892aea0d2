//! Command-line driver: reads NDJSON records on stdin, enriches each
//! through the pipeline, writes enriched NDJSON to stdout. This binary is
//! not part of the core contract (§6) — it's the external driver that
//! wires the library to a stream.

use std::io::{self, BufRead, Write};

use clap::Parser;

use legis_taxa_core::{MakingMetadata, PipelineConfig, Record, TaxaError};

#[derive(Parser)]
#[command(name = "legis-taxa")]
#[command(about = "Classify legislative records from NDJSON on stdin", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a RON config file overriding pipeline defaults.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Also run the Making Detector over each record's metadata fields
    /// (`title_en`, `md_description`, `md_body_paras`, `md_schedule_paras`)
    /// and merge its persistence map into the output.
    #[arg(long)]
    detect_making: bool,
}

fn load_config(path: Option<&std::path::Path>) -> Result<PipelineConfig, TaxaError> {
    match path {
        None => Ok(PipelineConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(PipelineConfig::from_ron(&text)?)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "failed to load config, aborting");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut records = Vec::new();
    let mut metadata = Vec::new();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "failed to read a line, skipping");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(%err, line = %line, "skipping unparseable line");
                continue;
            }
        };
        let Some(map) = value.as_object() else {
            tracing::warn!(line = %line, "skipping non-object line");
            continue;
        };
        if cli.detect_making {
            metadata.push(serde_json::from_value::<MakingMetadata>(value.clone()).unwrap_or_default());
        }
        records.push(Record::from_json_map(map));
    }

    let outputs = legis_taxa_pipeline::classify_batch(records, &config);

    for (i, output) in outputs.into_iter().enumerate() {
        let mut doc = serde_json::to_value(&output.record).unwrap_or_default();
        if cli.detect_making {
            if let Some(meta) = metadata.get(i) {
                let result = legis_taxa_making::detect(meta, &config);
                let fields = legis_taxa_making::to_parsed_law_fields(&result, "");
                if let (Some(doc_obj), Some(fields_obj)) = (doc.as_object_mut(), fields.as_object()) {
                    for (k, v) in fields_obj {
                        doc_obj.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        if writeln!(out, "{doc}").is_err() {
            tracing::error!("failed to write output line, aborting");
            std::process::exit(1);
        }
    }
}
