use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, summary::render_ascii_chart, EffectsSummary, PredictionApi, PredictionClient,
};
use shared::domain::VariantName;
use tracing_subscriber::EnvFilter;

const CHART_WIDTH: usize = 40;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "pharmacode", about = "Query pharmacogenomic variant predictions")]
struct Args {
    /// Prediction service base URL; overrides pharmacode.toml and environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List variants the service can predict.
    Variants,
    /// Predict molecular effects for one variant.
    Predict {
        variant: String,
        /// Print the raw prediction JSON instead of the effects panel.
        #[arg(long)]
        json: bool,
    },
    /// Check that the prediction service is up.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings().with_api_url_override(args.api_url);
    let client = PredictionClient::from_settings(&settings)
        .context("failed to configure prediction client")?;
    tracing::debug!(base_url = %client.base_url(), "prediction client ready");

    match args.command {
        Command::Variants => {
            let variants = client.list_variants().await?;
            for variant in variants {
                println!("{variant}");
            }
        }
        Command::Predict { variant, json } => {
            let variant = VariantName::new(variant);
            let prediction = client
                .predict(&variant)
                .await
                .with_context(|| format!("prediction for '{variant}' failed"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                print!("{}", render_effects_panel(&EffectsSummary::from_prediction(&prediction)));
            }
        }
        Command::Health => {
            let health = client.health().await?;
            let service = health.service.as_deref().unwrap_or("prediction service");
            match health.checked_at() {
                Some(at) => println!("{service}: {} (at {})", health.status, at.to_rfc3339()),
                None => println!("{service}: {}", health.status),
            }
            if !health.is_healthy() {
                anyhow::bail!("service reported status '{}'", health.status);
            }
        }
    }

    Ok(())
}

fn render_effects_panel(summary: &EffectsSummary) -> String {
    let mut out = format!("{}\n\nPredicted Molecular Effects\n\n", summary.variant_name);
    out.push_str(&render_ascii_chart(summary, CHART_WIDTH));
    out.push_str("\n\n");

    let rows = summary.text_rows();
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or_default();
    for (label, value) in rows {
        out.push_str(&format!("{:<label_width$}  {value}\n", format!("{label}:")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_effects_panel, Args, Command, DEFAULT_LOG_FILTER};
    use clap::Parser;
    use client_core::EffectsSummary;
    use shared::domain::{
        ConfidenceLevel, MolecularEffects, Prediction, PredictionConfidence, VariantName,
    };

    #[test]
    fn default_log_filter_is_info() {
        let level: tracing_subscriber::filter::LevelFilter =
            DEFAULT_LOG_FILTER.parse().expect("level filter");
        assert_eq!(level, tracing_subscriber::filter::LevelFilter::INFO);
    }

    #[test]
    fn parses_predict_with_global_api_url() {
        let args = Args::try_parse_from([
            "pharmacode",
            "predict",
            "CYP2D6*4",
            "--api-url",
            "http://example:9",
        ])
        .expect("args");

        assert_eq!(args.api_url.as_deref(), Some("http://example:9"));
        match args.command {
            Command::Predict { variant, json } => {
                assert_eq!(variant, "CYP2D6*4");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn effects_panel_lists_chart_and_text_rows() {
        let prediction = Prediction {
            variant_name: VariantName::from("CYP2D6*4"),
            molecular_effects: MolecularEffects {
                gene_expression_change: -45.2,
                chromatin_accessibility_change: 12.0,
                splicing_impact: "high".to_string(),
                binding_sites_lost: 3,
                binding_sites_gained: None,
            },
            prediction_confidence: PredictionConfidence {
                expression: ConfidenceLevel::Label("high".to_string()),
                chromatin: None,
            },
            raw_data: None,
        };

        let panel = render_effects_panel(&EffectsSummary::from_prediction(&prediction));

        assert!(panel.starts_with("CYP2D6*4\n"));
        assert!(panel.contains("Gene Expression:"));
        assert!(panel.contains("-45.2%"));
        assert!(panel.contains("Binding Sites Lost:"));
        assert!(panel.lines().any(|line| line.starts_with("Confidence:") && line.ends_with("high")));
    }
}
