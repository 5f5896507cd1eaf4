// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! kgcompare CLI
//!
//! Command-line interface for comparing two documents through their
//! knowledge-graph triples.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kgcompare_core::{read_document, AnalyzerConfig, NTriplesWriter, SourceTag, Triple};
use kgcompare_evals::{AnalysisReport, KnowledgeGraphAnalyzer};
use kgcompare_extract::TripleExtractor;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "kgcompare")]
#[command(about = "Compare two documents through their knowledge-graph triples", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    log_format: LogFormat,

    /// Verbose mode (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two exported documents and print the JSON report
    Analyze {
        /// First document (source A)
        source_a: PathBuf,

        /// Second document (source B)
        source_b: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a human-readable summary to stderr
        #[arg(long)]
        summary: bool,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Extract triples from one document and print them as JSON
    Extract {
        /// Document to extract from
        file: PathBuf,

        /// Source tag recorded on each triple (a or b)
        #[arg(long, default_value = "a", value_parser = parse_source)]
        source: SourceTag,

        /// Print at most this many triples
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Extract triples from one document and export them as N-Triples
    ExportRdf {
        /// Document to extract from
        file: PathBuf,

        /// N-Triples output file
        #[arg(short, long)]
        output: PathBuf,

        /// Source tag recorded on each triple (a or b)
        #[arg(long, default_value = "a", value_parser = parse_source)]
        source: SourceTag,
    },
}

fn parse_source(raw: &str) -> Result<SourceTag, String> {
    SourceTag::from_str(raw).ok_or_else(|| format!("expected 'a' or 'b', got '{}'", raw))
}

/// Crate targets enabled by default
const LOG_TARGETS: &[&str] = &[
    "kgcompare",
    "kgcompare_core",
    "kgcompare_extract",
    "kgcompare_embeddings",
    "kgcompare_evals",
];

fn init_logging(format: LogFormat, verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = LOG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    // Logs go to stderr so stdout carries only the report
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let config = AnalyzerConfig::load(cli.config.clone()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Analyze {
            source_a,
            source_b,
            output,
            summary,
            pretty,
        } => {
            let analyzer =
                KnowledgeGraphAnalyzer::new(config).context("Failed to initialize analyzer")?;
            let report = analyzer
                .analyze_files(&source_a, &source_b)
                .context("Analysis failed")?;

            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            write_output(output.as_deref(), &json)?;
            if summary {
                eprint!("{}", render_summary(&report));
            }
        }

        Commands::Extract {
            file,
            source,
            limit,
        } => {
            let triples = extract_file(&config, &file, source)?;
            let shown = limit.unwrap_or(triples.len()).min(triples.len());
            println!("{}", serde_json::to_string_pretty(&triples[..shown])?);
        }

        Commands::ExportRdf {
            file,
            output,
            source,
        } => {
            let triples = extract_file(&config, &file, source)?;
            let out = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            NTriplesWriter::new(source.as_str())
                .write_to(&triples, BufWriter::new(out))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(triples = triples.len(), output = %output.display(), "Exported N-Triples");
        }
    }

    Ok(())
}

fn extract_file(config: &AnalyzerConfig, path: &Path, source: SourceTag) -> Result<Vec<Triple>> {
    let doc = read_document(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let extractor = TripleExtractor::with_config((&config.extraction).into())
        .context("Failed to build triple extractor")?;
    Ok(extractor.extract(&doc.body, source))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(output = %path.display(), "Wrote report");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

fn render_summary(report: &AnalysisReport) -> String {
    let meta = &report.metadata;
    let cmp = &report.comparison;
    let overlap = &cmp.triple_overlap;
    let semantic = &cmp.semantic_similarity;
    let provenance = &cmp.provenance_analysis;

    let mut out = String::new();
    out.push_str("Knowledge graph comparison\n");
    out.push_str(&format!(
        "  Triples: {} = {}, {} = {}\n",
        meta.source_a_label, meta.total_triples_a, meta.source_b_label, meta.total_triples_b
    ));
    out.push_str(&format!(
        "  Overlap: exact {:.2}% ({}), fuzzy {:.2}% ({})\n",
        overlap.exact_overlap_score,
        overlap.exact_overlap_count,
        overlap.fuzzy_overlap_score,
        overlap.fuzzy_overlap_count
    ));
    out.push_str(&format!(
        "  Semantic similarity: {:.4} avg, {:.4} max ({})\n",
        semantic.average_similarity, semantic.max_similarity, semantic.method
    ));
    out.push_str(&format!(
        "  Contradictions: {}\n",
        cmp.contradictions.contradiction_count
    ));
    out.push_str(&format!(
        "  Entity coherence: {:.2} over {} common entities\n",
        cmp.entity_coherence.coherence_score, cmp.entity_coherence.common_entities
    ));
    out.push_str(&format!(
        "  Cited triples: {} {:.2}%, {} {:.2}%\n",
        meta.source_a_label,
        provenance.source_a_cited_percentage,
        meta.source_b_label,
        provenance.source_b_cited_percentage
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "kgcompare", "--log-format", "json", "-vv", "analyze", "a.txt", "b.txt", "--summary",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Analyze { summary: true, pretty: false, .. }));
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(parse_source("b"), Ok(SourceTag::B));
        assert!(parse_source("c").is_err());
        let cli = Cli::try_parse_from(["kgcompare", "extract", "doc.txt", "--source", "x"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_summary_mentions_method() {
        let report = AnalysisReport {
            triples_sample_a: Vec::new(),
            triples_sample_b: Vec::new(),
            comparison: Default::default(),
            metadata: kgcompare_evals::AnalysisMetadata {
                source_a_file: "a".into(),
                source_b_file: "b".into(),
                source_a_label: "wikipedia".into(),
                source_b_label: "grokipedia".into(),
                total_triples_a: 3,
                total_triples_b: 4,
                source_a_document: Default::default(),
                source_b_document: Default::default(),
                embedding_method: "tf-idf".into(),
                analyzed_at: Default::default(),
            },
        };
        let summary = render_summary(&report);
        assert!(summary.contains("wikipedia = 3"));
        assert!(summary.contains("Contradictions: 0"));
    }
}
