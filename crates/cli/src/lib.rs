use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use lexsem_api::{Concept, LexicalResource, WordRelation};
use lexsem_word2vec::{
    Word2VecAdaptor, DEFAULT_RELATED_WORD_LIMIT, DEFAULT_SIMILARITY_THRESHOLD,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

mod report;

use report::{
    ConceptsOutput, InfoOutput, NeighborsOutput, RelationsOutput, ScoredWord, SimilarityOutput,
};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "lexsem")]
#[command(about = "Lexical-semantic queries over pre-trained word embeddings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Vocabulary size and dimension of a model
    Info {
        /// Path to a word2vec model (text or C binary format)
        #[arg(short, long)]
        model: PathBuf,
    },
    /// Nearest neighbors of a word
    Neighbors {
        #[arg(short, long)]
        model: PathBuf,
        word: String,
        /// Number of neighbors to return
        #[arg(long, default_value_t = DEFAULT_RELATED_WORD_LIMIT)]
        top_k: usize,
    },
    /// Normalized similarity between two words
    Similarity {
        #[arg(short, long)]
        model: PathBuf,
        word1: String,
        word2: String,
    },
    /// Relations classified as holding between two words
    Relations {
        #[arg(short, long)]
        model: PathBuf,
        word1: String,
        word2: String,
        /// Similarity threshold for a relation to count as holding
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,
    },
    /// Concepts a word can express
    Concepts {
        #[arg(short, long)]
        model: PathBuf,
        word: String,
    },
}

/// Parses arguments, runs one command, prints its JSON result on stdout.
pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Info { model } => {
            let adaptor = open(&model, DEFAULT_SIMILARITY_THRESHOLD)?;
            emit(&InfoOutput {
                model: model.display().to_string(),
                words: adaptor.model().len(),
                dimension: adaptor.model().dimension(),
            })
        }
        Commands::Neighbors {
            model,
            word,
            top_k,
        } => {
            let adaptor = open(&model, DEFAULT_SIMILARITY_THRESHOLD)?;
            let neighbors = adaptor
                .model()
                .nearest(&word, top_k)
                .into_iter()
                .map(|n| ScoredWord {
                    word: n.word,
                    score: f64::from(n.score),
                })
                .collect();
            emit(&NeighborsOutput { word, neighbors })
        }
        Commands::Similarity {
            model,
            word1,
            word2,
        } => {
            let adaptor = open(&model, DEFAULT_SIMILARITY_THRESHOLD)?;
            let scores = adaptor.word_relations_weighted(None, None, &word1, &word2)?;
            let score = scores
                .get(&WordRelation::Similarity)
                .copied()
                .unwrap_or(0.0);
            let in_vocabulary =
                adaptor.model().contains(&word1) && adaptor.model().contains(&word2);
            emit(&SimilarityOutput {
                word1,
                word2,
                score,
                in_vocabulary,
            })
        }
        Commands::Relations {
            model,
            word1,
            word2,
            threshold,
        } => {
            let adaptor = open(&model, threshold)?;
            let scores = adaptor.word_relations_weighted(None, None, &word1, &word2)?;
            let relations = adaptor.word_relations(None, None, &word1, &word2)?;

            let mut relation_names: Vec<String> =
                relations.iter().map(ToString::to_string).collect();
            relation_names.sort();
            let scores: BTreeMap<String, f64> = scores
                .into_iter()
                .map(|(relation, score)| (relation.to_string(), score))
                .collect();

            emit(&RelationsOutput {
                word1,
                word2,
                threshold,
                scores,
                relations: relation_names,
            })
        }
        Commands::Concepts { model, word } => {
            let adaptor = open(&model, DEFAULT_SIMILARITY_THRESHOLD)?;
            let mut concepts: Vec<Concept> =
                adaptor.concepts(None, None, &word)?.into_iter().collect();
            concepts.sort_by(|a, b| a.id.cmp(&b.id));
            emit(&ConceptsOutput { word, concepts })
        }
    }
}

fn open(model: &Path, threshold: f64) -> Result<Word2VecAdaptor> {
    log::debug!("Opening model {} (threshold {threshold})", model.display());
    Word2VecAdaptor::open_with_threshold(model, threshold)
        .with_context(|| format!("Failed to open model {}", model.display()))
}

fn emit<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    print_stdout(&json)
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}
