use anyhow::{bail, Context, Result};
use search_core::{Document, EngineConfig, SearchEngine};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{ document_id = X, relevance = Y }` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub max_results: usize,
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { max_results: search_core::MAX_RESULT_DOCUMENT_COUNT, format: OutputFormat::Text }
    }
}

/// Raw input: stop words, documents in id order, and the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    pub documents: Vec<String>,
    pub query: String,
}

/// Read the line protocol: stop words, document count, that many documents, query.
///
/// Only the first field of the count line is read; anything after it is ignored.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Corpus> {
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> Result<Option<String>> {
        lines.next().transpose().with_context(|| format!("failed to read {what}"))
    };

    let stop_words = next_line("stop words")?.unwrap_or_default();
    let count_line = match next_line("document count")? {
        Some(line) => line,
        None => bail!("missing document count line"),
    };
    let count: usize = count_line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .parse()
        .with_context(|| format!("invalid document count {count_line:?}"))?;

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        match next_line("document")? {
            Some(line) => documents.push(line),
            None => bail!("expected {count} documents, input ended after {i}"),
        }
    }
    let query = next_line("query")?.unwrap_or_default();
    Ok(Corpus { stop_words, documents, query })
}

pub fn build_engine(corpus: &Corpus, max_results: usize) -> Result<SearchEngine> {
    let mut engine = SearchEngine::with_config(EngineConfig { max_results });
    engine.configure_stop_words(&corpus.stop_words);
    for text in &corpus.documents {
        engine.push_document(text).context("failed to index document")?;
    }
    tracing::info!(num_docs = engine.document_count(), num_terms = engine.index().term_count(), "indexed corpus");
    Ok(engine)
}

pub fn run<R: BufRead, W: Write>(reader: R, mut out: W, opts: &RunOptions) -> Result<()> {
    let corpus = read_corpus(reader)?;
    let engine = build_engine(&corpus, opts.max_results)?;
    let results = engine.search(&corpus.query).context("search failed")?;
    for doc in &results {
        match opts.format {
            OutputFormat::Text => writeln!(out, "{}", format_document(doc))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(doc)?)?,
        }
    }
    out.flush()?;
    Ok(())
}

pub fn format_document(doc: &Document) -> String {
    format!("{{ document_id = {}, relevance = {} }}", doc.id, format_relevance(doc.relevance))
}

/// Format like a default C++ ostream: six significant digits, `%g` rules.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }
    let sci = format!("{value:.5e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}
