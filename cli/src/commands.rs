use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use topdocs_core::corpus::load_corpus;
use topdocs_core::{DocId, Document, SearchConfig, SearchServer};

use crate::input::read_classic_input;

/// Index the classic line-oriented input and write one result per line.
pub fn run_classic<R: BufRead, W: Write>(reader: R, out: W, config: SearchConfig) -> Result<()> {
    let input = read_classic_input(reader).context("reading input")?;
    let mut server = SearchServer::with_config(&input.stop_words, config);
    for (id, doc) in input.documents.iter().enumerate() {
        let id = DocId::try_from(id).context("too many documents")?;
        server.add_document(id, &doc.text, &doc.ratings)?;
    }
    tracing::info!(num_docs = server.document_count(), "documents indexed");
    let found = server.find_top_documents(&input.query)?;
    write_lines(out, &found)
}

pub fn run_query<W: Write>(corpus: &str, stop_words: &str, config: SearchConfig, json: bool, query: &str, mut out: W) -> Result<()> {
    let docs = load_corpus(corpus)?;
    let mut server = SearchServer::with_config(stop_words, config);
    server.ingest(docs)?;
    tracing::info!(num_docs = server.document_count(), corpus, "documents indexed");
    let found = server.find_top_documents(query)?;
    if json {
        serde_json::to_writer_pretty(&mut out, &found)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    } else {
        write_lines(out, &found)
    }
}

fn write_lines<W: Write>(mut out: W, found: &[Document]) -> Result<()> {
    for doc in found {
        writeln!(out, "{doc}")?;
    }
    out.flush()?;
    Ok(())
}
