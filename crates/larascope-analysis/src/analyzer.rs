//! Codebase analyzer - drives routing, parsing, and chunk extraction
//!
//! One pass over the whole tree per invocation, no state carried between
//! runs. Per-file failures degrade to zero chunks for that file and a
//! logged warning; only a missing root path aborts the run.

use crate::extractor::ChunkExtractor;
use crate::fallback::FallbackChunker;
use crate::file_router::{FileRouter, RoutedFile};
use crate::parser::PhpParser;
use larascope_domain::constants::MAX_FILE_SIZE;
use larascope_domain::entities::CodeChunk;
use larascope_domain::error::{Error, Result};
use larascope_domain::value_objects::FileType;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// How PHP sources are chunked for this run
///
/// Selected once at construction: when the tree-sitter grammar loads, the
/// structural walk handles PHP; otherwise the whole run uses the regex
/// path. Never re-evaluated per file.
pub enum ParserStrategy {
    /// tree-sitter grammar loaded, class/method walk available
    Structural(PhpParser),
    /// grammar unavailable, brace-matched regex extraction
    Regex,
}

/// Outcome of one analyzer run
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// All chunks, in deterministic file order, pre-order within a file
    pub chunks: Vec<CodeChunk>,
    /// Files read and extracted (including files yielding zero chunks)
    pub files_processed: usize,
    /// Files dropped after a per-file error
    pub files_skipped: usize,
}

/// Walks a codebase root and accumulates the full chunk collection
pub struct CodebaseAnalyzer {
    router: FileRouter,
    extractor: ChunkExtractor,
    fallback: FallbackChunker,
    strategy: ParserStrategy,
}

impl CodebaseAnalyzer {
    /// Build an analyzer, probing grammar availability once
    pub fn new() -> Self {
        let strategy = match PhpParser::new() {
            Ok(parser) => ParserStrategy::Structural(parser),
            Err(e) => {
                warn!(error = %e, "structural parser unavailable, using regex extraction for this run");
                ParserStrategy::Regex
            }
        };
        Self {
            router: FileRouter::new(),
            extractor: ChunkExtractor::new(),
            fallback: FallbackChunker::new(),
            strategy,
        }
    }

    /// Analyze the tree under `root` and return the full chunk collection
    ///
    /// Fails only when `root` itself is missing. Every other failure is
    /// per file: logged, counted as skipped, run continues.
    pub fn analyze(&mut self, root: &Path) -> Result<AnalysisReport> {
        let files: Vec<RoutedFile> = self.router.scan(root)?.collect();
        info!(root = %root.display(), files = files.len(), "analyzing codebase");

        let mut report = AnalysisReport::default();
        for file in files {
            match self.process_file(&file) {
                Ok(chunks) => {
                    debug!(path = %file.path.display(), chunks = chunks.len(), "processed file");
                    report.files_processed += 1;
                    report.chunks.extend(chunks);
                }
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "skipping file");
                    report.files_skipped += 1;
                }
            }
        }

        info!(
            chunks = report.chunks.len(),
            processed = report.files_processed,
            skipped = report.files_skipped,
            "analysis complete"
        );
        Ok(report)
    }

    fn process_file(&mut self, file: &RoutedFile) -> Result<Vec<CodeChunk>> {
        let bytes = fs::read(&file.path)?;
        if bytes.len() > MAX_FILE_SIZE {
            debug!(path = %file.path.display(), size = bytes.len(), "file over size limit, ignoring");
            return Ok(Vec::new());
        }
        if bytes.contains(&0) {
            return Err(Error::file_decode(
                file.path.display().to_string(),
                "binary content (NUL byte)",
            ));
        }

        let path_str = file.path.display().to_string();
        match file.file_type {
            // These have no class/method structure, always type-specific
            FileType::Route | FileType::Config | FileType::Env | FileType::BladeTemplate => {
                let content = String::from_utf8_lossy(&bytes);
                Ok(self.fallback.extract(&path_str, &content, file.file_type))
            }
            _ => {
                if let ParserStrategy::Structural(parser) = &mut self.strategy {
                    if is_php(&file.path) {
                        let tree = parser.parse(&bytes, &path_str)?;
                        return Ok(self.extractor.extract(
                            &path_str,
                            file.file_type,
                            &tree,
                            &bytes,
                        ));
                    }
                }
                let content = String::from_utf8_lossy(&bytes);
                Ok(self.fallback.extract(&path_str, &content, file.file_type))
            }
        }
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_php(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
}
