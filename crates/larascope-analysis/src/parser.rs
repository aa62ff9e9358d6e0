//! Tree-sitter PHP parser wrapper
//!
//! Thin facade over the tree-sitter PHP grammar: single-file parsing plus
//! a structural query helper (all descendants of a grammar kind) and exact
//! byte-range text extraction with lossy UTF-8 decoding.
//!
//! Grammar availability is a construction-time condition: when
//! [`PhpParser::new`] fails, the analyzer routes the whole run to the
//! regex fallback instead of failing per file.

use larascope_domain::error::{Error, Result};
use tree_sitter::{Language, Node, Parser, Tree};

/// PHP structural parser
pub struct PhpParser {
    parser: Parser,
}

impl PhpParser {
    /// Load the PHP grammar and build a parser
    ///
    /// Fails with [`Error::ParserUnavailable`] when the grammar cannot be
    /// loaded (version mismatch between grammar and runtime).
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_php::LANGUAGE_PHP.into();
        parser
            .set_language(&language)
            .map_err(|e| Error::parser_unavailable(format!("failed to load PHP grammar: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse one file's bytes into a concrete syntax tree
    pub fn parse(&mut self, source: &[u8], file_path: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::file_parse(file_path, "tree-sitter produced no tree"))
    }

    /// Find all descendant nodes (including `node` itself) of a grammar kind
    ///
    /// Depth-first, pre-order, deterministic.
    pub fn query<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
        let mut results = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if current.kind() == kind {
                results.push(current);
            }
            for i in (0..current.child_count()).rev() {
                if let Some(child) = current.child(i as u32) {
                    stack.push(child);
                }
            }
        }
        results
    }

    /// Exact source substring spanned by a node's byte range
    ///
    /// Invalid UTF-8 sequences are substituted, never raised.
    pub fn extract_text(node: Node<'_>, source: &[u8]) -> String {
        let bytes = source.get(node.byte_range()).unwrap_or_default();
        String::from_utf8_lossy(bytes).into_owned()
    }
}
