//! Structural chunk extraction from parsed PHP
//!
//! Walks the concrete syntax tree and emits one chunk per class plus one
//! chunk per method, carrying structural metadata (`extends`,
//! `implements`, method counts, visibility, parameter counts) and
//! best-effort dependency lists. Methods and functions are the finest
//! granularity; the walk never descends into a captured body for further
//! sub-chunks.
//!
//! Traversal context (current namespace, enclosing class) is an explicit
//! value passed down each recursive call, never shared mutable state
//! across sibling subtrees.

use crate::fallback::whole_file_chunk;
use crate::parser::PhpParser;
use larascope_domain::entities::CodeChunk;
use larascope_domain::value_objects::FileType;
use regex::Regex;
use serde_json::{Map, json};
use std::sync::LazyLock;
use tree_sitter::{Node, Tree};

/// `use X;`, `use X as Y;`, `use function X;`, `use const X;`
static USE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*use\s+(?:function\s+|const\s+)?([A-Za-z_\\][A-Za-z0-9_\\]*)(?:\s+as\s+[A-Za-z_][A-Za-z0-9_]*)?\s*;",
    )
    .expect("invalid use-import regex")
});

/// `new ClassName`
static NEW_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnew\s+([A-Za-z_\\][A-Za-z0-9_\\]*)").expect("invalid instantiation regex")
});

/// `ClassName::class`
static CLASS_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_\\][A-Za-z0-9_\\]*)::class").expect("invalid class-ref regex")
});

/// Relative scopes that never name an importable class
const NON_CLASS_SCOPES: &[&str] = &["self", "parent", "static"];

/// Traversal context threaded through the recursive walk
#[derive(Debug, Clone, Default)]
struct WalkContext {
    namespace: String,
}

/// Extracts class/method chunks and dependencies from a parsed PHP file
#[derive(Debug, Default)]
pub struct ChunkExtractor;

impl ChunkExtractor {
    /// Create a new chunk extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract all chunks for one parsed file
    ///
    /// Emits classes in pre-order, each immediately followed by its
    /// methods. When nothing structural is found in a non-blank file, a
    /// single whole-file `file_content` chunk is emitted instead.
    pub fn extract(
        &self,
        file_path: &str,
        file_type: FileType,
        tree: &Tree,
        source: &[u8],
    ) -> Vec<CodeChunk> {
        let imports = self.import_dependencies(tree.root_node(), source);
        let mut chunks = Vec::new();
        self.walk(
            tree.root_node(),
            WalkContext::default(),
            file_path,
            file_type,
            source,
            &imports,
            &mut chunks,
        );

        if chunks.is_empty() {
            let text = String::from_utf8_lossy(source);
            if !text.trim().is_empty() {
                let mut chunk = whole_file_chunk(file_path, "file_content", &text);
                chunk.import_dependencies = imports;
                chunks.push(chunk);
            }
        }
        chunks
    }

    #[allow(clippy::too_many_arguments)]
    fn walk(
        &self,
        node: Node<'_>,
        ctx: WalkContext,
        file_path: &str,
        file_type: FileType,
        source: &[u8],
        imports: &[String],
        chunks: &mut Vec<CodeChunk>,
    ) {
        // The context is rebuilt locally: a namespace declaration applies
        // to the siblings that follow it, so updates flow forward through
        // this loop and down into recursive calls, never back up.
        let mut ctx = ctx;
        for i in 0..node.child_count() {
            let Some(child) = node.child(i as u32) else {
                continue;
            };
            match child.kind() {
                "namespace_definition" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        ctx.namespace = PhpParser::extract_text(name, source);
                    }
                    // Block-form namespaces hold their declarations in a body
                    if let Some(body) = child.child_by_field_name("body") {
                        self.walk(
                            body,
                            ctx.clone(),
                            file_path,
                            file_type,
                            source,
                            imports,
                            chunks,
                        );
                    }
                }
                "class_declaration" => {
                    self.emit_class(child, &ctx, file_path, file_type, source, imports, chunks);
                }
                "function_definition" => {
                    self.emit_function(child, &ctx, file_path, file_type, source, chunks);
                }
                _ => {
                    self.walk(
                        child,
                        ctx.clone(),
                        file_path,
                        file_type,
                        source,
                        imports,
                        chunks,
                    );
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_class(
        &self,
        class_node: Node<'_>,
        ctx: &WalkContext,
        file_path: &str,
        file_type: FileType,
        source: &[u8],
        imports: &[String],
        chunks: &mut Vec<CodeChunk>,
    ) {
        let Some(name_node) = class_node.child_by_field_name("name") else {
            return;
        };
        let class_name = PhpParser::extract_text(name_node, source);

        let methods = PhpParser::query(class_node, "method_declaration");
        let method_names: Vec<String> = methods
            .iter()
            .filter_map(|m| m.child_by_field_name("name"))
            .map(|n| PhpParser::extract_text(n, source))
            .collect();

        let mut metadata = Map::new();
        if !ctx.namespace.is_empty() {
            metadata.insert("namespace".to_string(), json!(ctx.namespace));
        }
        if let Some(extends) = clause_names(class_node, "base_clause", source) {
            metadata.insert("extends".to_string(), json!(extends));
        }
        if let Some(implements) = clause_names(class_node, "class_interface_clause", source) {
            metadata.insert("implements".to_string(), json!(implements));
        }
        metadata.insert("method_count".to_string(), json!(method_names.len()));
        metadata.insert("method_names".to_string(), json!(method_names));

        chunks.push(CodeChunk {
            chunk_type: file_type.as_str().to_string(),
            name: class_name.clone(),
            file_path: file_path.to_string(),
            start_line: line_of(class_node.start_position()),
            end_line: line_of(class_node.end_position()),
            content: PhpParser::extract_text(class_node, source),
            metadata,
            import_dependencies: imports.to_vec(),
            method_dependencies: Vec::new(),
        });

        for method in methods {
            self.emit_method(method, &class_name, file_path, file_type, source, chunks);
        }
    }

    fn emit_method(
        &self,
        method_node: Node<'_>,
        class_name: &str,
        file_path: &str,
        file_type: FileType,
        source: &[u8],
        chunks: &mut Vec<CodeChunk>,
    ) {
        let Some(name_node) = method_node.child_by_field_name("name") else {
            return;
        };
        let method_name = PhpParser::extract_text(name_node, source);
        // A method named after its class keeps the bare name rather than
        // the redundant `ClassName::ClassName`
        let name = if method_name == class_name {
            method_name
        } else {
            format!("{class_name}::{method_name}")
        };

        let mut metadata = Map::new();
        for i in 0..method_node.child_count() {
            let Some(child) = method_node.child(i as u32) else {
                continue;
            };
            match child.kind() {
                "visibility_modifier" => {
                    metadata.insert(
                        "visibility".to_string(),
                        json!(PhpParser::extract_text(child, source)),
                    );
                }
                "static_modifier" => {
                    metadata.insert("static".to_string(), json!(true));
                }
                _ => {}
            }
        }
        if let Some(params) = method_node.child_by_field_name("parameters") {
            metadata.insert("parameter_count".to_string(), json!(parameter_count(params)));
        }

        let method_dependencies = method_node
            .child_by_field_name("body")
            .map(|body| self.method_dependencies(body, source))
            .unwrap_or_default();

        chunks.push(CodeChunk {
            chunk_type: file_type.method_chunk_type(),
            name,
            file_path: file_path.to_string(),
            start_line: line_of(method_node.start_position()),
            end_line: line_of(method_node.end_position()),
            content: PhpParser::extract_text(method_node, source),
            metadata,
            import_dependencies: Vec::new(),
            method_dependencies,
        });
    }

    fn emit_function(
        &self,
        fn_node: Node<'_>,
        ctx: &WalkContext,
        file_path: &str,
        file_type: FileType,
        source: &[u8],
        chunks: &mut Vec<CodeChunk>,
    ) {
        let Some(name_node) = fn_node.child_by_field_name("name") else {
            return;
        };
        let mut metadata = Map::new();
        if !ctx.namespace.is_empty() {
            metadata.insert("namespace".to_string(), json!(ctx.namespace));
        }
        if let Some(params) = fn_node.child_by_field_name("parameters") {
            metadata.insert("parameter_count".to_string(), json!(parameter_count(params)));
        }
        let method_dependencies = fn_node
            .child_by_field_name("body")
            .map(|body| self.method_dependencies(body, source))
            .unwrap_or_default();

        chunks.push(CodeChunk {
            chunk_type: file_type.function_chunk_type(),
            name: PhpParser::extract_text(name_node, source),
            file_path: file_path.to_string(),
            start_line: line_of(fn_node.start_position()),
            end_line: line_of(fn_node.end_position()),
            content: PhpParser::extract_text(fn_node, source),
            metadata,
            import_dependencies: Vec::new(),
            method_dependencies,
        });
    }

    /// Import-level dependency extraction, in tiers
    ///
    /// Tier 1 queries structural use declarations; tier 2 falls back to a
    /// regex over the raw source when tier 1 found nothing; tier 3 is a
    /// supplementary heuristic scan for `new ClassName` and
    /// `ClassName::class`, always applied. Names are trimmed of leading
    /// separators and de-duplicated preserving first-seen order.
    pub(crate) fn import_dependencies(&self, root: Node<'_>, source: &[u8]) -> Vec<String> {
        let mut deps = Vec::new();

        for decl in PhpParser::query(root, "namespace_use_declaration") {
            for i in 0..decl.named_child_count() {
                let Some(clause) = decl.named_child(i as u32) else {
                    continue;
                };
                if clause.kind() != "namespace_use_clause" {
                    continue;
                }
                if let Some(name) = clause.named_child(0) {
                    push_unique(&mut deps, normalize_name(&PhpParser::extract_text(name, source)));
                }
            }
        }

        let text = String::from_utf8_lossy(source);
        if deps.is_empty() {
            use_statement_imports(&text, &mut deps);
        }
        heuristic_imports(&text, &mut deps);

        deps
    }

    /// Scan a method body for same-class and cross-scope method calls
    ///
    /// `$this->m()` is standardized to `self::m`; `Scope::m()` keeps its
    /// scope when it is `self`/`parent`/`static` or a bare type name.
    /// This is a documented heuristic: calls through statically imported
    /// classes can be misclassified as internal.
    fn method_dependencies(&self, body: Node<'_>, source: &[u8]) -> Vec<String> {
        let mut deps = Vec::new();

        for call in PhpParser::query(body, "member_call_expression") {
            let Some(object) = call.child_by_field_name("object") else {
                continue;
            };
            if object.kind() == "variable_name"
                && PhpParser::extract_text(object, source) == "$this"
            {
                if let Some(name) = call.child_by_field_name("name") {
                    push_unique(
                        &mut deps,
                        format!("self::{}", PhpParser::extract_text(name, source)),
                    );
                }
            }
        }

        for call in PhpParser::query(body, "scoped_call_expression") {
            let (Some(scope), Some(name)) = (
                call.child_by_field_name("scope"),
                call.child_by_field_name("name"),
            ) else {
                continue;
            };
            if matches!(scope.kind(), "relative_scope" | "name" | "qualified_name") {
                let scope_text = normalize_name(&PhpParser::extract_text(scope, source));
                push_unique(
                    &mut deps,
                    format!("{scope_text}::{}", PhpParser::extract_text(name, source)),
                );
            }
        }

        deps
    }
}

/// Tier 2: `use` statements matched against raw source text
pub(crate) fn use_statement_imports(text: &str, deps: &mut Vec<String>) {
    for cap in USE_IMPORT_RE.captures_iter(text) {
        push_unique(deps, normalize_name(&cap[1]));
    }
}

/// Tier 3: instantiations and `::class` references, always applied
pub(crate) fn heuristic_imports(text: &str, deps: &mut Vec<String>) {
    for cap in NEW_CLASS_RE.captures_iter(text) {
        let name = normalize_name(&cap[1]);
        if !NON_CLASS_SCOPES.contains(&name.as_str()) {
            push_unique(deps, name);
        }
    }
    for cap in CLASS_REF_RE.captures_iter(text) {
        let name = normalize_name(&cap[1]);
        if !NON_CLASS_SCOPES.contains(&name.as_str()) {
            push_unique(deps, name);
        }
    }
}

fn line_of(point: tree_sitter::Point) -> u32 {
    // tree-sitter rows are 0-indexed
    point.row as u32 + 1
}

fn parameter_count(params: Node<'_>) -> usize {
    let mut count = 0;
    for i in 0..params.named_child_count() {
        if let Some(child) = params.named_child(i as u32) {
            if child.kind().ends_with("_parameter") {
                count += 1;
            }
        }
    }
    count
}

fn clause_names(class_node: Node<'_>, clause_kind: &str, source: &[u8]) -> Option<String> {
    for i in 0..class_node.child_count() {
        let Some(child) = class_node.child(i as u32) else {
            continue;
        };
        if child.kind() != clause_kind {
            continue;
        }
        let mut names = Vec::new();
        for j in 0..child.named_child_count() {
            if let Some(name) = child.named_child(j as u32) {
                names.push(PhpParser::extract_text(name, source));
            }
        }
        if names.is_empty() {
            return None;
        }
        return Some(names.join(", "));
    }
    None
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches('\\').to_string()
}

pub(crate) fn push_unique(deps: &mut Vec<String>, dep: String) {
    if !dep.is_empty() && !deps.contains(&dep) {
        deps.push(dep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROLLER: &[u8] = br#"<?php

namespace App\Http\Controllers;

use App\Models\Leave;
use App\Models\Leave;
use App\Services\LeaveService;

class LeaveController extends Controller implements Countable
{
    public function index()
    {
        $leaves = Leave::all();
        return $this->respond($leaves);
    }

    protected function respond($data)
    {
        $formatted = self::format($data);
        return parent::json($formatted);
    }

    private static function format($data)
    {
        return new LeaveCollection($data);
    }
}
"#;

    fn extract(source: &[u8], file_type: FileType) -> Vec<CodeChunk> {
        let mut parser = PhpParser::new().unwrap();
        let tree = parser.parse(source, "test.php").unwrap();
        ChunkExtractor::new().extract("test.php", file_type, &tree, source)
    }

    #[test]
    fn test_class_and_method_chunks() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        assert_eq!(chunks.len(), 4); // class + 3 methods

        let class = &chunks[0];
        assert_eq!(class.chunk_type, "controller");
        assert_eq!(class.name, "LeaveController");
        assert_eq!(class.metadata["namespace"], "App\\Http\\Controllers");
        assert_eq!(class.metadata["extends"], "Controller");
        assert_eq!(class.metadata["implements"], "Countable");
        assert_eq!(class.metadata["method_count"], 3);
        assert_eq!(
            class.metadata["method_names"],
            serde_json::json!(["index", "respond", "format"])
        );

        let index = &chunks[1];
        assert_eq!(index.chunk_type, "controller_method");
        assert_eq!(index.name, "LeaveController::index");
        assert_eq!(index.metadata["visibility"], "public");
    }

    #[test]
    fn test_method_count_matches_emitted_method_chunks() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        let class = &chunks[0];
        let emitted = chunks
            .iter()
            .filter(|c| c.name.starts_with("LeaveController::"))
            .count();
        assert_eq!(class.metadata["method_count"], emitted);
    }

    #[test]
    fn test_content_is_exact_source_substring() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        let source = String::from_utf8_lossy(CONTROLLER);
        for chunk in &chunks {
            assert!(
                source.contains(&chunk.content),
                "chunk {} content drifted from source",
                chunk.name
            );
            assert!(chunk.start_line <= chunk.end_line);
        }
    }

    #[test]
    fn test_import_dependencies_deduplicated_first_seen() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        let class = &chunks[0];
        // The duplicated `use App\Models\Leave;` collapses to one entry;
        // tier 3 adds the instantiated LeaveCollection
        assert_eq!(
            class.import_dependencies,
            vec![
                "App\\Models\\Leave".to_string(),
                "App\\Services\\LeaveService".to_string(),
                "LeaveCollection".to_string(),
            ]
        );
    }

    #[test]
    fn test_method_dependencies() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        let index = chunks.iter().find(|c| c.name.ends_with("::index")).unwrap();
        assert!(index.method_dependencies.contains(&"self::respond".to_string()));
        assert!(index.method_dependencies.contains(&"Leave::all".to_string()));

        let respond = chunks.iter().find(|c| c.name.ends_with("::respond")).unwrap();
        assert!(respond.method_dependencies.contains(&"self::format".to_string()));
        assert!(respond.method_dependencies.contains(&"parent::json".to_string()));
        // Non-method chunks never carry method dependencies
        assert!(chunks[0].method_dependencies.is_empty());
    }

    #[test]
    fn test_static_and_parameter_metadata() {
        let chunks = extract(CONTROLLER, FileType::Controller);
        let format = chunks.iter().find(|c| c.name.ends_with("::format")).unwrap();
        assert_eq!(format.metadata["visibility"], "private");
        assert_eq!(format.metadata["static"], true);
        assert_eq!(format.metadata["parameter_count"], 1);
    }

    #[test]
    fn test_instantiation_scan_requires_word_boundary() {
        let source = br"<?php
class Subscription {
    public function extend() {
        $note = 'renew Leave before expiry';
        return new Lease($note);
    }
}
";
        let chunks = extract(source, FileType::Service);
        let class = &chunks[0];
        assert!(class.import_dependencies.contains(&"Lease".to_string()));
        // `renew Leave` must not register as an instantiation
        assert!(!class.import_dependencies.contains(&"Leave".to_string()));
    }

    #[test]
    fn test_constructor_name_not_double_qualified() {
        let source = br"<?php
class Leave {
    public function Leave() {
        return true;
    }
}
";
        let chunks = extract(source, FileType::Model);
        let method = chunks
            .iter()
            .find(|c| c.chunk_type == "model_method")
            .unwrap();
        assert_eq!(method.name, "Leave");
    }

    #[test]
    fn test_whole_file_fallback_when_nothing_structural() {
        let source = b"<?php\n\necho 'hello';\n";
        let chunks = extract(source, FileType::Unknown);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "file_content");
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 3);
    }

    #[test]
    fn test_standalone_function_chunk() {
        let source = b"<?php\nfunction format_date($d) {\n    return $d;\n}\n";
        let chunks = extract(source, FileType::Helper);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "helper_function");
        assert_eq!(chunks[0].name, "format_date");
        assert_eq!(chunks[0].metadata["parameter_count"], 1);
    }
}
