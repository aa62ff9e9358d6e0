//! Regex-based chunking for non-class artifacts and parser-less runs
//!
//! Route files, config arrays, env files, and Blade templates have no
//! class/method grammar structure, so they always take this path. Plain
//! PHP files land here only when the tree-sitter grammar failed to load,
//! via brace-matched block extraction.

use crate::extractor::{heuristic_imports, normalize_name, push_unique, use_statement_imports};
use larascope_domain::entities::CodeChunk;
use larascope_domain::value_objects::FileType;
use regex::Regex;
use serde_json::{Map, json};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// `Route::get('/leaves', ...);` and friends, spanning to the closing `;`
static ROUTE_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*Route::([A-Za-z]+)\s*\(.*?\)\s*;").expect("invalid route regex")
});

/// First quoted string inside a route call, taken as the URI pattern
static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]*)['"]"#).expect("invalid quoted-string regex"));

/// `'LeaveController@index'` string handler form
static AT_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([A-Za-z_\\][A-Za-z0-9_\\]*)@([A-Za-z_][A-Za-z0-9_]*)['"]"#)
        .expect("invalid at-handler regex")
});

/// `[LeaveController::class, 'index']` array handler form
static CLASS_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\[\s*\\?([A-Za-z_\\][A-Za-z0-9_\\]*)::class\s*(?:,\s*['"]([A-Za-z_][A-Za-z0-9_]*)['"])?"#,
    )
    .expect("invalid class-handler regex")
});

/// `return [` or `return array(` opening a config array literal
static CONFIG_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return\s*(\[|array\s*\()").expect("invalid config-return regex")
});

/// Blade section boundaries: `@section('name')` / `@component(...)`
static BLADE_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(section|component)\s*\(\s*(?:['"]([^'"]+)['"])?"#)
        .expect("invalid blade-boundary regex")
});

/// `@extends('layouts.app')` / `@include('partials.nav')` dependencies
static BLADE_DEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(extends|include)\s*\(\s*['"]([^'"]+)['"]"#)
        .expect("invalid blade-dependency regex")
});

/// Blade directives counted into section metadata
const BLADE_DIRECTIVES: &[&str] = &["@extends", "@section", "@yield", "@include", "@component"];

/// Class signature through its opening brace
static PHP_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:abstract\s+|final\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)[^{;]*\{")
        .expect("invalid class regex")
});

/// Function/method signature through its opening brace; abstract and
/// interface signatures end in `;` and are excluded
static PHP_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:(?:public|protected|private|static|final|abstract)\s+)*function\s+&?([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)[^{;]*\{",
    )
    .expect("invalid function regex")
});

/// `namespace App\Http;` at file scope
static PHP_NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*namespace\s+([A-Za-z_\\][A-Za-z0-9_\\]*)\s*[;{]")
        .expect("invalid namespace regex")
});

/// Type-specific and parser-less chunk extraction
#[derive(Debug, Default)]
pub struct FallbackChunker;

impl FallbackChunker {
    /// Create a new fallback chunker
    pub fn new() -> Self {
        Self
    }

    /// Extract chunks from `content` according to the artifact type
    ///
    /// Route, config, env, and Blade files get their specialized
    /// extraction; every other type goes through the regex PHP path.
    /// A file yielding zero chunks but holding non-whitespace content
    /// produces exactly one whole-file chunk.
    pub fn extract(&self, file_path: &str, content: &str, file_type: FileType) -> Vec<CodeChunk> {
        let mut chunks = match file_type {
            FileType::Route => self.extract_routes(file_path, content),
            FileType::Config => self.extract_config(file_path, content),
            FileType::Env => self.extract_env(file_path, content),
            FileType::BladeTemplate => self.extract_blade(file_path, content),
            _ => self.extract_php_with_regex(file_path, content, file_type),
        };

        if chunks.is_empty() && !content.trim().is_empty() {
            let chunk_type = match file_type {
                FileType::BladeTemplate => "blade_template",
                _ => "file_content",
            };
            let mut chunk = whole_file_chunk(file_path, chunk_type, content);
            if file_type == FileType::Config {
                chunk.metadata.insert("config_file".to_string(), json!(true));
            }
            use_statement_imports(content, &mut chunk.import_dependencies);
            heuristic_imports(content, &mut chunk.import_dependencies);
            chunks.push(chunk);
        }
        chunks
    }

    /// One chunk per `Route::<verb>(...)` call, with method/URI/handler
    /// metadata pulled out of the call text
    fn extract_routes(&self, file_path: &str, content: &str) -> Vec<CodeChunk> {
        let mut chunks = Vec::new();
        for (i, caps) in ROUTE_CALL_RE.captures_iter(content).enumerate() {
            let whole = caps.get(0).expect("regex match always has group 0");
            let call_text = whole.as_str();

            let mut metadata = Map::new();
            metadata.insert("method".to_string(), json!(caps[1].to_lowercase()));
            if let Some(uri) = QUOTED_RE.captures(call_text) {
                metadata.insert("uri".to_string(), json!(&uri[1]));
            }
            if let Some(handler) = AT_HANDLER_RE.captures(call_text) {
                metadata.insert("controller".to_string(), json!(normalize_name(&handler[1])));
                metadata.insert("action".to_string(), json!(&handler[2]));
            } else if let Some(handler) = CLASS_HANDLER_RE.captures(call_text) {
                metadata.insert("controller".to_string(), json!(normalize_name(&handler[1])));
                if let Some(action) = handler.get(2) {
                    metadata.insert("action".to_string(), json!(action.as_str()));
                }
            }

            let start_line = line_at(content, whole.start());
            chunks.push(CodeChunk {
                chunk_type: "route".to_string(),
                name: format!("Route_{}", i + 1),
                file_path: file_path.to_string(),
                start_line,
                end_line: start_line + count_newlines(call_text),
                content: call_text.to_string(),
                metadata,
                import_dependencies: Vec::new(),
                method_dependencies: Vec::new(),
            });
        }
        chunks
    }

    /// The `return [...]` array literal of a config file, as one chunk
    ///
    /// Without a matched array literal the whole-file fallback in
    /// [`FallbackChunker::extract`] takes over.
    fn extract_config(&self, file_path: &str, content: &str) -> Vec<CodeChunk> {
        let Some(caps) = CONFIG_RETURN_RE.captures(content) else {
            return Vec::new();
        };
        let opener = caps.get(1).expect("regex match always has group 1");
        let (open, close) = if opener.as_str().starts_with('[') {
            (b'[', b']')
        } else {
            (b'(', b')')
        };
        let open_idx = opener.end() - 1;
        let Some(close_idx) = match_delimiter(content, open_idx, open, close) else {
            debug!(path = file_path, "unbalanced config array, falling back to whole file");
            return Vec::new();
        };

        let span = &content[open_idx..=close_idx];
        let mut metadata = Map::new();
        metadata.insert("config_file".to_string(), json!(true));
        vec![CodeChunk {
            chunk_type: "config".to_string(),
            name: base_name(file_path),
            file_path: file_path.to_string(),
            start_line: line_at(content, open_idx),
            end_line: line_at(content, close_idx),
            content: span.to_string(),
            metadata,
            import_dependencies: Vec::new(),
            method_dependencies: Vec::new(),
        }]
    }

    /// One chunk per `KEY=VALUE` line; comments and blanks are skipped
    fn extract_env(&self, file_path: &str, content: &str) -> Vec<CodeChunk> {
        let mut chunks = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, _)) = trimmed.split_once('=') else {
                continue;
            };
            let line_no = i as u32 + 1;
            chunks.push(CodeChunk {
                chunk_type: "env_variable".to_string(),
                name: key.trim().to_string(),
                file_path: file_path.to_string(),
                start_line: line_no,
                end_line: line_no,
                content: line.to_string(),
                metadata: Map::new(),
                import_dependencies: Vec::new(),
                method_dependencies: Vec::new(),
            });
        }
        chunks
    }

    /// Split a Blade template on `@section`/`@component` boundaries
    ///
    /// Each section runs from its directive to the next boundary or end
    /// of file. Template-level `@extends`/`@include` targets become
    /// import dependencies on every section chunk.
    fn extract_blade(&self, file_path: &str, content: &str) -> Vec<CodeChunk> {
        let boundaries: Vec<(usize, Option<String>)> = BLADE_BOUNDARY_RE
            .captures_iter(content)
            .map(|caps| {
                let start = caps.get(0).expect("regex match always has group 0").start();
                (start, caps.get(2).map(|m| m.as_str().to_string()))
            })
            .collect();
        if boundaries.is_empty() {
            return Vec::new();
        }

        let mut template_deps = Vec::new();
        for caps in BLADE_DEP_RE.captures_iter(content) {
            push_unique(&mut template_deps, caps[2].to_string());
        }

        let mut chunks = Vec::new();
        for (i, (start, directive_name)) in boundaries.iter().enumerate() {
            let end = boundaries
                .get(i + 1)
                .map_or(content.len(), |(next, _)| *next);
            // Trailing blank lines before the next boundary belong to
            // neither section; keep content and span in lockstep
            let section = content[*start..end].trim_end();

            let mut metadata = Map::new();
            for directive in BLADE_DIRECTIVES {
                let count = section.matches(directive).count();
                if count > 0 {
                    metadata.insert(format!("{}_count", &directive[1..]), json!(count));
                }
            }

            let start_line = line_at(content, *start);
            chunks.push(CodeChunk {
                chunk_type: "blade_template".to_string(),
                name: directive_name
                    .clone()
                    .unwrap_or_else(|| format!("section_{}", i + 1)),
                file_path: file_path.to_string(),
                start_line,
                end_line: start_line + count_newlines(section),
                content: section.to_string(),
                metadata,
                import_dependencies: template_deps.clone(),
                method_dependencies: Vec::new(),
            });
        }
        chunks
    }

    /// Brace-matched class/function extraction for parser-less runs
    ///
    /// Each signature match is scanned forward counting `{`/`}` nesting;
    /// the chunk spans signature start through the balancing close brace.
    /// An unbalanced definition is skipped, the rest of the file still
    /// processed.
    fn extract_php_with_regex(
        &self,
        file_path: &str,
        content: &str,
        file_type: FileType,
    ) -> Vec<CodeChunk> {
        let namespace = PHP_NAMESPACE_RE
            .captures(content)
            .map(|caps| caps[1].to_string());

        let mut imports = Vec::new();
        use_statement_imports(content, &mut imports);
        heuristic_imports(content, &mut imports);

        // (signature start, opening brace, name, is_class) ordered by position
        let mut matches: Vec<(usize, usize, String, bool)> = Vec::new();
        for caps in PHP_CLASS_RE.captures_iter(content) {
            let whole = caps.get(0).expect("regex match always has group 0");
            matches.push((whole.start(), whole.end() - 1, caps[1].to_string(), true));
        }
        for caps in PHP_FUNCTION_RE.captures_iter(content) {
            let whole = caps.get(0).expect("regex match always has group 0");
            matches.push((whole.start(), whole.end() - 1, caps[1].to_string(), false));
        }
        matches.sort_by_key(|(start, ..)| *start);

        // Class spans seen so far, for qualifying nested functions as methods
        let mut class_spans: Vec<(usize, usize, String)> = Vec::new();
        let mut chunks = Vec::new();
        for (sig_start, brace_idx, name, is_class) in matches {
            let Some(close_idx) = match_delimiter(content, brace_idx, b'{', b'}') else {
                debug!(path = file_path, definition = %name, "unbalanced braces, skipping definition");
                continue;
            };
            let span = &content[sig_start..=close_idx];
            let start_line = line_at(content, sig_start);
            let end_line = line_at(content, close_idx);

            if is_class {
                let mut metadata = Map::new();
                if let Some(ns) = &namespace {
                    metadata.insert("namespace".to_string(), json!(ns));
                }
                class_spans.push((sig_start, close_idx, name.clone()));
                chunks.push(CodeChunk {
                    chunk_type: file_type.as_str().to_string(),
                    name,
                    file_path: file_path.to_string(),
                    start_line,
                    end_line,
                    content: span.to_string(),
                    metadata,
                    import_dependencies: imports.clone(),
                    method_dependencies: Vec::new(),
                });
            } else {
                let enclosing = class_spans
                    .iter()
                    .find(|(start, end, _)| sig_start > *start && close_idx < *end);
                let (chunk_type, name) = match enclosing {
                    Some((_, _, class_name)) if *class_name != name => (
                        file_type.method_chunk_type(),
                        format!("{class_name}::{name}"),
                    ),
                    Some(_) => (file_type.method_chunk_type(), name),
                    None => (file_type.function_chunk_type(), name),
                };
                chunks.push(CodeChunk {
                    chunk_type,
                    name,
                    file_path: file_path.to_string(),
                    start_line,
                    end_line,
                    content: span.to_string(),
                    metadata: Map::new(),
                    import_dependencies: Vec::new(),
                    method_dependencies: Vec::new(),
                });
            }
        }
        chunks
    }
}

/// Whole-file chunk named after the file, spanning line 1 to the end
pub(crate) fn whole_file_chunk(file_path: &str, chunk_type: &str, content: &str) -> CodeChunk {
    CodeChunk {
        chunk_type: chunk_type.to_string(),
        name: base_name(file_path),
        file_path: file_path.to_string(),
        start_line: 1,
        end_line: (content.lines().count() as u32).max(1),
        content: content.to_string(),
        metadata: Map::new(),
        import_dependencies: Vec::new(),
        method_dependencies: Vec::new(),
    }
}

fn base_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string())
}

/// 1-indexed line number of a byte offset
fn line_at(content: &str, byte_idx: usize) -> u32 {
    content.as_bytes()[..byte_idx]
        .iter()
        .filter(|&&b| b == b'\n')
        .count() as u32
        + 1
}

fn count_newlines(text: &str) -> u32 {
    text.bytes().filter(|&b| b == b'\n').count() as u32
}

/// Forward scan from an opening delimiter to its balancing close
///
/// Returns `None` when the block never closes. String literals are not
/// interpreted; a brace inside a string can skew the count, which is an
/// accepted limitation of the regex path.
fn match_delimiter(content: &str, open_idx: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_idx) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_extraction_with_string_handler() {
        let content = "<?php\n\nRoute::get('/leaves', 'LeaveController@index');\nRoute::post('/leaves', 'LeaveController@store');\n";
        let chunks = FallbackChunker::new().extract("routes/web.php", content, FileType::Route);
        assert_eq!(chunks.len(), 2);

        let first = &chunks[0];
        assert_eq!(first.chunk_type, "route");
        assert_eq!(first.name, "Route_1");
        assert_eq!(first.metadata["method"], "get");
        assert_eq!(first.metadata["uri"], "/leaves");
        assert_eq!(first.metadata["controller"], "LeaveController");
        assert_eq!(first.metadata["action"], "index");
        assert_eq!(first.start_line, 3);
        assert_eq!(first.end_line, 3);
    }

    #[test]
    fn test_route_extraction_with_class_handler() {
        let content =
            "<?php\nRoute::put('/leaves/{id}', [LeaveController::class, 'update']);\n";
        let chunks = FallbackChunker::new().extract("routes/api.php", content, FileType::Route);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].metadata["method"], "put");
        assert_eq!(chunks[0].metadata["uri"], "/leaves/{id}");
        assert_eq!(chunks[0].metadata["controller"], "LeaveController");
        assert_eq!(chunks[0].metadata["action"], "update");
    }

    #[test]
    fn test_multiline_route_span() {
        let content = "<?php\nRoute::get(\n    '/leaves',\n    'LeaveController@index'\n);\n";
        let chunks = FallbackChunker::new().extract("routes/web.php", content, FileType::Route);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_line, 2);
        assert_eq!(chunks[0].end_line, 5);
    }

    #[test]
    fn test_config_array_span_only() {
        let content = "<?php\n\nuse App\\Support\\Helper;\n\nreturn [\n    'name' => env('APP_NAME', 'Laravel'),\n    'debug' => false,\n];\n";
        let chunks = FallbackChunker::new().extract("config/app.php", content, FileType::Config);
        assert_eq!(chunks.len(), 1);

        let chunk = &chunks[0];
        assert_eq!(chunk.chunk_type, "config");
        assert_eq!(chunk.metadata["config_file"], true);
        assert!(chunk.content.starts_with('['));
        assert!(chunk.content.ends_with(']'));
        assert_eq!(chunk.start_line, 5);
        assert_eq!(chunk.end_line, 8);
    }

    #[test]
    fn test_config_without_array_falls_back_to_whole_file() {
        let content = "<?php\n$config = compute();\nreturn $config;\n";
        let chunks = FallbackChunker::new().extract("config/odd.php", content, FileType::Config);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "file_content");
        assert_eq!(chunks[0].metadata["config_file"], true);
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 3);
    }

    #[test]
    fn test_env_lines_skip_comments_and_blanks() {
        let content = "APP_NAME=Test\n# comment\nDB_HOST=localhost\n\nBROKEN LINE\n";
        let chunks = FallbackChunker::new().extract(".env", content, FileType::Env);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].name, "APP_NAME");
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 1);
        assert_eq!(chunks[1].name, "DB_HOST");
        assert_eq!(chunks[1].start_line, 3);
    }

    #[test]
    fn test_comment_only_env_falls_back_to_whole_file() {
        let chunks = FallbackChunker::new().extract(".env", "# only a comment\n", FileType::Env);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "file_content");
        assert_eq!(chunks[0].name, ".env");
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 1);
    }

    #[test]
    fn test_blank_env_yields_nothing() {
        let chunks = FallbackChunker::new().extract(".env", "  \n\n", FileType::Env);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_blade_sections_and_dependencies() {
        let content = "@extends('layouts.app')\n\n@section('content')\n<p>Hello</p>\n@include('partials.nav')\n@endsection\n\n@section('footer')\n<p>Bye</p>\n@endsection\n";
        let chunks = FallbackChunker::new().extract(
            "resources/views/leaves/index.blade.php",
            content,
            FileType::BladeTemplate,
        );
        assert_eq!(chunks.len(), 2);

        let content_section = &chunks[0];
        assert_eq!(content_section.chunk_type, "blade_template");
        assert_eq!(content_section.name, "content");
        assert_eq!(content_section.metadata["section_count"], 1);
        assert_eq!(content_section.metadata["include_count"], 1);
        assert_eq!(
            content_section.import_dependencies,
            vec!["layouts.app".to_string(), "partials.nav".to_string()]
        );
        assert_eq!(chunks[1].name, "footer");
    }

    #[test]
    fn test_blade_section_span_matches_content_lines() {
        let content = "@section('content')\n<p>Hello</p>\n@endsection\n\n\n@section('footer')\n<p>Bye</p>\n@endsection\n";
        let chunks = FallbackChunker::new().extract(
            "resources/views/leaves/split.blade.php",
            content,
            FileType::BladeTemplate,
        );
        assert_eq!(chunks.len(), 2);

        // Blank lines before the next boundary stay out of the chunk
        let first = &chunks[0];
        assert_eq!((first.start_line, first.end_line), (1, 3));
        assert!(first.content.ends_with("@endsection"));

        for chunk in &chunks {
            assert_eq!(
                chunk.end_line - chunk.start_line + 1,
                chunk.content.lines().count() as u32,
                "section {} span disagrees with its content",
                chunk.name
            );
        }
    }

    #[test]
    fn test_blade_without_sections_is_one_whole_file_chunk() {
        let content = "<p>{{ $leave->status }}</p>\n";
        let chunks = FallbackChunker::new().extract(
            "resources/views/partials/status.blade.php",
            content,
            FileType::BladeTemplate,
        );
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "blade_template");
        assert_eq!(chunks[0].start_line, 1);
    }

    #[test]
    fn test_brace_fallback_spans_nested_blocks() {
        let content = "<?php\nfunction foo() { if (true) { return 1; } }\n";
        let chunks = FallbackChunker::new().extract("app/Helpers/h.php", content, FileType::Helper);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "helper_function");
        assert_eq!(chunks[0].name, "foo");
        assert_eq!(
            chunks[0].content,
            "function foo() { if (true) { return 1; } }"
        );
    }

    #[test]
    fn test_regex_class_with_methods() {
        let content = "<?php\nnamespace App\\Http\\Controllers;\n\nuse App\\Models\\Leave;\n\nclass LeaveController extends Controller\n{\n    public function index()\n    {\n        return Leave::all();\n    }\n}\n";
        let chunks =
            FallbackChunker::new().extract("app/Http/Controllers/LeaveController.php", content, FileType::Controller);
        assert_eq!(chunks.len(), 2);

        let class = &chunks[0];
        assert_eq!(class.chunk_type, "controller");
        assert_eq!(class.name, "LeaveController");
        assert_eq!(class.metadata["namespace"], "App\\Http\\Controllers");
        assert!(class.import_dependencies.contains(&"App\\Models\\Leave".to_string()));

        let method = &chunks[1];
        assert_eq!(method.chunk_type, "controller_method");
        assert_eq!(method.name, "LeaveController::index");
    }

    #[test]
    fn test_unbalanced_definition_skipped_others_kept() {
        let content = "<?php\nfunction broken() { if (true) {\nfunction fine() { return 2; }\n";
        // `broken` swallows `fine`'s braces and never closes; `fine` closes
        let chunks = FallbackChunker::new().extract("app/Helpers/h.php", content, FileType::Helper);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].name, "fine");
    }

    #[test]
    fn test_unknown_file_whole_file_chunk() {
        let content = "const app = 1;\n";
        let chunks = FallbackChunker::new().extract("resources/js/app.js", content, FileType::Unknown);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, "file_content");
        assert_eq!(chunks[0].name, "app.js");
    }

    #[test]
    fn test_whitespace_only_file_yields_nothing() {
        let chunks = FallbackChunker::new().extract("empty.php", "  \n\n", FileType::Unknown);
        assert!(chunks.is_empty());
    }
}
