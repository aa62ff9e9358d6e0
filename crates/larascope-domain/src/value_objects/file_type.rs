//! Laravel artifact type classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Laravel Artifact Type
///
/// Classification of a source file by its path convention. The router
/// assigns exactly one type per file; the analyzer dispatches on this enum
/// exhaustively, so adding a variant is a compiler-checked extension point.
///
/// Files that match no convention are still processed as [`FileType::Unknown`],
/// never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// `app/Http/Controllers`
    Controller,
    /// `app/Models` (Eloquent models)
    Model,
    /// `routes/` definition files
    Route,
    /// `database/seeders`
    Seeder,
    /// `database/factories`
    Factory,
    /// `database/migrations`
    Migration,
    /// `resources/views/*.blade.php`
    BladeTemplate,
    /// `app/Http/Middleware`
    Middleware,
    /// `app/Http/Requests`
    FormRequest,
    /// `app/Services`
    Service,
    /// `config/`
    Config,
    /// `app/Providers`
    Provider,
    /// `app/Console/Commands`
    Command,
    /// `app/Events`
    Event,
    /// `app/Listeners`
    Listener,
    /// `app/Jobs`
    Job,
    /// `app/Notifications`
    Notification,
    /// `app/Rules`
    ValidationRule,
    /// `app/Exceptions/Handler.php`
    ExceptionHandler,
    /// `app/Helpers`
    Helper,
    /// `bootstrap/app.php`
    BootstrapScript,
    /// `public/index.php`
    PublicEntryScript,
    /// `tests/`
    Test,
    /// `.env` key/value files
    Env,
    /// No matching convention; processed generically
    Unknown,
}

impl FileType {
    /// Snake-case tag used as the chunk type for class-level chunks
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Route => "route",
            Self::Seeder => "seeder",
            Self::Factory => "factory",
            Self::Migration => "migration",
            Self::BladeTemplate => "blade_template",
            Self::Middleware => "middleware",
            Self::FormRequest => "form_request",
            Self::Service => "service",
            Self::Config => "config",
            Self::Provider => "provider",
            Self::Command => "command",
            Self::Event => "event",
            Self::Listener => "listener",
            Self::Job => "job",
            Self::Notification => "notification",
            Self::ValidationRule => "validation_rule",
            Self::ExceptionHandler => "exception_handler",
            Self::Helper => "helper",
            Self::BootstrapScript => "bootstrap_script",
            Self::PublicEntryScript => "public_entry_script",
            Self::Test => "test",
            Self::Env => "env",
            Self::Unknown => "unknown",
        }
    }

    /// Chunk type tag for a method chunk of this artifact type
    pub fn method_chunk_type(self) -> String {
        format!("{}_method", self.as_str())
    }

    /// Chunk type tag for a standalone function chunk of this artifact type
    pub fn function_chunk_type(self) -> String {
        format!("{}_function", self.as_str())
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_snake_case() {
        assert_eq!(FileType::Controller.as_str(), "controller");
        assert_eq!(FileType::BladeTemplate.as_str(), "blade_template");
        assert_eq!(FileType::ValidationRule.as_str(), "validation_rule");
        assert_eq!(FileType::PublicEntryScript.as_str(), "public_entry_script");
    }

    #[test]
    fn test_method_chunk_type_suffix() {
        assert_eq!(FileType::Controller.method_chunk_type(), "controller_method");
        assert_eq!(FileType::Model.method_chunk_type(), "model_method");
        assert_eq!(FileType::Helper.function_chunk_type(), "helper_function");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&FileType::FormRequest).unwrap();
        assert_eq!(json, "\"form_request\"");
        let back: FileType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FileType::FormRequest);
    }
}
