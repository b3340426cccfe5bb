//! Generator configuration.
//!
//! Every option is a plain template string with positional `{N}` substitution
//! points. Defaults match the reference templates, so the generator is usable
//! with zero configuration; the surrounding tool may also load options from a
//! settings file via serde.

use serde::{Deserialize, Serialize};

/// Template configuration for [`Generator`](super::generator::Generator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Header emitted per contract. Substitutions: `{0}` contract name,
    /// `{1}` extern qualifier.
    pub class_name_template: String,
    /// One line per field. Substitutions: `{0}` 1-based slot index,
    /// `{1}` type, `{2}` cased member name.
    pub member_template: String,
    /// Fold-region label wrapping the whole unit; empty disables the region.
    pub region: String,
    /// Reserved: header template for per-entity role interfaces.
    /// Substitution: `{0}` entity name.
    pub interface_name_template: String,
    /// Reserved: per-member interface accessor line. Substitution: `{0}` type.
    pub interface_member_template: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            class_name_template: "\n[ProtoContract]\npublic sealed class {0}".to_string(),
            member_template: "[ProtoMember({0})] public readonly {1} {2};".to_string(),
            region: "Generated by Message Contract DSL".to_string(),
            interface_name_template: "public interface I{0}".to_string(),
            interface_member_template: "void When({0} c)".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-contract header template.
    pub fn with_class_name_template(mut self, template: impl Into<String>) -> Self {
        self.class_name_template = template.into();
        self
    }

    /// Set the per-field line template.
    pub fn with_member_template(mut self, template: impl Into<String>) -> Self {
        self.member_template = template.into();
        self
    }

    /// Set the fold-region label; an empty label disables the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default tests
    // ========================================

    #[test]
    fn test_default_member_template() {
        let options = GeneratorOptions::default();
        assert_eq!(options.member_template, "[ProtoMember({0})] public readonly {1} {2};");
    }

    #[test]
    fn test_default_class_template_starts_with_blank_line() {
        let options = GeneratorOptions::default();
        assert!(options.class_name_template.starts_with('\n'));
    }

    #[test]
    fn test_default_region_enabled() {
        assert!(!GeneratorOptions::default().region.is_empty());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GeneratorOptions::new(), GeneratorOptions::default());
    }

    // ========================================
    // Builder tests
    // ========================================

    #[test]
    fn test_with_member_template() {
        let options = GeneratorOptions::new().with_member_template("public {1} {2};");
        assert_eq!(options.member_template, "public {1} {2};");
        // Other fields unchanged
        assert_eq!(options.region, GeneratorOptions::default().region);
    }

    #[test]
    fn test_with_region_empty_disables() {
        let options = GeneratorOptions::new().with_region("");
        assert!(options.region.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let options = GeneratorOptions::new()
            .with_class_name_template("\npublic class {0}")
            .with_region("Contracts");
        assert_eq!(options.class_name_template, "\npublic class {0}");
        assert_eq!(options.region, "Contracts");
    }

    // ========================================
    // Serde tests
    // ========================================

    #[test]
    fn test_options_round_trip() {
        let options = GeneratorOptions::new().with_region("Contracts");
        let json = serde_json::to_string(&options).unwrap();
        let back: GeneratorOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let back: GeneratorOptions = serde_json::from_str(r#"{"region": ""}"#).unwrap();
        assert!(back.region.is_empty());
        assert_eq!(back.member_template, GeneratorOptions::default().member_template);
    }
}
