//! Property-based tests for the code-synthesis backend.
//!
//! These use proptest to verify invariants across many generated inputs,
//! catching edge cases hand-written tests might miss.

use msgdsl::backend::template::expand;
use msgdsl::model::{Context, Member, Message};
use msgdsl::naming::member_case;
use msgdsl::{Generator, IndentSink, TextSink};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

proptest! {
    // =========================================================================
    // Template expansion
    // =========================================================================

    /// Property: brace-free templates expand to themselves.
    #[test]
    fn expand_is_identity_without_placeholders(template in "[a-zA-Z0-9 .,;()]*") {
        prop_assert_eq!(expand(&template, &[]).unwrap(), template);
    }

    /// Property: arguments are inserted verbatim, never rescanned.
    #[test]
    fn expand_inserts_argument_verbatim(arg in ".*") {
        prop_assert_eq!(expand("{0}", &[&arg]).unwrap(), arg);
    }

    /// Property: escaped braces always survive expansion.
    #[test]
    fn expand_preserves_escaped_braces(arg in "[a-z]{1,8}") {
        let expanded = expand("{{{0}}}", &[&arg]).unwrap();
        prop_assert_eq!(expanded, format!("{{{arg}}}"));
    }

    // =========================================================================
    // Naming
    // =========================================================================

    /// Property: member_case is idempotent.
    #[test]
    fn member_case_is_idempotent(name in "[a-z_]{0,12}") {
        let once = member_case(&name);
        prop_assert_eq!(member_case(&once), once.clone());
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Property: generation is deterministic for any well-formed model.
    #[test]
    fn generation_is_deterministic(
        namespace in "[A-Z][a-zA-Z0-9]{0,8}",
        names in prop::collection::vec(identifier(), 0..5),
    ) {
        let mut message = Message::new("Sample");
        for (i, name) in names.iter().enumerate() {
            message.members.push(Member::new(name.clone(), format!("M{i}"), "int"));
        }
        let mut context = Context::new(namespace);
        context.contracts.push(message);

        let generator = Generator::default();
        prop_assert_eq!(generator.generate(&context).unwrap(), generator.generate(&context).unwrap());
    }

    /// Property: every emitted line is either blank or indented by whole
    /// 4-space units.
    #[test]
    fn indentation_is_whole_units(names in prop::collection::vec(identifier(), 1..4)) {
        let mut message = Message::new("Sample");
        for (i, name) in names.iter().enumerate() {
            message.members.push(Member::new(name.clone(), format!("M{i}"), "int"));
        }
        let mut context = Context::new("Tests");
        context.contracts.push(message);

        let output = Generator::default().generate(&context).unwrap();
        for line in output.lines() {
            let leading = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(leading % 4, 0, "line {:?} has partial indent", line);
        }
    }

    // =========================================================================
    // Writer/sink contract
    // =========================================================================

    /// Property: generate_into resets a caller-supplied sink's indent level.
    #[test]
    fn generate_into_resets_indent(start in 0usize..16) {
        let mut sink = TextSink::new();
        sink.set_indent(start);
        let context = Context::new("Tests");
        Generator::default().generate_into(&context, &mut sink).unwrap();
        prop_assert_eq!(sink.indent(), 0);
    }
}
