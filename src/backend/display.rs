//! Display-format rewriting: free-form field references → positional template.
//!
//! A contract may declare a display template referencing its fields either by
//! DSL name or by canonical cased name, as `{name}` or `{name:format}`. The
//! generated `ToString()` needs a positional `string.Format` template, so
//! this pass rewrites every field reference to `{N}` while discovering, in
//! first-seen order, which members the template actually uses.
//!
//! The scan order is an observable contract: members in declaration order,
//! DSL-name shapes before canonical-name shapes, `{name:` before `{name}`,
//! case-insensitive, replacing all occurrences. Because this is a sequential
//! scan over a mutating string, members whose names are textual substrings of
//! each other can interact; downstream generated-code snapshots depend on the
//! exact current behavior, so the order must not be "improved".

use crate::model::Member;

/// Rewrite `template` into a positional template, returning it together with
/// the referenced members in first-seen order.
///
/// A member referenced by both spellings joins the active list once, on its
/// first matching shape; later occurrences of either spelling rewrite to the
/// index assigned at that point.
pub fn rewrite_display_format(template: &str, members: &[Member]) -> (String, Vec<Member>) {
    let mut text = template.to_string();
    let mut active: Vec<Member> = Vec::new();

    for member in members {
        let index = active.len();
        let mut discovered = false;

        // Formatted references before bare ones: "{name:" must not be
        // clipped by a prior "{name}" rewrite.
        let scan = |text: &mut String, name: &str, discovered: &mut bool| {
            for shape in [":", "}"] {
                let from = format!("{{{name}{shape}");
                let to = format!("{{{index}{shape}");
                let (replaced, found) = replace_all_ignore_case(text, &from, &to);
                if found {
                    *text = replaced;
                    *discovered = true;
                }
            }
        };

        scan(&mut text, &member.dsl_name, &mut discovered);
        if member.dsl_name != member.name {
            scan(&mut text, &member.name, &mut discovered);
        }

        if discovered {
            active.push(member.clone());
        }
    }

    (text, active)
}

/// Replace every occurrence of `from` in `text`, ignoring ASCII case.
///
/// Explicit left-to-right scan; replaced spans are skipped, not rescanned.
/// Returns the rewritten text and whether anything matched.
///
/// Case folding is ASCII-only: non-ASCII identifier characters (legal in C#)
/// match case-sensitively, so `{été}` matches `{été}` but not `{ÉTÉ}`.
pub(crate) fn replace_all_ignore_case(text: &str, from: &str, to: &str) -> (String, bool) {
    if from.is_empty() {
        return (text.to_string(), false);
    }
    let mut out = String::with_capacity(text.len());
    let mut found = false;
    let mut i = 0;

    while i < text.len() {
        let end = i + from.len();
        if end <= text.len() && text.is_char_boundary(end) && text[i..end].eq_ignore_ascii_case(from) {
            out.push_str(to);
            found = true;
            i = end;
        } else {
            match text[i..].chars().next() {
                Some(ch) => {
                    out.push(ch);
                    i += ch.len_utf8();
                }
                None => break,
            }
        }
    }

    (out, found)
}
