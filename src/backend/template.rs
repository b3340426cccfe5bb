//! Positional template interpolation.
//!
//! All configurable emission templates use `{N}` placeholders that substitute
//! the N-th argument, with `{{` and `}}` escaping literal braces. Arguments
//! are inserted verbatim and never rescanned, so generated C# containing
//! braces survives substitution untouched. Supplying more arguments than the
//! template references is allowed (the class-name template may ignore the
//! extern-qualifier argument); referencing a missing argument is an error.

use thiserror::Error;

/// Error raised by [`expand`] for malformed templates or missing arguments.
///
/// These surface at the point of use and abort generation for the whole unit;
/// there is no partial-output recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unmatched brace at byte {position}")]
    UnmatchedBrace { position: usize },
    #[error("malformed placeholder at byte {position} (expected '{{N}}')")]
    MalformedPlaceholder { position: usize },
    #[error("template references argument {index} but only {supplied} supplied")]
    MissingArgument { index: usize, supplied: usize },
}

/// Expand `{N}` placeholders in `template` against `args`.
pub fn expand(template: &str, args: &[&str]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some((_, d)) if d.is_ascii_digit() => digits.push(d),
                        Some((_, '}')) => break,
                        Some(_) => {
                            return Err(TemplateError::MalformedPlaceholder { position });
                        }
                        None => return Err(TemplateError::UnmatchedBrace { position }),
                    }
                }
                let index: usize = digits
                    .parse()
                    .map_err(|_| TemplateError::MalformedPlaceholder { position })?;
                let arg = args.get(index).ok_or(TemplateError::MissingArgument {
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(arg);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnmatchedBrace { position });
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}
