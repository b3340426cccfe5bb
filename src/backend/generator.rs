//! The emission engine: walks the model and writes one compilation unit.
//!
//! `generate` is a pure function of the [`Context`] and the configured
//! templates. The only state threaded through a pass is the sink's indent
//! counter, which is reset at entry and left balanced at exit. Emission
//! either completes or fails fast on the first template error; no partial
//! output contract is guaranteed.

use std::collections::BTreeSet;

use thiserror::Error;

use super::display::rewrite_display_format;
use super::options::GeneratorOptions;
use super::template::TemplateError;
use super::writer::{CodeWriter, IndentSink, TextSink};
use crate::model::{ARRAY_MARKER, Context, Entity, InteropData, Message};
use crate::naming::{member_case, parameter_case};

const COMMAND_TAG: &str = "?";
const EVENT_TAG: &str = "!";

const APPLICATION_SERVICE_TEMPLATE: &str = "public interface I{0}ApplicationService";
const STATE_TEMPLATE: &str = "public interface I{0}State";

/// Boilerplate suppression comments emitted after the imports.
const SUPPRESSIONS: &str = "\n// ReSharper disable PartialTypeWithSinglePart\n// ReSharper disable UnusedMember.Local";

/// Error during unit generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A configured template failed to expand at its point of use.
    #[error("template expansion failed: {0}")]
    Template(#[from] TemplateError),
}

/// Emit a C# compilation unit from a contract model.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the unit into a fresh in-memory sink and return the text.
    pub fn generate(&self, context: &Context) -> Result<String, GenerateError> {
        let mut sink = TextSink::new();
        self.generate_into(context, &mut sink)?;
        Ok(sink.finish())
    }

    /// Generate the unit into a caller-supplied sink.
    ///
    /// The sink's indent level is reset to zero at entry and is back at zero
    /// when this returns, success or failure.
    #[tracing::instrument(skip_all, fields(
        contract_count = context.contracts.len(),
        entity_count = context.entities.len(),
    ))]
    pub fn generate_into(&self, context: &Context, sink: &mut dyn IndentSink) -> Result<(), GenerateError> {
        sink.set_indent(0);
        let mut writer = CodeWriter::new(sink);

        // Emission order must not depend on declaration order of imports.
        let imports: BTreeSet<&str> = context.using.iter().map(String::as_str).collect();
        for import in imports {
            writer.write_line("using {0};", &[import])?;
        }

        writer.write_line(SUPPRESSIONS, &[])?;

        writer.write_line("namespace {0}", &[&context.current_namespace])?;
        writer.write_line("{", &[])?;
        writer.indented(|writer| {
            if !self.options.region.is_empty() {
                writer.write_line("#region {0}", &[&self.options.region])?;
            }

            for contract in &context.contracts {
                self.write_contract(writer, context, contract)?;
            }
            self.write_entities(writer, context)?;

            if !self.options.region.is_empty() {
                writer.write_line("#endregion", &[])?;
            }
            Ok(())
        })?;
        writer.write_line("}", &[])?;

        tracing::debug!(namespace = %context.current_namespace, "generated compilation unit");
        Ok(())
    }

    /// Emit one record declaration (interop block, header, body).
    fn write_contract(
        &self,
        writer: &mut CodeWriter<'_>,
        context: &Context,
        contract: &Message,
    ) -> Result<(), TemplateError> {
        if let Some(interop) = &contract.interop {
            self.write_interop(writer, contract, interop)?;
        }

        writer.write(&self.options.class_name_template, &[&contract.name, &context.current_extern])?;

        if !contract.modifiers.is_empty() {
            let interfaces: Vec<&str> = contract.modifiers.iter().map(|m| m.interface.as_str()).collect();
            writer.write(" : {0}", &[&interfaces.join(", ")])?;
        }
        writer.newline();

        writer.write_line("{", &[])?;
        writer.indented(|writer| {
            if !contract.members.is_empty() {
                self.write_members(writer, contract)?;

                writer.newline();
                write_private_ctor(writer, contract)?;

                writer.write("public {0} (", &[&contract.name])?;
                write_parameters(writer, contract)?;
                writer.write_line(")", &[])?;
                writer.write_line("{", &[])?;
                writer.indented(|writer| write_assignments(writer, contract))?;
                writer.write_line("}", &[])?;
            }
            write_to_string(writer, contract)?;
            Ok(())
        })?;
        writer.write_line("}", &[])?;
        Ok(())
    }

    /// Emit one member-declaration line per field, with contiguous 1-based
    /// slot indices in declaration order.
    fn write_members(&self, writer: &mut CodeWriter<'_>, contract: &Message) -> Result<(), TemplateError> {
        for (position, member) in contract.members.iter().enumerate() {
            let slot = (position + 1).to_string();
            writer.write_line(&self.options.member_template, &[&slot, &member.ty, &member_case(&member.name)])?;
        }
        Ok(())
    }

    /// Emit the factory method, the interop interface, and the attribute
    /// lines preparing the record class for interop visibility. The record
    /// header itself is emitted by the caller immediately afterwards.
    fn write_interop(
        &self,
        writer: &mut CodeWriter<'_>,
        contract: &Message,
        interop: &InteropData,
    ) -> Result<(), TemplateError> {
        writer.write_line("public partial class MessageFactory", &[])?;
        writer.write_line("{", &[])?;
        writer.indented(|writer| {
            writer.write("public I{0} Create{0} (", &[&contract.name])?;
            write_parameters(writer, contract)?;
            writer.write_line(")", &[])?;
            writer.write_line("{", &[])?;
            writer.indented(|writer| {
                writer.write("return new {0}(", &[&contract.name])?;
                let mut separator = "";
                for member in &contract.members {
                    writer.write("{0}{1}", &[separator, &parameter_case(&member.name)])?;
                    separator = ", ";
                }
                writer.write_line(");", &[])?;
                Ok(())
            })?;
            writer.write_line("}", &[])?;
            Ok(())
        })?;
        writer.write_line("}", &[])?;
        writer.newline();

        writer.write_line("[ComVisible(true)]", &[])?;
        writer.write_line(&interop.interface_attribute, &[])?;
        writer.write_line("public partial interface I{0}", &[&contract.name])?;
        writer.write_line("{", &[])?;
        writer.indented(|writer| {
            for member in &contract.members {
                writer.write_line("{0} {1} {{ get; }}", &[&member.ty, &member_case(&member.name)])?;
            }
            Ok(())
        })?;
        writer.write_line("}", &[])?;
        writer.newline();
        writer.write_line("[ComVisible(true)]", &[])?;
        writer.write_line(&interop.class_attribute, &[])?;
        writer.write_line("[ClassInterface(ClassInterfaceType.None)]", &[])?;
        Ok(())
    }

    fn write_entities(&self, writer: &mut CodeWriter<'_>, context: &Context) -> Result<(), TemplateError> {
        for entity in &context.entities {
            if entity.is_default() {
                continue;
            }
            write_entity_interface(writer, entity, COMMAND_TAG, APPLICATION_SERVICE_TEMPLATE)?;
            write_entity_interface(writer, entity, EVENT_TAG, STATE_TEMPLATE)?;
        }
        Ok(())
    }
}

/// Parameterless constructor. The body is empty unless the contract has
/// array-typed members, which are initialized to zero-length arrays so
/// default construction never leaves them null.
fn write_private_ctor(writer: &mut CodeWriter<'_>, contract: &Message) -> Result<(), TemplateError> {
    let arrays = contract.array_members();
    if arrays.is_empty() {
        writer.write_line("{0} () {{}}", &[&contract.name])?;
        return Ok(());
    }
    writer.write_line("{0} ()", &[&contract.name])?;
    writer.write_line("{", &[])?;
    writer.indented(|writer| {
        for member in arrays {
            let empty = member.ty.replace(ARRAY_MARKER, "[0]");
            writer.write_line("{0} = new {1};", &[&member_case(&member.name), &empty])?;
        }
        Ok(())
    })?;
    writer.write_line("}", &[])?;
    Ok(())
}

/// Public-constructor parameter list, comma-separated, declaration order.
fn write_parameters(writer: &mut CodeWriter<'_>, contract: &Message) -> Result<(), TemplateError> {
    let mut first = true;
    for member in &contract.members {
        if first {
            first = false;
        } else {
            writer.write(", ", &[])?;
        }
        writer.write("{0} {1}", &[&member.ty, &parameter_case(&member.name)])?;
    }
    Ok(())
}

fn write_assignments(writer: &mut CodeWriter<'_>, contract: &Message) -> Result<(), TemplateError> {
    for member in &contract.members {
        writer.write_line("{0} = {1};", &[&member_case(&member.name), &parameter_case(&member.name)])?;
    }
    Ok(())
}

/// `ToString()` override from the display-format template, if one is
/// declared and non-blank.
fn write_to_string(writer: &mut CodeWriter<'_>, contract: &Message) -> Result<(), TemplateError> {
    let Some(representation) = &contract.string_representation else {
        return Ok(());
    };
    if representation.trim().is_empty() {
        return Ok(());
    }

    writer.newline();
    writer.write_line("public override string ToString()", &[])?;
    writer.write_line("{", &[])?;
    writer.indented(|writer| {
        let (text, active) = rewrite_display_format(representation, &contract.members);
        // C# verbatim string: double embedded quotes.
        let quoted = text.replace('"', "\"\"");
        writer.write("return string.Format(@\"{0}\"", &[&quoted])?;
        for member in &active {
            writer.write(", {0}", &[&member_case(&member.name)])?;
        }
        writer.write_line(");", &[])?;
        Ok(())
    })?;
    writer.write_line("}", &[])?;
    Ok(())
}

/// Role interface for one entity and role tag. Entities with no matching
/// messages emit nothing. The tag may be a comma-separated list; a message
/// matches when any of its modifier identifiers is in the list.
fn write_entity_interface(
    writer: &mut CodeWriter<'_>,
    entity: &Entity,
    tag: &str,
    template: &str,
) -> Result<(), TemplateError> {
    let tags: Vec<&str> = tag.split(',').collect();
    let matches: Vec<&Message> = entity
        .messages
        .iter()
        .filter(|m| m.modifiers.iter().any(|modifier| tags.contains(&modifier.identifier.as_str())))
        .collect();
    if matches.is_empty() {
        return Ok(());
    }

    let parameter = if tag == EVENT_TAG { "e" } else { "c" };
    writer.newline();
    writer.write_line(template, &[&entity.name])?;
    writer.write_line("{", &[])?;
    writer.indented(|writer| {
        for message in matches {
            writer.write_line("void When({0} {1});", &[&message.name, parameter])?;
        }
        Ok(())
    })?;
    writer.write_line("}", &[])?;
    Ok(())
}
