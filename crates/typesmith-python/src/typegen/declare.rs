//! Class and enum declarations.

use tracing::trace;
use typesmith_core::{ClassType, EnumType, Type, TypeId};

use super::emitter::{Emitter, INDENT};
use super::imports::Import;
use super::members::Field;
use super::render::{TypeRenderer, lookup};
use crate::{Location, Result, TypegenError};

impl<'a> Emitter<'a> {
    /// Emit the declaration of a class or enum.
    ///
    /// The type is `InDeclaration` while its body is emitted, so references
    /// to it from inside the body are quoted, and `Declared` afterwards.
    pub fn declare(&mut self, id: TypeId) -> Result<()> {
        let location = Location::declaration(id);
        match lookup(self.graph, id, &location)? {
            Type::Class(class) => self.declare_class(id, class),
            Type::Enum(enum_type) => self.declare_enum(id, enum_type),
            other => Err(TypegenError::Undeclarable {
                kind: other.kind(),
                location,
            }),
        }
    }

    fn declare_class(&mut self, id: TypeId, class: &'a ClassType) -> Result<()> {
        self.tracker.begin(id, &class.name)?;
        trace!(id = %id, name = %class.name, properties = class.properties.len(), "declaring class");

        let mut lines = Vec::new();
        if self.config.python_version.uses_dataclasses() {
            self.imports.add(Import::DATACLASS);
            lines.push("@dataclass".to_string());
        }
        lines.push(format!("class {}:", class.name));
        self.push_docstring(id, &mut lines);

        let root = Location::type_root(&class.name);
        let mut fields = Vec::with_capacity(class.properties.len());
        for (name, property) in &class.properties {
            let annotation = TypeRenderer::new(self.graph, &self.tracker).render_property(
                property,
                &root.property(name),
                &mut self.imports,
            )?;
            fields.push(Field {
                name,
                property,
                annotation,
            });
        }

        if fields.is_empty() {
            lines.push(format!("{INDENT}pass"));
        }
        for field in &fields {
            if let Some(description) = self.descriptions.property_description(id, field.name) {
                lines.extend(comment_lines(description).iter().map(|line| indent(line)));
            }
            lines.push(format!("{INDENT}{}: {}", field.name, field.annotation));
        }

        if !self.config.just_types {
            for method in self.generated_members(class, &fields)? {
                lines.push(String::new());
                lines.extend(method.iter().map(|line| indent(line)));
            }
        }

        self.tracker.finish(id);
        self.declarations.push(lines.join("\n"));
        Ok(())
    }

    fn declare_enum(&mut self, id: TypeId, enum_type: &'a EnumType) -> Result<()> {
        self.tracker.begin(id, &enum_type.name)?;
        trace!(id = %id, name = %enum_type.name, cases = enum_type.cases.len(), "declaring enum");

        self.imports.add(Import::ENUM);
        let mut lines = vec![format!("class {}(Enum):", enum_type.name)];
        self.push_docstring(id, &mut lines);

        if enum_type.cases.is_empty() {
            lines.push(format!("{INDENT}pass"));
        }
        for (case, literal) in &enum_type.cases {
            lines.push(format!("{INDENT}{case} = {}", string_literal(literal)));
        }

        self.tracker.finish(id);
        self.declarations.push(lines.join("\n"));
        Ok(())
    }

    fn push_docstring(&self, id: TypeId, lines: &mut Vec<String>) {
        let Some(description) = self.descriptions.type_description(id) else {
            return;
        };
        if description.trim().is_empty() {
            return;
        }
        lines.extend(docstring(description).iter().map(|line| indent(line)));
    }
}

/// Indent one level; blank lines stay blank.
pub(super) fn indent(line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{INDENT}{line}")
    }
}

/// `# ` comment lines for free text.
///
/// Python ends a line at `\r\n`, `\r` or `\n`; every one of them starts a new
/// comment line.
pub(super) fn comment_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim_end)
        .map(|line| {
            if line.is_empty() {
                "#".to_string()
            } else {
                format!("# {line}")
            }
        })
        .collect()
}

fn docstring(description: &str) -> Vec<String> {
    let escaped = description.replace('\\', "\\\\").replace('"', "\\\"");
    let lines: Vec<&str> = escaped.trim().lines().map(str::trim_end).collect();
    match lines.as_slice() {
        [single] => vec![format!("\"\"\"{single}\"\"\"")],
        _ => {
            let mut out = vec!["\"\"\"".to_string()];
            out.extend(lines.iter().map(|line| line.to_string()));
            out.push("\"\"\"".to_string());
            out
        }
    }
}

/// A double-quoted Python string literal.
pub(super) fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
