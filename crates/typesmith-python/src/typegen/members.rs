//! Generated class members: `__init__`, `from_dict` and `to_dict`.
//!
//! Methods are returned as unindented lines; the declaration indents them
//! into the class body.

use typesmith_core::{ClassType, Property};

use super::convert::{ConverterSynthesizer, Direction};
use super::declare::string_literal;
use super::emitter::{Emitter, INDENT};
use super::imports::Import;
use crate::{Location, Result};

/// A class member with its rendered annotation.
pub(super) struct Field<'c> {
    pub(super) name: &'c str,
    pub(super) property: &'c Property,
    pub(super) annotation: String,
}

impl Emitter<'_> {
    pub(super) fn generated_members(
        &mut self,
        class: &ClassType,
        fields: &[Field<'_>],
    ) -> Result<Vec<Vec<String>>> {
        let mut methods = Vec::with_capacity(3);
        // dataclasses generate their own
        if !self.config.python_version.uses_dataclasses() {
            methods.push(init_method(fields));
        }
        methods.push(self.from_dict_method(class, fields)?);
        methods.push(self.to_dict_method(class, fields)?);
        Ok(methods)
    }

    fn from_dict_method(&mut self, class: &ClassType, fields: &[Field<'_>]) -> Result<Vec<String>> {
        self.imports.add(Import::ANY);
        let synthesizer = ConverterSynthesizer::new(self.graph);
        let root = Location::type_root(&class.name);

        let mut lines = vec![
            "@staticmethod".to_string(),
            format!("def from_dict(obj: Any) -> '{}':", class.name),
            format!("{INDENT}assert isinstance(obj, dict)"),
        ];
        for field in fields {
            let converter = synthesizer.property_converter(
                field.property,
                Direction::Deserialize,
                &root.property(field.name),
                &mut self.combinators,
            )?;
            let value = format!("obj.get({})", string_literal(&field.property.json_key));
            lines.push(format!("{INDENT}{} = {}", field.name, converter.apply(&value)));
        }
        let arguments: Vec<&str> = fields.iter().map(|field| field.name).collect();
        lines.push(format!(
            "{INDENT}return {}({})",
            class.name,
            arguments.join(", ")
        ));
        Ok(lines)
    }

    fn to_dict_method(&mut self, class: &ClassType, fields: &[Field<'_>]) -> Result<Vec<String>> {
        let synthesizer = ConverterSynthesizer::new(self.graph);
        let root = Location::type_root(&class.name);

        let mut lines = vec![
            "def to_dict(self) -> dict:".to_string(),
            format!("{INDENT}result: dict = {{}}"),
        ];
        for field in fields {
            let converter = synthesizer.property_converter(
                field.property,
                Direction::Serialize,
                &root.property(field.name),
                &mut self.combinators,
            )?;
            let value = format!("self.{}", field.name);
            lines.push(format!(
                "{INDENT}result[{}] = {}",
                string_literal(&field.property.json_key),
                converter.apply(&value)
            ));
        }
        lines.push(format!("{INDENT}return result"));
        Ok(lines)
    }
}

fn init_method(fields: &[Field<'_>]) -> Vec<String> {
    let parameters: String = fields
        .iter()
        .map(|field| format!(", {}: {}", field.name, field.annotation))
        .collect();
    let mut lines = vec![format!("def __init__(self{parameters}) -> None:")];
    if fields.is_empty() {
        lines.push(format!("{INDENT}pass"));
    }
    for field in fields {
        lines.push(format!("{INDENT}self.{0} = {0}", field.name));
    }
    lines
}
