use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use smock_core::context::{
    ArrayVariableContext, ConstructorContext, ExternalFunctionContext, ImportContext,
    InternalFunctionContext, MappingVariableContext, StateVariableContext,
};
use smock_core::{MockContext, MockRenderer, SmockError};
use std::io::Write;

/// Default renderer: one Solidity snippet per context record.
///
/// Contract members are emitted one indent level deep and followed by a blank line, so rendered
/// members can be concatenated straight into a contract body. Imports are emitted at top level.
#[derive(Debug, Clone, Default)]
pub struct SolidityEmitter {
    config: EmitterConfig,
}

impl SolidityEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn emit_state_variable<W: Write>(
        &self,
        record: &StateVariableContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let set = &record.set_function;
        EmitHelper::write_block(
            writer,
            context,
            &format!(
                "function set_{}({} _{}) public",
                set.function_name, set.param_type, set.param_name
            ),
            |w, c| {
                EmitHelper::write_line(
                    w,
                    c,
                    &format!("{} = _{};", set.function_name, set.param_name),
                )
            },
        )?;

        if !record.is_internal {
            let mock = &record.mock_function;
            EmitHelper::write_blank(writer)?;
            write_mock_call(
                writer,
                context,
                &format!(
                    "function mock_call_{}({} _value) public",
                    mock.function_name, mock.param_type
                ),
                &encoded_signature(&format!("{}()", mock.function_name), &[]),
                &encoded_value("_value", mock.struct_fields.as_deref()),
            )?;
        }

        EmitHelper::write_blank(writer)
    }

    fn emit_array_variable<W: Write>(
        &self,
        record: &ArrayVariableContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let set = &record.set_function;
        let target = set.function_name.as_str();
        let source = format!("_{}", set.param_name);

        EmitHelper::write_block(
            writer,
            context,
            &format!(
                "function set_{}({} {}) public",
                target, set.array_type, source
            ),
            |w, c| {
                if record.is_struct_array {
                    write_push_loop(w, c, target, &source)
                } else {
                    EmitHelper::write_line(w, c, &format!("{} = {};", target, source))
                }
            },
        )?;

        if !record.is_internal {
            let mock = &record.mock_function;
            EmitHelper::write_blank(writer)?;
            write_mock_call(
                writer,
                context,
                &format!(
                    "function mock_call_{}(uint256 _index, {} _value) public",
                    mock.function_name, mock.base_type
                ),
                &encoded_signature(
                    &format!("{}(uint256)", mock.function_name),
                    &["_index".to_string()],
                ),
                &encoded_value("_value", mock.struct_fields.as_deref()),
            )?;
        }

        EmitHelper::write_blank(writer)
    }

    fn emit_mapping_variable<W: Write>(
        &self,
        record: &MappingVariableContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        // Structs holding mappings cannot live in memory, so neither mock can take one.
        if record.has_nested_mapping {
            return Ok(());
        }

        let key_names: Vec<String> = (0..record.set_function.key_types.len())
            .map(|i| format!("_key{}", i))
            .collect();
        let key_params: Vec<String> = record
            .set_function
            .key_types
            .iter()
            .zip(&key_names)
            .map(|(key_type, name)| format!("{} {}", key_type, name))
            .collect();
        let access = format!(
            "{}{}",
            record.set_function.function_name,
            key_names
                .iter()
                .map(|name| format!("[{}]", name))
                .collect::<String>()
        );

        let set = &record.set_function;
        EmitHelper::write_block(
            writer,
            context,
            &format!(
                "function set_{}({}, {} _value) public",
                set.function_name,
                key_params.join(", "),
                set.value_type
            ),
            |w, c| {
                if record.is_struct_array {
                    write_push_loop(w, c, &access, "_value")
                } else {
                    EmitHelper::write_line(w, c, &format!("{} = _value;", access))
                }
            },
        )?;

        if !record.is_internal {
            let mock = &record.mock_function;
            let mut getter_types = mock.key_types.clone();
            let mut arguments = key_names.clone();
            let mut params = key_params.clone();
            if record.is_array {
                getter_types.push("uint256".to_string());
                arguments.push("_index".to_string());
                params.push("uint256 _index".to_string());
                params.push(format!("{} _value", mock.base_type));
            } else {
                params.push(format!("{} _value", mock.value_type));
            }

            EmitHelper::write_blank(writer)?;
            write_mock_call(
                writer,
                context,
                &format!(
                    "function mock_call_{}({}) public",
                    mock.function_name,
                    params.join(", ")
                ),
                &encoded_signature(
                    &format!("{}({})", mock.function_name, getter_types.join(",")),
                    &arguments,
                ),
                &encoded_value("_value", mock.struct_fields.as_deref()),
            )?;
        }

        EmitHelper::write_blank(writer)
    }

    fn emit_constructor<W: Write>(
        &self,
        record: &ConstructorContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        EmitHelper::write_line(
            writer,
            context,
            &format!("constructor({}) {} {{}}", record.parameters, record.contracts),
        )?;
        EmitHelper::write_blank(writer)
    }

    fn emit_external_function<W: Write>(
        &self,
        record: &ExternalFunctionContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        write_mock_call(
            writer,
            context,
            &format!(
                "function mock_call_{}({}) public",
                record.function_name, record.parameters
            ),
            &encoded_signature(&record.signature, &record.input_names),
            &record.output_names.join(", "),
        )?;

        if !record.implemented {
            EmitHelper::write_blank(writer)?;
            EmitHelper::write_line(
                writer,
                context,
                &format!(
                    "function {}({}) {}{}override{}{} {{}}",
                    record.function_name,
                    record.inputs,
                    record.visibility,
                    record.state_mutability,
                    record.overrides.as_deref().unwrap_or(""),
                    returns_clause(&record.outputs)
                ),
            )?;
        }

        EmitHelper::write_blank(writer)
    }

    fn emit_internal_function<W: Write>(
        &self,
        record: &InternalFunctionContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let call = encoded_signature(&record.signature, &record.input_names);

        write_mock_call(
            writer,
            context,
            &format!(
                "function mock_call_{}({}) public",
                record.function_name, record.parameters
            ),
            &call,
            &record.output_names.join(", "),
        )?;
        EmitHelper::write_blank(writer)?;

        let header = format!(
            "function {}({}) internal {}override{}{}",
            record.function_name,
            record.inputs,
            if record.is_view { "view " } else { "" },
            record.overrides.as_deref().unwrap_or(""),
            returns_clause(&record.outputs)
        );
        let super_call = format!(
            "super.{}({})",
            record.function_name,
            record.input_names.join(", ")
        );

        EmitHelper::write_block(writer, context, &header, |w, c| {
            EmitHelper::write_line(
                w,
                c,
                &format!(
                    "(bool _success, bytes memory _data) = address(this).{}(abi.encodeWithSignature({}));",
                    if record.is_view { "staticcall" } else { "call" },
                    call
                ),
            )?;

            if record.output_types.is_empty() {
                EmitHelper::write_line(w, c, "if (_success) return;")?;
                if record.implemented {
                    EmitHelper::write_line(w, c, &format!("{};", super_call))?;
                }
            } else {
                let decoded: Vec<&str> = record
                    .output_types
                    .iter()
                    .map(|t| without_location(t))
                    .collect();
                EmitHelper::write_line(
                    w,
                    c,
                    &format!(
                        "if (_success) return abi.decode(_data, ({}));",
                        decoded.join(", ")
                    ),
                )?;
                if record.implemented {
                    EmitHelper::write_line(w, c, &format!("else return {};", super_call))?;
                }
            }
            Ok(())
        })?;

        EmitHelper::write_blank(writer)
    }

    fn emit_import<W: Write>(
        &self,
        record: &ImportContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let line = match &record.named_imports {
            Some(names) => format!(
                "import {{{}}} from '{}';",
                names
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                record.absolute_path
            ),
            None => format!("import '{}';", record.absolute_path),
        };
        EmitHelper::write_line(writer, context, &line)
    }
}

impl Emitter for SolidityEmitter {
    type Item = MockContext;

    fn initial_context(&self, item: &MockContext) -> EmitContext {
        let level = match item {
            MockContext::Import(_) => 0,
            _ => 1,
        };
        EmitContext::with_indent(self.config.indent_style.chars(), level)
    }

    fn emit<W: Write>(
        &self,
        item: &MockContext,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        match item {
            MockContext::MappingStateVariable(record) => {
                self.emit_mapping_variable(record, writer, context)
            }
            MockContext::ArrayStateVariable(record) => {
                self.emit_array_variable(record, writer, context)
            }
            MockContext::StateVariable(record) => self.emit_state_variable(record, writer, context),
            MockContext::Constructor(record) => self.emit_constructor(record, writer, context),
            MockContext::ExternalOrPublicFunction(record) => {
                self.emit_external_function(record, writer, context)
            }
            MockContext::InternalFunction(record) => {
                self.emit_internal_function(record, writer, context)
            }
            MockContext::Import(record) => self.emit_import(record, writer, context),
        }
    }
}

impl MockRenderer for SolidityEmitter {
    fn name(&self) -> &str {
        "solidity"
    }

    fn render(&self, context: &MockContext) -> smock_core::Result<String> {
        self.emit_to_string(context)
            .map_err(|e| SmockError::RenderError(format!("{}: {}", context.partial_name(), e)))
    }
}

fn write_mock_call<W: Write>(
    writer: &mut W,
    context: &mut EmitContext,
    header: &str,
    signature: &str,
    returned: &str,
) -> EmitResult {
    EmitHelper::write_block(writer, context, header, |w, c| {
        EmitHelper::write_line(w, c, "vm.mockCall(")?;
        c.indent();
        EmitHelper::write_line(w, c, "address(this),")?;
        EmitHelper::write_line(w, c, &format!("abi.encodeWithSignature({}),", signature))?;
        EmitHelper::write_line(w, c, &format!("abi.encode({})", returned))?;
        c.dedent();
        EmitHelper::write_line(w, c, ");")
    })
}

/// Memory arrays of structs cannot be copied into storage in one assignment.
fn write_push_loop<W: Write>(
    writer: &mut W,
    context: &mut EmitContext,
    target: &str,
    source: &str,
) -> EmitResult {
    EmitHelper::write_line(writer, context, &format!("delete {};", target))?;
    EmitHelper::write_block(
        writer,
        context,
        &format!("for (uint256 _i; _i < {}.length; ++_i)", source),
        |w, c| EmitHelper::write_line(w, c, &format!("{}.push({}[_i]);", target, source)),
    )
}

fn encoded_signature(signature: &str, arguments: &[String]) -> String {
    if arguments.is_empty() {
        format!("'{}'", signature)
    } else {
        format!("'{}', {}", signature, arguments.join(", "))
    }
}

/// Public struct getters return the members one by one.
fn encoded_value(name: &str, struct_fields: Option<&[String]>) -> String {
    match struct_fields {
        Some(fields) if !fields.is_empty() => fields
            .iter()
            .map(|field| format!("{}.{}", name, field))
            .collect::<Vec<_>>()
            .join(", "),
        _ => name.to_string(),
    }
}

fn returns_clause(outputs: &str) -> String {
    if outputs.is_empty() {
        String::new()
    } else {
        format!(" returns ({})", outputs)
    }
}

fn without_location(type_string: &str) -> &str {
    [" memory", " calldata", " storage"]
        .iter()
        .find_map(|location| type_string.strip_suffix(location))
        .unwrap_or(type_string)
}
