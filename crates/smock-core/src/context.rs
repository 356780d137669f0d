/*! Template-ready records, one shape per mock category.
 *
 * Records are flat and serializable so any renderer (the bundled Solidity emitter, a template
 * engine, a JSON dump) can consume them without reaching back into the AST.
 */

use crate::ast::ForeignSymbol;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVariableContext {
    pub set_function: StateVariableSetFunction,
    pub mock_function: StateVariableMockFunction,
    pub is_internal: bool,
    pub is_struct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVariableSetFunction {
    pub function_name: String,
    pub param_type: String,
    pub param_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVariableMockFunction {
    pub function_name: String,
    pub param_type: String,
    pub struct_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayVariableContext {
    pub set_function: ArraySetFunction,
    pub mock_function: ArrayMockFunction,
    pub is_internal: bool,
    pub is_struct_array: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySetFunction {
    pub function_name: String,
    pub array_type: String,
    pub param_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayMockFunction {
    pub function_name: String,
    pub array_type: String,
    pub base_type: String,
    pub struct_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingVariableContext {
    pub set_function: MappingSetFunction,
    pub mock_function: MappingMockFunction,
    pub is_internal: bool,
    pub is_array: bool,
    pub is_struct: bool,
    pub is_struct_array: bool,
    pub has_nested_mapping: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSetFunction {
    pub function_name: String,
    pub key_types: Vec<String>,
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingMockFunction {
    pub function_name: String,
    pub key_types: Vec<String>,
    pub value_type: String,
    pub base_type: String,
    pub struct_fields: Option<Vec<String>>,
}

/// Mock constructor: the merged parameter list and the base-constructor invocations, e.g.
/// `TokenA(a, b) TokenB(c)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorContext {
    pub parameters: String,
    pub contracts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFunctionContext {
    pub function_name: String,
    pub signature: String,
    pub parameters: String,
    pub inputs: String,
    pub outputs: String,
    pub input_names: Vec<String>,
    pub output_names: Vec<String>,
    pub visibility: String,
    pub state_mutability: String,
    pub implemented: bool,
    pub overrides: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalFunctionContext {
    pub function_name: String,
    pub signature: String,
    pub parameters: String,
    pub inputs: String,
    pub outputs: String,
    pub input_names: Vec<String>,
    pub output_names: Vec<String>,
    pub input_types: Vec<String>,
    pub output_types: Vec<String>,
    pub is_view: bool,
    pub implemented: bool,
    pub overrides: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContext {
    pub absolute_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_imports: Option<Vec<ForeignSymbol>>,
}

/// One renderable unit, tagged with the partial that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "partial", content = "context", rename_all = "kebab-case")]
pub enum MockContext {
    MappingStateVariable(MappingVariableContext),
    ArrayStateVariable(ArrayVariableContext),
    StateVariable(StateVariableContext),
    Constructor(ConstructorContext),
    ExternalOrPublicFunction(ExternalFunctionContext),
    InternalFunction(InternalFunctionContext),
    Import(ImportContext),
}

impl MockContext {
    pub fn partial_name(&self) -> &'static str {
        match self {
            MockContext::MappingStateVariable(_) => "mapping-state-variable",
            MockContext::ArrayStateVariable(_) => "array-state-variable",
            MockContext::StateVariable(_) => "state-variable",
            MockContext::Constructor(_) => "constructor",
            MockContext::ExternalOrPublicFunction(_) => "external-or-public-function",
            MockContext::InternalFunction(_) => "internal-function",
            MockContext::Import(_) => "import",
        }
    }
}
