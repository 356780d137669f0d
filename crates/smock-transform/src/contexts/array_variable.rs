use super::{array_element, resolved_type_name};
use crate::type_normalizer::TypeNormalizer;
use smock_core::context::{ArrayMockFunction, ArraySetFunction};
use smock_core::{ArrayVariableContext, VariableDeclaration};

pub fn array_variable_context(variable: &VariableDeclaration) -> ArrayVariableContext {
    let array_type = TypeNormalizer::normalize(&variable.type_string);
    let type_name = resolved_type_name(variable);
    let element = array_element(&type_name);

    // Only a resolved declaration yields fields here; an unresolved struct element stays null.
    let struct_fields = element
        .referenced_declaration()
        .and_then(|declaration| declaration.struct_members())
        .map(|members| {
            members
                .iter()
                .filter(|member| !member.name.is_empty())
                .map(|member| member.name.clone())
                .collect()
        });

    ArrayVariableContext {
        set_function: ArraySetFunction {
            function_name: variable.name.clone(),
            array_type: array_type.clone(),
            param_name: variable.name.clone(),
        },
        mock_function: ArrayMockFunction {
            function_name: variable.name.clone(),
            array_type,
            base_type: TypeNormalizer::normalize(element.type_string()),
            struct_fields,
        },
        is_internal: variable.is_internal(),
        is_struct_array: element.is_struct(),
    }
}
