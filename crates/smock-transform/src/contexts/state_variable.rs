use super::resolved_type_name;
use super::struct_fields::struct_field_names;
use crate::type_normalizer::TypeNormalizer;
use smock_core::context::{StateVariableMockFunction, StateVariableSetFunction};
use smock_core::{StateVariableContext, VariableDeclaration};

pub fn state_variable_context(variable: &VariableDeclaration) -> StateVariableContext {
    let param_type = TypeNormalizer::normalize(&variable.type_string);
    let is_struct = variable.type_string.starts_with("struct");
    let struct_fields = is_struct.then(|| struct_field_names(&resolved_type_name(variable)));

    StateVariableContext {
        set_function: StateVariableSetFunction {
            function_name: variable.name.clone(),
            param_type: param_type.clone(),
            param_name: variable.name.clone(),
        },
        mock_function: StateVariableMockFunction {
            function_name: variable.name.clone(),
            param_type,
            struct_fields,
        },
        is_internal: variable.is_internal(),
        is_struct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use smock_core::{
        DataLocation, ReferencedDeclaration, StateVisibility, TypeName, VariableBuilder,
    };

    #[test]
    fn test_plain_state_variable() {
        let variable = VariableBuilder::new("totalSupply", "uint256").build();

        assert_eq!(
            serde_json::to_value(state_variable_context(&variable)).unwrap(),
            json!({
                "setFunction": {
                    "functionName": "totalSupply",
                    "paramType": "uint256",
                    "paramName": "totalSupply"
                },
                "mockFunction": {
                    "functionName": "totalSupply",
                    "paramType": "uint256",
                    "structFields": null
                },
                "isInternal": false,
                "isStruct": false
            })
        );
    }

    #[test]
    fn test_internal_string_variable() {
        let variable = VariableBuilder::new("name", "string")
            .visibility(StateVisibility::Internal)
            .location(DataLocation::Memory)
            .build();

        let context = state_variable_context(&variable);

        assert!(context.is_internal);
        assert_eq!(context.set_function.param_type, "string memory");
        assert_eq!(context.mock_function.struct_fields, None);
    }

    #[test]
    fn test_struct_variable_lists_fields() {
        let config = TypeName::user_defined(
            "struct Config",
            Some(ReferencedDeclaration::Struct {
                name: "Config".to_string(),
                members: vec![
                    VariableBuilder::new("field1", "mapping(uint256 => uint256)").build(),
                    VariableBuilder::new("field2", "uint256").build(),
                ],
            }),
        );
        let variable = VariableBuilder::typed("config", config).build();

        let context = state_variable_context(&variable);

        assert!(context.is_struct);
        assert_eq!(context.set_function.param_type, "Config memory");
        assert_eq!(
            context.mock_function.struct_fields,
            Some(vec!["field1".to_string(), "field2".to_string()])
        );
    }

    #[test]
    fn test_unresolved_struct_has_empty_fields() {
        let variable = VariableBuilder::new("config", "struct Config").build();

        let context = state_variable_context(&variable);

        assert_eq!(context.mock_function.struct_fields, Some(vec![]));
    }
}
