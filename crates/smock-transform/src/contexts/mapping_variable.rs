use super::struct_fields::{has_nested_mappings, struct_field_names};
use super::{array_element, resolved_type_name};
use crate::type_normalizer::TypeNormalizer;
use smock_core::context::{MappingMockFunction, MappingSetFunction};
use smock_core::{MappingVariableContext, TypeName, VariableDeclaration};

pub fn mapping_variable_context(variable: &VariableDeclaration) -> MappingVariableContext {
    let type_name = resolved_type_name(variable);

    let mut key_types = Vec::new();
    let mut terminal: &TypeName = &type_name;
    while let TypeName::Mapping {
        key_type,
        value_type,
        ..
    } = terminal
    {
        key_types.push(TypeNormalizer::strip_qualifiers(key_type.type_string()));
        terminal = &**value_type;
    }

    let value_type = TypeNormalizer::normalize(terminal.type_string());
    let is_array = terminal.is_array();
    let (base_type, is_struct_array) = if is_array {
        let element = array_element(terminal);
        (
            TypeNormalizer::normalize(element.type_string()),
            element.is_struct(),
        )
    } else {
        (value_type.clone(), false)
    };
    let struct_fields = terminal
        .is_struct()
        .then(|| struct_field_names(terminal));

    MappingVariableContext {
        set_function: MappingSetFunction {
            function_name: variable.name.clone(),
            key_types: key_types.clone(),
            value_type: value_type.clone(),
        },
        mock_function: MappingMockFunction {
            function_name: variable.name.clone(),
            key_types,
            value_type,
            base_type,
            struct_fields,
        },
        is_internal: variable.is_internal(),
        is_array,
        is_struct: terminal.is_struct() && !is_array,
        is_struct_array,
        has_nested_mapping: has_nested_mappings(terminal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use smock_core::{ReferencedDeclaration, StateVisibility, VariableBuilder};

    #[test]
    fn test_simple_mapping() {
        let variable = VariableBuilder::new("balances", "mapping(address => uint256)")
            .visibility(StateVisibility::Internal)
            .build();

        assert_eq!(
            serde_json::to_value(mapping_variable_context(&variable)).unwrap(),
            json!({
                "setFunction": {
                    "functionName": "balances",
                    "keyTypes": ["address"],
                    "valueType": "uint256"
                },
                "mockFunction": {
                    "functionName": "balances",
                    "keyTypes": ["address"],
                    "valueType": "uint256",
                    "baseType": "uint256",
                    "structFields": null
                },
                "isInternal": true,
                "isArray": false,
                "isStruct": false,
                "isStructArray": false,
                "hasNestedMapping": false
            })
        );
    }

    #[test]
    fn test_triple_nested_mapping() {
        let variable = VariableBuilder::new(
            "nested",
            "mapping(uint256 => mapping(uint128 => mapping(uint64 => uint8)))",
        )
        .build();

        let context = mapping_variable_context(&variable);

        assert_eq!(
            context.set_function.key_types,
            vec!["uint256", "uint128", "uint64"]
        );
        assert_eq!(context.set_function.value_type, "uint8");
        assert_eq!(context.mock_function.base_type, "uint8");
        assert!(!context.is_array);
    }

    #[test]
    fn test_contract_keys_are_unqualified() {
        let variable =
            VariableBuilder::new("allowances", "mapping(contract IERC20 => bool)").build();

        let context = mapping_variable_context(&variable);

        assert_eq!(context.set_function.key_types, vec!["IERC20"]);
    }

    #[test]
    fn test_nested_struct_array_value() {
        let variable = VariableBuilder::new(
            "positions",
            "mapping(uint256 => mapping(uint256 => struct MyStruct[]))",
        )
        .build();

        let context = mapping_variable_context(&variable);

        assert_eq!(context.mock_function.key_types, vec!["uint256", "uint256"]);
        assert_eq!(context.mock_function.value_type, "MyStruct[] memory");
        assert_eq!(context.mock_function.base_type, "MyStruct memory");
        assert!(context.is_array);
        assert!(context.is_struct_array);
        assert!(!context.is_struct);
    }

    #[test]
    fn test_struct_value_with_inner_mapping() {
        let vault = TypeName::user_defined(
            "struct Vault",
            Some(ReferencedDeclaration::Struct {
                name: "Vault".to_string(),
                members: vec![
                    VariableBuilder::new("owner", "address").build(),
                    VariableBuilder::new("shares", "mapping(address => uint256)").build(),
                ],
            }),
        );
        let variable = VariableBuilder::typed(
            "vaults",
            TypeName::mapping(TypeName::elementary("uint256"), vault),
        )
        .build();

        let context = mapping_variable_context(&variable);

        assert!(context.is_struct);
        assert!(context.has_nested_mapping);
        assert_eq!(context.mock_function.value_type, "Vault memory");
        assert_eq!(
            context.mock_function.struct_fields,
            Some(vec!["owner".to_string(), "shares".to_string()])
        );
    }
}
