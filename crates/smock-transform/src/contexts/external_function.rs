use super::parameters::{extract_parameters, extract_return_parameters};
use crate::resolution::{effective_visibility, ResolutionContext};
use smock_core::{
    ExternalFunctionContext, FunctionDefinition, Result, SmockError, StateMutability,
};

pub fn external_function_context(
    function: &FunctionDefinition,
    resolution: Option<&ResolutionContext<'_>>,
) -> Result<ExternalFunctionContext> {
    let visibility = effective_visibility(function, resolution);
    if !visibility.is_external_or_public() {
        return Err(SmockError::invalid_node(
            "external or public function",
            format!("{} function '{}'", visibility, function.name),
        ));
    }

    let inputs = extract_parameters(&function.parameters);
    let outputs = extract_return_parameters(&function.return_parameters);

    Ok(ExternalFunctionContext {
        function_name: function.name.clone(),
        signature: signature(function, &inputs.types),
        parameters: join_nonempty(&inputs.joined(), &outputs.joined()),
        inputs: inputs.joined(),
        outputs: outputs.joined(),
        input_names: inputs.names,
        output_names: outputs.names,
        visibility: visibility.as_str().to_string(),
        state_mutability: padded_mutability(function.state_mutability),
        implemented: function.implemented,
        overrides: overrides(function, resolution),
    })
}

pub(crate) fn signature(function: &FunctionDefinition, types: &[String]) -> String {
    format!("{}({})", function.name, types.join(","))
}

pub(crate) fn join_nonempty(inputs: &str, outputs: &str) -> String {
    match (inputs.is_empty(), outputs.is_empty()) {
        (true, _) => outputs.to_string(),
        (false, true) => inputs.to_string(),
        (false, false) => format!("{}, {}", inputs, outputs),
    }
}

pub(crate) fn overrides(
    function: &FunctionDefinition,
    resolution: Option<&ResolutionContext<'_>>,
) -> Option<String> {
    let resolution = resolution?;
    resolution.overrides_for(&function.selector()?)
}

fn padded_mutability(mutability: StateMutability) -> String {
    match mutability {
        StateMutability::NonPayable => " ".to_string(),
        other => format!(" {} ", other.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use smock_core::{
        DataLocation, FunctionBuilder, FunctionVisibility, ReferencedDeclaration, Selector,
        SelectorMap, TypeName, VariableBuilder,
    };

    fn external(name: &str) -> FunctionBuilder {
        FunctionBuilder::new(name, FunctionVisibility::External).virtual_fn()
    }

    #[test]
    fn test_rejects_internal_and_private() {
        for visibility in [FunctionVisibility::Internal, FunctionVisibility::Private] {
            let function = FunctionBuilder::new("f", visibility).build();
            assert!(matches!(
                external_function_context(&function, None),
                Err(SmockError::InvalidNodeKind { .. })
            ));
        }
    }

    #[test]
    fn test_function_without_parameters() {
        let function = external("foo").build();

        assert_eq!(
            serde_json::to_value(external_function_context(&function, None).unwrap()).unwrap(),
            json!({
                "functionName": "foo",
                "signature": "foo()",
                "parameters": "",
                "inputs": "",
                "outputs": "",
                "inputNames": [],
                "outputNames": [],
                "visibility": "external",
                "stateMutability": " ",
                "implemented": true,
                "overrides": null
            })
        );
    }

    #[test]
    fn test_parameters_and_returns() {
        let function = external("swap")
            .param(VariableBuilder::unnamed("uint256").build())
            .param(
                VariableBuilder::new("path", "bytes")
                    .location(DataLocation::Calldata)
                    .build(),
            )
            .returns(
                VariableBuilder::unnamed("string")
                    .location(DataLocation::Memory)
                    .build(),
            )
            .mutability(StateMutability::Payable)
            .build();

        let context = external_function_context(&function, None).unwrap();

        assert_eq!(context.signature, "swap(uint256,bytes)");
        assert_eq!(context.inputs, "uint256 _param0, bytes calldata path");
        assert_eq!(context.outputs, "string memory _returnParam0");
        assert_eq!(
            context.parameters,
            "uint256 _param0, bytes calldata path, string memory _returnParam0"
        );
        assert_eq!(context.input_names, vec!["_param0", "path"]);
        assert_eq!(context.output_names, vec!["_returnParam0"]);
        assert_eq!(context.state_mutability, " payable ");
    }

    #[test]
    fn test_only_returns() {
        let function = external("pair")
            .returns(VariableBuilder::unnamed("uint256").build())
            .returns(VariableBuilder::unnamed("boolean").build())
            .mutability(StateMutability::View)
            .build();

        let context = external_function_context(&function, None).unwrap();

        assert_eq!(context.signature, "pair()");
        assert_eq!(
            context.parameters,
            "uint256 _returnParam0, boolean _returnParam1"
        );
        assert_eq!(context.inputs, "");
        assert_eq!(context.state_mutability, " view ");
    }

    #[test]
    fn test_overrides_from_resolution() {
        let function = external("foo").selector("12345678").unimplemented().build();
        let mut selectors = SelectorMap::new();
        selectors.merge_function(Selector::hash("12345678"), "TestContractA", &function);
        selectors.merge_function(Selector::hash("12345678"), "TestContractB", &function);
        let resolution = ResolutionContext::new(&selectors);

        let context = external_function_context(&function, Some(&resolution)).unwrap();

        assert_eq!(
            context.overrides,
            Some("(TestContractA, TestContractB)".to_string())
        );
        assert!(!context.implemented);
        assert_eq!(context.visibility, "external");
    }

    #[test]
    fn test_forced_visibility_on_internal_function() {
        let function = FunctionBuilder::new("_hook", FunctionVisibility::Internal)
            .virtual_fn()
            .selector("aabbccdd")
            .build();
        let selectors = SelectorMap::new();
        let resolution = ResolutionContext::synthesized(&selectors);

        let context = external_function_context(&function, Some(&resolution)).unwrap();

        assert_eq!(context.visibility, "public");
        assert_eq!(context.overrides, None);
    }

    #[test]
    fn test_value_type_alias_in_signature() {
        let alias = TypeName::user_defined(
            "MyType",
            Some(ReferencedDeclaration::UserDefinedValueType {
                name: "MyType".to_string(),
                underlying_type: TypeName::elementary("uint256"),
            }),
        );
        let function = external("set")
            .param(VariableBuilder::typed("a", alias).build())
            .build();

        let context = external_function_context(&function, None).unwrap();

        assert_eq!(context.signature, "set(uint256)");
        assert_eq!(context.parameters, "MyType a");
    }
}
