use super::external_function::{join_nonempty, overrides, signature};
use super::parameters::{extract_parameters, extract_return_parameters};
use crate::resolution::{effective_visibility, ResolutionContext};
use smock_core::{
    FunctionDefinition, FunctionVisibility, InternalFunctionContext, Result, SmockError,
};

pub fn internal_function_context(
    function: &FunctionDefinition,
    resolution: Option<&ResolutionContext<'_>>,
) -> Result<InternalFunctionContext> {
    let visibility = effective_visibility(function, resolution);
    if visibility != FunctionVisibility::Internal || !function.is_virtual {
        return Err(SmockError::invalid_node(
            "internal virtual function",
            format!("{} function '{}'", visibility, function.name),
        ));
    }

    let inputs = extract_parameters(&function.parameters);
    let outputs = extract_return_parameters(&function.return_parameters);

    Ok(InternalFunctionContext {
        function_name: function.name.clone(),
        signature: signature(function, &inputs.types),
        parameters: join_nonempty(&inputs.joined(), &outputs.joined()),
        inputs: inputs.joined(),
        outputs: outputs.joined(),
        input_names: inputs.names,
        output_names: outputs.names,
        input_types: inputs.types,
        output_types: outputs.explicit_types,
        is_view: function.state_mutability.is_view_or_pure(),
        implemented: function.implemented,
        overrides: overrides(function, resolution),
    })
}
