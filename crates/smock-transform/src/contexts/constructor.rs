use super::parameters::extract_parameters;
use crate::resolution::ResolutionContext;
use indexmap::IndexSet;
use smock_core::{ConstructorContext, FunctionDefinition, Result, SmockError};
use std::slice;

/// Merges every base constructor found by the resolver into a single mock constructor.
/// Identical `Name(args)` invocations are emitted once.
pub fn constructor_context(
    function: &FunctionDefinition,
    resolution: Option<&ResolutionContext<'_>>,
) -> Result<ConstructorContext> {
    if !function.is_constructor() {
        return Err(SmockError::invalid_node(
            "constructor",
            format!("function '{}'", function.name),
        ));
    }

    let constructors = match resolution.map(|r| r.selectors.constructors()) {
        Some(constructors) if constructors.len() > 1 => constructors,
        _ => slice::from_ref(&function),
    };

    let mut parameters = Vec::new();
    let mut invocations = IndexSet::new();
    for constructor in constructors {
        let extracted = extract_parameters(&constructor.parameters);
        let invocation = format!(
            "{}({})",
            constructor.scope.contract_name,
            extracted.names.join(", ")
        );
        if invocations.insert(invocation) {
            parameters.extend(extracted.declarations);
        }
    }

    Ok(ConstructorContext {
        parameters: parameters.join(", "),
        contracts: invocations.into_iter().collect::<Vec<_>>().join(" "),
    })
}
