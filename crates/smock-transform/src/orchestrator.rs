use crate::contexts::build_context;
use crate::resolution::ResolutionContext;
use crate::resolver::SelectorResolver;
use smock_core::{
    ContractDefinition, ContractRegistry, Declaration, MockRenderer, Result, Selector,
};
use std::collections::HashSet;
use tracing::debug;

/// Renders one declaration, or nothing when it has no mock.
pub fn render_node_mock(
    declaration: Declaration<'_>,
    resolution: Option<&ResolutionContext<'_>>,
    renderer: &dyn MockRenderer,
) -> Result<String> {
    match build_context(declaration, resolution)? {
        Some(context) => renderer.render(&context),
        None => Ok(String::new()),
    }
}

/// Renders the inherited members an abstract contract leaves unimplemented, plus the merged
/// constructor forwarding to every base.
pub fn synthesize_missing<'a>(
    contract: &'a ContractDefinition,
    registry: &'a ContractRegistry,
    renderer: &dyn MockRenderer,
) -> Result<String> {
    let own: HashSet<&str> = contract
        .state_variables
        .iter()
        .filter_map(|variable| variable.function_selector.as_deref())
        .chain(
            contract
                .functions
                .iter()
                .filter_map(|function| function.function_selector.as_deref()),
        )
        .collect();

    let mut selectors = SelectorResolver::new(registry).resolve(contract)?;
    if let Some(constructor) = contract.constructor() {
        selectors.merge_function(Selector::Constructor, &contract.name, constructor);
    }
    let resolution = ResolutionContext::synthesized(&selectors);

    let mut content = String::new();
    for (selector, entry) in selectors.iter() {
        if own.contains(selector.as_str()) || entry.implemented {
            continue;
        }
        let Some(function) = entry.function else {
            continue;
        };

        debug!("{}: synthesizing {} ({})", contract.name, selector, function.name);
        content.push_str(&render_node_mock(
            Declaration::Function(function),
            Some(&resolution),
            renderer,
        )?);
    }

    Ok(content)
}
