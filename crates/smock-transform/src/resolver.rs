use smock_core::{ContractDefinition, ContractRegistry, Result, SelectorMap};
use tracing::trace;

/// Collects every ABI-visible member a contract inherits, keyed by selector.
///
/// Bases are walked depth-first in linearization order, descending into each base's own bases
/// before moving to the next one. A selector reachable through several paths is merged each time
/// it is met, so the representative declaration is whichever was visited last.
pub struct SelectorResolver<'a> {
    registry: &'a ContractRegistry,
}

impl<'a> SelectorResolver<'a> {
    pub fn new(registry: &'a ContractRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, contract: &'a ContractDefinition) -> Result<SelectorMap<'a>> {
        self.collect(contract, SelectorMap::new())
    }

    fn collect(
        &self,
        contract: &'a ContractDefinition,
        selectors: SelectorMap<'a>,
    ) -> Result<SelectorMap<'a>> {
        contract.base_ids().try_fold(selectors, |mut selectors, id| {
            let base = self.registry.require_contract(id)?;

            for variable in &base.state_variables {
                if let Some(selector) = variable.selector() {
                    trace!("{}: storage {} ({})", base.name, selector, variable.name);
                    selectors.merge_storage(selector);
                }
            }

            for function in &base.functions {
                if let Some(selector) = function.selector() {
                    trace!("{}: function {} ({})", base.name, selector, function.name);
                    selectors.merge_function(selector, &base.name, function);
                }
            }

            self.collect(base, selectors)
        })
    }
}
