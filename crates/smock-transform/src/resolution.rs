use smock_core::{FunctionDefinition, FunctionVisibility, Selector, SelectorMap};

/// Facts from the inheritance walk that travel alongside a declaration without being written
/// into the AST.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub selectors: &'a SelectorMap<'a>,
    /// Replaces the declared visibility when set.
    pub visibility: Option<FunctionVisibility>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(selectors: &'a SelectorMap<'a>) -> Self {
        Self {
            selectors,
            visibility: None,
        }
    }

    /// Context for an inherited member re-declared in a mock, which is always public.
    pub fn synthesized(selectors: &'a SelectorMap<'a>) -> Self {
        Self {
            selectors,
            visibility: Some(FunctionVisibility::Public),
        }
    }

    pub fn overrides_for(&self, selector: &Selector) -> Option<String> {
        self.selectors.overrides_for(selector)
    }
}

pub(crate) fn effective_visibility(
    function: &FunctionDefinition,
    resolution: Option<&ResolutionContext<'_>>,
) -> FunctionVisibility {
    resolution
        .and_then(|r| r.visibility)
        .unwrap_or(function.visibility)
}
