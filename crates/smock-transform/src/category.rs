use crate::resolution::{effective_visibility, ResolutionContext};
use smock_core::{Declaration, FunctionKind, FunctionVisibility};
use tracing::debug;

/// Which kind of mock a declaration turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockCategory {
    MappingStateVariable,
    ArrayStateVariable,
    StateVariable,
    Constructor,
    ExternalOrPublicFunction,
    InternalFunction,
    Import,
    /// Fallback, receive and free functions, plus internal functions a derived contract
    /// cannot override.
    NoMock,
}

impl MockCategory {
    pub fn of(declaration: Declaration<'_>, resolution: Option<&ResolutionContext<'_>>) -> Self {
        let category = match declaration {
            Declaration::StateVariable(variable) => {
                if variable.type_string.starts_with("mapping") {
                    MockCategory::MappingStateVariable
                } else if variable.type_string.contains("[]") {
                    MockCategory::ArrayStateVariable
                } else {
                    MockCategory::StateVariable
                }
            }
            Declaration::Function(function) => match function.kind {
                FunctionKind::Constructor => MockCategory::Constructor,
                FunctionKind::Fallback | FunctionKind::Receive | FunctionKind::FreeFunction => {
                    MockCategory::NoMock
                }
                FunctionKind::Function => match effective_visibility(function, resolution) {
                    FunctionVisibility::External | FunctionVisibility::Public => {
                        MockCategory::ExternalOrPublicFunction
                    }
                    FunctionVisibility::Internal if function.is_virtual => {
                        MockCategory::InternalFunction
                    }
                    FunctionVisibility::Internal | FunctionVisibility::Private => {
                        MockCategory::NoMock
                    }
                },
            },
            Declaration::Import(_) => MockCategory::Import,
        };

        if category == MockCategory::NoMock {
            debug!(
                "No mock for {} '{}'",
                declaration.kind_name(),
                declaration.name()
            );
        }
        category
    }

    pub fn partial_name(&self) -> Option<&'static str> {
        match self {
            MockCategory::MappingStateVariable => Some("mapping-state-variable"),
            MockCategory::ArrayStateVariable => Some("array-state-variable"),
            MockCategory::StateVariable => Some("state-variable"),
            MockCategory::Constructor => Some("constructor"),
            MockCategory::ExternalOrPublicFunction => Some("external-or-public-function"),
            MockCategory::InternalFunction => Some("internal-function"),
            MockCategory::Import => Some("import"),
            MockCategory::NoMock => None,
        }
    }

    pub fn is_mock(&self) -> bool {
        *self != MockCategory::NoMock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smock_core::{FunctionBuilder, SelectorMap, VariableBuilder};

    fn variable_category(type_string: &str) -> MockCategory {
        let variable = VariableBuilder::new("v", type_string).build();
        MockCategory::of(Declaration::StateVariable(&variable), None)
    }

    #[test]
    fn test_variable_dispatch_by_type_string() {
        assert_eq!(
            variable_category("mapping(address => uint256[])"),
            MockCategory::MappingStateVariable
        );
        assert_eq!(
            variable_category("struct Pool[]"),
            MockCategory::ArrayStateVariable
        );
        assert_eq!(variable_category("uint8[3]"), MockCategory::StateVariable);
        assert_eq!(variable_category("struct Pool"), MockCategory::StateVariable);
    }

    #[test]
    fn test_function_dispatch() {
        let cases = [
            (FunctionBuilder::constructor().build(), MockCategory::Constructor),
            (
                FunctionBuilder::new("", FunctionVisibility::External)
                    .kind(FunctionKind::Fallback)
                    .build(),
                MockCategory::NoMock,
            ),
            (
                FunctionBuilder::new("", FunctionVisibility::External)
                    .kind(FunctionKind::Receive)
                    .build(),
                MockCategory::NoMock,
            ),
            (
                FunctionBuilder::new("transfer", FunctionVisibility::Public).build(),
                MockCategory::ExternalOrPublicFunction,
            ),
            (
                FunctionBuilder::new("_hook", FunctionVisibility::Internal)
                    .virtual_fn()
                    .build(),
                MockCategory::InternalFunction,
            ),
            (
                FunctionBuilder::new("_helper", FunctionVisibility::Internal).build(),
                MockCategory::NoMock,
            ),
            (
                FunctionBuilder::new("_secret", FunctionVisibility::Private)
                    .virtual_fn()
                    .build(),
                MockCategory::NoMock,
            ),
        ];

        for (function, expected) in &cases {
            assert_eq!(
                MockCategory::of(Declaration::Function(function), None),
                *expected,
                "{}",
                function.name
            );
        }
    }

    #[test]
    fn test_forced_visibility_wins() {
        let selectors = SelectorMap::new();
        let resolution = ResolutionContext::synthesized(&selectors);
        let hook = FunctionBuilder::new("_hook", FunctionVisibility::Internal)
            .virtual_fn()
            .build();

        assert_eq!(
            MockCategory::of(Declaration::Function(&hook), Some(&resolution)),
            MockCategory::ExternalOrPublicFunction
        );
        assert_eq!(MockCategory::NoMock.partial_name(), None);
        assert!(!MockCategory::NoMock.is_mock());
    }
}
