use smock_core::{Declaration, StateVisibility};

/// Whether a declaration gets any generated counterpart at all.
///
/// Constants, immutables and private state cannot be written from a derived contract, and an
/// abstract contract's constructor is reached through the synthesized constructor instead.
pub fn is_smockable(declaration: Declaration<'_>) -> bool {
    match declaration {
        Declaration::StateVariable(variable) => {
            !(variable.is_constant()
                || variable.is_immutable()
                || variable.visibility == StateVisibility::Private)
        }
        Declaration::Function(function) => {
            !(function.is_constructor() && function.scope.is_abstract)
        }
        Declaration::Import(_) => false,
    }
}
