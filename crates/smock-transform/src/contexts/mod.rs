/*! Context builders, one per mock category.
 *
 * Each builder is a pure function from a declaration (plus whatever the inheritance walk learned
 * about it) to the record its partial is rendered from. Builders check their own preconditions
 * and fail with `InvalidNodeKind` rather than trusting the dispatcher.
 */

pub mod array_variable;
pub mod constructor;
pub mod external_function;
pub mod import;
pub mod internal_function;
pub mod mapping_variable;
pub mod parameters;
pub mod state_variable;
pub mod struct_fields;

pub use array_variable::array_variable_context;
pub use constructor::constructor_context;
pub use external_function::external_function_context;
pub use import::import_context;
pub use internal_function::internal_function_context;
pub use mapping_variable::mapping_variable_context;
pub use parameters::{extract_parameters, extract_return_parameters, ExtractedParameters};
pub use state_variable::state_variable_context;
pub use struct_fields::{has_nested_mappings, struct_field_names};

use crate::category::MockCategory;
use crate::resolution::ResolutionContext;
use crate::type_normalizer::TypeNormalizer;
use smock_core::{Declaration, MockContext, Result, SmockError, TypeName, VariableDeclaration};
use std::borrow::Cow;

/// Builds the context for whatever category the declaration falls into. `Ok(None)` means the
/// declaration has no mock.
pub fn build_context(
    declaration: Declaration<'_>,
    resolution: Option<&ResolutionContext<'_>>,
) -> Result<Option<MockContext>> {
    let context = match (MockCategory::of(declaration, resolution), declaration) {
        (MockCategory::NoMock, _) => return Ok(None),
        (MockCategory::MappingStateVariable, Declaration::StateVariable(variable)) => {
            MockContext::MappingStateVariable(mapping_variable_context(variable))
        }
        (MockCategory::ArrayStateVariable, Declaration::StateVariable(variable)) => {
            MockContext::ArrayStateVariable(array_variable_context(variable))
        }
        (MockCategory::StateVariable, Declaration::StateVariable(variable)) => {
            MockContext::StateVariable(state_variable_context(variable))
        }
        (MockCategory::Constructor, Declaration::Function(function)) => {
            MockContext::Constructor(constructor_context(function, resolution)?)
        }
        (MockCategory::ExternalOrPublicFunction, Declaration::Function(function)) => {
            MockContext::ExternalOrPublicFunction(external_function_context(function, resolution)?)
        }
        (MockCategory::InternalFunction, Declaration::Function(function)) => {
            MockContext::InternalFunction(internal_function_context(function, resolution)?)
        }
        (MockCategory::Import, Declaration::Import(import)) => {
            MockContext::Import(import_context(import))
        }
        (category, declaration) => {
            return Err(SmockError::invalid_node(
                format!("{:?}", category),
                declaration.kind_name(),
            ))
        }
    };
    Ok(Some(context))
}

/// The declaration's structured type, or one parsed from its type string.
pub(crate) fn resolved_type_name(variable: &VariableDeclaration) -> Cow<'_, TypeName> {
    match &variable.type_name {
        Some(type_name) => Cow::Borrowed(type_name),
        None => Cow::Owned(TypeNormalizer::parse_type_string(&variable.type_string)),
    }
}

/// One array layer off, falling back to the parsed type string when the node has no base link.
pub(crate) fn array_element(type_name: &TypeName) -> Cow<'_, TypeName> {
    match type_name.base_type() {
        Some(base) => Cow::Borrowed(base),
        None => match TypeNormalizer::parse_type_string(type_name.type_string()) {
            TypeName::Array { base_type, .. } => Cow::Owned(*base_type),
            other => Cow::Owned(other),
        },
    }
}
