use crate::type_normalizer::TypeNormalizer;
use smock_core::VariableDeclaration;

/// Rendered forms of a parameter list, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedParameters {
    /// `"{type} {location }{name}"`, ready for a declaration.
    pub declarations: Vec<String>,
    /// ABI types, with user-defined value types replaced by their underlying type.
    pub types: Vec<String>,
    pub names: Vec<String>,
    /// Types with an explicit data location, for local declarations.
    pub explicit_types: Vec<String>,
}

impl ExtractedParameters {
    pub fn joined(&self) -> String {
        self.declarations.join(", ")
    }
}

pub fn extract_parameters(parameters: &[VariableDeclaration]) -> ExtractedParameters {
    extract(parameters, "_param")
}

pub fn extract_return_parameters(parameters: &[VariableDeclaration]) -> ExtractedParameters {
    extract(parameters, "_returnParam")
}

fn extract(parameters: &[VariableDeclaration], unnamed_prefix: &str) -> ExtractedParameters {
    let mut extracted = ExtractedParameters::default();

    for (index, parameter) in parameters.iter().enumerate() {
        let name = if parameter.name.is_empty() {
            format!("{}{}", unnamed_prefix, index)
        } else {
            parameter.name.clone()
        };
        let type_string = TypeNormalizer::strip_qualifiers(&parameter.type_string);

        extracted.declarations.push(format!(
            "{} {}{}",
            type_string,
            parameter.storage_location.parameter_prefix(),
            name
        ));
        extracted.types.push(abi_type(parameter));
        extracted
            .explicit_types
            .push(TypeNormalizer::normalize(&parameter.type_string));
        extracted.names.push(name);
    }

    extracted
}

fn abi_type(parameter: &VariableDeclaration) -> String {
    let underlying = parameter
        .type_name
        .as_ref()
        .and_then(|type_name| type_name.value_type_underlying());

    match underlying {
        Some(underlying) => TypeNormalizer::strip_qualifiers(underlying.type_string()),
        None => TypeNormalizer::strip_qualifiers(&parameter.type_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smock_core::{DataLocation, ReferencedDeclaration, TypeName, VariableBuilder};

    #[test]
    fn test_unnamed_parameters_get_positional_names() {
        let parameters = vec![
            VariableBuilder::unnamed("uint256").build(),
            VariableBuilder::new("to", "address").build(),
            VariableBuilder::unnamed("bool").build(),
        ];

        assert_eq!(
            extract_parameters(&parameters).names,
            vec!["_param0", "to", "_param2"]
        );
        assert_eq!(
            extract_return_parameters(&parameters).names,
            vec!["_returnParam0", "to", "_returnParam2"]
        );
    }

    #[test]
    fn test_only_memory_and_calldata_are_kept() {
        let parameters = vec![
            VariableBuilder::new("a", "uint256")
                .location(DataLocation::Storage)
                .build(),
            VariableBuilder::new("b", "string")
                .location(DataLocation::Memory)
                .build(),
            VariableBuilder::new("c", "bytes")
                .location(DataLocation::Calldata)
                .build(),
            VariableBuilder::new("d", "struct Pool")
                .location(DataLocation::Memory)
                .build(),
        ];

        let extracted = extract_parameters(&parameters);

        assert_eq!(
            extracted.declarations,
            vec![
                "uint256 a",
                "string memory b",
                "bytes calldata c",
                "Pool memory d"
            ]
        );
        assert_eq!(
            extracted.explicit_types,
            vec!["uint256", "string memory", "bytes memory", "Pool memory"]
        );
    }

    #[test]
    fn test_value_type_alias_uses_underlying_abi_type() {
        let alias = TypeName::user_defined(
            "Price",
            Some(ReferencedDeclaration::UserDefinedValueType {
                name: "Price".to_string(),
                underlying_type: TypeName::elementary("uint128"),
            }),
        );
        let parameters = vec![VariableBuilder::typed("price", alias).build()];

        let extracted = extract_parameters(&parameters);

        assert_eq!(extracted.types, vec!["uint128"]);
        assert_eq!(extracted.declarations, vec!["Price price"]);
    }
}
