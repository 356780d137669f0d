use smock_core::TypeName;

const QUALIFIERS: [&str; 3] = ["contract ", "struct ", "enum "];
const REFERENCE_TYPES: [&str; 4] = ["string", "bytes", "mapping", "struct"];
const LOCATIONS: [&str; 3] = [" memory", " calldata", " storage"];

/// Rewrites compiler type-description strings into something that can be pasted into a
/// declaration. None of these operations validate their input.
pub struct TypeNormalizer;

impl TypeNormalizer {
    /// `struct Pool` -> `Pool`, `contract IERC20` -> `IERC20`.
    pub fn strip_qualifiers(type_string: &str) -> String {
        QUALIFIERS
            .iter()
            .find_map(|qualifier| type_string.strip_prefix(qualifier))
            .unwrap_or(type_string)
            .to_string()
    }

    /// Appends ` memory` to reference types that need an explicit location.
    pub fn explicit_storage(type_string: &str) -> String {
        if LOCATIONS.iter().any(|location| type_string.ends_with(location)) {
            return type_string.to_string();
        }

        let is_reference = REFERENCE_TYPES
            .iter()
            .any(|word| starts_with_word(type_string, word));

        if is_reference || type_string.contains("[]") {
            format!("{} memory", type_string)
        } else {
            type_string.to_string()
        }
    }

    pub fn normalize(type_string: &str) -> String {
        Self::strip_qualifiers(&Self::explicit_storage(type_string))
    }

    /// Rebuilds a type-name tree from a bare type string. Used when the snapshot carries no
    /// structured type for a declaration; user-defined names come back unresolved.
    pub fn parse_type_string(type_string: &str) -> TypeName {
        let type_string = type_string.trim();

        if let Some(base) = array_base(type_string) {
            return TypeName::Array {
                type_string: type_string.to_string(),
                base_type: Box::new(Self::parse_type_string(base)),
            };
        }

        if let Some((key, value)) = mapping_parts(type_string) {
            return TypeName::Mapping {
                type_string: type_string.to_string(),
                key_type: Box::new(Self::parse_type_string(key)),
                value_type: Box::new(Self::parse_type_string(value)),
            };
        }

        if QUALIFIERS.iter().any(|q| type_string.starts_with(q)) {
            TypeName::user_defined(type_string, None)
        } else {
            TypeName::elementary(type_string)
        }
    }
}

fn starts_with_word(type_string: &str, word: &str) -> bool {
    type_string.strip_prefix(word).is_some_and(|rest| {
        !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// `T[]` or `T[N]` -> `T`.
fn array_base(type_string: &str) -> Option<&str> {
    let inner = type_string.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let length = &inner[open + 1..];
    if length.chars().all(|c| c.is_ascii_digit()) && open > 0 {
        Some(&inner[..open])
    } else {
        None
    }
}

/// Splits `mapping(K => V)` at its top-level arrow.
fn mapping_parts(type_string: &str) -> Option<(&str, &str)> {
    let inner = type_string.strip_prefix("mapping(")?.strip_suffix(')')?;

    let mut depth = 0usize;
    for (index, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '=' if depth == 0 && inner[index..].starts_with("=>") => {
                return Some((inner[..index].trim(), inner[index + 2..].trim()));
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_qualifiers() {
        assert_eq!(TypeNormalizer::strip_qualifiers("struct Pool"), "Pool");
        assert_eq!(TypeNormalizer::strip_qualifiers("contract IERC20"), "IERC20");
        assert_eq!(TypeNormalizer::strip_qualifiers("enum Status[]"), "Status[]");
        assert_eq!(TypeNormalizer::strip_qualifiers("uint256"), "uint256");
    }

    #[test]
    fn test_explicit_storage_reference_types() {
        assert_eq!(TypeNormalizer::explicit_storage("string"), "string memory");
        assert_eq!(TypeNormalizer::explicit_storage("bytes"), "bytes memory");
        assert_eq!(TypeNormalizer::explicit_storage("struct S"), "struct S memory");
        assert_eq!(TypeNormalizer::explicit_storage("uint256[]"), "uint256[] memory");
        assert_eq!(
            TypeNormalizer::explicit_storage("mapping(address => uint256)"),
            "mapping(address => uint256) memory"
        );
    }

    #[test]
    fn test_explicit_storage_value_types() {
        assert_eq!(TypeNormalizer::explicit_storage("bytes32"), "bytes32");
        assert_eq!(TypeNormalizer::explicit_storage("uint256"), "uint256");
        assert_eq!(TypeNormalizer::explicit_storage("address"), "address");
        assert_eq!(TypeNormalizer::explicit_storage("stringent"), "stringent");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for type_string in ["string", "struct S", "uint8[3]", "bytes32", "contract IERC20"] {
            let once = TypeNormalizer::normalize(type_string);
            assert_eq!(TypeNormalizer::normalize(&once), once);
        }
        assert_eq!(TypeNormalizer::normalize("struct S"), "S memory");
        assert_eq!(TypeNormalizer::normalize("struct S[]"), "S[] memory");
    }

    #[test]
    fn test_parse_nested_mapping() {
        let parsed = TypeNormalizer::parse_type_string(
            "mapping(uint256 => mapping(address => struct Pool[]))",
        );

        match parsed {
            TypeName::Mapping {
                key_type,
                value_type,
                ..
            } => {
                assert_eq!(key_type.type_string(), "uint256");
                assert_eq!(value_type.type_string(), "mapping(address => struct Pool[])");
                match *value_type {
                    TypeName::Mapping { value_type, .. } => {
                        let base = value_type.base_type().unwrap();
                        assert_eq!(base.type_string(), "struct Pool");
                        assert!(base.referenced_declaration().is_none());
                    }
                    other => panic!("expected inner mapping, got {:?}", other),
                }
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fixed_and_malformed() {
        let fixed = TypeNormalizer::parse_type_string("uint8[3]");
        assert_eq!(fixed.base_type().unwrap().type_string(), "uint8");

        assert_eq!(
            TypeNormalizer::parse_type_string("mapping(oops)"),
            TypeName::elementary("mapping(oops)")
        );
        assert_eq!(
            TypeNormalizer::parse_type_string("[]"),
            TypeName::elementary("[]")
        );
    }
}
