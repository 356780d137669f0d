use super::declaration::VariableDeclaration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-name node attached to a declaration.
///
/// Every variant keeps the compiler's type-description string verbatim (`struct Pool[]`,
/// `mapping(address => uint256)`, `contract IERC20`). Structured links such as the array base or
/// the declaration a user-defined name refers to are only present when the front end resolved
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename_all = "camelCase")]
pub enum TypeName {
    #[serde(rename_all = "camelCase")]
    Elementary { type_string: String },
    #[serde(rename_all = "camelCase")]
    UserDefined {
        type_string: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        referenced_declaration: Option<Box<ReferencedDeclaration>>,
    },
    #[serde(rename_all = "camelCase")]
    Array {
        type_string: String,
        base_type: Box<TypeName>,
    },
    #[serde(rename_all = "camelCase")]
    Mapping {
        type_string: String,
        key_type: Box<TypeName>,
        value_type: Box<TypeName>,
    },
}

impl TypeName {
    pub fn elementary(type_string: impl Into<String>) -> Self {
        TypeName::Elementary {
            type_string: type_string.into(),
        }
    }

    pub fn user_defined(
        type_string: impl Into<String>,
        referenced_declaration: Option<ReferencedDeclaration>,
    ) -> Self {
        TypeName::UserDefined {
            type_string: type_string.into(),
            referenced_declaration: referenced_declaration.map(Box::new),
        }
    }

    pub fn array(base_type: TypeName) -> Self {
        TypeName::Array {
            type_string: format!("{}[]", base_type.type_string()),
            base_type: Box::new(base_type),
        }
    }

    pub fn mapping(key_type: TypeName, value_type: TypeName) -> Self {
        TypeName::Mapping {
            type_string: format!(
                "mapping({} => {})",
                key_type.type_string(),
                value_type.type_string()
            ),
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }

    pub fn type_string(&self) -> &str {
        match self {
            TypeName::Elementary { type_string }
            | TypeName::UserDefined { type_string, .. }
            | TypeName::Array { type_string, .. }
            | TypeName::Mapping { type_string, .. } => type_string,
        }
    }

    pub fn is_struct(&self) -> bool {
        self.type_string().starts_with("struct")
    }

    pub fn is_array(&self) -> bool {
        self.type_string().contains("[]")
    }

    pub fn is_mapping(&self) -> bool {
        self.type_string().starts_with("mapping")
    }

    pub fn base_type(&self) -> Option<&TypeName> {
        match self {
            TypeName::Array { base_type, .. } => Some(base_type),
            _ => None,
        }
    }

    pub fn referenced_declaration(&self) -> Option<&ReferencedDeclaration> {
        match self {
            TypeName::UserDefined {
                referenced_declaration,
                ..
            } => referenced_declaration.as_deref(),
            _ => None,
        }
    }

    /// Underlying primitive when this name refers to a user-defined value type.
    pub fn value_type_underlying(&self) -> Option<&TypeName> {
        match self.referenced_declaration()? {
            ReferencedDeclaration::UserDefinedValueType {
                underlying_type, ..
            } => Some(underlying_type),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_string())
    }
}

/// Declaration a user-defined type name points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename_all = "camelCase")]
pub enum ReferencedDeclaration {
    Struct {
        name: String,
        #[serde(default)]
        members: Vec<VariableDeclaration>,
    },
    #[serde(rename_all = "camelCase")]
    UserDefinedValueType {
        name: String,
        underlying_type: TypeName,
    },
    Enum {
        name: String,
    },
    Contract {
        name: String,
    },
}

impl ReferencedDeclaration {
    pub fn name(&self) -> &str {
        match self {
            ReferencedDeclaration::Struct { name, .. }
            | ReferencedDeclaration::UserDefinedValueType { name, .. }
            | ReferencedDeclaration::Enum { name }
            | ReferencedDeclaration::Contract { name } => name,
        }
    }

    pub fn struct_members(&self) -> Option<&[VariableDeclaration]> {
        match self {
            ReferencedDeclaration::Struct { members, .. } => Some(members),
            _ => None,
        }
    }
}
