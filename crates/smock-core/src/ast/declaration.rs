use super::contract::ImportDirective;
use super::types::TypeName;
use super::NodeId;
use crate::selector::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateVisibility {
    Public,
    Internal,
    Private,
    #[default]
    Default,
}

impl StateVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateVisibility::Public => "public",
            StateVisibility::Internal => "internal",
            StateVisibility::Private => "private",
            StateVisibility::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableMutability {
    #[default]
    Mutable,
    Immutable,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLocation {
    #[default]
    Default,
    Memory,
    Calldata,
    Storage,
}

impl DataLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataLocation::Default => "default",
            DataLocation::Memory => "memory",
            DataLocation::Calldata => "calldata",
            DataLocation::Storage => "storage",
        }
    }

    /// Location keyword kept in rendered parameter lists, with its trailing space.
    pub fn parameter_prefix(&self) -> &'static str {
        match self {
            DataLocation::Memory => "memory ",
            DataLocation::Calldata => "calldata ",
            DataLocation::Default | DataLocation::Storage => "",
        }
    }
}

/// Variable declaration: state variables, function parameters and struct members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    pub type_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<TypeName>,
    #[serde(default)]
    pub visibility: StateVisibility,
    #[serde(default)]
    pub mutability: VariableMutability,
    #[serde(default)]
    pub storage_location: DataLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_selector: Option<String>,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>, type_string: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            type_string: type_string.into(),
            type_name: None,
            visibility: StateVisibility::Default,
            mutability: VariableMutability::Mutable,
            storage_location: DataLocation::Default,
            function_selector: None,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.mutability == VariableMutability::Constant
    }

    pub fn is_immutable(&self) -> bool {
        self.mutability == VariableMutability::Immutable
    }

    pub fn is_internal(&self) -> bool {
        self.visibility == StateVisibility::Internal
    }

    pub fn selector(&self) -> Option<Selector> {
        self.function_selector
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| Selector::Hash(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionKind {
    #[default]
    Function,
    Constructor,
    Fallback,
    Receive,
    FreeFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionVisibility {
    External,
    Public,
    Internal,
    Private,
}

impl FunctionVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionVisibility::External => "external",
            FunctionVisibility::Public => "public",
            FunctionVisibility::Internal => "internal",
            FunctionVisibility::Private => "private",
        }
    }

    pub fn is_external_or_public(&self) -> bool {
        matches!(self, FunctionVisibility::External | FunctionVisibility::Public)
    }
}

impl fmt::Display for FunctionVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::NonPayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }

    pub fn is_view_or_pure(&self) -> bool {
        matches!(self, StateMutability::View | StateMutability::Pure)
    }
}

/// The contract a function is declared in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionScope {
    pub contract_name: String,
    #[serde(default)]
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: FunctionKind,
    pub visibility: FunctionVisibility,
    #[serde(default)]
    pub state_mutability: StateMutability,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    /// Absent means the function has a body, except inside an interface.
    #[serde(default = "default_implemented")]
    pub implemented: bool,
    #[serde(default)]
    pub parameters: Vec<VariableDeclaration>,
    #[serde(default)]
    pub return_parameters: Vec<VariableDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_selector: Option<String>,
    #[serde(default)]
    pub scope: FunctionScope,
}

fn default_implemented() -> bool {
    true
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, visibility: FunctionVisibility) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind: FunctionKind::Function,
            visibility,
            state_mutability: StateMutability::NonPayable,
            is_virtual: false,
            implemented: true,
            parameters: Vec::new(),
            return_parameters: Vec::new(),
            function_selector: None,
            scope: FunctionScope::default(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == FunctionKind::Constructor
    }

    /// Selector identity: the constructor sentinel for constructors, the precomputed hash
    /// otherwise.
    pub fn selector(&self) -> Option<Selector> {
        if self.is_constructor() {
            return Some(Selector::Constructor);
        }
        self.function_selector
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| Selector::Hash(s.to_string()))
    }
}

/// A declaration the generator may produce mock code for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    StateVariable(&'a VariableDeclaration),
    Function(&'a FunctionDefinition),
    Import(&'a ImportDirective),
}

impl<'a> Declaration<'a> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::StateVariable(_) => "VariableDeclaration",
            Declaration::Function(_) => "FunctionDefinition",
            Declaration::Import(_) => "ImportDirective",
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Declaration::StateVariable(variable) => &variable.name,
            Declaration::Function(function) => &function.name,
            Declaration::Import(import) => &import.absolute_path,
        }
    }

    pub fn selector(&self) -> Option<Selector> {
        match self {
            Declaration::StateVariable(variable) => variable.selector(),
            Declaration::Function(function) => function.selector(),
            Declaration::Import(_) => None,
        }
    }
}
