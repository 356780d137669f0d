use super::declaration::{Declaration, FunctionDefinition, VariableDeclaration};
use super::NodeId;
use crate::{registry::ContractRegistry, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    #[default]
    Contract,
    Interface,
    Library,
}

/// Deserialized contracts always go through [`ContractDefinition::stamp_scopes`], so every
/// function agrees with the contract that encloses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawContractDefinition")]
pub struct ContractDefinition {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub kind: ContractKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// C3 linearization as produced by the compiler, most derived first (the contract itself).
    #[serde(default)]
    pub linearized_base_contracts: Vec<NodeId>,
    #[serde(default)]
    pub state_variables: Vec<VariableDeclaration>,
    #[serde(default)]
    pub functions: Vec<FunctionDefinition>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContractDefinition {
    id: NodeId,
    name: String,
    #[serde(default)]
    kind: ContractKind,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    linearized_base_contracts: Vec<NodeId>,
    #[serde(default)]
    state_variables: Vec<VariableDeclaration>,
    #[serde(default)]
    functions: Vec<FunctionDefinition>,
}

impl From<RawContractDefinition> for ContractDefinition {
    fn from(raw: RawContractDefinition) -> Self {
        let mut contract = ContractDefinition {
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            is_abstract: raw.is_abstract,
            linearized_base_contracts: raw.linearized_base_contracts,
            state_variables: raw.state_variables,
            functions: raw.functions,
        };
        contract.stamp_scopes();
        contract
    }
}

impl ContractDefinition {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ContractKind::Contract,
            is_abstract: false,
            linearized_base_contracts: vec![id],
            state_variables: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Copies the contract's name and `abstract` flag into every function's scope. Interface
    /// functions never have a body, whatever the snapshot says.
    pub fn stamp_scopes(&mut self) {
        for function in &mut self.functions {
            function.scope.contract_name = self.name.clone();
            function.scope.is_abstract = self.is_abstract;
            if self.kind == ContractKind::Interface {
                function.implemented = false;
            }
        }
    }

    pub fn constructor(&self) -> Option<&FunctionDefinition> {
        self.functions.iter().find(|f| f.is_constructor())
    }

    /// Bases in linearization order, without the contract itself.
    pub fn base_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.linearized_base_contracts
            .iter()
            .copied()
            .filter(move |id| *id != self.id)
    }

    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'_>> {
        self.state_variables
            .iter()
            .map(Declaration::StateVariable)
            .chain(self.functions.iter().map(Declaration::Function))
    }
}

/// Foreign side of an import alias: the imported symbol's name, or its node id when the front
/// end could not name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForeignSymbol {
    Name(String),
    Id(NodeId),
}

impl fmt::Display for ForeignSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForeignSymbol::Name(name) => f.write_str(name),
            ForeignSymbol::Id(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAlias {
    pub foreign: ForeignSymbol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDirective {
    pub absolute_path: String,
    #[serde(default)]
    pub symbol_aliases: Vec<SymbolAlias>,
}

impl ImportDirective {
    pub fn new(absolute_path: impl Into<String>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            symbol_aliases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    pub absolute_path: String,
    #[serde(default)]
    pub imports: Vec<ImportDirective>,
    #[serde(default)]
    pub contracts: Vec<ContractDefinition>,
}

impl SourceUnit {
    pub fn new(absolute_path: impl Into<String>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            imports: Vec::new(),
            contracts: Vec::new(),
        }
    }
}

/// Everything the front end handed over for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstSnapshot {
    #[serde(default)]
    pub source_units: Vec<SourceUnit>,
}

impl AstSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn registry(&self) -> Result<ContractRegistry> {
        let mut registry = ContractRegistry::new();
        for unit in &self.source_units {
            for contract in &unit.contracts {
                registry.add_contract(contract.clone())?;
            }
        }
        Ok(registry)
    }
}
