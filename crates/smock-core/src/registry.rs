use crate::{ast::ContractDefinition, ast::NodeId, Result, SmockError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Arena of every contract in a generation run, addressed by AST id.
///
/// Linearized base lists refer to contracts by id, so inheritance walks go through here instead
/// of holding references between contracts.
#[derive(Debug, Default, Clone)]
pub struct ContractRegistry {
    contracts: IndexMap<NodeId, ContractDefinition>,
    by_name: HashMap<String, NodeId>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contract(&mut self, contract: ContractDefinition) -> Result<()> {
        if self.contracts.contains_key(&contract.id) {
            return Err(SmockError::DuplicateContract(format!(
                "{} (id {})",
                contract.name, contract.id
            )));
        }
        self.by_name.insert(contract.name.clone(), contract.id);
        self.contracts.insert(contract.id, contract);
        Ok(())
    }

    pub fn with_contract(mut self, contract: ContractDefinition) -> Result<Self> {
        self.add_contract(contract)?;
        Ok(self)
    }

    pub fn get_contract(&self, id: NodeId) -> Option<&ContractDefinition> {
        self.contracts.get(&id)
    }

    /// Name lookup; when two contracts share a name the last one added wins.
    pub fn get_contract_by_name(&self, name: &str) -> Option<&ContractDefinition> {
        self.by_name.get(name).and_then(|id| self.contracts.get(id))
    }

    pub fn require_contract(&self, id: NodeId) -> Result<&ContractDefinition> {
        self.get_contract(id)
            .ok_or_else(|| SmockError::ContractNotFound(format!("id {}", id)))
    }

    pub fn contracts(&self) -> impl Iterator<Item = &ContractDefinition> {
        self.contracts.values()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
