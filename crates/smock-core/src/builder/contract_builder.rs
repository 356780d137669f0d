use crate::ast::{
    ContractDefinition, ContractKind, FunctionDefinition, NodeId, VariableDeclaration,
};

pub struct ContractBuilder {
    contract: ContractDefinition,
}

impl ContractBuilder {
    pub fn new(id: NodeId, name: &str) -> Self {
        Self {
            contract: ContractDefinition::new(id, name),
        }
    }

    pub fn abstract_contract(mut self) -> Self {
        self.contract.is_abstract = true;
        self
    }

    pub fn kind(mut self, kind: ContractKind) -> Self {
        self.contract.kind = kind;
        self
    }

    /// Appends bases to the linearization, most derived first.
    pub fn inherits(mut self, bases: impl IntoIterator<Item = NodeId>) -> Self {
        self.contract.linearized_base_contracts.extend(bases);
        self
    }

    pub fn state_variable(mut self, variable: VariableDeclaration) -> Self {
        self.contract.state_variables.push(variable);
        self
    }

    pub fn function(mut self, function: FunctionDefinition) -> Self {
        self.contract.functions.push(function);
        self
    }

    pub fn build(mut self) -> ContractDefinition {
        self.contract.stamp_scopes();
        self.contract
    }
}
