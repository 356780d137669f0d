use crate::category::MockCategory;
use crate::filter::is_smockable;
use crate::orchestrator::{render_node_mock, synthesize_missing};
use smock_core::{
    ContractDefinition, ContractKind, ContractRegistry, Declaration, MockContract,
    MockRenderer, MockSourceUnit, Result, SmockError, SourceUnit,
};
use tracing::{debug, info};

/// Assembles whole mock contracts from per-declaration renders.
pub struct MockGenerator<'a> {
    registry: &'a ContractRegistry,
    renderer: &'a dyn MockRenderer,
}

impl<'a> MockGenerator<'a> {
    pub fn new(registry: &'a ContractRegistry, renderer: &'a dyn MockRenderer) -> Self {
        Self { registry, renderer }
    }

    /// `None` for interfaces and libraries, which are never mocked.
    pub fn generate(&self, contract: &ContractDefinition) -> Result<Option<MockContract>> {
        if contract.kind != ContractKind::Contract {
            debug!("Skipping {} {}", kind_name(contract.kind), contract.name);
            return Ok(None);
        }

        let mut mock = MockContract::new(&contract.name);

        if let Some(constructor) = contract.constructor() {
            let declaration = Declaration::Function(constructor);
            if is_smockable(declaration) {
                mock.constructor = Some(render_node_mock(declaration, None, self.renderer)?);
            }
        }

        for variable in &contract.state_variables {
            let declaration = Declaration::StateVariable(variable);
            if is_smockable(declaration) {
                self.push_member(&mut mock, declaration)?;
            }
        }

        for function in contract.functions.iter().filter(|f| !f.is_constructor()) {
            let declaration = Declaration::Function(function);
            if is_smockable(declaration) && MockCategory::of(declaration, None).is_mock() {
                self.push_member(&mut mock, declaration)?;
            }
        }

        if contract.is_abstract {
            let synthesized = synthesize_missing(contract, self.registry, self.renderer)?;
            if !synthesized.is_empty() {
                mock.members.push(synthesized);
            }
        }

        info!(
            "Generated mock for {} ({} members)",
            contract.name,
            mock.members.len()
        );
        Ok(Some(mock))
    }

    pub fn generate_by_name(&self, name: &str) -> Result<Option<MockContract>> {
        let contract = self
            .registry
            .get_contract_by_name(name)
            .ok_or_else(|| SmockError::ContractNotFound(name.to_string()))?;
        self.generate(contract)
    }

    pub fn generate_source_unit(&self, unit: &SourceUnit) -> Result<MockSourceUnit> {
        let imports = unit
            .imports
            .iter()
            .map(|import| render_node_mock(Declaration::Import(import), None, self.renderer))
            .collect::<Result<Vec<_>>>()?;

        let mut contracts = Vec::new();
        for contract in &unit.contracts {
            if let Some(mock) = self.generate(contract)? {
                contracts.push(mock);
            }
        }

        Ok(MockSourceUnit {
            absolute_path: unit.absolute_path.clone(),
            imports,
            contracts,
        })
    }

    fn push_member(&self, mock: &mut MockContract, declaration: Declaration<'_>) -> Result<()> {
        let rendered = render_node_mock(declaration, None, self.renderer)?;
        if !rendered.is_empty() {
            mock.members.push(rendered);
        }
        Ok(())
    }
}

fn kind_name(kind: ContractKind) -> &'static str {
    match kind {
        ContractKind::Contract => "contract",
        ContractKind::Interface => "interface",
        ContractKind::Library => "library",
    }
}
