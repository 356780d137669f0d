/*! Solidity mock generation for Foundry test suites.
 *
 * Single import for the whole pipeline: load an AST snapshot, resolve inheritance into selector
 * maps, derive per-declaration mock contexts and render them into compilable mock files.
 */

pub use smock_core as core;
pub use smock_emit as emit;
pub use smock_transform as transform;

pub use smock_core::{
    AstSnapshot, ContractDefinition, ContractRegistry, Declaration, MockContext, MockContract,
    MockRenderer, MockSourceUnit, SmockError,
};

pub use smock_emit::{EmitterConfig, MockFileEmitter, SolidityEmitter};

pub use smock_transform::{MockCategory, MockGenerator, SelectorResolver};

use anyhow::{Context, Result};
use smock_emit::Emitter;

/// One generated mock file, keyed by the source unit it shadows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFile {
    pub source_path: String,
    pub contents: String,
}

/// Renders a mock file for every source unit that yields at least one mock.
pub fn generate_mock_files(snapshot: &AstSnapshot, config: &EmitterConfig) -> Result<Vec<MockFile>> {
    let registry = snapshot.registry()?;
    let renderer = SolidityEmitter::with_config(config.clone());
    let generator = MockGenerator::new(&registry, &renderer);
    let file_emitter = MockFileEmitter::new(config.clone());

    let mut files = Vec::new();
    for unit in &snapshot.source_units {
        let mocked = generator
            .generate_source_unit(unit)
            .with_context(|| format!("Failed to generate mocks for {}", unit.absolute_path))?;
        if mocked.is_empty() {
            continue;
        }
        files.push(MockFile {
            source_path: unit.absolute_path.clone(),
            contents: file_emitter.emit_to_string(&mocked)?,
        });
    }
    Ok(files)
}

/// Renders the mock file for a single contract, keeping its source unit's imports.
pub fn generate_mock_file(
    snapshot: &AstSnapshot,
    config: &EmitterConfig,
    contract_name: &str,
) -> Result<Option<MockFile>> {
    let unit = snapshot
        .source_units
        .iter()
        .find(|unit| unit.contracts.iter().any(|c| c.name == contract_name))
        .ok_or_else(|| SmockError::ContractNotFound(contract_name.to_string()))?;

    let registry = snapshot.registry()?;
    let renderer = SolidityEmitter::with_config(config.clone());
    let generator = MockGenerator::new(&registry, &renderer);

    let mut mocked = generator.generate_source_unit(unit)?;
    mocked
        .contracts
        .retain(|mock| mock.contract_name == contract_name);
    if mocked.is_empty() {
        return Ok(None);
    }

    let contents = MockFileEmitter::new(config.clone()).emit_to_string(&mocked)?;
    Ok(Some(MockFile {
        source_path: unit.absolute_path.clone(),
        contents,
    }))
}
