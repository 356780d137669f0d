/*! Core data model for mock contract generation.
 *
 * A mock mirrors the externally observable surface of a contract: its state variables, its
 * external and public functions, its internal virtual hooks and its constructor. This crate
 * holds the typed AST snapshot those mocks are derived from, the selector maps produced while
 * resolving inheritance, and the flat context records handed to renderers.
 */

pub mod ast;
pub mod builder;
pub mod context;
pub mod mock;
pub mod registry;
pub mod render;
pub mod selector;

pub use ast::{
    AstSnapshot, ContractDefinition, ContractKind, DataLocation, Declaration, ForeignSymbol,
    FunctionDefinition, FunctionKind, FunctionScope, FunctionVisibility, ImportDirective,
    NodeId, ReferencedDeclaration, SourceUnit, StateMutability, StateVisibility, SymbolAlias,
    TypeName, VariableDeclaration, VariableMutability,
};
pub use builder::{ContractBuilder, FunctionBuilder, VariableBuilder};
pub use context::{
    ArrayVariableContext, ConstructorContext, ExternalFunctionContext, ImportContext,
    InternalFunctionContext, MappingVariableContext, MockContext, StateVariableContext,
};
pub use mock::{MockContract, MockSourceUnit};
pub use registry::ContractRegistry;
pub use render::{JsonRenderer, MockRenderer};
pub use selector::{Selector, SelectorEntry, SelectorMap, CONSTRUCTOR_SELECTOR};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmockError {
    #[error("Invalid node kind: expected {expected}, got {actual}")]
    InvalidNodeKind { expected: String, actual: String },
    #[error("Contract not found: {0}")]
    ContractNotFound(String),
    #[error("Duplicate contract: {0}")]
    DuplicateContract(String),
    #[error("Missing required field: {field} in {node_type}")]
    MissingField { field: String, node_type: String },
    #[error("Render error: {0}")]
    RenderError(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmockError {
    pub fn invalid_node(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        SmockError::InvalidNodeKind {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmockError>;

#[cfg(test)]
mod tests;
