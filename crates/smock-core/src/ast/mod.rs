/*! Typed AST snapshot consumed by the mock generator.
 *
 * The compiler front end owns parsing, linearization and selector hashing. What reaches us is a
 * read-only snapshot of the declarations that matter for mocking, with those facts already
 * resolved. Nothing in the generator mutates these nodes.
 */

pub mod contract;
pub mod declaration;
pub mod types;

pub use contract::{
    AstSnapshot, ContractDefinition, ContractKind, ForeignSymbol, ImportDirective, SourceUnit,
    SymbolAlias,
};
pub use declaration::{
    DataLocation, Declaration, FunctionDefinition, FunctionKind, FunctionScope,
    FunctionVisibility, StateMutability, StateVisibility, VariableDeclaration,
    VariableMutability,
};
pub use types::{ReferencedDeclaration, TypeName};

pub type NodeId = i64;
