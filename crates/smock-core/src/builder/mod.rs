/*! Fluent API for assembling AST snapshots by hand.
 *
 * Front ends normally hand us a deserialized snapshot, but tests and embedders often need a
 * handful of contracts without writing JSON. The builders fill in the bookkeeping (function
 * scopes, linearization heads, selectors) so callers only state what differs from the defaults.
 */

pub mod contract_builder;
pub mod function_builder;
pub mod variable_builder;

pub use contract_builder::ContractBuilder;
pub use function_builder::FunctionBuilder;
pub use variable_builder::VariableBuilder;
