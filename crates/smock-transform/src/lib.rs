/*! Derive mock contexts from a typed contract AST.
 *
 * A mock has to override exactly the members the compiler will accept: every inherited function
 * that is still unimplemented, with an override list naming each base that declares it, and a
 * constructor that forwards to every base constructor. This crate resolves those facts across
 * the inheritance graph and turns each declaration into a flat record a renderer can consume.
 */

pub mod category;
pub mod contexts;
pub mod filter;
pub mod generator;
pub mod orchestrator;
pub mod resolution;
pub mod resolver;
pub mod type_normalizer;

pub use category::MockCategory;
pub use contexts::build_context;
pub use filter::is_smockable;
pub use generator::MockGenerator;
pub use orchestrator::{render_node_mock, synthesize_missing};
pub use resolution::ResolutionContext;
pub use resolver::SelectorResolver;
pub use type_normalizer::TypeNormalizer;

#[cfg(test)]
mod tests;
