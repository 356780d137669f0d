/*! Render mock contexts as Solidity.
 *
 * Mocks end up in a Foundry test tree next to the contracts they shadow, so the output has to
 * compile as-is: explicit data locations, exact override lists, and `vm.mockCall` wiring that
 * matches each getter's ABI signature. Every partial renders independently; the file emitter
 * stitches them into one source unit per mocked file.
 */

pub mod config;
pub mod emitter;
pub mod mock_file;
pub mod solidity_emitter;

pub use config::{EmitterConfig, IndentStyle};
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
pub use mock_file::MockFileEmitter;
pub use solidity_emitter::SolidityEmitter;
