use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use anyhow::Result;
use smock_core::{MockContract, MockSourceUnit};
use std::io::Write;

/// Wraps the rendered mocks of one source unit into a compilable Solidity file.
#[derive(Debug, Clone, Default)]
pub struct MockFileEmitter {
    config: EmitterConfig,
}

impl MockFileEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Standalone file holding the `SmockHelper` deployment contract.
    pub fn helper_file(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut context = self.initial_context(&MockSourceUnit::default());
        self.write_header(&mut buffer, &context)?;
        EmitHelper::write_blank(&mut buffer)?;
        self.write_helper(&mut buffer, &mut context)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn write_header<W: Write>(&self, writer: &mut W, context: &EmitContext) -> EmitResult {
        EmitHelper::write_comment(
            writer,
            context,
            &format!("SPDX-License-Identifier: {}", self.config.license),
        )?;
        EmitHelper::write_line(writer, context, &format!("pragma solidity {};", self.config.pragma))?;
        EmitHelper::write_blank(writer)?;
        EmitHelper::write_line(
            writer,
            context,
            &format!("import {{Test}} from '{}';", self.config.test_import),
        )
    }

    fn write_contract<W: Write>(
        &self,
        mock: &MockContract,
        writer: &mut W,
        context: &EmitContext,
    ) -> EmitResult {
        EmitHelper::write_line(
            writer,
            context,
            &format!(
                "contract {} is {}, Test {{",
                self.config.mock_name(&mock.contract_name),
                mock.contract_name
            ),
        )?;
        let body = mock.body();
        let body = body.trim_end();
        if !body.is_empty() {
            writeln!(writer, "{}", body)?;
        }
        EmitHelper::write_line(writer, context, "}")
    }

    fn write_helper<W: Write>(&self, writer: &mut W, context: &mut EmitContext) -> EmitResult {
        EmitHelper::write_block(writer, context, "contract SmockHelper is Test", |w, c| {
            EmitHelper::write_block(
                w,
                c,
                "function deployMock(string memory _label, bytes memory _creationCode, bytes memory _encodedArgs) internal returns (address _deployed)",
                |w, c| {
                    EmitHelper::write_line(
                        w,
                        c,
                        "bytes memory _bytecode = abi.encodePacked(_creationCode, _encodedArgs);",
                    )?;
                    EmitHelper::write_block(w, c, "assembly", |w, c| {
                        EmitHelper::write_line(
                            w,
                            c,
                            "_deployed := create(0, add(_bytecode, 0x20), mload(_bytecode))",
                        )
                    })?;
                    EmitHelper::write_line(w, c, "vm.label(_deployed, _label);")?;
                    EmitHelper::write_line(w, c, "vm.allowCheatcodes(_deployed);")
                },
            )
        })
    }
}

impl Emitter for MockFileEmitter {
    type Item = MockSourceUnit;

    fn initial_context(&self, _item: &MockSourceUnit) -> EmitContext {
        EmitContext::with_indent(self.config.indent_style.chars(), 0)
    }

    fn emit<W: Write>(
        &self,
        unit: &MockSourceUnit,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        self.write_header(writer, context)?;

        let mocked: Vec<&str> = unit
            .contracts
            .iter()
            .map(|mock| mock.contract_name.as_str())
            .collect();
        if !mocked.is_empty() {
            EmitHelper::write_line(
                writer,
                context,
                &format!("import {{{}}} from '{}';", mocked.join(", "), unit.absolute_path),
            )?;
        }
        for import in &unit.imports {
            write!(writer, "{}", import)?;
        }

        for mock in &unit.contracts {
            EmitHelper::write_blank(writer)?;
            self.write_contract(mock, writer, context)?;
        }
        Ok(())
    }
}
