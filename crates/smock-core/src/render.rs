use crate::{context::MockContext, Result};

/// Turns a context record into source text. Implementations must be pure: the same record always
/// renders to the same text.
pub trait MockRenderer {
    fn name(&self) -> &str;

    fn render(&self, context: &MockContext) -> Result<String>;
}

/// Renders each record as one line of JSON. Handy for inspecting what a template would receive.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl MockRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, context: &MockContext) -> Result<String> {
        let mut line = serde_json::to_string(context)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ConstructorContext;

    #[test]
    fn test_json_renderer_tags_partial() {
        let context = MockContext::Constructor(ConstructorContext {
            parameters: "uint256 a".to_string(),
            contracts: "Token(a)".to_string(),
        });

        let rendered = JsonRenderer.render(&context).unwrap();

        assert_eq!(
            rendered,
            "{\"partial\":\"constructor\",\"context\":{\"parameters\":\"uint256 a\",\"contracts\":\"Token(a)\"}}\n"
        );
    }
}
