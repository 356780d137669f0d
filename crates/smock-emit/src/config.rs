use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub indent_style: IndentStyle,
    /// Prepended to the mocked contract's name.
    pub mock_prefix: String,
    pub license: String,
    pub pragma: String,
    pub test_import: String,
    /// Emit the `SmockHelper` deployment contract alongside the mocks.
    pub include_helper: bool,
    pub use_colors: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(2),
            mock_prefix: "Mock".to_string(),
            license: "UNLICENSED".to_string(),
            pragma: "^0.8.0".to_string(),
            test_import: "forge-std/src/Test.sol".to_string(),
            include_helper: false,
            use_colors: true,
        }
    }
}

impl EmitterConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn mock_name(&self, contract_name: &str) -> String {
        format!("{}{}", self.mock_prefix, contract_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    pub fn chars(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}
