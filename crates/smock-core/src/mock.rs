use serde::Serialize;

/// Rendered pieces of one mock contract, ready to be wrapped in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockContract {
    pub contract_name: String,
    pub constructor: Option<String>,
    pub members: Vec<String>,
}

impl MockContract {
    pub fn new(contract_name: impl Into<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            constructor: None,
            members: Vec::new(),
        }
    }

    pub fn body(&self) -> String {
        let mut body = String::new();
        if let Some(constructor) = &self.constructor {
            body.push_str(constructor);
        }
        for member in &self.members {
            body.push_str(member);
        }
        body
    }
}

/// Mocks for every mockable contract of one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockSourceUnit {
    pub absolute_path: String,
    pub imports: Vec<String>,
    pub contracts: Vec<MockContract>,
}

impl MockSourceUnit {
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
