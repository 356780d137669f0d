/*! Selector maps built while resolving a contract's inheritance graph.
 *
 * Each ABI-visible member is keyed by its function selector; every constructor along the graph
 * shares the `constructor` sentinel key. A map lives for one contract's generation pass only.
 */

use crate::ast::FunctionDefinition;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONSTRUCTOR_SELECTOR: &str = "constructor";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Selector {
    Constructor,
    Hash(String),
}

impl Selector {
    pub fn hash(value: impl Into<String>) -> Self {
        Selector::Hash(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selector::Constructor => CONSTRUCTOR_SELECTOR,
            Selector::Hash(hash) => hash,
        }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, Selector::Constructor)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value == CONSTRUCTOR_SELECTOR {
            Selector::Constructor
        } else {
            Selector::Hash(value)
        }
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.as_str().to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the resolver learned about one selector.
///
/// `implemented` only ever turns on, `contracts` and `constructors` only ever grow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorEntry<'a> {
    pub implemented: bool,
    pub contracts: IndexSet<String>,
    pub function: Option<&'a FunctionDefinition>,
    pub constructors: Vec<&'a FunctionDefinition>,
}

impl<'a> SelectorEntry<'a> {
    /// `(A, B)` override list, present only when more than one contract declares the member.
    pub fn overrides(&self) -> Option<String> {
        if self.contracts.len() <= 1 {
            return None;
        }
        let contracts: Vec<&str> = self.contracts.iter().map(String::as_str).collect();
        Some(format!("({})", contracts.join(", ")))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorMap<'a> {
    entries: IndexMap<Selector, SelectorEntry<'a>>,
}

impl<'a> SelectorMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage-backed members always satisfy their selector.
    pub fn merge_storage(&mut self, selector: Selector) {
        self.entries.entry(selector).or_default().implemented = true;
    }

    pub fn merge_function(
        &mut self,
        selector: Selector,
        contract_name: &str,
        function: &'a FunctionDefinition,
    ) {
        let is_constructor = selector.is_constructor();
        let entry = self.entries.entry(selector).or_default();

        entry.implemented |= !is_constructor && function.implemented;
        entry.contracts.insert(contract_name.to_string());
        entry.function = Some(function);
        if is_constructor {
            entry.constructors.push(function);
        }
    }

    pub fn get(&self, selector: &Selector) -> Option<&SelectorEntry<'a>> {
        self.entries.get(selector)
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.entries.contains_key(selector)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &SelectorEntry<'a>)> {
        self.entries.iter()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn overrides_for(&self, selector: &Selector) -> Option<String> {
        self.get(selector).and_then(SelectorEntry::overrides)
    }

    /// Constructors accumulated under the sentinel, in encounter order.
    pub fn constructors(&self) -> &[&'a FunctionDefinition] {
        self.entries
            .get(&Selector::Constructor)
            .map(|entry| entry.constructors.as_slice())
            .unwrap_or(&[])
    }

    pub fn summaries(&self) -> Vec<SelectorSummary> {
        self.entries
            .iter()
            .map(|(selector, entry)| SelectorSummary {
                selector: selector.to_string(),
                implemented: entry.implemented,
                contracts: entry.contracts.iter().cloned().collect(),
                function: entry.function.map(|f| f.name.clone()),
                constructors: entry
                    .constructors
                    .iter()
                    .map(|f| f.scope.contract_name.clone())
                    .collect(),
            })
            .collect()
    }
}

/// Serializable view of a selector entry, used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorSummary {
    pub selector: String,
    pub implemented: bool,
    pub contracts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FunctionDefinition, FunctionKind, FunctionVisibility};

    fn function(implemented: bool) -> FunctionDefinition {
        let mut f = FunctionDefinition::new("foo", FunctionVisibility::External);
        f.implemented = implemented;
        f
    }

    #[test]
    fn test_selector_string_round_trip() {
        assert_eq!(Selector::from("constructor".to_string()), Selector::Constructor);
        assert_eq!(
            Selector::from("a9059cbb".to_string()),
            Selector::hash("a9059cbb")
        );
        assert_eq!(Selector::Constructor.to_string(), "constructor");
    }

    #[test]
    fn test_implemented_never_reverts() {
        let implemented = function(true);
        let abstract_decl = function(false);
        let mut map = SelectorMap::new();

        map.merge_function(Selector::hash("12345678"), "A", &implemented);
        map.merge_function(Selector::hash("12345678"), "B", &abstract_decl);

        let entry = map.get(&Selector::hash("12345678")).unwrap();
        assert!(entry.implemented);
        assert!(!entry.function.unwrap().implemented);
    }

    #[test]
    fn test_storage_merge_keeps_declaring_contracts() {
        let decl = function(false);
        let mut map = SelectorMap::new();

        map.merge_function(Selector::hash("aa"), "A", &decl);
        map.merge_storage(Selector::hash("aa"));

        let entry = map.get(&Selector::hash("aa")).unwrap();
        assert!(entry.implemented);
        assert_eq!(entry.contracts.len(), 1);
    }

    #[test]
    fn test_constructors_accumulate_only_under_sentinel() {
        let mut ctor = FunctionDefinition::new("", FunctionVisibility::Public);
        ctor.kind = FunctionKind::Constructor;
        let regular = function(false);
        let mut map = SelectorMap::new();

        map.merge_function(Selector::Constructor, "A", &ctor);
        map.merge_function(Selector::Constructor, "B", &ctor);
        map.merge_function(Selector::hash("bb"), "A", &regular);

        assert_eq!(map.constructors().len(), 2);
        assert!(!map.get(&Selector::Constructor).unwrap().implemented);
        assert!(map.get(&Selector::hash("bb")).unwrap().constructors.is_empty());
    }

    #[test]
    fn test_overrides_require_two_contracts() {
        let decl = function(false);
        let mut map = SelectorMap::new();

        map.merge_function(Selector::hash("cc"), "TestContractA", &decl);
        assert_eq!(map.overrides_for(&Selector::hash("cc")), None);

        map.merge_function(Selector::hash("cc"), "TestContractB", &decl);
        map.merge_function(Selector::hash("cc"), "TestContractA", &decl);
        assert_eq!(
            map.overrides_for(&Selector::hash("cc")),
            Some("(TestContractA, TestContractB)".to_string())
        );
    }
}
