use smock_core::{ImportContext, ImportDirective};

pub fn import_context(import: &ImportDirective) -> ImportContext {
    let named_imports = (!import.symbol_aliases.is_empty()).then(|| {
        import
            .symbol_aliases
            .iter()
            .map(|alias| alias.foreign.clone())
            .collect()
    });

    ImportContext {
        absolute_path: import.absolute_path.clone(),
        named_imports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use smock_core::{ForeignSymbol, SymbolAlias};

    fn aliased(foreign: &[ForeignSymbol]) -> ImportDirective {
        let mut import = ImportDirective::new("../contracts/MyContract.sol");
        import.symbol_aliases = foreign
            .iter()
            .cloned()
            .map(|foreign| SymbolAlias {
                foreign,
                local: None,
            })
            .collect();
        import
    }

    #[test]
    fn test_plain_import_has_only_path() {
        let context = import_context(&aliased(&[]));

        assert_eq!(
            serde_json::to_value(context).unwrap(),
            json!({ "absolutePath": "../contracts/MyContract.sol" })
        );
    }

    #[test]
    fn test_named_imports() {
        let context = import_context(&aliased(&[
            ForeignSymbol::Name("a".to_string()),
            ForeignSymbol::Name("b".to_string()),
        ]));

        assert_eq!(
            serde_json::to_value(context).unwrap(),
            json!({
                "absolutePath": "../contracts/MyContract.sol",
                "namedImports": ["a", "b"]
            })
        );
    }

    #[test]
    fn test_unnamed_symbols_fall_back_to_ids() {
        let context = import_context(&aliased(&[ForeignSymbol::Id(1), ForeignSymbol::Id(2)]));

        assert_eq!(
            context.named_imports,
            Some(vec![ForeignSymbol::Id(1), ForeignSymbol::Id(2)])
        );
    }
}
