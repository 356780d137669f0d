use crate::ast::{
    DataLocation, FunctionKind, FunctionVisibility, StateMutability, StateVisibility, TypeName,
};
use crate::builder::{ContractBuilder, FunctionBuilder, VariableBuilder};
use crate::selector::Selector;

#[test]
fn test_contract_builder_scopes_functions() {
    let contract = ContractBuilder::new(5, "Vault")
        .abstract_contract()
        .inherits([4, 2])
        .function(FunctionBuilder::constructor().build())
        .function(
            FunctionBuilder::new("deposit", FunctionVisibility::External)
                .mutability(StateMutability::Payable)
                .selector("b6b55f25")
                .build(),
        )
        .build();

    assert_eq!(contract.linearized_base_contracts, vec![5, 4, 2]);
    assert!(contract
        .functions
        .iter()
        .all(|f| f.scope.contract_name == "Vault" && f.scope.is_abstract));
    assert_eq!(contract.constructor().unwrap().kind, FunctionKind::Constructor);
    assert_eq!(
        contract.functions[1].selector(),
        Some(Selector::hash("b6b55f25"))
    );
}

#[test]
fn test_variable_builder_defaults() {
    let variable = VariableBuilder::new("owner", "address").build();
    assert_eq!(variable.visibility, StateVisibility::Default);
    assert_eq!(variable.storage_location, DataLocation::Default);
    assert!(!variable.is_constant());
    assert!(!variable.is_immutable());

    let typed = VariableBuilder::typed("ids", TypeName::array(TypeName::elementary("uint256")))
        .location(DataLocation::Memory)
        .build();
    assert_eq!(typed.type_string, "uint256[]");
    assert_eq!(typed.storage_location, DataLocation::Memory);
}

#[test]
fn test_type_name_constructors_compose_type_strings() {
    let nested = TypeName::mapping(
        TypeName::elementary("address"),
        TypeName::mapping(
            TypeName::elementary("uint256"),
            TypeName::array(TypeName::user_defined("struct Pool", None)),
        ),
    );

    assert_eq!(
        nested.type_string(),
        "mapping(address => mapping(uint256 => struct Pool[]))"
    );
    assert!(nested.is_mapping());
    assert!(!nested.is_struct());
}
