use crate::ast::{
    FunctionDefinition, FunctionKind, FunctionVisibility, StateMutability, VariableDeclaration,
};

pub struct FunctionBuilder {
    function: FunctionDefinition,
}

impl FunctionBuilder {
    pub fn new(name: &str, visibility: FunctionVisibility) -> Self {
        Self {
            function: FunctionDefinition::new(name, visibility),
        }
    }

    pub fn constructor() -> Self {
        let mut function = FunctionDefinition::new("", FunctionVisibility::Public);
        function.kind = FunctionKind::Constructor;
        Self { function }
    }

    pub fn kind(mut self, kind: FunctionKind) -> Self {
        self.function.kind = kind;
        self
    }

    pub fn mutability(mut self, mutability: StateMutability) -> Self {
        self.function.state_mutability = mutability;
        self
    }

    pub fn virtual_fn(mut self) -> Self {
        self.function.is_virtual = true;
        self
    }

    pub fn unimplemented(mut self) -> Self {
        self.function.implemented = false;
        self
    }

    pub fn param(mut self, parameter: VariableDeclaration) -> Self {
        self.function.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, parameter: VariableDeclaration) -> Self {
        self.function.return_parameters.push(parameter);
        self
    }

    pub fn selector(mut self, selector: &str) -> Self {
        self.function.function_selector = Some(selector.to_string());
        self
    }

    /// Only needed when the function is not added through a `ContractBuilder`.
    pub fn scope(mut self, contract_name: &str, is_abstract: bool) -> Self {
        self.function.scope.contract_name = contract_name.to_string();
        self.function.scope.is_abstract = is_abstract;
        self
    }

    pub fn build(self) -> FunctionDefinition {
        self.function
    }
}
