use crate::ast::{
    DataLocation, StateVisibility, TypeName, VariableDeclaration, VariableMutability,
};

pub struct VariableBuilder {
    variable: VariableDeclaration,
}

impl VariableBuilder {
    pub fn new(name: &str, type_string: &str) -> Self {
        Self {
            variable: VariableDeclaration::new(name, type_string),
        }
    }

    /// Parameter without a name, rendered as `_param{i}` / `_returnParam{i}`.
    pub fn unnamed(type_string: &str) -> Self {
        Self::new("", type_string)
    }

    /// Uses the type name's type string as the declaration's own.
    pub fn typed(name: &str, type_name: TypeName) -> Self {
        let mut variable = VariableDeclaration::new(name, type_name.type_string());
        variable.type_name = Some(type_name);
        Self { variable }
    }

    pub fn type_name(mut self, type_name: TypeName) -> Self {
        self.variable.type_name = Some(type_name);
        self
    }

    pub fn visibility(mut self, visibility: StateVisibility) -> Self {
        self.variable.visibility = visibility;
        self
    }

    pub fn constant(mut self) -> Self {
        self.variable.mutability = VariableMutability::Constant;
        self
    }

    pub fn immutable(mut self) -> Self {
        self.variable.mutability = VariableMutability::Immutable;
        self
    }

    pub fn location(mut self, location: DataLocation) -> Self {
        self.variable.storage_location = location;
        self
    }

    pub fn selector(mut self, selector: &str) -> Self {
        self.variable.function_selector = Some(selector.to_string());
        self
    }

    pub fn build(self) -> VariableDeclaration {
        self.variable
    }
}
