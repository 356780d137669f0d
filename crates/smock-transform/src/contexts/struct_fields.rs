use smock_core::{TypeName, VariableDeclaration};

/// Members of the struct behind a type, looking through one array layer.
pub fn struct_members(type_name: &TypeName) -> Option<&[VariableDeclaration]> {
    if !type_name.is_struct() {
        return None;
    }
    let target = if type_name.is_array() {
        type_name.base_type()?
    } else {
        type_name
    };
    target.referenced_declaration()?.struct_members()
}

/// Named fields of a struct type; empty when the type is not a struct or is unresolved.
pub fn struct_field_names(type_name: &TypeName) -> Vec<String> {
    struct_members(type_name)
        .unwrap_or_default()
        .iter()
        .filter(|member| !member.name.is_empty())
        .map(|member| member.name.clone())
        .collect()
}

/// True when a mapping sits anywhere inside the struct, at any nesting depth. Such structs
/// cannot be copied to memory, so their mocks are limited to setters on individual fields.
pub fn has_nested_mappings(type_name: &TypeName) -> bool {
    struct_members(type_name)
        .unwrap_or_default()
        .iter()
        .any(|member| {
            member.type_string.starts_with("mapping")
                || (member.type_string.starts_with("struct")
                    && member.type_name.as_ref().is_some_and(has_nested_mappings))
        })
}
