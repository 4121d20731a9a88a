//! Parameter type to TypeScript type mapping.

use crate::model::ParamType;

/// TypeScript type of a handler argument for the given parameter kind.
pub fn typescript_type(param_type: &ParamType) -> String {
    match param_type {
        ParamType::String | ParamType::Enum => "string".to_string(),
        ParamType::Integer | ParamType::Float => "number".to_string(),
        ParamType::Boolean => "boolean".to_string(),
        ParamType::Location => "Vector3".to_string(),
        ParamType::EntitySelector | ParamType::PlayerSelector => "Entity[]".to_string(),
        ParamType::BlockType | ParamType::EntityType | ParamType::ItemType => {
            format!("{} | string", param_type.tag())
        }
        ParamType::Other(_) => "any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_kind_maps() {
        let expected = [
            (ParamType::BlockType, "BlockType | string"),
            (ParamType::Boolean, "boolean"),
            (ParamType::EntitySelector, "Entity[]"),
            (ParamType::EntityType, "EntityType | string"),
            (ParamType::Enum, "string"),
            (ParamType::Float, "number"),
            (ParamType::Integer, "number"),
            (ParamType::ItemType, "ItemType | string"),
            (ParamType::Location, "Vector3"),
            (ParamType::PlayerSelector, "Entity[]"),
            (ParamType::String, "string"),
        ];

        assert_eq!(expected.len(), ParamType::KNOWN.len());
        for (kind, ts) in expected {
            assert_eq!(typescript_type(&kind), ts, "kind = {kind}");
        }
    }

    #[test]
    fn test_unknown_kind_is_any() {
        assert_eq!(typescript_type(&ParamType::Other("Vector".into())), "any");
        assert_eq!(typescript_type(&ParamType::Other(String::new())), "any");
    }
}
