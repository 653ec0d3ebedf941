use crate::{Message, MessageField, Schema};

pub const SHOP: &str = include_str!("../fragments/shop.json");
pub const SHOP_BROKEN: &str = include_str!("../fragments/shop_broken.json");
pub const EMPTY_TYPE: &str = include_str!("../fragments/empty_type.json");
pub const CONFIG_TOML: &str = include_str!("../fragments/vartype.toml");

fn field(
    name: &str,
    ty: &str,
) -> MessageField {
    MessageField::builder()
        .name(name)
        .ty(ty)
        .build()
}

/// Messages every `type_test!` resolves struct references against.
pub fn catalog() -> Schema {
    Schema::builder()
        .name("fixtures")
        .version("v1")
        .messages(vec![
            Message::builder()
                .name("User")
                .fields(vec![field("id", "uint64"), field("name", "string")])
                .build(),
            Message::builder()
                .name("Team")
                .fields(vec![
                    field("members", "[]User"),
                    field("leads", "map<string,User>"),
                ])
                .build(),
            Message::builder()
                .name("Node")
                .description("self-referencing tree node")
                .fields(vec![field("children", "[]Node")])
                .build(),
            // shadowed by the primitive of the same name
            Message::builder()
                .name("bool")
                .build(),
        ])
        .build()
}

pub fn shop() -> Schema {
    serde_json::from_str(SHOP).expect("shop fixture is valid json")
}
