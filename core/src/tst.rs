use crate::{Message, MessageField};

pub(crate) fn catalog() -> Vec<Message> {
    vartype_testing::logging();

    vec![
        Message::builder()
            .name("User")
            .description("an account holder")
            .fields(vec![
                MessageField::builder()
                    .name("id")
                    .ty("uint64")
                    .build(),
                MessageField::builder()
                    .name("email")
                    .ty("string")
                    .build(),
            ])
            .build(),
        Message::builder()
            .name("Team")
            .fields(vec![
                MessageField::builder()
                    .name("members")
                    .ty("[]User")
                    .build(),
                MessageField::builder()
                    .name("roles")
                    .ty("map<string,[]string>")
                    .optional(true)
                    .build(),
            ])
            .build(),
        Message::builder()
            .name("Event")
            .build(),
    ]
}
