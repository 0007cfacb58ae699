#[cfg(test)]
mod tests {
    use crate::descriptor::{Display, Operation, TriggerDescriptor};
    use crate::polling::PollingTrigger;
    use crate::subscription::RestHook;
    use serde_json::json;

    #[test]
    fn hook_descriptor_wires_exactly_the_hook_style() {
        let descriptor = TriggerDescriptor::hook(
            "new_book",
            "Book",
            Display::new("New Book", "Triggers when a book is published."),
            RestHook::new("new_book"),
            json!({"id": "123456"}),
        );
        assert!(descriptor.is_hook());
        assert_eq!(descriptor.operation.kind(), "hook");
        assert_eq!(descriptor.operation.sample()["id"], "123456");
        assert!(!descriptor.display.hidden);
        assert!(!descriptor.display.important);
    }

    #[test]
    fn polling_descriptor_carries_output_fields() {
        let descriptor = TriggerDescriptor::polling(
            "new_books",
            "Book",
            Display::new("New Books", "Polls for new books.").important(),
            PollingTrigger::new("new_books"),
            json!({"id": 1, "published": 1902}),
        )
        .with_output_field("published", "Year of publication");

        assert!(!descriptor.is_hook());
        assert_eq!(descriptor.operation.kind(), "polling");
        match &descriptor.operation {
            Operation::Polling { output_fields, .. } => {
                assert_eq!(output_fields.len(), 1);
                assert_eq!(output_fields[0].key, "published");
                assert_eq!(output_fields[0].label, "Year of publication");
            }
            Operation::Hook { .. } => panic!("expected a polling operation"),
        }
    }

    #[test]
    fn output_fields_on_a_hook_descriptor_are_ignored() {
        let descriptor = TriggerDescriptor::hook(
            "new_book",
            "Book",
            Display::new("New Book", "Triggers when a book is published."),
            RestHook::new("new_book"),
            json!({}),
        )
        .with_output_field("published", "Year of publication");
        assert!(descriptor.is_hook());
    }
}
