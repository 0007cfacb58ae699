#[cfg(test)]
mod tests {
    use crate::authentication::authentication;
    use crate::manifest::{app, AppBuilder};
    use crate::triggers::{new_book, new_books, new_film};
    use zapbridge_common::BridgeError;

    #[test]
    fn shipped_manifest_has_unique_keys_and_one_style_each() {
        let app = app().unwrap();
        let keys: Vec<&str> = app.trigger_keys().collect();
        assert_eq!(keys, vec!["new_book", "new_books", "new_film"]);

        assert!(app.trigger(new_book::KEY).unwrap().is_hook());
        assert!(!app.trigger(new_books::KEY).unwrap().is_hook());
        assert!(!app.trigger(new_film::KEY).unwrap().is_hook());
        assert!(app.trigger("unknown").is_none());
    }

    #[test]
    fn duplicate_trigger_keys_fail_at_build_time() {
        let result = AppBuilder::new(authentication())
            .trigger(new_book::descriptor())
            .trigger(new_book::descriptor())
            .build();
        match result {
            Err(BridgeError::Config(message)) => {
                assert!(message.contains("new_book"), "message was: {message}");
            }
            Ok(_) => panic!("duplicate keys must not build"),
            Err(other) => panic!("expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn authentication_descriptor_matches_the_connection_form() {
        let auth = authentication();
        assert_eq!(auth.kind, "custom");
        assert_eq!(auth.test.method, "POST");
        assert_eq!(auth.test.path, "/zapier/auth/");

        let keys: Vec<&str> = auth.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["email", "api_key"]);
        assert!(auth.fields.iter().all(|f| f.required));
    }
}
