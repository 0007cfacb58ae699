#[cfg(test)]
mod tests {
    use crate::subscription::RestHook;
    use crate::trigger::ScopedTrigger;

    const BASE: &str = "https://acme.example.com";

    #[test]
    fn scoped_subscribe_urls_are_unique_per_event() {
        let timesheet = ScopedTrigger::new("approved_timesheet");
        let film = ScopedTrigger::new("new_film");
        assert_ne!(timesheet.subscribe_url(BASE), film.subscribe_url(BASE));
        assert_eq!(
            film.subscribe_url(BASE),
            "https://acme.example.com/zapier/triggers/new_film/subscriptions/"
        );
    }

    #[test]
    fn dialects_do_not_collide_on_the_same_event() {
        // Both dialects may exist during a migration; their routes must stay
        // distinct even for the same event name.
        let legacy = RestHook::new("new_book");
        let current = ScopedTrigger::new("new_book");
        assert_ne!(legacy.subscribe_url(BASE), current.subscribe_url(BASE));
    }
}
