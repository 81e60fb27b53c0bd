/// Migration of data left under per-user legacy keys
use habit_tracker_store::*;

#[cfg(test)]
mod legacy_migration_tests {
    use super::*;

    const LEGACY_HABITS: &str =
        r##"[{"id":"1","name":"Meditate","color":"#a855f7","createdAt":"2023-06-01T07:00:00.000Z"}]"##;

    #[test]
    fn test_legacy_habits_are_copied_to_canonical_key() {
        let medium = SqliteMedium::open_in_memory().unwrap();
        medium.set_item("habit-tracker-user123-habits", LEGACY_HABITS).unwrap();

        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();
        let habits = store.get_habits().unwrap();

        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id.as_str(), "1");
        assert_eq!(habits[0].name, "Meditate");
        assert_eq!(
            store.medium().get_item("habit-tracker-habits").unwrap().as_deref(),
            Some(LEGACY_HABITS)
        );
    }

    #[test]
    fn test_canonical_key_wins_over_legacy() {
        let medium = MemoryMedium::new();
        medium.set_item("habit-tracker-user123-habits", LEGACY_HABITS).unwrap();
        medium.set_item("habit-tracker-habits", "[]").unwrap();

        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();

        assert!(store.get_habits().unwrap().is_empty());
        assert!(store.migration_report().is_empty());
    }

    #[test]
    fn test_legacy_settings_migrate_and_stop_defaulting() {
        let medium = MemoryMedium::new();
        medium
            .set_item(
                "habit-tracker-abc-settings",
                r##"{"theme":"light","accentColor":"#10b981","fontSize":"large","notificationSound":false,"weekStartsOn":1,"defaultView":"list"}"##,
            )
            .unwrap();

        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();
        let settings = store.get_settings().unwrap();

        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_view, DefaultView::List);
        assert_eq!(settings.week_starts_on, 1);
    }

    #[test]
    fn test_malformed_legacy_value_fails_on_read() {
        let medium = MemoryMedium::new();
        medium.set_item("habit-tracker-u1-logs", "{broken").unwrap();

        // Copied verbatim; the parse error shows up on the read
        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();
        assert!(matches!(store.get_logs(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_explicit_rerun_after_canonical_removed() {
        let medium = MemoryMedium::new();
        medium.set_item("habit-tracker-u1-badges", "[]").unwrap();
        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();

        store.clear().unwrap();
        assert_eq!(store.raw(Collection::Badges).unwrap(), None);

        let report = store.migrate_legacy_keys().unwrap();
        assert_eq!(report.migrated.len(), 1);
        assert_eq!(store.raw(Collection::Badges).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_legacy_logs_written_after_open_are_read() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&dir.path().join("store.db"), StoreConfig::default()).unwrap();
        assert!(store.migration_report().is_empty());

        let logs = r#"[{"id":"l1","habitId":"h1","date":"2024-01-05","completed":true}]"#;
        store.medium().set_item("habit-tracker-u9-logs", logs).unwrap();

        let read = store.get_logs().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].date, "2024-01-05");
        assert_eq!(store.raw(Collection::Logs).unwrap().as_deref(), Some(logs));
    }
}
