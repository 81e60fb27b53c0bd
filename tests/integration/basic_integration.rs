/// Basic integration tests against the SQLite-backed store
use habit_tracker_store::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn sample_habits() -> Vec<Habit> {
        let health = Category::new("Health".to_string(), "#22c55e".to_string(), None).unwrap();
        vec![
            Habit::new("Run".to_string(), None, Some(health.id.clone()), "#ef4444".to_string()).unwrap(),
            Habit::new("Read".to_string(), Some("20 pages".to_string()), None, "#3b82f6".to_string())
                .unwrap(),
        ]
    }

    #[test]
    fn test_round_trip_all_collections() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&dir.path().join("store.db"), StoreConfig::default())
            .expect("Failed to open store");

        let category = Category::new("Health".to_string(), "#22c55e".to_string(), Some("heart".to_string())).unwrap();
        let habits = sample_habits();
        let log = HabitLog::completed(habits[0].id.clone(), chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), None).unwrap();
        let badge = UserBadge::unlock("first-check-in");
        let settings = AppSettings {
            theme: Theme::Dark,
            week_starts_on: 1,
            ..AppSettings::default()
        };

        store.save_categories(&[category.clone()]).unwrap();
        store.save_habits(&habits).unwrap();
        store.save_logs(&[log.clone()]).unwrap();
        store.save_badges(&[badge.clone()]).unwrap();
        store.save_settings(&settings).unwrap();

        assert_eq!(store.get_categories().unwrap(), vec![category]);
        assert_eq!(store.get_habits().unwrap(), habits);
        assert_eq!(store.get_logs().unwrap(), vec![log]);
        assert_eq!(store.get_badges().unwrap(), vec![badge]);
        assert_eq!(store.get_settings().unwrap(), settings);
    }

    #[test]
    fn test_database_persistence() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("store.db");
        let habits = sample_habits();

        {
            let store = open_store(&db_path, StoreConfig::default()).expect("Failed to open first store");
            store.save_habits(&habits).unwrap();
        }

        // Reopen the same file
        let store = open_store(&db_path, StoreConfig::default()).expect("Failed to open second store");
        assert_eq!(store.get_habits().unwrap(), habits);
        assert_eq!(
            store.medium().keys().unwrap(),
            vec!["habit-tracker-habits"]
        );
    }

    #[test]
    fn test_overwrite_semantics() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&dir.path().join("store.db"), StoreConfig::default()).unwrap();
        let habits = sample_habits();

        store.save_habits(&habits).unwrap();
        store.save_habits(&habits[..1]).unwrap();

        assert_eq!(store.get_habits().unwrap(), habits[..1].to_vec());
    }

    #[test]
    fn test_quota_failure_surfaces_to_caller() {
        let store = HabitStore::open(MemoryMedium::with_quota(64), StoreConfig::default()).unwrap();
        let result = store.save_habits(&sample_habits());

        assert!(matches!(result, Err(StorageError::QuotaExceeded { .. })));
        assert!(store.get_habits().unwrap().is_empty());
    }

    #[test]
    fn test_storage_interface() {
        let medium = SqliteMedium::open_in_memory().expect("Failed to open medium");

        // Test that the SQLite medium implements StorageMedium
        let _: &dyn StorageMedium = &medium;
        let store = HabitStore::open(medium, StoreConfig::default()).unwrap();
        assert!(store.get_logs().unwrap().is_empty());
    }
}
