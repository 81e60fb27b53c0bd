/// Basic unit tests for the public helpers and record types
use habit_tracker_store::*;
use chrono::NaiveDate;
use std::collections::HashSet;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_format_date_and_week() {
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(friday), "2024-01-05");

        let week = days_in_week(friday);
        assert_eq!(week.first().map(String::as_str), Some("2023-12-31"));
        assert_eq!(week.last().map(String::as_str), Some("2024-01-06"));
    }

    #[test]
    fn test_today_is_canonical() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_ok());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_settings_default_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.accent_color, "#3b82f6");
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(settings.notification_sound);
        assert_eq!(settings.week_starts_on, 0);
        assert_eq!(settings.default_view, DefaultView::Grid);
    }

    #[test]
    fn test_habit_log_creation() {
        let habit = Habit::new("Stretch".to_string(), None, None, "#a855f7".to_string()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let log = HabitLog::completed(habit.id.clone(), date, None).unwrap();
        assert_eq!(log.habit_id, habit.id);
        assert_eq!(log.date, "2024-03-10");
    }

    #[test]
    fn test_memory_store_creation() {
        let store = HabitStore::open(MemoryMedium::new(), StoreConfig::default());
        assert!(store.is_ok());
        assert!(store.unwrap().migration_report().is_empty());
    }
}
