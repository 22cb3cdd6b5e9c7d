#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rollcall::libs::clock::FixedClock;
    use rollcall::libs::error::RegisterError;
    use rollcall::libs::register::Register;
    use rollcall::libs::student::NewStudent;
    use rollcall::store::blob::{MemoryStore, StorageBackend, ATTENDANCE_KEY, STUDENTS_KEY};
    use rollcall::store::ledger::Status;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(date(2024, 1, 1), "09:00:00", 1_704_099_600_000)
    }

    fn new_student(id: &str, name: &str, class: &str) -> NewStudent {
        NewStudent {
            id: id.to_string(),
            name: name.to_string(),
            class: class.to_string(),
            email: format!("{}@school.edu", id.to_lowercase()),
        }
    }

    fn empty_register() -> Register {
        Register::load(Box::new(MemoryStore::new()), Box::new(clock()), false).unwrap()
    }

    #[test]
    fn test_seed_roster_installed_on_fresh_store() {
        let register = Register::load(Box::new(MemoryStore::new()), Box::new(clock()), true).unwrap();
        assert_eq!(register.students().len(), 8);
        assert_eq!(
            register.distinct_classes(),
            vec!["Grade 10A", "Grade 10B", "Grade 11A", "Grade 11B"]
        );
    }

    #[test]
    fn test_seed_skipped_when_disabled() {
        let register = empty_register();
        assert!(register.students().is_empty());
    }

    #[test]
    fn test_example_scenario_from_empty() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "10A")).unwrap();
        register.mark(date(2024, 1, 1), "S1", Status::Present).unwrap();

        let stats = register.stats_for(date(2024, 1, 1), "", "");
        assert_eq!(stats.total, 1);
        assert_eq!(stats.present, 1);
        assert_eq!(stats.absent, 0);
        assert_eq!(stats.rate, 100);

        let rows = register.day_rows(date(2024, 1, 1), "", "");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, Status::Present);
        assert_eq!(rows[0].time.as_deref(), Some("09:00:00"));
    }

    #[test]
    fn test_duplicate_add_leaves_roster_unchanged() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "10A")).unwrap();

        let err = register.add_student(new_student("S1", "Impostor", "11B")).unwrap_err();
        assert!(matches!(err, RegisterError::DuplicateId(_)));
        assert_eq!(register.students().len(), 1);
        assert_eq!(register.find_student("S1").unwrap().name, "Ann");
    }

    #[test]
    fn test_mark_unknown_student_is_not_found() {
        let mut register = empty_register();
        let err = register.mark(date(2024, 1, 1), "ghost", Status::Present).unwrap_err();
        assert!(matches!(err, RegisterError::NotFound(id) if id == "ghost"));
    }

    #[test]
    fn test_remove_cascades_into_ledger() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "10A")).unwrap();
        register.add_student(new_student("S2", "Ben", "10A")).unwrap();
        register.mark(date(2024, 1, 1), "S1", Status::Present).unwrap();
        register.mark(date(2024, 1, 1), "S2", Status::Absent).unwrap();
        register.mark(date(2024, 1, 2), "S1", Status::Absent).unwrap();

        register.remove_student("S1").unwrap();

        assert!(!register.records_for(date(2024, 1, 1)).contains_key("S1"));
        assert!(!register.records_for(date(2024, 1, 2)).contains_key("S1"));
        assert_eq!(register.status_for(date(2024, 1, 1), "S1"), Status::Unmarked);
        assert_eq!(register.status_for(date(2024, 1, 1), "S2"), Status::Absent);
    }

    #[test]
    fn test_remove_unknown_student_is_not_found() {
        let mut register = empty_register();
        let err = register.remove_student("ghost").unwrap_err();
        assert!(matches!(err, RegisterError::NotFound(_)));
    }

    #[test]
    fn test_mark_all_present_respects_filters() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "Grade 10A")).unwrap();
        register.add_student(new_student("S2", "Ben", "Grade 10A")).unwrap();
        register.add_student(new_student("S3", "Cid", "Grade 10B")).unwrap();

        let count = register.mark_all_present(date(2024, 1, 1), "", "Grade 10A").unwrap();
        assert_eq!(count, 2);
        assert_eq!(register.status_for(date(2024, 1, 1), "S1"), Status::Present);
        assert_eq!(register.status_for(date(2024, 1, 1), "S2"), Status::Present);
        assert_eq!(register.status_for(date(2024, 1, 1), "S3"), Status::Unmarked);
    }

    #[test]
    fn test_mark_all_present_without_matches_marks_nothing() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "Grade 10A")).unwrap();

        let count = register.mark_all_present(date(2024, 1, 1), "zzz", "").unwrap();
        assert_eq!(count, 0);
        assert!(register.records_for(date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_persistence_failure_keeps_in_memory_state() {
        let mut register = Register::load(Box::new(MemoryStore::failing()), Box::new(clock()), false).unwrap();

        let err = register.add_student(new_student("S1", "Ann", "10A")).unwrap_err();
        assert!(matches!(err, RegisterError::Persistence(_)));
        // The mutation survives in memory for the running session.
        assert_eq!(register.students().len(), 1);
    }

    #[test]
    fn test_snapshot_round_trips_into_fresh_register() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "Grade 10A")).unwrap();
        register.add_student(new_student("S2", "Ben", "Grade 10B")).unwrap();
        register.mark(date(2024, 1, 1), "S1", Status::Present).unwrap();
        register.mark(date(2024, 1, 2), "S2", Status::Absent).unwrap();

        let snapshot = register.snapshot();
        assert_eq!(snapshot.export_date, "2024-01-01T00:00:00+00:00");

        let mut store = MemoryStore::new();
        store.set(STUDENTS_KEY, &serde_json::to_string(&snapshot.students).unwrap()).unwrap();
        store.set(ATTENDANCE_KEY, &serde_json::to_string(&snapshot.attendance).unwrap()).unwrap();
        let restored = Register::load(Box::new(store), Box::new(clock()), false).unwrap();

        assert_eq!(restored.students(), register.students());
        assert_eq!(
            restored.records_for(date(2024, 1, 1)),
            register.records_for(date(2024, 1, 1))
        );
        assert_eq!(
            restored.stats_for(date(2024, 1, 2), "", ""),
            register.stats_for(date(2024, 1, 2), "", "")
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut register = empty_register();
        register.add_student(new_student("S1", "Ann", "10A")).unwrap();
        register.mark(date(2024, 1, 1), "S1", Status::Present).unwrap();

        let snapshot = register.snapshot();
        register.mark(date(2024, 1, 1), "S1", Status::Absent).unwrap();

        let frozen = &snapshot.attendance[&date(2024, 1, 1)]["S1"];
        assert_eq!(frozen.status, Status::Present);
    }
}
