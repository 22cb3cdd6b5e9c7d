#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rollcall::libs::clock::FixedClock;
    use rollcall::libs::register::Register;
    use rollcall::libs::student::NewStudent;
    use rollcall::store::blob::{FileStore, StorageBackend};
    use rollcall::store::ledger::Status;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "09:00:00", 1_704_099_600_000)
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_absent_key_returns_none(_ctx: &mut StorageTestContext) {
        let store = FileStore::new();
        assert!(store.get("students").unwrap().is_none());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_set_then_get_round_trips(_ctx: &mut StorageTestContext) {
        let mut store = FileStore::new();
        store.set("students", "[]").unwrap();
        assert_eq!(store.get("students").unwrap().as_deref(), Some("[]"));

        store.set("students", "[{\"id\":\"S1\"}]").unwrap();
        assert_eq!(store.get("students").unwrap().as_deref(), Some("[{\"id\":\"S1\"}]"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_register_state_survives_reload(_ctx: &mut StorageTestContext) {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        {
            let mut register = Register::load(Box::new(FileStore::new()), Box::new(clock()), false).unwrap();
            register
                .add_student(NewStudent {
                    id: "S1".to_string(),
                    name: "Ann".to_string(),
                    class: "10A".to_string(),
                    email: "ann@school.edu".to_string(),
                })
                .unwrap();
            register.mark(day, "S1", Status::Present).unwrap();
        }

        let register = Register::load(Box::new(FileStore::new()), Box::new(clock()), false).unwrap();
        assert_eq!(register.students().len(), 1);
        assert_eq!(register.status_for(day, "S1"), Status::Present);
        let record = register.records_for(day);
        assert_eq!(record["S1"].time, "09:00:00");
        assert_eq!(record["S1"].timestamp, 1_704_099_600_000);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_seed_happens_only_once(_ctx: &mut StorageTestContext) {
        {
            let mut register = Register::load(Box::new(FileStore::new()), Box::new(clock()), true).unwrap();
            assert_eq!(register.students().len(), 8);
            register.remove_student("STU008").unwrap();
        }

        // A smaller but non-empty roster must not be re-seeded.
        let register = Register::load(Box::new(FileStore::new()), Box::new(clock()), true).unwrap();
        assert_eq!(register.students().len(), 7);
    }
}
