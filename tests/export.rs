#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rollcall::libs::clock::FixedClock;
    use rollcall::libs::export::{ExportData, ExportFormat, Exporter};
    use rollcall::libs::register::Register;
    use rollcall::libs::student::NewStudent;
    use rollcall::store::blob::FileStore;
    use rollcall::store::ledger::Status;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn sample_register() -> Register {
        let clock = FixedClock::new(day(), "08:45:00", 1_705_308_300_000);
        let mut register = Register::load(Box::new(FileStore::new()), Box::new(clock), false).unwrap();
        register
            .add_student(NewStudent {
                id: "STU001".to_string(),
                name: "Alice Johnson".to_string(),
                class: "Grade 10A".to_string(),
                email: "alice@school.edu".to_string(),
            })
            .unwrap();
        register
            .add_student(NewStudent {
                id: "STU002".to_string(),
                name: "Bob Smith".to_string(),
                class: "Grade 10A".to_string(),
                email: "bob@school.edu".to_string(),
            })
            .unwrap();
        register.mark(day(), "STU001", Status::Present).unwrap();
        register
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_snapshot_json(ctx: &mut ExportTestContext) {
        let register = sample_register();
        let output_path = ctx.temp_dir.path().join("snapshot.json");

        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(&register, ExportData::Snapshot, day()).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["exportDate"], "2024-01-15T00:00:00+00:00");
        assert_eq!(value["students"].as_array().unwrap().len(), 2);
        assert_eq!(value["attendance"]["2024-01-15"]["STU001"]["status"], "present");
        assert_eq!(value["attendance"]["2024-01-15"]["STU001"]["time"], "08:45:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_snapshot_rejects_non_json_formats(ctx: &mut ExportTestContext) {
        let register = sample_register();
        let output_path = ctx.temp_dir.path().join("snapshot.csv");

        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        assert!(exporter.export(&register, ExportData::Snapshot, day()).is_err());
        assert!(!output_path.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_day_csv(ctx: &mut ExportTestContext) {
        let register = sample_register();
        let output_path = ctx.temp_dir.path().join("day.csv");

        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(&register, ExportData::Day, day()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Alice Johnson"));
        assert!(content.contains("present"));
        assert!(content.contains("SUMMARY"));
        // 1 of 2 present.
        assert!(content.contains("50%"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_day_json(ctx: &mut ExportTestContext) {
        let register = sample_register();
        let output_path = ctx.temp_dir.path().join("day.json");

        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(&register, ExportData::Day, day()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["date"], "2024-01-15");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["present"], 1);
        assert_eq!(value["stats"]["rate"], 50);
        // Unmarked students appear as rows without a time.
        assert_eq!(value["rows"][1]["status"], "unmarked");
        assert!(value["rows"][1]["time"].is_null());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_day_excel(ctx: &mut ExportTestContext) {
        let register = sample_register();
        let output_path = ctx.temp_dir.path().join("day.xlsx");

        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(&register, ExportData::Day, day()).unwrap();

        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }
}
