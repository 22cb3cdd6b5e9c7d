//! Data export for backup and external analysis.
//!
//! Two documents can be produced: the full state snapshot (students plus
//! all attendance, stamped with the export time) and a single day's
//! register with its statistics. The snapshot is a JSON document whose
//! data fields match the persisted blobs, so it doubles as a backup that
//! can be loaded back. The day register also renders to CSV and Excel.

use crate::libs::messages::Message;
use crate::libs::query::DayStats;
use crate::libs::register::{DayRow, Register};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Structured JSON for programmatic processing and backup.
    Json,
    /// Excel workbook with header formatting.
    Excel,
}

/// What to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Full state snapshot: students, all attendance, export timestamp.
    Snapshot,
    /// One day's register rows plus aggregate statistics.
    Day,
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// Creates an exporter; with no explicit path the output file name
    /// is derived from the data type and date at export time.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Dispatches to the handler for the requested data type.
    pub fn export(&self, register: &Register, data: ExportData, date: NaiveDate) -> Result<()> {
        match data {
            ExportData::Snapshot => self.export_snapshot(register),
            ExportData::Day => self.export_day(register, date),
        }
    }

    /// Writes the full snapshot document, named
    /// `attendance-data-<date>.json` by default.
    fn export_snapshot(&self, register: &Register) -> Result<()> {
        if !matches!(self.format, ExportFormat::Json) {
            msg_bail_anyhow!(Message::SnapshotJsonOnly);
        }

        let snapshot = register.snapshot();
        let path = self.resolve_path(&format!("attendance-data-{}", register.today()));
        let json = serde_json::to_string_pretty(&snapshot)?;
        File::create(&path)?.write_all(json.as_bytes())?;

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    /// Writes one day's register in the chosen format.
    fn export_day(&self, register: &Register, date: NaiveDate) -> Result<()> {
        let rows = register.day_rows(date, "", "");
        let stats = register.stats_for(date, "", "");
        let path = self.resolve_path(&format!("attendance-day-{}", date));

        match self.format {
            ExportFormat::Csv => self.export_day_csv(&path, date, &rows, &stats)?,
            ExportFormat::Json => {
                let doc = serde_json::json!({
                    "date": date.to_string(),
                    "rows": rows,
                    "stats": stats,
                });
                let json = serde_json::to_string_pretty(&doc)?;
                File::create(&path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_day_excel(&path, date, &rows, &stats)?,
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    fn resolve_path(&self, stem: &str) -> PathBuf {
        let extension = match self.format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", stem, extension)))
    }

    /// Register rows followed by a summary section.
    fn export_day_csv(&self, path: &Path, date: NaiveDate, rows: &[DayRow], stats: &DayStats) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["ID", "Name", "Class", "Status", "Time"])?;
        for row in rows {
            wtr.write_record(&[
                row.id.clone(),
                row.name.clone(),
                row.class.clone(),
                row.status.to_string(),
                row.time.clone().unwrap_or_else(|| "-".to_string()),
            ])?;
        }

        wtr.write_record(["", "", "", "", ""])?;
        wtr.write_record(["SUMMARY", "", "", "", ""])?;
        wtr.write_record(&["Date", &date.to_string(), "", "", ""])?;
        wtr.write_record(&["Present", &stats.present.to_string(), "", "", ""])?;
        wtr.write_record(&["Absent", &stats.absent.to_string(), "", "", ""])?;
        wtr.write_record(&["Total", &stats.total.to_string(), "", "", ""])?;
        wtr.write_record(&["Rate", &format!("{}%", stats.rate), "", "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_day_excel(&self, path: &Path, date: NaiveDate, rows: &[DayRow], stats: &DayStats) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, &format!("Attendance Register - {}", date), &title_format)?;
        worksheet.write_string_with_format(2, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Name", &header_format)?;
        worksheet.write_string_with_format(2, 2, "Class", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Status", &header_format)?;
        worksheet.write_string_with_format(2, 4, "Time", &header_format)?;

        let mut row = 3;
        for entry in rows {
            worksheet.write_string(row, 0, &entry.id)?;
            worksheet.write_string(row, 1, &entry.name)?;
            worksheet.write_string(row, 2, &entry.class)?;
            worksheet.write_string(row, 3, &entry.status.to_string())?;
            worksheet.write_string(row, 4, entry.time.as_deref().unwrap_or("-"))?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        row += 1;
        worksheet.write_string(row, 0, "Present")?;
        worksheet.write_number(row, 1, stats.present as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "Absent")?;
        worksheet.write_number(row, 1, stats.absent as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "Total")?;
        worksheet.write_number(row, 1, stats.total as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "Rate")?;
        worksheet.write_string(row, 1, &format!("{}%", stats.rate))?;

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
