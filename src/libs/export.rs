//! Report export to CSV files and styled Excel workbooks.
//!
//! Both exporters are pure transformations of a timer snapshot into a file
//! artifact. Every export writes to a uniquely named file (millisecond
//! timestamp suffix) under the reports directory, so concurrent exports
//! never collide; the caller owns the artifact from there — streaming it to
//! the requester and deleting it afterwards is not this module's concern.
//!
//! ## CSV Layout
//!
//! One row per timer with the fixed header
//! `ID, User Name, Project Name, Duration (Hours), Start Time, End Time,
//! Created At, Updated At`. Missing user/project/timestamps render as
//! `N/A`, open timers export a 0.00 duration, and the file closes with a
//! `TOTAL` row carrying only the grand-total hours in the duration column.
//!
//! ## Excel Layout
//!
//! A project summary sheet: for each project a bold subtotal row, one row
//! per distinct description under it, and a blank separator row; after all
//! projects a bold grand-total row. Columns are Project, Description, Time
//! (HH:MM:SS), Time (decimal hours), and Amount (hours × flat rate). The
//! populated table is boxed: top border on the header row, left/right
//! borders on every non-empty row, bottom border on the total row.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Utc};
use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::{format_hms, round2};
use crate::libs::timer::TimerRecord;

/// Canonical attachment name offered to download clients.
pub const CSV_ATTACHMENT_NAME: &str = "timer-report.csv";
/// Canonical attachment name offered to download clients.
pub const EXCEL_ATTACHMENT_NAME: &str = "timer-report.xlsx";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per timer plus a total row.
    Csv,
    /// Excel workbook with a per-project summary sheet.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes report artifacts for one timer snapshot.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter targeting `output_path`, or a unique
    /// `timer-report-<millis>.<ext>` under the reports directory when no
    /// path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Result<Self> {
        let output_path = match output_path {
            Some(path) => path,
            None => {
                let name = format!("timer-report-{}.{}", Utc::now().timestamp_millis(), format.extension());
                DataStorage::new().reports_dir()?.join(name)
            }
        };
        Ok(Self { format, output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Renders the snapshot to the configured format and returns the
    /// artifact path. `rate` is the flat billing rate applied to the Excel
    /// amount column; the CSV format carries no amounts and ignores it.
    pub fn export(&self, timers: &[TimerRecord], rate: f64) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(timers)?,
            ExportFormat::Excel => self.export_excel(timers, rate)?,
        }
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, timers: &[TimerRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "ID",
            "User Name",
            "Project Name",
            "Duration (Hours)",
            "Start Time",
            "End Time",
            "Created At",
            "Updated At",
        ])?;

        let mut total_hours = 0.0;
        for timer in timers {
            total_hours += timer.hours();
            wtr.write_record(&[
                timer.id.to_string(),
                timer.user_email.clone().unwrap_or_else(|| "N/A".to_string()),
                timer.project.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "N/A".to_string()),
                format!("{:.2}", timer.hours()),
                format_timestamp(Some(timer.start_time)),
                format_timestamp(timer.end_time),
                format_timestamp(timer.created_at),
                format_timestamp(timer.updated_at),
            ])?;
        }

        // Summary row: grand total hours in the duration column only.
        wtr.write_record(&[
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            format!("{:.2}", round2(total_hours)),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, timers: &[TimerRecord], rate: f64) -> Result<()> {
        // Seconds per project, split by distinct description. Open timers
        // contribute zero seconds but still surface their description.
        let mut projects: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
        for timer in timers {
            let project = timer.project.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "(no project)".to_string());
            let description = timer.description.clone().unwrap_or_else(|| "(no description)".to_string());
            let seconds = timer.duration().map(|d| d.num_seconds()).unwrap_or(0);
            *projects.entry(project).or_default().entry(description).or_default() += seconds;
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header = Format::new().set_bold().set_border_top(FormatBorder::Thin);
        let header_left = header.clone().set_border_left(FormatBorder::Thin);
        let header_right = header.clone().set_border_right(FormatBorder::Thin);
        let subtotal = Format::new().set_bold();
        let subtotal_left = subtotal.clone().set_border_left(FormatBorder::Thin);
        let subtotal_right = subtotal.clone().set_border_right(FormatBorder::Thin);
        let detail = Format::new();
        let detail_left = detail.clone().set_border_left(FormatBorder::Thin);
        let detail_right = detail.clone().set_border_right(FormatBorder::Thin);
        let total = Format::new().set_bold().set_border_bottom(FormatBorder::Thin);
        let total_left = total.clone().set_border_left(FormatBorder::Thin);
        let total_right = total.clone().set_border_right(FormatBorder::Thin);

        worksheet.write_string_with_format(0, 0, "Project", &header_left)?;
        worksheet.write_string_with_format(0, 1, "Description", &header)?;
        worksheet.write_string_with_format(0, 2, "Time (HH:MM:SS)", &header)?;
        worksheet.write_string_with_format(0, 3, "Time (decimal)", &header)?;
        worksheet.write_string_with_format(0, 4, "Amount", &header_right)?;

        let mut row = 1;
        let mut grand_seconds = 0i64;
        for (project, descriptions) in &projects {
            let project_seconds: i64 = descriptions.values().sum();
            grand_seconds += project_seconds;
            let project_hours = project_seconds as f64 / 3600.0;

            worksheet.write_string_with_format(row, 0, project, &subtotal_left)?;
            worksheet.write_string_with_format(row, 1, "", &subtotal)?;
            worksheet.write_string_with_format(row, 2, &format_hms(&Duration::seconds(project_seconds)), &subtotal)?;
            worksheet.write_number_with_format(row, 3, round2(project_hours), &subtotal)?;
            worksheet.write_number_with_format(row, 4, round2(project_hours * rate), &subtotal_right)?;
            row += 1;

            for (description, seconds) in descriptions {
                let hours = *seconds as f64 / 3600.0;
                worksheet.write_string_with_format(row, 0, "", &detail_left)?;
                worksheet.write_string_with_format(row, 1, description, &detail)?;
                worksheet.write_string_with_format(row, 2, &format_hms(&Duration::seconds(*seconds)), &detail)?;
                worksheet.write_number_with_format(row, 3, round2(hours), &detail)?;
                worksheet.write_number_with_format(row, 4, round2(hours * rate), &detail_right)?;
                row += 1;
            }

            // Blank separator row between project blocks.
            row += 1;
        }

        let grand_hours = grand_seconds as f64 / 3600.0;
        worksheet.write_string_with_format(row, 0, "TOTAL", &total_left)?;
        worksheet.write_string_with_format(row, 1, "", &total)?;
        worksheet.write_string_with_format(row, 2, &format_hms(&Duration::seconds(grand_seconds)), &total)?;
        worksheet.write_number_with_format(row, 3, round2(grand_hours), &total)?;
        worksheet.write_number_with_format(row, 4, round2(grand_hours * rate), &total_right)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format(TIMESTAMP_FORMAT).to_string()).unwrap_or_else(|| "N/A".to_string())
}
