use anyhow::Result;
use prettytable::{row, Table};

use crate::db::clients::Client;
use crate::db::projects::Project;
use crate::db::report_filters::SavedReportFilter;
use crate::db::tags::Tag;
use crate::db::users::User;
use crate::libs::aggregate::{Report, WeekGroup};
use crate::libs::formatter::format_hms;
use crate::libs::timer::TimerRecord;

pub struct View {}

impl View {
    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "EMAIL"]);
        for user in users {
            table.add_row(row![user.id.unwrap_or(0), user.name, user.email]);
        }
        table.printstd();
        Ok(())
    }

    pub fn clients(clients: &[Client]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "EMAIL"]);
        for client in clients {
            table.add_row(row![client.id.unwrap_or(0), client.name, client.email.as_deref().unwrap_or("-")]);
        }
        table.printstd();
        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "CLIENT", "RATE", "COLOR"]);
        for project in projects {
            table.add_row(row![
                project.id.unwrap_or(0),
                project.name,
                project.client_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                project.hourly_rate.map(|r| format!("{:.2}", r)).unwrap_or_else(|| "-".to_string()),
                project.color.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn tags(tags: &[Tag]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "COLOR"]);
        for tag in tags {
            table.add_row(row![tag.id.unwrap_or(0), tag.name, tag.color.as_deref().unwrap_or("-")]);
        }
        table.printstd();
        Ok(())
    }

    pub fn timers(timers: &[TimerRecord]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "DESCRIPTION", "PROJECT", "TAG", "START", "END", "DURATION"]);
        for timer in timers {
            table.add_row(row![
                timer.id,
                timer.description.as_deref().unwrap_or("-"),
                timer.project.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
                timer.tag.as_ref().map(|t| t.name.as_str()).unwrap_or("-"),
                timer.start_time.format("%Y-%m-%d %H:%M"),
                timer.end_time.map(|e| e.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "running".to_string()),
                timer.duration().map(|d| format_hms(&d)).unwrap_or_else(|| "-".to_string())
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn weeks(weeks: &[WeekGroup]) -> Result<()> {
        for week in weeks {
            println!(
                "\nWeek {} - {} ({:.2} h)",
                week.week_start.format("%Y-%m-%d"),
                week.week_end.format("%Y-%m-%d"),
                week.total_hours
            );
            let mut table = Table::new();
            table.add_row(row!["DATE", "TIMERS", "HOURS"]);
            for day in &week.days {
                let hours: f64 = day.timers.iter().map(|t| t.hours()).sum();
                table.add_row(row![day.date, day.timers.len(), format!("{:.2}", hours)]);
            }
            table.printstd();
        }
        Ok(())
    }

    pub fn report(report: &Report) -> Result<()> {
        println!("Total hours:    {:.2}", report.total_hours);
        println!("Total earnings: {:.2}", report.total_earnings);

        if !report.by_project.is_empty() {
            println!("\nBy project:");
            let mut table = Table::new();
            table.add_row(row!["ID", "PROJECT", "HOURS", "SHARE %"]);
            for entity in &report.by_project {
                table.add_row(row![entity.id, entity.name, format!("{:.2}", entity.total_hours), format!("{:.2}", entity.percentage)]);
            }
            table.printstd();
        }

        if !report.by_tag.is_empty() {
            println!("\nBy tag:");
            let mut table = Table::new();
            table.add_row(row!["ID", "TAG", "HOURS", "SHARE %"]);
            for entity in &report.by_tag {
                table.add_row(row![entity.id, entity.name, format!("{:.2}", entity.total_hours), format!("{:.2}", entity.percentage)]);
            }
            table.printstd();
        }

        if !report.by_client.is_empty() {
            println!("\nBy client:");
            let mut table = Table::new();
            table.add_row(row!["ID", "CLIENT", "HOURS", "SHARE %"]);
            for entity in &report.by_client {
                table.add_row(row![entity.id, entity.name, format!("{:.2}", entity.total_hours), format!("{:.2}", entity.percentage)]);
            }
            table.printstd();
        }

        if !report.by_day.is_empty() {
            println!("\nBy day:");
            let mut table = Table::new();
            table.add_row(row!["DATE", "HOURS", "EARNINGS", "SHARE %"]);
            for day in &report.by_day {
                table.add_row(row![
                    day.date,
                    format!("{:.2}", day.hours),
                    format!("{:.2}", day.earnings),
                    format!("{:.2}", day.percentage)
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn report_filters(filters: &[SavedReportFilter]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "FROM", "TO", "PROJECTS", "TAGS", "CLIENTS"]);
        for filter in filters {
            table.add_row(row![
                filter.id.unwrap_or(0),
                filter.name,
                filter.from_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
                filter.to_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
                format_ids(&filter.project_ids),
                format_ids(&filter.tag_ids),
                format_ids(&filter.client_ids)
            ]);
        }
        table.printstd();
        Ok(())
    }
}

fn format_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
    }
}
