use crate::cli::commands::load_dashboard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_share};
use crate::utils::table::{Column, Table};
use crate::view::StatsView;

pub fn handle(json: bool, cfg: &Config) -> AppResult<()> {
    let dashboard = load_dashboard(cfg)?;
    let summary = dashboard.employee_stats();
    let view = StatsView::from(&summary);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    header("Employee statistics");
    println!("Total Employees: {}", view.total_employees);
    println!("Total Check-ins: {}", view.total_checkins);
    println!();

    if view.employees.is_empty() {
        info("No check-ins yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Employee", 24),
        Column::new("Check-ins", 9),
        Column::new("First", 10),
        Column::new("Latest", 10),
        Column::new("Avg/week", 8),
        Column::new("Share", 5),
    ]);

    for e in &view.employees {
        table.add_row(vec![
            e.name.clone(),
            e.count.to_string(),
            e.first_checkin.clone(),
            e.latest_checkin.clone(),
            e.avg_per_week.clone(),
            format!("{}%", e.percentage),
        ]);
    }

    table.fit();
    print!("{}", table.render());

    println!();
    for e in &view.employees {
        println!(
            "{:<24} {}{}{} {}",
            crate::utils::truncate(&e.name, 24),
            color_for_share(e.percentage),
            e.bar,
            RESET,
            e.share_label
        );
    }

    Ok(())
}
