use crate::cli::commands::{filter_query, load_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::table::{Column, Table};
use crate::view::{RecordView, record_views};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { name, date, json } = cmd {
        let mut dashboard = load_dashboard(cfg)?;
        dashboard.apply_filter(filter_query(name, date));

        let views = record_views(dashboard.filtered_records());

        if *json {
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }

        println!(
            "{}Total:{} {} {}(of {} from {}){}",
            CYAN,
            RESET,
            dashboard.total(),
            GREY,
            dashboard.all_records().len(),
            dashboard.source(),
            RESET
        );

        if views.is_empty() {
            info("No check-in records found.");
            return Ok(());
        }

        println!();
        print!("{}", render_records(&views));
    }
    Ok(())
}

fn render_records(views: &[RecordView]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 12),
        Column::new("Employee", 24),
        Column::new("Date • Time", 24),
        Column::new("Day", 10),
        Column::new("Address", 40),
        Column::new("Coordinates", 24),
    ]);

    for v in views {
        table.add_row(vec![
            v.id.clone(),
            v.employee_name.clone(),
            v.when.clone(),
            v.day_of_week.clone(),
            v.address.clone(),
            v.coordinates.clone(),
        ]);
    }

    table.fit();
    table.render()
}
