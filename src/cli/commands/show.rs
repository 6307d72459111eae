use crate::cli::commands::load_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, colorize_optional};
use crate::view::RecordView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let dashboard = load_dashboard(cfg)?;
        let view = RecordView::from(dashboard.find(id)?);

        header(format!("Check-in {}", view.id));

        let fields = [
            ("Employee Name", view.employee_name.as_str()),
            ("Date • Time", view.when.as_str()),
            ("Day of Week", view.day_of_week.as_str()),
            ("Location Address", view.address.as_str()),
            ("Coordinates", view.coordinates.as_str()),
            ("Check-in Timestamp", view.checked_in_at.as_str()),
            ("Photo", view.photo_url.as_str()),
            ("View on Map", view.map_url.as_str()),
        ];

        for (label, value) in fields {
            println!("{CYAN}{:<20}{RESET} {}", label, colorize_optional(value));
        }
        println!();
    }
    Ok(())
}
