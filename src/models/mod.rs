pub mod checkin;
pub mod employee_stat;
pub mod session;

pub use checkin::CheckinRecord;
pub use employee_stat::EmployeeStat;
pub use session::Session;
