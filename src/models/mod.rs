pub mod classes;
pub mod orders;
pub mod portfolios;
pub mod schedules;
