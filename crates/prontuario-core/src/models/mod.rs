pub mod braden;
pub mod chart;
pub mod fluid_balance;
pub mod morse;
pub mod vitals;
