pub mod back_to_top;
pub mod calendar;
