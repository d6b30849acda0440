pub mod aggregate;
pub mod categorize;
