pub mod report;
pub mod runner;
pub mod sources;
pub mod table;
