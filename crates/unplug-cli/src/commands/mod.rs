pub mod analyze;
pub mod config;
pub mod run;
pub mod serve;
pub mod suggest;
