pub mod autopilot;
pub mod config;
pub mod rendering;
pub mod runner;
pub mod storage;
