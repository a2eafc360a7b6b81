//! Colony Sim - ant colony and hive management console simulations

pub mod apiary;
pub mod cli;
pub mod colony;
pub mod command;
pub mod core;
