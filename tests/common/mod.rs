#![allow(dead_code)]

pub mod logging;
pub mod snapshot;
