#![allow(dead_code)]

pub mod workers;
