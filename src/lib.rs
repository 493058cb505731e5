// src/lib.rs

//! Club crawler library
//!
//! Searches the federation club finder around each input coordinate, scrapes
//! every club's staff page and keeps a single main contact email per club.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
