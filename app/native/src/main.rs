#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::multiple_crate_versions)]

//! Pinnote desktop entry point.

fn main() { pinnote_lib::run(); }
