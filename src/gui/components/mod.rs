// src/gui/components/mod.rs
pub mod bar_chart;
pub mod data_table;
pub mod header;
pub mod town_picker;
