// src/gui/components/mod.rs
pub mod export_bar;
pub mod session_list;
pub mod side_panel;
pub mod tabs;
pub mod timetable;
pub mod week_bar;
