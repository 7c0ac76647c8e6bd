pub mod catalog;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod speech;
pub mod translation;
pub mod widget;
