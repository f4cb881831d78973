//! MCP tool handlers for the coursework server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add_task;
pub mod delete_task;
pub mod edit_task;
pub mod history;
pub mod list;
pub mod show_task;
pub mod statistics;
