/// State management module
///
/// This module handles all application state, including:
/// - Plant records and sample data (data.rs)
/// - The in-memory plant set and filtering (catalog.rs)
/// - Search query, selection and modal visibility (screen.rs)
/// - Route history for the back action (navigation.rs)

pub mod catalog;
pub mod data;
pub mod navigation;
pub mod screen;
