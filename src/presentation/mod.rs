// Presentation layer - UI events, collaborator views, and the controller
pub mod controller;
pub mod events;
pub mod format;
pub mod views;
