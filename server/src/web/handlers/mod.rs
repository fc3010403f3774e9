// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod catalog_handlers;
