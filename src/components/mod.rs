pub mod badge;
pub mod footer;
pub mod icons;
pub mod interactive_demo;
pub mod navbar;
