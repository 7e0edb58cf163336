pub mod common_nav;
pub mod components;
pub mod help;
pub mod layout;
pub mod style;
pub mod toast;
