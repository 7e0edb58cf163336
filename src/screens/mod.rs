pub mod confirm_quit;
pub mod generate;
pub mod launch_form;
pub mod lookup;

pub use confirm_quit::ConfirmQuitScreen;
pub use generate::GenerateScreen;
pub use launch_form::LaunchFormScreen;
pub use lookup::LookupScreen;
