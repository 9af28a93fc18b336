pub mod initialize_program;
pub mod update_tronic_admin;

pub use initialize_program::*;
pub use update_tronic_admin::*;
