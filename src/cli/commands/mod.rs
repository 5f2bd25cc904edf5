mod command_result;
pub mod convert;
pub mod extract;
pub mod init;
pub mod rename;
pub mod render;

pub use command_result::*;
