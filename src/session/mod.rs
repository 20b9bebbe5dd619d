pub mod command;
pub mod console;
pub mod response;
pub mod worker;
