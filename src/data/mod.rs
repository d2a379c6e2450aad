pub mod extract;
pub mod loader;
pub mod parser;
pub mod record;
