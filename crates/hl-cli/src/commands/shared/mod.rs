pub mod limit;
pub mod notices;
pub mod parse;
pub mod password;
