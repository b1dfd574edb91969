pub mod check_in;
pub mod email;
pub mod password;
pub mod user;
