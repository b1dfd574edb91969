pub mod authenticate;
pub mod check_in;
pub mod count_check_ins;
pub mod register_user;
