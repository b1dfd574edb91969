pub mod use_cases;

pub use use_cases::{
    authenticate::{AuthenticateError, AuthenticateUseCase},
    check_in::{CheckInError, CheckInUseCase},
    count_check_ins::CountCheckInsUseCase,
    register_user::{RegisterUserError, RegisterUserUseCase},
};
