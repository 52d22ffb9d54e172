mod login_user;
mod register_user;
mod set_user_status;
mod update_user;
mod user_response;

pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterUserRequest};
pub use set_user_status::{
    __path_set_user_status_handler, set_user_status_handler, SetUserStatusRequest,
};
pub use update_user::{__path_update_user_handler, update_user_handler, UpdateUserRequest};
pub use user_response::UserResponse;
