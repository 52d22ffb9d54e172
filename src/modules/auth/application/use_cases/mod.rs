pub mod create_user;
pub mod login_user;
pub mod set_user_status;
pub mod update_user;
