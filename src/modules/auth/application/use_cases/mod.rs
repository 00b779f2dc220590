pub mod create_superuser;
pub mod login_user;
pub mod register_user;
