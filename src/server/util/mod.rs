pub mod otp;
pub mod pagination;
pub mod password;
pub mod validation;
