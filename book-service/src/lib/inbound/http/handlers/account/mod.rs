pub mod login;
pub mod register;

pub use login::login;
pub use login::LoginResponseData;
pub use register::register;
