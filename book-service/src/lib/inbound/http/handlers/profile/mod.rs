pub mod delete_profile;
pub mod get_profile;
pub mod update_profile;

pub use delete_profile::delete_profile;
pub use get_profile::get_profile;
pub use update_profile::update_profile;
pub use update_profile::UpdatedUserResponseData;
