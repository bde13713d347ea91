pub mod github;
pub mod linkedin;
pub mod profile;
pub mod suggestion;
