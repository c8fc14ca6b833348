pub mod maintenance;
pub mod restore;
pub mod status;
