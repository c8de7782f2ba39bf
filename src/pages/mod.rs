pub mod intake;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod offer;
pub mod portal;
