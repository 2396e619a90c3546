mod landing;
mod photo;
mod register;

pub use landing::landing;
pub use photo::user_photo;
pub use register::{register, register_form};
