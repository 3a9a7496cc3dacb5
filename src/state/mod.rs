mod persistence;

pub use persistence::{delete_profile, load_profile, save_profile};
