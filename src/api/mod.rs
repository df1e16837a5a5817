pub mod models;
pub mod reddit;
pub mod youtube;

pub use models::*;
pub use reddit::*;
pub use youtube::*;

use once_cell::sync::Lazy;

pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);
