//! The components module contains all shared components for the page.

mod app;
mod browser;
mod errors;
mod filter_bar;
mod player;
mod track_list;
mod youtube;

pub use app::*;
pub use browser::*;
pub use errors::*;
pub use filter_bar::*;
pub use player::*;
pub use track_list::*;
pub use youtube::*;
