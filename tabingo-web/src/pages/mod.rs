pub mod bingo;
pub mod food;
pub mod not_found;
pub mod picture;

pub use bingo::BingoPage;
pub use food::FoodPage;
pub use not_found::NotFound;
pub use picture::PicturePage;
