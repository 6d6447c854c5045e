pub mod cell;
pub mod gallery;
pub mod grid;
pub mod progress_bar;
pub mod upload;

pub use cell::FlipCell;
pub use gallery::PhotoGallery;
pub use grid::Grid;
pub use progress_bar::ProgressBar;
pub use upload::UploadButton;
