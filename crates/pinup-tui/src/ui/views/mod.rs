pub mod connect;
pub mod gallery;
pub mod lightbox;
