mod app_data_store;
pub mod views;

pub use app_data_store::AppDataStore;
