pub mod templates;

pub use templates::create_default_config;
