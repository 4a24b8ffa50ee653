pub mod config;
pub mod controller;
#[cfg(feature = "server")]
pub mod mock_api;
pub mod modal;
pub mod models;
pub mod notify;
pub mod post_form;
pub mod presentation;
pub mod services;
