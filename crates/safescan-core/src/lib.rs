pub mod client;
pub mod config;
pub mod consts;
pub mod controller;
pub mod display;
pub mod error;
pub mod label;
pub mod media;
pub mod palette;
pub mod response;
