pub mod autocomplete;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod substring;
pub mod web;
