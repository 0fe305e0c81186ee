// glframe-host library
// Static host for the glframe page shell using axum and tokio

// Configuration
pub mod config;

// Embedded shell assets (single-binary distribution)
pub mod embedded;

// HTTP surface
pub mod serve;
