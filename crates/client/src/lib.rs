//! LUSID client - HTTP access to the LUSID API.
//!
//! This crate provides:
//! - [`LusidClient`]: a REST client implementing one trait per API group
//! - [`ClientConfig`]: connection settings loaded from the environment or a secrets file
//! - [`AsyncResult`] and the [`requests`] helpers for running requests
//!   off-task or fanning them out cooperatively
//!
//! # Usage
//!
//! ```rust,ignore
//! use lusid_client::{ApplicationMetadataApi, ClientConfig, LusidClient};
//!
//! let client = LusidClient::new(&ClientConfig::from_env()?)?;
//! let versions = client.get_lusid_versions().await?;
//! ```

mod apis;
mod client;
mod config;
mod error;
pub mod requests;

pub use apis::*;
pub use client::LusidClient;
pub use config::{ClientConfig, DEFAULT_SECRETS_PATH};
pub use error::{ignore_already_exists, ClientError, Result};
pub use requests::{AsyncResult, CancelHandle, WaitResult};
