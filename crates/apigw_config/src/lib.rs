//! # apigw_config
//!
//! Ingress definitions for the API Gateway template synthesizer.
//!
//! An ingress definition carries the path rules, backend port, stage and
//! authorization settings, plus the network facts discovered for the cluster.
//! This crate loads definitions from YAML, JSON or TOML and validates them
//! with human-readable errors and warnings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apigw_config::{ConfigReader, ConfigValidator};
//!
//! let definition = ConfigReader::read_file("ingress.yaml").unwrap();
//! let result = ConfigValidator::validate(&definition);
//! for error in &result.errors {
//!     eprintln!("Error: {}", error);
//! }
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod validator;

pub use error::{ConfigError, ConfigResult};
pub use models::{CustomDomain, IngressDefinition, NetworkFacts, ResolvedNetwork};
pub use reader::{ConfigFormat, ConfigReader};
pub use validator::{ConfigValidator, ValidationResult};
