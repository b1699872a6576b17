//! # fname-names
//!
//! Friendly names for workloads and DNS name validation.
//!
//! ## Friendly names
//!
//! Raw identifiers such as image references or `namespace/kind/name`
//! tuples are turned into short, readable, DNS-safe names with a hash
//! fragment for uniqueness:
//!
//! - `docker.io/nginx:latest` + image hash -> `docker.io-nginx-latest-a3ac8c`
//! - `default` / `Pod` / `reverse-proxy` + hashed ID -> `default-Pod-reverse-proxy-1ba5-4aaf`
//!
//! Every friendly name is at most 253 characters and always ends with the
//! complete hash fragment.
//!
//! ## Validation
//!
//! [`is_valid_dns_subdomain_name`] and [`is_valid_dns_label_name`] check
//! RFC 1123 syntax; the `validate_*` variants report which rule failed.
//!
//! All functions are pure and can be called from any thread.

mod error;
mod friendly;
mod sanitize;
mod validate;

pub use error::{DnsNameError, InvalidFriendlyNameError, InvalidReason};
pub use friendly::{
    image_info_to_friendly_name, instance_id_to_friendly_name, IMAGE_HASH_SUFFIX_LEN,
    INSTANCE_HASH_FRAGMENT_LEN, MAX_FRIENDLY_NAME_LEN, MIN_IMAGE_HASH_LEN,
};
pub use sanitize::sanitize;
pub use validate::{
    is_valid_dns_label_name, is_valid_dns_subdomain_name, validate_dns_label_name,
    validate_dns_subdomain_name, MAX_DNS_LABEL_LEN, MAX_DNS_SUBDOMAIN_LEN,
};
