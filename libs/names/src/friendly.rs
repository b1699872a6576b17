//! Friendly name construction.
//!
//! A friendly name is a sanitized identifier followed by a short fragment of
//! a content hash, for example `docker.io-nginx-latest-a3ac8c`. Names are
//! capped at [`MAX_FRIENDLY_NAME_LEN`]; when the cap is exceeded the
//! identifier portion is cut from the right and the hash fragment is kept
//! whole.

use tracing::debug;

use crate::error::{InvalidFriendlyNameError, InvalidReason};
use crate::sanitize::sanitize;
use crate::validate::{validate_dns_subdomain_name, MAX_DNS_SUBDOMAIN_LEN};

/// Maximum length of any friendly name.
pub const MAX_FRIENDLY_NAME_LEN: usize = MAX_DNS_SUBDOMAIN_LEN;

/// Number of trailing image hash characters appended to image names.
pub const IMAGE_HASH_SUFFIX_LEN: usize = 6;

/// Shortest image hash accepted.
pub const MIN_IMAGE_HASH_LEN: usize = IMAGE_HASH_SUFFIX_LEN;

/// Length of each hashed ID fragment appended to instance names.
pub const INSTANCE_HASH_FRAGMENT_LEN: usize = 4;

/// Builds a friendly name for a container image.
///
/// The tag is sanitized (`docker.io/nginx:latest` becomes
/// `docker.io-nginx-latest`) and the last six characters of `image_hash`
/// are appended.
pub fn image_info_to_friendly_name(
    image_tag: &str,
    image_hash: &str,
) -> Result<String, InvalidFriendlyNameError> {
    if image_tag.is_empty() {
        return Err(reject(InvalidReason::EmptyImageTag));
    }

    check_hash(image_hash, MIN_IMAGE_HASH_LEN)?;

    let tag = sanitize(image_tag);
    if tag.is_empty() {
        return Err(reject(InvalidReason::EmptySanitizedTag {
            tag: image_tag.to_string(),
        }));
    }

    Ok(join_with_cap(&tag, tail(image_hash, IMAGE_HASH_SUFFIX_LEN)))
}

/// Builds a friendly name for a workload instance.
///
/// Produces `<namespace>-<kind>-<name>-<first4>-<last4>`, where the
/// fragments come from the start and end of `hashed_id`. Components are not
/// sanitized: the assembled `namespace-kind-name` must already be a valid
/// DNS subdomain name, so `web/app` or an assembled name over 253
/// characters is rejected.
pub fn instance_id_to_friendly_name(
    name: &str,
    namespace: &str,
    kind: &str,
    hashed_id: &str,
) -> Result<String, InvalidFriendlyNameError> {
    let assembled = [namespace, kind, name].join("-");

    if let Err(source) = validate_dns_subdomain_name(&assembled) {
        return Err(reject(InvalidReason::InvalidInstanceName {
            name: assembled,
            source,
        }));
    }

    check_hash(hashed_id, INSTANCE_HASH_FRAGMENT_LEN * 2)?;

    let suffix = format!(
        "{}-{}",
        head(hashed_id, INSTANCE_HASH_FRAGMENT_LEN),
        tail(hashed_id, INSTANCE_HASH_FRAGMENT_LEN)
    );

    Ok(join_with_cap(&assembled, &suffix))
}

/// Characters that may not appear in a hash.
const HASH_SEPARATORS: [char; 2] = [':', '/'];

/// Checks that a hash is non-empty, has at least `min` characters and
/// contains no `:` or `/`.
fn check_hash(hash: &str, min: usize) -> Result<(), InvalidFriendlyNameError> {
    if hash.is_empty() {
        return Err(reject(InvalidReason::EmptyHash));
    }

    if let Some(ch) = hash.chars().find(|c| HASH_SEPARATORS.contains(c)) {
        return Err(reject(InvalidReason::InvalidHashCharacter { ch }));
    }

    let len = hash.chars().count();
    if len < min {
        return Err(reject(InvalidReason::HashTooShort { len, min }));
    }

    Ok(())
}

/// First `n` characters of `s`, or all of `s` if it is shorter.
fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Last `n` characters of `s`, or all of `s` if it is shorter.
fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }

    match s.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

/// Joins `portion` and `suffix` with a hyphen, cutting `portion` so the
/// result fits in [`MAX_FRIENDLY_NAME_LEN`].
///
/// `portion` must be ASCII.
fn join_with_cap(portion: &str, suffix: &str) -> String {
    let room = MAX_FRIENDLY_NAME_LEN - 1 - suffix.len();

    let kept = if portion.len() > room {
        debug!(
            original_len = portion.len(),
            kept_len = room,
            "truncating friendly name"
        );
        &portion[..room]
    } else {
        portion
    };

    let mut name = String::with_capacity(kept.len() + 1 + suffix.len());
    name.push_str(kept);
    name.push('-');
    name.push_str(suffix);
    name
}

fn reject(reason: InvalidReason) -> InvalidFriendlyNameError {
    debug!(%reason, "rejected friendly name input");
    InvalidFriendlyNameError::new(reason)
}
