//! Adapter for externally computed perceptual image hashes.
//!
//! Resizing, grayscale conversion and hash extraction happen outside this
//! crate. The adapter only checks that the string it receives is something
//! the comparator can work with.

use tracing::debug;

use crate::error::FingerprintError;
use crate::fingerprint::ImageFingerprint;

/// Wrap an external perceptual-hash string.
///
/// ```
/// use perceptual::wrap_image_fingerprint;
///
/// let fp = wrap_image_fingerprint("00FF00ff").unwrap();
/// assert_eq!(fp.as_str(), "00FF00ff");
/// assert!(wrap_image_fingerprint("").is_err());
/// assert!(wrap_image_fingerprint("zz").is_err());
/// ```
pub fn wrap_image_fingerprint(raw_hash: &str) -> Result<ImageFingerprint, FingerprintError> {
    match ImageFingerprint::wrap(raw_hash) {
        Ok(fp) => Ok(fp),
        Err(err) => {
            debug!(error = %err, len = raw_hash.len(), "image_fingerprint_rejected");
            Err(err)
        }
    }
}
