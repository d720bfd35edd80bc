use rand::{distributions::Alphanumeric, Rng};
use zeroize::Zeroize;

/// Overwrites a plaintext password holder and leaves it empty.
///
/// The holder's own buffer is filled with random alphanumeric bytes and then
/// zeroized, without allocating an intermediate copy of the secret. A no-op on an
/// already-empty holder.
///
/// This is a mitigation, not a guarantee: copies made before this call (moves,
/// reallocations, provider request buffers) may still be resident. Keep the secret's
/// lifetime as short as structurally possible and call this as soon as the plaintext
/// is no longer needed.
pub fn scrub_password(password: &mut String) {
    if password.is_empty() {
        return;
    }

    // into_bytes reuses the holder's allocation, so the original bytes are
    // overwritten in place rather than left behind in a dropped buffer.
    let mut bytes = std::mem::take(password).into_bytes();
    let mut rng = rand::thread_rng();
    for byte in bytes.iter_mut() {
        *byte = rng.sample(Alphanumeric);
    }

    // Alphanumeric filler is ASCII, so the buffer stays valid UTF-8.
    *password = String::from_utf8(bytes).unwrap_or_default();
    password.zeroize();
}
