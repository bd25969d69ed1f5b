//! Password hashing and verification via bcrypt.

/// Fixed cost factor. `bcrypt::DEFAULT_COST` is 12, which would silently
/// slow every registration down.
const HASH_COST: u32 = 10;

/// Salted one-way hash. The output string embeds algorithm, cost and salt,
/// so verification needs no separate salt storage.
pub fn hash(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// Compares a plaintext candidate against a stored hash. A malformed hash
/// counts as a mismatch rather than an error.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
