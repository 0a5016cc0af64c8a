use ulid::Ulid;

/// Produces an opaque, lexicographically sortable identifier.
pub fn next_id() -> String {
    Ulid::new().to_string()
}
