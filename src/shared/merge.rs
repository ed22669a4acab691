// ──────────────────────────────────────────────────────────
// Non-null merge for partial updates
// ──────────────────────────────────────────────────────────
// - None (field omitted or sent as null) => keep stored value
// - Some(v) => replace with v
//
// A partial update can never clear a field.
//

/// Merge into a required field.
pub fn merge_required<T>(update: Option<T>, target: &mut T) {
    if let Some(value) = update {
        *target = value;
    }
}

/// Merge into a nullable field.
pub fn merge_optional<T>(update: Option<T>, target: &mut Option<T>) {
    if let Some(value) = update {
        *target = Some(value);
    }
}

/// `Some` holding only whitespace.
pub fn is_blank(update: &Option<String>) -> bool {
    update.as_deref().is_some_and(|v| v.trim().is_empty())
}
