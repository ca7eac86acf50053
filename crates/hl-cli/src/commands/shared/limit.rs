/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `--limit` items when the flag is set.
pub fn truncate_to<T>(items: &mut Vec<T>, global: Option<u32>) {
    if let Some(limit) = global.and_then(|limit| usize::try_from(limit).ok()) {
        items.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, truncate_to};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn truncation_only_with_a_limit() {
        let mut items = vec![1, 2, 3];
        truncate_to(&mut items, None);
        assert_eq!(items.len(), 3);
        truncate_to(&mut items, Some(2));
        assert_eq!(items, vec![1, 2]);
    }
}
