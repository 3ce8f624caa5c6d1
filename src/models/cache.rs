use chrono::{DateTime, Duration, Utc};

/// A memoized response with a wall-clock expiry.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_live() {
        let entry = CacheEntry::new(vec![2021], 60);
        assert!(!entry.is_expired());
        assert_eq!(entry.value, vec![2021]);
    }

    #[test]
    fn negative_ttl_is_expired() {
        assert!(CacheEntry::new((), -1).is_expired());
    }
}
