use crate::math::Real;

/// Warm-start data of the distance query.
///
/// Stores the indices of the proxy vertices that formed the simplex of the
/// previous distance query, so the next query between the same pair of
/// proxies can start from them. It is only a hint: the distance query must be
/// correct for any cache content, including a default one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimplexCache {
    /// Length or area of the cached simplex, used to detect stale caches.
    pub metric: Real,
    /// The number of cached vertices, in `0..=3`.
    pub count: usize,
    /// Vertex indices on the first proxy.
    pub index_a: [usize; 3],
    /// Vertex indices on the second proxy.
    pub index_b: [usize; 3],
}

impl SimplexCache {
    /// The cached vertex indices on the first proxy.
    #[inline]
    pub fn indices_a(&self) -> &[usize] {
        &self.index_a[..self.count.min(3)]
    }

    /// The cached vertex indices on the second proxy.
    #[inline]
    pub fn indices_b(&self) -> &[usize] {
        &self.index_b[..self.count.min(3)]
    }
}
