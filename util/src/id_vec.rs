use std::marker::PhantomData;

/// Vec wrapper that uses typed indexes.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct IdVec<K, V> {
    vec: Vec<V>,
    _phantom: PhantomData<K>,
}

impl<K, V> Default for IdVec<K, V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K, V> IdVec<K, V> {
    fn new(vec: Vec<V>) -> Self {
        Self {
            vec,
            _phantom: PhantomData,
        }
    }

    /// Create a new `IdVec` with the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self::new(Vec::with_capacity(cap))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Iterate through mutable references to values
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, V> {
        self.vec.iter_mut()
    }
}

impl<K: Into<usize>, V> IdVec<K, V> {
    /// Get the value with id `k`.
    #[inline]
    pub fn get(&self, k: K) -> &V {
        &self.vec[k.into()]
    }

    /// Get a mutable reference to value with id `k`.
    #[inline]
    pub fn get_mut(&mut self, k: K) -> &mut V {
        &mut self.vec[k.into()]
    }
}

impl<K: From<usize>, V> IdVec<K, V> {
    /// Push `v` into the underlying vec, and return an id that can be used to retrieve it later.
    #[inline]
    pub fn push(&mut self, v: V) -> K {
        let id = self.vec.len().into();
        self.vec.push(v);
        id
    }
}

#[cfg(test)]
mod test {
    use super::IdVec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Key(usize);

    impl From<usize> for Key {
        fn from(val: usize) -> Self {
            Self(val)
        }
    }

    impl From<Key> for usize {
        fn from(k: Key) -> usize {
            k.0
        }
    }

    #[test]
    fn test_push_get() {
        let mut vec: IdVec<Key, &str> = IdVec::with_capacity(2);
        let a = vec.push("a");
        let b = vec.push("b");
        assert_eq!(Key(0), a);
        assert_eq!(Key(1), b);
        assert_eq!(&"b", vec.get(b));
        *vec.get_mut(a) = "c";
        assert_eq!(&"c", vec.get(a));
        assert_eq!(2, vec.len());
    }

    #[test]
    fn test_iter_mut() {
        let mut vec: IdVec<Key, u8> = IdVec::default();
        vec.push(7);
        vec.push(9);
        for v in vec.iter_mut() {
            *v += 1;
        }
        assert_eq!(&8, vec.get(Key(0)));
        assert_eq!(&10, vec.get(Key(1)));
        assert!(!vec.is_empty());
    }
}
