/// A value that carries its own index key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Ordered index over keyed values.
///
/// `insert` never rejects a value: equal keys are kept side by side.
/// `delete` removes one value with the key and reports whether a value was
/// actually removed.
pub trait Tree<T: Keyed> {
    fn height(&self) -> usize;
    fn len(&self) -> usize;
    fn insert(&mut self, val: T);
    fn delete(&mut self, key: &str) -> bool;
    fn search(&self, key: &str) -> Option<&T>;
}
