use std::fmt;

type FilterFn<'a, C> = Box<dyn Fn(&C) -> bool + 'a>;
type MapFn<'a, C> = Box<dyn Fn(C) -> C + 'a>;

/// Derives a new aggregate from an existing one by mapping and filtering
/// its child sequence.
///
/// Obtained from the aggregate's `transform()` method; borrows the source
/// and copies nothing until [`build`]. Registered operations apply in a
/// fixed order: all `map` functions in registration order first, then the
/// conjunction of all `filter` predicates, preserving the relative order
/// of retained children. Every other field of the source is carried into
/// the result unchanged.
///
/// The builder is single-use: [`build`] consumes it.
///
/// [`build`]: Transform::build
pub struct Transform<'a, A, C> {
    source: &'a A,
    children: &'a [C],
    filters: Vec<FilterFn<'a, C>>,
    maps: Vec<MapFn<'a, C>>,
    rebuild: fn(&A, Vec<C>) -> A,
}

impl<'a, A, C: Clone> Transform<'a, A, C> {
    pub(crate) fn new(source: &'a A, children: &'a [C], rebuild: fn(&A, Vec<C>) -> A) -> Self {
        Self {
            source,
            children,
            filters: Vec::new(),
            maps: Vec::new(),
            rebuild,
        }
    }

    /// Retain only children matching `predicate`. Multiple predicates
    /// combine by conjunction.
    pub fn filter(mut self, predicate: impl Fn(&C) -> bool + 'a) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Replace every child with `f(child)`. Multiple functions compose in
    /// registration order.
    pub fn map(mut self, f: impl Fn(C) -> C + 'a) -> Self {
        self.maps.push(Box::new(f));
        self
    }

    /// Materialize a new aggregate; the source stays untouched.
    pub fn build(self) -> A {
        let children: Vec<C> = self
            .children
            .iter()
            .cloned()
            .map(|child| self.maps.iter().fold(child, |child, f| f(child)))
            .filter(|child| self.filters.iter().all(|predicate| predicate(child)))
            .collect();

        (self.rebuild)(self.source, children)
    }
}

impl<A: fmt::Debug, C> fmt::Debug for Transform<'_, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("source", &self.source)
            .field("children", &self.children.len())
            .field("filters", &self.filters.len())
            .field("maps", &self.maps.len())
            .finish()
    }
}
