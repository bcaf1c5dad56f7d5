use serde::Serialize;

/// Ordered sequence of global routes, oldest first.
///
/// The root screen is never an element: it is rendered separately as the
/// fixed base. The sequence only grows and shrinks at its tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavigationStack<G> {
    routes: Vec<G>,
}

impl<G> NavigationStack<G> {
    pub fn new() -> Self {
        NavigationStack { routes: Vec::new() }
    }

    pub fn push(&mut self, route: G) {
        self.routes.push(route);
    }

    /// Remove the tail. Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<G> {
        self.routes.pop()
    }

    /// Empty the stack in one step, returning how many routes were removed.
    pub fn clear(&mut self) -> usize {
        let cleared = self.routes.len();
        self.routes.clear();
        cleared
    }

    pub fn top(&self) -> Option<&G> {
        self.routes.last()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[G] {
        &self.routes
    }
}

impl<G> Default for NavigationStack<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, G> IntoIterator for &'a NavigationStack<G> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
