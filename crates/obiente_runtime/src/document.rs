//! Document seam
//!
//! The theme session never touches a DOM type directly; it drives whatever
//! implements [`DocumentHandle`] — a real root element in a browser build,
//! a recording fake in tests, or nothing at all on the server.

/// Mutation surface of the document root element.
pub trait DocumentHandle {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);

    fn add_class(&mut self, name: &str);
    fn remove_class(&mut self, name: &str);

    /// Set an inline CSS custom property on the root element. Inline
    /// variables are the fallback when no generated stylesheet is loaded.
    fn set_variable(&mut self, name: &str, value: &str);
    fn remove_variable(&mut self, name: &str);

    /// Whether the document structure is ready for mutation. Application
    /// is deferred until this reports true, then runs once.
    fn is_ready(&self) -> bool {
        true
    }
}
