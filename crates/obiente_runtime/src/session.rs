//! The theme session
//!
//! Owns the in-memory preferences, keeps document state, persisted state,
//! and subscribers synchronized, and guarantees diff-based application:
//! re-applying equal preferences performs zero document mutations.

use std::sync::Arc;

use indexmap::IndexMap;
use obiente_theme::{resolver, ResolvedTheme, ThemeError, ThemeRegistry};

use crate::cookie::preferences_cookie;
use crate::document::DocumentHandle;
use crate::preferences::{ThemePreferences, DEFAULT_BASE_ID, DEFAULT_COLOR_ID};
use crate::props::html_props;
use crate::store::PreferenceStore;

/// Payload delivered to subscribers after every effective mutation.
#[derive(Clone, Debug)]
pub struct ThemeChange {
    pub preferences: ThemePreferences,
    pub resolved: ResolvedTheme,
}

/// Handle returned by [`ThemeSession::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ThemeChange)>;

/// What the session last wrote to the document, kept to diff against.
#[derive(Debug, Default)]
struct AppliedState {
    attributes: IndexMap<String, String>,
    classes: Vec<String>,
    variables: IndexMap<String, String>,
}

/// A browser-session-scoped theme manager.
///
/// Constructed by whatever owns the application context and handed the
/// registry, document, and store explicitly; there is no ambient global.
/// Mutators recompute the resolution, apply the difference to the document,
/// persist, and notify subscribers. Batched changes go through [`update`],
/// which reads the latest preferences value — never a stale snapshot — and
/// performs a single apply/persist/notify round for the whole closure.
///
/// [`update`]: ThemeSession::update
pub struct ThemeSession<D, S> {
    registry: Arc<ThemeRegistry>,
    document: D,
    store: S,
    cookie_sink: Option<Box<dyn FnMut(&str)>>,
    preferences: ThemePreferences,
    applied: Option<AppliedState>,
    pending: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<D: DocumentHandle, S: PreferenceStore> ThemeSession<D, S> {
    pub fn new(registry: Arc<ThemeRegistry>, document: D, store: S) -> Self {
        Self {
            registry,
            document,
            store,
            cookie_sink: None,
            preferences: ThemePreferences::default(),
            applied: None,
            pending: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Receive the `Set-Cookie` string on every persist. In a browser build
    /// this writes `document.cookie`; servers append a response header.
    pub fn with_cookie_sink(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.cookie_sink = Some(Box::new(sink));
        self
    }

    /// Load persisted preferences and apply the resolved theme.
    ///
    /// Unparseable stored values fall back to defaults; stored ids that no
    /// longer resolve silently revert to the default theme rather than
    /// leaving the page unthemed.
    pub fn initialize(&mut self) {
        self.preferences = match self.store.load() {
            Some(raw) => ThemePreferences::parse(&raw),
            None => ThemePreferences::default(),
        };

        match self.resolve_current() {
            Ok(resolved) => self.apply_or_defer(&resolved),
            Err(err) => {
                tracing::warn!(%err, "stored preferences no longer resolve, reverting to defaults");
                self.preferences = ThemePreferences::default();
                match self.resolve_current() {
                    Ok(resolved) => self.apply_or_defer(&resolved),
                    Err(err) => tracing::warn!(%err, "default preferences do not resolve"),
                }
            }
        }
    }

    pub fn preferences(&self) -> &ThemePreferences {
        &self.preferences
    }

    /// The current resolution, recomputed on demand.
    pub fn resolved(&self) -> Result<ResolvedTheme, ThemeError> {
        self.resolve_current()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    // ========== Mutators ==========

    pub fn set_base(&mut self, id: &str) -> Result<(), ThemeError> {
        let id = id.to_string();
        self.update(move |preferences| preferences.base = Some(id))
    }

    pub fn set_color(&mut self, id: &str) -> Result<(), ThemeError> {
        let id = id.to_string();
        self.update(move |preferences| preferences.color = Some(id))
    }

    pub fn add_flair(&mut self, id: &str) -> Result<(), ThemeError> {
        self.update(|preferences| {
            preferences.add_flair(id);
        })
    }

    pub fn remove_flair(&mut self, id: &str) -> Result<(), ThemeError> {
        self.update(|preferences| {
            preferences.remove_flair(id);
        })
    }

    pub fn toggle_flair(&mut self, id: &str) -> Result<(), ThemeError> {
        self.update(|preferences| preferences.toggle_flair(id))
    }

    pub fn set_preferences(&mut self, preferences: ThemePreferences) -> Result<(), ThemeError> {
        self.update(move |current| *current = preferences)
    }

    /// Switch between light and dark color themes.
    ///
    /// Prefers the opposite-variant theme of the current theme's family,
    /// falling back to any theme of the target variant. A registry with no
    /// such theme leaves the session unchanged.
    pub fn toggle_dark_mode(&mut self) -> Result<(), ThemeError> {
        let registry = Arc::clone(&self.registry);
        let current_id = self
            .preferences
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_COLOR_ID.to_string());
        let Some(current) = registry.color(&current_id) else {
            return Err(ThemeError::UnresolvedTheme {
                kind: obiente_theme::ThemeKind::Color,
                id: current_id,
            });
        };

        let target = current.variant.toggle();
        let next = current
            .family
            .as_deref()
            .and_then(|family| {
                registry
                    .list_by_family(family)
                    .find(|theme| theme.variant == target)
            })
            .or_else(|| registry.list_by_variant(target).next())
            .map(|theme| theme.id.clone());

        match next {
            Some(id) => self.set_color(&id),
            None => {
                tracing::warn!(variant = %target, "no color theme with the requested variant is registered");
                Ok(())
            }
        }
    }

    /// Apply a batched preference change.
    ///
    /// The closure mutates the live preferences value; resolution, document
    /// application, persistence, and notification each happen once for the
    /// whole batch. A change that fails to resolve is rolled back and the
    /// error returned. A change that leaves preferences equal is a no-op:
    /// nothing is re-applied, re-persisted, or re-notified.
    pub fn update(
        &mut self,
        mutate: impl FnOnce(&mut ThemePreferences),
    ) -> Result<(), ThemeError> {
        let previous = self.preferences.clone();
        mutate(&mut self.preferences);
        if self.preferences == previous {
            return Ok(());
        }

        match self.resolve_current() {
            Ok(resolved) => {
                self.apply_or_defer(&resolved);
                self.persist();
                self.notify(resolved);
                Ok(())
            }
            Err(err) => {
                self.preferences = previous;
                Err(err)
            }
        }
    }

    // ========== Subscriptions ==========

    /// Register a change listener; fired after every effective mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ThemeChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(current, _)| *current != id);
    }

    /// Signal that the document structure became ready. Runs the deferred
    /// application exactly once; later calls are no-ops.
    pub fn document_ready(&mut self) {
        if !self.pending {
            return;
        }
        self.pending = false;
        match self.resolve_current() {
            Ok(resolved) => self.apply_resolved(&resolved),
            Err(err) => tracing::warn!(%err, "deferred theme application failed to resolve"),
        }
    }

    // ========== Internals ==========

    fn resolve_current(&self) -> Result<ResolvedTheme, ThemeError> {
        let base = self
            .preferences
            .base
            .as_deref()
            .unwrap_or(DEFAULT_BASE_ID);
        let color = self
            .preferences
            .color
            .as_deref()
            .unwrap_or(DEFAULT_COLOR_ID);
        resolver::resolve(&self.registry, base, color, &self.preferences.flair)
    }

    fn apply_or_defer(&mut self, resolved: &ResolvedTheme) {
        if self.document.is_ready() {
            self.apply_resolved(resolved);
        } else {
            self.pending = true;
        }
    }

    /// Write the resolved theme to the document, mutating only what
    /// differs from the previously applied state.
    fn apply_resolved(&mut self, resolved: &ResolvedTheme) {
        let mut attributes = IndexMap::new();
        let mut classes = Vec::new();
        for (key, value) in html_props(resolved) {
            if key == "class" {
                classes.extend(value.split_whitespace().map(str::to_string));
            } else {
                attributes.insert(key, value);
            }
        }
        let variables = resolved.css_variables.clone();

        let previous = self.applied.take().unwrap_or_default();

        for (name, value) in &attributes {
            if previous.attributes.get(name) != Some(value) {
                self.document.set_attribute(name, value);
            }
        }
        for name in previous.attributes.keys() {
            if !attributes.contains_key(name) {
                self.document.remove_attribute(name);
            }
        }

        for class in &classes {
            if !previous.classes.contains(class) {
                self.document.add_class(class);
            }
        }
        for class in &previous.classes {
            if !classes.contains(class) {
                self.document.remove_class(class);
            }
        }

        for (name, value) in &variables {
            if previous.variables.get(name) != Some(value) {
                self.document.set_variable(name, value);
            }
        }
        for name in previous.variables.keys() {
            if !variables.contains_key(name) {
                self.document.remove_variable(name);
            }
        }

        self.applied = Some(AppliedState {
            attributes,
            classes,
            variables,
        });
    }

    fn persist(&mut self) {
        let serialized = self.preferences.serialize();
        self.store.save(&serialized);
        if let Some(sink) = &mut self.cookie_sink {
            sink(&preferences_cookie(&serialized));
        }
    }

    fn notify(&mut self, resolved: ResolvedTheme) {
        let change = ThemeChange {
            preferences: self.preferences.clone(),
            resolved,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&change);
        }
    }
}
