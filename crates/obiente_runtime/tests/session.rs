use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use obiente_runtime::{
    DocumentHandle, MemoryStore, PreferenceStore, ThemePreferences, ThemeSession,
};
use obiente_theme::{themes, Theme, ThemeRegistry, Variant};

/// Records every mutation so tests can assert on diffs, not just state.
#[derive(Default)]
struct FakeDocument {
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    variables: BTreeMap<String, String>,
    log: Vec<String>,
    ready: Rc<Cell<bool>>,
}

impl FakeDocument {
    fn ready() -> Self {
        let document = Self::default();
        document.ready.set(true);
        document
    }

    fn mutation_count(&self) -> usize {
        self.log.len()
    }
}

impl DocumentHandle for FakeDocument {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.log.push(format!("set-attr {name}"));
        self.attributes.insert(name.into(), value.into());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.log.push(format!("remove-attr {name}"));
        self.attributes.remove(name);
    }

    fn add_class(&mut self, name: &str) {
        self.log.push(format!("add-class {name}"));
        self.classes.push(name.into());
    }

    fn remove_class(&mut self, name: &str) {
        self.log.push(format!("remove-class {name}"));
        self.classes.retain(|class| class != name);
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.log.push(format!("set-var {name}"));
        self.variables.insert(name.into(), value.into());
    }

    fn remove_variable(&mut self, name: &str) {
        self.log.push(format!("remove-var {name}"));
        self.variables.remove(name);
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

fn session() -> ThemeSession<FakeDocument, MemoryStore> {
    ThemeSession::new(
        Arc::new(ThemeRegistry::with_builtin()),
        FakeDocument::ready(),
        MemoryStore::default(),
    )
}

#[test]
fn initialize_applies_attributes_and_variables() {
    let mut session = session();
    session.initialize();

    let document = session.document();
    assert_eq!(document.attributes["data-base-theme"], "default");
    assert_eq!(document.attributes["data-color-theme"], "catppuccin-latte");
    assert_eq!(document.attributes["data-theme-variant"], "light");
    assert_eq!(document.attributes["data-theme"], "default+catppuccin-latte");
    assert_eq!(document.variables["--oi-background"], "#eff1f5");
    assert_eq!(document.variables["--oi-spacing-base"], "1");
    assert!(document.classes.is_empty());
}

#[test]
fn reapplying_equal_preferences_mutates_nothing() {
    let mut session = session();
    session.initialize();

    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    session.subscribe(move |_| counter.set(counter.get() + 1));

    let before = session.document().mutation_count();
    let same = session.preferences().clone();
    session.set_preferences(same).unwrap();

    assert_eq!(session.document().mutation_count(), before);
    assert_eq!(notified.get(), 0);
}

#[test]
fn color_switch_only_touches_changed_state() {
    let mut session = session();
    session.initialize();

    let before = session.document().mutation_count();
    session.set_color("catppuccin-frappe").unwrap();
    let log = &session.document().log[before..];

    // The base theme did not change, so neither its attribute nor its
    // variables are rewritten.
    assert!(!log.contains(&"set-attr data-base-theme".to_string()));
    assert!(!log.contains(&"set-var --oi-spacing-base".to_string()));
    assert!(log.contains(&"set-attr data-color-theme".to_string()));
    assert!(log.contains(&"set-var --oi-background".to_string()));
    assert!(log.contains(&"add-class dark".to_string()));

    let document = session.document();
    assert_eq!(document.attributes["data-theme-variant"], "dark");
    assert_eq!(document.variables["--oi-background"], "#303446");
}

#[test]
fn removing_flair_removes_its_variables() {
    let mut session = session();
    session.initialize();
    session.add_flair("glow").unwrap();
    assert!(session.document().variables.contains_key("--oi-glow"));
    assert_eq!(session.document().attributes["data-flair-themes"], "glow");

    session.remove_flair("glow").unwrap();
    let document = session.document();
    assert!(!document.variables.contains_key("--oi-glow"));
    assert!(!document.attributes.contains_key("data-flair-themes"));
}

#[test]
fn batched_update_applies_once() {
    let mut session = session();
    session.initialize();

    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    session.subscribe(move |_| counter.set(counter.get() + 1));

    session
        .update(|preferences| {
            preferences.base = Some("compact".to_string());
            preferences.color = Some("catppuccin-mocha".to_string());
            preferences.add_flair("glow");
        })
        .unwrap();

    assert_eq!(notified.get(), 1);
    let document = session.document();
    assert_eq!(
        document.attributes["data-theme"],
        "compact+catppuccin-mocha+glow"
    );
    let writes = document
        .log
        .iter()
        .filter(|entry| *entry == "set-attr data-theme")
        .count();
    // Once at initialize, once for the whole batch.
    assert_eq!(writes, 2);
}

#[test]
fn failed_mutation_rolls_back() {
    let mut session = session();
    session.initialize();
    let before_prefs = session.preferences().clone();
    let before_mutations = session.document().mutation_count();

    assert!(session.set_color("no-such-theme").is_err());
    assert_eq!(session.preferences(), &before_prefs);
    assert_eq!(session.document().mutation_count(), before_mutations);
}

#[test]
fn mutations_persist_to_store_and_cookie() {
    let cookies = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&cookies);
    let store = MemoryStore::default();
    let mut session = ThemeSession::new(
        Arc::new(ThemeRegistry::with_builtin()),
        FakeDocument::ready(),
        store,
    )
    .with_cookie_sink(move |cookie: &str| sink.borrow_mut().push(cookie.to_string()));
    session.initialize();

    session.toggle_flair("glass").unwrap();

    let parsed = ThemePreferences::parse(&session.preferences().serialize());
    assert_eq!(parsed.flair, ["glass"]);

    let cookies = cookies.borrow();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("oi-theme-prefs="));
    assert!(cookies[0].contains("SameSite=Lax"));
}

#[test]
fn stored_preferences_survive_a_new_session() {
    let mut store = MemoryStore::default();
    let mut preferences = ThemePreferences::default();
    preferences.color = Some("catppuccin-macchiato".to_string());
    store.save(&preferences.serialize());

    let mut session = ThemeSession::new(
        Arc::new(ThemeRegistry::with_builtin()),
        FakeDocument::ready(),
        store,
    );
    session.initialize();
    assert_eq!(
        session.document().attributes["data-color-theme"],
        "catppuccin-macchiato"
    );
}

#[test]
fn unresolvable_stored_preferences_revert_to_defaults() {
    let store = MemoryStore::with_value(r#"{"base":"default","color":"gone","flair":[]}"#);
    let mut session = ThemeSession::new(
        Arc::new(ThemeRegistry::with_builtin()),
        FakeDocument::ready(),
        store,
    );
    session.initialize();

    assert_eq!(session.preferences(), &ThemePreferences::default());
    assert_eq!(
        session.document().attributes["data-color-theme"],
        "catppuccin-latte"
    );
}

#[test]
fn application_defers_until_document_ready() {
    let document = FakeDocument::default();
    let ready = Rc::clone(&document.ready);
    let mut session = ThemeSession::new(
        Arc::new(ThemeRegistry::with_builtin()),
        document,
        MemoryStore::default(),
    );
    session.initialize();
    assert_eq!(session.document().mutation_count(), 0);

    ready.set(true);
    session.document_ready();
    assert!(session.document().mutation_count() > 0);
    assert_eq!(session.document().attributes["data-base-theme"], "default");

    // The deferred application runs exactly once.
    let after = session.document().mutation_count();
    session.document_ready();
    assert_eq!(session.document().mutation_count(), after);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut session = session();
    session.initialize();

    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let subscription = session.subscribe(move |change| {
        assert!(!change.resolved.css_variables.is_empty());
        counter.set(counter.get() + 1);
    });

    session.set_base("cozy").unwrap();
    assert_eq!(notified.get(), 1);

    session.unsubscribe(subscription);
    session.set_base("flat").unwrap();
    assert_eq!(notified.get(), 1);
}

#[test]
fn dark_mode_toggle_prefers_the_same_family() {
    let mut session = session();
    session.initialize();

    session.toggle_dark_mode().unwrap();
    let dark_id = session.preferences().color.clone().unwrap();
    assert_eq!(dark_id, "catppuccin-frappe");

    session.toggle_dark_mode().unwrap();
    assert_eq!(
        session.preferences().color.as_deref(),
        Some("catppuccin-latte")
    );
}

#[test]
fn dark_mode_toggle_falls_back_across_families() {
    let mut registry = ThemeRegistry::new();
    registry
        .register(Theme::Base(themes::base_themes().remove(0)))
        .unwrap();

    let mut lonely_light = themes::catppuccin_themes().remove(0);
    lonely_light.id = "daylight".into();
    lonely_light.family = None;
    registry.register(Theme::Color(lonely_light)).unwrap();

    let mut other_dark = themes::catppuccin_themes().remove(3);
    other_dark.id = "midnight".into();
    other_dark.variant = Variant::Dark;
    other_dark.family = Some("other".into());
    registry.register(Theme::Color(other_dark)).unwrap();

    let mut session = ThemeSession::new(
        Arc::new(registry),
        FakeDocument::ready(),
        MemoryStore::default(),
    );
    session
        .set_preferences(ThemePreferences {
            base: Some("default".to_string()),
            color: Some("daylight".to_string()),
            flair: Vec::new(),
        })
        .unwrap();

    session.toggle_dark_mode().unwrap();
    assert_eq!(session.preferences().color.as_deref(), Some("midnight"));
}
