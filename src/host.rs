//! The loading contract between the document and the host framework.
//!
//! [`Host`] abstracts the framework that consumes the document — a real
//! window manager, or a test double — so loading logic is not coupled to
//! any specific backend.  [`Loader`] pushes every named value of a
//! [`Document`] into a host and fires the on-initialize callback exactly
//! once per loader lifetime, however many times the document is reloaded.

use crate::bar::{Screen, WidgetDefaults};
use crate::document::{Document, Flags};
use crate::group::Group;
use crate::keys::{KeyBinding, Modifier};
use crate::layout::Layout;
use crate::mouse::MouseBinding;
use crate::rules::FloatingRules;
use log::info;

/// Abstraction over a host framework that consumes configuration values.
///
/// Each method receives one named top-level value.  An implementation
/// might install the values into a live window manager, or just record
/// them for assertions in tests.
pub trait Host {
    /// The error type produced by this host.
    type Error: std::error::Error + Send + 'static;

    fn set_primary_modifier(&mut self, primary: Modifier) -> Result<(), Self::Error>;
    fn set_terminal(&mut self, terminal: &str) -> Result<(), Self::Error>;

    /// Install the complete ordered chord table (base + derived).
    fn bind_keys(&mut self, keys: &[KeyBinding]) -> Result<(), Self::Error>;
    fn bind_mouse(&mut self, mouse: &[MouseBinding]) -> Result<(), Self::Error>;

    /// Create the fixed group set.  Window-to-group assignment stays in
    /// the host.
    fn create_groups(&mut self, groups: &[Group]) -> Result<(), Self::Error>;
    fn set_layouts(&mut self, layouts: &[Layout]) -> Result<(), Self::Error>;
    fn set_floating_rules(&mut self, rules: &FloatingRules) -> Result<(), Self::Error>;
    fn set_screens(&mut self, screens: &[Screen]) -> Result<(), Self::Error>;
    fn set_widget_defaults(&mut self, defaults: &WidgetDefaults) -> Result<(), Self::Error>;
    fn set_options(&mut self, flags: &Flags) -> Result<(), Self::Error>;
}

/// Error from pushing a document into a host.
#[derive(Debug, thiserror::Error)]
#[error("host rejected configuration: {0}")]
pub struct LoadError<E: std::error::Error>(#[from] E);

/// Drives document loads and owns the one-shot on-initialize callback.
///
/// The callback is passed explicitly at construction — there is no
/// ambient global registration.  [`load`](Loader::load) fires it after
/// the first successful load and never again; a later load (an explicit
/// restart) re-pushes every value without re-firing it.
pub struct Loader {
    on_init: Option<Box<dyn FnOnce()>>,
}

impl Loader {
    /// A loader that fires `on_init` once, after the first successful load.
    pub fn new(on_init: impl FnOnce() + 'static) -> Self {
        Self {
            on_init: Some(Box::new(on_init)),
        }
    }

    /// A loader with no initialization callback.
    pub fn bare() -> Self {
        Self { on_init: None }
    }

    /// Push every named value of `doc` into `host`.
    ///
    /// The chord table is regenerated from the document on every call, so
    /// repeated loads install identical tables rather than accumulating
    /// derived bindings.  The first error from the host aborts the load.
    pub fn load<H: Host>(&mut self, host: &mut H, doc: &Document) -> Result<(), LoadError<H::Error>> {
        let keys = doc.key_bindings();

        host.set_primary_modifier(doc.primary)?;
        host.set_terminal(&doc.terminal)?;
        host.bind_keys(&keys)?;
        host.bind_mouse(&doc.mouse)?;
        host.create_groups(&doc.groups)?;
        host.set_layouts(&doc.layouts)?;
        host.set_floating_rules(&doc.floating_layout)?;
        host.set_screens(&doc.screens)?;
        host.set_widget_defaults(&doc.widget_defaults)?;
        host.set_options(&doc.flags)?;

        info!(
            "loaded document: {} chords, {} groups, {} layouts",
            keys.len(),
            doc.groups.len(),
            doc.layouts.len()
        );

        if let Some(on_init) = self.on_init.take() {
            on_init();
        }
        Ok(())
    }
}
