//! **tilecfg** — a declarative configuration document for a tiling window
//! manager.
//!
//! The document declares chord tables, mouse actions, workspace groups, a
//! layout cycle, floating rules, a status bar with widgets, and a one-shot
//! startup action.  It contains no tiling math and no event handling: the
//! host framework consumes the document wholesale at startup (and again on
//! explicit restart) and owns every runtime behavior.
//!
//! # Architecture
//!
//! The crate is organised around one core seam:
//!
//! * [`host::Host`] — abstracts the framework that consumes configuration
//!   values, so loading is not coupled to any specific window manager and
//!   test doubles can verify exactly what gets installed.
//!
//! [`document::Document`] aggregates the named top-level values; the
//! per-group chords are derived by the pure
//! [`keys::derive_group_bindings`], composed with the static base table
//! freshly on every load.  [`host::Loader`] pushes the values into a host
//! and fires the startup callback exactly once per lifetime.

pub mod bar;
pub mod document;
pub mod group;
pub mod host;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod rules;
pub mod startup;
