//! Entry point for the **tilecfg** inspection tool.
//!
//! `tilecfg --dump` renders the document as the fixed-key JSON object the
//! host reads.  Without arguments it performs a full load into a logging
//! host — the same code path a real host would drive — and runs the
//! startup action once, which is useful for checking what a restart would
//! install.

use log::{error, info};
use tilecfg::bar::{Screen, WidgetDefaults};
use tilecfg::document::{Document, Flags};
use tilecfg::group::Group;
use tilecfg::host::{Host, Loader};
use tilecfg::keys::{KeyBinding, Modifier};
use tilecfg::layout::Layout;
use tilecfg::mouse::MouseBinding;
use tilecfg::rules::FloatingRules;

//  Logging host

/// A host that logs each value instead of installing it.
struct LoggingHost;

#[derive(Debug, thiserror::Error)]
#[error("logging host never fails")]
struct LoggingHostError;

impl Host for LoggingHost {
    type Error = LoggingHostError;

    fn set_primary_modifier(&mut self, primary: Modifier) -> Result<(), LoggingHostError> {
        info!("primary modifier: {}", primary);
        Ok(())
    }

    fn set_terminal(&mut self, terminal: &str) -> Result<(), LoggingHostError> {
        info!("terminal: {}", terminal);
        Ok(())
    }

    fn bind_keys(&mut self, keys: &[KeyBinding]) -> Result<(), LoggingHostError> {
        info!("chord table: {} bindings", keys.len());
        Ok(())
    }

    fn bind_mouse(&mut self, mouse: &[MouseBinding]) -> Result<(), LoggingHostError> {
        info!("mouse table: {} bindings", mouse.len());
        Ok(())
    }

    fn create_groups(&mut self, groups: &[Group]) -> Result<(), LoggingHostError> {
        info!("groups: {}", groups.len());
        Ok(())
    }

    fn set_layouts(&mut self, layouts: &[Layout]) -> Result<(), LoggingHostError> {
        info!("layout cycle: {} layouts", layouts.len());
        Ok(())
    }

    fn set_floating_rules(&mut self, rules: &FloatingRules) -> Result<(), LoggingHostError> {
        info!("floating rules: {}", rules.rules.len());
        Ok(())
    }

    fn set_screens(&mut self, screens: &[Screen]) -> Result<(), LoggingHostError> {
        info!("screens: {}", screens.len());
        Ok(())
    }

    fn set_widget_defaults(&mut self, defaults: &WidgetDefaults) -> Result<(), LoggingHostError> {
        info!("widget defaults: {} {}px", defaults.font, defaults.fontsize);
        Ok(())
    }

    fn set_options(&mut self, flags: &Flags) -> Result<(), LoggingHostError> {
        info!("wmname: {}", flags.wmname);
        Ok(())
    }
}

//  Main

fn main() {
    env_logger::init();

    let doc = Document::default();

    if std::env::args().any(|a| a == "--dump") {
        dump(&doc);
    } else {
        check_load(doc);
    }
}

/// Print the host-facing JSON rendering of the document.
fn dump(doc: &Document) {
    match doc.render_string() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Load the document into a logging host, firing the startup action once.
fn check_load(doc: Document) {
    let startup = doc.startup.clone();
    let mut loader = Loader::new(move || startup.run());
    let mut host = LoggingHost;
    if let Err(e) = loader.load(&mut host, &doc) {
        error!("{}", e);
        std::process::exit(1);
    }
}
