//! Registers listeners under form event names and runs one submit cycle.
//!
//! The table here is a stand-in for whatever dispatcher the form core uses;
//! the only shared contract is the event name.

use std::collections::HashMap;

use form_events::{FormEvent, FormEvents, Label, Operation};

type Listener = Box<dyn Fn(&mut Vec<String>)>;

fn main() -> form_events::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut listeners: HashMap<&'static str, Vec<Listener>> = HashMap::new();
    listeners
        .entry(FormEvents::PRE_SUBMIT)
        .or_default()
        .push(Box::new(|fields| fields.push("honeypot".into())));
    listeners
        .entry(FormEvents::POST_SUBMIT)
        .or_default()
        .push(Box::new(|fields| tracing::info!(?fields, "Submitted")));

    // Names can also arrive as strings, e.g. from configuration.
    let configured: FormEvent = "form.submit".parse()?;
    listeners
        .entry(configured.as_str())
        .or_default()
        .push(Box::new(|fields| fields.retain(|f| f != "honeypot")));

    let mut fields = vec!["name".to_string(), "email".to_string()];
    for event in Operation::Submit.events() {
        let handlers = listeners.get(event.as_str()).map(Vec::as_slice).unwrap_or(&[]);
        tracing::debug!(event = %event.label(), count = handlers.len(), "Dispatching");
        for handler in handlers {
            handler(&mut fields);
        }
    }

    if let Err(e) = "form.validate".parse::<FormEvent>() {
        tracing::warn!("{e}");
    }
    Ok(())
}
