//! Form Events - lifecycle event names for form processing
//!
//! A form goes through two operations that external listeners can hook into:
//! *submit*, which applies request data to the form, and *set data*, which
//! pre-populates it from existing model data. Each hook point is identified
//! by a stable string such as `"form.pre_submit"`. Dispatchers route
//! listeners by exact string equality, so those values never change.
//!
//! The crate provides:
//! - [`FormEvents`], a namespace of the five wire values as constants.
//! - [`FormEvent`], a typed identifier with iteration and reverse lookup.
//! - [`Operation`], grouping identifiers by the operation that fires them.
//!
//! ```rust
//! use form_events::{FormEvent, FormEvents};
//!
//! assert_eq!(FormEvents::PRE_SUBMIT, "form.pre_submit");
//! let event: FormEvent = "form.post_set_data".parse()?;
//! assert_eq!(event, FormEvent::PostSetData);
//! # Ok::<(), form_events::Error>(())
//! ```
//!
//! See `demos/listeners.rs` for a listener table keyed by these names.

mod error;
mod form_event;
mod form_events;
mod label;
mod operation;

pub use error::Error;
pub use form_event::FormEvent;
pub use form_events::{FormEvents, names};
pub use label::Label;
pub use operation::Operation;

pub type Result<T = ()> = std::result::Result<T, Error>;
