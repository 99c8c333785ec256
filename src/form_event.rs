use std::{borrow::Cow, fmt, str::FromStr, sync::Arc};

use crate::{Error, FormEvents, Label, Operation};

/// Typed form lifecycle event identifier.
///
/// Every variant maps to exactly one [`FormEvents`] constant. Use this type
/// when the set of events has to be iterated, matched on, or recovered from
/// a name received at runtime.
///
/// # Examples
///
/// ```rust
/// use form_events::{FormEvent, Operation};
///
/// let event: FormEvent = "form.submit".parse()?;
/// assert_eq!(event, FormEvent::Submit);
/// assert_eq!(event.operation(), Operation::Submit);
/// assert_eq!(event.to_string(), "form.submit");
/// # Ok::<(), form_events::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormEvent {
    #[cfg_attr(feature = "serde", serde(rename = "form.pre_submit"))]
    PreSubmit,
    #[cfg_attr(feature = "serde", serde(rename = "form.submit"))]
    Submit,
    #[cfg_attr(feature = "serde", serde(rename = "form.post_submit"))]
    PostSubmit,
    #[cfg_attr(feature = "serde", serde(rename = "form.pre_set_data"))]
    PreSetData,
    #[cfg_attr(feature = "serde", serde(rename = "form.post_set_data"))]
    PostSetData,
}

impl FormEvent {
    /// All identifiers, in declaration order.
    pub const ALL: [FormEvent; 5] = [
        FormEvent::PreSubmit,
        FormEvent::Submit,
        FormEvent::PostSubmit,
        FormEvent::PreSetData,
        FormEvent::PostSetData,
    ];

    pub fn iter() -> impl Iterator<Item = FormEvent> {
        Self::ALL.into_iter()
    }

    /// Returns the wire value listeners are registered under.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormEvent::PreSubmit => FormEvents::PRE_SUBMIT,
            FormEvent::Submit => FormEvents::SUBMIT,
            FormEvent::PostSubmit => FormEvents::POST_SUBMIT,
            FormEvent::PreSetData => FormEvents::PRE_SET_DATA,
            FormEvent::PostSetData => FormEvents::POST_SET_DATA,
        }
    }

    /// Name of the payload type a dispatcher passes along with this event.
    ///
    /// This is a documentation association only; the payload types live in
    /// the form core.
    pub const fn payload_type(&self) -> &'static str {
        match self {
            FormEvent::PreSubmit => "PreSubmitEvent",
            FormEvent::Submit => "SubmitEvent",
            FormEvent::PostSubmit => "PostSubmitEvent",
            FormEvent::PreSetData => "PreSetDataEvent",
            FormEvent::PostSetData => "PostSetDataEvent",
        }
    }

    pub const fn operation(&self) -> Operation {
        match self {
            FormEvent::PreSubmit | FormEvent::Submit | FormEvent::PostSubmit => Operation::Submit,
            FormEvent::PreSetData | FormEvent::PostSetData => Operation::SetData,
        }
    }

    /// True for events fired at the beginning of their operation.
    pub fn is_pre(&self) -> bool {
        matches!(self, FormEvent::PreSubmit | FormEvent::PreSetData)
    }

    /// True for events fired once their operation has completed.
    pub fn is_post(&self) -> bool {
        matches!(self, FormEvent::PostSubmit | FormEvent::PostSetData)
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FormEvent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Label for FormEvent {
    fn label(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            FormEvent::PreSubmit => "PRE_SUBMIT",
            FormEvent::Submit => "SUBMIT",
            FormEvent::PostSubmit => "POST_SUBMIT",
            FormEvent::PreSetData => "PRE_SET_DATA",
            FormEvent::PostSetData => "POST_SET_DATA",
        })
    }
}

/// Exact, case-sensitive match on the wire value.
impl FromStr for FormEvent {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.is_empty() {
            tracing::debug!("Rejected empty form event name");
            return Err(Error::EmptyName);
        }
        Self::iter()
            .find(|event| event.as_str() == name)
            .ok_or_else(|| {
                tracing::debug!(name, "Rejected unknown form event name");
                Error::UnknownEvent(Arc::from(name))
            })
    }
}

impl TryFrom<&str> for FormEvent {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}
