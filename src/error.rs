use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown form event name: '{0}'")]
    UnknownEvent(Arc<str>),

    #[error("Form event name must not be empty")]
    EmptyName,
}
