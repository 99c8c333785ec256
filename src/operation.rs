use std::fmt;

use crate::FormEvent;

/// A form operation that fires lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// Applies externally supplied (request) data to the form.
    Submit,
    /// Pre-populates the form from existing model data.
    SetData,
}

impl Operation {
    /// Events fired by this operation, in the order they are dispatched.
    pub fn events(&self) -> &'static [FormEvent] {
        match self {
            Operation::Submit => &[
                FormEvent::PreSubmit,
                FormEvent::Submit,
                FormEvent::PostSubmit,
            ],
            Operation::SetData => &[FormEvent::PreSetData, FormEvent::PostSetData],
        }
    }

    pub fn is_submit(&self) -> bool {
        matches!(self, Operation::Submit)
    }

    pub fn is_set_data(&self) -> bool {
        matches!(self, Operation::SetData)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Submit => write!(f, "submit"),
            Operation::SetData => write!(f, "set_data"),
        }
    }
}
