use std::borrow::Cow;

pub trait Label {
    /// Returns the symbolic name of this item, e.g. `PRE_SUBMIT`.
    /// Used as a field value when logging.
    fn label(&self) -> Cow<'static, str>;
}
