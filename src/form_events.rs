/// Names of the lifecycle points a form exposes to listeners.
///
/// `FormEvents` has no variants and therefore no values: it is only a
/// namespace for the five constants below. A dispatcher registers listeners
/// under these strings and matches them byte for byte, so the values are
/// part of the public contract and stay fixed across releases.
///
/// Each constant names the payload type a dispatcher is expected to pass to
/// its listeners. Those types belong to the form core and are not defined
/// here.
///
/// # Examples
///
/// ```rust
/// use form_events::FormEvents;
///
/// assert_eq!(FormEvents::PRE_SUBMIT, "form.pre_submit");
/// assert_eq!(FormEvents::POST_SET_DATA, "form.post_set_data");
/// ```
///
/// The type cannot be instantiated:
///
/// ```compile_fail
/// use form_events::FormEvents;
///
/// let registry = FormEvents {};
/// ```
#[derive(Debug)]
pub enum FormEvents {}

impl FormEvents {
    /// Dispatched at the beginning of submit, before request data is
    /// applied to the form.
    ///
    /// Listeners can:
    /// - change the submitted data,
    /// - add or remove fields before the data is bound.
    ///
    /// Payload: `PreSubmitEvent`.
    pub const PRE_SUBMIT: &'static str = "form.pre_submit";

    /// Dispatched during submit once the raw data has been normalized, just
    /// before it is transformed back into model and view data.
    ///
    /// Listeners can change the normalized data.
    ///
    /// Payload: `SubmitEvent`.
    pub const SUBMIT: &'static str = "form.submit";

    /// Dispatched after submit, once model and view data are final.
    ///
    /// Payload: `PostSubmitEvent`.
    pub const POST_SUBMIT: &'static str = "form.post_submit";

    /// Dispatched at the beginning of pre-population.
    ///
    /// Listeners can:
    /// - modify the data given for pre-population,
    /// - add or remove fields depending on that data.
    ///
    /// Payload: `PreSetDataEvent`.
    pub const PRE_SET_DATA: &'static str = "form.pre_set_data";

    /// Dispatched at the end of pre-population, mostly for reading the data
    /// the form was populated with.
    ///
    /// Payload: `PostSetDataEvent`.
    pub const POST_SET_DATA: &'static str = "form.post_set_data";
}

/// The same names as free constants, for `use form_events::names::*`.
pub mod names {
    use super::FormEvents;

    pub const PRE_SUBMIT: &str = FormEvents::PRE_SUBMIT;
    pub const SUBMIT: &str = FormEvents::SUBMIT;
    pub const POST_SUBMIT: &str = FormEvents::POST_SUBMIT;
    pub const PRE_SET_DATA: &str = FormEvents::PRE_SET_DATA;
    pub const POST_SET_DATA: &str = FormEvents::POST_SET_DATA;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 5] = [
        FormEvents::PRE_SUBMIT,
        FormEvents::SUBMIT,
        FormEvents::POST_SUBMIT,
        FormEvents::PRE_SET_DATA,
        FormEvents::POST_SET_DATA,
    ];

    #[test]
    fn test_wire_values() {
        assert_eq!(FormEvents::PRE_SUBMIT, "form.pre_submit");
        assert_eq!(FormEvents::SUBMIT, "form.submit");
        assert_eq!(FormEvents::POST_SUBMIT, "form.post_submit");
        assert_eq!(FormEvents::PRE_SET_DATA, "form.pre_set_data");
        assert_eq!(FormEvents::POST_SET_DATA, "form.post_set_data");
    }

    #[test]
    fn test_names_are_non_empty() {
        assert!(ALL.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn test_names_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_free_constants_match_namespace() {
        assert_eq!(names::PRE_SUBMIT, FormEvents::PRE_SUBMIT);
        assert_eq!(names::SUBMIT, FormEvents::SUBMIT);
        assert_eq!(names::POST_SUBMIT, FormEvents::POST_SUBMIT);
        assert_eq!(names::PRE_SET_DATA, FormEvents::PRE_SET_DATA);
        assert_eq!(names::POST_SET_DATA, FormEvents::POST_SET_DATA);
    }

    #[test]
    fn test_registry_has_no_size() {
        // No variants, so no value of this type can ever exist.
        assert_eq!(std::mem::size_of::<FormEvents>(), 0);
    }
}
