/// Numeric display helpers.
///
/// This module turns evaluation results into the strings shown on the
/// calculator display and rejects results that have no sensible display form.
/// Use these helpers wherever an `f64` leaves the crate as text so that every
/// entry point formats numbers the same way.
pub mod num;
