use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Absolute pressures and temperatures fed to the shock relations must be
/// strictly positive; a zero driven pressure, for example, would make every
/// density in the tube vanish.
///
/// # Examples
///
/// ```
/// use shock_tailor::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let p1 = StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).unwrap();
/// assert_eq!(p1.into_inner().get::<pascal>(), 101_325.0);
///
/// assert!(StrictlyPositive::new(Pressure::new::<pascal>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
