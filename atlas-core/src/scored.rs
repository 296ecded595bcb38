//! Records that carry a raw value and receive a bounded score.
//!
//! The ranking normalises cards and maps the same way, so both implement
//! [`Scored`] and share one normaliser.

/// A record with a raw economic or qualitative value.
///
/// Implementations must:
/// - Report the raw value without rescaling it.
/// - Store the score handed to [`Scored::with_score`] unchanged.
///
/// Use [`Scored::sanitise`] to turn a raw value into something safe to
/// compare.
///
/// # Examples
///
/// ```rust
/// use atlas_core::Scored;
///
/// struct Entry {
///     value: f64,
///     score: f64,
/// }
///
/// impl Scored for Entry {
///     fn value(&self) -> f64 {
///         self.value
///     }
///
///     fn with_score(self, score: f64) -> Self {
///         Self { score, ..self }
///     }
/// }
///
/// let entry = Entry { value: 4.0, score: 0.0 }.with_score(10.0);
/// assert_eq!(entry.score, 10.0);
/// assert_eq!(Entry::sanitise(f64::NAN), 0.0);
/// ```
pub trait Scored: Sized {
    /// Raw value before normalisation.
    fn value(&self) -> f64;

    /// Return the record carrying `score`.
    fn with_score(self, score: f64) -> Self;

    /// Replace non-finite values with `0.0`.
    fn sanitise(value: f64) -> f64 {
        if value.is_finite() { value } else { 0.0 }
    }
}
