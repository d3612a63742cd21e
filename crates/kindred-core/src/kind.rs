//! Higher-kinded context encoding.
//!
//! Rust has no type constructors as type parameters, so a context is named by
//! a zero-sized tag type implementing [`Kind`]. The tag's generic associated
//! type [`Kind::Of`] is the wrapped value: `F::Of<A>` reads as "an `A` living
//! inside context `F`".

/// Bound shared by every payload carried inside a context.
///
/// Contexts may hand the same payload out more than once (a weak value is
/// re-observed on every access), so payloads must be cloneable. They must also
/// be `'static` so contexts can store them behind type-erased thunks.
pub trait Payload: Clone + 'static {}

impl<T: Clone + 'static> Payload for T {}

/// A type-level tag selecting an effect context.
///
/// ```ignore
/// struct OptionContext;
/// impl Kind for OptionContext {
///     type Of<A: Payload> = Option<A>;
/// }
/// ```
pub trait Kind {
    /// The wrapped value `HK<Self, A>`.
    type Of<A: Payload>: Payload;
}
