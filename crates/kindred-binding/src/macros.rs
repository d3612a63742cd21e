//! `binding!`: do-notation for short, fixed blocks.

/// Expands a fixed block of steps into nested binds.
///
/// ```ignore
/// let sum = binding! { WeakContext;
///     a <= Weak::new(2);
///     b <= Weak::new(a + 1);
///     let total = a + b;
///     Weak::new(());
///     yield total
/// };
/// assert_eq!(sum.observe(), Some(5));
/// ```
///
/// Statements:
/// - `name <= expr;` binds the payload of `expr` to `name`
/// - `_ <= expr;` or `expr;` runs `expr` for its effect
/// - `let pat = expr;` is an ordinary binding
/// - `yield expr` ends the block, wrapping `expr` with `pure`
///
/// The expansion nests one closure per statement, so its depth is fixed by
/// the source. Chains whose length is only known at run time belong in a
/// [`Block`](crate::Block).
#[macro_export]
macro_rules! binding {
    (@step $m:ident; yield $ret:expr $(;)?) => {
        $crate::Monad::pure($m, $ret)
    };
    (@step $m:ident; let $p:pat = $e:expr; $($rest:tt)+) => {{
        let $p = $e;
        $crate::binding!(@step $m; $($rest)+)
    }};
    (@step $m:ident; _ <= $wa:expr; $($rest:tt)+) => {
        $crate::Monad::bind($m, $wa, move |_| $crate::binding!(@step $m; $($rest)+))
    };
    (@step $m:ident; $x:ident <= $wa:expr; $($rest:tt)+) => {
        $crate::Monad::bind($m, $wa, move |$x| $crate::binding!(@step $m; $($rest)+))
    };
    (@step $m:ident; $wa:expr; $($rest:tt)+) => {
        $crate::Monad::bind($m, $wa, move |_| $crate::binding!(@step $m; $($rest)+))
    };
    ($monad:expr; $($body:tt)+) => {{
        let monad = &$monad;
        $crate::binding!(@step monad; $($body)+)
    }};
}
