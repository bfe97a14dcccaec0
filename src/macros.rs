/// Builds a [`Term`](crate::Term) from a parenthesized, Termpose-like syntax.
///
/// - identifiers and literals become atoms (`"two words"` becomes the atom
///   `two words`, `42` becomes `42`)
/// - a parenthesized group becomes a sequence
/// - several items at the top level form a sequence
/// - `{expr}` splices anything that converts into a `Term`
///
/// # Examples
///
/// ```rust
/// use termpose::{term, Term};
///
/// let sword = term!(sword (damage 4) (name "Old Faithful"));
/// assert_eq!(sword.to_string(), "(sword (damage 4) (name \"Old Faithful\"))");
///
/// let name = Term::from("dynamic");
/// assert_eq!(term!(label {name}).to_string(), "(label dynamic)");
/// assert_eq!(term!(()), Term::seq(vec![]));
/// ```
#[macro_export]
macro_rules! term {
    (()) => {
        $crate::Term::seq(::std::vec::Vec::new())
    };

    (( $($item:tt)+ )) => {
        $crate::Term::seq(::std::vec![$($crate::term!($item)),+])
    };

    ({ $value:expr }) => {
        $crate::Term::from($value)
    };

    ($atom:ident) => {
        $crate::Term::atom(::std::stringify!($atom))
    };

    ($atom:literal) => {
        $crate::Term::atom(::std::string::ToString::to_string(&$atom))
    };

    ($($item:tt)+) => {
        $crate::Term::seq(::std::vec![$($crate::term!($item)),+])
    };
}
