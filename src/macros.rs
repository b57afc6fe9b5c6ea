// Macros to simplify law declarations

/// Builds a `Vec<Law>` from `"name": lhs => rhs` entries.
#[macro_export]
macro_rules! laws {
    () => {
        Vec::<$crate::rewriting::catalog::Law>::new()
    };
    ($($name:literal : $lhs:expr => $rhs:expr),+ $(,)?) => {
        vec![$($crate::rewriting::catalog::Law::new($name, $lhs, $rhs)),+]
    };
}
