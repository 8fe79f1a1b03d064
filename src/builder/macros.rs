//! Macros for ergonomic phase declaration.

/// Generate a `State` implementation (plus `Display`) for a fieldless enum.
///
/// Each variant is paired with the label returned by `State::name`.
///
/// # Example
///
/// ```
/// use chaincalc::core::State;
/// use chaincalc::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Closed => "closed",
///         Open => "open",
///     }
///     initial: [Closed]
/// }
///
/// assert_eq!(Door::Open.name(), "open");
/// assert!(Door::Closed.is_initial());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(initial: [$($initial:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_initial(&self) -> bool {
                match self {
                    $($(Self::$initial => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
