//! Declarative validator definitions.
//!
//! Every built-in predicate is declared through [`validator!`]: a name, the
//! input it reads, a boolean rule, the error to report when the rule is
//! false, and optionally a free factory function.
//!
//! ```rust,ignore
//! validator! {
//!     /// Rejects blank input.
//!     pub Required for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::required() }
//!     fn required();
//! }
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     fn min_length(min: usize);
//! }
//! ```
//!
//! A struct validator gets a `new` taking every field in order unless a
//! `new(..) { .. }` block supplies its own.

/// Declares a validator struct and its `Validate` implementation.
///
/// Unit validators derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`
/// and their factory is `const`. Struct validators derive `Debug, Clone`;
/// add more through attributes.
#[macro_export]
macro_rules! validator {
    (@impl $name:ident for $input:ty, $slf:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$slf, $inp: &Self::Input) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // Unit validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        $crate::validator!(@impl $name for $input, self, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis const fn $factory() -> $name {
                $name
            }
        )?
    };

    // Struct validator with a hand-written constructor.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($slf:ident, $inp:ident) $rule:block
        error($eslf:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name for $input, $slf, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // Struct validator whose constructor takes every field.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($slf:ident, $inp:ident) $rule:block
        error($eslf:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name for $input, $slf, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };
}
