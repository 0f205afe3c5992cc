//! `define_port_error!` builds a `thiserror` enum plus one snake_case
//! constructor per variant, taking `impl Into<T>` for every field.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Affected { rows: u64 } => "affected {rows} rows",
            Mixed { message: String, rows: u64 } => "{message} ({rows})",
            Closed => "closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::unreachable("pool closed");
        assert_eq!(err.to_string(), "unreachable: pool closed");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(SamplePortError::affected(3_u64).to_string(), "affected 3 rows");
    }

    #[test]
    fn mixed_and_unit_variants_get_constructors() {
        assert_eq!(SamplePortError::mixed("gone", 2_u64).to_string(), "gone (2)");
        assert_eq!(SamplePortError::closed(), SamplePortError::Closed);
    }
}
