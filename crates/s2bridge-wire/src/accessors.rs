//! Presence-aware accessors for optional wire fields.
//!
//! Every optional field of a wire message gets two methods: `has_<field>()`
//! reports whether the field was explicitly set, and `<field>()` returns its
//! value or the wire default. These mirror what generated protobuf bindings
//! offer, and they are the only surface the mapping layer reads through.

/// Generates `has_*` and getter methods for the optional fields of a message.
///
/// Field kinds:
/// - `scalar` → getter returns the value by copy (`Default` when unset)
/// - `text`   → getter returns `&str` (`""` when unset)
/// - `bytes`  → getter returns `&[u8]` (empty when unset)
/// - `message` → getter returns `&T` (a shared default instance when unset)
macro_rules! optional_fields {
    (@scalar $field:ident: $ty:ty => $has:ident) => {
        #[doc = concat!("Returns `true` if `", stringify!($field), "` was explicitly set.")]
        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        #[doc = concat!("Returns `", stringify!($field), "`, or the wire default if unset.")]
        pub fn $field(&self) -> $ty {
            self.$field.unwrap_or_default()
        }
    };
    (@text $field:ident: $ty:ty => $has:ident) => {
        #[doc = concat!("Returns `true` if `", stringify!($field), "` was explicitly set.")]
        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        #[doc = concat!("Returns `", stringify!($field), "`, or `\"\"` if unset.")]
        pub fn $field(&self) -> &str {
            self.$field.as_deref().unwrap_or("")
        }
    };
    (@bytes $field:ident: $ty:ty => $has:ident) => {
        #[doc = concat!("Returns `true` if `", stringify!($field), "` was explicitly set.")]
        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        #[doc = concat!("Returns `", stringify!($field), "`, or an empty slice if unset.")]
        pub fn $field(&self) -> &[u8] {
            self.$field.as_deref().unwrap_or(&[])
        }
    };
    (@message $field:ident: $ty:ty => $has:ident) => {
        #[doc = concat!("Returns `true` if `", stringify!($field), "` was explicitly set.")]
        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        #[doc = concat!("Returns `", stringify!($field), "`, or the default instance if unset.")]
        pub fn $field(&self) -> &$ty {
            static DEFAULT: std::sync::LazyLock<$ty> =
                std::sync::LazyLock::new(<$ty>::default);
            self.$field.as_ref().unwrap_or(&DEFAULT)
        }
    };
    ($msg:ty { $($kind:ident $field:ident: $ty:ty => $has:ident;)* }) => {
        impl $msg {
            $( optional_fields!(@$kind $field: $ty => $has); )*
        }
    };
}

pub(crate) use optional_fields;
