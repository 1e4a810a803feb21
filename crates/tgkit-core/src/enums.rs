//! Enumerations whose members double as their primitive value.
//!
//! A [`string_enum!`] member compares equal to, hashes like and serializes as
//! its `&'static str` value, so it can be dropped anywhere a plain string is
//! expected. `Display` and `Debug` show the qualified member name instead
//! (`ParseMode.HTML` / `<ParseMode.HTML>`), which keeps log lines readable.
//!
//! [`int_enum!`] does the same for integer values, with the primitive type
//! chosen per enumeration.
//!
//! Members are `const` items on a newtype with private fields: the set is
//! closed once the defining module is compiled.
//!
//! ```
//! tgkit_core::string_enum! {
//!     pub struct Fruit {
//!         APPLE = "apple",
//!         PEAR = "pear",
//!     }
//! }
//!
//! assert_eq!(Fruit::APPLE, "apple");
//! assert_eq!(Fruit::APPLE.to_string(), "Fruit.APPLE");
//! assert_eq!(Fruit::APPLE + Fruit::PEAR, "applepear");
//! ```

use std::any::Any;

#[doc(hidden)]
pub use serde as __serde;

/// Behaviour shared by every member of a string- or integer-backed enumeration.
pub trait EnumMember: Copy + Send + Sync + 'static {
    /// The primitive each member stands for.
    type Value: Copy + 'static;

    /// Name of the enumeration type, as shown by `Display` and `Debug`.
    const TYPE_NAME: &'static str;

    /// Symbolic member name (`TEXT_LENGTH`).
    fn name(&self) -> &'static str;

    fn value(&self) -> Self::Value;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    /// Loose equality against a value of any type.
    ///
    /// Matches another member with the same value or a raw primitive equal to
    /// the member's value. String members accept `&'static str` and `String`;
    /// integer members accept any primitive integer type that holds the same
    /// number. Anything else is simply not equal.
    fn eq_dyn(&self, other: &dyn Any) -> bool;

    /// `TypeName.MEMBER`.
    fn qualified_name(&self) -> String {
        format!("{}.{}", Self::TYPE_NAME, self.name())
    }
}

/// Declare a closed set of string constants that behave as `str`.
///
/// Generates a `Copy` newtype with one associated `const` per member plus
/// `MEMBERS`, `name()`, `value()`, `from_value()` and `from_name()`.
/// Equality, ordering and hashing only look at the value; `Deref<Target = str>`
/// exposes every string method and `+` produces a plain `String`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis struct $ty {
            name: &'static str,
            value: &'static str,
        }

        #[allow(dead_code)]
        impl $ty {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self {
                    name: stringify!($member),
                    value: $value,
                };
            )+

            /// Every member, in declaration order.
            pub const MEMBERS: &'static [Self] = &[$(Self::$member),+];

            pub const fn name(&self) -> &'static str {
                self.name
            }

            pub const fn value(&self) -> &'static str {
                self.value
            }

            pub fn from_value(value: &str) -> ::std::option::Option<Self> {
                Self::MEMBERS.iter().copied().find(|m| m.value == value)
            }

            pub fn from_name(name: &str) -> ::std::option::Option<Self> {
                Self::MEMBERS.iter().copied().find(|m| m.name == name)
            }
        }

        impl $crate::enums::EnumMember for $ty {
            type Value = &'static str;

            const TYPE_NAME: &'static str = stringify!($ty);

            fn name(&self) -> &'static str {
                self.name
            }

            fn value(&self) -> &'static str {
                self.value
            }

            fn members() -> &'static [Self] {
                Self::MEMBERS
            }

            fn eq_dyn(&self, other: &dyn ::std::any::Any) -> bool {
                if let Some(member) = other.downcast_ref::<Self>() {
                    self.value == member.value
                } else if let Some(s) = other.downcast_ref::<&'static str>() {
                    self.value == *s
                } else if let Some(s) = other.downcast_ref::<::std::string::String>() {
                    self.value == s.as_str()
                } else {
                    false
                }
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::cmp::PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.value == other
            }
        }

        impl<'a> ::std::cmp::PartialEq<&'a str> for $ty {
            fn eq(&self, other: &&'a str) -> bool {
                self.value == *other
            }
        }

        impl ::std::cmp::PartialEq<::std::string::String> for $ty {
            fn eq(&self, other: &::std::string::String) -> bool {
                self.value == other.as_str()
            }
        }

        impl ::std::cmp::PartialEq<$ty> for str {
            fn eq(&self, other: &$ty) -> bool {
                self == other.value
            }
        }

        impl<'a> ::std::cmp::PartialEq<$ty> for &'a str {
            fn eq(&self, other: &$ty) -> bool {
                *self == other.value
            }
        }

        impl ::std::cmp::PartialEq<$ty> for ::std::string::String {
            fn eq(&self, other: &$ty) -> bool {
                self.as_str() == other.value
            }
        }

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.value.cmp(other.value)
            }
        }

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.value, state);
            }
        }

        impl ::std::borrow::Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                self.value
            }
        }

        impl ::std::convert::AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.value
            }
        }

        impl ::std::ops::Deref for $ty {
            type Target = str;

            fn deref(&self) -> &str {
                self.value
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}.{}", stringify!($ty), self.name)
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "<{}.{}>", stringify!($ty), self.name)
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = ::std::string::String;

            fn add(self, rhs: Self) -> ::std::string::String {
                [self.value, rhs.value].concat()
            }
        }

        impl<'a> ::std::ops::Add<&'a str> for $ty {
            type Output = ::std::string::String;

            fn add(self, rhs: &'a str) -> ::std::string::String {
                [self.value, rhs].concat()
            }
        }

        impl<'a> ::std::ops::Add<$ty> for &'a str {
            type Output = ::std::string::String;

            fn add(self, rhs: $ty) -> ::std::string::String {
                [self, rhs.value].concat()
            }
        }

        impl ::std::ops::Add<$ty> for ::std::string::String {
            type Output = ::std::string::String;

            fn add(mut self, rhs: $ty) -> ::std::string::String {
                self.push_str(rhs.value);
                self
            }
        }

        impl ::std::convert::From<$ty> for &'static str {
            fn from(member: $ty) -> Self {
                member.value
            }
        }

        impl ::std::convert::From<$ty> for ::std::string::String {
            fn from(member: $ty) -> Self {
                member.value.to_owned()
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_value(s).ok_or_else(|| $crate::error::CoreError::UnknownMember {
                    type_name: stringify!($ty),
                    value: s.to_owned(),
                })
            }
        }

        impl $crate::enums::__serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::enums::__serde::Serializer,
            {
                serializer.serialize_str(self.value)
            }
        }

        impl<'de> $crate::enums::__serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::enums::__serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::enums::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                raw.parse::<Self>()
                    .map_err(<D::Error as $crate::enums::__serde::de::Error>::custom)
            }
        }
    };
}

/// Declare a closed set of integer constants that behave as their primitive.
///
/// The primitive type follows the type name: `pub struct Limit: usize { ... }`.
/// Members compare and order against the raw integer, hash like it, and `+`/`-`
/// produce the primitive.
///
/// Two names for the same value are declared as an alias of an existing
/// member in a trailing `aliases { ... }` block. An alias is the member it
/// points at: it prints with the member's name, is not listed in `MEMBERS`,
/// and `from_value` resolves to the member. `from_name` accepts both names.
///
/// ```
/// tgkit_core::int_enum! {
///     pub struct Bounds: u8 {
///         MIN_NAME = 1,
///         MAX_NAME = 32,
///     }
///     aliases {
///         MIN_TITLE = MIN_NAME,
///     }
/// }
///
/// assert_eq!(Bounds::MIN_TITLE, Bounds::MIN_NAME);
/// assert_eq!(Bounds::MIN_TITLE.to_string(), "Bounds.MIN_NAME");
/// assert_eq!(Bounds::MEMBERS.len(), 2);
/// assert_eq!(Bounds::from_name("MIN_TITLE"), Some(Bounds::MIN_NAME));
/// ```
#[macro_export]
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident: $repr:ty {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr
            ),+ $(,)?
        }
        $(
            aliases {
                $(
                    $(#[$alias_meta:meta])*
                    $alias:ident = $target:ident
                ),+ $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis struct $ty {
            name: &'static str,
            value: $repr,
        }

        #[allow(dead_code)]
        impl $ty {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self {
                    name: stringify!($member),
                    value: $value,
                };
            )+

            $($(
                $(#[$alias_meta])*
                pub const $alias: Self = Self::$target;
            )+)?

            /// Every member, in declaration order. Aliases are not listed.
            pub const MEMBERS: &'static [Self] = &[$(Self::$member),+];

            pub const fn name(&self) -> &'static str {
                self.name
            }

            pub const fn value(&self) -> $repr {
                self.value
            }

            pub fn from_value(value: $repr) -> ::std::option::Option<Self> {
                Self::MEMBERS.iter().copied().find(|m| m.value == value)
            }

            pub fn from_name(name: &str) -> ::std::option::Option<Self> {
                Self::MEMBERS
                    .iter()
                    .copied()
                    .find(|m| m.name == name)
                    $($(.or_else(|| (name == stringify!($alias)).then_some(Self::$target)))+)?
            }
        }

        impl $crate::enums::EnumMember for $ty {
            type Value = $repr;

            const TYPE_NAME: &'static str = stringify!($ty);

            fn name(&self) -> &'static str {
                self.name
            }

            fn value(&self) -> $repr {
                self.value
            }

            fn members() -> &'static [Self] {
                Self::MEMBERS
            }

            fn eq_dyn(&self, other: &dyn ::std::any::Any) -> bool {
                if let Some(member) = other.downcast_ref::<Self>() {
                    return self.value == member.value;
                }
                <i128 as ::std::convert::TryFrom<$repr>>::try_from(self.value)
                    .map_or(false, |value| $crate::enums::integer_eq_dyn(value, other))
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::cmp::PartialEq<$repr> for $ty {
            fn eq(&self, other: &$repr) -> bool {
                self.value == *other
            }
        }

        impl ::std::cmp::PartialEq<$ty> for $repr {
            fn eq(&self, other: &$ty) -> bool {
                *self == other.value
            }
        }

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl ::std::cmp::PartialOrd<$repr> for $ty {
            fn partial_cmp(&self, other: &$repr) -> ::std::option::Option<::std::cmp::Ordering> {
                self.value.partial_cmp(other)
            }
        }

        impl ::std::cmp::PartialOrd<$ty> for $repr {
            fn partial_cmp(&self, other: &$ty) -> ::std::option::Option<::std::cmp::Ordering> {
                self.partial_cmp(&other.value)
            }
        }

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.value, state);
            }
        }

        impl ::std::borrow::Borrow<$repr> for $ty {
            fn borrow(&self) -> &$repr {
                &self.value
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}.{}", stringify!($ty), self.name)
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "<{}.{}>", stringify!($ty), self.name)
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = $repr;

            fn add(self, rhs: Self) -> $repr {
                self.value + rhs.value
            }
        }

        impl ::std::ops::Add<$repr> for $ty {
            type Output = $repr;

            fn add(self, rhs: $repr) -> $repr {
                self.value + rhs
            }
        }

        impl ::std::ops::Add<$ty> for $repr {
            type Output = $repr;

            fn add(self, rhs: $ty) -> $repr {
                self + rhs.value
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = $repr;

            fn sub(self, rhs: Self) -> $repr {
                self.value - rhs.value
            }
        }

        impl ::std::ops::Sub<$repr> for $ty {
            type Output = $repr;

            fn sub(self, rhs: $repr) -> $repr {
                self.value - rhs
            }
        }

        impl ::std::ops::Sub<$ty> for $repr {
            type Output = $repr;

            fn sub(self, rhs: $ty) -> $repr {
                self - rhs.value
            }
        }

        impl ::std::convert::From<$ty> for $repr {
            fn from(member: $ty) -> Self {
                member.value
            }
        }

        impl ::std::convert::TryFrom<$repr> for $ty {
            type Error = $crate::error::CoreError;

            fn try_from(value: $repr) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(value).ok_or_else(|| $crate::error::CoreError::UnknownMember {
                    type_name: stringify!($ty),
                    value: value.to_string(),
                })
            }
        }

        impl $crate::enums::__serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::enums::__serde::Serializer,
            {
                $crate::enums::__serde::Serialize::serialize(&self.value, serializer)
            }
        }

        impl<'de> $crate::enums::__serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::enums::__serde::Deserializer<'de>,
            {
                let raw = <$repr as $crate::enums::__serde::Deserialize>::deserialize(deserializer)?;
                <Self as ::std::convert::TryFrom<$repr>>::try_from(raw)
                    .map_err(<D::Error as $crate::enums::__serde::de::Error>::custom)
            }
        }
    };
}

/// Compare an integer against a value of any primitive integer type.
///
/// The comparison is lossless: `4096_u64` and `4096_i32` both match `4096`,
/// a negative number never matches an unsigned value. Anything that is not
/// a primitive integer is not equal.
pub fn integer_eq_dyn(value: i128, other: &dyn Any) -> bool {
    macro_rules! compare_as {
        ($($int:ty),+) => {
            $(
                if let Some(raw) = other.downcast_ref::<$int>() {
                    return i128::try_from(*raw).map_or(false, |raw| raw == value);
                }
            )+
        };
    }

    compare_as!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    false
}

/// `true` when no two members of `E` share a value.
///
/// Aliases are not members, so an enumeration that spells a repeated value
/// as an alias still passes.
pub fn values_are_unique<E>() -> bool
where
    E: EnumMember,
    E::Value: PartialEq,
{
    let members = E::members();
    members
        .iter()
        .enumerate()
        .all(|(i, a)| members[i + 1..].iter().all(|b| a.value() != b.value()))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::hash::{BuildHasher, RandomState};

    use proptest::prelude::*;

    use super::*;

    crate::string_enum! {
        pub struct StrEnumTest {
            FOO = "foo",
            BAR = "bar",
        }
    }

    crate::int_enum! {
        pub struct IntEnumTest: i64 {
            FOO = 1,
            BAR = 2,
        }
    }

    #[test]
    fn to_json() {
        assert_eq!(
            serde_json::to_string(&StrEnumTest::FOO).unwrap(),
            serde_json::to_string("foo").unwrap()
        );
        assert_eq!(
            serde_json::to_string(&IntEnumTest::FOO).unwrap(),
            serde_json::to_string(&1_i64).unwrap()
        );
    }

    #[test]
    fn from_json() {
        let member: StrEnumTest = serde_json::from_str(r#""bar""#).unwrap();
        assert_eq!(member, StrEnumTest::BAR);
        let member: IntEnumTest = serde_json::from_str("2").unwrap();
        assert_eq!(member, IntEnumTest::BAR);

        assert!(serde_json::from_str::<StrEnumTest>(r#""baz""#).is_err());
        assert!(serde_json::from_str::<IntEnumTest>("3").is_err());
    }

    #[test]
    fn string_representation() {
        assert_eq!(format!("{:?}", StrEnumTest::FOO), "<StrEnumTest.FOO>");
        assert_eq!(StrEnumTest::FOO.to_string(), "StrEnumTest.FOO");
        assert_eq!(StrEnumTest::FOO.qualified_name(), "StrEnumTest.FOO");
        assert_ne!(StrEnumTest::FOO.to_string(), "foo");

        assert_eq!(format!("{:?}", IntEnumTest::BAR), "<IntEnumTest.BAR>");
        assert_eq!(IntEnumTest::BAR.to_string(), "IntEnumTest.BAR");
    }

    #[test]
    fn string_inheritance() {
        let as_str: &str = &StrEnumTest::FOO;
        assert_eq!(as_str, "foo");
        assert_eq!(StrEnumTest::FOO + StrEnumTest::BAR, "foobar");
        assert_eq!(StrEnumTest::FOO.replace('o', "a"), "faa");
        assert_eq!(StrEnumTest::FOO + "d", "food");
        assert_eq!("bar" + StrEnumTest::FOO, "barfoo");
        assert_eq!(String::from("x") + StrEnumTest::BAR, "xbar");

        assert_eq!(StrEnumTest::FOO, StrEnumTest::FOO);
        assert_eq!(StrEnumTest::FOO, "foo");
        assert_eq!("foo", StrEnumTest::FOO);
        assert_eq!(StrEnumTest::FOO, String::from("foo"));
        assert_ne!(StrEnumTest::FOO, StrEnumTest::BAR);
        assert_ne!(StrEnumTest::FOO, "bar");
        assert!(!StrEnumTest::FOO.eq_dyn(&()));
        assert!(!StrEnumTest::FOO.eq_dyn(&1_i64));
        assert!(StrEnumTest::FOO.eq_dyn(&"foo"));
        assert!(StrEnumTest::FOO.eq_dyn(&String::from("foo")));
        assert!(StrEnumTest::FOO.eq_dyn(&StrEnumTest::FOO));
        assert!(!StrEnumTest::FOO.eq_dyn(&IntEnumTest::FOO));

        let state = RandomState::new();
        assert_eq!(state.hash_one(StrEnumTest::FOO), state.hash_one("foo"));
    }

    #[test]
    fn int_inheritance() {
        let raw: i64 = IntEnumTest::FOO.into();
        assert_eq!(raw, 1);
        assert_eq!(IntEnumTest::FOO + IntEnumTest::BAR, 3);
        assert_eq!(IntEnumTest::BAR - 1_i64, 1);

        assert_eq!(IntEnumTest::FOO, IntEnumTest::FOO);
        assert_eq!(IntEnumTest::FOO, 1_i64);
        assert_ne!(IntEnumTest::FOO, IntEnumTest::BAR);
        assert_ne!(IntEnumTest::FOO, 2_i64);
        assert!(IntEnumTest::FOO < 2_i64);
        assert!(!IntEnumTest::FOO.eq_dyn(&()));
        assert!(!IntEnumTest::FOO.eq_dyn(&"foo"));
        assert!(IntEnumTest::FOO.eq_dyn(&1_i64));

        let state = RandomState::new();
        assert_eq!(state.hash_one(IntEnumTest::FOO), state.hash_one(1_i64));
    }

    #[test]
    fn members_interchange_with_raw_values_in_hash_containers() {
        let set: HashSet<StrEnumTest> = StrEnumTest::MEMBERS.iter().copied().collect();
        assert!(set.contains("foo"));
        assert!(!set.contains("baz"));

        let mut counts: HashMap<IntEnumTest, &str> = HashMap::new();
        counts.insert(IntEnumTest::BAR, "two");
        assert_eq!(counts.get(&2_i64), Some(&"two"));
    }

    #[test]
    fn lookups() {
        assert_eq!(StrEnumTest::from_value("bar"), Some(StrEnumTest::BAR));
        assert_eq!(StrEnumTest::from_name("FOO"), Some(StrEnumTest::FOO));
        assert_eq!(StrEnumTest::from_value("FOO"), None);
        assert_eq!("foo".parse::<StrEnumTest>().unwrap(), StrEnumTest::FOO);

        let err = "nope".parse::<StrEnumTest>().unwrap_err();
        assert_eq!(err.to_string(), r#""nope" is not a valid StrEnumTest"#);

        assert_eq!(IntEnumTest::try_from(2_i64).unwrap(), IntEnumTest::BAR);
        assert!(IntEnumTest::try_from(7_i64).is_err());
        assert_eq!(IntEnumTest::members().len(), 2);
    }

    #[test]
    fn uniqueness_check() {
        assert!(values_are_unique::<StrEnumTest>());
        assert!(values_are_unique::<IntEnumTest>());
    }

    #[test]
    fn int_members_match_any_integer_width() {
        assert!(IntEnumTest::BAR.eq_dyn(&2_u8));
        assert!(IntEnumTest::BAR.eq_dyn(&2_usize));
        assert!(IntEnumTest::BAR.eq_dyn(&2_i128));
        assert!(!IntEnumTest::BAR.eq_dyn(&u128::MAX));
        assert!(!IntEnumTest::BAR.eq_dyn(&2.0_f32));
        assert!(integer_eq_dyn(-1, &-1_i8));
        assert!(!integer_eq_dyn(-1, &u64::MAX));
    }

    /// Arbitrary text, biased towards member values and near misses.
    fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("foo".to_string()),
            Just("bar".to_string()),
            Just("FOO".to_string()),
            Just("foo ".to_string()),
            ".*",
        ]
    }

    fn any_int() -> impl Strategy<Value = i64> {
        prop_oneof![Just(1_i64), Just(2_i64), any::<i64>()]
    }

    proptest! {
        #[test]
        fn string_member_equals_exactly_its_value(s in any_text()) {
            for member in StrEnumTest::MEMBERS {
                let expected = member.value() == s;
                prop_assert_eq!(*member == s, expected);
                prop_assert_eq!(s == *member, expected);
                prop_assert_eq!(*member == s.as_str(), expected);
                prop_assert_eq!(s.as_str() == *member, expected);
                prop_assert_eq!(member.eq_dyn(&s), expected);
            }
        }

        #[test]
        fn int_member_equals_exactly_its_value(n in any_int()) {
            for member in IntEnumTest::MEMBERS {
                let expected = member.value() == n;
                prop_assert_eq!(*member == n, expected);
                prop_assert_eq!(n == *member, expected);
                prop_assert_eq!(member.eq_dyn(&n), expected);
                prop_assert_eq!(*member < n, member.value() < n);
            }
        }

        #[test]
        fn unrelated_values_never_compare_equal(
            s in any_text(),
            n in any_int(),
            f in any::<f64>(),
            b in any::<bool>(),
        ) {
            for member in StrEnumTest::MEMBERS {
                prop_assert!(!member.eq_dyn(&n));
                prop_assert!(!member.eq_dyn(&f));
                prop_assert!(!member.eq_dyn(&b));
                prop_assert!(!member.eq_dyn(&IntEnumTest::FOO));
            }
            for member in IntEnumTest::MEMBERS {
                prop_assert!(!member.eq_dyn(&s));
                prop_assert!(!member.eq_dyn(&f));
                prop_assert!(!member.eq_dyn(&b));
                prop_assert!(!member.eq_dyn(&StrEnumTest::FOO));
            }
        }

        #[test]
        fn hash_follows_value(s in any_text(), n in any_int()) {
            let state = RandomState::new();
            if let Some(member) = StrEnumTest::from_value(&s) {
                prop_assert_eq!(state.hash_one(member), state.hash_one(s.as_str()));
            }
            if let Some(member) = IntEnumTest::from_value(n) {
                prop_assert_eq!(state.hash_one(member), state.hash_one(n));
            }
        }

        #[test]
        fn json_decodes_only_member_values(s in any_text(), n in any_int()) {
            let json = serde_json::to_string(&s).unwrap();
            let decoded = serde_json::from_str::<StrEnumTest>(&json).ok();
            prop_assert_eq!(decoded, StrEnumTest::from_value(&s));

            let decoded = serde_json::from_str::<IntEnumTest>(&n.to_string()).ok();
            prop_assert_eq!(decoded, IntEnumTest::from_value(n));
        }
    }
}
