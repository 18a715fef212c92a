//! Parameter encoder: option records to [`QueryParams`].
//!
//! Option records are plain structs deriving [`Serialize`]. The encoder walks the
//! serde data model of the record and applies the wire rules field by field:
//!
//! - the wire key is the serialized field name (`#[serde(rename = "...")]`);
//! - `#[serde(skip)]` keeps bookkeeping fields out of the query string entirely;
//! - `None` is omitted, and so is any optional value rendering as `""`, `"0"` or
//!   `"false"`; wrap a field in [`Required`] to always emit it;
//! - sequences are joined with `,`, or with `|` when wrapped in [`Piped`];
//! - shapes that have no query-string form (nested structs, maps, tuples, ...)
//!   are skipped.
//!
//! ```
//! use serde::Serialize;
//! use tmdb_core::encode::{encode, Piped, Required};
//!
//! #[derive(Serialize)]
//! struct Opts {
//!     query: Required<String>,
//!     page: Option<u32>,
//!     include_adult: Option<bool>,
//!     with_keywords: Piped<Vec<u64>>,
//! }
//!
//! let params = encode(&Opts {
//!     query: Required(String::new()),
//!     page: Some(2),
//!     include_adult: Some(false),
//!     with_keywords: Piped(vec![12, 34]),
//! })
//! .unwrap();
//!
//! assert_eq!(params.to_query_string(), "query=&page=2&with_keywords=12%7C34");
//! ```

use crate::error::Error;
use crate::query::QueryParams;
use serde::ser::{self, Impossible, Serialize, SerializeSeq, SerializeStruct, Serializer};
use std::fmt;
use tracing::trace;

const REQUIRED_TOKEN: &str = "$tmdb::Required";
const PIPED_TOKEN: &str = "$tmdb::Piped";

/// Marks a field as always emitted, even when it renders as a zero value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required<T>(pub T);

impl<T: Serialize> Serialize for Required<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(REQUIRED_TOKEN, &self.0)
    }
}

impl<T> From<T> for Required<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Marks a list field as pipe-joined (`a|b`) instead of comma-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Piped<T>(pub T);

impl<T: Serialize> Serialize for Piped<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(PIPED_TOKEN, &self.0)
    }
}

impl<T> From<T> for Piped<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Encode an option record into query parameters.
///
/// An absent record (`None`) encodes to an empty map.
///
/// # Errors
///
/// Returns [`Error::EncodingError`] if `record` is not struct-shaped, or if a
/// field's `Serialize` implementation fails.
pub fn encode<T: Serialize + ?Sized>(record: &T) -> crate::Result<QueryParams> {
    let mut params = QueryParams::new();
    record
        .serialize(RecordSerializer {
            params: &mut params,
        })
        .map_err(|err| Error::EncodingError(err.to_string()))?;
    Ok(params)
}

/// Returns true for the rendered zero values of strings, numbers and bools.
fn is_zero(text: &str) -> bool {
    matches!(text, "" | "0" | "false")
}

#[derive(Debug)]
enum EncodeError {
    NotARecord(&'static str),
    Unsupported(&'static str),
    Custom(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARecord(shape) => write!(f, "expected an option record, found {shape}"),
            Self::Unsupported(shape) => write!(f, "unsupported field shape: {shape}"),
            Self::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for EncodeError {}

impl ser::Error for EncodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

macro_rules! reject {
    ($variant:ident; $($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, _value: $ty) -> Result<Self::Ok, Self::Error> {
                Err(EncodeError::$variant(stringify!($ty)))
            }
        )*
    };
}

macro_rules! render {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, value: $ty) -> Result<Self::Ok, Self::Error> {
                Ok(self.render(value.to_string()))
            }
        )*
    };
}

/// Top level: accepts a struct (or its absence) and nothing else.
struct RecordSerializer<'a> {
    params: &'a mut QueryParams,
}

impl<'a> Serializer for RecordSerializer<'a> {
    type Ok = ();
    type Error = EncodeError;
    type SerializeSeq = Impossible<(), EncodeError>;
    type SerializeTuple = Impossible<(), EncodeError>;
    type SerializeTupleStruct = Impossible<(), EncodeError>;
    type SerializeTupleVariant = Impossible<(), EncodeError>;
    type SerializeMap = Impossible<(), EncodeError>;
    type SerializeStruct = FieldEncoder<'a>;
    type SerializeStructVariant = Impossible<(), EncodeError>;

    reject!(NotARecord;
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    );

    fn serialize_none(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), EncodeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), EncodeError> {
        Err(EncodeError::NotARecord("enum"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), EncodeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), EncodeError>
    where
        T: ?Sized + Serialize,
    {
        Err(EncodeError::NotARecord("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, EncodeError> {
        Err(EncodeError::NotARecord("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        Err(EncodeError::NotARecord("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        Err(EncodeError::NotARecord("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(EncodeError::NotARecord("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        Err(EncodeError::NotARecord("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        Ok(FieldEncoder {
            params: self.params,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(EncodeError::NotARecord("enum"))
    }
}

struct FieldEncoder<'a> {
    params: &'a mut QueryParams,
}

impl SerializeStruct for FieldEncoder<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), EncodeError>
    where
        T: ?Sized + Serialize,
    {
        match value.serialize(ValueSerializer::OPTIONAL) {
            Ok(Rendered::Absent) => {}
            Ok(Rendered::Value { text, required }) => {
                if required || !is_zero(&text) {
                    self.params.set(key, text);
                }
            }
            Err(EncodeError::Unsupported(shape)) => {
                trace!(field = key, shape, "skipping option field with no query form");
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

enum Rendered {
    Absent,
    Value { text: String, required: bool },
}

/// Renders one field value under the presence and join policy in effect.
#[derive(Clone, Copy)]
struct ValueSerializer {
    required: bool,
    separator: &'static str,
}

impl ValueSerializer {
    const OPTIONAL: Self = Self {
        required: false,
        separator: ",",
    };

    fn render(self, text: String) -> Rendered {
        Rendered::Value {
            text,
            required: self.required,
        }
    }
}

impl Serializer for ValueSerializer {
    type Ok = Rendered;
    type Error = EncodeError;
    type SerializeSeq = ListEncoder;
    type SerializeTuple = Impossible<Rendered, EncodeError>;
    type SerializeTupleStruct = Impossible<Rendered, EncodeError>;
    type SerializeTupleVariant = Impossible<Rendered, EncodeError>;
    type SerializeMap = Impossible<Rendered, EncodeError>;
    type SerializeStruct = Impossible<Rendered, EncodeError>;
    type SerializeStructVariant = Impossible<Rendered, EncodeError>;

    render!(
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
    );

    reject!(Unsupported; serialize_bytes: &[u8]);

    fn serialize_none(self) -> Result<Rendered, EncodeError> {
        Ok(Rendered::Absent)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Rendered, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Rendered, EncodeError> {
        Err(EncodeError::Unsupported("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Rendered, EncodeError> {
        Err(EncodeError::Unsupported("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Rendered, EncodeError> {
        Ok(self.render(variant.to_owned()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Rendered, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        match name {
            REQUIRED_TOKEN => value.serialize(Self {
                required: true,
                ..self
            }),
            PIPED_TOKEN => value.serialize(Self {
                separator: "|",
                ..self
            }),
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Rendered, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        Err(EncodeError::Unsupported("enum variant with data"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ListEncoder, EncodeError> {
        Ok(ListEncoder {
            outer: self,
            items: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        Err(EncodeError::Unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        Err(EncodeError::Unsupported("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(EncodeError::Unsupported("enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        Err(EncodeError::Unsupported("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        Err(EncodeError::Unsupported("nested struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(EncodeError::Unsupported("enum variant with data"))
    }
}

struct ListEncoder {
    outer: ValueSerializer,
    items: Vec<String>,
}

impl SerializeSeq for ListEncoder {
    type Ok = Rendered;
    type Error = EncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), EncodeError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Rendered, EncodeError> {
        Ok(self.outer.render(self.items.join(self.outer.separator)))
    }
}

/// Renders one list element; only scalars are accepted.
struct ElementSerializer;

impl ElementSerializer {
    #[allow(clippy::unused_self)]
    fn render(self, text: String) -> String {
        text
    }
}

impl Serializer for ElementSerializer {
    type Ok = String;
    type Error = EncodeError;
    type SerializeSeq = Impossible<String, EncodeError>;
    type SerializeTuple = Impossible<String, EncodeError>;
    type SerializeTupleStruct = Impossible<String, EncodeError>;
    type SerializeTupleVariant = Impossible<String, EncodeError>;
    type SerializeMap = Impossible<String, EncodeError>;
    type SerializeStruct = Impossible<String, EncodeError>;
    type SerializeStructVariant = Impossible<String, EncodeError>;

    render!(
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
    );

    reject!(Unsupported; serialize_bytes: &[u8]);

    fn serialize_none(self) -> Result<String, EncodeError> {
        Err(EncodeError::Unsupported("null list element"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, EncodeError> {
        Err(EncodeError::Unsupported("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, EncodeError> {
        Err(EncodeError::Unsupported("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, EncodeError> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, EncodeError>
    where
        T: ?Sized + Serialize,
    {
        Err(EncodeError::Unsupported("enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, EncodeError> {
        Err(EncodeError::Unsupported("nested list"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        Err(EncodeError::Unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        Err(EncodeError::Unsupported("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(EncodeError::Unsupported("enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        Err(EncodeError::Unsupported("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        Err(EncodeError::Unsupported("nested struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(EncodeError::Unsupported("enum variant with data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize, Default)]
    struct ListOptions {
        language: Option<String>,
        page: Option<u32>,
        region: Option<String>,
    }

    #[derive(Serialize, Default)]
    struct SearchOptions {
        query: Required<String>,
        include_adult: Option<bool>,
        page: Option<u32>,
    }

    #[derive(Serialize, Default)]
    struct FilterOptions {
        with_genres: Vec<String>,
        with_keywords: Piped<Vec<String>>,
        #[serde(rename = "vote_average.gte")]
        vote_average_gte: Option<f64>,
        #[serde(skip)]
        for_guest: bool,
    }

    #[derive(Serialize)]
    struct Nested {
        id: u32,
    }

    #[derive(Serialize)]
    struct MixedOptions {
        language: Option<String>,
        nested: Nested,
        lookup: HashMap<String, String>,
        pairs: Vec<(u8, u8)>,
        page: Option<u32>,
    }

    #[derive(Serialize)]
    enum SortBy {
        #[serde(rename = "popularity.desc")]
        PopularityDesc,
    }

    #[derive(Serialize)]
    struct SortOptions {
        sort_by: Option<SortBy>,
    }

    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    #[derive(Serialize)]
    struct FailingOptions {
        value: Failing,
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let params = encode(&ListOptions::default()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_absent_record_encodes_to_empty_map() {
        let params = encode(&None::<ListOptions>).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let params = encode(&ListOptions {
            language: Some("en-US".to_string()),
            page: Some(2),
            region: Some("US".to_string()),
        })
        .unwrap();

        assert_eq!(
            params.into_pairs(),
            vec![
                ("language", "en-US".to_string()),
                ("page", "2".to_string()),
                ("region", "US".to_string()),
            ]
        );
    }

    #[test]
    fn test_required_empty_string_is_emitted() {
        let params = encode(&SearchOptions::default()).unwrap();
        assert_eq!(params.get("query"), Some(""));
        assert_eq!(params.to_query_string(), "query=");
    }

    #[test]
    fn test_optional_false_and_zero_are_treated_as_absent() {
        let params = encode(&SearchOptions {
            query: Required("alien".to_string()),
            include_adult: Some(false),
            page: Some(0),
        })
        .unwrap();

        assert_eq!(params.into_pairs(), vec![("query", "alien".to_string())]);
    }

    #[test]
    fn test_required_false_and_zero_are_emitted() {
        #[derive(Serialize)]
        struct Flags {
            include_adult: Required<bool>,
            page: Required<u32>,
        }

        let params = encode(&Flags {
            include_adult: Required(false),
            page: Required(0),
        })
        .unwrap();

        assert_eq!(params.get("include_adult"), Some("false"));
        assert_eq!(params.get("page"), Some("0"));
    }

    #[test]
    fn test_optional_true_is_emitted() {
        let params = encode(&SearchOptions {
            query: Required("alien".to_string()),
            include_adult: Some(true),
            page: None,
        })
        .unwrap();

        assert_eq!(params.get("include_adult"), Some("true"));
    }

    #[test]
    fn test_list_join_policies() {
        let params = encode(&FilterOptions {
            with_genres: vec!["a".to_string(), "b".to_string()],
            with_keywords: Piped(vec!["a".to_string(), "b".to_string()]),
            ..FilterOptions::default()
        })
        .unwrap();

        assert_eq!(params.get("with_genres"), Some("a,b"));
        assert_eq!(params.get("with_keywords"), Some("a|b"));
    }

    #[test]
    fn test_integer_lists_and_empty_lists() {
        #[derive(Serialize)]
        struct Ids {
            with_cast: Piped<Vec<u64>>,
            with_crew: Piped<Vec<u64>>,
            with_companies: Required<Vec<u64>>,
        }

        let params = encode(&Ids {
            with_cast: Piped(vec![287, 819]),
            with_crew: Piped(Vec::new()),
            with_companies: Required(Vec::new()),
        })
        .unwrap();

        assert_eq!(params.get("with_cast"), Some("287|819"));
        assert!(!params.contains_key("with_crew"));
        assert_eq!(params.get("with_companies"), Some(""));
    }

    #[test]
    fn test_skipped_field_never_leaks() {
        let params = encode(&FilterOptions {
            for_guest: true,
            ..FilterOptions::default()
        })
        .unwrap();

        assert!(params.is_empty());
        assert!(!params.contains_key("for_guest"));
    }

    #[test]
    fn test_renamed_keys_and_floats() {
        let params = encode(&FilterOptions {
            vote_average_gte: Some(7.5),
            ..FilterOptions::default()
        })
        .unwrap();
        assert_eq!(params.get("vote_average.gte"), Some("7.5"));

        let params = encode(&FilterOptions {
            vote_average_gte: Some(0.1),
            ..FilterOptions::default()
        })
        .unwrap();
        assert_eq!(params.get("vote_average.gte"), Some("0.1"));
    }

    #[test]
    fn test_negative_integers_keep_sign() {
        #[derive(Serialize)]
        struct Offset {
            offset: Option<i32>,
        }

        let params = encode(&Offset { offset: Some(-3) }).unwrap();
        assert_eq!(params.get("offset"), Some("-3"));
    }

    #[test]
    fn test_unit_variants_render_their_wire_name() {
        let params = encode(&SortOptions {
            sort_by: Some(SortBy::PopularityDesc),
        })
        .unwrap();
        assert_eq!(params.get("sort_by"), Some("popularity.desc"));
    }

    #[test]
    fn test_unsupported_shapes_are_skipped() {
        let mut lookup = HashMap::new();
        lookup.insert("a".to_string(), "b".to_string());

        let params = encode(&MixedOptions {
            language: Some("en".to_string()),
            nested: Nested { id: 1 },
            lookup,
            pairs: vec![(1, 2)],
            page: Some(3),
        })
        .unwrap();

        assert_eq!(
            params.into_pairs(),
            vec![("language", "en".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn test_non_record_values_are_rejected() {
        let err = encode(&42u32).unwrap_err();
        assert!(matches!(err, Error::EncodingError(msg) if msg.contains("u32")));

        assert!(matches!(encode("query"), Err(Error::EncodingError(_))));
        assert!(matches!(encode(&vec![1, 2]), Err(Error::EncodingError(_))));
        assert!(matches!(
            encode(&Some(SortBy::PopularityDesc)),
            Err(Error::EncodingError(_))
        ));
    }

    #[test]
    fn test_field_serialize_errors_are_reported() {
        let err = encode(&FailingOptions { value: Failing }).unwrap_err();
        assert_eq!(err, Error::EncodingError("boom".to_string()));
    }

    #[test]
    fn test_round_trip_through_query_string() {
        let params = encode(&ListOptions {
            language: Some("en-US".to_string()),
            page: Some(2),
            region: None,
        })
        .unwrap();

        let query = params.to_query_string();
        assert_eq!(query, "language=en-US&page=2");

        let reparsed: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            reparsed,
            vec![
                ("language".to_string(), "en-US".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }
}
