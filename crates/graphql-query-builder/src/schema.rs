use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a schema description.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The introspection document is not valid JSON or does not match the
    /// introspection shape.
    #[error("failed to parse introspection document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but is not an introspection result.
    #[error("invalid introspection document: {0}")]
    Invalid(String),
}

/// The `Schema` type is the external type-system description documents are
/// bound to.
///
/// It is loaded from the JSON result of the standard introspection query and
/// answers two questions for the builder: does a type with a given name
/// exist, and may that type be the target of a fragment. Field signatures are
/// deliberately not modelled; the builder never validates selected field
/// names.
///
/// ### Example
/// ```rust
/// use graphql_query_builder::{Schema, TypeKind};
///
/// let schema = Schema::from_introspection_json(
///     r#"{ "__schema": { "queryType": { "name": "QueryRoot" }, "types": [
///         { "kind": "OBJECT", "name": "QueryRoot" },
///         { "kind": "OBJECT", "name": "Image" },
///         { "kind": "SCALAR", "name": "String" }
///     ] } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(schema.type_("Image").unwrap().kind(), TypeKind::Object);
/// assert!(schema.type_("Image").unwrap().is_composite());
/// assert!(!schema.type_("String").unwrap().is_composite());
/// assert!(schema.type_("Missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    query_type: Option<String>,
    mutation_type: Option<String>,
    types: IndexMap<String, TypeDescriptor>,
}

impl Schema {
    /// Load a schema from introspection JSON text.
    ///
    /// Both the raw HTTP response shape (`{"data": {"__schema": ...}}`) and a
    /// bare `{"__schema": ...}` document are accepted.
    pub fn from_introspection_json(json: &str) -> Result<Self, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_introspection_value(value)
    }

    /// Load a schema from an already-parsed introspection document.
    pub fn from_introspection_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        let schema_value = match value.get("data") {
            Some(data) => data.get("__schema"),
            None => value.get("__schema"),
        };
        let Some(schema_value) = schema_value else {
            return Err(SchemaError::Invalid(String::from(
                "document has no __schema member",
            )));
        };

        let introspection: IntrospectionSchema = serde_json::from_value(schema_value.clone())?;

        let mut types = IndexMap::new();
        for type_ in introspection.types {
            types.insert(type_.name.clone(), type_);
        }

        Ok(Self {
            query_type: introspection.query_type.map(|root| root.name),
            mutation_type: introspection.mutation_type.map(|root| root.name),
            types,
        })
    }

    /// Look up a type by name.
    pub fn type_(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// All named types, in the order the introspection result listed them.
    pub fn types(&self) -> &IndexMap<String, TypeDescriptor> {
        &self.types
    }

    /// Name of the schema's root query type, when declared.
    pub fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    /// Name of the schema's root mutation type, when declared.
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }
}

/// A named type as described by the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    kind: TypeKind,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl TypeDescriptor {
    /// Create a descriptor directly, without introspection.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
        }
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type's kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The type's description, when the schema carries one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether a fragment may target this type.
    pub fn is_composite(&self) -> bool {
        self.kind.is_composite()
    }
}

/// The kind of a schema type, as reported by introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// A scalar leaf type
    Scalar,
    /// An object type
    Object,
    /// An interface type
    Interface,
    /// A union type
    Union,
    /// An enum type
    Enum,
    /// An input object type
    InputObject,
    /// A list wrapper type
    List,
    /// A non-null wrapper type
    NonNull,
}

impl TypeKind {
    /// Whether the kind is a selectable composite: object, interface or
    /// union. Only composite types may host a fragment.
    pub fn is_composite(self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface | TypeKind::Union)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    #[serde(default)]
    query_type: Option<RootTypeRef>,
    #[serde(default)]
    mutation_type: Option<RootTypeRef>,
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

#[derive(Debug, Deserialize)]
struct RootTypeRef {
    name: String,
}
