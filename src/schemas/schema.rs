use crate::error::Result;
use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    any::{type_name, TypeId},
    sync::Arc,
};

/// Cached JSON schema handle associated with a document type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema<T: 'static>(schema_name: &'static str, root: RootSchema) -> Result<Self> {
        let schema_json = serde_json::to_value(root)?;

        Ok(Self {
            schema_name,
            type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
            schema_json: Arc::new(schema_json),
        })
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    pub fn schema_json_arc(&self) -> Arc<Value> {
        Arc::clone(&self.schema_json)
    }

    /// Pretty-printed schema, as written by the CLI
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.schema_json())?)
    }
}

/// A JSON document the planner reads or writes, with its schema.
pub trait PlannerDocument: DeserializeOwned + Send + Sync + 'static {
    /// Document name used in error messages and on the command line
    const NAME: &'static str;

    fn schema() -> Result<&'static SchemaHandle>;
}

/// Implement [`PlannerDocument`] with a lazily generated, process-wide schema.
macro_rules! impl_planner_document {
    ($ty:ty, $name:literal) => {
        impl $crate::schemas::PlannerDocument for $ty {
            const NAME: &'static str = $name;

            fn schema() -> $crate::error::Result<&'static $crate::schemas::SchemaHandle> {
                static SCHEMA: ::std::sync::OnceLock<$crate::schemas::SchemaHandle> =
                    ::std::sync::OnceLock::new();

                if let Some(handle) = SCHEMA.get() {
                    return Ok(handle);
                }
                let handle = $crate::schemas::SchemaHandle::from_root_schema::<$ty>(
                    $name,
                    ::schemars::schema_for!($ty),
                )?;
                Ok(SCHEMA.get_or_init(|| handle))
            }
        }
    };
}

pub(crate) use impl_planner_document;
