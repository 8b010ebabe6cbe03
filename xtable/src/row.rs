use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// A table column. A width of 0 means "size to content" and is resolved
/// once, when the column is handed to a table or produced by an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub width: usize,
}

impl Column {
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }

    pub fn auto(title: impl Into<String>) -> Self {
        Self::new(title, 0)
    }

    pub fn is_auto(&self) -> bool {
        self.width == 0
    }
}

/// Records that can be located in a table by a stable 64-bit digest.
pub trait RowIdentity {
    fn identity_hash(&self) -> u64;
}

/// Row metadata: any identifiable record, retrievable by its concrete type.
pub trait Metadata: RowIdentity + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T> Metadata for T
where
    T: RowIdentity + Any + Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One table row: the display strings, plus an optional record the row was
/// built from.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub data: Vec<String>,
    metadata: Option<Arc<dyn Metadata>>,
}

impl Row {
    pub fn new<S: Into<String>>(data: impl IntoIterator<Item = S>) -> Self {
        Self {
            data: data.into_iter().map(Into::into).collect(),
            metadata: None,
        }
    }

    pub fn with_metadata<S, M>(data: impl IntoIterator<Item = S>, metadata: M) -> Self
    where
        S: Into<String>,
        M: Metadata + 'static,
    {
        Self {
            data: data.into_iter().map(Into::into).collect(),
            metadata: Some(Arc::new(metadata)),
        }
    }

    /// Cell `column`, or `""` for a short row.
    pub fn cell(&self, column: usize) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// The attached record, if there is one and it is a `T`.
    pub fn metadata<T: Any>(&self) -> Option<&T> {
        self.metadata
            .as_deref()
            .and_then(|m| m.as_any().downcast_ref::<T>())
    }

    pub fn identity_hash(&self) -> Option<u64> {
        self.metadata.as_ref().map(|m| m.identity_hash())
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.identity_hash() == other.identity_hash()
    }
}
