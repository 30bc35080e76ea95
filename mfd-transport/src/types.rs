//! Request and response types of the directory protocol

/// Reply status the device sends for an accepted request
pub const STATUS_OK: &str = "OK";

/// A single named property of a directory object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of properties, as carried by one result row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList(Vec<Property>);

impl PropertyList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push(Property::new(name, value));
    }

    /// Get the value of the first property with the given name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Iterate over `(name, value)` pairs in wire order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|p| (p.name.as_str(), p.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for PropertyList
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| Property::new(n, v)).collect())
    }
}

/// Parameters of an object search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Properties to return for each matching object
    pub select: Vec<String>,
    /// Object class to search, e.g. `entry`
    pub from_class: String,
    /// Restrict the search to children of this object; empty for all
    pub parent_object_id: String,
    /// Index of the first row to return
    pub offset: u32,
    /// Maximum number of rows to return
    pub count: u32,
}

impl SearchRequest {
    pub fn new(from_class: impl Into<String>) -> Self {
        Self {
            select: Vec::new(),
            from_class: from_class.into(),
            parent_object_id: String::new(),
            offset: 0,
            count: 50,
        }
    }

    pub fn select<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = props.into_iter().map(Into::into).collect();
        self
    }

    pub fn page(mut self, offset: u32, count: u32) -> Self {
        self.offset = offset;
        self.count = count;
        self
    }
}

/// Reply to a session start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSessionReply {
    /// `"OK"` when the session was granted
    pub status: String,
    /// Session id to pass to later calls; meaningful only when granted
    pub session_id: String,
}

impl StartSessionReply {
    pub fn is_granted(&self) -> bool {
        self.status == STATUS_OK
    }
}
