//! Property descriptors and accessor naming.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use beanmap_core::{AccessError, Bean, Factory, Reader, TypeHash, TypeTag, Value, Writer};

bitflags! {
    /// Which accessors a property exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyAccess: u8 {
        /// Has a reader; the property is projected.
        const READ = 1 << 0;
        /// Has a writer; the property is set during construction.
        const WRITE = 1 << 1;
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

/// Role an accessor name plays in the property model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorRole {
    /// `getX`
    Getter,
    /// `isX`; only a reader when it returns a primitive bool
    IsGetter,
    /// `setX`
    Setter,
}

/// Split an accessor name into its role and property name.
///
/// The property name is the remainder after the prefix with its first
/// character lower-cased: `getAString` → `aString`, `isABool` → `aBool`.
/// Returns `None` for names without a recognised prefix or with nothing after it.
pub fn parse_accessor(name: &str) -> Option<(AccessorRole, String)> {
    let (role, rest) = if let Some(rest) = name.strip_prefix("get") {
        (AccessorRole::Getter, rest)
    } else if let Some(rest) = name.strip_prefix("set") {
        (AccessorRole::Setter, rest)
    } else if let Some(rest) = name.strip_prefix("is") {
        (AccessorRole::IsGetter, rest)
    } else {
        return None;
    };
    if rest.is_empty() {
        return None;
    }
    Some((role, decapitalize(rest)))
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One discovered property of a bean type.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub access: PropertyAccess,
    reader: Option<Reader>,
    writer: Option<Writer>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, reader: Option<Reader>, writer: Option<Writer>) -> Self {
        let mut access = PropertyAccess::empty();
        access.set(PropertyAccess::READ, reader.is_some());
        access.set(PropertyAccess::WRITE, writer.is_some());
        Self {
            name: name.into(),
            access,
            reader,
            writer,
        }
    }

    pub fn can_read(&self) -> bool {
        self.access.contains(PropertyAccess::READ)
    }

    pub fn can_write(&self) -> bool {
        self.access.contains(PropertyAccess::WRITE)
    }

    /// Declared type of the reader.
    pub fn read_type(&self) -> Option<&TypeTag> {
        self.reader.as_ref().map(|r| &r.returns)
    }

    /// Declared type of the writer.
    pub fn write_type(&self) -> Option<&TypeTag> {
        self.writer.as_ref().map(|w| &w.param)
    }

    /// Read the property from a bean.
    ///
    /// A write-only property reads as a failure rather than as null.
    pub fn read(&self, bean: &dyn Bean) -> Result<Value, AccessError> {
        match &self.reader {
            Some(reader) => reader.read(bean),
            None => Err(AccessError::failed(format!(
                "property '{}' is write-only",
                self.name
            ))),
        }
    }

    pub fn write(&self, bean: &mut dyn Bean, value: Value) -> Result<(), AccessError> {
        match &self.writer {
            Some(writer) => writer.write(bean, value),
            None => Err(AccessError::failed(format!(
                "property '{}' is read-only",
                self.name
            ))),
        }
    }
}

/// The complete, immutable property set of one bean type.
#[derive(Clone)]
pub struct TypeProperties {
    pub name: &'static str,
    pub type_hash: TypeHash,
    factory: Option<Factory>,
    properties: Vec<PropertyDescriptor>,
    index: FxHashMap<String, usize>,
}

impl TypeProperties {
    pub fn new(
        name: &'static str,
        type_hash: TypeHash,
        factory: Option<Factory>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        let index = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self {
            name,
            type_hash,
            factory,
            properties,
            index,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.index.get(name).map(|&i| &self.properties[i])
    }

    /// All properties in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }

    pub fn readable(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter().filter(|p| p.can_read())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Construct a default instance through the type's factory.
    pub fn construct(&self) -> Option<Box<dyn Bean>> {
        self.factory.as_ref().map(|factory| factory())
    }
}

impl std::fmt::Debug for TypeProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeProperties")
            .field("name", &self.name)
            .field("type_hash", &self.type_hash)
            .field("constructible", &self.factory.is_some())
            .field("properties", &self.properties)
            .finish()
    }
}
