//! Bean introspection capability.
//!
//! Rust has no runtime reflection, so a bean type describes itself: it
//! implements [`Describe`] and returns a [`TypeDescriptor`] listing its
//! accessor members by name (`getName`, `isActive`, `setName`) and declared
//! [`TypeTag`]. The property model in `beanmap-registry` turns those members
//! into properties; nothing here interprets accessor names.
//!
//! # Example
//!
//! ```
//! use beanmap_core::{ClassBuilder, Describe, TypeDescriptor};
//!
//! #[derive(Debug, Default)]
//! struct Point {
//!     x: i32,
//! }
//!
//! impl Describe for Point {
//!     fn type_name() -> &'static str {
//!         "Point"
//!     }
//!
//!     fn describe() -> TypeDescriptor {
//!         ClassBuilder::<Point>::new()
//!             .constructor(Point::default)
//!             .reader("getX", |p: &Point| p.x)
//!             .writer("setX", |p: &mut Point, x: i32| p.x = x)
//!             .build()
//!     }
//! }
//!
//! let descriptor = Point::describe();
//! assert_eq!(descriptor.members.len(), 2);
//! assert!(descriptor.is_constructible());
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::{AccessError, FromValue, IntoValue, ObjectRef, Reflect, TypeHash, TypeTag, Value};

/// Type-erased reader call.
pub type ReadFn = Arc<dyn Fn(&dyn Bean) -> Result<Value, AccessError> + Send + Sync>;

/// Type-erased writer call.
pub type WriteFn = Arc<dyn Fn(&mut dyn Bean, Value) -> Result<(), AccessError> + Send + Sync>;

/// Zero-argument construction path.
pub type Factory = Arc<dyn Fn() -> Box<dyn Bean> + Send + Sync>;

/// Static introspection for a bean type.
pub trait Describe: Any + Send + Sync + fmt::Debug + Sized {
    /// Name of the type, used for identity and error messages.
    fn type_name() -> &'static str;

    /// Identity hash of the Rust type; independent of [`Describe::type_name`].
    fn type_hash() -> TypeHash {
        TypeHash::of::<Self>()
    }

    /// Members and factory of this type.
    fn describe() -> TypeDescriptor;
}

/// Object-safe view of a bean instance.
///
/// Implemented for every [`Describe`] type.
pub trait Bean: Any + Send + Sync + fmt::Debug {
    /// Runtime type of this instance.
    fn object_ref(&self) -> ObjectRef;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Describe> Bean for T {
    fn object_ref(&self) -> ObjectRef {
        ObjectRef::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Bean {
    pub fn type_name(&self) -> &'static str {
        self.object_ref().name
    }

    pub fn type_hash(&self) -> TypeHash {
        self.object_ref().type_hash
    }

    pub fn is<T: Describe>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Describe>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take ownership of the concrete bean, or `None` if it is another type.
    pub fn downcast<T: Describe>(self: Box<Self>) -> Option<T> {
        self.into_any().downcast::<T>().ok().map(|bean| *bean)
    }
}

/// A reader member: returns a value of the declared type.
#[derive(Clone)]
pub struct Reader {
    pub returns: TypeTag,
    call: ReadFn,
}

impl Reader {
    pub fn new(returns: TypeTag, call: ReadFn) -> Self {
        Self { returns, call }
    }

    pub fn read(&self, bean: &dyn Bean) -> Result<Value, AccessError> {
        (self.call)(bean)
    }
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader").field("returns", &self.returns).finish()
    }
}

/// A writer member: accepts a value of the declared type.
#[derive(Clone)]
pub struct Writer {
    pub param: TypeTag,
    call: WriteFn,
}

impl Writer {
    pub fn new(param: TypeTag, call: WriteFn) -> Self {
        Self { param, call }
    }

    pub fn write(&self, bean: &mut dyn Bean, value: Value) -> Result<(), AccessError> {
        (self.call)(bean, value)
    }
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer").field("param", &self.param).finish()
    }
}

#[derive(Debug, Clone)]
pub enum MemberKind {
    Reader(Reader),
    Writer(Writer),
}

/// A named accessor member, as the type declares it.
#[derive(Debug, Clone)]
pub struct Member {
    /// Accessor name, e.g. `getName` or `setName`.
    pub name: String,
    pub kind: MemberKind,
}

/// Everything introspection reports about one bean type.
#[derive(Clone)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub type_hash: TypeHash,
    pub factory: Option<Factory>,
    pub members: Vec<Member>,
}

impl TypeDescriptor {
    /// Create an empty descriptor for a named type.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            type_hash: TypeHash::from_name(name),
            factory: None,
            members: Vec::new(),
        }
    }

    pub fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Construct a default instance, if the type has a factory.
    pub fn construct(&self) -> Option<Box<dyn Bean>> {
        self.factory.as_ref().map(|factory| factory())
    }

    pub fn readers(&self) -> impl Iterator<Item = (&str, &Reader)> {
        self.members.iter().filter_map(|m| match &m.kind {
            MemberKind::Reader(r) => Some((m.name.as_str(), r)),
            MemberKind::Writer(_) => None,
        })
    }

    pub fn writers(&self) -> impl Iterator<Item = (&str, &Writer)> {
        self.members.iter().filter_map(|m| match &m.kind {
            MemberKind::Writer(w) => Some((m.name.as_str(), w)),
            MemberKind::Reader(_) => None,
        })
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("type_hash", &self.type_hash)
            .field("constructible", &self.factory.is_some())
            .field("members", &self.members)
            .finish()
    }
}

/// Fluent builder for a bean's [`TypeDescriptor`].
///
/// Accessor types are inferred from the closure signatures through
/// [`Reflect`]; values cross the type-erased boundary through
/// [`IntoValue`] and [`FromValue`].
pub struct ClassBuilder<T: Describe> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Describe> ClassBuilder<T> {
    pub fn new() -> Self {
        let mut descriptor = TypeDescriptor::new(T::type_name());
        descriptor.type_hash = T::type_hash();
        Self {
            descriptor,
            _marker: PhantomData,
        }
    }

    /// Register the zero-argument construction path.
    pub fn constructor<F>(mut self, f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.descriptor.factory = Some(Arc::new(move || Box::new(f()) as Box<dyn Bean>));
        self
    }

    /// Register an infallible reader.
    pub fn reader<R, F>(self, name: &str, f: F) -> Self
    where
        R: Reflect + IntoValue,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.try_reader(name, move |bean: &T| Ok(f(bean)))
    }

    /// Register a reader that may fail.
    pub fn try_reader<R, F>(mut self, name: &str, f: F) -> Self
    where
        R: Reflect + IntoValue,
        F: Fn(&T) -> Result<R, AccessError> + Send + Sync + 'static,
    {
        let call: ReadFn = Arc::new(move |bean: &dyn Bean| {
            let receiver = bean
                .as_any()
                .downcast_ref::<T>()
                .ok_or(AccessError::Receiver {
                    expected: T::type_name(),
                })?;
            f(receiver).map(IntoValue::into_value)
        });
        self.push(name, MemberKind::Reader(Reader::new(R::type_tag(), call)));
        self
    }

    /// Register an infallible writer.
    pub fn writer<A, F>(self, name: &str, f: F) -> Self
    where
        A: Reflect + FromValue,
        F: Fn(&mut T, A) + Send + Sync + 'static,
    {
        self.try_writer(name, move |bean: &mut T, arg: A| {
            f(bean, arg);
            Ok(())
        })
    }

    /// Register a writer that may fail.
    pub fn try_writer<A, F>(mut self, name: &str, f: F) -> Self
    where
        A: Reflect + FromValue,
        F: Fn(&mut T, A) -> Result<(), AccessError> + Send + Sync + 'static,
    {
        let call: WriteFn = Arc::new(move |bean: &mut dyn Bean, value: Value| {
            let receiver = bean
                .as_any_mut()
                .downcast_mut::<T>()
                .ok_or(AccessError::Receiver {
                    expected: T::type_name(),
                })?;
            let arg = A::from_value(value)?;
            f(receiver, arg)
        });
        self.push(name, MemberKind::Writer(Writer::new(A::type_tag(), call)));
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }

    fn push(&mut self, name: &str, kind: MemberKind) {
        self.descriptor.members.push(Member {
            name: name.to_string(),
            kind,
        });
    }
}

impl<T: Describe> Default for ClassBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        count: i64,
        label: Option<String>,
    }

    impl Describe for Counter {
        fn type_name() -> &'static str {
            "Counter"
        }

        fn describe() -> TypeDescriptor {
            ClassBuilder::<Counter>::new()
                .constructor(Counter::default)
                .reader("getCount", |c: &Counter| c.count)
                .writer("setCount", |c: &mut Counter, v: i64| c.count = v)
                .reader("getLabel", |c: &Counter| c.label.clone())
                .try_writer("setLabel", |c: &mut Counter, v: Option<String>| {
                    if v.as_deref() == Some("") {
                        return Err(AccessError::failed("empty label"));
                    }
                    c.label = v;
                    Ok(())
                })
                .build()
        }
    }

    #[derive(Debug, Default)]
    struct Other;

    impl Describe for Other {
        fn type_name() -> &'static str {
            "Other"
        }

        fn describe() -> TypeDescriptor {
            ClassBuilder::<Other>::new().build()
        }
    }

    #[test]
    fn members_carry_inferred_tags() {
        let descriptor = Counter::describe();
        let readers: Vec<(&str, TypeTag)> = descriptor
            .readers()
            .map(|(name, r)| (name, r.returns.clone()))
            .collect();
        assert_eq!(
            readers,
            vec![
                ("getCount", TypeTag::Primitive(PrimitiveKind::Int64)),
                ("getLabel", TypeTag::String),
            ]
        );
        assert_eq!(descriptor.writers().count(), 2);
        assert_eq!(descriptor.type_hash, TypeHash::of::<Counter>());
    }

    #[test]
    fn construct_read_and_write() {
        let descriptor = Counter::describe();
        let mut bean = descriptor.construct().unwrap();
        let (_, setter) = descriptor.writers().next().unwrap();
        setter.write(bean.as_mut(), Value::Int(5)).unwrap();

        let (_, getter) = descriptor.readers().next().unwrap();
        assert_eq!(getter.read(bean.as_ref()).unwrap(), Value::Int(5));
        assert_eq!(bean.type_name(), "Counter");
        assert_eq!(bean.downcast::<Counter>().unwrap().count, 5);
    }

    #[test]
    fn writer_failures_surface() {
        let descriptor = Counter::describe();
        let mut bean = descriptor.construct().unwrap();
        let (_, label) = descriptor.writers().nth(1).unwrap();
        assert_eq!(
            label.write(bean.as_mut(), Value::String(String::new())),
            Err(AccessError::Failed("empty label".into()))
        );
        assert!(label.write(bean.as_mut(), Value::Int(1)).is_err());
    }

    #[test]
    fn wrong_receiver_is_rejected() {
        let descriptor = Counter::describe();
        let other: Box<dyn Bean> = Box::new(Other);
        let (_, getter) = descriptor.readers().next().unwrap();
        assert_eq!(
            getter.read(other.as_ref()),
            Err(AccessError::Receiver {
                expected: "Counter",
            })
        );
        assert!(other.downcast::<Counter>().is_none());
    }

    #[test]
    fn no_factory_means_unconstructible() {
        let descriptor = Other::describe();
        assert!(!descriptor.is_constructible());
        assert!(descriptor.construct().is_none());
    }
}
