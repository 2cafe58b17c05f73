//! Property discovery from a type's accessor members.
//!
//! Members are grouped by the property name their accessor name implies,
//! then each group is resolved to at most one reader and one writer:
//!
//! - `isX` counts as a reader only when it returns a primitive bool. A boxed
//!   bool behind `isX` is not a reader, so such a property needs `getX`.
//! - When both `isX` and `getX` survive with the same type, `isX` wins.
//!   With different types the writer's parameter type picks the reader.
//! - Several writers are narrowed to the one matching the read type.
//!
//! Anything still undecided is an [`AmbiguousPropertyError`].

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use beanmap_core::{MemberKind, Reader, TypeDescriptor, TypeTag, Writer};

use crate::AmbiguousPropertyError;
use crate::property::{AccessorRole, PropertyDescriptor, TypeProperties, parse_accessor};

#[derive(Default)]
struct Candidates {
    getters: Vec<Reader>,
    is_getters: Vec<Reader>,
    setters: Vec<Writer>,
}

/// Build the property set for a described type.
pub fn discover(descriptor: &TypeDescriptor) -> Result<TypeProperties, AmbiguousPropertyError> {
    let owner = descriptor.name;
    let mut groups: IndexMap<String, Candidates> = IndexMap::new();

    for member in &descriptor.members {
        let Some((role, property)) = parse_accessor(&member.name) else {
            trace!(owner = owner, member = %member.name, "not an accessor");
            continue;
        };
        match (role, &member.kind) {
            (AccessorRole::Getter, MemberKind::Reader(reader)) => {
                groups.entry(property).or_default().getters.push(reader.clone());
            }
            (AccessorRole::IsGetter, MemberKind::Reader(reader)) => {
                if reader.returns.is_primitive_bool() {
                    groups.entry(property).or_default().is_getters.push(reader.clone());
                } else {
                    trace!(
                        owner = owner,
                        member = %member.name,
                        returns = %reader.returns,
                        "is-prefixed member without primitive bool return is not a reader"
                    );
                }
            }
            (AccessorRole::Setter, MemberKind::Writer(writer)) => {
                groups.entry(property).or_default().setters.push(writer.clone());
            }
            _ => trace!(
                owner = owner,
                member = %member.name,
                "accessor name does not match member kind"
            ),
        }
    }

    let mut properties = Vec::with_capacity(groups.len());
    for (name, candidates) in groups {
        let fail = |first: &TypeTag, second: &TypeTag| AmbiguousPropertyError {
            type_name: owner,
            property: name.clone(),
            first: first.clone(),
            second: second.clone(),
        };

        let getter = single_reader(candidates.getters, &fail)?;
        let is_getter = single_reader(candidates.is_getters, &fail)?;
        let setters = dedup_writers(candidates.setters);

        let reader = match (is_getter, getter) {
            (Some(is), Some(get)) => {
                if is.returns == get.returns {
                    Some(is)
                } else {
                    let wants_is = setters.iter().any(|w| w.param == is.returns);
                    let wants_get = setters.iter().any(|w| w.param == get.returns);
                    match (wants_is, wants_get) {
                        (true, false) => Some(is),
                        (false, true) => Some(get),
                        _ => return Err(fail(&is.returns, &get.returns)),
                    }
                }
            }
            (is, get) => is.or(get),
        };

        let writer = match setters.len() {
            0 => None,
            1 => setters.into_iter().next(),
            _ => {
                let chosen = reader
                    .as_ref()
                    .and_then(|r| setters.iter().find(|w| w.param == r.returns).cloned());
                match chosen {
                    Some(writer) => Some(writer),
                    None => return Err(fail(&setters[0].param, &setters[1].param)),
                }
            }
        };

        if let (Some(r), Some(w)) = (&reader, &writer) {
            if r.returns != w.param {
                warn!(
                    owner = owner,
                    property = %name,
                    read_type = %r.returns,
                    write_type = %w.param,
                    "reader and writer declare different types"
                );
            }
        }

        properties.push(PropertyDescriptor::new(name, reader, writer));
    }

    debug!(
        owner = owner,
        properties = properties.len(),
        constructible = descriptor.is_constructible(),
        "discovered properties"
    );

    Ok(TypeProperties::new(
        descriptor.name,
        descriptor.type_hash,
        descriptor.factory.clone(),
        properties,
    ))
}

/// Collapse identical readers; more than one distinct type is ambiguous.
fn single_reader<F>(
    readers: Vec<Reader>,
    fail: &F,
) -> Result<Option<Reader>, AmbiguousPropertyError>
where
    F: Fn(&TypeTag, &TypeTag) -> AmbiguousPropertyError,
{
    let mut chosen: Option<Reader> = None;
    for reader in readers {
        if let Some(existing) = &chosen {
            if existing.returns != reader.returns {
                return Err(fail(&existing.returns, &reader.returns));
            }
            continue;
        }
        chosen = Some(reader);
    }
    Ok(chosen)
}

fn dedup_writers(writers: Vec<Writer>) -> Vec<Writer> {
    let mut unique: Vec<Writer> = Vec::with_capacity(writers.len());
    for writer in writers {
        if !unique.iter().any(|w| w.param == writer.param) {
            unique.push(writer);
        }
    }
    unique
}
