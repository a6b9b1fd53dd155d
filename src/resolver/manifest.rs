//! `SymbolResolver` over the type table of a collector manifest.

use std::collections::HashMap;

use super::{Accessibility, MemberHandle, Setter, SymbolResolver, TypeDescription, TypeHandle};
use crate::declarations::{DeclarationRef, LocationHint, Manifest, MemberDecl, SetterDecl, TypeDecl};

/// Element type assumed for collections whose element type is unknown.
const UNKNOWN_ELEMENT_TYPE: &str = "object";

/// Answers symbol lookups from `Manifest::types`.
pub struct ManifestResolver<'m> {
    types: &'m [TypeDecl],
    by_name: HashMap<&'m str, usize>,
}

impl<'m> ManifestResolver<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        let by_name = manifest
            .types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.class_name.as_str(), i))
            .collect();
        Self {
            types: &manifest.types,
            by_name,
        }
    }

    fn type_decl(&self, ty: TypeHandle) -> Option<&'m TypeDecl> {
        self.types.get(ty.raw())
    }

    fn member_decl(&self, member: MemberHandle) -> Option<&'m MemberDecl> {
        self.type_decl(member.owner())
            .and_then(|t| t.members.get(member.index()))
    }
}

impl SymbolResolver for ManifestResolver<'_> {
    fn resolve_type(&self, class_name: &str) -> Option<TypeHandle> {
        let index = *self.by_name.get(class_name)?;
        self.types[index].public.then(|| TypeHandle::new(index))
    }

    fn resolve_member(&self, class_name: &str, property_name: &str) -> Option<MemberHandle> {
        let owner = *self.by_name.get(class_name)?;
        let index = self.types[owner]
            .members
            .iter()
            .position(|m| m.name == property_name)?;
        Some(MemberHandle::new(TypeHandle::new(owner), index))
    }

    fn has_default_constructor(&self, ty: TypeHandle) -> bool {
        self.type_decl(ty).is_some_and(|t| t.default_constructor)
    }

    fn setter(&self, member: MemberHandle) -> Option<Setter> {
        let accessibility = match self.member_decl(member)?.setter {
            SetterDecl::None => return None,
            SetterDecl::Init => {
                return Some(Setter {
                    accessibility: Accessibility::Public,
                    init_only: true,
                });
            }
            SetterDecl::Public => Accessibility::Public,
            SetterDecl::Internal => Accessibility::Internal,
            SetterDecl::ProtectedInternal => Accessibility::ProtectedInternal,
            SetterDecl::Protected => Accessibility::Protected,
            SetterDecl::Private => Accessibility::Private,
        };
        Some(Setter {
            accessibility,
            init_only: false,
        })
    }

    fn describe_type(&self, member: MemberHandle) -> TypeDescription {
        match self.member_decl(member) {
            Some(m) => TypeDescription {
                type_name: m.type_name.clone(),
                is_collection: m.collection,
                element_type: m.collection.then(|| {
                    m.element_type
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_ELEMENT_TYPE.to_string())
                }),
                is_value_type: m.value_type,
                is_nullable: m.nullable,
            },
            None => TypeDescription {
                type_name: UNKNOWN_ELEMENT_TYPE.to_string(),
                is_collection: false,
                element_type: None,
                is_value_type: false,
                is_nullable: true,
            },
        }
    }

    fn locate(&self, declaration: DeclarationRef<'_>) -> Option<LocationHint> {
        match declaration {
            DeclarationRef::Object(o) => {
                let index = *self.by_name.get(o.class_name.as_str())?;
                self.types[index].location.clone()
            }
            DeclarationRef::Field(f) => {
                let member = self.resolve_member(&f.class_name, &f.property_name)?;
                self.member_decl(member)?.location.clone()
            }
        }
    }
}
