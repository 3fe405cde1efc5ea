//! Type expression translation.
//!
//! Raw unions, tuples and intersections have no counterpart on the target
//! side. They become `dynamic` references and the source structure is kept
//! only as a descriptor string for the emitter to print next to the type.

use crate::ModelLowering;
use kbind_ast::{
    FunctionType, GeneratedInterfaceReference, NamedType, RawParameter, RawType,
    RawTypeParameter, TypeMeta,
};
use kbind_common::{ConcernKind, NameEntity, Recovered};
use kbind_model::{
    FunctionTypeModel, ParameterModel, TypeModel, TypeParameterModel, TypeValueModel,
};
use tracing::trace;

/// Descriptor marking a nullable reference that defaults to `null`.
pub const NULL_DEFAULT: &str = "= null";

const STRING: &str = "String";
const THIS: &str = "this";

/// Where a type expression appears. Decides whether a nullable reference
/// gets the [`NULL_DEFAULT`] descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationContext {
    /// Any position other than inside a function type. Null defaults are suppressed.
    #[default]
    Generic,
    /// Parameter or return type of a function type.
    FunctionTypeParameter,
}

impl TranslationContext {
    fn suppresses_null_default(self) -> bool {
        match self {
            TranslationContext::Generic => true,
            TranslationContext::FunctionTypeParameter => false,
        }
    }
}

fn string_literal_token(ty: &RawType) -> Option<&str> {
    match ty.meta() {
        Some(TypeMeta::StringLiteral(token)) => Some(token),
        _ => None,
    }
}

impl ModelLowering<'_> {
    /// Translate a raw type expression.
    pub fn lower_type(&mut self, ty: RawType, context: TranslationContext) -> TypeModel {
        match ty {
            RawType::Named(named) => self.lower_named_type(named, context).into(),
            RawType::Union(union) => {
                let description = self.join_union_members(union.members);
                TypeValueModel::dynamic(Some(description)).into()
            }
            RawType::Tuple(tuple) => {
                let description = self.join_translated(tuple.elements, ", ");
                TypeValueModel::dynamic(Some(format!("JsTuple<{description}>"))).into()
            }
            RawType::Function(function) => self.lower_function_type(function, context).into(),
            RawType::GeneratedInterfaceReference(reference) => {
                self.lower_generated_reference(reference).into()
            }
            unknown @ (RawType::Intersection(_) | RawType::Literal(_)) => {
                let fallback: TypeModel = TypeValueModel::dynamic(None).into();
                Recovered::concern(
                    ConcernKind::UnknownTypeExpression,
                    format!("unable to translate type expression {}", unknown.kind_name()),
                    fallback,
                )
                .resolve(&mut *self.diagnostics)
            }
        }
    }

    fn lower_named_type(&mut self, named: NamedType, context: TranslationContext) -> TypeValueModel {
        let NamedType {
            name,
            params,
            nullable,
            meta,
        } = named;

        match meta {
            Some(TypeMeta::StringLiteral(token)) if name.is_identifier(STRING) => {
                TypeValueModel::new(name, Vec::new(), Some(token), false)
            }
            meta => {
                let params: Vec<TypeModel> = params
                    .into_iter()
                    .map(|param| self.lower_type(param, TranslationContext::Generic))
                    .collect();
                let description =
                    self.describe(meta, nullable, context.suppresses_null_default());
                TypeValueModel::new(name, params, description, nullable)
            }
        }
    }

    fn lower_function_type(
        &mut self,
        function: FunctionType,
        context: TranslationContext,
    ) -> FunctionTypeModel {
        let FunctionType {
            parameters,
            return_type,
            nullable,
            meta,
        } = function;

        let parameters: Vec<ParameterModel> = parameters
            .into_iter()
            .map(|param| self.lower_parameter(param, TranslationContext::FunctionTypeParameter))
            .collect();
        let return_type = self.lower_type(*return_type, TranslationContext::FunctionTypeParameter);

        FunctionTypeModel {
            parameters,
            return_type: Box::new(return_type),
            description: self.describe(meta, nullable, context.suppresses_null_default()),
            nullable,
        }
    }

    fn lower_generated_reference(&mut self, reference: GeneratedInterfaceReference) -> TypeValueModel {
        trace!(name = %reference.name, "lowering generated interface reference");
        let params: Vec<TypeModel> = reference
            .type_parameters
            .into_iter()
            .map(|param| TypeValueModel::simple(param.name).into())
            .collect();
        let description = self.describe(reference.meta, reference.nullable, true);

        TypeValueModel::new(
            NameEntity::identifier(reference.name),
            params,
            description,
            reference.nullable,
        )
    }

    /// Descriptor for a reference carrying `meta`.
    fn describe(
        &mut self,
        meta: Option<TypeMeta>,
        nullable: bool,
        suppress_null_default: bool,
    ) -> Option<String> {
        match meta {
            Some(TypeMeta::ThisType) => Some(THIS.to_string()),
            Some(TypeMeta::Intersection(members)) => Some(self.join_translated(members, " & ")),
            Some(TypeMeta::Mute) => None,
            _ if nullable && !suppress_null_default => Some(NULL_DEFAULT.to_string()),
            _ => None,
        }
    }

    /// Union members render as their translated text, except string literal
    /// members, which keep their token.
    fn join_union_members(&mut self, members: Vec<RawType>) -> String {
        members
            .into_iter()
            .map(|member| match string_literal_token(&member).map(str::to_owned) {
                Some(token) => token,
                None => self
                    .lower_type(member, TranslationContext::Generic)
                    .to_string(),
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn join_translated(&mut self, members: Vec<RawType>, separator: &str) -> String {
        members
            .into_iter()
            .map(|member| {
                self.lower_type(member, TranslationContext::Generic)
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn lower_parameter(
        &mut self,
        parameter: RawParameter,
        context: TranslationContext,
    ) -> ParameterModel {
        let RawParameter {
            name,
            ty,
            initializer,
            vararg,
            optional,
        } = parameter;

        ParameterModel {
            name,
            ty: self.lower_type(ty, context),
            initializer: initializer.map(|initializer| {
                TypeValueModel::new(
                    initializer.value,
                    Vec::new(),
                    initializer.meta,
                    initializer.nullable,
                )
            }),
            vararg,
            optional,
        }
    }

    pub fn lower_type_parameters(
        &mut self,
        type_parameters: Vec<RawTypeParameter>,
    ) -> Vec<TypeParameterModel> {
        type_parameters
            .into_iter()
            .map(|param| TypeParameterModel {
                name: param.name,
                constraints: param
                    .constraints
                    .into_iter()
                    .map(|constraint| self.lower_type(constraint, TranslationContext::Generic))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/type_translator_tests.rs"]
mod type_translator_tests;
