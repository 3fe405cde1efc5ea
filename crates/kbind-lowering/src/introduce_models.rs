//! One raw module subtree → one module model.

use crate::ModelLowering;
use crate::type_translator::TranslationContext;
use kbind_ast::{
    QualifierKind, RawClass, RawDeclaration, RawFunction, RawInterface, RawModule, RawObject,
    RawTypeAlias, RawVariable,
};
use kbind_common::{ConcernKind, NameEntity, Recovered};
use kbind_model::{
    AnnotationModel, ClassModel, CompanionObjectModel, FunctionModel, InterfaceModel, ModuleModel,
    ObjectModel, TopLevelModel, TypeAliasModel, TypeParameterModel, VariableModel,
};
use tracing::{debug, trace};

/// File annotation for a namespace reached through a qualifier path.
pub const JS_QUALIFIER: &str = "file:JsQualifier";
/// File annotation for an external module loaded by name.
pub const JS_MODULE: &str = "file:JsModule";

enum LoweredDeclaration {
    TopLevel(TopLevelModel),
    Module(ModuleModel),
}

fn qualification_annotations(
    qualifier: Option<&NameEntity>,
    kind: QualifierKind,
) -> Vec<AnnotationModel> {
    let name = match kind {
        QualifierKind::Qualifier => Some(JS_QUALIFIER),
        QualifierKind::Module => Some(JS_MODULE),
        QualifierKind::Global => None,
    };

    match (qualifier, name) {
        (Some(qualifier), Some(name)) => vec![AnnotationModel::new(name, vec![qualifier.clone()])],
        _ => Vec::new(),
    }
}

impl ModelLowering<'_> {
    /// Build the model of `module` and, recursively, of its nested modules.
    ///
    /// Direct declarations and nested modules are separated, each keeping
    /// source order. Imports are left empty.
    pub fn introduce_models(&mut self, module: RawModule) -> ModuleModel {
        let RawModule {
            package_name,
            declarations,
            qualifier,
            qualifier_kind,
        } = module;
        debug!(package = %package_name, declarations = declarations.len(), "introducing models");

        let (declarations, submodules) = declarations
            .into_iter()
            .filter_map(|declaration| self.lower_declaration(declaration))
            .fold(
                (Vec::new(), Vec::new()),
                |(mut declarations, mut submodules), lowered| {
                    match lowered {
                        LoweredDeclaration::TopLevel(declaration) => declarations.push(declaration),
                        LoweredDeclaration::Module(module) => submodules.push(module),
                    }
                    (declarations, submodules)
                },
            );

        ModuleModel {
            annotations: qualification_annotations(qualifier.as_ref(), qualifier_kind),
            qualifier,
            short_name: NameEntity::identifier(package_name.right_most()),
            name: package_name,
            declarations,
            submodules,
            imports: Vec::new(),
        }
    }

    fn lower_declaration(&mut self, declaration: RawDeclaration) -> Option<LoweredDeclaration> {
        let lowered = match declaration {
            RawDeclaration::Module(module) => {
                return Some(LoweredDeclaration::Module(self.introduce_models(module)));
            }
            RawDeclaration::Class(class) => TopLevelModel::Class(self.lower_class(class)),
            RawDeclaration::Interface(interface) => {
                TopLevelModel::Interface(self.lower_interface(interface))
            }
            RawDeclaration::Function(function) => {
                TopLevelModel::Function(self.lower_function(function))
            }
            RawDeclaration::Variable(variable) => {
                TopLevelModel::Variable(self.lower_variable(variable))
            }
            RawDeclaration::Enum(enumeration) => TopLevelModel::Enum(enumeration),
            RawDeclaration::Object(object) => TopLevelModel::Object(self.lower_object(object)),
            RawDeclaration::TypeAlias(alias) => {
                TopLevelModel::TypeAlias(self.lower_type_alias(alias)?)
            }
            unknown @ (RawDeclaration::ImportEquals(_) | RawDeclaration::ExportAssignment(_)) => {
                return Recovered::concern(
                    ConcernKind::UnknownDeclaration,
                    format!("skipping {}", unknown.kind_name()),
                    None,
                )
                .resolve(&mut *self.diagnostics);
            }
        };

        Some(LoweredDeclaration::TopLevel(lowered))
    }

    pub fn lower_class(&mut self, class: RawClass) -> ClassModel {
        let split = self.split_members(class.members);

        ClassModel {
            name: class.name,
            members: split.instance,
            companion_object: CompanionObjectModel::with_members(split.statics),
            primary_constructor: class
                .primary_constructor
                .map(|constructor| self.lower_constructor(constructor)),
            type_parameters: self.lower_type_parameters(class.type_parameters),
            parent_entities: self.lower_heritage_list(class.parent_entities),
            annotations: class.annotations,
        }
    }

    pub fn lower_interface(&mut self, interface: RawInterface) -> InterfaceModel {
        let split = self.split_members(interface.members);

        InterfaceModel {
            name: interface.name,
            members: split.instance,
            companion_object: CompanionObjectModel::with_members(split.statics),
            type_parameters: self.lower_type_parameters(interface.type_parameters),
            parent_entities: self.lower_heritage_list(interface.parent_entities),
            annotations: interface.annotations,
        }
    }

    fn lower_function(&mut self, function: RawFunction) -> FunctionModel {
        FunctionModel {
            name: function.name,
            parameters: function
                .parameters
                .into_iter()
                .map(|param| self.lower_parameter(param, TranslationContext::Generic))
                .collect(),
            ty: self.lower_type(function.ty, TranslationContext::Generic),
            type_parameters: self.lower_type_parameters(function.type_parameters),
            annotations: function.annotations,
            export: function.export,
            inline: function.inline,
            operator: function.operator,
        }
    }

    fn lower_variable(&mut self, variable: RawVariable) -> VariableModel {
        VariableModel {
            name: variable.name,
            ty: self.lower_type(variable.ty, TranslationContext::Generic),
            type_parameters: self.lower_type_parameters(variable.type_parameters),
            annotations: variable.annotations,
            immutable: variable.immutable,
            inline: variable.inline,
            initializer: variable.initializer,
        }
    }

    /// Objects have no companion: members are translated in place.
    fn lower_object(&mut self, object: RawObject) -> ObjectModel {
        ObjectModel {
            name: object.name,
            members: object
                .members
                .into_iter()
                .map(|member| self.lower_member(member))
                .collect(),
            parent_entities: self.lower_heritage_list(object.parent_entities),
        }
    }

    fn lower_type_alias(&mut self, alias: RawTypeAlias) -> Option<TypeAliasModel> {
        if !alias.can_be_translated {
            trace!(alias = %alias.name, "dropping untranslatable type alias");
            return None;
        }

        Some(TypeAliasModel {
            name: alias.name,
            type_reference: self.lower_type(alias.type_reference, TranslationContext::Generic),
            type_parameters: alias
                .type_parameters
                .into_iter()
                .map(|name| TypeParameterModel {
                    name,
                    constraints: Vec::new(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/introduce_models_tests.rs"]
mod introduce_models_tests;
