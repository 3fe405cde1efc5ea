use crate::declarations::TopLevelModel;
use crate::module::{ModuleModel, SourceSetModel};
use crate::stdlib::ReservedNames;
use kbind_common::{LIB_ROOT, NameEntity};
use tracing::debug;

fn is_reserved(name: &NameEntity, registry: &dyn ReservedNames) -> bool {
    if name.left_most() == LIB_ROOT {
        registry.contains(&NameEntity::identifier(name.right_most()))
    } else {
        registry.contains(name)
    }
}

/// Drop reserved top-level declarations from `module` and its submodules.
pub fn filter_module_stdlib_entities(
    module: ModuleModel,
    registry: &dyn ReservedNames,
) -> ModuleModel {
    let declarations = module
        .declarations
        .into_iter()
        .filter(|declaration: &TopLevelModel| {
            let reserved = is_reserved(declaration.name(), registry);
            if reserved {
                debug!(
                    module = %module.name,
                    "dropping {} {} shadowed by stdlib",
                    declaration.kind_name(),
                    declaration.name()
                );
            }
            !reserved
        })
        .collect();

    ModuleModel {
        declarations,
        submodules: module
            .submodules
            .into_iter()
            .map(|submodule| filter_module_stdlib_entities(submodule, registry))
            .collect(),
        ..module
    }
}

/// Drop top-level declarations that collide with reserved standard library
/// names. Members of the remaining declarations are never inspected.
pub fn filter_out_stdlib_entities(
    source_set: SourceSetModel,
    registry: &dyn ReservedNames,
) -> SourceSetModel {
    source_set.transform(|module| filter_module_stdlib_entities(module, registry))
}
