use crate::ModelLowering;
use crate::type_translator::TranslationContext;
use kbind_ast::{HeritageSymbol, RawHeritage};
use kbind_common::{ConcernKind, NameEntity, Recovered};
use kbind_model::{HeritageModel, TypeValueModel};

impl ModelLowering<'_> {
    /// Translate a parent reference. Delegation is never decided here.
    pub fn lower_heritage(&mut self, heritage: RawHeritage) -> HeritageModel {
        let value = match heritage.name {
            HeritageSymbol::Name(name) => Recovered::Clean(name.translate()),
            HeritageSymbol::Expression(text) => Recovered::concern(
                ConcernKind::UnresolvedName,
                format!("unknown heritage symbol {text}"),
                text,
            ),
        }
        .map(|name| TypeValueModel::simple(NameEntity::identifier(name)))
        .resolve(&mut *self.diagnostics);

        HeritageModel {
            value,
            type_params: heritage
                .type_arguments
                .into_iter()
                .map(|argument| self.lower_type(argument, TranslationContext::Generic))
                .collect(),
            delegate_to: None,
        }
    }

    pub fn lower_heritage_list(&mut self, parents: Vec<RawHeritage>) -> Vec<HeritageModel> {
        parents
            .into_iter()
            .map(|parent| self.lower_heritage(parent))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/heritage_tests.rs"]
mod heritage_tests;
