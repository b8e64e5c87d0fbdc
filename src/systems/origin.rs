use tracing::{debug, trace};

use crate::{
    components::{
        id::Identifier,
        item::{ItemKind, ItemSnapshot},
    },
    registry::mods::ModLookup,
};

/// True iff the stack's displayed mod name should come from the stack's
/// data (first enchantment, first effect, or linked book) rather than
/// from the mod that registered the item itself.
pub fn needs_origin_override(item: &ItemSnapshot) -> bool {
    item.kind == ItemKind::EnchantedBook
        || item.kind.carries_status_effects()
        || item.kind == ItemKind::GuidebookPatchouli
}

/// Id of the entry the stack should be attributed to. `None` when the
/// kind is outside the override set or the stack carries no usable data;
/// no registry access happens on either path.
pub fn resolve_origin_id(item: &ItemSnapshot) -> Option<Identifier> {
    if !needs_origin_override(item) {
        trace!("Kind {} keeps its own mod name", item.kind);
        return None;
    }

    match item.kind {
        ItemKind::EnchantedBook => item.enchantments.first().cloned(),
        kind if kind.carries_status_effects() => first_effect_origin(item),
        ItemKind::GuidebookPatchouli => embedded_book_id(item),
        // Kinds added to the override set without a dispatch arm resolve
        // to nothing instead of panicking.
        _ => None,
    }
}

/// Display name of the mod the stack's defining data comes from, looked
/// up by namespace in `mods`.
pub fn resolve_origin_name(item: &ItemSnapshot, mods: &impl ModLookup) -> Option<String> {
    let origin = resolve_origin_id(item)?;
    let namespace = origin.namespace();

    match mods.metadata(namespace) {
        Some(metadata) => Some(metadata.name.clone()),
        None => {
            debug!(
                "No metadata for namespace `{}`, falling back to the capitalized id",
                namespace
            );
            Some(capitalize(namespace))
        }
    }
}

fn first_effect_origin(item: &ItemSnapshot) -> Option<Identifier> {
    let effect = item.effects.first()?;

    if effect.is_default_namespace() {
        // A base-game effect on a modded carrier item (e.g. a breakable
        // potion of night vision) must attribute the stack to the item's
        // own mod, not to the base game.
        trace!(
            "First effect `{}` is base-game, attributing to item `{}`",
            effect, item.item_id
        );
        Some(item.item_id.clone())
    } else {
        Some(effect.clone())
    }
}

fn embedded_book_id(item: &ItemSnapshot) -> Option<Identifier> {
    let raw = item.book_id.as_deref()?;
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Ignoring malformed book id `{}`: {}", raw, e);
            None
        }
    }
}

fn capitalize(namespace: &str) -> String {
    let mut chars = namespace.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn capitalize_first_character_only() {
        assert_eq!(capitalize("extraalchemy"), "Extraalchemy");
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("f"), "F");
        assert_eq!(capitalize(""), "");
    }

    #[rstest]
    fn malformed_book_id_is_absent() {
        let mut book = ItemSnapshot::new(
            ItemKind::GuidebookPatchouli,
            Identifier::new("patchouli", "guide_book"),
        );
        book.book_id = Some("Not A Valid Id".to_string());
        assert_eq!(resolve_origin_id(&book), None);
    }

    #[rstest]
    fn bare_book_id_takes_default_namespace() {
        let mut book = ItemSnapshot::new(
            ItemKind::GuidebookPatchouli,
            Identifier::new("patchouli", "guide_book"),
        );
        book.book_id = Some("some_book".to_string());
        assert_eq!(
            resolve_origin_id(&book),
            Some(Identifier::new("minecraft", "some_book"))
        );
    }
}
