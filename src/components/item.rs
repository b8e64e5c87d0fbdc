use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::components::id::Identifier;

/// Item id of Extra Alchemy's breakable potion.
pub const BREAKABLE_POTION_ITEM_ID: &str = "extraalchemy:breakable_potion";
/// Item id of Patchouli's guide book.
pub const GUIDE_BOOK_ITEM_ID: &str = "patchouli:guide_book";
/// Auxiliary-metadata key a guide book stores its linked book id under.
pub const GUIDE_BOOK_METADATA_KEY: &str = "patchouli:book";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    EnchantedBook,
    Potion,
    SplashPotion,
    LingeringPotion,
    TippedArrow,
    BreakableAlchemyPotion,
    GuidebookPatchouli,
    Other,
}

impl ItemKind {
    /// Kinds whose stacks carry a status effect list.
    pub fn carries_status_effects(self) -> bool {
        matches!(
            self,
            ItemKind::Potion
                | ItemKind::SplashPotion
                | ItemKind::LingeringPotion
                | ItemKind::TippedArrow
                | ItemKind::BreakableAlchemyPotion
        )
    }

    /// Classifies the kinds recognized by a concrete item id rather than
    /// an engine item type. Host adapters building snapshots check this
    /// before falling back to the engine's own item classification.
    pub fn from_special_item_id(item_id: &Identifier) -> Option<ItemKind> {
        match item_id.to_string().as_str() {
            BREAKABLE_POTION_ITEM_ID => Some(ItemKind::BreakableAlchemyPotion),
            GUIDE_BOOK_ITEM_ID => Some(ItemKind::GuidebookPatchouli),
            _ => None,
        }
    }
}

/// Immutable view of a single item stack, built by a host adapter for one
/// resolution call and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSnapshot {
    pub kind: ItemKind,
    /// The stack's own registered item id.
    pub item_id: Identifier,
    /// Enchantment ids in the order the host's enchantment collection
    /// yields them. That order is the host's to define; resolution takes
    /// index 0 as the representative entry.
    pub enchantments: Vec<Identifier>,
    /// Status effect ids, in the host's order.
    pub effects: Vec<Identifier>,
    /// Raw linked-book id from auxiliary metadata, if the stack has one.
    pub book_id: Option<String>,
}

impl ItemSnapshot {
    pub fn new(kind: ItemKind, item_id: Identifier) -> Self {
        Self {
            kind,
            item_id,
            enchantments: Vec::new(),
            effects: Vec::new(),
            book_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    fn status_effect_kinds() {
        let expected = [
            ItemKind::Potion,
            ItemKind::SplashPotion,
            ItemKind::LingeringPotion,
            ItemKind::TippedArrow,
            ItemKind::BreakableAlchemyPotion,
        ];
        for kind in ItemKind::iter() {
            assert_eq!(kind.carries_status_effects(), expected.contains(&kind));
        }
    }

    #[rstest]
    fn special_item_ids_classify() {
        assert_eq!(
            ItemKind::from_special_item_id(&Identifier::new("extraalchemy", "breakable_potion")),
            Some(ItemKind::BreakableAlchemyPotion)
        );
        assert_eq!(
            ItemKind::from_special_item_id(&Identifier::new("patchouli", "guide_book")),
            Some(ItemKind::GuidebookPatchouli)
        );
        assert_eq!(
            ItemKind::from_special_item_id(&Identifier::new("minecraft", "potion")),
            None
        );
    }

    #[rstest]
    fn snapshot_starts_empty() {
        let snapshot = ItemSnapshot::new(
            ItemKind::EnchantedBook,
            Identifier::new("minecraft", "enchanted_book"),
        );
        assert!(snapshot.enchantments.is_empty());
        assert!(snapshot.effects.is_empty());
        assert_eq!(snapshot.book_id, None);
    }
}
