pub mod items {
    use crate::components::{
        id::Identifier,
        item::{ItemKind, ItemSnapshot},
    };

    pub fn modded_enchanted_book() -> ItemSnapshot {
        ItemSnapshot {
            kind: ItemKind::EnchantedBook,
            item_id: Identifier::new("minecraft", "enchanted_book"),
            enchantments: vec![
                Identifier::new("botania", "mana_gush"),
                Identifier::new("minecraft", "unbreaking"),
            ],
            effects: Vec::new(),
            book_id: None,
        }
    }

    pub fn blank_enchanted_book() -> ItemSnapshot {
        ItemSnapshot::new(
            ItemKind::EnchantedBook,
            Identifier::new("minecraft", "enchanted_book"),
        )
    }

    /// Extra Alchemy's breakable potion carrying a base-game effect.
    pub fn breakable_night_vision_potion() -> ItemSnapshot {
        ItemSnapshot {
            kind: ItemKind::BreakableAlchemyPotion,
            item_id: Identifier::new("extraalchemy", "breakable_potion"),
            enchantments: Vec::new(),
            effects: vec![Identifier::new("minecraft", "night_vision")],
            book_id: None,
        }
    }

    pub fn modded_effect_potion() -> ItemSnapshot {
        ItemSnapshot {
            kind: ItemKind::Potion,
            item_id: Identifier::new("minecraft", "potion"),
            enchantments: Vec::new(),
            effects: vec![Identifier::new("extraalchemy", "recall")],
            book_id: None,
        }
    }

    pub fn guide_book() -> ItemSnapshot {
        ItemSnapshot {
            kind: ItemKind::GuidebookPatchouli,
            item_id: Identifier::new("patchouli", "guide_book"),
            enchantments: Vec::new(),
            effects: Vec::new(),
            book_id: Some("botania:lexicon".to_string()),
        }
    }

    pub fn blank_guide_book() -> ItemSnapshot {
        ItemSnapshot::new(
            ItemKind::GuidebookPatchouli,
            Identifier::new("patchouli", "guide_book"),
        )
    }

    pub fn stone() -> ItemSnapshot {
        ItemSnapshot::new(ItemKind::Other, Identifier::new("minecraft", "stone"))
    }
}

pub mod mods {
    use crate::registry::mods::{ModMetadata, ModRegistry};

    pub fn registry() -> ModRegistry {
        let mut registry = ModRegistry::new();
        for metadata in [
            ModMetadata {
                id: "botania".to_string(),
                name: "Botania".to_string(),
                version: Some("1.19.2-438".to_string()),
                description: None,
            },
            ModMetadata {
                id: "extraalchemy".to_string(),
                name: "Extra Alchemy".to_string(),
                version: Some("1.9.0".to_string()),
                description: None,
            },
            ModMetadata {
                id: "patchouli".to_string(),
                name: "Patchouli".to_string(),
                version: Some("1.19.2-77".to_string()),
                description: None,
            },
        ] {
            registry.register(metadata).unwrap();
        }
        registry
    }
}
