//! Menu construction.
//!
//! Turns the provider list into display groups:
//! 1. per provider, sort models by (group, name) and drop embedding models
//! 2. label each group with the provider's display name
//! 3. copy pinned items into a leading "Pinned" group
//! 4. drop empty groups, then flatten for index based navigation

use crate::i18n::{PINNED_GROUP_KEY, Translator};
use crate::model::{Model, Provider};

/// Key of the synthetic pinned group, also the suffix of pinned item keys
pub const PINNED_GROUP_ID: &str = "pinned";

/// One selectable row of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Render key, unique across the whole menu
    pub key: String,
    pub model: Model,
    /// Raw display name of the owning provider
    pub provider_name: String,
    pub pinned: bool,
    /// Already mentioned in the message being composed
    pub mentioned: bool,
}

impl MenuItem {
    pub fn uniq_id(&self) -> String {
        self.model.uniq_id()
    }

    /// Text shown for the item. Pinned models also name their provider.
    pub fn label(&self) -> String {
        if self.pinned {
            format!("{} | {}", self.model.name, self.provider_name)
        } else {
            self.model.name.clone()
        }
    }
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub key: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// A rendered line of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuRow<'a> {
    Group(&'a MenuGroup),
    /// `index` is the item's position in the flattened list
    Item { index: usize, item: &'a MenuItem },
}

/// The grouped menu and its flattened item list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    groups: Vec<MenuGroup>,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn build(
        providers: &[Provider],
        pinned: &super::PinnedModels,
        mentioned: &[Model],
        translator: &Translator,
    ) -> Self {
        let mut groups: Vec<MenuGroup> = providers
            .iter()
            .filter(|p| !p.models.is_empty())
            .filter_map(|provider| {
                let mut models: Vec<&Model> = provider.models.iter().collect();
                models.sort_by(|a, b| (&a.group, &a.name).cmp(&(&b.group, &b.name)));

                let items: Vec<MenuItem> = models
                    .into_iter()
                    .filter(|m| !m.is_embedding())
                    .map(|m| {
                        let key = m.uniq_id();
                        MenuItem {
                            pinned: pinned.contains(&key),
                            mentioned: mentioned.iter().any(|s| s.id == m.id),
                            key,
                            model: m.clone(),
                            provider_name: provider.name.clone(),
                        }
                    })
                    .collect();

                if items.is_empty() {
                    return None;
                }

                let label = if provider.is_system {
                    translator.provider_name(&provider.id)
                } else {
                    provider.name.clone()
                };

                Some(MenuGroup {
                    key: provider.id.clone(),
                    label,
                    items,
                })
            })
            .collect();

        if !pinned.is_empty() {
            let pinned_items: Vec<MenuItem> = groups
                .iter()
                .flat_map(|g| g.items.iter())
                .filter(|item| pinned.contains(&item.key))
                .map(|item| MenuItem {
                    key: format!("{}{}", item.key, PINNED_GROUP_ID),
                    ..item.clone()
                })
                .collect();

            if !pinned_items.is_empty() {
                groups.insert(
                    0,
                    MenuGroup {
                        key: PINNED_GROUP_ID.to_string(),
                        label: translator.t(PINNED_GROUP_KEY),
                        items: pinned_items,
                    },
                );
            }
        }

        groups.retain(|g| !g.items.is_empty());

        let items = groups.iter().flat_map(|g| g.items.iter().cloned()).collect();

        Self { groups, items }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Flattened items in display order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group headers and items in display order.
    pub fn rows(&self) -> Vec<MenuRow<'_>> {
        let mut rows = Vec::with_capacity(self.groups.len() + self.items.len());
        let mut index = 0;
        for group in &self.groups {
            rows.push(MenuRow::Group(group));
            for item in &group.items {
                rows.push(MenuRow::Item { index, item });
                index += 1;
            }
        }
        rows
    }

    pub fn row_count(&self) -> usize {
        self.groups.len() + self.items.len()
    }

    /// Row position of the item at flattened `index`.
    pub fn row_of_item(&self, index: usize) -> Option<usize> {
        let mut seen = 0;
        for (group_idx, group) in self.groups.iter().enumerate() {
            if index < seen + group.items.len() {
                // one header row per group up to and including this one
                return Some(index + group_idx + 1);
            }
            seen += group.items.len();
        }
        None
    }
}
