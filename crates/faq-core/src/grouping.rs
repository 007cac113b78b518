use faq_api_types::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<Item>,
}

/// Partition `items` by category, first-seen order; store order within a group.
pub fn group_items(items: &[Item]) -> Vec<CategoryGroup> {
    group_with_known(&[], items)
}

/// Like [`group_items`], but every `known` name yields a group even when no
/// item carries it. Known names come first, in the order given.
pub fn group_with_known(known: &[String], items: &[Item]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = known
        .iter()
        .map(|name| CategoryGroup {
            name: name.clone(),
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let name = item.category_name();
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                name: name.to_owned(),
                items: vec![item.clone()],
            }),
        }
    }

    groups
}

/// Ordered set of category names the client knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns `false` when the name was already known.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn observe(&mut self, items: &[Item]) {
        for item in items {
            self.insert(item.category_name());
        }
    }
}
