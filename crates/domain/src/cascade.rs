use crate::shared::entity::ID;
use mongodb::bson::{Bson, Document};

/// A record whose deletion removes or detaches the records it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    Horse,
    Rider,
    Competition,
    Supplier,
}

/// Value a child field has to equal to be owned
#[derive(Debug, Clone, Copy)]
pub enum Match {
    /// Id of the record being deleted
    Owner,
    /// Id of the user owning the record being deleted
    User,
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeAction {
    Delete,
    /// Keep the child but null out the named reference
    Detach(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct OwnedChildren {
    pub collection: &'static str,
    pub selector: &'static [(&'static str, Match)],
    pub action: CascadeAction,
}

impl OwnedChildren {
    pub fn filter(&self, owner_id: &ID, user_id: &ID) -> Document {
        let mut filter = Document::new();
        for (field, value) in self.selector {
            let value = match value {
                Match::Owner => Bson::String(owner_id.as_string()),
                Match::User => Bson::String(user_id.as_string()),
                Match::Literal(literal) => Bson::String(literal.to_string()),
            };
            filter.insert(*field, value);
        }
        filter
    }
}

const fn delete(
    collection: &'static str,
    selector: &'static [(&'static str, Match)],
) -> OwnedChildren {
    OwnedChildren {
        collection,
        selector,
        action: CascadeAction::Delete,
    }
}

const fn detach(
    collection: &'static str,
    selector: &'static [(&'static str, Match)],
    field: &'static str,
) -> OwnedChildren {
    OwnedChildren {
        collection,
        selector,
        action: CascadeAction::Detach(field),
    }
}

const BY_USER: &[(&str, Match)] = &[("user_id", Match::Owner)];

const USER_CHILDREN: &[OwnedChildren] = &[
    delete("horses", BY_USER),
    delete("riders", BY_USER),
    delete("suppliers", BY_USER),
    delete("expenses", BY_USER),
    delete("rider_expenses", BY_USER),
    delete("competitions", BY_USER),
    delete("palmares", BY_USER),
    delete("reminders", BY_USER),
    delete("budgets", BY_USER),
    delete("horse_rider_associations", BY_USER),
];

const HORSE_CHILDREN: &[OwnedChildren] = &[
    delete(
        "expenses",
        &[("horse_id", Match::Owner), ("user_id", Match::User)],
    ),
    delete("horse_rider_associations", &[("horse_id", Match::Owner)]),
    delete(
        "reminders",
        &[
            ("entity_type", Match::Literal("horse")),
            ("entity_id", Match::Owner),
            ("user_id", Match::User),
        ],
    ),
    delete(
        "budgets",
        &[
            ("entity_type", Match::Literal("horse")),
            ("entity_id", Match::Owner),
        ],
    ),
    detach("palmares", &[("horse_id", Match::Owner)], "horse_id"),
];

const RIDER_CHILDREN: &[OwnedChildren] = &[
    delete(
        "rider_expenses",
        &[("rider_id", Match::Owner), ("user_id", Match::User)],
    ),
    delete("horse_rider_associations", &[("rider_id", Match::Owner)]),
    delete(
        "reminders",
        &[
            ("entity_type", Match::Literal("rider")),
            ("entity_id", Match::Owner),
            ("user_id", Match::User),
        ],
    ),
    delete(
        "budgets",
        &[
            ("entity_type", Match::Literal("rider")),
            ("entity_id", Match::Owner),
        ],
    ),
    delete(
        "palmares",
        &[("rider_id", Match::Owner), ("user_id", Match::User)],
    ),
];

const COMPETITION_CHILDREN: &[OwnedChildren] = &[delete(
    "reminders",
    &[("competition_id", Match::Owner), ("user_id", Match::User)],
)];

const SUPPLIER_CHILDREN: &[OwnedChildren] = &[
    detach(
        "expenses",
        &[("supplier_id", Match::Owner), ("user_id", Match::User)],
        "supplier_id",
    ),
    detach(
        "rider_expenses",
        &[("supplier_id", Match::Owner), ("user_id", Match::User)],
        "supplier_id",
    ),
];

pub fn owned_children(kind: OwnerKind) -> &'static [OwnedChildren] {
    match kind {
        OwnerKind::User => USER_CHILDREN,
        OwnerKind::Horse => HORSE_CHILDREN,
        OwnerKind::Rider => RIDER_CHILDREN,
        OwnerKind::Competition => COMPETITION_CHILDREN,
        OwnerKind::Supplier => SUPPLIER_CHILDREN,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn horse_children_filters() {
        let horse = ID::new();
        let user = ID::new();
        let children = owned_children(OwnerKind::Horse);

        let reminders = children
            .iter()
            .find(|c| c.collection == "reminders")
            .unwrap();
        assert_eq!(
            reminders.filter(&horse, &user),
            doc! {
                "entity_type": "horse",
                "entity_id": horse.as_string(),
                "user_id": user.as_string(),
            }
        );

        let palmares = children
            .iter()
            .find(|c| c.collection == "palmares")
            .unwrap();
        assert_eq!(palmares.action, CascadeAction::Detach("horse_id"));
    }

    #[test]
    fn user_owns_every_data_collection() {
        let user = ID::new();
        let children = owned_children(OwnerKind::User);
        assert_eq!(children.len(), 10);
        for child in children {
            assert_eq!(child.action, CascadeAction::Delete);
            assert_eq!(
                child.filter(&user, &user),
                doc! { "user_id": user.as_string() }
            );
        }
    }

    #[test]
    fn supplier_only_detaches() {
        assert!(owned_children(OwnerKind::Supplier)
            .iter()
            .all(|c| c.action == CascadeAction::Detach("supplier_id")));
    }
}
