use crate::model::{Author, Dare, Truth};

use super::Store;

impl Store {
    /// The built-in sample deck. Seed records keep short literal ids so they
    /// are easy to reference from GraphiQL and the CLI.
    pub fn seeded() -> Self {
        let store = Store::new();

        store.authors.insert(Author {
            id: "1".into(),
            name: "Eduardo Landa".into(),
        });
        store.authors.insert(Author {
            id: "2".into(),
            name: "Gianlucci Minarelli".into(),
        });

        store.truths.insert(Truth {
            id: "1".into(),
            truth: "Do you like someone on this place?".into(),
            author_id: "1".into(),
        });
        store.truths.insert(Truth {
            id: "2".into(),
            truth: "Who would you date on this place?".into(),
            author_id: "1".into(),
        });

        store.dares.insert(Dare {
            id: "1".into(),
            dare: "Buy a drink for someone you like in the table".into(),
            author_id: "2".into(),
        });
        store.dares.insert(Dare {
            id: "2".into(),
            dare: "Drink a shot of alcohol".into(),
            author_id: "2".into(),
        });

        store
    }
}
