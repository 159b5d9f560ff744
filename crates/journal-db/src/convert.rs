use journal_entity::journal::journal_entry::Model as JournalEntryModel;
use journal_model::JournalEntry;

pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}

impl FromDbModel<JournalEntryModel> for JournalEntry {
    fn from_db_model(model: JournalEntryModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

impl FromModel<JournalEntry> for JournalEntryModel {
    fn from_model(entry: JournalEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            title: entry.title,
            content: entry.content,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_conversion() {
        let entry = JournalEntry {
            id: "id".to_owned(),
            title: "title".to_owned(),
            content: "content".to_owned(),
            user_id: "user".to_owned(),
            created_at: 42,
        };
        let model: JournalEntryModel = entry.clone().into_db_model();
        assert_eq!(model.user_id, "user");
        assert_eq!(model.created_at, 42);

        let back: JournalEntry = model.into_model();
        assert_eq!(back, entry);
    }
}
