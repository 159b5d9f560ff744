pub mod journal_entry;
